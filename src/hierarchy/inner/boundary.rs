/*
 * @Author       : 老董
 * @Date         : 2026-08-02
 * @Description  : 边界解析器（Boundary Resolver）
 *                 为每个分组合成跨越组边界的输入/输出端口。
 *                 基于值注册表的不可变计数快照，各组独立推导
 *                 剩余计数视图，组间不共享可变状态
 */

use super::super::types::HierarchyGroup;
use super::registry::ValueRegistry;
use crate::flat::{FlatGraph, Port, ValueRef};
use std::collections::{HashMap, HashSet};

/// 解析所有分组的边界端口
///
/// - 组输入：成员输入端口中引用了组外产出值的端口（按值名去重聚合）；
/// - 组输出：成员输出端口中产出值在组内消费后仍有剩余使用计数
///   （即存在组外消费方或图级输出）的端口（按值名去重聚合）。
///
/// 两者均为逐组局部计算加一次全局预扫描，无需迭代求不动点。
pub(in crate::hierarchy) fn resolve_boundaries(
    groups: &mut [HierarchyGroup],
    flat: &FlatGraph,
    registry: &ValueRegistry,
) {
    for group in groups.iter_mut() {
        let (inputs, outputs) = resolve_group(group, flat, registry);
        group.inputs = inputs;
        group.outputs = outputs;
    }
}

fn resolve_group(
    group: &HierarchyGroup,
    flat: &FlatGraph,
    registry: &ValueRegistry,
) -> (Vec<Port>, Vec<Port>) {
    // 组内产出集合：成员输出端口引用的所有值名
    let mut local_productions: HashSet<&str> = HashSet::new();
    // 组内消费计数：成员输入端口对每个值的引用次数
    let mut local_uses: HashMap<&str, usize> = HashMap::new();

    for &node_index in &group.node_indices {
        let node = &flat.nodes[node_index];
        for output in &node.outputs {
            for value in &output.values {
                local_productions.insert(value.name.as_str());
            }
        }
        for input in &node.inputs {
            for value in &input.values {
                *local_uses.entry(value.name.as_str()).or_insert(0) += 1;
            }
        }
    }

    // 组输入：端口中由组外供给的值，每个值名只出现一次
    let mut inputs: Vec<Port> = Vec::new();
    let mut seen_inputs: HashSet<&str> = HashSet::new();
    for &node_index in &group.node_indices {
        for input in &flat.nodes[node_index].inputs {
            let external: Vec<ValueRef> = input
                .values
                .iter()
                .filter(|value| {
                    !local_productions.contains(value.name.as_str())
                        && seen_inputs.insert(value.name.as_str())
                })
                .cloned()
                .collect();
            if !external.is_empty() {
                inputs.push(Port {
                    name: input.name.clone(),
                    values: external,
                });
            }
        }
    }

    // 组输出：剩余计数 = 全局使用计数 − 组内消费计数；
    // 剩余为正说明组外（或图级输出）仍需要该值
    let mut outputs: Vec<Port> = Vec::new();
    let mut seen_outputs: HashSet<&str> = HashSet::new();
    for &node_index in &group.node_indices {
        for output in &flat.nodes[node_index].outputs {
            let escaping: Vec<ValueRef> = output
                .values
                .iter()
                .filter(|value| {
                    let consumed = local_uses.get(value.name.as_str()).copied().unwrap_or(0);
                    let total = registry.use_count(&value.name);
                    debug_assert!(
                        consumed <= total,
                        "值「{}」的组内消费计数超过全局计数",
                        value.name
                    );
                    total.saturating_sub(consumed) > 0 && seen_outputs.insert(value.name.as_str())
                })
                .cloned()
                .collect();
            if !escaping.is_empty() {
                outputs.push(Port {
                    name: output.name.clone(),
                    values: escaping,
                });
            }
        }
    }

    (inputs, outputs)
}
