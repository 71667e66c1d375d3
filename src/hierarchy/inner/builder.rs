/*
 * @Author       : 老董
 * @Date         : 2026-08-02
 * @Description  : 层级构建器（Hierarchy Builder）
 *                 按截断名称路径将扁平节点划分到层级分组，
 *                 大图时启用"仅展开第 0 个堆叠实例"的缓解规则
 */

use super::super::types::{GraphAnalysis, GroupType, HierarchyConfig, HierarchyGroup, PATH_DELIMITER};
use super::analysis::strip_leading_delimiter;
use crate::flat::FlatGraph;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

/// 计算节点在指定层级下的分组名称
///
/// 从未匹配堆叠模板的节点永不截断：其分组名就是（去除前导分隔符后的）
/// 完整名称，与层级无关。其余节点保留前 `min(段数, level)` 个路径段。
pub(in crate::hierarchy) fn hierarchy_name(
    node_name: &str,
    level: usize,
    analysis: &GraphAnalysis,
) -> String {
    let stripped = strip_leading_delimiter(node_name);
    if analysis.non_stack_node_names.contains(stripped) {
        return stripped.to_string();
    }

    let segments: Vec<&str> = stripped.split(PATH_DELIMITER).collect();
    let keep = segments.len().min(level);
    segments[..keep].join("/")
}

/// 将扁平图划分为层级分组（不含边界解析）
///
/// 分组键为分组名称；分组顺序 = 名称首次出现顺序，
/// 组内成员顺序 = 扁平图扫描顺序。所有节点恰好落入一个分组（划分性质）。
pub(in crate::hierarchy) fn build_groups(
    flat: &FlatGraph,
    level: usize,
    analysis: &GraphAnalysis,
    config: &HierarchyConfig,
) -> Vec<HierarchyGroup> {
    // 第一遍：用统一层级预估分组数，判断是否触发大图缓解
    let mut preview: HashSet<String> = HashSet::new();
    for node in &flat.nodes {
        preview.insert(hierarchy_name(&node.name, level, analysis));
    }
    let large_graph_detected =
        preview.len() > config.large_graph_threshold && analysis.stack.is_some();

    // 缓解规则：只有第 0 个堆叠实例的节点按请求层级展开，
    // 其余节点（含后续重复实例）折叠到堆叠层级，
    // 使分组总数与堆叠重复次数无关
    let stack_0_names: HashSet<String> = if large_graph_detected {
        analysis
            .stack_node_patterns
            .iter()
            .map(|pattern| pattern.with_index(0))
            .collect()
    } else {
        HashSet::new()
    };
    if large_graph_detected {
        info!(
            level,
            preview_group_count = preview.len(),
            threshold = config.large_graph_threshold,
            "图「{}」分组数超过大图阈值，仅展开第 0 个堆叠实例", flat.name
        );
    }

    let mut group_index_by_name: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<HierarchyGroup> = Vec::new();

    for (node_index, node) in flat.nodes.iter().enumerate() {
        let name = if large_graph_detected {
            let stripped = strip_leading_delimiter(&node.name);
            if stack_0_names.contains(stripped) {
                hierarchy_name(&node.name, level, analysis)
            } else {
                // 已在 large_graph_detected 中保证堆叠存在
                let stack_level = analysis.stack.as_ref().map_or(level, |s| s.hierarchy_level);
                hierarchy_name(&node.name, stack_level, analysis)
            }
        } else {
            hierarchy_name(&node.name, level, analysis)
        };

        let index = *group_index_by_name.entry(name.clone()).or_insert_with(|| {
            groups.push(HierarchyGroup {
                hierarchy_name: name,
                node_indices: Vec::new(),
                inputs: Vec::new(),
                outputs: Vec::new(),
                group_type: GroupType::Composite(String::new()),
            });
            groups.len() - 1
        });
        groups[index].node_indices.push(node_index);
    }

    // 定型分组类型：单节点沿用算子类型，多节点用层级名作合成类型
    for group in &mut groups {
        group.group_type = match group.node_indices.as_slice() {
            [only] => GroupType::Operator(flat.nodes[*only].op_type.clone()),
            _ => GroupType::Composite(group.hierarchy_name.clone()),
        };
    }

    debug!(
        level,
        group_count = groups.len(),
        "图「{}」完成层级划分", flat.name
    );

    groups
}
