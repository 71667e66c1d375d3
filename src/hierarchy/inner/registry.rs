/*
 * @Author       : 老董
 * @Date         : 2026-08-02
 * @Description  : 值注册表（Value Registry）
 *                 跟踪命名值的消费引用计数与产出位置，供边界解析读取；
 *                 同名值出现多个产出节点时快速失败
 */

use super::super::error::HierarchyError;
use crate::flat::FlatGraph;
use std::collections::HashMap;

/// 值的产出位置（节点下标 + 输出端口下标）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueProducer {
    /// 产出节点在扁平图 `nodes` 中的下标
    pub node_index: usize,
    /// 产出端口在该节点 `outputs` 中的下标
    pub port_index: usize,
}

/// 值注册表：全图一次性预计算的不可变快照
///
/// 使用计数 = 引用该值的消费方总数（所有节点的输入端口 + 图级输出）。
/// 边界解析基于此快照为每个分组独立推导"剩余计数"视图，
/// 解析过程不回写本结构（见边界解析模块）。
#[derive(Debug, Clone)]
pub struct ValueRegistry {
    use_counts: HashMap<String, usize>,
    producers: HashMap<String, ValueProducer>,
}

impl ValueRegistry {
    /// 扫描扁平图，建立使用计数与产出映射
    ///
    /// # 错误
    /// 同一个值名由多个节点输出产出时返回
    /// [`HierarchyError::DuplicateValueProducer`]（中止该图的构建）。
    pub fn from_graph(flat: &FlatGraph) -> Result<Self, HierarchyError> {
        let mut use_counts: HashMap<String, usize> = HashMap::new();
        let mut producers: HashMap<String, ValueProducer> = HashMap::new();

        for (node_index, node) in flat.nodes.iter().enumerate() {
            for input in &node.inputs {
                for value in &input.values {
                    *use_counts.entry(value.name.clone()).or_insert(0) += 1;
                }
            }
            for (port_index, output) in node.outputs.iter().enumerate() {
                for value in &output.values {
                    let producer = ValueProducer {
                        node_index,
                        port_index,
                    };
                    if let Some(existing) = producers.insert(value.name.clone(), producer) {
                        return Err(HierarchyError::DuplicateValueProducer {
                            value: value.name.clone(),
                            first: flat.nodes[existing.node_index].name.clone(),
                            second: node.name.clone(),
                        });
                    }
                }
            }
        }

        // 图级输出也算一次消费（下游外部世界仍需要该值）
        for output in &flat.outputs {
            *use_counts.entry(output.name.clone()).or_insert(0) += 1;
        }

        Ok(Self {
            use_counts,
            producers,
        })
    }

    /// 值的全局使用计数（未注册的值视为 0）
    pub fn use_count(&self, value_name: &str) -> usize {
        self.use_counts.get(value_name).copied().unwrap_or(0)
    }

    /// 值的产出位置（图级输入或未知值返回 None）
    pub fn producer(&self, value_name: &str) -> Option<ValueProducer> {
        self.producers.get(value_name).copied()
    }

    /// 注册的消费值总数
    pub fn tracked_value_count(&self) -> usize {
        self.use_counts.len()
    }
}
