/*
 * @Author       : 老董
 * @Date         : 2026-08-02
 * @Description  : 层级策略（Level Policy）
 *                 根据分析结果与节点规模选择初始层级；外部请求的层级
 *                 一律钳制到合法区间（静默纠正，不报错）
 */

use super::super::types::{GraphAnalysis, HierarchyConfig};

/// 选择初始层级
///
/// 默认取 `max_hierarchy_level`（完全展开，每个唯一叶路径一个分组）。
/// 节点数超过大图阈值且检测到堆叠时，退到 `stack_hierarchy_level`
/// （每个堆叠实例折叠为一个分组），以限制渲染分组数量。
/// 未检测到堆叠时无论规模大小都使用 `max_hierarchy_level`。
pub(in crate::hierarchy) fn initial_level(
    analysis: &GraphAnalysis,
    node_count: usize,
    config: &HierarchyConfig,
) -> usize {
    if node_count > config.large_graph_threshold {
        if let Some(stack) = &analysis.stack {
            return stack.hierarchy_level;
        }
    }
    clamp_level(analysis.max_hierarchy_level, analysis)
}

/// 将请求层级钳制到 `[1, max_hierarchy_level]`
///
/// 空图的 `max_hierarchy_level` 为 0，此时下界优先（结果为 1）。
pub(in crate::hierarchy) fn clamp_level(requested: usize, analysis: &GraphAnalysis) -> usize {
    requested.clamp(1, analysis.max_hierarchy_level.max(1))
}
