/*
 * @Author       : 老董
 * @Date         : 2026-08-02
 * @Description  : 图分析器（Graph Analyzer）
 *                 扫描节点命名结构：推断最大层级深度、检测堆叠命名模板
 *                 及其所在层级。基于路径段显式分词，不使用正则
 */

use super::super::error::HierarchyError;
use super::super::types::{GraphAnalysis, StackInfo, StackPattern, PATH_DELIMITER};
use crate::flat::FlatGraph;
use std::collections::HashSet;
use tracing::info;

/// 路径段中的堆叠索引匹配结果
struct StackSegmentMatch {
    /// 索引段在路径段序列中的下标
    segment_index: usize,
    /// 索引段的字面前缀（如 `layer.3` 中的 `layer`）
    literal: String,
    /// 重复实例索引（如 `layer.3` 中的 `3`）
    index: usize,
}

/// 去除一个前导路径分隔符（避免产生空的首段）
pub(in crate::hierarchy) fn strip_leading_delimiter(name: &str) -> &str {
    name.strip_prefix(PATH_DELIMITER).unwrap_or(name)
}

/// 在路径段序列中寻找最后一个形如 `<字面量>.<数字>` 的索引段
///
/// 约束：
/// - 字面量与数字部分均非空，数字部分为纯十进制；
/// - 索引段之后至少还有一个路径段（堆叠实例内部必有子结构）。
fn match_stack_segments(segments: &[&str]) -> Option<StackSegmentMatch> {
    let mut matched = None;
    // 末段不参与匹配：索引段必须有后继段（split 至少产出一段）
    for (segment_index, segment) in segments.iter().enumerate().take(segments.len() - 1) {
        let Some((literal, digits)) = segment.rsplit_once('.') else {
            continue;
        };
        if literal.is_empty() || digits.is_empty() {
            continue;
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }
        let Ok(index) = digits.parse::<usize>() else {
            continue;
        };
        matched = Some(StackSegmentMatch {
            segment_index,
            literal: literal.to_string(),
            index,
        });
    }
    matched
}

/// 分析扁平图的命名结构
///
/// 每个扁平图只需调用一次，结果缓存在层级图上（见 `HierarchyGraph`）。
///
/// # 错误
/// 节点名称去除前导分隔符后为空时返回 [`HierarchyError::MalformedName`]。
pub(in crate::hierarchy) fn analyze(flat: &FlatGraph) -> Result<GraphAnalysis, HierarchyError> {
    let mut max_hierarchy_level = 0;
    let mut max_layer_index: Option<usize> = None;
    let mut stack_hierarchy_level: Option<usize> = None;
    let mut stack_node_patterns: HashSet<StackPattern> = HashSet::new();
    let mut non_stack_node_names: HashSet<String> = HashSet::new();

    for node in &flat.nodes {
        let stripped = strip_leading_delimiter(&node.name);
        if stripped.is_empty() {
            return Err(HierarchyError::MalformedName {
                name: node.name.clone(),
            });
        }

        let segments: Vec<&str> = stripped.split(PATH_DELIMITER).collect();
        max_hierarchy_level = max_hierarchy_level.max(segments.len());

        match match_stack_segments(&segments) {
            Some(matched) => {
                max_layer_index = Some(
                    max_layer_index
                        .map_or(matched.index, |current| current.max(matched.index)),
                );
                // 堆叠层级 = 含索引段在内的前缀深度
                stack_hierarchy_level = Some(matched.segment_index + 1);

                let mut prefix = segments[..matched.segment_index].join("/");
                if !prefix.is_empty() {
                    prefix.push(PATH_DELIMITER);
                }
                prefix.push_str(&matched.literal);
                let suffix: String = segments[matched.segment_index + 1..]
                    .iter()
                    .map(|segment| format!("/{segment}"))
                    .collect();
                stack_node_patterns.insert(StackPattern { prefix, suffix });
            }
            None => {
                non_stack_node_names.insert(stripped.to_string());
            }
        }
    }

    let stack = match (stack_hierarchy_level, max_layer_index) {
        (Some(hierarchy_level), Some(max_index)) => Some(StackInfo {
            hierarchy_level,
            layer_num: max_index + 1,
        }),
        _ => None,
    };

    match &stack {
        Some(stack_info) => info!(
            max_hierarchy_level,
            stack_hierarchy_level = stack_info.hierarchy_level,
            stack_layer_num = stack_info.layer_num,
            "图「{}」分析完成", flat.name
        ),
        None => info!(
            max_hierarchy_level,
            "图「{}」分析完成（未检测到堆叠结构）", flat.name
        ),
    }

    Ok(GraphAnalysis {
        max_hierarchy_level,
        stack,
        stack_node_patterns,
        non_stack_node_names,
    })
}
