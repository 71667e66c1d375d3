/*
 * @Author       : 老董
 * @Date         : 2026-08-02
 * @Description  : 层级分组引擎的类型定义
 */

use crate::flat::Port;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// 路径分隔符（扁平图节点名称的层级分隔）
pub const PATH_DELIMITER: char = '/';

/// 层级分组配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HierarchyConfig {
    /// 大图阈值：预计分组数超过该值时启用"仅展开第 0 个堆叠"的缓解规则，
    /// 同时节点总数超过该值时默认层级退到堆叠层级
    pub large_graph_threshold: usize,
    /// 是否在导出/摘要中隐藏 Constant 类型的分组（仅影响展示，不影响内部划分）
    pub hide_constants: bool,
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            large_graph_threshold: 2000,
            hide_constants: false,
        }
    }
}

/// 堆叠命名模板：`{prefix}.{i}{suffix}`
///
/// 由名称分析发现，例如 `encoder/layer.3/attn` 产生
/// `prefix = "encoder/layer"`、`suffix = "/attn"`，索引段为 `layer.3`。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StackPattern {
    /// 索引段之前的路径（含索引段的字面前缀，如 `encoder/layer`）
    pub prefix: String,
    /// 索引段之后的路径（以分隔符开头，如 `/attn`）
    pub suffix: String,
}

impl StackPattern {
    /// 以具体索引实例化模板（如 `with_index(0)` → `encoder/layer.0/attn`）
    pub fn with_index(&self, index: usize) -> String {
        format!("{}.{}{}", self.prefix, index, self.suffix)
    }
}

impl fmt::Display for StackPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{{i}}{}", self.prefix, self.suffix)
    }
}

/// 堆叠结构信息（仅当图中检测到堆叠命名时存在）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackInfo {
    /// 堆叠所在的层级深度（含索引段的前缀段数）
    pub hierarchy_level: usize,
    /// 堆叠重复次数（1 + 观测到的最大索引）
    pub layer_num: usize,
}

/// 图分析结果（每个扁平图只计算一次并缓存）
#[derive(Debug, Clone)]
pub struct GraphAnalysis {
    /// 全图最大层级深度（所有节点名称段数的最大值）
    pub max_hierarchy_level: usize,
    /// 堆叠结构信息；None 表示未检测到堆叠
    pub stack: Option<StackInfo>,
    /// 检测到的堆叠命名模板集合
    pub stack_node_patterns: HashSet<StackPattern>,
    /// 从未匹配堆叠模板的节点名称（去除前导分隔符后），分组时永不截断
    pub non_stack_node_names: HashSet<String>,
}

/// 分组类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupType {
    /// 单节点分组：沿用该节点的算子类型
    Operator(String),
    /// 多节点分组：以层级名标记的合成类型
    Composite(String),
}

impl GroupType {
    /// 类型名称（渲染层显示用）
    pub fn name(&self) -> &str {
        match self {
            Self::Operator(op) | Self::Composite(op) => op,
        }
    }
}

/// 层级分组：同一名称前缀下吸收的一组扁平节点
///
/// 成员以扫描扁平图时的首次出现顺序排列；`inputs`/`outputs`
/// 为边界解析合成的聚合端口（跨越分组边界的值）。
#[derive(Debug, Clone)]
pub struct HierarchyGroup {
    /// 分组名称（名称路径前缀）
    pub hierarchy_name: String,
    /// 成员节点在扁平图 `nodes` 中的下标（插入序）
    pub node_indices: Vec<usize>,
    /// 合成输入端口：引用了组外产出值的端口聚合
    pub inputs: Vec<Port>,
    /// 合成输出端口：产出值仍被组外消费的端口聚合
    pub outputs: Vec<Port>,
    /// 分组类型
    pub group_type: GroupType,
}

impl HierarchyGroup {
    /// 成员节点数
    pub fn size(&self) -> usize {
        self.node_indices.len()
    }
}
