/*
 * @Author       : 老董
 * @Date         : 2026-08-02
 * @Description  : HierarchyGraph 单图层级引擎的底层实现
 *
 * 各 impl 块分散在子模块中：
 * - core.rs: 构造 + 层级控制 + 重建
 * - analysis.rs: 命名结构分析（图分析器）
 * - level.rs: 层级策略
 * - builder.rs: 层级划分（含大图缓解）
 * - boundary.rs: 分组边界解析
 * - registry.rs: 值注册表
 * - describe.rs: 描述符导出 + 控制台摘要
 */

pub(in crate::hierarchy) mod analysis;
pub(in crate::hierarchy) mod boundary;
pub(in crate::hierarchy) mod builder;
mod core;
mod describe;
pub(in crate::hierarchy) mod level;
pub(in crate::hierarchy) mod registry;

pub use registry::{ValueProducer, ValueRegistry};

use super::types::{GraphAnalysis, HierarchyConfig, HierarchyGroup};
use crate::flat::FlatGraph;

/// 单个扁平图的层级引擎（核心实现）
///
/// 持有扁平图、一次性缓存的分析结果与值注册表，以及当前层级下的
/// 分组列表。层级变化后分组整体重建（无增量更新：分组隶属是
/// （扁平图, 层级）的纯确定性函数，重建结果完全可复现）。
#[derive(Debug)]
pub struct HierarchyGraph {
    /// 源扁平图（本引擎视其为不可变）
    pub(in crate::hierarchy) flat: FlatGraph,
    pub(in crate::hierarchy) config: HierarchyConfig,
    /// 命名结构分析结果（构造时计算一次）
    pub(in crate::hierarchy) analysis: GraphAnalysis,
    /// 值使用计数与产出映射的不可变快照（构造时计算一次）
    pub(in crate::hierarchy) registry: ValueRegistry,
    /// 当前层级，始终满足 `1 ≤ level ≤ max_hierarchy_level`
    pub(in crate::hierarchy) level: usize,
    /// 当前层级下的分组（`build` 产出）
    pub(in crate::hierarchy) groups: Vec<HierarchyGroup>,
    /// 层级已变化、分组尚未重建
    pub(in crate::hierarchy) stale: bool,
}
