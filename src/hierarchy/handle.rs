/*
 * @Author       : 老董
 * @Date         : 2026-08-02
 * @Description  : HierarchyModel 句柄（用户级 API）
 */

use super::error::HierarchyError;
use super::inner::HierarchyGraph;
use super::types::HierarchyConfig;
use crate::flat::FlatGraph;

/// HierarchyModel - 多图层级模型句柄（面向 UI/渲染层的用户 API）
///
/// # 设计原则
/// - 一个源模型可含多个扁平图（如 train/test），逐图独立建模；
/// - 所有图共享同一个层级值：`set_level` 会下发到每个图
///   （各图按自身的 `max_hierarchy_level` 钳制）；
/// - 层级变化是低频的用户事件，每次变化后 `build` 全量重建。
#[derive(Debug)]
pub struct HierarchyModel {
    graphs: Vec<HierarchyGraph>,
    level: usize,
}

impl HierarchyModel {
    // ==================== 创建 ====================

    /// 以默认配置接管一组扁平图
    ///
    /// 任一图校验失败（畸形命名、重复值产出）则整体失败，
    /// 不产出部分可用的模型。
    pub fn new(flat_graphs: Vec<FlatGraph>) -> Result<Self, HierarchyError> {
        Self::with_config(flat_graphs, HierarchyConfig::default())
    }

    /// 以指定配置接管一组扁平图
    pub fn with_config(
        flat_graphs: Vec<FlatGraph>,
        config: HierarchyConfig,
    ) -> Result<Self, HierarchyError> {
        let graphs = flat_graphs
            .into_iter()
            .map(|flat| HierarchyGraph::with_config(flat, config.clone()))
            .collect::<Result<Vec<_>, _>>()?;

        // 共享层级取各图初始层级的最大值（单图时即该图的初始层级）
        let level = graphs.iter().map(HierarchyGraph::level).max().unwrap_or(1);
        Ok(Self { graphs, level })
    }

    // ==================== 层级控制 ====================

    /// 当前共享层级
    pub fn level(&self) -> usize {
        self.level
    }

    /// 设置共享层级并下发到所有图（各图钳制后标记待重建）
    pub fn set_level(&mut self, level: usize) {
        self.level = level;
        for graph in &mut self.graphs {
            graph.set_level(level);
        }
    }

    /// 重建所有图的分组与边界
    pub fn build(&mut self) {
        for graph in &mut self.graphs {
            graph.build();
        }
    }

    // ==================== 访问 ====================

    /// 所有层级图
    pub fn graphs(&self) -> &[HierarchyGraph] {
        &self.graphs
    }

    /// 所有层级图（可变，供调用方逐图控制）
    pub fn graphs_mut(&mut self) -> &mut [HierarchyGraph] {
        &mut self.graphs
    }
}
