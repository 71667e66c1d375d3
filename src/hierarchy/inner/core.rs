/*
 * @Author       : 老董
 * @Date         : 2026-08-02
 * @Description  : HierarchyGraph 构造、层级控制与重建
 */

use super::super::error::HierarchyError;
use super::super::types::{GraphAnalysis, HierarchyConfig, HierarchyGroup};
use super::registry::ValueRegistry;
use super::{analysis, boundary, builder, level};
use super::HierarchyGraph;
use crate::flat::{FlatGraph, ValueRef};
use tracing::debug;

impl HierarchyGraph {
    // ========== 构造 ==========

    /// 以默认配置接管一个扁平图
    ///
    /// 构造时完成全部校验与一次性分析（命名结构 + 值注册表），
    /// 并按层级策略选定初始层级；分组留待 [`build`](Self::build)。
    ///
    /// # 错误
    /// 畸形节点名或重复值产出时返回错误，不产出部分正确的层级。
    pub fn new(flat: FlatGraph) -> Result<Self, HierarchyError> {
        Self::with_config(flat, HierarchyConfig::default())
    }

    /// 以指定配置接管一个扁平图
    pub fn with_config(flat: FlatGraph, config: HierarchyConfig) -> Result<Self, HierarchyError> {
        let analysis = analysis::analyze(&flat)?;
        let registry = ValueRegistry::from_graph(&flat)?;
        let level = level::initial_level(&analysis, flat.node_count(), &config);

        Ok(Self {
            flat,
            config,
            analysis,
            registry,
            level,
            groups: Vec::new(),
            stale: true,
        })
    }

    // ========== 层级控制 ==========

    /// 当前层级
    pub fn level(&self) -> usize {
        self.level
    }

    /// 设置层级（钳制到 `[1, max_hierarchy_level]`）并标记待重建
    ///
    /// 越界请求被静默纠正，返回实际生效的层级。
    pub fn set_level(&mut self, requested: usize) -> usize {
        self.level = level::clamp_level(requested, &self.analysis);
        self.stale = true;
        self.level
    }

    /// 分组是否落后于当前层级（`set_level` 后、`build` 前为 true）
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    // ========== 重建 ==========

    /// 在当前层级下重建分组与边界
    ///
    /// 全量重建：划分 + 边界解析，复杂度 O(节点数 + 边数)。
    /// 输入在构造时已校验，本操作必定成功且幂等。
    pub fn build(&mut self) {
        let mut groups =
            builder::build_groups(&self.flat, self.level, &self.analysis, &self.config);
        boundary::resolve_boundaries(&mut groups, &self.flat, &self.registry);

        debug!(
            level = self.level,
            group_count = groups.len(),
            "图「{}」层级重建完成", self.flat.name
        );
        self.groups = groups;
        self.stale = false;
    }

    // ========== 访问器 ==========

    /// 源图名称
    pub fn name(&self) -> &str {
        &self.flat.name
    }

    /// 源扁平图
    pub fn flat(&self) -> &FlatGraph {
        &self.flat
    }

    /// 当前分组列表（`build` 前为空）
    pub fn groups(&self) -> &[HierarchyGroup] {
        &self.groups
    }

    /// 当前分组数
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// 图级输入（原样透传自扁平图）
    pub fn inputs(&self) -> &[ValueRef] {
        &self.flat.inputs
    }

    /// 图级输出（原样透传自扁平图）
    pub fn outputs(&self) -> &[ValueRef] {
        &self.flat.outputs
    }

    // ========== 只读诊断 ==========

    /// 缓存的分析结果
    pub fn analysis(&self) -> &GraphAnalysis {
        &self.analysis
    }

    /// 值注册表快照
    pub fn registry(&self) -> &ValueRegistry {
        &self.registry
    }

    /// 全图最大层级深度
    pub fn max_hierarchy_level(&self) -> usize {
        self.analysis.max_hierarchy_level
    }

    /// 堆叠所在层级（未检测到堆叠时为 None）
    pub fn stack_hierarchy_level(&self) -> Option<usize> {
        self.analysis.stack.map(|stack| stack.hierarchy_level)
    }

    /// 堆叠重复次数（未检测到堆叠时为 None）
    pub fn stack_layer_num(&self) -> Option<usize> {
        self.analysis.stack.map(|stack| stack.layer_num)
    }

    /// 生效配置
    pub fn config(&self) -> &HierarchyConfig {
        &self.config
    }
}
