/*
 * @Author       : 老董
 * @Date         : 2026-08-02
 * @Description  : Hierarchy 模块：层级分组引擎的核心实现
 *
 * 公开 API：
 * - `HierarchyModel`: 用户级句柄（多图共享层级）
 * - `HierarchyGraph`: 单图底层引擎（高级用户使用）
 * - `HierarchyError`: 错误类型
 */

mod descriptor;
mod error;
mod handle;
mod inner;
mod types;

pub use descriptor::{GroupDescriptor, HierarchyDescriptor, PortDescriptor};
pub use error::HierarchyError;
pub use handle::HierarchyModel;
pub use inner::{HierarchyGraph, ValueProducer, ValueRegistry};
pub use types::{
    GraphAnalysis, GroupType, HierarchyConfig, HierarchyGroup, StackInfo, StackPattern,
    PATH_DELIMITER,
};

#[cfg(test)]
mod tests;
