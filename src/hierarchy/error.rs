/*
 * @Author       : 老董
 * @Date         : 2026-08-02
 * @Description  : 层级分组引擎的错误类型
 */

use thiserror::Error;

/// 层级分组错误
///
/// 分析与分组在畸形输入上快速失败（中止当前图的构建），
/// 而不是产出部分正确的层级；调用方应保留上一次的层级状态。
///
/// 注意：层级越界不是错误——越界请求会被静默钳制到合法区间。
#[derive(Error, Debug, PartialEq, Eq)]
pub enum HierarchyError {
    #[error("节点名称「{name}」在去除前导分隔符后为空")]
    MalformedName { name: String },

    #[error("值「{value}」由多个节点产出：「{first}」与「{second}」")]
    DuplicateValueProducer {
        value: String,
        first: String,
        second: String,
    },
}
