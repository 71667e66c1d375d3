/*
 * @Author       : 老董
 * @Date         : 2026-08-02
 * @Description  : 层级图描述符（Hierarchy Descriptor）
 *                 分组结果的可序列化描述，供渲染/布局层或外部工具消费
 */

use serde::{Deserialize, Serialize};

/// 层级图的可序列化描述
///
/// `nodes` 为分组节点序列（已应用展示级过滤，如隐藏 Constant），
/// `inputs`/`outputs` 为源图的图级输入输出，原样透传。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HierarchyDescriptor {
    /// 格式版本（用于向后兼容）
    pub version: String,
    /// 图名称
    pub name: String,
    /// 产出本描述时生效的层级
    pub level: usize,
    /// 分组节点描述（有序）
    pub nodes: Vec<GroupDescriptor>,
    /// 图级输入值名
    pub inputs: Vec<String>,
    /// 图级输出值名
    pub outputs: Vec<String>,
}

/// 单个分组节点的描述
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupDescriptor {
    /// 分组名称（名称路径前缀）
    pub name: String,
    /// 分组类型名（单节点为算子类型，多节点为层级名）
    pub group_type: String,
    /// 成员节点数
    pub size: usize,
    /// 合成输入端口
    pub inputs: Vec<PortDescriptor>,
    /// 合成输出端口
    pub outputs: Vec<PortDescriptor>,
}

/// 端口描述（端口名 + 值名序列）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortDescriptor {
    pub name: String,
    pub values: Vec<String>,
}

impl HierarchyDescriptor {
    /// 转换为 JSON 字符串
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// 从 JSON 字符串解析
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
