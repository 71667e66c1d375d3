/*
 * @Author       : 老董
 * @Date         : 2026-08-02
 * @Description  : 扁平图 IR（Flat Graph Intermediate Representation）
 *                 由模型格式解码器产出、供层级分组引擎消费的统一中间表示，
 *                 可序列化（serde + JSON），本 crate 视其为不可变输入
 */

use serde::{Deserialize, Serialize};

/// 扁平计算图：未分组、完全展开的算子节点序列
///
/// 由外部解码器（ONNX 等格式，不在本 crate 范围内）构造。
/// 节点顺序即解码顺序，分组时以此顺序为"首次出现"顺序。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlatGraph {
    /// 图名称（如 "train" / "test"）
    pub name: String,
    /// 所有算子节点（有序）
    pub nodes: Vec<FlatNode>,
    /// 图级输入值（有序）
    pub inputs: Vec<ValueRef>,
    /// 图级输出值（有序）
    pub outputs: Vec<ValueRef>,
}

/// 扁平图中的单个算子节点
///
/// `name` 为斜杠分隔的路径（如 `/encoder/layer.0/attn`），在图内唯一；
/// `op_type` 是不透明的算子类型描述（本引擎不理解其语义）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlatNode {
    /// 节点名称（斜杠分隔路径，图内唯一）
    pub name: String,
    /// 算子类型（不透明描述符）
    pub op_type: String,
    /// 输入端口（有序）
    pub inputs: Vec<Port>,
    /// 输出端口（有序）
    pub outputs: Vec<Port>,
}

/// 命名端口：持有一组有序的值引用（支持多值端口，如变长输入）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    /// 端口名称（如 "X"、"W"）
    pub name: String,
    /// 该端口引用的值（有序）
    pub values: Vec<ValueRef>,
}

/// 对命名值的弱引用（按名称查找，非所有权关系）
///
/// 多个节点的多个端口可引用同一个值名（扇出）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRef {
    /// 值名称
    pub name: String,
}

impl FlatGraph {
    /// 创建空图
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            nodes: Vec::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// 追加节点
    pub fn add_node(&mut self, node: FlatNode) {
        self.nodes.push(node);
    }

    /// 追加图级输入值
    pub fn add_input(&mut self, value_name: &str) {
        self.inputs.push(ValueRef::new(value_name));
    }

    /// 追加图级输出值
    pub fn add_output(&mut self, value_name: &str) {
        self.outputs.push(ValueRef::new(value_name));
    }

    /// 节点总数
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// 转换为 JSON 字符串
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// 从 JSON 字符串解析
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl FlatNode {
    /// 创建无端口的节点
    pub fn new(name: &str, op_type: &str) -> Self {
        Self {
            name: name.to_string(),
            op_type: op_type.to_string(),
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// 追加输入端口（链式）
    pub fn with_input(mut self, port: Port) -> Self {
        self.inputs.push(port);
        self
    }

    /// 追加输出端口（链式）
    pub fn with_output(mut self, port: Port) -> Self {
        self.outputs.push(port);
        self
    }
}

impl Port {
    /// 创建端口并按名称填充值引用
    pub fn new(name: &str, value_names: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            values: value_names.iter().map(|v| ValueRef::new(v)).collect(),
        }
    }
}

impl ValueRef {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}
