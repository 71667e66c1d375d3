//! # Graph Hierarchy
//!
//! `graph_hierarchy`将模型解码器产出的扁平计算图（动辄上万节点，如展开的
//! 重复层）折叠为按命名层级分组的树状视图：分析节点命名结构推断嵌套深度、
//! 检测重复"堆叠"子结构（如`encoder/layer.0/...`、`encoder/layer.1/...`），
//! 并在调用方选定的层级上收拢分组，使超大图也能被渲染层正常布局。
//!
//! 本 crate 不含模型格式解码、渲染布局与文件 I/O——输入是已物化的
//! [`flat::FlatGraph`]，输出是供渲染层消费的层级模型。

pub mod flat;
pub mod hierarchy;
pub mod utils;
