//! # 常用接口模块
//!
//! 本模块提供测试用的断言宏等通用设施
