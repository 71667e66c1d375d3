/*
 * @Author       : 老董
 * @Date         : 2026-08-02
 * @Description  : HierarchyGraph 描述符导出与控制台摘要
 */

use super::super::descriptor::{GroupDescriptor, HierarchyDescriptor, PortDescriptor};
use super::super::types::HierarchyGroup;
use super::HierarchyGraph;
use crate::flat::Port;

impl HierarchyGraph {
    // ========== 描述符导出（describe）==========

    /// 导出当前分组结果的描述符（用于序列化、渲染对接、调试）
    ///
    /// 配置了 `hide_constants` 时，类型名含 `Constant` 的分组不进入
    /// 描述符的节点列表（仅影响展示；内部划分不变，划分性质仍然成立）。
    ///
    /// # 示例
    /// ```ignore
    /// hierarchy_graph.build();
    /// let descriptor = hierarchy_graph.describe();
    /// println!("{}", descriptor.to_json().unwrap());
    /// ```
    pub fn describe(&self) -> HierarchyDescriptor {
        let nodes = self
            .groups
            .iter()
            .filter(|group| !self.is_hidden(group))
            .map(|group| GroupDescriptor {
                name: group.hierarchy_name.clone(),
                group_type: group.group_type.name().to_string(),
                size: group.size(),
                inputs: group.inputs.iter().map(Self::port_descriptor).collect(),
                outputs: group.outputs.iter().map(Self::port_descriptor).collect(),
            })
            .collect();

        HierarchyDescriptor {
            version: env!("CARGO_PKG_VERSION").to_string(),
            name: self.flat.name.clone(),
            level: self.level,
            nodes,
            inputs: self.flat.inputs.iter().map(|v| v.name.clone()).collect(),
            outputs: self.flat.outputs.iter().map(|v| v.name.clone()).collect(),
        }
    }

    fn is_hidden(&self, group: &HierarchyGroup) -> bool {
        self.config.hide_constants && group.group_type.name().contains("Constant")
    }

    fn port_descriptor(port: &Port) -> PortDescriptor {
        PortDescriptor {
            name: port.name.clone(),
            values: port.values.iter().map(|v| v.name.clone()).collect(),
        }
    }

    // ========== 控制台摘要（summary）==========

    /// 打印分组摘要表格
    pub fn summary(&self) {
        println!("{}", self.summary_string());
    }

    /// 返回分组摘要字符串（Unicode 文本表格，用于控制台输出）
    ///
    /// 逐行列出分组名称、类型、成员数与边界端口数，
    /// 末尾附分组总数与节点总数。
    pub fn summary_string(&self) -> String {
        let desc = self.describe();

        let name_width = desc
            .nodes
            .iter()
            .map(|g| Self::display_width(&g.name))
            .max()
            .unwrap_or(8)
            .max(8);
        let type_width = desc
            .nodes
            .iter()
            .map(|g| Self::display_width(&g.group_type))
            .max()
            .unwrap_or(8)
            .max(8);

        let mut output = String::new();
        output.push_str(&format!(
            "│ {:<name_w$} │ {:<type_w$} │ {:>6} │ {:>6} │ {:>6} │\n",
            "分组名称",
            "类型",
            "成员数",
            "输入",
            "输出",
            name_w = name_width,
            type_w = type_width,
        ));
        output.push_str(&format!(
            "├{}┼{}┼{}┼{}┼{}┤\n",
            "─".repeat(name_width + 2),
            "─".repeat(type_width + 2),
            "─".repeat(8),
            "─".repeat(8),
            "─".repeat(8),
        ));

        for group in &desc.nodes {
            output.push_str(&format!(
                "│ {:<name_w$} │ {:<type_w$} │ {:>6} │ {:>6} │ {:>6} │\n",
                group.name,
                group.group_type,
                group.size,
                group.inputs.len(),
                group.outputs.len(),
                name_w = name_width,
                type_w = type_width,
            ));
        }

        output.push_str(&format!(
            "\n层级: {}  分组总数: {}  节点总数: {}\n",
            desc.level,
            desc.nodes.len(),
            self.flat.node_count(),
        ));

        output
    }

    /// 计算字符串显示宽度（考虑中文字符）
    fn display_width(s: &str) -> usize {
        s.chars().map(|c| if c.is_ascii() { 1 } else { 2 }).sum()
    }
}
