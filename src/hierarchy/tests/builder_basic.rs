use crate::flat::{FlatGraph, FlatNode};
use crate::hierarchy::inner::analysis::analyze;
use crate::hierarchy::inner::builder::{build_groups, hierarchy_name};
use crate::hierarchy::{GroupType, HierarchyConfig};

fn encoder_graph() -> FlatGraph {
    let mut graph = FlatGraph::new("encoder");
    for name in [
        "/encoder/layer.0/attn",
        "/encoder/layer.0/mlp",
        "/encoder/layer.1/attn",
        "/encoder/layer.1/mlp",
    ] {
        graph.add_node(FlatNode::new(name, "Op"));
    }
    graph
}

#[test]
fn test_hierarchy_name_truncation() {
    let graph = encoder_graph();
    let analysis = analyze(&graph).unwrap();

    // 1. 层级小于段数：保留前 level 段
    assert_eq!(
        hierarchy_name("/encoder/layer.0/attn", 2, &analysis),
        "encoder/layer.0"
    );
    assert_eq!(hierarchy_name("/encoder/layer.0/attn", 1, &analysis), "encoder");

    // 2. 层级不小于段数：完整名称（去除前导分隔符）
    assert_eq!(
        hierarchy_name("/encoder/layer.0/attn", 9, &analysis),
        "encoder/layer.0/attn"
    );
}

#[test]
fn test_hierarchy_name_non_stack_passthrough() {
    let mut graph = encoder_graph();
    graph.add_node(FlatNode::new("/pooler/dense/Gemm", "Gemm"));
    let analysis = analyze(&graph).unwrap();

    // 从未匹配堆叠模板的名称在任意层级下都不截断
    for level in 1..=4 {
        assert_eq!(
            hierarchy_name("/pooler/dense/Gemm", level, &analysis),
            "pooler/dense/Gemm"
        );
    }
}

#[test]
fn test_build_groups_level_2() {
    // 规格场景：4 节点 2 重复层，level = 2 → 每个堆叠实例一个分组
    let graph = encoder_graph();
    let analysis = analyze(&graph).unwrap();
    let groups = build_groups(&graph, 2, &analysis, &HierarchyConfig::default());

    assert_eq!(groups.len(), 2);
    // 分组顺序 = 名称首次出现顺序
    assert_eq!(groups[0].hierarchy_name, "encoder/layer.0");
    assert_eq!(groups[1].hierarchy_name, "encoder/layer.1");
    // 组内成员顺序 = 扁平图扫描顺序
    assert_eq!(groups[0].node_indices, vec![0, 1]);
    assert_eq!(groups[1].node_indices, vec![2, 3]);
}

#[test]
fn test_build_groups_partition_property() {
    // 划分性质：任意层级下所有节点恰好出现一次
    let graph = encoder_graph();
    let analysis = analyze(&graph).unwrap();
    let config = HierarchyConfig::default();

    for level in 1..=3 {
        let groups = build_groups(&graph, level, &analysis, &config);
        let mut all_indices: Vec<usize> = groups
            .iter()
            .flat_map(|g| g.node_indices.iter().copied())
            .collect();
        all_indices.sort_unstable();
        assert_eq!(all_indices, vec![0, 1, 2, 3], "level {level} 划分破损");
    }
}

#[test]
fn test_build_groups_monotonic_collapse() {
    // 单调折叠：层级越低分组数不增
    let graph = encoder_graph();
    let analysis = analyze(&graph).unwrap();
    let config = HierarchyConfig::default();

    let counts: Vec<usize> = (1..=3)
        .map(|level| build_groups(&graph, level, &analysis, &config).len())
        .collect();
    assert_eq!(counts, vec![1, 2, 4]);
    assert!(counts.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn test_build_groups_group_type() {
    let mut graph = encoder_graph();
    graph.add_node(FlatNode::new("/head/Gemm", "Gemm"));
    let analysis = analyze(&graph).unwrap();
    let groups = build_groups(&graph, 2, &analysis, &HierarchyConfig::default());

    // 多节点分组：合成类型 = 层级名
    assert_eq!(
        groups[0].group_type,
        GroupType::Composite("encoder/layer.0".to_string())
    );
    // 单节点分组：沿用算子类型（head/Gemm 未匹配堆叠模板，永不截断）
    let head = groups
        .iter()
        .find(|g| g.hierarchy_name == "head/Gemm")
        .unwrap();
    assert_eq!(head.group_type, GroupType::Operator("Gemm".to_string()));
    assert_eq!(head.size(), 1);
}
