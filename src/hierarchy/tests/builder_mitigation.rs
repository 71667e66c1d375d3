use crate::flat::{FlatGraph, FlatNode};
use crate::hierarchy::inner::analysis::analyze;
use crate::hierarchy::inner::builder::build_groups;
use crate::hierarchy::HierarchyConfig;

fn stacked_graph(layer_count: usize) -> FlatGraph {
    let mut graph = FlatGraph::new("stacked");
    for layer in 0..layer_count {
        for op in ["attn", "mlp"] {
            graph.add_node(FlatNode::new(
                &format!("/encoder/layer.{layer}/{op}"),
                "Op",
            ));
        }
    }
    graph
}

#[test]
fn test_mitigation_expands_only_stack_0() {
    // 规格场景：分组数被判定超限后，仅第 0 个堆叠实例按请求层级展开，
    // 其余实例折叠到堆叠层级
    let graph = stacked_graph(2);
    let analysis = analyze(&graph).unwrap();
    let config = HierarchyConfig {
        large_graph_threshold: 3,
        ..Default::default()
    };

    // level = 3 时预估 4 组 > 阈值 3，触发缓解
    let groups = build_groups(&graph, 3, &analysis, &config);
    let names: Vec<&str> = groups.iter().map(|g| g.hierarchy_name.as_str()).collect();

    assert_eq!(
        names,
        vec!["encoder/layer.0/attn", "encoder/layer.0/mlp", "encoder/layer.1"]
    );
    // layer.1 的两个节点折叠为一组
    assert_eq!(groups[2].node_indices, vec![2, 3]);
}

#[test]
fn test_mitigation_bounds_group_count_by_repeat_count() {
    // 缓解后分组总数 = 第 0 实例展开的组数 + 其余实例每个一组，
    // 与堆叠重复次数线性相关而与请求层级无关
    let graph = stacked_graph(6);
    let analysis = analyze(&graph).unwrap();
    let config = HierarchyConfig {
        large_graph_threshold: 4,
        ..Default::default()
    };

    let groups = build_groups(&graph, 3, &analysis, &config);
    // 2（layer.0 展开）+ 5（layer.1..5 各一组）
    assert_eq!(groups.len(), 7);
}

#[test]
fn test_mitigation_preserves_partition() {
    let graph = stacked_graph(6);
    let analysis = analyze(&graph).unwrap();
    let config = HierarchyConfig {
        large_graph_threshold: 4,
        ..Default::default()
    };

    let groups = build_groups(&graph, 3, &analysis, &config);
    let mut all_indices: Vec<usize> = groups
        .iter()
        .flat_map(|g| g.node_indices.iter().copied())
        .collect();
    all_indices.sort_unstable();
    assert_eq!(all_indices, (0..graph.node_count()).collect::<Vec<_>>());
}

#[test]
fn test_no_mitigation_below_threshold() {
    let graph = stacked_graph(2);
    let analysis = analyze(&graph).unwrap();

    // 默认阈值（2000）远未触达：正常展开
    let groups = build_groups(&graph, 3, &analysis, &HierarchyConfig::default());
    assert_eq!(groups.len(), 4);
}

#[test]
fn test_no_mitigation_without_stack() {
    // 无堆叠的图即使超限也无从缓解：按请求层级分组
    let mut graph = FlatGraph::new("plain");
    for name in ["/a/x", "/b/y", "/c/z"] {
        graph.add_node(FlatNode::new(name, "Op"));
    }
    let analysis = analyze(&graph).unwrap();
    let config = HierarchyConfig {
        large_graph_threshold: 1,
        ..Default::default()
    };

    let groups = build_groups(&graph, 2, &analysis, &config);
    assert_eq!(groups.len(), 3);
}
