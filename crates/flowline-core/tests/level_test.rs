use flowline_core::{FlowEdge, GraphModel, GraphSnapshot, OutputKind, PromptNode, assign_levels};

fn node(id: &str) -> PromptNode {
    PromptNode {
        id: id.to_string(),
        title: format!("Prompt {id}"),
        slug: None,
        description: None,
        content: format!("content of {id}"),
        output: OutputKind::Text,
        author_id: "author-1".to_string(),
        author_username: None,
        author_avatar: None,
        requires_media: false,
        required_media_type: None,
        required_media_count: None,
        preview_media_url: None,
    }
}

fn edge(source: &str, target: &str) -> FlowEdge {
    FlowEdge {
        source_id: source.to_string(),
        target_id: target.to_string(),
        label: "then".to_string(),
        connection_id: format!("conn-{source}-{target}"),
        order: 0,
    }
}

fn graph(nodes: &[&str], edges: &[(&str, &str)]) -> GraphModel {
    GraphModel::build(&GraphSnapshot {
        nodes: nodes.iter().map(|id| node(id)).collect(),
        edges: edges.iter().map(|(s, t)| edge(s, t)).collect(),
        current_id: None,
    })
    .unwrap()
}

#[test]
fn linear_chain_levels() {
    let g = graph(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);
    let levels = assign_levels(&g);

    assert_eq!(levels.level("a"), Some(0));
    assert_eq!(levels.level("b"), Some(1));
    assert_eq!(levels.level("c"), Some(2));
    assert!(!levels.has_cycle_anomaly);
}

#[test]
fn diamond_levels() {
    let g = graph(
        &["a", "b", "c", "d"],
        &[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")],
    );
    let levels = assign_levels(&g);

    assert_eq!(levels.level("a"), Some(0));
    assert_eq!(levels.level("b"), Some(1));
    assert_eq!(levels.level("c"), Some(1));
    assert_eq!(levels.level("d"), Some(2));
}

#[test]
fn skip_edge_takes_the_longest_path() {
    // a -> b -> c plus a shortcut a -> c: c must still sit below b.
    let g = graph(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("a", "c")]);
    let levels = assign_levels(&g);

    assert_eq!(levels.level("c"), Some(2));
}

#[test]
fn levels_strictly_increase_along_edges() {
    let edges = [
        ("a", "b"),
        ("a", "c"),
        ("b", "d"),
        ("c", "d"),
        ("c", "e"),
        ("d", "f"),
        ("e", "f"),
        ("g", "e"),
    ];
    let g = graph(&["a", "b", "c", "d", "e", "f", "g"], &edges);
    let levels = assign_levels(&g);

    for (s, t) in edges {
        assert!(
            levels.level(t).unwrap() > levels.level(s).unwrap(),
            "edge {s} -> {t} violates level monotonicity"
        );
    }
}

#[test]
fn repeated_runs_are_identical() {
    let g = graph(
        &["a", "b", "c", "d", "e"],
        &[("a", "c"), ("b", "c"), ("c", "d"), ("c", "e")],
    );
    let first = assign_levels(&g);
    let second = assign_levels(&g);

    for node in g.nodes() {
        assert_eq!(first.level(&node.id), second.level(&node.id));
    }
    assert_eq!(first.has_cycle_anomaly, second.has_cycle_anomaly);
}

#[test]
fn disconnected_components_level_independently() {
    let g = graph(&["a", "b", "x", "y"], &[("a", "b"), ("x", "y")]);
    let levels = assign_levels(&g);

    assert_eq!(levels.level("a"), Some(0));
    assert_eq!(levels.level("x"), Some(0));
    assert_eq!(levels.level("b"), Some(1));
    assert_eq!(levels.level("y"), Some(1));
}

#[test]
fn pure_cycle_falls_back_to_a_trailing_level() {
    let g = graph(&["a", "b"], &[("a", "b"), ("b", "a")]);
    let levels = assign_levels(&g);

    assert!(levels.has_cycle_anomaly);
    // Nothing ever reached in-degree 0, so the whole remainder lands on one synthetic level.
    assert_eq!(levels.level("a"), Some(0));
    assert_eq!(levels.level("b"), Some(0));
}

#[test]
fn cycle_beside_acyclic_part_trails_it() {
    let g = graph(
        &["a", "b", "c", "d"],
        &[("a", "b"), ("c", "d"), ("d", "c")],
    );
    let levels = assign_levels(&g);

    assert!(levels.has_cycle_anomaly);
    assert_eq!(levels.level("a"), Some(0));
    assert_eq!(levels.level("b"), Some(1));
    assert_eq!(levels.level("c"), Some(2));
    assert_eq!(levels.level("d"), Some(2));
    assert_eq!(levels.max_level(), 2);
}

#[test]
fn self_loop_is_a_cycle() {
    let g = graph(&["a", "b"], &[("a", "a"), ("a", "b")]);
    let levels = assign_levels(&g);

    assert!(levels.has_cycle_anomaly);
    assert_eq!(levels.level("a"), Some(0));
    // b is only reachable through the unresolved node, so it trails too.
    assert_eq!(levels.level("b"), Some(0));
}

#[test]
fn empty_graph_has_no_levels() {
    let g = graph(&[], &[]);
    let levels = assign_levels(&g);
    assert!(levels.is_empty());
    assert!(!levels.has_cycle_anomaly);
    assert_eq!(levels.max_level(), 0);
}
