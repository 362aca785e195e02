use flowline_core::{
    FlowEdge, GraphModel, GraphSnapshot, MediaKind, OutputKind, PromptNode, assign_levels,
    synthesize_ports,
};
use flowline_render::layout::layout_graph;
use flowline_render::theme::Theme;

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

fn graph(nodes: Vec<PromptNode>, edges: &[(&str, &str)]) -> GraphModel {
    GraphModel::build(&GraphSnapshot {
        nodes,
        edges: edges.iter().map(|(s, t)| edge(s, t)).collect(),
        current_id: None,
    })
    .unwrap()
}

fn layout_at(g: &GraphModel, width: f64) -> flowline_render::model::LayoutModel {
    let theme = Theme::light();
    let levels = assign_levels(g);
    let ports = synthesize_ports(g, &levels);
    layout_graph(g, &levels, &ports, width, &theme)
}

#[test]
fn single_node_is_horizontally_centered() {
    let g = graph(vec![node("a")], &[]);
    let layout = layout_at(&g, 800.0);

    let pos = layout.position("a").unwrap();
    assert_eq!(pos.x, 400.0);
    assert_eq!(pos.width, 200.0);
    assert_eq!(pos.height, 40.0);
    // Top margin only; this graph has no input ports.
    assert_eq!(pos.y, 40.0);
}

#[test]
fn diamond_row_is_centered_side_by_side() {
    let g = graph(
        vec![node("a"), node("b"), node("c"), node("d")],
        &[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")],
    );
    let layout = layout_at(&g, 800.0);

    let b = layout.position("b").unwrap();
    let c = layout.position("c").unwrap();
    // Row width 2*200 + 60, centered on 400.
    assert_eq!(b.x, 270.0);
    assert_eq!(c.x, 530.0);
    assert_eq!(b.y, c.y);

    let a = layout.position("a").unwrap();
    let d = layout.position("d").unwrap();
    assert_eq!(a.y, 40.0);
    assert_eq!(b.y, 180.0);
    assert_eq!(d.y, 320.0);
    assert_eq!(a.x, 400.0);
    assert_eq!(d.x, 400.0);
}

#[test]
fn preview_nodes_are_taller() {
    let mut preview = node("p");
    preview.output = OutputKind::Image;
    preview.preview_media_url = Some("https://cdn.example/p.jpg".to_string());
    let g = graph(vec![node("a"), preview], &[("a", "p")]);
    let layout = layout_at(&g, 800.0);

    let plain = layout.position("a").unwrap();
    let tall = layout.position("p").unwrap();
    assert_eq!(plain.height, 40.0);
    assert_eq!(tall.height, 104.0);
}

#[test]
fn stale_preview_url_on_text_output_does_not_grow_the_node() {
    let mut stale = node("a");
    stale.preview_media_url = Some("https://cdn.example/stale.jpg".to_string());
    let g = graph(vec![stale], &[]);
    let layout = layout_at(&g, 800.0);

    assert_eq!(layout.position("a").unwrap().height, 40.0);
}

#[test]
fn long_titles_wrap_and_grow_the_box() {
    let mut wordy = node("w");
    wordy.title = "An extremely long workflow step title that certainly wraps".to_string();
    let g = graph(vec![wordy], &[]);
    let layout = layout_at(&g, 800.0);

    let pos = layout.position("w").unwrap();
    assert!(pos.height > 40.0);
}

#[test]
fn level_height_is_shared_but_node_height_is_not() {
    let mut preview = node("p");
    preview.output = OutputKind::Image;
    preview.preview_media_url = Some("https://cdn.example/p.jpg".to_string());
    // p (tall) and b (plain) share level 1.
    let g = graph(
        vec![node("a"), preview, node("b"), node("z")],
        &[("a", "p"), ("a", "b"), ("p", "z"), ("b", "z")],
    );
    let layout = layout_at(&g, 800.0);

    let p = layout.position("p").unwrap();
    let b = layout.position("b").unwrap();
    assert_eq!(p.y, b.y);
    assert_eq!(p.height, 104.0);
    assert_eq!(b.height, 40.0);

    // The next level is spaced off the tallest box in this one.
    let z = layout.position("z").unwrap();
    let level1_top = p.y - p.height / 2.0;
    assert_eq!(z.y - z.height / 2.0, level1_top + 104.0 + 100.0);
}

#[test]
fn output_port_sits_directly_beneath_its_leaf() {
    let g = graph(vec![node("a"), node("b")], &[("a", "b")]);
    let layout = layout_at(&g, 800.0);

    let leaf = layout.position("b").unwrap();
    let port = layout.position("output-b").unwrap();
    assert_eq!(port.x, leaf.x);
    assert_eq!(port.y, leaf.bottom() + 100.0 + 14.0);
    assert_eq!(port.width, 56.0);
    assert_eq!(port.height, 28.0);
}

#[test]
fn input_port_row_is_centered_above_its_root() {
    let mut root = node("r");
    root.requires_media = true;
    root.required_media_type = Some(MediaKind::Image);
    root.required_media_count = Some(2);
    let g = graph(vec![root, node("x")], &[("r", "x")]);
    let layout = layout_at(&g, 800.0);

    let r = layout.position("r").unwrap();
    // The node stack shifts down one port band when input ports exist.
    assert_eq!(r.y, 168.0);

    let p0 = layout.position("input-r-0").unwrap();
    let p1 = layout.position("input-r-1").unwrap();
    assert_eq!(p0.y, p1.y);
    assert_eq!(p0.y, r.top() - 100.0 - 14.0);
    // Sub-row (2*56 + 12 wide) centered on the root's x.
    assert_eq!((p0.x + p1.x) / 2.0, r.x);
    assert_eq!(p1.x - p0.x, 56.0 + 12.0);
    // The reserved band means the row tops out exactly at the canvas margin.
    assert_eq!(p0.top(), 20.0);
}

#[test]
fn narrow_containers_use_the_narrow_tier() {
    let g = graph(vec![node("a")], &[]);
    let layout = layout_at(&g, 400.0);

    let pos = layout.position("a").unwrap();
    assert_eq!(pos.width, 360.0);
    assert_eq!(pos.height, 36.0);
    assert_eq!(layout.width, 400.0);
}

#[test]
fn degenerate_container_width_falls_back() {
    let g = graph(vec![node("a")], &[]);
    let layout = layout_at(&g, 0.0);
    assert_eq!(layout.width, 600.0);

    let nan = layout_at(&g, f64::NAN);
    assert_eq!(nan.width, 600.0);
}

#[test]
fn canvas_height_covers_everything_plus_margin() {
    let g = graph(vec![node("a"), node("b")], &[("a", "b")]);
    let layout = layout_at(&g, 800.0);

    let port = layout.position("output-b").unwrap();
    assert_eq!(layout.height, port.bottom() + 20.0);
}

#[test]
fn empty_graph_still_produces_a_canvas() {
    let g = graph(vec![], &[]);
    let layout = layout_at(&g, 800.0);
    assert!(layout.positions.is_empty());
    assert_eq!(layout.height, 40.0);
}

#[test]
fn layout_is_deterministic() {
    let mut root = node("r");
    root.requires_media = true;
    root.required_media_type = Some(MediaKind::Image);
    root.required_media_count = Some(5);
    let g = graph(
        vec![root, node("a"), node("b"), node("c")],
        &[("r", "a"), ("r", "b"), ("a", "c"), ("b", "c")],
    );

    let first = layout_at(&g, 720.0);
    let second = layout_at(&g, 720.0);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
