//! Animated "global network" backdrop for the hero section.
//!
//! Nodes and edges are generated once from a seed and emitted as inline SVG. Motion is
//! pure CSS, so browsers asking for reduced motion get a static picture.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;
use std::fmt::Write;

pub const TOTAL_NODES: usize = 110;
pub const DEFAULT_SEED: u64 = 0x5ED_CE11;

const WIDTH: f64 = 1600.0;
const HEIGHT: f64 = 900.0;
/// Nodes are pushed below the navigation bar
const TOP_OFFSET: f64 = 120.0;
const SAFE_TOP_RATIO: f64 = 0.22;

const EDGE_PROBABILITY: f64 = 0.7;
const ACTIVE_EDGE_PROBABILITY: f64 = 0.1;

/// Financial hubs in normalized coordinates
pub const MAJOR_HUBS: [(&str, f64, f64); 10] = [
    ("New York", 0.26, 0.35),
    ("London", 0.48, 0.32),
    ("Dubai", 0.58, 0.45),
    ("Hong Kong", 0.72, 0.38),
    ("Singapore", 0.75, 0.52),
    ("Bangkok", 0.74, 0.48),
    ("São Paulo", 0.35, 0.55),
    ("Frankfurt", 0.52, 0.28),
    ("Tokyo", 0.85, 0.42),
    ("Los Angeles", 0.15, 0.45),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub glow: f64,
    pub pulse_phase: f64,
    pub hub: Option<&'static str>,
}

impl Node {
    pub fn is_hub(&self) -> bool {
        self.hub.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub active: bool,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NetworkMap {
    pub width: f64,
    pub height: f64,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl NetworkMap {
    pub fn generate(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let nodes = generate_nodes(&mut rng);
        let edges = generate_edges(&nodes, &mut rng);
        Self {
            width: WIDTH,
            height: HEIGHT,
            nodes,
            edges,
        }
    }

    pub fn to_svg(&self) -> String {
        let mut svg = String::with_capacity(32 * 1024);
        let _ = write!(
            svg,
            r#"<svg class="network-map" viewBox="0 0 {w} {h}" preserveAspectRatio="xMidYMid slice" aria-hidden="true" focusable="false">"#,
            w = self.width,
            h = self.height
        );
        svg.push_str(SVG_STYLE);

        svg.push_str(r#"<g class="edges">"#);
        for edge in &self.edges {
            let (a, b) = (&self.nodes[edge.from], &self.nodes[edge.to]);
            let _ = write!(
                svg,
                r#"<line class="{class}" x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke-opacity="{:.2}" stroke-width="{}"/>"#,
                a.x,
                a.y,
                b.x,
                b.y,
                edge.opacity,
                if edge.active { 1.0 } else { 0.5 },
                class = if edge.active { "edge edge-active" } else { "edge" },
            );
        }
        svg.push_str("</g><g class=\"nodes\">");

        for node in &self.nodes {
            let delay = node.pulse_phase / TAU * 3.0;
            let _ = write!(
                svg,
                r#"<g class="{class}" style="animation-delay:-{delay:.2}s"><circle r="{glow_r:.1}" cx="{x:.1}" cy="{y:.1}" fill="url(#node-glow)" opacity="{glow:.2}"/><circle r="{core_r:.2}" cx="{x:.1}" cy="{y:.1}" fill-opacity="{core:.2}"/>"#,
                class = if node.is_hub() { "node hub" } else { "node" },
                glow_r = node.radius * 4.0,
                core_r = node.radius * 0.5,
                x = node.x,
                y = node.y,
                glow = node.glow,
                core = (node.glow * 0.8).min(1.0),
            );
            if let Some(name) = node.hub {
                let _ = write!(svg, "<title>{}</title>", name);
            }
            svg.push_str("</g>");
        }
        svg.push_str("</g></svg>");
        svg
    }
}

impl Default for NetworkMap {
    fn default() -> Self {
        Self::generate(DEFAULT_SEED)
    }
}

const SVG_STYLE: &str = r#"<defs><radialGradient id="node-glow"><stop offset="0" stop-color="rgb(226,30,44)" stop-opacity="0.3"/><stop offset="0.5" stop-color="rgb(226,30,44)" stop-opacity="0.1"/><stop offset="1" stop-color="rgb(226,30,44)" stop-opacity="0"/></radialGradient></defs><style>.network-map .edge{stroke:rgb(226,30,44)}.network-map .edge-active{stroke-dasharray:6 10;animation:edge-flow 4s linear infinite}.network-map .node circle:last-child{fill:rgb(226,30,44)}.network-map .node{animation:node-pulse 3s ease-in-out infinite}@keyframes node-pulse{0%,100%{opacity:1}50%{opacity:.94}}@keyframes edge-flow{to{stroke-dashoffset:-32}}@media (prefers-reduced-motion:reduce){.network-map .node,.network-map .edge-active{animation:none}}</style>"#;

fn place_y(y: f64, rng: &mut StdRng) -> f64 {
    let safe_top = HEIGHT * SAFE_TOP_RATIO;
    if y < safe_top {
        safe_top + rng.random::<f64>() * 24.0
    } else {
        y
    }
}

fn generate_nodes(rng: &mut StdRng) -> Vec<Node> {
    let mut nodes = Vec::with_capacity(TOTAL_NODES);

    for (name, hx, hy) in MAJOR_HUBS {
        let y = place_y(hy * HEIGHT + TOP_OFFSET, rng);
        nodes.push(Node {
            x: hx * WIDTH,
            y,
            radius: 2.5,
            glow: rng.random_range(0.8..1.2),
            pulse_phase: rng.random_range(0.0..TAU),
            hub: Some(name),
        });
    }

    while nodes.len() < TOTAL_NODES {
        let x = rng.random::<f64>() * WIDTH;
        let raw_y = rng.random::<f64>() * HEIGHT + TOP_OFFSET;
        let y = place_y(raw_y, rng);
        nodes.push(Node {
            x,
            y,
            radius: rng.random_range(1.0..2.5),
            glow: rng.random_range(0.3..0.8),
            pulse_phase: rng.random_range(0.0..TAU),
            hub: None,
        });
    }
    nodes
}

/// Each node links to its nearest neighbours, four for hubs and two otherwise,
/// keeping each candidate link with a fixed probability.
fn generate_edges(nodes: &[Node], rng: &mut StdRng) -> Vec<Edge> {
    let mut edges = Vec::new();
    for (i, node) in nodes.iter().enumerate() {
        let mut neighbours: Vec<(usize, f64)> = nodes
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(j, other)| (j, (other.x - node.x).hypot(other.y - node.y)))
            .collect();
        neighbours.sort_by(|a, b| a.1.total_cmp(&b.1));

        let limit = if node.is_hub() { 4 } else { 2 };
        for (j, _) in neighbours.into_iter().take(limit) {
            if rng.random_bool(EDGE_PROBABILITY) {
                edges.push(Edge {
                    from: i,
                    to: j,
                    active: rng.random_bool(ACTIVE_EDGE_PROBABILITY),
                    opacity: rng.random_range(0.1..0.3),
                });
            }
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hubs_come_first_and_node_count_is_fixed() {
        let map = NetworkMap::generate(7);
        assert_eq!(map.nodes.len(), TOTAL_NODES);
        assert!(map.nodes[..10].iter().all(|n| n.is_hub() && n.radius == 2.5));
        assert!(map.nodes[10..].iter().all(|n| !n.is_hub()));
        assert_eq!(map.nodes[5].hub, Some("Bangkok"));

        let safe_top = HEIGHT * SAFE_TOP_RATIO;
        for node in &map.nodes {
            assert!(node.y >= safe_top);
            if node.is_hub() {
                assert!((0.8..1.2).contains(&node.glow));
            } else {
                assert!((1.0..2.5).contains(&node.radius));
                assert!((0.3..0.8).contains(&node.glow));
            }
        }
    }

    #[test]
    fn edges_respect_neighbour_limits() {
        let map = NetworkMap::generate(42);
        assert!(!map.edges.is_empty());
        for (i, node) in map.nodes.iter().enumerate() {
            let outgoing = map.edges.iter().filter(|e| e.from == i).count();
            assert!(outgoing <= if node.is_hub() { 4 } else { 2 });
        }
        assert!(map.edges.iter().all(|e| e.from != e.to));
        assert!(map.edges.iter().all(|e| (0.1..0.3).contains(&e.opacity)));
    }

    #[test]
    fn same_seed_same_map() {
        assert_eq!(NetworkMap::generate(1), NetworkMap::generate(1));
        assert_ne!(NetworkMap::generate(1), NetworkMap::generate(2));
    }

    #[test]
    fn svg_disables_animation_for_reduced_motion() {
        let svg = NetworkMap::default().to_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("prefers-reduced-motion:reduce"));
        assert!(svg.contains("<title>Tokyo</title>"));
        assert_eq!(svg.matches("<line").count(), NetworkMap::default().edges.len());
    }
}
