use eframe::egui::{Color32, Pos2, Vec2, vec2};

use crate::config::GraphConfig;
use crate::input::ReferencePoint;
use crate::style::{FrameStyle, with_opacity};

use super::graph::SkillGraph;
use super::proximity::NodeProximity;

const LINK_WIDTH_HIGHLIGHTED: f32 = 2.0;
const LINK_WIDTH_BASE: f32 = 1.0;
const LINK_BASE_OPACITY: f32 = 0.08;
const NODE_RADIUS_FOCUSED: f32 = 6.0;
const NODE_RADIUS_BASE: f32 = 4.0;
const NODE_BASE_OPACITY: f32 = 0.3;
const LABEL_SIZE_FOCUSED: f32 = 14.0;
const LABEL_SIZE_BASE: f32 = 10.0;
const LABEL_BASE_OPACITY: f32 = 0.4;
const LABEL_OFFSET: f32 = 15.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pull {
    pub radius: f32,
    pub strength: f32,
}

impl Pull {
    pub fn offset(self, proximity: NodeProximity, from: Pos2, reference: ReferencePoint) -> Vec2 {
        if self.strength <= 0.0 || reference.is_far() || !(proximity.distance < self.radius) {
            return Vec2::ZERO;
        }
        (reference.pos() - from) * self.strength
    }
}

impl From<&GraphConfig> for Pull {
    fn from(config: &GraphConfig) -> Self {
        Self {
            radius: config.pull_radius,
            strength: config.pull_strength,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StyledLink {
    pub source: usize,
    pub target: usize,
    pub from: Pos2,
    pub to: Pos2,
    pub color: Color32,
    pub width: f32,
    pub highlighted: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StyledNode<'a> {
    pub index: usize,
    pub label: &'a str,
    pub center: Pos2,
    pub radius: f32,
    pub fill: Color32,
    pub label_pos: Pos2,
    pub label_color: Color32,
    pub label_size: f32,
    pub bold: bool,
    pub focused: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphFrame<'a> {
    pub links: Vec<StyledLink>,
    pub nodes: Vec<StyledNode<'a>>,
}

impl GraphFrame<'_> {
    pub fn highlighted_links(&self) -> usize {
        self.links.iter().filter(|link| link.highlighted).count()
    }

    pub fn focused_nodes(&self) -> usize {
        self.nodes.iter().filter(|node| node.focused).count()
    }
}

pub fn build_graph_frame<'a>(
    graph: &'a SkillGraph,
    layout: &[Pos2],
    proximity: &[NodeProximity],
    reference: ReferencePoint,
    style: &FrameStyle,
    pull: Pull,
) -> GraphFrame<'a> {
    let offsets = layout
        .iter()
        .zip(proximity)
        .map(|(&position, &node)| pull.offset(node, position, reference))
        .collect::<Vec<_>>();

    let link_base = with_opacity(style.neutral(), LINK_BASE_OPACITY);
    let mut links = Vec::with_capacity(graph.edges().len());
    for &(source, target) in graph.edges() {
        let (Some(&from), Some(&to), Some(&source_proximity)) =
            (layout.get(source), layout.get(target), proximity.get(source))
        else {
            continue;
        };
        if !is_drawable(from) || !is_drawable(to) {
            continue;
        }

        let highlighted = source_proximity.highlights_links;
        links.push(StyledLink {
            source,
            target,
            from: from + offsets[source],
            to,
            color: if highlighted { style.accent } else { link_base },
            width: if highlighted {
                LINK_WIDTH_HIGHLIGHTED
            } else {
                LINK_WIDTH_BASE
            },
            highlighted,
        });
    }

    let node_base = with_opacity(style.neutral(), NODE_BASE_OPACITY);
    let label_base = with_opacity(style.neutral(), LABEL_BASE_OPACITY);
    let mut nodes = Vec::with_capacity(graph.len());
    for (index, node) in graph.nodes().iter().enumerate() {
        let (Some(&position), Some(&node_proximity)) = (layout.get(index), proximity.get(index))
        else {
            continue;
        };
        if !is_drawable(position) {
            continue;
        }

        let center = position + offsets[index];
        let focused = node_proximity.focused;
        nodes.push(StyledNode {
            index,
            label: node.name.as_str(),
            center,
            radius: if focused {
                NODE_RADIUS_FOCUSED
            } else {
                NODE_RADIUS_BASE
            },
            fill: if focused { style.accent } else { node_base },
            label_pos: center - vec2(0.0, LABEL_OFFSET),
            label_color: if focused { style.text() } else { label_base },
            label_size: if focused {
                LABEL_SIZE_FOCUSED
            } else {
                LABEL_SIZE_BASE
            },
            bold: focused,
            focused,
        });
    }

    GraphFrame { links, nodes }
}

fn is_drawable(position: Pos2) -> bool {
    position.x.is_finite() && position.y.is_finite()
}
