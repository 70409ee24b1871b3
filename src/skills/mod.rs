mod graph;
mod parse;
mod proximity;
mod table;
mod topology;

use eframe::egui::Pos2;

use crate::input::{ReferencePoint, Viewport};
use crate::style::FrameStyle;

pub use graph::{GraphNode, SkillGraph, UnresolvedLink};
pub use parse::{SkillTableError, load_skill_table, parse_skill_table, validate_skill_table};
pub use proximity::{GraphThresholds, NodeProximity, classify_nodes};
pub use table::default_skill_nodes;
pub use topology::{GraphFrame, Pull, StyledLink, StyledNode, build_graph_frame};

pub fn graph_frame<'a>(
    graph: &'a SkillGraph,
    viewport: Viewport,
    reference: ReferencePoint,
    thresholds: GraphThresholds,
    pull: Pull,
    style: &FrameStyle,
    layout: &mut Vec<Pos2>,
) -> GraphFrame<'a> {
    graph.layout_into(viewport, layout);
    let proximity = classify_nodes(layout, reference, thresholds);
    build_graph_frame(graph, layout, &proximity, reference, style, pull)
}
