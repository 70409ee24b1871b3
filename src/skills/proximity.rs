use eframe::egui::Pos2;

use crate::config::GraphConfig;
use crate::input::ReferencePoint;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphThresholds {
    pub focus_radius: f32,
    pub highlight_radius: f32,
}

impl Default for GraphThresholds {
    fn default() -> Self {
        Self {
            focus_radius: 100.0,
            highlight_radius: 150.0,
        }
    }
}

impl From<&GraphConfig> for GraphThresholds {
    fn from(config: &GraphConfig) -> Self {
        Self {
            focus_radius: config.focus_radius,
            highlight_radius: config.highlight_radius,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeProximity {
    pub distance: f32,
    pub focused: bool,
    pub highlights_links: bool,
}

impl NodeProximity {
    pub fn classify(position: Pos2, reference: ReferencePoint, thresholds: GraphThresholds) -> Self {
        let drawable = position.x.is_finite() && position.y.is_finite();
        let distance = if drawable && !reference.is_far() {
            reference.distance_to(position)
        } else {
            f32::INFINITY
        };

        Self {
            distance,
            focused: distance < thresholds.focus_radius,
            highlights_links: distance < thresholds.highlight_radius,
        }
    }
}

pub fn classify_nodes(
    layout: &[Pos2],
    reference: ReferencePoint,
    thresholds: GraphThresholds,
) -> Vec<NodeProximity> {
    layout
        .iter()
        .map(|&position| NodeProximity::classify(position, reference, thresholds))
        .collect()
}
