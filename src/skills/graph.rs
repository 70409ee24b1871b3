use std::collections::HashMap;

use eframe::egui::Pos2;
use serde::Deserialize;
use tracing::warn;

use crate::input::Viewport;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphNode {
    pub name: String,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub related: Vec<String>,
}

impl GraphNode {
    pub fn new(name: &str, x: f32, y: f32, related: &[&str]) -> Self {
        Self {
            name: name.to_owned(),
            x,
            y,
            related: related.iter().map(|name| (*name).to_owned()).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnresolvedLink {
    pub source: String,
    pub target: String,
}

#[derive(Clone, Debug)]
pub struct SkillGraph {
    nodes: Vec<GraphNode>,
    index_by_name: HashMap<String, usize>,
    edges: Vec<(usize, usize)>,
    unresolved: Vec<UnresolvedLink>,
}

impl SkillGraph {
    pub fn new(nodes: Vec<GraphNode>) -> Self {
        let mut index_by_name = HashMap::with_capacity(nodes.len());
        for (index, node) in nodes.iter().enumerate() {
            if index_by_name.contains_key(&node.name) {
                warn!(name = %node.name, "duplicate skill node name; first entry wins");
                continue;
            }
            index_by_name.insert(node.name.clone(), index);
        }

        let mut edges = Vec::new();
        let mut unresolved = Vec::new();
        for (source, node) in nodes.iter().enumerate() {
            for target_name in &node.related {
                match index_by_name.get(target_name) {
                    Some(&target) => edges.push((source, target)),
                    None => {
                        warn!(
                            source = %node.name,
                            target = %target_name,
                            "skill link references an unknown node; skipping"
                        );
                        unresolved.push(UnresolvedLink {
                            source: node.name.clone(),
                            target: target_name.clone(),
                        });
                    }
                }
            }
        }

        Self {
            nodes,
            index_by_name,
            edges,
            unresolved,
        }
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn unresolved(&self) -> &[UnresolvedLink] {
        &self.unresolved
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index_by_name.get(name).copied()
    }

    pub fn layout(&self, viewport: Viewport) -> Vec<Pos2> {
        let mut positions = Vec::with_capacity(self.nodes.len());
        self.layout_into(viewport, &mut positions);
        positions
    }

    pub fn layout_into(&self, viewport: Viewport, positions: &mut Vec<Pos2>) {
        positions.clear();
        positions.extend(
            self.nodes
                .iter()
                .map(|node| viewport.percent_to_pixels(node.x, node.y)),
        );
    }
}
