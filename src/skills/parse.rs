use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::warn;

use super::graph::GraphNode;

#[derive(Debug, Error, PartialEq)]
pub enum SkillTableError {
    #[error("skill table contains no nodes")]
    Empty,
    #[error("skill node {0:?} has an empty name")]
    EmptyName(usize),
    #[error("skill node {name:?} has a non-finite position")]
    NonFinite { name: String },
}

pub fn parse_skill_table(raw: &str) -> Result<Vec<GraphNode>> {
    let nodes: Vec<GraphNode> =
        serde_json::from_str(raw).context("invalid JSON in skill table")?;
    validate_skill_table(&nodes)?;
    Ok(nodes)
}

pub fn load_skill_table(path: &Path) -> Result<Vec<GraphNode>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read skill table {}", path.display()))?;
    parse_skill_table(&raw)
        .with_context(|| format!("failed to load skill table {}", path.display()))
}

pub fn validate_skill_table(nodes: &[GraphNode]) -> Result<(), SkillTableError> {
    if nodes.is_empty() {
        return Err(SkillTableError::Empty);
    }

    let mut seen = HashSet::with_capacity(nodes.len());
    for (index, node) in nodes.iter().enumerate() {
        if node.name.trim().is_empty() {
            return Err(SkillTableError::EmptyName(index));
        }
        if !node.x.is_finite() || !node.y.is_finite() {
            return Err(SkillTableError::NonFinite {
                name: node.name.clone(),
            });
        }
        if !(0.0..=100.0).contains(&node.x) || !(0.0..=100.0).contains(&node.y) {
            warn!(
                name = %node.name,
                x = node.x,
                y = node.y,
                "skill node lies outside the 0-100% canvas"
            );
        }
        if !seen.insert(node.name.as_str()) {
            warn!(name = %node.name, "skill node name is repeated");
        }
    }

    Ok(())
}
