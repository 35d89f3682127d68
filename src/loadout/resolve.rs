//! Joining decoded loadouts back against the skill catalog

use tracing::debug;

use crate::catalog::{find_skill, SkillDefinition};
use crate::hex::GridPosition;
use crate::loadout::codec::SkillNode;

/// A catalog skill occupying one grid cell
#[derive(Debug, Clone, Copy)]
pub struct PlacedSkill {
    pub skill: &'static SkillDefinition,
    pub position: GridPosition,
}

/// Result of resolving decoded nodes against the catalog
#[derive(Debug, Clone)]
pub struct ResolvedLoadout {
    /// Nodes whose GUID matched a catalog entry, in wire order
    pub placed: Vec<PlacedSkill>,
    /// Nodes skipped because the catalog has no entry for their GUID.
    /// Unknown GUIDs are expected (game updates ship skills before the
    /// site catalogs them), so this is a count, not an error.
    pub unresolved: usize,
}

/// Resolve decoded nodes to catalog skills. Misses are skipped and
/// counted, never fatal.
pub fn resolve_skills(nodes: &[SkillNode]) -> ResolvedLoadout {
    let mut placed = Vec::with_capacity(nodes.len());
    let mut unresolved = 0;

    for node in nodes {
        match find_skill(&node.guid) {
            Some(skill) => placed.push(PlacedSkill {
                skill,
                position: node.grid_position,
            }),
            None => {
                unresolved += 1;
                debug!(guid = %node.guid, name = %node.name, "no catalog entry for imported skill");
            }
        }
    }

    ResolvedLoadout { placed, unresolved }
}
