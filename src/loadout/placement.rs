//! Grid placement rules
//!
//! A board holds at most one skill per cell. Fixed skills are pinned to
//! their predefined cells from the start and can never be moved or
//! removed; placeable skills go on any open cell inside the grid radius.

use tracing::debug;

use crate::catalog::{fixed_skills, SkillCategory, SkillDefinition};
use crate::core::config::GridConfig;
use crate::core::error::PlacementError;
use crate::hex::GridPosition;
use crate::loadout::codec::export_loadout;
use crate::loadout::resolve::PlacedSkill;

/// One character's skill grid with its current placements
#[derive(Debug, Clone)]
pub struct SkillBoard {
    config: GridConfig,
    character_level: u32,
    /// Fixed skills first (seeded at construction), then placeable
    /// skills in placement order. Order is preserved through export.
    placements: Vec<PlacedSkill>,
}

impl SkillBoard {
    pub fn new(config: GridConfig, character_level: u32) -> Self {
        let placements = fixed_skills()
            .filter_map(|skill| {
                skill.fixed_position.map(|position| PlacedSkill {
                    skill,
                    position,
                })
            })
            .collect();
        Self {
            config,
            character_level,
            placements,
        }
    }

    pub fn character_level(&self) -> u32 {
        self.character_level
    }

    /// The skill occupying a cell, if any
    pub fn skill_at(&self, position: GridPosition) -> Option<&'static SkillDefinition> {
        self.placements
            .iter()
            .find(|ps| ps.position == position)
            .map(|ps| ps.skill)
    }

    pub fn is_occupied(&self, position: GridPosition) -> bool {
        self.skill_at(position).is_some()
    }

    /// All current placements, fixed cells included
    pub fn placements(&self) -> &[PlacedSkill] {
        &self.placements
    }

    /// Whether a fixed skill's cell is unlocked at the current level.
    /// Render-time state only; it never gates placement or export.
    pub fn is_unlocked(&self, skill: &SkillDefinition) -> bool {
        skill.is_unlocked(self.character_level)
    }

    /// Place a skill on a cell.
    ///
    /// Fixed skills are only ever valid on their own predefined cell
    /// (which is seeded at construction, so this rejects with
    /// `Occupied` there and `FixedPosition` everywhere else).
    pub fn place(
        &mut self,
        skill: &'static SkillDefinition,
        position: GridPosition,
    ) -> Result<(), PlacementError> {
        if skill.category == SkillCategory::Fixed && skill.fixed_position != Some(position) {
            return Err(PlacementError::FixedPosition);
        }
        if !position.is_on_lattice() {
            return Err(PlacementError::NotOnLattice);
        }
        if position.distance(&GridPosition::ORIGIN) > self.config.ring_radius as i32 {
            return Err(PlacementError::OutOfBounds);
        }
        if self.is_occupied(position) {
            return Err(PlacementError::Occupied);
        }

        self.placements.push(PlacedSkill { skill, position });
        Ok(())
    }

    /// Vacate a cell, returning the removed skill. Fixed skills stay
    /// put: removing their cell is a no-op returning `None`.
    pub fn remove(&mut self, position: GridPosition) -> Option<&'static SkillDefinition> {
        let index = self
            .placements
            .iter()
            .position(|ps| ps.position == position)?;
        if self.placements[index].skill.category == SkillCategory::Fixed {
            return None;
        }
        Some(self.placements.remove(index).skill)
    }

    /// Drop all placeable skills, keeping the fixed cells
    pub fn clear(&mut self) {
        self.placements
            .retain(|ps| ps.skill.category == SkillCategory::Fixed);
    }

    /// Replace the board's placeable skills with an imported set.
    ///
    /// Applied in order with last-write-wins on duplicate positions, so
    /// the outcome is deterministic for any input. Entries that cannot
    /// be placed (fixed-cell collisions, out-of-radius coordinates) are
    /// skipped.
    pub fn import(&mut self, placed: impl IntoIterator<Item = PlacedSkill>) {
        self.clear();
        for ps in placed {
            if self
                .skill_at(ps.position)
                .is_some_and(|occupant| occupant.category == SkillCategory::Placeable)
            {
                self.remove(ps.position);
            }
            if let Err(err) = self.place(ps.skill, ps.position) {
                debug!(guid = %ps.skill.guid, %err, "skipping unplaceable imported skill");
            }
        }
    }

    /// Export the current placements for the given character.
    ///
    /// Fixed skills are included regardless of lock state; they occupy
    /// their cells conceptually even before the level unlocks them.
    pub fn export(&self, character: i64) -> String {
        export_loadout(character, &self.placements, i64::from(self.character_level))
    }
}
