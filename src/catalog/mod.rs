//! Static skill and character registry
//!
//! Seeded once from the game's export data and read-only for the process
//! lifetime; safe for unlimited concurrent readers.

pub mod characters;
pub mod definitions;

pub use characters::{character_name, CHARACTERS};
pub use definitions::{
    find_skill, fixed_skills, placeable_skills, skills_for_level, SkillCategory, SkillDefinition,
    Trigger, SKILL_CATALOG,
};
