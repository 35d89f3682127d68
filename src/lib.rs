//! Q-Up loadout core - skill catalog, hex grid math, and the export codec

pub mod catalog;
pub mod core;
pub mod hex;
pub mod loadout;

pub use crate::catalog::{find_skill, SkillDefinition};
pub use crate::core::{GridConfig, ParseError, PlacementError};
pub use crate::hex::GridPosition;
pub use crate::loadout::{
    export_loadout, looks_like_loadout, parse_loadout, ParsedLoadout, SkillNode,
};
