//! Loadout codec, catalog resolution, and grid placement
//!
//! The unit of interchange is the export string: character selection
//! plus placed skills, encoded as `QUP-LOADOUT-v1:` + base64 JSON.
//! Decode is tolerant of anything short of a broken envelope - unknown
//! GUIDs, placeholder nodes, and off-lattice cells drop individual
//! nodes, never the whole loadout.

pub mod codec;
pub mod display;
pub mod placement;
pub mod resolve;

pub use codec::{
    export_loadout, looks_like_loadout, parse_loadout, ParsedLoadout, SkillNode, FORMAT_PREFIX,
};
pub use display::{skill_counts, skill_summary, sort_by_distance_from_center, unique_skill_names};
pub use placement::SkillBoard;
pub use resolve::{resolve_skills, PlacedSkill, ResolvedLoadout};
