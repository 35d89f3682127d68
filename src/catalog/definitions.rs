//! Static skill definitions - the catalog every loadout references
//!
//! GUIDs, charges, triggers, and level requirements come from actual Q-Up
//! game exports. The table is seeded once at compile time and never
//! mutated; all access goes through the read-only lookup functions.

use crate::hex::GridPosition;

/// When a skill activates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    OnFlip,
    OnWin,
    OnLoss,
    OnChainTrigger,
}

/// How a skill reaches the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    /// Occupies a predetermined cell and unlocks automatically by level
    Fixed,
    /// Assigned to any open cell by the player
    Placeable,
}

/// Definition of a skill
#[derive(Debug, Clone)]
pub struct SkillDefinition {
    /// Stable identifier from the game's own export data
    pub guid: &'static str,
    pub name: &'static str,
    pub category: SkillCategory,
    /// Activations per use-cycle
    pub charges: u32,
    pub trigger: Trigger,
    pub description: &'static str,
    /// Minimum character level for the skill to be selectable
    pub level_requirement: u32,
    /// Present iff `category` is `Fixed`
    pub fixed_position: Option<GridPosition>,
}

impl SkillDefinition {
    /// True once the character level meets the requirement
    pub fn is_unlocked(&self, character_level: u32) -> bool {
        self.level_requirement <= character_level
    }
}

/// Every known skill: the fixed level-unlock cells first, then the
/// placeable skills.
pub static SKILL_CATALOG: &[SkillDefinition] = &[
    // Fixed level-unlock cells
    SkillDefinition {
        guid: "hex-level-10",
        name: "Level 10",
        category: SkillCategory::Fixed,
        charges: 1,
        trigger: Trigger::OnFlip,
        description: "Unlocks at level 10",
        level_requirement: 10,
        fixed_position: Some(GridPosition { x: 1, y: -1, z: 0 }),
    },
    SkillDefinition {
        guid: "hex-level-20",
        name: "Level 20",
        category: SkillCategory::Fixed,
        charges: 1,
        trigger: Trigger::OnFlip,
        description: "Unlocks at level 20",
        level_requirement: 20,
        fixed_position: Some(GridPosition { x: 2, y: -1, z: -1 }),
    },
    SkillDefinition {
        guid: "hex-level-30",
        name: "Level 30",
        category: SkillCategory::Fixed,
        charges: 1,
        trigger: Trigger::OnFlip,
        description: "Unlocks at level 30",
        level_requirement: 30,
        fixed_position: Some(GridPosition { x: 1, y: 0, z: -1 }),
    },
    SkillDefinition {
        guid: "hex-level-40",
        name: "Level 40",
        category: SkillCategory::Fixed,
        charges: 1,
        trigger: Trigger::OnFlip,
        description: "Unlocks at level 40",
        level_requirement: 40,
        fixed_position: Some(GridPosition { x: 2, y: 0, z: -2 }),
    },
    SkillDefinition {
        guid: "hex-level-50",
        name: "Level 50",
        category: SkillCategory::Fixed,
        charges: 1,
        trigger: Trigger::OnFlip,
        description: "Unlocks at level 50 (max)",
        level_requirement: 50,
        fixed_position: Some(GridPosition { x: 3, y: -1, z: -2 }),
    },
    // Placeable skills
    SkillDefinition {
        guid: "87991029142bd42739b141a284a68b12",
        name: "Battle Medic",
        category: SkillCategory::Placeable,
        charges: 3,
        trigger: Trigger::OnWin,
        description: "Heal yourself when you win a flip. Triggers adjacent skills.",
        level_requirement: 1,
        fixed_position: None,
    },
    SkillDefinition {
        guid: "3bd89761db7ec422da708839f34048ba",
        name: "Angel",
        category: SkillCategory::Placeable,
        charges: 2,
        trigger: Trigger::OnChainTrigger,
        description: "When triggered, gain temporary invulnerability. Activates connected skills.",
        level_requirement: 5,
        fixed_position: None,
    },
    SkillDefinition {
        guid: "f685bad6490cd4ae9a1403282ad36e16",
        name: "EMT",
        category: SkillCategory::Placeable,
        charges: 2,
        trigger: Trigger::OnWin,
        description: "Emergency medical technician - heal allies.",
        level_requirement: 3,
        fixed_position: None,
    },
    SkillDefinition {
        guid: "98e601e1275864dfaab6b5b0a2deb0d2",
        name: "Stop the Bleeding",
        category: SkillCategory::Placeable,
        charges: 1,
        trigger: Trigger::OnLoss,
        description: "Prevent damage from loss.",
        level_requirement: 5,
        fixed_position: None,
    },
    SkillDefinition {
        guid: "59b7d7b722fa048a69c6cdcfbc517887",
        name: "Self Diagnosis",
        category: SkillCategory::Placeable,
        charges: 2,
        trigger: Trigger::OnFlip,
        description: "Analyze your condition.",
        level_requirement: 4,
        fixed_position: None,
    },
    SkillDefinition {
        guid: "270de55c24a5f44c98656dcabd728c97",
        name: "Panic",
        category: SkillCategory::Placeable,
        charges: 3,
        trigger: Trigger::OnLoss,
        description: "React in panic when losing.",
        level_requirement: 2,
        fixed_position: None,
    },
    SkillDefinition {
        guid: "1a2b77984213c45da81476ee91af8373",
        name: "Precision Cut",
        category: SkillCategory::Placeable,
        charges: 2,
        trigger: Trigger::OnWin,
        description: "Make precise surgical strikes.",
        level_requirement: 8,
        fixed_position: None,
    },
    SkillDefinition {
        guid: "d4e5de763e92244d29dc2f6f20f5ff52",
        name: "Triage",
        category: SkillCategory::Placeable,
        charges: 2,
        trigger: Trigger::OnFlip,
        description: "Prioritize healing targets.",
        level_requirement: 10,
        fixed_position: None,
    },
    SkillDefinition {
        guid: "cac308e32054449ac9fbb553956f9ed1",
        name: "Big Sister",
        category: SkillCategory::Placeable,
        charges: 3,
        trigger: Trigger::OnChainTrigger,
        description: "Protective support ability.",
        level_requirement: 12,
        fixed_position: None,
    },
    SkillDefinition {
        guid: "0ca0cb8ae08b11f4d9105f4829f945ec",
        name: "Exhiliration",
        category: SkillCategory::Placeable,
        charges: 2,
        trigger: Trigger::OnWin,
        description: "Feel energized from victory.",
        level_requirement: 6,
        fixed_position: None,
    },
    SkillDefinition {
        guid: "350c9803c46614d2692cac4e6b9a8197",
        name: "Surgeon",
        category: SkillCategory::Placeable,
        charges: 1,
        trigger: Trigger::OnFlip,
        description: "Expert medical skill.",
        level_requirement: 15,
        fixed_position: None,
    },
    SkillDefinition {
        guid: "7e965edf71e8645abac5133d5d785357",
        name: "Adrenaline",
        category: SkillCategory::Placeable,
        charges: 3,
        trigger: Trigger::OnChainTrigger,
        description: "Boost performance with adrenaline.",
        level_requirement: 7,
        fixed_position: None,
    },
    SkillDefinition {
        guid: "f4b670b10ca374d6282b55f552d5aa21",
        name: "Focus",
        category: SkillCategory::Placeable,
        charges: 2,
        trigger: Trigger::OnFlip,
        description: "Concentrate for better results.",
        level_requirement: 5,
        fixed_position: None,
    },
    SkillDefinition {
        guid: "1cdafdf81e14645858695922c81ccb2b",
        name: "Stimulant",
        category: SkillCategory::Placeable,
        charges: 2,
        trigger: Trigger::OnFlip,
        description: "Use stimulants for enhancement.",
        level_requirement: 10,
        fixed_position: None,
    },
    SkillDefinition {
        guid: "76b5c93328a57408ebfdaec5f7591f60",
        name: "Heroine",
        category: SkillCategory::Placeable,
        charges: 1,
        trigger: Trigger::OnWin,
        description: "Become the hero.",
        level_requirement: 20,
        fixed_position: None,
    },
    SkillDefinition {
        guid: "f64a16beb5af1476898cb41b4a2c68a2",
        name: "Funeral Rites",
        category: SkillCategory::Placeable,
        charges: 1,
        trigger: Trigger::OnLoss,
        description: "Honor the fallen.",
        level_requirement: 25,
        fixed_position: None,
    },
    SkillDefinition {
        guid: "21a86fcf6074f4e4dbd0b62f0f7b37fc",
        name: "Extra Dose",
        category: SkillCategory::Placeable,
        charges: 3,
        trigger: Trigger::OnChainTrigger,
        description: "Administer additional treatment.",
        level_requirement: 14,
        fixed_position: None,
    },
    SkillDefinition {
        guid: "9041601e7a1234e19928cf25deec644e",
        name: "Angel of Death",
        category: SkillCategory::Placeable,
        charges: 1,
        trigger: Trigger::OnLoss,
        description: "Deadly when desperate.",
        level_requirement: 30,
        fixed_position: None,
    },
    SkillDefinition {
        guid: "90e1391d38c9041acaa19ca4bbc42597",
        name: "Low Point",
        category: SkillCategory::Placeable,
        charges: 2,
        trigger: Trigger::OnLoss,
        description: "Benefit from being at low health.",
        level_requirement: 12,
        fixed_position: None,
    },
    SkillDefinition {
        guid: "98936d1a861664444a7470b16e849100",
        name: "Deployment",
        category: SkillCategory::Placeable,
        charges: 2,
        trigger: Trigger::OnFlip,
        description: "Deploy medical support.",
        level_requirement: 18,
        fixed_position: None,
    },
    SkillDefinition {
        guid: "2a6888039408f4c15a75fa4c73d12e17",
        name: "Insurance Scam",
        category: SkillCategory::Placeable,
        charges: 1,
        trigger: Trigger::OnChainTrigger,
        description: "Exploit the system.",
        level_requirement: 22,
        fixed_position: None,
    },
    SkillDefinition {
        guid: "6ec66fff3b818448eaa7b1aac9719152",
        name: "Escalation",
        category: SkillCategory::Placeable,
        charges: 3,
        trigger: Trigger::OnWin,
        description: "Increase intensity with each win.",
        level_requirement: 16,
        fixed_position: None,
    },
    SkillDefinition {
        guid: "f011287f20e654d359fa1d5e1f8530ae",
        name: "Battle Hardened",
        category: SkillCategory::Placeable,
        charges: 2,
        trigger: Trigger::OnLoss,
        description: "Toughen up from combat experience.",
        level_requirement: 24,
        fixed_position: None,
    },
];

/// Look up a skill by GUID. A miss is a normal outcome (unknown or
/// version-mismatched GUIDs in imported loadouts), never an error.
pub fn find_skill(guid: &str) -> Option<&'static SkillDefinition> {
    SKILL_CATALOG.iter().find(|skill| skill.guid == guid)
}

/// All skills unlocked at the given character level
pub fn skills_for_level(character_level: u32) -> impl Iterator<Item = &'static SkillDefinition> {
    SKILL_CATALOG
        .iter()
        .filter(move |skill| skill.is_unlocked(character_level))
}

/// The fixed level-unlock skills
pub fn fixed_skills() -> impl Iterator<Item = &'static SkillDefinition> {
    SKILL_CATALOG
        .iter()
        .filter(|skill| skill.category == SkillCategory::Fixed)
}

/// The player-placeable skills
pub fn placeable_skills() -> impl Iterator<Item = &'static SkillDefinition> {
    SKILL_CATALOG
        .iter()
        .filter(|skill| skill.category == SkillCategory::Placeable)
}
