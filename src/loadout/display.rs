//! Human-readable loadout summaries for build pages and embeds

use std::collections::HashMap;

use crate::hex::GridPosition;
use crate::loadout::codec::SkillNode;

/// One-line summary of a decoded loadout
pub fn skill_summary(skills: &[SkillNode]) -> String {
    if skills.is_empty() {
        return "No skills selected".to_string();
    }
    let names: Vec<&str> = skills.iter().map(|s| s.name.as_str()).collect();
    format!("{} skills: {}", skills.len(), names.join(", "))
}

/// Distinct skill names in first-seen order
pub fn unique_skill_names(skills: &[SkillNode]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for skill in skills {
        if !names.contains(&skill.name) {
            names.push(skill.name.clone());
        }
    }
    names
}

/// Occurrences of each skill name (duplicates are legal on the grid)
pub fn skill_counts(skills: &[SkillNode]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for skill in skills {
        *counts.entry(skill.name.clone()).or_insert(0) += 1;
    }
    counts
}

/// Skills ordered by distance from the center cell, nearest first.
/// The sort is stable, so equidistant skills keep their wire order.
pub fn sort_by_distance_from_center(skills: &[SkillNode]) -> Vec<SkillNode> {
    let mut sorted = skills.to_vec();
    sorted.sort_by_key(|s| s.grid_position.distance(&GridPosition::ORIGIN));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(name: &str, position: GridPosition) -> SkillNode {
        SkillNode {
            name: name.to_string(),
            guid: format!("guid-{name}"),
            level: 50,
            grid_position: position,
            is_inventory: false,
        }
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(skill_summary(&[]), "No skills selected");
    }

    #[test]
    fn test_summary_lists_names() {
        let skills = vec![
            node("Battle Medic", GridPosition::ORIGIN),
            node("Angel", GridPosition::new(1, -1, 0)),
        ];
        assert_eq!(skill_summary(&skills), "2 skills: Battle Medic, Angel");
    }

    #[test]
    fn test_unique_names_and_counts() {
        let skills = vec![
            node("Focus", GridPosition::ORIGIN),
            node("Focus", GridPosition::new(1, -1, 0)),
            node("Angel", GridPosition::new(0, 1, -1)),
        ];
        assert_eq!(unique_skill_names(&skills), vec!["Focus", "Angel"]);

        let counts = skill_counts(&skills);
        assert_eq!(counts["Focus"], 2);
        assert_eq!(counts["Angel"], 1);
    }

    #[test]
    fn test_sort_by_distance() {
        let far = node("Far", GridPosition::new(3, -3, 0));
        let near = node("Near", GridPosition::new(1, 0, -1));
        let center = node("Center", GridPosition::ORIGIN);

        let sorted = sort_by_distance_from_center(&[far, near, center]);
        let names: Vec<_> = sorted.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Center", "Near", "Far"]);
    }
}
