//! Playable character table

/// Known character ids and display names
pub static CHARACTERS: &[(i64, &str)] = &[
    (0, "The Gambler"),
    (1, "Leila the Medic"),
    // Add other characters as discovered
];

/// Display name for a character id.
///
/// Unknown ids get a synthesized label rather than an error; imported
/// loadouts may reference characters this site has not catalogued yet.
pub fn character_name(id: i64) -> String {
    CHARACTERS
        .iter()
        .find(|(known, _)| *known == id)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| format!("Character {id}"))
}
