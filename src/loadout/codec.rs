//! Loadout export/import codec
//!
//! Wire format: `QUP-LOADOUT-v1:` followed by standard base64 of a JSON
//! payload `{"character": <int>, "nodes": [...]}`. The tag, version, and
//! JSON field names are shared with the game client's own exports and
//! must not change.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::catalog::character_name;
use crate::core::error::ParseError;
use crate::hex::GridPosition;
use crate::loadout::resolve::PlacedSkill;

/// Exact prefix every export string carries. A different tag or version
/// is rejected outright, never coerced.
pub const FORMAT_PREFIX: &str = "QUP-LOADOUT-v1:";

/// Length bounds for the cheap pre-check. Anything real is longer than
/// the prefix plus a minimal payload; anything near the upper bound is
/// pasted garbage, not a loadout.
const MIN_EXPORT_LEN: usize = 20;
const MAX_EXPORT_LEN: usize = 50_000;

/// One node of a loadout as transmitted on the wire.
///
/// Empty-name nodes are unallocated placeholder cells the game client
/// includes in its exports; the parser filters them out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillNode {
    /// Empty on placeholder nodes, so absent counts as empty too
    #[serde(default)]
    pub name: String,
    pub guid: String,
    #[serde(default)]
    pub level: i64,
    pub grid_position: GridPosition,
    #[serde(default)]
    pub is_inventory: bool,
}

/// A successfully parsed export string
#[derive(Debug, Clone)]
pub struct ParsedLoadout {
    /// The original export string, kept verbatim for storage
    pub raw: String,
    pub character: i64,
    pub character_name: String,
    /// Named, grid-placed nodes in wire order; placeholders already dropped
    pub skills: Vec<SkillNode>,
}

/// Serialize placed skills into an export string.
///
/// Infallible: placement invariants are enforced before skills reach
/// this point, and the wire types always serialize.
pub fn export_loadout(character: i64, placed: &[PlacedSkill], level: i64) -> String {
    let nodes: Vec<SkillNode> = placed
        .iter()
        .map(|ps| SkillNode {
            name: ps.skill.name.to_string(),
            guid: ps.skill.guid.to_string(),
            level,
            grid_position: ps.position,
            is_inventory: false,
        })
        .collect();

    let json = serde_json::json!({
        "character": character,
        "nodes": nodes,
    })
    .to_string();

    format!("{FORMAT_PREFIX}{}", BASE64.encode(json))
}

/// Parse and validate an export string.
///
/// Failures are returned as [`ParseError`] values. A malformed or
/// off-lattice node drops that node only; the rest of the loadout still
/// parses. A whole-loadout failure happens only for the envelope:
/// empty input, wrong prefix, bad base64, bad JSON, or a payload without
/// an integer `character` and an array `nodes`.
pub fn parse_loadout(raw: &str) -> Result<ParsedLoadout, ParseError> {
    if raw.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let payload = raw
        .strip_prefix(FORMAT_PREFIX)
        .ok_or(ParseError::UnrecognizedFormat {
            expected: "QUP-LOADOUT-v1",
        })?;

    let decoded = BASE64.decode(payload)?;
    let value: Value = serde_json::from_slice(&decoded)?;

    let character = value
        .get("character")
        .and_then(Value::as_i64)
        .ok_or(ParseError::InvalidStructure)?;
    let nodes = value
        .get("nodes")
        .and_then(Value::as_array)
        .ok_or(ParseError::InvalidStructure)?;

    let mut skills = Vec::with_capacity(nodes.len());
    for node in nodes {
        let node: SkillNode = match serde_json::from_value(node.clone()) {
            Ok(node) => node,
            Err(err) => {
                debug!(%err, "dropping malformed node");
                continue;
            }
        };
        if node.name.trim().is_empty() {
            // Unallocated placeholder cell, not an error
            continue;
        }
        if !node.grid_position.is_on_lattice() {
            debug!(guid = %node.guid, name = %node.name, "dropping node with off-lattice position");
            continue;
        }
        skills.push(node);
    }

    Ok(ParsedLoadout {
        raw: raw.to_string(),
        character,
        character_name: character_name(character),
        skills,
    })
}

/// Cheap pre-check before attempting a full parse.
///
/// Checks only the prefix and a sane length, so it accepts everything
/// [`parse_loadout`] accepts without touching base64 or JSON. Useful as
/// an early filter on user-pasted text.
pub fn looks_like_loadout(raw: &str) -> bool {
    if raw.trim().is_empty() {
        return false;
    }
    raw.starts_with(FORMAT_PREFIX) && raw.len() > MIN_EXPORT_LEN && raw.len() < MAX_EXPORT_LEN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_skill;

    fn encode_payload(json: &str) -> String {
        format!("{FORMAT_PREFIX}{}", BASE64.encode(json))
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(parse_loadout(""), Err(ParseError::EmptyInput)));
        assert!(matches!(parse_loadout("   "), Err(ParseError::EmptyInput)));
    }

    #[test]
    fn test_wrong_prefix_rejected() {
        let result = parse_loadout("WRONG-TAG-v1:aGVsbG8=");
        assert!(matches!(result, Err(ParseError::UnrecognizedFormat { .. })));
    }

    #[test]
    fn test_wrong_version_rejected() {
        let payload = BASE64.encode(r#"{"character":1,"nodes":[]}"#);
        let result = parse_loadout(&format!("QUP-LOADOUT-v2:{payload}"));
        assert!(matches!(result, Err(ParseError::UnrecognizedFormat { .. })));
    }

    #[test]
    fn test_corrupt_base64() {
        let result = parse_loadout("QUP-LOADOUT-v1:!!!not-base64!!!");
        assert!(matches!(result, Err(ParseError::CorruptEncoding(_))));
    }

    #[test]
    fn test_corrupt_json() {
        let result = parse_loadout(&encode_payload("this is not json"));
        assert!(matches!(result, Err(ParseError::CorruptPayload(_))));
    }

    #[test]
    fn test_missing_fields() {
        let result = parse_loadout(&encode_payload(r#"{"foo": 1}"#));
        assert!(matches!(result, Err(ParseError::InvalidStructure)));

        // character present but nodes missing
        let result = parse_loadout(&encode_payload(r#"{"character": 1}"#));
        assert!(matches!(result, Err(ParseError::InvalidStructure)));

        // nodes present but not an array
        let result = parse_loadout(&encode_payload(r#"{"character": 1, "nodes": 3}"#));
        assert!(matches!(result, Err(ParseError::InvalidStructure)));
    }

    #[test]
    fn test_character_zero_is_valid() {
        let parsed = parse_loadout(&encode_payload(r#"{"character":0,"nodes":[]}"#)).unwrap();
        assert_eq!(parsed.character, 0);
        assert_eq!(parsed.character_name, "The Gambler");
    }

    #[test]
    fn test_unknown_character_gets_label() {
        let parsed = parse_loadout(&encode_payload(r#"{"character":9,"nodes":[]}"#)).unwrap();
        assert_eq!(parsed.character_name, "Character 9");
    }

    #[test]
    fn test_placeholder_nodes_filtered() {
        let json = r#"{"character":1,"nodes":[
            {"name":"","guid":"x","level":50,"gridPosition":{"x":0,"y":0,"z":0},"isInventory":false},
            {"name":"Battle Medic","guid":"87991029142bd42739b141a284a68b12","level":50,
             "gridPosition":{"x":1,"y":-1,"z":0},"isInventory":false}
        ]}"#;
        let parsed = parse_loadout(&encode_payload(json)).unwrap();
        assert_eq!(parsed.skills.len(), 1);
        assert_eq!(parsed.skills[0].name, "Battle Medic");
    }

    #[test]
    fn test_off_lattice_node_dropped_without_failing() {
        let json = r#"{"character":1,"nodes":[
            {"name":"Bad","guid":"g1","level":50,"gridPosition":{"x":1,"y":1,"z":1},"isInventory":false},
            {"name":"Good","guid":"g2","level":50,"gridPosition":{"x":1,"y":-1,"z":0},"isInventory":false}
        ]}"#;
        let parsed = parse_loadout(&encode_payload(json)).unwrap();
        assert_eq!(parsed.skills.len(), 1);
        assert_eq!(parsed.skills[0].name, "Good");
    }

    #[test]
    fn test_malformed_node_dropped_without_failing() {
        let json = r#"{"character":1,"nodes":[
            {"name":"No position","guid":"g1","level":50,"isInventory":false},
            {"name":"Good","guid":"g2","level":50,"gridPosition":{"x":0,"y":0,"z":0},"isInventory":false}
        ]}"#;
        let parsed = parse_loadout(&encode_payload(json)).unwrap();
        assert_eq!(parsed.skills.len(), 1);
    }

    #[test]
    fn test_export_produces_expected_wire_shape() {
        let medic = find_skill("87991029142bd42739b141a284a68b12").unwrap();
        let placed = vec![PlacedSkill {
            skill: medic,
            position: GridPosition::new(1, -1, 0),
        }];
        let export = export_loadout(1, &placed, 50);
        assert!(export.starts_with(FORMAT_PREFIX));

        let json: Value =
            serde_json::from_slice(&BASE64.decode(&export[FORMAT_PREFIX.len()..]).unwrap())
                .unwrap();
        assert_eq!(json["character"], 1);
        assert_eq!(json["nodes"][0]["name"], "Battle Medic");
        assert_eq!(json["nodes"][0]["guid"], "87991029142bd42739b141a284a68b12");
        assert_eq!(json["nodes"][0]["level"], 50);
        assert_eq!(json["nodes"][0]["gridPosition"]["y"], -1);
        assert_eq!(json["nodes"][0]["isInventory"], false);
    }

    #[test]
    fn test_looks_like_loadout() {
        assert!(!looks_like_loadout(""));
        assert!(!looks_like_loadout("   "));
        assert!(!looks_like_loadout("QUP-LOADOUT-v1:"));
        assert!(!looks_like_loadout("random pasted text"));

        let export = export_loadout(1, &[], 50);
        assert!(looks_like_loadout(&export));
    }

    #[test]
    fn test_looks_like_loadout_accepts_everything_parse_accepts() {
        let exports = [
            export_loadout(0, &[], 1),
            encode_payload(r#"{"character":1,"nodes":[]}"#),
        ];
        for export in exports {
            assert!(parse_loadout(&export).is_ok());
            assert!(looks_like_loadout(&export));
        }
    }
}
