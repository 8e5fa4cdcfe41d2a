//! Board-configuration disambiguation.
//!
//! Some keys pages document two hardware variants of one build, with the
//! secondary variant's fields suffixed `2` (`Model2`, `RootFSKey2`, ...).
//! Once a board configuration is chosen, the table must read as if the
//! page documented that variant alone.

use crate::error_handling::LookupError;
use crate::parse::fields::FieldTable;

/// Narrows a field table to the variant matching `board_config`.
///
/// Returns the table untouched when the page documents a single variant
/// (neither `Model` nor `Model2` present). When the board config matches
/// the secondary variant, every `<field>2` value is promoted onto
/// `<field>` before the suffixed fields are dropped; in every other case
/// the suffixed fields are simply dropped.
///
/// Matching is case-insensitive against all field values, not only the
/// model fields; existing wiki content relies on this looseness.
///
/// # Errors
///
/// Returns [`LookupError::InvalidBoardConfig`] if the board config matches
/// no value on the page.
pub fn select_board_config(
    mut fields: FieldTable,
    identifier: &str,
    board_config: &str,
) -> Result<FieldTable, LookupError> {
    if !fields.contains_key("Model") && !fields.contains_key("Model2") {
        return Ok(fields);
    }

    let wanted = board_config.to_lowercase();
    if !fields.values().any(|value| value.to_lowercase() == wanted) {
        return Err(LookupError::InvalidBoardConfig {
            identifier: identifier.to_string(),
            board_config: board_config.to_string(),
        });
    }

    let is_secondary = fields
        .get("Model2")
        .is_some_and(|model| model.to_lowercase() == wanted);
    if is_secondary {
        // Promote the secondary variant's values onto the unsuffixed
        // names. Insertion overwrites an existing key in place, so the
        // promoted value lands where the primary field already sat.
        let promoted: Vec<(String, String)> = fields
            .iter()
            .filter(|(key, _)| key.contains('2'))
            .map(|(key, value)| (key.replace('2', ""), value.clone()))
            .collect();
        for (key, value) in promoted {
            fields.insert(key, value);
        }
    }

    fields.retain(|key, _| !key.contains('2'));
    Ok(fields)
}
