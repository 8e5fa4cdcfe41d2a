//! Keys-template normalization.
//!
//! Firmware keys pages encode their metadata as a single double-brace
//! template of `|`-separated `Key = Value` rows. This module flattens that
//! block into an insertion-ordered field table the later stages can walk.

use indexmap::IndexMap;

use crate::error_handling::LookupError;

/// Field name to value mapping, in document order.
///
/// A later duplicate of a key overwrites the earlier value while keeping
/// the original position, matching how the rows are encountered.
pub type FieldTable = IndexMap<String, String>;

/// Parses raw page wikitext into a [`FieldTable`].
///
/// Page text is not reliably formatted, so runs of spaces are collapsed
/// first; the ` = ` separator can then be matched literally. Each `|`
/// segment of the template body is split on the first ` = ` occurrence;
/// segments without the separator are template boilerplate and are
/// skipped.
///
/// # Errors
///
/// Returns [`LookupError::MalformedPage`] if the markup contains no
/// template block at all. A block with zero parsable rows is valid and
/// yields an empty table.
pub fn parse_fields(markup: &str) -> Result<FieldTable, LookupError> {
    let collapsed = collapse_spacing(markup);

    let start = collapsed.find("{{").ok_or(LookupError::MalformedPage)?;
    let body = &collapsed[start + 2..];
    let end = body.find("}}").ok_or(LookupError::MalformedPage)?;
    let body = &body[..end];

    let mut fields = FieldTable::new();
    for row in body.split('|') {
        let Some((key, value)) = row.trim().split_once(" = ") else {
            continue;
        };
        fields.insert(key.to_string(), value.to_string());
    }

    Ok(fields)
}

/// Collapses runs of spaces without altering other token content.
fn collapse_spacing(markup: &str) -> String {
    markup
        .split(' ')
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "{{keys\n\
        | Version = 16.6\n\
        | Build = 20G75\n\
        | Device = iPhone10,6\n\
        | Codename = Gonzo\n\
        | RootFS = 042-49298-063\n\
        | RootFSKey = ea7d53a61b86dd3dd58820e3de9bcd87a23e8e4ec7c4b0d729e552ca0ad22fbf462e9639\n\
        }}";

    #[test]
    fn test_parse_fields_well_formed_page() {
        let fields = parse_fields(PAGE).expect("page parses");
        assert_eq!(fields.get("Version").map(String::as_str), Some("16.6"));
        assert_eq!(fields.get("Build").map(String::as_str), Some("20G75"));
        assert_eq!(
            fields.get("Device").map(String::as_str),
            Some("iPhone10,6")
        );
        assert_eq!(
            fields.get("RootFS").map(String::as_str),
            Some("042-49298-063")
        );
        assert_eq!(fields.len(), 6);
    }

    #[test]
    fn test_parse_fields_preserves_document_order() {
        let fields = parse_fields(PAGE).expect("page parses");
        let keys: Vec<&str> = fields.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["Version", "Build", "Device", "Codename", "RootFS", "RootFSKey"]
        );
    }

    #[test]
    fn test_parse_fields_collapses_irregular_spacing() {
        let markup = "{{keys\n| Device   =    iPhone10,6\n| Build =  20G75\n}}";
        let fields = parse_fields(markup).expect("page parses");
        assert_eq!(
            fields.get("Device").map(String::as_str),
            Some("iPhone10,6")
        );
        assert_eq!(fields.get("Build").map(String::as_str), Some("20G75"));
    }

    #[test]
    fn test_parse_fields_skips_boilerplate_rows() {
        // The template name and separator-less rows are not data fields.
        let markup = "{{keys\n| notes\n| Device = iPhone10,6\n}}";
        let fields = parse_fields(markup).expect("page parses");
        assert_eq!(fields.len(), 1);
        assert!(fields.contains_key("Device"));
    }

    #[test]
    fn test_parse_fields_duplicate_key_overwrites_in_place() {
        let markup = "{{keys\n| Device = iPhone10,6\n| Build = 20G75\n| Device = iPhone10,3\n}}";
        let fields = parse_fields(markup).expect("page parses");
        assert_eq!(
            fields.get("Device").map(String::as_str),
            Some("iPhone10,3")
        );
        // Overwrite keeps the original position.
        let keys: Vec<&str> = fields.keys().map(String::as_str).collect();
        assert_eq!(keys, ["Device", "Build"]);
    }

    #[test]
    fn test_parse_fields_splits_on_first_separator_only() {
        let markup = "{{keys\n| DownloadURL = https://example.com/ipsw?a = b\n}}";
        let fields = parse_fields(markup).expect("page parses");
        assert_eq!(
            fields.get("DownloadURL").map(String::as_str),
            Some("https://example.com/ipsw?a = b")
        );
    }

    #[test]
    fn test_parse_fields_no_template_block_is_malformed() {
        let err = parse_fields("this page has no template").unwrap_err();
        assert!(matches!(err, LookupError::MalformedPage));
    }

    #[test]
    fn test_parse_fields_unclosed_template_block_is_malformed() {
        let err = parse_fields("{{keys\n| Device = iPhone10,6\n").unwrap_err();
        assert!(matches!(err, LookupError::MalformedPage));
    }

    #[test]
    fn test_parse_fields_empty_block_yields_empty_table() {
        let fields = parse_fields("{{keys}}").expect("empty block is valid");
        assert!(fields.is_empty());
    }
}
