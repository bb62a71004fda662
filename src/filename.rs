//! Output filename generation
//!
//! Pure functions, no filesystem access. Filenames are derived from the
//! group key values: a single group field yields `<value>.csv`, several
//! yield `<field>_<value>_<field>_<value>.csv`. Values are stripped down to
//! filesystem-safe characters first.
//!
//! Known limitation, kept on purpose: two distinct group keys can sanitize
//! to the same filename, in which case the later bucket overwrites the
//! earlier file. Changing this would change observable output for existing
//! users.

use crate::config::{CSV_EXTENSION, EMPTY_VALUE_PLACEHOLDER};

/// Generate the output filename for one group key.
///
/// `group_fields` and `key` are parallel: one value per group-by field.
pub fn generate_filename(key: &[String], group_fields: &[String]) -> String {
    let parts: Vec<String> = if key.len() == 1 {
        vec![key[0].clone()]
    } else {
        group_fields
            .iter()
            .zip(key)
            .map(|(field, value)| format!("{field}_{value}"))
            .collect()
    };

    let clean: Vec<String> = parts.iter().map(|part| sanitize(part)).collect();
    format!("{}{CSV_EXTENSION}", clean.join("_"))
}

/// Strip a filename part down to alphanumerics, spaces, hyphens and
/// underscores, trim trailing whitespace, and fall back to a placeholder
/// when nothing survives.
pub fn sanitize(part: &str) -> String {
    let clean: String = part
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    let clean = clean.trim_end();

    if clean.is_empty() {
        EMPTY_VALUE_PLACEHOLDER.to_string()
    } else {
        clean.to_string()
    }
}

/// Format a group key as `field='value' + field='value'` for progress
/// messages.
pub fn format_group_display(key: &[String], group_fields: &[String]) -> String {
    group_fields
        .iter()
        .zip(key)
        .map(|(field, value)| format!("{field}='{value}'"))
        .collect::<Vec<_>>()
        .join(" + ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| (*s).to_string()).collect()
    }

    // ============================================================================
    // sanitize
    // ============================================================================

    #[test_case("North America", "North America"; "spaces kept")]
    #[test_case("a/b\\c:d", "abcd"; "path separators stripped")]
    #[test_case("x-1_y", "x-1_y"; "hyphen and underscore kept")]
    #[test_case("value  ", "value"; "trailing whitespace trimmed")]
    #[test_case("...", "empty"; "only punctuation becomes placeholder")]
    #[test_case("", "empty"; "empty value becomes placeholder")]
    #[test_case("été", "été"; "non-ascii alphanumerics kept")]
    fn test_sanitize(input: &str, expected: &str) {
        assert_eq!(sanitize(input), expected);
    }

    // ============================================================================
    // generate_filename
    // ============================================================================

    #[test]
    fn test_single_field_uses_bare_value() {
        let name = generate_filename(&strings(&["West"]), &strings(&["Region"]));
        assert_eq!(name, "West.csv");
    }

    #[test]
    fn test_multiple_fields_interleave_names_and_values() {
        let name = generate_filename(
            &strings(&["West", "2024"]),
            &strings(&["Region", "Year"]),
        );
        assert_eq!(name, "Region_West_Year_2024.csv");
    }

    #[test]
    fn test_unsafe_characters_are_stripped() {
        let name = generate_filename(&strings(&["a/b?c*"]), &strings(&["K"]));
        assert_eq!(name, "abc.csv");
    }

    #[test]
    fn test_empty_value_gets_placeholder() {
        let name = generate_filename(&strings(&[""]), &strings(&["K"]));
        assert_eq!(name, "empty.csv");
    }

    #[test]
    fn test_collision_is_possible() {
        // Distinct keys that sanitize to the same name: documented
        // overwrite behavior, not deduplicated here.
        let a = generate_filename(&strings(&["x/y"]), &strings(&["K"]));
        let b = generate_filename(&strings(&["x?y"]), &strings(&["K"]));
        assert_eq!(a, b);
    }

    // ============================================================================
    // format_group_display
    // ============================================================================

    #[test]
    fn test_format_group_display() {
        let display = format_group_display(
            &strings(&["West", "2024"]),
            &strings(&["Region", "Year"]),
        );
        assert_eq!(display, "Region='West' + Year='2024'");
    }
}
