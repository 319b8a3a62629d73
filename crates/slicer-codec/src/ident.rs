//! Legacy node-identifier encodings.
//!
//! Two generations of string-encoded identifiers exist in saved documents.
//! The new encoding wraps the path components as `~|a~|~b~|`; the old one
//! chains them as `~|a-0_|~b-1`, each component suffixed with a dash-delimited
//! disambiguator that parsing discards. No version tag is stored: an
//! identifier ending in `~|` is new-format, everything else is old-format.

const PREFIX: &str = "~|";
const NEW_SUFFIX: &str = "~|";
const NEW_SEPARATOR: &str = "~|~";
const OLD_SEPARATOR: &str = "_|~";

/// Parse an identifier of either generation into its ordered path
/// components, root first.
pub fn parse_own_id(own_id: &str) -> Vec<String> {
    if own_id.ends_with(NEW_SUFFIX) {
        parse_new_own_id(own_id)
    } else {
        parse_old_own_id(own_id)
    }
}

/// Parse a new-format identifier. Inputs too short to carry both affixes
/// yield an empty sequence.
pub fn parse_new_own_id(own_id: &str) -> Vec<String> {
    let Some(inner) = own_id
        .strip_prefix(PREFIX)
        .and_then(|rest| rest.strip_suffix(NEW_SUFFIX))
    else {
        return Vec::new();
    };
    inner.split(NEW_SEPARATOR).map(str::to_string).collect()
}

/// Parse an old-format identifier, discarding each component's
/// dash-delimited disambiguator.
pub fn parse_old_own_id(own_id: &str) -> Vec<String> {
    let Some(inner) = own_id.strip_prefix(PREFIX) else {
        return Vec::new();
    };
    inner
        .split(OLD_SEPARATOR)
        .map(|part| part.split('-').next().unwrap_or("").to_string())
        .collect()
}

/// Parse a comma-joined list of expanded-node identifiers.
pub fn parse_expand(expand: &str) -> Vec<Vec<String>> {
    if expand.is_empty() {
        return Vec::new();
    }
    expand.split(',').map(parse_own_id).collect()
}

/// Parse the deprecated `filterValues` storage property: comma-joined
/// identifiers, always old-format.
pub fn parse_legacy_filter_values(filter_values: &str) -> Vec<Vec<String>> {
    filter_values.split(',').map(parse_old_own_id).collect()
}

/// Encode path components as a new-format identifier.
pub fn new_own_id(parts: &[String]) -> String {
    format!("{PREFIX}{}{NEW_SUFFIX}", parts.join(NEW_SEPARATOR))
}
