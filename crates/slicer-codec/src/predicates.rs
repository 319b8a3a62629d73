//! Small predicates used around the slicer.

use regex::Regex;
use slicer_model::HierarchyDataPoint;

/// Marker the host embeds in mobile user-agent strings.
const MOBILE_MARKER: &str = "PBIMobile";

/// Match a value against a wildcard rule where `*` matches any run of
/// characters, anchored at both ends.
///
/// Other regex metacharacters in the rule pass through unescaped — the
/// search box has always behaved that way and saved searches depend on it.
/// A rule that fails to compile matches nothing.
pub fn wildcard_filter(value: &str, rule: &str) -> bool {
    let pattern = format!("^{}$", rule.split('*').collect::<Vec<_>>().join(".*"));
    match Regex::new(&pattern) {
        Ok(regex) => regex.is_match(value),
        Err(_) => false,
    }
}

/// True when the user agent identifies the host's mobile shell.
pub fn check_mobile(user_agent: &str) -> bool {
    user_agent.contains(MOBILE_MARKER)
}

/// Number of settled tree levels: one past the deepest partially-selected
/// level, or zero when no node is partially selected.
pub fn common_level(points: &[HierarchyDataPoint]) -> i32 {
    points
        .iter()
        .filter(|point| point.partial_selected)
        .fold(-1, |deepest, point| deepest.max(point.level))
        + 1
}
