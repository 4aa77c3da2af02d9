//! Compiles a field search into a native filter expression.
//!
//! The native store only offers case-sensitive matching, and it rejects
//! inline flags such as `(?i)`. Case-insensitivity is therefore spelled out
//! one character at a time: `"norm"` becomes `[nN][oO][rR][mM]`. The
//! pattern is wrapped in `.*` on both sides so it matches anywhere in the
//! slot value.

use pimbridge_store::FilterExpression;
use tracing::debug;

use crate::field_map;

/// Characters that would change the meaning of a bracket class.
const CLASS_METACHARACTERS: &[char] = &['\\', '[', ']', '^', '-', '&', '~'];

/// Builds a "contains, ignoring case" pattern for `raw`.
///
/// Each character becomes a two-member class of its lower- and upper-case
/// forms. Characters without case still produce a class; class
/// metacharacters are escaped inside it.
pub fn case_insensitive_pattern(raw: &str) -> String {
    let mut pattern = String::with_capacity(raw.len() * 4 + 4);
    pattern.push_str(".*");
    for c in raw.chars() {
        pattern.push('[');
        push_class_member(&mut pattern, c.to_lowercase());
        push_class_member(&mut pattern, c.to_uppercase());
        pattern.push(']');
    }
    pattern.push_str(".*");
    pattern
}

fn push_class_member(pattern: &mut String, chars: impl Iterator<Item = char>) {
    for c in chars {
        if CLASS_METACHARACTERS.contains(&c) {
            pattern.push('\\');
        }
        pattern.push(c);
    }
}

/// Builds the filter for a search of `raw_filter` across `fields`.
///
/// Returns `None` when there is nothing to filter on: an absent or empty
/// search string, or no requested path that maps to a backing slot. One
/// regex comparison is produced per mapped slot, in caller path order and
/// then table order within a path, and they are OR-ed left to right.
pub fn build_filter<S: AsRef<str>>(
    fields: &[S],
    raw_filter: Option<&str>,
) -> Option<FilterExpression> {
    let raw = raw_filter.filter(|f| !f.is_empty())?;
    let pattern = case_insensitive_pattern(raw);

    let expression = fields
        .iter()
        .map(|path| path.as_ref())
        .filter(|path| !path.is_empty())
        .flat_map(field_map::lookup)
        .map(|&field| FilterExpression::regex(field, pattern.as_str()))
        .reduce(FilterExpression::or);

    match &expression {
        Some(expr) => debug!(filter = %expr, "Built contact filter"),
        None => debug!("No requested field maps to a searchable slot"),
    }
    expression
}
