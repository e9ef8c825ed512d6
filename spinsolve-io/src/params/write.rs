//! `.par` text encoding

use super::map::ParameterMap;

/// Minimum width of the key column
pub const KEY_WIDTH: usize = 25;

/// Format a [`ParameterMap`] as `.par` text
///
/// One `key = value` line per entry, keys left-aligned to [`KEY_WIDTH`]
/// columns, no trailing newline. Strings are written without quotes.
pub fn format_parameters(params: &ParameterMap) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{:<width$} = {}", key, value, width = KEY_WIDTH))
        .collect::<Vec<_>>()
        .join("\n")
}
