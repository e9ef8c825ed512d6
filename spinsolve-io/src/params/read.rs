//! `.par` text decoding

use super::map::ParameterMap;
use super::value::ParamValue;
use crate::error::{Result, SpinsolveError};

/// Parse `.par` text into a [`ParameterMap`]
///
/// Parsing stops at the first blank line, even if assignments follow it.
/// The first `=` on each line separates key from value; a line without one is
/// rejected with its 1-based line number. Any further `=` stays in the value
/// (`Options = Scan(Mode=Fast)` gives `Scan(Mode=Fast)`) rather than cutting
/// the value at the second `=` as the vendor reader does.
///
/// # Example
/// ```
/// use spinsolve_io::{ParamValue, parse_parameters};
///
/// let params = parse_parameters("nrPnts = 16384\nSolvent = \"CDCl3\"").unwrap();
/// assert_eq!(params.get("nrPnts"), Some(&ParamValue::Number(16384.0)));
/// assert_eq!(params.get_text("Solvent"), Some("CDCl3"));
/// ```
pub fn parse_parameters(text: &str) -> Result<ParameterMap> {
    let mut params = ParameterMap::new();

    for (idx, line) in text.lines().enumerate() {
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }

        let Some((key, raw)) = line.split_once('=') else {
            return Err(SpinsolveError::MalformedParameterLine {
                line: idx + 1,
                content: line.to_string(),
            });
        };

        params.insert(key.trim(), ParamValue::parse(raw.trim()));
    }

    Ok(params)
}
