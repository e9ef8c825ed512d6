//! Spinsolve `.par` parameter files
//!
//! - `value` - number/string values and type coercion
//! - `map` - insertion-ordered parameter map
//! - `read` - text to map
//! - `write` - map to text

mod map;
mod read;
mod value;
mod write;

#[cfg(test)]
mod tests;

pub use map::{DWELL_TIME_KEY, ParameterMap};
pub use read::parse_parameters;
pub use value::ParamValue;
pub use write::{KEY_WIDTH, format_parameters};
