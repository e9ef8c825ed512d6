//! Spinsolve-IO: codec for Spinsolve benchtop NMR data directories
//!
//! This crate reads and writes the two file kinds found in a Spinsolve
//! acquisition directory:
//!
//! - `data.1d` - raw FID binary: a 32-byte header followed by 32-bit float
//!   samples (see [`binary`])
//! - `acqu.par` / `protocol.par` - `key = value` text parameters with
//!   number/string coercion (see [`params`])
//!
//! [`read_dir`] and [`write_dir`] tie the two together.
//!
//! # Usage
//!
//! ```ignore
//! use spinsolve_io::{Endianness, Overwrite, read_dir, write_dir};
//!
//! let dataset = read_dir("experiments/1H-ethanol")?;
//! println!("Protocol: {:?}", dataset.params.get_text("Protocol"));
//! if let Some(fid) = &dataset.samples {
//!     println!("Points: {}", fid.len());
//!     write_dir("copy", &dataset.params, fid, Endianness::Little, Overwrite::Deny)?;
//! }
//! ```
//!
//! # Limitations
//!
//! - Only the single-acquisition binary layout is written; 2-D data decodes
//!   but is flattened on write.
//! - The 16-byte header prologue is not interpreted.
//! - Strings are written to `.par` files without quotes.

pub mod acquisition;
pub mod binary;
pub mod dir;
mod error;
pub mod params;
mod samples;

pub use acquisition::AcquisitionParameters;
pub use binary::{BinaryHeader, DecodedBinary, Endianness, decode_binary, encode_binary};
pub use dir::{
    ACQUISITION_PARAMETER_FILE, BINARY_FILE, DEFAULT_PARAMETER_FILES, Dataset, FILE_SIZE_KEY,
    Overwrite, PROTOCOL_PARAMETER_FILE, ReadOptions, read_binary_file, read_dir, read_dir_with,
    read_parameter_file, write_binary_file, write_dir, write_parameter_file,
};
pub use error::{Result, SpinsolveError};
pub use params::{DWELL_TIME_KEY, ParamValue, ParameterMap, format_parameters, parse_parameters};
pub use samples::SampleArray;

/// Complex sample type used by [`SampleArray`]
pub use num_complex::Complex64;
