//! Spinsolve data directories
//!
//! A directory holds `acqu.par` / `protocol.par` parameter files and the FID
//! binary `data.1d`. Reading merges whichever parameter files exist (later
//! files override earlier keys) and decodes the binary if present. Writing
//! emits `acqu.par` and `data.1d`, each independently: a failure on the
//! binary leaves an already written parameter file in place.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::binary::{DecodedBinary, Endianness, decode_binary, encode_binary};
use crate::error::{Result, SpinsolveError};
use crate::params::{DWELL_TIME_KEY, ParameterMap, format_parameters, parse_parameters};
use crate::samples::SampleArray;

/// Default FID binary file
pub const BINARY_FILE: &str = "data.1d";

/// Acquisition parameter file (read first, written by [`write_dir`])
pub const ACQUISITION_PARAMETER_FILE: &str = "acqu.par";

/// Protocol parameter file (read second)
pub const PROTOCOL_PARAMETER_FILE: &str = "protocol.par";

/// Default parameter files in merge order
pub const DEFAULT_PARAMETER_FILES: [&str; 2] = [ACQUISITION_PARAMETER_FILE, PROTOCOL_PARAMETER_FILE];

/// Parameter key carrying the byte size of the binary file
pub const FILE_SIZE_KEY: &str = "FILE_SIZE";

/// What to do when a write target already exists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Fail with [`SpinsolveError::FileExists`]
    #[default]
    Deny,
    /// Truncate and rewrite
    Replace,
}

impl Overwrite {
    pub fn from_flag(overwrite: bool) -> Self {
        if overwrite {
            Overwrite::Replace
        } else {
            Overwrite::Deny
        }
    }
}

/// File names and byte order used by [`read_dir_with`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOptions {
    pub binary_file: String,
    pub parameter_files: Vec<String>,
    pub endianness: Endianness,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            binary_file: BINARY_FILE.to_string(),
            parameter_files: DEFAULT_PARAMETER_FILES.iter().map(|f| f.to_string()).collect(),
            endianness: Endianness::default(),
        }
    }
}

impl ReadOptions {
    pub fn with_binary_file(mut self, name: impl Into<String>) -> Self {
        self.binary_file = name.into();
        self
    }

    pub fn with_parameter_files<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameter_files = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_endianness(mut self, endianness: Endianness) -> Self {
        self.endianness = endianness;
        self
    }
}

/// Parameters and samples read from one directory
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub params: ParameterMap,
    /// `None` when the directory has no binary file
    pub samples: Option<SampleArray>,
}

/// Read a directory with the default file names (little-endian binary)
pub fn read_dir(path: impl AsRef<Path>) -> Result<Dataset> {
    read_dir_with(path, &ReadOptions::default())
}

/// Read a directory, or the directory containing a file
///
/// Missing parameter or binary files are skipped. A missing directory fails
/// with [`SpinsolveError::PathNotFound`]; a present but malformed file fails
/// with its codec error.
pub fn read_dir_with(path: impl AsRef<Path>, options: &ReadOptions) -> Result<Dataset> {
    let dir = resolve_dir(path.as_ref())?;

    let mut params = ParameterMap::new();
    for name in &options.parameter_files {
        let file = dir.join(name);
        if !file.is_file() {
            tracing::debug!("Skipping missing parameter file {:?}", file);
            continue;
        }
        params.merge(read_parameter_file(&file)?);
    }

    let bin_path = dir.join(&options.binary_file);
    let samples = if bin_path.is_file() {
        let decoded = read_binary_file(&bin_path, options.endianness)?;
        params.insert(FILE_SIZE_KEY, decoded.file_size);
        Some(decoded.samples)
    } else {
        tracing::debug!("Skipping missing binary file {:?}", bin_path);
        None
    };

    Ok(Dataset { params, samples })
}

/// Write `acqu.par` and `data.1d` into `path`, creating it if needed
///
/// The binary time axis uses the `dwellTime` parameter (milliseconds), which
/// must be present, numeric and positive. It is checked before any file is
/// created. Only the single-acquisition binary layout is
/// written.
pub fn write_dir(
    path: impl AsRef<Path>,
    params: &ParameterMap,
    samples: &SampleArray,
    endianness: Endianness,
    overwrite: Overwrite,
) -> Result<()> {
    let dir = path.as_ref();
    let dwell_time = params
        .dwell_time_seconds()
        .ok_or_else(|| SpinsolveError::MissingParameter(DWELL_TIME_KEY.to_string()))?;
    if !dwell_time.is_finite() || dwell_time <= 0.0 {
        return Err(SpinsolveError::InvalidDwellTime(dwell_time));
    }

    fs::create_dir_all(dir).map_err(|e| SpinsolveError::file(dir, e))?;

    write_parameter_file(dir.join(ACQUISITION_PARAMETER_FILE), params, overwrite)?;
    write_binary_file(dir.join(BINARY_FILE), samples, dwell_time, endianness, overwrite)?;
    Ok(())
}

/// Read and parse one `.par` file
pub fn read_parameter_file(path: impl AsRef<Path>) -> Result<ParameterMap> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| SpinsolveError::file(path, e))?;
    tracing::debug!("Parsing parameter file {:?}", path);
    parse_parameters(&text)
}

/// Read and decode one FID binary file
pub fn read_binary_file(path: impl AsRef<Path>, endianness: Endianness) -> Result<DecodedBinary> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| SpinsolveError::file(path, e))?;
    tracing::debug!("Decoding binary file {:?} ({} bytes)", path, bytes.len());
    decode_binary(&bytes, endianness)
}

/// Write one `.par` file
pub fn write_parameter_file(path: impl AsRef<Path>, params: &ParameterMap, overwrite: Overwrite) -> Result<()> {
    let path = path.as_ref();
    write_file(path, format_parameters(params).as_bytes(), overwrite)?;
    tracing::info!("Wrote {} parameters to {:?}", params.len(), path);
    Ok(())
}

/// Encode and write one FID binary file
pub fn write_binary_file(
    path: impl AsRef<Path>,
    samples: &SampleArray,
    dwell_time: f64,
    endianness: Endianness,
    overwrite: Overwrite,
) -> Result<()> {
    let path = path.as_ref();
    let bytes = encode_binary(samples, dwell_time, endianness)?;
    write_file(path, &bytes, overwrite)?;
    tracing::info!("Wrote {} samples to {:?}", samples.len(), path);
    Ok(())
}

fn resolve_dir(path: &Path) -> Result<PathBuf> {
    let dir = if path.is_file() {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    } else {
        path.to_path_buf()
    };

    if !dir.is_dir() {
        return Err(SpinsolveError::PathNotFound(dir));
    }
    Ok(dir)
}

/// Write a whole file; the handle is closed on every path
fn write_file(path: &Path, contents: &[u8], overwrite: Overwrite) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true);
    match overwrite {
        Overwrite::Deny => options.create_new(true),
        Overwrite::Replace => options.create(true).truncate(true),
    };

    let mut file = options.open(path).map_err(|e| match e.kind() {
        io::ErrorKind::AlreadyExists => SpinsolveError::FileExists(path.to_path_buf()),
        _ => SpinsolveError::file(path, e),
    })?;
    file.write_all(contents)
        .and_then(|()| file.flush())
        .map_err(|e| SpinsolveError::file(path, e))
}
