//! Subcommand implementations

use anyhow::{Context, Result};
use spinsolve_io::{
    AcquisitionParameters, Complex64, Endianness, FILE_SIZE_KEY, Overwrite, ReadOptions,
    SampleArray, format_parameters, read_dir, read_dir_with, write_dir,
};
use std::path::Path;

/// Synthetic FID settings
pub struct Tone {
    pub points: u32,
    pub dwell_ms: f64,
    pub freq_hz: f64,
    pub t2_ms: f64,
    pub b1_mhz: f64,
}

pub fn info(path: &Path, big_endian: bool) -> Result<()> {
    let options = ReadOptions::default().with_endianness(Endianness::from_big(big_endian));
    let dataset = read_dir_with(path, &options)
        .with_context(|| format!("Failed to read Spinsolve directory {}", path.display()))?;

    println!("Parameters: {}", dataset.params.len());
    for key in ["Protocol", "Solvent", "Sample", "rxChannel"] {
        if let Some(value) = dataset.params.get(key) {
            println!("  {}: {}", key, value);
        }
    }
    if let Some(dwell) = dataset.params.dwell_time_seconds() {
        println!("Dwell time: {} s", dwell);
    }

    match &dataset.samples {
        Some(samples) => {
            let (rows, cols) = samples.shape();
            println!("Samples: {} ({} x {})", samples.len(), rows, cols);
            if let Some(size) = dataset.params.get_number(FILE_SIZE_KEY) {
                println!("File size: {} bytes", size);
            }
        }
        None => println!("Samples: none (no binary file)"),
    }

    Ok(())
}

pub fn params(path: &Path, json: bool) -> Result<()> {
    let dataset =
        read_dir(path).with_context(|| format!("Failed to read Spinsolve directory {}", path.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&dataset.params)?);
    } else {
        println!("{}", format_parameters(&dataset.params));
    }
    Ok(())
}

pub fn convert(
    input: &Path,
    output: &Path,
    big_endian_in: bool,
    big_endian_out: bool,
    overwrite: bool,
) -> Result<()> {
    let options = ReadOptions::default().with_endianness(Endianness::from_big(big_endian_in));
    let mut dataset = read_dir_with(input, &options)
        .with_context(|| format!("Failed to read Spinsolve directory {}", input.display()))?;

    let samples = dataset
        .samples
        .take()
        .with_context(|| format!("No binary file in {}", input.display()))?;
    if !samples.is_one_dimensional() {
        tracing::warn!(
            "{} x {} data will be written as {} single-acquisition points",
            samples.rows(),
            samples.cols(),
            samples.len()
        );
    }

    // Derived from the source binary, not a parameter of the output
    dataset.params.remove(FILE_SIZE_KEY);

    write_dir(
        output,
        &dataset.params,
        &samples,
        Endianness::from_big(big_endian_out),
        Overwrite::from_flag(overwrite),
    )
    .with_context(|| format!("Failed to write Spinsolve directory {}", output.display()))
}

pub fn synth(output: &Path, tone: &Tone, big_endian: bool, overwrite: bool) -> Result<()> {
    if tone.dwell_ms <= 0.0 || tone.t2_ms <= 0.0 {
        anyhow::bail!("Dwell time and T2 must be positive");
    }

    let dwell = tone.dwell_ms / 1000.0;
    let t2 = tone.t2_ms / 1000.0;
    let data = (0..tone.points)
        .map(|k| {
            let t = k as f64 * dwell;
            let phase = 2.0 * std::f64::consts::PI * tone.freq_hz * t;
            Complex64::from_polar((-t / t2).exp(), phase)
        })
        .collect();
    let samples = SampleArray::from_vec_1d(data);

    let params = AcquisitionParameters::new(tone.b1_mhz, 0.0, dwell, 0.0, tone.points).to_parameter_map();

    write_dir(
        output,
        &params,
        &samples,
        Endianness::from_big(big_endian),
        Overwrite::from_flag(overwrite),
    )
    .with_context(|| format!("Failed to write Spinsolve directory {}", output.display()))
}
