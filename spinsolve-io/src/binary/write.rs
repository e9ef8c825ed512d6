//! `data.1d` encoding

use byteorder::{BigEndian, ByteOrder, LittleEndian, WriteBytesExt};

use super::header::{BinaryHeader, Endianness, HEADER_SIZE};
use crate::error::{Result, SpinsolveError};
use crate::samples::SampleArray;

/// Encode samples in the single-acquisition layout
///
/// Writes the constant prologue, dimensions `(n, 1, 1, 1)`, a time axis of
/// `n` points spaced by `dwell_time` seconds, then one `(re, -im)` pair per
/// sample in storage order. Pairs are interleaved, not a block of reals
/// followed by a block of imaginaries, so the output decodes back through
/// [`decode_binary`](super::decode_binary). The input shape is flattened;
/// 2-D layouts are never produced.
pub fn encode_binary(
    samples: &SampleArray,
    dwell_time: f64,
    endianness: Endianness,
) -> Result<Vec<u8>> {
    if !dwell_time.is_finite() || dwell_time <= 0.0 {
        return Err(SpinsolveError::InvalidDwellTime(dwell_time));
    }

    match endianness {
        Endianness::Little => encode_with::<LittleEndian>(samples, dwell_time, endianness),
        Endianness::Big => encode_with::<BigEndian>(samples, dwell_time, endianness),
    }
}

fn encode_with<B: ByteOrder>(
    samples: &SampleArray,
    dwell_time: f64,
    endianness: Endianness,
) -> Result<Vec<u8>> {
    let n = samples.len();
    let n_words = i32::try_from(n).map_err(|_| {
        SpinsolveError::MalformedBinary(format!("{} samples exceed the i32 dimension word", n))
    })?;

    let header = BinaryHeader::single_acquisition(n_words, endianness);
    let mut output = Vec::with_capacity(HEADER_SIZE + n * 3 * 4);
    header.write_to::<B, _>(&mut output)?;

    // Time axis: linspace(0, (n - 1) * dwell_time, n)
    for k in 0..n {
        output.write_f32::<B>((k as f64 * dwell_time) as f32)?;
    }

    for sample in samples {
        output.write_f32::<B>(sample.re as f32)?;
        output.write_f32::<B>(-sample.im as f32)?;
    }

    Ok(output)
}
