//! `data.1d` decoding

use byteorder::{BigEndian, ByteOrder, LittleEndian, ReadBytesExt};
use num_complex::Complex64;
use std::io::Cursor;

use super::header::{BinaryHeader, Endianness, HEADER_SIZE};
use crate::error::{Result, SpinsolveError};
use crate::samples::SampleArray;

/// Result of decoding a `data.1d` buffer
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedBinary {
    /// Parsed header, prologue kept verbatim
    pub header: BinaryHeader,
    /// Byte length of the whole input (reported as `FILE_SIZE`)
    pub file_size: u64,
    /// Complex samples shaped `(n1, n2)`
    pub samples: SampleArray,
}

/// Decode a complete `data.1d` buffer
///
/// When the second dimension is 1 the prefix block (`n1·n2·n3·n4` floats) is
/// skipped before the interleaved pairs; otherwise the whole payload is pairs,
/// reshaped column-major to `(n1, n2)`. Each pair `(re, im)` becomes `re - i·im`.
///
/// The payload must hold exactly the number of floats the header declares.
pub fn decode_binary(bytes: &[u8], endianness: Endianness) -> Result<DecodedBinary> {
    match endianness {
        Endianness::Little => decode_with::<LittleEndian>(bytes),
        Endianness::Big => decode_with::<BigEndian>(bytes),
    }
}

fn decode_with<B: ByteOrder>(bytes: &[u8]) -> Result<DecodedBinary> {
    if bytes.len() < HEADER_SIZE {
        return Err(SpinsolveError::MalformedBinary(format!(
            "file too small for header: {} bytes (need {})",
            bytes.len(),
            HEADER_SIZE
        )));
    }

    let mut cursor = Cursor::new(bytes);
    let header = BinaryHeader::read_from::<B, _>(&mut cursor)?;
    let (n1, n2) = header.shape()?;

    let payload_len = bytes.len() - HEADER_SIZE;
    if payload_len % 4 != 0 {
        return Err(SpinsolveError::MalformedBinary(format!(
            "payload of {} bytes is not a whole number of f32 words",
            payload_len
        )));
    }
    let float_count = payload_len / 4;

    let overflow =
        || SpinsolveError::MalformedBinary(format!("dimension product overflows: {:?}", header.dims));
    let pair_floats = n1
        .checked_mul(n2)
        .and_then(|n| n.checked_mul(2))
        .ok_or_else(overflow)?;
    let skip = if header.is_single_acquisition() {
        header.prefix_len()?
    } else {
        0
    };
    let expected = skip.checked_add(pair_floats).ok_or_else(overflow)?;

    if float_count != expected {
        return Err(SpinsolveError::MalformedBinary(format!(
            "header {:?} declares {} f32 words, payload holds {}",
            header.dims, expected, float_count
        )));
    }

    tracing::debug!(
        dims = ?header.dims,
        single_acquisition = header.is_single_acquisition(),
        "decoding FID binary"
    );

    let mut floats = vec![0f32; float_count];
    cursor.read_f32_into::<B>(&mut floats)?;

    let data: Vec<Complex64> = floats[skip..]
        .chunks_exact(2)
        .map(|pair| Complex64::new(pair[0] as f64, -(pair[1] as f64)))
        .collect();

    // With n2 == 1 row- and column-major orders coincide
    let samples = SampleArray::from_column_major((n1, n2), data)?;

    Ok(DecodedBinary {
        header,
        file_size: bytes.len() as u64,
        samples,
    })
}
