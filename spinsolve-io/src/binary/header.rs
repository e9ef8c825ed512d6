//! `data.1d` header (32 bytes)

use byteorder::{BigEndian, ByteOrder, LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, Read, Write};

use crate::error::{Result, SpinsolveError};

/// Header size in bytes (16-byte prologue + 4 dimension words)
pub const HEADER_SIZE: usize = 32;

/// Opaque magic/version prologue size in bytes
pub const PROLOGUE_SIZE: usize = 16;

/// Prologue words written by the encoder
///
/// Read as big-endian bytes the first three spell `PROS`, `DATA`, `V1.1`;
/// the fourth is a format tag word.
pub const PROLOGUE_WORDS: [i32; 4] = [1347571539, 1145132097, 1446063665, 504];

/// Byte order of every word in a binary file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Endianness {
    /// Instrument default
    #[default]
    Little,
    Big,
}

impl Endianness {
    /// `true` selects big-endian
    pub fn from_big(big: bool) -> Self {
        if big {
            Endianness::Big
        } else {
            Endianness::Little
        }
    }
}

/// Parsed binary header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryHeader {
    /// Magic/version prologue, preserved verbatim
    pub prologue: [u8; PROLOGUE_SIZE],
    /// Dimension words `(n1, n2, n3, n4)`
    pub dims: [i32; 4],
}

impl BinaryHeader {
    /// Header for `n` samples in the single-acquisition layout `(n, 1, 1, 1)`
    pub fn single_acquisition(n: i32, endianness: Endianness) -> Self {
        let mut prologue = [0u8; PROLOGUE_SIZE];
        match endianness {
            Endianness::Little => LittleEndian::write_i32_into(&PROLOGUE_WORDS, &mut prologue),
            Endianness::Big => BigEndian::write_i32_into(&PROLOGUE_WORDS, &mut prologue),
        }
        Self {
            prologue,
            dims: [n, 1, 1, 1],
        }
    }

    /// Read the 32-byte header
    pub fn read_from<B: ByteOrder, R: Read>(reader: &mut R) -> io::Result<Self> {
        let mut prologue = [0u8; PROLOGUE_SIZE];
        reader.read_exact(&mut prologue)?;

        let mut dims = [0i32; 4];
        reader.read_i32_into::<B>(&mut dims)?;

        Ok(Self { prologue, dims })
    }

    /// Write the 32-byte header
    pub fn write_to<B: ByteOrder, W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.prologue)?;
        for dim in self.dims {
            writer.write_i32::<B>(dim)?;
        }
        Ok(())
    }

    /// The 12-byte ASCII tag at the start of the prologue
    pub fn tag(&self) -> &[u8] {
        &self.prologue[..12]
    }

    /// Second dimension equals 1: a time axis prefix precedes the samples
    pub fn is_single_acquisition(&self) -> bool {
        self.dims[1] == 1
    }

    /// Dimensions as sizes; negative words are rejected
    pub fn sizes(&self) -> Result<[usize; 4]> {
        let mut sizes = [0usize; 4];
        for (size, &dim) in sizes.iter_mut().zip(&self.dims) {
            *size = usize::try_from(dim).map_err(|_| {
                SpinsolveError::MalformedBinary(format!("negative dimension in header: {:?}", self.dims))
            })?;
        }
        Ok(sizes)
    }

    /// Shape `(n1, n2)` of the decoded sample array
    pub fn shape(&self) -> Result<(usize, usize)> {
        let [n1, n2, _, _] = self.sizes()?;
        Ok((n1, n2))
    }

    /// Length of the prefix block in floats (`n1·n2·n3·n4`)
    pub fn prefix_len(&self) -> Result<usize> {
        self.sizes()?
            .iter()
            .try_fold(1usize, |acc, &n| acc.checked_mul(n))
            .ok_or_else(|| {
                SpinsolveError::MalformedBinary(format!("dimension product overflows: {:?}", self.dims))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prologue_spells_tag() {
        let header = BinaryHeader::single_acquisition(4, Endianness::Big);
        assert_eq!(header.tag(), b"PROSDATAV1.1");
        assert_eq!(&header.prologue[12..], &504i32.to_be_bytes());

        let header = BinaryHeader::single_acquisition(4, Endianness::Little);
        assert_eq!(header.tag(), b"SORPATAD1.1V");
        assert_eq!(&header.prologue[12..], &504i32.to_le_bytes());
    }

    #[test]
    fn test_header_roundtrip() {
        let header = BinaryHeader {
            prologue: *b"0123456789abcdef",
            dims: [8, 2, 1, 1],
        };

        let mut buffer = Vec::new();
        header.write_to::<BigEndian, _>(&mut buffer).unwrap();
        assert_eq!(buffer.len(), HEADER_SIZE);
        assert_eq!(&buffer[16..20], &[0, 0, 0, 8]);

        let parsed = BinaryHeader::read_from::<BigEndian, _>(&mut Cursor::new(&buffer)).unwrap();
        assert_eq!(parsed, header);
    }

    #[test]
    fn test_negative_dimension_rejected() {
        let header = BinaryHeader {
            prologue: [0; PROLOGUE_SIZE],
            dims: [4, -1, 1, 1],
        };
        assert!(matches!(header.shape(), Err(SpinsolveError::MalformedBinary(_))));
        assert!(!header.is_single_acquisition());
    }

    #[test]
    fn test_prefix_len() {
        let header = BinaryHeader {
            prologue: [0; PROLOGUE_SIZE],
            dims: [16, 1, 2, 3],
        };
        assert_eq!(header.prefix_len().unwrap(), 96);
        assert_eq!(header.shape().unwrap(), (16, 1));
    }

    #[test]
    fn test_endianness_from_big() {
        assert_eq!(Endianness::from_big(true), Endianness::Big);
        assert_eq!(Endianness::from_big(false), Endianness::Little);
        assert_eq!(Endianness::default(), Endianness::Little);
    }
}
