//! Spinsolve FID binary format (`data.1d`)
//!
//! # File Structure
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ Header (32 bytes)                            │
//! │ ├─ tag: [u8; 12]    ASCII magic/version      │
//! │ ├─ tag word: [u8; 4]                         │
//! │ └─ n1, n2, n3, n4: i32                       │
//! ├──────────────────────────────────────────────┤
//! │ Prefix block: n1·n2·n3·n4 x f32 (if n2 == 1) │
//! ├──────────────────────────────────────────────┤
//! │ Interleaved (real, imag) f32 pairs           │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Every word uses the same byte order, chosen by the caller. Imaginary parts
//! are stored negated: decode yields `real - i·imag`, encode writes
//! `(real, -imag)`.
//!
//! Encoding only produces the single-acquisition layout (`n2 == 1` with a time
//! axis prefix). Genuine 2-D data can be decoded but not written back as 2-D.

mod header;
mod read;
mod write;


pub use header::{BinaryHeader, Endianness, HEADER_SIZE, PROLOGUE_SIZE, PROLOGUE_WORDS};
pub use read::{DecodedBinary, decode_binary};
pub use write::encode_binary;
