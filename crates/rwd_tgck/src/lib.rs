//! This library handles reading from, unpacking and repacking **RWD** archives.
//!
//! # RWD (TGCK) Archive Format Documentation
//!
//! The RWD format is a custom binary container used to ship game assets: an
//! arbitrary set of named files packed contiguously into one blob, described
//! by a directory of records near the end of the file. The layout follows the
//! community findings published at
//! <https://www.watto.org/specs.html?specs=Archive_RWD_TGCK>.
//!
//! ## File Structure
//!
//! An RWD file consists of an intro block, the file data region, the
//! directory region, and a fixed-size metadata trailer.
//!
//! ### Intro Block
//!
//! Located at offset 0:
//!
//! | Offset (bytes) | Field              | Description                                      |
//! |----------------|--------------------|--------------------------------------------------|
//! | 0x0000         | Signature          | 4 bytes: "TGCK"                                  |
//! | 0x0004         | Unknown            | 3 × 4 bytes: unknown, copied through on repack   |
//! | 0x0010         | Description Length | 2 bytes: length of the description in UTF-16 code units |
//! | 0x0012         | Description        | (Length × 2) bytes: UTF-16 description string    |
//! | ...            | Zeros              | 4 bytes: always zero                             |
//! | ...            | Unknown            | 4 bytes: unknown, copied through on repack       |
//!
//! ### Metadata Trailer
//!
//! Located at (end of file − 292 bytes): 4 bytes of padding followed by three
//! identically shaped sections — *Header*, *Files* and *Footer* — each 96
//! bytes:
//!
//! | Offset (bytes) | Field     | Description                                         |
//! |----------------|-----------|-----------------------------------------------------|
//! | 0x0000         | Label     | 64 bytes: text label naming the section             |
//! | 0x0040         | Offset    | 8 bytes: absolute offset of the described region    |
//! | 0x0048         | Length 1  | 8 bytes: length of the described region             |
//! | 0x0050         | Unknown   | 2 × 4 bytes: unknown, copied through on repack      |
//! | 0x0058         | Length 2  | 8 bytes: redundant copy of Length 1                 |
//!
//! The two length fields of every section must match; a mismatch marks the
//! archive as corrupt. The *Files* section's offset is the base all per-file
//! data offsets are relative to, and the *Footer* section delimits the
//! directory region.
//!
//! ### Directory Region
//!
//! A sequence of records at [Footer.offset, Footer.offset + Footer.length),
//! one per archived file, in an order that is preserved across repacks:
//!
//! | Offset (bytes) | Field           | Description                                        |
//! |----------------|-----------------|----------------------------------------------------|
//! | 0x0000         | Type Id         | 4 bytes: unknown tag, copied through on repack     |
//! | 0x0004         | Filename Length | 2 bytes: length of the filename in UTF-16 code units |
//! | 0x0006         | Filename        | (Length × 2) bytes: UTF-16 filename path           |
//! | ...            | Data Offset     | 8 bytes: offset of the file's bytes, relative to the Files section offset |
//! | ...            | Size            | 8 bytes: file size in bytes                        |
//! | ...            | Zeros           | 4 bytes: always zero                               |
//!
//! The order in which the byte ranges appear in the data region is allowed to
//! differ from directory order; only directory order is meaningful.
//!
//! ## Additional Information
//!
//! - **File Extension**: `.rwd`
//! - **Endianness**: Little-endian for all multi-byte integers
//! - **Strings**: UTF-16, length-prefixed in code units, no terminator
//! - **Compression**: None

pub mod error;
pub mod path;
pub mod read;
pub mod types;
pub mod write;

pub use read::RwdArchive;
pub use write::{repack, RwdRepacker};

#[cfg(test)]
pub(crate) mod testsupport;
