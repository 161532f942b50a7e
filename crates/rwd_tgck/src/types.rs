//! Base types for the structure of an RWD file.

use binrw::{binrw, BinRead, BinWrite};
use widestring::U16String;

/// Signature bytes every RWD file starts with
pub const SIGNATURE: [u8; 4] = *b"TGCK";

/// Encoded size of the [`Metadata`] trailer: 4 bytes of padding plus three
/// 96-byte sections
pub const METADATA_LEN: u64 = 292;

/// Size of the padding field that follows the last directory record; the
/// directory walk stops before it
pub const DIRECTORY_PADDING_LEN: u64 = 4;

/// RWD intro block
///
/// Read once from offset 0 and written back unchanged when repacking. The
/// three unknown fields carry no known meaning and are preserved verbatim.
#[binrw]
#[brw(little)]
#[derive(Debug, Clone, PartialEq)]
pub struct IntroSection {
    /// Must equal [`SIGNATURE`]
    pub signature: [u8; 4],

    pub unknown1: [u8; 4],
    pub unknown2: [u8; 4],
    pub unknown3: [u8; 4],

    #[br(temp)]
    #[bw(try_calc = u16::try_from(description.len()))]
    description_length: u16,

    /// Free-form UTF-16 description of the archive
    #[br(count = description_length, map = |units: Vec<u16>| U16String::from_vec(units))]
    #[bw(map = |description: &U16String| description.as_vec().clone())]
    pub description: U16String,

    /// Always zero in known archives
    pub zeros: [u8; 4],

    pub unknown4: [u8; 4],
}

/// One of the three metadata sections: Header, Files or Footer
///
/// `length1` and `length2` are redundant copies; a disagreement between them
/// is treated as corruption.
#[derive(BinRead, BinWrite, Debug, Clone, PartialEq)]
#[brw(little)]
pub struct RegionSection {
    /// Text label naming the section
    pub label: [u8; 64],

    /// Absolute offset of the region this section describes
    pub offset: u64,

    /// Length of the described region
    pub length1: u64,

    pub unknown1: [u8; 4],
    pub unknown2: [u8; 4],

    /// Redundant copy of `length1`
    pub length2: u64,
}

/// RWD metadata trailer
///
/// Located at (end of file − [`METADATA_LEN`]). The Files section's offset is
/// the base for every directory record's data offset; the Footer section
/// delimits the directory region.
#[derive(BinRead, BinWrite, Debug, Clone, PartialEq)]
#[brw(little)]
pub struct Metadata {
    pub padding: [u8; 4],
    pub header: RegionSection,
    pub files: RegionSection,
    pub footer: RegionSection,
}

/// RWD directory record
///
/// Describes one archived file. Records are stored contiguously in the
/// directory region; their order there is the archive's visible order and is
/// preserved when repacking, independently of where each file's bytes sit in
/// the data region.
#[binrw]
#[brw(little)]
#[derive(Debug, Clone, PartialEq)]
pub struct FileRecord {
    /// Unknown tag, preserved verbatim
    pub type_id: [u8; 4],

    #[br(temp)]
    #[bw(try_calc = u16::try_from(filename.len()))]
    filename_length: u16,

    /// UTF-16 filename path, `/` or `\` separated
    #[br(count = filename_length, map = |units: Vec<u16>| U16String::from_vec(units))]
    #[bw(map = |filename: &U16String| filename.as_vec().clone())]
    pub filename: U16String,

    /// Offset of this file's bytes, relative to the Files section offset
    pub data_offset: u64,

    /// File size in bytes
    pub size: u64,

    /// Always zero in known archives
    pub zeros: [u8; 4],
}
