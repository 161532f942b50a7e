//! Helpers for constructing synthetic archives in unit tests.

use std::io::{Cursor, Write};

use binrw::BinWrite;
use widestring::U16String;

use crate::types::{
    FileRecord, IntroSection, Metadata, RegionSection, DIRECTORY_PADDING_LEN, SIGNATURE,
};

pub(crate) fn sample_intro() -> IntroSection {
    IntroSection {
        signature: SIGNATURE,
        unknown1: [0x01, 0x00, 0x00, 0x00],
        unknown2: [0x10, 0x20, 0x30, 0x40],
        unknown3: [0xFF, 0xFF, 0xFF, 0xFF],
        description: U16String::from_str("test archive"),
        zeros: [0; 4],
        unknown4: [0xAB, 0xCD, 0xEF, 0x01],
    }
}

pub(crate) fn section(label: &[u8], offset: u64, length: u64) -> RegionSection {
    let mut text = [0u8; 64];
    text[..label.len()].copy_from_slice(label);
    RegionSection {
        label: text,
        offset,
        length1: length,
        unknown1: [0; 4],
        unknown2: [0; 4],
        length2: length,
    }
}

/// Build a complete archive whose directory lists `files` in the given order,
/// with the data region laid out following `data_order` (indices into
/// `files`). Diverging the two orders is the interesting case: directory
/// order is the visible one, data order only decides byte placement.
pub(crate) fn build_archive(files: &[(&str, &[u8])], data_order: &[usize]) -> Vec<u8> {
    assert_eq!(files.len(), data_order.len());

    let mut out = Cursor::new(Vec::new());
    sample_intro().write(&mut out).unwrap();

    let data_base = out.position();
    let mut offsets = vec![0u64; files.len()];
    for &index in data_order {
        offsets[index] = out.position() - data_base;
        out.write_all(files[index].1).unwrap();
    }

    let directory_offset = out.position();
    for (index, (name, data)) in files.iter().enumerate() {
        FileRecord {
            type_id: [0x02, 0x00, 0x00, 0x00],
            filename: U16String::from_str(name),
            data_offset: offsets[index],
            size: data.len() as u64,
            zeros: [0; 4],
        }
        .write(&mut out)
        .unwrap();
    }
    let directory_length = out.position() - directory_offset + DIRECTORY_PADDING_LEN;

    Metadata {
        padding: [0; 4],
        header: section(b"Header", 0, data_base),
        files: section(b"Files", data_base, directory_offset - data_base),
        footer: section(b"Footer", directory_offset, directory_length),
    }
    .write(&mut out)
    .unwrap();

    out.into_inner()
}
