//! Types for reading RWD archives
//!

use binrw::BinRead;
use std::{
    fs::File,
    io::{self, Read, Seek, SeekFrom},
    path::Path,
};
use tracing::info;

use crate::{
    error::{Error, Result},
    path,
    types::{FileRecord, IntroSection, Metadata, RegionSection, DIRECTORY_PADDING_LEN, METADATA_LEN, SIGNATURE},
};

/// RWD archive reader
///
/// Reads the intro block and the metadata trailer once, then walks the
/// directory region lazily.
///
/// ```no_run
/// use std::io::prelude::*;
///
/// fn list_rwd_contents(reader: impl Read + Seek) -> rwd_tgck::error::Result<()> {
///     let mut rwd = rwd_tgck::RwdArchive::new(reader)?;
///
///     rwd.for_each_entry(|_, _, record| {
///         println!("{}", rwd_tgck::path::display_name(&record.filename));
///         Ok(())
///     })
/// }
/// ```
pub struct RwdArchive<R> {
    reader: R,
    intro: IntroSection,
    metadata: Metadata,
}

impl<R> RwdArchive<R> {
    /// The intro block read from the start of the stream.
    pub fn intro(&self) -> &IntroSection {
        &self.intro
    }

    /// The metadata trailer read from the end of the stream.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Unwrap and return the inner reader object
    ///
    /// The position of the reader is undefined.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read + Seek> RwdArchive<R> {
    /// Open an RWD archive, validating its signature and metadata.
    pub fn new(mut reader: R) -> Result<Self> {
        let intro = Self::read_intro(&mut reader)?;
        let metadata = Self::read_metadata(&mut reader)?;

        Ok(RwdArchive {
            reader,
            intro,
            metadata,
        })
    }

    fn read_intro(reader: &mut R) -> Result<IntroSection> {
        reader.seek(SeekFrom::Start(0))?;
        let intro = IntroSection::read(reader)?;

        if intro.signature != SIGNATURE {
            return Err(Error::MissingSignature);
        }

        Ok(intro)
    }

    fn read_metadata(reader: &mut R) -> Result<Metadata> {
        reader.seek(SeekFrom::End(-(METADATA_LEN as i64)))?;
        let metadata = Metadata::read(reader)?;

        if metadata.header.length1 != metadata.header.length2 {
            return Err(Error::MismatchedLengths("Header"));
        }
        if metadata.files.length1 != metadata.files.length2 {
            return Err(Error::MismatchedLengths("Files"));
        }
        if metadata.footer.length1 != metadata.footer.length2 {
            return Err(Error::MismatchedLengths("Footer"));
        }

        Ok(metadata)
    }

    /// Walk the directory region, invoking `visit` once per record in
    /// archive order.
    ///
    /// The visitor receives the underlying stream together with the Files
    /// section, so it may seek to `files.offset + record.data_offset` and
    /// read that record's bytes; the walker itself only seeks within the
    /// directory. The walk stops before the four padding bytes that trail
    /// the last record.
    pub fn for_each_entry<F>(&mut self, mut visit: F) -> Result<()>
    where
        F: FnMut(&mut R, &RegionSection, FileRecord) -> Result<()>,
    {
        let mut cursor = self.metadata.footer.offset;
        let end = self.metadata.footer.offset + self.metadata.footer.length1;

        while cursor + DIRECTORY_PADDING_LEN < end {
            self.reader.seek(SeekFrom::Start(cursor))?;
            let record = FileRecord::read(&mut self.reader)?;
            cursor = self.reader.stream_position()?;

            visit(&mut self.reader, &self.metadata.files, record)?;
        }

        Ok(())
    }

    /// Collect every directory record, preserving archive order.
    pub fn read_entries(&mut self) -> Result<Vec<FileRecord>> {
        let mut entries = Vec::new();
        self.for_each_entry(|_, _, record| {
            entries.push(record);
            Ok(())
        })?;
        Ok(entries)
    }

    /// Extract every file into `target`, creating intermediate directories
    /// as needed.
    ///
    /// Fails if a target file cannot be created or the archive ends before
    /// an entry's claimed size is reached.
    pub fn extract_to(&mut self, target: &Path) -> Result<()> {
        self.for_each_entry(|reader, files, record| {
            let name = path::display_name(&record.filename);
            info!("extracting {name}");

            reader.seek(SeekFrom::Start(files.offset + record.data_offset))?;

            let output_path = target.join(path::relative_path(&record.filename)?);
            if let Some(parent) = output_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let mut output = File::create_new(&output_path)?;

            let copied = io::copy(&mut reader.by_ref().take(record.size), &mut output)?;
            if copied != record.size {
                return Err(Error::ShortRead {
                    name,
                    expected: record.size,
                    actual: copied,
                });
            }

            Ok(())
        })
    }
}
