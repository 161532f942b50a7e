//! Types for writing (repacking) RWD archives
//!

use binrw::BinWrite;
use std::{
    fs::{self, File},
    io::{self, ErrorKind, Seek, Write},
    path::{Path, PathBuf},
};
use tracing::{info, instrument};

use crate::{
    error::{Error, Result},
    path,
    read::RwdArchive,
    types::{FileRecord, IntroSection, Metadata},
};

/// RWD archive generator
///
/// Regenerates an archive from its original intro, metadata and directory
/// records, with every file's bytes re-read from a source directory tree.
/// File data is laid out in ascending original-offset order to keep the new
/// layout close to the old one; the directory is then written in archive
/// order, which is the order that must survive a repack. Only the footer's
/// directory offset changes in the metadata.
pub struct RwdRepacker<W: Write + Seek> {
    inner: W,
    intro: IntroSection,
    metadata: Metadata,
    entries: Vec<FileRecord>,
}

impl<W: Write + Seek> RwdRepacker<W> {
    /// Set up a repack into `inner` from one full read of the original
    /// archive.
    pub fn new(
        inner: W,
        intro: IntroSection,
        metadata: Metadata,
        entries: Vec<FileRecord>,
    ) -> RwdRepacker<W> {
        RwdRepacker {
            inner,
            intro,
            metadata,
            entries,
        }
    }

    /// Write the complete archive, taking file bytes from `source_dir`.
    ///
    /// Any missing or unreadable source file aborts the whole write.
    #[instrument(skip(self), err)]
    pub fn finish(mut self, source_dir: &Path) -> Result<W> {
        self.intro.write(&mut self.inner)?;

        let mut data_order: Vec<usize> = (0..self.entries.len()).collect();
        data_order.sort_by_key(|&index| self.entries[index].data_offset);

        for index in data_order {
            self.write_file_content(source_dir, index)?;
        }

        let directory_offset = self.inner.stream_position()?;
        for record in &self.entries {
            record.write(&mut self.inner)?;
        }

        self.metadata.footer.offset = directory_offset;
        self.metadata.write(&mut self.inner)?;

        Ok(self.inner)
    }

    fn write_file_content(&mut self, source_dir: &Path, index: usize) -> Result<()> {
        let source_path = source_dir.join(path::relative_path(&self.entries[index].filename)?);
        info!("packing {}", source_path.display());

        let mut source = File::open(&source_path)?;
        let size = source.metadata()?.len();

        self.entries[index].size = size;
        if size > 0 {
            // Empty entries keep whatever offset the original directory had.
            self.entries[index].data_offset =
                self.inner.stream_position()? - self.metadata.files.offset;
        }

        io::copy(&mut source, &mut self.inner)?;
        Ok(())
    }
}

/// Replace the contents of `archive` with the files in `source_dir`.
///
/// The new archive is written to `<archive>.tmp` and renamed over the
/// original only after every byte is in place, so a failed run never leaves
/// a half-written archive at the original path. A temp file left behind by
/// an earlier failed run is reported, never overwritten.
#[instrument(err)]
pub fn repack(archive: &Path, source_dir: &Path) -> Result<()> {
    let file = File::open(archive)?;
    let mut rwd = RwdArchive::new(file)?;

    info!("parsing {}", archive.display());
    let entries = rwd.read_entries()?;

    let temp_path = temp_path_for(archive);
    info!("packing files into {}", temp_path.display());
    let temp = File::create_new(&temp_path).map_err(|err| match err.kind() {
        ErrorKind::AlreadyExists => Error::TempFileExists(temp_path.clone()),
        _ => Error::IOError(err),
    })?;

    let repacker = RwdRepacker::new(
        temp,
        rwd.intro().clone(),
        rwd.metadata().clone(),
        entries,
    );
    let output = repacker.finish(source_dir)?;

    // Both handles must be closed before the swap.
    drop(output);
    drop(rwd);

    info!("renaming {} to {}", temp_path.display(), archive.display());
    fs::rename(&temp_path, archive)?;

    Ok(())
}

fn temp_path_for(archive: &Path) -> PathBuf {
    let mut raw = archive.as_os_str().to_os_string();
    raw.push(".tmp");
    PathBuf::from(raw)
}
