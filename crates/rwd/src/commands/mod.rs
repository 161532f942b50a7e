use std::{fs::File, path::Path};

use miette::{miette, Context, IntoDiagnostic, Result};

pub mod list;
pub mod pack;
pub mod unpack;

#[derive(clap::Subcommand)]
pub enum Commands {
    /// List the contents of an archive
    List(list::ListArgs),
    /// Replace the contents of an archive with files from a directory
    Pack(pack::PackArgs),
    /// Extract an archive into an empty directory
    Unpack(unpack::UnpackArgs),
}

impl Commands {
    pub fn handle(&self) -> Result<()> {
        match self {
            Commands::List(list) => list.handle(),
            Commands::Pack(pack) => pack.handle(),
            Commands::Unpack(unpack) => unpack.handle(),
        }
    }
}

pub(crate) fn open_archive(path: &Path) -> Result<File> {
    if !path.is_file() {
        return Err(miette!(
            "{} must be an existing regular file",
            path.display()
        ));
    }

    File::open(path)
        .into_diagnostic()
        .context(format!("path: {}", path.display()))
}
