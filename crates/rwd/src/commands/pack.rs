use clap::Args;
use miette::{miette, Result};
use std::path::PathBuf;
use tracing::info;

#[derive(Args)]
pub struct PackArgs {
    /// The RWD archive to rewrite
    #[arg(value_name = "ARCHIVE")]
    archive: PathBuf,

    /// A directory holding replacement content for every archived file
    #[arg(value_name = "DIR")]
    directory: PathBuf,
}

impl PackArgs {
    pub fn handle(&self) -> Result<()> {
        if !self.archive.is_file() {
            return Err(miette!(
                "{} must be an existing regular file",
                self.archive.display()
            ));
        }
        if !self.directory.is_dir() {
            return Err(miette!("{} must be a directory", self.directory.display()));
        }

        rwd_tgck::repack(&self.archive, &self.directory)?;
        info!("finished");

        Ok(())
    }
}
