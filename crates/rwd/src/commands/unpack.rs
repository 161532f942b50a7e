use clap::Args;
use miette::{miette, IntoDiagnostic, Result};
use rwd_tgck::RwdArchive;
use std::path::PathBuf;

#[derive(Args)]
pub struct UnpackArgs {
    /// An RWD archive
    #[arg(value_name = "ARCHIVE")]
    archive: PathBuf,

    /// An existing, empty target directory
    #[arg(value_name = "DIR")]
    directory: PathBuf,
}

impl UnpackArgs {
    pub fn handle(&self) -> Result<()> {
        let is_empty_dir = self.directory.is_dir()
            && std::fs::read_dir(&self.directory)
                .into_diagnostic()?
                .next()
                .is_none();
        if !is_empty_dir {
            return Err(miette!(
                "{} must be an empty directory",
                self.directory.display()
            ));
        }

        let file = super::open_archive(&self.archive)?;
        let mut rwd = RwdArchive::new(file)?;
        rwd.extract_to(&self.directory)?;

        Ok(())
    }
}
