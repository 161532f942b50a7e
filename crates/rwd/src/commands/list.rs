use clap::Args;
use miette::Result;
use rwd_tgck::{path::display_name, RwdArchive};
use std::path::PathBuf;

#[derive(Args)]
pub struct ListArgs {
    /// An RWD archive
    #[arg(value_name = "ARCHIVE")]
    archive: PathBuf,
}

impl ListArgs {
    pub fn handle(&self) -> Result<()> {
        let file = super::open_archive(&self.archive)?;
        let mut rwd = RwdArchive::new(file)?;

        rwd.for_each_entry(|_, _, record| {
            println!("{}", display_name(&record.filename));
            Ok(())
        })?;

        Ok(())
    }
}
