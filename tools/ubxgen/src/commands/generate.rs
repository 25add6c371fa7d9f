use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use ubx2c::{core::sanitize, IcdCompiler};

#[derive(Args)]
pub struct GenerateArgs {
    /// Directory of ICD csv tables
    input: PathBuf,

    /// Output directory for generated include/ and src/ trees
    #[arg(short, long)]
    out_dir: PathBuf,

    /// Build only the named messages (repeatable); names may use the ICD
    /// spelling (NAV-POSLLH) or the sanitized one (NAVPOSLLH)
    #[arg(long = "build", value_name = "NAME")]
    build: Vec<String>,
}

impl GenerateArgs {
    pub fn run(self) -> Result<()> {
        let compiler = IcdCompiler::from_dir(&self.input)?;

        let filter: Vec<String> = self.build.iter().map(|n| sanitize(n)).collect();
        let build_only = (!filter.is_empty()).then_some(filter.as_slice());

        let summary = compiler.generate(&self.out_dir, build_only, |message| {
            println!("building {}", message.key);
        })?;

        println!(
            "built {} messages ({} headers, {} sources) into {}",
            summary.messages_built,
            summary.headers_written,
            summary.sources_written,
            self.out_dir.display()
        );
        Ok(())
    }
}
