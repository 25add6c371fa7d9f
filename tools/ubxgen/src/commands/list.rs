use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use ubx2c::IcdCompiler;

#[derive(Args)]
pub struct ListArgs {
    /// Directory of ICD csv tables
    input: PathBuf,
}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        let compiler = IcdCompiler::from_dir(&self.input)?;
        let catalogs = compiler.catalogs();

        println!("GNSS IDs:");
        for (name, id) in &catalogs.gnss {
            println!("  {id:>3}  {name}");
        }

        println!("Classes:");
        for (name, class) in &catalogs.classes {
            println!("  0x{:02X}  {name}  {}", class.class_id, class.description);
        }

        println!("Messages:");
        for (key, entry) in catalogs.messages.iter() {
            println!(
                "  0x{:02X} 0x{:02X}  {:<24} len={:<14} {}",
                entry.class_id, entry.msg_id, key.to_string(), entry.length, entry.description
            );
        }
        Ok(())
    }
}
