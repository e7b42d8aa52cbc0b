use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use typetags_schema::SchemaFile;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the Prisma schema file
    pub schema: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = SchemaFile::open(&self.schema).wrap_err("Failed to load schema")?;
        let schema = file.parse();

        println!("✓ parsed {}\n", self.schema.display());

        let model_count = schema.models.len();
        println!(
            "  {} model{}:",
            model_count,
            if model_count == 1 { "" } else { "s" }
        );
        for model in schema.models.values() {
            match &model.schema {
                Some(partition) => println!(
                    "    {} ({} fields, schema \"{}\")",
                    model.name,
                    model.fields.len(),
                    partition
                ),
                None => println!("    {} ({} fields)", model.name, model.fields.len()),
            }
        }

        let enum_count = schema.enums.len();
        if enum_count > 0 {
            println!();
            println!(
                "  {} enum{}:",
                enum_count,
                if enum_count == 1 { "" } else { "s" }
            );
            for def in schema.enums.values() {
                println!("    {} ({} values)", def.name, def.values.len());
            }
        }

        Ok(())
    }
}
