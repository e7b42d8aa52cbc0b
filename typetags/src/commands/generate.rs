use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use typetags_codegen_typescript::{GenerateOptions, Generator};
use typetags_schema::SchemaFile;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the Prisma schema file
    pub schema: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Split output into per-`@@schema` partition files
    #[arg(long)]
    pub split_by_schema: bool,

    /// Also emit relation-free `Flat` interfaces
    #[arg(long)]
    pub flat: bool,

    /// Emit an aggregating index.ts
    #[arg(long)]
    pub index: bool,

    /// Print generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let file = SchemaFile::open(&self.schema).wrap_err("Failed to load schema")?;
        let schema = file.parse();

        let options = GenerateOptions {
            split_by_schema: self.split_by_schema,
            generate_flat: self.flat,
            generate_index: self.index,
        };
        let files = Generator::new(&schema, options).generate();

        if self.dry_run {
            return self.run_preview(&files);
        }

        let written = files
            .write_to(&self.output)
            .wrap_err("Failed to write generated files")?;

        println!(
            "{} ({} models, {} enums)",
            self.schema.display(),
            schema.models.len(),
            schema.enums.len()
        );
        println!();
        println!(
            "Generated {} file{}:",
            written,
            if written == 1 { "" } else { "s" }
        );
        for path in files.paths() {
            println!("  {}/{}", self.output.display(), path);
        }

        Ok(())
    }

    fn run_preview(&self, files: &typetags_codegen::FileMap) -> Result<()> {
        for (path, content) in files.iter() {
            println!("── {} ──", path);
            println!("{}", content);
        }

        println!("── Summary ──");
        println!("{} files would be generated", files.len());

        Ok(())
    }
}
