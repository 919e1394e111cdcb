#![deny(missing_docs)]

//! # Normalize Command
//!
//! Rewrites model names in a Prisma schema file in place and adds
//! `@@map("<table>")` annotations for every renamed model.

use schemafix_core::schema::normalize;
use schemafix_core::{AppError, AppResult, SchemafixConfig};
use std::fs;
use std::path::PathBuf;

/// Arguments for the normalize command.
#[derive(clap::Args, Debug, Clone)]
pub struct NormalizeArgs {
    /// Path to the Prisma schema file.
    #[clap(
        long,
        env = "SCHEMAFIX_SCHEMA",
        default_value = "backend/prisma/schema.prisma"
    )]
    pub schema: PathBuf,

    /// Optional YAML config overriding the naming tables.
    #[clap(long, env = "SCHEMAFIX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the planned renames without writing the file.
    #[clap(long)]
    pub dry_run: bool,
}

/// Executes the normalization.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &NormalizeArgs) -> AppResult<()> {
    let config = SchemafixConfig::load_or_default(args.config.as_deref())?;

    if !args.schema.exists() {
        return Err(AppError::General(format!(
            "Schema file not found: {:?}",
            args.schema
        )));
    }

    let raw = fs::read_to_string(&args.schema)?;
    let result = normalize(&raw, &config.naming);

    if args.dry_run {
        for rename in &result.renames {
            println!(
                "  {} -> {} ({} occurrences)",
                rename.raw, rename.canonical, rename.occurrences
            );
        }
        for raw in &result.skipped {
            println!("  no closing brace for model {}, @@map not added", raw);
        }
        println!("dry run, {:?} not written", args.schema);
        return Ok(());
    }

    fs::write(&args.schema, &result.text)?;
    println!("normalized {}", args.schema.display());

    Ok(())
}
