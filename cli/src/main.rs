#![deny(missing_docs)]

//! # Schemafix CLI
//!
//! Command Line Interface for the build-pipeline text utilities.
//!
//! Supported Commands:
//! - `normalize`: Prisma schema model names -> singular PascalCase + `@@map`.
//! - `rehydrate`: Compiled `dist/*.service.js` -> `src/*.service.ts`.

use clap::{Parser, Subcommand};
use schemafix_core::AppResult;

mod normalize;
mod rehydrate;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Schema normalizer and source rehydrator")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Normalize model names in a Prisma schema file.
    Normalize(normalize::NormalizeArgs),
    /// Reconstruct service sources from compiled output.
    Rehydrate(rehydrate::RehydrateArgs),
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Normalize(args) => normalize::execute(args)?,
        Commands::Rehydrate(args) => rehydrate::execute(args)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_normalize_defaults() {
        let cli = Cli::try_parse_from(["schemafix", "normalize", "--dry-run"]).unwrap();
        match cli.command {
            Commands::Normalize(args) => {
                assert!(args.dry_run);
                assert_eq!(
                    args.schema,
                    std::path::PathBuf::from("backend/prisma/schema.prisma")
                );
            }
            _ => panic!("expected normalize"),
        }
    }

    #[test]
    fn test_parse_rehydrate_symbol() {
        let cli = Cli::try_parse_from([
            "schemafix",
            "rehydrate",
            "--root",
            "/tmp/project",
            "--symbol",
            "ScmSuppliesService",
        ])
        .unwrap();
        match cli.command {
            Commands::Rehydrate(args) => {
                assert_eq!(args.root, std::path::PathBuf::from("/tmp/project"));
                assert_eq!(args.symbol.as_deref(), Some("ScmSuppliesService"));
            }
            _ => panic!("expected rehydrate"),
        }
    }
}
