#![deny(missing_docs)]

//! # Rehydrate Command
//!
//! Rebuilds TypeScript service sources from their compiled `dist/` output.

use schemafix_core::rehydrate::{rehydrate, RehydrateTarget};
use schemafix_core::{AppError, AppResult, SchemafixConfig};
use std::path::PathBuf;

/// Arguments for the rehydrate command.
#[derive(clap::Args, Debug, Clone)]
pub struct RehydrateArgs {
    /// Project root that target paths are relative to.
    #[clap(long, env = "SCHEMAFIX_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Optional YAML config listing the targets.
    #[clap(long, env = "SCHEMAFIX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Only rehydrate the target exporting this symbol.
    #[clap(long)]
    pub symbol: Option<String>,
}

/// Picks the configured targets, narrowed to `symbol` when given.
fn select_targets(
    targets: Vec<RehydrateTarget>,
    symbol: Option<&str>,
) -> AppResult<Vec<RehydrateTarget>> {
    let Some(symbol) = symbol else {
        return Ok(targets);
    };

    let selected: Vec<RehydrateTarget> = targets
        .into_iter()
        .filter(|t| t.symbol == symbol)
        .collect();

    if selected.is_empty() {
        return Err(AppError::General(format!(
            "No rehydration target exports '{}'",
            symbol
        )));
    }
    Ok(selected)
}

/// Executes the rehydration of every selected target.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &RehydrateArgs) -> AppResult<()> {
    let config = SchemafixConfig::load_or_default(args.config.as_deref())?;
    let targets = select_targets(config.targets, args.symbol.as_deref())?;

    for target in &targets {
        let written = rehydrate(target, &args.root)?;
        println!(
            "wrote {} ({} bytes)",
            args.root.join(&target.source).display(),
            written
        );
    }

    Ok(())
}
