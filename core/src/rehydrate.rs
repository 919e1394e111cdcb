#![deny(missing_docs)]

//! # Rehydration
//!
//! Reconstructs a TypeScript service module from its compiled CommonJS output.
//!
//! Only the CommonJS export plumbing is removed; decorator helpers
//! (`__decorate`, `__metadata`) stay in place so the framework still sees
//! them. The result always ends with a single `export { <Symbol> };`.

use crate::error::{AppError, AppResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// A compiled file to turn back into source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RehydrateTarget {
    /// Compiled `.js` file, relative to the project root.
    pub compiled: PathBuf,
    /// Destination `.ts` file, relative to the project root.
    pub source: PathBuf,
    /// Exported class name.
    pub symbol: String,
}

impl RehydrateTarget {
    /// Creates a target.
    pub fn new(compiled: impl Into<PathBuf>, source: impl Into<PathBuf>, symbol: &str) -> Self {
        Self {
            compiled: compiled.into(),
            source: source.into(),
            symbol: symbol.to_string(),
        }
    }
}

/// The services known to need rehydration.
pub fn default_targets() -> Vec<RehydrateTarget> {
    vec![
        RehydrateTarget::new(
            "backend/dist/backend/src/modules/scm/production-orders/production-orders.service.js",
            "backend/src/modules/scm/production-orders/production-orders.service.ts",
            "ProductionOrdersService",
        ),
        RehydrateTarget::new(
            "backend/dist/backend/src/modules/scm/supplies/scm-supplies.service.js",
            "backend/src/modules/scm/supplies/scm-supplies.service.ts",
            "ScmSuppliesService",
        ),
    ]
}

fn use_strict_re() -> &'static Regex {
    static USE_STRICT_RE: OnceLock<Regex> = OnceLock::new();
    USE_STRICT_RE.get_or_init(|| Regex::new(r#"\A"use strict";\s*"#).expect("Invalid regex"))
}

fn source_map_re() -> &'static Regex {
    static SOURCE_MAP_RE: OnceLock<Regex> = OnceLock::new();
    SOURCE_MAP_RE
        .get_or_init(|| Regex::new(r"//# sourceMappingURL=.*\n?").expect("Invalid regex"))
}

/// The export statement appended for `symbol`.
pub fn export_statement(symbol: &str) -> String {
    format!("export {{ {} }};", symbol)
}

/// Strips CommonJS boilerplate for `symbol` from compiled output.
///
/// Removes, in order: a leading `"use strict";`, the
/// `Object.defineProperty(exports, ...)` preamble ending in
/// `exports.<symbol> = void 0;`, the `exports.<symbol> = <symbol>;` line and
/// any `//# sourceMappingURL=` comment. Then guarantees exactly one trailing
/// export statement.
pub fn strip_compiled(compiled: &str, symbol: &str) -> AppResult<String> {
    let sym = regex::escape(symbol);
    let preamble_re = Regex::new(&format!(
        r"Object\.defineProperty\(exports,[\s\S]*?\);\nexports\.{sym} = void 0;\n"
    ))
    .map_err(|e| AppError::General(format!("Invalid symbol '{}': {}", symbol, e)))?;
    let assign_re = Regex::new(&format!(r"exports\.{sym} = {sym};\n"))
        .map_err(|e| AppError::General(format!("Invalid symbol '{}': {}", symbol, e)))?;

    let src = use_strict_re().replace(compiled, "");
    let src = preamble_re.replace_all(&src, "");
    let src = assign_re.replace_all(&src, "");
    let src = source_map_re().replace_all(&src, "");

    Ok(ensure_export(&src, symbol))
}

/// Drops any standalone export lines for `symbol` and appends exactly one.
fn ensure_export(src: &str, symbol: &str) -> String {
    let statement = export_statement(symbol);
    let bare = statement.trim_end_matches(';');

    let kept: Vec<&str> = src
        .split('\n')
        .filter(|line| {
            let line = line.trim();
            line != statement && line != bare
        })
        .collect();

    let mut out = kept.join("\n").trim_end().to_string();
    if !out.is_empty() {
        out.push_str("\n\n");
    }
    out.push_str(&statement);
    out.push('\n');
    out
}

/// Rehydrates one target below `root`.
///
/// Missing destination directories are created and an existing destination
/// file is overwritten. Returns the length of the written text in bytes.
pub fn rehydrate(target: &RehydrateTarget, root: &Path) -> AppResult<usize> {
    let compiled_path = root.join(&target.compiled);
    let out_path = root.join(&target.source);

    let compiled = fs::read_to_string(&compiled_path)?;
    let src = strip_compiled(&compiled, &target.symbol)?;

    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&out_path, &src)?;

    Ok(src.len())
}
