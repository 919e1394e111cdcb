use crate::matcher::WordMatcher;
use crate::naming::NamingRules;
use crate::schema::blocks::{detect_indent, find_block, model_names, DEFAULT_INDENT};
use crate::schema::mapping::ModelMapping;

/// Directive recording a model's original table name.
pub const MAP_DIRECTIVE: &str = "@@map";

/// One global substitution performed by the rename pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    /// Original declaration name.
    pub raw: String,
    /// Name it was rewritten to.
    pub canonical: String,
    /// Whole-word occurrences replaced across the document.
    pub occurrences: usize,
}

/// Result of normalizing a schema document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalized {
    /// The transformed document.
    pub text: String,
    /// Renames applied, in the order they ran (longest raw name first).
    pub renames: Vec<Rename>,
    /// Raw names that received a new `@@map` annotation.
    pub annotated: Vec<String>,
    /// Raw names whose block already carried a `@@map` directive.
    pub already_mapped: Vec<String>,
    /// Raw names whose block could not be located after renaming.
    pub skipped: Vec<String>,
}

impl Normalized {
    /// True when the output differs from the input.
    pub fn changed(&self) -> bool {
        !self.renames.is_empty() || !self.annotated.is_empty()
    }
}

/// Normalizes every model name in `text` and annotates renamed blocks.
///
/// 1. collects `model <name> {` headers;
/// 2. maps each raw name to its canonical name;
/// 3. rewrites whole-word occurrences, longest raw name first;
/// 4. appends `@@map("<raw>")` to each renamed block lacking a `@@map`.
///
/// Blocks whose closing brace cannot be found are skipped silently; the
/// rename still applies. Running this on its own output changes nothing.
pub fn normalize(text: &str, rules: &NamingRules) -> Normalized {
    let names = model_names(text);
    let mapping = ModelMapping::build(&names, rules);

    let mut out = Normalized {
        text: text.to_string(),
        ..Normalized::default()
    };

    for (raw, canonical) in mapping.rename_order() {
        let (rewritten, occurrences) = WordMatcher::new(raw).replace_all(&out.text, canonical);
        out.text = rewritten;
        out.renames.push(Rename {
            raw: raw.to_string(),
            canonical: canonical.to_string(),
            occurrences,
        });
    }

    for (raw, canonical) in mapping.renamed() {
        let Some(block) = find_block(&out.text, canonical) else {
            out.skipped.push(raw.to_string());
            continue;
        };

        let body = block.body_text(&out.text);
        if body.contains(MAP_DIRECTIVE) {
            out.already_mapped.push(raw.to_string());
            continue;
        }

        let indent = detect_indent(body).unwrap_or_else(|| DEFAULT_INDENT.to_string());
        let mut patch = String::new();
        if !body.ends_with('\n') {
            patch.push('\n');
        }
        patch.push_str(&map_annotation(&indent, raw));
        patch.push('\n');

        out.text.insert_str(block.body.end, &patch);
        out.annotated.push(raw.to_string());
    }

    out
}

/// Shorthand returning only the transformed text.
pub fn normalize_text(text: &str, rules: &NamingRules) -> String {
    normalize(text, rules).text
}

/// Formats a `@@map("<raw>")` line (without newline).
pub fn map_annotation(indent: &str, raw: &str) -> String {
    format!("{}{}(\"{}\")", indent, MAP_DIRECTIVE, raw)
}
