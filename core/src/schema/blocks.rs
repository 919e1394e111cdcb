use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

/// Default indent used when a block body has no indented line to copy.
pub(crate) const DEFAULT_INDENT: &str = "  ";

/// A `model <name> { ... }` block located in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Span of the header, from `model` through the opening `{`.
    pub header: Range<usize>,
    /// Text strictly between the opening `{` and the closing `}` line.
    pub body: Range<usize>,
}

impl Block {
    /// The body text of this block within `text`.
    pub fn body_text<'a>(&self, text: &'a str) -> &'a str {
        &text[self.body.clone()]
    }
}

fn header_re() -> &'static Regex {
    static HEADER_RE: OnceLock<Regex> = OnceLock::new();
    HEADER_RE.get_or_init(|| Regex::new(r"(?m)^model\s+(\w+)\s*\{").expect("Invalid regex"))
}

fn opener_re() -> &'static Regex {
    static OPENER_RE: OnceLock<Regex> = OnceLock::new();
    OPENER_RE.get_or_init(|| Regex::new(r"^\w+\s+\w+\s*\{").expect("Invalid regex"))
}

/// Collects declaration names from every `model <name> {` header, in order.
///
/// Duplicates are kept.
pub fn model_names(text: &str) -> Vec<String> {
    header_re()
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Locates the first block headed by exactly `name`.
///
/// The block closes at the first following line that starts with `}` in
/// column 0 and has only whitespace after it. Returns `None` when there is
/// no such header, or when another top-level block (`model`, `enum`,
/// `datasource`, ...) opens in column 0 before a closing line is seen.
pub fn find_block(text: &str, name: &str) -> Option<Block> {
    let pattern = format!(r"(?m)^model\s+{}\s*\{{", regex::escape(name));
    let re = Regex::new(&pattern).ok()?;
    let header = re.find(text)?;

    let body_start = header.end();
    let close = find_closing_line(text, body_start)?;

    Some(Block {
        header: header.range(),
        body: body_start..close,
    })
}

/// Byte offset of the first closing-brace line starting after `from`.
///
/// Gives up at the next top-level block header so a one-line block such as
/// `model a {}` never borrows the closing line of its neighbour.
fn find_closing_line(text: &str, from: usize) -> Option<usize> {
    let mut search = from;
    while let Some(offset) = text[search..].find('\n') {
        let line_start = search + offset + 1;
        let line_end = text[line_start..]
            .find('\n')
            .map_or(text.len(), |i| line_start + i);
        let line = &text[line_start..line_end];

        if let Some(rest) = line.strip_prefix('}') {
            if rest.trim().is_empty() {
                return Some(line_start);
            }
        }
        if opener_re().is_match(line) {
            return None;
        }
        search = line_start;
    }
    None
}

/// Leading whitespace of the first non-blank line of a block body.
///
/// The remainder of the header line is ignored.
pub(crate) fn detect_indent(body: &str) -> Option<String> {
    body.split('\n')
        .skip(1)
        .find(|line| !line.trim().is_empty())
        .map(|line| {
            line.chars()
                .take_while(|c| *c == ' ' || *c == '\t')
                .collect::<String>()
        })
        .filter(|indent| !indent.is_empty())
}
