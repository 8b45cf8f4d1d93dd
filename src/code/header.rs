//! Directive headers at the top of code snippets.
//!
//! A snippet may open with a single comment block carrying `@key: value`
//! directives:
//!
//! ```text
//! /**
//!  * @file: app.py
//!  * @highlight: 1,3-5
//!  * @showLineNumbers
//!  */
//! print("hello")
//! ```
//!
//! [`parse`] extracts the directives and returns the code with the header
//! removed. Comment styles are tried in [`CommentStyle::ALL`] order; the
//! first one that matches at the very start of the text wins.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

// ============================================================================
// Directive values
// ============================================================================

/// Value of a single `@key: value` directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DirectiveValue {
    Bool(bool),
    Text(String),
}

impl DirectiveValue {
    /// Interpret the text after `@key`.
    ///
    /// - empty → `true`
    /// - `true` / `yes` → `true`, `false` / `no` → `false` (any case)
    /// - anything else → trimmed string
    fn from_raw(raw: &str) -> Self {
        let value = raw.trim();
        if value.is_empty()
            || value.eq_ignore_ascii_case("true")
            || value.eq_ignore_ascii_case("yes")
        {
            return Self::Bool(true);
        }
        if value.eq_ignore_ascii_case("false") || value.eq_ignore_ascii_case("no") {
            return Self::Bool(false);
        }
        Self::Text(value.to_string())
    }

    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Bool(_) => None,
        }
    }
}

impl fmt::Display for DirectiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

// ============================================================================
// Header metadata
// ============================================================================

/// Directives extracted from a snippet header, keyed without the `@`.
///
/// Keys are case-sensitive; unknown keys are kept verbatim. A repeated key
/// keeps its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HeaderMetadata(BTreeMap<String, DirectiveValue>);

impl HeaderMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: DirectiveValue) {
        self.0.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&DirectiveValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DirectiveValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// `@file` - file name shown above the snippet.
    pub fn file(&self) -> Option<&str> {
        self.get("file").and_then(DirectiveValue::as_str)
    }

    /// `@highlight` - raw range list such as `1,3-5`.
    pub fn highlight(&self) -> Option<&str> {
        self.get("highlight").and_then(DirectiveValue::as_str)
    }

    /// `@copy` - show a copy button. Defaults to `true`.
    pub fn copy(&self) -> bool {
        self.flag("copy").unwrap_or(true)
    }

    /// `@showLineNumbers`, or `None` when the header does not say.
    pub fn show_line_numbers(&self) -> Option<bool> {
        self.flag("showLineNumbers")
    }

    /// `@exec` - snippet is runnable. Defaults to `false`.
    pub fn exec(&self) -> bool {
        self.flag("exec").unwrap_or(false)
    }

    fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(DirectiveValue::as_bool)
    }
}

// ============================================================================
// Comment styles
// ============================================================================

/// Leading comment styles recognized as a directive header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommentStyle {
    /// `/** ... */`
    DocBlock,
    /// `/* ... */`
    Block,
    /// `""" ... """`
    TripleDouble,
    /// `''' ... '''`
    TripleSingle,
    /// consecutive `#` lines
    Hash,
    /// consecutive `--` lines
    DoubleDash,
    /// `<!-- ... -->`
    Html,
    /// consecutive `///` lines
    TripleSlash,
    /// consecutive `//` lines
    DoubleSlash,
}

impl CommentStyle {
    /// Detection order. `DocBlock` precedes `Block` and `TripleSlash`
    /// precedes `DoubleSlash`, since the later openers are prefixes of
    /// the earlier ones.
    pub const ALL: [Self; 9] = [
        Self::DocBlock,
        Self::Block,
        Self::TripleDouble,
        Self::TripleSingle,
        Self::Hash,
        Self::DoubleDash,
        Self::Html,
        Self::TripleSlash,
        Self::DoubleSlash,
    ];

    /// Anchored pattern for this style. Group `body` is the header interior.
    fn pattern(self) -> &'static Regex {
        static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
            CommentStyle::ALL
                .iter()
                .map(|style| Regex::new(style.source()).expect("header pattern is valid"))
                .collect()
        });
        &PATTERNS[self as usize]
    }

    const fn source(self) -> &'static str {
        match self {
            Self::DocBlock => r"(?s)\A/\*\*(?P<body>.*?)\*/(?:\r?\n)?",
            Self::Block => r"(?s)\A/\*(?P<body>.*?)\*/(?:\r?\n)?",
            Self::TripleDouble => r#"(?s)\A"""(?P<body>.*?)"""(?:\r?\n)?"#,
            Self::TripleSingle => r"(?s)\A'''(?P<body>.*?)'''(?:\r?\n)?",
            Self::Hash => r"\A(?P<body>(?:#[^\n]*(?:\n|\z))+)",
            Self::DoubleDash => r"\A(?P<body>(?:--[^\n]*(?:\n|\z))+)",
            Self::Html => r"(?s)\A<!--(?P<body>.*?)-->(?:\r?\n)?",
            Self::TripleSlash => r"\A(?P<body>(?:///[^\n]*(?:\n|\z))+)",
            Self::DoubleSlash => r"\A(?P<body>(?://[^\n]*(?:\n|\z))+)",
        }
    }

    /// Match this style at the start of `raw`.
    fn detect(self, raw: &str) -> Option<Header<'_>> {
        let caps = self.pattern().captures(raw)?;
        let whole = caps.get(0)?;
        let body = caps.name("body").map_or("", |m| m.as_str());
        Some(Header {
            style: self,
            body,
            len: whole.end(),
        })
    }
}

/// A header block found at the start of a snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    pub style: CommentStyle,
    /// Interior text, delimiters excluded for block styles.
    pub body: &'a str,
    /// Byte length of the whole header, trailing newline included.
    pub len: usize,
}

impl Header<'_> {
    /// Collect the `@key: value` directives of this header.
    pub fn directives(&self) -> HeaderMetadata {
        let mut metadata = HeaderMetadata::new();
        for line in self.body.lines().map(strip_markers) {
            if let Some((key, value)) = parse_directive(line) {
                metadata.insert(key, value);
            }
        }
        metadata
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Comment markers stripped from the start of each header line.
/// `-->` must be tried before `--`, `///` before `//`.
const LINE_MARKERS: [&str; 7] = ["<!--", "-->", "///", "//", "--", "#", "*"];

static DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@(?P<key>[\w-]+):?\s*(?P<value>.*)$").expect("directive pattern is valid")
});

/// Find the header block at the start of `raw`, if any.
pub fn detect(raw: &str) -> Option<Header<'_>> {
    CommentStyle::ALL.iter().find_map(|style| style.detect(raw))
}

/// Split a snippet into its header directives and the remaining code.
///
/// Never fails: without a recognized header the metadata is empty and the
/// code is `raw` unchanged. Everything after the header is returned
/// exactly as written.
pub fn parse(raw: &str) -> (HeaderMetadata, &str) {
    match detect(raw) {
        Some(header) => (header.directives(), &raw[header.len..]),
        None => (HeaderMetadata::new(), raw),
    }
}

/// Strip leading comment markers and surrounding whitespace from a line.
fn strip_markers(line: &str) -> &str {
    let mut line = line.trim();
    while let Some(rest) = LINE_MARKERS.iter().find_map(|m| line.strip_prefix(m)) {
        line = rest.trim_start();
    }
    line.trim_end()
}

/// Parse `@key[:] value` from a normalized header line.
fn parse_directive(line: &str) -> Option<(&str, DirectiveValue)> {
    let caps = DIRECTIVE.captures(line)?;
    let key = caps.name("key")?.as_str();
    let value = caps.name("value").map_or("", |m| m.as_str());
    Some((key, DirectiveValue::from_raw(value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> DirectiveValue {
        DirectiveValue::Text(s.to_string())
    }

    #[test]
    fn test_empty_input() {
        let (meta, code) = parse("");
        assert!(meta.is_empty());
        assert_eq!(code, "");
    }

    #[test]
    fn test_no_header_is_noop() {
        for raw in ["print('hi')\n", "fn main() {}\n// trailing", "  /* indented */\nx"] {
            let (meta, code) = parse(raw);
            assert!(meta.is_empty(), "unexpected metadata for {raw:?}");
            assert_eq!(code, raw);
        }
    }

    #[test]
    fn test_single_line_doc_block() {
        let (meta, code) = parse("/** @file: x.py */\nprint(1)\n");
        assert_eq!(meta.get("file"), Some(&text("x.py")));
        assert_eq!(meta.len(), 1);
        assert_eq!(code, "print(1)\n");
    }

    #[test]
    fn test_multi_line_doc_block() {
        let raw = "/**\n * @file: app.ts\n * @highlight: 1,3-5\n * @showLineNumbers\n * @copy: no\n */\nconst a = 1;\n\n\nconst b = 2;\n";
        let (meta, code) = parse(raw);
        assert_eq!(meta.file(), Some("app.ts"));
        assert_eq!(meta.highlight(), Some("1,3-5"));
        assert_eq!(meta.show_line_numbers(), Some(true));
        assert!(!meta.copy());
        assert_eq!(code, "const a = 1;\n\n\nconst b = 2;\n");
    }

    #[test]
    fn test_doc_block_wins_over_block() {
        let header = detect("/** @file: a.js */\ncode").unwrap();
        assert_eq!(header.style, CommentStyle::DocBlock);

        let header = detect("/* @file: a.c */\ncode").unwrap();
        assert_eq!(header.style, CommentStyle::Block);
        assert_eq!(header.directives().file(), Some("a.c"));
    }

    #[test]
    fn test_triple_quotes() {
        let (meta, code) = parse("\"\"\"\n@file: main.py\n@exec\n\"\"\"\nimport os\n");
        assert_eq!(meta.file(), Some("main.py"));
        assert!(meta.exec());
        assert_eq!(code, "import os\n");

        let (meta, code) = parse("'''\n@file: main.py\n'''\nimport sys");
        assert_eq!(meta.file(), Some("main.py"));
        assert_eq!(code, "import sys");
    }

    #[test]
    fn test_hash_lines() {
        let (meta, code) = parse("# @file: run.sh\n# @highlight: 2\necho hi\n# not a header\n");
        assert_eq!(meta.file(), Some("run.sh"));
        assert_eq!(meta.highlight(), Some("2"));
        assert_eq!(code, "echo hi\n# not a header\n");
    }

    #[test]
    fn test_double_dash_lines() {
        let (meta, code) = parse("-- @file: query.sql\nSELECT 1;");
        assert_eq!(meta.file(), Some("query.sql"));
        assert_eq!(code, "SELECT 1;");
    }

    #[test]
    fn test_html_comment() {
        let (meta, code) = parse("<!-- @file: index.html -->\n<p>hi</p>\n");
        assert_eq!(meta.file(), Some("index.html"));
        assert_eq!(code, "<p>hi</p>\n");

        let (meta, _) = parse("<!--\n  @file: page.vue\n  @copy: false\n-->\n<template/>");
        assert_eq!(meta.file(), Some("page.vue"));
        assert!(!meta.copy());
    }

    #[test]
    fn test_slash_lines() {
        let header = detect("/// @file: lib.rs\n/// @showLineNumbers: no\npub fn f() {}").unwrap();
        assert_eq!(header.style, CommentStyle::TripleSlash);
        let meta = header.directives();
        assert_eq!(meta.file(), Some("lib.rs"));
        assert_eq!(meta.show_line_numbers(), Some(false));

        let (meta, code) = parse("// @file: main.go\npackage main\n");
        assert_eq!(meta.file(), Some("main.go"));
        assert_eq!(code, "package main\n");
    }

    #[test]
    fn test_header_without_trailing_newline() {
        let (meta, code) = parse("// @file: only.js");
        assert_eq!(meta.file(), Some("only.js"));
        assert_eq!(code, "");
    }

    #[test]
    fn test_directive_values() {
        let (meta, _) = parse(
            "/*\n@a\n@b: YES\n@c: No\n@d: FALSE\n@e:true\n@f:   spaced value  \n@data-x: 1\n*/\n",
        );
        assert_eq!(meta.get("a"), Some(&DirectiveValue::Bool(true)));
        assert_eq!(meta.get("b"), Some(&DirectiveValue::Bool(true)));
        assert_eq!(meta.get("c"), Some(&DirectiveValue::Bool(false)));
        assert_eq!(meta.get("d"), Some(&DirectiveValue::Bool(false)));
        assert_eq!(meta.get("e"), Some(&DirectiveValue::Bool(true)));
        assert_eq!(meta.get("f"), Some(&text("spaced value")));
        assert_eq!(meta.get("data-x"), Some(&text("1")));
    }

    #[test]
    fn test_bare_and_colon_forms() {
        let (meta, _) = parse("// @file\n");
        assert_eq!(meta.get("file"), Some(&DirectiveValue::Bool(true)));

        let (meta, _) = parse("// @file: app.py\n");
        assert_eq!(meta.get("file"), Some(&text("app.py")));

        let (meta, _) = parse("// @file app.py\n");
        assert_eq!(meta.get("file"), Some(&text("app.py")));
    }

    #[test]
    fn test_non_directive_lines_ignored() {
        let (meta, code) = parse("/**\n * Some prose.\n * @file: a.js\n * email me @ home\n */\nx");
        assert_eq!(meta.len(), 1);
        assert_eq!(meta.file(), Some("a.js"));
        assert_eq!(code, "x");
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let (meta, _) = parse("# @File: A.py\n# @file: b.py\n");
        assert_eq!(meta.get("File"), Some(&text("A.py")));
        assert_eq!(meta.file(), Some("b.py"));
    }

    #[test]
    fn test_unknown_keys_preserved() {
        let (meta, _) = parse("// @theme: dark\n// @wrap\n");
        assert_eq!(meta.get("theme"), Some(&text("dark")));
        assert_eq!(meta.get("wrap"), Some(&DirectiveValue::Bool(true)));
    }

    #[test]
    fn test_header_without_directives_is_still_removed() {
        let (meta, code) = parse("# shebang-ish note\nprint(1)");
        assert!(meta.is_empty());
        assert_eq!(code, "print(1)");
    }

    #[test]
    fn test_unterminated_block_is_not_a_header() {
        let raw = "/** @file: a.js\nconst x = 1;";
        let (meta, code) = parse(raw);
        assert!(meta.is_empty());
        assert_eq!(code, raw);
    }

    #[test]
    fn test_reparse_finds_no_second_header() {
        let cases = [
            "/** @file: a.js */\nconst a = 1;\n",
            "/* @file: a.c */\nint a;\n",
            "\"\"\"\n@file: a.py\n\"\"\"\na = 1\n",
            "'''\n@file: a.py\n'''\na = 1\n",
            "# @file: a.sh\necho\n",
            "-- @file: a.sql\nSELECT 1;\n",
            "<!-- @file: a.html -->\n<br>\n",
            "/// @file: a.rs\nfn a() {}\n",
            "// @file: a.go\npackage a\n",
        ];
        for original in cases {
            let header = detect(original).unwrap();
            let (meta, code) = parse(original);
            let rebuilt = format!("{}{}", &original[..header.len], code);
            assert_eq!(parse(&rebuilt), (meta, code), "round trip failed for {original:?}");

            let (again, rest) = parse(code);
            assert!(again.is_empty(), "second header found in {original:?}");
            assert_eq!(rest, code);
        }
    }

    #[test]
    fn test_accessor_defaults() {
        let meta = HeaderMetadata::new();
        assert!(meta.copy());
        assert!(!meta.exec());
        assert_eq!(meta.show_line_numbers(), None);
        assert_eq!(meta.file(), None);
    }

    #[test]
    fn test_serialize_metadata() {
        let (meta, _) = parse("// @file: a.rs\n// @copy: no\n");
        let json = serde_json::to_string(&meta).unwrap();
        assert_eq!(json, r#"{"copy":false,"file":"a.rs"}"#);
    }
}
