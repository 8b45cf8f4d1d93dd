//! Markdown to HTML with heading ids, table wrappers and code block
//! directives.
//!
//! The pulldown-cmark event stream is rewritten before being handed to
//! `pulldown_cmark::html`:
//!
//! - headings without an explicit `{#id}` get `heading-<level>-<slug>`
//! - tables are wrapped in `<div class="...">` for horizontal scrolling
//! - fenced code blocks lose their directive header and are rendered as a
//!   `<figure>` with caption, highlighted lines and `data-*` attributes

use anyhow::Result;
use pulldown_cmark::{CodeBlockKind, CowStr, Event, HeadingLevel, Parser, Tag, TagEnd};
use serde::Serialize;

use super::frontmatter::split_frontmatter;
use crate::code::CodeSnippet;
use crate::page::PageMeta;
use crate::toc::outline::{heading_level, parser_options};
use crate::toc::{HeadingIds, SlugMode, TocEntry, flatten_with, headings, outline};

/// Directives rendered as dedicated attributes rather than `data-meta-*`.
const KNOWN_DIRECTIVES: [&str; 5] = ["file", "highlight", "copy", "showLineNumbers", "exec"];

/// Options for Markdown rendering
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Class of the `<div>` wrapped around every table.
    pub table_class: String,
    /// Number lines of code blocks that do not set `@showLineNumbers`.
    pub line_numbers: bool,
    /// Slug mode for heading ids.
    pub slug: SlugMode,
    /// Suffix repeated heading ids with a counter.
    pub dedupe_ids: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            table_class: "table-wrapper".to_string(),
            line_numbers: false,
            slug: SlugMode::Full,
            dedupe_ids: false,
        }
    }
}

impl RenderOptions {
    fn heading_ids(&self) -> HeadingIds {
        HeadingIds::new(self.slug, self.dedupe_ids)
    }
}

/// A rendered Markdown document.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedPage {
    pub meta: PageMeta,
    pub html: String,
    pub toc: Vec<TocEntry>,
}

/// Render a document with optional front matter.
pub fn render(markdown: &str, options: &RenderOptions) -> Result<RenderedPage> {
    let (meta, body) = split_frontmatter(markdown)?;
    let html = render_body(body, options);
    let toc = table_of_contents(body, options);
    Ok(RenderedPage { meta, html, toc })
}

/// Flattened table of contents whose anchors match [`render_body`].
pub fn table_of_contents(markdown: &str, options: &RenderOptions) -> Vec<TocEntry> {
    let mut toc = flatten_with(&outline(markdown), &mut options.heading_ids());
    apply_explicit_ids(&mut toc, markdown);
    toc
}

/// Point TOC entries of `{#id}` headings at the id the renderer keeps.
fn apply_explicit_ids(toc: &mut [TocEntry], body: &str) {
    let mut ids = headings(body)
        .into_iter()
        .filter(|h| !h.text.is_empty())
        .map(|h| h.id);
    for entry in toc.iter_mut().filter(|e| !e.title.trim().is_empty()) {
        if let Some(Some(id)) = ids.next() {
            entry.anchor_id = Some(id);
        }
    }
}

/// Render Markdown (without front matter handling) to HTML.
pub fn render_body(markdown: &str, options: &RenderOptions) -> String {
    let mut transform = Transform::new(options);
    for event in Parser::new_ext(markdown, parser_options()) {
        transform.handle(event);
    }

    let mut html = String::with_capacity(markdown.len() * 3 / 2);
    pulldown_cmark::html::push_html(&mut html, transform.out.into_iter());
    html
}

// ============================================================================
// Event transform
// ============================================================================

struct PendingHeading<'a> {
    level: HeadingLevel,
    id: Option<CowStr<'a>>,
    classes: Vec<CowStr<'a>>,
    attrs: Vec<(CowStr<'a>, Option<CowStr<'a>>)>,
    events: Vec<Event<'a>>,
}

/// Element whose events are buffered until its end tag.
enum Pending<'a> {
    Heading(PendingHeading<'a>),
    Code { lang: Option<String>, source: String },
}

struct Transform<'a, 'o> {
    options: &'o RenderOptions,
    ids: HeadingIds,
    pending: Option<Pending<'a>>,
    out: Vec<Event<'a>>,
}

impl<'a, 'o> Transform<'a, 'o> {
    fn new(options: &'o RenderOptions) -> Self {
        Self {
            options,
            ids: options.heading_ids(),
            pending: None,
            out: Vec::new(),
        }
    }

    fn handle(&mut self, event: Event<'a>) {
        match self.pending.take() {
            Some(Pending::Code { lang, mut source }) => match event {
                Event::End(TagEnd::CodeBlock) => {
                    let html = render_code_block(lang.as_deref(), &source, self.options);
                    self.out.push(Event::Html(html.into()));
                }
                Event::Text(text) => {
                    source.push_str(&text);
                    self.pending = Some(Pending::Code { lang, source });
                }
                _ => self.pending = Some(Pending::Code { lang, source }),
            },
            Some(Pending::Heading(mut heading)) => match event {
                Event::End(TagEnd::Heading(_)) => self.finish_heading(heading),
                other => {
                    heading.events.push(other);
                    self.pending = Some(Pending::Heading(heading));
                }
            },
            None => self.start(event),
        }
    }

    fn start(&mut self, event: Event<'a>) {
        match event {
            Event::Start(Tag::Heading {
                level,
                id,
                classes,
                attrs,
            }) => {
                self.pending = Some(Pending::Heading(PendingHeading {
                    level,
                    id,
                    classes,
                    attrs,
                    events: Vec::new(),
                }));
            }
            Event::Start(Tag::CodeBlock(kind)) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => {
                        info.split_whitespace().next().map(str::to_string)
                    }
                    CodeBlockKind::Indented => None,
                };
                self.pending = Some(Pending::Code {
                    lang,
                    source: String::new(),
                });
            }
            Event::Start(Tag::Table(alignments)) => {
                let open = format!(
                    "<div class=\"{}\">",
                    html_escape::encode_double_quoted_attribute(&self.options.table_class)
                );
                self.out.push(Event::Html(open.into()));
                self.out.push(Event::Start(Tag::Table(alignments)));
            }
            Event::End(TagEnd::Table) => {
                self.out.push(Event::End(TagEnd::Table));
                self.out.push(Event::Html("</div>\n".into()));
            }
            other => self.out.push(other),
        }
    }

    fn finish_heading(&mut self, heading: PendingHeading<'a>) {
        let text: String = heading
            .events
            .iter()
            .filter_map(|event| match event {
                Event::Text(text) | Event::Code(text) => Some(text.as_ref()),
                _ => None,
            })
            .collect();

        // Assign even when an explicit id wins, so repeat counters stay in
        // step with the table of contents.
        let generated = self.ids.assign(heading_level(heading.level), text.trim());
        let id = heading.id.unwrap_or_else(|| generated.into());

        self.out.push(Event::Start(Tag::Heading {
            level: heading.level,
            id: Some(id),
            classes: heading.classes,
            attrs: heading.attrs,
        }));
        self.out.extend(heading.events);
        self.out.push(Event::End(TagEnd::Heading(heading.level)));
    }
}

// ============================================================================
// Code blocks
// ============================================================================

fn push_attr(html: &mut String, name: &str, value: &str) {
    html.push(' ');
    html.push_str(name);
    html.push_str("=\"");
    html.push_str(&html_escape::encode_double_quoted_attribute(value));
    html.push('"');
}

/// Render a fenced code block, consuming its directive header.
fn render_code_block(lang: Option<&str>, source: &str, options: &RenderOptions) -> String {
    let snippet = CodeSnippet::new(source, lang).parse();
    let meta = &snippet.metadata;
    let line_numbers = meta.show_line_numbers().unwrap_or(options.line_numbers);

    let mut html = String::with_capacity(source.len() * 2);
    html.push_str("<figure class=\"code-block\"");
    if let Some(lang) = lang {
        push_attr(&mut html, "data-lang", lang);
    }
    push_attr(&mut html, "data-copy", if meta.copy() { "true" } else { "false" });
    if meta.exec() {
        push_attr(&mut html, "data-exec", "true");
    }
    for (key, value) in meta.iter().filter(|(k, _)| !KNOWN_DIRECTIVES.contains(k)) {
        let name = format!("data-meta-{}", key.to_ascii_lowercase());
        push_attr(&mut html, &name, &value.to_string());
    }
    html.push('>');

    if let Some(file) = meta.file() {
        html.push_str("<figcaption class=\"code-file\">");
        html.push_str(&html_escape::encode_text(file));
        html.push_str("</figcaption>");
    }

    html.push_str("<pre");
    if line_numbers {
        html.push_str(" class=\"line-numbers\"");
    }
    html.push_str("><code");
    if let Some(lang) = lang {
        push_attr(&mut html, "class", &format!("language-{lang}"));
    }
    html.push('>');

    for (number, line) in (1u32..).zip(snippet.code.lines()) {
        html.push_str("<span class=\"line");
        if snippet.highlight.contains(number) {
            html.push_str(" highlighted");
        }
        html.push('"');
        if line_numbers {
            push_attr(&mut html, "data-line", &number.to_string());
        }
        html.push('>');
        html.push_str(&html_escape::encode_text(line));
        html.push_str("</span>\n");
    }

    html.push_str("</code></pre></figure>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(md: &str) -> String {
        render_body(md, &RenderOptions::default())
    }

    #[test]
    fn test_heading_ids_injected() {
        let html = body("# Hello World\n\n## Step 1: Setup\n");
        assert!(html.contains(r#"<h1 id="heading-1-hello-world">Hello World</h1>"#));
        assert!(html.contains(r#"<h2 id="heading-2-step-1-setup">Step 1: Setup</h2>"#));
    }

    #[test]
    fn test_explicit_heading_id_kept() {
        let html = body("## Custom {#my-id}\n");
        assert!(html.contains(r#"<h2 id="my-id">Custom</h2>"#));
    }

    #[test]
    fn test_heading_with_inline_markup() {
        let html = body("## Using `cargo` *fast*\n");
        assert!(html.contains(r#"id="heading-2-using-cargo-fast""#));
        assert!(html.contains("<code>cargo</code>"));
        assert!(html.contains("<em>fast</em>"));
    }

    #[test]
    fn test_repeated_headings() {
        let html = body("## Example\n\n## Example\n");
        assert_eq!(html.matches(r#"id="heading-2-example""#).count(), 2);

        let options = RenderOptions {
            dedupe_ids: true,
            ..RenderOptions::default()
        };
        let html = render_body("## Example\n\n## Example\n", &options);
        assert!(html.contains(r#"id="heading-2-example-1""#));
    }

    #[test]
    fn test_table_wrapped() {
        let html = body("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.starts_with(r#"<div class="table-wrapper"><table>"#));
        assert!(html.trim_end().ends_with("</table>\n</div>"));
    }

    #[test]
    fn test_table_class_configurable() {
        let options = RenderOptions {
            table_class: "scroll".to_string(),
            ..RenderOptions::default()
        };
        let html = render_body("| a |\n|---|\n| 1 |\n", &options);
        assert!(html.contains(r#"<div class="scroll"><table>"#));
    }

    #[test]
    fn test_code_block_directives() {
        let md = "```python\n# @file: app.py\n# @highlight: 2\n# @theme: dark\nimport os\nprint(os.name)\n```\n";
        let html = body(md);
        assert!(html.contains(r#"data-lang="python""#));
        assert!(html.contains(r#"data-copy="true""#));
        assert!(html.contains(r#"data-meta-theme="dark""#));
        assert!(html.contains(r#"<figcaption class="code-file">app.py</figcaption>"#));
        assert!(html.contains(r#"<code class="language-python">"#));
        assert!(html.contains("<span class=\"line\">import os</span>\n"));
        assert!(html.contains("<span class=\"line highlighted\">print(os.name)</span>\n"));
        assert!(!html.contains("@file"));
    }

    #[test]
    fn test_code_block_highlight_past_last_line() {
        let md = "```js\n// @highlight: 1-4000000000\nx\ny\n```\n";
        let html = body(md);
        assert!(html.contains("<span class=\"line highlighted\">x</span>\n"));
        assert!(html.contains("<span class=\"line highlighted\">y</span>\n"));
        assert_eq!(html.matches("<span").count(), 2);
    }

    #[test]
    fn test_code_block_line_numbers_and_escaping() {
        let md = "```html\n<!-- @showLineNumbers -->\n<p>&</p>\n```\n";
        let html = body(md);
        assert!(html.contains(r#"<pre class="line-numbers">"#));
        assert!(html.contains(r#"<span class="line" data-line="1">&lt;p&gt;&amp;&lt;/p&gt;</span>"#));
    }

    #[test]
    fn test_code_block_copy_and_exec() {
        let md = "```js\n// @copy: no\n// @exec\nrun()\n```\n";
        let html = body(md);
        assert!(html.contains(r#"data-copy="false""#));
        assert!(html.contains(r#"data-exec="true""#));
    }

    #[test]
    fn test_code_block_without_header() {
        let html = body("```\nplain\n```\n");
        assert!(html.contains("<pre><code><span class=\"line\">plain</span>\n</code></pre>"));
        assert!(!html.contains("data-lang"));
    }

    #[test]
    fn test_render_with_front_matter() {
        let md = "---\ntitle: Post\ntags: a, b\n---\n\n# Intro\n\n### Detail\n";
        let page = render(md, &RenderOptions::default()).unwrap();
        assert_eq!(page.meta.title.as_deref(), Some("Post"));
        assert!(!page.html.contains("title: Post"));

        // toc anchors match the rendered heading ids
        let anchors: Vec<_> = page.toc.iter().filter_map(|e| e.anchor_id.clone()).collect();
        assert_eq!(anchors, vec!["heading-1-intro", "heading-3-detail"]);
        for anchor in anchors {
            assert!(page.html.contains(&format!("id=\"{anchor}\"")));
        }
    }

    #[test]
    fn test_render_toc_uses_explicit_ids() {
        let md = "## Setup {#setup}

## Usage
";
        let page = render(md, &RenderOptions::default()).unwrap();
        let anchors: Vec<_> = page.toc.iter().filter_map(|e| e.anchor_id.as_deref()).collect();
        assert_eq!(anchors, vec!["setup", "heading-2-usage"]);
        assert!(page.html.contains(r#"<h2 id="setup">Setup</h2>"#));
    }
}
