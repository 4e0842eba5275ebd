use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::{
    highlight::CodeHighlighter,
    parsing::{
        Document, Meta,
        blocks::{Block, List, ListMarker, TableRow},
        inline::{InlineNode, Style},
    },
};

pub const DEFAULT_CONTAINER_CLASS: &str = "notedown-container";
const MISSING_META_COLOR: &str = "#ff6b6b";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Class of the outermost `div`.
    pub container_class: String,
    /// Meta values used when the document does not declare them.
    pub default_meta: Meta,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            container_class: DEFAULT_CONTAINER_CLASS.to_string(),
            default_meta: Meta::new(),
        }
    }
}

/// Renders with default options and no syntax highlighting.
pub fn render_html(doc: &Document) -> String {
    HtmlRenderer::new(RenderOptions::default()).render(doc)
}

pub struct HtmlRenderer<'h> {
    options: RenderOptions,
    highlighter: Option<&'h dyn CodeHighlighter>,
}

impl<'h> HtmlRenderer<'h> {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            highlighter: None,
        }
    }

    pub fn with_highlighter(mut self, highlighter: &'h dyn CodeHighlighter) -> Self {
        self.highlighter = Some(highlighter);
        self
    }

    pub fn render(&self, doc: &Document) -> String {
        let mut meta = self.options.default_meta.clone();
        meta.extend(doc.meta.iter().map(|(k, v)| (k.clone(), v.clone())));

        let mut w = Writer {
            out: String::new(),
            meta: &meta,
            highlighter: self.highlighter,
        };

        let _ = write!(
            w.out,
            r#"<div class="{}""#,
            attr(&self.options.container_class)
        );
        for (key, value) in &doc.meta {
            let key: String = key
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
                .collect();
            let _ = write!(
                w.out,
                r#" data-meta-{}="{}""#,
                key.to_ascii_lowercase(),
                attr(value)
            );
        }
        w.out.push('>');
        w.blocks(&doc.content);
        w.out.push_str("</div>");
        w.out
    }
}

/// Output buffer plus what every node needs while rendering.
struct Writer<'r> {
    out: String,
    meta: &'r Meta,
    highlighter: Option<&'r dyn CodeHighlighter>,
}

impl Writer<'_> {
    fn blocks(&mut self, blocks: &[Block]) {
        for b in blocks {
            self.block(b);
        }
    }

    fn block(&mut self, b: &Block) {
        match b {
            Block::Paragraph { content } => {
                self.out.push_str(r#"<p class="notedown-paragraph">"#);
                for run in content {
                    self.out.push_str(r#"<span class="notedown-text">"#);
                    self.inlines(&run.content);
                    self.out.push_str("</span>");
                }
                self.out.push_str("</p>");
            }
            Block::Title { size, text } => {
                let _ = write!(
                    self.out,
                    r#"<h{size} class="notedown-title notedown-title-{size}">"#
                );
                self.inlines(text);
                let _ = write!(self.out, "</h{size}>");
            }
            Block::Desc { text } => {
                self.out.push_str(r#"<div class="notedown-description">"#);
                self.inlines(text);
                self.out.push_str("</div>");
            }
            Block::Code { lang, content, .. } => self.code(lang.as_deref(), content),
            Block::Collapse {
                size,
                text,
                content,
            } => {
                match size {
                    Some(n) => {
                        let _ = write!(
                            self.out,
                            r#"<details class="notedown-collapse notedown-collapse-{n}" data-size="{n}">"#
                        );
                    }
                    None => self.out.push_str(r#"<details class="notedown-collapse">"#),
                }
                self.out.push_str(r#"<summary class="notedown-collapse-title">"#);
                self.inlines(text);
                self.out.push_str("</summary>");
                self.out.push_str(r#"<div class="notedown-collapse-content">"#);
                let _ = write!(self.out, r#"<div class="{DEFAULT_CONTAINER_CLASS}">"#);
                self.blocks(content);
                self.out.push_str("</div></div></details>");
            }
            Block::Image { link, alt } => {
                let _ = write!(
                    self.out,
                    r#"<figure class="notedown-image-figure"><img class="notedown-image" src="{}" alt="{}">"#,
                    attr(link),
                    attr(alt)
                );
                if !alt.is_empty() {
                    let _ = write!(self.out, "<figcaption>{}</figcaption>", text(alt));
                }
                self.out.push_str("</figure>");
            }
            Block::Table { rows } => self.table(rows),
            Block::List(list) => self.list(list),
            Block::Hr => self.out.push_str(r#"<hr class="notedown-hr">"#),
            Block::Newline => self.out.push_str("<br>"),
            Block::Unknown => log::warn!("skipping unknown block"),
        }
    }

    fn code(&mut self, lang: Option<&str>, content: &str) {
        self.out.push_str(r#"<pre class="notedown-code-block""#);
        if let Some(lang) = lang {
            let _ = write!(self.out, r#" data-lang="{}""#, attr(lang));
        }
        let _ = write!(
            self.out,
            r#" data-highlight="{}">"#,
            self.highlighter.is_some()
        );
        match lang {
            Some(lang) => {
                let _ = write!(self.out, r#"<code class="language-{} hljs">"#, attr(lang));
            }
            None => self.out.push_str(r#"<code class="hljs">"#),
        }
        match self.highlighter {
            Some(h) => self.out.push_str(&h.highlight_code(content, lang)),
            None => self.out.push_str(&text(content)),
        }
        self.out.push_str("</code></pre>");
    }

    fn list(&mut self, list: &List) {
        let (tag, kind) = if list.ordered {
            ("ol", "ordered")
        } else {
            ("ul", "unordered")
        };
        let _ = write!(self.out, r#"<{tag} class="notedown-list notedown-list-{kind}">"#);
        for item in &list.items {
            self.out.push_str(r#"<li class="notedown-list-item""#);
            if let ListMarker::Ordered(n) = &item.marker {
                let _ = write!(self.out, r#" value="{}""#, attr(n));
            }
            self.out.push('>');
            self.inlines(&item.content);
            self.blocks(&item.content_blocks);
            for nested in &item.nested {
                self.list(nested);
            }
            self.out.push_str("</li>");
        }
        let _ = write!(self.out, "</{tag}>");
    }

    fn table(&mut self, rows: &[TableRow]) {
        self.out
            .push_str(r#"<div class="notedown-table-wrapper"><table class="notedown-table">"#);
        let (head, body): (Vec<_>, Vec<_>) = rows.iter().partition(|r| r.is_header);
        if !head.is_empty() {
            self.out.push_str("<thead>");
            for row in head {
                self.row(row, "th");
            }
            self.out.push_str("</thead>");
        }
        if !body.is_empty() {
            self.out.push_str("<tbody>");
            for row in body {
                self.row(row, "td");
            }
            self.out.push_str("</tbody>");
        }
        self.out.push_str("</table></div>");
    }

    fn row(&mut self, row: &TableRow, cell_tag: &str) {
        self.out.push_str("<tr>");
        for cell in &row.cells {
            let _ = write!(
                self.out,
                r#"<{cell_tag} style="text-align: {}">"#,
                cell.align.as_str()
            );
            self.inlines(&cell.content);
            let _ = write!(self.out, "</{cell_tag}>");
        }
        self.out.push_str("</tr>");
    }

    fn inlines(&mut self, nodes: &[InlineNode]) {
        for n in nodes {
            self.inline(n);
        }
    }

    fn inline(&mut self, n: &InlineNode) {
        match n {
            InlineNode::Text { text: t } => self.out.push_str(&text(t)),
            InlineNode::Link { link, text: t } => {
                let _ = write!(
                    self.out,
                    r#"<a class="notedown-link" href="{}">{}</a>"#,
                    attr(link),
                    text(t)
                );
            }
            InlineNode::Image { link, alt } => {
                let _ = write!(
                    self.out,
                    r#"<img class="notedown-inline-image" src="{}" alt="{}">"#,
                    attr(link),
                    attr(alt)
                );
            }
            InlineNode::Meta { key } => self.meta_ref(key),
            InlineNode::Styled { style, content } => {
                let (tag, class) = match style {
                    Style::Bold => ("strong", "notedown-bold"),
                    Style::Italic => ("em", "notedown-italic"),
                    Style::Underline => ("u", "notedown-underline"),
                    Style::Crossline => ("del", "notedown-crossline"),
                };
                let _ = write!(self.out, r#"<{tag} class="{class}">"#);
                self.inlines(content);
                let _ = write!(self.out, "</{tag}>");
            }
            InlineNode::Code { text: t } => {
                let _ = write!(
                    self.out,
                    r#"<code class="notedown-inline-code">{}</code>"#,
                    text(t)
                );
            }
            InlineNode::Latex { formula } => {
                let _ = write!(
                    self.out,
                    r#"<span class="notedown-latex">${}$</span>"#,
                    text(formula)
                );
            }
            InlineNode::Color {
                foreground,
                background,
                content,
            } => {
                let mut style = vec![];
                let mut data = String::new();
                if let Some(fg) = foreground {
                    style.push(format!("color: {}", css_color(fg)));
                    let _ = write!(data, r#" data-fg-color="{}""#, attr(fg));
                }
                if let Some(bg) = background {
                    style.push(format!("background-color: {}", css_color(bg)));
                    let _ = write!(data, r#" data-bg-color="{}""#, attr(bg));
                }
                self.out.push_str(r#"<span class="notedown-color""#);
                if !style.is_empty() {
                    let _ = write!(self.out, r#" style="{}""#, attr(&style.join("; ")));
                }
                self.out.push_str(&data);
                self.out.push('>');
                self.inlines(content);
                self.out.push_str("</span>");
            }
            InlineNode::Unknown => log::warn!("skipping unknown inline node"),
        }
    }

    fn meta_ref(&mut self, key: &str) {
        match self.meta.get(key) {
            Some(value) => {
                let _ = write!(
                    self.out,
                    r#"<span class="notedown-meta-ref" data-meta-key="{}">{}</span>"#,
                    attr(key),
                    text(value)
                );
            }
            None => {
                log::debug!("meta variable '{key}' not found");
                let _ = write!(
                    self.out,
                    r#"<span class="notedown-meta-ref" data-meta-key="{k}" style="color: {MISSING_META_COLOR}" title="Meta variable '{k}' not found">@{{{k}}}</span>"#,
                    k = attr(key)
                );
            }
        }
    }
}

/// Hex tokens (3 to 6 hex digits) get a `#`; names pass through.
fn css_color(token: &str) -> String {
    if (3..=6).contains(&token.len()) && token.bytes().all(|b| b.is_ascii_hexdigit()) {
        format!("#{token}")
    } else {
        token.to_string()
    }
}
