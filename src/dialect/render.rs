//! HTML rendering for agenda documents
//!
//! Pipeline: dialect text → [`RenderBlock`]s → comrak AST per block (and
//! per grid column) → HTML with a class from the [`StyleTable`] on every
//! node. Raw HTML in the source is escaped, never passed through, and
//! links with script-capable schemes get an empty `href`.

use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena, Options};
use once_cell::sync::Lazy;
use regex::Regex;

use super::parse::{parse, RenderBlock};
use super::style::StyleTable;

/// Renders a whole dialect document to HTML
pub fn render_html(text: &str, styles: &StyleTable) -> String {
    let mut out = String::new();
    for block in parse(text) {
        render_block(&block, styles, &mut out);
    }
    out
}

/// Renders one parsed block to HTML
pub fn render_block(block: &RenderBlock, styles: &StyleTable, out: &mut String) {
    match block {
        RenderBlock::Standard { markdown } => out.push_str(&render_markdown(markdown, styles)),
        RenderBlock::Grid { columns } => {
            out.push_str(&format!("<div class=\"{}\">\n", escape(&styles.grid)));
            for column in columns {
                out.push_str(&format!("<div class=\"{}\">\n", escape(&styles.column)));
                out.push_str(&render_markdown(column, styles));
                out.push_str("</div>\n");
            }
            out.push_str("</div>\n");
        }
    }
}

/// Renders plain Markdown with the style table applied
pub fn render_markdown(markdown: &str, styles: &StyleTable) -> String {
    let arena = Arena::new();
    let options = Options::default();
    let root = parse_document(&arena, markdown, &options);

    let mut out = String::new();
    render_node(root, styles, &mut out);
    out
}

fn render_children<'a>(node: &'a AstNode<'a>, styles: &StyleTable, out: &mut String) {
    for child in node.children() {
        render_node(child, styles, out);
    }
}

fn open(out: &mut String, tag: &str, class: &str) {
    out.push_str(&format!("<{} class=\"{}\">", tag, escape(class)));
}

fn render_node<'a>(node: &'a AstNode<'a>, styles: &StyleTable, out: &mut String) {
    let data = node.data.borrow();

    match &data.value {
        NodeValue::Heading(heading) => {
            let level = heading.level.clamp(1, 6);
            open(out, &format!("h{}", level), styles.heading(level));
            render_children(node, styles, out);
            out.push_str(&format!("</h{}>\n", level));

            if level == 3 {
                out.push_str(&format!("<hr class=\"{}\" />\n", escape(&styles.h3_rule)));
            }
        }

        NodeValue::Paragraph => {
            if in_tight_list(node) {
                render_children(node, styles, out);
            } else {
                open(out, "p", &styles.p);
                render_children(node, styles, out);
                out.push_str("</p>\n");
            }
        }

        NodeValue::List(list) => {
            let tag = match list.list_type {
                ListType::Ordered => "ol",
                ListType::Bullet => "ul",
            };
            open(out, tag, &styles.ul);
            out.push('\n');
            render_children(node, styles, out);
            out.push_str(&format!("</{}>\n", tag));
        }

        NodeValue::Item(_) => {
            open(out, "li", &styles.li);
            render_children(node, styles, out);
            out.push_str("</li>\n");
        }

        NodeValue::ThematicBreak => {
            out.push_str(&format!("<hr class=\"{}\" />\n", escape(&styles.hr)));
        }

        NodeValue::Strong => {
            open(out, "strong", &styles.strong);
            render_children(node, styles, out);
            out.push_str("</strong>");
        }

        NodeValue::Emph => {
            open(out, "em", &styles.em);
            render_children(node, styles, out);
            out.push_str("</em>");
        }

        NodeValue::Text(text) => out.push_str(&escape(text)),
        NodeValue::SoftBreak => out.push('\n'),
        NodeValue::LineBreak => out.push_str("<br />\n"),

        NodeValue::Code(code) => {
            out.push_str(&format!("<code>{}</code>", escape(&code.literal)));
        }

        NodeValue::CodeBlock(block) => {
            out.push_str(&format!("<pre><code>{}</code></pre>\n", escape(&block.literal)));
        }

        NodeValue::Link(link) => {
            let href = if dangerous_url(&link.url) { "" } else { link.url.as_str() };
            out.push_str(&format!("<a href=\"{}\">", escape(href)));
            render_children(node, styles, out);
            out.push_str("</a>");
        }

        NodeValue::BlockQuote => {
            out.push_str("<blockquote>\n");
            render_children(node, styles, out);
            out.push_str("</blockquote>\n");
        }

        NodeValue::HtmlInline(raw) => out.push_str(&escape(raw)),
        NodeValue::HtmlBlock(raw) => {
            open(out, "p", &styles.p);
            out.push_str(&escape(raw.literal.trim_end()));
            out.push_str("</p>\n");
        }

        // Document, and any node type without its own presentation
        _ => render_children(node, styles, out),
    }
}

static DANGEROUS_SCHEME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:javascript|vbscript|file|data):").expect("scheme pattern is valid")
});

static SAFE_DATA_IMAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^data:image/(?:png|gif|jpeg|webp)").expect("data pattern is valid")
});

/// Same scheme rules as comrak's own HTML writer
fn dangerous_url(url: &str) -> bool {
    let url = url.trim_start_matches(|c: char| c <= ' ');
    DANGEROUS_SCHEME.is_match(url) && !SAFE_DATA_IMAGE.is_match(url)
}

/// Paragraphs inside tight list items render without a `<p>` wrapper
fn in_tight_list<'a>(node: &'a AstNode<'a>) -> bool {
    let Some(item) = node.parent() else {
        return false;
    };
    if !matches!(item.data.borrow().value, NodeValue::Item(_)) {
        return false;
    }

    item.parent().is_some_and(|list| match &list.data.borrow().value {
        NodeValue::List(list) => list.tight,
        _ => false,
    })
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
