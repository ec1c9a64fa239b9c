//! Agenda dialect parsing
//!
//! Splits dialect text into render blocks. Roles grids are pulled out with
//! a marker regex and broken into columns; everything between grids is
//! passed through untouched as standard Markdown.
//!
//! The grammar is flat: `open → column* → close`. A grid never nests, and a
//! grid missing its `:::end-grid` runs to the end of the input.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::{debug, warn};

use super::{COLUMN_CLOSE, COLUMN_OPEN, GRID_CLOSE};

/// Matches a whole roles grid, marker lines included
static GRID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?ms)^[ \t]*:::roles-grid[ \t\r]*$.*?(?:^[ \t]*:::end-grid[ \t\r]*$|\z)")
        .expect("grid pattern is valid")
});

/// One renderable piece of a dialect document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderBlock {
    /// Roles grid, one Markdown body per non-empty column
    Grid { columns: Vec<String> },
    /// Plain Markdown, verbatim
    Standard { markdown: String },
}

/// Splits dialect text into grid and standard blocks, in document order
pub fn parse(text: &str) -> Vec<RenderBlock> {
    let mut blocks = Vec::new();
    let mut cursor = 0;

    for grid in GRID_RE.find_iter(text) {
        push_standard(&mut blocks, &text[cursor..grid.start()]);
        blocks.push(RenderBlock::Grid {
            columns: grid_columns(grid.as_str()),
        });
        cursor = grid.end();
    }
    push_standard(&mut blocks, &text[cursor..]);

    debug!(
        blocks = blocks.len(),
        grids = blocks
            .iter()
            .filter(|b| matches!(b, RenderBlock::Grid { .. }))
            .count(),
        "parsed agenda document"
    );
    blocks
}

fn push_standard(blocks: &mut Vec<RenderBlock>, segment: &str) {
    if !segment.trim().is_empty() {
        blocks.push(RenderBlock::Standard {
            markdown: segment.to_string(),
        });
    }
}

/// Breaks a grid span into its column bodies
///
/// Text outside a column is ignored. A column missing its `:::` line ends
/// at the next column or at the end of the grid.
fn grid_columns(grid: &str) -> Vec<String> {
    let mut lines = grid.lines();
    // opening marker
    lines.next();

    let mut columns = Vec::new();
    let mut current: Option<Vec<&str>> = None;
    let mut closed = false;

    for line in lines {
        match line.trim() {
            GRID_CLOSE => {
                closed = true;
                break;
            }
            COLUMN_OPEN => {
                if let Some(column) = current.replace(Vec::new()) {
                    push_column(&mut columns, &column);
                }
            }
            COLUMN_CLOSE => {
                if let Some(column) = current.take() {
                    push_column(&mut columns, &column);
                }
            }
            _ => {
                if let Some(column) = current.as_mut() {
                    column.push(line);
                }
            }
        }
    }

    if let Some(column) = current {
        push_column(&mut columns, &column);
    }
    if !closed {
        warn!("roles grid has no closing marker; closing at end of input");
    }

    columns
}

fn push_column(columns: &mut Vec<String>, lines: &[&str]) {
    let body = lines.join("\n");
    let body = body.trim();
    if !body.is_empty() {
        columns.push(body.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(columns: &[&str]) -> RenderBlock {
        RenderBlock::Grid {
            columns: columns.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn plain_markdown_is_one_block() {
        let text = "# Title\n\nSome text\n";
        assert_eq!(
            parse(text),
            vec![RenderBlock::Standard {
                markdown: text.to_string()
            }]
        );
    }

    #[test]
    fn blank_input_has_no_blocks() {
        assert!(parse("").is_empty());
        assert!(parse("\n \n\t\n").is_empty());
    }

    #[test]
    fn grid_between_standard_blocks() {
        let text = "\
# Meeting

:::roles-grid

:::roles-column
**Presiding:** Bishop Young

:::

:::roles-column
**Chorister:** Sister Hall
:::

:::end-grid

*Opening Prayer:* TBD
";
        let blocks = parse(text);
        assert_eq!(blocks.len(), 3);
        assert_eq!(
            blocks[0],
            RenderBlock::Standard {
                markdown: "# Meeting\n\n".to_string()
            }
        );
        assert_eq!(
            blocks[1],
            grid(&["**Presiding:** Bishop Young", "**Chorister:** Sister Hall"])
        );
        assert_eq!(
            blocks[2],
            RenderBlock::Standard {
                markdown: "\n\n*Opening Prayer:* TBD\n".to_string()
            }
        );
    }

    #[test]
    fn empty_columns_are_dropped() {
        let text = ":::roles-grid\n:::roles-column\n:::\n:::roles-column\n**Chorister:** A\n:::\n:::end-grid\n";
        assert_eq!(parse(text), vec![grid(&["**Chorister:** A"])]);
    }

    #[test]
    fn grid_with_no_columns() {
        let text = ":::roles-grid\n\n:::end-grid";
        assert_eq!(parse(text), vec![grid(&[])]);
    }

    #[test]
    fn more_than_two_columns_are_kept() {
        let text = ":::roles-grid\n:::roles-column\na\n:::\n:::roles-column\nb\n:::\n:::roles-column\nc\n:::\n:::end-grid";
        assert_eq!(parse(text), vec![grid(&["a", "b", "c"])]);
    }

    #[test]
    fn unterminated_grid_closes_at_end_of_input() {
        let text = "# T\n\n:::roles-grid\n:::roles-column\n**Presiding:** X\n:::\n\n## Later\n";
        let blocks = parse(text);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1], grid(&["**Presiding:** X"]));
    }

    #[test]
    fn unterminated_column_ends_at_next_column() {
        let text = ":::roles-grid\n:::roles-column\nleft\n:::roles-column\nright\n:::end-grid\n";
        assert_eq!(parse(text), vec![grid(&["left", "right"])]);
    }

    #[test]
    fn nested_grid_marker_is_not_recursive() {
        let text = ":::roles-grid\n:::roles-column\n:::roles-grid\ninner\n:::\n:::end-grid\n:::end-grid\n";
        let blocks = parse(text);

        assert_eq!(blocks[0], grid(&[":::roles-grid\ninner"]));
        assert_eq!(
            blocks[1],
            RenderBlock::Standard {
                markdown: "\n:::end-grid\n".to_string()
            }
        );
    }

    #[test]
    fn markers_must_be_whole_lines() {
        let text = "Use :::roles-grid to lay out roles.\n";
        assert_eq!(parse(text).len(), 1);
        assert!(matches!(parse(text)[0], RenderBlock::Standard { .. }));
    }

    #[test]
    fn crlf_markers() {
        let text = ":::roles-grid\r\n:::roles-column\r\n**Presiding:** X\r\n:::\r\n:::end-grid\r\n";
        assert_eq!(parse(text), vec![grid(&["**Presiding:** X"])]);
    }
}
