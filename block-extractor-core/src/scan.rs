//! Fenced code block extraction from Markdown

use crate::selection::Selection;

/// Marker that opens and closes a fenced block
const FENCE: &str = "```";

/// Separator placed between blocks when all of them are returned
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// A completed fenced block
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block<'a> {
    /// Body lines, fences excluded
    pub lines: Vec<&'a str>,
    /// Zero-based line of the opening fence
    pub fence_line: usize,
}

impl Block<'_> {
    /// Block body with lines joined by `\n`
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Outside,
    Inside { opened_at: usize },
}

/// Check whether a line opens or closes a block (trailing info string ignored)
fn is_fence(line: &str) -> bool {
    line.trim().starts_with(FENCE)
}

/// Collect every completed block in document order.
///
/// A block still open when the document ends is dropped.
pub fn scan(document: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();
    let mut state = State::Outside;

    for (line_idx, line) in document.split('\n').enumerate() {
        if is_fence(line) {
            log::trace!("fence at line {}", line_idx);
            state = match state {
                State::Outside => State::Inside {
                    opened_at: line_idx,
                },
                State::Inside { opened_at } => {
                    blocks.push(Block {
                        lines: std::mem::take(&mut current),
                        fence_line: opened_at,
                    });
                    State::Outside
                }
            };
        } else if let State::Inside { .. } = state {
            current.push(line);
        }
    }

    if let State::Inside { opened_at } = state {
        log::debug!(
            "discarding unterminated block opened at line {} ({} lines)",
            opened_at,
            current.len()
        );
    }

    log::debug!("found {} complete block(s)", blocks.len());
    blocks
}

/// Extract block text for `selection`, joining multiple blocks with `separator`
pub fn extract_with(document: &str, selection: Selection, separator: &str) -> String {
    let blocks = scan(document);

    match selection {
        Selection::All => blocks
            .iter()
            .map(Block::text)
            .collect::<Vec<_>>()
            .join(separator),
        _ => match selection.index_in(blocks.len()) {
            Some(index) => blocks[index].text(),
            None => {
                log::debug!("{} not found among {} block(s)", selection, blocks.len());
                String::new()
            }
        },
    }
}

/// Extract block text for `selection`, separating blocks by a blank line
pub fn extract(document: &str, selection: Selection) -> String {
    extract_with(document, selection, BLOCK_SEPARATOR)
}
