//! Repeated/optional block extraction.
//!
//! The ICD marks a field group that repeats (or is optional) with marker
//! rows inside the byte-offset table:
//!
//! ```text
//! Start of repeated block (numCh times)
//! ...field rows...
//! End of repeated block
//! ```
//!
//! Extraction runs as two independent passes over the same ordered rows,
//! repeated first, then optional. Each pass is a two-state machine that
//! moves rows between the start and end markers into the block partition
//! and removes the marker rows themselves. The end marker terminates the
//! pass; rows after it are left for the next pass and the base fields.

const REPEAT_START_PREFIX: &str = "Start of repeated block (";
const REPEAT_START_SUFFIX: &str = " times)";
const REPEAT_END: &str = "End of repeated block";
const OPTIONAL_START: &str = "Start of optional block";
const OPTIONAL_END: &str = "End of optional block";

/// Which marker pair a pass looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Repeated,
    Optional,
}

/// Rows moved out of the live set by one pass.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BlockExtraction {
    pub block_rows: Vec<Vec<String>>,
    /// Count variable captured from the repeated-block start marker.
    pub repeat_var: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    NotInBlock,
    InBlock,
}

/// Run one extraction pass over `rows`, removing matched rows in place.
pub fn extract_block(rows: &mut Vec<Vec<String>>, kind: BlockKind) -> BlockExtraction {
    let mut out = BlockExtraction::default();
    let mut kept: Vec<Vec<String>> = Vec::with_capacity(rows.len());
    let mut state = State::NotInBlock;
    let mut ended = false;

    for row in rows.drain(..) {
        if ended {
            kept.push(row);
            continue;
        }
        // The end marker wins over everything, even outside a block: the
        // marker row is dropped and the pass stops scanning.
        if row_matches(&row, kind.end_marker()) {
            ended = true;
            continue;
        }
        match state {
            State::NotInBlock => match kind.match_start(&row) {
                Some(var) => {
                    if let Some(var) = var {
                        out.repeat_var = Some(var);
                    }
                    state = State::InBlock;
                }
                None => kept.push(row),
            },
            State::InBlock => out.block_rows.push(row),
        }
    }

    *rows = kept;
    out
}

impl BlockKind {
    fn end_marker(&self) -> &'static str {
        match self {
            Self::Repeated => REPEAT_END,
            Self::Optional => OPTIONAL_END,
        }
    }

    /// `Some(captured)` when any cell of the row is a start marker; the
    /// inner option carries the repeat-count variable for repeated blocks.
    fn match_start(&self, row: &[String]) -> Option<Option<String>> {
        match self {
            Self::Repeated => row
                .iter()
                .find_map(|cell| capture_repeat_var(cell))
                .map(Some),
            Self::Optional => row_matches(row, OPTIONAL_START).then_some(None),
        }
    }
}

fn row_matches(row: &[String], marker: &str) -> bool {
    row.iter().any(|cell| cell.contains(marker))
}

/// Extract `numCh` from `Start of repeated block (numCh times)`.
fn capture_repeat_var(cell: &str) -> Option<String> {
    let start = cell.find(REPEAT_START_PREFIX)? + REPEAT_START_PREFIX.len();
    let rest = &cell[start..];
    let end = rest.find(REPEAT_START_SUFFIX)?;
    let var = rest[..end].trim();
    if var.is_empty() {
        return None;
    }
    Some(var.to_string())
}
