//! Source positions for syntax tree nodes.
//!
//! A node's position is the position of the terminal it represents (names,
//! literals) or of the token uniquely associated with its production, usually
//! the left-most one (`[` for an index expression, `if` for an if statement).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 1-based line/column position in a source file.
///
/// Positions are fixed once the parser has built a node. Nodes synthesized
/// by a later pass either copy the position of the node they derive from or
/// use [`Pos::NONE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Pos {
    pub line: u32,
    pub col: u32,
}

impl Pos {
    /// Position of nodes that have no source counterpart.
    pub const NONE: Pos = Pos { line: 0, col: 0 };

    pub fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }

    /// Check if this position refers to a real source location
    pub fn is_known(&self) -> bool {
        self.line > 0
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_known() {
            write!(f, "{}:{}", self.line, self.col)
        } else {
            f.write_str("?")
        }
    }
}
