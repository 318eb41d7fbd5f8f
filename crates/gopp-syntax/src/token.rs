//! Operator and keyword tokens that survive into the syntax tree.
//!
//! The tokenizer itself lives outside this crate. Only the token kinds that
//! nodes record (operators, literal kinds, statement keywords) are defined
//! here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operator of an [`Operation`](crate::ast::Operation) or an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// `:` (only used by `:=` assignments)
    Def,
    /// `!` (also spelled `NOT`)
    Not,
    /// `<-`
    Recv,
    /// `~`
    Tilde,

    // Precedence 1
    /// `||` (also spelled `OR`)
    OrOr,

    // Precedence 2
    /// `&&` (also spelled `AND`)
    AndAnd,

    // Precedence 3
    Eql,
    Neq,
    Lss,
    Leq,
    Gtr,
    Geq,

    // Precedence 4
    Add,
    Sub,
    Or,
    Xor,

    // Precedence 5
    /// `*`, which is also the pointer-of type constructor and dereference
    Mul,
    Div,
    Rem,
    And,
    AndNot,
    Shl,
    Shr,
}

impl Operator {
    /// Source text of this operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Def => ":",
            Operator::Not => "!",
            Operator::Recv => "<-",
            Operator::Tilde => "~",
            Operator::OrOr => "||",
            Operator::AndAnd => "&&",
            Operator::Eql => "==",
            Operator::Neq => "!=",
            Operator::Lss => "<",
            Operator::Leq => "<=",
            Operator::Gtr => ">",
            Operator::Geq => ">=",
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Or => "|",
            Operator::Xor => "^",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Rem => "%",
            Operator::And => "&",
            Operator::AndNot => "&^",
            Operator::Shl => "<<",
            Operator::Shr => ">>",
        }
    }

    /// Binary precedence (1 = lowest). Unary-only operators return 0.
    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Def | Operator::Not | Operator::Recv | Operator::Tilde => 0,
            Operator::OrOr => 1,
            Operator::AndAnd => 2,
            Operator::Eql
            | Operator::Neq
            | Operator::Lss
            | Operator::Leq
            | Operator::Gtr
            | Operator::Geq => 3,
            Operator::Add | Operator::Sub | Operator::Or | Operator::Xor => 4,
            Operator::Mul
            | Operator::Div
            | Operator::Rem
            | Operator::And
            | Operator::AndNot
            | Operator::Shl
            | Operator::Shr => 5,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a [`BasicLit`](crate::ast::BasicLit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LitKind {
    Int,
    Float,
    Imag,
    Rune,
    String,
}

/// Keyword of a branch statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BranchTok {
    Break,
    Continue,
    Fallthrough,
    Goto,
}

impl BranchTok {
    pub fn as_str(&self) -> &'static str {
        match self {
            BranchTok::Break => "break",
            BranchTok::Continue => "continue",
            BranchTok::Fallthrough => "fallthrough",
            BranchTok::Goto => "goto",
        }
    }
}

/// Keyword of a call statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallTok {
    Go,
    Defer,
}

/// Keyword that introduced a loop
///
/// `while cond { ... }` is a `for` loop with only a condition; the keyword is
/// kept so diagnostics can quote what the user wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LoopTok {
    #[default]
    For,
    While,
}
