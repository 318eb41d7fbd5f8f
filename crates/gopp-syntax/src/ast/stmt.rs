//! Statement AST nodes
//!
//! Class syntax does not add statements; these are the standard control-flow
//! forms. Statements that may appear in an `if`/`for`/`switch` header form
//! their own closed sub-family, [`SimpleStmt`].

use super::*;
use crate::pos::Pos;
use crate::token::{BranchTok, CallTok, LoopTok, Operator};
use serde::{Deserialize, Serialize};

/// Statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    /// Simple statement (empty, expression, send, assignment, range clause)
    Simple(SimpleStmt),

    /// Label: Stmt
    Labeled(LabeledStmt),

    /// { List }
    Block(BlockStmt),

    /// Declarations inside a function body
    Decl(DeclStmt),

    /// break, continue, fallthrough, goto
    Branch(BranchStmt),

    /// go f(), defer f()
    Call(CallStmt),

    /// return Results
    Return(ReturnStmt),

    /// if Init; Cond { Then } else Else
    If(IfStmt),

    /// for/while loop
    For(ForStmt),

    /// switch Init; Tag { Body }
    Switch(SwitchStmt),

    /// select { Body }
    Select(SelectStmt),
}

impl Stmt {
    /// Get the position of this statement
    pub fn pos(&self) -> Pos {
        match self {
            Stmt::Simple(s) => s.pos(),
            Stmt::Labeled(s) => s.pos,
            Stmt::Block(s) => s.pos,
            Stmt::Decl(s) => s.pos,
            Stmt::Branch(s) => s.pos,
            Stmt::Call(s) => s.pos,
            Stmt::Return(s) => s.pos,
            Stmt::If(s) => s.pos,
            Stmt::For(s) => s.pos,
            Stmt::Switch(s) => s.pos,
            Stmt::Select(s) => s.pos,
        }
    }

    /// Name of this statement's node kind, for diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Stmt::Simple(s) => s.kind_name(),
            Stmt::Labeled(_) => "LabeledStmt",
            Stmt::Block(_) => "BlockStmt",
            Stmt::Decl(_) => "DeclStmt",
            Stmt::Branch(_) => "BranchStmt",
            Stmt::Call(_) => "CallStmt",
            Stmt::Return(_) => "ReturnStmt",
            Stmt::If(_) => "IfStmt",
            Stmt::For(_) => "ForStmt",
            Stmt::Switch(_) => "SwitchStmt",
            Stmt::Select(_) => "SelectStmt",
        }
    }
}

/// Statement allowed in a control-flow header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimpleStmt {
    Empty(EmptyStmt),
    Expr(ExprStmt),
    Send(SendStmt),
    Assign(AssignStmt),
    /// Only legal as the init of a `for` loop
    Range(RangeClause),
}

impl SimpleStmt {
    pub fn pos(&self) -> Pos {
        match self {
            SimpleStmt::Empty(s) => s.pos,
            SimpleStmt::Expr(s) => s.pos,
            SimpleStmt::Send(s) => s.pos,
            SimpleStmt::Assign(s) => s.pos,
            SimpleStmt::Range(s) => s.pos,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            SimpleStmt::Empty(_) => "EmptyStmt",
            SimpleStmt::Expr(_) => "ExprStmt",
            SimpleStmt::Send(_) => "SendStmt",
            SimpleStmt::Assign(_) => "AssignStmt",
            SimpleStmt::Range(_) => "RangeClause",
        }
    }
}

// ============================================================================
// Simple Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmptyStmt {
    pub pos: Pos,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExprStmt {
    pub x: Expr,
    pub pos: Pos,
}

/// Chan <- Value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendStmt {
    pub chan: Expr,
    pub value: Expr,
    pub pos: Pos,
}

/// Lhs Op= Rhs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignStmt {
    /// None means plain `=`; `Def` means `:=`
    pub op: Option<Operator>,
    pub lhs: Expr,
    /// None means `Lhs++` (op `Add`) or `Lhs--` (op `Sub`)
    pub rhs: Option<Expr>,
    pub pos: Pos,
}

impl AssignStmt {
    /// Check if this is an `x++`/`x--` statement
    pub fn is_inc_dec(&self) -> bool {
        self.rhs.is_none()
    }
}

/// Lhs = range X, Lhs := range X
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeClause {
    /// None means no `Lhs =` or `Lhs :=`
    pub lhs: Option<Expr>,
    /// `:=`
    pub def: bool,
    pub x: Expr,
    pub pos: Pos,
}

// ============================================================================
// Compound Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledStmt {
    pub label: Name,
    pub stmt: Box<Stmt>,
    pub pos: Pos,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BlockStmt {
    pub list: Vec<Stmt>,
    pub rbrace: Pos,
    pub pos: Pos,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeclStmt {
    pub decl_list: Vec<Decl>,
    pub pos: Pos,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchStmt {
    pub tok: BranchTok,
    pub label: Option<Name>,
    pub pos: Pos,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallStmt {
    pub tok: CallTok,
    pub call: CallExpr,
    pub pos: Pos,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnStmt {
    /// None means no explicit return values
    pub results: Option<Expr>,
    pub pos: Pos,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStmt {
    pub init: Option<SimpleStmt>,
    pub cond: Option<Expr>,
    pub then: BlockStmt,
    /// Either None, an `If`, or a `Block`
    pub els: Option<Box<Stmt>>,
    /// `else` started on its own line (accepted by this dialect)
    pub else_on_new_line: bool,
    pub pos: Pos,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForStmt {
    pub tok: LoopTok,
    /// Includes range clauses
    pub init: Option<SimpleStmt>,
    pub cond: Option<Expr>,
    pub post: Option<SimpleStmt>,
    pub body: BlockStmt,
    pub pos: Pos,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchStmt {
    pub init: Option<SimpleStmt>,
    /// Includes type switch guards
    pub tag: Option<Expr>,
    pub body: Vec<CaseClause>,
    pub rbrace: Pos,
    pub pos: Pos,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectStmt {
    pub body: Vec<CommClause>,
    pub rbrace: Pos,
    pub pos: Pos,
}

/// case Cases: Body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseClause {
    /// None means the default clause
    pub cases: Option<Expr>,
    pub body: Vec<Stmt>,
    pub colon: Pos,
    pub pos: Pos,
}

/// case Comm: Body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommClause {
    /// Send or receive statement; None means the default clause
    pub comm: Option<SimpleStmt>,
    pub body: Vec<Stmt>,
    pub colon: Pos,
    pub pos: Pos,
}
