//! Decomposition of type expressions into (qualifier, name, pointer) triples.
//!
//! Class lowering compares and synthesizes type references through
//! [`NamedType`]. Two references denote the same base type for lowering
//! purposes iff their `name` strings match; qualifier and pointer-ness are
//! not part of that comparison.

use crate::ast::{Expr, Name, Operation};
use crate::pos::Pos;
use crate::token::Operator;
use std::fmt;

/// A type expression reduced to `[*][Qual.]Name`.
///
/// `is_ptr` is set iff the expression was pointer-of a name or of a
/// qualified name; `qual` is non-empty iff it was a qualified name. For any
/// other expression shape `is_named` stays false and `name` holds a synthetic
/// tag naming the expression kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NamedType {
    pub is_named: bool,
    pub is_ptr: bool,
    pub qual: String,
    pub name: String,
}

impl NamedType {
    /// Decompose `typ`. `None` yields the zero value.
    pub fn of(typ: Option<&Expr>) -> Self {
        let mut nt = NamedType::default();
        if let Some(typ) = typ {
            nt.decompose(typ);
        }
        nt
    }

    fn decompose(&mut self, typ: &Expr) {
        match typ {
            Expr::Name(name) => {
                self.is_named = true;
                self.qual.clear();
                self.name = name.value.clone();
            }
            Expr::Operation(op) => {
                // Binary operations and other unary operators are not type
                // references; they decompose to the zero value.
                if op.is_pointer() {
                    self.decompose(&op.x);
                    self.is_ptr = true;
                }
            }
            Expr::Selector(sel) => {
                self.decompose(&sel.x);
                self.qual = std::mem::take(&mut self.name);
                self.name = sel.sel.value.clone();
            }
            other => {
                self.name = format!("<{}>", other.kind_name());
            }
        }
    }

    /// Set all parts at once; the result is always a named type
    pub fn set_qual_name(&mut self, qual: impl Into<String>, name: impl Into<String>, is_ptr: bool) {
        self.is_named = true;
        self.qual = qual.into();
        self.name = name.into();
        self.is_ptr = is_ptr;
    }

    /// `Qual.Name`, or `Name` when unqualified, without the pointer marker
    pub fn full_name(&self) -> String {
        if self.qual.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.qual, self.name)
        }
    }

    /// Build a type expression referring to this type.
    ///
    /// Qualified types become a selector and pointer types are wrapped in
    /// pointer-of. All synthesized nodes are placed at `pos`.
    pub fn make_type_expr(&self, pos: Pos) -> Expr {
        let mut expr = if self.qual.is_empty() {
            Expr::name(self.name.clone(), pos)
        } else {
            Expr::selector(
                Expr::name(self.qual.clone(), pos),
                Name::new(self.name.clone(), pos),
                pos,
            )
        };
        if self.is_ptr {
            expr = Expr::Operation(Operation::unary(Operator::Mul, expr, pos));
        }
        expr
    }
}

/// Formats as `[*]Qual[.]Name`
impl fmt::Display for NamedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ptr {
            f.write_str("*")?;
        }
        if !self.qual.is_empty() {
            write!(f, "{}.", self.qual)?;
        }
        f.write_str(&self.name)
    }
}

/// Short, lossy description of a type expression for messages.
///
/// A name yields its identifier and an operation yields its operator text;
/// anything else yields a parenthesized tag naming the expression kind. Never
/// use this for semantic comparison.
pub fn fmt_type(typ: Option<&Expr>) -> String {
    match typ {
        None => "NoType".to_string(),
        Some(Expr::Name(name)) => name.value.clone(),
        Some(Expr::Operation(op)) => op.op.to_string(),
        Some(other) => format!("({})", other.kind_name()),
    }
}
