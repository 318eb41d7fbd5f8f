//! Abstract Syntax Tree (AST) for Go++.
//!
//! This module defines the complete tree the parser produces, including:
//! - Files and declarations (import, const, type, var, func)
//! - Expressions, including type expressions and the class forms
//! - Statements
//! - Auxiliary nodes (fields, case clauses)
//!
//! Every node belongs to exactly one [`Family`]. The families are closed
//! enums, so a `match` over all expression kinds is checked for completeness
//! by the compiler, and adding a variant forces every such match to be
//! revisited.

use crate::error::SyntaxError;
use crate::pos::Pos;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// Re-export submodules
pub mod decl;
pub mod expr;
pub mod stmt;
pub mod visitor;

pub use decl::*;
pub use expr::*;
pub use stmt::*;
pub use visitor::*;

// ============================================================================
// Node Families
// ============================================================================

/// The four node families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Decl,
    Expr,
    Stmt,
    /// Auxiliary structures: files, fields, case and comm clauses
    Node,
}

mod sealed {
    pub trait Sealed {}
}

/// Common identity of every syntax element.
///
/// This trait is sealed: it is implemented for the family enums and for the
/// node structs that appear on their own in the tree, and cannot be
/// implemented outside this crate.
pub trait Node: sealed::Sealed {
    /// Position of the node (see [`crate::pos`])
    fn pos(&self) -> Pos;

    /// Family this node belongs to
    fn family(&self) -> Family;
}

macro_rules! impl_node {
    ($family:ident: $($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Node for $ty {
                fn pos(&self) -> Pos {
                    <$ty>::pos(self)
                }

                fn family(&self) -> Family {
                    Family::$family
                }
            }
        )+
    };
}

macro_rules! impl_node_field {
    ($family:ident: $($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Node for $ty {
                fn pos(&self) -> Pos {
                    self.pos
                }

                fn family(&self) -> Family {
                    Family::$family
                }
            }
        )+
    };
}

impl_node!(Decl: Decl);
impl_node!(Expr: Expr);
impl_node!(Stmt: Stmt, SimpleStmt);
impl_node_field!(Expr: Name, BasicLit);
impl_node_field!(Stmt: BlockStmt);
impl_node_field!(Node: File, Field, CaseClause, CommClause);

// ============================================================================
// File
// ============================================================================

/// Root node: `package PkgName; DeclList[0], DeclList[1], ...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct File {
    pub pkg_name: Name,
    pub decl_list: Vec<Decl>,
    /// Number of source lines
    pub lines: u32,
    /// Arena of declaration groups, indexed by [`GroupId`]
    #[serde(default)]
    pub groups: Vec<Group>,
    pub pos: Pos,
}

impl File {
    /// Create an empty file for package `pkg_name`
    pub fn new(pkg_name: Name, pos: Pos) -> Self {
        Self {
            pkg_name,
            decl_list: Vec::new(),
            lines: 0,
            groups: Vec::new(),
            pos,
        }
    }

    /// Allocate a new declaration group
    pub fn new_group(&mut self, pos: Pos) -> GroupId {
        let id = GroupId(self.groups.len() as u32);
        self.groups.push(Group { pos });
        id
    }

    /// Resolve a group handle
    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(id.0 as usize)
    }

    /// Iterate over the declarations that belong to `id`, in source order
    pub fn grouped(&self, id: GroupId) -> impl Iterator<Item = &Decl> {
        self.decl_list
            .iter()
            .filter(move |decl| decl.group() == Some(id))
    }

    /// Iterate over the function and method declarations
    pub fn funcs(&self) -> impl Iterator<Item = &FuncDecl> {
        self.decl_list.iter().filter_map(|decl| match decl {
            Decl::Func(func) => Some(func),
            _ => None,
        })
    }

    /// Find the type declaration named `name`
    pub fn type_decl(&self, name: &str) -> Option<&TypeDecl> {
        self.decl_list.iter().find_map(|decl| match decl {
            Decl::Type(td) if td.name.value == name => Some(td),
            _ => None,
        })
    }

    /// Find the function or method declaration named `name`.
    /// With `recv_base`, only methods whose receiver base type is that name match.
    pub fn func_decl(&self, name: &str, recv_base: Option<&str>) -> Option<&FuncDecl> {
        self.funcs().find(|func| {
            if func.name.value != name {
                return false;
            }
            match (recv_base, &func.recv) {
                (None, _) => true,
                (Some(base), Some(recv)) => {
                    crate::named_type::NamedType::of(Some(&recv.ty)).name == base
                }
                (Some(_), None) => false,
            }
        })
    }

    /// Load a serialized tree
    pub fn from_json(source: &str) -> Result<Self, SyntaxError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Serialize this tree
    pub fn to_json_pretty(&self) -> Result<String, SyntaxError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a serialized tree from `path`
    pub fn read_json(path: impl AsRef<Path>) -> Result<Self, SyntaxError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| SyntaxError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&source)
    }

    /// Write this tree to `path`, replacing any existing file
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), SyntaxError> {
        let path = path.as_ref();
        let json = self.to_json_pretty()?;
        fs::write(path, json).map_err(|source| SyntaxError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
