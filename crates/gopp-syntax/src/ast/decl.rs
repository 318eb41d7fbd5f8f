//! Declaration AST nodes
//!
//! import, const, type, var and func declarations. Declarations written in
//! one parenthesized block share a [`GroupId`].

use super::*;
use crate::pos::Pos;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level or local declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Decl {
    Import(ImportDecl),
    Const(ConstDecl),
    Type(TypeDecl),
    Var(VarDecl),
    Func(FuncDecl),
}

impl Decl {
    /// Get the position of this declaration
    pub fn pos(&self) -> Pos {
        match self {
            Decl::Import(d) => d.pos,
            Decl::Const(d) => d.pos,
            Decl::Type(d) => d.pos,
            Decl::Var(d) => d.pos,
            Decl::Func(d) => d.pos,
        }
    }

    /// Name of this declaration's node kind, for diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Decl::Import(_) => "ImportDecl",
            Decl::Const(_) => "ConstDecl",
            Decl::Type(_) => "TypeDecl",
            Decl::Var(_) => "VarDecl",
            Decl::Func(_) => "FuncDecl",
        }
    }

    /// Group this declaration belongs to. Function declarations are never grouped.
    pub fn group(&self) -> Option<GroupId> {
        match self {
            Decl::Import(d) => d.group,
            Decl::Const(d) => d.group,
            Decl::Type(d) => d.group,
            Decl::Var(d) => d.group,
            Decl::Func(_) => None,
        }
    }
}

// ============================================================================
// Import / Const / Var
// ============================================================================

/// Path, or LocalPkgName Path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportDecl {
    /// Including "."; None means no rename present
    pub local_pkg_name: Option<Name>,
    pub path: BasicLit,
    pub group: Option<GroupId>,
    pub pos: Pos,
}

/// NameList [Type] [= Values]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstDecl {
    pub name_list: Vec<Name>,
    /// None means no type
    pub ty: Option<Expr>,
    /// None means no values
    pub values: Option<Expr>,
    pub group: Option<GroupId>,
    pub pos: Pos,
}

/// NameList Type [= Values], or NameList = Values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarDecl {
    pub name_list: Vec<Name>,
    /// None means no type
    pub ty: Option<Expr>,
    /// None means no values
    pub values: Option<Expr>,
    pub group: Option<GroupId>,
    pub pos: Pos,
}

// ============================================================================
// Type Declaration
// ============================================================================

/// Name Type, or Name = Type for aliases
///
/// # Example
/// ```text
/// type C2 class extends C1 {
///     Wow() string
///     s2 string
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDecl {
    pub name: Name,
    pub alias: bool,
    pub ty: Expr,
    pub group: Option<GroupId>,
    pub pragma: Pragma,
    pub pos: Pos,
}

impl TypeDecl {
    /// Get the class type if this declares a class
    pub fn class_type(&self) -> Option<&ClassType> {
        match &self.ty {
            Expr::ClassType(class) => Some(class),
            _ => None,
        }
    }

    pub fn class_type_mut(&mut self) -> Option<&mut ClassType> {
        match &mut self.ty {
            Expr::ClassType(class) => Some(class),
            _ => None,
        }
    }
}

// ============================================================================
// Function Declaration
// ============================================================================

/// func [Receiver] Name Type [{ Body }]
///
/// # Example
/// ```text
/// func (cc C2) Wow() string {
///     return cc.s2 + " " + cc.Huh() + "!"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncDecl {
    /// `go:attr` annotations, in name order
    pub attr: BTreeMap<String, bool>,
    /// None means a regular function
    pub recv: Option<Field>,
    pub name: Name,
    pub ty: FuncType,
    /// None means no body (forward declaration)
    pub body: Option<BlockStmt>,
    pub pragma: Pragma,
    pub pos: Pos,
}

impl FuncDecl {
    /// Check if this declares a method
    pub fn is_method(&self) -> bool {
        self.recv.is_some()
    }

    /// Check if this is a forward declaration
    pub fn is_forward(&self) -> bool {
        self.body.is_none()
    }
}

/// Compiler directive flags attached to a declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Pragma(pub u16);

impl Pragma {
    pub const NOINLINE: Pragma = Pragma(1 << 0);
    pub const NOSPLIT: Pragma = Pragma(1 << 1);
    pub const NOESCAPE: Pragma = Pragma(1 << 2);
    pub const NORACE: Pragma = Pragma(1 << 3);
    pub const NOINTERFACE: Pragma = Pragma(1 << 4);

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn contains(&self, other: Pragma) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Pragma) {
        self.0 |= other.0;
    }
}

// ============================================================================
// Groups
// ============================================================================

/// Handle to a [`Group`] in its file's group arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupId(pub u32);

/// Marker shared by all declarations of one parenthesized block:
///
/// ```text
/// const (
///     a = 1
///     b = 2
/// )
/// ```
///
/// A group is never mutated after creation. It lives in [`File::groups`] for
/// as long as the tree does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Position of the opening parenthesis
    pub pos: Pos,
}
