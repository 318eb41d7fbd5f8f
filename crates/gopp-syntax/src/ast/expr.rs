//! Expression AST nodes
//!
//! This module defines every expression form, including the type
//! expressions. Three of them carry the class syntax:
//! - `StructType` with `is_class`, `imp_list` and `ext_list`
//! - `InterfaceType` with `is_class`
//! - `ClassType`, the pair of an interface and a struct a class lowers into

use super::*;
use crate::pos::Pos;
use crate::token::{LitKind, Operator};
use serde::{Deserialize, Serialize};

/// Expression (also used for type expressions)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Placeholder for an expression that failed to parse
    Bad(BadExpr),

    /// Identifier: x, int, C1
    Name(Name),

    /// Literal: 42, 3.14, 'a', "hello"
    BasicLit(BasicLit),

    /// Composite literal: T{a, b: c}
    CompositeLit(CompositeLit),

    /// Key: Value inside a composite literal
    KeyValue(KeyValueExpr),

    /// Function literal: func(x int) { ... }
    FuncLit(Box<FuncLit>),

    /// Parenthesized expression: (x)
    Paren(ParenExpr),

    /// Selector: x.Sel, pkg.Type
    Selector(SelectorExpr),

    /// Index: x[i]
    Index(IndexExpr),

    /// Slice: x[lo:hi:max]
    Slice(SliceExpr),

    /// Type assertion: x.(T)
    Assert(AssertExpr),

    /// Type switch guard: x.(type) or v := x.(type)
    TypeSwitchGuard(TypeSwitchGuard),

    /// Unary or binary operation; unary `*` is pointer-of in type position
    Operation(Operation),

    /// Call: f(a, b...)
    Call(CallExpr),

    /// Expression list: a, b, c
    List(ListExpr),

    /// Array type: [N]T or [...]T
    ArrayType(ArrayType),

    /// Slice type: []T or sliceof T
    SliceType(SliceType),

    /// Variadic parameter type: ...T
    DotsType(DotsType),

    /// Struct type, also the storage half of a class
    StructType(StructType),

    /// Interface type, also the method-set half of a class
    InterfaceType(InterfaceType),

    /// Class type: `class extends B implements I { ... }`
    ClassType(Box<ClassType>),

    /// Function type: func(params) results
    FuncType(FuncType),

    /// Map type: map[K]V
    MapType(MapType),

    /// Channel type: chan T, <-chan T, chan<- T
    ChanType(ChanType),
}

impl Expr {
    /// Get the position of this expression
    pub fn pos(&self) -> Pos {
        match self {
            Expr::Bad(e) => e.pos,
            Expr::Name(e) => e.pos,
            Expr::BasicLit(e) => e.pos,
            Expr::CompositeLit(e) => e.pos,
            Expr::KeyValue(e) => e.pos,
            Expr::FuncLit(e) => e.pos,
            Expr::Paren(e) => e.pos,
            Expr::Selector(e) => e.pos,
            Expr::Index(e) => e.pos,
            Expr::Slice(e) => e.pos,
            Expr::Assert(e) => e.pos,
            Expr::TypeSwitchGuard(e) => e.pos,
            Expr::Operation(e) => e.pos,
            Expr::Call(e) => e.pos,
            Expr::List(e) => e.pos,
            Expr::ArrayType(e) => e.pos,
            Expr::SliceType(e) => e.pos,
            Expr::DotsType(e) => e.pos,
            Expr::StructType(e) => e.pos,
            Expr::InterfaceType(e) => e.pos,
            Expr::ClassType(e) => e.pos,
            Expr::FuncType(e) => e.pos,
            Expr::MapType(e) => e.pos,
            Expr::ChanType(e) => e.pos,
        }
    }

    /// Name of this expression's node kind, for diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Bad(_) => "BadExpr",
            Expr::Name(_) => "Name",
            Expr::BasicLit(_) => "BasicLit",
            Expr::CompositeLit(_) => "CompositeLit",
            Expr::KeyValue(_) => "KeyValueExpr",
            Expr::FuncLit(_) => "FuncLit",
            Expr::Paren(_) => "ParenExpr",
            Expr::Selector(_) => "SelectorExpr",
            Expr::Index(_) => "IndexExpr",
            Expr::Slice(_) => "SliceExpr",
            Expr::Assert(_) => "AssertExpr",
            Expr::TypeSwitchGuard(_) => "TypeSwitchGuard",
            Expr::Operation(_) => "Operation",
            Expr::Call(_) => "CallExpr",
            Expr::List(_) => "ListExpr",
            Expr::ArrayType(_) => "ArrayType",
            Expr::SliceType(_) => "SliceType",
            Expr::DotsType(_) => "DotsType",
            Expr::StructType(_) => "StructType",
            Expr::InterfaceType(_) => "InterfaceType",
            Expr::ClassType(_) => "ClassType",
            Expr::FuncType(_) => "FuncType",
            Expr::MapType(_) => "MapType",
            Expr::ChanType(_) => "ChanType",
        }
    }

    /// Create a name reference
    pub fn name(value: impl Into<String>, pos: Pos) -> Self {
        Expr::Name(Name::new(value, pos))
    }

    /// Create a pointer-of (unary `*`) expression at the operand's position
    pub fn pointer_to(x: Expr) -> Self {
        let pos = x.pos();
        Expr::Operation(Operation::unary(Operator::Mul, x, pos))
    }

    /// Create a qualified name: `x.sel`
    pub fn selector(x: Expr, sel: Name, pos: Pos) -> Self {
        Expr::Selector(SelectorExpr {
            x: Box::new(x),
            sel,
            pos,
        })
    }

    /// Get the identifier if this is a plain name
    pub fn as_name(&self) -> Option<&Name> {
        match self {
            Expr::Name(n) => Some(n),
            _ => None,
        }
    }

    /// Check if this is the parse-failure placeholder
    pub fn is_bad(&self) -> bool {
        matches!(self, Expr::Bad(_))
    }

    /// Check if this expression can only appear in type position
    pub fn is_type_literal(&self) -> bool {
        matches!(
            self,
            Expr::ArrayType(_)
                | Expr::SliceType(_)
                | Expr::DotsType(_)
                | Expr::StructType(_)
                | Expr::InterfaceType(_)
                | Expr::ClassType(_)
                | Expr::FuncType(_)
                | Expr::MapType(_)
                | Expr::ChanType(_)
        )
    }
}

// ============================================================================
// Operands
// ============================================================================

/// Placeholder for an expression that failed to parse correctly and where no
/// better node can be provided.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadExpr {
    pub pos: Pos,
}

/// Identifier
///
/// Names are owned strings so that lowering can rename a node in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Name {
    pub value: String,
    pub pos: Pos,
}

impl Name {
    pub fn new(value: impl Into<String>, pos: Pos) -> Self {
        Self {
            value: value.into(),
            pos,
        }
    }
}

/// Literal, with its source text unevaluated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicLit {
    pub value: String,
    pub kind: LitKind,
    pub pos: Pos,
}

impl BasicLit {
    pub fn new(value: impl Into<String>, kind: LitKind, pos: Pos) -> Self {
        Self {
            value: value.into(),
            kind,
            pos,
        }
    }
}

/// Composite literal: Type { ElemList[0], ElemList[1], ... }
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeLit {
    /// None means no literal type
    pub ty: Option<Box<Expr>>,
    pub elem_list: Vec<Expr>,
    /// Number of elements with keys
    pub n_keys: usize,
    pub rbrace: Pos,
    pub pos: Pos,
}

/// Key: Value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyValueExpr {
    pub key: Box<Expr>,
    pub value: Box<Expr>,
    pub pos: Pos,
}

/// func Type { Body }
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncLit {
    pub ty: FuncType,
    pub body: BlockStmt,
    pub pos: Pos,
}

/// (X)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParenExpr {
    pub x: Box<Expr>,
    pub pos: Pos,
}

/// X.Sel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectorExpr {
    pub x: Box<Expr>,
    pub sel: Name,
    pub pos: Pos,
}

/// X[Index]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexExpr {
    pub x: Box<Expr>,
    pub index: Box<Expr>,
    pub pos: Pos,
}

/// X[Index[0] : Index[1] : Index[2]]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceExpr {
    pub x: Box<Expr>,
    pub index: [Option<Box<Expr>>; 3],
    /// Full slice expression. In a valid tree this equals `index[2].is_some()`;
    /// it is kept separately to report a 3-index slice with a missing max.
    pub full: bool,
    pub pos: Pos,
}

/// X.(Type)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssertExpr {
    pub x: Box<Expr>,
    pub ty: Box<Expr>,
    pub pos: Pos,
}

/// X.(type) or Lhs := X.(type)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSwitchGuard {
    /// None means no `Lhs :=`
    pub lhs: Option<Name>,
    pub x: Box<Expr>,
    pub pos: Pos,
}

/// Unary (`y` is None) or binary operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub op: Operator,
    pub x: Box<Expr>,
    pub y: Option<Box<Expr>>,
    pub pos: Pos,
}

impl Operation {
    pub fn unary(op: Operator, x: Expr, pos: Pos) -> Self {
        Self {
            op,
            x: Box::new(x),
            y: None,
            pos,
        }
    }

    pub fn binary(op: Operator, x: Expr, y: Expr, pos: Pos) -> Self {
        Self {
            op,
            x: Box::new(x),
            y: Some(Box::new(y)),
            pos,
        }
    }

    pub fn is_unary(&self) -> bool {
        self.y.is_none()
    }

    /// Check if this is `*X`, the pointer-of form in type position
    pub fn is_pointer(&self) -> bool {
        self.op == Operator::Mul && self.is_unary()
    }
}

/// Fun(ArgList[0], ArgList[1], ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpr {
    pub fun: Box<Expr>,
    /// Empty means no arguments
    pub arg_list: Vec<Expr>,
    /// Last argument is followed by `...`
    pub has_dots: bool,
    pub pos: Pos,
}

/// ElemList[0], ElemList[1], ...
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListExpr {
    pub elem_list: Vec<Expr>,
    pub pos: Pos,
}

// ============================================================================
// Type Expressions
// ============================================================================

/// [Len]Elem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayType {
    /// None means the length is `...`
    pub len: Option<Box<Expr>>,
    pub elem: Box<Expr>,
    pub pos: Pos,
}

/// []Elem, or `sliceof Elem`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceType {
    pub elem: Box<Expr>,
    /// Written with the `sliceof` keyword
    pub is_sliceof: bool,
    pub pos: Pos,
}

/// ...Elem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DotsType {
    pub elem: Box<Expr>,
    pub pos: Pos,
}

/// struct { FieldList[0] TagList[0]; FieldList[1] TagList[1]; ... }
///
/// In class mode (`is_class`) this is the storage half of a class, and
/// `ext_list`/`imp_list` hold the names after `extends`/`implements`. A plain
/// struct may also carry an `implements` list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StructType {
    pub field_list: Vec<Field>,
    /// `i >= tag_list.len()` or `tag_list[i] == None` means no tag for field i
    pub tag_list: Vec<Option<BasicLit>>,
    pub is_class: bool,
    pub imp_list: Vec<Name>,
    pub ext_list: Vec<Name>,
    pub pos: Pos,
}

impl StructType {
    pub fn new(pos: Pos) -> Self {
        Self {
            pos,
            ..Self::default()
        }
    }

    /// Get the tag of field `i`, if any
    pub fn tag(&self, i: usize) -> Option<&BasicLit> {
        self.tag_list.get(i).and_then(|t| t.as_ref())
    }

    /// Iterate over the embedded (anonymous) fields
    pub fn embedded_fields(&self) -> impl Iterator<Item = &Field> {
        self.field_list.iter().filter(|f| f.is_embedded())
    }
}

/// Name Type, or just Type
///
/// Used for struct fields, interface methods, parameters, results and
/// receivers. Field names declared in a list (`a, b int`) each get their own
/// `Field` with an equal copy of the type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// None means an embedded field (structs), an unnamed parameter, or an
    /// embedded interface (interfaces)
    pub name: Option<Name>,
    pub ty: Expr,
    pub pos: Pos,
}

impl Field {
    pub fn named(name: Name, ty: Expr) -> Self {
        let pos = name.pos;
        Self {
            name: Some(name),
            ty,
            pos,
        }
    }

    pub fn embedded(ty: Expr) -> Self {
        let pos = ty.pos();
        Self {
            name: None,
            ty,
            pos,
        }
    }

    pub fn is_embedded(&self) -> bool {
        self.name.is_none()
    }
}

/// interface { MethodList[0]; MethodList[1]; ... }
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InterfaceType {
    pub method_list: Vec<Field>,
    pub is_class: bool,
    pub pos: Pos,
}

impl InterfaceType {
    pub fn new(pos: Pos) -> Self {
        Self {
            pos,
            ..Self::default()
        }
    }

    /// Iterate over the embedded interfaces
    pub fn embedded_interfaces(&self) -> impl Iterator<Item = &Field> {
        self.method_list.iter().filter(|f| f.is_embedded())
    }
}

/// A class: the method-set interface and the storage struct it lowers into.
///
/// The parser puts method signatures of the class body into
/// `interface_type` and fields into `struct_type`; both have `is_class` set.
/// The `extends`/`implements` lists live on `struct_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassType {
    pub name: String,
    pub interface_type: InterfaceType,
    pub struct_type: StructType,
    pub pos: Pos,
}

impl ClassType {
    /// Create an empty class with both halves in class mode
    pub fn new(name: impl Into<String>, pos: Pos) -> Self {
        let mut interface_type = InterfaceType::new(pos);
        interface_type.is_class = true;
        let mut struct_type = StructType::new(pos);
        struct_type.is_class = true;
        Self {
            name: name.into(),
            interface_type,
            struct_type,
            pos,
        }
    }

    /// Names after `extends`
    pub fn ext_list(&self) -> &[Name] {
        &self.struct_type.ext_list
    }

    /// Names after `implements`
    pub fn imp_list(&self) -> &[Name] {
        &self.struct_type.imp_list
    }
}

/// func(ParamList) ResultList
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FuncType {
    pub param_list: Vec<Field>,
    pub result_list: Vec<Field>,
    pub pos: Pos,
}

/// map[Key]Value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapType {
    pub key: Box<Expr>,
    pub value: Box<Expr>,
    pub pos: Pos,
}

/// Direction of a channel type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChanDir {
    /// chan T
    #[default]
    Both,
    /// chan<- T
    SendOnly,
    /// <-chan T
    RecvOnly,
}

/// chan Elem, <-chan Elem, chan<- Elem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChanType {
    pub dir: ChanDir,
    pub elem: Box<Expr>,
    pub pos: Pos,
}
