//! AST visitor pattern for traversing the syntax tree
//!
//! # Example
//!
//! ```rust
//! use gopp_syntax::ast::*;
//!
//! struct CountNames {
//!     count: usize,
//! }
//!
//! impl Visitor for CountNames {
//!     fn visit_name(&mut self, _name: &Name) {
//!         self.count += 1;
//!     }
//! }
//! ```

use super::*;

/// AST visitor trait
///
/// Each visit method has a default implementation that calls the
/// corresponding walk function.
pub trait Visitor: Sized {
    // Top-level
    fn visit_file(&mut self, file: &File) {
        walk_file(self, file);
    }

    // Declarations
    fn visit_decl(&mut self, decl: &Decl) {
        walk_decl(self, decl);
    }

    fn visit_type_decl(&mut self, decl: &TypeDecl) {
        walk_type_decl(self, decl);
    }

    fn visit_func_decl(&mut self, decl: &FuncDecl) {
        walk_func_decl(self, decl);
    }

    // Statements
    fn visit_stmt(&mut self, stmt: &Stmt) {
        walk_stmt(self, stmt);
    }

    fn visit_simple_stmt(&mut self, stmt: &SimpleStmt) {
        walk_simple_stmt(self, stmt);
    }

    fn visit_block_stmt(&mut self, block: &BlockStmt) {
        walk_block_stmt(self, block);
    }

    // Expressions
    fn visit_expr(&mut self, expr: &Expr) {
        walk_expr(self, expr);
    }

    fn visit_struct_type(&mut self, st: &StructType) {
        walk_struct_type(self, st);
    }

    fn visit_interface_type(&mut self, it: &InterfaceType) {
        walk_interface_type(self, it);
    }

    fn visit_class_type(&mut self, class: &ClassType) {
        walk_class_type(self, class);
    }

    fn visit_func_type(&mut self, ft: &FuncType) {
        walk_func_type(self, ft);
    }

    // Common
    fn visit_field(&mut self, field: &Field) {
        walk_field(self, field);
    }

    fn visit_name(&mut self, _name: &Name) {
        // Leaf node - no traversal needed
    }
}

// ============================================================================
// Walk Functions - Default Traversal Implementations
// ============================================================================

pub fn walk_file<V: Visitor>(visitor: &mut V, file: &File) {
    visitor.visit_name(&file.pkg_name);
    for decl in &file.decl_list {
        visitor.visit_decl(decl);
    }
}

pub fn walk_decl<V: Visitor>(visitor: &mut V, decl: &Decl) {
    match decl {
        Decl::Import(d) => {
            if let Some(name) = &d.local_pkg_name {
                visitor.visit_name(name);
            }
        }
        Decl::Const(ConstDecl {
            name_list,
            ty,
            values,
            ..
        })
        | Decl::Var(VarDecl {
            name_list,
            ty,
            values,
            ..
        }) => {
            for name in name_list {
                visitor.visit_name(name);
            }
            if let Some(ty) = ty {
                visitor.visit_expr(ty);
            }
            if let Some(values) = values {
                visitor.visit_expr(values);
            }
        }
        Decl::Type(d) => visitor.visit_type_decl(d),
        Decl::Func(d) => visitor.visit_func_decl(d),
    }
}

pub fn walk_type_decl<V: Visitor>(visitor: &mut V, decl: &TypeDecl) {
    visitor.visit_name(&decl.name);
    visitor.visit_expr(&decl.ty);
}

pub fn walk_func_decl<V: Visitor>(visitor: &mut V, decl: &FuncDecl) {
    if let Some(recv) = &decl.recv {
        visitor.visit_field(recv);
    }
    visitor.visit_name(&decl.name);
    visitor.visit_func_type(&decl.ty);
    if let Some(body) = &decl.body {
        visitor.visit_block_stmt(body);
    }
}

pub fn walk_stmt<V: Visitor>(visitor: &mut V, stmt: &Stmt) {
    match stmt {
        Stmt::Simple(s) => visitor.visit_simple_stmt(s),
        Stmt::Labeled(s) => {
            visitor.visit_name(&s.label);
            visitor.visit_stmt(&s.stmt);
        }
        Stmt::Block(s) => visitor.visit_block_stmt(s),
        Stmt::Decl(s) => {
            for decl in &s.decl_list {
                visitor.visit_decl(decl);
            }
        }
        Stmt::Branch(s) => {
            if let Some(label) = &s.label {
                visitor.visit_name(label);
            }
        }
        Stmt::Call(s) => walk_call_expr(visitor, &s.call),
        Stmt::Return(s) => {
            if let Some(results) = &s.results {
                visitor.visit_expr(results);
            }
        }
        Stmt::If(s) => {
            if let Some(init) = &s.init {
                visitor.visit_simple_stmt(init);
            }
            if let Some(cond) = &s.cond {
                visitor.visit_expr(cond);
            }
            visitor.visit_block_stmt(&s.then);
            if let Some(els) = &s.els {
                visitor.visit_stmt(els);
            }
        }
        Stmt::For(s) => {
            if let Some(init) = &s.init {
                visitor.visit_simple_stmt(init);
            }
            if let Some(cond) = &s.cond {
                visitor.visit_expr(cond);
            }
            if let Some(post) = &s.post {
                visitor.visit_simple_stmt(post);
            }
            visitor.visit_block_stmt(&s.body);
        }
        Stmt::Switch(s) => {
            if let Some(init) = &s.init {
                visitor.visit_simple_stmt(init);
            }
            if let Some(tag) = &s.tag {
                visitor.visit_expr(tag);
            }
            for clause in &s.body {
                if let Some(cases) = &clause.cases {
                    visitor.visit_expr(cases);
                }
                for stmt in &clause.body {
                    visitor.visit_stmt(stmt);
                }
            }
        }
        Stmt::Select(s) => {
            for clause in &s.body {
                if let Some(comm) = &clause.comm {
                    visitor.visit_simple_stmt(comm);
                }
                for stmt in &clause.body {
                    visitor.visit_stmt(stmt);
                }
            }
        }
    }
}

pub fn walk_simple_stmt<V: Visitor>(visitor: &mut V, stmt: &SimpleStmt) {
    match stmt {
        SimpleStmt::Empty(_) => {}
        SimpleStmt::Expr(s) => visitor.visit_expr(&s.x),
        SimpleStmt::Send(s) => {
            visitor.visit_expr(&s.chan);
            visitor.visit_expr(&s.value);
        }
        SimpleStmt::Assign(s) => {
            visitor.visit_expr(&s.lhs);
            if let Some(rhs) = &s.rhs {
                visitor.visit_expr(rhs);
            }
        }
        SimpleStmt::Range(s) => {
            if let Some(lhs) = &s.lhs {
                visitor.visit_expr(lhs);
            }
            visitor.visit_expr(&s.x);
        }
    }
}

pub fn walk_block_stmt<V: Visitor>(visitor: &mut V, block: &BlockStmt) {
    for stmt in &block.list {
        visitor.visit_stmt(stmt);
    }
}

pub fn walk_expr<V: Visitor>(visitor: &mut V, expr: &Expr) {
    match expr {
        Expr::Bad(_) | Expr::BasicLit(_) => {}
        Expr::Name(name) => visitor.visit_name(name),
        Expr::CompositeLit(e) => {
            if let Some(ty) = &e.ty {
                visitor.visit_expr(ty);
            }
            for elem in &e.elem_list {
                visitor.visit_expr(elem);
            }
        }
        Expr::KeyValue(e) => {
            visitor.visit_expr(&e.key);
            visitor.visit_expr(&e.value);
        }
        Expr::FuncLit(e) => {
            visitor.visit_func_type(&e.ty);
            visitor.visit_block_stmt(&e.body);
        }
        Expr::Paren(e) => visitor.visit_expr(&e.x),
        Expr::Selector(e) => {
            visitor.visit_expr(&e.x);
            visitor.visit_name(&e.sel);
        }
        Expr::Index(e) => {
            visitor.visit_expr(&e.x);
            visitor.visit_expr(&e.index);
        }
        Expr::Slice(e) => {
            visitor.visit_expr(&e.x);
            for index in e.index.iter().flatten() {
                visitor.visit_expr(index);
            }
        }
        Expr::Assert(e) => {
            visitor.visit_expr(&e.x);
            visitor.visit_expr(&e.ty);
        }
        Expr::TypeSwitchGuard(e) => {
            if let Some(lhs) = &e.lhs {
                visitor.visit_name(lhs);
            }
            visitor.visit_expr(&e.x);
        }
        Expr::Operation(e) => {
            visitor.visit_expr(&e.x);
            if let Some(y) = &e.y {
                visitor.visit_expr(y);
            }
        }
        Expr::Call(e) => walk_call_expr(visitor, e),
        Expr::List(e) => {
            for elem in &e.elem_list {
                visitor.visit_expr(elem);
            }
        }
        Expr::ArrayType(e) => {
            if let Some(len) = &e.len {
                visitor.visit_expr(len);
            }
            visitor.visit_expr(&e.elem);
        }
        Expr::SliceType(e) => visitor.visit_expr(&e.elem),
        Expr::DotsType(e) => visitor.visit_expr(&e.elem),
        Expr::StructType(e) => visitor.visit_struct_type(e),
        Expr::InterfaceType(e) => visitor.visit_interface_type(e),
        Expr::ClassType(e) => visitor.visit_class_type(e),
        Expr::FuncType(e) => visitor.visit_func_type(e),
        Expr::MapType(e) => {
            visitor.visit_expr(&e.key);
            visitor.visit_expr(&e.value);
        }
        Expr::ChanType(e) => visitor.visit_expr(&e.elem),
    }
}

pub fn walk_call_expr<V: Visitor>(visitor: &mut V, call: &CallExpr) {
    visitor.visit_expr(&call.fun);
    for arg in &call.arg_list {
        visitor.visit_expr(arg);
    }
}

pub fn walk_struct_type<V: Visitor>(visitor: &mut V, st: &StructType) {
    for field in &st.field_list {
        visitor.visit_field(field);
    }
    for name in st.ext_list.iter().chain(&st.imp_list) {
        visitor.visit_name(name);
    }
}

pub fn walk_interface_type<V: Visitor>(visitor: &mut V, it: &InterfaceType) {
    for method in &it.method_list {
        visitor.visit_field(method);
    }
}

pub fn walk_class_type<V: Visitor>(visitor: &mut V, class: &ClassType) {
    visitor.visit_interface_type(&class.interface_type);
    visitor.visit_struct_type(&class.struct_type);
}

pub fn walk_func_type<V: Visitor>(visitor: &mut V, ft: &FuncType) {
    for field in ft.param_list.iter().chain(&ft.result_list) {
        visitor.visit_field(field);
    }
}

pub fn walk_field<V: Visitor>(visitor: &mut V, field: &Field) {
    if let Some(name) = &field.name {
        visitor.visit_name(name);
    }
    visitor.visit_expr(&field.ty);
}
