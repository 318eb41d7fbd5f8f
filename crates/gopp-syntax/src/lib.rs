//! Go++ syntax tree and class lowering.
//!
//! This crate holds the front-end syntax tree of the Go++ compiler, which
//! adds `class`, `extends` and `implements` on top of Go's structs and
//! interfaces, and the pass that lowers classes back into them:
//!
//! - [`ast`]: the node families (declarations, expressions, statements,
//!   auxiliary nodes) and a visitor
//! - [`named_type`]: decomposition of type expressions into
//!   `[*][Qual.]Name`
//! - [`lower`]: class lowering
//! - [`dump`]: debug summaries of struct, interface and class types
//!
//! Tokenizing and parsing happen elsewhere; trees enter this crate already
//! built, or as JSON via [`ast::File::from_json`].
//!
//! # Example
//!
//! ```ignore
//! use gopp_syntax::ast::File;
//! use gopp_syntax::lower::lower_file;
//!
//! let mut file = File::from_json(&source)?;
//! let report = lower_file(&mut file);
//! for skipped in &report.skipped {
//!     eprintln!("{}", skipped);
//! }
//! ```

pub mod ast;
pub mod dump;
pub mod error;
pub mod logging;
pub mod lower;
pub mod named_type;
pub mod pos;
pub mod token;

// Re-exports for convenience
pub use ast::{Decl, Expr, File, Node, Stmt};
pub use dump::Dump;
pub use error::SyntaxError;
pub use lower::{lower_file, make_class_receiver, ClassLowerer, LowerOptions, LowerReport};
pub use named_type::{fmt_type, NamedType};
pub use pos::Pos;
