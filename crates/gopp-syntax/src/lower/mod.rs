//! Class lowering
//!
//! Lowers `class` declarations into the native pair of an interface and a
//! storage struct. A single forward pass over a file:
//!
//! 1. completes each top-level class's interface/struct pair from its
//!    `extends` and `implements` lists, in declaration order
//! 2. retargets the receiver of every method declared on a class to a
//!    pointer to the class's storage struct
//! 3. optionally replaces each class declaration by the two native
//!    declarations `type C interface {...}` and `type C$ struct {...}`
//!
//! The pass never fails. Constructs it cannot handle are left as they are
//! and listed in the [`LowerReport`] for a later diagnostic pass.

mod class;
mod receiver;

pub use receiver::{make_class_receiver, Retarget};

use crate::ast::{
    walk_class_type, ClassType, Decl, Expr, File, FuncDecl, Name, TypeDecl, Visitor,
};
use crate::dump::Dump;
use crate::named_type::NamedType;
use crate::pos::Pos;
use log::{debug, info};
use rustc_hash::FxHashSet;
use std::fmt;

/// Suffix of the storage struct synthesized for a class
pub const CLASS_SUFFIX: &str = "$";

/// Class lowering options
#[derive(Debug, Clone)]
pub struct LowerOptions {
    /// Replace class declarations by their interface and storage struct
    pub expand_class_decls: bool,
    /// Record the dump of every class in [`LowerReport::class_dumps`] after
    /// its pair is completed
    pub dump_classes: bool,
}

impl Default for LowerOptions {
    fn default() -> Self {
        Self {
            expand_class_decls: true,
            dump_classes: false,
        }
    }
}

impl LowerOptions {
    pub fn expand_class_decls(mut self, yes: bool) -> Self {
        self.expand_class_decls = yes;
        self
    }

    pub fn dump_classes(mut self, yes: bool) -> Self {
        self.dump_classes = yes;
        self
    }
}

// ============================================================================
// Report
// ============================================================================

/// Receiver type and method name of a method declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodKey {
    pub recv_name: String,
    pub func_name: String,
}

impl fmt::Display for MethodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.recv_name, self.func_name)
    }
}

/// Why a construct was passed through unchanged
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Method on a class whose receiver type has an unsupported shape
    UnsupportedReceiver { shape: &'static str },
    /// Class type that is not the type of a top-level declaration
    NestedClass,
}

/// A construct the pass left for a later diagnostic pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub pos: Pos,
    pub subject: String,
    pub reason: SkipReason,
}

impl fmt::Display for Skipped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            SkipReason::UnsupportedReceiver { shape } => write!(
                f,
                "{}: receiver of {} not retargeted ({})",
                self.pos, self.subject, shape
            ),
            SkipReason::NestedClass => {
                write!(f, "{}: class {} is not a top-level type", self.pos, self.subject)
            }
        }
    }
}

/// Outcome of lowering one file
#[derive(Debug, Clone, Default)]
pub struct LowerReport {
    /// Lowered classes, in declaration order
    pub classes: Vec<String>,
    /// Methods whose receiver now points at a storage struct
    pub retargeted: Vec<MethodKey>,
    pub skipped: Vec<Skipped>,
    /// Class dumps, empty unless [`LowerOptions::dump_classes`] is set
    pub class_dumps: String,
}

impl LowerReport {
    /// Check if nothing was passed through unchanged
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

// ============================================================================
// Lowerer
// ============================================================================

/// Class lowering pass over one file
pub struct ClassLowerer {
    options: LowerOptions,
    classes: FxHashSet<String>,
    report: LowerReport,
}

impl ClassLowerer {
    pub fn new(options: LowerOptions) -> Self {
        Self {
            options,
            classes: FxHashSet::default(),
            report: LowerReport::default(),
        }
    }

    /// Lower every class of `file` in place
    pub fn lower_file(mut self, file: &mut File) -> LowerReport {
        info!("lowering classes of package {}", file.pkg_name.value);

        self.collect_nested_classes(file);
        for decl in &mut file.decl_list {
            if let Decl::Type(td) = decl {
                self.lower_type_decl(td);
            }
        }
        for decl in &mut file.decl_list {
            if let Decl::Func(func) = decl {
                self.lower_method(func);
            }
        }
        if self.options.expand_class_decls {
            expand_class_decls(file);
        }

        info!(
            "lowered {} classes, {} methods, {} skipped",
            self.report.classes.len(),
            self.report.retargeted.len(),
            self.report.skipped.len()
        );
        self.report
    }

    fn lower_type_decl(&mut self, td: &mut TypeDecl) {
        let name = td.name.value.clone();
        let pos = td.pos;
        let Some(class) = td.class_type_mut() else {
            return;
        };
        debug!(
            "class {} at {}: extends {:?}, implements {:?}",
            name,
            pos,
            class.ext_list().iter().map(|n| &n.value).collect::<Vec<_>>(),
            class.imp_list().iter().map(|n| &n.value).collect::<Vec<_>>()
        );
        class.insert_bases();
        if self.options.dump_classes {
            self.report.class_dumps.push_str(&class.dump_string(&name));
        }
        self.classes.insert(name.clone());
        self.report.classes.push(name);
    }

    fn lower_method(&mut self, func: &mut FuncDecl) {
        let Some(recv) = &func.recv else {
            return;
        };
        let nt = NamedType::of(Some(&recv.ty));
        if !self.classes.contains(&nt.name) {
            return;
        }
        let shape = recv.ty.kind_name();
        match func.retarget_class_receiver() {
            Retarget::Wrapped | Retarget::Renamed => {
                self.report.retargeted.push(MethodKey {
                    recv_name: format!("{}{}", nt.name, CLASS_SUFFIX),
                    func_name: func.name.value.clone(),
                });
            }
            Retarget::Unchanged => {
                let skipped = Skipped {
                    pos: func.pos,
                    subject: format!("{}.{}", nt.full_name(), func.name.value),
                    reason: SkipReason::UnsupportedReceiver { shape },
                };
                debug!("{}", skipped);
                self.report.skipped.push(skipped);
            }
            Retarget::NoReceiver => {}
        }
    }

    /// Record class types that are not the root type of a top-level declaration
    fn collect_nested_classes(&mut self, file: &File) {
        let mut finder = NestedClassFinder {
            skipped: &mut self.report.skipped,
        };
        for decl in &file.decl_list {
            match decl {
                Decl::Type(TypeDecl {
                    ty: Expr::ClassType(class),
                    ..
                }) => walk_class_type(&mut finder, class),
                other => finder.visit_decl(other),
            }
        }
    }
}

struct NestedClassFinder<'a> {
    skipped: &'a mut Vec<Skipped>,
}

impl Visitor for NestedClassFinder<'_> {
    fn visit_class_type(&mut self, class: &ClassType) {
        let skipped = Skipped {
            pos: class.pos,
            subject: class.name.clone(),
            reason: SkipReason::NestedClass,
        };
        debug!("{}", skipped);
        self.skipped.push(skipped);
        walk_class_type(self, class);
    }
}

/// Replace each class declaration `type C class {...}` by
/// `type C interface {...}` followed by `type C$ struct {...}`.
///
/// Both declarations keep the class declaration's position, group and
/// pragma; the storage name is placed at the class name's position.
pub fn expand_class_decls(file: &mut File) {
    let decls = std::mem::take(&mut file.decl_list);
    file.decl_list.reserve(decls.len());
    for decl in decls {
        match decl {
            Decl::Type(TypeDecl {
                name,
                ty: Expr::ClassType(class),
                group,
                pragma,
                pos,
                ..
            }) => {
                let storage = Name::new(format!("{}{}", name.value, CLASS_SUFFIX), name.pos);
                let ClassType {
                    interface_type,
                    struct_type,
                    ..
                } = *class;
                file.decl_list.push(Decl::Type(TypeDecl {
                    name,
                    alias: false,
                    ty: Expr::InterfaceType(interface_type),
                    group,
                    pragma,
                    pos,
                }));
                file.decl_list.push(Decl::Type(TypeDecl {
                    name: storage,
                    alias: false,
                    ty: Expr::StructType(struct_type),
                    group,
                    pragma,
                    pos,
                }));
            }
            other => file.decl_list.push(other),
        }
    }
}

/// Lower `file` with default options
pub fn lower_file(file: &mut File) -> LowerReport {
    ClassLowerer::new(LowerOptions::default()).lower_file(file)
}
