//! Retargeting of class method receivers onto the storage struct.
//!
//! `func (c C) M()` and `func (c *C) M()` both become `func (c *C$) M()`:
//! class methods always operate on a pointer to the storage struct.

use super::CLASS_SUFFIX;
use crate::ast::{BadExpr, Expr, FuncDecl, Operation};
use crate::token::Operator;
use log::debug;

/// What retargeting did to a receiver type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retarget {
    /// `C` was renamed and wrapped: `*C$`
    Wrapped,
    /// `*C` was renamed in place: `*C$`
    Renamed,
    /// Unsupported shape, left as is
    Unchanged,
    /// The declaration has no receiver
    NoReceiver,
}

/// Retarget a class method receiver type to the storage struct.
///
/// - `C` becomes a new pointer-of node wrapping the renamed name `C$`, placed
///   at the name's position.
/// - `*C` has its name renamed in place and is returned as is; it is already
///   a pointer and is not wrapped again.
/// - Any other shape (qualified names, `**C`, ...) is returned unchanged.
pub fn make_class_receiver(typ: Expr) -> Expr {
    retarget(typ).0
}

pub(crate) fn retarget(typ: Expr) -> (Expr, Retarget) {
    match typ {
        Expr::Name(mut name) => {
            name.value.push_str(CLASS_SUFFIX);
            let pos = name.pos;
            let star = Operation::unary(Operator::Mul, Expr::Name(name), pos);
            (Expr::Operation(star), Retarget::Wrapped)
        }
        Expr::Operation(mut op) if op.is_pointer() => {
            let renamed = match op.x.as_mut() {
                Expr::Name(name) => {
                    name.value.push_str(CLASS_SUFFIX);
                    true
                }
                _ => false,
            };
            let outcome = if renamed {
                Retarget::Renamed
            } else {
                Retarget::Unchanged
            };
            (Expr::Operation(op), outcome)
        }
        other => (other, Retarget::Unchanged),
    }
}

impl FuncDecl {
    /// Retarget this method's receiver with [`make_class_receiver`].
    ///
    /// A declaration without a receiver is left untouched.
    pub fn retarget_class_receiver(&mut self) -> Retarget {
        let Some(recv) = self.recv.as_mut() else {
            return Retarget::NoReceiver;
        };
        let placeholder = Expr::Bad(BadExpr { pos: recv.ty.pos() });
        let typ = std::mem::replace(&mut recv.ty, placeholder);
        let (typ, outcome) = retarget(typ);
        recv.ty = typ;
        debug!(
            "receiver of {} at {}: {:?}",
            self.name.value, self.pos, outcome
        );
        outcome
    }
}
