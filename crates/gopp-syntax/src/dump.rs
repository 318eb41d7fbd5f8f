//! Human-readable dumps of struct, interface and class types.
//!
//! Debugging aid only; the format is not versioned and no pass reads it.
//!
//! ```text
//! StructType=C2 NumFields=2
//!     s2          string
//!     NoName      C1$
//!
//! ```

use crate::ast::{ClassType, Field, InterfaceType, StructType};
use crate::named_type::NamedType;
use std::fmt::{self, Write};

/// Types that can print a debug summary of themselves
pub trait Dump {
    /// Write the summary for the type declared as `name`
    fn dump_to(&self, name: &str, out: &mut dyn Write) -> fmt::Result;

    /// Render the summary to a string
    fn dump_string(&self, name: &str) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail
        let _ = self.dump_to(name, &mut out);
        out
    }

    /// Print the summary to standard output
    fn dump(&self, name: &str) {
        print!("{}", self.dump_string(name));
    }
}

fn dump_fields(fields: &[Field], out: &mut dyn Write) -> fmt::Result {
    for fld in fields {
        let nstr = fld.name.as_ref().map_or("NoName", |n| n.value.as_str());
        let nt = NamedType::of(Some(&fld.ty));
        writeln!(out, "    {:<10}  {}", nstr, nt)?;
    }
    writeln!(out)
}

impl Dump for StructType {
    fn dump_to(&self, name: &str, out: &mut dyn Write) -> fmt::Result {
        writeln!(out, "StructType={} NumFields={}", name, self.field_list.len())?;
        dump_fields(&self.field_list, out)
    }
}

impl Dump for InterfaceType {
    fn dump_to(&self, name: &str, out: &mut dyn Write) -> fmt::Result {
        writeln!(out, "InterfaceType={} NumMethods={}", name, self.method_list.len())?;
        dump_fields(&self.method_list, out)
    }
}

impl Dump for ClassType {
    fn dump_to(&self, name: &str, out: &mut dyn Write) -> fmt::Result {
        writeln!(out, "ClassType={}", name)?;
        self.interface_type.dump_to(name, out)?;
        self.struct_type.dump_to(name, out)?;
        writeln!(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Expr, Name};
    use crate::pos::Pos;

    fn p() -> Pos {
        Pos::new(1, 1)
    }

    #[test]
    fn test_struct_dump() {
        let mut st = StructType::new(p());
        st.field_list
            .push(Field::named(Name::new("s2", p()), Expr::name("string", p())));
        st.field_list.push(Field::embedded(Expr::name("C1$", p())));

        assert_eq!(
            st.dump_string("C2"),
            "StructType=C2 NumFields=2\n    s2          string\n    NoName      C1$\n\n"
        );
    }

    #[test]
    fn test_interface_dump_counts_methods() {
        let mut it = InterfaceType::new(p());
        it.method_list.push(Field::embedded(Expr::name("C1", p())));
        let out = it.dump_string("C2");
        assert!(out.starts_with("InterfaceType=C2 NumMethods=1\n"));
        assert!(out.contains("NoName      C1\n"));
    }

    #[test]
    fn test_class_dump_contains_both_halves() {
        let class = ClassType::new("C1", p());
        let out = class.dump_string("C1");
        assert!(out.starts_with("ClassType=C1\n"));
        assert!(out.contains("InterfaceType=C1 NumMethods=0\n"));
        assert!(out.contains("StructType=C1 NumFields=0\n"));
        assert!(out.ends_with("\n\n"));
    }

    #[test]
    fn test_pointer_fields_show_marker() {
        let mut st = StructType::new(p());
        st.field_list.push(Field::named(
            Name::new("next", p()),
            Expr::pointer_to(Expr::name("Node", p())),
        ));
        assert!(st.dump_string("Node").contains("next        *Node\n"));
    }
}
