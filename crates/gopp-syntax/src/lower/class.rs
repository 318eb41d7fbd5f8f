//! Completion of a class's interface/struct pair from its `extends` and
//! `implements` lists.
//!
//! For `class C extends B implements I`:
//! - the struct half embeds `B$`, the storage of the base class
//! - the interface half embeds `B` and `I`, so `C` requires everything they do
//!
//! Insertion only ever appends. Existing fields and methods keep their index.

use super::CLASS_SUFFIX;
use crate::ast::{ClassType, Field, InterfaceType, Name, StructType};
use crate::named_type::NamedType;
use crate::pos::Pos;
use log::trace;

impl StructType {
    /// Embed the type named `tname` unless an embedded field already resolves
    /// to that name. Returns whether a field was appended.
    ///
    /// Only the resolved base name is compared; qualifier and pointer-ness
    /// are ignored, so `*pkg.T` counts as already embedding `T`.
    pub fn insert_imp_type(&mut self, tname: &str, pos: Pos) -> bool {
        let present = self
            .embedded_fields()
            .any(|fld| NamedType::of(Some(&fld.ty)).name == tname);
        if present {
            return false;
        }

        let mut nt = NamedType::default();
        nt.set_qual_name("", tname, false);
        self.field_list.push(Field::embedded(nt.make_type_expr(pos)));
        trace!("struct: embedded {} at {}", tname, pos);
        true
    }
}

impl InterfaceType {
    /// Embed the interface named `tname`. Always appends.
    pub fn insert_imp_type(&mut self, tname: &str, pos: Pos) {
        let mut nt = NamedType::default();
        nt.set_qual_name("", tname, false);
        self.method_list.push(Field::embedded(nt.make_type_expr(pos)));
        trace!("interface: embedded {} at {}", tname, pos);
    }
}

impl ClassType {
    /// Insert base class `tname`: the struct half embeds the base's storage
    /// type (`tname` + [`CLASS_SUFFIX`]) and the interface half embeds the
    /// base's interface (`tname`).
    pub fn insert_imp_type(&mut self, tname: &Name) {
        let storage = format!("{}{}", tname.value, CLASS_SUFFIX);
        self.struct_type.insert_imp_type(&storage, tname.pos);
        self.interface_type.insert_imp_type(&tname.value, tname.pos);
    }

    /// Insert an implemented interface into the interface half only.
    pub fn insert_interface(&mut self, tname: &Name) {
        self.interface_type.insert_imp_type(&tname.value, tname.pos);
    }

    /// Apply the whole `extends` list, then the whole `implements` list, in
    /// source order.
    pub fn insert_bases(&mut self) {
        let ext_list = self.struct_type.ext_list.clone();
        for base in &ext_list {
            self.insert_imp_type(base);
        }
        let imp_list = self.struct_type.imp_list.clone();
        for iface in &imp_list {
            self.insert_interface(iface);
        }
    }

    /// Name of the synthesized storage struct
    pub fn storage_name(&self) -> String {
        format!("{}{}", self.name, CLASS_SUFFIX)
    }
}

/// Resolved names of the embedded entries of a field list, in order
fn embedded_names(fields: &[Field]) -> Vec<String> {
    fields
        .iter()
        .filter(|f| f.is_embedded())
        .map(|f| NamedType::of(Some(&f.ty)).name)
        .collect()
}

impl StructType {
    /// Resolved names of the embedded fields, in order
    pub fn embedded_type_names(&self) -> Vec<String> {
        embedded_names(&self.field_list)
    }
}

impl InterfaceType {
    /// Resolved names of the embedded interfaces, in order
    pub fn embedded_type_names(&self) -> Vec<String> {
        embedded_names(&self.method_list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Expr;

    fn is_name_ref(expr: &Expr, name: &str) -> bool {
        expr.as_name().is_some_and(|n| n.value == name)
    }

    fn p(line: u32) -> Pos {
        Pos::new(line, 1)
    }

    #[test]
    fn test_struct_insert_is_idempotent() {
        let mut st = StructType::new(p(1));
        assert!(st.insert_imp_type("T", p(2)));
        assert!(!st.insert_imp_type("T", p(3)));
        assert_eq!(st.embedded_type_names(), vec!["T"]);
    }

    #[test]
    fn test_struct_insert_distinct_names() {
        let mut st = StructType::new(p(1));
        st.insert_imp_type("T1", p(2));
        st.insert_imp_type("T2", p(3));
        assert_eq!(st.embedded_type_names(), vec!["T1", "T2"]);
    }

    #[test]
    fn test_struct_insert_ignores_named_fields() {
        let mut st = StructType::new(p(1));
        st.field_list.push(Field::named(
            Name::new("T", p(2)),
            Expr::name("int", p(2)),
        ));
        assert!(st.insert_imp_type("T", p(3)));
        assert_eq!(st.field_list.len(), 2);
    }

    #[test]
    fn test_struct_insert_matches_pointer_embedding_by_name() {
        let mut st = StructType::new(p(1));
        st.field_list
            .push(Field::embedded(Expr::pointer_to(Expr::name("T", p(2)))));
        assert!(!st.insert_imp_type("T", p(3)));
        assert_eq!(st.field_list.len(), 1);
    }

    #[test]
    fn test_struct_insert_appends_after_existing_fields() {
        let mut st = StructType::new(p(1));
        st.field_list.push(Field::named(
            Name::new("s1", p(2)),
            Expr::name("string", p(2)),
        ));
        st.insert_imp_type("Base$", p(3));
        assert_eq!(st.field_list[0].name.as_ref().map(|n| n.value.as_str()), Some("s1"));
        assert!(is_name_ref(&st.field_list[1].ty, "Base$"));
        assert_eq!(st.field_list[1].pos, p(3));
    }

    #[test]
    fn test_interface_insert_always_appends() {
        let mut it = InterfaceType::new(p(1));
        it.insert_imp_type("I", p(2));
        it.insert_imp_type("I", p(3));
        assert_eq!(it.embedded_type_names(), vec!["I", "I"]);
    }

    #[test]
    fn test_class_insert_fans_out() {
        let mut class = ClassType::new("C2", p(1));
        class.insert_imp_type(&Name::new("C1", p(1)));
        assert_eq!(class.struct_type.embedded_type_names(), vec!["C1$"]);
        assert_eq!(class.interface_type.embedded_type_names(), vec!["C1"]);
    }

    #[test]
    fn test_insert_bases_orders_extends_before_implements() {
        let mut class = ClassType::new("C", p(1));
        class.struct_type.ext_list.push(Name::new("B", p(1)));
        class.struct_type.imp_list.push(Name::new("I1", p(1)));
        class.struct_type.imp_list.push(Name::new("I2", p(1)));
        class.insert_bases();

        assert_eq!(class.struct_type.embedded_type_names(), vec!["B$"]);
        assert_eq!(
            class.interface_type.embedded_type_names(),
            vec!["B", "I1", "I2"]
        );
        assert_eq!(class.storage_name(), "C$");
    }
}
