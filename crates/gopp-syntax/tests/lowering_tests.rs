use gopp_syntax::ast::*;
use gopp_syntax::logging;
use gopp_syntax::lower::{
    expand_class_decls, lower_file, ClassLowerer, LowerOptions, Retarget, SkipReason, CLASS_SUFFIX,
};
use gopp_syntax::named_type::NamedType;
use gopp_syntax::pos::Pos;
use gopp_syntax::token::Operator;

// ============================================================================
// Fixtures
// ============================================================================

fn p(line: u32, col: u32) -> Pos {
    Pos::new(line, col)
}

fn field(name: &str, ty: &str, line: u32) -> Field {
    Field::named(Name::new(name, p(line, 5)), Expr::name(ty, p(line, 8)))
}

fn method(name: &str, line: u32, results: &[&str]) -> Field {
    let ty = FuncType {
        param_list: Vec::new(),
        result_list: results
            .iter()
            .map(|r| Field::embedded(Expr::name(*r, p(line, 12))))
            .collect(),
        pos: p(line, 5),
    };
    Field::named(Name::new(name, p(line, 5)), Expr::FuncType(ty))
}

fn class_decl(
    name: &str,
    line: u32,
    extends: &[&str],
    implements: &[&str],
    methods: Vec<Field>,
    fields: Vec<Field>,
) -> Decl {
    let mut class = ClassType::new(name, p(line, 9));
    class.interface_type.method_list = methods;
    class.struct_type.field_list = fields;
    class.struct_type.tag_list = vec![None; class.struct_type.field_list.len()];
    for (i, base) in extends.iter().enumerate() {
        class
            .struct_type
            .ext_list
            .push(Name::new(*base, p(line, 30 + i as u32)));
    }
    for (i, iface) in implements.iter().enumerate() {
        class
            .struct_type
            .imp_list
            .push(Name::new(*iface, p(line, 50 + i as u32)));
    }
    Decl::Type(TypeDecl {
        name: Name::new(name, p(line, 6)),
        alias: false,
        ty: Expr::ClassType(Box::new(class)),
        group: None,
        pragma: Pragma::default(),
        pos: p(line, 1),
    })
}

fn method_decl(recv_name: &str, recv_ty: Expr, name: &str, line: u32) -> Decl {
    Decl::Func(FuncDecl {
        attr: Default::default(),
        recv: Some(Field::named(Name::new(recv_name, p(line, 8)), recv_ty)),
        name: Name::new(name, p(line, 15)),
        ty: FuncType::default(),
        body: Some(BlockStmt::default()),
        pragma: Pragma::default(),
        pos: p(line, 1),
    })
}

fn func_decl(name: &str, line: u32) -> Decl {
    Decl::Func(FuncDecl {
        attr: Default::default(),
        recv: None,
        name: Name::new(name, p(line, 6)),
        ty: FuncType::default(),
        body: Some(BlockStmt::default()),
        pragma: Pragma::default(),
        pos: p(line, 1),
    })
}

/// Two classes, `C2 extends C1`, with value receivers on every method
fn hello_file() -> File {
    logging::init_test();
    let mut file = File::new(Name::new("main", p(2, 9)), p(2, 1));
    file.decl_list.push(class_decl(
        "C1",
        7,
        &[],
        &[],
        vec![method("C1", 8, &[]), method("Huh", 9, &["string"])],
        vec![field("S1", "string", 10)],
    ));
    file.decl_list.push(method_decl("c", Expr::name("C1", p(13, 12)), "C1", 13));
    file.decl_list.push(method_decl("c", Expr::name("C1", p(17, 12)), "Huh", 17));
    file.decl_list.push(class_decl(
        "C2",
        22,
        &["C1"],
        &[],
        vec![method("C2", 23, &[]), method("Wow", 24, &["string"])],
        vec![field("s2", "string", 25)],
    ));
    file.decl_list.push(method_decl("cc", Expr::name("C2", p(28, 13)), "C2", 28));
    file.decl_list.push(method_decl("cc", Expr::name("C2", p(33, 13)), "Wow", 33));
    file.decl_list.push(func_decl("main", 38));
    file.lines = 51;
    file
}

fn recv_type<'a>(file: &'a File, func: &str, base: &str) -> &'a Expr {
    &file
        .func_decl(func, Some(base))
        .and_then(|f| f.recv.as_ref())
        .expect("method not found")
        .ty
}

fn class_of<'a>(file: &'a File, name: &str) -> &'a ClassType {
    file.type_decl(name)
        .and_then(|td| td.class_type())
        .expect("class not found")
}

fn is_storage_pointer(expr: &Expr, storage: &str) -> bool {
    match expr {
        Expr::Operation(op) => {
            op.op == Operator::Mul
                && op.y.is_none()
                && op.x.as_name().is_some_and(|n| n.value == storage)
        }
        _ => false,
    }
}

// ============================================================================
// End-to-end
// ============================================================================

#[test]
fn test_hello_without_expansion() {
    let mut file = hello_file();
    let report = ClassLowerer::new(LowerOptions::default().expand_class_decls(false))
        .lower_file(&mut file);

    assert_eq!(report.classes, vec!["C1", "C2"]);
    assert!(report.is_clean());

    let c2 = class_of(&file, "C2");
    assert_eq!(c2.struct_type.embedded_type_names(), vec!["C1$"]);
    assert_eq!(c2.struct_type.field_list.len(), 2);
    assert_eq!(c2.interface_type.embedded_type_names(), vec!["C1"]);
    assert_eq!(c2.interface_type.method_list.len(), 3);

    let c1 = class_of(&file, "C1");
    assert!(c1.struct_type.embedded_type_names().is_empty());
    assert!(c1.interface_type.embedded_type_names().is_empty());

    // Receivers are looked up by their new base name
    assert!(is_storage_pointer(recv_type(&file, "Wow", "C2$"), "C2$"));
    assert!(is_storage_pointer(recv_type(&file, "C2", "C2$"), "C2$"));
    assert!(is_storage_pointer(recv_type(&file, "Huh", "C1$"), "C1$"));
}

#[test]
fn test_hello_reports_retargeted_methods_in_order() {
    let mut file = hello_file();
    let report = lower_file(&mut file);

    let retargeted: Vec<String> = report.retargeted.iter().map(|m| m.to_string()).collect();
    assert_eq!(retargeted, vec!["C1$.C1", "C1$.Huh", "C2$.C2", "C2$.Wow"]);
}

#[test]
fn test_hello_with_expansion() {
    let mut file = hello_file();
    lower_file(&mut file);

    let kinds: Vec<(&str, &str)> = file
        .decl_list
        .iter()
        .filter_map(|d| match d {
            Decl::Type(td) => Some((td.name.value.as_str(), td.ty.kind_name())),
            _ => None,
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("C1", "InterfaceType"),
            ("C1$", "StructType"),
            ("C2", "InterfaceType"),
            ("C2$", "StructType"),
        ]
    );

    let storage = file.type_decl("C2$").expect("storage decl");
    assert_eq!(storage.name.pos, p(22, 6));
    let Expr::StructType(st) = &storage.ty else {
        panic!("expected struct type");
    };
    assert!(st.is_class);
    assert_eq!(st.embedded_type_names(), vec!["C1$"]);

    let contract = file.type_decl("C2").expect("contract decl");
    let Expr::InterfaceType(it) = &contract.ty else {
        panic!("expected interface type");
    };
    assert!(it.is_class);
    assert_eq!(it.embedded_type_names(), vec!["C1"]);

    // Non-type declarations keep their relative order
    let funcs: Vec<&str> = file.funcs().map(|f| f.name.value.as_str()).collect();
    assert_eq!(funcs, vec!["C1", "Huh", "C2", "Wow", "main"]);
}

#[test]
fn test_synthesized_embeddings_use_extends_positions() {
    let mut file = hello_file();
    ClassLowerer::new(LowerOptions::default().expand_class_decls(false)).lower_file(&mut file);

    let c2 = class_of(&file, "C2");
    let base = c2.ext_list()[0].pos;
    let embedded: Vec<Pos> = c2
        .struct_type
        .field_list
        .iter()
        .filter(|f| f.is_embedded())
        .map(|f| f.ty.pos())
        .collect();
    assert_eq!(embedded, vec![base]);
}

// ============================================================================
// Extends / implements
// ============================================================================

#[test]
fn test_implements_only_touches_interface() {
    let mut file = File::new(Name::new("p", p(1, 9)), p(1, 1));
    file.decl_list
        .push(class_decl("C", 3, &[], &["A", "B"], Vec::new(), Vec::new()));
    ClassLowerer::new(LowerOptions::default().expand_class_decls(false)).lower_file(&mut file);

    let class = class_of(&file, "C");
    assert_eq!(class.interface_type.embedded_type_names(), vec!["A", "B"]);
    assert!(class.struct_type.field_list.is_empty());
}

#[test]
fn test_extends_then_implements_order() {
    let mut file = File::new(Name::new("p", p(1, 9)), p(1, 1));
    file.decl_list
        .push(class_decl("C", 3, &["B1", "B2"], &["I"], Vec::new(), Vec::new()));
    ClassLowerer::new(LowerOptions::default().expand_class_decls(false)).lower_file(&mut file);

    let class = class_of(&file, "C");
    assert_eq!(class.struct_type.embedded_type_names(), vec!["B1$", "B2$"]);
    assert_eq!(
        class.interface_type.embedded_type_names(),
        vec!["B1", "B2", "I"]
    );
}

#[test]
fn test_existing_storage_embedding_is_not_duplicated() {
    let mut file = File::new(Name::new("p", p(1, 9)), p(1, 1));
    file.decl_list.push(class_decl(
        "C",
        3,
        &["B"],
        &[],
        Vec::new(),
        vec![Field::embedded(Expr::name("B$", p(4, 5)))],
    ));
    ClassLowerer::new(LowerOptions::default().expand_class_decls(false)).lower_file(&mut file);

    let class = class_of(&file, "C");
    assert_eq!(class.struct_type.embedded_type_names(), vec!["B$"]);
    assert_eq!(class.struct_type.field_list[0].pos, p(4, 5));
}

// ============================================================================
// Receivers
// ============================================================================

#[test]
fn test_pointer_receiver_is_renamed_once() {
    let mut file = File::new(Name::new("p", p(1, 9)), p(1, 1));
    file.decl_list
        .push(class_decl("C", 3, &[], &[], Vec::new(), Vec::new()));
    file.decl_list.push(method_decl(
        "c",
        Expr::pointer_to(Expr::name("C", p(5, 10))),
        "M",
        5,
    ));
    lower_file(&mut file);

    let ty = recv_type(&file, "M", "C$");
    assert!(is_storage_pointer(ty, "C$"));
    assert_eq!(NamedType::of(Some(ty)).to_string(), "*C$");
}

#[test]
fn test_non_class_receivers_untouched() {
    let mut file = File::new(Name::new("p", p(1, 9)), p(1, 1));
    let plain = Expr::pointer_to(Expr::name("Hello", p(5, 10)));
    file.decl_list
        .push(method_decl("h", plain.clone(), "Init", 5));
    let report = lower_file(&mut file);

    assert_eq!(recv_type(&file, "Init", "Hello"), &plain);
    assert!(report.retargeted.is_empty());
    assert!(report.is_clean());
}

#[test]
fn test_function_without_receiver_is_noop() {
    let mut decl = match func_decl("main", 1) {
        Decl::Func(f) => f,
        _ => unreachable!(),
    };
    let before = decl.clone();
    assert_eq!(decl.retarget_class_receiver(), Retarget::NoReceiver);
    assert_eq!(decl, before);
}

#[test]
fn test_unsupported_receiver_is_reported() {
    logging::init_test();
    let mut file = File::new(Name::new("p", p(1, 9)), p(1, 1));
    file.decl_list
        .push(class_decl("C", 3, &[], &[], Vec::new(), Vec::new()));
    let double = Expr::pointer_to(Expr::pointer_to(Expr::name("C", p(5, 11))));
    file.decl_list.push(method_decl("c", double.clone(), "M", 5));
    let report = lower_file(&mut file);

    assert_eq!(recv_type(&file, "M", "C"), &double);
    assert_eq!(report.skipped.len(), 1);
    let skipped = &report.skipped[0];
    assert_eq!(skipped.pos, p(5, 1));
    assert_eq!(skipped.subject, "C.M");
    assert!(matches!(
        skipped.reason,
        SkipReason::UnsupportedReceiver { shape: "Operation" }
    ));
}

// ============================================================================
// Nested classes
// ============================================================================

#[test]
fn test_nested_class_is_reported_and_left_alone() {
    logging::init_test();
    let mut file = File::new(Name::new("p", p(1, 9)), p(1, 1));
    let mut inner = ClassType::new("Inner", p(4, 10));
    inner.struct_type.ext_list.push(Name::new("B", p(4, 30)));
    let mut outer = StructType::new(p(3, 10));
    outer.field_list.push(Field::named(
        Name::new("inner", p(4, 5)),
        Expr::ClassType(Box::new(inner)),
    ));
    file.decl_list.push(Decl::Type(TypeDecl {
        name: Name::new("Outer", p(3, 6)),
        alias: false,
        ty: Expr::StructType(outer),
        group: None,
        pragma: Pragma::default(),
        pos: p(3, 1),
    }));

    let report = lower_file(&mut file);
    assert!(report.classes.is_empty());
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].subject, "Inner");
    assert_eq!(report.skipped[0].reason, SkipReason::NestedClass);

    let Some(Decl::Type(td)) = file.decl_list.first() else {
        panic!("expected type decl");
    };
    let Expr::StructType(st) = &td.ty else {
        panic!("expected struct type");
    };
    let Expr::ClassType(inner) = &st.field_list[0].ty else {
        panic!("expected class type");
    };
    assert!(inner.struct_type.field_list.is_empty());
}

// ============================================================================
// Expansion
// ============================================================================

#[test]
fn test_expand_keeps_group_and_pragma() {
    let mut file = File::new(Name::new("p", p(1, 9)), p(1, 1));
    let group = file.new_group(p(3, 6));
    let mut decl = class_decl("C", 4, &[], &[], Vec::new(), Vec::new());
    if let Decl::Type(td) = &mut decl {
        td.group = Some(group);
        td.pragma = Pragma::NOINLINE;
    }
    file.decl_list.push(decl);
    expand_class_decls(&mut file);

    assert_eq!(file.decl_list.len(), 2);
    assert_eq!(file.grouped(group).count(), 2);
    for decl in &file.decl_list {
        let Decl::Type(td) = decl else {
            panic!("expected type decl");
        };
        assert!(td.pragma.contains(Pragma::NOINLINE));
        assert!(!td.alias);
        assert_eq!(td.pos, p(4, 1));
    }
}

#[test]
fn test_expand_leaves_non_class_decls() {
    let mut file = hello_file();
    let before = file.clone();
    file.decl_list.retain(|d| !matches!(d, Decl::Type(_)));
    let expected = file.clone();
    expand_class_decls(&mut file);
    assert_eq!(file, expected);
    assert_ne!(file, before);
}

#[test]
fn test_class_suffix() {
    assert_eq!(CLASS_SUFFIX, "$");
}
