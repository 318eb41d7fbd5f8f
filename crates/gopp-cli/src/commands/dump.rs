//! `gopp dump`: Print type summaries of a serialized tree.

use gopp_syntax::ast::{Decl, Expr, File};
use gopp_syntax::dump::Dump;
use std::path::PathBuf;

pub fn execute(file: PathBuf) -> anyhow::Result<()> {
    let tree = File::read_json(&file)?;

    let mut count = 0;
    for decl in &tree.decl_list {
        let Decl::Type(td) = decl else {
            continue;
        };
        let name = td.name.value.as_str();
        match &td.ty {
            Expr::StructType(st) => st.dump(name),
            Expr::InterfaceType(it) => it.dump(name),
            Expr::ClassType(class) => class.dump(name),
            _ => continue,
        }
        count += 1;
    }

    if count == 0 {
        eprintln!("No struct, interface or class types in {}", file.display());
    }
    Ok(())
}
