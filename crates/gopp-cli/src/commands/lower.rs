//! `gopp lower`: Lower the classes of a serialized tree.

use anyhow::Context;
use gopp_syntax::ast::File;
use gopp_syntax::lower::{ClassLowerer, LowerOptions};
use log::warn;
use std::path::PathBuf;

pub fn execute(
    file: PathBuf,
    output: Option<PathBuf>,
    no_expand: bool,
    dump: bool,
) -> anyhow::Result<()> {
    let mut tree = File::read_json(&file)?;

    let options = LowerOptions::default()
        .expand_class_decls(!no_expand)
        .dump_classes(dump);
    let report = ClassLowerer::new(options).lower_file(&mut tree);

    for skipped in &report.skipped {
        warn!("{}: {}", file.display(), skipped);
    }

    match &output {
        Some(path) => {
            print!("{}", report.class_dumps);
            tree.write_json(path)?;
        }
        None => {
            eprint!("{}", report.class_dumps);
            let json = tree
                .to_json_pretty()
                .with_context(|| format!("serializing {}", file.display()))?;
            println!("{}", json);
        }
    }

    eprintln!(
        "Lowered {} classes, {} methods ({} skipped)",
        report.classes.len(),
        report.retargeted.len(),
        report.skipped.len()
    );
    if let Some(path) = output {
        eprintln!("  Output: {}", path.display());
    }
    Ok(())
}
