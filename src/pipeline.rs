use crate::config::{Config, Selection};
use crate::defines;
use crate::io::header_file;
use anyhow::Result;
use std::io::Write;
use tracing::{debug, info};

/// Applies every selection to the configured header, in order.
///
/// Each selection is its own read-modify-write pass. A failing pass stops
/// the run; passes that already completed stay on disk.
pub fn run(config: &Config) -> Result<()> {
    let out = std::io::stdout();
    let mut out = out.lock();
    if config.dry_run {
        return dry_run(config, &mut out);
    }

    debug!("editing {:?}", header_file::display_path(&config.header));
    for sel in &config.selections {
        announce(&mut out, sel)?;
        header_file::apply_define(&config.header, sel.spec, sel.value)?;
        info!("{} set to {}", sel.spec.name, sel.value);
    }
    Ok(())
}

/// Same sequence of rewrites, applied in memory; only the result goes to `out`.
fn dry_run(
    config: &Config,
    out: &mut impl Write,
) -> Result<()> {
    let mut contents = header_file::read_header(&config.header)?;
    for sel in &config.selections {
        debug!("{} -> {} (dry run)", sel.spec.name, sel.value);
        contents = defines::rewrite(&contents, sel.spec, sel.value)?;
    }
    out.write_all(contents.as_bytes())?;
    Ok(())
}

fn announce(
    out: &mut impl Write,
    sel: &Selection,
) -> Result<()> {
    writeln!(out, "Setting {} to {}", sel.spec.name, sel.value)?;
    Ok(())
}
