use crate::cli::Cli;
use crate::defines::{DEFINES, MacroSpec};
use crate::error::MissingOption;
use std::path::PathBuf;

/// A define together with the value it should be set to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub spec: &'static MacroSpec,
    pub value: i64,
}

/// Application configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    pub header: PathBuf,
    /// One entry per define, in `DEFINES` order.
    pub selections: Vec<Selection>,
    pub dry_run: bool,
}

impl Config {
    /// Resolve parsed arguments, stopping at the first missing selection.
    ///
    /// A negative value counts as missing.
    pub fn from_cli(cli: &Cli) -> Result<Self, MissingOption> {
        let raw = [cli.ifft, cli.ntt, cli.index_map, cli.sk, cli.data_load];
        let mut selections = Vec::with_capacity(DEFINES.len());
        for (spec, value) in DEFINES.iter().zip(raw) {
            match value {
                Some(value) if value >= 0 => selections.push(Selection { spec, value }),
                _ => return Err(MissingOption { what: spec.missing }),
            }
        }
        Ok(Config {
            header: cli.file.clone(),
            selections,
            dry_run: cli.dry_run,
        })
    }
}
