use crate::constants::{DEFAULT_HEADER_PATH, USAGE};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "change-defines")]
#[command(
    about = "Set the numbered configuration defines in a SEAL-Embedded user_defines.h header, \
                   rewriting the file in place.",
    override_usage = USAGE,
    args_override_self = true
)]
pub struct Cli {
    /// Inverse FFT type (0-2).
    #[arg(
        short = 'i',
        long = "ifft",
        value_name = "IFFT_OPTION",
        allow_negative_numbers = true
    )]
    pub ifft: Option<i64>,

    /// NTT type (0-3).
    #[arg(
        short = 'n',
        long = "ntt",
        value_name = "NTT_OPTION",
        allow_negative_numbers = true
    )]
    pub ntt: Option<i64>,

    /// Index map type (0-4).
    #[arg(
        short = 'm',
        long = "index_map",
        value_name = "INDEX_MAP_OPTION",
        allow_negative_numbers = true
    )]
    pub index_map: Option<i64>,

    /// Secret key type (0-2).
    #[arg(
        short = 's',
        long = "sk",
        value_name = "SK_OPTION",
        allow_negative_numbers = true
    )]
    pub sk: Option<i64>,

    /// Data load type (0-2).
    #[arg(
        short = 'd',
        long = "data_load",
        value_name = "DATA_LOAD_OPTION",
        allow_negative_numbers = true
    )]
    pub data_load: Option<i64>,

    /// Header file to edit.
    #[arg(short = 'f', long = "file", default_value = DEFAULT_HEADER_PATH)]
    pub file: PathBuf,

    /// Print the rewritten header to stdout instead of writing it back.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// List every supported define with its legal values, then exit.
    #[arg(short = 'l', long = "list")]
    pub list: bool,
}
