#![allow(dead_code)]
use assert_fs::{TempDir, prelude::*};

pub const HEADER_PATH: &str = "lib/user_defines.h";

/// Excerpt of a stock `user_defines.h`.
pub const STOCK_HEADER: &str = "\
#pragma once

/**
Assert type.

0 = none (will define NDEBUG)
1 = standard using <assert.h>
2 = custom
*/
#define SE_ASSERT_TYPE 1

/**
Inverse FFT type.

0 = compute \"on-the-fly\"
1 = load
2 = compute \"one-shot\" (not yet supported)
*/
#define SE_IFFT_TYPE 0

#define SE_NTT_TYPE 1

#define SE_INDEX_MAP_TYPE 1

#define SE_SK_TYPE 2

#define SE_DATA_LOAD_TYPE 0

#define SE_MEMPOOL_ALLOC_VALUES
";

/// Builds a fixture tree:
/// root/
///   lib/user_defines.h  (with the given contents)
pub fn header_fs(contents: &str) -> TempDir {
    let td = TempDir::new().unwrap();
    td.child("lib").create_dir_all().unwrap();
    td.child(HEADER_PATH).write_str(contents).unwrap();
    td
}

/// Current contents of the fixture header.
pub fn header_contents(td: &TempDir) -> String {
    std::fs::read_to_string(td.child(HEADER_PATH).path()).unwrap()
}
