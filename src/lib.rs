pub mod cli;
pub mod config;
pub mod constants;
pub mod defines;
pub mod error;
pub mod io;
pub mod pipeline;

pub use defines::rewrite;
pub use error::{MissingOption, RangeError};
