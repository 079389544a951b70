pub mod rewrite;
pub mod table;

pub use rewrite::rewrite;
pub use table::{DEFINES, MacroSpec};
