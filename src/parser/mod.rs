mod expr;
mod parser;
mod symbol_table;

pub use expr::*;
pub use parser::*;
pub use symbol_table::*;
