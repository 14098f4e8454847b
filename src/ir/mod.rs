mod context;
mod instruction;

pub use context::*;
pub use instruction::*;
