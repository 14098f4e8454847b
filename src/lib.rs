pub mod codegen;
pub mod driver;
pub mod error;
pub mod ir;
pub mod lexer;
pub mod optimizer;
pub mod parser;

use codegen::Codegen;
use ir::{Context, Instruction};
use lexer::{Lexer, Token};
use optimizer::Optimizer;
use parser::Parser;

pub use error::{CompileError, CompileResult, ErrorKind};

/// Everything one compilation produced, phase by phase.
#[derive(Debug)]
pub struct Compilation {
    pub tokens: Vec<Token>,
    pub context: Context,
    pub optimized: Vec<Instruction>,
    pub assembly: String,
}

pub fn compile(source: &str) -> CompileResult<Compilation> {
    let tokens = Lexer::tokenize(source);

    let mut context = Context::new();
    Parser::new(&tokens, &mut context).parse()?;

    let optimized = Optimizer::optimize(context.code());
    let assembly = Codegen::generate(&optimized);

    Ok(Compilation {
        tokens,
        context,
        optimized,
        assembly,
    })
}
