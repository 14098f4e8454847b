//! Console report: runs the phases in order and prints what each produced.

use std::io::{self, Write};

use tracing::{info, warn};

use crate::codegen::Codegen;
use crate::ir::{Context, Instruction};
use crate::lexer::Lexer;
use crate::optimizer::Optimizer;
use crate::parser::Parser;

#[derive(Clone, Debug)]
pub struct Options {
    pub show_tokens: bool,
    pub show_intermediate: bool,
    pub optimize: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            show_tokens: true,
            show_intermediate: false,
            optimize: true,
        }
    }
}

fn write_code<W: Write>(out: &mut W, title: &str, code: &[Instruction]) -> io::Result<()> {
    writeln!(out, "\n{title}:")?;
    for instruction in code {
        writeln!(out, "{instruction}")?;
    }
    Ok(())
}

/// Compiles `source`, writing the report to `out`. Returns whether the
/// compilation succeeded; on failure the report ends with the error message
/// and nothing is optimized or generated.
pub fn run<W: Write>(source: &str, options: &Options, out: &mut W) -> io::Result<bool> {
    writeln!(out, "\nPerforming Lexical Analysis...")?;
    let tokens = Lexer::tokenize(source);

    if options.show_tokens {
        writeln!(out, "\nTokens:")?;
        for token in &tokens {
            writeln!(out, "{token}")?;
        }
    }

    writeln!(out, "\nPerforming Syntax and Semantic Analysis...")?;
    let mut ctx = Context::new();
    if let Err(err) = Parser::new(&tokens, &mut ctx).parse() {
        warn!(kind = ?err.kind(), error = %err, "compilation failed");
        writeln!(out, "{err}")?;
        return Ok(false);
    }
    writeln!(out, "Syntax and Semantic Analysis Passed: No Errors!")?;

    if options.show_intermediate || !options.optimize {
        write_code(out, "Intermediate Code", ctx.code())?;
    }

    let code = if options.optimize {
        let optimized = Optimizer::optimize(ctx.code());
        write_code(out, "Optimized Intermediate Code", &optimized)?;
        optimized
    } else {
        ctx.code().to_vec()
    };

    writeln!(out, "\nGenerated Assembly Code:")?;
    write!(out, "{}", Codegen::generate(&code))?;

    info!(instructions = code.len(), "compilation succeeded");
    Ok(true)
}
