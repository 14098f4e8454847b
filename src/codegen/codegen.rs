use tracing::debug;

use crate::ir::{BinOp, Instruction, Rvalue};

const LEFT_REGISTER: &str = "r0";
const RIGHT_REGISTER: &str = "r1";

/// Lowers optimized three-address code into the pseudo-assembly listing.
///
/// Only additions go through registers; every other assignment, binary or
/// not, becomes a single `mov`.
pub struct Codegen {
    asm: String,
    lines: usize,
}

impl Codegen {
    fn new() -> Self {
        Self {
            asm: String::new(),
            lines: 0,
        }
    }

    pub fn generate(code: &[Instruction]) -> String {
        let mut codegen = Codegen::new();
        for instruction in code {
            codegen.gen_instruction(instruction);
        }

        debug!(lines = codegen.lines, "code generation done");
        codegen.asm
    }

    fn emit(&mut self, line: &str) {
        self.asm.push_str(line);
        self.asm.push('\n');
        self.lines += 1;
    }

    fn gen_instruction(&mut self, instruction: &Instruction) {
        match instruction {
            Instruction::Assign(dest, Rvalue::Binary(BinOp::Add, lhs, rhs)) => {
                self.emit(&format!("mov {LEFT_REGISTER}, {lhs}"));
                self.emit(&format!("mov {RIGHT_REGISTER}, {rhs}"));
                self.emit(&format!("add {LEFT_REGISTER}, {RIGHT_REGISTER}"));
                self.emit(&format!("str {LEFT_REGISTER}, {dest}"));
            }
            Instruction::Assign(dest, value) => self.emit(&format!("mov {dest}, {value}")),
            Instruction::Print(name) => self.emit(&format!("print {name}")),
        }
    }
}
