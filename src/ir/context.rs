use std::collections::{BTreeMap, HashMap};

use tracing::{debug, trace};

use crate::parser::SymbolTable;

use super::{Instruction, Operand, Rvalue, Temp};

/// State of a single compilation: declared names, the temporary counter, the
/// intermediate code emitted so far and the bookkeeping maps. A fresh context
/// is made per compilation, so nothing leaks between runs.
#[derive(Debug, Default)]
pub struct Context {
    symbols: SymbolTable,
    temp_count: usize,
    code: Vec<Instruction>,
    values: HashMap<String, Operand>,
    temp_values: BTreeMap<Temp, Rvalue>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates `t1`, `t2`, ... in order.
    pub fn new_temp(&mut self) -> Temp {
        self.temp_count += 1;
        Temp(self.temp_count)
    }

    pub fn emit(&mut self, instruction: Instruction) {
        trace!(%instruction, "emit");
        self.code.push(instruction);
    }

    pub fn declare(&mut self, name: &str) {
        if !self.symbols.declare(name) {
            debug!(name, "variable redeclared");
        }
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.symbols.contains(name)
    }

    /// Records the value a variable was declared with. Last write wins.
    pub fn bind_value(&mut self, name: &str, value: Operand) {
        self.values.insert(name.to_string(), value);
    }

    pub fn bind_temp(&mut self, temp: Temp, value: Rvalue) {
        self.temp_values.insert(temp, value);
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn code(&self) -> &[Instruction] {
        &self.code
    }

    pub fn values(&self) -> &HashMap<String, Operand> {
        &self.values
    }

    pub fn temp_values(&self) -> &BTreeMap<Temp, Rvalue> {
        &self.temp_values
    }

    pub fn temp_count(&self) -> usize {
        self.temp_count
    }
}
