use std::collections::HashMap;

use tracing::{debug, trace};

use crate::ir::{Instruction, Place, Rvalue};

/// Copy propagation plus removal of temporary assignments.
///
/// One forward pass. Every assignment binds its destination to its
/// right-hand side; a right-hand side that is just a bound name is replaced by
/// that binding. Since bindings are stored already substituted, one lookup is
/// enough. Assignments to temporaries are then dropped and survive only as
/// bindings.
#[derive(Debug, Default)]
pub struct Optimizer {
    bindings: HashMap<Place, Rvalue>,
    dropped: usize,
}

impl Optimizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn optimize(code: &[Instruction]) -> Vec<Instruction> {
        let mut optimizer = Optimizer::new();
        let optimized: Vec<_> = code
            .iter()
            .filter_map(|instruction| optimizer.visit(instruction))
            .collect();

        debug!(
            before = code.len(),
            after = optimized.len(),
            dropped = optimizer.dropped,
            "optimization done"
        );
        optimized
    }

    fn visit(&mut self, instruction: &Instruction) -> Option<Instruction> {
        let Instruction::Assign(dest, value) = instruction else {
            return Some(instruction.clone());
        };

        let value = self.substitute(value);
        self.bindings.insert(dest.clone(), value.clone());

        if dest.is_temp() {
            trace!(%dest, %value, "temporary eliminated");
            self.dropped += 1;
            return None;
        }

        Some(Instruction::Assign(dest.clone(), value))
    }

    fn substitute(&self, value: &Rvalue) -> Rvalue {
        if let Rvalue::Use(operand) = value {
            if let Some(bound) = operand.as_place().and_then(|p| self.bindings.get(&p)) {
                return bound.clone();
            }
        }
        value.clone()
    }
}
