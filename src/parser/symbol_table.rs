use std::collections::HashSet;

/// Flat set of every name declared with `let`. Names are never removed.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    names: HashSet<String>,
}

impl SymbolTable {
    /// Returns false if the name was already declared.
    pub fn declare(&mut self, name: &str) -> bool {
        self.names.insert(name.to_string())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
