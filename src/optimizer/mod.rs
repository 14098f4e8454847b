mod copy_propagation;

pub use copy_propagation::*;
