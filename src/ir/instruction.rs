use std::fmt;

use phf::phf_map;

/// Operators that may appear between two operands of an expression.
pub static BIN_OPS: phf::Map<&'static str, BinOp> = phf_map! {
    "+" => BinOp::Add,
    "-" => BinOp::Sub,
    "*" => BinOp::Mul,
    "/" => BinOp::Div,
    "^" => BinOp::Pow,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Pow => "^",
        };
        f.write_str(s)
    }
}

/// Compiler generated variable, printed as `t<n>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Temp(pub usize);

impl fmt::Display for Temp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operand {
    Const(i64),
    Var(String),
    Temp(Temp),
}

impl Operand {
    pub fn as_const(&self) -> Option<i64> {
        match self {
            Operand::Const(n) => Some(*n),
            _ => None,
        }
    }

    /// A constant that reads as a plain numeral, i.e. starts with a digit.
    /// Negative folded results are constants but not literals.
    pub fn as_literal(&self) -> Option<i64> {
        self.as_const().filter(|n| *n >= 0)
    }

    /// The storage location this operand reads from, if it is not a literal.
    pub fn as_place(&self) -> Option<Place> {
        match self {
            Operand::Const(_) => None,
            Operand::Var(name) => Some(Place::Var(name.clone())),
            Operand::Temp(t) => Some(Place::Temp(*t)),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Const(n) => write!(f, "{}", n),
            Operand::Var(name) => f.write_str(name),
            Operand::Temp(t) => write!(f, "{}", t),
        }
    }
}

/// Left-hand side of an assignment.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Place {
    Var(String),
    Temp(Temp),
}

impl Place {
    pub fn is_temp(&self) -> bool {
        matches!(self, Place::Temp(_))
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Place::Var(name) => f.write_str(name),
            Place::Temp(t) => write!(f, "{}", t),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rvalue {
    Use(Operand),
    Binary(BinOp, Operand, Operand),
}

impl fmt::Display for Rvalue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rvalue::Use(op) => write!(f, "{}", op),
            Rvalue::Binary(kind, lhs, rhs) => write!(f, "{} {} {}", lhs, kind, rhs),
        }
    }
}

/// One line of three-address code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    Assign(Place, Rvalue),
    Print(String),
}

impl Instruction {
    pub fn copy(dest: Place, src: Operand) -> Self {
        Instruction::Assign(dest, Rvalue::Use(src))
    }

    pub fn binary(dest: Place, kind: BinOp, lhs: Operand, rhs: Operand) -> Self {
        Instruction::Assign(dest, Rvalue::Binary(kind, lhs, rhs))
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Assign(dest, value) => write!(f, "{} = {}", dest, value),
            Instruction::Print(name) => write!(f, "print {}", name),
        }
    }
}
