use tracing::trace;

use crate::error::{CompileError, CompileResult};
use crate::ir::{BinOp, Instruction, Operand, Place, Rvalue, BIN_OPS};
use crate::lexer::TokenKind;

use super::Parser;

impl<'a> Parser<'a> {
    /// expr = "(" expr ")" rest
    ///      | (ident | num) rest
    /// rest = (binop expr)*
    ///
    /// All operators share one precedence level and the right operand is a
    /// whole expression, so `a - b - c` groups as `a - (b - c)`.
    pub fn build_expression(&mut self) -> CompileResult<Operand> {
        let mut result = self.parse_primary()?;

        while let Some(kind) = self.consume_bin_op() {
            let right = self.build_expression()?;
            result = self.combine(kind, result, right)?;
        }

        Ok(result)
    }

    fn consume_bin_op(&mut self) -> Option<BinOp> {
        let t = self.peek()?;
        if t.kind != TokenKind::Operator {
            return None;
        }
        let kind = *BIN_OPS.get(t.text.as_str())?;
        self.index += 1;
        Some(kind)
    }

    fn parse_primary(&mut self) -> CompileResult<Operand> {
        let Some(t) = self.peek() else {
            return Err(CompileError::ExpectedExpression { found: None });
        };

        match t.kind {
            TokenKind::Operator if t.text == "(" => {
                self.index += 1;
                let inner = self.build_expression()?;
                if !self.consume_operator(")") {
                    return Err(CompileError::UnclosedParen {
                        found: self.peek_text(),
                    });
                }
                Ok(inner)
            }
            TokenKind::Identifier => {
                self.index += 1;
                Ok(Operand::Var(t.text.clone()))
            }
            TokenKind::Number => {
                let value = t.text.parse().map_err(|_| CompileError::InvalidNumber {
                    text: t.text.clone(),
                })?;
                self.index += 1;
                Ok(Operand::Const(value))
            }
            _ => Err(CompileError::ExpectedExpression {
                found: Some(t.text.clone()),
            }),
        }
    }

    /// Folds two literals, otherwise binds the operation to a new temporary.
    /// A negative intermediate result is not a literal and stays symbolic:
    /// `1 - 2 - 3` becomes `t1 = 1 - -1`.
    fn combine(&mut self, kind: BinOp, lhs: Operand, rhs: Operand) -> CompileResult<Operand> {
        if let (Some(l), Some(r)) = (lhs.as_literal(), rhs.as_literal()) {
            let value = fold(kind, l, r)?;
            trace!(%kind, l, r, value, "constant folded");
            return Ok(Operand::Const(value));
        }

        let temp = self.ctx.new_temp();
        self.ctx.emit(Instruction::binary(
            Place::Temp(temp),
            kind,
            lhs.clone(),
            rhs.clone(),
        ));
        self.ctx.bind_temp(temp, Rvalue::Binary(kind, lhs, rhs));
        Ok(Operand::Temp(temp))
    }
}

/// Evaluates `lhs kind rhs` at compile time.
pub fn fold(kind: BinOp, lhs: i64, rhs: i64) -> CompileResult<i64> {
    let overflow = || CompileError::Overflow { op: kind, lhs, rhs };

    match kind {
        BinOp::Add => lhs.checked_add(rhs).ok_or_else(overflow),
        BinOp::Sub => lhs.checked_sub(rhs).ok_or_else(overflow),
        BinOp::Mul => lhs.checked_mul(rhs).ok_or_else(overflow),
        BinOp::Div => {
            if rhs == 0 {
                return Err(CompileError::DivisionByZero { lhs, rhs });
            }
            lhs.checked_div(rhs).ok_or_else(overflow)
        }
        BinOp::Pow => {
            if rhs < 0 {
                return Err(CompileError::NegativeExponent { lhs, rhs });
            }
            let exp = u32::try_from(rhs).map_err(|_| overflow())?;
            lhs.checked_pow(exp).ok_or_else(overflow)
        }
    }
}
