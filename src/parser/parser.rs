use tracing::debug;

use crate::error::{CompileError, CompileResult};
use crate::ir::{Context, Instruction, Place};
use crate::lexer::{Keyword, Token, TokenKind};

/// Statement parser. Walks the token slice once, appending intermediate
/// code and declared names to the borrowed [`Context`].
#[derive(Debug)]
pub struct Parser<'a> {
    tokens: &'a [Token],
    pub(super) index: usize,
    pub(super) ctx: &'a mut Context,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token], ctx: &'a mut Context) -> Self {
        Self {
            tokens,
            index: 0,
            ctx,
        }
    }

    /// Parses every statement. Stops at the first error.
    pub fn parse(&mut self) -> CompileResult<()> {
        self.parse_program()
    }

    fn is_eof(&self) -> bool {
        self.index >= self.tokens.len()
    }

    pub(super) fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.index)
    }

    pub(super) fn peek_text(&self) -> Option<String> {
        self.peek().map(|t| t.text.clone())
    }

    pub(super) fn consume_operator(&mut self, op: &str) -> bool {
        match self.peek() {
            Some(t) if t.is_operator(op) => {
                self.index += 1;
                true
            }
            _ => false,
        }
    }

    fn consume_ident(&mut self) -> Option<String> {
        let t = self.peek()?;
        if t.kind != TokenKind::Identifier {
            return None;
        }
        self.index += 1;
        Some(t.text.clone())
    }

    /// program = stmt*
    fn parse_program(&mut self) -> CompileResult<()> {
        let mut statements = 0;

        while !self.is_eof() {
            self.parse_stmt()?;
            statements += 1;
        }

        debug!(
            statements,
            instructions = self.ctx.code().len(),
            temps = self.ctx.temp_count(),
            "parsing done"
        );
        Ok(())
    }

    /// stmt = "let" ident "=" expr
    ///      | "print" ident
    ///      | "end" | "def" | "if"
    fn parse_stmt(&mut self) -> CompileResult<()> {
        let Some(t) = self.peek() else {
            return Ok(());
        };
        let Some(keyword) = t.keyword() else {
            return Err(CompileError::UnexpectedToken {
                token: t.text.clone(),
            });
        };
        self.index += 1;

        match keyword {
            Keyword::Let => self.parse_let(),
            Keyword::Print => self.parse_print(),
            // control flow is not compiled, only skipped
            Keyword::End | Keyword::Def | Keyword::If => Ok(()),
        }
    }

    fn parse_let(&mut self) -> CompileResult<()> {
        let Some(name) = self.consume_ident() else {
            return Err(CompileError::MissingVariableName {
                found: self.peek_text(),
            });
        };
        // declared before the right-hand side: `let x = x + 1` is accepted
        self.ctx.declare(&name);

        if !self.consume_operator("=") {
            return Err(CompileError::MissingAssign {
                found: self.peek_text(),
            });
        }

        let value = self.build_expression()?;
        self.ctx
            .emit(Instruction::copy(Place::Var(name.clone()), value.clone()));
        self.ctx.bind_value(&name, value);
        Ok(())
    }

    fn parse_print(&mut self) -> CompileResult<()> {
        let Some(name) = self.consume_ident() else {
            return Err(CompileError::InvalidPrint {
                found: self.peek_text(),
            });
        };

        if !self.ctx.is_declared(&name) {
            return Err(CompileError::UndeclaredVariable { name });
        }

        self.ctx.emit(Instruction::Print(name));
        Ok(())
    }
}
