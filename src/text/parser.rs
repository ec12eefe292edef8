use crate::graph::node::BinaryOp;
use crate::text::ast::Ast;
use crate::text::error::SyntaxError;
use crate::text::lexer::{Token, TokenKind, lex};

pub(crate) fn parse_expr(src: &str) -> Result<Ast, SyntaxError> {
    let tokens = lex(src)?;
    let mut p = Parser { tokens, pos: 0 };
    let expr = p.parse_term()?;
    p.expect(TokenKind::Eof)?;
    Ok(expr)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn bump(&mut self) -> Token {
        let t = self.tokens[self.pos].clone();
        // Eof is never consumed past.
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        t
    }

    fn offset(&self) -> usize {
        self.peek().offset
    }

    fn expect(&mut self, kind: TokenKind) -> Result<(), SyntaxError> {
        if self.peek().kind == kind {
            self.bump();
            Ok(())
        } else {
            Err(SyntaxError::new(
                self.offset(),
                format!("expected {}, found {}", describe(&kind), describe(&self.peek().kind)),
            ))
        }
    }

    fn consume(&mut self, kind: TokenKind) -> Option<usize> {
        if self.peek().kind == kind {
            Some(self.bump().offset)
        } else {
            None
        }
    }

    fn parse_term(&mut self) -> Result<Ast, SyntaxError> {
        let mut e = self.parse_factor()?;
        loop {
            let (op, offset) = if let Some(at) = self.consume(TokenKind::Plus) {
                (BinaryOp::Add, at)
            } else if let Some(at) = self.consume(TokenKind::Minus) {
                (BinaryOp::Sub, at)
            } else {
                break;
            };
            let r = self.parse_factor()?;
            e = Ast::Binary {
                op,
                left: Box::new(e),
                right: Box::new(r),
                offset,
            };
        }
        Ok(e)
    }

    fn parse_factor(&mut self) -> Result<Ast, SyntaxError> {
        let mut e = self.parse_unary()?;
        while let Some(offset) = self.consume(TokenKind::Star) {
            let r = self.parse_unary()?;
            e = Ast::Binary {
                op: BinaryOp::Mul,
                left: Box::new(e),
                right: Box::new(r),
                offset,
            };
        }
        Ok(e)
    }

    fn parse_unary(&mut self) -> Result<Ast, SyntaxError> {
        if let Some(offset) = self.consume(TokenKind::Minus) {
            let e = self.parse_unary()?;
            return Ok(Ast::Neg {
                expr: Box::new(e),
                offset,
            });
        }
        self.parse_primary()
    }

    fn parse_args(&mut self) -> Result<Vec<Ast>, SyntaxError> {
        let mut args = Vec::new();
        if self.consume(TokenKind::RParen).is_some() {
            return Ok(args);
        }
        loop {
            args.push(self.parse_term()?);
            if self.consume(TokenKind::Comma).is_some() {
                continue;
            }
            self.expect(TokenKind::RParen)?;
            return Ok(args);
        }
    }

    fn parse_primary(&mut self) -> Result<Ast, SyntaxError> {
        let t = self.bump();
        match t.kind {
            TokenKind::Number(v) => Ok(Ast::Number(v)),
            TokenKind::Ident(name) => {
                if self.consume(TokenKind::LParen).is_some() {
                    let args = self.parse_args()?;
                    return Ok(Ast::Call {
                        func: name,
                        args,
                        offset: t.offset,
                    });
                }
                Ok(Ast::Ident {
                    name,
                    offset: t.offset,
                })
            }
            TokenKind::LParen => {
                let e = self.parse_term()?;
                self.expect(TokenKind::RParen)?;
                Ok(e)
            }
            other => Err(SyntaxError::new(
                t.offset,
                format!("unexpected {}", describe(&other)),
            )),
        }
    }
}

fn describe(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Ident(s) => format!("identifier '{s}'"),
        TokenKind::Number(v) => format!("number {v}"),
        TokenKind::LParen => "'('".to_owned(),
        TokenKind::RParen => "')'".to_owned(),
        TokenKind::Comma => "','".to_owned(),
        TokenKind::Plus => "'+'".to_owned(),
        TokenKind::Minus => "'-'".to_owned(),
        TokenKind::Star => "'*'".to_owned(),
        TokenKind::Eof => "end of input".to_owned(),
    }
}
