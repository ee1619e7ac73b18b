use arch::inst::{Instr, OprInstr};

use crate::directive::Directive;
use crate::error::Error;
use crate::lexer::Lexer;
use crate::program::Program;
use crate::token::Token;

/// Single-token-lookahead parser producing the ordered directive list.
pub struct Parser {
    lexer: Lexer,
    current: Token,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        Parser {
            lexer,
            current: Token::NONE,
        }
    }

    pub fn parse_program(mut self) -> Result<Program, Error> {
        let mut directives = vec![];
        loop {
            self.bump();
            if self.current == Token::EOF {
                break;
            }
            directives.push(self.parse_directive()?);
        }
        Program::new(directives)
    }

    fn bump(&mut self) {
        self.current = self.lexer.next_token();
    }

    /// Parse one directive, leaving `current` on its last token.
    fn parse_directive(&mut self) -> Result<Directive, Error> {
        match self.current.clone() {
            Token::DATA => {
                self.bump();
                Ok(Directive::Data(self.parse_integer()?))
            }
            Token::FUNC => Ok(Directive::Func(self.parse_identifier()?)),
            Token::PROC => Ok(Directive::Proc(self.parse_identifier()?)),
            // A bare identifier declares a label for the directive after it.
            Token::IDENTIFIER(name) => Ok(Directive::Label(name, 0)),
            Token::OPR => {
                self.bump();
                let sub = match self.current {
                    Token::BRB => OprInstr::BRB,
                    Token::SVC => OprInstr::SVC,
                    Token::ADD => OprInstr::ADD,
                    Token::SUB => OprInstr::SUB,
                    ref token => {
                        return Err(Error::UnexpectedOprOperand(
                            token.to_string(),
                            self.lexer.line(),
                        ))
                    }
                };
                Ok(Directive::InstrOp(sub))
            }
            token => match addressed_opcode(&token) {
                Some(opcode) => {
                    self.bump();
                    if let Token::IDENTIFIER(name) = self.current.clone() {
                        Ok(Directive::InstrLabel(opcode, name, 0))
                    } else {
                        Ok(Directive::InstrImm(opcode, self.parse_integer()?))
                    }
                }
                None => Err(Error::UnexpectedToken(
                    token.to_string(),
                    self.lexer.line(),
                )),
            },
        }
    }

    /// `[MINUS] NUMBER`, with `current` already on the first token.
    fn parse_integer(&mut self) -> Result<i32, Error> {
        if self.current == Token::MINUS {
            self.bump();
            if let Token::NUMBER(value) = self.current {
                let negated = -i64::from(value);
                return Ok(negated as i32);
            }
            return Err(Error::ExpectedNumber(self.lexer.line()));
        }
        if let Token::NUMBER(value) = self.current {
            return Ok(value as i32);
        }
        Err(Error::ExpectedNumber(self.lexer.line()))
    }

    fn parse_identifier(&mut self) -> Result<String, Error> {
        self.bump();
        match self.current.clone() {
            Token::IDENTIFIER(name) => Ok(name),
            _ => Err(Error::ExpectedIdentifier(self.lexer.line())),
        }
    }
}

fn addressed_opcode(token: &Token) -> Option<Instr> {
    match token {
        Token::LDAM => Some(Instr::LDAM),
        Token::LDBM => Some(Instr::LDBM),
        Token::STAM => Some(Instr::STAM),
        Token::LDAC => Some(Instr::LDAC),
        Token::LDBC => Some(Instr::LDBC),
        Token::LDAP => Some(Instr::LDAP),
        Token::LDAI => Some(Instr::LDAI),
        Token::LDBI => Some(Instr::LDBI),
        Token::STAI => Some(Instr::STAI),
        Token::BR => Some(Instr::BR),
        Token::BRZ => Some(Instr::BRZ),
        Token::BRN => Some(Instr::BRN),
        _ => None,
    }
}
