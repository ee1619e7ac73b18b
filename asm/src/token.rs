use std::fmt;

use strum::EnumString;

/// Source tokens. Keyword variants are spelled exactly as they appear in
/// source, so the keyword table is the derived `FromStr`: an identifier
/// that fails to parse as a keyword stays an IDENTIFIER.
#[derive(Debug, Clone, PartialEq, Eq, EnumString)]
pub enum Token {
    // Structural keywords
    DATA,
    FUNC,
    PROC,

    // Addressed opcodes
    LDAM,
    LDBM,
    STAM,
    LDAC,
    LDBC,
    LDAP,
    LDAI,
    LDBI,
    STAI,
    BR,
    BRZ,
    BRN,
    OPR,

    // Sub-opcodes, only legal as the operand of OPR
    BRB,
    SVC,
    ADD,
    SUB,

    // Lexical atoms; never produced by keyword lookup
    #[strum(disabled)]
    MINUS,
    #[strum(disabled)]
    NUMBER(u32),
    #[strum(disabled)]
    IDENTIFIER(String),

    /// Any character the lexer does not understand; rejected by the parser.
    #[strum(disabled)]
    NONE,
    #[strum(disabled)]
    EOF,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Token::DATA => "DATA",
            Token::FUNC => "FUNC",
            Token::PROC => "PROC",
            Token::LDAM => "LDAM",
            Token::LDBM => "LDBM",
            Token::STAM => "STAM",
            Token::LDAC => "LDAC",
            Token::LDBC => "LDBC",
            Token::LDAP => "LDAP",
            Token::LDAI => "LDAI",
            Token::LDBI => "LDBI",
            Token::STAI => "STAI",
            Token::BR => "BR",
            Token::BRZ => "BRZ",
            Token::BRN => "BRN",
            Token::OPR => "OPR",
            Token::BRB => "BRB",
            Token::SVC => "SVC",
            Token::ADD => "ADD",
            Token::SUB => "SUB",
            Token::MINUS => "MINUS",
            Token::NUMBER(_) => "NUMBER",
            Token::IDENTIFIER(_) => "IDENTIFIER",
            Token::NONE => "NONE",
            Token::EOF => "EOF",
        };
        f.pad(name)
    }
}
