pub mod directive;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod program;
pub mod token;

pub use directive::Directive;
pub use error::Error;
pub use lexer::Lexer;
pub use parser::Parser;
pub use program::Program;
pub use token::Token;

/// Lex and parse source text into an unresolved program.
pub fn parse(source: &str) -> Result<Program, Error> {
    Parser::new(Lexer::new(source)).parse_program()
}

/// Assemble source text into a binary image.
pub fn assemble(source: &str) -> Result<Vec<u8>, Error> {
    let mut program = parse(source)?;
    program.resolve()?;
    Ok(program.emit_bin())
}
