use color_print::ceprintln;

use asm::{Error, Lexer, Token};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about = "Hex assembler", help_template = HELP_TEMPLATE)]
struct Args {
    /// Source file to assemble
    input: String,

    /// Output file for the binary
    #[clap(short, long, default_value = "a.out")]
    output: String,

    /// Tokenise the input only
    #[clap(long)]
    tokens: bool,

    /// Display the resolved directive listing only
    #[clap(long)]
    tree: bool,
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    if let Err(err) = run(&args) {
        ceprintln!("<red,bold>Error</>: {}", err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let source = std::fs::read_to_string(&args.input)
        .map_err(|err| Error::FileOpen(args.input.clone(), err))?;

    if args.tokens {
        print_tokens(&source);
        return Ok(());
    }

    let mut program = asm::parse(&source)?;
    program.resolve()?;

    if args.tree {
        print!("{}", program.listing());
        return Ok(());
    }

    let image = program.emit_bin();
    std::fs::write(&args.output, image)
        .map_err(|err| Error::FileWrite(args.output.clone(), err))?;
    Ok(())
}

fn print_tokens(source: &str) {
    let mut lexer = Lexer::new(source);
    loop {
        match lexer.next_token() {
            Token::IDENTIFIER(name) => println!("IDENTIFIER {}", name),
            Token::NUMBER(value) => println!("NUMBER {}", value),
            Token::EOF => {
                println!("EOF");
                return;
            }
            token => println!("{}", token),
        }
    }
}
