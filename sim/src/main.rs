use clap::Parser;
use color_print::ceprintln;

use sim::{Error, Processor};

#[derive(Parser, Debug)]
#[clap(version, about = "Hex processor simulator")]
struct Args {
    /// Binary file to simulate
    input: String,

    /// Dump the loaded image and exit
    #[arg(short, long)]
    dump: bool,

    /// Print an execution trace
    #[arg(short, long)]
    trace: bool,
}

fn main() {
    let args = Args::parse();
    match run(&args) {
        Ok(code) => std::process::exit(code as i32),
        Err(err) => {
            ceprintln!("<red,bold>Error</>: {}", err);
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<u32, Error> {
    let image = std::fs::read(&args.input)?;
    let mut processor = Processor::new(std::io::stdin().lock(), std::io::stdout().lock());
    processor.load(&image)?;

    if args.dump {
        println!("Read {} bytes", image.len());
        for index in 0..=(image.len() / 4) {
            println!("{:08} {:08x}", index, processor.word(index));
        }
        return Ok(0);
    }

    processor.set_tracing(args.trace);
    processor.run()
}
