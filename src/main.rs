use std::fs;

use clap::Parser;
use mathlogic::evaluate;

/// mathlogic evaluates an infix expression mixing arithmetic, comparison and
/// logical operators and prints the integer result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells mathlogic to read the expression from a file instead.
    #[arg(short, long)]
    file: bool,

    expression: String,
}

fn main() {
    let args = Args::parse();

    let expression = if args.file {
        fs::read_to_string(&args.expression).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.expression);
            std::process::exit(1);
        })
    } else {
        args.expression
    };

    match evaluate(&expression) {
        Ok(result) => println!("{result}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
