use std::fs;

use clap::Parser;
use strcalc::{
    CalcResult, calculate,
    interpreter::{postfix::to_postfix, tokenizer::tokenize},
};
use tracing_subscriber::EnvFilter;

const SYNTAX_HELP: &str = "\
Syntax:
  Numbers      12, 3.5, .5 and negative numbers such as -4 or -.32
  Operators    + - * /  (* and / bind tighter than + and -)
  Parentheses  ( ) nested to any depth
  Whitespace   ignored everywhere

  An operator may only be followed by minus signs. A sign makes the next
  number negative; repeated signs do not cancel out (--5 is -5).

Examples:
  strcalc \"2 + 3 * 4\"          14
  strcalc \"(4-2)*3.5\"          7
  strcalc \"-5+-8--11*2\"        9
  strcalc -p \"(2 + 3) * 4\"     2 3 + 4 *
  strcalc \"2+-+-4\"             Syntax error

Set RUST_LOG=debug to trace each calculation on stderr.";

/// strcalc evaluates arithmetic expressions with +, -, *, / and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, after_long_help = SYNTAX_HELP)]
struct Args {
    /// Tells strcalc to read expressions from a file, one per line, instead of
    /// taking a single expression.
    #[arg(short, long)]
    file: bool,

    /// Prints the postfix (Reverse Polish) form of the expression instead of
    /// its value.
    #[arg(short, long)]
    postfix: bool,

    contents: String,
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env())
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    let expressions: Vec<String> = if args.file {
        let source = fs::read_to_string(&args.contents).unwrap_or_else(|_| {
                         eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                   &args.contents);
                         std::process::exit(1);
                     });
        source.lines()
              .map(str::trim)
              .filter(|line| !line.is_empty())
              .map(str::to_string)
              .collect()
    } else {
        vec![args.contents]
    };

    let mut failed = false;
    for expression in &expressions {
        let output = if args.postfix {
            render_postfix(expression)
        } else {
            calculate(expression).map(|value| value.to_string())
        };

        match output {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("{e}");
                failed = true;
            },
        }
    }

    if failed {
        std::process::exit(1);
    }
}

fn render_postfix(expression: &str) -> CalcResult<String> {
    let postfix = to_postfix(&tokenize(expression)?)?;
    Ok(postfix.iter()
              .map(ToString::to_string)
              .collect::<Vec<_>>()
              .join(" "))
}
