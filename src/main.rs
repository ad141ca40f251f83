use std::{collections::HashMap, fs, process};

use clap::Parser;
use propex::{check_syntax, evaluate, expand};

/// propex evaluates the `${...}` property-expression language used in build
/// files.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the input as text containing `${...}` placeholders instead of
    /// a bare expression.
    #[arg(short, long)]
    expand: bool,

    /// Check the expression for syntax errors without evaluating it.
    #[arg(short, long)]
    check: bool,

    /// Read the input from a file instead of the command line.
    #[arg(short, long)]
    file: bool,

    /// Define a property, e.g. `-D version=1.2.3`. May be repeated.
    #[arg(short = 'D', long = "define", value_name = "NAME=VALUE")]
    defines: Vec<String>,

    input: String,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let input = if args.file {
        fs::read_to_string(&args.input).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.input);
            process::exit(1);
        })
    } else {
        args.input.clone()
    };

    let mut properties = HashMap::new();
    for define in &args.defines {
        let Some((name, value)) = define.split_once('=') else {
            eprintln!("Invalid property definition '{define}'. Expected NAME=VALUE.");
            process::exit(1);
        };
        properties.insert(name.to_string(), value.to_string());
    }

    if args.check {
        if let Err(e) = check_syntax(&input) {
            eprintln!("{e}");
            process::exit(1);
        }
        return;
    }

    let result = if args.expand {
        expand(&input, &properties)
    } else {
        evaluate(&input, &properties).map(|value| value.to_string())
    };

    match result {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        },
    }
}
