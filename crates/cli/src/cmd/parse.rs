//! Parse command implementation.

use kunstdb_core::dating;
use serde::Serialize;

use crate::ParseArgs;

/// Parsed range for JSON output.
#[derive(Debug, Serialize)]
struct RangeOutput {
    from: i32,
    to: i32,
}

pub fn run(args: &ParseArgs) {
    match dating::parse(&args.expression) {
        Some(range) => {
            if args.json {
                let output = RangeOutput { from: range.from, to: range.to };
                println!("{}", serde_json::to_string(&output).unwrap_or_default());
            } else {
                println!("input: {}", args.expression.trim());
                println!("from:  {}", range.from);
                println!("to:    {}", range.to);
            }
        }
        None => {
            eprintln!("no recognized date shape: {}", args.expression);
            std::process::exit(1);
        }
    }
}
