//! pricing - price print and graphics products from a quote file

#![allow(missing_docs)]

use clap::Parser;
use print_pricing::cli::{self, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli::run(cli) {
        Ok(output) => {
            println!("{}", output.trim_end());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(cli::exit_code_for(&e))
        }
    }
}
