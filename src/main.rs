use clap::Parser;
use kv_check::args::Args;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let _args = Args::parse();

    let stdin = io::stdin();
    match kv_check_core::validate(stdin.lock()) {
        Ok(report) => {
            println!("{}", report.records);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Validation Error: {e}");
            ExitCode::FAILURE
        }
    }
}
