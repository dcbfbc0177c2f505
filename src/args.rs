// src/args.rs
use clap::Parser;

/// Command line surface.
///
/// The validator takes no options; everything arrives on standard input.
/// Parsing still provides `--help`, `--version` and rejection of stray
/// arguments.
#[derive(Parser, Debug)]
#[command(
    name = "kv_check",
    version = crate::VERSION,
    about = "Validate kN<TAB>vN records piped on standard input"
)]
pub struct Args {}
