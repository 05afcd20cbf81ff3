// Entrypoint for the CLI application.
// - Keeps `main` small: parse arguments and hand them to the upload flow.
// - Returns `anyhow::Result` so any terminal error prints one line and
//   exits non-zero.

use clap::Parser;
use gistup::cli::{run, Args};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // clap terminates with exit code 2 on a usage error, e.g. when no
    // files are given.
    let args = Args::parse();
    run(args)
}
