use std::process::ExitCode;

use clap::Parser;

use dtree::cli::Cli;
use dtree::fs::RealFileSystem;
use dtree::{WalkOptions, write_tree};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let options = WalkOptions {
        include_files: cli.files,
    };

    let mut stdout = std::io::stdout().lock();
    match write_tree(&RealFileSystem, &mut stdout, &cli.path, &options).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dtree: {err:#}");
            ExitCode::from(1)
        }
    }
}
