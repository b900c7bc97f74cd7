use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dtree")]
#[command(about = "Print a directory tree with per-file sizes", long_about = None)]
pub struct Cli {
    /// Root directory to render
    pub path: PathBuf,

    /// Include plain files in addition to directories
    #[arg(short = 'f')]
    pub files: bool,
}
