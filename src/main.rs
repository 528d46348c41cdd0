use anyhow::Result;
use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Scaffold a new Python project", long_about = None)]
struct Cli {
    /// Path to the new project directory
    path: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    commands::new::execute(&cli.path)
}
