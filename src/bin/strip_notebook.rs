use clap::Parser;
use shelfplot::notebook::{self, DEFAULT_NOTEBOOK, megabytes};
use std::path::PathBuf;
use std::process::ExitCode;

/// Clears the outputs of every code cell in a Jupyter notebook, in place.
#[derive(Parser, Debug)]
#[command(name = "strip-notebook", version)]
struct Args {
    /// Notebook to strip.
    #[arg(default_value = DEFAULT_NOTEBOOK)]
    path: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("shelfplot=info"))
        .init();
    let args = Args::parse();

    match notebook::strip_outputs(&args.path) {
        Ok(report) => {
            println!("Notebook cleaned: {}", args.path.display());
            println!(
                "Original size: {:.2} MB",
                megabytes(report.original_bytes as i64)
            );
            println!("New size: {:.2} MB", megabytes(report.new_bytes as i64));
            println!(
                "Reduced by: {:.2} MB ({:.1}%)",
                megabytes(report.reduction_bytes()),
                report.reduction_percent()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
