use clap::Parser;
use shelfplot::{PipelineBuilder, RenderConfig, RunReport};
use std::path::PathBuf;
use std::process::ExitCode;

/// Exports every chart of the media analytics report and writes its index page.
#[derive(Parser, Debug)]
#[command(name = "shelfplot", version)]
struct Args {
    /// Project root the input documents and output directory are resolved against.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Output directory for chart pages and the index.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Location pages load plotly.js from.
    #[arg(long)]
    plotly_src: Option<String>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("shelfplot=info"))
        .init();
    let args = Args::parse();

    let mut render = RenderConfig::default();
    if let Some(src) = args.plotly_src {
        render.plotly_src = src;
    }
    let mut builder = PipelineBuilder::new()
        .with_project_root(args.root)
        .with_render_config(render);
    if let Some(dir) = args.output_dir {
        builder = builder.with_output_dir(dir);
    }

    let report = match builder.build().and_then(|pipeline| pipeline.run()) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    print_summary(&report);
    ExitCode::SUCCESS
}

fn print_summary(report: &RunReport) {
    for failure in &report.skipped {
        println!("Skipped {}: {}", failure.context, failure.error);
    }
    for record in &report.exports {
        match (record.path(), record.error()) {
            (Some(path), _) => println!("Chart exported to: {}", path.display()),
            (None, error) => println!(
                "Chart failed: {} ({}): {}",
                record.output_id,
                record.title,
                error.unwrap_or("unknown error")
            ),
        }
    }
    match &report.index {
        Ok(index) => match &index.path {
            Some(path) => println!("Index page created: {}", path.display()),
            None => println!("Index page created"),
        },
        Err(e) => println!("Index page failed: {e}"),
    }
}
