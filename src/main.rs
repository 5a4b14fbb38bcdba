use anyhow::Result;
use clap::Parser;
use student_score_pipeline::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the command's result
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("student_score_pipeline=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
