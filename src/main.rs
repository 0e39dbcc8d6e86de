use clap::Parser;
use headline_digest::HarvestOutcome;
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = headline_digest::logging::init(&args.log_file) {
        eprintln!(
            "Failed to open log file {}: {}",
            args.log_file.display(),
            e
        );
        return ExitCode::FAILURE;
    }

    ::log::info!("Starting headline harvest for {}", args.url);
    println!("Note: a WebDriver server (e.g. ChromeDriver) must be running.");
    println!("Logging to {}", args.log_file.display());

    match args.into_harvest().run().await {
        Ok(HarvestOutcome::Written { path, rows }) => {
            println!("Saved {} headlines to {}", rows, path.display());
            ExitCode::SUCCESS
        }
        Ok(HarvestOutcome::NoHeadlines) => {
            println!("No headlines found; nothing written");
            ExitCode::SUCCESS
        }
        Ok(HarvestOutcome::NoDescriptions { attempted }) => {
            println!(
                "None of {} headlines had a description; nothing written",
                attempted
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            ::log::error!("Harvest failed: {}", e);
            eprintln!("Harvest failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
