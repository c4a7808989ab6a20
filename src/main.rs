use anyhow::{Context, Result};
use spamtree::ui::cli::drivers::InquireDriver;
use spamtree::ui::cli::wizard::prompt_task;
use spamtree::ui::types::build::build_task;
use spamtree::ui::types::choices::TaskChoice;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // A task file skips the wizard.
    let choice = match std::env::args_os().nth(1) {
        Some(path) => TaskChoice::from_json_file(&path)?,
        None => prompt_task(&InquireDriver)?,
    };
    info!(task = %choice.kind(), "starting");

    let mut task = build_task(choice).context("failed to set up task")?;
    let outcome = task.run().context("task failed")?;
    print!("{outcome}");
    Ok(())
}
