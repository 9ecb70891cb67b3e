use anyhow::{Context, Result};
use toadstool::evaluation::export_reports;
use toadstool::ui::cli::drivers::InquireDriver;
use toadstool::ui::cli::wizard::prompt_choice;
use toadstool::ui::types::build::build_task;
use toadstool::ui::types::choices::TaskChoice;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(env_filter),
        )
        .init();
}

/// `toadstool <task.json>` runs a saved task; without arguments the task is
/// configured interactively.
fn main() -> Result<()> {
    init_logging();

    let choice = match std::env::args_os().nth(1) {
        Some(path) => TaskChoice::from_json_file(path)?,
        None => prompt_choice::<TaskChoice, _>(&InquireDriver)?,
    };

    let mut run = build_task(choice)?;
    let mut reports = Vec::new();
    for evaluator in &mut run.evaluators {
        for report in evaluator.run()? {
            println!("{report}\n");
            reports.push(report);
        }
    }

    if let Some(path) = &run.report_path {
        export_reports(&reports, path, run.report_format)
            .with_context(|| format!("cannot write reports to {}", path.display()))?;
        info!(path = %path.display(), format = %run.report_format, "reports written");
    }
    Ok(())
}
