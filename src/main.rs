use std::process::ExitCode;

use anyhow::Context;
use password_rules::password::adapter::incoming::cli::{run_driver, DriverConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = DriverConfig::from_env().context("Failed to load validator configuration")?;
    let candidates: Vec<String> = std::env::args().skip(1).collect();

    let outcome = run_driver(&config, &candidates);

    for report in &outcome.reports {
        let line = report
            .render(config.output)
            .context("Failed to render validation report")?;
        println!("{}", line);
    }

    Ok(outcome.exit_code())
}
