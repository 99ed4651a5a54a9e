//! Binary entrypoint for the error code registry demo.
use errcode_demo::{run, DemoConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the demo output
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = DemoConfig::from_env()?;
    tracing::info!(locale = %config.locale, output = ?config.output, "starting errcode demo");

    let output = run(&config)?;
    println!("{}", output);
    Ok(())
}
