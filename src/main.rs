use std::error::Error;

use api;
use colored::Colorize;
use llm_service::LlmConfig;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from a .env file when present; real
    // environment variables always win.
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    print_banner();

    api::start().await?;

    Ok(())
}

/// Human-facing startup banner: which upstream is used and whether the
/// credential is present. The credential itself is never printed.
fn print_banner() {
    let cfg = LlmConfig::siliconflow();
    let key_state = match std::env::var(llm_service::config::API_KEY_VAR) {
        Ok(v) if !v.trim().is_empty() => "configured".green(),
        _ => "missing".red(),
    };

    println!("{}", "=".repeat(50));
    println!("{}", "page-assist backend".bold());
    println!("upstream model: {}", cfg.model.cyan());
    println!("{}: {}", llm_service::config::API_KEY_VAR, key_state);
    println!("{}", "=".repeat(50));
}
