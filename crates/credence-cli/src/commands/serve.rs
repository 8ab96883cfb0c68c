//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::sync::Arc;

use credence_gemini::GeminiAnalyzer;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "5000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    // Fails fast when GEMINI_API_KEY is missing.
    let analyzer = Arc::new(GeminiAnalyzer::from_env()?);

    println!();
    println!("  {} {}", "Credence".cyan().bold(), "API Server".bold());
    println!();
    println!(
        "  {}  http://{}:{}/analyze",
        "Analyze".green(),
        args.host,
        args.port
    );
    println!(
        "  {}   http://{}:{}/health",
        "Health".green(),
        args.host,
        args.port
    );
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    credence_web::run_server(analyzer, &args.host, args.port).await?;

    Ok(())
}
