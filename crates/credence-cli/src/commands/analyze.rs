//! One-shot analysis command.

use anyhow::Result;
use clap::Args;
use std::io::Read;
use std::path::PathBuf;

use credence_core::analysis::validate_article;
use credence_core::TextAnalyzer;
use credence_gemini::GeminiAnalyzer;

use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Path to a text file with the article, or "-" for stdin
    pub input: PathBuf,
}

pub async fn execute(args: AnalyzeArgs) -> Result<()> {
    let text = if args.input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(&args.input)?
    };

    let article = validate_article(&text)?;

    let analyzer = GeminiAnalyzer::from_env()?;
    let result = analyzer.analyze(article).await?;

    output::print_result(&result);

    Ok(())
}
