// SentiScope - compare VADER and Hugging Face sentiment for one piece of text
use anyhow::Result;
use clap::Parser;
use std::io::{self, Read};
use std::path::PathBuf;

use sentiscope::app::{self, App};
use sentiscope::client::AnalysisClient;
use sentiscope::config;
use sentiscope::input;
use sentiscope::model::AnalysisRequest;
use sentiscope::result_view;

#[derive(Parser, Debug)]
#[command(author, version, about = "Compare VADER and Hugging Face sentiment analysis")]
struct Args {
    /// Analyze this text and print the report without entering the TUI
    #[arg(short, long)]
    text: Option<String>,

    /// Analyze a .txt file (first 150 tokens) and print the report
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Override the analysis service base URL
    #[arg(short, long)]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let endpoint = config::resolve_endpoint(args.endpoint.as_deref());
    let client = AnalysisClient::new(endpoint);

    // One-shot mode: explicit flags, or piped stdin
    if args.text.is_some() || args.file.is_some() || !atty::is(atty::Stream::Stdin) {
        return run_once(client, &args).await;
    }

    let mut app = App::new(client);

    app::setup_terminal()?;
    let result = app::run_app(&mut app).await;
    app::restore_terminal()?;

    result
}

async fn run_once(client: AnalysisClient, args: &Args) -> Result<()> {
    let request = if let Some(path) = &args.file {
        let raw = std::fs::read(path)?;
        let text = String::from_utf8_lossy(&raw);
        AnalysisRequest::from_file(&input::truncate_tokens(&text, config::FILE_TOKEN_LIMIT))
    } else if let Some(text) = &args.text {
        AnalysisRequest::typed(text)
    } else {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        AnalysisRequest::typed(buf.trim_end())
    };

    let content = if request.text.is_empty() {
        &request.file_content
    } else {
        &request.text
    };
    if content.trim().is_empty() {
        anyhow::bail!("nothing to analyze");
    }

    let result = client.analyze(&request).await?;
    println!("{}", result_view::plain_report(&result));
    Ok(())
}
