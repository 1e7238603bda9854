mod highlight;
mod layout;
mod logs;
mod palette;
mod panel;
mod parse;

use anyhow::Context;
use clap::Parser;
use std::io::Write;

#[derive(clap::Parser, Debug)]
#[command(
    version = "0.1.0",
    about = "View Algolia API access logs as styled panels on the terminal",
    long_about = "`algolog` fetches the most recent access-log entries of an Algolia
application and prints each one as a framed, color-coded panel:
request headers, query parameters, request body and (optionally) the
API response, with JSON syntax highlighting."
)]
struct Args {
    #[arg(long, help = "Whether to print the API response")]
    response: bool,

    #[arg(long, default_value_t = 10, help = "How many log entries to print")]
    last: usize,

    #[arg(
        long,
        default_value_t = 0,
        help = "The number of the first entry to retrieve (starts with 0)"
    )]
    offset: usize,

    #[arg(
        long = "type",
        value_enum,
        default_value = "all",
        help = "Type of log entry: all, build, error, query"
    )]
    kind: logs::LogKind,

    #[arg(
        long,
        env = "ALGOLIA_APPLICATION_ID",
        hide_env_values = true,
        help = "Algolia application ID"
    )]
    app_id: String,

    #[arg(
        long,
        env = "ALGOLIA_API_KEY",
        hide_env_values = true,
        help = "Algolia API key"
    )]
    api_key: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let client = logs::LogsClient::new(args.app_id.clone(), args.api_key.clone());
    let entries = client
        .fetch(args.kind, args.last, args.offset)
        .await
        .context("failed to fetch log entries")?;

    let palette = palette::Palette::new();
    let highlighter = highlight::Highlighter::new();

    let mut stdout = std::io::stdout().lock();
    for (i, entry) in entries.iter().enumerate() {
        let frame = panel::compose(entry, args.offset + i, args.response, &palette, &highlighter);
        writeln!(stdout, "{frame}")?;
    }

    Ok(())
}
