//! ghchangelog - print a GitHub changelog entry as block-quoted Markdown.
//!
//! Fetches the changelog index, picks the first entry whose title contains
//! the given filter, and prints its block-quoted Markdown rendering. Passing
//! an absolute URL instead renders that page as a single full-page article.

use std::time::Duration;

use anyhow::{bail, Context};
use clap::Parser;
use log::{error, info};
use ureq::Agent;

use quotedown::{html, Article};

const CHANGELOG_URL: &str = "https://github.blog/changelog/";
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Parser)]
#[command(name = "ghchangelog", version, about)]
struct Cli {
    /// Part of an entry title to look for, or an absolute page URL
    query: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Version aliases are answered before argument parsing; clap would
    // reject "-v" and "-version" as unknown flags.
    if std::env::args().nth(1).as_deref().is_some_and(is_version_alias) {
        println!("ghchangelog {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let cli = Cli::parse();

    let agent = make_agent();

    if is_url(&cli.query) {
        let page = html::parse_document(&fetch(&agent, &cli.query)?);
        let article = Article::from_page(&page, &cli.query)?;
        println!("{}", article.render());
        return Ok(());
    }

    let page = html::parse_document(&fetch(&agent, CHANGELOG_URL)?);
    match find_entry(&page, &cli.query) {
        Some(markdown) => {
            println!("{markdown}");
            Ok(())
        }
        None => bail!("no changelog entry matching {:?}", cli.query),
    }
}

fn make_agent() -> Agent {
    Agent::config_builder()
        .timeout_global(Some(FETCH_TIMEOUT))
        .build()
        .into()
}

fn is_url(query: &str) -> bool {
    query.starts_with("http://") || query.starts_with("https://")
}

fn is_version_alias(arg: &str) -> bool {
    matches!(
        arg.to_lowercase().as_str(),
        "-v" | "--version" | "-version" | "version"
    )
}

fn fetch(agent: &Agent, url: &str) -> anyhow::Result<String> {
    info!("visiting {url}");

    let response = match agent.get(url).call() {
        Ok(response) => response,
        Err(err) => {
            error!("request to {url} failed: {err}");
            return Err(err).with_context(|| format!("fetching {url}"));
        }
    };

    let mut body = response.into_body();
    body.read_to_string()
        .with_context(|| format!("reading response from {url}"))
}

/// Render the first article entry whose title contains `filter`
/// (case-insensitively). Entries without a content body are skipped.
fn find_entry(page: &quotedown::Node, filter: &str) -> Option<String> {
    let wanted = filter.to_lowercase();

    for entry in page.descendants().filter(|n| n.tag_name() == "article") {
        let Ok(article) = Article::from_entry(entry) else {
            continue;
        };
        if article.title().to_lowercase().contains(&wanted) {
            return Some(article.render());
        }
    }

    None
}
