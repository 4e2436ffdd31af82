use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use gym_search::config::Config;
use gym_search::models::{Mode, Role};
use gym_search::state::Session;

/// Minimal console stand-in for the presentation layer: each input line is
/// fed to whichever controller the current mode selects.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!("API base URL: {}", config.api_base_url);
    tracing::info!("Collection: {}", config.collection_name);
    let debounce = config.debounce_delay();

    let session = Session::new(config)?;

    println!("gym-search console — type to search, /mode to toggle chat, /quit to exit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim().to_string();
        match line.as_str() {
            "" => continue,
            "/quit" => break,
            "/mode" => {
                let next = match session.mode() {
                    Mode::Search => Mode::Chat,
                    Mode::Chat => Mode::Search,
                };
                session.set_mode(next);
                println!("mode: {next:?}");
            }
            input => match session.mode() {
                Mode::Search => {
                    session.search.on_keyword_changed(input);
                    // Let the debounced search fire and come back before
                    // printing a snapshot.
                    tokio::time::sleep(debounce + Duration::from_millis(300)).await;
                    let results = session.search.results();
                    if results.is_empty() {
                        match session.search.last_error() {
                            Some(err) => println!("search failed: {err}"),
                            None => println!("no results"),
                        }
                    }
                    for hit in results {
                        println!("- {} ({})", hit.title, hit.link);
                        if !hit.summary.is_empty() {
                            println!("  {}", hit.summary);
                        }
                    }
                }
                Mode::Chat => {
                    if !session.chat.send(input).await {
                        continue;
                    }
                    let transcript = session.chat.transcript();
                    if let Some(turn) = transcript.last() {
                        let tag = match turn.role {
                            Role::User => "user",
                            Role::Assistant => "assistant",
                            Role::Error => "error",
                        };
                        println!("[{tag}] {}", turn.content);
                        for citation in &turn.citations {
                            println!("  source: {citation}");
                        }
                    }
                }
            },
        }
    }

    session.reset();
    Ok(())
}
