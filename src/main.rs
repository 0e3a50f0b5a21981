//! Portfolio client - command line entry point.
//!
//! Runs one page operation against the configured server and prints the
//! affected part of the page as HTML.
//!
//! - `fact`: show a random fact
//! - `greeting`: fetch the greeting
//! - `login`: check login status and reveal the comment form
//! - `comments <limit>`: list up to `limit` comments
//! - `submit <text> <limit>`: post comments, then list
//! - `delete <limit>`: delete every comment, then list
//! - `locations`: show the four locations
//! - `page <limit>`: all of the above except submit and delete

use portfolio::{
    render_page, render_slot, Config, Input, MemoryPage, Portfolio, PortfolioError, Slot,
};
use std::env;
use std::process::ExitCode;
use tracing::error;

const USAGE: &str = "usage: portfolio <fact | greeting | login | comments LIMIT | submit TEXT LIMIT | delete LIMIT | locations | page LIMIT>";

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args).await {
        Ok(html) => {
            println!("{}", html);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &[String]) -> Result<String, PortfolioError> {
    let config = Config::load()?;
    let mut page = MemoryPage::new();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    // The limit input is the last argument for every command that lists comments
    match args.as_slice() {
        ["comments", limit] | ["delete", limit] | ["submit", _, limit] | ["page", limit] => {
            page.set_input(Input::CommentLimit, *limit);
        }
        _ => {}
    }

    let mut portfolio = Portfolio::connect(&config, page)?;

    let slots: Vec<Slot> = match args.as_slice() {
        ["fact"] => {
            portfolio.display_random_fact()?;
            vec![Slot::RandomFact]
        }
        ["greeting"] => {
            portfolio.display_greeting().await?;
            vec![Slot::Greeting]
        }
        ["login"] => {
            portfolio.check_login_and_reveal_form().await?;
            vec![Slot::CommentForm]
        }
        ["comments", _] => {
            portfolio.refresh_comments_from_input().await?;
            vec![Slot::History]
        }
        ["submit", text, _] => {
            portfolio.submit_comments(text).await?;
            vec![Slot::History]
        }
        ["delete", _] => {
            portfolio.delete_all_comments().await?;
            vec![Slot::History]
        }
        ["locations"] => {
            portfolio.display_locations().await?;
            vec![Slot::Locations]
        }
        ["page", _] => {
            portfolio.display_random_fact()?;
            portfolio.display_greeting().await?;
            portfolio.display_locations().await?;
            if portfolio.check_login_and_reveal_form().await? {
                portfolio.refresh_comments_from_input().await?;
            }
            return Ok(render_page(portfolio.page()));
        }
        _ => return Err(PortfolioError::Config(USAGE.to_string())),
    };

    Ok(slots
        .into_iter()
        .map(|slot| render_slot(portfolio.page(), slot))
        .collect::<Vec<_>>()
        .join("\n"))
}
