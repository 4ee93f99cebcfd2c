//! Interactive search and filter session
//!
//! Reads one command per line and re-renders the sidebar and fund grid after each
//! change. Every command maps onto a [`ViewEvent`] except `view`, which only logs.

use super::{list, ui};
use crate::core::{Facet, FundRepository, ViewEvent, ViewState, load_funds};
use anyhow::{Context, Result, anyhow};
use std::io::{BufRead, BufReader, Write};
use std::str::FromStr;
use tracing::{debug, info};

const SEARCH_PLACEHOLDER: &str = "Search by fund name or manager...";

const HELP: &str = "Commands:
  search <text>            filter by fund name, manager or category (empty resets)
  toggle <facet> <option>  select or unselect a facet option
  expand <facet>           open or close a filter section
  clear                    clear all facet selections
  view <id>                view details for a fund
  help                     show this help
  quit                     leave
Facets: shariah, risk, fund-type";

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Search(String),
    Toggle(Facet, String),
    Expand(Facet),
    Clear,
    View(i64),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        match word.to_lowercase().as_str() {
            "search" | "s" => Ok(Command::Search(rest.to_string())),
            "toggle" | "t" => {
                let rest = rest.trim();
                let (facet, option) = rest
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| anyhow!("Usage: toggle <facet> <option>"))?;
                Ok(Command::Toggle(facet.parse()?, option.trim().to_string()))
            }
            "expand" | "e" => Ok(Command::Expand(rest.trim().parse()?)),
            "clear" => Ok(Command::Clear),
            "view" | "v" => {
                let id = rest
                    .trim()
                    .parse::<i64>()
                    .with_context(|| format!("Invalid fund id: '{}'", rest.trim()))?;
                Ok(Command::View(id))
            }
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Err(anyhow!("Unknown command: '{}'. Type 'help'.", word)),
        }
    }
}

/// Sidebar with the search box, facet sections and the "Clear all" action.
pub fn render_sidebar(state: &ViewState) -> String {
    let search = if state.search_term.is_empty() {
        ui::style_text(SEARCH_PLACEHOLDER, ui::StyleType::Subtle)
    } else {
        state.search_term.clone()
    };
    let mut output = format!("Search: {search}\n\n");

    output.push_str(&ui::style_text("Filters", ui::StyleType::Heading));
    if state.filters.is_active() {
        output.push_str("  ");
        output.push_str(&ui::style_text("Clear all", ui::StyleType::Action));
    }
    output.push('\n');

    for facet in Facet::ALL {
        let expanded = state.expanded == Some(facet);
        let marker = if expanded { "▾" } else { "▸" };
        output.push_str(&format!("{marker} {} ({facet})\n", facet.title()));
        if expanded {
            let selected = state.filters.selected(facet);
            for option in facet.options() {
                let check = if selected.contains(*option) { "x" } else { " " };
                output.push_str(&format!("    [{check}] {option}\n"));
            }
        }
    }
    output
}

fn render<W: Write>(state: &ViewState, nav_currency: &str, output: &mut W) -> Result<()> {
    if state.is_loading() {
        writeln!(output, "Loading mutual funds...")?;
        return Ok(());
    }
    let visible = state.visible();
    writeln!(output, "{}", render_sidebar(state))?;
    writeln!(
        output,
        "{}",
        list::render_funds(&visible, state.funds.len(), nav_currency)
    )?;
    Ok(())
}

/// Runs the command loop until `quit` or end of input and returns the final state.
pub fn run_session<R: BufRead, W: Write>(
    mut state: ViewState,
    input: R,
    output: &mut W,
    nav_currency: &str,
) -> Result<ViewState> {
    writeln!(output, "{}", list::render_header())?;
    render(&state, nav_currency, output)?;

    for line in input.lines() {
        let line = line.context("Failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }

        let event = match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => {
                writeln!(output, "{HELP}")?;
                continue;
            }
            Ok(Command::View(id)) => {
                match state.find(id) {
                    Some(fund) => {
                        info!(?fund, "View details for fund");
                        let name = &fund.fund_name;
                        writeln!(output, "Details for '{name}' are not available yet.")?;
                    }
                    None => writeln!(output, "No fund with id {id}")?,
                }
                continue;
            }
            Ok(Command::Search(text)) => ViewEvent::SearchChanged(text),
            Ok(Command::Toggle(facet, option)) => ViewEvent::FacetToggled { facet, option },
            Ok(Command::Expand(facet)) => ViewEvent::SectionToggled(facet),
            Ok(Command::Clear) => ViewEvent::FiltersCleared,
            Err(e) => {
                let message = ui::style_text(&e.to_string(), ui::StyleType::Error);
                writeln!(output, "{message}")?;
                continue;
            }
        };

        debug!(?event, "Applying event");
        state = state.apply(event);
        render(&state, nav_currency, output)?;
    }

    Ok(state)
}

pub async fn run(repository: &dyn FundRepository, nav_currency: &str) -> Result<()> {
    let pb = ui::new_spinner("Loading mutual funds...");
    let funds = load_funds(repository).await;
    pb.finish_and_clear();

    let state = ViewState::new().apply(ViewEvent::FundsLoaded(funds));
    let input = BufReader::new(std::io::stdin());
    spawn_session(state, input, std::io::stdout(), nav_currency).await?;
    Ok(())
}

/// Runs the session on the blocking pool; reading commands must not park an async worker.
async fn spawn_session<R, W>(
    state: ViewState,
    input: R,
    mut output: W,
    nav_currency: &str,
) -> Result<(ViewState, W)>
where
    R: BufRead + Send + 'static,
    W: Write + Send + 'static,
{
    let nav_currency = nav_currency.to_string();
    tokio::task::spawn_blocking(move || {
        let state = run_session(state, input, &mut output, &nav_currency)?;
        Ok((state, output))
    })
    .await
    .context("Interactive session panicked")?
}
