use super::ui;
use crate::core::{Facet, FundRecord, FundRepository, ViewEvent, ViewState, load_funds};
use anyhow::{Context, Result};
use comfy_table::Cell;
use std::collections::BTreeSet;
use std::io::Write;

const PAGE_TITLE: &str = "Bazaar Mutual Funds";
const PAGE_SUBTITLE: &str = concat!(
    "Explore and compare mutual funds from Pakistan's leading asset managers. ",
    "Find the right investment option for your financial goals."
);

/// Search and facet options for a one-shot listing.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub search: Option<String>,
    pub shariah: Vec<String>,
    pub risk: Vec<String>,
    pub fund_type: Vec<String>,
    pub json: bool,
}

impl ListOptions {
    /// Events that bring a freshly loaded view to these options. Repeated facet values
    /// are selected once.
    pub fn events(&self) -> Vec<ViewEvent> {
        let mut events = Vec::new();
        if let Some(search) = &self.search {
            events.push(ViewEvent::SearchChanged(search.clone()));
        }
        for (facet, values) in [
            (Facet::Shariah, &self.shariah),
            (Facet::RiskProfile, &self.risk),
            (Facet::FundType, &self.fund_type),
        ] {
            let unique: BTreeSet<&String> = values.iter().collect();
            events.extend(unique.into_iter().map(|option| ViewEvent::FacetToggled {
                facet,
                option: option.clone(),
            }));
        }
        events
    }
}

/// Page title and tagline, printed once above the fund listing.
pub fn render_header() -> String {
    format!(
        "{}\n{}\n",
        ui::style_text(PAGE_TITLE, ui::StyleType::Title),
        ui::style_text(PAGE_SUBTITLE, ui::StyleType::Subtle)
    )
}

/// Renders the visible funds as a table, or the empty notice.
pub fn render_funds(funds: &[&FundRecord], total: usize, nav_currency: &str) -> String {
    if funds.is_empty() {
        let hint = "Try adjusting your search or filters";
        return format!(
            "{}\n{}",
            ui::style_text("No funds found", ui::StyleType::Heading),
            ui::style_text(hint, ui::StyleType::Subtle)
        );
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("ID"),
        ui::header_cell("Fund"),
        ui::header_cell("Manager"),
        ui::header_cell("Shariah"),
        ui::header_cell("Risk"),
        ui::header_cell("Category"),
        ui::header_cell("NAV"),
        ui::header_cell("AUM"),
        ui::header_cell("Fund Type"),
        ui::header_cell("1-Year"),
        ui::header_cell("3-Year"),
        ui::header_cell("5-Year"),
    ]);

    for fund in funds {
        let mut row = vec![
            Cell::new(fund.id),
            Cell::new(&fund.fund_name),
            Cell::new(&fund.manager),
            ui::shariah_cell(&fund.shariah),
            ui::risk_cell(&fund.risk_profile),
            Cell::new(&fund.category),
            Cell::new(format!("{nav_currency} {:.2}", fund.nav)),
            Cell::new(&fund.aum),
            Cell::new(&fund.fund_type),
        ];
        for (_, value) in fund.performance.periods() {
            row.push(ui::performance_cell(value));
        }
        table.add_row(row);
    }

    format!(
        "{}  {}\n\n{}",
        ui::style_text("Available Funds", ui::StyleType::Title),
        ui::style_text(
            &format!("Showing {} of {}", funds.len(), total),
            ui::StyleType::Count
        ),
        table
    )
}

/// Loads the funds, applies `options` and writes the result to `output`.
pub async fn run<W: Write>(
    repository: &dyn FundRepository,
    options: &ListOptions,
    nav_currency: &str,
    output: &mut W,
) -> Result<()> {
    let pb = ui::new_spinner("Loading mutual funds...");
    let funds = load_funds(repository).await;
    pb.finish_and_clear();

    let loaded = ViewState::new().apply(ViewEvent::FundsLoaded(funds));
    let state = options.events().into_iter().fold(loaded, ViewState::apply);
    let visible = state.visible();

    if options.json {
        let json =
            serde_json::to_string_pretty(&visible).context("Failed to serialize fund list")?;
        writeln!(output, "{json}")?;
    } else {
        let table = render_funds(&visible, state.funds.len(), nav_currency);
        writeln!(output, "{}", render_header())?;
        writeln!(output, "{table}")?;
    }
    Ok(())
}
