//! Core fund browsing logic, independent of the terminal UI

pub mod config;
pub mod filter;
pub mod fund;
pub mod log;
pub mod repository;
pub mod state;

// Re-export main types for cleaner imports
pub use filter::{Facet, FilterSelection, SearchQuery, filter_funds};
pub use fund::{FundRecord, Performance, Trend};
pub use repository::{FundRepository, load_funds};
pub use state::{LoadState, ViewEvent, ViewState};
