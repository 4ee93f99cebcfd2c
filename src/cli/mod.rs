pub mod browse;
pub mod list;
pub mod setup;
pub mod ui;
