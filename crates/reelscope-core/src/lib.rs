/// ReelScope Core — catalog cleaning, aggregation, and view dispatch.
///
/// This crate contains all business logic with zero UI dependencies.
/// It is designed to be reusable across different frontends (CLI, TUI, web).
///
/// # Modules
///
/// - [`model`] — Raw and cleaned row types and the immutable [`model::Catalog`].
/// - [`loader`] — CSV input boundary (one-time load per session).
/// - [`analysis`] — Pure aggregation queries (top-N, grouped counts, correlation).
/// - [`views`] — The fourteen view identifiers and their dispatch table.
pub mod analysis;
pub mod loader;
pub mod model;
pub mod views;
