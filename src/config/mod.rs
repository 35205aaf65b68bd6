//! Configuration module for the forecaster application.

// Can all be private now because we have a public re-export.
mod debug;
mod form;
mod service;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use debug::{DF, LogFlags};
pub use form::{FORM, FormConfig};
pub use plot::{PLOT_CONFIG, PlotConfig};
pub use service::{SERVICE, ServiceConfig};
