//! Pages
//!
//! Top-level page components for each route.

pub mod community;
pub mod dashboard;
pub mod report;
pub mod settings;

pub use community::Community;
pub use dashboard::Dashboard;
pub use report::Report;
pub use settings::Settings;
