//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod alert_banner;
pub mod chart;
pub mod gauge;
pub mod leaderboard;
pub mod nav;
pub mod report_form;
pub mod report_list;
pub mod stat_card;
pub mod toast;

pub use alert_banner::AlertBanner;
pub use chart::SensorChart;
pub use gauge::SensorCard;
pub use leaderboard::Leaderboard;
pub use nav::Nav;
pub use report_form::ReportForm;
pub use report_list::RecentReports;
pub use stat_card::StatCard;
pub use toast::Toast;
