//! Browser-Local Persistence
//!
//! Issue reports live entirely in `localStorage`; nothing here talks to the
//! backend. The stored log is the single source of truth for the leaderboard
//! and community stats, which are recomputed from it on every view.

pub mod reports;

pub use reports::{
    load_report_log, save_report_log, CommunityStats, IssueType, LeaderboardEntry,
    LeaderboardPeriod, Report, ReportLog, Severity, RECENT_REPORT_LIMIT,
};
