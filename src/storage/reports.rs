//! Issue Report Log
//!
//! The report form appends to an ordered log persisted under one
//! `localStorage` key, newest first. Leaderboard standings and community
//! stats are pure functions of that log: points are derived from each
//! report's severity at aggregation time, never stored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// `localStorage` key holding the serialized report log.
pub const REPORTS_STORAGE_KEY: &str = "leaksense_reports";

/// How many reports the "recent" list shows.
pub const RECENT_REPORT_LIMIT: usize = 10;

/// Category a report is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueType {
    Leak,
    Pressure,
    Moisture,
    Acoustic,
    Sensor,
    #[default]
    #[serde(other)]
    Other,
}

impl IssueType {
    pub const ALL: [IssueType; 6] = [
        IssueType::Leak,
        IssueType::Pressure,
        IssueType::Moisture,
        IssueType::Acoustic,
        IssueType::Sensor,
        IssueType::Other,
    ];

    /// Form option value.
    pub fn value(&self) -> &'static str {
        match self {
            IssueType::Leak => "leak",
            IssueType::Pressure => "pressure",
            IssueType::Moisture => "moisture",
            IssueType::Acoustic => "acoustic",
            IssueType::Sensor => "sensor",
            IssueType::Other => "other",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            IssueType::Leak => "💧 Water Leak",
            IssueType::Pressure => "⚡ Abnormal Pressure",
            IssueType::Moisture => "💦 High Moisture",
            IssueType::Acoustic => "🔊 Unusual Sound",
            IssueType::Sensor => "🔧 Sensor Issue",
            IssueType::Other => "❓ Other",
        }
    }

    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.value() == value)
            .unwrap_or(IssueType::Other)
    }
}

/// Reporter-assessed severity. Unrecognized stored values parse as
/// [`Severity::Unknown`] and score the baseline points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    /// Form option value.
    pub fn value(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
            Severity::Unknown => "unknown",
        }
    }

    /// Form option label.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
            Severity::Unknown => "Unknown",
        }
    }

    /// Leaderboard points awarded per report of this severity.
    pub fn points(&self) -> u32 {
        match self {
            Severity::Low => 10,
            Severity::Medium => 25,
            Severity::High => 50,
            Severity::Critical => 100,
            Severity::Unknown => 10,
        }
    }

    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.value() == value)
            .unwrap_or(Severity::Unknown)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "LOW"),
            Severity::Medium => write!(f, "MEDIUM"),
            Severity::High => write!(f, "HIGH"),
            Severity::Critical => write!(f, "CRITICAL"),
            Severity::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// One submitted issue report. Stored as-is; there is no edit or delete
/// path, so reports are immutable once logged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Report {
    pub issue_type: IssueType,
    pub location: String,
    pub severity: Severity,
    pub description: String,
    pub reporter_name: String,
    pub reporter_contact: String,
    /// ISO-8601 submission time, generated client-side.
    pub timestamp: String,
}

/// Leaderboard window selector. Standings currently always cover the full
/// log; the selector is kept on the page but does not narrow the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeaderboardPeriod {
    Week,
    #[default]
    Month,
    All,
}

impl LeaderboardPeriod {
    pub const ALL: [LeaderboardPeriod; 3] = [
        LeaderboardPeriod::Week,
        LeaderboardPeriod::Month,
        LeaderboardPeriod::All,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            LeaderboardPeriod::Week => "week",
            LeaderboardPeriod::Month => "month",
            LeaderboardPeriod::All => "all",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeaderboardPeriod::Week => "This Week",
            LeaderboardPeriod::Month => "This Month",
            LeaderboardPeriod::All => "All Time",
        }
    }

    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|p| p.value() == value)
            .unwrap_or_default()
    }
}

/// One row of the standings table, ranked from 1.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub name: String,
    pub reports: usize,
    pub points: u32,
}

impl LeaderboardEntry {
    /// Medal badge for podium ranks.
    pub fn badge(&self) -> Option<&'static str> {
        match self.rank {
            1 => Some("gold"),
            2 => Some("silver"),
            3 => Some("bronze"),
            _ => None,
        }
    }
}

/// Headline numbers shown above the standings table.
#[derive(Debug, Clone, PartialEq)]
pub struct CommunityStats {
    pub total_reports: usize,
    pub fastest_response: &'static str,
    pub issues_resolved: usize,
}

/// The persisted report log, newest first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportLog {
    reports: Vec<Report>,
}

impl ReportLog {
    /// Parse a stored log. Anything unreadable yields an empty log rather
    /// than an error; the next submission starts a fresh one.
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Prepend a new report so the log stays reverse-chronological.
    pub fn submit(&mut self, report: Report) {
        self.reports.insert(0, report);
    }

    /// The most recent reports in stored order, at most `limit`.
    pub fn recent(&self, limit: usize) -> &[Report] {
        &self.reports[..self.reports.len().min(limit)]
    }

    /// Per-reporter standings, severity-weighted and sorted by points
    /// descending. Ties keep first-seen (most recently active) order.
    pub fn leaderboard(&self, _period: LeaderboardPeriod) -> Vec<LeaderboardEntry> {
        let mut entries: Vec<LeaderboardEntry> = Vec::new();

        for report in &self.reports {
            match entries.iter_mut().find(|e| e.name == report.reporter_name) {
                Some(entry) => {
                    entry.reports += 1;
                    entry.points += report.severity.points();
                }
                None => entries.push(LeaderboardEntry {
                    rank: 0,
                    name: report.reporter_name.clone(),
                    reports: 1,
                    points: report.severity.points(),
                }),
            }
        }

        entries.sort_by(|a, b| b.points.cmp(&a.points));
        for (i, entry) in entries.iter_mut().enumerate() {
            entry.rank = i + 1;
        }
        entries
    }

    pub fn community_stats(&self) -> CommunityStats {
        let total = self.reports.len();
        CommunityStats {
            total_reports: total,
            fastest_response: if total > 0 { "< 5 min" } else { "--" },
            issues_resolved: total * 4 / 5,
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load the report log from `localStorage`, empty when absent or unreadable.
pub fn load_report_log() -> ReportLog {
    local_storage()
        .and_then(|s| s.get_item(REPORTS_STORAGE_KEY).ok().flatten())
        .map(|raw| ReportLog::from_json(&raw))
        .unwrap_or_default()
}

/// Persist the report log. Storage failures (quota, private browsing) are
/// ignored; the in-memory log still drives the current session.
pub fn save_report_log(log: &ReportLog) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(REPORTS_STORAGE_KEY, &log.to_json());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(name: &str, severity: Severity) -> Report {
        Report {
            issue_type: IssueType::Leak,
            location: "Basement".to_string(),
            severity,
            description: "Standing water near the main line".to_string(),
            reporter_name: name.to_string(),
            reporter_contact: String::new(),
            timestamp: "2026-08-25T10:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_severity_points_are_weighted() {
        assert_eq!(Severity::Low.points(), 10);
        assert_eq!(Severity::Medium.points(), 25);
        assert_eq!(Severity::High.points(), 50);
        assert_eq!(Severity::Critical.points(), 100);
        assert_eq!(Severity::Unknown.points(), 10);
    }

    #[test]
    fn test_unrecognized_severity_parses_as_unknown() {
        let raw = r#"[{"severity":"severe","reporterName":"Ada"}]"#;
        let log = ReportLog::from_json(raw);

        assert_eq!(log.len(), 1);
        assert_eq!(log.recent(10)[0].severity, Severity::Unknown);
        assert_eq!(log.recent(10)[0].issue_type, IssueType::Other);
    }

    #[test]
    fn test_submit_prepends() {
        let mut log = ReportLog::default();
        log.submit(report("Ada", Severity::Low));
        log.submit(report("Grace", Severity::High));

        assert_eq!(log.recent(10)[0].reporter_name, "Grace");
        assert_eq!(log.recent(10)[1].reporter_name, "Ada");
    }

    #[test]
    fn test_recent_caps_at_limit() {
        let mut log = ReportLog::default();
        for i in 0..25 {
            log.submit(report(&format!("user{i}"), Severity::Low));
        }

        let recent = log.recent(RECENT_REPORT_LIMIT);
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0].reporter_name, "user24");

        let small = ReportLog::from_json(r#"[{"reporterName":"Ada"}]"#);
        assert_eq!(small.recent(RECENT_REPORT_LIMIT).len(), 1);
    }

    #[test]
    fn test_leaderboard_sums_severity_points() {
        let mut log = ReportLog::default();
        log.submit(report("Ada", Severity::Low));
        log.submit(report("Ada", Severity::Critical));

        let standings = log.leaderboard(LeaderboardPeriod::Month);
        assert_eq!(standings.len(), 1);
        assert_eq!(standings[0].name, "Ada");
        assert_eq!(standings[0].reports, 2);
        assert_eq!(standings[0].points, 110);
    }

    #[test]
    fn test_leaderboard_ranks_by_points_descending() {
        let mut log = ReportLog::default();
        log.submit(report("Ada", Severity::Low));
        log.submit(report("Grace", Severity::Critical));
        log.submit(report("Edsger", Severity::Medium));

        let standings = log.leaderboard(LeaderboardPeriod::Month);
        let names: Vec<&str> = standings.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Grace", "Edsger", "Ada"]);
        assert_eq!(standings[0].rank, 1);
        assert_eq!(standings[2].rank, 3);
    }

    #[test]
    fn test_leaderboard_ties_keep_first_seen_order() {
        let mut log = ReportLog::default();
        log.submit(report("Ada", Severity::Low));
        log.submit(report("Grace", Severity::Low));

        // Grace was submitted last, so she appears first in the stored log.
        let standings = log.leaderboard(LeaderboardPeriod::All);
        assert_eq!(standings[0].name, "Grace");
        assert_eq!(standings[1].name, "Ada");
    }

    #[test]
    fn test_period_does_not_filter() {
        let mut log = ReportLog::default();
        log.submit(report("Ada", Severity::High));
        log.submit(report("Grace", Severity::Low));

        assert_eq!(
            log.leaderboard(LeaderboardPeriod::Week),
            log.leaderboard(LeaderboardPeriod::All)
        );
    }

    #[test]
    fn test_podium_badges() {
        let mut log = ReportLog::default();
        log.submit(report("Ada", Severity::Critical));
        log.submit(report("Grace", Severity::High));
        log.submit(report("Edsger", Severity::Medium));
        log.submit(report("Barbara", Severity::Low));

        let standings = log.leaderboard(LeaderboardPeriod::Month);
        assert_eq!(standings[0].badge(), Some("gold"));
        assert_eq!(standings[1].badge(), Some("silver"));
        assert_eq!(standings[2].badge(), Some("bronze"));
        assert_eq!(standings[3].badge(), None);
    }

    #[test]
    fn test_community_stats_derive_from_log_size() {
        let empty = ReportLog::default();
        let stats = empty.community_stats();
        assert_eq!(stats.total_reports, 0);
        assert_eq!(stats.fastest_response, "--");
        assert_eq!(stats.issues_resolved, 0);

        let mut log = ReportLog::default();
        for _ in 0..7 {
            log.submit(report("Ada", Severity::Low));
        }
        let stats = log.community_stats();
        assert_eq!(stats.total_reports, 7);
        assert_eq!(stats.fastest_response, "< 5 min");
        assert_eq!(stats.issues_resolved, 5);
    }

    #[test]
    fn test_log_serializes_camel_case() {
        let mut log = ReportLog::default();
        log.submit(report("Ada", Severity::Low));

        let json = log.to_json();
        assert!(json.contains("\"issueType\":\"leak\""));
        assert!(json.contains("\"reporterName\":\"Ada\""));
        assert!(json.contains("\"reporterContact\":\"\""));

        assert_eq!(ReportLog::from_json(&json), log);
    }

    #[test]
    fn test_unreadable_log_yields_empty() {
        assert!(ReportLog::from_json("not json").is_empty());
        assert!(ReportLog::from_json("{\"oops\":1}").is_empty());
        assert!(ReportLog::from_json("[]").is_empty());
    }

    #[test]
    fn test_form_values_round_trip() {
        for issue in IssueType::ALL {
            assert_eq!(IssueType::from_value(issue.value()), issue);
        }
        for severity in Severity::ALL {
            assert_eq!(Severity::from_value(severity.value()), severity);
        }
        for period in LeaderboardPeriod::ALL {
            assert_eq!(LeaderboardPeriod::from_value(period.value()), period);
        }
        assert_eq!(IssueType::from_value("flood"), IssueType::Other);
        assert_eq!(Severity::from_value(""), Severity::Unknown);
        assert_eq!(LeaderboardPeriod::from_value("year"), LeaderboardPeriod::Month);
    }
}
