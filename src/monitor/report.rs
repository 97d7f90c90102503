//! Summary reports over the rolling history.
//!
//! # Responsibilities
//! - Ping statistics over successful samples
//! - Per-site uptime percentage
//! - Health status distribution
//!
//! # Design Decisions
//! - `Summary` is computed first and rendered separately so the numbers can
//!   be checked without string matching
//! - Pure function of the history snapshot; writing the file is the caller's job

use chrono::{DateTime, Local};
use std::fmt;

use crate::monitor::history::History;
use crate::monitor::types::HealthStatus;

const RULE: &str = "================================================================================";

/// Mean/min/max of average ping across successful samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PingStats {
    pub mean_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
}

/// Count and share of one health class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthShare {
    pub count: usize,
    pub percent: f64,
}

/// Health status distribution; every class is present even at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthDistribution {
    pub good: HealthShare,
    pub warning: HealthShare,
    pub critical: HealthShare,
}

/// Aggregated view of a history snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub samples: usize,
    pub ping: Option<PingStats>,
    pub uptime: Vec<(String, f64)>,
    pub health: Option<HealthDistribution>,
}

impl Summary {
    /// Compute the summary for `sites` over `history`.
    pub fn from_history(history: &History, sites: &[String]) -> Self {
        let total = history.len();
        if total == 0 {
            return Self {
                samples: 0,
                ping: None,
                uptime: Vec::new(),
                health: None,
            };
        }

        let pings: Vec<f64> = history.iter().filter_map(|s| s.ping.avg_ping_ms()).collect();
        let ping = if pings.is_empty() {
            None
        } else {
            let sum: f64 = pings.iter().sum();
            Some(PingStats {
                mean_ms: sum / pings.len() as f64,
                min_ms: pings.iter().copied().fold(f64::INFINITY, f64::min),
                max_ms: pings.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            })
        };

        let uptime = sites
            .iter()
            .map(|site| {
                let up = history.iter().filter(|s| s.site_accessible(site)).count();
                (site.clone(), percent(up, total))
            })
            .collect();

        let (mut good, mut warning, mut critical) = (0, 0, 0);
        for sample in history.iter() {
            match sample.health {
                HealthStatus::Good => good += 1,
                HealthStatus::Warning(_) => warning += 1,
                HealthStatus::Critical(_) => critical += 1,
            }
        }
        let share = |count| HealthShare {
            count,
            percent: percent(count, total),
        };

        Self {
            samples: total,
            ping,
            uptime,
            health: Some(HealthDistribution {
                good: share(good),
                warning: share(warning),
                critical: share(critical),
            }),
        }
    }

    /// Render the plain-text report.
    pub fn render(&self, generated_at: DateTime<Local>) -> String {
        RenderedReport {
            summary: self,
            generated_at,
        }
        .to_string()
    }
}

struct RenderedReport<'a> {
    summary: &'a Summary,
    generated_at: DateTime<Local>,
}

impl fmt::Display for RenderedReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.summary;
        writeln!(f, "{RULE}")?;
        writeln!(
            f,
            "Network Monitoring Report - {}",
            self.generated_at.format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(f, "{RULE}")?;

        let Some(health) = summary.health else {
            return write!(f, "\nNo data available for reporting.");
        };

        writeln!(f, "Samples: {}", summary.samples)?;

        if let Some(ping) = summary.ping {
            writeln!(
                f,
                "\nAverage ping: {:.2} ms (Minimum: {:.2} ms, Maximum: {:.2} ms)",
                ping.mean_ms, ping.min_ms, ping.max_ms
            )?;
        }

        writeln!(f, "\nWebsite access percentage:")?;
        for (site, pct) in &summary.uptime {
            writeln!(f, "{site}: {pct:.2}%")?;
        }

        write!(f, "\nNetwork health status:")?;
        for (label, share) in [
            ("good", health.good),
            ("warning", health.warning),
            ("critical", health.critical),
        ] {
            write!(f, "\n{label}: {} ({:.2}%)", share.count, share.percent)?;
        }
        Ok(())
    }
}

/// Builds summary reports for a fixed set of tracked sites.
#[derive(Debug, Clone)]
pub struct Reporter {
    sites: Vec<String>,
}

impl Reporter {
    pub fn new(sites: Vec<String>) -> Self {
        Self { sites }
    }

    /// Summarize the current history into a rendered report.
    pub fn summarize(&self, history: &History, generated_at: DateTime<Local>) -> String {
        Summary::from_history(history, &self.sites).render(generated_at)
    }
}

fn percent(part: usize, total: usize) -> f64 {
    part as f64 / total as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::types::{PingResult, Sample, SiteCheckResult, TrafficStats};
    use chrono::TimeZone;
    use std::collections::BTreeMap;

    fn at() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
    }

    fn sample(ping: PingResult, site_up: bool, health: HealthStatus) -> Sample {
        let site = if site_up {
            SiteCheckResult::Accessible { status_code: 200, response_time_ms: 42.0 }
        } else {
            SiteCheckResult::Inaccessible { error: "timed out".into() }
        };
        Sample {
            timestamp: at(),
            interfaces: Vec::new(),
            traffic: TrafficStats::default(),
            ping,
            sites: BTreeMap::from([("example.org".to_string(), site)]),
            health,
        }
    }

    fn ok(ms: f64) -> PingResult {
        PingResult::Success { avg_ping_ms: ms, packet_loss_pct: 0.0 }
    }

    fn sites() -> Vec<String> {
        vec!["example.org".to_string()]
    }

    #[test]
    fn test_uptime_percentage() {
        let history = History::from_samples([
            sample(ok(10.0), true, HealthStatus::Good),
            sample(ok(20.0), true, HealthStatus::Good),
            sample(ok(30.0), false, HealthStatus::Good),
            sample(ok(40.0), true, HealthStatus::Good),
        ]);

        let summary = Summary::from_history(&history, &sites());
        assert_eq!(summary.uptime, vec![("example.org".to_string(), 75.0)]);

        let text = Reporter::new(sites()).summarize(&history, at());
        assert!(text.contains("example.org: 75.00%"));
    }

    #[test]
    fn test_ping_stats_skip_failures() {
        let history = History::from_samples([
            sample(ok(10.0), true, HealthStatus::Good),
            sample(PingResult::Failure { error: "no route".into() }, false, HealthStatus::Critical("internet not accessible".into())),
            sample(ok(30.0), true, HealthStatus::Good),
        ]);

        let ping = Summary::from_history(&history, &sites()).ping.unwrap();
        assert_eq!(ping.mean_ms, 20.0);
        assert_eq!(ping.min_ms, 10.0);
        assert_eq!(ping.max_ms, 30.0);
    }

    #[test]
    fn test_ping_section_omitted_without_successes() {
        let history = History::from_samples([sample(
            PingResult::Failure { error: "no route".into() },
            false,
            HealthStatus::Critical("internet not accessible".into()),
        )]);

        let summary = Summary::from_history(&history, &sites());
        assert!(summary.ping.is_none());
        assert!(!summary.render(at()).contains("Average ping"));
    }

    #[test]
    fn test_health_distribution_includes_zero_classes() {
        let history = History::from_samples([
            sample(ok(10.0), true, HealthStatus::Good),
            sample(ok(120.0), true, HealthStatus::Warning("high latency: 120.00 ms".into())),
            sample(ok(15.0), true, HealthStatus::Good),
        ]);

        let summary = Summary::from_history(&history, &sites());
        let health = summary.health.unwrap();
        assert_eq!(health.good.count, 2);
        assert_eq!(health.warning.count, 1);
        assert_eq!(health.critical.count, 0);

        let sum = health.good.percent + health.warning.percent + health.critical.percent;
        assert!((sum - 100.0).abs() < 1e-9);

        let text = summary.render(at());
        assert!(text.contains("critical: 0 (0.00%)"));
        assert!(text.contains("good: 2 (66.67%)"));
        assert!(text.ends_with("critical: 0 (0.00%)"));
    }

    #[test]
    fn test_empty_history_reports_no_data() {
        let text = Reporter::new(sites()).summarize(&History::new(), at());
        assert!(text.contains("No data available for reporting."));
        assert!(!text.contains('%'));
    }

    #[test]
    fn test_untracked_site_counts_as_down() {
        let history = History::from_samples([sample(ok(10.0), true, HealthStatus::Good)]);
        let summary = Summary::from_history(&history, &["missing.example".to_string()]);
        assert_eq!(summary.uptime[0].1, 0.0);
    }
}
