use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use rand::Rng;

use super::{generate_point_queries, range_from_ratios, RangeQuery, WorkloadError};
use crate::{ScanStats, ZoneMap};

/// Named benchmark routine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// Every value plus out-of-range keys, as point queries
    PointQueries,
    /// Range over 10%..20% of the key span
    Range1,
    /// Range over 30%..40% of the key span
    Range2,
    /// Range over 50%..60% of the key span
    Range3,
    /// Range over 70%..80% of the key span
    Range4,
}

impl Scenario {
    /// All scenarios in CLI order.
    pub const ALL: [Scenario; 5] = [
        Scenario::PointQueries,
        Scenario::Range1,
        Scenario::Range2,
        Scenario::Range3,
        Scenario::Range4,
    ];

    /// Command-line name.
    pub fn name(self) -> &'static str {
        match self {
            Scenario::PointQueries => "test_pq",
            Scenario::Range1 => "test_rq_1",
            Scenario::Range2 => "test_rq_2",
            Scenario::Range3 => "test_rq_3",
            Scenario::Range4 => "test_rq_4",
        }
    }

    /// Span ratios for range scenarios, `None` for point queries.
    pub fn ratios(self) -> Option<(f64, f64)> {
        match self {
            Scenario::PointQueries => None,
            Scenario::Range1 => Some((0.1, 0.2)),
            Scenario::Range2 => Some((0.3, 0.4)),
            Scenario::Range3 => Some((0.5, 0.6)),
            Scenario::Range4 => Some((0.7, 0.8)),
        }
    }

    /// 1-based range query number used in reports.
    fn range_number(self) -> Option<usize> {
        match self {
            Scenario::PointQueries => None,
            Scenario::Range1 => Some(1),
            Scenario::Range2 => Some(2),
            Scenario::Range3 => Some(3),
            Scenario::Range4 => Some(4),
        }
    }
}

impl FromStr for Scenario {
    type Err = WorkloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.name() == s)
            .ok_or_else(|| WorkloadError::UnknownScenario(s.to_string()))
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a scenario produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioOutcome {
    /// Point workload results
    Point {
        /// Keys queried
        queries: usize,
        /// Keys found
        hits: usize,
    },
    /// Range workload results
    Range {
        /// Range that was queried
        range: RangeQuery,
        /// Elements returned
        returned: usize,
    },
}

/// Timing and pruning summary for one scenario run
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    /// Scenario that ran
    pub scenario: Scenario,
    /// Workload size and results
    pub outcome: ScenarioOutcome,
    /// Wall time of the query loop alone
    pub elapsed: Duration,
    /// Aggregate pruning counts, when requested
    pub stats: Option<ScanStats>,
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let micros = self.elapsed.as_micros();
        match self.scenario.range_number() {
            None => writeln!(
                f,
                "Time taken to perform point queries from zonemap = {} microseconds",
                micros
            )?,
            Some(k) => writeln!(
                f,
                "Time taken to perform range query {} from zonemap = {} microseconds",
                k, micros
            )?,
        }

        match &self.outcome {
            ScenarioOutcome::Point { queries, hits } => {
                writeln!(f, "  queries={}\thits={}", queries, hits)?
            }
            ScenarioOutcome::Range { range, returned } => writeln!(
                f,
                "  range=[{}, {})\treturned={}",
                range.start, range.end, returned
            )?,
        }

        if let Some(stats) = &self.stats {
            writeln!(f, "  {}", stats)?;
        }
        Ok(())
    }
}

/// Generate the scenario's workload and time its queries against `map`.
///
/// `data` is the input the map was built from. With `explain`, each query
/// is replayed outside the timed loop to collect pruning counts.
pub fn run_scenario<R: Rng + ?Sized>(
    map: &ZoneMap<i32>,
    data: &[i32],
    scenario: Scenario,
    explain: bool,
    rng: &mut R,
) -> Result<ScenarioReport, WorkloadError> {
    let _span = tracing::info_span!("run_scenario", scenario = scenario.name()).entered();

    let report = match scenario.ratios() {
        None => {
            let queries = generate_point_queries(data, rng);

            let start = Instant::now();
            let hits = queries.iter().filter(|key| map.query_point(key)).count();
            let elapsed = start.elapsed();

            let stats = explain.then(|| {
                let mut total = ScanStats::default();
                for key in &queries {
                    total.accumulate(&map.explain_point(key));
                }
                total
            });

            ScenarioReport {
                scenario,
                outcome: ScenarioOutcome::Point {
                    queries: queries.len(),
                    hits,
                },
                elapsed,
                stats,
            }
        }
        Some((start_ratio, end_ratio)) => {
            let range = range_from_ratios(data, start_ratio, end_ratio)?;

            let start = Instant::now();
            let result = map.query_range(&range.start, &range.end);
            let elapsed = start.elapsed();

            let stats = explain.then(|| map.explain_range(&range.start, &range.end));

            ScenarioReport {
                scenario,
                outcome: ScenarioOutcome::Range {
                    range,
                    returned: result.len(),
                },
                elapsed,
                stats,
            }
        }
    };

    tracing::info!(
        elapsed_us = report.elapsed.as_micros() as u64,
        "scenario complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn names_round_trip_through_from_str() {
        for scenario in Scenario::ALL {
            assert_eq!(scenario.name().parse::<Scenario>().unwrap(), scenario);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "test_rq_5".parse::<Scenario>().unwrap_err();
        assert!(matches!(err, WorkloadError::UnknownScenario(name) if name == "test_rq_5"));
    }

    #[test]
    fn point_scenario_finds_every_present_key() {
        let data: Vec<i32> = (0..200).rev().collect();
        let map = ZoneMap::new(data.clone(), 10).unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        let report = run_scenario(&map, &data, Scenario::PointQueries, true, &mut rng).unwrap();
        assert_eq!(
            report.outcome,
            ScenarioOutcome::Point {
                queries: 220,
                hits: 200
            }
        );
        let stats = report.stats.unwrap();
        assert_eq!(stats.matches, 200);
        assert_eq!(stats.zones_total, 220 * 20);
    }

    #[test]
    fn range_scenario_reports_header() {
        let data: Vec<i32> = (0..=100).collect();
        let map = ZoneMap::new(data.clone(), 10).unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        let report = run_scenario(&map, &data, Scenario::Range2, false, &mut rng).unwrap();
        assert_eq!(
            report.outcome,
            ScenarioOutcome::Range {
                range: RangeQuery { start: 30, end: 40 },
                returned: 10
            }
        );
        assert!(report.stats.is_none());

        let text = report.to_string();
        assert!(text.starts_with("Time taken to perform range query 2 from zonemap = "));
        assert!(text.contains("range=[30, 40)"));
    }
}
