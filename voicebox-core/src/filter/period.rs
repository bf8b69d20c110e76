//! Range Filter — named-period record selection.
//!
//! Resolves a [`Period`] to an inclusive `[start, end]` date window computed
//! fresh from an injected "today" (a logical clock, so tests are
//! deterministic), then selects the records whose timestamp date falls in the
//! window.
//!
//! ## Matching rules
//!
//! - [`Period::AllTime`] performs no date comparison at all: every record
//!   matches, including records with a missing or unparseable timestamp.
//! - Every other period matches a record iff its parsed timestamp date lies
//!   within the inclusive window. Records without a parsed timestamp never
//!   match a bounded period.
//!
//! Input records are never mutated; the matched subset is an owned copy.

use chrono::{Datelike, Days, NaiveDate};
use log::info;
use voicebox_types::{Period, Record};

/// Result of one period-filter application: the selector label and the
/// matched subset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodSelection {
    /// `"name (count)"`, e.g. `"前月 (2)"` or `"全て (120)"`.
    pub label: String,
    /// Records whose timestamp matched the window, in input order.
    pub records: Vec<Record>,
}

/// First day of the month `date` belongs to.
#[inline]
fn month_start(date: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month, so the fallback never fires.
    date.with_day(1).unwrap_or(date)
}

/// January 1st of `year`.
#[inline]
fn year_start(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Resolves a period to its inclusive `[start, end]` date window.
///
/// Returns `None` for [`Period::AllTime`], which performs no date
/// comparison. Windows are computed from `today` at call time and never
/// persisted.
#[must_use]
pub fn period_window(period: Period, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    match period {
        Period::AllTime => None,
        Period::CurrentMonth => Some((month_start(today), today)),
        Period::PreviousMonth => {
            let end = month_start(today)
                .pred_opt()
                .unwrap_or(NaiveDate::MIN);
            Some((month_start(end), end))
        }
        Period::Last90Days => Some((
            today.checked_sub_days(Days::new(90)).unwrap_or(NaiveDate::MIN),
            today,
        )),
        Period::Last180Days => Some((
            today.checked_sub_days(Days::new(180)).unwrap_or(NaiveDate::MIN),
            today,
        )),
        Period::YearToDate => Some((year_start(today.year()), today)),
        Period::PreviousYear => {
            let year = today.year() - 1;
            Some((
                year_start(year),
                NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(NaiveDate::MIN),
            ))
        }
    }
}

/// Selects the subset of `records` matching `period`, with its label.
///
/// Depends only on `period`, `records` and `today`; input records are not
/// mutated.
#[must_use]
pub fn filter_by_period(period: Period, records: &[Record], today: NaiveDate) -> PeriodSelection {
    let Some((start, end)) = period_window(period, today) else {
        info!("period {}: all {} records", period, records.len());
        return PeriodSelection {
            label: format!("{} ({})", period.name(), records.len()),
            records: records.to_vec(),
        };
    };

    let matched: Vec<Record> = records
        .iter()
        .filter(|r| {
            r.received_date()
                .is_some_and(|date| start <= date && date <= end)
        })
        .cloned()
        .collect();

    info!(
        "period {} [{start}..={end}]: {} of {} records",
        period,
        matched.len(),
        records.len()
    );

    PeriodSelection {
        label: format!("{} ({})", period.name(), matched.len()),
        records: matched,
    }
}

/// Selector labels for every period, in presentation order.
///
/// Mirrors the period select box: each label carries the count the period
/// would match right now.
#[must_use]
pub fn period_labels(records: &[Record], today: NaiveDate) -> Vec<String> {
    Period::ALL
        .iter()
        .map(|&period| filter_by_period(period, records, today).label)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(timestamp: &str) -> Record {
        Record::from_row(timestamp, Some("関東"), "渋谷店", Some("広い"))
    }

    const TODAY: (i32, u32, u32) = (2026, 3, 14);

    fn today() -> NaiveDate {
        day(TODAY.0, TODAY.1, TODAY.2)
    }

    #[test]
    fn current_month_window() {
        assert_eq!(
            period_window(Period::CurrentMonth, today()),
            Some((day(2026, 3, 1), day(2026, 3, 14)))
        );
    }

    #[test]
    fn previous_month_window() {
        assert_eq!(
            period_window(Period::PreviousMonth, today()),
            Some((day(2026, 2, 1), day(2026, 2, 28)))
        );
    }

    #[test]
    fn previous_month_window_across_year_boundary() {
        assert_eq!(
            period_window(Period::PreviousMonth, day(2026, 1, 10)),
            Some((day(2025, 12, 1), day(2025, 12, 31)))
        );
    }

    #[test]
    fn rolling_windows() {
        assert_eq!(
            period_window(Period::Last90Days, today()),
            Some((day(2025, 12, 14), day(2026, 3, 14)))
        );
        assert_eq!(
            period_window(Period::Last180Days, today()),
            Some((day(2025, 9, 15), day(2026, 3, 14)))
        );
    }

    #[test]
    fn year_windows() {
        assert_eq!(
            period_window(Period::YearToDate, today()),
            Some((day(2026, 1, 1), day(2026, 3, 14)))
        );
        assert_eq!(
            period_window(Period::PreviousYear, today()),
            Some((day(2025, 1, 1), day(2025, 12, 31)))
        );
    }

    #[test]
    fn all_time_has_no_window() {
        assert_eq!(period_window(Period::AllTime, today()), None);
    }

    #[test]
    fn previous_month_scenario() {
        // Two records from last month, one from two months ago.
        let records = vec![
            record("2026-02-03 10:00:00"),
            record("2026-02-20 18:30:00"),
            record("2026-01-15 09:00:00"),
        ];

        let selection = filter_by_period(Period::PreviousMonth, &records, today());
        assert_eq!(selection.label, "前月 (2)");
        assert_eq!(selection.records.len(), 2);
        assert_eq!(selection.records[0], records[0]);
        assert_eq!(selection.records[1], records[1]);
    }

    #[test]
    fn bounds_are_inclusive() {
        let records = vec![
            record("2026-03-01 00:00:00"),
            record("2026-03-14 23:59:59"),
            record("2026-02-28 23:59:59"),
        ];

        let selection = filter_by_period(Period::CurrentMonth, &records, today());
        assert_eq!(selection.records.len(), 2);
    }

    #[test]
    fn unparseable_timestamp_never_matches_bounded_period() {
        let records = vec![record("2026-03-10 12:00:00"), record("not a date")];

        for period in Period::ALL {
            let selection = filter_by_period(period, &records, today());
            if period == Period::AllTime {
                assert_eq!(selection.records.len(), 2);
            } else {
                assert!(selection
                    .records
                    .iter()
                    .all(|r| r.received_at.is_some()));
            }
        }
    }

    #[test]
    fn all_time_counts_every_record() {
        let records = vec![
            record("2026-03-10 12:00:00"),
            record(""),
            record("1999-01-01 00:00:00"),
        ];

        let selection = filter_by_period(Period::AllTime, &records, today());
        assert_eq!(selection.label, "全て (3)");
        assert_eq!(selection.records, records);
    }

    #[test]
    fn matched_subset_is_subset_of_input() {
        let records = vec![
            record("2026-03-10 12:00:00"),
            record("2025-06-01 08:00:00"),
            record("2024-11-20 19:00:00"),
        ];

        for period in Period::ALL {
            let selection = filter_by_period(period, &records, today());
            for matched in &selection.records {
                assert!(records.contains(matched));
            }
        }
    }

    #[test]
    fn label_carries_period_name_and_count() {
        let records = vec![record("2026-03-10 12:00:00")];
        let selection = filter_by_period(Period::CurrentMonth, &records, today());
        assert_eq!(selection.label, "当月 (1)");
    }

    #[test]
    fn labels_follow_selector_order() {
        let records = vec![record("2026-03-10 12:00:00")];
        let labels = period_labels(&records, today());
        assert_eq!(labels.len(), 7);
        assert_eq!(labels[0], "当月 (1)");
        assert_eq!(labels[6], "全て (1)");
    }

    #[test]
    fn filtering_is_deterministic() {
        let records = vec![
            record("2026-03-10 12:00:00"),
            record("2026-02-01 12:00:00"),
        ];

        let first = filter_by_period(Period::Last90Days, &records, today());
        let second = filter_by_period(Period::Last90Days, &records, today());
        assert_eq!(first, second);
    }
}
