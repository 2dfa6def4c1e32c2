// src/check.rs
//
// Pagination-aware sortedness check: pull timestamp values off a listing
// page by page until enough are collected, then validate chronological
// order over exactly the first `target` of them.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::driver::PageDriver;
use crate::instant::parse_instant;
use crate::progress::Progress;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn label(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

/// What a check found. `passed()` collapses this to the plain yes/no most
/// callers want; the variants keep "not enough data" distinguishable from
/// "data present but out of order".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckOutcome {
    Sorted,
    /// Fewer than `required` parseable timestamps after exhausting all
    /// pages. Unparseable values count against `collected`.
    InsufficientItems { collected: usize, required: usize },
    /// First adjacent pair out of order; `index` is the later element's
    /// position in the truncated sequence.
    OrderingViolation { index: usize },
    NavigationFailed(String),
    DriverFailed(String),
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, CheckOutcome::Sorted)
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckOutcome::Sorted => write!(f, "sorted"),
            CheckOutcome::InsufficientItems { collected, required } => {
                write!(f, "insufficient items: {collected} of {required}")
            }
            CheckOutcome::OrderingViolation { index } => {
                write!(f, "ordering violation at item {index}")
            }
            CheckOutcome::NavigationFailed(reason) => write!(f, "navigation failed: {reason}"),
            CheckOutcome::DriverFailed(reason) => write!(f, "pagination failed: {reason}"),
        }
    }
}

/// Run the whole check against `source`. The driver is consumed: its
/// session ends when this returns, whatever the outcome.
///
/// A `target` of zero passes without navigating anywhere; there is
/// nothing to compare.
pub fn check<D: PageDriver>(
    mut driver: D,
    source: &str,
    target: usize,
    direction: SortDirection,
    mut progress: Option<&mut dyn Progress>,
) -> CheckOutcome {
    if target == 0 {
        logd!("target count 0, trivially sorted");
        return CheckOutcome::Sorted;
    }

    if let Some(p) = progress.as_deref_mut() {
        p.begin(target);
        p.log(&format!("Navigating to {source}"));
    }
    if let Err(e) = driver.navigate(source) {
        loge!("navigation to {source} failed: {e}");
        if let Some(p) = progress.as_deref_mut() { p.finish(); }
        return CheckOutcome::NavigationFailed(e.to_string());
    }

    let mut raw: Vec<String> = Vec::new();
    let mut page = 1usize;
    loop {
        let mut values = driver.timestamp_values();
        logd!("page {page}: {} timestamp values", values.len());
        raw.append(&mut values);
        if let Some(p) = progress.as_deref_mut() {
            p.page_done(page, raw.len().min(target));
        }

        if raw.len() >= target {
            break;
        }
        if !driver.has_more() {
            logf!("pages exhausted after {page} page(s), {} value(s)", raw.len());
            break;
        }
        if let Err(e) = driver.load_more() {
            loge!("pagination failed on page {page}: {e}");
            if let Some(p) = progress.as_deref_mut() { p.finish(); }
            return CheckOutcome::DriverFailed(e.to_string());
        }
        page += 1;
    }

    if let Some(p) = progress.as_deref_mut() { p.finish(); }
    evaluate(raw, target, direction)
}

/// The driverless tail of the check: truncate to `target`, parse, and
/// validate non-strict monotonicity in collection order.
pub fn evaluate(mut raw: Vec<String>, target: usize, direction: SortDirection) -> CheckOutcome {
    if raw.len() < target {
        logf!("only {} of {target} items collected", raw.len());
        return CheckOutcome::InsufficientItems { collected: raw.len(), required: target };
    }
    raw.truncate(target);

    let instants: Vec<DateTime<Utc>> = raw.iter().filter_map(|v| parse_instant(v)).collect();
    if instants.len() < target {
        loge!("{} of {target} values failed to parse", target - instants.len());
        return CheckOutcome::InsufficientItems { collected: instants.len(), required: target };
    }

    match first_violation(&instants, direction) {
        Some(index) => {
            logf!("order breaks at item {index} ({})", direction.label());
            CheckOutcome::OrderingViolation { index }
        }
        None => CheckOutcome::Sorted,
    }
}

/// Index of the first element breaking non-strict monotonicity, if any.
/// Equal adjacent instants always pass.
fn first_violation(instants: &[DateTime<Utc>], direction: SortDirection) -> Option<usize> {
    instants
        .windows(2)
        .position(|w| match direction {
            SortDirection::Ascending => w[1] < w[0],
            SortDirection::Descending => w[1] > w[0],
        })
        .map(|i| i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| s!(*v)).collect()
    }

    #[test]
    fn evaluate_descending_ok() {
        let raw = seq(&["2024-05-08T03:00:00", "2024-05-08T02:00:00", "2024-05-08T01:00:00"]);
        assert_eq!(evaluate(raw, 3, SortDirection::Descending), CheckOutcome::Sorted);
    }

    #[test]
    fn evaluate_direction_respected() {
        let raw = seq(&["2024-05-08T01:00:00", "2024-05-08T02:00:00"]);
        assert_eq!(evaluate(raw.clone(), 2, SortDirection::Ascending), CheckOutcome::Sorted);
        assert_eq!(
            evaluate(raw, 2, SortDirection::Descending),
            CheckOutcome::OrderingViolation { index: 1 }
        );
    }

    #[test]
    fn evaluate_equal_adjacent_passes_both_directions() {
        let raw = seq(&["2024-05-08T02:00:00", "2024-05-08T02:00:00", "2024-05-08T02:00:00"]);
        assert_eq!(evaluate(raw.clone(), 3, SortDirection::Ascending), CheckOutcome::Sorted);
        assert_eq!(evaluate(raw, 3, SortDirection::Descending), CheckOutcome::Sorted);
    }

    #[test]
    fn evaluate_truncates_before_validating() {
        // Third value is out of order but beyond the target: must not matter.
        let raw = seq(&["2024-05-08T03:00:00", "2024-05-08T02:00:00", "2024-05-08T09:00:00"]);
        assert_eq!(evaluate(raw, 2, SortDirection::Descending), CheckOutcome::Sorted);
    }

    #[test]
    fn evaluate_short_input_is_insufficient() {
        let raw = seq(&["2024-05-08T03:00:00"]);
        assert_eq!(
            evaluate(raw, 2, SortDirection::Descending),
            CheckOutcome::InsufficientItems { collected: 1, required: 2 }
        );
    }

    #[test]
    fn evaluate_parse_failure_degrades_to_insufficiency() {
        let raw = seq(&["2024-05-08T03:00:00", "not-a-date", "2024-05-08T01:00:00"]);
        assert_eq!(
            evaluate(raw, 3, SortDirection::Descending),
            CheckOutcome::InsufficientItems { collected: 2, required: 3 }
        );
    }

    #[test]
    fn violation_reports_first_bad_index() {
        let raw = seq(&[
            "2024-05-08T05:00:00",
            "2024-05-08T04:00:00",
            "2024-05-08T06:00:00", // jumps back up
            "2024-05-08T03:00:00",
        ]);
        assert_eq!(
            evaluate(raw, 4, SortDirection::Descending),
            CheckOutcome::OrderingViolation { index: 2 }
        );
    }

    #[test]
    fn outcome_display_lines() {
        assert_eq!(s!("sorted"), CheckOutcome::Sorted.to_string());
        assert_eq!(
            "insufficient items: 99 of 100",
            CheckOutcome::InsufficientItems { collected: 99, required: 100 }.to_string()
        );
        assert_eq!(
            "ordering violation at item 50",
            CheckOutcome::OrderingViolation { index: 50 }.to_string()
        );
    }
}
