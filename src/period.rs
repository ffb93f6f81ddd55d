use chrono::{Duration, NaiveDate};

use crate::models::Semester;

/// Reporting period as selected by the caller, before resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodSelector {
    Range { start: NaiveDate, end: NaiveDate },
    Month { year: i32, month: u32 },
    Semester { semester_id: String },
}

/// Concrete inclusive date range with `start <= end` guaranteed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

pub fn active_semester(semesters: &[Semester]) -> Option<&Semester> {
    semesters.iter().find(|s| s.is_active)
}

fn first_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next.map(|d| d - Duration::days(1))
}

/// Resolves a selector against the semester catalog, capping the end at
/// `today` so instances that have not happened yet are never expected.
/// `None` is the degenerate empty period: an inverted range, a month
/// entirely outside the clamping semester, an unknown semester id, or a
/// period that starts after today.
pub fn resolve_period(
    selector: &PeriodSelector,
    semesters: &[Semester],
    today: NaiveDate,
) -> Option<ResolvedPeriod> {
    let (start, end) = match selector {
        PeriodSelector::Range { start, end } => (*start, *end),
        PeriodSelector::Month { year, month } => {
            let start = first_day_of_month(*year, *month)?;
            let end = last_day_of_month(*year, *month)?;
            // Without a resolvable active semester the month stands
            // un-clamped; an inverted intersection stays empty below.
            match active_semester(semesters) {
                Some(semester) => (start.max(semester.start_date), end.min(semester.end_date)),
                None => (start, end),
            }
        }
        PeriodSelector::Semester { semester_id } => {
            let semester = semesters.iter().find(|s| s.id == *semester_id)?;
            (semester.start_date, semester.end_date)
        }
    };

    let end = end.min(today);
    if start > end {
        return None;
    }
    Some(ResolvedPeriod { start, end })
}
