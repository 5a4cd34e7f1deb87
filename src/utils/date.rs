use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, NaiveDateTime};

pub const DATE_FMT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FMT).ok()
}

pub fn format_date(d: NaiveDate) -> String {
    d.format(DATE_FMT).to_string()
}

/// Parse a mandatory CLI date argument.
pub fn require_date(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Bring stored date text to `YYYY-MM-DD`.
///
/// Accepts plain dates, `YYYY/MM/DD` and datetime text such as
/// `2024-01-10 00:00:00` or `2024-01-10T00:00:00`. Text that cannot be
/// understood is returned trimmed but otherwise unchanged.
pub fn normalize_date_text(raw: &str) -> String {
    let s = raw.trim();

    if let Some(d) = parse_date(s) {
        return format_date(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y/%m/%d") {
        return format_date(d);
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return format_date(dt.date());
        }
    }

    s.to_string()
}

/// Resolve a period expression to inclusive bounds.
///
/// Supports:
/// - `YYYY`
/// - `YYYY-MM`
/// - `YYYY-MM-DD`
/// - `A:B` with the same granularity on both sides
///
/// `all` (any case) means no bounds.
pub fn parse_period(p: &str) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    let p = p.trim();
    if p.eq_ignore_ascii_case("all") {
        return Ok(None);
    }

    if let Some((start_raw, end_raw)) = p.split_once(':') {
        let (start, end) = (start_raw.trim(), end_raw.trim());
        if start.len() != end.len() {
            return Err(AppError::InvalidPeriod(format!(
                "{p}: start and end must have same format"
            )));
        }
        let (from, _) = single_bounds(start).ok_or_else(|| AppError::InvalidPeriod(p.into()))?;
        let (_, to) = single_bounds(end).ok_or_else(|| AppError::InvalidPeriod(p.into()))?;
        if to < from {
            return Err(AppError::InvalidPeriod(format!("{p}: end before start")));
        }
        return Ok(Some((from, to)));
    }

    single_bounds(p)
        .map(Some)
        .ok_or_else(|| AppError::InvalidPeriod(p.to_string()))
}

fn single_bounds(p: &str) -> Option<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().ok()?;
            Some((
                NaiveDate::from_ymd_opt(y, 1, 1)?,
                NaiveDate::from_ymd_opt(y, 12, 31)?,
            ))
        }
        // YYYY-MM
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{p}-01"), DATE_FMT).ok()?;
            Some((first, last_day_of_month(first)?))
        }
        // YYYY-MM-DD
        10 => parse_date(p).map(|d| (d, d)),
        _ => None,
    }
}

fn last_day_of_month(first: NaiveDate) -> Option<NaiveDate> {
    let (y, m) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)?.pred_opt()
}

/// Current month bounds, the default period for listings.
pub fn current_month() -> AppResult<(NaiveDate, NaiveDate)> {
    let t = today();
    let first = NaiveDate::from_ymd_opt(t.year(), t.month(), 1)
        .ok_or_else(|| AppError::InvalidDate(t.to_string()))?;
    let last = last_day_of_month(first).ok_or_else(|| AppError::InvalidDate(t.to_string()))?;
    Ok((first, last))
}
