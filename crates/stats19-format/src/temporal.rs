//! Temporal feature derivation.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use polars::prelude::{Column, DataFrame, NamedFrom, PolarsResult, Series};
use tracing::warn;

use crate::value::any_to_nonempty;

const DATE_FORMAT: &str = "%d/%m/%Y";
const DATETIME_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Derive temporal columns from the `date` (and optional `time`) columns.
///
/// Adds `datetime`, `day_of_year`, `season`, `month`, `weekday` and
/// `daytime`. Rows whose date/time fails to parse get null in every derived
/// column. Without a `date` column the table is returned unchanged with a
/// warning.
pub fn add_temporal_info(df: &mut DataFrame) -> PolarsResult<()> {
    let has_date = df.column("date").is_ok();
    let has_time = df.column("time").is_ok();
    if !has_date {
        warn!("column date not found, temporal columns not added");
        return Ok(());
    }

    let timestamps = if has_time {
        let date = df.column("date")?;
        let time = df.column("time")?;
        parse_date_time(date, time)?
    } else {
        parse_date_only(df.column("date")?)?
    };

    let height = df.height();
    let mut day_of_year: Vec<Option<u32>> = Vec::with_capacity(height);
    let mut season: Vec<Option<String>> = Vec::with_capacity(height);
    let mut month: Vec<Option<u32>> = Vec::with_capacity(height);
    let mut weekday: Vec<Option<String>> = Vec::with_capacity(height);
    let mut daytime: Vec<Option<String>> = Vec::with_capacity(height);
    for stamp in &timestamps {
        match stamp {
            Some(dt) => {
                day_of_year.push(Some(dt.ordinal()));
                season.push(Some(season_label(dt.month()).to_string()));
                month.push(Some(dt.month()));
                weekday.push(Some(weekday_label(dt.weekday()).to_string()));
                daytime.push(Some(daytime_label(dt.hour()).to_string()));
            }
            None => {
                day_of_year.push(None);
                season.push(None);
                month.push(None);
                weekday.push(None);
                daytime.push(None);
            }
        }
    }

    df.with_column(Series::new("datetime".into(), timestamps.as_slice()))?;
    df.with_column(Series::new("day_of_year".into(), day_of_year))?;
    df.with_column(Series::new("season".into(), season))?;
    df.with_column(Series::new("month".into(), month))?;
    df.with_column(Series::new("weekday".into(), weekday))?;
    df.with_column(Series::new("daytime".into(), daytime))?;
    Ok(())
}

fn parse_date_time(date: &Column, time: &Column) -> PolarsResult<Vec<Option<NaiveDateTime>>> {
    let mut out = Vec::with_capacity(date.len());
    for idx in 0..date.len() {
        let date_text = any_to_nonempty(date.get(idx)?);
        let time_text = any_to_nonempty(time.get(idx)?);
        let stamp = match (date_text, time_text) {
            (Some(d), Some(t)) => {
                NaiveDateTime::parse_from_str(&format!("{d} {t}"), DATETIME_FORMAT).ok()
            }
            _ => None,
        };
        out.push(stamp);
    }
    Ok(out)
}

fn parse_date_only(date: &Column) -> PolarsResult<Vec<Option<NaiveDateTime>>> {
    let mut out = Vec::with_capacity(date.len());
    for idx in 0..date.len() {
        let stamp = any_to_nonempty(date.get(idx)?)
            .and_then(|d| NaiveDate::parse_from_str(&d, DATE_FORMAT).ok())
            .map(|d| d.and_time(NaiveTime::MIN));
        out.push(stamp);
    }
    Ok(out)
}

fn season_label(month: u32) -> &'static str {
    match month {
        3..=5 => "spring",
        6..=8 => "summer",
        9..=11 => "autumn",
        _ => "winter",
    }
}

fn weekday_label(day: Weekday) -> &'static str {
    if matches!(day, Weekday::Sat | Weekday::Sun) {
        "weekend"
    } else {
        "weekday"
    }
}

fn daytime_label(hour: u32) -> &'static str {
    match hour {
        7..=9 => "morning rush (7-10)",
        10..=15 => "office hours (10-16)",
        16..=18 => "afternoon rush (16-19)",
        19..=22 => "evening (19-23)",
        _ => "night (23-7)",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_buckets() {
        assert_eq!(season_label(3), "spring");
        assert_eq!(season_label(8), "summer");
        assert_eq!(season_label(11), "autumn");
        assert_eq!(season_label(12), "winter");
        assert_eq!(season_label(2), "winter");
    }

    #[test]
    fn daytime_buckets_wrap_around_midnight() {
        assert_eq!(daytime_label(7), "morning rush (7-10)");
        assert_eq!(daytime_label(9), "morning rush (7-10)");
        assert_eq!(daytime_label(10), "office hours (10-16)");
        assert_eq!(daytime_label(16), "afternoon rush (16-19)");
        assert_eq!(daytime_label(19), "evening (19-23)");
        assert_eq!(daytime_label(23), "night (23-7)");
        assert_eq!(daytime_label(0), "night (23-7)");
        assert_eq!(daytime_label(6), "night (23-7)");
    }
}
