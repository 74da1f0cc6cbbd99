use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};

use stats19_format::add_temporal_info;

fn cell(df: &DataFrame, name: &str, idx: usize) -> Option<String> {
    let column = df.column(name).unwrap();
    let value = column.get(idx).unwrap();
    if value.is_null() {
        None
    } else {
        Some(value.str_value().to_string())
    }
}

#[test]
fn derives_all_temporal_columns_from_date_and_time() {
    let mut df = DataFrame::new(vec![
        Series::new("date".into(), &["15/06/2021", "01/01/2022"]).into_column(),
        Series::new("time".into(), &["08:30", "23:45"]).into_column(),
    ])
    .unwrap();

    add_temporal_info(&mut df).unwrap();

    // 15 June 2021 is a Tuesday.
    assert_eq!(cell(&df, "season", 0).as_deref(), Some("summer"));
    assert_eq!(cell(&df, "weekday", 0).as_deref(), Some("weekday"));
    assert_eq!(cell(&df, "daytime", 0).as_deref(), Some("morning rush (7-10)"));
    let month = df.column("month").unwrap();
    assert_eq!(month.get(0).unwrap().try_extract::<u32>().unwrap(), 6);
    let day_of_year = df.column("day_of_year").unwrap();
    assert_eq!(day_of_year.get(0).unwrap().try_extract::<u32>().unwrap(), 166);

    // 1 January 2022 is a Saturday, 23:45 is in the night bucket.
    assert_eq!(cell(&df, "season", 1).as_deref(), Some("winter"));
    assert_eq!(cell(&df, "weekday", 1).as_deref(), Some("weekend"));
    assert_eq!(cell(&df, "daytime", 1).as_deref(), Some("night (23-7)"));
}

#[test]
fn date_only_parses_at_midnight() {
    let mut df = DataFrame::new(vec![
        Series::new("date".into(), &["15/06/2021"]).into_column(),
    ])
    .unwrap();

    add_temporal_info(&mut df).unwrap();

    assert_eq!(cell(&df, "daytime", 0).as_deref(), Some("night (23-7)"));
    assert_eq!(cell(&df, "season", 0).as_deref(), Some("summer"));
    assert!(df.column("datetime").is_ok());
}

#[test]
fn unparseable_rows_become_null_not_errors() {
    let mut df = DataFrame::new(vec![
        Series::new("date".into(), &[Some("15/06/2021"), Some("not a date"), None]).into_column(),
        Series::new("time".into(), &[Some("08:30"), Some("08:30"), Some("08:30")]).into_column(),
    ])
    .unwrap();

    add_temporal_info(&mut df).unwrap();

    assert!(cell(&df, "season", 0).is_some());
    assert!(cell(&df, "season", 1).is_none());
    assert!(cell(&df, "season", 2).is_none());
    let datetime = df.column("datetime").unwrap();
    assert!(datetime.get(1).unwrap().is_null());
}

#[test]
fn missing_date_column_leaves_the_table_unchanged() {
    let mut df = DataFrame::new(vec![
        Series::new("accident_index".into(), &["A1", "A2"]).into_column(),
    ])
    .unwrap();
    let width_before = df.width();

    add_temporal_info(&mut df).unwrap();

    assert_eq!(df.width(), width_before);
    assert!(df.column("datetime").is_err());
}
