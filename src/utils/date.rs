use chrono::NaiveDate;

/// Today in the local timezone, calendar-day granularity.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Canonical `YYYY-MM-DD` form used by the store and the reset record.
pub fn to_db_str(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}
