use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use sea_orm::DbErr;

use crate::server::error::{internal::InternalError, AppError};

/// Parses an i32 id from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `i32`
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed String to `i32`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as an i32
pub fn parse_i32_from_string(value: String) -> Result<i32, AppError> {
    let result = value
        .parse::<i32>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Parses an enum column stored as a lowercase string.
///
/// Unknown values mean the row was written by something other than this
/// application and are reported as a database type error.
pub fn parse_column<T>(value: &str) -> Result<T, DbErr>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.parse::<T>().map_err(|e| DbErr::Type(e.to_string()))
}

/// First and last day of a calendar month.
///
/// # Returns
/// - `Some((first, last))` - Bounds of the month
/// - `None` - `month` is not in 1..=12 or the year is out of range
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };

    Some((first, next.pred_opt()?))
}

/// `YYYY-MM` key of the month containing `date`.
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::contract::ContractStatus;

    #[test]
    fn month_bounds_handle_year_end_and_leap_years() {
        let (first, last) = month_bounds(2024, 2).unwrap();
        assert_eq!(first, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        let (_, last) = month_bounds(2025, 12).unwrap();
        assert_eq!(last, NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());

        assert!(month_bounds(2025, 13).is_none());
    }

    #[test]
    fn formats_month_key() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 17).unwrap();
        assert_eq!(month_key(date), "2025-03");
    }

    #[test]
    fn unknown_column_value_is_type_error() {
        assert_eq!(
            parse_column::<ContractStatus>("active").unwrap(),
            ContractStatus::Active
        );
        assert!(matches!(
            parse_column::<ContractStatus>("archived"),
            Err(DbErr::Type(_))
        ));
    }

    #[test]
    fn parses_ids() {
        assert_eq!(parse_i32_from_string("42".to_string()).unwrap(), 42);
        assert!(parse_i32_from_string("abc".to_string()).is_err());
    }
}
