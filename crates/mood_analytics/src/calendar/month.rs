use crate::error::CalendarError;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const fn is_leap_year(year: i32) -> bool {
	(year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// A calendar month, always valid once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
	first: NaiveDate,
}

impl YearMonth {
	/// # Errors
	/// Returns [`CalendarError::InvalidMonth`] when `month` is not in `1..=12`
	/// or the year is outside chrono's range.
	pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
		NaiveDate::from_ymd_opt(year, month, 1)
			.map(|first| Self { first })
			.ok_or(CalendarError::InvalidMonth { year, month })
	}

	/// The month a date falls in.
	pub fn of(date: NaiveDate) -> Self {
		Self { first: date.with_day0(0).unwrap_or(date) }
	}

	pub fn year(&self) -> i32 {
		self.first.year()
	}

	pub fn month(&self) -> u32 {
		self.first.month()
	}

	pub const fn first_day(&self) -> NaiveDate {
		self.first
	}

	pub fn days_in_month(&self) -> u32 {
		match self.month() {
			4 | 6 | 9 | 11 => 30,
			2 if is_leap_year(self.year()) => 29,
			2 => 28,
			_ => 31,
		}
	}

	pub fn contains(&self, date: NaiveDate) -> bool {
		date.year() == self.year() && date.month() == self.month()
	}

	/// # Errors
	/// Returns [`CalendarError::InvalidMonth`] past chrono's last supported year.
	pub fn next(&self) -> Result<Self, CalendarError> {
		match self.month() {
			12 => Self::new(self.year() + 1, 1),
			month => Self::new(self.year(), month + 1),
		}
	}

	/// # Errors
	/// Returns [`CalendarError::InvalidMonth`] before chrono's first supported year.
	pub fn previous(&self) -> Result<Self, CalendarError> {
		match self.month() {
			1 => Self::new(self.year() - 1, 12),
			month => Self::new(self.year(), month - 1),
		}
	}
}

impl fmt::Display for YearMonth {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:04}-{:02}", self.year(), self.month())
	}
}

impl FromStr for YearMonth {
	type Err = CalendarError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let invalid = || CalendarError::InvalidFormat(s.to_string());
		let (year, month) = s.trim().rsplit_once('-').ok_or_else(invalid)?;
		let year = year.parse::<i32>().map_err(|_| invalid())?;
		let month = month.parse::<u32>().map_err(|_| invalid())?;
		Self::new(year, month)
	}
}

impl TryFrom<String> for YearMonth {
	type Error = CalendarError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

impl From<YearMonth> for String {
	fn from(value: YearMonth) -> Self {
		value.to_string()
	}
}

/// Which weekday occupies the first column of the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
	#[default]
	Sunday,
	Monday,
}

impl WeekStart {
	/// Column of `weekday`, 0 being the first day of the week.
	pub const fn column(self, weekday: Weekday) -> u32 {
		match self {
			Self::Sunday => weekday.num_days_from_sunday(),
			Self::Monday => weekday.num_days_from_monday(),
		}
	}
}

impl FromStr for WeekStart {
	type Err = CalendarError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"sunday" | "sun" => Ok(Self::Sunday),
			"monday" | "mon" => Ok(Self::Monday),
			_ => Err(CalendarError::InvalidWeekStart(s.to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_days_in_month() {
		assert_eq!(YearMonth::new(2024, 1).unwrap().days_in_month(), 31);
		assert_eq!(YearMonth::new(2024, 2).unwrap().days_in_month(), 29);
		assert_eq!(YearMonth::new(2023, 2).unwrap().days_in_month(), 28);
		assert_eq!(YearMonth::new(1900, 2).unwrap().days_in_month(), 28);
		assert_eq!(YearMonth::new(2000, 2).unwrap().days_in_month(), 29);
		assert_eq!(YearMonth::new(2024, 4).unwrap().days_in_month(), 30);
		assert_eq!(YearMonth::new(2024, 12).unwrap().days_in_month(), 31);
	}

	#[test]
	fn test_invalid_month() {
		assert_eq!(YearMonth::new(2024, 0), Err(CalendarError::InvalidMonth { year: 2024, month: 0 }));
		assert_eq!(YearMonth::new(2024, 13), Err(CalendarError::InvalidMonth { year: 2024, month: 13 }));
	}

	#[test]
	fn test_navigation_wraps_years() {
		let december = YearMonth::new(2023, 12).unwrap();
		assert_eq!(december.next().unwrap(), YearMonth::new(2024, 1).unwrap());
		assert_eq!(YearMonth::new(2024, 1).unwrap().previous().unwrap(), december);
		assert_eq!(YearMonth::new(2024, 6).unwrap().next().unwrap().month(), 7);
	}

	#[test]
	fn test_of_and_contains() {
		let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
		let month = YearMonth::of(date);
		assert_eq!(month.to_string(), "2024-02");
		assert!(month.contains(date));
		assert!(!month.contains(NaiveDate::from_ymd_opt(2023, 2, 28).unwrap()));
	}

	#[test]
	fn test_parse_and_display() {
		let month: YearMonth = "2024-03".parse().unwrap();
		assert_eq!((month.year(), month.month()), (2024, 3));
		assert_eq!(month.to_string(), "2024-03");
		assert_eq!("2024-3".parse::<YearMonth>().unwrap(), month);
		assert_eq!("march".parse::<YearMonth>(), Err(CalendarError::InvalidFormat("march".to_string())));
		assert!("2024-13".parse::<YearMonth>().is_err());
	}

	#[test]
	fn test_serde_as_string() {
		let month = YearMonth::new(2025, 11).unwrap();
		assert_eq!(serde_json::to_string(&month).unwrap(), r#""2025-11""#);
		assert_eq!(serde_json::from_str::<YearMonth>(r#""2025-11""#).unwrap(), month);
		assert!(serde_json::from_str::<YearMonth>(r#""2025-00""#).is_err());
	}

	#[test]
	fn test_week_start_columns() {
		assert_eq!(WeekStart::Sunday.column(Weekday::Sun), 0);
		assert_eq!(WeekStart::Sunday.column(Weekday::Wed), 3);
		assert_eq!(WeekStart::Monday.column(Weekday::Sun), 6);
		assert_eq!(WeekStart::Monday.column(Weekday::Mon), 0);
		assert_eq!("Monday".parse::<WeekStart>().unwrap(), WeekStart::Monday);
		assert!("friday".parse::<WeekStart>().is_err());
	}
}
