use chrono::{Datelike, NaiveDate, Weekday};
use itertools::Itertools;
use std::collections::BTreeSet;

use crate::calendar::{Calendar, Day, DayType, Month};
use crate::error::{Error, ErrorKind, Result};
use crate::holiday::Holiday;

const DAYS_PER_WEEK: u32 = 7;

/// Parses the year argument, rejecting anything chrono cannot represent
/// from January 1st to December 31st.
pub fn parse_year(s: &str) -> Result<i32> {
    let year = s.trim().parse::<i32>().map_err(|err| {
        Error::new(
            ErrorKind::InvalidYear,
            &format!("'{}' is not a number ({})", s, err),
        )
    })?;

    year_bounds(year)?;
    Ok(year)
}

fn year_bounds(year: i32) -> Result<(NaiveDate, NaiveDate)> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .zip(NaiveDate::from_ymd_opt(year, 12, 31))
        .ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidYear,
                &format!("{} is out of the supported range", year),
            )
        })
}

pub struct CalendarBuilder {
    year: i32,
    holidays: BTreeSet<Holiday>,
    week_shift: u32,
}

impl CalendarBuilder {
    pub fn new(year: i32) -> Self {
        CalendarBuilder {
            year,
            holidays: BTreeSet::new(),
            week_shift: 0,
        }
    }

    pub fn holiday(mut self, holiday: Holiday) -> Self {
        self.holidays.insert(holiday);
        self
    }

    pub fn holidays<I: IntoIterator<Item = Holiday>>(mut self, holidays: I) -> Self {
        self.holidays.extend(holidays);
        self
    }

    /// Added to every month's weekday offset. 0 keeps Mondays on a common
    /// row; `7 - weekday(Jan 1st)` puts January 1st on the top row.
    pub fn week_shift(mut self, shift: u32) -> Self {
        self.week_shift = shift % DAYS_PER_WEEK;
        self
    }

    fn day_type(&self, date: &NaiveDate) -> DayType {
        if self.holidays.contains(&Holiday::from(date)) {
            DayType::Holiday
        } else if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            DayType::Weekend
        } else {
            DayType::Workday
        }
    }

    fn offset(&self, first: &NaiveDate) -> usize {
        ((first.weekday().num_days_from_monday() + self.week_shift) % DAYS_PER_WEEK) as usize
    }

    pub fn build(&self) -> Result<Calendar> {
        let (first, last) = year_bounds(self.year)?;

        let by_month = first
            .iter_days()
            .take_while(|date| date <= &last)
            .group_by(|date| date.month());

        let months: Vec<Month> = (&by_month)
            .into_iter()
            .map(|(number, dates)| {
                let mut dates = dates.peekable();
                let offset = dates.peek().map_or(0, |date| self.offset(date));
                let days = dates
                    .map(|date| Day::new(date.day(), self.day_type(&date)))
                    .collect();

                Month::new(number, days, offset)
            })
            .inspect(|month| log::debug!("{}", month))
            .collect();

        Ok(Calendar::new(months))
    }
}
