use chrono::{Datelike, NaiveDate};
use derive_more::Display;
use nom::{
    bytes::complete::take_while_m_n,
    character::complete::char,
    combinator::{all_consuming, map_res},
    sequence::separated_pair,
    IResult,
};
use serde_with::DeserializeFromStr;
use std::str::FromStr;

use crate::error::{Error, ErrorKind, Result};

// Leap year, so that 02-29 counts as a valid holiday.
const REFERENCE_YEAR: i32 = 2000;

/// A recurring day of the year, written as `mm-dd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, DeserializeFromStr)]
#[display(fmt = "{:02}-{:02}", month, day)]
pub struct Holiday {
    month: u32,
    day: u32,
}

impl Holiday {
    pub fn new(month: u32, day: u32) -> Result<Self> {
        if NaiveDate::from_ymd_opt(REFERENCE_YEAR, month, day).is_none() {
            return Err(Error::new(
                ErrorKind::InvalidHolidayFormat,
                &format!("no day {:02}-{:02} in any year", month, day),
            ));
        }

        Ok(Holiday { month, day })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    fn number(input: &str) -> IResult<&str, u32> {
        map_res(take_while_m_n(1, 2, |c: char| c.is_ascii_digit()), |s: &str| {
            s.parse::<u32>()
        })(input)
    }

    fn parse(input: &str) -> IResult<&str, (u32, u32)> {
        all_consuming(separated_pair(Self::number, char('-'), Self::number))(input)
    }
}

impl<D: Datelike> From<&D> for Holiday {
    fn from(date: &D) -> Self {
        Holiday {
            month: date.month(),
            day: date.day(),
        }
    }
}

impl FromStr for Holiday {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (_, (month, day)) = Self::parse(s.trim()).map_err(|_| {
            Error::new(
                ErrorKind::InvalidHolidayFormat,
                &format!("'{}' is not of the form mm-dd", s),
            )
        })?;

        Holiday::new(month, day)
    }
}
