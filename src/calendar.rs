use chrono::Month as MonthName;
use derive_more::Display;
use num_traits::FromPrimitive;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DayType {
    #[display(fmt = "workday")]
    Workday,
    #[display(fmt = "weekend")]
    Weekend,
    #[display(fmt = "holiday")]
    Holiday,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "{} {}", number, day_type)]
pub struct Day {
    number: u32,
    day_type: DayType,
}

impl Day {
    pub fn new(number: u32, day_type: DayType) -> Self {
        Day { number, day_type }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn day_type(&self) -> DayType {
        self.day_type
    }

    /// Binary digits of the day number, most significant first, without
    /// leading zeros.
    pub fn binary(&self) -> String {
        format!("{:b}", self.number)
    }

    pub fn bit_len(&self) -> usize {
        (u32::BITS - self.number.leading_zeros()) as usize
    }

    /// Bit at position `bit` counted from the least significant one, `None`
    /// past the end of the binary representation.
    pub fn bit(&self, bit: usize) -> Option<bool> {
        if bit < self.bit_len() {
            Some((self.number >> bit) & 1 == 1)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Month {
    number: u32,
    days: Vec<Day>,
    offset: usize,
}

impl Month {
    pub fn new(number: u32, days: Vec<Day>, offset: usize) -> Self {
        Month {
            number,
            days,
            offset,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    /// Blank rows above the first day so that weekdays line up across
    /// months.
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn height(&self) -> usize {
        self.days.len() + self.offset
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match MonthName::from_u32(self.number) {
            Some(name) => write!(f, "{} (offset {})", name.name(), self.offset),
            None => write!(f, "month {} (offset {})", self.number, self.offset),
        }
    }
}

/// A year laid out on a grid of months (columns), day rows and bit
/// positions.
///
/// Every month column is shifted down by its offset, so row `d` of month
/// `m` holds the day numbered `d - offset + 1`. Cells above the first day
/// and below the last one are padding.
#[derive(Debug, Clone)]
pub struct Calendar {
    months: Vec<Month>,
    day_count: usize,
    bit_count: usize,
}

impl Calendar {
    pub fn new(months: Vec<Month>) -> Self {
        let day_count = months.iter().map(Month::height).max().unwrap_or(0);
        let bit_count = months
            .iter()
            .flat_map(|month| month.days.iter())
            .map(Day::bit_len)
            .max()
            .unwrap_or(0);

        Calendar {
            months,
            day_count,
            bit_count,
        }
    }

    pub fn months(&self) -> &[Month] {
        &self.months
    }

    pub fn month_count(&self) -> usize {
        self.months.len()
    }

    pub fn day_count(&self) -> usize {
        self.day_count
    }

    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    fn day_at(&self, month: usize, day: usize) -> Option<&Day> {
        let month = self.months.get(month)?;
        let index = day.checked_sub(month.offset)?;
        month.days.get(index)
    }

    pub fn bit(&self, month: usize, day: usize, bit: usize) -> bool {
        self.day_at(month, day)
            .and_then(|d| d.bit(bit))
            .unwrap_or(false)
    }

    pub fn day_type(&self, month: usize, day: usize) -> Option<DayType> {
        self.day_at(month, day).map(Day::day_type)
    }
}
