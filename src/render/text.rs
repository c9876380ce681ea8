use std::io;
use std::io::Write;

use super::Renderer;
use crate::calendar::{Calendar, DayType};

/// Empty bit positions added on the high side of every month column.
pub const MONTH_SPACING: usize = 2;

const WORKDAY: char = '#';
const HOLIDAY: char = '!';
const WEEKEND: char = '.';
const BLANK: char = ' ';

/// Draws the calendar with one character per bit, the most significant bit
/// on the left of each month column.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        TextRenderer
    }

    fn glyph(calendar: &Calendar, month: usize, day: usize, bit: usize) -> char {
        if !calendar.bit(month, day, bit) {
            return BLANK;
        }

        match calendar.day_type(month, day) {
            Some(DayType::Workday) => WORKDAY,
            Some(DayType::Holiday) => HOLIDAY,
            Some(DayType::Weekend) => WEEKEND,
            None => BLANK,
        }
    }
}

impl Renderer for TextRenderer {
    fn draw_calendar(&self, calendar: &Calendar, out: &mut dyn Write) -> io::Result<()> {
        for day in 0..calendar.day_count() {
            for month in 0..calendar.month_count() {
                for bit in (0..calendar.bit_count() + MONTH_SPACING).rev() {
                    write!(out, "{}", Self::glyph(calendar, month, day, bit))?;
                }
            }
            writeln!(out)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::CalendarBuilder;
    use crate::calendar::{Day, Month};

    fn render(calendar: &Calendar) -> Vec<String> {
        let mut out = Vec::new();
        TextRenderer::new().draw_calendar(calendar, &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn single_month_columns() {
        let days = (1..=5).map(|n| Day::new(n, DayType::Workday)).collect();
        let cal = Calendar::new(vec![Month::new(1, days, 1)]);

        // bit_count is 3, so every row is 3 + 2 characters wide
        assert_eq!(
            render(&cal),
            vec!["     ", "    #", "   # ", "   ##", "  #  ", "  # #"]
        );
    }

    #[test]
    fn glyph_by_day_type() {
        let days = vec![
            Day::new(1, DayType::Workday),
            Day::new(2, DayType::Weekend),
            Day::new(3, DayType::Holiday),
        ];
        let cal = Calendar::new(vec![Month::new(1, days, 0)]);

        assert_eq!(render(&cal), vec!["   #", "  . ", "  !!"]);
    }

    #[test]
    fn day_five_workday() {
        let cal = CalendarBuilder::new(2021).build().unwrap();
        let rows = render(&cal);
        let width = cal.bit_count() + MONTH_SPACING;

        // 2021-02-05 is a Friday in row 4 of the February column
        let column: String = rows[4].chars().skip(width).take(width).collect();
        assert_eq!(column, "    # #");
    }

    #[test]
    fn full_year_shape() {
        let new_year = "01-01".parse().unwrap();
        let cal = CalendarBuilder::new(2021).holiday(new_year).build().unwrap();
        let rows = render(&cal);

        assert_eq!(rows.len(), cal.day_count());
        for row in &rows {
            assert_eq!(row.chars().count(), 12 * (cal.bit_count() + MONTH_SPACING));
        }
        // January starts on a Friday, so row 4 holds the holiday
        assert!(rows[..4].iter().all(|r| r[..7].trim().is_empty()));
        assert_eq!(&rows[4][..7], "      !");
        assert_eq!(&rows[5][..7], "     . ");
    }

    #[test]
    fn months_are_separated_by_spacing_columns() {
        let cal = CalendarBuilder::new(2021).build().unwrap();
        let rows = render(&cal);
        let width = cal.bit_count() + MONTH_SPACING;

        // 2021-01-31 is the widest day number and sits in row 34
        let january: String = rows[34].chars().take(width).collect();
        assert_eq!(january, "  #####");
        for row in &rows {
            for month in 0..cal.month_count() {
                let spacing: String = row
                    .chars()
                    .skip(month * width)
                    .take(MONTH_SPACING)
                    .collect();
                assert_eq!(spacing, "  ");
            }
        }
    }
}
