use serde::Deserialize;
use std::io;
use std::io::Write;

use super::Renderer;
use crate::calendar::{Calendar, DayType};

pub const BOX_SIZE: usize = 15;
pub const GAP: usize = 20;
pub const BORDER: usize = 20;

const STROKE_WIDTH: usize = 1;

/// Fill colors per day type plus the outline color of every box. Any value
/// SVG accepts as a color works.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Palette {
    pub workday: String,
    pub holiday: String,
    pub weekend: String,
    pub line: String,
}

impl Palette {
    pub fn color() -> Self {
        Palette {
            workday: "green".to_owned(),
            holiday: "yellow".to_owned(),
            weekend: "red".to_owned(),
            line: "black".to_owned(),
        }
    }

    pub fn grayscale() -> Self {
        Palette {
            workday: "black".to_owned(),
            holiday: "gray".to_owned(),
            weekend: "silver".to_owned(),
            line: "white".to_owned(),
        }
    }

    pub fn fill(&self, day_type: DayType) -> &str {
        match day_type {
            DayType::Workday => &self.workday,
            DayType::Holiday => &self.holiday,
            DayType::Weekend => &self.weekend,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::color()
    }
}

#[derive(Debug, Clone)]
pub struct SvgRenderer {
    palette: Palette,
}

impl SvgRenderer {
    pub fn new(palette: Palette) -> Self {
        SvgRenderer { palette }
    }

    pub fn width(calendar: &Calendar) -> usize {
        let months = calendar.month_count();
        months * calendar.bit_count() * BOX_SIZE + months.saturating_sub(1) * GAP + 2 * BORDER
    }

    pub fn height(calendar: &Calendar) -> usize {
        calendar.day_count() * BOX_SIZE + 2 * BORDER
    }

    fn month_x(calendar: &Calendar, month: usize) -> usize {
        BORDER + month * (calendar.bit_count() * BOX_SIZE + GAP)
    }
}

impl Renderer for SvgRenderer {
    fn draw_calendar(&self, calendar: &Calendar, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = Self::width(calendar),
            h = Self::height(calendar),
        )?;

        let bit_count = calendar.bit_count();
        for month in 0..calendar.month_count() {
            let month_x = Self::month_x(calendar, month);
            for bit in (0..bit_count).rev() {
                let x = month_x + (bit_count - 1 - bit) * BOX_SIZE;
                for day in 0..calendar.day_count() {
                    if !calendar.bit(month, day, bit) {
                        continue;
                    }
                    let fill = match calendar.day_type(month, day) {
                        Some(day_type) => self.palette.fill(day_type),
                        None => continue,
                    };
                    writeln!(
                        out,
                        r#"  <rect x="{}" y="{}" width="{s}" height="{s}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
                        x,
                        BORDER + day * BOX_SIZE,
                        fill,
                        self.palette.line,
                        STROKE_WIDTH,
                        s = BOX_SIZE,
                    )?;
                }
            }
        }

        writeln!(out, "</svg>")
    }
}
