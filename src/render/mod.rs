pub mod svg;
pub mod text;

pub use svg::{Palette, SvgRenderer};
pub use text::TextRenderer;

use derive_more::Display;
use serde::Deserialize;
use std::io;
use std::io::Write;
use std::str::FromStr;

use crate::calendar::Calendar;
use crate::error::{Error, ErrorKind};

pub trait Renderer {
    /// Writes the whole calendar grid to `out` in a single pass.
    fn draw_calendar(&self, calendar: &Calendar, out: &mut dyn Write) -> io::Result<()>;
}

/// The palettes the SVG outputs pick from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Palettes {
    pub color: Palette,
    pub grayscale: Palette,
}

impl Default for Palettes {
    fn default() -> Self {
        Palettes {
            color: Palette::color(),
            grayscale: Palette::grayscale(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum OutputFormat {
    #[display(fmt = "text")]
    Text,
    #[display(fmt = "svg")]
    Svg,
    #[display(fmt = "svg-bw")]
    SvgBw,
}

impl OutputFormat {
    pub const VARIANTS: [&'static str; 3] = ["text", "svg", "svg-bw"];

    pub fn renderer(self, palettes: &Palettes) -> Box<dyn Renderer> {
        match self {
            OutputFormat::Text => Box::new(TextRenderer::new()),
            OutputFormat::Svg => Box::new(SvgRenderer::new(palettes.color.clone())),
            OutputFormat::SvgBw => Box::new(SvgRenderer::new(palettes.grayscale.clone())),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "svg" => Ok(OutputFormat::Svg),
            "svg-bw" => Ok(OutputFormat::SvgBw),
            _ => Err(Error::new(
                ErrorKind::InvalidOutputFormat,
                &format!("'{}', expected one of {}", s, Self::VARIANTS.join(", ")),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::CalendarBuilder;

    #[test]
    fn output_format_round_trips_names() {
        for name in OutputFormat::VARIANTS.iter() {
            let format: OutputFormat = name.parse().unwrap();
            assert_eq!(&format.to_string(), name);
        }
        assert!("png".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn renderer_selection() {
        let cal = CalendarBuilder::new(2021).build().unwrap();
        let palettes = Palettes::default();

        let mut text = Vec::new();
        OutputFormat::Text
            .renderer(&palettes)
            .draw_calendar(&cal, &mut text)
            .unwrap();
        assert!(!String::from_utf8(text).unwrap().contains("<svg"));

        let mut color = Vec::new();
        OutputFormat::Svg
            .renderer(&palettes)
            .draw_calendar(&cal, &mut color)
            .unwrap();
        assert!(String::from_utf8(color).unwrap().contains("fill=\"green\""));

        let mut grayscale = Vec::new();
        OutputFormat::SvgBw
            .renderer(&palettes)
            .draw_calendar(&cal, &mut grayscale)
            .unwrap();
        let grayscale = String::from_utf8(grayscale).unwrap();
        assert!(grayscale.contains("fill=\"black\""));
        assert!(!grayscale.contains("fill=\"green\""));
    }
}
