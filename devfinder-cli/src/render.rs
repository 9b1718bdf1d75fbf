//! Plain-text rendering of a lookup for the terminal.

use std::fmt::Write;

use colored::{Color, Colorize};
use devfinder_lib::{
    DisplayMode, LookupError,
    view::{DetailRow, ProfileCard},
};

const LABEL_WIDTH: usize = 14;

struct Palette {
    text: Color,
    muted: Color,
    accent: Color,
    error: Color,
}

impl Palette {
    fn of(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Light => Self {
                text: Color::Black,
                muted: Color::BrightBlack,
                accent: Color::Blue,
                error: Color::Red,
            },
            DisplayMode::Dark => Self {
                text: Color::BrightWhite,
                muted: Color::White,
                accent: Color::BrightBlue,
                error: Color::BrightRed,
            },
        }
    }
}

pub fn card(card: &ProfileCard, mode: DisplayMode) -> String {
    let palette = Palette::of(mode);
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{}  {}",
        card.name.color(palette.text).bold(),
        card.joined.color(palette.muted)
    );
    let _ = writeln!(out, "{}", card.handle.color(palette.accent));
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", card.bio.color(palette.muted));
    let _ = writeln!(out);

    let mut labels = String::new();
    let mut values = String::new();
    for cell in &card.stats {
        let label = cell.stat.to_string();
        let value = cell.value.to_string();
        let width = label.len().max(value.len()) + 4;
        let _ = write!(labels, "{:<width$}", label);
        let _ = write!(values, "{:<width$}", value);
    }
    let _ = writeln!(out, "  {}", labels.trim_end().color(palette.muted));
    let _ = writeln!(out, "  {}", values.trim_end().color(palette.text).bold());
    let _ = writeln!(out);

    for row in &card.details {
        let _ = writeln!(out, "  {}", detail(row, &palette));
    }

    out
}

fn detail(row: &DetailRow, palette: &Palette) -> String {
    let label = format!("{:<LABEL_WIDTH$}", row.detail.to_string());
    let text = match &row.link {
        Some(link) if *link != row.text => format!("{} ({link})", row.text),
        _ => row.text.clone(),
    };

    let text = if row.is_available() {
        text.color(palette.text)
    } else {
        text.color(palette.muted)
    };

    format!("{}{}", label.color(palette.muted), text)
}

pub fn error(err: &LookupError, mode: DisplayMode) -> String {
    err.message().color(Palette::of(mode).error).to_string()
}
