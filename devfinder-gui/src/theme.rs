use devfinder_lib::DisplayMode;
use iced::{Color, Theme};

/// Colours for one display mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub page: Color,
    pub card: Color,
    /// Background of the stats strip inside the card.
    pub inset: Color,
    pub text: Color,
    pub muted: Color,
    pub icon: Color,
    pub accent: Color,
    pub error: Color,
}

const BLUE_50: Color = Color::from_rgb8(0xef, 0xf6, 0xff);
const BLUE_500: Color = Color::from_rgb8(0x3b, 0x82, 0xf6);
const BLUE_950: Color = Color::from_rgb8(0x17, 0x25, 0x54);
const SLATE_800: Color = Color::from_rgb8(0x1e, 0x29, 0x3b);
const SLATE_900: Color = Color::from_rgb8(0x0f, 0x17, 0x2a);
const GRAY_300: Color = Color::from_rgb8(0xd1, 0xd5, 0xdb);
const GRAY_500: Color = Color::from_rgb8(0x6b, 0x72, 0x80);
const GRAY_800: Color = Color::from_rgb8(0x1f, 0x29, 0x37);
const RED_500: Color = Color::from_rgb8(0xef, 0x44, 0x44);

impl Palette {
    pub fn of(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Light => Self {
                page: BLUE_50,
                card: Color::WHITE,
                inset: BLUE_50,
                text: GRAY_800,
                muted: GRAY_500,
                icon: BLUE_950,
                accent: BLUE_500,
                error: RED_500,
            },
            DisplayMode::Dark => Self {
                page: SLATE_900,
                card: SLATE_800,
                inset: SLATE_900,
                text: Color::WHITE,
                muted: GRAY_300,
                icon: Color::WHITE,
                accent: BLUE_500,
                error: RED_500,
            },
        }
    }
}

pub fn theme(mode: DisplayMode) -> Theme {
    match mode {
        DisplayMode::Light => Theme::Light,
        DisplayMode::Dark => Theme::Dark,
    }
}
