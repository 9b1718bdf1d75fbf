use iced::widget::{Svg, svg};
use include_dir::{Dir, include_dir};
use tracing::warn;

static ICONS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/assets/icons");
static PLACEHOLDER_AVATAR: &[u8] = include_bytes!("../assets/images/avatar.svg");

const ICON_SIZE: u32 = 20;

/// A bundled icon by file stem, e.g. `icon("search")`.
pub fn icon(name: &str) -> Svg<'static> {
    let contents = match ICONS.get_file(format!("{name}.svg")) {
        Some(file) => file.contents(),
        None => {
            warn!("Missing icon: {name}");
            &[]
        }
    };

    svg(svg::Handle::from_memory(contents))
        .width(ICON_SIZE)
        .height(ICON_SIZE)
}

/// Shown when a profile has no picture, or while its picture is downloading.
pub fn placeholder_avatar() -> Svg<'static> {
    svg(svg::Handle::from_memory(PLACEHOLDER_AVATAR))
}
