use devfinder_lib::view::{Detail, DetailRow, ProfileCard, StatCell};
use iced::{
    Alignment::Center,
    Element, Font,
    Length::Fill,
    border,
    widget::{Row, button, column, container, image, row, svg, text},
};

use crate::{
    components::profile_lookup::Message,
    icons::{icon, placeholder_avatar},
    theme::Palette,
};

const AVATAR_SIZE: u32 = 96;

/// The panel shown for a found profile. `avatar` is the downloaded picture, if any.
pub fn view<'a>(
    card: ProfileCard,
    avatar: Option<image::Handle>,
    palette: Palette,
) -> Element<'a, Message> {
    let ProfileCard {
        name,
        handle,
        joined,
        bio,
        stats,
        details: [location, twitter, blog, page],
        ..
    } = card;

    let avatar: Element<'a, Message> = match avatar {
        Some(handle) => image(handle)
            .width(AVATAR_SIZE)
            .height(AVATAR_SIZE)
            .into(),
        None => placeholder_avatar()
            .width(AVATAR_SIZE)
            .height(AVATAR_SIZE)
            .into(),
    };

    let heading = row![
        column![
            text(name).size(22).font(Font::MONOSPACE).color(palette.text),
            text(handle).size(14).color(palette.accent),
        ]
        .spacing(4)
        .width(Fill),
        text(joined).size(13).color(palette.muted),
    ];

    let stats = container(Row::with_children(
        stats.into_iter().map(|cell| stat(cell, palette)),
    ))
    .padding(16)
    .style(move |_theme| container::Style {
        background: Some(palette.inset.into()),
        border: border::rounded(10.0),
        ..container::Style::default()
    });

    let details = column![
        row![detail(location, palette), detail(twitter, palette)].spacing(16),
        row![detail(blog, palette), detail(page, palette)].spacing(16),
    ]
    .spacing(12);

    container(
        row![
            avatar,
            column![
                heading,
                text(bio).size(14).color(palette.muted),
                stats,
                details
            ]
            .spacing(20)
            .width(Fill),
        ]
        .spacing(24),
    )
    .padding(32)
    .style(move |_theme| container::Style {
        background: Some(palette.card.into()),
        border: border::rounded(14.0),
        ..container::Style::default()
    })
    .into()
}

fn stat<'a>(cell: StatCell, palette: Palette) -> Element<'a, Message> {
    column![
        text(cell.stat.to_string()).size(13).color(palette.muted),
        text(cell.value.to_string())
            .size(22)
            .font(Font::MONOSPACE)
            .color(palette.text),
    ]
    .spacing(6)
    .align_x(Center)
    .width(Fill)
    .into()
}

fn detail<'a>(detail_row: DetailRow, palette: Palette) -> Element<'a, Message> {
    let icon_name = match detail_row.detail {
        Detail::Location => "location",
        Detail::Twitter => "twitter",
        Detail::Blog => "link",
        Detail::ProfilePage => "building",
    };

    let color = if detail_row.is_available() {
        palette.icon
    } else {
        palette.muted
    };

    let label: Element<'a, Message> = match detail_row.link {
        Some(link) => button(text(detail_row.text).size(14).color(palette.text))
            .style(button::text)
            .padding(0)
            .on_press(Message::LinkPressed(link))
            .into(),
        None => text(detail_row.text).size(14).color(palette.muted).into(),
    };

    row![
        icon(icon_name).style(move |_theme, _status| svg::Style { color: Some(color) }),
        label,
    ]
    .spacing(10)
    .align_y(Center)
    .width(Fill)
    .into()
}
