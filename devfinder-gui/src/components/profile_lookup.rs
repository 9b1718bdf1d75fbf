use devfinder_lib::{
    Avatar, DirectoryClient, DisplayMode, LookupError, Profile, lookup, view::LookupView,
};
use iced::{
    Alignment::Center,
    Element, Font,
    Length::Fill,
    Task, border,
    widget::{button, column, container, image, row, space, svg, text, text_input},
};
use tracing::{debug, warn};

use crate::{components::profile_card, icons::icon, theme::Palette};

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    /// Search button pressed, or Enter hit in the query field.
    SearchRequested,
    Settled(u64, Result<Profile, LookupError>),
    AvatarLoaded(u64, Option<Vec<u8>>),
    DisplayModeToggled,
    LinkPressed(String),
}

pub struct ProfileLookup {
    client: DirectoryClient,
    state: lookup::ProfileLookup,
    avatar: Option<image::Handle>,
}

impl ProfileLookup {
    pub fn new(client: DirectoryClient, mode: DisplayMode) -> (Self, Task<Message>) {
        (
            Self {
                client,
                state: lookup::ProfileLookup::new(mode),
                avatar: None,
            },
            Task::none(),
        )
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.state.display_mode()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryChanged(query) => {
                self.state.set_query(query);
                Task::none()
            }
            Message::SearchRequested => match self.state.submit() {
                Some(request) => {
                    let client = self.client.clone();
                    Task::perform(
                        async move { request.run(&client).await },
                        |(generation, result)| Message::Settled(generation, result),
                    )
                }
                None => Task::none(),
            },
            Message::Settled(generation, result) => {
                if !self.state.settle(generation, result) {
                    return Task::none();
                }

                self.avatar = None;
                match self.state.profile().map(Profile::avatar) {
                    Some(Avatar::Remote(url)) => self.load_avatar(generation, url.clone()),
                    _ => Task::none(),
                }
            }
            Message::AvatarLoaded(generation, bytes) => {
                if generation == self.state.generation() && !self.state.is_loading() {
                    self.avatar = bytes.map(image::Handle::from_bytes);
                }
                Task::none()
            }
            Message::DisplayModeToggled => {
                self.state.toggle_display_mode();
                Task::none()
            }
            Message::LinkPressed(url) => {
                if let Err(err) = open::that(&url) {
                    warn!("Failed to open {url}: {err}");
                }
                Task::none()
            }
        }
    }

    fn load_avatar(&self, generation: u64, url: String) -> Task<Message> {
        let client = self.client.clone();
        Task::perform(
            async move {
                match client.fetch_avatar(&url).await {
                    Ok(bytes) => Some(bytes),
                    Err(err) => {
                        debug!("Keeping placeholder avatar, {url} failed: {err}");
                        None
                    }
                }
            },
            move |bytes| Message::AvatarLoaded(generation, bytes),
        )
    }

    pub fn view(&self) -> Element<'_, Message> {
        let palette = Palette::of(self.display_mode());
        let view = self.state.view();

        let mut content = column![self.header(palette), self.search_bar(&view, palette)]
            .spacing(24)
            .max_width(720);

        match view {
            LookupView::Initial | LookupView::Error(_) => {}
            LookupView::Loading => content = content.push(loading(palette)),
            LookupView::Profile(card) => {
                content = content.push(profile_card::view(card, self.avatar.clone(), palette))
            }
        }

        container(content)
            .center_x(Fill)
            .padding(24)
            .height(Fill)
            .style(move |_theme| container::Style {
                background: Some(palette.page.into()),
                text_color: Some(palette.text),
                ..container::Style::default()
            })
            .into()
    }

    fn header(&self, palette: Palette) -> Element<'_, Message> {
        let (label, icon_name) = match self.display_mode() {
            DisplayMode::Light => ("DARK", "moon"),
            DisplayMode::Dark => ("LIGHT", "sun"),
        };

        row![
            text("devfinder").size(26).font(Font::MONOSPACE),
            space::horizontal(),
            button(
                row![
                    text(label).size(13).color(palette.muted),
                    icon(icon_name).style(move |_theme, _status| svg::Style {
                        color: Some(palette.muted)
                    })
                ]
                .spacing(8)
                .align_y(Center)
            )
            .style(button::text)
            .on_press(Message::DisplayModeToggled)
        ]
        .align_y(Center)
        .into()
    }

    fn search_bar(&self, view: &LookupView<'_>, palette: Palette) -> Element<'_, Message> {
        let error = match view {
            LookupView::Error(err) => Some(text(err.message().to_owned()).color(palette.error)),
            _ => None,
        };

        let mut bar = row![
            icon("search").style(move |_theme, _status| svg::Style {
                color: Some(palette.accent)
            }),
            text_input("Search GitHub username...", self.state.query())
                .on_input(Message::QueryChanged)
                .on_submit(Message::SearchRequested)
                .font(Font::MONOSPACE)
                .padding(12),
        ]
        .spacing(12)
        .align_y(Center);

        if let Some(error) = error {
            bar = bar.push(error);
        }

        container(
            bar.push(
                button(text("Search"))
                    .padding([8, 16])
                    .on_press(Message::SearchRequested),
            ),
        )
        .padding(10)
        .style(move |_theme| container::Style {
            background: Some(palette.card.into()),
            border: border::rounded(10.0),
            ..container::Style::default()
        })
        .into()
    }
}

fn loading<'a>(palette: Palette) -> Element<'a, Message> {
    container(text("Loading..."))
        .center_x(Fill)
        .padding(24)
        .style(move |_theme| container::Style {
            background: Some(palette.card.into()),
            border: border::rounded(10.0),
            ..container::Style::default()
        })
        .into()
}

#[cfg(test)]
mod test {
    use devfinder_lib::{config::DirectoryConfig, profile::RawProfile};

    use super::*;

    fn component() -> ProfileLookup {
        let client = DirectoryClient::new(&DirectoryConfig::default()).unwrap();
        ProfileLookup::new(client, DisplayMode::Light).0
    }

    fn octocat() -> Profile {
        serde_json::from_str::<RawProfile>(
            r#"{"login":"octocat","avatar_url":"https://avatars.example/u/1","created_at":"2011-01-25T18:44:36Z"}"#,
        )
        .unwrap()
        .into()
    }

    fn search(lookup: &mut ProfileLookup, query: &str) -> u64 {
        let _ = lookup.update(Message::QueryChanged(query.into()));
        let _ = lookup.update(Message::SearchRequested);
        lookup.state.generation()
    }

    #[test]
    fn test_blank_search_does_nothing() {
        let mut lookup = component();

        search(&mut lookup, "   ");

        assert!(!lookup.state.is_loading());
        assert_eq!(lookup.state.view(), LookupView::Initial);
    }

    #[test]
    fn test_search_then_settle() {
        let mut lookup = component();

        let generation = search(&mut lookup, "octocat");
        assert!(lookup.state.is_loading());

        let _ = lookup.update(Message::Settled(generation, Ok(octocat())));
        assert!(!lookup.state.is_loading());
        assert!(lookup.state.profile().is_some());
    }

    #[test]
    fn test_failure_replaces_profile() {
        let mut lookup = component();
        let generation = search(&mut lookup, "octocat");
        let _ = lookup.update(Message::Settled(generation, Ok(octocat())));

        let generation = search(&mut lookup, "no_such_user_xyz");
        let _ = lookup.update(Message::Settled(
            generation,
            Err(LookupError::no_results()),
        ));

        assert!(lookup.state.profile().is_none());
        assert_eq!(
            lookup.state.view(),
            LookupView::Error(&LookupError::no_results())
        );
    }

    #[test]
    fn test_stale_avatar_is_ignored() {
        let mut lookup = component();
        let first = search(&mut lookup, "octocat");
        let _ = lookup.update(Message::Settled(first, Ok(octocat())));

        search(&mut lookup, "someone_else");
        let _ = lookup.update(Message::AvatarLoaded(first, Some(vec![1, 2, 3])));

        assert!(lookup.avatar.is_none());
    }

    #[test]
    fn test_avatar_for_current_profile() {
        let mut lookup = component();
        let generation = search(&mut lookup, "octocat");
        let _ = lookup.update(Message::Settled(generation, Ok(octocat())));

        let _ = lookup.update(Message::AvatarLoaded(generation, Some(vec![1, 2, 3])));

        assert!(lookup.avatar.is_some());
    }

    #[test]
    fn test_toggle_keeps_lookup_state() {
        let mut lookup = component();
        let generation = search(&mut lookup, "octocat");
        let _ = lookup.update(Message::Settled(generation, Ok(octocat())));

        let _ = lookup.update(Message::DisplayModeToggled);

        assert_eq!(lookup.display_mode(), DisplayMode::Dark);
        assert_eq!(lookup.state.query(), "octocat");
        assert!(lookup.state.profile().is_some());
    }
}
