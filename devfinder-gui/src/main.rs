use devfinder_lib::{DirectoryClient, DisplayMode, config::CoreConfig, logging};
use iced::{Element, Task, Theme, application};
use tracing::{Level, error, warn};

use crate::{
    components::profile_lookup::{self, ProfileLookup},
    config::GuiConfig,
};

pub mod components;
pub mod config;
pub mod icons;
pub mod theme;

/// Exit status when the directory client can't be set up (`EX_CONFIG`).
const EX_CONFIG: i32 = 78;

fn main() -> iced::Result {
    // Human friendly panicking in release mode
    human_panic::setup_panic!();

    logging::init(Level::INFO);

    let core = CoreConfig::load().unwrap_or_else(|err| {
        warn!("Using default configuration: {err}");
        CoreConfig::default()
    });
    let gui = GuiConfig::load();

    let client = match DirectoryClient::new(&core.directory) {
        Ok(client) => client,
        Err(err) => {
            error!("{err}");
            std::process::exit(EX_CONFIG);
        }
    };

    application(
        move || App::new(client.clone(), gui.initial_mode),
        App::update,
        App::view,
    )
    .theme(App::theme)
    .title(App::title)
    .window_size((760.0, 720.0))
    .run()
}

#[derive(Debug, Clone)]
enum Message {
    ProfileLookup(profile_lookup::Message),
}

struct App {
    title: String,
    // Components
    profile_lookup: ProfileLookup,
}

impl App {
    pub fn new(client: DirectoryClient, mode: DisplayMode) -> (Self, Task<Message>) {
        let (profile_lookup, profile_lookup_task) = ProfileLookup::new(client, mode);

        (
            Self {
                title: "devfinder".into(),
                profile_lookup,
            },
            profile_lookup_task.map(Message::ProfileLookup),
        )
    }

    // Update application state based on messages passed by view()
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // Redirect messages to relevant child components
            Message::ProfileLookup(msg) => self
                .profile_lookup
                .update(msg)
                .map(Message::ProfileLookup),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        self.profile_lookup.view().map(Message::ProfileLookup)
    }

    pub fn title(&self) -> String {
        self.title.clone()
    }

    pub fn theme(&self) -> Theme {
        theme::theme(self.profile_lookup.display_mode())
    }
}
