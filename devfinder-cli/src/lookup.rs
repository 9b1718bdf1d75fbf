use colored::Colorize;
use devfinder_lib::{
    DirectoryClient, DisplayMode, ProfileLookup, config::CoreConfig, view::LookupView,
};
use sysexits::ExitCode;
use tracing::warn;

use crate::render;

#[derive(clap::Args, Debug, Clone)]
pub struct Args {
    /// Handle of the profile to look up
    handle: String,

    /// Colour scheme of the printed card
    #[arg(short, long, default_value_t = DisplayMode::Light)]
    mode: DisplayMode,

    /// Print the profile as JSON instead of a card
    #[arg(long)]
    json: bool,
}

pub fn handle(args: &Args) -> ExitCode {
    let cfg = CoreConfig::load().unwrap_or_else(|err| {
        warn!("Using default configuration: {err}");
        CoreConfig::default()
    });

    let client = match DirectoryClient::new(&cfg.directory) {
        Ok(client) => client,
        Err(err) => return fail(&err, ExitCode::Config),
    };

    let mut lookup = ProfileLookup::new(args.mode);
    lookup.set_query(args.handle.as_str());

    let Some(request) = lookup.submit() else {
        eprintln!("{} the handle must not be empty", "error:".red().bold());
        return ExitCode::Usage;
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => return fail(&err, ExitCode::OsErr),
    };

    let (generation, result) = runtime.block_on(request.run(&client));
    lookup.settle(generation, result);

    match (lookup.view(), lookup.profile()) {
        (LookupView::Profile(_), Some(profile)) if args.json => {
            match serde_json::to_string_pretty(profile) {
                Ok(json) => {
                    println!("{json}");
                    ExitCode::Ok
                }
                Err(err) => fail(&err, ExitCode::Software),
            }
        }
        (LookupView::Profile(card), _) => {
            print!("{}", render::card(&card, lookup.display_mode()));
            ExitCode::Ok
        }
        (LookupView::Error(err), _) => {
            eprintln!("{}", render::error(err, lookup.display_mode()));
            ExitCode::Unavailable
        }
        (LookupView::Initial | LookupView::Loading, _) => ExitCode::Software,
    }
}

fn fail(err: &dyn std::error::Error, code: ExitCode) -> ExitCode {
    eprintln!("{} {err}", "error:".red().bold());
    code
}
