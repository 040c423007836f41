use std::{env, process::ExitCode};

use env_logger::{Builder, Env};
use muse_core::{
    cmd,
    error::Error,
    eventbus::EventBus,
    library::LibraryStats,
    menu::{get_menu_items, MenuItemId},
    selector::Selector,
    settings,
    storage::FileStorage,
};

const ENV_LOG: &str = "MUSE_LOG";
const ENV_LOG_STYLE: &str = "MUSE_LOG_STYLE";
const ENV_SETTINGS: &str = "MUSE_SETTINGS";

const USAGE: &str = "\
usage: muse-cli menu [--audiobooks <n>] [--podcasts <n>] [--json]
       muse-cli enable <item>
       muse-cli disable <item>
       muse-cli reset
       muse-cli emit <event>";

fn main() -> ExitCode {
    // Setup logging from the env variables, with defaults.
    Builder::from_env(
        Env::new()
            .filter_or(ENV_LOG, "info")
            .write_style(ENV_LOG_STYLE),
    )
    .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    let result = match command.as_str() {
        "menu" => print_menu(rest),
        "enable" => toggle(rest, true),
        "disable" => toggle(rest, false),
        "reset" => open_storage().and_then(|store| settings::reset_menu_items(&store)),
        "emit" => emit(rest),
        _ => {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn open_storage() -> Result<FileStorage, Error> {
    match env::var_os(ENV_SETTINGS) {
        Some(path) => FileStorage::open(path),
        None => FileStorage::open_default(),
    }
}

#[derive(Debug, Default, PartialEq)]
struct MenuArgs {
    library: LibraryStats,
    json: bool,
}

fn parse_menu_args(args: &[String]) -> Result<MenuArgs, Error> {
    let mut parsed = MenuArgs::default();
    let mut args = args.iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--audiobooks" => parsed.library.audiobooks = parse_count(arg, args.next())?,
            "--podcasts" => parsed.library.podcasts = parse_count(arg, args.next())?,
            "--json" => parsed.json = true,
            _ => log::warn!("ignoring unknown argument: {arg}"),
        }
    }
    Ok(parsed)
}

fn print_menu(args: &[String]) -> Result<(), Error> {
    let MenuArgs { library, json } = parse_menu_args(args)?;

    let store = open_storage()?;
    let items = get_menu_items(&store, &library);
    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }
    for item in items {
        let mut flags = Vec::new();
        if item.is_library_node {
            flags.push("library");
        }
        if item.disabled {
            flags.push("disabled");
        }
        println!(
            "{:<20} {:<12} {:<12} {}",
            item.label,
            item.path,
            item.icon.name(),
            flags.join(",")
        );
    }
    Ok(())
}

fn parse_count(flag: &str, value: Option<&String>) -> Result<usize, Error> {
    value
        .and_then(|value| value.parse().ok())
        .ok_or_else(|| Error::InvalidArgument(format!("{flag} expects a number")))
}

fn toggle(args: &[String], enabled: bool) -> Result<(), Error> {
    let id: MenuItemId = match args.first() {
        Some(name) => name.parse()?,
        None => return Err(Error::InvalidArgument("missing menu item".into())),
    };
    let store = open_storage()?;
    settings::set_menu_item_enabled(&store, id, enabled)?;
    log::info!(
        "{id} {} in {:?}",
        if enabled { "enabled" } else { "disabled" },
        store.path()
    );
    Ok(())
}

/// Publishes a payload-free event on the global bus, for poking at listeners
/// while debugging.
fn emit(args: &[String]) -> Result<(), Error> {
    const SIGNALS: [Selector; 3] = [
        cmd::CLEAR_SELECTION,
        cmd::HOMESCREEN_EDIT_TOGGLE,
        cmd::MOBILE_SIDEBAR_OPEN,
    ];

    let name = args.first().map(String::as_str).unwrap_or_default();
    let Some(selector) = SIGNALS.into_iter().find(|selector| selector.name() == name) else {
        log::error!("events without payload: {:?}", SIGNALS.map(|s| s.name()));
        return Err(Error::UnknownEvent(name.to_owned()));
    };

    let bus = EventBus::global();
    let id = bus.subscribe_all(|name| log::info!("event: {name}"));
    bus.notify(selector);
    bus.unsubscribe_any(id);
    Ok(())
}
