use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    icons::Icon,
    library::LibraryCounts,
    settings,
    storage::KeyValueStore,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuItemId {
    Home,
    Search,
    Artists,
    Albums,
    Tracks,
    Playlists,
    Audiobooks,
    Podcasts,
    Radios,
    Genres,
    Browse,
    Settings,
}

impl MenuItemId {
    pub const ALL: [MenuItemId; 12] = [
        MenuItemId::Home,
        MenuItemId::Search,
        MenuItemId::Artists,
        MenuItemId::Albums,
        MenuItemId::Tracks,
        MenuItemId::Playlists,
        MenuItemId::Audiobooks,
        MenuItemId::Podcasts,
        MenuItemId::Radios,
        MenuItemId::Genres,
        MenuItemId::Browse,
        MenuItemId::Settings,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MenuItemId::Home => "home",
            MenuItemId::Search => "search",
            MenuItemId::Artists => "artists",
            MenuItemId::Albums => "albums",
            MenuItemId::Tracks => "tracks",
            MenuItemId::Playlists => "playlists",
            MenuItemId::Audiobooks => "audiobooks",
            MenuItemId::Podcasts => "podcasts",
            MenuItemId::Radios => "radios",
            MenuItemId::Genres => "genres",
            MenuItemId::Browse => "browse",
            MenuItemId::Settings => "settings",
        }
    }
}

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MenuItemId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| Error::UnknownMenuItem(s.to_owned()))
    }
}

/// Canonical sidebar ordering. Items added here show up for every user unless
/// they explicitly switched them off.
pub const DEFAULT_MENU_ITEMS: &[&str] = &[
    "home",
    "search",
    "artists",
    "albums",
    "tracks",
    "playlists",
    "audiobooks",
    "podcasts",
    "radios",
    "genres",
    "browse",
    "settings",
];

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Translation key of the entry title.
    pub label: &'static str,
    pub icon: Icon,
    pub path: &'static str,
    pub is_library_node: bool,
    pub hidden: bool,
    pub disabled: bool,
}

impl MenuItem {
    fn new(label: &'static str, icon: Icon, path: &'static str, is_library_node: bool) -> Self {
        Self {
            label,
            icon,
            path,
            is_library_node,
            hidden: false,
            disabled: false,
        }
    }

    fn disabled_if(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Builds the fixed descriptor for `id`.
    pub fn for_id(id: MenuItemId, library: &impl LibraryCounts) -> Self {
        match id {
            MenuItemId::Home => Self::new("home", Icon::House, "/home", false),
            MenuItemId::Search => Self::new("search", Icon::Search, "/search", false),
            MenuItemId::Artists => Self::new("artists", Icon::Artist, "/artists", true),
            MenuItemId::Albums => Self::new("albums", Icon::Disc, "/albums", true),
            MenuItemId::Tracks => Self::new("tracks", Icon::Music, "/tracks", true),
            MenuItemId::Playlists => Self::new("playlists", Icon::ListMusic, "/playlists", true),
            MenuItemId::Audiobooks => {
                Self::new("audiobooks", Icon::BookAudio, "/audiobooks", true)
                    .disabled_if(library.audiobooks_count() == 0)
            }
            MenuItemId::Podcasts => Self::new("podcasts", Icon::Podcast, "/podcasts", true)
                .disabled_if(library.podcasts_count() == 0),
            MenuItemId::Radios => Self::new("radios", Icon::Radio, "/radios", true),
            MenuItemId::Genres => Self::new("genres", Icon::Tag, "/genres", true),
            MenuItemId::Browse => Self::new("browse", Icon::Folder, "/browse", true),
            MenuItemId::Settings => {
                Self::new("settings.settings", Icon::Settings, "/settings", true)
            }
        }
    }
}

/// Builds the sidebar entries from the canonical ordering, skipping items the
/// user switched off.
pub fn get_menu_items(
    store: &impl KeyValueStore,
    library: &impl LibraryCounts,
) -> Vec<MenuItem> {
    build_menu_items(DEFAULT_MENU_ITEMS, store, library)
}

/// Same as [`get_menu_items`] with a caller supplied ordering. Identifiers that
/// don't name a known entry are dropped.
pub fn build_menu_items<S: AsRef<str>>(
    defaults: &[S],
    store: &impl KeyValueStore,
    library: &impl LibraryCounts,
) -> Vec<MenuItem> {
    let mut items = Vec::with_capacity(defaults.len());
    for name in defaults {
        let name = name.as_ref();
        if !settings::is_enabled(store, name) {
            continue;
        }
        match name.parse::<MenuItemId>() {
            Ok(id) => items.push(MenuItem::for_id(id, library)),
            Err(_) => log::debug!("skipping unknown menu item: {name}"),
        }
    }
    items
}
