use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::icons::Icon;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Artist,
    Album,
    Track,
    Playlist,
    Radio,
    Audiobook,
    Podcast,
    PodcastEpisode,
    Genre,
    Folder,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct MediaItem {
    pub item_id: Arc<str>,
    pub provider: Arc<str>,
    pub name: Arc<str>,
    pub media_type: MediaType,
    pub uri: Arc<str>,
}

impl MediaItem {
    pub fn new(media_type: MediaType, provider: &str, item_id: &str, name: &str) -> Self {
        let uri = format!("{provider}://{}/{item_id}", media_type.as_str());
        Self {
            item_id: item_id.into(),
            provider: provider.into(),
            name: name.into(),
            media_type,
            uri: uri.into(),
        }
    }
}

impl MediaType {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Artist => "artist",
            MediaType::Album => "album",
            MediaType::Track => "track",
            MediaType::Playlist => "playlist",
            MediaType::Radio => "radio",
            MediaType::Audiobook => "audiobook",
            MediaType::Podcast => "podcast",
            MediaType::PodcastEpisode => "podcast_episode",
            MediaType::Genre => "genre",
            MediaType::Folder => "folder",
            MediaType::Unknown => "unknown",
        }
    }
}

/// Entry of a context menu. Nested entries open as a submenu.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextMenuItem {
    pub label: String,
    pub icon: Option<Icon>,
    pub disabled: bool,
    pub hidden: bool,
    pub sub_items: Vec<ContextMenuItem>,
}

impl ContextMenuItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_sub_items(mut self, sub_items: Vec<ContextMenuItem>) -> Self {
        self.sub_items = sub_items;
        self
    }
}
