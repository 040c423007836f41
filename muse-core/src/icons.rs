use serde::{Deserialize, Serialize};

/// Reference to a glyph in the client's icon set. Rendering is up to the UI,
/// this only names the glyph.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    House,
    Search,
    Artist,
    #[serde(rename = "disc-3")]
    Disc,
    #[serde(rename = "music-2")]
    Music,
    ListMusic,
    BookAudio,
    Podcast,
    Radio,
    Tag,
    Folder,
    Settings,
}

impl Icon {
    pub const ALL: [Icon; 12] = [
        Icon::House,
        Icon::Search,
        Icon::Artist,
        Icon::Disc,
        Icon::Music,
        Icon::ListMusic,
        Icon::BookAudio,
        Icon::Podcast,
        Icon::Radio,
        Icon::Tag,
        Icon::Folder,
        Icon::Settings,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Icon::House => "house",
            Icon::Search => "search",
            // Not part of the stock glyph set, the client ships its own.
            Icon::Artist => "artist",
            Icon::Disc => "disc-3",
            Icon::Music => "music-2",
            Icon::ListMusic => "list-music",
            Icon::BookAudio => "book-audio",
            Icon::Podcast => "podcast",
            Icon::Radio => "radio",
            Icon::Tag => "tag",
            Icon::Folder => "folder",
            Icon::Settings => "settings",
        }
    }
}
