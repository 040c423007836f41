use serde::{Deserialize, Serialize};

use crate::{
    media::{ContextMenuItem, MediaItem},
    selector::Selector,
};

// Payloads

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextMenuDialogEvent {
    pub items: Vec<ContextMenuItem>,
    pub pos_x: Option<f64>,
    pub pos_y: Option<f64>,
    pub show_play_menu_header: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistDialogEvent {
    pub items: Vec<MediaItem>,
    pub parent_item: Option<MediaItem>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlaylistEvent {
    pub queue_id: Option<String>,
    pub provider_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeGenreDialogEvent {
    pub genre_ids: Vec<String>,
    pub genre_names: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteGenreDialogEvent {
    pub genre_ids: Vec<String>,
    pub navigate_back: Option<bool>,
}

// Dialogs

pub const CONTEXT_MENU: Selector<ContextMenuDialogEvent> = Selector::new("contextmenu");
pub const PLAYLIST_DIALOG: Selector<PlaylistDialogEvent> = Selector::new("playlistdialog");
pub const CREATE_PLAYLIST: Selector<CreatePlaylistEvent> = Selector::new("createPlaylist");
pub const MERGE_GENRE_DIALOG: Selector<MergeGenreDialogEvent> =
    Selector::new("mergeGenreDialog");
pub const DELETE_GENRE_DIALOG: Selector<DeleteGenreDialogEvent> =
    Selector::new("deleteGenreDialog");

// Selection

pub const CLEAR_SELECTION: Selector = Selector::new("clearSelection");

// Layout

pub const HOMESCREEN_EDIT_TOGGLE: Selector = Selector::new("homescreen-edit-toggle");
pub const MOBILE_SIDEBAR_OPEN: Selector = Selector::new("mobile-sidebar-open");

pub const EVENT_NAMES: [&str; 8] = [
    CONTEXT_MENU.name(),
    PLAYLIST_DIALOG.name(),
    CREATE_PLAYLIST.name(),
    MERGE_GENRE_DIALOG.name(),
    DELETE_GENRE_DIALOG.name(),
    CLEAR_SELECTION.name(),
    HOMESCREEN_EDIT_TOGGLE.name(),
    MOBILE_SIDEBAR_OPEN.name(),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn event_names_are_unique() {
        let names: HashSet<_> = EVENT_NAMES.iter().collect();
        assert_eq!(names.len(), EVENT_NAMES.len());
    }

    #[test]
    fn payloads_use_camel_case() {
        let event = DeleteGenreDialogEvent {
            genre_ids: vec!["rock".into()],
            navigate_back: Some(true),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["genreIds"][0], "rock");
        assert_eq!(json["navigateBack"], true);

        let event: ContextMenuDialogEvent =
            serde_json::from_str(r#"{"items":[{"label":"play_now"}],"posX":12.5}"#).unwrap();
        assert_eq!(event.items[0].label, "play_now");
        assert_eq!(event.pos_x, Some(12.5));
        assert_eq!(event.pos_y, None);
    }
}
