use crate::{error::Error, menu::MenuItemId, storage::KeyValueStore};

const MENU_ITEM_KEY_PREFIX: &str = "frontend.settings.menu_item_";
const MENU_ITEM_KEY_SUFFIX: &str = "_enabled";
const DISABLED: &str = "false";
const ENABLED: &str = "true";

pub fn menu_item_key(name: &str) -> String {
    format!("{MENU_ITEM_KEY_PREFIX}{name}{MENU_ITEM_KEY_SUFFIX}")
}

/// Only an explicit `"false"` switches an item off, anything else (including a
/// missing key) leaves it on.
pub fn is_enabled(store: &impl KeyValueStore, name: &str) -> bool {
    store.get(&menu_item_key(name)).as_deref() != Some(DISABLED)
}

pub fn is_menu_item_enabled(store: &impl KeyValueStore, id: MenuItemId) -> bool {
    is_enabled(store, id.as_str())
}

pub fn set_menu_item_enabled(
    store: &impl KeyValueStore,
    id: MenuItemId,
    enabled: bool,
) -> Result<(), Error> {
    log::debug!("menu item {id} enabled: {enabled}");
    let value = if enabled { ENABLED } else { DISABLED };
    store.set(&menu_item_key(id.as_str()), value)
}

/// Drops every stored menu flag, including flags of items this build doesn't
/// know about.
pub fn reset_menu_items(store: &impl KeyValueStore) -> Result<(), Error> {
    for key in store.keys() {
        if key.starts_with(MENU_ITEM_KEY_PREFIX) && key.ends_with(MENU_ITEM_KEY_SUFFIX) {
            store.remove(&key)?;
        }
    }
    Ok(())
}
