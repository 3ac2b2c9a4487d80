use dioxus::prelude::*;

use crate::domain::services::{ChatStore, STORE_KEY};
use crate::shared::services::storage;

/// Set once the persisted store has been read back after mount
#[derive(Clone, Copy)]
struct StoreLoaded(Signal<bool>);

/// Chats, settings and disclaimer state, provided by `use_store_provider`
pub fn use_store() -> Signal<ChatStore> {
    use_context::<Signal<ChatStore>>()
}

/// Whether the store reflects localStorage yet; guards wait for this
pub fn use_store_loaded() -> Signal<bool> {
    use_context::<StoreLoaded>().0
}

/// Provide the store context, loaded from localStorage after mount and
/// written back on every change
pub fn use_store_provider() -> Signal<ChatStore> {
    let mut store = use_context_provider(|| Signal::new(ChatStore::default()));
    let mut loaded = use_context_provider(|| StoreLoaded(Signal::new(false))).0;

    use_effect(move || {
        if let Some(json) = storage::load(STORE_KEY) {
            store.set(ChatStore::from_json(&json));
        }
        loaded.set(true);
    });

    use_effect(move || {
        let json = store.read().to_json();
        if *loaded.peek() {
            storage::save(STORE_KEY, &json);
        }
    });

    store
}
