use dioxus::prelude::*;

/// Screen position of an open chat context menu
#[derive(Debug, Clone, PartialEq)]
pub struct ContextMenuState {
    pub chat_id: String,
    pub x: f64,
    pub y: f64,
}

/// Right-click menu for a chat in the sidebar. Clicking anywhere else closes it.
#[component]
pub fn ChatContextMenu(
    state: ContextMenuState,
    on_rename: EventHandler<String>,
    on_delete: EventHandler<String>,
    on_close: EventHandler<()>,
) -> Element {
    let rename_id = state.chat_id.clone();
    let delete_id = state.chat_id.clone();

    rsx! {
        div {
            class: "c-context-menu__backdrop",
            onclick: move |_| on_close.call(()),
            oncontextmenu: move |evt| {
                evt.prevent_default();
                on_close.call(());
            },
        }
        div {
            class: "c-context-menu",
            role: "menu",
            style: "left: {state.x}px; top: {state.y}px;",
            button {
                class: "c-context-menu__item",
                role: "menuitem",
                onclick: move |_| {
                    on_rename.call(rename_id.clone());
                    on_close.call(());
                },
                "✏️ Rename"
            }
            button {
                class: "c-context-menu__item c-context-menu__item--danger",
                role: "menuitem",
                onclick: move |_| {
                    on_delete.call(delete_id.clone());
                    on_close.call(());
                },
                "🗑️ Delete"
            }
        }
    }
}
