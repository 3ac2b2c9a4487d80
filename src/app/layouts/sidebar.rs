use dioxus::prelude::*;

use crate::app::components::{ChatContextMenu, ConfirmModal, ContextMenuState, Modal};
use crate::app::pages::routes::Route;
use crate::domain::models::Chat;
use crate::shared::hooks::use_store;

fn nav_items() -> [(&'static str, &'static str, Route); 6] {
    [
        ("💬", "Chat", Route::ChatPage {}),
        ("📊", "Mood Tracker", Route::MoodPage {}),
        ("📖", "Journal", Route::JournalPage {}),
        ("🎙️", "Companion", Route::CompanionPage {}),
        ("📚", "Resources", Route::ResourcesPage {}),
        ("ℹ️", "Info", Route::InfoPage {}),
    ]
}

/// Main navigation plus the list of saved chats
#[component]
pub fn AppSidebar() -> Element {
    let mut store = use_store();
    let mut context_menu = use_signal(|| None::<ContextMenuState>);
    let mut renaming = use_signal(|| None::<(String, String)>);
    let mut deleting = use_signal(|| None::<String>);

    let collapsed = store.read().sidebar_collapsed;
    let chats: Vec<Chat> = store.read().chats.clone();
    let current_id = store.read().current_chat_id.clone();

    let open_recent = move |_| {
        store.write().toggle_sidebar();
        let most_recent = store.peek().chats.first().map(|c| c.id.clone());
        if let Some(id) = most_recent {
            store.write().set_current(Some(id));
            navigator().push(Route::ChatPage {});
        }
    };

    let start_rename = move |chat_id: String| {
        let title = store
            .peek()
            .chat(&chat_id)
            .map(|c| c.title.clone())
            .unwrap_or_default();
        renaming.set(Some((chat_id, title)));
    };

    let mut save_rename = move || {
        if let Some((chat_id, title)) = renaming() {
            if store.write().rename_chat(&chat_id, &title) {
                tracing::debug!(chat_id, "Chat renamed");
            }
        }
        renaming.set(None);
    };

    rsx! {
        aside {
            id: "sidebar-container",
            class: "c-sidebar",
            class: if collapsed { "c-sidebar--collapsed" },
            role: "navigation",
            "aria-label": "Main navigation",

            nav { class: "c-sidebar__nav", role: "menu",
                for (icon, label, target) in nav_items() {
                    Link {
                        key: "{label}",
                        to: target,
                        class: "c-sidebar__nav-item",
                        active_class: "is-active",
                        span { class: "c-sidebar__nav-icon", title: "{label}", "{icon}" }
                        if !collapsed {
                            span { class: "c-sidebar__nav-text", "{label}" }
                        }
                    }
                }
            }

            if collapsed {
                div { class: "c-sidebar__section",
                    button {
                        class: "c-sidebar__recent",
                        title: "Show Recent Chats",
                        onclick: open_recent,
                        "🕘"
                    }
                }
            } else if !chats.is_empty() {
                div { class: "c-sidebar__section c-sidebar__chats",
                    for chat in chats {
                        ChatItem {
                            key: "{chat.id}",
                            is_active: current_id.as_deref() == Some(chat.id.as_str()),
                            chat: chat.clone(),
                            on_select: move |id: String| {
                                store.write().set_current(Some(id));
                                navigator().push(Route::ChatPage {});
                            },
                            on_context_menu: move |state: ContextMenuState| context_menu.set(Some(state)),
                        }
                    }
                }
            }
        }

        if let Some(state) = context_menu() {
            ChatContextMenu {
                state,
                on_rename: start_rename,
                on_delete: move |id: String| deleting.set(Some(id)),
                on_close: move |_| context_menu.set(None),
            }
        }

        if let Some((_, title)) = renaming() {
            Modal { title: "Rename chat".to_string(), on_close: move |_| renaming.set(None),
                div { class: "c-form",
                    input {
                        class: "c-form__input",
                        r#type: "text",
                        "aria-label": "Chat title",
                        value: "{title}",
                        autofocus: true,
                        oninput: move |evt| {
                            if let Some((id, _)) = renaming() {
                                renaming.set(Some((id, evt.value())));
                            }
                        },
                        onkeydown: move |evt| {
                            if evt.key() == Key::Enter {
                                save_rename();
                            }
                        },
                    }
                }
                div { class: "c-modal__actions",
                    button {
                        class: "c-button c-button--ghost",
                        onclick: move |_| renaming.set(None),
                        "Cancel"
                    }
                    button {
                        class: "c-button c-button--primary",
                        disabled: title.trim().is_empty(),
                        onclick: move |_| save_rename(),
                        "Save"
                    }
                }
            }
        }

        if let Some(chat_id) = deleting() {
            ConfirmModal {
                title: "Delete chat".to_string(),
                message: "Are you sure you want to delete this chat?".to_string(),
                confirm_label: "Delete".to_string(),
                on_confirm: move |_| {
                    store.write().delete_chat(&chat_id);
                    deleting.set(None);
                },
                on_cancel: move |_| deleting.set(None),
            }
        }
    }
}

#[component]
fn ChatItem(
    chat: Chat,
    is_active: bool,
    on_select: EventHandler<String>,
    on_context_menu: EventHandler<ContextMenuState>,
) -> Element {
    let select_id = chat.id.clone();
    let menu_id = chat.id.clone();

    rsx! {
        button {
            class: "c-sidebar__chat",
            class: if is_active { "is-active" },
            onclick: move |_| on_select.call(select_id.clone()),
            oncontextmenu: move |evt| {
                evt.prevent_default();
                let point = evt.client_coordinates();
                on_context_menu.call(ContextMenuState {
                    chat_id: menu_id.clone(),
                    x: point.x,
                    y: point.y,
                });
            },
            span { class: "c-sidebar__chat-icon", "💬" }
            span { class: "c-sidebar__chat-title", "{chat.title}" }
        }
    }
}
