pub mod breathing;
pub mod button;
pub mod captcha_modal;
pub mod common;
pub mod companion_scene;
pub mod context_menu;
pub mod crisis_modal;
pub mod journal;
pub mod message_input;
pub mod message_item;
pub mod modal;
pub mod mood_chart;
pub mod resource;
pub mod theme_selector;
pub mod toast;

pub use breathing::{BreathingActive, BreathingSelection};
pub use button::{Button, ButtonVariant};
pub use captcha_modal::CaptchaModal;
pub use common::{EmptyState, ErrorBanner, ErrorMessage, LoadingText, PageLoading};
pub use companion_scene::CompanionStage;
pub use context_menu::{ChatContextMenu, ContextMenuState};
pub use crisis_modal::CrisisModal;
pub use journal::{JournalCard, JournalDetailModal, JournalFormModal};
pub use message_input::MessageInput;
pub use message_item::{render_markdown, BotAvatar, MessageItem, TypingIndicator};
pub use modal::{ConfirmModal, Modal};
pub use mood_chart::MoodChart;
pub use resource::{ResourceCard, ResourceDetailModal};
pub use theme_selector::ThemeSelector;
pub use toast::ToastStack;
