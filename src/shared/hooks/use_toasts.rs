use dioxus::prelude::*;
use std::time::Duration;

use crate::shared::constants::TOAST_DURATION_SECS;
use crate::shared::state::{ToastKind, Toasts};
use crate::shared::utils::sleep;

/// Handle for showing toasts; cheap to copy into event handlers
#[derive(Clone, Copy, PartialEq)]
pub struct ToastHandle {
    pub toasts: Signal<Toasts>,
}

impl ToastHandle {
    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.write().dismiss(id);
    }

    fn show(&self, kind: ToastKind, message: String) {
        let mut toasts = self.toasts;
        let id = toasts.write().push(kind, message);
        spawn(async move {
            sleep(Duration::from_secs(TOAST_DURATION_SECS)).await;
            toasts.write().dismiss(id);
        });
    }
}

pub fn use_toasts() -> ToastHandle {
    ToastHandle {
        toasts: use_context::<Signal<Toasts>>(),
    }
}

pub fn use_toasts_provider() -> ToastHandle {
    ToastHandle {
        toasts: use_context_provider(|| Signal::new(Toasts::default())),
    }
}
