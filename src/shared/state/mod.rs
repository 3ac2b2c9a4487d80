// Client state held in context signals

pub mod session;
pub mod toasts;

pub use session::{SessionAction, SessionState};
pub use toasts::{Toast, ToastKind, Toasts};
