// Domain models (persisted view-model records)
// Pure Rust, no framework dependencies

pub mod auth;
pub mod breathing;
pub mod chat;
pub mod journal;
pub mod message;
pub mod mood;
pub mod profile;
pub mod resource;
pub mod settings;
pub mod therapy;

pub use auth::{AccountUpdate, AuthSession, AuthUser, SignUpOutcome};
pub use breathing::{BreathingExercise, BreathingPhase, GroundingStep, PhaseKind, BREATHING_EXERCISES, GROUNDING_STEPS};
pub use chat::Chat;
pub use journal::{JournalDraft, JournalEntry, JournalRow};
pub use message::{Message, Role, TherapyMetadata};
pub use mood::{MoodEntry, MoodLevel, NewMoodEntry};
pub use profile::{Personalisation, ProfileRow};
pub use resource::{resource_catalog, ResourceEntry};
pub use settings::{Settings, SettingsPatch, ThemePreference};
pub use therapy::{ContinueConversationRequest, StartConversationRequest, TherapyReply, TherapyStats};
