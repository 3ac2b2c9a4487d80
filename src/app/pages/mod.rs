pub mod auth;
pub mod chat;
pub mod companion;
pub mod info;
pub mod journal;
pub mod mood;
pub mod resources;
pub mod routes;
pub mod settings;
pub mod terms;

pub use auth::AuthPage;
pub use chat::ChatPage;
pub use companion::CompanionPage;
pub use info::InfoPage;
pub use journal::JournalPage;
pub use mood::MoodPage;
pub use resources::ResourcesPage;
pub use settings::SettingsPage;
pub use terms::TermsPage;
