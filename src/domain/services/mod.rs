// Business logic services
// Framework-agnostic, 100% testable

pub mod breathing;
pub mod chat_store;
pub mod companion;
pub mod mood_stats;
pub mod resource_search;
pub mod validation;

pub use breathing::BreathingSession;
pub use chat_store::{ChatStore, STORE_KEY};
pub use companion::{AgentState, CompanionPhase, CompanionScene};
pub use mood_stats::{chart_points, streaks, ChartPoint, Streaks, TimePeriod};
pub use resource_search::{group_by_category, search, SearchHit};
