//! Personalisation for anonymous users, kept only in this browser

use super::storage;
use crate::domain::models::Personalisation;
use crate::shared::constants::ANON_PERSONALISATION_KEY;

pub fn load() -> Personalisation {
    storage::load_json(ANON_PERSONALISATION_KEY).unwrap_or_default()
}

pub fn save(personalisation: &Personalisation) {
    storage::save_json(ANON_PERSONALISATION_KEY, personalisation);
}

pub fn clear() {
    storage::remove(ANON_PERSONALISATION_KEY);
}
