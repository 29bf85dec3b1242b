use serde::Serialize;

use crate::models::Profile;
use crate::store::ProfileStore;

/// Label on the card's select button.
pub const VIEW_SUMMARY_LABEL: &str = "View Summary";

/// A profile card in the main grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileCard {
    pub id: String,
    pub name: String,
    pub photo: String,
    pub description: String,
    pub address: String,
    pub action_label: &'static str,
}

impl From<&Profile> for ProfileCard {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id.clone(),
            name: profile.name.clone(),
            photo: profile.photo.clone(),
            description: profile.description.clone(),
            address: profile.address.clone(),
            action_label: VIEW_SUMMARY_LABEL,
        }
    }
}

/// One card per displayed profile, in display order.
pub fn cards(store: &ProfileStore) -> Vec<ProfileCard> {
    store.displayed().iter().map(ProfileCard::from).collect()
}

/// "View Summary" click: select the card's profile as displayed.
pub fn on_view_summary(store: &mut ProfileStore, id: &str) -> bool {
    let Some(profile) = store.displayed().iter().find(|p| p.id == id).cloned() else {
        return false;
    };
    store.select(Some(profile));
    true
}
