use serde::Serialize;

use crate::models::{Profile, SocialPlatform};
use crate::store::ProfileStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Email,
    Phone,
    Website,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialLinkView {
    pub platform: SocialPlatform,
    pub url: String,
}

/// The detail overlay for the selected profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    pub id: String,
    pub name: String,
    pub photo: String,
    pub description: String,
    pub address: String,
    pub contacts: Vec<ContactLink>,
    pub experience: Option<String>,
    pub education: Option<String>,
    /// Comma-joined, `None` when the profile lists no languages.
    pub languages: Option<String>,
    pub skills: Vec<String>,
    pub social_links: Vec<SocialLinkView>,
    /// The selection no longer exists in the canonical collection.
    pub stale: bool,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl DetailView {
    pub fn build(profile: &Profile, stale: bool) -> Self {
        let details = &profile.additional_details;

        let mut contacts = Vec::new();
        if let Some(email) = non_empty(&details.email) {
            contacts.push(ContactLink {
                kind: ContactKind::Email,
                label: email.to_string(),
                href: format!("mailto:{email}"),
            });
        }
        if let Some(phone) = non_empty(&details.phone) {
            contacts.push(ContactLink {
                kind: ContactKind::Phone,
                label: phone.to_string(),
                href: format!("tel:{phone}"),
            });
        }
        if let Some(website) = non_empty(&details.website) {
            contacts.push(ContactLink {
                kind: ContactKind::Website,
                label: website.to_string(),
                href: website.to_string(),
            });
        }

        let languages = Some(profile.languages())
            .filter(|l| !l.is_empty())
            .map(|l| l.join(", "));

        let social_links = details
            .social_links
            .as_ref()
            .map(|links| {
                links
                    .entries()
                    .into_iter()
                    .map(|(platform, url)| SocialLinkView {
                        platform,
                        url: url.to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            id: profile.id.clone(),
            name: profile.name.clone(),
            photo: profile.photo.clone(),
            description: profile.description.clone(),
            address: profile.address.clone(),
            contacts,
            experience: non_empty(&details.experience).map(str::to_string),
            education: non_empty(&details.education).map(str::to_string),
            languages,
            skills: profile.skills().to_vec(),
            social_links,
            stale,
        }
    }
}

/// Detail view for the current selection, if any.
pub fn detail(store: &ProfileStore) -> Option<DetailView> {
    store
        .selected()
        .map(|p| DetailView::build(p, !store.contains(&p.id)))
}

/// Close button on the overlay.
pub fn close(store: &mut ProfileStore) {
    store.clear_selection();
}
