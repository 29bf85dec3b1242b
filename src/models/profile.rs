use serde::{Deserialize, Serialize};

use super::enums::SocialPlatform;

/// One directory entry.
///
/// Serialized in the camelCase shape the browser frontend consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Store-assigned. Ignored on create.
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub photo: String,
    pub description: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub additional_details: AdditionalDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Insertion order, duplicates permitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_links: Option<SocialLinks>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

impl SocialLinks {
    pub fn get(&self, platform: SocialPlatform) -> Option<&str> {
        match platform {
            SocialPlatform::Linkedin => self.linkedin.as_deref(),
            SocialPlatform::Github => self.github.as_deref(),
            SocialPlatform::Twitter => self.twitter.as_deref(),
        }
    }

    /// Platforms with a non-empty URL, in display order.
    pub fn entries(&self) -> Vec<(SocialPlatform, &str)> {
        SocialPlatform::all()
            .iter()
            .filter_map(|p| {
                self.get(*p)
                    .filter(|url| !url.is_empty())
                    .map(|url| (*p, url))
            })
            .collect()
    }
}

impl Profile {
    /// Fill absent `skills`, `languages` and `socialLinks` with empty containers.
    pub fn normalized(mut self) -> Self {
        let details = &mut self.additional_details;
        details.skills.get_or_insert_with(Vec::new);
        details.languages.get_or_insert_with(Vec::new);
        details.social_links.get_or_insert_with(SocialLinks::default);
        self
    }

    pub fn skills(&self) -> &[String] {
        self.additional_details.skills.as_deref().unwrap_or_default()
    }

    pub fn languages(&self) -> &[String] {
        self.additional_details.languages.as_deref().unwrap_or_default()
    }

    pub fn experience(&self) -> Option<&str> {
        self.additional_details.experience.as_deref()
    }
}
