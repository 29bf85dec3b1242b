use serde::Serialize;

use crate::models::{ExperienceTier, FilterCriteria};
use crate::store::ProfileStore;

/// Skill checkboxes always offered, in display order.
pub const SKILL_OPTIONS: [&str; 8] = [
    "React",
    "TypeScript",
    "Node.js",
    "AWS",
    "UI/UX",
    "Figma",
    "User Research",
    "Design Systems",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillOption {
    pub name: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierOption {
    /// Empty string for "Any".
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOptions {
    pub open: bool,
    pub skills: Vec<SkillOption>,
    pub location: String,
    pub experience: Vec<TierOption>,
}

/// Filter form state. Nothing reaches the store until `apply` or `clear`.
#[derive(Debug, Clone, Default)]
pub struct FilterPanel {
    open: bool,
    skills: Vec<String>,
    location: String,
    experience: Option<ExperienceTier>,
}

impl FilterPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    /// Check or uncheck a skill box.
    pub fn toggle_skill(&mut self, skill: &str) {
        if let Some(pos) = self.skills.iter().position(|s| s == skill) {
            self.skills.remove(pos);
        } else {
            self.skills.push(skill.to_string());
        }
    }

    pub fn set_location(&mut self, location: &str) {
        self.location = location.to_string();
    }

    pub fn set_experience(&mut self, tier: Option<ExperienceTier>) {
        self.experience = tier;
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            skills: Some(self.skills.clone()),
            location: Some(self.location.clone()),
            experience: self.experience.map(|t| t.as_str().to_string()),
        }
    }

    /// "Apply Filters": run the filter and close the panel.
    pub fn apply(&mut self, store: &mut ProfileStore) -> usize {
        let count = store.filter(&self.criteria()).len();
        self.open = false;
        count
    }

    /// "Clear": reset the form and show every profile.
    pub fn clear(&mut self, store: &mut ProfileStore) -> usize {
        *self = Self::default();
        store.filter(&FilterCriteria::default()).len()
    }

    /// Checkbox and select options. Skills beyond the fixed list are
    /// appended in the order they first appear in the store.
    pub fn options(&self, store: &ProfileStore) -> FilterOptions {
        let mut names: Vec<String> = SKILL_OPTIONS.iter().map(|s| s.to_string()).collect();
        for skill in store.skill_catalog() {
            if !names.contains(&skill) {
                names.push(skill);
            }
        }

        let skills = names
            .into_iter()
            .map(|name| SkillOption {
                checked: self.skills.contains(&name),
                name,
            })
            .collect();

        let mut experience = vec![TierOption {
            value: "",
            label: "Any",
            selected: self.experience.is_none(),
        }];
        experience.extend(ExperienceTier::all().iter().map(|tier| TierOption {
            value: tier.as_str(),
            label: tier.label(),
            selected: self.experience == Some(*tier),
        }));

        FilterOptions {
            open: self.open,
            skills,
            location: self.location.clone(),
            experience,
        }
    }
}
