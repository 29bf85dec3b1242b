//! Admin panel: management list and the create/edit form.
//!
//! The access check here is a display guard. It hides the management UI
//! when admin mode is off; it does not protect any store operation, and
//! the HTTP API performs the same mutations without consulting it.

use serde::{Deserialize, Serialize};

use crate::models::{AdditionalDetails, Profile};
use crate::store::{ProfileStore, StoreError};

pub const ACCESS_DENIED_TITLE: &str = "Admin Access Required";
pub const ACCESS_DENIED_MESSAGE: &str = "You need admin privileges to access this section.";

// ═══════════════════════════════════════════════════════════
// Error type
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    /// Required fields left empty. Names match the form's JSON fields.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("No form is open")]
    NoOpenForm,
    #[error(transparent)]
    Store(#[from] StoreError),
}

// ═══════════════════════════════════════════════════════════
// Form state
// ═══════════════════════════════════════════════════════════

/// Field values of the create/edit form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileForm {
    pub name: String,
    pub description: String,
    pub photo: String,
    pub address: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub experience: String,
    pub education: String,
    /// Details the form does not edit (bio, skills, languages, social
    /// links), carried over unchanged when editing.
    #[serde(skip)]
    preserved: AdditionalDetails,
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl ProfileForm {
    /// Pre-fill from an existing profile for editing.
    pub fn from_profile(profile: &Profile) -> Self {
        let details = &profile.additional_details;
        Self {
            name: profile.name.clone(),
            description: profile.description.clone(),
            photo: profile.photo.clone(),
            address: profile.address.clone(),
            lat: Some(profile.lat),
            lng: Some(profile.lng),
            email: details.email.clone().unwrap_or_default(),
            phone: details.phone.clone().unwrap_or_default(),
            website: details.website.clone().unwrap_or_default(),
            experience: details.experience.clone().unwrap_or_default(),
            education: details.education.clone().unwrap_or_default(),
            preserved: details.clone(),
        }
    }

    /// Take the editable field values of `edits`. Details carried over from
    /// the profile being edited are kept.
    pub fn merge_edits(&mut self, edits: ProfileForm) {
        let preserved = std::mem::take(&mut self.preserved);
        *self = Self { preserved, ..edits };
    }

    /// Required fields that are empty, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        for (field, value) in [
            ("name", &self.name),
            ("description", &self.description),
            ("photo", &self.photo),
            ("address", &self.address),
        ] {
            if value.trim().is_empty() {
                missing.push(field);
            }
        }
        if !self.lat.is_some_and(f64::is_finite) {
            missing.push("lat");
        }
        if !self.lng.is_some_and(f64::is_finite) {
            missing.push("lng");
        }
        missing
    }

    pub fn validate(&self) -> Result<(), FormError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(FormError::MissingFields(missing))
        }
    }

    /// Validate and convert into a profile carrying `id`.
    pub fn to_profile(&self, id: String) -> Result<Profile, FormError> {
        self.validate()?;
        Ok(Profile {
            id,
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            photo: self.photo.trim().to_string(),
            address: self.address.trim().to_string(),
            lat: self.lat.unwrap_or_default(),
            lng: self.lng.unwrap_or_default(),
            additional_details: AdditionalDetails {
                email: optional(&self.email),
                phone: optional(&self.phone),
                website: optional(&self.website),
                experience: optional(&self.experience),
                education: optional(&self.education),
                ..self.preserved.clone()
            },
        })
    }
}

/// Whether the open form creates a new profile or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum FormMode {
    Create,
    Edit { id: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenForm {
    pub mode: FormMode,
    pub fields: ProfileForm,
}

// ═══════════════════════════════════════════════════════════
// View model
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AdminView {
    AccessDenied {
        title: &'static str,
        message: &'static str,
    },
    Management {
        rows: Vec<AdminRow>,
        form: Option<OpenForm>,
    },
}

// ═══════════════════════════════════════════════════════════
// Controller
// ═══════════════════════════════════════════════════════════

/// Admin panel state: at most one open form.
#[derive(Debug, Default)]
pub struct AdminPanel {
    form: Option<OpenForm>,
}

impl AdminPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self, store: &ProfileStore) -> AdminView {
        if !store.is_admin() {
            return AdminView::AccessDenied {
                title: ACCESS_DENIED_TITLE,
                message: ACCESS_DENIED_MESSAGE,
            };
        }
        AdminView::Management {
            rows: store
                .profiles()
                .iter()
                .map(|p| AdminRow {
                    id: p.id.clone(),
                    name: p.name.clone(),
                    description: p.description.clone(),
                    address: p.address.clone(),
                })
                .collect(),
            form: self.form.clone(),
        }
    }

    pub fn open_form(&self) -> Option<&OpenForm> {
        self.form.as_ref()
    }

    /// "Add New Profile": open an empty form.
    pub fn begin_create(&mut self) {
        self.form = Some(OpenForm {
            mode: FormMode::Create,
            fields: ProfileForm::default(),
        });
    }

    /// "Edit": open the form pre-filled from `profile`.
    pub fn begin_edit(&mut self, profile: &Profile) {
        self.form = Some(OpenForm {
            mode: FormMode::Edit {
                id: profile.id.clone(),
            },
            fields: ProfileForm::from_profile(profile),
        });
    }

    pub fn cancel(&mut self) {
        self.form = None;
    }

    /// Mutable access to the open form's fields for input events.
    pub fn fields_mut(&mut self) -> Option<&mut ProfileForm> {
        self.form.as_mut().map(|f| &mut f.fields)
    }

    /// Submit the open form. Invalid input leaves the form open and the
    /// store untouched. On success the form closes.
    pub fn submit(&mut self, store: &mut ProfileStore) -> Result<Profile, FormError> {
        let form = self.form.as_ref().ok_or(FormError::NoOpenForm)?;

        let saved = match &form.mode {
            FormMode::Create => {
                let profile = form.fields.to_profile(String::new())?;
                store.create(profile)
            }
            FormMode::Edit { id } => {
                let profile = form.fields.to_profile(id.clone())?;
                store.update(profile.clone())?;
                store.get(id).cloned().unwrap_or(profile)
            }
        };

        self.form = None;
        Ok(saved)
    }

    /// "Delete" on a row. Closes the form if it was editing that profile.
    pub fn delete(&mut self, store: &mut ProfileStore, id: &str) -> bool {
        if matches!(&self.form, Some(OpenForm { mode: FormMode::Edit { id: editing }, .. }) if editing == id)
        {
            self.form = None;
        }
        store.delete(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ProfileForm {
        ProfileForm {
            name: "Linus".into(),
            description: "Kernel Maintainer".into(),
            photo: "https://example.com/l.jpg".into(),
            address: "Portland, OR".into(),
            lat: Some(45.52),
            lng: Some(-122.68),
            email: "  ".into(),
            experience: "30 years".into(),
            ..Default::default()
        }
    }

    fn admin_store() -> ProfileStore {
        let mut store = ProfileStore::seeded();
        store.set_admin_mode(true);
        store
    }

    #[test]
    fn access_denied_when_not_admin() {
        let store = ProfileStore::seeded();
        let view = AdminPanel::new().view(&store);
        assert_eq!(
            view,
            AdminView::AccessDenied {
                title: "Admin Access Required",
                message: ACCESS_DENIED_MESSAGE,
            }
        );
    }

    #[test]
    fn management_lists_canonical_profiles() {
        let mut store = admin_store();
        store.search("jane");
        match AdminPanel::new().view(&store) {
            AdminView::Management { rows, form } => {
                assert_eq!(rows.len(), 2);
                assert!(form.is_none());
            }
            other => panic!("Expected Management, got: {other:?}"),
        }
    }

    #[test]
    fn missing_fields_are_reported_in_order() {
        let form = ProfileForm {
            name: "Only Name".into(),
            lat: Some(f64::NAN),
            ..Default::default()
        };
        assert_eq!(
            form.missing_fields(),
            vec!["description", "photo", "address", "lat", "lng"]
        );
        let err = form.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required fields: description, photo, address, lat, lng"
        );
    }

    #[test]
    fn zero_coordinates_are_valid() {
        let form = ProfileForm {
            lat: Some(0.0),
            lng: Some(0.0),
            ..filled_form()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn submit_create_adds_profile_and_closes_form() {
        let mut store = admin_store();
        let mut panel = AdminPanel::new();
        panel.begin_create();
        *panel.fields_mut().unwrap() = filled_form();

        let saved = panel.submit(&mut store).unwrap();

        assert!(panel.open_form().is_none());
        assert_eq!(store.profiles().len(), 3);
        assert_eq!(saved.additional_details.email, None);
        assert_eq!(saved.additional_details.experience.as_deref(), Some("30 years"));
        assert_eq!(saved.additional_details.skills, Some(vec![]));
    }

    #[test]
    fn invalid_submit_keeps_form_and_store() {
        let mut store = admin_store();
        let mut panel = AdminPanel::new();
        panel.begin_create();
        panel.fields_mut().unwrap().name = "Incomplete".into();

        let err = panel.submit(&mut store).unwrap_err();

        assert!(matches!(err, FormError::MissingFields(_)));
        assert!(panel.open_form().is_some());
        assert_eq!(store.profiles().len(), 2);
    }

    #[test]
    fn submit_without_form_fails() {
        let mut store = admin_store();
        let err = AdminPanel::new().submit(&mut store).unwrap_err();
        assert_eq!(err, FormError::NoOpenForm);
    }

    #[test]
    fn edit_preserves_details_not_on_form() {
        let mut store = admin_store();
        let john = store.get("1").unwrap().clone();
        let mut panel = AdminPanel::new();
        panel.begin_edit(&john);
        panel.fields_mut().unwrap().description = "Staff Engineer".into();

        panel.submit(&mut store).unwrap();

        let updated = store.get("1").unwrap();
        assert_eq!(updated.description, "Staff Engineer");
        assert_eq!(updated.skills(), john.skills());
        assert_eq!(updated.additional_details.bio, john.additional_details.bio);
        assert_eq!(
            updated.additional_details.social_links,
            john.additional_details.social_links
        );
        assert_eq!(store.profiles().len(), 2);
    }

    #[test]
    fn edit_of_deleted_profile_surfaces_not_found() {
        let mut store = admin_store();
        let jane = store.get("2").unwrap().clone();
        let mut panel = AdminPanel::new();
        panel.begin_edit(&jane);
        store.delete("2");

        let err = panel.submit(&mut store).unwrap_err();
        assert_eq!(err, FormError::Store(StoreError::NotFound("2".into())));
        assert_eq!(store.profiles().len(), 1);
    }

    #[test]
    fn deleting_edited_profile_closes_form() {
        let mut store = admin_store();
        let jane = store.get("2").unwrap().clone();
        let mut panel = AdminPanel::new();
        panel.begin_edit(&jane);

        assert!(panel.delete(&mut store, "2"));
        assert!(panel.open_form().is_none());
        assert!(!panel.delete(&mut store, "2"));
    }

    #[test]
    fn form_deserializes_camel_case_with_defaults() {
        let form: ProfileForm =
            serde_json::from_str(r#"{"name":"A","lat":1.5,"education":"BSc"}"#).unwrap();
        assert_eq!(form.lat, Some(1.5));
        assert!(form.lng.is_none());
        assert_eq!(form.education, "BSc");
    }

    #[test]
    fn merge_edits_keeps_details_of_edited_profile() {
        let store = ProfileStore::seeded();
        let john = store.get("1").unwrap();
        let mut form = ProfileForm::from_profile(john);
        form.merge_edits(filled_form());

        assert_eq!(form.name, "Linus");
        let profile = form.to_profile("1".into()).unwrap();
        assert_eq!(profile.skills(), john.skills());
        assert_eq!(profile.additional_details.experience.as_deref(), Some("30 years"));
    }

    #[test]
    fn cancel_discards_open_form() {
        let mut store = admin_store();
        let mut panel = AdminPanel::new();
        panel.begin_create();
        panel.fields_mut().unwrap().name = "Draft".into();

        panel.cancel();

        assert!(panel.open_form().is_none());
        assert_eq!(panel.submit(&mut store).unwrap_err(), FormError::NoOpenForm);
        assert_eq!(store.profiles().len(), 2);
    }
}
