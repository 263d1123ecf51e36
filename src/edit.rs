//! Local edit form for a single property.
//!
//! Edits live on a draft copy and are never written back to the store.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::EditError;
use crate::models::{Property, VOTERS};

/// Field name to message, one entry per invalid field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(field, message)| (field.as_str(), message.as_str()))
    }

    fn clear_field(&mut self, field: &str) {
        self.0.remove(field);
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errors)| {
                let message = errors.first().map(|error| {
                    error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string())
                })?;
                Some((field.to_string(), message))
            })
            .collect();
        Self(fields)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Editable copy of a property. Rooms is signed so a negative entry can be
/// reported instead of silently wrapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDraft {
    pub name: String,
    pub url: String,
    pub price: f64,
    pub price_per_person: f64,
    pub rooms: i64,
    pub features: BTreeMap<String, bool>,
    pub votes: BTreeMap<String, String>,
}

impl From<&Property> for PropertyDraft {
    fn from(property: &Property) -> Self {
        Self {
            name: property.name.clone(),
            url: property.url.clone(),
            price: property.price,
            price_per_person: property.price_per_person,
            rooms: i64::from(property.rooms),
            features: property.features.clone(),
            votes: property.votes.clone(),
        }
    }
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

impl Validate for PropertyDraft {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        // written as negations so NaN is rejected too
        if !(self.price > 0.0) {
            errors.add("price", field_error("positive", "Price must be greater than 0"));
        }
        if !(self.price_per_person > 0.0) {
            errors.add(
                "price_per_person",
                field_error("positive", "Price per person must be greater than 0"),
            );
        }
        if self.rooms < 0 {
            errors.add("rooms", field_error("non_negative", "Rooms cannot be negative"));
        } else if self.rooms > i64::from(u32::MAX) {
            errors.add("rooms", field_error("range", "Rooms is too large"));
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Edit session over one property
#[derive(Debug, Clone)]
pub struct EditForm {
    original: Property,
    draft: PropertyDraft,
    errors: FieldErrors,
}

impl EditForm {
    pub fn open(property: &Property) -> Self {
        debug!("Editing {}", property.name);
        Self {
            original: property.clone(),
            draft: PropertyDraft::from(property),
            errors: FieldErrors::default(),
        }
    }

    pub fn draft(&self) -> &PropertyDraft {
        &self.draft
    }

    /// Errors from the last failed submit, minus fields edited since
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != PropertyDraft::from(&self.original)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
        self.errors.clear_field("name");
    }

    pub fn set_price(&mut self, price: f64) {
        self.draft.price = price;
        self.errors.clear_field("price");
    }

    pub fn set_price_per_person(&mut self, price_per_person: f64) {
        self.draft.price_per_person = price_per_person;
        self.errors.clear_field("price_per_person");
    }

    pub fn set_rooms(&mut self, rooms: i64) {
        self.draft.rooms = rooms;
        self.errors.clear_field("rooms");
    }

    pub fn set_feature(&mut self, key: impl Into<String>, enabled: bool) {
        self.draft.features.insert(key.into(), enabled);
    }

    /// An empty vote withdraws it. Only voters already on the property (or
    /// the group's voters, for a property without any) are accepted at submit.
    pub fn set_vote(&mut self, voter: impl Into<String>, vote: impl Into<String>) {
        self.draft.votes.insert(voter.into(), vote.into());
        self.errors.clear_field("votes");
    }

    fn is_known_voter(&self, voter: &str) -> bool {
        if self.original.votes.is_empty() {
            VOTERS.contains(&voter)
        } else {
            self.original.votes.contains_key(voter)
        }
    }

    fn validation_report(&self) -> Result<(), ValidationErrors> {
        let mut report = match self.draft.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(report) => report,
        };

        if let Some(voter) = self.draft.votes.keys().find(|voter| !self.is_known_voter(voter)) {
            let mut error = ValidationError::new("unknown_voter");
            error.message = Some(Cow::Owned(format!("Unknown voter '{voter}'")));
            error.add_param(Cow::Borrowed("voter"), voter);
            report.add("votes", error);
        }

        if report.errors().is_empty() {
            Ok(())
        } else {
            Err(report)
        }
    }

    /// Revert every change
    pub fn reset(&mut self) {
        self.draft = PropertyDraft::from(&self.original);
        self.errors = FieldErrors::default();
    }

    /// Validate the draft and hand back the edited property.
    ///
    /// The original property is left as it was; callers decide what to do
    /// with the result.
    pub fn submit(&mut self) -> Result<Property, EditError> {
        if let Err(report) = self.validation_report() {
            self.errors = FieldErrors::from(report);
            warn!("Rejected edit of {}: {}", self.original.name, self.errors);
            return Err(EditError::Invalid(self.errors.clone()));
        }

        self.errors = FieldErrors::default();

        let rooms = u32::try_from(self.draft.rooms).map_err(|_| {
            let mut errors = ValidationErrors::new();
            errors.add("rooms", field_error("range", "Rooms is too large"));
            EditError::Invalid(FieldErrors::from(errors))
        })?;

        let edited = Property {
            name: self.draft.name.clone(),
            url: self.draft.url.clone(),
            price: self.draft.price,
            price_per_person: self.draft.price_per_person,
            rooms,
            features: self.draft.features.clone(),
            votes: self.draft.votes.clone(),
        };

        info!("Changes to {} saved locally", edited.name);
        Ok(edited)
    }
}
