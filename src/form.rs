//! Form state for a review that has not been posted yet.

use crate::error::ValidationError;
use crate::models::review::Rating;

/// Editable form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Rating,
    Comment,
}

/// How strict the form is before a review is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// Name and comment required; rating starts at five.
    #[default]
    Lenient,
    /// Name, comment and an explicitly chosen rating required; rating starts unset.
    Strict,
}

impl ValidationPolicy {
    pub fn default_rating(self) -> u8 {
        match self {
            ValidationPolicy::Lenient => Rating::MAX.get(),
            ValidationPolicy::Strict => 0,
        }
    }
}

/// Raw form values. `rating` is 0 while unset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub name: String,
    pub rating: u8,
    pub comment: String,
}

/// Form values that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    pub name: String,
    pub rating: Rating,
    pub comment: String,
}

impl FormState {
    /// Empty form with the policy's starting rating.
    pub fn reset(policy: ValidationPolicy) -> Self {
        Self {
            name: String::new(),
            rating: policy.default_rating(),
            comment: String::new(),
        }
    }

    /// Stores a typed value without validating it. Rating text that is not a
    /// number between 1 and 5 leaves the rating unset.
    pub fn update_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Comment => self.comment = value,
            Field::Rating => {
                self.rating = value
                    .trim()
                    .parse::<u8>()
                    .ok()
                    .and_then(Rating::new)
                    .map_or(0, Rating::get)
            }
        }
    }

    pub fn select_rating(&mut self, value: u8) {
        self.rating = Rating::new(value).map_or(0, Rating::get);
    }

    pub fn validate(&self, policy: ValidationPolicy) -> Result<ValidDraft, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.comment.trim().is_empty() {
            return Err(ValidationError::MissingComment);
        }
        let rating = match (Rating::new(self.rating), policy) {
            (Some(rating), _) => rating,
            (None, ValidationPolicy::Strict) => return Err(ValidationError::MissingRating),
            (None, ValidationPolicy::Lenient) => Rating::MAX,
        };
        Ok(ValidDraft {
            name: self.name.clone(),
            rating,
            comment: self.comment.clone(),
        })
    }
}
