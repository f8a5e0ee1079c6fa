//! Field validation for the registration form.
//!
//! DESIGN
//! ======
//! Each field owns an ordered rule table. Rules run in order and the first
//! failure wins, so a field reports at most one message at a time. A passing
//! run yields `ValidRegistration`, the only input the ticket payload accepts.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::state::registration::{AvatarMeta, RegistrationDraft};

/// MIME types accepted for the avatar upload.
pub const ACCEPTED_AVATAR_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

/// Largest accepted avatar, inclusive.
pub const MAX_AVATAR_BYTES: u64 = 2 * 1024 * 1024;

// =============================================================================
// ERRORS
// =============================================================================

/// A single failed rule. `Display` is the inline message shown under the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Please upload an image for your avatar")]
    MissingAvatar,
    #[error("Only JPG, PNG, or WEBP files are allowed.")]
    UnsupportedAvatarType,
    #[error("File size must be less than 2MB.")]
    AvatarTooLarge,
    /// The browser could not hand out an object URL for a file that passed
    /// every rule.
    #[error("Could not read the selected image. Please choose it again.")]
    AvatarUnreadable,
    #[error("Enter your name")]
    MissingFullName,
    #[error("Please enter a valid email")]
    MissingEmail,
    #[error("Please enter your username")]
    MissingUsername,
}

/// First failure per field, or `None` where the field passed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub avatar: Option<FieldError>,
    pub full_name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub username: Option<FieldError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.avatar.is_none() && self.full_name.is_none() && self.email.is_none() && self.username.is_none()
    }

    pub fn count(&self) -> usize {
        [self.avatar, self.full_name, self.email, self.username]
            .iter()
            .filter(|e| e.is_some())
            .count()
    }
}

// =============================================================================
// RULES
// =============================================================================

type Rule<T> = fn(&T) -> Result<(), FieldError>;

const AVATAR_RULES: &[Rule<Option<AvatarMeta>>] = &[avatar_present, avatar_type_accepted, avatar_within_size];
const FULL_NAME_RULES: &[Rule<str>] = &[full_name_present];
const EMAIL_RULES: &[Rule<str>] = &[email_present];
const USERNAME_RULES: &[Rule<str>] = &[username_present];

fn avatar_present(avatar: &Option<AvatarMeta>) -> Result<(), FieldError> {
    avatar.as_ref().map(|_| ()).ok_or(FieldError::MissingAvatar)
}

fn avatar_type_accepted(avatar: &Option<AvatarMeta>) -> Result<(), FieldError> {
    match avatar {
        Some(meta) if is_accepted_type(&meta.mime_type) => Ok(()),
        _ => Err(FieldError::UnsupportedAvatarType),
    }
}

fn avatar_within_size(avatar: &Option<AvatarMeta>) -> Result<(), FieldError> {
    match avatar {
        Some(meta) if meta.size_bytes <= MAX_AVATAR_BYTES => Ok(()),
        _ => Err(FieldError::AvatarTooLarge),
    }
}

fn full_name_present(value: &str) -> Result<(), FieldError> {
    require_text(value, FieldError::MissingFullName)
}

fn email_present(value: &str) -> Result<(), FieldError> {
    require_text(value, FieldError::MissingEmail)
}

fn username_present(value: &str) -> Result<(), FieldError> {
    require_text(value, FieldError::MissingUsername)
}

fn require_text(value: &str, missing: FieldError) -> Result<(), FieldError> {
    if value.is_empty() { Err(missing) } else { Ok(()) }
}

/// Run `rules` in order and return the first failure.
fn first_failure<T: ?Sized>(value: &T, rules: &[Rule<T>]) -> Option<FieldError> {
    rules.iter().find_map(|rule| rule(value).err())
}

/// Whether `mime_type` is one of [`ACCEPTED_AVATAR_TYPES`].
pub fn is_accepted_type(mime_type: &str) -> bool {
    ACCEPTED_AVATAR_TYPES.contains(&mime_type)
}

/// Value for the file input's `accept` attribute.
pub fn accept_attribute() -> String {
    ACCEPTED_AVATAR_TYPES.join(",")
}

// =============================================================================
// VALIDATION
// =============================================================================

/// A draft that passed every rule. Text fields are carried exactly as typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidRegistration {
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub avatar: AvatarMeta,
}

/// Evaluate every field's rule table without short-circuiting across fields.
pub fn field_errors(draft: &RegistrationDraft) -> FieldErrors {
    FieldErrors {
        avatar: first_failure(&draft.avatar, AVATAR_RULES),
        full_name: first_failure(draft.full_name.as_str(), FULL_NAME_RULES),
        email: first_failure(draft.email.as_str(), EMAIL_RULES),
        username: first_failure(draft.username.as_str(), USERNAME_RULES),
    }
}

/// Validate the whole draft.
///
/// # Errors
///
/// Returns the per-field failures when any rule fails.
pub fn validate(draft: &RegistrationDraft) -> Result<ValidRegistration, FieldErrors> {
    let errors = field_errors(draft);
    match (&draft.avatar, errors.is_empty()) {
        (Some(avatar), true) => Ok(ValidRegistration {
            full_name: draft.full_name.clone(),
            email: draft.email.clone(),
            username: draft.username.clone(),
            avatar: avatar.clone(),
        }),
        _ => Err(errors),
    }
}
