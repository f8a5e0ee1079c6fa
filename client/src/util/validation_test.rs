use super::*;

fn avatar(mime_type: &str, size_bytes: u64) -> AvatarMeta {
    AvatarMeta { name: "avatar".to_owned(), mime_type: mime_type.to_owned(), size_bytes }
}

fn jane() -> RegistrationDraft {
    RegistrationDraft {
        full_name: "Jane Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        username: "janedoe".to_owned(),
        avatar: Some(avatar("image/png", 500 * 1024)),
    }
}

// =============================================================
// Required fields
// =============================================================

#[test]
fn empty_draft_reports_every_field() {
    let errors = validate(&RegistrationDraft::default()).unwrap_err();
    assert_eq!(errors.avatar, Some(FieldError::MissingAvatar));
    assert_eq!(errors.full_name, Some(FieldError::MissingFullName));
    assert_eq!(errors.email, Some(FieldError::MissingEmail));
    assert_eq!(errors.username, Some(FieldError::MissingUsername));
    assert_eq!(errors.count(), 4);
}

#[test]
fn each_missing_text_field_blocks_submission() {
    let cases: [(fn(&mut RegistrationDraft), FieldError); 3] = [
        (|d| d.full_name.clear(), FieldError::MissingFullName),
        (|d| d.email.clear(), FieldError::MissingEmail),
        (|d| d.username.clear(), FieldError::MissingUsername),
    ];
    for (clear, expected) in cases {
        let mut draft = jane();
        clear(&mut draft);
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.count(), 1, "expected only {expected:?}");
        assert!(
            [errors.full_name, errors.email, errors.username].contains(&Some(expected)),
            "missing {expected:?}"
        );
    }
}

#[test]
fn whitespace_only_text_is_present() {
    let mut draft = jane();
    draft.full_name = "   ".to_owned();
    let valid = validate(&draft).unwrap();
    assert_eq!(valid.full_name, "   ");
}

#[test]
fn bare_at_sign_username_is_present() {
    let mut draft = jane();
    draft.username = "@".to_owned();
    assert!(validate(&draft).is_ok());
}

#[test]
fn email_has_no_format_check_beyond_presence() {
    let mut draft = jane();
    draft.email = "not-an-email".to_owned();
    assert!(validate(&draft).is_ok());
}

// =============================================================
// Avatar rules
// =============================================================

#[test]
fn missing_avatar_uses_required_message() {
    let mut draft = jane();
    draft.avatar = None;
    let errors = validate(&draft).unwrap_err();
    assert_eq!(errors.avatar, Some(FieldError::MissingAvatar));
    assert_eq!(errors.avatar.unwrap().to_string(), "Please upload an image for your avatar");
}

#[test]
fn disallowed_mime_type_is_rejected() {
    for mime in ["image/gif", "image/svg+xml", "application/pdf", ""] {
        let mut draft = jane();
        draft.avatar = Some(avatar(mime, 1024));
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.avatar, Some(FieldError::UnsupportedAvatarType), "mime {mime:?}");
    }
}

#[test]
fn accepted_mime_types_pass() {
    for mime in ACCEPTED_AVATAR_TYPES {
        let mut draft = jane();
        draft.avatar = Some(avatar(mime, 1024));
        assert!(validate(&draft).is_ok(), "mime {mime:?}");
    }
}

#[test]
fn oversized_avatar_is_rejected() {
    let mut draft = jane();
    draft.avatar = Some(avatar("image/jpeg", MAX_AVATAR_BYTES + 1));
    let errors = validate(&draft).unwrap_err();
    assert_eq!(errors.avatar, Some(FieldError::AvatarTooLarge));
    assert_eq!(errors.avatar.unwrap().to_string(), "File size must be less than 2MB.");
}

#[test]
fn avatar_at_exact_limit_is_accepted() {
    let mut draft = jane();
    draft.avatar = Some(avatar("image/webp", MAX_AVATAR_BYTES));
    assert!(validate(&draft).is_ok());
}

#[test]
fn oversized_file_with_bad_type_reports_type_first() {
    let mut draft = jane();
    draft.avatar = Some(avatar("image/gif", MAX_AVATAR_BYTES * 3));
    let errors = validate(&draft).unwrap_err();
    assert_eq!(errors.avatar, Some(FieldError::UnsupportedAvatarType));
}

#[test]
fn avatar_rules_fail_independently() {
    assert_eq!(first_failure(&Some(avatar("image/gif", 1)), AVATAR_RULES), Some(FieldError::UnsupportedAvatarType));
    assert_eq!(
        first_failure(&Some(avatar("image/gif", MAX_AVATAR_BYTES + 1)), &AVATAR_RULES[2..]),
        Some(FieldError::AvatarTooLarge)
    );
}

// =============================================================
// Success path
// =============================================================

#[test]
fn valid_draft_keeps_values_as_typed() {
    let mut draft = jane();
    draft.full_name = " Jane Doe ".to_owned();
    draft.username = "@janedoe".to_owned();
    let valid = validate(&draft).unwrap();
    assert_eq!(valid.full_name, " Jane Doe ");
    assert_eq!(valid.email, "jane@example.com");
    assert_eq!(valid.username, "@janedoe");
    assert_eq!(valid.avatar.mime_type, "image/png");
}

#[test]
fn field_errors_empty_for_valid_draft() {
    assert!(field_errors(&jane()).is_empty());
    assert_eq!(field_errors(&jane()).count(), 0);
}

// =============================================================
// Helpers
// =============================================================

#[test]
fn accept_attribute_lists_all_types() {
    assert_eq!(accept_attribute(), "image/jpeg,image/png,image/webp");
}

#[test]
fn error_messages_match_inline_copy() {
    assert_eq!(FieldError::UnsupportedAvatarType.to_string(), "Only JPG, PNG, or WEBP files are allowed.");
    assert_eq!(FieldError::MissingFullName.to_string(), "Enter your name");
    assert_eq!(FieldError::MissingEmail.to_string(), "Please enter a valid email");
    assert_eq!(FieldError::MissingUsername.to_string(), "Please enter your username");
    assert_eq!(
        FieldError::AvatarUnreadable.to_string(),
        "Could not read the selected image. Please choose it again."
    );
}
