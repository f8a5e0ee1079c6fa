#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

/// Browser-independent description of the file picked for the avatar.
///
/// The page keeps the real `web_sys::File` handle next to this in local
/// storage; validation and the preview only ever look at the metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvatarMeta {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

/// In-progress form input, alive only while the registration page is mounted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub avatar: Option<AvatarMeta>,
}

impl RegistrationDraft {
    /// Replace the selected avatar, or clear it with `None`.
    pub fn set_avatar(&mut self, avatar: Option<AvatarMeta>) {
        self.avatar = avatar;
    }

    /// Filename shown in the upload preview, if a file is selected.
    pub fn avatar_name(&self) -> Option<&str> {
        self.avatar.as_ref().map(|a| a.name.as_str())
    }
}

/// Submit lifecycle for the registration form.
///
/// `attempted` flips on the first submit and stays set, so errors keep
/// re-deriving as the user edits. `in_flight` blocks a second hand-off while
/// one is already underway. `avatar_unreadable` records that the last submit
/// passed validation but the browser could not open the picked file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubmitState {
    pub attempted: bool,
    pub in_flight: bool,
    pub avatar_unreadable: bool,
}

impl SubmitState {
    /// Enter the in-flight state. Returns `false` when a submit is already running.
    pub fn try_begin(&mut self) -> bool {
        self.attempted = true;
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        self.avatar_unreadable = false;
        true
    }

    /// Leave the in-flight state after a rejected submit.
    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    /// Leave the in-flight state because the avatar could not be opened.
    pub fn fail_avatar_read(&mut self) {
        self.avatar_unreadable = true;
        self.finish();
    }

    /// Drop the unreadable-avatar notice once a different file is picked or
    /// the selection is removed.
    pub fn clear_avatar_notice(&mut self) {
        self.avatar_unreadable = false;
    }
}
