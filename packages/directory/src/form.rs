//! # Create-user form state
//!
//! [`CreateUserForm`] is the whole state of the creation screen: the draft and
//! whether a submission is in flight. The UI holds it in a signal and only
//! changes it through the methods below.
//!
//! ```text
//!            begin_submit (draft complete)
//!   Editing ───────────────────────────────▶ Submitting
//!      ▲                                        │
//!      └──── complete_submit (ok | failure) ────┘
//! ```
//!
//! Submitting with a missing field returns [`ValidationError`] and stays in
//! Editing; the caller must not make a network call in that case. On success
//! the draft is discarded; on failure it is left exactly as it was.

use thiserror::Error;

use crate::generator::DraftGenerator;
use crate::models::{DraftField, User, UserDraft};
use crate::request::{RequestToken, RequestTracker};

pub const VALIDATION_MESSAGE: &str = "All fields are required!";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Phase {
    #[default]
    Editing,
    Submitting,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("All fields are required! Missing: {}", join_fields(.missing))]
pub struct ValidationError {
    pub missing: Vec<DraftField>,
}

fn join_fields(fields: &[DraftField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A validated snapshot of the draft to hand to the API client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSubmission {
    pub token: RequestToken,
    pub draft: UserDraft,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Draft discarded; the caller shows the success notice and navigates.
    Created(Option<User>),
    /// Draft preserved; the caller shows the generic error notice.
    Failed,
    /// The response belongs to a request this form no longer tracks.
    Stale,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreateUserForm {
    draft: UserDraft,
    phase: Phase,
    requests: RequestTracker,
}

impl CreateUserForm {
    /// A form pre-filled from `generator`, in Editing.
    pub fn new(generator: &mut DraftGenerator) -> Self {
        Self {
            draft: generator.next_draft(),
            phase: Phase::Editing,
            requests: RequestTracker::new(),
        }
    }

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.draft.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.draft.password = password.into();
    }

    /// A successful camera capture replaces the photo reference.
    pub fn set_photo(&mut self, uri: impl Into<String>) {
        self.draft.profile_picture = uri.into();
    }

    pub fn clear_photo(&mut self) {
        self.draft.profile_picture.clear();
    }

    /// Replace all four fields with fresh placeholder values.
    pub fn regenerate(&mut self, generator: &mut DraftGenerator) {
        self.draft = generator.next_draft();
    }

    /// Editing → Submitting when the draft is complete.
    ///
    /// A second call while already Submitting is refused with `None` inside the
    /// `Ok`, mirroring the disabled submit button.
    pub fn begin_submit(&mut self) -> Result<Option<PendingSubmission>, ValidationError> {
        if self.is_submitting() {
            return Ok(None);
        }
        let missing = self.draft.missing_fields();
        if !missing.is_empty() {
            return Err(ValidationError { missing });
        }
        self.phase = Phase::Submitting;
        Ok(Some(PendingSubmission {
            token: self.requests.issue(),
            draft: self.draft.clone(),
        }))
    }

    /// Submitting → Editing with the result of the creation call.
    pub fn complete_submit<E>(
        &mut self,
        token: RequestToken,
        result: Result<Option<User>, E>,
    ) -> SubmitOutcome {
        if !self.requests.settle(token) {
            return SubmitOutcome::Stale;
        }
        self.phase = Phase::Editing;
        match result {
            Ok(created) => {
                self.draft = UserDraft::default();
                SubmitOutcome::Created(created)
            }
            Err(_) => SubmitOutcome::Failed,
        }
    }

    /// The screen is going away: later responses must not touch this form.
    pub fn teardown(&mut self) {
        self.requests.invalidate();
        self.phase = Phase::Editing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> CreateUserForm {
        CreateUserForm::new(&mut DraftGenerator::seeded(1))
    }

    #[test]
    fn test_new_form_is_prefilled_and_editing() {
        let form = form();
        assert_eq!(form.phase, Phase::Editing);
        assert!(form.draft().is_complete());
    }

    #[test]
    fn test_empty_field_blocks_submit() {
        let mut form = form();
        form.set_email("");
        let err = form.begin_submit().unwrap_err();
        assert_eq!(err.missing, vec![DraftField::Email]);
        assert!(err.to_string().starts_with(VALIDATION_MESSAGE));
        assert_eq!(form.phase, Phase::Editing);
    }

    #[test]
    fn test_cleared_photo_blocks_submit() {
        let mut form = form();
        form.clear_photo();
        assert!(!form.draft().has_photo());
        let err = form.begin_submit().unwrap_err();
        assert_eq!(err.missing, vec![DraftField::ProfilePicture]);
    }

    #[test]
    fn test_success_discards_draft() {
        let mut form = form();
        let pending = form.begin_submit().unwrap().unwrap();
        assert!(form.is_submitting());
        assert_eq!(&pending.draft, form.draft());

        let outcome = form.complete_submit::<()>(pending.token, Ok(None));
        assert_eq!(outcome, SubmitOutcome::Created(None));
        assert_eq!(form.phase, Phase::Editing);
        assert_eq!(form.draft(), &UserDraft::default());
    }

    #[test]
    fn test_failure_preserves_draft_exactly() {
        let mut form = form();
        form.set_name("Ana");
        form.set_photo("file:///data/camera/1.jpg");
        let before = form.draft().clone();

        let pending = form.begin_submit().unwrap().unwrap();
        let outcome = form.complete_submit(pending.token, Err("boom"));
        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(form.phase, Phase::Editing);
        assert_eq!(form.draft(), &before);
    }

    #[test]
    fn test_double_submit_is_refused() {
        let mut form = form();
        let first = form.begin_submit().unwrap();
        assert!(first.is_some());
        assert_eq!(form.begin_submit().unwrap(), None);
    }

    #[test]
    fn test_response_after_teardown_is_stale() {
        let mut form = form();
        let before = form.draft().clone();
        let pending = form.begin_submit().unwrap().unwrap();
        form.teardown();

        let outcome = form.complete_submit::<()>(pending.token, Ok(None));
        assert_eq!(outcome, SubmitOutcome::Stale);
        assert_eq!(form.draft(), &before);
    }

    #[test]
    fn test_regenerate_replaces_every_field() {
        let mut generator = DraftGenerator::seeded(9);
        let mut form = CreateUserForm::new(&mut generator);
        form.set_name("");
        form.clear_photo();
        let before = form.draft().clone();

        form.regenerate(&mut generator);
        let after = form.draft();
        assert!(after.is_complete());
        assert_ne!(after.password, before.password);
        assert_ne!(after.profile_picture, before.profile_picture);
    }
}
