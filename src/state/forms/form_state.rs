//! Board creation form state and submission gating

use super::field::FormField;

/// Whether a board creation request is currently in flight.
///
/// Transitions: Idle -> Submitting on a valid submit attempt,
/// Submitting -> Idle when the service responds (success or error).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

/// Outcome of asking the form to begin a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// A request is already in flight; callers must not issue another.
    AlreadySubmitting,
    /// Validation failed; the field has been marked touched.
    Invalid,
    /// Validation passed; carries the trimmed name to send.
    Ready(String),
}

/// State for the create-board form: one required name field plus the
/// submission flag that gates double-submits.
#[derive(Debug, Clone)]
pub struct BoardCreateForm {
    pub name: FormField,
    pub submission: SubmissionState,
}

impl BoardCreateForm {
    pub fn new() -> Self {
        Self {
            name: FormField::new("Name"),
            submission: SubmissionState::Idle,
        }
    }

    /// Gate and validate a submit attempt.
    ///
    /// On `Ready` the form is left in `Submitting`; the caller performs the
    /// service call and must follow up with [`finish_success`] or
    /// [`finish_failure`].
    ///
    /// [`finish_success`]: Self::finish_success
    /// [`finish_failure`]: Self::finish_failure
    pub fn try_begin_submit(&mut self) -> SubmitAttempt {
        if self.submission == SubmissionState::Submitting {
            return SubmitAttempt::AlreadySubmitting;
        }
        if !self.name.is_valid() {
            self.name.mark_touched();
            return SubmitAttempt::Invalid;
        }
        self.submission = SubmissionState::Submitting;
        SubmitAttempt::Ready(self.name.trimmed().to_string())
    }

    /// The service call succeeded: back to the initial empty state
    pub fn finish_success(&mut self) {
        self.name.reset();
        self.submission = SubmissionState::Idle;
    }

    /// The service call failed: keep the typed value so the user can retry
    pub fn finish_failure(&mut self) {
        self.submission = SubmissionState::Idle;
    }

    /// Reset to the initial state (used on cancel and when re-entering the view)
    pub fn reset(&mut self) {
        self.name.reset();
        self.submission = SubmissionState::Idle;
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionState::Submitting
    }
}

impl Default for BoardCreateForm {
    fn default() -> Self {
        Self::new()
    }
}
