//! Waitlist modal state machine.
//!
//! ```text
//! closed ──open──▶ open/idle ──submit──▶ open/in-flight ──complete──▶ open/succeeded
//!   ▲                  │                       │                            │
//!   └──────────────────┴────────close──────────┴────────────────────────────┘
//! ```
//!
//! Every open and close starts a new generation. A submission carries the
//! generation it was started in, so a completion arriving after the modal
//! was closed (or closed and reopened) is discarded instead of reviving the
//! success view on a fresh instance.

use crate::email::EmailAddress;
use crate::error::{CoreError, CoreResult, EmailError};

/// Progress of the current submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    InFlight,
    Succeeded,
}

/// Proof that a submission was started, handed back on completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    generation: u64,
    email: EmailAddress,
}

impl SubmitTicket {
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaitlistFlow {
    open: bool,
    state: SubmissionState,
    draft: String,
    rejection: Option<EmailError>,
    generation: u64,
}

impl WaitlistFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Email text as currently typed
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Why the last submit attempt was refused, until the draft changes
    pub fn rejection(&self) -> Option<&EmailError> {
        self.rejection.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Open the modal with a clean slate.
    pub fn open(&mut self) {
        self.generation += 1;
        self.open = true;
        self.state = SubmissionState::Idle;
        self.draft.clear();
        self.rejection = None;
    }

    /// Close from any state. Pending submissions are left running but
    /// their completion will no longer apply.
    pub fn close(&mut self) {
        if self.state == SubmissionState::InFlight {
            tracing::debug!(
                generation = self.generation,
                "Closing waitlist with submission in flight"
            );
        }
        self.generation += 1;
        self.open = false;
        self.state = SubmissionState::Idle;
        self.draft.clear();
        self.rejection = None;
    }

    /// Update the typed email. Ignored unless the form is editable.
    pub fn set_draft(&mut self, value: impl Into<String>) {
        if self.open && self.state == SubmissionState::Idle {
            self.draft = value.into();
            self.rejection = None;
        }
    }

    /// Validate the draft and move to in-flight.
    ///
    /// Fails without changing state if the modal is closed, a submission
    /// is already running or finished, or the email is invalid. An invalid
    /// email is also kept as the [`rejection`](Self::rejection) for display.
    pub fn begin_submit(&mut self) -> CoreResult<SubmitTicket> {
        if !self.open {
            return Err(CoreError::InvalidOperation("waitlist modal is closed".to_string()));
        }
        match self.state {
            SubmissionState::Idle => {}
            SubmissionState::InFlight => {
                return Err(CoreError::InvalidOperation(
                    "submission already in flight".to_string(),
                ))
            }
            SubmissionState::Succeeded => {
                return Err(CoreError::InvalidOperation(
                    "submission already completed".to_string(),
                ))
            }
        }

        let email = match EmailAddress::parse(&self.draft) {
            Ok(email) => email,
            Err(e) => {
                self.rejection = Some(e.clone());
                return Err(e.into());
            }
        };
        self.rejection = None;
        self.state = SubmissionState::InFlight;
        Ok(SubmitTicket {
            generation: self.generation,
            email,
        })
    }

    /// Finish a submission. Returns false when the ticket is stale.
    pub fn complete(&mut self, ticket: &SubmitTicket) -> bool {
        if ticket.generation != self.generation || self.state != SubmissionState::InFlight {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                "Discarding stale waitlist completion"
            );
            return false;
        }
        self.state = SubmissionState::Succeeded;
        self.draft.clear();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_with(draft: &str) -> WaitlistFlow {
        let mut flow = WaitlistFlow::new();
        flow.open();
        flow.set_draft(draft);
        flow
    }

    #[test]
    fn test_starts_closed() {
        let flow = WaitlistFlow::new();
        assert!(!flow.is_open());
        assert_eq!(flow.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_happy_path() {
        let mut flow = open_with("name@company.com");
        let ticket = flow.begin_submit().unwrap();
        assert_eq!(flow.state(), SubmissionState::InFlight);
        assert_eq!(ticket.email().as_str(), "name@company.com");
        assert!(flow.complete(&ticket));
        assert_eq!(flow.state(), SubmissionState::Succeeded);
    }

    #[test]
    fn test_invalid_email_keeps_idle() {
        let mut flow = open_with("not-an-email");
        let err = flow.begin_submit().unwrap_err();
        assert!(matches!(err, CoreError::InvalidEmail(EmailError::MissingAt)));
        assert_eq!(flow.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_rejection_kept_until_draft_changes() {
        // Hyphen-edged labels pass some native email checks but not this one
        let mut flow = open_with("name@-company.com");
        assert!(flow.begin_submit().is_err());
        assert_eq!(flow.rejection(), Some(&EmailError::InvalidDomain));
        assert_eq!(flow.state(), SubmissionState::Idle);

        flow.set_draft("name@company.com");
        assert_eq!(flow.rejection(), None);
        assert!(flow.begin_submit().is_ok());
    }

    #[test]
    fn test_reopen_clears_rejection() {
        let mut flow = open_with("nope");
        assert!(flow.begin_submit().is_err());
        assert!(flow.rejection().is_some());
        flow.close();
        flow.open();
        assert_eq!(flow.rejection(), None);
    }

    #[test]
    fn test_duplicate_submit_rejected() {
        let mut flow = open_with("name@company.com");
        flow.begin_submit().unwrap();
        assert!(matches!(flow.begin_submit(), Err(CoreError::InvalidOperation(_))));
    }

    #[test]
    fn test_submit_on_closed_modal() {
        let mut flow = WaitlistFlow::new();
        assert!(matches!(flow.begin_submit(), Err(CoreError::InvalidOperation(_))));
    }

    #[test]
    fn test_draft_locked_while_in_flight() {
        let mut flow = open_with("name@company.com");
        flow.begin_submit().unwrap();
        flow.set_draft("other@company.com");
        assert_eq!(flow.draft(), "name@company.com");
    }

    #[test]
    fn test_complete_twice_is_noop() {
        let mut flow = open_with("name@company.com");
        let ticket = flow.begin_submit().unwrap();
        assert!(flow.complete(&ticket));
        assert!(!flow.complete(&ticket));
        assert_eq!(flow.state(), SubmissionState::Succeeded);
    }
}
