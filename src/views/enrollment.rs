//! Enrollment wizard
//!
//! Pick a client, then a program, then submit once. The screen loads both
//! lists up front; a failed read keeps whatever was shown before.

use thiserror::Error;

use super::Notices;
use crate::api::{ApiError, HealthApi};
use crate::model::{
    validate_enrollment, Client, ClientId, EnrollmentId, NewEnrollment, Program, ProgramId,
    ValidationError,
};

pub const LOAD_FAILED: &str = "Failed to load data. Please try again.";
pub const ENROLL_FAILED: &str = "Failed to enroll. Please try again.";
pub const ENROLLED: &str = "Enrollment successful! Welcome to the program.";

/// Where the wizard is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WizardStep {
    #[default]
    AwaitingClient,
    AwaitingProgram,
    /// Enrollment accepted; the confirmation overlay is up
    Confirmed,
}

impl WizardStep {
    /// 1-based step number for the progress indicator
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::AwaitingClient => 1,
            WizardStep::AwaitingProgram | WizardStep::Confirmed => 2,
        }
    }
}

/// Why a submission did not start
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitRefused {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("An enrollment is already being submitted")]
    InFlight,
}

/// Selections plus the single-submission guard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrollmentWizard {
    client: Option<ClientId>,
    program: Option<ProgramId>,
    step: WizardStep,
    submitting: bool,
}

impl EnrollmentWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn client(&self) -> Option<ClientId> {
        self.client
    }

    pub fn program(&self) -> Option<ProgramId> {
        self.program
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Choosing a client opens the program step; clearing it does not go back
    pub fn select_client(&mut self, client: Option<ClientId>) {
        self.client = client;
        if client.is_some() && self.step == WizardStep::AwaitingClient {
            self.step = WizardStep::AwaitingProgram;
        }
    }

    pub fn select_program(&mut self, program: Option<ProgramId>) {
        self.program = program;
    }

    /// Check the selections and enter the in-flight state
    pub fn begin_submit(&mut self) -> Result<NewEnrollment, SubmitRefused> {
        if self.submitting {
            return Err(SubmitRefused::InFlight);
        }
        let enrollment = validate_enrollment(self.client, self.program)?;
        self.submitting = true;
        Ok(enrollment)
    }

    /// Leave the in-flight state; success shows the confirmation
    pub fn finish_submit(&mut self, accepted: bool) {
        self.submitting = false;
        if accepted {
            self.step = WizardStep::Confirmed;
        }
    }

    /// Close the confirmation overlay, keeping the selections
    pub fn dismiss(&mut self) {
        if self.step == WizardStep::Confirmed {
            self.step = WizardStep::AwaitingProgram;
        }
    }
}

/// Everything the enrollment screen displays
#[derive(Debug, Clone, Default)]
pub struct EnrollView {
    pub clients: Vec<Client>,
    pub programs: Vec<Program>,
    pub wizard: EnrollmentWizard,
    pub loading: bool,
    pub notices: Notices,
    /// Id of the last accepted enrollment
    pub last_enrollment: Option<EnrollmentId>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EnrollAction {
    LoadStarted,
    Loaded {
        clients: Vec<Client>,
        programs: Vec<Program>,
    },
    LoadFailed(ApiError),
    SelectClient(Option<ClientId>),
    SelectProgram(Option<ProgramId>),
    Refused(SubmitRefused),
    Enrolled(EnrollmentId),
    EnrollFailed(ApiError),
    DismissConfirmation,
    DismissError,
}

impl EnrollView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, action: EnrollAction) {
        match action {
            EnrollAction::LoadStarted => self.loading = true,
            EnrollAction::Loaded { clients, programs } => {
                self.loading = false;
                self.clients = clients;
                self.programs = programs;
            }
            EnrollAction::LoadFailed(_) => {
                self.loading = false;
                self.notices.also_fail(LOAD_FAILED);
            }
            EnrollAction::SelectClient(client) => {
                let before = self.wizard.step();
                self.wizard.select_client(client);
                if before != self.wizard.step() {
                    tracing::debug!(?client, "Wizard advanced to program selection");
                }
            }
            EnrollAction::SelectProgram(program) => self.wizard.select_program(program),
            EnrollAction::Refused(SubmitRefused::Invalid(err)) => self.notices.fail(err.to_string()),
            EnrollAction::Refused(SubmitRefused::InFlight) => {}
            EnrollAction::Enrolled(id) => {
                self.wizard.finish_submit(true);
                self.last_enrollment = Some(id);
                self.notices.succeed(ENROLLED);
            }
            EnrollAction::EnrollFailed(err) => {
                self.wizard.finish_submit(false);
                let msg = err.backend_message().unwrap_or(ENROLL_FAILED).to_string();
                self.notices.fail(msg);
            }
            EnrollAction::DismissConfirmation => self.wizard.dismiss(),
            EnrollAction::DismissError => self.notices.clear_error(),
        }
    }

    pub fn selected_client(&self) -> Option<&Client> {
        let id = self.wizard.client()?;
        self.clients.iter().find(|c| c.id == id)
    }

    pub fn selected_program(&self) -> Option<&Program> {
        let id = self.wizard.program()?;
        self.programs.iter().find(|p| p.id == id)
    }

    /// Whether the confirmation overlay is showing
    pub fn show_confirmation(&self) -> bool {
        self.wizard.step() == WizardStep::Confirmed
    }

    /// Start a submission, recording a refusal in the view
    pub fn prepare_submit(&mut self) -> Option<NewEnrollment> {
        match self.wizard.begin_submit() {
            Ok(enrollment) => Some(enrollment),
            Err(refused) => {
                self.apply(EnrollAction::Refused(refused));
                None
            }
        }
    }

    pub async fn load<A: HealthApi + ?Sized>(&mut self, api: &A) {
        self.apply(EnrollAction::LoadStarted);
        let outcome = fetch_choices(api).await;
        self.apply(outcome);
    }

    /// Submit the selections; returns whether the enrollment was accepted
    pub async fn submit<A: HealthApi + ?Sized>(&mut self, api: &A) -> bool {
        let Some(enrollment) = self.prepare_submit() else {
            return false;
        };
        let outcome = enroll(api, enrollment).await;
        let accepted = matches!(outcome, EnrollAction::Enrolled(_));
        self.apply(outcome);
        accepted
    }
}

/// Read clients then programs; either failure fails the whole load
pub async fn fetch_choices<A: HealthApi + ?Sized>(api: &A) -> EnrollAction {
    let loaded = async {
        let clients = api.list_clients().await?;
        let programs = api.list_programs().await?;
        Ok::<_, ApiError>((clients, programs))
    }
    .await;

    match loaded {
        Ok((clients, programs)) => EnrollAction::Loaded { clients, programs },
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load enrollment choices");
            EnrollAction::LoadFailed(e)
        }
    }
}

/// Send an enrollment that passed the wizard guard
pub async fn enroll<A: HealthApi + ?Sized>(api: &A, enrollment: NewEnrollment) -> EnrollAction {
    match api.enroll(&enrollment).await {
        Ok(id) => EnrollAction::Enrolled(id),
        Err(e) => {
            tracing::warn!(
                error = %e,
                client_id = enrollment.client_id,
                program_id = enrollment.program_id,
                "Enrollment rejected"
            );
            EnrollAction::EnrollFailed(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wizard_transitions() {
        let mut wizard = EnrollmentWizard::new();
        assert_eq!(wizard.step(), WizardStep::AwaitingClient);

        wizard.select_client(Some(1));
        assert_eq!(wizard.step(), WizardStep::AwaitingProgram);

        wizard.select_client(None);
        assert_eq!(wizard.step(), WizardStep::AwaitingProgram);
        assert_eq!(
            wizard.begin_submit(),
            Err(SubmitRefused::Invalid(ValidationError::SelectionIncomplete))
        );

        wizard.select_client(Some(1));
        wizard.select_program(Some(2));
        let enrollment = wizard.begin_submit().unwrap();
        assert_eq!(enrollment, NewEnrollment { client_id: 1, program_id: 2 });
        assert_eq!(wizard.begin_submit(), Err(SubmitRefused::InFlight));

        wizard.finish_submit(true);
        assert_eq!(wizard.step(), WizardStep::Confirmed);
        assert!(!wizard.is_submitting());

        wizard.dismiss();
        assert_eq!(wizard.step(), WizardStep::AwaitingProgram);
        assert_eq!(wizard.client(), Some(1));
        assert_eq!(wizard.program(), Some(2));
    }

    #[test]
    fn test_submit_without_client_records_error() {
        let mut view = EnrollView::new();
        view.apply(EnrollAction::SelectProgram(Some(3)));

        assert!(view.prepare_submit().is_none());
        assert_eq!(
            view.notices.error.as_deref(),
            Some("Please select a client and a program.")
        );
        assert_eq!(view.wizard.step(), WizardStep::AwaitingClient);
    }

    #[test]
    fn test_backend_message_is_shown() {
        let mut view = EnrollView::new();
        view.apply(EnrollAction::EnrollFailed(ApiError::Status {
            status: 400,
            message: Some("Client is already enrolled in this program".to_string()),
        }));
        assert_eq!(
            view.notices.error.as_deref(),
            Some("Client is already enrolled in this program")
        );

        view.apply(EnrollAction::EnrollFailed(ApiError::Timeout));
        assert_eq!(view.notices.error.as_deref(), Some(ENROLL_FAILED));
    }

    #[test]
    fn test_selected_records() {
        let mut view = EnrollView::new();
        view.apply(EnrollAction::Loaded {
            clients: vec![Client {
                id: 5,
                name: "Ana".to_string(),
                age: None,
                gender: None,
                contact: None,
            }],
            programs: vec![Program {
                id: 8,
                name: "Yoga".to_string(),
                description: None,
                category: None,
            }],
        });
        view.apply(EnrollAction::SelectClient(Some(5)));
        view.apply(EnrollAction::SelectProgram(Some(8)));

        assert_eq!(view.selected_client().map(|c| c.option_label()), Some("Ana (ID: 5)".to_string()));
        assert_eq!(view.selected_program().map(|p| p.name.as_str()), Some("Yoga"));
    }

    #[test]
    fn test_enrolled_shows_confirmation() {
        let mut view = EnrollView::new();
        view.apply(EnrollAction::SelectClient(Some(1)));
        view.apply(EnrollAction::SelectProgram(Some(1)));
        assert!(view.prepare_submit().is_some());

        view.apply(EnrollAction::Enrolled(12));
        assert!(view.show_confirmation());
        assert_eq!(view.last_enrollment, Some(12));
        assert_eq!(view.notices.success.as_deref(), Some(ENROLLED));

        view.apply(EnrollAction::DismissConfirmation);
        assert!(!view.show_confirmation());
    }
}
