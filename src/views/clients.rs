//! Client list and registration form

use super::{Notices, RefreshPolicy};
use crate::api::{ApiError, HealthApi};
use crate::model::{Client, ClientForm, ClientId, Gender, NewClient, ValidationError};
use crate::query::filter_by_name;

pub const FETCH_FAILED: &str = "Failed to fetch clients";
pub const ADD_FAILED: &str = "Failed to add client";

/// Everything the client screen displays
#[derive(Debug, Clone, Default)]
pub struct ClientsView {
    pub clients: Vec<Client>,
    pub form: ClientForm,
    pub search: String,
    pub loading: bool,
    pub submitting: bool,
    pub notices: Notices,
    pub refresh: RefreshPolicy,
}

/// State transitions of the client screen
#[derive(Debug, Clone, PartialEq)]
pub enum ClientsAction {
    LoadStarted,
    Loaded(Vec<Client>),
    LoadFailed(ApiError),
    SetName(String),
    SetAge(String),
    SetGender(Option<Gender>),
    SetContact(String),
    SetSearch(String),
    Invalid(ValidationError),
    SubmitStarted,
    Created { id: ClientId, client: NewClient },
    CreateFailed(ApiError),
    DismissError,
}

impl ClientsView {
    pub fn new(refresh: RefreshPolicy) -> Self {
        Self {
            refresh,
            ..Default::default()
        }
    }

    pub fn apply(&mut self, action: ClientsAction) {
        match action {
            ClientsAction::LoadStarted => self.loading = true,
            ClientsAction::Loaded(clients) => {
                self.loading = false;
                self.clients = clients;
            }
            ClientsAction::LoadFailed(_) => {
                self.loading = false;
                self.notices.also_fail(FETCH_FAILED);
            }
            ClientsAction::SetName(name) => self.form.name = name,
            ClientsAction::SetAge(age) => self.form.age = age,
            ClientsAction::SetGender(gender) => self.form.gender = gender,
            ClientsAction::SetContact(contact) => self.form.contact = contact,
            ClientsAction::SetSearch(search) => self.search = search,
            ClientsAction::Invalid(err) => self.notices.fail(err.to_string()),
            ClientsAction::SubmitStarted => self.submitting = true,
            ClientsAction::Created { id, client } => {
                self.submitting = false;
                self.notices.succeed(format!("Client added: {}", id));
                self.form = ClientForm::default();
                if self.refresh == RefreshPolicy::Optimistic {
                    self.clients.push(Client {
                        id,
                        name: client.name,
                        age: client.age,
                        gender: client.gender.map(|g| g.to_string()),
                        contact: client.contact,
                    });
                }
            }
            ClientsAction::CreateFailed(_) => {
                self.submitting = false;
                self.notices.fail(ADD_FAILED);
            }
            ClientsAction::DismissError => self.notices.clear_error(),
        }
    }

    /// Clients whose name contains the search text
    pub fn filtered(&self) -> Vec<&Client> {
        filter_by_name(&self.clients, &self.search)
    }

    /// Validate the form and mark the submission as started.
    ///
    /// Returns `None` when the form is invalid (the error is recorded) or a
    /// submission is already in flight.
    pub fn prepare_submit(&mut self) -> Option<NewClient> {
        if self.submitting {
            return None;
        }
        match self.form.validate() {
            Ok(client) => {
                self.apply(ClientsAction::SubmitStarted);
                Some(client)
            }
            Err(err) => {
                self.apply(ClientsAction::Invalid(err));
                None
            }
        }
    }

    /// Whether a create outcome must be followed by a list read
    pub fn wants_refetch(&self, outcome: &ClientsAction) -> bool {
        matches!(outcome, ClientsAction::Created { .. }) && self.refresh == RefreshPolicy::Refetch
    }

    /// Fetch the client list into the view
    pub async fn load<A: HealthApi + ?Sized>(&mut self, api: &A) {
        self.apply(ClientsAction::LoadStarted);
        let outcome = fetch_clients(api).await;
        self.apply(outcome);
    }

    /// Submit the form; returns whether the client was created
    pub async fn submit<A: HealthApi + ?Sized>(&mut self, api: &A) -> bool {
        let Some(client) = self.prepare_submit() else {
            return false;
        };

        let outcome = create_client(api, client).await;
        let created = matches!(outcome, ClientsAction::Created { .. });
        let refetch = self.wants_refetch(&outcome);
        self.apply(outcome);

        if refetch {
            self.load(api).await;
        }
        created
    }
}

/// Read the client list
pub async fn fetch_clients<A: HealthApi + ?Sized>(api: &A) -> ClientsAction {
    match api.list_clients().await {
        Ok(clients) => {
            tracing::debug!(count = clients.len(), "Clients loaded");
            ClientsAction::Loaded(clients)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to fetch clients");
            ClientsAction::LoadFailed(e)
        }
    }
}

/// Register a validated client
pub async fn create_client<A: HealthApi + ?Sized>(api: &A, client: NewClient) -> ClientsAction {
    match api.create_client(&client).await {
        Ok(id) => ClientsAction::Created { id, client },
        Err(e) => {
            tracing::warn!(error = %e, "Failed to add client");
            ClientsAction::CreateFailed(e)
        }
    }
}
