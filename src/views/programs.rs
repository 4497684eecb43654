//! Program catalogue: creation form, search, category filter, pages, export

use super::{Notices, RefreshPolicy};
use crate::api::{ApiError, HealthApi};
use crate::export::{programs_to_csv, ExportError};
use crate::model::{Category, NewProgram, Program, ProgramForm, ProgramId, ValidationError};
use crate::query::{clamp_page, paginate, Page, ProgramFilter, PAGE_SIZE};

pub const FETCH_FAILED: &str = "Failed to fetch programs.";
pub const ADD_FAILED: &str = "Failed to add program.";
pub const ADDED: &str = "Program added successfully!";

#[derive(Debug, Clone)]
pub struct ProgramsView {
    pub programs: Vec<Program>,
    pub form: ProgramForm,
    pub filter: ProgramFilter,
    /// 1-based page of the filtered list
    pub page: usize,
    pub loading: bool,
    pub submitting: bool,
    pub notices: Notices,
    pub refresh: RefreshPolicy,
}

impl Default for ProgramsView {
    fn default() -> Self {
        Self {
            programs: Vec::new(),
            form: ProgramForm::default(),
            filter: ProgramFilter::default(),
            page: 1,
            loading: false,
            submitting: false,
            notices: Notices::default(),
            refresh: RefreshPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProgramsAction {
    LoadStarted,
    Loaded(Vec<Program>),
    LoadFailed(ApiError),
    SetName(String),
    SetDescription(String),
    SetCategory(Option<Category>),
    SetSearch(String),
    SetCategoryFilter(Option<Category>),
    NextPage,
    PreviousPage,
    GoToPage(usize),
    Invalid(ValidationError),
    SubmitStarted,
    Created { id: ProgramId, program: NewProgram },
    CreateFailed(ApiError),
    DismissError,
}

impl ProgramsView {
    pub fn new(refresh: RefreshPolicy) -> Self {
        Self {
            refresh,
            ..Default::default()
        }
    }

    pub fn apply(&mut self, action: ProgramsAction) {
        match action {
            ProgramsAction::LoadStarted => self.loading = true,
            ProgramsAction::Loaded(programs) => {
                self.loading = false;
                self.programs = programs;
                self.clamp();
            }
            ProgramsAction::LoadFailed(_) => {
                self.loading = false;
                self.notices.also_fail(FETCH_FAILED);
            }
            ProgramsAction::SetName(name) => self.form.name = name,
            ProgramsAction::SetDescription(description) => self.form.description = description,
            ProgramsAction::SetCategory(category) => self.form.category = category,
            ProgramsAction::SetSearch(search) => {
                if search != self.filter.search {
                    self.filter.search = search;
                    self.page = 1;
                }
            }
            ProgramsAction::SetCategoryFilter(category) => {
                if category != self.filter.category {
                    self.filter.category = category;
                    self.page = 1;
                }
            }
            ProgramsAction::NextPage => {
                self.page = self.page.saturating_add(1);
                self.clamp();
            }
            ProgramsAction::PreviousPage => {
                self.page = self.page.saturating_sub(1);
                self.clamp();
            }
            ProgramsAction::GoToPage(page) => {
                self.page = page;
                self.clamp();
            }
            ProgramsAction::Invalid(err) => self.notices.fail(err.to_string()),
            ProgramsAction::SubmitStarted => self.submitting = true,
            ProgramsAction::Created { id, program } => {
                self.submitting = false;
                self.notices.succeed(ADDED);
                self.form = ProgramForm::default();
                if self.refresh == RefreshPolicy::Optimistic {
                    self.programs.push(Program {
                        id,
                        name: program.name,
                        description: program.description,
                        category: program.category.map(|c| c.to_string()),
                    });
                }
            }
            ProgramsAction::CreateFailed(_) => {
                self.submitting = false;
                self.notices.fail(ADD_FAILED);
            }
            ProgramsAction::DismissError => self.notices.clear_error(),
        }
    }

    fn clamp(&mut self) {
        let total = self.filtered().len();
        self.page = clamp_page(self.page, total, PAGE_SIZE);
    }

    /// Programs passing the search and category filter, in backend order
    pub fn filtered(&self) -> Vec<&Program> {
        self.filter.apply(&self.programs)
    }

    /// The page currently shown
    pub fn current_page(&self) -> Page<&Program> {
        paginate(&self.filtered(), self.page, PAGE_SIZE)
    }

    /// CSV of the filtered list (every page)
    pub fn export_csv(&self) -> Result<String, ExportError> {
        let filtered = self.filtered();
        tracing::debug!(count = filtered.len(), "Exporting programs");
        programs_to_csv(filtered)
    }

    /// Validate the form and mark the submission as started
    pub fn prepare_submit(&mut self) -> Option<NewProgram> {
        if self.submitting {
            return None;
        }
        match self.form.validate() {
            Ok(program) => {
                self.apply(ProgramsAction::SubmitStarted);
                Some(program)
            }
            Err(err) => {
                self.apply(ProgramsAction::Invalid(err));
                None
            }
        }
    }

    pub fn wants_refetch(&self, outcome: &ProgramsAction) -> bool {
        matches!(outcome, ProgramsAction::Created { .. }) && self.refresh == RefreshPolicy::Refetch
    }

    pub async fn load<A: HealthApi + ?Sized>(&mut self, api: &A) {
        self.apply(ProgramsAction::LoadStarted);
        let outcome = fetch_programs(api).await;
        self.apply(outcome);
    }

    /// Submit the form; returns whether the program was created
    pub async fn submit<A: HealthApi + ?Sized>(&mut self, api: &A) -> bool {
        let Some(program) = self.prepare_submit() else {
            return false;
        };

        let outcome = create_program(api, program).await;
        let created = matches!(outcome, ProgramsAction::Created { .. });
        let refetch = self.wants_refetch(&outcome);
        self.apply(outcome);

        if refetch {
            self.load(api).await;
        }
        created
    }
}

/// Read the program list
pub async fn fetch_programs<A: HealthApi + ?Sized>(api: &A) -> ProgramsAction {
    match api.list_programs().await {
        Ok(programs) => {
            tracing::debug!(count = programs.len(), "Programs loaded");
            ProgramsAction::Loaded(programs)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to fetch programs");
            ProgramsAction::LoadFailed(e)
        }
    }
}

/// Create a validated program
pub async fn create_program<A: HealthApi + ?Sized>(api: &A, program: NewProgram) -> ProgramsAction {
    match api.create_program(&program).await {
        Ok(id) => ProgramsAction::Created { id, program },
        Err(e) => {
            tracing::warn!(error = %e, "Failed to add program");
            ProgramsAction::CreateFailed(e)
        }
    }
}
