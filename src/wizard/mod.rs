mod questions;
mod submit;
mod templates;
pub mod ui;

pub use questions::{Question, QuestionKind, application_questions};
pub use submit::{SubmissionMessage, build_application, start_submission};
pub use templates::Template;

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::api::ApiClient;
use crate::ui::Theme;
use crate::ui::widgets::{Control, ListEntry, SelectList, Spinner};

/// Progression of a single wizard run. `SubmitSucceeded` and
/// `SubmitFailed` are terminal; no transition leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    Initiated,
    TemplateSelected,
    QuestionsCompleted,
    SubmitInProgress,
    SubmitSucceeded,
    SubmitFailed,
}

/// Requests the wizard hands back to the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    Quit,
}

pub struct WizardApp {
    pub theme: Theme,
    pub state: WizardState,
    pub templates: SelectList,
    pub questions: Vec<Question>,
    pub current_question: usize,
    pub template: Option<Template>,
    pub spinner: Spinner,
    pub state_error: Option<String>,
    pub output: String,
    pub should_exit: bool,
    client: Arc<ApiClient>,
    submission: Option<mpsc::UnboundedReceiver<SubmissionMessage>>,
}

impl WizardApp {
    pub fn new(client: Arc<ApiClient>) -> Self {
        let entries = Template::ALL
            .iter()
            .map(|t| ListEntry::new(t.title(), t.description()))
            .collect();

        Self {
            theme: Theme::default(),
            state: WizardState::Initiated,
            templates: SelectList::new(
                "Select application template to create application",
                entries,
            ),
            questions: application_questions(),
            current_question: 0,
            template: None,
            spinner: Spinner::new(),
            state_error: None,
            output: String::new(),
            should_exit: false,
            client,
            submission: None,
        }
    }

    /// The terminal user-facing message, empty until the run ends.
    pub fn final_output(&self) -> &str {
        &self.output
    }

    pub fn error_text(&self) -> &str {
        self.state_error.as_deref().unwrap_or("unknown error")
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<WizardAction> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_exit = true;
            return Some(WizardAction::Quit);
        }

        if key.code == KeyCode::Enter {
            return self.handle_enter();
        }

        match self.state {
            WizardState::Initiated => self.templates.handle_key(key),
            WizardState::TemplateSelected | WizardState::QuestionsCompleted => {
                // Only the focused question receives raw input; it is
                // always the one at current_question.
                if let Some(question) = self.questions.get_mut(self.current_question)
                    && question.input.is_focused()
                {
                    question.input.handle_key(key);
                }
            }
            WizardState::SubmitSucceeded | WizardState::SubmitFailed => {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    self.should_exit = true;
                    return Some(WizardAction::Quit);
                }
            }
            // Keys are ignored while the create call is in flight.
            WizardState::SubmitInProgress => {}
        }

        // The busy indicator sees every key but only animates on ticks.
        self.spinner.handle_key(key);

        None
    }

    fn handle_enter(&mut self) -> Option<WizardAction> {
        match self.state {
            WizardState::Initiated => {
                if let Some(entry) = self.templates.selected_entry()
                    && let Some(template) = Template::from_title(&entry.title)
                {
                    info!("Template selected: {} ({})", template.title(), template.key());
                    self.template = Some(template);
                    self.state = WizardState::TemplateSelected;
                    self.questions[self.current_question].input.focus();
                }
                None
            }
            WizardState::TemplateSelected => {
                if self.template.is_some_and(|t| t.is_supported()) {
                    self.confirm_current_answer();
                }
                None
            }
            WizardState::QuestionsCompleted => self.handle_confirmation(),
            WizardState::SubmitInProgress => None,
            WizardState::SubmitSucceeded | WizardState::SubmitFailed => {
                self.should_exit = true;
                Some(WizardAction::Quit)
            }
        }
    }

    fn confirm_current_answer(&mut self) {
        let confirmation_index = self.questions.len() - 1;
        let question = &mut self.questions[self.current_question];
        question.answer = question.input.value().to_string();
        question.input.blur();

        if self.current_question + 1 == confirmation_index {
            self.enter_confirmation_phase();
        } else {
            self.current_question += 1;
            self.questions[self.current_question].input.focus();
        }
    }

    /// Explicit hand-off into the final y/n question. The confirmation
    /// input starts empty even if it was touched earlier in the run.
    fn enter_confirmation_phase(&mut self) {
        let confirmation_index = self.questions.len() - 1;
        self.state = WizardState::QuestionsCompleted;
        self.current_question = confirmation_index;

        let input = &mut self.questions[confirmation_index].input;
        input.set_value("");
        input.focus();
    }

    fn handle_confirmation(&mut self) -> Option<WizardAction> {
        let question = &mut self.questions[self.current_question];
        question.answer = question.input.value().to_string();
        let confirmation = question.answer.to_lowercase();

        if confirmation == "y" || confirmation.is_empty() {
            question.input.blur();
            self.state = WizardState::SubmitInProgress;
            self.begin_submission();
            None
        } else {
            info!("Application creation declined");
            self.output = "Application creation cancelled.".to_string();
            self.should_exit = true;
            Some(WizardAction::Quit)
        }
    }

    fn begin_submission(&mut self) {
        let Some(template) = self.template else {
            self.fail_submission("no template selected".to_string());
            return;
        };

        let name = self.questions[0].answer.clone();
        let redirect_url = self.questions[1].answer.clone();

        match build_application(template, &name, &redirect_url) {
            Ok(application) => {
                info!("Creating application '{}'", name);
                self.submission = Some(start_submission(self.client.clone(), application));
            }
            Err(e) => self.fail_submission(e.to_string()),
        }
    }

    fn fail_submission(&mut self, message: String) {
        warn!("Submission rejected: {}", message);
        self.state = WizardState::SubmitFailed;
        self.state_error = Some(message);
        self.output = "Error creating application!".to_string();
    }

    /// Fold a finished background submission into controller state. Called
    /// once per event-loop iteration; a no-op while the call is in flight.
    pub fn poll_submission(&mut self) {
        let Some(rx) = self.submission.as_mut() else {
            return;
        };

        match rx.try_recv() {
            Ok(message) => {
                self.submission = None;
                self.handle_submission(message);
            }
            Err(mpsc::error::TryRecvError::Empty) => {}
            Err(mpsc::error::TryRecvError::Disconnected) => {
                self.submission = None;
                self.handle_submission(SubmissionMessage::Failed(
                    "submission task dropped".to_string(),
                ));
            }
        }
    }

    pub fn handle_submission(&mut self, message: SubmissionMessage) {
        match message {
            SubmissionMessage::Completed(created) => {
                info!("Application created (id: {:?})", created.id);
                self.state = WizardState::SubmitSucceeded;
                self.output = "Application created successfully!".to_string();
            }
            SubmissionMessage::Failed(error) => {
                self.state = WizardState::SubmitFailed;
                self.state_error = Some(error);
                self.output = "Error creating application!".to_string();
            }
        }
    }

    /// Resize only affects layout, which is recomputed from the frame area
    /// on the next draw; the wizard state never changes here.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        debug!("Resized to {}x{}", width, height);
    }

    pub fn tick(&mut self) {
        self.spinner.tick();
    }
}
