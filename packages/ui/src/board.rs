//! # Board: state of the authenticated voyages screen
//!
//! The board owns the fetched list, the paginator and the detail modal. It is
//! plain data so every transition can be exercised without a renderer; the
//! view wraps it in a `Signal` and drives network calls from the outside.
//!
//! ## Modal lifecycle
//!
//! ```text
//! Closed ──open_existing──▶ Open(View) ──begin_edit──▶ Open(Edit)
//! Closed ──open_new───────────────────────────────────▶ Open(Edit)
//! Open(Edit) ──begin_submit──▶ saving ──submit_succeeded──▶ Closed (+ reload)
//!                                     └─submit_failed────▶ Open(Edit) + error
//! ```
//!
//! After a successful save the caller re-fetches the whole list. The board
//! never merges a saved record into `voyages` itself.
//!
//! ## Loads
//!
//! Each list request is tagged with a generation from [`Board::begin_load`].
//! A response carrying an older generation than the newest request is
//! dropped, so a slow early response cannot overwrite a fresher one.

use api::ApiClient;
use store::Voyage;

use crate::draft::{DraftError, Field, VoyageDraft};
use crate::pagination::Paginator;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    View,
    Edit,
}

/// The voyage currently shown in the modal.
#[derive(Clone, Debug, PartialEq)]
pub struct Editor {
    /// Record the modal was opened on; `None` when adding a voyage.
    pub original: Option<Voyage>,
    pub mode: FormMode,
    pub draft: VoyageDraft,
    pub saving: bool,
    pub error: Option<String>,
}

impl Editor {
    pub fn is_new(&self) -> bool {
        self.original_id().is_none()
    }

    pub fn original_id(&self) -> Option<&str> {
        self.original.as_ref().and_then(|v| v.id.as_deref())
    }

    pub fn title(&self) -> &'static str {
        match (self.mode, self.is_new()) {
            (FormMode::Edit, true) => "Add Voyage",
            (FormMode::Edit, false) => "Edit Voyage",
            (FormMode::View, _) => "Voyage Details",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Modal {
    #[default]
    Closed,
    Open(Editor),
}

/// What a save should send. Records without an id are created, records with
/// one are updated in place.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitRequest {
    Create(Voyage),
    Update { id: String, voyage: Voyage },
}

impl SubmitRequest {
    pub async fn send(&self, client: &ApiClient) -> api::Result<Voyage> {
        match self {
            SubmitRequest::Create(voyage) => client.create_voyage(voyage).await,
            SubmitRequest::Update { id, voyage } => client.update_voyage(id, voyage).await,
        }
    }
}

/// Reason a submit did not start.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitBlocked {
    #[error("nothing is being edited")]
    NotEditing,
    #[error("a save is already in progress")]
    InFlight,
    #[error("Please fill in: {}", labels(.0))]
    MissingFields(Vec<Field>),
}

fn labels(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    pub voyages: Vec<Voyage>,
    pub paginator: Paginator,
    pub loading: bool,
    pub modal: Modal,
    load_generation: u64,
}

impl Board {
    pub fn new(page_size: usize) -> Self {
        Self {
            voyages: Vec::new(),
            paginator: Paginator::new(page_size),
            loading: false,
            modal: Modal::Closed,
            load_generation: 0,
        }
    }

    pub fn editor(&self) -> Option<&Editor> {
        match &self.modal {
            Modal::Open(editor) => Some(editor),
            Modal::Closed => None,
        }
    }

    fn editor_mut(&mut self) -> Option<&mut Editor> {
        match &mut self.modal {
            Modal::Open(editor) => Some(editor),
            Modal::Closed => None,
        }
    }

    pub fn open_existing(&mut self, voyage: Voyage) {
        self.modal = Modal::Open(Editor {
            draft: VoyageDraft::from_voyage(&voyage),
            original: Some(voyage),
            mode: FormMode::View,
            saving: false,
            error: None,
        });
    }

    pub fn open_new(&mut self) {
        self.modal = Modal::Open(Editor {
            original: None,
            mode: FormMode::Edit,
            draft: VoyageDraft::new(),
            saving: false,
            error: None,
        });
    }

    pub fn begin_edit(&mut self) {
        if let Some(editor) = self.editor_mut() {
            if editor.mode == FormMode::View {
                editor.mode = FormMode::Edit;
                editor.error = None;
            }
        }
    }

    pub fn cancel_edit(&mut self) {
        let Some(editor) = self.editor_mut() else {
            return;
        };
        if editor.saving {
            return;
        }
        match editor.original.clone() {
            Some(original) if !editor.is_new() => {
                editor.draft = VoyageDraft::from_voyage(&original);
                editor.mode = FormMode::View;
                editor.error = None;
            }
            _ => self.modal = Modal::Closed,
        }
    }

    pub fn close(&mut self) {
        self.modal = Modal::Closed;
    }

    /// Apply input to the open draft. Ignored unless the modal is in edit
    /// mode and idle.
    pub fn update_field(&mut self, field: Field, raw: &str) -> Result<(), DraftError> {
        match self.editor_mut() {
            Some(editor) if editor.mode == FormMode::Edit && !editor.saving => {
                editor.draft.set(field, raw)
            }
            _ => Ok(()),
        }
    }

    pub fn begin_submit(&mut self) -> Result<SubmitRequest, SubmitBlocked> {
        let editor = self.editor_mut().ok_or(SubmitBlocked::NotEditing)?;
        if editor.mode != FormMode::Edit {
            return Err(SubmitBlocked::NotEditing);
        }
        if editor.saving {
            return Err(SubmitBlocked::InFlight);
        }
        let missing = editor.draft.missing_required();
        if !missing.is_empty() {
            let blocked = SubmitBlocked::MissingFields(missing);
            editor.error = Some(blocked.to_string());
            return Err(blocked);
        }

        editor.saving = true;
        editor.error = None;
        let voyage = editor.draft.to_voyage();
        Ok(match editor.original_id() {
            Some(id) => SubmitRequest::Update {
                id: id.to_string(),
                voyage,
            },
            None => SubmitRequest::Create(voyage),
        })
    }

    pub fn submit_succeeded(&mut self) {
        self.modal = Modal::Closed;
    }

    pub fn submit_failed(&mut self, message: impl Into<String>) {
        if let Some(editor) = self.editor_mut() {
            editor.saving = false;
            editor.mode = FormMode::Edit;
            editor.error = Some(message.into());
        }
    }

    /// Start a list load and return its generation.
    pub fn begin_load(&mut self) -> u64 {
        self.load_generation += 1;
        self.loading = true;
        self.load_generation
    }

    /// Install a fetched list. Returns `false` when a newer load has started
    /// since `generation` was issued.
    pub fn finish_load(&mut self, generation: u64, voyages: Vec<Voyage>) -> bool {
        if generation != self.load_generation {
            return false;
        }
        self.voyages = voyages;
        self.loading = false;
        self.paginator.clamp(self.voyages.len());
        true
    }

    pub fn fail_load(&mut self, generation: u64) {
        if generation == self.load_generation {
            self.loading = false;
        }
    }

    pub fn page_items(&self) -> &[Voyage] {
        self.paginator.slice(&self.voyages)
    }

    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages(self.voyages.len())
    }

    pub fn next_page(&mut self) {
        self.paginator.next(self.voyages.len());
    }

    pub fn prev_page(&mut self) {
        self.paginator.prev();
    }

    /// Drop everything, keeping the page size. In-flight loads become stale.
    pub fn reset(&mut self) {
        let generation = self.load_generation + 1;
        *self = Self::new(self.paginator.page_size());
        self.load_generation = generation;
    }
}
