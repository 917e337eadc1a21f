//! Content-type form view model

use crate::config::{AdminContext, FailurePolicy};
use crate::content::{build_commit_input, pluralize, slugify, validate_name, NAME_FIELD};
use crate::error::{Error, Result, ValidationError};
use crate::form::{DirtyTracker, FieldChange, FormEvents, Navigation, Router, Subscription};
use crate::store::ContentStore;
use crate::submit::{ProgressCallback, SubmissionState};
use crate::types::CommitReceipt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, error, info};

/// Result of a successful submission
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    /// Slug of the created content type
    pub content_type: String,
    /// Remote commit
    pub commit: CommitReceipt,
    /// Admin route of the new content type
    pub route: String,
    /// What happened when navigating there
    pub navigation: Navigation,
}

/// Shared view of a form's loading flag
///
/// Set while the base revision is fetched and the commit is sent.
#[derive(Debug, Clone, Default)]
pub struct LoadingFlag(Arc<AtomicBool>);

impl LoadingFlag {
    /// Whether a remote call is in flight
    pub fn is_loading(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn set(&self, loading: bool) {
        self.0.store(loading, Ordering::SeqCst);
    }
}

/// State behind the "create content type" view
///
/// Field edits go through [`on_change`](Self::on_change) and
/// [`on_blur`](Self::on_blur); both emit change events, which the attached
/// [`DirtyTracker`] turns into the unsaved-changes flag.
pub struct ContentTypeForm {
    name: String,
    pluralized: String,
    loading: LoadingFlag,
    state: SubmissionState,
    field_error: Option<ValidationError>,
    last_error: Option<String>,
    events: FormEvents,
    dirty: DirtyTracker,
    _dirty_watch: Subscription,
}

impl Default for ContentTypeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentTypeForm {
    /// An empty, clean form
    pub fn new() -> Self {
        let events = FormEvents::new();
        let dirty = DirtyTracker::new();
        let dirty_watch = dirty.attach(&events);
        Self {
            name: String::new(),
            pluralized: String::new(),
            loading: LoadingFlag::default(),
            state: SubmissionState::Idle,
            field_error: None,
            last_error: None,
            events,
            dirty,
            _dirty_watch: dirty_watch,
        }
    }

    /// The name field was edited; refreshes the sidebar preview
    ///
    /// Surrounding whitespace is dropped before anything is derived from it.
    pub fn on_change(&mut self, value: &str) {
        let value = value.trim();
        value.clone_into(&mut self.name);
        self.pluralized = pluralize(value);
        self.emit_name_change();
    }

    /// The name field lost focus; normalizes the stored name to its plural
    pub fn on_blur(&mut self) {
        self.name = pluralize(self.name.trim());
        self.emit_name_change();
    }

    fn emit_name_change(&self) {
        self.events.emit(&FieldChange {
            field: NAME_FIELD,
            value: self.name.clone(),
        });
    }

    /// Current value of the name field
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pluralized form of the last typed value, if any
    pub fn preview(&self) -> Option<&str> {
        (!self.pluralized.is_empty()).then_some(self.pluralized.as_str())
    }

    /// Label the content type will get in the sidebar
    pub fn sidebar_label(&self) -> Option<String> {
        self.preview().map(capitalize_words)
    }

    /// Whether a remote call is in flight
    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    /// Shared handle on the loading flag, for observers of an in-flight submit
    pub fn loading_flag(&self) -> LoadingFlag {
        self.loading.clone()
    }

    /// Current submission state
    pub const fn state(&self) -> SubmissionState {
        self.state
    }

    /// Whether the form holds unsaved changes
    pub fn is_dirty(&self) -> bool {
        self.dirty.is_dirty()
    }

    /// Shared handle on the unsaved-changes flag, for the navigation guard
    pub fn dirty_tracker(&self) -> DirtyTracker {
        self.dirty.clone()
    }

    /// Field-change events of this form
    pub const fn events(&self) -> &FormEvents {
        &self.events
    }

    /// Inline error for the name field from the last validation
    pub const fn field_error(&self) -> Option<&ValidationError> {
        self.field_error.as_ref()
    }

    /// User-facing message of the last failed submission
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Whether the submit control is disabled
    pub fn is_submit_disabled(&self) -> bool {
        self.loading.is_loading() || !self.dirty.is_dirty()
    }

    /// Validate the current name without submitting
    pub fn validate(&mut self, ctx: &AdminContext) -> std::result::Result<(), ValidationError> {
        let verdict = validate_name(&self.name, &ctx.pages);
        self.field_error = verdict.clone().err();
        verdict
    }

    async fn enter(&mut self, state: SubmissionState, progress: &dyn ProgressCallback) {
        debug!("submission: {} -> {}", self.state, state);
        self.state = state;
        progress.on_state(state).await;
    }

    /// Submit the form
    ///
    /// Validates, fetches the current head, commits, then records the new
    /// content type in `ctx` and navigates to it. A remote failure returns
    /// the form to an editable state and is returned as the error.
    pub async fn submit(
        &mut self,
        ctx: &mut AdminContext,
        store: &dyn ContentStore,
        router: &Router,
        progress: &dyn ProgressCallback,
    ) -> Result<SubmissionOutcome> {
        if self.is_submit_disabled() {
            return Err(Error::SubmitDisabled);
        }

        self.enter(SubmissionState::Validating, progress).await;
        if let Err(invalid) = self.validate(ctx) {
            self.enter(SubmissionState::Idle, progress).await;
            return Err(invalid.into());
        }

        self.loading.set(true);
        self.last_error = None;
        self.dirty.mark_clean();

        let content_type = slugify(&self.name);
        match self.commit_remote(ctx, store, &content_type, progress).await {
            Ok(commit) => {
                ctx.add_page(&content_type);
                self.loading.set(false);
                self.enter(SubmissionState::Succeeded, progress).await;
                progress.on_committed(&content_type, &commit).await;
                info!("created content type {content_type} ({})", commit.oid);

                let route = ctx.content_type_route(&content_type);
                let navigation = router.navigate(&route);
                Ok(SubmissionOutcome {
                    content_type,
                    commit,
                    route,
                    navigation,
                })
            }
            Err(err) => {
                self.loading.set(false);
                match ctx.failure_policy {
                    FailurePolicy::ClearDirty => self.dirty.mark_clean(),
                    FailurePolicy::PreserveDirty => self.dirty.mark_dirty(),
                }
                self.last_error = Some(err.user_message());
                error!("failed to create content type {content_type}: {err}");
                self.enter(SubmissionState::Failed, progress).await;
                progress.on_error(&err).await;
                Err(err)
            }
        }
    }

    async fn commit_remote(
        &mut self,
        ctx: &AdminContext,
        store: &dyn ContentStore,
        content_type: &str,
        progress: &dyn ProgressCallback,
    ) -> Result<CommitReceipt> {
        self.enter(SubmissionState::FetchingBase, progress).await;
        let base = store.fetch_base_revision().await?;

        self.enter(SubmissionState::Committing, progress).await;
        let input = build_commit_input(
            ctx.owner(),
            &base,
            &ctx.repository_slug,
            &ctx.content_path,
            content_type,
        );
        store.create_commit(&input).await
    }
}

fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
