//! Submission flow tests against a mock content store

mod common;

use async_trait::async_trait;
use common::fixtures::{context_preserving_dirty, context_with_pages, CREATE_VIEW};
use common::mock_store::{Failure, MockContentStore};
use ost_admin::error::Error;
use ost_admin::form::{DirtyTracker, Navigation, NavigationGuard, Router};
use ost_admin::submit::{
    plan_submission, ContentTypeForm, LoadingFlag, NoopProgress, ProgressCallback,
    SubmissionState,
};
use ost_admin::types::CommitReceipt;
use std::sync::{Arc, Mutex};

/// Records every state the form passes through
#[derive(Default)]
struct RecordingProgress {
    states: Mutex<Vec<SubmissionState>>,
    committed: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl RecordingProgress {
    fn states(&self) -> Vec<SubmissionState> {
        self.states.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProgressCallback for RecordingProgress {
    async fn on_state(&self, state: SubmissionState) {
        self.states.lock().unwrap().push(state);
    }
    async fn on_committed(&self, content_type: &str, _receipt: &CommitReceipt) {
        self.committed.lock().unwrap().push(content_type.to_string());
    }
    async fn on_error(&self, error: &Error) {
        self.errors.lock().unwrap().push(error.to_string());
    }
    async fn on_message(&self, _message: &str) {}
}

fn typed(name: &str) -> ContentTypeForm {
    let mut form = ContentTypeForm::new();
    form.on_change(name);
    form.on_blur();
    form
}

#[tokio::test]
async fn test_create_post_end_to_end() {
    let store = MockContentStore::with_head("base1");
    let mut ctx = context_with_pages(&["docs"]);
    let router = Router::new(CREATE_VIEW);
    let progress = RecordingProgress::default();

    let mut form = ContentTypeForm::new();
    form.on_change("Post");
    assert_eq!(form.preview(), Some("Posts"));
    form.on_blur();
    assert_eq!(form.name(), "Posts");

    let outcome = form
        .submit(&mut ctx, &store, &router, &progress)
        .await
        .unwrap();

    assert_eq!(outcome.content_type, "posts");
    assert_eq!(outcome.route, "/admin/posts");
    assert_eq!(
        outcome.navigation,
        Navigation::Completed("/admin/posts".to_string())
    );
    assert_eq!(outcome.commit.oid, "base1-next");
    assert_eq!(router.current(), "/admin/posts");

    assert_eq!(ctx.pages.as_slice(), ["docs", "posts"]);
    assert!(!form.is_loading());
    assert!(!form.is_dirty());
    assert_eq!(form.state(), SubmissionState::Succeeded);

    assert_eq!(
        progress.states(),
        [
            SubmissionState::Validating,
            SubmissionState::FetchingBase,
            SubmissionState::Committing,
            SubmissionState::Succeeded,
        ]
    );
    assert_eq!(*progress.committed.lock().unwrap(), ["posts"]);

    let commits = store.commit_calls();
    assert_eq!(commits.len(), 1);
    assert_eq!(commits[0].owner, "testowner");
    assert_eq!(commits[0].repository_slug, "testrepo");
    assert_eq!(commits[0].base_revision_id, "base1");
    assert_eq!(commits[0].file_path(), "content/posts/.gitkeep");
}

#[tokio::test]
async fn test_reserved_name_is_never_submitted() {
    let store = MockContentStore::with_head("base1");
    let mut ctx = context_with_pages(&["posts"]);
    let router = Router::new(CREATE_VIEW);
    let mut form = typed("Posts");

    let err = form
        .submit(&mut ctx, &store, &router, &NoopProgress)
        .await
        .unwrap_err();

    let Error::Validation(invalid) = err else {
        panic!("expected validation error");
    };
    assert_eq!(invalid.reason, "The word Posts is reserved");
    assert!(!form.is_loading());
    assert_eq!(ctx.pages.as_slice(), ["posts"]);
    store.assert_untouched();
}

#[tokio::test]
async fn test_commit_failure_resets_flags() {
    let store = MockContentStore::with_head("base1");
    store.fail_commit(Failure::Transport("connection reset".to_string()));
    let mut ctx = context_with_pages(&[]);
    let router = Router::new(CREATE_VIEW);
    let progress = RecordingProgress::default();
    let mut form = typed("Post");

    let err = form
        .submit(&mut ctx, &store, &router, &progress)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
    assert!(!form.is_loading());
    assert!(!form.is_dirty());
    assert_eq!(form.state(), SubmissionState::Failed);
    assert!(ctx.pages.is_empty());
    assert_eq!(router.current(), CREATE_VIEW);
    assert_eq!(
        form.last_error(),
        Some("Something went wrong while saving. Please try again.")
    );
    assert_eq!(progress.errors.lock().unwrap().len(), 1);
    assert_eq!(
        progress.states().last(),
        Some(&SubmissionState::Failed)
    );
}

#[tokio::test]
async fn test_fetch_failure_skips_commit() {
    let store = MockContentStore::with_head("base1");
    store.fail_fetch(Failure::Transport("dns".to_string()));
    let mut ctx = context_with_pages(&[]);
    let router = Router::new(CREATE_VIEW);
    let mut form = typed("Recipe");

    let err = form
        .submit(&mut ctx, &store, &router, &NoopProgress)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
    assert_eq!(store.fetch_count(), 1);
    assert!(store.commit_calls().is_empty());
    assert!(ctx.pages.is_empty());
}

#[tokio::test]
async fn test_rejection_treated_like_transport_failure() {
    let store = MockContentStore::with_head("base1");
    store.fail_commit(Failure::Rejected("expectedHeadOid is stale".to_string()));
    let mut ctx = context_with_pages(&[]);
    let router = Router::new(CREATE_VIEW);
    let mut form = typed("Recipe");

    let err = form
        .submit(&mut ctx, &store, &router, &NoopProgress)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::RemoteRejection(_)));
    assert!(!form.is_loading());
    assert!(!form.is_dirty());
    assert_eq!(
        form.last_error(),
        Some("Something went wrong while saving. Please try again.")
    );
}

#[tokio::test]
async fn test_failed_submit_disables_until_edited() {
    let store = MockContentStore::with_head("base1");
    store.fail_commit(Failure::Transport("timeout".to_string()));
    let mut ctx = context_with_pages(&[]);
    let router = Router::new(CREATE_VIEW);
    let mut form = typed("Recipe");

    assert!(form.submit(&mut ctx, &store, &router, &NoopProgress).await.is_err());
    assert!(form.is_submit_disabled());

    let err = form
        .submit(&mut ctx, &store, &router, &NoopProgress)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::SubmitDisabled));
    assert_eq!(store.commit_calls().len(), 1);

    // Editing re-enables; a healed remote succeeds
    store.heal();
    form.on_change("Recipes");
    let outcome = form
        .submit(&mut ctx, &store, &router, &NoopProgress)
        .await
        .unwrap();
    assert_eq!(outcome.content_type, "recipes");
}

#[tokio::test]
async fn test_preserve_dirty_policy_keeps_guard_armed() {
    let store = MockContentStore::with_head("base1");
    store.fail_commit(Failure::Transport("boom".to_string()));
    let mut ctx = context_preserving_dirty(&[]);
    let router = Router::new(CREATE_VIEW);
    let mut form = typed("Recipe");

    let asked = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&asked);
    let _guard = NavigationGuard::install(
        &router,
        form.dirty_tracker(),
        Arc::new(move |_: &str| {
            *counter.lock().unwrap() += 1;
            false
        }),
    );

    assert!(form.submit(&mut ctx, &store, &router, &NoopProgress).await.is_err());
    assert!(form.is_dirty());
    assert!(!form.is_submit_disabled());

    assert_eq!(router.navigate("/admin"), Navigation::Blocked);
    assert_eq!(*asked.lock().unwrap(), 1);
}

#[tokio::test]
async fn test_guard_does_not_block_navigation_after_success() {
    let store = MockContentStore::with_head("base1");
    let mut ctx = context_with_pages(&[]);
    let router = Router::new(CREATE_VIEW);
    let mut form = typed("Post");
    let _guard = NavigationGuard::install(
        &router,
        form.dirty_tracker(),
        Arc::new(|_: &str| false),
    );

    // Guard would block a dirty view
    assert_eq!(router.navigate("/admin"), Navigation::Blocked);

    let outcome = form
        .submit(&mut ctx, &store, &router, &NoopProgress)
        .await
        .unwrap();
    assert_eq!(
        outcome.navigation,
        Navigation::Completed("/admin/posts".to_string())
    );
}

#[tokio::test]
async fn test_stale_base_rejected_by_remote() {
    let store = MockContentStore::with_head("base1");
    let mut ctx = context_with_pages(&[]);
    let router = Router::new(CREATE_VIEW);

    let mut first = typed("Post");
    first
        .submit(&mut ctx, &store, &router, &NoopProgress)
        .await
        .unwrap();

    // A plan built on the old head no longer applies
    let plan = plan_submission("Recipe", &ctx, &store).await.unwrap();
    assert_eq!(plan.base_revision_id, "base1-next");

    let mut stale = plan.clone();
    stale.base_revision_id = "base1".to_string();
    let err = ost_admin::store::ContentStore::create_commit(&store, &stale)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::RemoteRejection(_)));
}

#[tokio::test]
async fn test_plan_submission_validates_and_builds() {
    let store = MockContentStore::with_head("abc");
    let ctx = context_with_pages(&["posts"]);

    let plan = plan_submission("blog post", &ctx, &store).await.unwrap();
    assert_eq!(plan.content_type, "blog-posts");
    assert_eq!(plan.file_path(), "content/blog-posts/.gitkeep");
    assert!(store.commit_calls().is_empty());

    let err = plan_submission("post", &ctx, &store).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn test_dirty_flag_transitions_without_runtime() {
    let mut form = ContentTypeForm::new();
    assert!(!form.is_dirty());
    assert!(form.is_submit_disabled());

    form.on_change("P");
    assert!(form.is_dirty());
    assert!(!form.is_submit_disabled());

    let store = MockContentStore::with_head("h");
    store.fail_commit(Failure::Transport("x".to_string()));
    let mut ctx = context_with_pages(&[]);
    let router = Router::new(CREATE_VIEW);
    let result = tokio_test::block_on(form.submit(&mut ctx, &store, &router, &NoopProgress));
    assert!(result.is_err());
    assert!(!form.is_dirty());
}

/// Samples the form's flags on every state change
struct FlagSampler {
    loading: LoadingFlag,
    dirty: DirtyTracker,
    samples: Mutex<Vec<(SubmissionState, bool, bool)>>,
}

impl FlagSampler {
    fn watching(form: &ContentTypeForm) -> Self {
        Self {
            loading: form.loading_flag(),
            dirty: form.dirty_tracker(),
            samples: Mutex::new(Vec::new()),
        }
    }

    /// `(state, loading, submit disabled)` per transition
    fn samples(&self) -> Vec<(SubmissionState, bool, bool)> {
        self.samples.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProgressCallback for FlagSampler {
    async fn on_state(&self, state: SubmissionState) {
        let loading = self.loading.is_loading();
        let disabled = loading || !self.dirty.is_dirty();
        self.samples.lock().unwrap().push((state, loading, disabled));
    }
    async fn on_committed(&self, _content_type: &str, _receipt: &CommitReceipt) {}
    async fn on_error(&self, _error: &Error) {}
    async fn on_message(&self, _message: &str) {}
}

#[tokio::test]
async fn test_submit_disabled_while_in_flight() {
    let store = MockContentStore::with_head("base1");
    let mut ctx = context_with_pages(&[]);
    let router = Router::new(CREATE_VIEW);
    let mut form = typed("Post");
    let sampler = FlagSampler::watching(&form);

    form.submit(&mut ctx, &store, &router, &sampler)
        .await
        .unwrap();

    for (state, loading, disabled) in sampler.samples() {
        assert_eq!(loading, state.is_in_flight(), "loading during {state:?}");
        if state.is_in_flight() {
            assert!(disabled, "submit enabled during {state:?}");
        }
    }
    assert!(
        sampler
            .samples()
            .iter()
            .any(|(state, ..)| *state == SubmissionState::Committing)
    );
    assert!(!form.is_loading());
}

#[tokio::test]
async fn test_loading_cleared_when_commit_fails() {
    let store = MockContentStore::with_head("base1");
    store.fail_commit(Failure::Transport("reset".to_string()));
    let mut ctx = context_with_pages(&[]);
    let router = Router::new(CREATE_VIEW);
    let mut form = typed("Post");
    let sampler = FlagSampler::watching(&form);

    assert!(form.submit(&mut ctx, &store, &router, &sampler).await.is_err());

    let samples = sampler.samples();
    assert_eq!(
        samples.last().map(|(state, loading, _)| (*state, *loading)),
        Some((SubmissionState::Failed, false))
    );
    assert!(
        samples
            .iter()
            .any(|(state, loading, _)| *state == SubmissionState::Committing && *loading)
    );
}

#[tokio::test]
async fn test_padded_name_commits_what_dry_run_shows() {
    let store = MockContentStore::with_head("base1");
    let mut ctx = context_with_pages(&[]);
    let router = Router::new(CREATE_VIEW);

    let plan = plan_submission("Post ", &ctx, &store).await.unwrap();

    let mut form = ContentTypeForm::new();
    form.on_change("Post ");
    assert_eq!(form.preview(), Some("Posts"));
    form.on_blur();
    let outcome = form
        .submit(&mut ctx, &store, &router, &NoopProgress)
        .await
        .unwrap();

    assert_eq!(plan.content_type, "posts");
    assert_eq!(outcome.content_type, plan.content_type);
    assert_eq!(store.commit_calls()[0].file_path(), plan.file_path());
}
