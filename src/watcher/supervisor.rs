//! Watch supervisor: one native subscription per watch target.
//!
//! Each subscription owns a `notify::RecommendedWatcher` whose callback
//! filters and dispatches events directly on the backend's thread. There is
//! no queue between the backend and the launcher, so events for one
//! subscription are dispatched in the order the backend delivers them.
//! Subscriptions share nothing mutable with each other.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use parking_lot::Mutex;
use tokio::runtime::Handle;

use super::dispatcher::{DispatchOutcome, Dispatcher};
use super::error::WatchError;
use super::event::{EventNormalizer, FsEvent};
use super::recovery::{self, RecoveryPolicy};
use super::target::{FileFilter, WatchTarget};

/// How long a rename source waits for its destination before it is
/// reported as deleted.
pub const MOVE_OUT_DELAY: Duration = Duration::from_millis(100);

/// Index of a subscription inside its supervisor.
pub type SubscriptionId = usize;

/// Lifecycle of a subscription.
///
/// `Unregistered -> Active -> Disabled -> Active ...`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionState {
    /// Created but the native watch has not been established yet.
    Unregistered,
    /// Native watch established; events are dispatched.
    Active,
    /// Native watch dropped; events are ignored.
    Disabled,
}

/// Subscription-level failures reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The backend queue overran and events were dropped.
    BufferOverflow,
    /// The watched directory became inaccessible.
    AccessLost,
}

/// Classify a backend error.
pub fn classify_error(err: &notify::Error) -> ErrorClass {
    match err.kind {
        // Backend capacity exhausted: changes past the limit are not reported
        notify::ErrorKind::MaxFilesWatch => ErrorClass::BufferOverflow,
        _ => ErrorClass::AccessLost,
    }
}

/// Binds one target to one native watch handle.
pub(super) struct Subscription {
    id: SubscriptionId,
    target: WatchTarget,
    /// Absolute form of `target.path`.
    root: PathBuf,
    filter: FileFilter,
    state: Mutex<SubscriptionState>,
    watcher: Mutex<Option<RecommendedWatcher>>,
    normalizer: Mutex<EventNormalizer>,
    recovering: AtomicBool,
    /// Recovery runs scheduled automatically so far.
    recoveries: AtomicUsize,
}

impl Subscription {
    fn new(id: SubscriptionId, target: WatchTarget, root: PathBuf, filter: FileFilter) -> Self {
        Self {
            id,
            target,
            root,
            filter,
            state: Mutex::new(SubscriptionState::Unregistered),
            watcher: Mutex::new(None),
            normalizer: Mutex::new(EventNormalizer::new()),
            recovering: AtomicBool::new(false),
            recoveries: AtomicUsize::new(0),
        }
    }

    pub(super) fn root(&self) -> &Path {
        &self.root
    }

    fn state(&self) -> SubscriptionState {
        *self.state.lock()
    }

    /// Drop the native watch. Events already in flight are ignored.
    pub(super) fn disable(&self) {
        *self.state.lock() = SubscriptionState::Disabled;
        let old = self.watcher.lock().take();
        drop(old);
    }

    pub(super) fn finish_recovery(&self) {
        self.recovering.store(false, Ordering::SeqCst);
    }

    /// A rename passes when either name matches.
    fn passes_filter(&self, event: &FsEvent) -> bool {
        self.filter.matches(&event.path)
            || event
                .old_path
                .as_deref()
                .is_some_and(|old| self.filter.matches(old))
    }

    fn is_root_removal(&self, event: &notify::Event) -> bool {
        matches!(event.kind, EventKind::Remove(_)) && event.paths.iter().any(|p| p == &self.root)
    }

    /// Filter and dispatch one backend event.
    fn handle_event(
        self: &Arc<Self>,
        event: &notify::Event,
        shared: &Arc<Shared>,
    ) -> Vec<DispatchOutcome> {
        if self.state() != SubscriptionState::Active {
            return Vec::new();
        }

        if event.need_rescan() {
            shared.on_error(self, ErrorClass::BufferOverflow, "backend requested a rescan");
            return Vec::new();
        }

        if self.is_root_removal(event) {
            shared.on_error(self, ErrorClass::AccessLost, "watched directory was removed");
            return Vec::new();
        }

        // Held across dispatch so delayed releases keep backend order
        let mut normalizer = self.normalizer.lock();
        let held = normalizer.pending_generation();
        let events = normalizer.accept(event);
        let outcomes = self.dispatch_all(events, shared);

        let fresh = normalizer.pending_generation().filter(|g| held != Some(*g));
        if let Some(generation) = fresh {
            self.schedule_move_release(generation, shared);
        }

        outcomes
    }

    fn dispatch_all(&self, events: Vec<FsEvent>, shared: &Shared) -> Vec<DispatchOutcome> {
        events
            .into_iter()
            .filter(|e| {
                let pass = self.passes_filter(e);
                if !pass {
                    crate::debug_event!("watcher", "filtered", "{}", e.path.display());
                }
                pass
            })
            .map(|e| shared.dispatcher.dispatch(&e, &self.target))
            .collect()
    }

    /// Report a rename source as deleted if its destination never shows up.
    fn schedule_move_release(self: &Arc<Self>, generation: u64, shared: &Arc<Shared>) {
        let subscription = Arc::downgrade(self);
        let shared_for_task = Arc::clone(shared);

        shared.runtime.spawn(async move {
            tokio::time::sleep(MOVE_OUT_DELAY).await;
            if let Some(subscription) = subscription.upgrade() {
                subscription.release_move(generation, &shared_for_task);
            }
        });
    }

    fn release_move(&self, generation: u64, shared: &Shared) -> Vec<DispatchOutcome> {
        let mut normalizer = self.normalizer.lock();
        let events = normalizer.release_stale(generation);
        if events.is_empty() || self.state() != SubscriptionState::Active {
            return Vec::new();
        }
        crate::debug_event!("watcher", "moved out", "{} path(s)", events.len());
        self.dispatch_all(events, shared)
    }
}

/// State shared by all subscriptions and their callbacks.
pub(super) struct Shared {
    dispatcher: Dispatcher,
    pub(super) policy: RecoveryPolicy,
    runtime: Handle,
}

impl Shared {
    /// Establish a fresh native watch for `subscription` and mark it active.
    pub(super) fn enable(
        self: &Arc<Self>,
        subscription: &Arc<Subscription>,
    ) -> Result<(), WatchError> {
        let registration_failed = |reason: String| WatchError::RegistrationFailed {
            path: subscription.root.clone(),
            reason,
        };

        if !subscription.root.is_dir() {
            return Err(registration_failed("not an accessible directory".to_string()));
        }

        let weak: Weak<Subscription> = Arc::downgrade(subscription);
        let shared = Arc::clone(self);

        let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
            let Some(subscription) = weak.upgrade() else {
                return;
            };
            match res {
                Ok(event) => {
                    subscription.handle_event(&event, &shared);
                }
                Err(e) => {
                    let class = classify_error(&e);
                    shared.on_error(&subscription, class, &e.to_string());
                }
            }
        })
        .map_err(|e| registration_failed(e.to_string()))?;

        watcher
            .watch(&subscription.root, RecursiveMode::Recursive)
            .map_err(|e| registration_failed(e.to_string()))?;

        *subscription.watcher.lock() = Some(watcher);
        *subscription.state.lock() = SubscriptionState::Active;
        Ok(())
    }

    /// Log a subscription error and schedule recovery when the policy allows.
    fn on_error(
        self: &Arc<Self>,
        subscription: &Arc<Subscription>,
        class: ErrorClass,
        detail: &str,
    ) {
        let root = subscription.root.clone();
        match class {
            ErrorClass::BufferOverflow => {
                let err = WatchError::NotificationOverflow { path: root };
                tracing::error!("[watcher] {err} ({detail})");
            }
            ErrorClass::AccessLost => {
                let err = WatchError::AccessLost {
                    path: root,
                    reason: detail.to_string(),
                };
                tracing::error!("[watcher] {err}");
                self.schedule_recovery(subscription);
            }
        }
    }

    /// Returns false when recovery is off or already running.
    fn schedule_recovery(self: &Arc<Self>, subscription: &Arc<Subscription>) -> bool {
        if !self.policy.enabled {
            return false;
        }
        // One recovery per subscription at a time
        if subscription.recovering.swap(true, Ordering::SeqCst) {
            return false;
        }

        let round = subscription.recoveries.fetch_add(1, Ordering::SeqCst) + 1;
        crate::log_event!(
            "recovery",
            "scheduled",
            "subscription {} ({}), round {round}",
            subscription.id,
            subscription.root.display()
        );
        self.runtime.spawn(recovery::recover(
            Arc::clone(subscription),
            Arc::clone(self),
        ));
        true
    }
}

/// Owns every subscription for the life of the process.
pub struct WatchSupervisor {
    shared: Arc<Shared>,
    subscriptions: Vec<Arc<Subscription>>,
}

impl WatchSupervisor {
    /// Create a supervisor. `runtime` hosts recovery tasks.
    pub fn new(dispatcher: Dispatcher, policy: RecoveryPolicy, runtime: Handle) -> Self {
        Self {
            shared: Arc::new(Shared {
                dispatcher,
                policy,
                runtime,
            }),
            subscriptions: Vec::new(),
        }
    }

    pub fn policy(&self) -> &RecoveryPolicy {
        &self.shared.policy
    }

    /// Start watching `target` recursively.
    ///
    /// On failure the error is logged and returned, and no subscription is
    /// kept for the target. Other targets are unaffected.
    pub fn register(&mut self, target: WatchTarget) -> Result<SubscriptionId, WatchError> {
        crate::log_event!(
            "watcher",
            "watching",
            "{} {}",
            target.path.display(),
            target.filter
        );

        match self.try_register(target) {
            Ok(id) => Ok(id),
            Err(e) => {
                tracing::error!("[watcher] {e}");
                Err(e)
            }
        }
    }

    fn try_register(&mut self, target: WatchTarget) -> Result<SubscriptionId, WatchError> {
        let filter = target.file_filter()?;
        crate::debug_event!("watcher", "filter", "{} pattern(s)", filter.pattern_count());
        let root = resolve_root(&target.path).map_err(|e| WatchError::RegistrationFailed {
            path: target.path.clone(),
            reason: e.to_string(),
        })?;

        let id = self.subscriptions.len();
        let subscription = Arc::new(Subscription::new(id, target, root, filter));
        self.shared.enable(&subscription)?;

        self.subscriptions.push(subscription);
        Ok(id)
    }

    /// Register every target, returning how many became active.
    pub fn register_all(&mut self, targets: impl IntoIterator<Item = WatchTarget>) -> usize {
        targets
            .into_iter()
            .filter_map(|target| self.register(target).ok())
            .count()
    }

    fn subscription(&self, id: SubscriptionId) -> Result<&Arc<Subscription>, WatchError> {
        self.subscriptions
            .get(id)
            .ok_or(WatchError::UnknownSubscription { id })
    }

    /// Stop raising events for a subscription.
    pub fn disable(&self, id: SubscriptionId) -> Result<(), WatchError> {
        let subscription = self.subscription(id)?;
        subscription.disable();
        crate::log_event!("watcher", "disabled", "{}", subscription.root.display());
        Ok(())
    }

    /// Re-establish the native watch for a subscription.
    pub fn enable(&self, id: SubscriptionId) -> Result<(), WatchError> {
        let subscription = self.subscription(id)?;
        subscription.disable();
        self.shared.enable(subscription)?;
        crate::log_event!("watcher", "enabled", "{}", subscription.root.display());
        Ok(())
    }

    /// Run the bounded recovery loop for a subscription now, regardless of
    /// whether the policy schedules recovery automatically.
    pub async fn recover(&self, id: SubscriptionId) -> Result<(), WatchError> {
        let subscription = Arc::clone(self.subscription(id)?);
        subscription.recovering.store(true, Ordering::SeqCst);
        recovery::recover(subscription, Arc::clone(&self.shared)).await
    }

    pub fn state(&self, id: SubscriptionId) -> Option<SubscriptionState> {
        self.subscriptions.get(id).map(|s| s.state())
    }

    /// The target a subscription was registered with.
    pub fn target(&self, id: SubscriptionId) -> Option<&WatchTarget> {
        self.subscriptions.get(id).map(|s| &s.target)
    }

    /// The absolute directory a subscription watches.
    pub fn root(&self, id: SubscriptionId) -> Option<&Path> {
        self.subscriptions.get(id).map(|s| s.root())
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.subscriptions
            .iter()
            .filter(|s| s.state() == SubscriptionState::Active)
            .count()
    }
}

/// Absolute path of a watch root, following symlinks where the platform
/// reports events under the resolved path.
fn resolve_root(path: &Path) -> io::Result<PathBuf> {
    #[cfg(windows)]
    {
        std::fs::metadata(path)?;
        std::path::absolute(path)
    }
    #[cfg(not(windows))]
    {
        path.canonicalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::watcher::dispatcher::tests::RecordingLauncher;
    use notify::event::{CreateKind, Flag, ModifyKind, RemoveKind, RenameMode};
    use std::time::Duration;
    use tempfile::TempDir;

    fn supervisor(policy: RecoveryPolicy) -> (Arc<RecordingLauncher>, WatchSupervisor) {
        let launcher = Arc::new(RecordingLauncher::default());
        let dispatcher = Dispatcher::new(launcher.clone());
        (launcher, WatchSupervisor::new(dispatcher, policy, Handle::current()))
    }

    fn created(path: &Path) -> notify::Event {
        notify::Event::new(EventKind::Create(CreateKind::File)).add_path(path.to_path_buf())
    }

    fn inject(
        supervisor: &WatchSupervisor,
        id: SubscriptionId,
        event: &notify::Event,
    ) -> Vec<DispatchOutcome> {
        supervisor.subscriptions[id].handle_event(event, &supervisor.shared)
    }

    #[tokio::test]
    async fn test_register_existing_directory() {
        let dir = TempDir::new().unwrap();
        let (_launcher, mut supervisor) = supervisor(RecoveryPolicy::default());

        let id = supervisor
            .register(WatchTarget::new(dir.path(), "*.txt"))
            .unwrap();

        assert_eq!(supervisor.state(id), Some(SubscriptionState::Active));
        assert_eq!(supervisor.root(id), Some(dir.path().canonicalize().unwrap().as_path()));
        assert_eq!(supervisor.active_count(), 1);
    }

    #[tokio::test]
    async fn test_registration_failure_is_isolated() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");
        let (_launcher, mut supervisor) = supervisor(RecoveryPolicy::default());

        let active = supervisor.register_all(vec![
            WatchTarget::new(&missing, "*"),
            WatchTarget::new(dir.path(), "*"),
        ]);

        assert_eq!(active, 1);
        assert_eq!(supervisor.len(), 1);
        assert_eq!(supervisor.active_count(), 1);
    }

    #[tokio::test]
    async fn test_file_path_is_rejected() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("plain.txt");
        std::fs::write(&file, "x").unwrap();
        let (_launcher, mut supervisor) = supervisor(RecoveryPolicy::default());

        let err = supervisor.register(WatchTarget::new(&file, "*")).unwrap_err();
        assert!(matches!(err, WatchError::RegistrationFailed { .. }));
        assert!(supervisor.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_filter_is_a_registration_failure() {
        let dir = TempDir::new().unwrap();
        let (_launcher, mut supervisor) = supervisor(RecoveryPolicy::default());

        let err = supervisor.register(WatchTarget::new(dir.path(), "[")).unwrap_err();
        assert!(matches!(err, WatchError::InvalidFilter { .. }));
    }

    #[tokio::test]
    async fn test_filter_is_enforced_before_dispatch() {
        let dir = TempDir::new().unwrap();
        let (launcher, mut supervisor) = supervisor(RecoveryPolicy::default());
        let id = supervisor
            .register(WatchTarget::new(dir.path(), "*.txt|*.log").on_created("echo %1"))
            .unwrap();
        let root = supervisor.root(id).unwrap().to_path_buf();

        for name in ["a.txt", "a.log", "a.csv"] {
            inject(&supervisor, id, &created(&root.join(name)));
        }

        let commands = launcher.commands();
        assert_eq!(commands.len(), 2);
        assert!(commands[0].ends_with("a.txt\""));
        assert!(commands[1].ends_with("a.log\""));
    }

    #[tokio::test]
    async fn test_disabled_subscription_ignores_events() {
        let dir = TempDir::new().unwrap();
        let (launcher, mut supervisor) = supervisor(RecoveryPolicy::default());
        let id = supervisor
            .register(WatchTarget::new(dir.path(), "*").on_created("echo %1"))
            .unwrap();
        let root = supervisor.root(id).unwrap().to_path_buf();

        supervisor.disable(id).unwrap();
        assert_eq!(supervisor.state(id), Some(SubscriptionState::Disabled));
        assert!(inject(&supervisor, id, &created(&root.join("a"))).is_empty());

        supervisor.enable(id).unwrap();
        assert_eq!(supervisor.state(id), Some(SubscriptionState::Active));
        assert_eq!(inject(&supervisor, id, &created(&root.join("a"))).len(), 1);
        assert_eq!(launcher.commands().len(), 1);
    }

    #[tokio::test]
    async fn test_overflow_is_logged_not_dispatched() {
        let dir = TempDir::new().unwrap();
        let (launcher, mut supervisor) = supervisor(RecoveryPolicy::default().enabled());
        let id = supervisor
            .register(WatchTarget::new(dir.path(), "*").on_created("echo %1"))
            .unwrap();
        let root = supervisor.root(id).unwrap().to_path_buf();

        let overflow = created(&root.join("a")).set_flag(Flag::Rescan);
        assert!(inject(&supervisor, id, &overflow).is_empty());

        assert!(launcher.commands().is_empty());
        // Overflow never triggers recovery
        assert_eq!(supervisor.state(id), Some(SubscriptionState::Active));
    }

    #[tokio::test]
    async fn test_root_removal_without_recovery_keeps_state() {
        let dir = TempDir::new().unwrap();
        let (_launcher, mut supervisor) = supervisor(RecoveryPolicy::default());
        let id = supervisor.register(WatchTarget::new(dir.path(), "*")).unwrap();
        let root = supervisor.root(id).unwrap().to_path_buf();

        let removed = notify::Event::new(EventKind::Remove(RemoveKind::Folder)).add_path(root);
        assert!(inject(&supervisor, id, &removed).is_empty());

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(supervisor.state(id), Some(SubscriptionState::Active));
    }

    #[tokio::test]
    async fn test_recovery_exhausts_budget_and_stays_disabled() {
        let dir = TempDir::new().unwrap();
        let watched = dir.path().join("watched");
        std::fs::create_dir(&watched).unwrap();

        let policy = RecoveryPolicy {
            enabled: false,
            max_attempts: 3,
            retry_interval: Duration::from_millis(10),
        };
        let (_launcher, mut supervisor) = supervisor(policy);
        let id = supervisor.register(WatchTarget::new(&watched, "*")).unwrap();

        std::fs::remove_dir(&watched).unwrap();

        let err = supervisor.recover(id).await.unwrap_err();
        assert!(matches!(err, WatchError::RecoveryExhausted { attempts: 3, .. }));
        assert_eq!(supervisor.state(id), Some(SubscriptionState::Disabled));
    }

    #[tokio::test]
    async fn test_recovery_reenables_when_directory_returns() {
        let dir = TempDir::new().unwrap();
        let watched = dir.path().join("watched");
        std::fs::create_dir(&watched).unwrap();

        let policy = RecoveryPolicy {
            enabled: false,
            max_attempts: 50,
            retry_interval: Duration::from_millis(20),
        };
        let (_launcher, mut supervisor) = supervisor(policy);
        let id = supervisor.register(WatchTarget::new(&watched, "*")).unwrap();

        std::fs::remove_dir(&watched).unwrap();

        let restore = {
            let watched = watched.clone();
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(100)).await;
                std::fs::create_dir(&watched).unwrap();
            })
        };

        supervisor.recover(id).await.unwrap();
        restore.await.unwrap();
        assert_eq!(supervisor.state(id), Some(SubscriptionState::Active));
    }

    #[tokio::test]
    async fn test_access_lost_schedules_one_recovery() {
        let dir = TempDir::new().unwrap();
        let watched = dir.path().join("watched");
        std::fs::create_dir(&watched).unwrap();

        let policy = RecoveryPolicy {
            enabled: true,
            max_attempts: 3,
            retry_interval: Duration::from_millis(10),
        };
        let (_launcher, mut supervisor) = supervisor(policy);
        let id = supervisor.register(WatchTarget::new(&watched, "*")).unwrap();
        let root = supervisor.root(id).unwrap().to_path_buf();

        std::fs::remove_dir(&watched).unwrap();
        let removed = notify::Event::new(EventKind::Remove(RemoveKind::Folder)).add_path(root);
        inject(&supervisor, id, &removed);
        inject(&supervisor, id, &removed);

        let subscription = Arc::clone(&supervisor.subscriptions[id]);
        assert!(subscription.recovering.load(Ordering::SeqCst));

        for _ in 0..100 {
            if !subscription.recovering.load(Ordering::SeqCst) {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }

        assert!(!subscription.recovering.load(Ordering::SeqCst));
        assert_eq!(subscription.recoveries.load(Ordering::SeqCst), 1);
        assert_eq!(supervisor.state(id), Some(SubscriptionState::Disabled));
    }

    #[tokio::test]
    async fn test_recovery_is_not_scheduled_twice() {
        let dir = TempDir::new().unwrap();
        let (_launcher, mut supervisor) = supervisor(RecoveryPolicy::default().enabled());
        let id = supervisor.register(WatchTarget::new(dir.path(), "*")).unwrap();
        let subscription = Arc::clone(&supervisor.subscriptions[id]);

        assert!(supervisor.shared.schedule_recovery(&subscription));
        assert!(!supervisor.shared.schedule_recovery(&subscription));
        assert_eq!(subscription.recoveries.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_recovery_off_schedules_nothing() {
        let dir = TempDir::new().unwrap();
        let (_launcher, mut supervisor) = supervisor(RecoveryPolicy::default());
        let id = supervisor.register(WatchTarget::new(dir.path(), "*")).unwrap();
        let subscription = Arc::clone(&supervisor.subscriptions[id]);

        assert!(!supervisor.shared.schedule_recovery(&subscription));
        assert_eq!(subscription.recoveries.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unmatched_move_is_dispatched_as_deleted() {
        let dir = TempDir::new().unwrap();
        let (launcher, mut supervisor) = supervisor(RecoveryPolicy::default());
        let id = supervisor
            .register(WatchTarget::new(dir.path(), "*.txt").on_deleted("gone %1"))
            .unwrap();
        let root = supervisor.root(id).unwrap().to_path_buf();
        let file = root.join("a.txt");

        let from = notify::Event::new(EventKind::Modify(ModifyKind::Name(RenameMode::From)))
            .add_path(file.clone())
            .set_tracker(11);
        assert!(inject(&supervisor, id, &from).is_empty());
        assert!(launcher.commands().is_empty());

        tokio::time::sleep(MOVE_OUT_DELAY * 3).await;

        assert_eq!(
            launcher.commands(),
            vec![format!("gone \"{}\"", file.to_string_lossy()).replace('\\', "/")]
        );
    }

    #[tokio::test]
    async fn test_unknown_subscription() {
        let (_launcher, supervisor) = supervisor(RecoveryPolicy::default());
        assert!(matches!(
            supervisor.disable(7),
            Err(WatchError::UnknownSubscription { id: 7 })
        ));
        assert_eq!(supervisor.state(7), None);
    }

    #[test]
    fn test_classify_error() {
        let limit = notify::Error::new(notify::ErrorKind::MaxFilesWatch);
        assert_eq!(classify_error(&limit), ErrorClass::BufferOverflow);

        let gone = notify::Error::path_not_found();
        assert_eq!(classify_error(&gone), ErrorClass::AccessLost);
    }
}
