//! Directory watching and event-to-command dispatch.
//!
//! # Architecture
//!
//! ```text
//! WatchSupervisor
//!   - one Subscription per WatchTarget
//!   - each Subscription owns a notify::RecommendedWatcher
//!         |
//!   backend thread: EventNormalizer -> FileFilter
//!         |
//!     Dispatcher -> CommandLauncher::launch
//! ```
//!
//! Events are dispatched synchronously on the thread the backend uses for
//! the subscription. Nothing is queued, debounced or rate limited: a burst
//! of changes produces a burst of processes. The one exception is the source
//! half of a rename, held for at most [`MOVE_OUT_DELAY`] while its
//! destination is awaited. Ordering across subscriptions is not defined.

mod dispatcher;
mod error;
mod event;
mod recovery;
mod supervisor;
mod target;

pub use dispatcher::{DispatchOutcome, Dispatcher};
pub use error::WatchError;
pub use event::{EventNormalizer, FsEvent, FsEventKind};
pub use recovery::RecoveryPolicy;
pub use supervisor::{
    ErrorClass, MOVE_OUT_DELAY, SubscriptionId, SubscriptionState, WatchSupervisor, classify_error,
};
pub use target::{FILTER_SEPARATOR, FileFilter, WatchTarget};
