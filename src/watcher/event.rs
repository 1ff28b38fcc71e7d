//! Normalized file system events.
//!
//! `notify` reports many fine-grained kinds; the dispatcher only needs the
//! four that map to command templates.

use std::fmt;
use std::path::PathBuf;

use notify::event::{EventKind, ModifyKind, RenameMode};

/// The change classes a watch target can react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FsEventKind {
    Created,
    Changed,
    Deleted,
    Renamed,
}

impl fmt::Display for FsEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FsEventKind::Created => "created",
            FsEventKind::Changed => "changed",
            FsEventKind::Deleted => "deleted",
            FsEventKind::Renamed => "renamed",
        };
        f.write_str(name)
    }
}

/// A single change to a single path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsEvent {
    pub kind: FsEventKind,
    pub path: PathBuf,
    /// Previous path for renames, when the backend pairs both sides.
    pub old_path: Option<PathBuf>,
}

impl FsEvent {
    pub fn new(kind: FsEventKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
            old_path: None,
        }
    }

    pub fn renamed(old_path: impl Into<PathBuf>, path: impl Into<PathBuf>) -> Self {
        Self {
            kind: FsEventKind::Renamed,
            path: path.into(),
            old_path: Some(old_path.into()),
        }
    }

    /// Normalize a `notify` event without rename pairing. Half renames are
    /// reported as renames of the single path they carry. Unpaired renames
    /// that name a path no longer on disk are dropped.
    pub fn from_notify(event: &notify::Event) -> Vec<FsEvent> {
        let kind = match event.kind {
            EventKind::Create(_) => FsEventKind::Created,
            EventKind::Remove(_) => FsEventKind::Deleted,
            EventKind::Modify(ModifyKind::Name(RenameMode::Both)) => {
                if let [from, to, ..] = event.paths.as_slice() {
                    return vec![FsEvent::renamed(from.clone(), to.clone())];
                }
                FsEventKind::Renamed
            }
            EventKind::Modify(ModifyKind::Name(RenameMode::Any | RenameMode::Other)) => {
                // One event per side; the side that is gone is the old name
                return event
                    .paths
                    .iter()
                    .filter(|path| path.exists())
                    .map(|path| FsEvent::new(FsEventKind::Renamed, path.clone()))
                    .collect();
            }
            EventKind::Modify(ModifyKind::Name(_)) => FsEventKind::Renamed,
            EventKind::Modify(_) => FsEventKind::Changed,
            // Opening or reading a file is not a change
            EventKind::Access(_) | EventKind::Any | EventKind::Other => return Vec::new(),
        };

        event
            .paths
            .iter()
            .map(|path| FsEvent::new(kind, path.clone()))
            .collect()
    }
}

/// Source side of a rename waiting for its destination.
#[derive(Debug)]
struct PendingMove {
    generation: u64,
    tracker: Option<usize>,
    paths: Vec<PathBuf>,
}

/// Stateful normalizer that pairs the two halves of a rename.
///
/// Backends report renames differently: inotify sends `From`, `To` and then
/// `Both` sharing a tracker, Windows sends `From` then `To` without one,
/// FSEvents sends unpaired `Any`. A `From` is held until the next event: a
/// matching `To` turns it into one `Renamed`, anything else releases it as
/// `Deleted` (the file left the watched tree). A `To` with nothing pending
/// is a file moved in and reported as `Created`.
///
/// When no further event arrives the owner releases the held `From` with
/// [`EventNormalizer::release_stale`] after a short delay.
#[derive(Debug, Default)]
pub struct EventNormalizer {
    pending: Option<PendingMove>,
    /// Tracker of the last pair already reported, so a trailing `Both` is skipped.
    paired: Option<usize>,
    /// Bumped for every held `From`.
    generation: u64,
}

impl EventNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generation of the rename source waiting for its destination, if any.
    pub fn pending_generation(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.generation)
    }

    /// Release the held rename source as `Deleted`, but only if it is still
    /// the one identified by `generation`.
    pub fn release_stale(&mut self, generation: u64) -> Vec<FsEvent> {
        if self.pending_generation() == Some(generation) {
            self.release()
        } else {
            Vec::new()
        }
    }

    pub fn accept(&mut self, event: &notify::Event) -> Vec<FsEvent> {
        let tracker = event.tracker();

        match event.kind {
            EventKind::Modify(ModifyKind::Name(RenameMode::From)) => {
                let out = self.release();
                self.paired = None;
                if event.paths.is_empty() {
                    return out;
                }
                self.generation = self.generation.wrapping_add(1);
                self.pending = Some(PendingMove {
                    generation: self.generation,
                    tracker,
                    paths: event.paths.clone(),
                });
                out
            }
            EventKind::Modify(ModifyKind::Name(RenameMode::To)) => {
                match self.pending.take() {
                    Some(from) if from.tracker == tracker => {
                        self.paired = tracker;
                        from.paths
                            .into_iter()
                            .zip(event.paths.iter().cloned())
                            .map(|(old, new)| FsEvent::renamed(old, new))
                            .collect()
                    }
                    other => {
                        self.pending = other;
                        let mut out = self.release();
                        out.extend(
                            event
                                .paths
                                .iter()
                                .map(|p| FsEvent::new(FsEventKind::Created, p.clone())),
                        );
                        out
                    }
                }
            }
            EventKind::Modify(ModifyKind::Name(RenameMode::Both))
                if tracker.is_some() && self.paired == tracker =>
            {
                self.paired = None;
                Vec::new()
            }
            _ => {
                let mut out = self.release();
                self.paired = None;
                out.extend(FsEvent::from_notify(event));
                out
            }
        }
    }

    /// Report a held rename source as a deletion.
    fn release(&mut self) -> Vec<FsEvent> {
        self.pending
            .take()
            .map(|from| {
                from.paths
                    .into_iter()
                    .map(|p| FsEvent::new(FsEventKind::Deleted, p))
                    .collect()
            })
            .unwrap_or_default()
    }
}
