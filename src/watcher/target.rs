//! Watch targets: a directory, a file name filter and the command templates
//! to run for each kind of change.

use std::path::{Path, PathBuf};

use glob::Pattern;

use super::error::WatchError;
use super::event::FsEventKind;
use crate::launcher::template;

/// Separator between filter patterns.
pub const FILTER_SEPARATOR: char = '|';

/// One monitored directory and its event-to-command mapping.
///
/// Immutable once built; shared by the subscription and its callbacks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatchTarget {
    pub path: PathBuf,
    /// `|`-separated glob patterns matched against file names.
    pub filter: String,
    pub on_created: Option<String>,
    pub on_changed: Option<String>,
    pub on_deleted: Option<String>,
    pub on_renamed: Option<String>,
}

impl WatchTarget {
    /// Create a target with no commands configured.
    pub fn new(path: impl Into<PathBuf>, filter: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            filter: filter.into(),
            ..Self::default()
        }
    }

    pub fn on_created(mut self, template: impl Into<String>) -> Self {
        self.on_created = Some(template.into());
        self
    }

    pub fn on_changed(mut self, template: impl Into<String>) -> Self {
        self.on_changed = Some(template.into());
        self
    }

    pub fn on_deleted(mut self, template: impl Into<String>) -> Self {
        self.on_deleted = Some(template.into());
        self
    }

    pub fn on_renamed(mut self, template: impl Into<String>) -> Self {
        self.on_renamed = Some(template.into());
        self
    }

    /// The template configured for `kind`, if it is set and not blank.
    pub fn template_for(&self, kind: FsEventKind) -> Option<&str> {
        let template = match kind {
            FsEventKind::Created => self.on_created.as_deref(),
            FsEventKind::Changed => self.on_changed.as_deref(),
            FsEventKind::Deleted => self.on_deleted.as_deref(),
            FsEventKind::Renamed => self.on_renamed.as_deref(),
        };

        if template::is_blank(template) {
            None
        } else {
            template
        }
    }

    /// Compile this target's filter.
    pub fn file_filter(&self) -> Result<FileFilter, WatchError> {
        FileFilter::parse(&self.filter)
    }
}

/// Compiled file name filter. Patterns are OR-ed; no patterns means
/// every file passes.
#[derive(Debug, Clone, Default)]
pub struct FileFilter {
    patterns: Vec<Pattern>,
}

impl FileFilter {
    /// Parse a `|`-separated pattern list. Blank entries are skipped.
    pub fn parse(filter: &str) -> Result<Self, WatchError> {
        let patterns = filter
            .split(FILTER_SEPARATOR)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| {
                Pattern::new(p).map_err(|e| WatchError::InvalidFilter {
                    pattern: p.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    /// True if the filter accepts every file.
    pub fn matches_all(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Check the final component of `path` against the patterns.
    pub fn matches(&self, path: &Path) -> bool {
        if self.matches_all() {
            return true;
        }

        let Some(name) = path.file_name() else {
            return false;
        };
        let name = name.to_string_lossy();

        self.patterns.iter().any(|p| p.matches(&name))
    }
}
