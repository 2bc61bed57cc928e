//! Bounded undo/redo history of editing state snapshots.
//!
//! Entries hold full [`AdjustmentState`] snapshots, not deltas, so undo and
//! redo are plain index moves. The stack is capped at [`MAX_HISTORY`]
//! entries; adding beyond the cap evicts the oldest entry.

use serde::{Deserialize, Serialize};

use crate::raster::RasterImage;
use crate::AdjustmentState;

/// Maximum number of retained history entries.
pub const MAX_HISTORY: usize = 20;

/// What kind of edit produced a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditAction {
    /// The untouched starting state.
    Initial,
    /// A filter preset was selected.
    PresetApplied,
    /// A manual adjustment slider was changed.
    AdjustmentMade,
    /// Everything was reset to defaults.
    Reset,
}

/// One snapshot in the history stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub action: EditAction,
    /// Human-readable description for history UI lists.
    pub description: String,
    /// The complete editing state after the action.
    pub state: AdjustmentState,
    /// Wall-clock creation time in milliseconds since the Unix epoch.
    pub timestamp_ms: u64,
    /// Optional small preview of the result at this point.
    #[serde(skip)]
    pub thumbnail: Option<RasterImage>,
}

/// Milliseconds since the Unix epoch; 0 if the clock reads before it.
fn now_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

impl HistoryEntry {
    /// Entry for the untouched starting state.
    pub fn initial() -> Self {
        Self {
            action: EditAction::Initial,
            description: "original image".to_string(),
            state: AdjustmentState::default(),
            timestamp_ms: now_millis(),
            thumbnail: None,
        }
    }

    /// Entry recording a preset selection.
    pub fn preset_applied(state: AdjustmentState) -> Self {
        let name = state
            .preset
            .as_ref()
            .map(|p| p.name.clone())
            .unwrap_or_else(|| "original".to_string());
        Self {
            action: EditAction::PresetApplied,
            description: format!("applied preset: {name}"),
            state,
            timestamp_ms: now_millis(),
            thumbnail: None,
        }
    }

    /// Entry recording a manual slider change.
    pub fn adjustment(name: &str, value: f32, state: AdjustmentState) -> Self {
        Self {
            action: EditAction::AdjustmentMade,
            description: format!("adjusted {name}: {value}"),
            state,
            timestamp_ms: now_millis(),
            thumbnail: None,
        }
    }

    /// Entry recording a reset to defaults.
    pub fn reset() -> Self {
        Self {
            action: EditAction::Reset,
            description: "reset".to_string(),
            state: AdjustmentState::default(),
            timestamp_ms: now_millis(),
            thumbnail: None,
        }
    }

    /// Attach a preview thumbnail.
    pub fn with_thumbnail(mut self, thumbnail: RasterImage) -> Self {
        self.thumbnail = Some(thumbnail);
        self
    }
}

/// Summary of the stack for UI state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryStats {
    pub total_count: usize,
    pub current_index: Option<usize>,
    pub can_undo: bool,
    pub can_redo: bool,
}

/// The undo/redo stack.
///
/// `current` points at the entry whose state is live. Adding while not at
/// the top discards the redo branch first.
#[derive(Debug, Clone, Default)]
pub struct HistoryManager {
    entries: Vec<HistoryEntry>,
    current: Option<usize>,
}

impl HistoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// A manager seeded with the initial snapshot.
    pub fn with_initial() -> Self {
        let mut manager = Self::new();
        manager.add(HistoryEntry::initial());
        manager
    }

    /// Push a new entry, discarding any redo branch and evicting the oldest
    /// entry once the cap is reached.
    pub fn add(&mut self, entry: HistoryEntry) {
        if let Some(current) = self.current {
            self.entries.truncate(current + 1);
        }

        self.entries.push(entry);
        if self.entries.len() > MAX_HISTORY {
            self.entries.remove(0);
        }
        self.current = Some(self.entries.len() - 1);
    }

    /// Step back one entry, returning the now-live snapshot.
    pub fn undo(&mut self) -> Option<&HistoryEntry> {
        let current = self.current?;
        if current == 0 {
            return None;
        }
        self.current = Some(current - 1);
        self.entries.get(current - 1)
    }

    /// Step forward one entry, returning the now-live snapshot.
    pub fn redo(&mut self) -> Option<&HistoryEntry> {
        let current = self.current?;
        if current + 1 >= self.entries.len() {
            return None;
        }
        self.current = Some(current + 1);
        self.entries.get(current + 1)
    }

    /// The live entry, if any.
    pub fn current(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.current?)
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// All retained entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn can_undo(&self) -> bool {
        matches!(self.current, Some(i) if i > 0)
    }

    pub fn can_redo(&self) -> bool {
        matches!(self.current, Some(i) if i + 1 < self.entries.len())
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.current = None;
    }

    pub fn stats(&self) -> HistoryStats {
        HistoryStats {
            total_count: self.entries.len(),
            current_index: self.current,
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }
    }
}
