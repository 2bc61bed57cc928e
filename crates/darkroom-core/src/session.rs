//! A single editing session: live state, history, and render bookkeeping.
//!
//! `EditSession` is single-writer. Renders may be computed elsewhere (worker
//! thread, task queue); the generation token lets the caller discard results
//! that were started against a state that has since changed, so only the
//! latest edit ever reaches the screen.

use crate::error::ProcessError;
use crate::history::{HistoryEntry, HistoryManager};
use crate::pipeline::{apply_adjustments, apply_adjustments_or_original};
use crate::preset::FilterPreset;
use crate::raster::RasterImage;
use crate::AdjustmentState;

/// Opaque marker for an in-flight render. Compare with
/// [`EditSession::is_current`] before publishing the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderToken(u64);

/// State, history, and render-generation tracking for one open image.
#[derive(Debug, Clone)]
pub struct EditSession {
    state: AdjustmentState,
    history: HistoryManager,
    generation: u64,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditSession {
    /// Start a session at the neutral state with an initial history entry.
    pub fn new() -> Self {
        Self {
            state: AdjustmentState::default(),
            history: HistoryManager::with_initial(),
            generation: 0,
        }
    }

    /// The live adjustment state.
    pub fn state(&self) -> &AdjustmentState {
        &self.state
    }

    /// Read access to the history stack.
    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn set_brightness(&mut self, value: f32) -> Result<(), ProcessError> {
        let mut state = self.state.clone();
        state.brightness = value;
        self.commit("brightness", value, state)
    }

    pub fn set_exposure(&mut self, value: f32) -> Result<(), ProcessError> {
        let mut state = self.state.clone();
        state.exposure = value;
        self.commit("exposure", value, state)
    }

    pub fn set_contrast(&mut self, value: f32) -> Result<(), ProcessError> {
        let mut state = self.state.clone();
        state.contrast = value;
        self.commit("contrast", value, state)
    }

    pub fn set_saturation(&mut self, value: f32) -> Result<(), ProcessError> {
        let mut state = self.state.clone();
        state.saturation = value;
        self.commit("saturation", value, state)
    }

    pub fn set_highlight(&mut self, value: f32) -> Result<(), ProcessError> {
        let mut state = self.state.clone();
        state.highlight = value;
        self.commit("highlight", value, state)
    }

    pub fn set_shadow(&mut self, value: f32) -> Result<(), ProcessError> {
        let mut state = self.state.clone();
        state.shadow = value;
        self.commit("shadow", value, state)
    }

    pub fn set_temperature(&mut self, value: f32) -> Result<(), ProcessError> {
        let mut state = self.state.clone();
        state.temperature = value;
        self.commit("temperature", value, state)
    }

    pub fn set_tint(&mut self, value: f32) -> Result<(), ProcessError> {
        let mut state = self.state.clone();
        state.tint = value;
        self.commit("tint", value, state)
    }

    pub fn set_natural_saturation(&mut self, value: f32) -> Result<(), ProcessError> {
        let mut state = self.state.clone();
        state.natural_saturation = value;
        self.commit("natural_saturation", value, state)
    }

    /// Select a filter preset, keeping the manual knobs as they are.
    pub fn select_preset(&mut self, preset: FilterPreset) {
        let mut state = self.state.clone();
        state.preset = Some(preset);
        self.history.add(HistoryEntry::preset_applied(state.clone()));
        self.state = state;
        self.generation += 1;
    }

    /// Remove the active preset.
    pub fn clear_preset(&mut self) {
        if self.state.preset.is_none() {
            return;
        }
        let mut state = self.state.clone();
        state.preset = None;
        self.history.add(HistoryEntry::preset_applied(state.clone()));
        self.state = state;
        self.generation += 1;
    }

    /// Return every knob to neutral and drop the preset.
    pub fn reset(&mut self) {
        self.state = AdjustmentState::default();
        self.history.add(HistoryEntry::reset());
        self.generation += 1;
    }

    /// Step the state back one history entry. Returns false at the bottom.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(entry) => {
                self.state = entry.state.clone();
                self.generation += 1;
                true
            }
            None => false,
        }
    }

    /// Step the state forward one history entry. Returns false at the top.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(entry) => {
                self.state = entry.state.clone();
                self.generation += 1;
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Token for a render about to start against the current state.
    pub fn begin_render(&self) -> RenderToken {
        RenderToken(self.generation)
    }

    /// Whether a render started at `token` still reflects the live state.
    pub fn is_current(&self, token: RenderToken) -> bool {
        token.0 == self.generation
    }

    /// Render the live state against a source image.
    pub fn render(&self, image: &RasterImage) -> Result<RasterImage, ProcessError> {
        apply_adjustments(image, &self.state)
    }

    /// Degrading render for previews; see
    /// [`apply_adjustments_or_original`](crate::pipeline::apply_adjustments_or_original).
    pub fn render_or_original(&self, image: &RasterImage) -> RasterImage {
        apply_adjustments_or_original(image, &self.state)
    }

    /// Validate, snapshot into history, and swap in the new state.
    fn commit(
        &mut self,
        name: &'static str,
        value: f32,
        state: AdjustmentState,
    ) -> Result<(), ProcessError> {
        state.validate()?;
        self.history.add(HistoryEntry::adjustment(name, value, state.clone()));
        self.state = state;
        self.generation += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_neutral() {
        let session = EditSession::new();
        assert!(session.state().is_default());
        assert!(!session.can_undo());
        assert!(!session.can_redo());
    }

    #[test]
    fn test_set_and_undo_restores_previous() {
        let mut session = EditSession::new();
        session.set_brightness(0.3).unwrap();
        session.set_contrast(1.5).unwrap();

        assert!(session.undo());
        assert_eq!(session.state().brightness, 0.3);
        assert_eq!(session.state().contrast, 1.0);

        assert!(session.redo());
        assert_eq!(session.state().contrast, 1.5);
    }

    #[test]
    fn test_invalid_value_rejected_without_history_entry() {
        let mut session = EditSession::new();
        let before = session.history().entries().len();
        assert!(session.set_brightness(3.0).is_err());
        assert_eq!(session.history().entries().len(), before);
        assert!(session.state().is_default());
    }

    #[test]
    fn test_mutation_invalidates_render_token() {
        let mut session = EditSession::new();
        let token = session.begin_render();
        assert!(session.is_current(token));

        session.set_exposure(1.0).unwrap();
        assert!(!session.is_current(token), "stale token must be rejected");

        let fresh = session.begin_render();
        assert!(session.is_current(fresh));
    }

    #[test]
    fn test_undo_invalidates_render_token() {
        let mut session = EditSession::new();
        session.set_tint(0.5).unwrap();
        let token = session.begin_render();
        session.undo();
        assert!(!session.is_current(token));
    }

    #[test]
    fn test_failed_set_keeps_token_current() {
        let mut session = EditSession::new();
        let token = session.begin_render();
        let _ = session.set_shadow(9.0);
        assert!(session.is_current(token));
    }

    #[test]
    fn test_preset_selection_recorded() {
        let mut session = EditSession::new();
        session.select_preset(FilterPreset::mono());
        assert_eq!(
            session.state().preset.as_ref().map(|p| p.name.as_str()),
            Some("mono")
        );
        assert!(session.can_undo());

        session.undo();
        assert!(session.state().preset.is_none());
    }

    #[test]
    fn test_clear_preset_noop_when_none() {
        let mut session = EditSession::new();
        let entries = session.history().entries().len();
        session.clear_preset();
        assert_eq!(session.history().entries().len(), entries);
    }

    #[test]
    fn test_reset_returns_to_defaults() {
        let mut session = EditSession::new();
        session.set_brightness(0.5).unwrap();
        session.select_preset(FilterPreset::vivid());
        session.reset();

        assert!(session.state().is_default());
        // Undo after reset goes back to the pre-reset state.
        assert!(session.undo());
        assert_eq!(session.state().brightness, 0.5);
    }

    #[test]
    fn test_render_matches_pipeline() {
        let img = RasterImage::filled(4, 4, [100, 100, 100, 255]).unwrap();
        let mut session = EditSession::new();
        session.set_brightness(0.2).unwrap();

        let via_session = session.render(&img).unwrap();
        let direct = apply_adjustments(&img, session.state()).unwrap();
        assert_eq!(via_session, direct);
    }

    #[test]
    fn test_render_or_original_never_fails() {
        let img = RasterImage::filled(4, 4, [10, 20, 30, 255]).unwrap();
        let session = EditSession::new();
        assert_eq!(session.render_or_original(&img), img);
    }
}
