//! The interactive session: one seed, its scale, offsets and history.
//!
//! All state lives in [`Session`] and changes only through
//! [`Session::handle`]. Each call returns the [`Effect`]s the caller should act
//! on (redraw, persist a palette, ...). Persistence is never performed here.

use chrono::Local;
use std::time::Duration;
use tracing::{debug, info};

use super::adjust::{apply_edit, AdjustmentEngine};
use super::debounce::Clock;
use super::history::{CommitState, HistoryManager};
use super::scale::{BaseScale, ScaleGenerator, ScaleSettings};
use crate::color_space::{ColorSpace, OkSpace};
use crate::constants::DEFAULT_DEBOUNCE_MS;
use crate::error::SessionError;
use crate::models::{Checkpoint, Color, Hsl, OffsetKind, Offsets, Oklch, SavedPalette};
use crate::services::naming::{ColorNamer, HueNamer};

/// Tunables of a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSettings {
    /// Lightness ramp shape
    pub scale: ScaleSettings,
    /// Clamp recomputed lightness and chroma into their canonical ranges
    pub clamp_recomputed: bool,
    /// Quiet period before a burst of edits becomes a checkpoint
    pub debounce: Duration,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            scale: ScaleSettings::default(),
            clamp_recomputed: false,
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }
}

/// Everything a user can ask a session to do.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Replace the seed with parsed color text.
    SetSeed(String),
    /// Replace the seed with OKLCH coordinates.
    SetSeedOklch {
        /// Lightness
        l: f64,
        /// Chroma
        c: f64,
        /// Hue in degrees
        h: f64,
    },
    /// Replace the seed with HSL coordinates (saturation and lightness in percent).
    SetSeedHsl {
        /// Hue in degrees
        h: f64,
        /// Saturation, 0..100
        s: f64,
        /// Lightness, 0..100
        l: f64,
    },
    /// Move one step's slider.
    SetSlider {
        /// Step index, 0..=10
        step: usize,
        /// Which slider
        kind: OffsetKind,
        /// New slider value
        value: f64,
    },
    /// Go back one checkpoint.
    Undo,
    /// Go forward one checkpoint.
    Redo,
    /// Zero all offsets.
    ResetAll,
    /// Zero one offset vector.
    ResetKind(OffsetKind),
    /// Snapshot the session as a palette. Without a name, one is derived from
    /// the seed color and the local time.
    SavePalette {
        /// Palette name
        name: Option<String>,
    },
    /// Restore a saved palette.
    LoadPalette(SavedPalette),
    /// Ask for a saved palette to be removed.
    DeletePalette(String),
    /// Let the debounce timer fire if due.
    Tick,
    /// Commit a pending checkpoint immediately.
    Flush,
}

/// Something the caller should react to after an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// The displayed colors changed.
    DisplayChanged,
    /// A new debounce window opened.
    CheckpointScheduled,
    /// A checkpoint was appended; the new cursor.
    CheckpointCommitted(usize),
    /// Undo or redo moved to this cursor.
    Restored(usize),
    /// Store this palette.
    PersistPalette(SavedPalette),
    /// Remove the palette with this id from storage.
    DeletePalette(String),
}

/// Session state owned by a single controller.
#[derive(Debug)]
pub struct Session<S: ColorSpace = OkSpace> {
    space: S,
    settings: SessionSettings,
    clock: Box<dyn Clock>,
    namer: Box<dyn ColorNamer>,
    seed: String,
    seed_color: Color,
    base: BaseScale,
    offsets: Offsets,
    displayed: Vec<Color>,
    history: HistoryManager,
}

impl<S: ColorSpace> Session<S> {
    /// Starts a session from seed color text.
    ///
    /// # Examples
    ///
    /// ```
    /// use tintscale::color_space::OkSpace;
    /// use tintscale::engine::{ManualClock, Session, SessionEvent, SessionSettings};
    /// use tintscale::models::OffsetKind;
    ///
    /// let clock = ManualClock::new();
    /// let mut session = Session::new(
    ///     OkSpace::new(),
    ///     SessionSettings::default(),
    ///     "#3b82f6",
    ///     Box::new(clock.clone()),
    /// )
    /// .unwrap();
    ///
    /// session
    ///     .handle(SessionEvent::SetSlider { step: 5, kind: OffsetKind::Hue, value: 10.0 })
    ///     .unwrap();
    /// assert!((session.offsets().hue[6] - 8.0).abs() < 1e-12);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Color` if the seed cannot be parsed.
    pub fn new(
        space: S,
        settings: SessionSettings,
        seed: &str,
        clock: Box<dyn Clock>,
    ) -> Result<Self, SessionError> {
        let seed_color = space.parse(seed)?;
        let base = ScaleGenerator::new(&space, settings.scale).generate_from(&seed_color)?;
        let displayed = base.colors().to_vec();
        let history = HistoryManager::new(
            Checkpoint::new(displayed.clone(), Offsets::zero()),
            settings.debounce,
        );

        Ok(Self {
            space,
            settings,
            clock,
            namer: Box::new(HueNamer),
            seed: seed.trim().to_string(),
            seed_color,
            base,
            offsets: Offsets::zero(),
            displayed,
            history,
        })
    }

    /// Replaces the color namer used for default palette names.
    #[must_use]
    pub fn with_namer(mut self, namer: Box<dyn ColorNamer>) -> Self {
        self.namer = namer;
        self
    }

    /// Applies one event.
    ///
    /// A due checkpoint is committed before the event itself is applied; that
    /// commit stands even if the event then fails. A failing event leaves the
    /// seed, scale, offsets, displayed colors and history untouched.
    ///
    /// # Errors
    ///
    /// Returns the error of the failing step: color parsing or conversion, an
    /// invalid step or slider value, or a palette that cannot be restored.
    pub fn handle(&mut self, event: SessionEvent) -> Result<Vec<Effect>, SessionError> {
        let mut effects = self.tick();

        match event {
            SessionEvent::SetSeed(text) => {
                let color = self.space.parse(&text)?;
                self.replace_seed(text.trim().to_string(), color, &mut effects)?;
            }
            SessionEvent::SetSeedOklch { l, c, h } => {
                let color = self.space.from_oklch(Oklch::new(l, c, h))?;
                let Oklch { l, c, h } = self.space.to_oklch(&color);
                self.replace_seed(format!("oklch({l} {c} {h})"), color, &mut effects)?;
            }
            SessionEvent::SetSeedHsl { h, s, l } => {
                let hsl = Hsl::new(h, s.clamp(0.0, 100.0), l.clamp(0.0, 100.0));
                self.space.from_hsl(hsl)?;
                // The seed color is whatever its text parses to
                let text = format!("hsl({} {}% {}%)", hsl.h, hsl.s, hsl.l);
                let color = self.space.parse(&text)?;
                self.replace_seed(text, color, &mut effects)?;
            }
            SessionEvent::SetSlider { step, kind, value } => {
                let offsets = apply_edit(&self.offsets, step, value, kind)?;
                self.apply_offsets(offsets, &mut effects)?;
            }
            SessionEvent::Undo => {
                self.flush_into(&mut effects);
                if let Some(checkpoint) = self.history.undo().cloned() {
                    self.restore(checkpoint, &mut effects);
                }
            }
            SessionEvent::Redo => {
                self.flush_into(&mut effects);
                if let Some(checkpoint) = self.history.redo().cloned() {
                    self.restore(checkpoint, &mut effects);
                }
            }
            SessionEvent::ResetAll => {
                self.apply_offsets(Offsets::zero(), &mut effects)?;
            }
            SessionEvent::ResetKind(kind) => {
                let mut offsets = self.offsets;
                offsets.reset(kind);
                self.apply_offsets(offsets, &mut effects)?;
            }
            SessionEvent::SavePalette { name } => {
                let palette = self.snapshot(name)?;
                info!(id = %palette.id, name = %palette.name, "palette saved");
                effects.push(Effect::PersistPalette(palette));
            }
            SessionEvent::LoadPalette(palette) => {
                self.load(&palette, &mut effects)?;
            }
            SessionEvent::DeletePalette(id) => {
                effects.push(Effect::DeletePalette(id));
            }
            SessionEvent::Tick => {}
            SessionEvent::Flush => self.flush_into(&mut effects),
        }

        Ok(effects)
    }

    /// Commits a due checkpoint.
    pub fn tick(&mut self) -> Vec<Effect> {
        if self.history.poll(self.clock.now()) {
            vec![Effect::CheckpointCommitted(self.history.cursor())]
        } else {
            Vec::new()
        }
    }

    fn flush_into(&mut self, effects: &mut Vec<Effect>) {
        if self.history.flush() {
            effects.push(Effect::CheckpointCommitted(self.history.cursor()));
        }
    }

    fn replace_seed(
        &mut self,
        seed: String,
        color: Color,
        effects: &mut Vec<Effect>,
    ) -> Result<(), SessionError> {
        let base = ScaleGenerator::new(&self.space, self.settings.scale).generate_from(&color)?;
        let displayed = base.colors().to_vec();

        debug!(seed = %seed, "seed replaced");
        self.history.reset(Checkpoint::new(displayed.clone(), Offsets::zero()));
        self.seed = seed;
        self.seed_color = color;
        self.base = base;
        self.offsets = Offsets::zero();
        self.displayed = displayed;
        effects.push(Effect::DisplayChanged);
        Ok(())
    }

    /// Recomputes with new offsets and schedules a checkpoint.
    ///
    /// Does nothing when the offsets are unchanged.
    fn apply_offsets(
        &mut self,
        offsets: Offsets,
        effects: &mut Vec<Effect>,
    ) -> Result<(), SessionError> {
        if offsets == self.offsets {
            return Ok(());
        }

        let displayed = self.engine().recompute(&self.base, &offsets)?;
        self.offsets = offsets;
        self.displayed = displayed;
        effects.push(Effect::DisplayChanged);

        let checkpoint = Checkpoint::new(self.displayed.clone(), self.offsets);
        if self.history.commit(checkpoint, self.clock.now()) == CommitState::Scheduled {
            effects.push(Effect::CheckpointScheduled);
        }
        Ok(())
    }

    fn restore(&mut self, checkpoint: Checkpoint, effects: &mut Vec<Effect>) {
        self.offsets = checkpoint.offsets;
        self.displayed = checkpoint.colors;
        effects.push(Effect::Restored(self.history.cursor()));
        effects.push(Effect::DisplayChanged);
    }

    fn snapshot(&self, name: Option<String>) -> Result<SavedPalette, SessionError> {
        let name = match name.filter(|n| !n.trim().is_empty()) {
            Some(name) => name.trim().to_string(),
            None => format!(
                "{} ({})",
                self.namer.name(self.space.to_oklch(&self.seed_color)),
                Local::now().format("%H:%M:%S")
            ),
        };

        SavedPalette::new(name, self.seed.clone(), self.displayed_hex(), self.offsets)
            .map_err(|e| SessionError::InvalidPalette(e.to_string()))
    }

    fn load(&mut self, palette: &SavedPalette, effects: &mut Vec<Effect>) -> Result<(), SessionError> {
        palette
            .validate()
            .map_err(|e| SessionError::InvalidPalette(e.to_string()))?;

        let color = self.space.parse(&palette.seed)?;
        let base = ScaleGenerator::new(&self.space, self.settings.scale).generate_from(&color)?;
        let displayed = self.engine().recompute(&base, &palette.offsets)?;

        debug!(id = %palette.id, "palette loaded");
        self.history.reset(Checkpoint::new(displayed.clone(), palette.offsets));
        self.seed = palette.seed.trim().to_string();
        self.seed_color = color;
        self.base = base;
        self.offsets = palette.offsets;
        self.displayed = displayed;
        effects.push(Effect::DisplayChanged);
        Ok(())
    }

    fn engine(&self) -> AdjustmentEngine<'_, S> {
        AdjustmentEngine::new(&self.space, self.settings.clamp_recomputed)
    }

    /// Seed color text as entered (or as formatted for picker input).
    #[must_use]
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// The parsed seed color.
    #[must_use]
    pub const fn seed_color(&self) -> &Color {
        &self.seed_color
    }

    /// The unadjusted scale of the current seed.
    #[must_use]
    pub const fn base(&self) -> &BaseScale {
        &self.base
    }

    /// Current offsets.
    #[must_use]
    pub const fn offsets(&self) -> &Offsets {
        &self.offsets
    }

    /// Currently displayed colors.
    #[must_use]
    pub fn displayed(&self) -> &[Color] {
        &self.displayed
    }

    /// Currently displayed colors as hex strings.
    #[must_use]
    pub fn displayed_hex(&self) -> Vec<String> {
        self.displayed.iter().map(|c| self.space.to_hex(c)).collect()
    }

    /// Undo/redo history.
    #[must_use]
    pub const fn history(&self) -> &HistoryManager {
        &self.history
    }

    /// The color space adapter.
    #[must_use]
    pub const fn space(&self) -> &S {
        &self.space
    }

    /// Settings the session was started with.
    #[must_use]
    pub const fn settings(&self) -> &SessionSettings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::debounce::ManualClock;
    use crate::error::ColorError;

    fn session(seed: &str) -> (Session, ManualClock) {
        let clock = ManualClock::new();
        let session = Session::new(
            OkSpace::new(),
            SessionSettings::default(),
            seed,
            Box::new(clock.clone()),
        )
        .unwrap();
        (session, clock)
    }

    fn slider(step: usize, kind: OffsetKind, value: f64) -> SessionEvent {
        SessionEvent::SetSlider { step, kind, value }
    }

    fn settle(session: &mut Session, clock: &ManualClock) -> Vec<Effect> {
        clock.advance(Duration::from_millis(DEFAULT_DEBOUNCE_MS));
        session.handle(SessionEvent::Tick).unwrap()
    }

    #[test]
    fn test_new_session_shows_base_scale() {
        let (session, _) = session("#3b82f6");
        assert_eq!(session.displayed(), session.base().colors().as_slice());
        assert!(session.offsets().is_zero());
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.displayed_hex()[5], "#3b82f6");
    }

    #[test]
    fn test_slider_burst_makes_one_checkpoint() {
        let (mut session, clock) = session("#3b82f6");

        let effects = session.handle(slider(5, OffsetKind::Hue, 5.0)).unwrap();
        assert_eq!(effects, vec![Effect::DisplayChanged, Effect::CheckpointScheduled]);

        clock.advance(Duration::from_millis(100));
        session.handle(slider(5, OffsetKind::Hue, 8.0)).unwrap();
        clock.advance(Duration::from_millis(100));
        let effects = session.handle(slider(5, OffsetKind::Hue, 10.0)).unwrap();
        assert_eq!(effects, vec![Effect::DisplayChanged]);

        let effects = settle(&mut session, &clock);
        assert_eq!(effects, vec![Effect::CheckpointCommitted(1)]);
        assert_eq!(session.history().len(), 2);
        assert!((session.history().current().offsets.hue[5] - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_seed_leaves_state_untouched() {
        let (mut session, _) = session("#3b82f6");
        session.handle(slider(3, OffsetKind::Chroma, 5.0)).unwrap();
        let displayed = session.displayed().to_vec();
        let offsets = *session.offsets();

        let result = session.handle(SessionEvent::SetSeed("not a color".to_string()));
        assert!(matches!(
            result,
            Err(SessionError::Color(ColorError::InvalidColor { .. }))
        ));
        assert_eq!(session.seed(), "#3b82f6");
        assert_eq!(session.displayed(), displayed.as_slice());
        assert_eq!(session.offsets(), &offsets);
        assert!(session.history().has_pending());
    }

    #[test]
    fn test_invalid_slider_leaves_state_untouched() {
        let (mut session, _) = session("#3b82f6");
        assert_eq!(
            session.handle(slider(11, OffsetKind::Hue, 5.0)),
            Err(SessionError::InvalidStep(11))
        );
        assert!(session
            .handle(slider(2, OffsetKind::Hue, f64::INFINITY))
            .is_err());
        assert!(session.offsets().is_zero());
        assert!(!session.history().has_pending());
    }

    #[test]
    fn test_seed_change_cancels_pending_checkpoint() {
        let (mut session, clock) = session("#3b82f6");
        session.handle(slider(5, OffsetKind::Lightness, 10.0)).unwrap();

        let effects = session
            .handle(SessionEvent::SetSeed("#ef4444".to_string()))
            .unwrap();
        assert_eq!(effects, vec![Effect::DisplayChanged]);

        assert!(settle(&mut session, &clock).is_empty());
        assert_eq!(session.history().len(), 1);
        assert!(session.offsets().is_zero());
        assert_eq!(session.seed(), "#ef4444");
    }

    #[test]
    fn test_undo_flushes_pending_edit_first() {
        let (mut session, _) = session("#3b82f6");
        session.handle(slider(5, OffsetKind::Hue, 10.0)).unwrap();

        let effects = session.handle(SessionEvent::Undo).unwrap();
        assert_eq!(
            effects,
            vec![
                Effect::CheckpointCommitted(1),
                Effect::Restored(0),
                Effect::DisplayChanged
            ]
        );
        assert!(session.offsets().is_zero());
        assert_eq!(session.displayed(), session.base().colors().as_slice());

        session.handle(SessionEvent::Redo).unwrap();
        assert!((session.offsets().hue[5] - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_undo_twice_then_edit_truncates() {
        let (mut session, clock) = session("#3b82f6");
        for value in [5.0, 10.0, 15.0] {
            session.handle(slider(5, OffsetKind::Hue, value)).unwrap();
            settle(&mut session, &clock);
        }
        assert_eq!(session.history().len(), 4);

        session.handle(SessionEvent::Undo).unwrap();
        session.handle(SessionEvent::Undo).unwrap();
        assert!((session.offsets().hue[5] - 5.0).abs() < 1e-12);
        assert!(session.history().can_redo());

        session.handle(slider(0, OffsetKind::Chroma, 3.0)).unwrap();
        settle(&mut session, &clock);
        assert_eq!(session.history().len(), 3);
        assert!(!session.history().can_redo());
    }

    #[test]
    fn test_undo_at_start_is_noop() {
        let (mut session, _) = session("#3b82f6");
        assert!(session.handle(SessionEvent::Undo).unwrap().is_empty());
        assert!(session.handle(SessionEvent::Redo).unwrap().is_empty());
    }

    #[test]
    fn test_reset_kind_keeps_other_vectors() {
        let (mut session, clock) = session("#3b82f6");
        session.handle(slider(2, OffsetKind::Hue, 20.0)).unwrap();
        session.handle(slider(8, OffsetKind::Chroma, -5.0)).unwrap();
        settle(&mut session, &clock);

        let effects = session
            .handle(SessionEvent::ResetKind(OffsetKind::Hue))
            .unwrap();
        assert_eq!(effects, vec![Effect::DisplayChanged, Effect::CheckpointScheduled]);
        assert_eq!(session.offsets().hue, [0.0; 11]);
        assert!((session.offsets().chroma[8] + 5.0).abs() < 1e-12);

        session.handle(SessionEvent::ResetAll).unwrap();
        assert!(session.offsets().is_zero());
        assert_eq!(session.displayed(), session.base().colors().as_slice());

        // Nothing left to reset
        assert!(session.handle(SessionEvent::ResetAll).unwrap().is_empty());
    }

    #[test]
    fn test_save_palette_default_name() {
        let (mut session, _) = session("#3b82f6");
        session.handle(slider(5, OffsetKind::Hue, 10.0)).unwrap();

        let effects = session
            .handle(SessionEvent::SavePalette { name: None })
            .unwrap();
        let [Effect::PersistPalette(palette)] = effects.as_slice() else {
            panic!("expected a single persist effect, got {effects:?}");
        };
        assert!(palette.name.starts_with("Blue ("), "{}", palette.name);
        assert!(palette.name.ends_with(')'));
        assert_eq!(palette.seed, "#3b82f6");
        assert_eq!(palette.colors, session.displayed_hex());
        assert_eq!(&palette.offsets, session.offsets());
    }

    #[test]
    fn test_save_palette_uses_custom_namer() {
        #[derive(Debug)]
        struct Fixed;
        impl ColorNamer for Fixed {
            fn name(&self, _color: Oklch) -> String {
                "Cornflower".to_string()
            }
        }

        let (session, _) = session("#3b82f6");
        let mut session = session.with_namer(Box::new(Fixed));
        let effects = session
            .handle(SessionEvent::SavePalette { name: Some("  ".to_string()) })
            .unwrap();
        let [Effect::PersistPalette(palette)] = effects.as_slice() else {
            panic!("expected a single persist effect, got {effects:?}");
        };
        assert!(palette.name.starts_with("Cornflower ("), "{}", palette.name);
    }

    #[test]
    fn test_save_palette_explicit_name() {
        let (mut session, _) = session("#3b82f6");
        let effects = session
            .handle(SessionEvent::SavePalette {
                name: Some("  Ocean  ".to_string()),
            })
            .unwrap();
        assert!(matches!(
            effects.as_slice(),
            [Effect::PersistPalette(p)] if p.name == "Ocean"
        ));
    }

    #[test]
    fn test_load_palette_restores_session() {
        let (mut session, clock) = session("#3b82f6");
        session.handle(slider(4, OffsetKind::Lightness, 12.0)).unwrap();
        settle(&mut session, &clock);
        let saved_hex = session.displayed_hex();
        let saved_offsets = *session.offsets();
        let effects = session
            .handle(SessionEvent::SavePalette {
                name: Some("Saved".to_string()),
            })
            .unwrap();
        let Some(Effect::PersistPalette(palette)) = effects.into_iter().next() else {
            panic!("expected persist effect");
        };

        session
            .handle(SessionEvent::SetSeed("#84cc16".to_string()))
            .unwrap();
        session.handle(slider(1, OffsetKind::Hue, -10.0)).unwrap();

        let effects = session.handle(SessionEvent::LoadPalette(palette)).unwrap();
        assert_eq!(effects, vec![Effect::DisplayChanged]);
        assert_eq!(session.seed(), "#3b82f6");
        assert_eq!(session.offsets(), &saved_offsets);
        assert_eq!(session.displayed_hex(), saved_hex);
        assert_eq!(session.history().len(), 1);
        assert!(!session.history().has_pending());
    }

    #[test]
    fn test_load_invalid_palette_is_rejected() {
        let (mut session, _) = session("#3b82f6");
        let effects = session
            .handle(SessionEvent::SavePalette { name: None })
            .unwrap();
        let Some(Effect::PersistPalette(mut palette)) = effects.into_iter().next() else {
            panic!("expected persist effect");
        };
        palette.colors.truncate(3);

        session
            .handle(SessionEvent::SetSeed("#ef4444".to_string()))
            .unwrap();
        assert!(matches!(
            session.handle(SessionEvent::LoadPalette(palette)),
            Err(SessionError::InvalidPalette(_))
        ));
        assert_eq!(session.seed(), "#ef4444");
    }

    #[test]
    fn test_delete_palette_is_an_effect() {
        let (mut session, _) = session("#3b82f6");
        let effects = session
            .handle(SessionEvent::DeletePalette("abc".to_string()))
            .unwrap();
        assert_eq!(effects, vec![Effect::DeletePalette("abc".to_string())]);
    }

    #[test]
    fn test_seed_from_oklch_and_hsl_pickers() {
        let (mut session, _) = session("#3b82f6");

        session
            .handle(SessionEvent::SetSeedOklch {
                l: 0.7,
                c: 0.12,
                h: 400.0,
            })
            .unwrap();
        let anchor = session.space().to_oklch(&session.displayed()[5]);
        assert!((anchor.l - 0.7).abs() < 1e-12);
        assert!((anchor.h - 40.0).abs() < 1e-9);
        let reparsed = session.space().parse(session.seed()).unwrap();
        assert_eq!(&reparsed, session.seed_color());

        session
            .handle(SessionEvent::SetSeedHsl {
                h: 0.0,
                s: 100.0,
                l: 50.0,
            })
            .unwrap();
        assert_eq!(session.displayed_hex()[5], "#ff0000");
        let reparsed = session.space().parse(session.seed()).unwrap();
        assert_eq!(&reparsed, session.seed_color());
    }

    #[test]
    fn test_flush_commits_now() {
        let (mut session, _) = session("#3b82f6");
        session.handle(slider(5, OffsetKind::Chroma, 4.0)).unwrap();
        let effects = session.handle(SessionEvent::Flush).unwrap();
        assert_eq!(effects, vec![Effect::CheckpointCommitted(1)]);
        assert!(session.handle(SessionEvent::Flush).unwrap().is_empty());
    }
}
