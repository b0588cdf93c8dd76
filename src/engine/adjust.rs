//! Per-step adjustments on top of a base scale.
//!
//! Two operations live here. [`propagate`] spreads a single-step edit to the
//! four neighbors on each side with decaying strength, like dragging one band
//! of a graphic equalizer. [`AdjustmentEngine::recompute`] applies the three
//! offset vectors to the base scale to produce the displayed colors.

use tracing::warn;

use super::scale::BaseScale;
use crate::color_space::ColorSpace;
use crate::constants::STEP_COUNT;
use crate::error::{ColorError, SessionError};
use crate::models::{normalize_hue, Color, OffsetKind, OffsetVector, Offsets, Oklch, Step};

/// Share of an edit passed to neighbors at distance 1, 2, 3 and 4.
pub const NEIGHBOR_DECAY: [f64; 4] = [0.8, 0.6, 0.4, 0.2];

/// Upper chroma bound used when recomputed coordinates are clamped.
pub const MAX_CHROMA: f64 = 0.4;

/// Spreads `delta` from `index` to its neighbors.
///
/// The neighbor at distance `d` (1-based) receives `delta * decay[d - 1]`,
/// clamped into `bounds`. Neighbors outside the vector are dropped; the edited
/// index itself is not touched.
pub fn propagate(
    values: &mut OffsetVector,
    index: usize,
    delta: f64,
    decay: &[f64],
    bounds: (f64, f64),
) {
    let (lo, hi) = bounds;
    for (i, factor) in decay.iter().enumerate() {
        let distance = i + 1;
        let change = delta * factor;

        if let Some(left) = index.checked_sub(distance) {
            values[left] = (values[left] + change).clamp(lo, hi);
        }

        let right = index + distance;
        if right < values.len() {
            values[right] = (values[right] + change).clamp(lo, hi);
        }
    }
}

/// Applies a slider edit at one step and propagates it to the neighbors.
///
/// The new value is clamped into the slider range of `kind`, the difference to
/// the previous value is then spread with [`NEIGHBOR_DECAY`] and clamped into
/// the neighbor bounds of `kind`.
///
/// # Examples
///
/// ```
/// use tintscale::engine::apply_edit;
/// use tintscale::models::{OffsetKind, Offsets};
///
/// let offsets = apply_edit(&Offsets::zero(), 5, 10.0, OffsetKind::Hue).unwrap();
/// assert_eq!(offsets.hue[5], 10.0);
/// assert!((offsets.hue[6] - 8.0).abs() < 1e-12);
/// assert_eq!(offsets.hue[10], 0.0);
/// ```
///
/// # Errors
///
/// Returns `SessionError::InvalidStep` for an index above 10 and
/// `SessionError::InvalidOffset` for a non-finite value.
pub fn apply_edit(
    offsets: &Offsets,
    index: usize,
    new_value: f64,
    kind: OffsetKind,
) -> Result<Offsets, SessionError> {
    let step = Step::new(index)?;
    if !new_value.is_finite() {
        return Err(SessionError::InvalidOffset {
            kind,
            value: new_value,
        });
    }

    let (min, max) = kind.slider_range();
    let value = new_value.clamp(min, max);

    let mut updated = *offsets;
    let values = updated.get_mut(kind);
    let delta = value - values[step.index()];
    values[step.index()] = value;
    propagate(values, step.index(), delta, &NEIGHBOR_DECAY, kind.neighbor_bounds());

    Ok(updated)
}

/// Turns a base scale and offsets into displayed colors.
#[derive(Debug)]
pub struct AdjustmentEngine<'a, S: ColorSpace + ?Sized> {
    space: &'a S,
    clamp_coordinates: bool,
}

impl<'a, S: ColorSpace + ?Sized> AdjustmentEngine<'a, S> {
    /// Creates an engine. With `clamp_coordinates`, recomputed lightness is
    /// clamped into `[0, 1]` and chroma into `[0, 0.4]`; otherwise they pass
    /// through and the color space deals with out-of-range values.
    pub const fn new(space: &'a S, clamp_coordinates: bool) -> Self {
        Self {
            space,
            clamp_coordinates,
        }
    }

    /// The adjusted OKLCH coordinates of one base color.
    #[must_use]
    pub fn adjusted(&self, base: Oklch, hue: f64, lightness: f64, chroma: f64) -> Oklch {
        let mut l = base.l + lightness / 100.0;
        let mut c = base.c + chroma / 100.0;
        if self.clamp_coordinates {
            l = l.clamp(0.0, 1.0);
            c = c.clamp(0.0, MAX_CHROMA);
        }
        Oklch::new(l, c, normalize_hue(base.h + hue))
    }

    /// Applies `offsets` to every step of `base`.
    ///
    /// All-or-nothing: if any step fails to convert, no colors are returned
    /// and the caller keeps what it displayed before.
    ///
    /// # Errors
    ///
    /// Returns `ColorError::Conversion` if the color space rejects a coordinate.
    pub fn recompute(&self, base: &BaseScale, offsets: &Offsets) -> Result<Vec<Color>, ColorError> {
        let mut colors = Vec::with_capacity(STEP_COUNT);
        for (i, color) in base.colors().iter().enumerate() {
            let coords = self.adjusted(
                self.space.to_oklch(color),
                offsets.hue[i],
                offsets.lightness[i],
                offsets.chroma[i],
            );
            match self.space.from_oklch(coords) {
                Ok(adjusted) => colors.push(adjusted),
                Err(e) => {
                    warn!(step = i, error = %e, "recompute rejected");
                    return Err(e);
                }
            }
        }
        Ok(colors)
    }
}
