//! Color parsing and conversion between sRGB, HSL and OKLCH.
//!
//! The scale engine only talks to the [`ColorSpace`] trait. [`OkSpace`] is the
//! implementation used by the application: CSS color text is parsed with
//! `csscolorparser` and every conversion goes through the `palette` crate in
//! f64.
//!
//! Any finite OKLCH triple is accepted, including negative chroma and
//! lightness above 1. Out-of-gamut colors are mapped into sRGB when a hex
//! string is produced by reducing chroma at constant lightness and hue.

use palette::convert::FromColorUnclamped;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::error::ColorError;
use crate::models::{normalize_hue, Color, Hsl, Oklch, Srgb};

type PaletteOklch = palette::Oklch<f64>;
type PaletteHsl = palette::Hsl<palette::encoding::Srgb, f64>;

/// Chroma below which hue is meaningless and reported as 0.
const ACHROMATIC_CHROMA: f64 = 1e-7;

/// Channel slack allowed when deciding whether a color is inside sRGB.
const GAMUT_EPSILON: f64 = 1e-6;

/// Bisection steps used by gamut mapping.
const GAMUT_MAP_ITERATIONS: usize = 32;

/// CSS maps 100% OKLCH chroma to this value.
const OKLCH_PERCENT_CHROMA: f64 = 0.4;

// `csscolorparser` handles the other CSS functions; `oklch()` is the seed
// format written back by the OKLCH picker and is parsed here.
static OKLCH_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^oklch\(\s*([^()]*)\)$").expect("oklch pattern is valid")
});

static BARE_HEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex pattern is valid")
});

/// Parses and converts colors for the scale engine.
pub trait ColorSpace: fmt::Debug {
    /// Parses color text.
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidColor` for text that is not a color.
    fn parse(&self, text: &str) -> Result<Color, ColorError>;

    /// Returns the OKLCH coordinates of a color.
    fn to_oklch(&self, color: &Color) -> Oklch;

    /// Builds a color from OKLCH coordinates.
    ///
    /// # Errors
    ///
    /// Returns `ColorError::Conversion` if any coordinate is not finite.
    fn from_oklch(&self, oklch: Oklch) -> Result<Color, ColorError>;

    /// Returns the (possibly out-of-gamut) sRGB value of a color.
    fn to_srgb(&self, color: &Color) -> Srgb;

    /// Returns the HSL coordinates of a color, computed from its gamut-mapped sRGB value.
    fn to_hsl(&self, color: &Color) -> Hsl;

    /// Builds a color from HSL coordinates.
    ///
    /// # Errors
    ///
    /// Returns `ColorError::Conversion` if any coordinate is not finite.
    fn from_hsl(&self, hsl: Hsl) -> Result<Color, ColorError>;

    /// Formats a color as `#rrggbb` (lowercase, no alpha).
    ///
    /// The default implementation clips out-of-gamut channels.
    fn to_hex(&self, color: &Color) -> String {
        srgb_to_hex(self.to_srgb(color))
    }
}

/// The default color space adapter.
#[derive(Debug, Clone, Copy, Default)]
pub struct OkSpace;

impl OkSpace {
    /// Creates the adapter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Builds a color from an sRGB value.
    #[must_use]
    pub fn from_srgb(&self, srgb: Srgb) -> Color {
        Color::from_coords(srgb_to_oklch(srgb))
    }
}

impl ColorSpace for OkSpace {
    fn parse(&self, text: &str) -> Result<Color, ColorError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ColorError::invalid(text, "empty color"));
        }

        if let Some(caps) = OKLCH_FUNCTION.captures(trimmed) {
            return parse_oklch_args(trimmed, &caps[1]).and_then(|lch| self.from_oklch(lch));
        }

        // Hex without the leading '#' is accepted too
        let css = if BARE_HEX.is_match(trimmed) {
            format!("#{trimmed}")
        } else {
            trimmed.to_string()
        };

        let parsed =
            csscolorparser::parse(&css).map_err(|e| ColorError::invalid(text, e.to_string()))?;
        // Alpha is ignored
        let channel = |v| f64::from(v).clamp(0.0, 1.0);
        Ok(self.from_srgb(Srgb::new(
            channel(parsed.r),
            channel(parsed.g),
            channel(parsed.b),
        )))
    }

    fn to_oklch(&self, color: &Color) -> Oklch {
        color.coords()
    }

    fn from_oklch(&self, oklch: Oklch) -> Result<Color, ColorError> {
        if !oklch.is_finite() {
            return Err(ColorError::Conversion(format!(
                "non-finite OKLCH coordinates ({}, {}, {})",
                oklch.l, oklch.c, oklch.h
            )));
        }
        Ok(Color::from_coords(Oklch::new(
            oklch.l,
            oklch.c,
            normalize_hue(oklch.h),
        )))
    }

    fn to_srgb(&self, color: &Color) -> Srgb {
        oklch_to_srgb(color.coords())
    }

    fn to_hsl(&self, color: &Color) -> Hsl {
        let hsl = PaletteHsl::from_color_unclamped(gamut_map(color.coords()));
        Hsl::new(
            normalize_hue(hsl.hue.into_positive_degrees()),
            hsl.saturation * 100.0,
            hsl.lightness * 100.0,
        )
    }

    fn from_hsl(&self, hsl: Hsl) -> Result<Color, ColorError> {
        if !(hsl.h.is_finite() && hsl.s.is_finite() && hsl.l.is_finite()) {
            return Err(ColorError::Conversion(format!(
                "non-finite HSL coordinates ({}, {}, {})",
                hsl.h, hsl.s, hsl.l
            )));
        }
        let hsl = PaletteHsl::new(
            normalize_hue(hsl.h),
            hsl.s.clamp(0.0, 100.0) / 100.0,
            hsl.l.clamp(0.0, 100.0) / 100.0,
        );
        Ok(self.from_srgb(Srgb::from_color_unclamped(hsl)))
    }

    fn to_hex(&self, color: &Color) -> String {
        srgb_to_hex(gamut_map(color.coords()))
    }
}

/// Parses `oklch()` arguments: `l` as 0..1 or percent, `c` as a number or
/// percent, `h` in degrees (optional `deg`), and an ignored `/ alpha`.
fn parse_oklch_args(input: &str, args: &str) -> Result<Oklch, ColorError> {
    let tokens: Vec<&str> = args
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();
    if tokens.len() != 3 && tokens.len() != 4 {
        return Err(ColorError::invalid(
            input,
            format!("expected 3 components, got {}", tokens.len()),
        ));
    }

    let mut values = [(0.0, false); 3];
    for (slot, token) in values.iter_mut().zip(&tokens) {
        *slot = parse_component(token)
            .ok_or_else(|| ColorError::invalid(input, format!("invalid component '{token}'")))?;
    }

    let [(l, l_percent), (c, c_percent), (h, _)] = values;
    let l = if l_percent { l / 100.0 } else { l };
    let c = if c_percent { c * OKLCH_PERCENT_CHROMA / 100.0 } else { c };
    Ok(Oklch::new(l, c, h))
}

/// Parses a number with an optional `%` or `deg` suffix.
fn parse_component(token: &str) -> Option<(f64, bool)> {
    let (digits, percent) = match token.strip_suffix('%') {
        Some(rest) => (rest, true),
        None => (token.strip_suffix("deg").unwrap_or(token), false),
    };
    digits
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| (v, percent))
}

/// Converts gamma-encoded sRGB to OKLCH.
#[must_use]
pub fn srgb_to_oklch(srgb: Srgb) -> Oklch {
    let lch = PaletteOklch::from_color_unclamped(srgb);
    let hue = if lch.chroma < ACHROMATIC_CHROMA {
        0.0
    } else {
        normalize_hue(lch.hue.into_positive_degrees())
    };
    Oklch::new(lch.l, lch.chroma, hue)
}

/// Converts OKLCH to gamma-encoded sRGB without gamut clipping.
#[must_use]
pub fn oklch_to_srgb(c: Oklch) -> Srgb {
    // Negative chroma points the other way round the hue circle
    let (chroma, hue) = if c.c < 0.0 {
        (-c.c, c.h + 180.0)
    } else {
        (c.c, c.h)
    };
    Srgb::from_color_unclamped(PaletteOklch::new(c.l, chroma, normalize_hue(hue)))
}

/// Returns true if every channel lies within `0.0..=1.0`, allowing
/// `GAMUT_EPSILON` of conversion noise.
#[must_use]
pub fn is_in_gamut(srgb: Srgb) -> bool {
    [srgb.red, srgb.green, srgb.blue]
        .iter()
        .all(|c| (-GAMUT_EPSILON..=1.0 + GAMUT_EPSILON).contains(c))
}

/// Maps OKLCH coordinates to an in-gamut sRGB value.
///
/// In-gamut colors convert directly. Otherwise lightness is clamped to
/// black/white at the ends and chroma is bisected down (keeping its sign and
/// the hue) to the largest value that fits.
#[must_use]
pub fn gamut_map(c: Oklch) -> Srgb {
    let direct = oklch_to_srgb(c);
    if is_in_gamut(direct) {
        return direct;
    }
    if c.l >= 1.0 {
        return Srgb::new(1.0, 1.0, 1.0);
    }
    if c.l <= 0.0 {
        return Srgb::new(0.0, 0.0, 0.0);
    }

    let sign = c.c.signum();
    let (mut lo, mut hi) = (0.0, c.c.abs());
    for _ in 0..GAMUT_MAP_ITERATIONS {
        let mid = (lo + hi) / 2.0;
        if is_in_gamut(oklch_to_srgb(Oklch::new(c.l, sign * mid, c.h))) {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    oklch_to_srgb(Oklch::new(c.l, sign * lo, c.h))
}

/// Formats sRGB as `#rrggbb`. Channels are clipped by the 8-bit conversion.
#[must_use]
pub fn srgb_to_hex(srgb: Srgb) -> String {
    let rgb: palette::Srgb<u8> = srgb.into_format();
    format!("#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
}
