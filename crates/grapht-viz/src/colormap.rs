//! Sequential colormaps.

use plotters::style::RGBColor;

/// A sequential colormap defined by evenly spaced colour stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colormap {
    stops: &'static [(u8, u8, u8)],
}

/// ColorBrewer yellow-green-blue, light to dark.
pub const YL_GN_BU: Colormap = Colormap {
    stops: &[
        (255, 255, 217),
        (237, 248, 177),
        (199, 233, 180),
        (127, 205, 187),
        (65, 182, 196),
        (29, 145, 192),
        (34, 94, 168),
        (37, 52, 148),
        (8, 29, 88),
    ],
};

impl Default for Colormap {
    fn default() -> Self {
        YL_GN_BU
    }
}

impl Colormap {
    /// Colour at `t` in `[0, 1]`; values outside are clamped, NaN maps to 0.
    pub fn at(&self, t: f64) -> RGBColor {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let scaled = t * (self.stops.len() - 1) as f64;
        let i = (scaled.floor() as usize).min(self.stops.len() - 2);
        let frac = scaled - i as f64;
        let (r0, g0, b0) = self.stops[i];
        let (r1, g1, b1) = self.stops[i + 1];
        RGBColor(lerp(r0, r1, frac), lerp(g0, g1, frac), lerp(b0, b1, frac))
    }

    /// Colour for `value` scaled into `range`.
    pub fn map(&self, value: f64, range: (f64, f64)) -> RGBColor {
        self.at(normalize(value, range))
    }
}

fn lerp(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round() as u8
}

/// Position of `value` within `(lo, hi)`; a flat range maps to the middle.
pub fn normalize(value: f64, (lo, hi): (f64, f64)) -> f64 {
    if hi > lo {
        (value - lo) / (hi - lo)
    } else {
        0.5
    }
}

/// Black or white, whichever reads better on `background`.
pub fn text_color_for(background: RGBColor) -> RGBColor {
    let channel = |c: u8| {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    let RGBColor(r, g, b) = background;
    let luminance = 0.2126 * channel(r) + 0.7152 * channel(g) + 0.0722 * channel(b);
    if luminance > 0.408 {
        RGBColor(0, 0, 0)
    } else {
        RGBColor(255, 255, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_match_stops() {
        assert_eq!(YL_GN_BU.at(0.0), RGBColor(255, 255, 217));
        assert_eq!(YL_GN_BU.at(1.0), RGBColor(8, 29, 88));
        assert_eq!(YL_GN_BU.at(-3.0), YL_GN_BU.at(0.0));
        assert_eq!(YL_GN_BU.at(f64::NAN), YL_GN_BU.at(0.0));
    }

    #[test]
    fn flat_range_maps_to_middle() {
        assert_eq!(normalize(3.0, (3.0, 3.0)), 0.5);
        assert_eq!(normalize(5.0, (0.0, 10.0)), 0.5);
    }

    #[test]
    fn text_contrasts_with_background() {
        assert_eq!(text_color_for(YL_GN_BU.at(0.0)), RGBColor(0, 0, 0));
        assert_eq!(text_color_for(YL_GN_BU.at(1.0)), RGBColor(255, 255, 255));
    }
}
