//! Color math — direct conversions without external dependencies.
//! Hue is in degrees [0.0, 360.0); all other components are normalized
//! f64 in 0.0–1.0.

/// Hue in degrees from RGB channels and their precomputed max/delta.
///
/// Shared by the HSV and HSL decompositions, which differ only in how
/// they derive saturation and the third component. Returns 0.0 for
/// achromatic input (delta == 0), where hue is undefined.
pub(crate) fn hue_from_rgb(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        return 0.0;
    }
    let sector = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    // rem_euclid can round a tiny negative sector offset up to 6.0; the
    // final wrap keeps the result strictly below 360.
    (sector * 60.0).rem_euclid(360.0)
}

/// RGB → HSV. Saturation is 0 when value is 0 (black).
pub(crate) fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { delta / max };
    let h = hue_from_rgb(r, g, b, max, delta);

    (h, s, v)
}

/// HSV → RGB. Hue is taken modulo 360 (negative values wrap positive);
/// saturation and value are clamped to 0.0–1.0.
pub(crate) fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let s = s.clamp(0.0, 1.0);
    let v = v.clamp(0.0, 1.0);
    if s == 0.0 {
        return (v, v, v);
    }
    let h6 = h.rem_euclid(360.0) / 60.0;
    let i = h6.floor() as u32;
    let f = h6 - h6.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match i % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// RGB → HSL. Saturation is 0 for achromatic input; lightness 0 or 1
/// forces max == min, so the saturation denominator never reaches zero.
pub(crate) fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let l = (max + min) / 2.0;
    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };
    let h = hue_from_rgb(r, g, b, max, delta);

    (h, s, l)
}

/// HSL → RGB via chroma reconstruction. Hue is taken modulo 360;
/// saturation and lightness are clamped to 0.0–1.0.
pub(crate) fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    let h = h.rem_euclid(360.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r1, g1, b1) = match (h / 60.0).floor() as u32 % 6 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (r1 + m, g1 + m, b1 + m)
}

/// RGB → CMYK. Pure black (K == 1) reports C = M = Y = 0 rather than
/// dividing by zero.
pub(crate) fn rgb_to_cmyk(r: f64, g: f64, b: f64) -> (f64, f64, f64, f64) {
    let max = r.max(g).max(b);
    let k = 1.0 - max;
    if max == 0.0 {
        return (0.0, 0.0, 0.0, 1.0);
    }
    let c = (1.0 - r - k) / (1.0 - k);
    let m = (1.0 - g - k) / (1.0 - k);
    let y = (1.0 - b - k) / (1.0 - k);
    (c, m, y, k)
}

/// CMYK → RGB. All inputs are clamped to 0.0–1.0.
pub(crate) fn cmyk_to_rgb(c: f64, m: f64, y: f64, k: f64) -> (f64, f64, f64) {
    let c = c.clamp(0.0, 1.0);
    let m = m.clamp(0.0, 1.0);
    let y = y.clamp(0.0, 1.0);
    let k = k.clamp(0.0, 1.0);
    (
        (1.0 - c) * (1.0 - k),
        (1.0 - m) * (1.0 - k),
        (1.0 - y) * (1.0 - k),
    )
}
