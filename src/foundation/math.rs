pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Inverse of premultiplication for a single channel. `a == 0` maps to 0.
pub(crate) fn unpremul_u8(c: u8, a: u8) -> u8 {
    if a == 0 {
        return 0;
    }
    let v = (u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a);
    v.min(255) as u8
}

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Lowercase base-36 rendering of `v` (no leading zeros, `"0"` for zero).
pub(crate) fn to_base36(mut v: u64) -> String {
    if v == 0 {
        return "0".to_owned();
    }
    let mut buf = Vec::with_capacity(13);
    while v > 0 {
        buf.push(BASE36_DIGITS[(v % 36) as usize]);
        v /= 36;
    }
    buf.reverse();
    String::from_utf8(buf).unwrap_or_default()
}

/// Steps `value` by `rate`; when the result leaves `[lo, hi]` it is pinned to the crossed
/// bound and the returned rate is negated (triangle wave).
pub(crate) fn reflect_step(value: f64, rate: f64, lo: f64, hi: f64) -> (f64, f64) {
    let next = value + rate;
    if next > hi {
        (hi, -rate.abs())
    } else if next < lo {
        (lo, rate.abs())
    } else {
        (next, rate)
    }
}

/// Wraps `v` into `[-margin, extent + margin)`.
pub(crate) fn wrap_with_margin(v: f64, extent: f64, margin: f64) -> f64 {
    let span = extent + 2.0 * margin;
    if span <= 0.0 || !v.is_finite() {
        return v;
    }
    (v + margin).rem_euclid(span) - margin
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
