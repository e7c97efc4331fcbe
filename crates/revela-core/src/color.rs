/// Rec. 709 luma of a display-referred sRGB pixel (normalized channels).
pub fn luma(r: f32, g: f32, b: f32) -> f32 {
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Normalize an 8-bit sample to [0, 1].
pub fn to_unit(c: u8) -> f32 {
    c as f32 / 255.0
}

/// Quantize a normalized value back to an 8-bit sample, clamped to range.
pub fn to_byte(x: f32) -> u8 {
    (x.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

/// S-curve: x^a / (x^a + (1-x)^a)
///
/// Properties: f(0)=0, f(1)=1, f(0.5)=0.5, monotonic for a>0.
/// a=1 is identity; a>1 increases slope at midpoint (contrast boost).
pub fn s_curve(x: f32, a: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    let xa = x.powf(a);
    let one_minus_xa = (1.0 - x).powf(a);
    xa / (xa + one_minus_xa)
}
