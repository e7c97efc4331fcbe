use crate::color::{luma, s_curve, to_byte, to_unit};
use crate::error::FilterError;
use crate::params::{EditParams, FilterVariant};
use crate::pipeline::module::PipelineModule;
use crate::raster::RasterImage;

// ── Intrinsic effect constants ───────────────────────────────────────────
//
// These are properties of each effect, baked in at full intensity, not
// caller-tunable parameters.

/// Standard sepia color matrix, rows R/G/B.
const SEPIA_R: [f32; 3] = [0.393, 0.769, 0.189];
const SEPIA_G: [f32; 3] = [0.349, 0.686, 0.168];
const SEPIA_B: [f32; 3] = [0.272, 0.534, 0.131];

/// Monochrome tint: neutral grey, applied luminance-preserving.
const MONO_TINT: [f32; 3] = [0.7, 0.7, 0.7];

/// S-curve exponent for the dramatic high-contrast noir look.
const NOIR_EXPONENT: f32 = 1.8;

/// Vignette strength and reach. Radius is normalized so that 3.0 puts
/// the falloff reference at the half-diagonal of the image.
const VIGNETTE_INTENSITY: f32 = 2.0;
const VIGNETTE_RADIUS: f32 = 3.0;

/// Stylistic filter stage: dispatches on the selected variant.
pub struct StyleFilter;

impl PipelineModule for StyleFilter {
    fn name(&self) -> &str {
        "style_filter"
    }

    fn process(&self, input: RasterImage, params: &EditParams) -> Result<RasterImage, FilterError> {
        input.check_processable()?;
        let output = match params.filter {
            FilterVariant::None => input,
            FilterVariant::BlackAndWhite => black_and_white(input),
            FilterVariant::Sepia => sepia(input),
            FilterVariant::Monochrome => monochrome(input),
            FilterVariant::Noir => noir(input),
            FilterVariant::Vignette => vignette(input),
        };
        Ok(output)
    }
}

fn black_and_white(mut img: RasterImage) -> RasterImage {
    let step = img.format.bytes_per_pixel();
    for px in img.data.chunks_exact_mut(step) {
        let y = luma(to_unit(px[0]), to_unit(px[1]), to_unit(px[2]));
        let v = to_byte(y);
        px[0] = v;
        px[1] = v;
        px[2] = v;
    }
    img
}

fn sepia(mut img: RasterImage) -> RasterImage {
    let step = img.format.bytes_per_pixel();
    for px in img.data.chunks_exact_mut(step) {
        let r = to_unit(px[0]);
        let g = to_unit(px[1]);
        let b = to_unit(px[2]);
        px[0] = to_byte(SEPIA_R[0] * r + SEPIA_R[1] * g + SEPIA_R[2] * b);
        px[1] = to_byte(SEPIA_G[0] * r + SEPIA_G[1] * g + SEPIA_G[2] * b);
        px[2] = to_byte(SEPIA_B[0] * r + SEPIA_B[1] * g + SEPIA_B[2] * b);
    }
    img
}

fn monochrome(mut img: RasterImage) -> RasterImage {
    // Dividing by the tint's own luma keeps output luminance equal to
    // the input's, whatever the tint color.
    let tint_luma = luma(MONO_TINT[0], MONO_TINT[1], MONO_TINT[2]);
    let step = img.format.bytes_per_pixel();
    for px in img.data.chunks_exact_mut(step) {
        let y = luma(to_unit(px[0]), to_unit(px[1]), to_unit(px[2]));
        px[0] = to_byte(MONO_TINT[0] * y / tint_luma);
        px[1] = to_byte(MONO_TINT[1] * y / tint_luma);
        px[2] = to_byte(MONO_TINT[2] * y / tint_luma);
    }
    img
}

fn noir(mut img: RasterImage) -> RasterImage {
    let step = img.format.bytes_per_pixel();
    for px in img.data.chunks_exact_mut(step) {
        let y = luma(to_unit(px[0]), to_unit(px[1]), to_unit(px[2]));
        let v = to_byte(s_curve(y, NOIR_EXPONENT));
        px[0] = v;
        px[1] = v;
        px[2] = v;
    }
    img
}

fn vignette(mut img: RasterImage) -> RasterImage {
    let step = img.format.bytes_per_pixel();
    let cx = img.width as f32 / 2.0;
    let cy = img.height as f32 / 2.0;
    let half_diagonal = (cx * cx + cy * cy).sqrt();
    let reach = half_diagonal * (VIGNETTE_RADIUS / 3.0);

    let width = img.width as usize;
    for (i, px) in img.data.chunks_exact_mut(step).enumerate() {
        let x = (i % width) as f32 - cx;
        let y = (i / width) as f32 - cy;
        let norm = (x * x + y * y).sqrt() / reach;
        let gain = (1.0 - VIGNETTE_INTENSITY * norm * norm).clamp(0.0, 1.0);
        px[0] = to_byte(to_unit(px[0]) * gain);
        px[1] = to_byte(to_unit(px[1]) * gain);
        px[2] = to_byte(to_unit(px[2]) * gain);
    }
    img
}
