use crate::color::{to_byte, to_unit};
use crate::error::FilterError;
use crate::params::EditParams;
use crate::pipeline::module::PipelineModule;
use crate::raster::RasterImage;

/// Brightness/contrast stage.
///
/// Both adjustments are applied in a single combined pass per channel,
///
/// ```text
/// out = clamp01((c - 0.5) * contrast + 0.5 + brightness)
/// ```
///
/// so rounding happens once, not once per control. Contrast pivots
/// around the 0.5 midpoint. Parameter ranges are advisory: out-of-range
/// values are applied as given and the clamp keeps output representable.
pub struct ToneAdjust;

impl PipelineModule for ToneAdjust {
    fn name(&self) -> &str {
        "tone"
    }

    fn process(&self, mut input: RasterImage, params: &EditParams) -> Result<RasterImage, FilterError> {
        input.check_processable()?;
        if params.brightness == 0.0 && params.contrast == 1.0 {
            return Ok(input);
        }

        let step = input.format.bytes_per_pixel();
        let channels = input.format.color_channels();
        for px in input.data.chunks_exact_mut(step) {
            for c in &mut px[..channels] {
                let v = (to_unit(*c) - 0.5) * params.contrast + 0.5 + params.brightness;
                *c = to_byte(v);
            }
        }
        Ok(input)
    }
}
