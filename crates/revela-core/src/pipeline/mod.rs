pub mod module;
pub mod modules;

use tracing::debug;

use crate::error::FilterError;
use crate::params::EditParams;
use crate::raster::RasterImage;
use module::PipelineModule;

/// Processing pipeline that chains stages in a fixed, deterministic order.
///
/// ```text
/// source -> Style Filter -> Tone Adjust -> rendered output
/// ```
///
/// Both stages are pure functions over their inputs; re-running the
/// pipeline with identical inputs yields identical output buffers.
pub struct Pipeline {
    modules: Vec<Box<dyn PipelineModule>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            modules: vec![
                Box::new(modules::StyleFilter),
                Box::new(modules::ToneAdjust),
            ],
        }
    }

    /// Run the full pipeline on an input image with the given edit params.
    pub fn process(
        &self,
        input: RasterImage,
        params: &EditParams,
    ) -> Result<RasterImage, FilterError> {
        let mut current = input;
        for module in &self.modules {
            debug!(module = module.name(), filter = params.filter.name(), "processing");
            current = module.process(current, params)?;
        }
        Ok(current)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
