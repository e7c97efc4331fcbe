use crate::error::FilterError;
use crate::params::EditParams;
use crate::raster::RasterImage;

/// A single step in the processing pipeline.
pub trait PipelineModule: Send + Sync {
    fn name(&self) -> &str;
    fn process(&self, input: RasterImage, params: &EditParams) -> Result<RasterImage, FilterError>;
}
