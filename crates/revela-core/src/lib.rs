//! Core image-transform pipeline: raster buffers, non-destructive edit
//! parameters, and the two CPU processing stages (style filter, tone).

pub mod color;
pub mod error;
pub mod params;
pub mod pipeline;
pub mod raster;
