use crate::error::FilterError;

/// Sample layout of a raster buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    /// Interleaved 8-bit RGB.
    Rgb8,
    /// Interleaved 8-bit RGBA. Alpha is carried through every pipeline
    /// stage untouched.
    Rgba8,
}

impl PixelFormat {
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            PixelFormat::Rgb8 => 3,
            PixelFormat::Rgba8 => 4,
        }
    }

    /// Channels a stage is allowed to modify (always the leading RGB).
    pub fn color_channels(&self) -> usize {
        3
    }
}

/// Decoded raster image.
///
/// Samples are interleaved 8-bit display-referred sRGB. A stage never
/// mutates its input observably: it consumes the image by value and
/// returns a new one.
#[derive(Clone, Debug, PartialEq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    /// Flat sample data: [R, G, B, (A), R, G, B, (A), ...].
    pub data: Vec<u8>,
}

impl RasterImage {
    pub fn from_data(
        width: u32,
        height: u32,
        format: PixelFormat,
        data: Vec<u8>,
    ) -> Result<Self, FilterError> {
        let expected = width as usize * height as usize * format.bytes_per_pixel();
        if data.len() != expected {
            return Err(FilterError::DecodeFailed(format!(
                "expected {expected} bytes for {width}x{height} {format:?}, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            format,
            data,
        })
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Gate used by every pipeline stage before touching the buffer.
    pub fn check_processable(&self) -> Result<(), FilterError> {
        if self.width == 0 || self.height == 0 {
            return Err(FilterError::DecodeFailed(format!(
                "zero-dimension image {}x{}",
                self.width, self.height
            )));
        }
        let expected = self.pixel_count() * self.format.bytes_per_pixel();
        if self.data.len() != expected {
            return Err(FilterError::DecodeFailed(format!(
                "buffer length {} does not match {}x{} {:?}",
                self.data.len(),
                self.width,
                self.height,
                self.format
            )));
        }
        Ok(())
    }
}
