use std::path::PathBuf;
use std::sync::Arc;

use tracing::{error, info};

use revela_codec::encode_png;
use revela_core::raster::RasterImage;
use revela_session::export::{CapabilityGrant, OutputStore, StorageAuthorizer};

/// Answers every capability request with a fixed grant. Stands in for
/// the platform's user-mediated permission prompt.
pub struct StaticAuthorizer(pub CapabilityGrant);

impl StorageAuthorizer for StaticAuthorizer {
    async fn request_capability(&self, _capability: &str) -> CapabilityGrant {
        self.0
    }
}

/// Writes exported images to a PNG on disk. Best-effort: the store
/// contract is fire-and-forget, so failures are logged, not returned.
pub struct PngStore {
    path: PathBuf,
}

impl PngStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl OutputStore for PngStore {
    fn store(&self, image: Arc<RasterImage>) {
        match encode_png(&image, &self.path) {
            Ok(()) => info!(path = %self.path.display(), "exported image"),
            Err(err) => error!(%err, path = %self.path.display(), "export write failed"),
        }
    }
}
