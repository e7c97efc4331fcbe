use std::future::Future;
use std::sync::Arc;

use tracing::info;

use revela_core::raster::RasterImage;

use crate::session::EditSession;

/// Capability required to hand an image to external photo storage.
pub const STORAGE_WRITE_CAPABILITY: &str = "external-storage-write";

/// Outcome of a user-mediated capability request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapabilityGrant {
    Granted,
    /// Granted with a session-limited scope; sufficient for export.
    GrantedLimited,
    Denied,
}

/// External authorization collaborator. The request may suspend on a
/// user-interactive prompt.
#[allow(async_fn_in_trait)]
pub trait StorageAuthorizer {
    async fn request_capability(&self, capability: &str) -> CapabilityGrant;
}

/// External storage collaborator. Fire-and-forget: the export does not
/// wait for storage-layer confirmation.
pub trait OutputStore {
    fn store(&self, image: Arc<RasterImage>);
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    #[error("external storage write was not authorized")]
    NotAuthorized,
    #[error("session has no rendered output to export")]
    NothingToExport,
}

/// Hands the session's current output to external storage, gated by an
/// authorization check.
pub struct ExportGate<A, S> {
    authorizer: A,
    store: S,
}

impl<A: StorageAuthorizer, S: OutputStore> ExportGate<A, S> {
    pub fn new(authorizer: A, store: S) -> Self {
        Self { authorizer, store }
    }

    /// Export the session's rendered output.
    ///
    /// The output is snapshotted synchronously, before the future is
    /// returned: an empty session contacts no collaborator at all, and
    /// the returned future holds the snapshot `Arc`, not the session
    /// borrow, so the session keeps accepting mutations while the
    /// (possibly long, user-mediated) authorization await is pending.
    pub fn export(
        &self,
        session: &EditSession,
    ) -> impl Future<Output = Result<(), ExportError>> + '_ {
        let snapshot = session.rendered_output();
        async move {
            let Some(image) = snapshot else {
                return Err(ExportError::NothingToExport);
            };

            match self
                .authorizer
                .request_capability(STORAGE_WRITE_CAPABILITY)
                .await
            {
                CapabilityGrant::Granted | CapabilityGrant::GrantedLimited => {
                    info!(
                        width = image.width,
                        height = image.height,
                        "exporting rendered output"
                    );
                    self.store.store(image);
                    Ok(())
                }
                CapabilityGrant::Denied => Err(ExportError::NotAuthorized),
            }
        }
    }
}
