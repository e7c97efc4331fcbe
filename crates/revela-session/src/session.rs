use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use revela_core::error::FilterError;
use revela_core::params::{EditParams, FilterVariant};
use revela_core::pipeline::Pipeline;
use revela_core::raster::RasterImage;

/// A single photo-editing session.
///
/// Holds the source image, the selected filter, and the tone
/// parameters, and keeps `rendered_output` in sync: every mutator
/// re-runs the full pipeline synchronously before returning, so the
/// output is never stale. The session is the single source of truth;
/// observers receive each new output over a channel, in mutation order.
///
/// All mutators take `&mut self`: one mutation (including its recompute
/// and publish) completes before the next is accepted, so observers
/// never see partial state.
pub struct EditSession {
    pipeline: Pipeline,
    source: Option<Arc<RasterImage>>,
    params: EditParams,
    output: Option<Arc<RasterImage>>,
    observers: Vec<mpsc::UnboundedSender<Arc<RasterImage>>>,
}

impl EditSession {
    pub fn new() -> Self {
        Self {
            pipeline: Pipeline::new(),
            source: None,
            params: EditParams::default(),
            output: None,
            observers: Vec::new(),
        }
    }

    /// True until a source image has been set.
    pub fn is_empty(&self) -> bool {
        self.source.is_none()
    }

    pub fn params(&self) -> EditParams {
        self.params
    }

    pub fn source(&self) -> Option<Arc<RasterImage>> {
        self.source.clone()
    }

    /// The result of applying the current filter and tone parameters to
    /// the source, or `None` while the session is empty.
    pub fn rendered_output(&self) -> Option<Arc<RasterImage>> {
        self.output.clone()
    }

    /// Register an observer. Each successful recompute delivers the new
    /// rendered output to every live subscriber, in the order mutations
    /// were applied. Sends never block the mutator; a dropped receiver
    /// is pruned on the next publish.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<Arc<RasterImage>> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.observers.push(tx);
        rx
    }

    /// Set a new source image. Switching photos clears prior edits:
    /// the filter and tone parameters are reset to their defaults.
    pub fn set_source(&mut self, image: RasterImage) -> Result<(), FilterError> {
        self.source = Some(Arc::new(image));
        self.params = EditParams::default();
        self.recompute()
    }

    /// Select a filter. No-op while the session is empty.
    pub fn select_filter(&mut self, variant: FilterVariant) -> Result<(), FilterError> {
        if self.source.is_none() {
            return Ok(());
        }
        self.params.filter = variant;
        self.recompute()
    }

    /// Set brightness. No-op while the session is empty. The advisory
    /// range is [-1, 1]; out-of-range values are applied as given.
    pub fn set_brightness(&mut self, value: f32) -> Result<(), FilterError> {
        if self.source.is_none() {
            return Ok(());
        }
        self.params.brightness = value;
        self.recompute()
    }

    /// Set contrast. No-op while the session is empty. The advisory
    /// range is [0, 4]; out-of-range values are applied as given.
    pub fn set_contrast(&mut self, value: f32) -> Result<(), FilterError> {
        if self.source.is_none() {
            return Ok(());
        }
        self.params.contrast = value;
        self.recompute()
    }

    /// Restore default filter and tone parameters, keeping the source.
    pub fn reset(&mut self) -> Result<(), FilterError> {
        self.params = EditParams::default();
        self.recompute()
    }

    /// Re-run the full pipeline on the current state. The filter stage
    /// is re-applied even when only tone changed: both stages are pure,
    /// and always-fresh composition beats caching intermediate results.
    ///
    /// On failure the previous output is retained and the error is
    /// returned to the caller; nothing is published.
    fn recompute(&mut self) -> Result<(), FilterError> {
        let Some(source) = &self.source else {
            self.output = None;
            return Ok(());
        };

        debug!(
            filter = self.params.filter.name(),
            brightness = self.params.brightness,
            contrast = self.params.contrast,
            "recompute"
        );

        let rendered = self
            .pipeline
            .process((**source).clone(), &self.params)
            .inspect_err(|err| warn!(%err, "recompute failed, keeping previous output"))?;

        let rendered = Arc::new(rendered);
        self.output = Some(rendered.clone());
        self.publish(rendered);
        Ok(())
    }

    fn publish(&mut self, image: Arc<RasterImage>) {
        self.observers.retain(|tx| tx.send(image.clone()).is_ok());
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}
