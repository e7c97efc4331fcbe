//! Full decode -> edit -> export flow over real PNG files.

use std::path::PathBuf;
use std::sync::Arc;

use revela_codec::{decode_file, encode_png};
use revela_core::params::FilterVariant;
use revela_core::raster::{PixelFormat, RasterImage};
use revela_session::export::{
    CapabilityGrant, ExportError, ExportGate, OutputStore, StorageAuthorizer,
};
use revela_session::session::EditSession;

struct GrantAll;

impl StorageAuthorizer for GrantAll {
    async fn request_capability(&self, _capability: &str) -> CapabilityGrant {
        CapabilityGrant::Granted
    }
}

struct DenyAll;

impl StorageAuthorizer for DenyAll {
    async fn request_capability(&self, _capability: &str) -> CapabilityGrant {
        CapabilityGrant::Denied
    }
}

struct PngSink(PathBuf);

impl OutputStore for PngSink {
    fn store(&self, image: Arc<RasterImage>) {
        encode_png(&image, &self.0).expect("test sink write");
    }
}

fn sample_image() -> RasterImage {
    let mut data = Vec::with_capacity(16 * 12 * 3);
    for y in 0..12u32 {
        for x in 0..16u32 {
            data.push((x * 16) as u8);
            data.push((y * 20) as u8);
            data.push(200);
        }
    }
    RasterImage::from_data(16, 12, PixelFormat::Rgb8, data).unwrap()
}

#[tokio::test]
async fn decode_edit_export_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    let output = dir.path().join("output.png");
    encode_png(&sample_image(), &input).unwrap();

    let mut session = EditSession::new();
    let mut updates = session.subscribe();

    session.set_source(decode_file(&input).unwrap()).unwrap();
    session.select_filter(FilterVariant::Sepia).unwrap();
    session.set_brightness(0.1).unwrap();

    let gate = ExportGate::new(GrantAll, PngSink(output.clone()));
    gate.export(&session).await.unwrap();

    let exported = decode_file(&output).unwrap();
    assert_eq!(exported.width, 16);
    assert_eq!(exported.height, 12);
    assert_eq!(
        exported.data,
        session.rendered_output().unwrap().data,
        "exported file must hold the session's rendered output"
    );

    // One notification per mutation, in order; the last one is the
    // rendered output that was exported.
    let mut count = 0;
    let mut last = None;
    while let Ok(update) = updates.try_recv() {
        count += 1;
        last = Some(update);
    }
    assert_eq!(count, 3);
    assert_eq!(last.unwrap().data, session.rendered_output().unwrap().data);
}

#[tokio::test]
async fn denied_export_writes_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output.png");

    let mut session = EditSession::new();
    session.set_source(sample_image()).unwrap();

    let gate = ExportGate::new(DenyAll, PngSink(output.clone()));
    let err = gate.export(&session).await.unwrap_err();
    assert_eq!(err, ExportError::NotAuthorized);
    assert!(!output.exists());
}

#[tokio::test]
async fn edits_never_mutate_the_source() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    encode_png(&sample_image(), &input).unwrap();

    let source = decode_file(&input).unwrap();
    let mut session = EditSession::new();
    session.set_source(source.clone()).unwrap();
    session.select_filter(FilterVariant::Noir).unwrap();

    assert_ne!(session.rendered_output().unwrap().data, source.data);
    assert_eq!(
        session.source().unwrap().data,
        source.data,
        "the source image itself is never mutated"
    );

    session.reset().unwrap();
    assert_eq!(session.rendered_output().unwrap().data, source.data);
}
