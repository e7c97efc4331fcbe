mod store;

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use revela_core::params::FilterVariant;
use revela_session::export::{CapabilityGrant, ExportGate};
use revela_session::session::EditSession;

use store::{PngStore, StaticAuthorizer};

const USAGE: &str = "usage: revela <input> <output.png> [filter] [brightness] [contrast]";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "edit failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let input = PathBuf::from(args.next().ok_or(USAGE)?);
    let output = PathBuf::from(args.next().ok_or(USAGE)?);
    let filter = match args.next() {
        Some(name) => {
            FilterVariant::from_name(&name).ok_or_else(|| format!("unknown filter: {name}"))?
        }
        None => FilterVariant::None,
    };
    let brightness: f32 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(0.0);
    let contrast: f32 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(1.0);

    let image = revela_codec::decode_file(&input)?;
    info!(
        width = image.width,
        height = image.height,
        filter = filter.name(),
        "loaded source image"
    );

    let mut session = EditSession::new();
    session.set_source(image)?;
    session.select_filter(filter)?;
    // The tone ranges are advisory; clamping is the caller's job.
    session.set_brightness(brightness.clamp(-1.0, 1.0))?;
    session.set_contrast(contrast.clamp(0.0, 4.0))?;

    let gate = ExportGate::new(
        StaticAuthorizer(CapabilityGrant::Granted),
        PngStore::new(output),
    );
    gate.export(&session).await?;
    Ok(())
}
