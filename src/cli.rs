// CLI layer: flag parsing and the single-invocation run flow. One
// image goes up, one reply comes back, the result is printed and
// optionally rendered to disk. Exactly one of `--file` / `--image-url`
// must be supplied; a missing endpoint URL never gets past clap, so no
// network I/O happens without one.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::api::ApiClient;
use crate::endpoint::TaskMode;
use crate::error::ClientError;
use crate::interpret::{interpret, InferenceResult};
use crate::render;
use crate::source::ImageSource;

#[derive(Parser, Debug)]
#[command(author, version, about = "Send an image to an inference endpoint and show the result")]
pub struct Args {
    /// Inference endpoint URL; its trailing path segment selects the
    /// task (classify / detect / segment)
    #[arg(short, long)]
    pub url: String,

    /// Local image filename, read from the --read-dir directory
    #[arg(short, long)]
    pub file: Option<String>,

    /// Remote image URL to download and submit instead of a local file
    #[arg(long)]
    pub image_url: Option<String>,

    /// Render the result (bounding box / segmentation overlay) to --out
    #[arg(short, long)]
    pub display: bool,

    /// Where rendered images are written
    #[arg(long, default_value = "result.png")]
    pub out: PathBuf,

    /// Directory local image files are read from
    #[arg(long, default_value = "Files")]
    pub read_dir: PathBuf,
}

/// Run one inference round trip. An unknown endpoint is reported and
/// the process exits cleanly; every other failure propagates as an
/// error.
pub fn run(args: Args) -> Result<()> {
    let mode = TaskMode::from_url(&args.url);
    if mode == TaskMode::Unknown {
        println!("Invalid Endpoint");
        return Ok(());
    }

    let api = ApiClient::new()?;
    let source = match (&args.file, &args.image_url) {
        (Some(file), None) => ImageSource::from_file(&args.read_dir.join(file))?,
        (None, Some(url)) => ImageSource::from_url(api.http(), url)?,
        _ => {
            return Err(ClientError::InvalidInput(
                "supply exactly one of --file or --image-url".into(),
            )
            .into())
        }
    };

    info!(url = %args.url, mode = ?mode, "running inference");
    let response = api.infer(&args.url, &source)?;
    let result = interpret(mode, &response)?;

    match result {
        InferenceResult::Classify { label } => {
            println!("Label: {label}");
        }
        InferenceResult::Detect { label, bbox } => {
            println!("Label: {label}");
            if args.display {
                let mut annotated = source.image().clone();
                render::draw_box(&mut annotated, &bbox);
                render::save(&annotated, &args.out)?;
            }
        }
        InferenceResult::Segment { labels, overlay } => {
            println!("Labels: {labels:?}");
            if args.display {
                render::save(&overlay, &args.out)?;
            }
        }
    }
    Ok(())
}
