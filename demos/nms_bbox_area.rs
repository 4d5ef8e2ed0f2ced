use argh::FromArgs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use kornia_nms::{AreaNms, DEFAULT_OVERLAP_THRESHOLD, NmsConfig};

#[derive(FromArgs)]
/// Area-based non-maximum suppression application arguments
struct Args {
    /// path to a json file holding a list of [x1, y1, x2, y2] boxes
    #[argh(option)]
    boxes_path: PathBuf,

    /// the overlap threshold above which smaller boxes are suppressed
    #[argh(option, default = "DEFAULT_OVERLAP_THRESHOLD")]
    overlap_threshold: f32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = argh::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let nms = AreaNms::new(NmsConfig {
        overlap_threshold: args.overlap_threshold,
    });

    // read the boxes as a list of coordinate records
    let boxes: Vec<Vec<f32>> = serde_json::from_reader(std::fs::File::open(&args.boxes_path)?)?;

    let keep = nms.suppress(&boxes)?;

    println!("{}", serde_json::to_string(&keep)?);

    Ok(())
}
