use clap::Parser;
use log::{debug, error, info};

use yolococo::{coco_to_yolo, CocoToYoloArgs};

fn main() {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = CocoToYoloArgs::parse();

    info!("Starting COCO to YOLO conversion...");
    debug!("Images directory: {}", args.images.display());

    match coco_to_yolo(&args.coco, &args.output) {
        Ok(stats) => {
            stats.print_summary();
            info!("Conversion process completed successfully.");
        }
        Err(e) => {
            error!("Failed to convert {}: {}", args.coco.display(), e);
            std::process::exit(1);
        }
    }
}
