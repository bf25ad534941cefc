use clap::Parser;
use log::{error, info};

use yolococo::{yolo_to_coco, YoloSource, YoloToCocoArgs};

fn main() {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = YoloToCocoArgs::parse();

    let source = YoloSource {
        labels_dir: &args.yolo_annotations,
        images_dir: &args.images_dir,
        image_ext: &args.image_ext,
        categories: &args.categories,
    };

    info!("Starting YOLO to COCO conversion...");
    match yolo_to_coco(&source, &args.output_json) {
        Ok(stats) => {
            stats.print_summary();
            info!("COCO conversion process completed successfully.");
        }
        Err(e) => {
            error!("Failed to convert {}: {}", args.yolo_annotations.display(), e);
            std::process::exit(1);
        }
    }
}
