use clap::Parser;
use log::{error, info};

use yolococo::video::OpenCvVideo;
use yolococo::{extract_frames, VideoToFramesArgs};

fn main() {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = VideoToFramesArgs::parse();

    info!("Extracting frames from {}...", args.video_path.display());
    let result = OpenCvVideo::open(&args.video_path)
        .and_then(|mut video| extract_frames(&mut video, &args.output_folder));

    if let Err(e) = result {
        error!("Failed to extract frames: {}", e);
        std::process::exit(1);
    }
}
