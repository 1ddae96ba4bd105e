use mandelbrot_viewer::{PngFilePresenter, ViewerConfig, ViewerController};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = ViewerConfig::default();
    let controller = ViewerController::new(&config, PngFilePresenter::new())?;

    controller.write(&config.snapshot_dir.join("mandelbrot.png"))?;

    Ok(())
}
