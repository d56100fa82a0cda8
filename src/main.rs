use log::info;

const FRAME_SIZE: u32 = 400;
const LOW_RESOLUTION_FRAMES: u32 = 60;
const OUTPUT_PATH: &str = "output/mandelbrot_zoom.ppm";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let presenter = mandelbrot_zoom::PpmFilePresenter::new();
    let renderer = mandelbrot_zoom::ZoomRenderer::new();
    let mut controller =
        mandelbrot_zoom::ZoomController::new(presenter, renderer, FRAME_SIZE, FRAME_SIZE);

    info!(
        "Rendering {} low resolution frames at {}x{}",
        LOW_RESOLUTION_FRAMES, FRAME_SIZE, FRAME_SIZE
    );

    for _ in 0..LOW_RESOLUTION_FRAMES {
        controller.tick(false);
    }

    controller.tick(true);

    info!(
        "Zoom width {:e}, max iterations {}, last frame took {:?}",
        controller.renderer().zoom_width(),
        controller.renderer().max_iterations(),
        controller.last_frame_duration().unwrap_or_default()
    );

    std::fs::create_dir_all("output")?;
    controller.write(OUTPUT_PATH)?;

    Ok(())
}
