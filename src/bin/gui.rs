fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    mandelbrot_zoom::run_gui()
}
