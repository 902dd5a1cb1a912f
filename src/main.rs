use mandelbrot_viewer::{
    write_ppm, ComputeJob, ComputeProvider, PixelBuffer, RayonProvider, RenderParams, Resolution,
    Viewport,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let provider = RayonProvider::new();

    println!("compute provider: {}", provider.name());
    for (index, device) in provider.devices().iter().enumerate() {
        println!(
            "  {}: {} ({} compute units)",
            index, device.name, device.parallel_compute_units
        );
    }

    let resolution = Resolution::new(700, 700)?;
    let job = ComputeJob {
        viewport: Viewport::default_view(),
        resolution,
        params: RenderParams::default(),
    };

    let mut frame = PixelBuffer::new(resolution);
    provider.dispatch(&job, &mut frame)?;

    std::fs::create_dir_all("output")?;
    write_ppm(&frame, "output/mandelbrot.ppm")?;

    Ok(())
}
