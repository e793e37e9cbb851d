use tracing::{error, warn};
use tracing_subscriber::EnvFilter;
use trigon::{BoxError, Program, VertexBuffer};

fn main() {
    // Log to stderr, filtered with `RUST_LOG` (defaults to info)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), BoxError> {
    // 1. Window, context and function pointers
    let program = Program::builder("Graphic Window").build()?;

    // 2. Geometry
    let geometry = VertexBuffer::triangle(&program.gpu)?;

    // 3. Shaders. A broken pipeline is logged and drawn anyway
    let pipeline = program.gpu.new_pipeline("Triangle").create();
    if !pipeline.is_valid() {
        warn!("Triangle pipeline is invalid, frames will only be cleared");
    }

    // 4. Frame loop, 5. shutdown when it returns
    program.run_draw(move |frame| frame.draw(&pipeline, &geometry));

    Ok(())
}
