use fglyph_renderer::{Error, Scene};

fn main() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    run().unwrap()
}

fn run() -> Result<(), Error> {
    let mut scene = Scene::builder("canvas")
        .translation([45.0, 150.0, 0.0])
        .rotation_degrees([40.0, 25.0, 325.0])
        .scale([1.0, 1.0, 1.0])
        .build()?;

    scene.render_frame()?;

    Ok(())
}
