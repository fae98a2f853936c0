use std::env;
use std::error::Error;

use log::info;

use triforge::prelude::*;

const WIDTH: u32 = 1024;
const HEIGHT: u32 = 1024;

/// Renders the built-in demo triangle to `tri.png`.
fn render_demo_triangle() -> Result<(), Box<dyn Error>> {
    let mut renderer = Renderer::new(WIDTH, HEIGHT);
    renderer.clear(colors::WHITE);

    let triangle = ScreenTriangle::new([
        ScreenVertex::new(Vec2::new(200.0, 200.0), 1.0, Vec3::new(255.0, 0.0, 0.0)),
        ScreenVertex::new(Vec2::new(700.0, 700.0), 1.0, Vec3::new(0.0, 0.0, 255.0)),
        ScreenVertex::new(Vec2::new(100.0, 600.0), 1.0, Vec3::new(0.0, 255.0, 0.0)),
    ]);
    renderer.draw_triangle(triangle);

    renderer.framebuffer().save("tri.png")?;
    info!("wrote tri.png");
    Ok(())
}

/// Loads an OBJ file and renders it to `model.png`.
fn render_model(path: &str) -> Result<(), Box<dyn Error>> {
    let model = Model::from_obj(path)?;
    info!("loaded '{}': {} meshes", model.name(), model.mesh_count());

    let mut renderer = Renderer::new(WIDTH, HEIGHT);
    renderer.clear(colors::BLACK);

    let camera = Camera::towards_neg_z(0.0);
    let projection = Projection::from_degrees(90.0, 1.0, 0.1, 100.0);
    // Tilt the model a little and push it in front of the camera.
    let transform = Mat4::translation(0.0, 0.0, -3.0)
        * Mat4::rotation_y(0.5)
        * Mat4::rotation_x(-0.4);

    for mesh in model.meshes() {
        mesh.validate()?;
        let stats = renderer.draw_mesh(mesh, &transform, &camera, &projection)?;
        info!(
            "{} triangles: {} drawn, {} rejected, {} degenerate",
            stats.triangles, stats.drawn, stats.rejected, stats.degenerate
        );
    }

    renderer.framebuffer().save("model.png")?;
    info!("wrote model.png");
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    match env::args().nth(1) {
        Some(path) => render_model(&path),
        None => render_demo_triangle(),
    }
}
