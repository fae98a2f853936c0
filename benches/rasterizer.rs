use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use triforge::math::vec2::Vec2;
use triforge::math::vec3::Vec3;
use triforge::render::{rasterize, FillRule, Renderer, ScreenTriangle, ScreenVertex};

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

fn screen_triangle(points: [Vec2; 3]) -> ScreenTriangle {
    ScreenTriangle::new([
        ScreenVertex::new(points[0], 1.0, Vec3::new(255.0, 0.0, 0.0)),
        ScreenVertex::new(points[1], 2.0, Vec3::new(0.0, 255.0, 0.0)),
        ScreenVertex::new(points[2], 3.0, Vec3::new(0.0, 0.0, 255.0)),
    ])
}

fn small_triangle() -> [Vec2; 3] {
    [
        Vec2::new(100.0, 100.0),
        Vec2::new(120.0, 100.0),
        Vec2::new(110.0, 120.0),
    ]
}

fn medium_triangle() -> [Vec2; 3] {
    [
        Vec2::new(100.0, 100.0),
        Vec2::new(300.0, 100.0),
        Vec2::new(200.0, 300.0),
    ]
}

fn large_triangle() -> [Vec2; 3] {
    [
        Vec2::new(50.0, 50.0),
        Vec2::new(750.0, 100.0),
        Vec2::new(400.0, 550.0),
    ]
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");

    for (name, points) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        // Coverage only: the raw edge-function scan with an empty visitor.
        group.bench_with_input(BenchmarkId::new("coverage", name), &points, |b, points| {
            b.iter(|| {
                let mut covered = 0u32;
                rasterize(
                    black_box(points),
                    BUFFER_WIDTH,
                    BUFFER_HEIGHT,
                    FillRule::Inclusive,
                    |_, _, _| covered += 1,
                );
                covered
            });
        });

        // Full path: interpolation, depth test, and framebuffer writes.
        group.bench_with_input(BenchmarkId::new("composite", name), &points, |b, points| {
            let mut renderer = Renderer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
            b.iter(|| {
                renderer.clear(0xFF000000);
                renderer.draw_triangle(black_box(screen_triangle(*points)));
            });
        });
    }

    group.finish();
}

fn benchmark_many_triangles(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_triangles");

    // Generate a grid of small triangles
    let triangles: Vec<ScreenTriangle> = (0..20)
        .flat_map(|row| {
            (0..20).map(move |col| {
                let x = col as f32 * 40.0;
                let y = row as f32 * 30.0;
                screen_triangle([
                    Vec2::new(x, y),
                    Vec2::new(x + 35.0, y),
                    Vec2::new(x + 17.0, y + 25.0),
                ])
            })
        })
        .collect();

    group.bench_function("composite_400_triangles", |b| {
        let mut renderer = Renderer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
        b.iter(|| {
            renderer.clear(0xFF000000);
            for tri in &triangles {
                renderer.draw_triangle(black_box(*tri));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_single_triangle, benchmark_many_triangles);
criterion_main!(benches);
