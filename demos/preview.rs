//! Headless shading preview.
//!
//! Emulates the GPU compute dispatch on the CPU: the render target is
//! covered in 16x8 workgroup tiles bounded by the push-constant record, and
//! every in-bounds pixel is shaded with the Cook-Torrance BRDF. The result
//! is a metallic/roughness sphere chart written as a PNG.
//!
//! Run with:
//!   cargo run --example preview
//!   cargo run --example preview -- --width 1280 --height 720 --output chart.png

use clap::Parser;
use glam::Vec3;
use pbr_shading::{
    Light, Material, PushConstants, WORKGROUP_HEIGHT, WORKGROUP_WIDTH, compute_pbr,
};
use std::time::Instant;

#[derive(Parser)]
#[command(about = "Render a metallic/roughness sphere chart with the Cook-Torrance BRDF")]
struct Args {
    /// Render target width in pixels
    #[arg(long, default_value_t = 960)]
    width: u32,

    /// Render target height in pixels
    #[arg(long, default_value_t = 640)]
    height: u32,

    /// Output PNG path
    #[arg(long, default_value = "preview.png")]
    output: String,

    /// Chart cells per axis: metallic sweeps across, roughness sweeps down
    #[arg(long, default_value_t = 6)]
    grid: u32,
}

const AMBIENT: f32 = 0.03;

/// Shade one pixel of the sphere chart. Returns None between spheres.
fn shade(pc: &PushConstants, grid: u32, light: &Light, x: u32, y: u32) -> Option<Vec3> {
    let cell_w = pc.render_width as f32 / grid as f32;
    let cell_h = pc.render_height as f32 / grid as f32;
    let col = ((x as f32 / cell_w) as u32).min(grid - 1);
    let row = ((y as f32 / cell_h) as u32).min(grid - 1);

    // Pixel position inside its cell, remapped to [-1, 1].
    let u = (x as f32 - col as f32 * cell_w) / cell_w * 2.0 - 1.0;
    let v = (y as f32 - row as f32 * cell_h) / cell_h * 2.0 - 1.0;
    let rr = u * u + v * v;
    if rr > 1.0 {
        return None;
    }

    // Orthographic unit sphere centered in the cell.
    let normal = Vec3::new(u, -v, (1.0 - rr).sqrt());
    let world_pos = normal;
    let view = Vec3::Z;

    // Metallic sweeps across columns, roughness down rows. Roughness is kept
    // away from zero; the GGX lobe degenerates to a delta there.
    let step = 1.0 / (grid - 1).max(1) as f32;
    let material = Material::default()
        .with_albedo(Vec3::new(0.8, 0.16, 0.12))
        .with_metallic(col as f32 * step)
        .with_roughness((row as f32 * step).max(0.05));

    let l = (light.position - world_pos).normalize();
    let n_dot_l = normal.dot(l).max(0.0);
    let direct = compute_pbr(
        normal,
        view,
        l,
        material.albedo,
        material.metallic,
        material.roughness,
        light.radiance(),
        n_dot_l,
    );
    Some(Vec3::splat(AMBIENT) * material.albedo + direct)
}

/// Reinhard tonemap plus gamma encoding.
fn encode(color: Vec3) -> image::Rgb<u8> {
    let mapped = (color / (color + Vec3::ONE)).powf(1.0 / 2.2);
    image::Rgb([
        (mapped.x * 255.0) as u8,
        (mapped.y * 255.0) as u8,
        (mapped.z * 255.0) as u8,
    ])
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let grid = args.grid.max(1);

    let pc = PushConstants::new(args.width, args.height);
    let (groups_x, groups_y) = pc.workgroup_count();
    log::info!(
        "dispatching {}x{} workgroups over a {}x{} target",
        groups_x,
        groups_y,
        pc.render_width,
        pc.render_height
    );

    let light = Light::new(
        Vec3::new(2.0, 2.0, 4.0),
        Vec3::new(-0.5, -0.5, -1.0),
        Vec3::ONE,
        std::f32::consts::FRAC_PI_3,
        3.0,
    );

    let mut img = image::RgbImage::new(args.width, args.height);
    let start = Instant::now();

    // Walk the target the way the kernel would: one 16x8 tile per
    // workgroup, skipping pixels outside the push-constant bounds.
    for gy in 0..groups_y {
        for gx in 0..groups_x {
            for ly in 0..WORKGROUP_HEIGHT {
                for lx in 0..WORKGROUP_WIDTH {
                    let x = gx * WORKGROUP_WIDTH + lx;
                    let y = gy * WORKGROUP_HEIGHT + ly;
                    if x >= pc.render_width || y >= pc.render_height {
                        continue;
                    }
                    let color = shade(&pc, grid, &light, x, y).unwrap_or(Vec3::splat(0.02));
                    img.put_pixel(x, y, encode(color));
                }
            }
        }
    }

    log::info!(
        "shaded {} pixels in {:?}",
        pc.render_width as u64 * pc.render_height as u64,
        start.elapsed()
    );
    img.save(&args.output)?;
    log::info!("wrote {}", args.output);
    Ok(())
}
