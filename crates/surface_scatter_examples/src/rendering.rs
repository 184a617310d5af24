//! Top-down PNG rendering of a footprint and its placements.
use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use glam::{Vec2, Vec3};
use image::{Rgb, RgbImage};
use surface_scatter::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber honoring `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// How a template is drawn.
#[derive(Debug, Clone, Copy)]
pub struct TemplateStyle {
    pub color: [u8; 3],
    /// Radius in pixels at scale 1.0.
    pub radius: i32,
}

impl Default for TemplateStyle {
    fn default() -> Self {
        Self {
            color: [235, 235, 235],
            radius: 3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    pub background: [u8; 3],
    pub outline: [u8; 3],
    /// Empty border around the footprint in pixels.
    pub margin: u32,
    styles: HashMap<TemplateId, TemplateStyle>,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32)) -> Self {
        Self {
            image_size,
            background: [26, 26, 26],
            outline: [60, 200, 90],
            margin: 16,
            styles: HashMap::new(),
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_outline(mut self, outline: [u8; 3]) -> Self {
        self.outline = outline;
        self
    }

    pub fn set_template_style(&mut self, id: impl Into<TemplateId>, style: TemplateStyle) {
        self.styles.insert(id.into(), style);
    }

    fn style_for(&self, id: &str) -> TemplateStyle {
        self.styles.get(id).copied().unwrap_or_default()
    }
}

struct Projection {
    min: Vec2,
    size: Vec2,
    margin: f32,
    width: f32,
    height: f32,
}

impl Projection {
    fn new(area: &AreaSpec, rc: &RenderConfig) -> Self {
        let (min, max) = area.bounds();
        Self {
            min,
            size: (max - min).max(Vec2::splat(f32::EPSILON)),
            margin: rc.margin as f32,
            width: rc.image_size.0 as f32,
            height: rc.image_size.1 as f32,
        }
    }

    /// World (x, z) to pixel coordinates, +z pointing up in the image.
    fn to_px(&self, x: f32, z: f32) -> (i32, i32) {
        let u = (x - self.min.x) / self.size.x;
        let v = (z - self.min.y) / self.size.y;
        let px = self.margin + u * (self.width - 2.0 * self.margin);
        let py = self.height - self.margin - v * (self.height - 2.0 * self.margin);
        (px.round() as i32, py.round() as i32)
    }
}

fn put(img: &mut RgbImage, x: i32, y: i32, color: [u8; 3]) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, Rgb(color));
    }
}

fn draw_line(img: &mut RgbImage, from: (i32, i32), to: (i32, i32), color: [u8; 3]) {
    let (mut x0, mut y0) = from;
    let (x1, y1) = to;
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put(img, x0, y0, color);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

fn draw_disk(img: &mut RgbImage, center: (i32, i32), radius: i32, color: [u8; 3]) {
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                put(img, center.0 + dx, center.1 + dy, color);
            }
        }
    }
}

/// Draws the footprint outline and one disk per placement, with a heading tick
/// showing the placement's forward axis.
pub fn render_placements_to_png(
    placements: &[Placement],
    area: &AreaSpec,
    rc: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (w, h) = rc.image_size;
    let mut img = RgbImage::from_pixel(w, h, Rgb(rc.background));
    let proj = Projection::new(area, rc);

    let corners = area.outline(0.0);
    for i in 0..corners.len() {
        let a = corners[i];
        let b = corners[(i + 1) % corners.len()];
        draw_line(&mut img, proj.to_px(a.x, a.z), proj.to_px(b.x, b.z), rc.outline);
    }

    for p in placements {
        let style = rc.style_for(&p.template_id);
        let radius = ((style.radius as f32) * p.scale).round().max(1.0) as i32;
        let center = proj.to_px(p.position.x, p.position.z);
        draw_disk(&mut img, center, radius, style.color);

        let forward = p.rotation * Vec3::Z;
        let tip = proj.to_px(
            p.position.x + forward.x * radius as f32 * 2.0 * proj.size.x / w.max(1) as f32,
            p.position.z + forward.z * radius as f32 * 2.0 * proj.size.y / h.max(1) as f32,
        );
        draw_line(&mut img, center, tip, rc.background);
    }

    let path = path.as_ref();
    img.save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!("Wrote {} placements to {}.", placements.len(), path.display());
    Ok(())
}
