use glam::Vec2;

use crate::color::{Hsla, Rgba};
use crate::error::{Error, Result};
use crate::render::{GradientStop, RenderSurface};

/// Software RGBA8 surface with straight-alpha source-over blending.
///
/// A zero-sized framebuffer is treated as detached: `begin_frame` reports it
/// unavailable until it is resized.
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba::TRANSPARENT; width as usize * height as usize],
        }
    }

    pub fn square(size: u32) -> Self {
        Self::new(size, size)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_available(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Resize and clear. A zero dimension detaches the surface.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels
            .resize(width as usize * height as usize, Rgba::TRANSPARENT);
    }

    pub fn clear(&mut self) {
        self.pixels.fill(Rgba::TRANSPARENT);
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Raw RGBA bytes, row-major, suitable for an `ImageData` upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Number of pixels with any coverage.
    pub fn painted(&self) -> usize {
        self.pixels.iter().filter(|p| p.a > 0).count()
    }

    fn blend(&mut self, x: u32, y: u32, src: [f32; 4]) {
        let a_src = src[3];
        if a_src <= 0.0 {
            return;
        }
        let idx = (y * self.width + x) as usize;
        let dst = self.pixels[idx].to_linear();
        let a_dst = dst[3];

        let a_out = a_src + a_dst * (1.0 - a_src);
        if a_out <= 0.0 {
            return;
        }
        let channel = |s: f32, d: f32| (s * a_src + d * a_dst * (1.0 - a_src)) / a_out;
        self.pixels[idx] = Rgba::from_linear([
            channel(src[0], dst[0]),
            channel(src[1], dst[1]),
            channel(src[2], dst[2]),
            a_out,
        ]);
    }

    /// Visit every pixel centre within `radius` of `center`, with the
    /// normalised distance and an anti-aliased edge coverage.
    fn for_each_in_disc(&mut self, center: Vec2, radius: f32, mut shade: impl FnMut(f32) -> [f32; 4]) {
        if radius <= 0.0 || !self.is_available() {
            return;
        }
        let x0 = (center.x - radius - 1.0).floor().max(0.0) as u32;
        let y0 = (center.y - radius - 1.0).floor().max(0.0) as u32;
        let x1 = ((center.x + radius + 1.0).ceil().max(0.0) as u32).min(self.width);
        let y1 = ((center.y + radius + 1.0).ceil().max(0.0) as u32).min(self.height);

        for y in y0..y1 {
            for x in x0..x1 {
                let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5).distance(center);
                let coverage = (radius - d + 0.5).clamp(0.0, 1.0);
                if coverage <= 0.0 {
                    continue;
                }
                let mut c = shade((d / radius).min(1.0));
                c[3] *= coverage;
                self.blend(x, y, c);
            }
        }
    }
}

/// Colour at `u` along `stops`, interpolated in straight-alpha RGBA.
fn sample_gradient(stops: &[GradientStop], u: f32) -> [f32; 4] {
    let Some(first) = stops.first() else {
        return [0.0; 4];
    };
    if u <= first.offset {
        return first.color.to_linear();
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if u <= b.offset {
            let span = (b.offset - a.offset).max(f32::EPSILON);
            let k = (u - a.offset) / span;
            let ca = a.color.to_linear();
            let cb = b.color.to_linear();
            return [
                ca[0] + (cb[0] - ca[0]) * k,
                ca[1] + (cb[1] - ca[1]) * k,
                ca[2] + (cb[2] - ca[2]) * k,
                ca[3] + (cb[3] - ca[3]) * k,
            ];
        }
    }
    stops[stops.len() - 1].color.to_linear()
}

impl RenderSurface for Framebuffer {
    fn is_ready(&self) -> bool {
        self.is_available()
    }

    fn begin_frame(&mut self) -> Result<Vec2> {
        if !self.is_available() {
            return Err(Error::SurfaceUnavailable);
        }
        self.clear();
        Ok(Vec2::new(self.width as f32, self.height as f32))
    }

    fn fill_radial_gradient(&mut self, center: Vec2, radius: f32, stops: &[GradientStop]) {
        self.for_each_in_disc(center, radius, |u| sample_gradient(stops, u));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Hsla) {
        let c = color.to_linear();
        self.for_each_in_disc(center, radius, |_| c);
    }
}
