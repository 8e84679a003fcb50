//! Colour handling: the HSL palette, depth-aware shading and conversion to
//! the framebuffer's RGBA pixels.

use bytemuck::{Pod, Zeroable};

/// Hue in degrees, saturation and lightness in percent, alpha in [0,1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub a: f32,
}

impl Hsla {
    pub const fn new(h: f32, s: f32, l: f32, a: f32) -> Self {
        Self { h, s, l, a }
    }

    /// Convert to straight-alpha RGB components in [0,1].
    pub fn to_linear(self) -> [f32; 4] {
        let h = self.h.rem_euclid(360.0) / 360.0;
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let l = (self.l / 100.0).clamp(0.0, 1.0);
        let a = self.a.clamp(0.0, 1.0);

        if s == 0.0 {
            return [l, l, l, a];
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        [
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
            a,
        ]
    }

    pub fn to_rgba(self) -> Rgba {
        Rgba::from_linear(self.to_linear())
    }
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Framebuffer pixel: 4 bytes, straight alpha.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba { r: 0, g: 0, b: 0, a: 0 };

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_linear(c: [f32; 4]) -> Self {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
        Self::new(q(c[0]), q(c[1]), q(c[2]), q(c[3]))
    }

    pub fn to_linear(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// Cherry palette the particles draw their base colour from.
pub const PALETTE: [Hsla; 5] = [
    Hsla::new(346.0, 84.0, 50.0, 1.0),
    Hsla::new(350.0, 89.0, 60.0, 1.0),
    Hsla::new(353.0, 96.0, 72.0, 1.0),
    Hsla::new(355.0, 100.0, 82.0, 1.0),
    Hsla::new(340.0, 82.0, 58.0, 1.0),
];

/// Palette entry with a slow per-particle hue wobble and a lightness boost
/// for near particles. Out-of-range indices use the first entry.
pub fn shade(color_index: u8, id: u32, clock: f64, depth: f32, wobble: f32, depth_lightness: f32) -> Hsla {
    let base = PALETTE
        .get(color_index as usize)
        .copied()
        .unwrap_or(PALETTE[0]);
    let hue = base.h + (clock + id as f64 * 0.025).sin() as f32 * wobble;
    Hsla::new(hue, base.s, base.l + depth * depth_lightness, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hues() {
        assert_eq!(Hsla::new(0.0, 100.0, 50.0, 1.0).to_rgba(), Rgba::new(255, 0, 0, 255));
        assert_eq!(Hsla::new(120.0, 100.0, 50.0, 1.0).to_rgba(), Rgba::new(0, 255, 0, 255));
        assert_eq!(Hsla::new(240.0, 100.0, 50.0, 0.0).to_rgba(), Rgba::new(0, 0, 255, 0));
    }

    #[test]
    fn test_grey_and_clamping() {
        assert_eq!(Hsla::new(10.0, 0.0, 50.0, 1.0).to_rgba(), Rgba::new(128, 128, 128, 255));
        // lightness above 100% saturates to white
        assert_eq!(Hsla::new(346.0, 84.0, 130.0, 2.0).to_rgba(), Rgba::new(255, 255, 255, 255));
    }

    #[test]
    fn test_shade_depth_brightens() {
        let far = shade(0, 3, 0.0, 0.0, 4.0, 10.0);
        let near = shade(0, 3, 0.0, 1.0, 4.0, 10.0);
        assert!(near.l > far.l);
        assert_eq!(near.l - far.l, 10.0);
        // wobble stays within ±4 degrees of the palette hue
        for step in 0..100 {
            let c = shade(2, 17, step as f64 * 0.1, 0.5, 4.0, 10.0);
            assert!((c.h - PALETTE[2].h).abs() <= 4.0 + 1e-4);
        }
    }

    #[test]
    fn test_rgba_is_four_bytes() {
        assert_eq!(std::mem::size_of::<Rgba>(), 4);
        let px = [Rgba::new(1, 2, 3, 4)];
        let bytes: &[u8] = bytemuck::cast_slice(&px);
        assert_eq!(bytes, &[1, 2, 3, 4]);
    }
}
