use glam::Vec3;

/// Linear-ish RGB triple built from 0xRRGGBB literals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb(pub Vec3);

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Rgb(Vec3::new(r, g, b))
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xff) as f32 / 255.0;
        let g = ((hex >> 8) & 0xff) as f32 / 255.0;
        let b = (hex & 0xff) as f32 / 255.0;
        Rgb(Vec3::new(r, g, b))
    }

    pub fn to_hex(&self) -> u32 {
        let c = (self.0.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
        ((c.x as u32) << 16) | ((c.y as u32) << 8) | c.z as u32
    }

    /// `#rrggbb` for CSS sinks.
    pub fn css(&self) -> String {
        format!("#{:06x}", self.to_hex())
    }

    pub fn to_array(&self) -> [f32; 3] {
        self.0.to_array()
    }
}
