// Simple color struct, created from an unsigned 32 representing RRGGBBAA
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    // 0xRRGGBB plus an opacity in [0, 1], the way the page stylesheet names colors
    pub fn from_rgb(rgb: u32, opacity: f32) -> Color {
        let a = (opacity.max(0.0).min(1.0) * 255.0).round() as u8;
        Color::from_u32((rgb << 8) | a as u32)
    }

    // Normalized floats for a vec4 uniform
    pub fn to_gl(&self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}
