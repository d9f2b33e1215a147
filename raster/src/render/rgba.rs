use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Zeroable, Pod)]
pub struct RGBA {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl RGBA {
    /// Opaque black, the frame buffer's clear color.
    pub const BLACK: RGBA = RGBA::new(0, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque gray with all three channels set to `value`.
    pub const fn gray(value: u8) -> Self {
        Self { r: value, g: value, b: value, a: 255 }
    }
}
