//! RGB / RGBA color values with componentwise arithmetic.
//!
//! Channels are unclamped f32: negative values and values above 1.0 are
//! legal (HDR inputs, arithmetic intermediates). Equality is exact, no
//! epsilon.

use std::ops::{Add, Index, IndexMut, Mul, Sub};

use bytemuck::{Pod, Zeroable};

/// Threshold below which every channel counts as black.
const BLACK_EPSILON: f32 = 1e-2;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Color3 {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color3 {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// All three channels set to `v`.
    pub const fn splat(v: f32) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// True if every channel magnitude is below a fixed 1e-2 epsilon.
    pub fn is_black(&self) -> bool {
        self.r.abs() < BLACK_EPSILON && self.g.abs() < BLACK_EPSILON && self.b.abs() < BLACK_EPSILON
    }
}

impl Add for Color3 {
    type Output = Self;
    fn add(self, c: Self) -> Self {
        Self::new(self.r + c.r, self.g + c.g, self.b + c.b)
    }
}

impl Sub for Color3 {
    type Output = Self;
    fn sub(self, c: Self) -> Self {
        Self::new(self.r - c.r, self.g - c.g, self.b - c.b)
    }
}

impl Mul for Color3 {
    type Output = Self;
    fn mul(self, c: Self) -> Self {
        Self::new(self.r * c.r, self.g * c.g, self.b * c.b)
    }
}

impl Mul<f32> for Color3 {
    type Output = Self;
    fn mul(self, f: f32) -> Self {
        Self::new(self.r * f, self.g * f, self.b * f)
    }
}

impl Index<usize> for Color3 {
    type Output = f32;
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.r,
            1 => &self.g,
            2 => &self.b,
            _ => panic!("color component index out of range: {i}"),
        }
    }
}

impl IndexMut<usize> for Color3 {
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.r,
            1 => &mut self.g,
            2 => &mut self.b,
            _ => panic!("color component index out of range: {i}"),
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Color4 {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color4 {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// All four channels set to `v`.
    pub const fn splat(v: f32) -> Self {
        Self {
            r: v,
            g: v,
            b: v,
            a: v,
        }
    }

    /// True if every channel magnitude (alpha included) is below 1e-2.
    pub fn is_black(&self) -> bool {
        self.r.abs() < BLACK_EPSILON
            && self.g.abs() < BLACK_EPSILON
            && self.b.abs() < BLACK_EPSILON
            && self.a.abs() < BLACK_EPSILON
    }
}

impl Add for Color4 {
    type Output = Self;
    fn add(self, c: Self) -> Self {
        Self::new(self.r + c.r, self.g + c.g, self.b + c.b, self.a + c.a)
    }
}

impl Sub for Color4 {
    type Output = Self;
    fn sub(self, c: Self) -> Self {
        Self::new(self.r - c.r, self.g - c.g, self.b - c.b, self.a - c.a)
    }
}

impl Mul for Color4 {
    type Output = Self;
    fn mul(self, c: Self) -> Self {
        Self::new(self.r * c.r, self.g * c.g, self.b * c.b, self.a * c.a)
    }
}

impl Mul<f32> for Color4 {
    type Output = Self;
    fn mul(self, f: f32) -> Self {
        Self::new(self.r * f, self.g * f, self.b * f, self.a * f)
    }
}

impl Index<usize> for Color4 {
    type Output = f32;
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.r,
            1 => &self.g,
            2 => &self.b,
            3 => &self.a,
            _ => panic!("color component index out of range: {i}"),
        }
    }
}

impl IndexMut<usize> for Color4 {
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.r,
            1 => &mut self.g,
            2 => &mut self.b,
            3 => &mut self.a,
            _ => panic!("color component index out of range: {i}"),
        }
    }
}
