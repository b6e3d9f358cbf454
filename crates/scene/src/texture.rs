//! Embedded texture payloads: packed texels or opaque compressed file bytes.

use bytemuck::{Pod, Zeroable};
use corelib::Color4;

/// One pixel in packed b,g,r,a byte order. The field order is the wire
/// layout; `#[repr(C)]` plus `Pod` lets consumers cast the texel buffer to
/// raw bytes and back.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Texel {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl Texel {
    /// Takes channels in the conventional r,g,b,a order and stores them
    /// swizzled.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }
}

impl From<Texel> for Color4 {
    fn from(t: Texel) -> Self {
        Color4::new(
            t.r as f32 / 255.0,
            t.g as f32 / 255.0,
            t.b as f32 / 255.0,
            t.a as f32 / 255.0,
        )
    }
}

/// Texture payload. Model files either embed decoded pixels or the raw bytes
/// of a compressed image file (png, jpg, ...) that the application must
/// decode itself.
#[derive(Clone, Debug)]
pub enum TextureData {
    /// `width * height` texels in row-major order.
    Texels {
        width: u32,
        height: u32,
        texels: Vec<Texel>,
    },
    /// Undecoded image file bytes.
    Compressed(Vec<u8>),
}

/// An embedded texture: a payload plus a 4-byte format hint.
///
/// The hint is the lowercase file extension of the compressed format,
/// null-padded, without a trailing dot, shortest spelling (`jpg`, never
/// `jpeg`). It is only meaningful for compressed payloads.
#[derive(Clone, Debug)]
pub struct Texture {
    format_hint: [u8; 4],
    data: TextureData,
}

impl Texture {
    /// Empty texture: zero dimensions, no payload, blank hint.
    pub fn new() -> Self {
        Self {
            format_hint: [0; 4],
            data: TextureData::Texels {
                width: 0,
                height: 0,
                texels: Vec::new(),
            },
        }
    }

    /// Decoded texture. The texel count must match the dimensions.
    pub fn from_texels(width: u32, height: u32, texels: Vec<Texel>) -> Self {
        assert_eq!(
            texels.len(),
            (width as usize) * (height as usize),
            "texel count doesn't match dimensions"
        );
        Self {
            format_hint: [0; 4],
            data: TextureData::Texels {
                width,
                height,
                texels,
            },
        }
    }

    /// Undecoded texture from raw image file bytes. `ext` becomes the format
    /// hint (see [`Texture::set_format_hint`]).
    pub fn from_compressed(ext: &str, bytes: Vec<u8>) -> Self {
        let mut tex = Self {
            format_hint: [0; 4],
            data: TextureData::Compressed(bytes),
        };
        tex.set_format_hint(ext);
        tex
    }

    /// Width in texels, or for compressed payloads the byte count.
    pub fn width(&self) -> u32 {
        match &self.data {
            TextureData::Texels { width, .. } => *width,
            TextureData::Compressed(bytes) => bytes.len() as u32,
        }
    }

    /// Height in texels; zero means the payload is compressed and `width()`
    /// counts bytes, not texels.
    pub fn height(&self) -> u32 {
        match &self.data {
            TextureData::Texels { height, .. } => *height,
            TextureData::Compressed(_) => 0,
        }
    }

    pub fn is_compressed(&self) -> bool {
        matches!(self.data, TextureData::Compressed(_))
    }

    pub fn data(&self) -> &TextureData {
        &self.data
    }

    /// Row-major texels, or `None` for a compressed payload.
    pub fn texels(&self) -> Option<&[Texel]> {
        match &self.data {
            TextureData::Texels { texels, .. } => Some(texels),
            TextureData::Compressed(_) => None,
        }
    }

    /// Raw image file bytes, or `None` for a decoded payload.
    pub fn compressed_bytes(&self) -> Option<&[u8]> {
        match &self.data {
            TextureData::Compressed(bytes) => Some(bytes),
            TextureData::Texels { .. } => None,
        }
    }

    pub fn format_hint(&self) -> &[u8; 4] {
        &self.format_hint
    }

    /// Hint as text, stripped of null padding. Empty if the hint is blank or
    /// not valid UTF-8.
    pub fn format_hint_str(&self) -> &str {
        let end = self
            .format_hint
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(self.format_hint.len());
        std::str::from_utf8(&self.format_hint[..end]).unwrap_or("")
    }

    /// Store `ext` as the format hint: leading dot stripped, lowercased,
    /// truncated to 3 bytes, null-padded.
    pub fn set_format_hint(&mut self, ext: &str) {
        let ext = ext.trim_start_matches('.');
        let mut hint = [0u8; 4];
        for (i, b) in ext.bytes().take(3).enumerate() {
            hint[i] = b.to_ascii_lowercase();
        }
        self.format_hint = hint;
    }

    /// Compare the format hint against `s`, looking at 3 bytes at most.
    /// Example inputs: "jpg", "png".
    pub fn check_format(&self, s: &str) -> bool {
        let s = s.as_bytes();
        for i in 0..3 {
            let h = self.format_hint[i];
            if h != s.get(i).copied().unwrap_or(0) {
                return false;
            }
            if h == 0 {
                break;
            }
        }
        true
    }
}

impl Default for Texture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn texel_to_color4_boundaries() {
        assert_eq!(
            Color4::from(Texel::new(255, 0, 255, 0)),
            Color4::new(1.0, 0.0, 1.0, 0.0)
        );
        assert_eq!(
            Color4::from(Texel::new(0, 255, 0, 255)),
            Color4::new(0.0, 1.0, 0.0, 1.0)
        );
    }

    #[test]
    fn texel_stores_bgra() {
        let t = Texel::new(1, 2, 3, 4);
        assert_eq!((t.b, t.g, t.r, t.a), (3, 2, 1, 4));
        assert_eq!(bytemuck::bytes_of(&t), &[3, 2, 1, 4]);
    }

    #[test]
    fn check_format_matches_hint() {
        let tex = Texture::from_compressed("jpg", vec![0xff, 0xd8]);
        assert!(tex.check_format("jpg"));
        assert!(!tex.check_format("png"));
    }

    #[test]
    fn format_hint_is_normalized() {
        let tex = Texture::from_compressed(".PNG", Vec::new());
        assert_eq!(tex.format_hint(), b"png\0");
        assert_eq!(tex.format_hint_str(), "png");
    }

    #[test]
    fn compressed_width_counts_bytes() {
        let tex = Texture::from_compressed("jpg", vec![0u8; 2048]);
        assert_eq!(tex.height(), 0);
        assert_eq!(tex.width(), 2048);
        assert!(tex.is_compressed());
        assert!(tex.texels().is_none());
        assert_eq!(tex.compressed_bytes().map(<[u8]>::len), Some(2048));
    }

    #[test]
    fn decoded_width_counts_texels() {
        let tex = Texture::from_texels(2, 3, vec![Texel::default(); 6]);
        assert_eq!((tex.width(), tex.height()), (2, 3));
        assert!(!tex.is_compressed());
    }

    #[test]
    #[should_panic(expected = "doesn't match dimensions")]
    fn mismatched_texel_count_panics() {
        let _ = Texture::from_texels(4, 4, vec![Texel::default(); 15]);
    }

    #[test]
    fn empty_texture_defaults() {
        let tex = Texture::new();
        assert_eq!((tex.width(), tex.height()), (0, 0));
        assert_eq!(tex.format_hint(), &[0; 4]);
    }
}
