//! Decoding of embedded compressed textures into texel payloads.

use std::path::Path;

use anyhow::{Context, Result};
use image::ImageFormat;

use scene::{Texel, Texture};

/// Decode a compressed texture payload into row-major texels. The format is
/// picked from the hint, with content sniffing as a fallback for blank or
/// unknown hints. A texture that already holds texels passes through
/// unchanged.
pub fn decode_embedded(tex: &Texture) -> Result<Texture> {
    let Some(bytes) = tex.compressed_bytes() else {
        return Ok(tex.clone());
    };

    let img = match hint_format(tex) {
        Some(format) => image::load_from_memory_with_format(bytes, format),
        None => image::load_from_memory(bytes),
    }
    .with_context(|| {
        format!(
            "Failed to decode embedded texture (hint '{}', {} bytes)",
            tex.format_hint_str(),
            bytes.len()
        )
    })?;

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    let texels: Vec<Texel> = rgba
        .pixels()
        .map(|p| Texel::new(p[0], p[1], p[2], p[3]))
        .collect();

    log::info!(
        "Decoded embedded '{}' texture: {}x{} texels",
        tex.format_hint_str(),
        width,
        height
    );
    Ok(Texture::from_texels(width, height, texels))
}

fn hint_format(tex: &Texture) -> Option<ImageFormat> {
    if tex.check_format("png") {
        Some(ImageFormat::Png)
    } else if tex.check_format("jpg") {
        Some(ImageFormat::Jpeg)
    } else {
        None
    }
}

/// Wrap raw image file bytes as a compressed texture, deriving the format
/// hint from the file extension ("jpeg" normalizes to the short "jpg"
/// spelling).
pub fn compressed_from_file_bytes(path: &Path, bytes: Vec<u8>) -> Texture {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let ext = if ext.eq_ignore_ascii_case("jpeg") {
        "jpg"
    } else {
        ext
    };
    Texture::from_compressed(ext, bytes)
}

/// Procedural checkerboard texture, white and gray 8x8 squares. Handy as a
/// placeholder and in demos.
pub fn checker(size: u32) -> Texture {
    let mut texels = Vec::with_capacity((size * size) as usize);
    for y in 0..size {
        for x in 0..size {
            let v = if ((x / 8) + (y / 8)) % 2 == 0 { 255 } else { 128 };
            texels.push(Texel::new(v, v, v, 255));
        }
    }
    Texture::from_texels(size, size, texels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use corelib::Color4;
    use std::io::Cursor;

    fn png_bytes() -> Vec<u8> {
        let mut img = image::RgbaImage::new(2, 1);
        img.put_pixel(0, 0, image::Rgba([255, 0, 0, 255]));
        img.put_pixel(1, 0, image::Rgba([0, 128, 255, 0]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("encode png");
        bytes
    }

    #[test]
    fn decodes_png_payload_with_bgra_swizzle() {
        let tex = Texture::from_compressed("png", png_bytes());
        assert_eq!(tex.height(), 0);

        let decoded = decode_embedded(&tex).expect("decode");
        assert_eq!((decoded.width(), decoded.height()), (2, 1));
        let texels = decoded.texels().expect("texels");
        assert_eq!(texels[0], Texel::new(255, 0, 0, 255));
        assert_eq!((texels[0].b, texels[0].r), (0, 255));
        assert_eq!(texels[1], Texel::new(0, 128, 255, 0));
        assert_eq!(Color4::from(texels[0]), Color4::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn blank_hint_falls_back_to_sniffing() {
        let tex = Texture::from_compressed("", png_bytes());
        let decoded = decode_embedded(&tex).expect("decode");
        assert_eq!(decoded.width(), 2);
    }

    #[test]
    fn uncompressed_texture_passes_through() {
        let tex = Texture::from_texels(1, 1, vec![Texel::new(9, 8, 7, 6)]);
        let out = decode_embedded(&tex).expect("pass through");
        assert_eq!(out.texels(), tex.texels());
    }

    #[test]
    fn garbage_bytes_fail_with_context() {
        let tex = Texture::from_compressed("png", vec![0xde, 0xad, 0xbe, 0xef]);
        let err = decode_embedded(&tex).unwrap_err();
        assert!(format!("{err:#}").contains("hint 'png'"));
    }

    #[test]
    fn extension_derives_hint() {
        let tex = compressed_from_file_bytes(Path::new("skin.JPEG"), vec![1, 2, 3]);
        assert!(tex.check_format("jpg"));
        assert_eq!(tex.width(), 3);
    }

    #[test]
    fn checker_dimensions_and_pattern() {
        let tex = checker(16);
        assert_eq!((tex.width(), tex.height()), (16, 16));
        let texels = tex.texels().expect("texels");
        assert_eq!(texels[0], Texel::new(255, 255, 255, 255));
        assert_eq!(texels[8], Texel::new(128, 128, 128, 255));
    }
}
