// Image codec: converts between an in-memory RGB pixel grid and the
// data-URL style string the backend embeds in JSON replies. The format
// is `<mime-type>,<base64 payload>` where the payload is a compressed
// (JPEG by default) encoding of the pixels.

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{DynamicImage, ImageFormat, RgbImage};

use crate::error::ClientError;

/// MIME prefix used when encoding outbound images.
pub const JPEG_HEADER: &str = "image/jpeg";

/// Compress `image` as JPEG, base64-encode the bytes and prefix the
/// MIME header plus a comma. Pure transform; the caller keeps ownership
/// of the pixels.
pub fn encode(image: &RgbImage, header: &str) -> Result<String, ClientError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(ClientError::InvalidInput("cannot encode an empty image".into()));
    }
    let mut compressed = Vec::new();
    DynamicImage::ImageRgb8(image.clone())
        .write_to(&mut Cursor::new(&mut compressed), ImageFormat::Jpeg)
        .map_err(|e| ClientError::InvalidInput(format!("jpeg compression failed: {e}")))?;
    Ok(format!("{},{}", header, STANDARD.encode(&compressed)))
}

/// Invert `encode`: split on the first comma, discard the header,
/// base64-decode the payload and decompress it into pixels.
///
/// The decoded source may carry an alpha channel or a non-RGB channel
/// order; the result is always exactly 3 RGB channels. Round trips are
/// pixel-identical only up to lossy-compression artifacts; shape
/// (height, width, 3) is preserved exactly.
pub fn decode(data: &str) -> Result<RgbImage, ClientError> {
    let (_header, payload) = data
        .split_once(',')
        .ok_or_else(|| ClientError::CorruptPayload("missing ',' separator".into()))?;
    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| ClientError::CorruptPayload(format!("base64 decoding failed: {e}")))?;
    let decoded = image::load_from_memory(&bytes)
        .map_err(|e| ClientError::CorruptPayload(format!("unrecognizable image stream: {e}")))?;
    // to_rgb8 drops alpha and normalizes channel order in one step
    Ok(decoded.to_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn test_image(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x * 23 % 256) as u8, (y * 57 % 256) as u8, ((x + y) % 256) as u8])
        })
    }

    #[test]
    fn round_trip_preserves_shape() {
        let img = test_image(32, 24);
        let encoded = encode(&img, JPEG_HEADER).unwrap();
        let decoded = decode(&encoded).unwrap();
        assert_eq!(decoded.width(), 32);
        assert_eq!(decoded.height(), 24);
    }

    #[test]
    fn encoded_string_has_header_and_payload() {
        let encoded = encode(&test_image(8, 8), JPEG_HEADER).unwrap();
        let (header, payload) = encoded.split_once(',').unwrap();
        assert_eq!(header, "image/jpeg");
        assert!(STANDARD.decode(payload).is_ok());
    }

    #[test]
    fn empty_image_is_invalid_input() {
        let err = encode(&RgbImage::new(0, 0), JPEG_HEADER).unwrap_err();
        assert!(matches!(err, ClientError::InvalidInput(_)));
    }

    #[test]
    fn missing_comma_is_corrupt() {
        let err = decode("no separator here").unwrap_err();
        assert!(matches!(err, ClientError::CorruptPayload(_)));
    }

    #[test]
    fn bad_base64_is_corrupt() {
        let err = decode("image/jpeg,!!!not-base64!!!").unwrap_err();
        assert!(matches!(err, ClientError::CorruptPayload(_)));
    }

    #[test]
    fn unrecognizable_stream_is_corrupt() {
        let garbage = STANDARD.encode(b"definitely not a jpeg");
        let err = decode(&format!("image/jpeg,{garbage}")).unwrap_err();
        assert!(matches!(err, ClientError::CorruptPayload(_)));
    }

    #[test]
    fn alpha_channel_is_dropped() {
        // PNG keeps the alpha channel through compression; the decoder
        // must still hand back exactly 3 channels.
        let rgba = image::RgbaImage::from_pixel(10, 6, Rgba([120, 40, 200, 128]));
        let mut png = Vec::new();
        DynamicImage::ImageRgba8(rgba)
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .unwrap();
        let decoded = decode(&format!("image/png,{}", STANDARD.encode(&png))).unwrap();
        assert_eq!(decoded.width(), 10);
        assert_eq!(decoded.height(), 6);
        assert_eq!(decoded.get_pixel(0, 0).0, [120, 40, 200]);
    }
}
