// Image source: the one place the submitted image comes from. It is
// constructed exactly once per invocation, from a local file or a
// remote URL, and then passed by reference to the uploader and the
// renderer so there is never any doubt which bytes were sent.

use std::fs;
use std::path::Path;

use image::RgbImage;
use reqwest::blocking::Client;
use tracing::debug;

use crate::error::ClientError;

/// The image selected for this invocation: the raw bytes as they will
/// be uploaded, plus the decoded pixels for local rendering.
#[derive(Debug)]
pub struct ImageSource {
    bytes: Vec<u8>,
    image: RgbImage,
    name: String,
}

impl ImageSource {
    /// Read an image from disk. A missing or undecodable file is a
    /// precondition failure, reported before any network activity.
    pub fn from_file(path: &Path) -> Result<Self, ClientError> {
        let bytes = fs::read(path)
            .map_err(|e| ClientError::InvalidInput(format!("cannot read {}: {e}", path.display())))?;
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("image.jpg")
            .to_string();
        debug!(file = %path.display(), size = bytes.len(), "loaded local image");
        Self::from_parts(bytes, name)
    }

    /// Download an image over HTTP. Uses the same blocking client as
    /// the inference request.
    pub fn from_url(client: &Client, url: &str) -> Result<Self, ClientError> {
        let response = client
            .get(url)
            .send()
            .map_err(|e| ClientError::InvalidInput(format!("cannot fetch {url}: {e}")))?;
        if !response.status().is_success() {
            return Err(ClientError::InvalidInput(format!(
                "cannot fetch {url}: status {}",
                response.status()
            )));
        }
        let bytes = response
            .bytes()
            .map_err(|e| ClientError::InvalidInput(format!("cannot fetch {url}: {e}")))?
            .to_vec();
        let name = url.rsplit('/').next().filter(|s| !s.is_empty()).unwrap_or("image.jpg").to_string();
        debug!(url, size = bytes.len(), "downloaded remote image");
        Self::from_parts(bytes, name)
    }

    fn from_parts(bytes: Vec<u8>, name: String) -> Result<Self, ClientError> {
        let image = image::load_from_memory(&bytes)
            .map_err(|e| ClientError::InvalidInput(format!("not a usable image: {e}")))?
            .to_rgb8();
        Ok(ImageSource { bytes, image, name })
    }

    /// The raw bytes exactly as they will be uploaded.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The decoded pixels, for drawing results onto.
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, RgbImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, image::Rgb([10, 20, 30]));
        let mut out = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
            .unwrap();
        out
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.png");
        std::fs::write(&path, png_bytes(12, 7)).unwrap();

        let source = ImageSource::from_file(&path).unwrap();
        assert_eq!(source.name(), "sample.png");
        assert_eq!(source.image().width(), 12);
        assert_eq!(source.image().height(), 7);
        assert_eq!(source.bytes(), &std::fs::read(&path).unwrap()[..]);
    }

    #[test]
    fn missing_file_is_invalid_input() {
        let err = ImageSource::from_file(Path::new("Files/no-such-file.jpg")).unwrap_err();
        assert!(matches!(err, ClientError::InvalidInput(_)));
    }

    #[test]
    fn undecodable_file_is_invalid_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-an-image.jpg");
        std::fs::write(&path, b"plain text").unwrap();

        let err = ImageSource::from_file(&path).unwrap_err();
        assert!(matches!(err, ClientError::InvalidInput(_)));
    }
}
