use crate::{Error, Result};
use image::{DynamicImage, ImageFormat};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// A decoded image written to disk for the UI to present.
#[derive(Debug, Clone)]
pub struct RenderedImage {
    pub width: u32,
    pub height: u32,
    pub path: PathBuf,
}

pub struct ImageRenderer {
    output_dir: PathBuf,
}

impl ImageRenderer {
    pub fn new(output_dir: &Path) -> Result<Self> {
        fs::create_dir_all(output_dir)?;
        Ok(Self {
            output_dir: output_dir.to_path_buf(),
        })
    }

    fn save_png_sync(image: DynamicImage, path: PathBuf) -> Result<()> {
        image.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }

    /// Decode raw bytes and write them as a uniquely named PNG.
    ///
    /// Undecodable bytes (a malformed provider response) surface as an
    /// [`Error::Image`] for the caller to turn into a notice.
    pub async fn render(&self, image_data: &[u8]) -> Result<RenderedImage> {
        let img = image::load_from_memory(image_data)?;
        let (width, height) = (img.width(), img.height());

        let filename = format!("visao_{}.png", Uuid::new_v4());
        let path = self.output_dir.join(&filename);

        tokio::task::spawn_blocking({
            let path = path.clone();
            move || Self::save_png_sync(img, path)
        })
        .await
        .map_err(|e| Error::Invariant(format!("Image render task join error: {}", e)))??;

        tracing::debug!("Rendered image saved at: {}", path.display());

        Ok(RenderedImage {
            width,
            height,
            path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_image() -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(10, 10, image::Rgba([255, 0, 0, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[tokio::test]
    async fn test_render_writes_png_and_reports_dimensions() {
        let temp_dir = TempDir::new().unwrap();
        let renderer = ImageRenderer::new(temp_dir.path()).unwrap();

        let rendered = renderer.render(&create_test_image()).await.unwrap();

        assert_eq!(rendered.width, 10);
        assert_eq!(rendered.height, 10);
        assert!(rendered.path.exists());
        assert!(rendered.path.to_string_lossy().ends_with(".png"));

        let reloaded = image::open(&rendered.path).unwrap();
        assert_eq!(reloaded.width(), 10);
    }

    #[tokio::test]
    async fn test_render_generates_unique_filenames() {
        let temp_dir = TempDir::new().unwrap();
        let renderer = ImageRenderer::new(temp_dir.path()).unwrap();
        let data = create_test_image();

        let first = renderer.render(&data).await.unwrap();
        let second = renderer.render(&data).await.unwrap();

        assert_ne!(first.path, second.path);
    }

    #[tokio::test]
    async fn test_render_rejects_undecodable_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let renderer = ImageRenderer::new(temp_dir.path()).unwrap();

        let err = renderer.render(&[1, 2, 3, 4]).await.unwrap_err();
        assert!(matches!(err, Error::Image(_)));
    }
}
