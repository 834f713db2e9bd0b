//! Display surface for annotated frames.
//!
//! Converts each presented BGR frame to an egui `ColorImage` and uploads it
//! into a single texture, replacing the previous content.

use egui::{Color32, ColorImage, TextureHandle, TextureOptions, Vec2};
use vision::{Frame, FrameSink};

const TEXTURE_NAME: &str = "live_frame";

/// Wraps RGB pixel data as an egui image
pub fn rgb_to_color_image(width: usize, height: usize, rgb_pixels: &[u8]) -> ColorImage {
    let pixels: Vec<Color32> = rgb_pixels
        .chunks_exact(3)
        .map(|rgb| Color32::from_rgb(rgb[0], rgb[1], rgb[2]))
        .collect();

    ColorImage {
        size: [width, height],
        pixels,
        source_size: Vec2::new(width as f32, height as f32),
    }
}

/// Texture-backed [`FrameSink`]
pub struct TextureSink {
    ctx: egui::Context,
    texture: Option<TextureHandle>,
}

impl TextureSink {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx, texture: None }
    }

    /// Most recently presented frame, if any
    pub fn texture(&self) -> Option<&TextureHandle> {
        self.texture.as_ref()
    }

    /// Forgets the last frame so the next live session starts blank
    pub fn clear(&mut self) {
        self.texture = None;
    }
}

impl FrameSink for TextureSink {
    fn present(&mut self, frame: &Frame) -> vision::Result<()> {
        let (width, height, rgb) = frame.to_rgb()?;
        let image = rgb_to_color_image(width, height, &rgb);

        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::default()),
            None => {
                self.texture =
                    Some(self.ctx.load_texture(TEXTURE_NAME, image, TextureOptions::default()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opencv::core::{CV_8UC3, Mat, Scalar};

    #[test]
    fn test_rgb_to_color_image() {
        let image = rgb_to_color_image(2, 1, &[255, 0, 0, 0, 0, 255]);
        assert_eq!(image.size, [2, 1]);
        assert_eq!(image.pixels[0], Color32::from_rgb(255, 0, 0));
        assert_eq!(image.pixels[1], Color32::from_rgb(0, 0, 255));
    }

    #[test]
    fn test_present_replaces_texture() {
        let mut sink = TextureSink::new(egui::Context::default());
        assert!(sink.texture().is_none());

        let small = Mat::new_rows_cols_with_default(2, 3, CV_8UC3, Scalar::all(0.0)).unwrap();
        sink.present(&Frame::new(small)).unwrap();
        assert_eq!(sink.texture().unwrap().size(), [3, 2]);

        let large = Mat::new_rows_cols_with_default(4, 5, CV_8UC3, Scalar::all(0.0)).unwrap();
        sink.present(&Frame::new(large)).unwrap();
        assert_eq!(sink.texture().unwrap().size(), [5, 4]);

        sink.clear();
        assert!(sink.texture().is_none());
    }
}
