use anyhow::Result;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::path::Path;

pub struct Scaler {
    img: DynamicImage,
}

impl Scaler {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let img = ImageReader::open(path)?.decode()?;
        Ok(Self { img })
    }

    /// Scales the source to exactly `width` x `height` and writes a png.
    /// The smaller dimension is filled and the overflow cropped around the
    /// center, so the output never letterboxes.
    pub fn write<P: AsRef<Path>>(&self, path: P, width: u32, height: u32) -> Result<()> {
        self.img
            .resize_to_fill(width, height, FilterType::Triangle)
            .save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}
