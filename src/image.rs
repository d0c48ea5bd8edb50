use crate::refs::{ObjectReferences, RefType};
use crate::PDFError;
use image::{ColorType, DynamicImage, GenericImageView, ImageFormat};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Pdf};
use std::path::{Path, PathBuf};

/// How the pixels of an image end up in the PDF
pub enum ImageSource {
    /// RGB JPEG files are copied into the PDF as-is
    Jpeg(PathBuf),
    /// Everything else is decoded and re-compressed
    Decoded(DynamicImage),
}

/// A raster image (logo, signature, ...) that can be painted on any page of a
/// [Document](crate::Document)
pub struct Image {
    pub source: ImageSource,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

struct EncodeOutput {
    filter: Filter,
    bytes: Vec<u8>,
    mask: Option<Vec<u8>>,
}

impl Image {
    /// Load an image from disk. The format is guessed from the file contents, except
    /// for TGA files which are recognised by their extension.
    pub fn new_from_disk<P: AsRef<Path>>(path: P) -> Result<Image, PDFError> {
        let path = path.as_ref();
        let is_tga = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("tga"))
            .unwrap_or(false);

        let data = std::fs::read(path)?;
        let format = if is_tga {
            ImageFormat::Tga
        } else {
            image::guess_format(&data)?
        };
        let image = image::load_from_memory_with_format(&data, format)?;

        if format == ImageFormat::Jpeg && image.color() == ColorType::Rgb8 {
            return Ok(Image {
                source: ImageSource::Jpeg(path.to_owned()),
                width: image.width(),
                height: image.height(),
            });
        }
        Ok(Self::new_decoded(image))
    }

    /// Wrap an image that has already been decoded, e.g. one generated in memory
    pub fn new_decoded(image: DynamicImage) -> Image {
        Image {
            width: image.width(),
            height: image.height(),
            source: ImageSource::Decoded(image),
        }
    }

    fn encode(&self) -> Result<EncodeOutput, PDFError> {
        match &self.source {
            ImageSource::Jpeg(path) => Ok(EncodeOutput {
                filter: Filter::DctDecode,
                bytes: std::fs::read(path)?,
                mask: None,
            }),
            ImageSource::Decoded(image) => {
                let level = CompressionLevel::DefaultLevel as u8;

                let mask = image.color().has_alpha().then(|| {
                    let alphas: Vec<u8> = image.pixels().map(|(_, _, p)| p.0[3]).collect();
                    compress_to_vec_zlib(&alphas, level)
                });

                Ok(EncodeOutput {
                    filter: Filter::FlateDecode,
                    bytes: compress_to_vec_zlib(image.to_rgb8().as_raw(), level),
                    mask,
                })
            }
        }
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        image_index: usize,
        writer: &mut Pdf,
    ) -> Result<(), PDFError> {
        let id = refs.gen(RefType::Image(image_index));
        let encoded = self.encode()?;
        let mask_id = encoded
            .mask
            .as_ref()
            .map(|_| refs.gen(RefType::ImageMask(image_index)));

        let mut xobject = writer.image_xobject(id, &encoded.bytes);
        xobject.filter(encoded.filter);
        xobject.width(self.width as i32);
        xobject.height(self.height as i32);
        xobject.color_space().device_rgb();
        xobject.bits_per_component(8);
        if let Some(mask_id) = mask_id {
            xobject.s_mask(mask_id);
        }
        xobject.finish();

        if let (Some(mask_id), Some(mask)) = (mask_id, encoded.mask.as_ref()) {
            let mut s_mask = writer.image_xobject(mask_id, mask);
            s_mask.filter(Filter::FlateDecode);
            s_mask.width(self.width as i32);
            s_mask.height(self.height as i32);
            s_mask.color_space().device_gray();
            s_mask.bits_per_component(8);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    #[test]
    fn alpha_channel_becomes_a_soft_mask() {
        let logo = RgbaImage::from_pixel(4, 2, Rgba([0, 128, 128, 200]));
        let image = Image::new_decoded(DynamicImage::ImageRgba8(logo));
        assert_eq!((image.width, image.height), (4, 2));

        let mut refs = ObjectReferences::new();
        let mut writer = Pdf::new();
        image.write(&mut refs, 0, &mut writer).expect("can write");
        assert!(refs.get(RefType::Image(0)).is_some());
        assert!(refs.get(RefType::ImageMask(0)).is_some());
    }

    #[test]
    fn opaque_images_have_no_mask() {
        let stamp = RgbImage::from_pixel(3, 3, Rgb([255, 0, 0]));
        let image = Image::new_decoded(DynamicImage::ImageRgb8(stamp));

        let mut refs = ObjectReferences::new();
        let mut writer = Pdf::new();
        image.write(&mut refs, 0, &mut writer).expect("can write");
        assert!(refs.get(RefType::ImageMask(0)).is_none());
    }

    #[test]
    fn missing_files_are_io_errors() {
        let result = Image::new_from_disk("does/not/exist.png");
        assert!(matches!(result, Err(PDFError::Io(_))));
    }
}
