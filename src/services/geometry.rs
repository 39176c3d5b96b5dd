use crate::domain::{AssetKind, ResizeMode};
use image::imageops::{self, FilterType};
use image::DynamicImage;
use tracing::warn;

pub(crate) const RESAMPLE_FILTER: FilterType = FilterType::CatmullRom;

/// Fits a fetched image to the dimensions Lutris expects for `kind`.
///
/// Icons are always shrunk to fit their bounding box, whatever `mode` says.
pub fn apply(kind: AssetKind, mode: ResizeMode, image: DynamicImage) -> DynamicImage {
    if kind == AssetKind::Icon {
        let (max_width, max_height) = kind.target_size();
        return thumbnail(image, max_width, max_height);
    }

    match mode {
        ResizeMode::None => image,
        ResizeMode::Stretch => stretch(&image, kind),
        ResizeMode::Crop => crop_and_scale(&image, kind),
    }
}

fn stretch(image: &DynamicImage, kind: AssetKind) -> DynamicImage {
    let (width, height) = kind.target_size();
    image.resize_exact(width, height, RESAMPLE_FILTER)
}

fn crop_and_scale(image: &DynamicImage, kind: AssetKind) -> DynamicImage {
    let Some(crop) = kind.crop_box() else {
        return stretch(image, kind);
    };

    if let Some((width, height)) = kind.canonical_source_size() {
        if (image.width(), image.height()) != (width, height) {
            warn!(
                "{} source is {}x{}, crop box assumes {}x{}",
                kind,
                image.width(),
                image.height(),
                width,
                height
            );
        }
    }

    let mut cropped = DynamicImage::new(crop.width(), crop.height(), image.color());
    // Parts of the box outside the source stay black.
    imageops::replace(&mut cropped, image, -(crop.left as i64), -(crop.top as i64));
    stretch(&cropped, kind)
}

/// Largest size with the same aspect ratio that fits in the box. Never
/// enlarges.
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width <= max_width && height <= max_height {
        return (width, height);
    }

    let scale = f64::min(
        max_width as f64 / width as f64,
        max_height as f64 / height as f64,
    );
    let fitted_width = ((width as f64 * scale).round() as u32).clamp(1, max_width);
    let fitted_height = ((height as f64 * scale).round() as u32).clamp(1, max_height);
    (fitted_width, fitted_height)
}

pub fn thumbnail(image: DynamicImage, max_width: u32, max_height: u32) -> DynamicImage {
    let (width, height) = fit_within(image.width(), image.height(), max_width, max_height);
    if (width, height) == (image.width(), image.height()) {
        image
    } else {
        image.resize_exact(width, height, RESAMPLE_FILTER)
    }
}
