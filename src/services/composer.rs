use super::geometry::{fit_within, RESAMPLE_FILTER};
use image::{imageops, DynamicImage};

/// Share of the banner width a logo may cover.
pub const LOGO_MAX_WIDTH_RATIO: f64 = 0.7;

/// Where a logo of the given size ends up on the banner: `(x, y, width, height)`.
pub fn logo_placement(
    base_width: u32,
    base_height: u32,
    logo_width: u32,
    logo_height: u32,
) -> (i64, i64, u32, u32) {
    let max_width = ((base_width as f64 * LOGO_MAX_WIDTH_RATIO) as u32).max(1);
    let (width, height) =
        fit_within(logo_width, logo_height, max_width, base_height.max(1));
    let x = (base_width as i64 - width as i64) / 2;
    let y = (base_height as i64 - height as i64) / 2;
    (x, y, width, height)
}

/// Pastes `logo` centred over `base`, using the logo's alpha as the mask.
pub fn overlay_logo(base: DynamicImage, logo: DynamicImage) -> DynamicImage {
    let mut canvas = base.to_rgba8();
    let (x, y, width, height) =
        logo_placement(canvas.width(), canvas.height(), logo.width(), logo.height());
    let logo = if (width, height) == (logo.width(), logo.height()) {
        logo.to_rgba8()
    } else {
        logo.resize_exact(width, height, RESAMPLE_FILTER).to_rgba8()
    };

    imageops::overlay(&mut canvas, &logo, x, y);
    DynamicImage::ImageRgba8(canvas)
}
