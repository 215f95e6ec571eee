use image::{GrayImage, Luma, RgbImage};

use crate::error::AsciiError;

/// RGB pixels plus the aligned grayscale plane, one cell per grid position
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    rgb: RgbImage,
    gray: GrayImage,
}

impl PixelBuffer {
    /// Pair an RGB image with its grayscale plane
    ///
    /// Both planes must have identical dimensions.
    pub fn new(rgb: RgbImage, gray: GrayImage) -> Result<Self, AsciiError> {
        if rgb.dimensions() != gray.dimensions() {
            return Err(AsciiError::InvalidDimension(format!(
                "rgb plane is {:?} but gray plane is {:?}",
                rgb.dimensions(),
                gray.dimensions()
            )));
        }
        Ok(Self { rgb, gray })
    }

    /// Build from RGB, deriving grayscale with ITU-R 601-2 luma
    pub fn from_rgb(rgb: RgbImage) -> Self {
        let gray = GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
            Luma([luma_601(rgb.get_pixel(x, y).0)])
        });
        Self { rgb, gray }
    }

    pub fn width(&self) -> u32 {
        self.rgb.width()
    }

    pub fn height(&self) -> u32 {
        self.rgb.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.rgb.dimensions()
    }

    /// RGB triple at `(x, y)`
    pub fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        self.rgb.get_pixel(x, y).0
    }

    /// Grayscale intensity at `(x, y)`
    pub fn intensity(&self, x: u32, y: u32) -> u8 {
        self.gray.get_pixel(x, y)[0]
    }
}

/// ITU-R 601-2 luma, `L = R*299/1000 + G*587/1000 + B*114/1000`
///
/// 16.16 fixed point with rounding; the weights sum to exactly 1 << 16.
pub fn luma_601(rgb: [u8; 3]) -> u8 {
    let [r, g, b] = rgb.map(u32::from);
    ((r * 19595 + g * 38470 + b * 7471 + 0x8000) >> 16) as u8
}
