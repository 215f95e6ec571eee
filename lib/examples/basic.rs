/// Basic example: render a generated test image to the terminal
///
/// Draws a colored radial gradient and prints it with every charset in
/// ANSI 256-color mode.
use image::{DynamicImage, Rgb, RgbImage};
use image_ascii::{CHARSET_NAMES, ColorMode, RenderConfig, Renderer, process_image};

fn main() {
    println!("image-ascii - Basic Example");
    println!("===========================\n");

    let width = 320;
    let height = 200;
    let mut img = RgbImage::new(width, height);

    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let max_dist = (center_x * center_x + center_y * center_y).sqrt();

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center_x;
            let dy = y as f32 - center_y;
            let falloff = 1.0 - (dx * dx + dy * dy).sqrt() / max_dist;

            let r = (falloff * 255.0) as u8;
            let g = (x as f32 / width as f32 * 255.0) as u8;
            let b = (y as f32 / height as f32 * 255.0) as u8;
            img.put_pixel(x, y, Rgb([r, g, b]));
        }
    }
    let img = DynamicImage::ImageRgb8(img);

    println!("Created test image: {}x{}\n", width, height);

    let renderer = Renderer::default();
    for charset in CHARSET_NAMES {
        let config = RenderConfig {
            width: 60,
            charset: charset.to_string(),
            invert: false,
            color_mode: ColorMode::Ansi256,
        };

        match process_image(&img, &config, &renderer) {
            Ok(conversion) => {
                println!(
                    "charset '{}' ({}x{}):",
                    charset, conversion.output.grid_width, conversion.output.grid_height
                );
                println!("{}\n", conversion.output.text());
            }
            Err(e) => eprintln!("charset '{}' failed: {}", charset, e),
        }
    }
}
