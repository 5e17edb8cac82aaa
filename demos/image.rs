use dmtx::EncodeOptions;
use image::{GrayImage, Luma};

/// Write a PNG which only contains a Data Matrix.
///
/// The text and an optional encodation name are taken from the command
/// line, e.g. `cargo run --example image -- "Hello, World!" c40`.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Width and height in pixels of one module in the image.
    const N: usize = 5;

    let mut args = std::env::args().skip(1);
    let text = args.next().unwrap_or_else(|| "Hello, World!".into());
    let mut options = EncodeOptions::default();
    if let Some(name) = args.next() {
        options = options.encodation_name(&name)?;
    }

    let symbol = dmtx::encode_str(&text, &options)?;

    // one module of quiet zone on each side
    let width = ((symbol.width() + 2) * N) as u32;
    let height = ((symbol.height() + 2) * N) as u32;
    let mut image = GrayImage::from_pixel(width, height, Luma([255]));
    for (x, y) in symbol.pixels() {
        for i in 0..N {
            for j in 0..N {
                let x_i = (x + 1) * N + j;
                let y_j = (y + 1) * N + i;
                image.put_pixel(x_i as u32, y_j as u32, Luma([0]));
            }
        }
    }

    image.save("data_matrix.png")?;
    println!("{:?} written to data_matrix.png", symbol);
    Ok(())
}
