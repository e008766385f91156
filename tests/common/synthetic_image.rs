use raster_enhance::RasterBuffer;

/// Horizontal grayscale ramp from 0 at the left edge to 255 at the right.
pub fn gradient_gray(width: usize, height: usize) -> RasterBuffer {
    assert!(width > 1 && height > 0, "gradient needs at least two columns");
    let data: Vec<u8> = (0..width * height)
        .map(|i| ((i % width) * 255 / (width - 1)) as u8)
        .collect();
    RasterBuffer::from_raw(width, height, 1, data).expect("valid gradient buffer")
}

/// High-contrast RGB checkerboard alternating between two colors.
pub fn checkerboard_rgb(width: usize, height: usize, cell: usize) -> RasterBuffer {
    assert!(cell > 0, "cell size must be positive");
    let mut data = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            let dark = ((x / cell) + (y / cell)) & 1 == 0;
            if dark {
                data.extend_from_slice(&[32, 32, 32]);
            } else {
                data.extend_from_slice(&[220, 200, 180]);
            }
        }
    }
    RasterBuffer::from_raw(width, height, 3, data).expect("valid checkerboard buffer")
}

/// Constant-valued single-channel buffer.
pub fn uniform_gray(width: usize, height: usize, value: u8) -> RasterBuffer {
    RasterBuffer::from_raw(width, height, 1, vec![value; width * height])
        .expect("valid uniform buffer")
}
