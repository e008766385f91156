use raster_enhance::progress::Silent;
use raster_enhance::{convolve, histogram, RasterBuffer};

fn main() {
    // Demo stub: builds a synthetic gradient and runs one filter chain.
    let w = 64usize;
    let h = 48usize;
    let data: Vec<u8> = (0..w * h).map(|i| ((i % w) * 255 / (w - 1)) as u8).collect();
    let gradient = RasterBuffer::from_raw(w, h, 1, data).expect("valid synthetic buffer");

    let edges = convolve::laplacian_edge(&gradient, &mut Silent).expect("gradient is non-empty");
    let hist = histogram::histogram(&edges).expect("edge map is non-empty");
    println!(
        "edges={}x{} max_bin={} total={}",
        edges.width(),
        edges.height(),
        hist.max_count(),
        hist.total()
    );
}
