//! Turns a pixel grid into a flat carrier, row major, left to right and top to bottom.

use std::ops::Range;
use std::thread::available_parallelism;

use image::{ImageBuffer, Pixel};
use log::{debug, warn};
use rayon::ThreadPoolBuilder;

use crate::carrier::RgbChannel;
use crate::error::SteganoError;
use crate::result::Result;

/// read access to the color channels of a 2D image
pub trait PixelGrid: Sync {
    /// `(width, height)`
    fn dimensions(&self) -> (u32, u32);

    /// red, green and blue of the pixel at `(x, y)`, in the native channel width
    fn rgb_at(&self, x: u32, y: u32) -> [u32; 3];
}

impl<P> PixelGrid for ImageBuffer<P, Vec<P::Subpixel>>
where
    P: Pixel + Sync,
    P::Subpixel: Into<u32> + Sync,
{
    fn dimensions(&self) -> (u32, u32) {
        ImageBuffer::dimensions(self)
    }

    fn rgb_at(&self, x: u32, y: u32) -> [u32; 3] {
        let [r, g, b] = self.get_pixel(x, y).to_rgb().0;
        [r.into(), g.into(), b.into()]
    }
}

/// Splits `0..height` into `n` contiguous spans, the first `height % n` of them get one row more.
///
/// `n == 0` is treated as 1.
pub fn split_rows(height: u32, n: usize) -> Vec<Range<u32>> {
    let n = u32::try_from(n).unwrap_or(u32::MAX).max(1);
    let base = height / n;
    let extra = height % n;

    let mut start = 0;
    (0..n)
        .map(|i| {
            let len = base + u32::from(i < extra);
            let span = start..start + len;
            start += len;
            span
        })
        .collect()
}

fn fill_rows<G: PixelGrid + ?Sized>(grid: &G, rows: Range<u32>, out: &mut [RgbChannel]) {
    let (width, _) = grid.dimensions();
    for (y, line) in rows.zip(out.chunks_mut(width as usize)) {
        for (x, pixel) in (0..width).zip(line.iter_mut()) {
            *pixel = RgbChannel::normalized(grid.rgb_at(x, y));
        }
    }
}

fn carrier_for<G: PixelGrid + ?Sized>(grid: &G) -> Result<Vec<RgbChannel>> {
    let (width, height) = grid.dimensions();
    if width == 0 || height == 0 {
        return Err(SteganoError::InvalidCarrier);
    }

    Ok(vec![RgbChannel::default(); width as usize * height as usize])
}

/// The number of threads actually started for `requested` workers on `height` rows.
///
/// It is at least 1, at most the available parallelism, and never more than one per row.
pub fn worker_count(requested: usize, height: u32) -> usize {
    let cores = available_parallelism().map(|n| n.get()).unwrap_or(1);
    let workers = if requested == 0 {
        warn!("0 workers requested for carrier extraction, using 1");
        1
    } else if requested > cores {
        warn!("{requested} workers requested for carrier extraction, using {cores}");
        cores
    } else {
        requested
    };

    workers.min((height as usize).max(1))
}

/// single pass extraction on the calling thread
pub fn extract_carrier<G: PixelGrid + ?Sized>(grid: &G) -> Result<Vec<RgbChannel>> {
    let mut carrier = carrier_for(grid)?;
    let (_, height) = grid.dimensions();
    fill_rows(grid, 0..height, &mut carrier);

    Ok(carrier)
}

/// Extraction on a pool of `workers` threads, adjusted by [`worker_count`].
///
/// Every worker owns a disjoint slice of the output for its row span,
/// the result is the same as [`extract_carrier`] for any number of workers.
pub fn extract_carrier_concurrent<G: PixelGrid + ?Sized>(
    grid: &G,
    workers: usize,
) -> Result<Vec<RgbChannel>> {
    let mut carrier = carrier_for(grid)?;
    let (width, height) = grid.dimensions();

    let workers = worker_count(workers, height);
    let spans = split_rows(height, workers);
    debug!("extracting {width}x{height} pixels with {workers} workers");

    let pool = ThreadPoolBuilder::new().num_threads(workers).build()?;
    pool.scope(|scope| {
        let mut rest = carrier.as_mut_slice();
        for span in spans {
            let (chunk, tail) = std::mem::take(&mut rest).split_at_mut(span.len() * width as usize);
            rest = tail;
            scope.spawn(move |_| fill_rows(grid, span, chunk));
        }
    });

    Ok(carrier)
}
