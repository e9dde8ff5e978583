use image::{GrayImage, Luma};

use crate::coords::Vec2;

/// 8-bit coverage bitmap positioned relative to a text line box.
///
/// `origin` is where the mask's top-left pixel sits, measured from the
/// top-left of the line box the text was laid out in.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageMask {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub origin: Vec2,
}

impl CoverageMask {
    pub fn new(width: u32, height: u32, origin: Vec2) -> Self {
        Self { width, height, data: vec![0; width as usize * height as usize], origin }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.data[self.index(x, y)]
    }

    /// Adds a glyph bitmap at integer offset `(x, y)` inside the mask, saturating.
    pub fn blit(&mut self, x: i32, y: i32, width: usize, height: usize, bitmap: &[u8]) {
        for row in 0..height {
            let ty = y + row as i32;
            if ty < 0 || ty >= self.height as i32 {
                continue;
            }
            for col in 0..width {
                let tx = x + col as i32;
                if tx < 0 || tx >= self.width as i32 {
                    continue;
                }
                let idx = self.index(tx as u32, ty as u32);
                self.data[idx] = self.data[idx].saturating_add(bitmap[row * width + col]);
            }
        }
    }

    /// Sum of all coverage values; zero means nothing would be drawn.
    pub fn total_coverage(&self) -> u64 {
        self.data.iter().map(|&v| v as u64).sum()
    }

    /// Gaussian-blurred copy, grown by `ceil(3σ)` on every side so the falloff is not clipped.
    ///
    /// `sigma <= 0` returns an unblurred clone.
    pub fn blurred(&self, sigma: f32) -> CoverageMask {
        if sigma <= 0.0 || !sigma.is_finite() {
            return self.clone();
        }
        let pad = (sigma * 3.0).ceil() as u32;
        let width = self.width + pad * 2;
        let height = self.height + pad * 2;

        let mut padded = GrayImage::new(width, height);
        for y in 0..self.height {
            for x in 0..self.width {
                padded.put_pixel(x + pad, y + pad, Luma([self.get(x, y)]));
            }
        }
        let blurred = image::imageops::blur(&padded, sigma);

        CoverageMask {
            width,
            height,
            data: blurred.into_raw(),
            origin: self.origin - Vec2::new(pad as f32, pad as f32),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blit_saturates_and_clips() {
        let mut mask = CoverageMask::new(2, 2, Vec2::zero());
        mask.blit(0, 0, 1, 1, &[200]);
        mask.blit(0, 0, 1, 1, &[200]);
        mask.blit(1, 1, 2, 2, &[10, 10, 10, 10]);
        assert_eq!(mask.get(0, 0), 255);
        assert_eq!(mask.get(1, 1), 10);
        assert_eq!(mask.get(5, 5), 0);
    }

    #[test]
    fn blur_grows_and_spreads() {
        let mut mask = CoverageMask::new(1, 1, Vec2::new(10.0, 10.0));
        mask.blit(0, 0, 1, 1, &[255]);
        let soft = mask.blurred(1.0);
        assert_eq!((soft.width, soft.height), (7, 7));
        assert_eq!(soft.origin, Vec2::new(7.0, 7.0));
        assert!(soft.get(3, 3) < 255);
        assert!(soft.get(2, 3) > 0);
    }

    #[test]
    fn index_does_not_overflow_u32() {
        // Data is never touched, so no allocation is needed.
        let mask = CoverageMask { width: 70_000, height: 70_000, data: Vec::new(), origin: Vec2::zero() };
        assert_eq!(mask.index(1, 69_999), 69_999usize * 70_000 + 1);
    }

    #[test]
    fn zero_sigma_is_identity() {
        let mask = CoverageMask::new(3, 2, Vec2::zero());
        assert_eq!(mask.blurred(0.0), mask);
    }
}
