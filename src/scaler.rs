use rayon::iter::{IndexedParallelIterator, ParallelIterator};
use rayon::slice::ParallelSliceMut;

/// Stretch-blits the fixed-resolution internal framebuffer to the window
/// surface. Source coordinates are precomputed per destination row/column so
/// the per-frame cost is a pair of table lookups per pixel; rows are blitted
/// in parallel. Nearest-neighbour sampling keeps the flat-shaded slices
/// crisp.
pub struct Scaler {
    src_x: Vec<usize>,
    src_y: Vec<usize>,
}

fn axis_lut(dst: usize, src: usize) -> Vec<usize> {
    (0..dst)
        .map(|i| {
            let centre = (i as f32 + 0.5) * src as f32 / dst as f32;
            (centre as usize).min(src.saturating_sub(1))
        })
        .collect()
}

impl Scaler {
    pub fn new(dst_width: usize, dst_height: usize, src_width: usize, src_height: usize) -> Self {
        Self {
            src_x: axis_lut(dst_width, src_width),
            src_y: axis_lut(dst_height, src_height),
        }
    }

    pub fn blit(&self, dst: &mut [u32], dst_width: usize, src: &[u32], src_width: usize) {
        dst.par_chunks_mut(dst_width)
            .enumerate()
            .for_each(|(dst_row, row)| {
                let Some(&src_row) = self.src_y.get(dst_row) else {
                    return;
                };
                let line = &src[src_row * src_width..(src_row + 1) * src_width];
                for (dst_col, pixel) in row.iter_mut().enumerate() {
                    *pixel = line[self.src_x[dst_col]];
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_blit_copies_the_source() {
        let src: Vec<u32> = (0..12).collect();
        let mut dst = vec![0u32; 12];

        let scaler = Scaler::new(4, 3, 4, 3);
        scaler.blit(&mut dst, 4, &src, 4);
        assert_eq!(dst, src);
    }

    #[test]
    fn upscale_replicates_pixels() {
        // 2x2 source doubled to 4x4: each source pixel becomes a 2x2 block.
        let src = vec![1u32, 2, 3, 4];
        let mut dst = vec![0u32; 16];

        let scaler = Scaler::new(4, 4, 2, 2);
        scaler.blit(&mut dst, 4, &src, 2);

        #[rustfmt::skip]
        let expected = vec![
            1, 1, 2, 2,
            1, 1, 2, 2,
            3, 3, 4, 4,
            3, 3, 4, 4,
        ];
        assert_eq!(dst, expected);
    }

    #[test]
    fn downscale_samples_cell_centres() {
        let src: Vec<u32> = (0..16).collect();
        let mut dst = vec![0u32; 4];

        let scaler = Scaler::new(2, 2, 4, 4);
        scaler.blit(&mut dst, 2, &src, 4);

        // Centres of the four quadrants.
        assert_eq!(dst, vec![5, 7, 13, 15]);
    }
}
