//! Shared k-means clustering used by the KMeans, Optimized and Quantized
//! selectors (spec.md §4.3, §9 design note: deterministic seeding only,
//! no randomness source, so the same cell always clusters identically).

use img2art_data::{Cell, Rgb};

const ITERATIONS: usize = 10;

/// Lloyd's algorithm over a cell's 64 pixels, seeded deterministically
/// by evenly spaced sample indices (never by a random draw) so results
/// are bit-identical across runs (spec.md §9, §8).
pub fn kmeans_centers(cell: &Cell, k: usize) -> Vec<Rgb> {
    let pixels = cell.pixels();
    let k = k.clamp(1, pixels.len());

    let mut centers: Vec<(f64, f64, f64)> = (0..k)
        .map(|i| {
            let idx = i * pixels.len() / k;
            let p = pixels[idx];
            (f64::from(p.r), f64::from(p.g), f64::from(p.b))
        })
        .collect();

    for _ in 0..ITERATIONS {
        let mut sums = vec![(0.0f64, 0.0f64, 0.0f64, 0u32); k];

        for &p in pixels {
            let mut best = 0;
            let mut best_dist = f64::MAX;
            for (i, &(cr, cg, cb)) in centers.iter().enumerate() {
                let dr = f64::from(p.r) - cr;
                let dg = f64::from(p.g) - cg;
                let db = f64::from(p.b) - cb;
                let dist = dr * dr + dg * dg + db * db;
                if dist < best_dist {
                    best_dist = dist;
                    best = i;
                }
            }
            let s = &mut sums[best];
            s.0 += f64::from(p.r);
            s.1 += f64::from(p.g);
            s.2 += f64::from(p.b);
            s.3 += 1;
        }

        for (center, sum) in centers.iter_mut().zip(sums.iter()) {
            if sum.3 > 0 {
                let n = f64::from(sum.3);
                *center = (sum.0 / n, sum.1 / n, sum.2 / n);
            }
            // empty cluster: leave the center where it was rather than
            // reseeding from randomness.
        }
    }

    centers
        .into_iter()
        .map(|(r, g, b)| {
            Rgb::new(
                r.round().clamp(0.0, 255.0) as u8,
                g.round().clamp(0.0, 255.0) as u8,
                b.round().clamp(0.0, 255.0) as u8,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_cell_converges_to_single_color_regardless_of_k() {
        let cell = Cell::new([Rgb::new(50, 60, 70); 64]);
        for center in kmeans_centers(&cell, 3) {
            assert_eq!(center, Rgb::new(50, 60, 70));
        }
    }

    #[test]
    fn two_cluster_cell_separates_into_two_centers() {
        let mut pixels = [Rgb::BLACK; 64];
        for p in pixels.iter_mut().take(32) {
            *p = Rgb::WHITE;
        }
        let cell = Cell::new(pixels);
        let centers = kmeans_centers(&cell, 2);
        assert_eq!(centers.len(), 2);
        assert!(centers.contains(&Rgb::BLACK));
        assert!(centers.contains(&Rgb::WHITE));
    }

    #[test]
    fn clustering_is_deterministic_across_calls() {
        let mut pixels = [Rgb::BLACK; 64];
        for (i, p) in pixels.iter_mut().enumerate() {
            *p = Rgb::new((i * 3) as u8, (i * 5) as u8, (i * 7) as u8);
        }
        let cell = Cell::new(pixels);
        assert_eq!(kmeans_centers(&cell, 4), kmeans_centers(&cell, 4));
    }

    #[test]
    fn k_is_clamped_to_pixel_count() {
        let cell = Cell::new([Rgb::BLACK; 64]);
        assert_eq!(kmeans_centers(&cell, 0).len(), 1);
        assert_eq!(kmeans_centers(&cell, 1000).len(), 64);
    }
}
