use img2art_data::{ColorPair, Rgb};

/// Every ordered pair `(a, b)` for `a, b` in `colors`, including `a == b`.
/// Shared by the selectors whose contract is "emit every ordered pair"
/// over some derived color set (Optimized, Frequency, Quantized,
/// exhaustive variants).
pub fn all_ordered_pairs(colors: &[Rgb]) -> Vec<ColorPair> {
    let mut pairs = Vec::with_capacity(colors.len() * colors.len());
    for &a in colors {
        for &b in colors {
            pairs.push(ColorPair::new(a, b));
        }
    }
    pairs
}

/// Sorts and dedupes a color list, giving a deterministic, order-stable
/// candidate set before pairing.
pub fn dedup_sorted(mut colors: Vec<Rgb>) -> Vec<Rgb> {
    colors.sort_by_key(|c| (c.r, c.g, c.b));
    colors.dedup();
    colors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_ordered_pairs_counts_n_squared() {
        let colors = [Rgb::new(0, 0, 0), Rgb::new(1, 1, 1), Rgb::new(2, 2, 2)];
        assert_eq!(all_ordered_pairs(&colors).len(), 9);
    }

    #[test]
    fn dedup_sorted_removes_duplicates_deterministically() {
        let colors = vec![Rgb::new(2, 2, 2), Rgb::new(0, 0, 0), Rgb::new(2, 2, 2)];
        assert_eq!(dedup_sorted(colors), vec![Rgb::new(0, 0, 0), Rgb::new(2, 2, 2)]);
    }
}
