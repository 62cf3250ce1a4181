use rand::Rng;

/// Fisher–Yates shuffle: walk from the last index down to 1 and swap each
/// slot with a uniformly chosen slot at or before it.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// A uniformly chosen element, `None` for an empty slice.
pub fn pick<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.random_range(0..items.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut items: Vec<u32> = (0..100).collect();
        shuffle(&mut items, &mut rng);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_same_seed_same_order() {
        let mut a: Vec<u32> = (0..20).collect();
        let mut b = a.clone();
        shuffle(&mut a, &mut StdRng::seed_from_u64(42));
        shuffle(&mut b, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_reaches_every_position() {
        // Over many runs the first element should land in every slot.
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = [false; 5];
        for _ in 0..500 {
            let mut items = [0, 1, 2, 3, 4];
            shuffle(&mut items, &mut rng);
            let slot = items.iter().position(|&x| x == 0).unwrap();
            seen[slot] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_shuffle_tiny_inputs() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut empty: Vec<u8> = Vec::new();
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut one = vec![9];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, vec![9]);
    }

    #[test]
    fn test_pick() {
        let mut rng = StdRng::seed_from_u64(5);
        let empty: [u8; 0] = [];
        assert!(pick(&empty, &mut rng).is_none());

        let items = [10, 20, 30];
        for _ in 0..50 {
            let choice = pick(&items, &mut rng).unwrap();
            assert!(items.contains(choice));
        }
    }
}
