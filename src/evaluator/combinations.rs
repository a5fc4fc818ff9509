/// Iterator over all k-element index combinations of `0..n`, in lexicographic order.
///
/// Over a slice sorted high-to-low the first combination yielded holds the
/// highest cards.
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self { n, indices: (0..k).collect(), done: k > n }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.indices.clone();

        // Find the rightmost index that can still move right.
        let k = self.indices.len();
        let mut i = k;
        loop {
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
            if self.indices[i] < self.n - k + i {
                self.indices[i] += 1;
                for j in (i + 1)..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
        }

        Some(result)
    }
}

/// Pick `k` items from `items`, yielding owned selections in lexicographic order.
pub fn choose<T: Copy>(items: &[T], k: usize) -> impl Iterator<Item = Vec<T>> + '_ {
    Combinations::new(items.len(), k).map(move |idx| idx.iter().map(|&i| items[i]).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_5_choose_3_count() {
        assert_eq!(Combinations::new(5, 3).count(), 10);
    }

    #[test]
    fn test_4_choose_2_sequence() {
        let combos: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
        assert_eq!(
            combos,
            vec![vec![0, 1], vec![0, 2], vec![0, 3], vec![1, 2], vec![1, 3], vec![2, 3]]
        );
    }

    #[test]
    fn test_k_equals_n_yields_once() {
        let combos: Vec<Vec<usize>> = Combinations::new(3, 3).collect();
        assert_eq!(combos, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_k_greater_than_n_is_empty() {
        assert_eq!(Combinations::new(2, 3).count(), 0);
    }

    #[test]
    fn test_zero_k_yields_empty_selection() {
        let combos: Vec<Vec<usize>> = Combinations::new(4, 0).collect();
        assert_eq!(combos, vec![Vec::<usize>::new()]);
    }

    #[test]
    fn test_choose_maps_items() {
        let items = ['a', 'b', 'c'];
        let picks: Vec<Vec<char>> = choose(&items, 2).collect();
        assert_eq!(picks, vec![vec!['a', 'b'], vec!['a', 'c'], vec!['b', 'c']]);
    }

    #[test]
    fn test_all_combinations_unique() {
        let combos: Vec<Vec<usize>> = Combinations::new(7, 5).collect();
        assert_eq!(combos.len(), 21);
        let mut sorted = combos.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 21);
    }
}
