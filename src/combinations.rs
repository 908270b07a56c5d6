/// Iterator over all k-element index combinations of `0..n`, in
/// lexicographic order, without repetition. Yields C(n, k) items.
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
        let k = self.indices.len();

        // Find the rightmost index that can still move right
        match (0..k).rev().find(|&i| self.indices[i] < self.n - (k - i)) {
            Some(i) => {
                self.indices[i] += 1;
                for j in (i + 1)..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => self.done = true,
        }

        Some(result)
    }
}

/// Iterator over all k-element multisets of `0..n` (combinations with
/// repetition) as non-decreasing index vectors. Yields C(n + k - 1, k) items.
pub struct Multisets {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Multisets {
    pub fn new(n: usize, k: usize) -> Self {
        Self { n, indices: vec![0; k], done: n == 0 && k > 0 }
    }
}

impl Iterator for Multisets {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.indices.clone();
        let k = self.indices.len();

        match (0..k).rev().find(|&i| self.indices[i] + 1 < self.n) {
            Some(i) => {
                let next = self.indices[i] + 1;
                for slot in &mut self.indices[i..] {
                    *slot = next;
                }
            }
            None => self.done = true,
        }

        Some(result)
    }
}

/// Binomial coefficient C(n, k).
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}
