//! Permutation enumeration for the Leibniz determinant formula.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn flip(self) -> Self {
        match self {
            Parity::Even => Parity::Odd,
            Parity::Odd => Parity::Even,
        }
    }

    /// Parity of a permutation of `0..n` from its inversion count.
    pub fn of(permutation: &[usize]) -> Self {
        let mut parity = Parity::Even;
        for (i, a) in permutation.iter().enumerate() {
            for b in &permutation[i + 1..] {
                if a > b {
                    parity = parity.flip();
                }
            }
        }
        parity
    }
}

/// All permutations of `0..n` with their parity, in Heap's order.
///
/// Successive permutations differ by a single transposition, so the parity
/// alternates. Yields `n!` items; `n == 0` yields the empty permutation once.
#[derive(Debug, Clone)]
pub struct Permutations {
    current: Vec<usize>,
    counters: Vec<usize>,
    position: usize,
    parity: Parity,
    started: bool,
}

impl Permutations {
    pub fn new(n: usize) -> Self {
        Self {
            current: (0..n).collect(),
            counters: vec![0; n],
            position: 1,
            parity: Parity::Even,
            started: false,
        }
    }
}

impl Iterator for Permutations {
    type Item = (Vec<usize>, Parity);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return Some((self.current.clone(), self.parity));
        }
        let n = self.current.len();
        while self.position < n {
            let i = self.position;
            if self.counters[i] < i {
                if i % 2 == 0 {
                    self.current.swap(0, i);
                } else {
                    self.current.swap(self.counters[i], i);
                }
                self.counters[i] += 1;
                self.position = 1;
                self.parity = self.parity.flip();
                return Some((self.current.clone(), self.parity));
            }
            self.counters[i] = 0;
            self.position += 1;
        }
        None
    }
}
