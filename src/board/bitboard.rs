//! Bitset over the cells of a square board

/// One bit per cell, row-major, packed into 64-bit words.
/// Sized at construction for `size * size` cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bitboard {
    bits: Vec<u64>,
    cells: usize,
}

impl Bitboard {
    /// Create empty bitboard with room for `cells` bits
    pub fn new(cells: usize) -> Self {
        Self {
            bits: vec![0; cells.div_ceil(64)],
            cells,
        }
    }

    /// Number of addressable cells
    #[inline]
    pub fn cells(&self) -> usize {
        self.cells
    }

    #[inline]
    pub fn set(&mut self, idx: usize) {
        debug_assert!(idx < self.cells);
        self.bits[idx / 64] |= 1u64 << (idx % 64);
    }

    #[inline]
    pub fn clear(&mut self, idx: usize) {
        debug_assert!(idx < self.cells);
        self.bits[idx / 64] &= !(1u64 << (idx % 64));
    }

    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        idx < self.cells && (self.bits[idx / 64] >> (idx % 64)) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    /// Bitwise union of two boards of the same shape
    pub fn union(&self, other: &Bitboard) -> Bitboard {
        debug_assert_eq!(self.cells, other.cells);
        Bitboard {
            bits: self.bits.iter().zip(&other.bits).map(|(a, b)| a | b).collect(),
            cells: self.cells,
        }
    }

    /// Iterate over set bit indices in ascending order
    pub fn iter_ones(&self) -> BitIter<'_> {
        BitIter {
            bits: &self.bits,
            cells: self.cells,
            word_idx: 0,
            current_word: self.bits.first().copied().unwrap_or(0),
            invert: false,
        }
    }

    /// Iterate over clear bit indices in ascending order
    pub fn iter_zeros(&self) -> BitIter<'_> {
        BitIter {
            bits: &self.bits,
            cells: self.cells,
            word_idx: 0,
            current_word: self.bits.first().map_or(0, |w| !w),
            invert: true,
        }
    }
}

/// Iterator over set (or clear) bits of a Bitboard
pub struct BitIter<'a> {
    bits: &'a [u64],
    cells: usize,
    word_idx: usize,
    current_word: u64,
    invert: bool,
}

impl Iterator for BitIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current_word == 0 {
            self.word_idx += 1;
            if self.word_idx >= self.bits.len() {
                return None;
            }
            let word = self.bits[self.word_idx];
            self.current_word = if self.invert { !word } else { word };
        }

        let bit_pos = self.current_word.trailing_zeros() as usize;
        let idx = self.word_idx * 64 + bit_pos;
        self.current_word &= self.current_word - 1;

        // Padding bits past the last cell end the iteration
        if idx < self.cells {
            Some(idx)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let mut bb = Bitboard::new(100);
        bb.set(0);
        bb.set(64);
        bb.set(99);
        assert!(bb.get(0) && bb.get(64) && bb.get(99));
        assert_eq!(bb.count(), 3);
        bb.clear(64);
        assert!(!bb.get(64));
        assert_eq!(bb.count(), 2);
    }

    #[test]
    fn test_iter_ones_ascending() {
        let mut bb = Bitboard::new(130);
        for idx in [129, 3, 70, 64] {
            bb.set(idx);
        }
        let ones: Vec<usize> = bb.iter_ones().collect();
        assert_eq!(ones, vec![3, 64, 70, 129]);
    }

    #[test]
    fn test_iter_zeros_stops_at_cell_count() {
        let mut bb = Bitboard::new(25);
        for idx in 0..25 {
            if idx != 7 && idx != 24 {
                bb.set(idx);
            }
        }
        let zeros: Vec<usize> = bb.iter_zeros().collect();
        assert_eq!(zeros, vec![7, 24]);
    }

    #[test]
    fn test_iter_zeros_full_word_boundary() {
        let bb = Bitboard::new(64);
        assert_eq!(bb.iter_zeros().count(), 64);
        let bb = Bitboard::new(65);
        assert_eq!(bb.iter_zeros().count(), 65);
    }

    #[test]
    fn test_union() {
        let mut a = Bitboard::new(10);
        let mut b = Bitboard::new(10);
        a.set(1);
        b.set(2);
        let u = a.union(&b);
        assert_eq!(u.iter_ones().collect::<Vec<_>>(), vec![1, 2]);
        assert!(Bitboard::new(10).is_empty());
    }
}
