//! This module contains utility functionality needed for this crate. Most
//! prominently, it contains the definition of the [DigitSet] used for storing
//! the candidate digits of a cell.

/// A set of the digits 1 to 9 that is implemented as a bit mask. Each digit is
/// represented by one bit in a 16-bit integer. This generally has better
/// performance than a `HashSet`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DigitSet {
    bits: u16
}

impl DigitSet {

    /// Creates a new, empty `DigitSet`.
    pub fn new() -> DigitSet {
        DigitSet {
            bits: 0
        }
    }

    /// Creates a new `DigitSet` that contains all digits from 1 to 9.
    pub fn full() -> DigitSet {
        DigitSet {
            bits: 0b11_1111_1110
        }
    }

    /// Creates a new `DigitSet` that contains only the given digit.
    ///
    /// # Arguments
    ///
    /// * `digit`: The only digit contained in the created set. Must be in the
    /// range `[1, 9]`.
    pub fn singleton(digit: u8) -> DigitSet {
        let mut set = DigitSet::new();
        set.insert(digit);
        set
    }

    /// Indicates whether this set contains the given digit.
    ///
    /// # Arguments
    ///
    /// * `digit`: The digit checked for containment in this set. Must be in
    /// the range `[1, 9]`.
    pub fn contains(&self, digit: u8) -> bool {
        debug_assert!((1..=9).contains(&digit));

        self.bits & (1u16 << digit) != 0
    }

    /// Inserts the given digit into this set, such that [DigitSet::contains]
    /// returns `true` for it afterwards. Returns `true` if the set was
    /// changed, that is, the digit was not contained before.
    ///
    /// # Arguments
    ///
    /// * `digit`: The digit to insert into this set. Must be in the range
    /// `[1, 9]`.
    pub fn insert(&mut self, digit: u8) -> bool {
        debug_assert!((1..=9).contains(&digit));

        let mask = 1u16 << digit;
        let inserted = self.bits & mask == 0;
        self.bits |= mask;
        inserted
    }

    /// Removes the given digit from this set, such that [DigitSet::contains]
    /// returns `false` for it afterwards. Returns `true` if the set was
    /// changed, that is, the digit was contained before.
    ///
    /// # Arguments
    ///
    /// * `digit`: The digit to remove from this set. Must be in the range
    /// `[1, 9]`.
    pub fn remove(&mut self, digit: u8) -> bool {
        debug_assert!((1..=9).contains(&digit));

        let mask = 1u16 << digit;
        let removed = self.bits & mask != 0;
        self.bits &= !mask;
        removed
    }

    /// Removes all digits from this set, such that it is empty afterwards.
    pub fn clear(&mut self) {
        self.bits = 0;
    }

    /// Returns an iterator over the digits contained in this set in ascending
    /// order.
    pub fn iter(&self) -> DigitSetIter {
        DigitSetIter {
            bits: self.bits
        }
    }

    /// Indicates whether this set is empty, that is, contains no digits.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns the number of digits contained in this set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }
}

/// An iterator over the content of a [DigitSet]. Yields digits in ascending
/// order.
pub struct DigitSetIter {
    bits: u16
}

impl Iterator for DigitSetIter {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.bits == 0 {
            None
        }
        else {
            let digit = self.bits.trailing_zeros() as u8;
            self.bits &= self.bits - 1;
            Some(digit)
        }
    }
}

/// Creates a new [DigitSet](crate::util::DigitSet) that contains the given
/// digits.
///
/// # Example
///
/// ```
/// use sudoku_census::digits;
///
/// let set = digits!(2, 4, 7);
///
/// assert!(set.contains(4));
/// assert!(!set.contains(5));
/// assert_eq!(3, set.len());
/// ```
#[macro_export]
macro_rules! digits {
    () => {
        $crate::util::DigitSet::new()
    };
    ($($digit:expr),+) => {
        {
            let mut set = $crate::util::DigitSet::new();
            $(set.insert($digit);)+
            set
        }
    };
}
