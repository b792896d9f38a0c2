//! Exhaustive enumeration of k-card hands.
//!
//! [`Combinations`] is a single odometer over k-element index combinations;
//! [`HandMasks`] drives it over the 52 card masks, caching the OR of every
//! prefix so each step only recomputes the positions that changed.

use std::ops::ControlFlow;

use crate::cards::DECK_SIZE;
use crate::hand::HandMask;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EnumerateError {
    #[error("cannot enumerate hands of {0} cards; expected 1 to 52")]
    InvalidSize(usize),
    #[error("no card with index {0} to anchor a shard")]
    InvalidShard(usize),
}

/// Number of k-element subsets of an n-element set.
///
/// ```
/// use holdem_hand::enumerate::binomial;
///
/// assert_eq!(binomial(52, 5), 2_598_960);
/// assert_eq!(binomial(52, 7), 133_784_560);
/// ```
pub const fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = if k > n - k { n - k } else { k };
    let mut result = 1u64;
    let mut i = 0;
    while i < k {
        result = result * (n - i) / (i + 1);
        i += 1;
    }
    result
}

/// All k-element combinations of `0..n` in lexicographic order.
///
/// The current combination is read with [`Combinations::current`] and the
/// odometer moves with [`Combinations::advance`], so no combination is
/// allocated.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self { n, indices: (0..k).collect(), done: k > n }
    }

    /// The current combination, or `None` once exhausted.
    pub fn current(&self) -> Option<&[usize]> {
        if self.done {
            None
        } else {
            Some(&self.indices)
        }
    }

    /// Step to the next combination. Returns the leftmost position that
    /// changed, or `None` when the odometer has run out.
    pub fn advance(&mut self) -> Option<usize> {
        if self.done {
            return None;
        }
        let k = self.indices.len();
        if k == 0 {
            self.done = true;
            return None;
        }

        // Find the rightmost index that can be incremented
        let mut i = k - 1;
        loop {
            if self.indices[i] < self.n - (k - i) {
                self.indices[i] += 1;
                // Reset all indices to the right
                for j in (i + 1)..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                return Some(i);
            }
            if i == 0 {
                self.done = true;
                return None;
            }
            i -= 1;
        }
    }
}

/// Iterator over every k-card hand mask, in increasing card-index order.
///
/// ```
/// use holdem_hand::enumerate::HandMasks;
///
/// let mut hands = HandMasks::new(2).unwrap();
/// assert_eq!(hands.next().unwrap().to_string(), "3c 2c");
/// assert_eq!(hands.count(), 1_325);
/// ```
#[derive(Debug, Clone)]
pub struct HandMasks {
    offset: usize,
    odometer: Combinations,
    /// `prefix[i]` is the fixed shard card (if any) OR the cards at positions `0..i`.
    prefix: Vec<u64>,
}

impl HandMasks {
    /// Every k-card hand from the full deck.
    pub fn new(k: usize) -> Result<Self, EnumerateError> {
        check_size(k)?;
        Ok(Self::over(0, 0, k))
    }

    /// Every k-card hand whose lowest card is `first`.
    ///
    /// The shards for `first` in `0..=52 - k` partition [`HandMasks::new`],
    /// which lets callers split an enumeration across workers.
    pub fn shard(first: usize, k: usize) -> Result<Self, EnumerateError> {
        check_size(k)?;
        if first >= DECK_SIZE {
            return Err(EnumerateError::InvalidShard(first));
        }
        Ok(Self::over(1u64 << first, first + 1, k - 1))
    }

    /// Hands of `k` cards drawn from `offset..52`, each OR'd with `base`.
    fn over(base: u64, offset: usize, k: usize) -> Self {
        let mut masks = Self {
            offset,
            odometer: Combinations::new(DECK_SIZE - offset, k),
            prefix: vec![base; k + 1],
        };
        masks.refresh(0);
        masks
    }

    fn refresh(&mut self, from: usize) {
        if let Some(indices) = self.odometer.current() {
            for j in from..indices.len() {
                self.prefix[j + 1] = self.prefix[j] | (1u64 << (self.offset + indices[j]));
            }
        }
    }

    /// Total number of masks this iterator yields from the start.
    pub fn total(&self) -> u64 {
        let k = self.prefix.len() - 1;
        binomial((DECK_SIZE - self.offset) as u64, k as u64)
    }
}

impl Iterator for HandMasks {
    type Item = HandMask;

    fn next(&mut self) -> Option<Self::Item> {
        let k = self.odometer.current()?.len();
        let mask = self.prefix[k];
        if let Some(changed) = self.odometer.advance() {
            self.refresh(changed);
        }
        Some(HandMask::from_bits(mask))
    }
}

impl std::iter::FusedIterator for HandMasks {}

fn check_size(k: usize) -> Result<(), EnumerateError> {
    if k == 0 || k > DECK_SIZE {
        return Err(EnumerateError::InvalidSize(k));
    }
    Ok(())
}

/// Visit every k-card hand in order. The visitor may stop early by
/// returning [`ControlFlow::Break`], which is passed back to the caller.
///
/// ```
/// use holdem_hand::enumerate::for_each_hand;
/// use std::ops::ControlFlow;
///
/// let mut seen = 0;
/// let flow = for_each_hand(5, |_| {
///     seen += 1;
///     if seen == 10 { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
/// })
/// .unwrap();
/// assert!(flow.is_break());
/// assert_eq!(seen, 10);
/// ```
pub fn for_each_hand<B, F>(k: usize, visit: F) -> Result<ControlFlow<B>, EnumerateError>
where
    F: FnMut(HandMask) -> ControlFlow<B>,
{
    Ok(HandMasks::new(k)?.try_for_each(visit))
}

/// Fold every k-card hand across rayon workers, one shard per lowest card.
/// Each shard folds into its own accumulator; the results are combined with
/// `reduce`, so `reduce` must be associative.
#[cfg(feature = "parallel")]
pub fn par_fold<T, ID, F, R>(k: usize, identity: ID, fold: F, reduce: R) -> Result<T, EnumerateError>
where
    T: Send,
    ID: Fn() -> T + Sync + Send,
    F: Fn(T, HandMask) -> T + Sync + Send,
    R: Fn(T, T) -> T + Sync + Send,
{
    use rayon::prelude::*;

    check_size(k)?;
    let shards = DECK_SIZE - k + 1;
    log::debug!("enumerating {} {k}-card hands over {shards} shards", binomial(DECK_SIZE as u64, k as u64));

    let result = (0..shards)
        .into_par_iter()
        .map(|first| {
            log::trace!("shard {first} started");
            HandMasks::over(1u64 << first, first + 1, k - 1).fold(identity(), &fold)
        })
        .reduce(&identity, &reduce);
    Ok(result)
}
