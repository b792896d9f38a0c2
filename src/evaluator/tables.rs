//! Lookup tables over the 8192 possible 13-bit rank patterns.
//!
//! Every table is indexed by a suit pattern or by the rank bitmap of a hand
//! (bit 0 = Two .. bit 12 = Ace) and is a pure function of that index.

use std::sync::OnceLock;

use super::{CARD_WIDTH, FIFTH_CARD_SHIFT, TOP_CARD_SHIFT};

/// Number of distinct 13-bit patterns.
pub const PATTERNS: usize = 1 << 13;

const WHEEL: u16 = (1 << 12) | 0b1111;
const FLUSH_CANDIDATE: u8 = 0x01;
const HAS_STRAIGHT: u8 = 0x02;

static SHARED: OnceLock<RankTables> = OnceLock::new();

/// Packed distinct-rank count and fast-path flags for one pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankInfo(u8);

impl RankInfo {
    pub const fn bit_count(self) -> u32 {
        (self.0 >> 2) as u32
    }

    /// Five or more ranks present, so a straight or flush is possible.
    pub const fn flush_candidate(self) -> bool {
        self.0 & FLUSH_CANDIDATE != 0
    }

    pub const fn has_straight(self) -> bool {
        self.0 & HAS_STRAIGHT != 0
    }

    pub const fn raw(self) -> u8 {
        self.0
    }
}

/// Immutable table bundle shared by the classifier and the ranker.
#[derive(Debug, Clone)]
pub struct RankTables {
    bit_count: Box<[u8]>,
    straight: Box<[u8]>,
    top_card: Box<[u8]>,
    top_five: Box<[u32]>,
    bits_and_straight: Box<[u8]>,
}

impl RankTables {
    /// Compute every table.
    pub fn build() -> Self {
        let bit_count: Box<[u8]> = (0..PATTERNS).map(|p| (p as u16).count_ones() as u8).collect();
        let straight: Box<[u8]> = (0..PATTERNS).map(|p| straight_top(p as u16)).collect();
        let top_card: Box<[u8]> = (0..PATTERNS).map(|p| top_card(p as u16)).collect();
        let top_five: Box<[u32]> = (0..PATTERNS).map(|p| top_five(p as u16)).collect();
        let bits_and_straight: Box<[u8]> = (0..PATTERNS)
            .map(|p| {
                let bits = bit_count[p];
                let mut packed = bits << 2;
                if bits >= 5 {
                    packed |= FLUSH_CANDIDATE;
                }
                if straight[p] != 0 {
                    packed |= HAS_STRAIGHT;
                }
                packed
            })
            .collect();

        log::debug!("built rank lookup tables ({PATTERNS} patterns)");
        Self { bit_count, straight, top_card, top_five, bits_and_straight }
    }

    /// Process-wide tables, built on first use.
    pub fn shared() -> &'static RankTables {
        SHARED.get_or_init(RankTables::build)
    }

    #[inline]
    pub fn bit_count(&self, pattern: u16) -> u32 {
        self.bit_count[index(pattern)] as u32
    }

    /// Top rank + 1 of the highest five-card run, 0 when there is none.
    /// A-2-3-4-5 counts with Five as its top rank.
    #[inline]
    pub fn straight(&self, pattern: u16) -> u32 {
        self.straight[index(pattern)] as u32
    }

    /// Index of the highest set rank, 0 for an empty pattern.
    #[inline]
    pub fn top_card(&self, pattern: u16) -> u32 {
        self.top_card[index(pattern)] as u32
    }

    /// Top five ranks packed at the hand-value kicker shifts.
    #[inline]
    pub fn top_five(&self, pattern: u16) -> u32 {
        self.top_five[index(pattern)]
    }

    #[inline]
    pub fn bits_and_straight(&self, pattern: u16) -> RankInfo {
        RankInfo(self.bits_and_straight[index(pattern)])
    }
}

impl Default for RankTables {
    fn default() -> Self {
        Self::build()
    }
}

#[inline]
fn index(pattern: u16) -> usize {
    pattern as usize & (PATTERNS - 1)
}

fn straight_top(pattern: u16) -> u8 {
    for top in (4..=12u8).rev() {
        let run = 0x1Fu16 << (top - 4);
        if pattern & run == run {
            return top + 1;
        }
    }
    if pattern & WHEEL == WHEEL {
        return 3 + 1;
    }
    0
}

fn top_card(pattern: u16) -> u8 {
    if pattern == 0 {
        return 0;
    }
    (u16::BITS - 1 - pattern.leading_zeros()) as u8
}

fn top_five(pattern: u16) -> u32 {
    let mut packed = 0u32;
    let mut shift = TOP_CARD_SHIFT as i32;
    for rank in (0..13u32).rev() {
        if shift < FIFTH_CARD_SHIFT as i32 {
            break;
        }
        if pattern & (1 << rank) != 0 {
            packed |= rank << shift;
            shift -= CARD_WIDTH as i32;
        }
    }
    packed
}
