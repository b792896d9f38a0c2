//! holdem-hand: Texas Hold'em hand evaluation over 52-bit card masks
//!
//! Goals:
//! - Constant-time evaluation of 1 to 7 card hands from bit masks
//! - Comparable packed hand values, so a plain integer compare decides showdowns
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: evaluate a Hold'em hand
//! ```
//! use holdem_hand::evaluator::{evaluate_mask, evaluate_type, Category};
//! use holdem_hand::hand::parse_hand_with_board;
//!
//! let mask = parse_hand_with_board("As Ah", "Kc Qd Jh 3s 2c").unwrap();
//! assert_eq!(evaluate_type(mask), Category::Pair);
//!
//! let value = evaluate_mask(mask).unwrap();
//! assert_eq!(value.category(), Category::Pair);
//! assert_eq!(value.kicker(0), 12);
//! ```
//!
//! ## Enumerating hands
//! ```
//! use holdem_hand::enumerate::HandMasks;
//!
//! assert_eq!(HandMasks::new(2).unwrap().count(), 1_326);
//! ```

pub mod cards;
pub mod deck;
pub mod enumerate;
pub mod evaluator;
pub mod hand;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
