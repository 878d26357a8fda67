//! Off-chain view helpers for the TipJar frontend.
//!
//! Everything here is pure and synchronous: the functions consume data a
//! query layer has already fetched from the [`tip_jar`] contract and produce
//! data for a display layer. Suspension, retries and confirmation-waiting
//! all live with the wallet provider, not here.

pub mod active;
pub mod amount;
pub mod session;

/// Smallest native unit, matching the contract environment.
pub type Balance = u128;

pub use active::{reconcile, TipFeed};
pub use amount::{validate_tip_amount, AmountError};
pub use session::Session;
