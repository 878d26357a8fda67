#![cfg_attr(not(feature = "std"), no_std, no_main)]

pub use self::tip_jar::{Error, Tip, TipJar, TipJarRef};

#[ink::contract]
mod tip_jar {
    use ink::prelude::string::String;
    use ink::prelude::vec::Vec;

    // =========================================================================
    // STORAGE
    // =========================================================================

    /// A single recorded tip. Appended in arrival order, never mutated
    /// or deleted.
    #[derive(Debug, Clone, PartialEq, Eq, scale::Encode, scale::Decode)]
    #[cfg_attr(
        feature = "std",
        derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
    )]
    pub struct Tip {
        pub tipper: AccountId,
        pub message: String,
        pub timestamp: Timestamp,
        pub amount: Balance,
    }

    #[ink(storage)]
    pub struct TipJar {
        owner: AccountId,
        tips: Vec<Tip>,
    }

    // =========================================================================
    // EVENTS
    // =========================================================================

    #[ink(event)]
    pub struct NewTip {
        #[ink(topic)]
        from: AccountId,
        amount: Balance,
        message: String,
        timestamp: Timestamp,
    }

    // =========================================================================
    // ERRORS
    // =========================================================================

    #[derive(Debug, PartialEq, Eq, scale::Encode, scale::Decode)]
    #[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
    pub enum Error {
        /// The tip carried no value.
        ZeroTip,
        /// Caller is not the owner.
        NotAuthorized,
        /// The native transfer to the owner failed.
        TransferFailed,
    }

    // =========================================================================
    // IMPLEMENTATION
    // =========================================================================

    impl TipJar {
        #[ink(constructor)]
        pub fn new() -> Self {
            Self {
                owner: Self::env().caller(),
                tips: Vec::new(),
            }
        }

        /// Record a tip. The transferred value is the tip amount and must
        /// be non-zero.
        #[ink(message, payable)]
        pub fn tip(&mut self, message: String) -> Result<(), Error> {
            let amount = self.env().transferred_value();
            if amount == 0 {
                return Err(Error::ZeroTip);
            }

            let tipper = self.env().caller();
            let timestamp = self.env().block_timestamp();

            self.tips.push(Tip {
                tipper,
                message: message.clone(),
                timestamp,
                amount,
            });

            self.env().emit_event(NewTip {
                from: tipper,
                amount,
                message,
                timestamp,
            });

            Ok(())
        }

        /// Sweep the full contract balance to the owner. Returns the
        /// amount withdrawn.
        #[ink(message)]
        pub fn withdraw(&mut self) -> Result<Balance, Error> {
            self.only_owner()?;

            let amount = self.env().balance();
            self.env()
                .transfer(self.owner, amount)
                .map_err(|_| Error::TransferFailed)?;

            Ok(amount)
        }

        // =================================================================
        // VIEW FUNCTIONS
        // =================================================================

        #[ink(message)]
        pub fn owner(&self) -> AccountId {
            self.owner
        }

        /// Full tip history in arrival order.
        #[ink(message)]
        pub fn get_all_tips(&self) -> Vec<Tip> {
            self.tips.clone()
        }

        /// Tip history filtered to one tipper, arrival order preserved.
        #[ink(message)]
        pub fn get_tips_by_address(&self, tipper: AccountId) -> Vec<Tip> {
            self.tips
                .iter()
                .filter(|tip| tip.tipper == tipper)
                .cloned()
                .collect()
        }

        #[ink(message)]
        pub fn get_tip_count(&self) -> u64 {
            self.tips.len() as u64
        }

        /// Current contract balance, in the smallest native unit.
        #[ink(message)]
        pub fn get_balance(&self) -> Balance {
            self.env().balance()
        }

        fn only_owner(&self) -> Result<(), Error> {
            if self.env().caller() != self.owner {
                return Err(Error::NotAuthorized);
            }
            Ok(())
        }
    }

    impl Default for TipJar {
        fn default() -> Self {
            Self::new()
        }
    }

    // =========================================================================
    // UNIT TESTS
    // =========================================================================

}
