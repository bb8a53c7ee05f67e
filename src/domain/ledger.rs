use super::money::{DisplayPair, Money, format, to_minor_units};
use crate::error::{Result, VendingError};

/// Keeper of the money.
///
/// Tracks the cents inserted for the current transaction and the revenue
/// collected from completed vends.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Ledger {
    balance: Money,
    revenue: Money,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds inserted money to the transaction and returns the new balance.
    ///
    /// A balance that would no longer fit in a `u64` is refused and left as is.
    pub fn add_money(&mut self, amount: Money) -> Result<DisplayPair> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(VendingError::BalanceOverflow {
                inserted: amount.cents(),
                balance: self.balance.cents(),
            })?;
        Ok(self.current_value())
    }

    pub fn current_value(&self) -> DisplayPair {
        self.balance.to_display()
    }

    pub fn revenue(&self) -> Money {
        self.revenue
    }

    /// Moves `price` from the transaction balance into revenue.
    ///
    /// Fails without touching the ledger if the balance does not cover `price`.
    pub fn purchase(&mut self, price: Money) -> Result<()> {
        let balance = self.deduct(price)?;
        let revenue = self
            .revenue
            .checked_add(price)
            .ok_or(VendingError::BalanceOverflow {
                inserted: price.cents(),
                balance: self.revenue.cents(),
            })?;
        self.balance = balance;
        self.revenue = revenue;
        Ok(())
    }

    /// Gives `amount` back to the customer and describes it, e.g. `Returning $1.35`.
    pub fn return_change(&mut self, amount: DisplayPair) -> Result<String> {
        self.balance = self.deduct(to_minor_units(amount))?;
        Ok(format!("Returning {}", format(amount)))
    }

    /// Returns everything left in the transaction.
    pub fn refund(&mut self) -> String {
        let amount = self.current_value();
        self.balance = Money::ZERO;
        format!("Returning {}", format(amount))
    }

    fn deduct(&self, amount: Money) -> Result<Money> {
        self.balance
            .checked_sub(amount)
            .ok_or(VendingError::InsufficientBalance {
                requested: amount.cents(),
                available: self.balance.cents(),
            })
    }
}
