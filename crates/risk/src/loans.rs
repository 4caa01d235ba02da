//! Loan engine - collateralized loan issuance and repayment
//!
//! Collateral is an earmark against the borrower's single balance pool, not
//! a separate escrow: free balance = balance - collateral of an Active loan.
//! The borrowed principal is credited to the balance as spendable funds
//! while the earmark stays locked in place.

use serde::{Deserialize, Serialize};

use versebank_core::{AccountId, Amount, Loan, LoanStatus};
use versebank_ledger::{load_account, LedgerError};
use versebank_store::LedgerStore;

use crate::error::RiskError;

/// Minimum collateralization ratio for issuance, in percent.
pub const MIN_COLLATERAL_RATIO_PCT: u64 = 150;

/// Configuration for loan issuance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanConfig {
    /// Required collateral as a percentage of principal (150 = 150%)
    pub min_collateral_ratio_pct: u64,
}

impl Default for LoanConfig {
    fn default() -> Self {
        Self {
            min_collateral_ratio_pct: MIN_COLLATERAL_RATIO_PCT,
        }
    }
}

/// Loan engine - issues loans against pledged balance and retires them on
/// repayment. At most one Active loan per account.
#[derive(Debug, Default)]
pub struct LoanEngine {
    config: LoanConfig,
}

impl LoanEngine {
    /// Create a new loan engine
    pub fn new(config: LoanConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &LoanConfig {
        &self.config
    }

    /// Collateral required to issue a loan of `principal`.
    ///
    /// Computed in u128; a requirement that does not fit `u64` is rejected
    /// with `Overflow`.
    pub fn required_collateral(&self, principal: Amount) -> Result<Amount, RiskError> {
        let required = u128::from(principal.value())
            * u128::from(self.config.min_collateral_ratio_pct)
            / 100;
        u64::try_from(required)
            .map(Amount::new)
            .map_err(|_| RiskError::Ledger(LedgerError::Overflow))
    }

    /// Issue a loan of `principal` to `owner`.
    ///
    /// The account's whole balance is eligible as collateral (no other loan
    /// can be active). On success the required earmark is locked in place
    /// and the principal is credited to the balance.
    pub fn take_loan(
        &self,
        store: &dyn LedgerStore,
        owner: &AccountId,
        principal: Amount,
    ) -> Result<Loan, RiskError> {
        let mut account = load_account(store, owner)?;
        if principal.is_zero() {
            return Err(RiskError::Ledger(LedgerError::InvalidAmount(
                "principal must be positive",
            )));
        }
        if account.active_loan().is_some() {
            return Err(RiskError::LoanAlreadyActive);
        }
        let required = self.required_collateral(principal)?;
        if account.balance < required {
            return Err(RiskError::InsufficientCollateral {
                required,
                available: account.balance,
            });
        }
        account.balance = account
            .balance
            .checked_add(&principal)
            .ok_or(RiskError::Ledger(LedgerError::Overflow))?;
        let loan = Loan::new(principal, required);
        account.loan = Some(loan);

        store.put(account)?;
        tracing::debug!(
            account = %owner,
            principal = %principal,
            collateral = %required,
            "loan issued"
        );
        Ok(loan)
    }

    /// Retire a loan by exact full repayment.
    ///
    /// Partial repayment is not supported: `amount` must equal the
    /// outstanding principal. On success the principal is deducted from the
    /// balance, the loan is marked Repaid, and the slot is cleared.
    pub fn repay_loan(
        &self,
        store: &dyn LedgerStore,
        owner: &AccountId,
        amount: Amount,
    ) -> Result<Loan, RiskError> {
        let mut account = load_account(store, owner)?;
        let Some(loan) = account.active_loan().copied() else {
            return Err(RiskError::NoActiveLoan);
        };
        if amount != loan.principal {
            return Err(RiskError::Ledger(LedgerError::InvalidAmount(
                "repayment must equal the outstanding principal",
            )));
        }
        account.balance = account.balance.checked_sub(&amount).ok_or(
            RiskError::Ledger(LedgerError::InsufficientFunds {
                available: account.balance,
                requested: amount,
            }),
        )?;
        let mut repaid = loan;
        repaid.status = LoanStatus::Repaid;
        account.loan = None;

        store.put(account)?;
        tracing::debug!(account = %owner, principal = %amount, "loan repaid");
        Ok(repaid)
    }

    /// Loan snapshot for `owner`. `Ok(None)` if the account or its loan is
    /// absent.
    pub fn loan_details(
        &self,
        store: &dyn LedgerStore,
        owner: &AccountId,
    ) -> Result<Option<Loan>, RiskError> {
        Ok(store.get(owner)?.and_then(|account| account.loan))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use versebank_ledger::AccountManager;
    use versebank_store::InMemoryStore;

    fn funded_account(balance: u64) -> (InMemoryStore, AccountId) {
        let store = InMemoryStore::new();
        let manager = AccountManager::new();
        let alice = AccountId::new("alice");
        manager.create_account(&store, &alice).unwrap();
        if balance > 0 {
            manager.deposit(&store, &alice, Amount::new(balance)).unwrap();
        }
        (store, alice)
    }

    #[test]
    fn test_required_collateral_at_default_ratio() {
        let engine = LoanEngine::default();
        let required = engine.required_collateral(Amount::new(100_000_000)).unwrap();
        assert_eq!(required, Amount::new(150_000_000));
    }

    #[test]
    fn test_take_loan_missing_account() {
        let engine = LoanEngine::default();
        let store = InMemoryStore::new();

        let result = engine.take_loan(&store, &AccountId::new("nobody"), Amount::new(100));
        assert!(matches!(
            result,
            Err(RiskError::Ledger(LedgerError::NotFound(_)))
        ));
    }

    #[test]
    fn test_take_loan_rejects_zero_principal() {
        let engine = LoanEngine::default();
        let (store, alice) = funded_account(1_000);

        let result = engine.take_loan(&store, &alice, Amount::ZERO);
        assert!(matches!(
            result,
            Err(RiskError::Ledger(LedgerError::InvalidAmount(_)))
        ));
    }

    #[test]
    fn test_take_loan_at_exact_minimum_ratio() {
        let engine = LoanEngine::default();
        let (store, alice) = funded_account(150_000_000);

        // Boundary: balance equals the required collateral exactly
        let loan = engine
            .take_loan(&store, &alice, Amount::new(100_000_000))
            .unwrap();
        assert_eq!(loan.principal, Amount::new(100_000_000));
        assert_eq!(loan.collateral, Amount::new(150_000_000));
        assert_eq!(loan.status, LoanStatus::Active);

        // Principal is disbursed into the balance; collateral stays earmarked
        let account = load_account(&store, &alice).unwrap();
        assert_eq!(account.balance, Amount::new(250_000_000));
        assert_eq!(account.free_balance(), Amount::new(100_000_000));
    }

    #[test]
    fn test_take_loan_insufficient_collateral_leaves_state_unchanged() {
        let engine = LoanEngine::default();
        let (store, alice) = funded_account(149_999_999);

        let result = engine.take_loan(&store, &alice, Amount::new(100_000_000));
        assert!(matches!(
            result,
            Err(RiskError::InsufficientCollateral { .. })
        ));

        let account = load_account(&store, &alice).unwrap();
        assert_eq!(account.balance, Amount::new(149_999_999));
        assert!(account.loan.is_none());
    }

    #[test]
    fn test_take_loan_rejects_second_active_loan() {
        let engine = LoanEngine::default();
        let (store, alice) = funded_account(150_000_000);
        engine
            .take_loan(&store, &alice, Amount::new(100_000_000))
            .unwrap();

        let result = engine.take_loan(&store, &alice, Amount::new(1_000));
        assert!(matches!(result, Err(RiskError::LoanAlreadyActive)));
    }

    #[test]
    fn test_take_loan_overflow_on_huge_principal() {
        let engine = LoanEngine::default();
        let (store, alice) = funded_account(1_000);

        let result = engine.take_loan(&store, &alice, Amount::MAX);
        assert!(matches!(
            result,
            Err(RiskError::Ledger(LedgerError::Overflow))
        ));
    }

    #[test]
    fn test_repay_loan_exact_amount_clears_slot() {
        let engine = LoanEngine::default();
        let (store, alice) = funded_account(150_000_000);
        engine
            .take_loan(&store, &alice, Amount::new(100_000_000))
            .unwrap();

        let repaid = engine
            .repay_loan(&store, &alice, Amount::new(100_000_000))
            .unwrap();
        assert_eq!(repaid.status, LoanStatus::Repaid);

        let account = load_account(&store, &alice).unwrap();
        assert!(account.loan.is_none());
        assert_eq!(account.balance, Amount::new(150_000_000));
        // Nothing is earmarked any longer
        assert_eq!(account.free_balance(), Amount::new(150_000_000));
    }

    #[test]
    fn test_repay_loan_rejects_partial_amount() {
        let engine = LoanEngine::default();
        let (store, alice) = funded_account(150_000_000);
        engine
            .take_loan(&store, &alice, Amount::new(100_000_000))
            .unwrap();

        let result = engine.repay_loan(&store, &alice, Amount::new(50_000_000));
        assert!(matches!(
            result,
            Err(RiskError::Ledger(LedgerError::InvalidAmount(_)))
        ));

        // Loan untouched by the failed repayment
        let loan = engine.loan_details(&store, &alice).unwrap().unwrap();
        assert_eq!(loan.status, LoanStatus::Active);
    }

    #[test]
    fn test_repay_without_loan() {
        let engine = LoanEngine::default();
        let (store, alice) = funded_account(1_000);

        let result = engine.repay_loan(&store, &alice, Amount::new(1_000));
        assert!(matches!(result, Err(RiskError::NoActiveLoan)));
    }

    #[test]
    fn test_loan_details_absent_cases() {
        let engine = LoanEngine::default();
        let (store, alice) = funded_account(1_000);

        // No loan yet
        assert!(engine.loan_details(&store, &alice).unwrap().is_none());
        // No account at all
        assert!(engine
            .loan_details(&store, &AccountId::new("nobody"))
            .unwrap()
            .is_none());
    }
}
