use crate::account::{Account, AccountType, Campus, Kind, MONEY_MARKET_LOYAL_THRESHOLD};
use crate::date::Date;
use crate::error::TellerError;
use crate::ledger::{AccountDatabase, Probe};
use crate::profile::Profile;

/// What an open request asks for, per account kind. A money market request
/// carries no extra state; the account starts loyal with a fresh counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountSpec {
    Checking,
    CollegeChecking { campus: Campus },
    Savings { loyal: bool },
    MoneyMarket,
}

impl AccountSpec {
    pub fn account_type(&self) -> AccountType {
        match self {
            Self::Checking => AccountType::Checking,
            Self::CollegeChecking { .. } => AccountType::CollegeChecking,
            Self::Savings { .. } => AccountType::Savings,
            Self::MoneyMarket => AccountType::MoneyMarket,
        }
    }

    fn into_kind(self) -> Kind {
        match self {
            Self::Checking => Kind::Checking,
            Self::CollegeChecking { campus } => Kind::CollegeChecking { campus },
            Self::Savings { loyal } => Kind::Savings { loyal },
            Self::MoneyMarket => Kind::money_market(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    Opened,
    Reopened,
}

/// The boundary the presentation layer talks to. Requests arrive here
/// pre-parsed; this layer validates them and maps the ledger's boolean
/// outcomes onto the error taxonomy.
pub struct Teller {
    db: AccountDatabase,
}

impl Teller {
    pub fn new() -> Self {
        Self {
            db: AccountDatabase::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }

    fn validate_dob(dob: Date) -> Result<(), TellerError> {
        if !dob.is_valid() || dob > Date::today() {
            return Err(TellerError::InvalidDate);
        }
        Ok(())
    }

    fn validate_amount(amount: f64) -> Result<(), TellerError> {
        if amount <= 0.0 {
            return Err(TellerError::InvalidAmount);
        }
        Ok(())
    }

    /// A holder may have at most one checking-family account; opening a
    /// Checking is rejected when a CollegeChecking exists and vice versa.
    fn checking_family_conflict(&self, holder: &Profile, spec: &AccountSpec) -> bool {
        let other = match spec {
            AccountSpec::Checking => AccountType::CollegeChecking,
            AccountSpec::CollegeChecking { .. } => AccountType::Checking,
            _ => return false,
        };
        self.db.find(&Probe::new(holder.clone(), other, 0.0)).is_some()
    }

    pub fn open_account(
        &mut self,
        holder: Profile,
        spec: AccountSpec,
        deposit: f64,
    ) -> Result<OpenOutcome, TellerError> {
        Self::validate_dob(holder.dob())?;
        Self::validate_amount(deposit)?;
        if spec == AccountSpec::MoneyMarket && deposit < MONEY_MARKET_LOYAL_THRESHOLD {
            return Err(TellerError::MinimumDeposit);
        }
        if self.checking_family_conflict(&holder, &spec) {
            return Err(TellerError::DuplicateOpen(holder));
        }

        let probe = Probe::new(holder.clone(), spec.account_type(), 0.0);
        let existed = self.db.find(&probe).is_some();
        let account = Account::new(holder.clone(), deposit, spec.into_kind());
        if !self.db.open(account) {
            return Err(TellerError::DuplicateOpen(holder));
        }
        if existed {
            Ok(OpenOutcome::Reopened)
        } else {
            Ok(OpenOutcome::Opened)
        }
    }

    pub fn close_account(
        &mut self,
        holder: Profile,
        account_type: AccountType,
    ) -> Result<(), TellerError> {
        Self::validate_dob(holder.dob())?;
        let probe = Probe::new(holder.clone(), account_type, 0.0);
        if self.db.find(&probe).is_none() {
            return Err(TellerError::NotFound(holder, account_type));
        }
        if !self.db.close(&probe) {
            return Err(TellerError::AlreadyClosed);
        }
        Ok(())
    }

    pub fn deposit_to(
        &mut self,
        holder: Profile,
        account_type: AccountType,
        amount: f64,
    ) -> Result<(), TellerError> {
        Self::validate_dob(holder.dob())?;
        Self::validate_amount(amount)?;
        let probe = Probe::new(holder.clone(), account_type, amount);
        if !self.db.deposit(&probe) {
            return Err(TellerError::NotFound(holder, account_type));
        }
        Ok(())
    }

    pub fn withdraw_from(
        &mut self,
        holder: Profile,
        account_type: AccountType,
        amount: f64,
    ) -> Result<(), TellerError> {
        Self::validate_dob(holder.dob())?;
        Self::validate_amount(amount)?;
        let probe = Probe::new(holder.clone(), account_type, amount);
        if self.db.find(&probe).is_none() {
            return Err(TellerError::NotFound(holder, account_type));
        }
        if !self.db.withdraw(&probe) {
            return Err(TellerError::InsufficientFunds);
        }
        Ok(())
    }

    /// Report in insertion order.
    pub fn list_accounts(&self) -> Vec<String> {
        self.db.list()
    }

    /// Report grouped by account type.
    pub fn list_by_type(&mut self) -> Vec<String> {
        self.db.list_by_type()
    }

    /// Report with current fee and monthly interest per account.
    pub fn list_fee_and_interest(&self) -> Vec<String> {
        self.db.list_fee_and_interest()
    }

    /// Applies the monthly fee and interest update to every account.
    pub fn apply_monthly_updates(&mut self) {
        self.db.update_balances();
    }
}

impl Default for Teller {
    fn default() -> Self {
        Self::new()
    }
}
