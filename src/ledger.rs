use crate::account::{format_usd, Account, AccountType};
use crate::profile::Profile;

const INITIAL_CAPACITY: usize = 4;
const GROWTH: usize = 4;

/// A transient search key carrying holder identity, the exact account type
/// and an operation amount. Probes are compared against persisted accounts
/// but never stored themselves.
#[derive(Debug, Clone)]
pub struct Probe {
    pub holder: Profile,
    pub account_type: AccountType,
    pub amount: f64,
}

impl Probe {
    pub fn new(holder: Profile, account_type: AccountType, amount: f64) -> Self {
        Self {
            holder,
            account_type,
            amount,
        }
    }
}

/// The in-memory account store. Accounts live in insertion order; lookup is
/// a linear scan by holder+type identity and closing happens in place, so
/// the sequence never has holes.
pub struct AccountDatabase {
    accounts: Vec<Account>,
}

impl AccountDatabase {
    pub fn new() -> Self {
        Self {
            accounts: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    /// Linear scan for the first account matching the probe's identity.
    /// An empty database reports no match.
    pub fn find(&self, probe: &Probe) -> Option<usize> {
        self.accounts
            .iter()
            .position(|account| account.matches(&probe.holder, probe.account_type))
    }

    /// Opens the given account. A brand-new identity is appended (the store
    /// grows by a fixed step once full); a closed match is reopened in place
    /// from the incoming request; an open match rejects the duplicate.
    pub fn open(&mut self, account: Account) -> bool {
        let probe = Probe::new(account.holder().clone(), account.account_type(), 0.0);
        match self.find(&probe) {
            None => {
                if self.accounts.len() == self.accounts.capacity() {
                    self.accounts.reserve_exact(GROWTH);
                }
                self.accounts.push(account);
                true
            }
            Some(index) => {
                if self.accounts[index].is_closed() {
                    self.accounts[index].reopen(account);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Closes a matching open account. Fails when the account is absent or
    /// already closed.
    pub fn close(&mut self, probe: &Probe) -> bool {
        match self.find(probe) {
            Some(index) if !self.accounts[index].is_closed() => {
                self.accounts[index].close();
                true
            }
            _ => false,
        }
    }

    pub fn is_closed(&self, probe: &Probe) -> bool {
        match self.find(probe) {
            Some(index) => self.accounts[index].is_closed(),
            None => false,
        }
    }

    /// Deposits the probe's amount into the matching account.
    pub fn deposit(&mut self, probe: &Probe) -> bool {
        match self.find(probe) {
            Some(index) => {
                self.accounts[index].deposit(probe.amount);
                true
            }
            None => false,
        }
    }

    /// Withdraws the probe's amount. The amount must be strictly below the
    /// stored balance before the account-level withdrawal is attempted.
    pub fn withdraw(&mut self, probe: &Probe) -> bool {
        match self.find(probe) {
            Some(index) if self.accounts[index].balance() > probe.amount => {
                self.accounts[index].withdraw(probe.amount);
                true
            }
            _ => false,
        }
    }

    /// Applies the monthly fee and interest update to every account in
    /// storage order.
    pub fn update_balances(&mut self) {
        for account in &mut self.accounts {
            account.update_balance();
        }
    }

    /// In-place selection sort by case-insensitive type name. Ties keep
    /// whatever order the swaps produce.
    pub fn sort_by_type(&mut self) {
        let count = self.accounts.len();
        for i in 0..count.saturating_sub(1) {
            let mut min_index = i;
            for j in (i + 1)..count {
                let current = self.accounts[min_index].account_type().sort_name();
                let candidate = self.accounts[j].account_type().sort_name();
                if current.to_ascii_lowercase() > candidate.to_ascii_lowercase() {
                    min_index = j;
                }
            }
            self.accounts.swap(i, min_index);
        }
    }

    /// Display lines for every account in storage (insertion) order.
    pub fn list(&self) -> Vec<String> {
        self.accounts.iter().map(ToString::to_string).collect()
    }

    /// Sorts the store by type, then lists it.
    pub fn list_by_type(&mut self) -> Vec<String> {
        self.sort_by_type();
        self.list()
    }

    /// Display lines with each account's current fee and monthly interest
    /// appended. Balances are not touched.
    pub fn list_fee_and_interest(&self) -> Vec<String> {
        self.accounts
            .iter()
            .map(|account| {
                format!(
                    "{}::fee ${}::monthly interest ${}",
                    account,
                    format_usd(account.fee()),
                    format_usd(account.monthly_interest())
                )
            })
            .collect()
    }
}

impl Default for AccountDatabase {
    fn default() -> Self {
        Self::new()
    }
}
