use crate::profile::Profile;
use serde::Deserialize;
use std::fmt;

const MONTHS_PER_YEAR: f64 = 12.0;
const PERCENT: f64 = 100.0;

const CHECKING_FEE: f64 = 25.0;
const CHECKING_WAIVER_THRESHOLD: f64 = 1000.0;
const CHECKING_ANNUAL_RATE_PCT: f64 = 0.1;

const COLLEGE_ANNUAL_RATE_PCT: f64 = 0.25;

const SAVINGS_FEE: f64 = 6.0;
const SAVINGS_WAIVER_THRESHOLD: f64 = 300.0;
const SAVINGS_LOYAL_RATE_PCT: f64 = 0.45;
const SAVINGS_BASE_RATE_PCT: f64 = 0.3;

const MONEY_MARKET_FEE: f64 = 10.0;
// The money market rates are kept as annual fractions, not percentages.
const MONEY_MARKET_LOYAL_RATE: f64 = 0.0095;
const MONEY_MARKET_BASE_RATE: f64 = 0.008;
pub const MONEY_MARKET_LOYAL_THRESHOLD: f64 = 2500.0;
const MONEY_MARKET_FREE_WITHDRAWALS: u32 = 3;

/// Campus affiliation carried only by college checking accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Campus {
    NewBrunswick,
    Newark,
    Camden,
}

impl Campus {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::NewBrunswick),
            1 => Some(Self::Newark),
            2 => Some(Self::Camden),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::NewBrunswick => "NEW_BRUNSWICK",
            Self::Newark => "NEWARK",
            Self::Camden => "CAMDEN",
        }
    }
}

/// The exact kind of an account, without variant state. Identity lookup
/// keys on this tag, so a Checking and a CollegeChecking held by the same
/// person are never the same account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Checking,
    CollegeChecking,
    Savings,
    MoneyMarket,
}

impl AccountType {
    /// Stable type name used as the grouped-report sort key.
    pub fn sort_name(&self) -> &'static str {
        match self {
            Self::Checking => "Checking",
            Self::CollegeChecking => "CollegeChecking",
            Self::Savings => "Savings",
            Self::MoneyMarket => "MoneyMarket",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Checking => "Checking",
            Self::CollegeChecking => "College Checking",
            Self::Savings => "Savings",
            Self::MoneyMarket => "Money Market",
        };
        f.write_str(label)
    }
}

/// Variant state for each account kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Kind {
    Checking,
    CollegeChecking { campus: Campus },
    Savings { loyal: bool },
    MoneyMarket { loyal: bool, withdrawals: u32 },
}

impl Kind {
    /// Money market accounts start out loyal with a fresh withdrawal counter.
    pub fn money_market() -> Self {
        Self::MoneyMarket {
            loyal: true,
            withdrawals: 0,
        }
    }

    pub fn account_type(&self) -> AccountType {
        match self {
            Self::Checking => AccountType::Checking,
            Self::CollegeChecking { .. } => AccountType::CollegeChecking,
            Self::Savings { .. } => AccountType::Savings,
            Self::MoneyMarket { .. } => AccountType::MoneyMarket,
        }
    }
}

/// A persisted bank account: holder identity, open/closed state, a float
/// balance (the source system's currency model, kept as-is) and the
/// kind-specific state.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    holder: Profile,
    closed: bool,
    balance: f64,
    kind: Kind,
}

impl Account {
    pub fn new(holder: Profile, balance: f64, kind: Kind) -> Self {
        Self {
            holder,
            closed: false,
            balance,
            kind,
        }
    }

    pub fn holder(&self) -> &Profile {
        &self.holder
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    pub fn account_type(&self) -> AccountType {
        self.kind.account_type()
    }

    /// Identity check: same holder and same exact account type.
    pub fn matches(&self, holder: &Profile, account_type: AccountType) -> bool {
        self.holder == *holder && self.account_type() == account_type
    }

    /// Adds to the balance unconditionally. Positivity is validated at the
    /// teller boundary.
    pub fn deposit(&mut self, amount: f64) {
        self.balance += amount;
    }

    /// Subtracts only if the result stays strictly positive; a withdrawal
    /// that would zero the balance exactly is silently rejected. Money
    /// market accounts count successful withdrawals and lose loyalty
    /// whenever the balance sits below the loyalty threshold afterwards,
    /// even when the withdrawal itself was rejected.
    pub fn withdraw(&mut self, amount: f64) {
        if self.balance - amount > 0.0 {
            self.balance -= amount;
            if let Kind::MoneyMarket { withdrawals, .. } = &mut self.kind {
                *withdrawals += 1;
            }
        }
        if let Kind::MoneyMarket { loyal, .. } = &mut self.kind {
            if self.balance < MONEY_MARKET_LOYAL_THRESHOLD {
                *loyal = false;
            }
        }
    }

    /// Monthly service fee for the current state.
    pub fn fee(&self) -> f64 {
        match &self.kind {
            Kind::Checking => {
                if self.balance >= CHECKING_WAIVER_THRESHOLD {
                    0.0
                } else {
                    CHECKING_FEE
                }
            }
            Kind::CollegeChecking { .. } => 0.0,
            Kind::Savings { .. } => {
                if self.balance >= SAVINGS_WAIVER_THRESHOLD {
                    0.0
                } else {
                    SAVINGS_FEE
                }
            }
            Kind::MoneyMarket { withdrawals, .. } => {
                if self.balance >= MONEY_MARKET_LOYAL_THRESHOLD
                    && *withdrawals <= MONEY_MARKET_FREE_WITHDRAWALS
                {
                    0.0
                } else {
                    MONEY_MARKET_FEE
                }
            }
        }
    }

    /// One month's interest on the current balance. The money market rate
    /// is decided by the balance threshold, not the loyalty flag.
    pub fn monthly_interest(&self) -> f64 {
        let annual_rate = match &self.kind {
            Kind::Checking => CHECKING_ANNUAL_RATE_PCT / PERCENT,
            Kind::CollegeChecking { .. } => COLLEGE_ANNUAL_RATE_PCT / PERCENT,
            Kind::Savings { loyal } => {
                if *loyal {
                    SAVINGS_LOYAL_RATE_PCT / PERCENT
                } else {
                    SAVINGS_BASE_RATE_PCT / PERCENT
                }
            }
            Kind::MoneyMarket { .. } => {
                if self.balance >= MONEY_MARKET_LOYAL_THRESHOLD {
                    MONEY_MARKET_LOYAL_RATE
                } else {
                    MONEY_MARKET_BASE_RATE
                }
            }
        };
        self.balance * (annual_rate / MONTHS_PER_YEAR)
    }

    /// Applies one month of fees and interest, both computed from the
    /// pre-update balance. Money market loyalty is re-evaluated afterwards.
    pub fn update_balance(&mut self) {
        let fee = self.fee();
        let interest = self.monthly_interest();
        self.balance += interest - fee;
        if let Kind::MoneyMarket { loyal, .. } = &mut self.kind {
            if self.balance < MONEY_MARKET_LOYAL_THRESHOLD {
                *loyal = false;
            }
        }
    }

    /// Marks the account closed: the balance drops to zero, savings-family
    /// loyalty is cleared and the money market withdrawal counter resets.
    pub fn close(&mut self) {
        self.closed = true;
        self.balance = 0.0;
        match &mut self.kind {
            Kind::Savings { loyal } => *loyal = false,
            Kind::MoneyMarket { loyal, withdrawals } => {
                *loyal = false;
                *withdrawals = 0;
            }
            _ => {}
        }
    }

    /// Reopens a closed account in place from a fresh open request. The
    /// requested balance is restored; a college checking request overwrites
    /// the campus, a savings request overwrites loyalty, and a money market
    /// account becomes loyal again only when the reopen balance meets the
    /// loyalty threshold.
    pub fn reopen(&mut self, incoming: Account) {
        self.closed = false;
        self.balance = incoming.balance;
        match (&mut self.kind, incoming.kind) {
            (Kind::CollegeChecking { campus }, Kind::CollegeChecking { campus: requested }) => {
                *campus = requested;
            }
            (Kind::Savings { loyal }, Kind::Savings { loyal: requested }) => {
                *loyal = requested;
            }
            (Kind::MoneyMarket { loyal, .. }, Kind::MoneyMarket { .. }) => {
                if self.balance >= MONEY_MARKET_LOYAL_THRESHOLD {
                    *loyal = true;
                }
            }
            _ => {}
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Kind::Checking => {
                write!(f, "Checking::{}::Balance ${}", self.holder, format_usd(self.balance))?;
                if self.closed {
                    write!(f, "::CLOSED")?;
                }
            }
            Kind::CollegeChecking { campus } => {
                write!(
                    f,
                    "College Checking::{}::Balance ${}",
                    self.holder,
                    format_usd(self.balance)
                )?;
                if self.closed {
                    write!(f, "::CLOSED")?;
                }
                write!(f, "::{}", campus.name())?;
            }
            Kind::Savings { loyal } => {
                write!(f, "Savings::{}::Balance ${}", self.holder, format_usd(self.balance))?;
                if *loyal {
                    write!(f, "::Loyal")?;
                }
                if self.closed {
                    write!(f, "::CLOSED")?;
                }
            }
            Kind::MoneyMarket { loyal, withdrawals } => {
                write!(
                    f,
                    "Money Market Savings::{}::Balance ${}",
                    self.holder,
                    format_usd(self.balance)
                )?;
                if self.closed {
                    write!(f, "::CLOSED")?;
                } else if *loyal {
                    write!(f, "::Loyal")?;
                }
                // The withdrawal count is shown whether or not the account
                // is closed.
                write!(f, "::withdrawal: {}", withdrawals)?;
            }
        }
        Ok(())
    }
}

/// Two-decimal dollar formatting with comma-grouped thousands.
pub(crate) fn format_usd(amount: f64) -> String {
    let negative = amount < 0.0;
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some(parts) => parts,
        None => (fixed.as_str(), "00"),
    };
    let mut grouped = String::new();
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if negative { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}
