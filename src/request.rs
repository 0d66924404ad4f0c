use crate::account::{AccountType, Campus};
use crate::date::Date;
use crate::error::TellerError;
use crate::profile::Profile;
use crate::teller::AccountSpec;
use serde::Deserialize;

/// One row of a batch request file, as it appears on disk. Field presence
/// rules depend on the action and are checked by the `TryFrom` conversion.
#[derive(Debug, Deserialize)]
pub struct CsvRequest {
    pub action: Action,
    #[serde(rename = "type")]
    pub account_type: Option<AccountType>,
    pub first: Option<String>,
    pub last: Option<String>,
    pub dob: Option<String>,
    pub amount: Option<f64>,
    pub campus: Option<u8>,
    pub loyal: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Open,
    Close,
    Deposit,
    Withdraw,
    List,
    ListByType,
    ListFees,
    Update,
}

/// A validated teller request, ready for the facade.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Open {
        holder: Profile,
        spec: AccountSpec,
        deposit: f64,
    },
    Close {
        holder: Profile,
        account_type: AccountType,
    },
    Deposit {
        holder: Profile,
        account_type: AccountType,
        amount: f64,
    },
    Withdraw {
        holder: Profile,
        account_type: AccountType,
        amount: f64,
    },
    ListAll,
    ListByType,
    ListFeesAndInterest,
    UpdateBalances,
}

/// First letter upper, remainder lower, matching how the original teller
/// normalized typed-in names before building the holder identity.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

fn malformed(reason: &str) -> TellerError {
    TellerError::MalformedRequest(reason.to_string())
}

impl CsvRequest {
    fn holder(&self) -> Result<Profile, TellerError> {
        let first = self.first.as_deref().ok_or_else(|| malformed("missing first name"))?;
        let last = self.last.as_deref().ok_or_else(|| malformed("missing last name"))?;
        let dob = self.dob.as_deref().ok_or_else(|| malformed("missing date of birth"))?;
        let dob: Date = dob.parse().map_err(|_| TellerError::InvalidDate)?;
        Ok(Profile::new(capitalize(first), capitalize(last), dob))
    }

    fn required_type(&self) -> Result<AccountType, TellerError> {
        self.account_type.ok_or_else(|| malformed("missing account type"))
    }

    fn required_amount(&self) -> Result<f64, TellerError> {
        self.amount.ok_or_else(|| malformed("missing amount"))
    }
}

impl TryFrom<CsvRequest> for Request {
    type Error = TellerError;

    fn try_from(csv: CsvRequest) -> Result<Self, Self::Error> {
        match csv.action {
            Action::List => Ok(Request::ListAll),
            Action::ListByType => Ok(Request::ListByType),
            Action::ListFees => Ok(Request::ListFeesAndInterest),
            Action::Update => Ok(Request::UpdateBalances),
            Action::Open => {
                let holder = csv.holder()?;
                let deposit = csv.required_amount()?;
                let spec = match csv.required_type()? {
                    AccountType::Checking => AccountSpec::Checking,
                    AccountType::CollegeChecking => {
                        let code = csv.campus.ok_or_else(|| malformed("missing campus code"))?;
                        let campus =
                            Campus::from_code(code).ok_or_else(|| malformed("invalid campus code"))?;
                        AccountSpec::CollegeChecking { campus }
                    }
                    AccountType::Savings => {
                        let loyal = csv.loyal.ok_or_else(|| malformed("missing loyalty flag"))?;
                        AccountSpec::Savings { loyal: loyal != 0 }
                    }
                    AccountType::MoneyMarket => AccountSpec::MoneyMarket,
                };
                Ok(Request::Open {
                    holder,
                    spec,
                    deposit,
                })
            }
            Action::Close => Ok(Request::Close {
                holder: csv.holder()?,
                account_type: csv.required_type()?,
            }),
            Action::Deposit => Ok(Request::Deposit {
                holder: csv.holder()?,
                account_type: csv.required_type()?,
                amount: csv.required_amount()?,
            }),
            Action::Withdraw => Ok(Request::Withdraw {
                holder: csv.holder()?,
                account_type: csv.required_type()?,
                amount: csv.required_amount()?,
            }),
        }
    }
}
