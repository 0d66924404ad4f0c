use teller::account::AccountType;
use teller::request::{Action, Request};
use teller::stream_requests;
use teller::teller::Teller;

use std::fs;
use tempfile::NamedTempFile;

#[test]
fn test_stream_requests_valid_csv() {
    let temp_file = NamedTempFile::new().unwrap();
    let csv_content = r#"action,type,first,last,dob,amount,campus,loyal
open,checking,john,doe,1/1/1990,500,,
deposit,checking,john,doe,1/1/1990,100.25,,
withdraw,checking,john,doe,1/1/1990,50,,
list,,,,,,,"#;

    fs::write(&temp_file, csv_content).unwrap();

    let rows: Vec<_> = stream_requests(temp_file.path().to_str().unwrap())
        .unwrap()
        .collect();

    assert_eq!(rows.len(), 4);

    let first = rows[0].as_ref().unwrap();
    assert_eq!(first.action, Action::Open);
    assert_eq!(first.account_type, Some(AccountType::Checking));
    assert_eq!(first.amount, Some(500.0));

    let second = rows[1].as_ref().unwrap();
    assert_eq!(second.action, Action::Deposit);
    assert_eq!(second.amount, Some(100.25));

    let last = rows[3].as_ref().unwrap();
    assert_eq!(last.action, Action::List);
    assert_eq!(last.account_type, None);
    assert_eq!(last.amount, None);
}

#[test]
fn test_stream_requests_empty_csv() {
    let temp_file = NamedTempFile::new().unwrap();
    let csv_content = r#"action,type,first,last,dob,amount,campus,loyal"#; // Only header

    fs::write(&temp_file, csv_content).unwrap();

    let rows: Vec<_> = stream_requests(temp_file.path().to_str().unwrap())
        .unwrap()
        .collect();

    assert_eq!(rows.len(), 0);
}

#[test]
fn test_stream_requests_missing_amount() {
    let temp_file = NamedTempFile::new().unwrap();
    let csv_content = r#"action,type,first,last,dob,amount,campus,loyal
withdraw,savings,sue,lee,3/4/1985,,,
deposit,savings,sue,lee,3/4/1985,25.50,,"#;

    fs::write(&temp_file, csv_content).unwrap();

    let mut rows = stream_requests(temp_file.path().to_str().unwrap()).unwrap();

    let first = rows.next().unwrap().unwrap();
    assert_eq!(first.amount, None);
    // Presence is enforced by the Request conversion, not the CSV layer.
    assert!(Request::try_from(first).is_err());

    let second = rows.next().unwrap().unwrap();
    assert_eq!(second.amount, Some(25.50));
    assert!(rows.next().is_none());
}

#[test]
fn test_stream_requests_invalid_file() {
    let result = stream_requests("nonexistent_file.csv");
    assert!(result.is_err());
}

#[test]
fn test_stream_requests_large_file() {
    let temp_file = NamedTempFile::new().unwrap();
    let mut csv_content = String::from("action,type,first,last,dob,amount,campus,loyal\n");

    // One checking account per generated holder.
    for i in 1..=100 {
        csv_content.push_str(&format!("open,checking,holder{},doe,1/1/1990,{},,\n", i, i * 10));
    }

    fs::write(&temp_file, csv_content).unwrap();

    let rows: Vec<_> = stream_requests(temp_file.path().to_str().unwrap())
        .unwrap()
        .collect();

    assert_eq!(rows.len(), 100);

    let row_50 = rows[49].as_ref().unwrap();
    assert_eq!(row_50.first.as_deref(), Some("holder50"));
    assert_eq!(row_50.amount, Some(500.0));
}

#[test]
fn test_batch_drives_the_teller_end_to_end() {
    let temp_file = NamedTempFile::new().unwrap();
    let csv_content = r#"action,type,first,last,dob,amount,campus,loyal
open,checking,john,doe,1/1/1990,500,,
open,savings,sue,lee,3/4/1985,400,,1
open,money_market,amy,poe,6/7/1980,2500,,
open,college_checking,kim,ray,9/9/2001,300,1,
deposit,checking,john,doe,1/1/1990,600,,
withdraw,money_market,amy,poe,6/7/1980,1,,
close,savings,sue,lee,3/4/1985,,,"#;

    fs::write(&temp_file, csv_content).unwrap();

    let mut teller = Teller::new();
    for row in stream_requests(temp_file.path().to_str().unwrap()).unwrap() {
        let request = Request::try_from(row.unwrap()).unwrap();
        apply(&mut teller, request);
    }

    let lines = teller.list_accounts();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Checking::John Doe 1/1/1990::Balance $1,100.00");
    assert_eq!(lines[1], "Savings::Sue Lee 3/4/1985::Balance $0.00::CLOSED");
    assert_eq!(
        lines[2],
        "Money Market Savings::Amy Poe 6/7/1980::Balance $2,499.00::withdrawal: 1"
    );
    assert_eq!(
        lines[3],
        "College Checking::Kim Ray 9/9/2001::Balance $300.00::NEWARK"
    );
}

#[test]
fn test_batch_duplicate_and_insufficient_requests_leave_state_intact() {
    let temp_file = NamedTempFile::new().unwrap();
    let csv_content = r#"action,type,first,last,dob,amount,campus,loyal
open,checking,john,doe,1/1/1990,500,,
open,checking,john,doe,1/1/1990,900,,
withdraw,checking,john,doe,1/1/1990,500,,"#;

    fs::write(&temp_file, csv_content).unwrap();

    let mut teller = Teller::new();
    let mut failures = 0;
    for row in stream_requests(temp_file.path().to_str().unwrap()).unwrap() {
        let request = Request::try_from(row.unwrap()).unwrap();
        if !apply(&mut teller, request) {
            failures += 1;
        }
    }

    // The duplicate open and the full-balance withdrawal both fail.
    assert_eq!(failures, 2);
    let lines = teller.list_accounts();
    assert_eq!(lines, vec!["Checking::John Doe 1/1/1990::Balance $500.00"]);
}

/// Feeds one request to the teller, reporting success as a bool.
fn apply(teller: &mut Teller, request: Request) -> bool {
    match request {
        Request::Open {
            holder,
            spec,
            deposit,
        } => teller.open_account(holder, spec, deposit).is_ok(),
        Request::Close {
            holder,
            account_type,
        } => teller.close_account(holder, account_type).is_ok(),
        Request::Deposit {
            holder,
            account_type,
            amount,
        } => teller.deposit_to(holder, account_type, amount).is_ok(),
        Request::Withdraw {
            holder,
            account_type,
            amount,
        } => teller.withdraw_from(holder, account_type, amount).is_ok(),
        Request::ListAll => !teller.list_accounts().is_empty(),
        Request::ListByType => !teller.list_by_type().is_empty(),
        Request::ListFeesAndInterest => !teller.list_fee_and_interest().is_empty(),
        Request::UpdateBalances => {
            teller.apply_monthly_updates();
            true
        }
    }
}
