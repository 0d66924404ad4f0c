use teller::{
    request::Request,
    stream_requests,
    teller::{OpenOutcome, Teller},
};

use anyhow::Result;
use std::env;
use std::path::Path;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    let csv_path = parse_args();
    validate_csv_file(&csv_path);
    process_requests(&csv_path).await
}

fn parse_args() -> String {
    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => "requests.csv".to_string(),
        2 => args[1].clone(),
        _ => {
            eprintln!("Usage: {} [csv_file]", args[0]);
            eprintln!("  csv_file: Path to a teller request CSV (default: requests.csv)");
            std::process::exit(1);
        }
    }
}

fn validate_csv_file(path: &str) {
    if !Path::new(path).exists() {
        eprintln!("Error: File '{}' does not exist", path);
        std::process::exit(1);
    }

    if !path.to_lowercase().ends_with(".csv") {
        eprintln!("Error: File '{}' is not a CSV file", path);
        std::process::exit(1);
    }
}

async fn process_requests(csv_path: &str) -> Result<()> {
    println!("Processing requests from: {}", csv_path);
    let rows = stream_requests(csv_path)?;

    // Requests flow through a channel into the teller task.
    let (tx_channel, mut rx) = mpsc::channel::<Request>(100);

    let worker = tokio::spawn(async move {
        let mut teller = Teller::new();

        while let Some(request) = rx.recv().await {
            handle_request(&mut teller, request);
        }
    });

    for row in rows {
        match row {
            Ok(csv_request) => match Request::try_from(csv_request) {
                Ok(request) => tx_channel.send(request).await.expect("Receiver dropped"),
                Err(e) => println!("{}", e),
            },
            Err(e) => {
                eprintln!("Skipping invalid CSV line: {}", e);
            }
        }
    }

    drop(tx_channel);
    worker.await?;

    Ok(())
}

fn handle_request(teller: &mut Teller, request: Request) {
    match request {
        Request::Open {
            holder,
            spec,
            deposit,
        } => match teller.open_account(holder, spec, deposit) {
            Ok(OpenOutcome::Opened) => println!("Account opened."),
            Ok(OpenOutcome::Reopened) => println!("Account reopened."),
            Err(e) => println!("{}", e),
        },
        Request::Close {
            holder,
            account_type,
        } => match teller.close_account(holder, account_type) {
            Ok(()) => println!("Account closed."),
            Err(e) => println!("{}", e),
        },
        Request::Deposit {
            holder,
            account_type,
            amount,
        } => match teller.deposit_to(holder, account_type, amount) {
            Ok(()) => println!("Deposit - balance updated."),
            Err(e) => println!("{}", e),
        },
        Request::Withdraw {
            holder,
            account_type,
            amount,
        } => match teller.withdraw_from(holder, account_type, amount) {
            Ok(()) => println!("Withdraw - balance updated."),
            Err(e) => println!("{}", e),
        },
        Request::ListAll => {
            if teller.is_empty() {
                println!("Account Database is empty!");
            } else {
                print_report("*list of accounts in the database*", teller.list_accounts());
            }
        }
        Request::ListByType => {
            if teller.is_empty() {
                println!("Account Database is empty!");
            } else {
                print_report("*list of accounts by account type*", teller.list_by_type());
            }
        }
        Request::ListFeesAndInterest => {
            if teller.is_empty() {
                println!("Account Database is empty!");
            } else {
                print_report(
                    "*list of accounts with fee and monthly interest*",
                    teller.list_fee_and_interest(),
                );
            }
        }
        Request::UpdateBalances => {
            if teller.is_empty() {
                println!("Account Database is empty!");
            } else {
                teller.apply_monthly_updates();
                print_report(
                    "*list of accounts with updated balance*",
                    teller.list_accounts(),
                );
            }
        }
    }
}

fn print_report(header: &str, lines: Vec<String>) {
    println!("{}", header);
    for line in lines {
        println!("{}", line);
    }
    println!("*end of list*");
}
