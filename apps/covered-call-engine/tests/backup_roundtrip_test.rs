//! Backup Round-Trip Tests
//!
//! Export → file → import must preserve every stored field, and metrics
//! derived from the imported records must match the originals.

#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use covered_call_engine::domain::shared::{PositionId, Timestamp};
use covered_call_engine::infrastructure::backup::{
    BackupError, export_backup, import_backup, read_backup_file, write_backup_file,
};
use covered_call_engine::{NewPosition, Position, Ticker, enrich};

fn date(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn aapl() -> NewPosition {
    NewPosition {
        account: "Roth IRA".to_string(),
        ticker: Ticker::new("AAPL"),
        option_ticker: None,
        strike_price: dec!(152.5),
        stock_price: dec!(148.37),
        quantity: 3,
        open_date: date(2025, 1, 6),
        expiration_date: date(2025, 2, 21),
        premium_per_contract: dec!(1.875),
        fees: dec!(1.95).into(),
        current_option_price: dec!(0.6667),
    }
}

fn portfolio() -> Vec<Position> {
    let open = Position::open(PositionId::new("aapl-1"), aapl()).unwrap();
    let mut closed = Position::open(PositionId::new("aapl-2"), aapl()).unwrap();
    closed
        .close(dec!(0.05), Timestamp::parse("2025-02-14T20:59:59Z").unwrap())
        .unwrap();
    vec![open, closed]
}

#[test]
fn file_round_trip_preserves_records_and_metrics() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("positions-backup.json");
    let original = portfolio();

    let backup = export_backup(&original, Timestamp::parse("2025-02-15T00:00:00Z").unwrap());
    write_backup_file(&path, &backup).unwrap();
    let report = read_backup_file(&path).unwrap();

    assert_eq!(report.total, 2);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.imported, original);

    let today = date(2025, 2, 15);
    for (before, after) in original.iter().zip(&report.imported) {
        assert_eq!(enrich(before, today), enrich(after, today));
    }
}

#[test]
fn option_ticker_survives_round_trip() {
    let json = serde_json::to_string(&export_backup(
        &portfolio(),
        Timestamp::parse("2025-02-15T00:00:00Z").unwrap(),
    ))
    .unwrap();
    let report = import_backup(&json).unwrap();
    assert_eq!(
        report.imported[0].option_ticker(),
        Some("AAPL250221C00152500")
    );
}

#[test]
fn closed_record_without_close_price_is_skipped() {
    let json = r#"{"positions": [
        {"id": "x", "account": "IRA", "ticker": "SPY", "strike_price": "460",
         "stock_price": "450", "quantity": 1, "open_date": "2025-01-01",
         "expiration_date": "2025-01-31", "premium_per_contract": "2.5",
         "status": "Closed"}
    ]}"#;
    let report = import_backup(json).unwrap();
    assert!(report.imported.is_empty());
    assert_eq!(report.skipped, 1);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_backup_file(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, BackupError::Io { .. }));
}
