//! Integration tests for runway-core
//!
//! These tests exercise the full load → detect → forecast → outlook workflow.

use chrono::{Duration, NaiveDate};
use runway_core::{
    analyze_outlook, current_balance,
    import::parse_csv,
    models::{ForecastStatus, Transaction, TransactionType},
    EngineConfig, ForecastGenerator, OutlookConfig, PatternDetector, Severity,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn expense(d: NaiveDate, amount: f64, category: &str, description: &str) -> Transaction {
    Transaction::new(d, amount, TransactionType::Expense, category, description)
}

fn income(d: NaiveDate, amount: f64, description: &str) -> Transaction {
    Transaction::new(d, amount, TransactionType::Income, "Income", description)
}

/// Six months of history with rent, a streaming service, salary, a one-off
/// purchase, plus a few already-booked future transactions.
fn household_csv() -> &'static str {
    r#"date,amount,type,category,description
2026-05-01,1200.00,expense,Housing,Rent
2026-06-01,1200.00,expense,Housing,Rent
2026-07-01,1200.00,expense,Housing,Rent
2026-08-01,1250.00,expense,Housing,Rent
2026-09-01,1250.00,expense,Housing,Rent
2026-10-01,1250.00,expense,Housing,rent
2026-08-12,15.49,expense,Streaming,NETFLIX
2026-09-12,15.49,expense,Streaming,Netflix
2026-10-12,15.49,expense,Streaming,netflix
2026-09-25,3100.00,income,Salary,Payroll
2026-08-25,3100.00,income,Salary,Payroll
2026-07-19,250.00,expense,Fun,Concert Ticket
2026-10-25,3100.00,income,Salary,Payroll
2026-11-03,640.00,expense,Insurance,Car insurance
"#
}

// =============================================================================
// Example scenarios
// =============================================================================

#[test]
fn test_netflix_projected_next_month() {
    let txs = vec![
        expense(date(2026, 8, 16), 39.90, "Streaming", "Netflix"),
        expense(date(2026, 9, 16), 39.90, "Streaming", "Netflix"),
    ];

    let forecast = ForecastGenerator::new().generate_with_horizon(&txs, 0.0, today(), 1);

    assert_eq!(forecast.forecast.len(), 1);
    let item = &forecast.forecast[0];
    assert_eq!(item.description, "Netflix");
    assert_eq!(item.amount, 39.90);
    assert_eq!(item.date, date(2026, 11, 16));
    assert_eq!(item.status, ForecastStatus::Predicted);
    assert_eq!(item.kind, TransactionType::Expense);
}

#[test]
fn test_one_off_purchase_not_projected() {
    let txs = vec![expense(date(2026, 8, 16), 250.0, "Fun", "Concert Ticket")];

    let patterns = PatternDetector::new().detect(&txs, today());
    assert!(patterns.is_empty());

    let forecast = ForecastGenerator::new().generate(&txs, 0.0, today());
    assert!(forecast
        .forecast
        .iter()
        .all(|i| i.description != "Concert Ticket"));
}

#[test]
fn test_empty_ledger_gives_empty_forecast() {
    let forecast = ForecastGenerator::new().generate_with_horizon(&[], 1000.0, today(), 3);
    assert!(forecast.forecast.is_empty());
    assert!(forecast.projected_balance.is_empty());
}

#[test]
fn test_confirmed_future_income() {
    let payday = today() + Duration::days(10);
    let txs = vec![income(payday, 3000.0, "Bonus")];

    let forecast = ForecastGenerator::new().generate(&txs, 500.0, today());

    assert_eq!(forecast.forecast.len(), 1);
    assert_eq!(forecast.forecast[0].kind, TransactionType::Income);
    assert_eq!(forecast.forecast[0].status, ForecastStatus::Confirmed);
    assert_eq!(forecast.projected_balance.len(), 1);
    assert_eq!(forecast.projected_balance[0].date, payday);
    assert_eq!(forecast.projected_balance[0].balance, 3500.0);
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_forecast_is_deterministic() {
    let txs = parse_csv(household_csv().as_bytes()).unwrap();
    let generator = ForecastGenerator::new();

    let a = generator.generate(&txs, 2000.0, today());
    let b = generator.generate(&txs, 2000.0, today());

    assert_eq!(a, b);
    assert_eq!(a.digest(), b.digest());
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn test_balance_accumulation_and_sort_order() {
    let txs = parse_csv(household_csv().as_bytes()).unwrap();
    let forecast = ForecastGenerator::new().generate(&txs, 2000.0, today());

    assert_eq!(forecast.forecast.len(), forecast.projected_balance.len());
    assert!(!forecast.forecast.is_empty());

    let opening = 2000.0 + forecast.forecast[0].signed_amount();
    assert!((forecast.projected_balance[0].balance - opening).abs() < 1e-9);

    for i in 1..forecast.forecast.len() {
        let expected =
            forecast.projected_balance[i - 1].balance + forecast.forecast[i].signed_amount();
        assert!((forecast.projected_balance[i].balance - expected).abs() < 1e-9);

        assert!(forecast.forecast[i - 1].date <= forecast.forecast[i].date);
        assert!(forecast.projected_balance[i - 1].date <= forecast.projected_balance[i].date);
        assert_eq!(forecast.forecast[i].date, forecast.projected_balance[i].date);
    }
}

#[test]
fn test_confirmed_pass_through() {
    let txs = parse_csv(household_csv().as_bytes()).unwrap();
    let forecast = ForecastGenerator::new().generate(&txs, 0.0, today());

    let future: Vec<_> = txs.iter().filter(|t| t.date > today()).collect();
    assert_eq!(future.len(), 2);
    assert_eq!(forecast.confirmed().count(), future.len());

    for tx in future {
        assert!(forecast.confirmed().any(|item| item.date == tx.date
            && item.amount == tx.amount
            && item.category == tx.category
            && item.description == tx.description
            && item.kind == tx.kind));
    }
}

#[test]
fn test_no_expenses_means_only_confirmed() {
    let txs = vec![
        income(date(2026, 8, 25), 3100.0, "Payroll"),
        income(date(2026, 9, 25), 3100.0, "Payroll"),
        income(date(2026, 10, 25), 3100.0, "Payroll"),
    ];

    assert!(PatternDetector::new().detect(&txs, today()).is_empty());

    let forecast = ForecastGenerator::new().generate(&txs, 0.0, today());
    assert_eq!(forecast.forecast.len(), 1);
    assert_eq!(forecast.predicted().count(), 0);
}

// =============================================================================
// Full workflow
// =============================================================================

#[test]
fn test_household_workflow() {
    let txs = parse_csv(household_csv().as_bytes()).unwrap();
    assert_eq!(txs.len(), 14);

    let patterns = PatternDetector::new().detect(&txs, today());
    assert_eq!(patterns.len(), 2);

    let rent = &patterns[0];
    assert_eq!(rent.description, "rent");
    assert_eq!(rent.category, "Housing");
    assert_eq!(rent.avg_amount, 1225.0);
    assert_eq!(rent.last_occurrence, date(2026, 10, 1));

    let netflix = &patterns[1];
    assert_eq!(netflix.description, "netflix");
    assert_eq!(netflix.last_occurrence, date(2026, 10, 12));

    let balance = current_balance(&txs, today());
    let forecast = ForecastGenerator::new().generate(&txs, balance, today());

    // 2 patterns x 3 months + 2 confirmed
    assert_eq!(forecast.predicted().count(), 6);
    assert_eq!(forecast.confirmed().count(), 2);
    assert_eq!(forecast.forecast[0].date, date(2026, 10, 25));
    assert_eq!(forecast.forecast.last().unwrap().date, date(2027, 1, 12));

    // No reconciliation: the booked insurance and projected rent both stay
    assert!(forecast
        .forecast
        .iter()
        .any(|i| i.description == "Car insurance" && i.status == ForecastStatus::Confirmed));
}

#[test]
fn test_outlook_flags_shortfall() {
    let txs = parse_csv(household_csv().as_bytes()).unwrap();
    let forecast = ForecastGenerator::new().generate(&txs, 100.0, today());

    let outlook = analyze_outlook(&forecast, &OutlookConfig::default());
    assert!(outlook.at_risk);
    assert_eq!(outlook.severity, Severity::Alert);
    // Rent projections are the only predicted items above 500
    assert_eq!(outlook.large_bills.len(), 3);
    assert!(outlook.large_bills.iter().all(|b| b.description == "rent"));
}

#[test]
fn test_six_month_window_from_config() {
    let txs = vec![
        expense(date(2026, 3, 20), 80.0, "Health", "Gym"),
        expense(date(2026, 9, 20), 80.0, "Health", "Gym"),
    ];

    let seven = EngineConfig::default().generator().generate(&txs, 0.0, today());
    assert_eq!(seven.predicted().count(), 3);

    let six = EngineConfig::parse("[detection]\nlookback_months = 6\n")
        .unwrap()
        .generator()
        .generate(&txs, 0.0, today());
    assert_eq!(six.predicted().count(), 0);
}

#[test]
fn test_day_31_clamped_in_short_months() {
    let txs = vec![
        expense(date(2026, 8, 31), 60.0, "Utilities", "Water"),
        expense(date(2026, 10, 1), 60.0, "Utilities", "Water"),
        expense(date(2026, 7, 31), 90.0, "Utilities", "Power"),
        expense(date(2026, 8, 31), 90.0, "Utilities", "Power"),
    ];

    let forecast = ForecastGenerator::new().generate(&txs, 0.0, today());
    let power_dates: Vec<_> = forecast
        .predicted()
        .filter(|i| i.description == "Power")
        .map(|i| i.date)
        .collect();

    assert_eq!(
        power_dates,
        vec![date(2026, 11, 30), date(2026, 12, 31), date(2027, 1, 31)]
    );
}
