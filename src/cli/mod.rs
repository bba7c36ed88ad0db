//! CLI command handlers
//!
//! This module contains the implementation of the one-shot CLI commands,
//! bridging the clap argument parsing with the service layer. The
//! interactive dashboard lives in `tui`.

use crate::config::{PlannerPaths, Settings};
use crate::display::{format_comparison, format_ledger_summary, format_plan_table};
use crate::error::{PlannerError, PlannerResult};
use crate::models::{parse_amount, IncomeSources};
use crate::predict::{prediction_history, PredictionClient};
use crate::services::PlannerSession;

/// Handle `famplan plan <arecanut> <salary> <coconut>`
///
/// Computes and prints the suggested yearly plan, and — since a one-shot
/// invocation has an empty ledger — the comparison against zero expenses.
pub fn handle_plan_command(
    settings: &Settings,
    arecanut: &str,
    salary: &str,
    coconut: &str,
) -> PlannerResult<()> {
    let mut session = PlannerSession::new();
    session.set_income(IncomeSources::new(
        parse_income_arg("arecanut", arecanut)?,
        parse_income_arg("salary", salary)?,
        parse_income_arg("coconut", coconut)?,
    ));

    let plan = session.compute_plan()?;
    println!("{}", format_plan_table(&plan, &settings.currency_symbol));

    if let Some(comparison) = session.comparison() {
        let summary = session.ledger_summary();
        println!();
        println!(
            "{}",
            format_comparison(
                comparison,
                summary.projected_yearly_expense,
                &settings.currency_symbol
            )
        );
    }

    Ok(())
}

/// Handle `famplan predict --spent <amount>`
///
/// Sends the placeholder history plus the given current-month total to
/// the prediction service and prints the predicted next-month expense.
pub fn handle_predict_command(settings: &Settings, spent: &str) -> PlannerResult<()> {
    let spent = parse_amount(spent)
        .map_err(|e| PlannerError::Validation(format!("spent: {}", e)))?;
    if spent < 0.0 {
        return Err(PlannerError::Validation(format!(
            "spent must be non-negative (got {})",
            spent
        )));
    }

    let client = PredictionClient::new(&settings.prediction_url);
    let history = prediction_history(spent);
    let predicted = client.predict_next_month(&history)?;

    println!(
        "Predicted expense for next month: {}{}",
        settings.currency_symbol,
        crate::models::format_amount(predicted)
    );

    Ok(())
}

/// Handle `famplan config`
pub fn handle_config_command(paths: &PlannerPaths, settings: &Settings) -> PlannerResult<()> {
    println!("famplan Configuration");
    println!("=====================");
    println!("Config directory: {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!();
    println!("Settings:");
    println!("  Prediction service: {}", settings.prediction_url);
    println!("  Currency symbol:    {}", settings.currency_symbol);
    Ok(())
}

/// Handle `famplan summary` demo output for a set of expenses
///
/// Exists for scripting: `famplan summary Food:1000 Rent:5000 Food:500`
/// prints the aggregation a dashboard session would show.
pub fn handle_summary_command(settings: &Settings, entries: &[String]) -> PlannerResult<()> {
    let mut session = PlannerSession::new();

    for (i, raw) in entries.iter().enumerate() {
        let (category, amount) = raw.split_once(':').ok_or_else(|| {
            PlannerError::Validation(format!(
                "entry {} must look like Category:Amount (got '{}')",
                i + 1,
                raw
            ))
        })?;

        let parsed_category = category
            .parse()
            .map_err(|e| PlannerError::Validation(format!("entry {}: {}", i + 1, e)))?;
        let parsed_amount = parse_amount(amount)
            .map_err(|e| PlannerError::Validation(format!("entry {}: {}", i + 1, e)))?;

        session.add_expense(format!("{} #{}", category, i + 1), parsed_amount, parsed_category)?;
    }

    let summary = session.ledger_summary();
    println!(
        "{}",
        format_ledger_summary(&summary, &settings.currency_symbol)
    );
    Ok(())
}

fn parse_income_arg(name: &'static str, raw: &str) -> PlannerResult<f64> {
    parse_amount(raw).map_err(|e| PlannerError::InvalidInput(format!("{}: {}", name, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_command_rejects_garbage() {
        let settings = Settings::default();
        let result = handle_plan_command(&settings, "abc", "180000", "120000");
        assert!(matches!(result, Err(PlannerError::InvalidInput(_))));
    }

    #[test]
    fn test_plan_command_rejects_negative() {
        let settings = Settings::default();
        let result = handle_plan_command(&settings, "-650000", "180000", "120000");
        assert!(matches!(result, Err(PlannerError::InvalidInput(_))));
    }

    #[test]
    fn test_plan_command_scenario() {
        let settings = Settings::default();
        let result = handle_plan_command(&settings, "650000", "180000", "120000");
        assert!(result.is_ok());
    }

    #[test]
    fn test_summary_command_rejects_bad_entry() {
        let settings = Settings::default();
        let err =
            handle_summary_command(&settings, &["Food1000".to_string()]).unwrap_err();
        assert!(err.is_validation());

        let err =
            handle_summary_command(&settings, &["Groceries:1000".to_string()]).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_summary_command_scenario() {
        let settings = Settings::default();
        let entries = vec![
            "Food:1000".to_string(),
            "Rent:5000".to_string(),
            "Food:500".to_string(),
        ];
        assert!(handle_summary_command(&settings, &entries).is_ok());
    }

    #[test]
    fn test_predict_command_rejects_negative_spent() {
        let settings = Settings::default();
        let err = handle_predict_command(&settings, "-10").unwrap_err();
        assert!(err.is_validation());
    }
}
