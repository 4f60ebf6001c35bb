use crate::types::{EmployeeRecord, RawRow, MONEY_COLUMNS, REQUIRED_COLUMNS};
use crate::util::{coerce_numeric, fill_missing, parse_money};
use csv::ReaderBuilder;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Classified load failures. All three are terminal for the current render
/// pass: no dataset is produced and the caller surfaces a single message.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {0}. Please check the path and file name")]
    NotFound(String),
    #[error("could not parse the CSV file: {0}. Check that the file is well-formed")]
    Parse(String),
    #[error("unexpected error while loading data: {0}")]
    Unknown(String),
}

impl LoadError {
    fn from_csv(path: &Path, err: csv::Error) -> Self {
        match err.kind() {
            csv::ErrorKind::Io(io_err) if io_err.kind() == io::ErrorKind::NotFound => {
                LoadError::NotFound(path.display().to_string())
            }
            csv::ErrorKind::Io(_) => LoadError::Unknown(err.to_string()),
            _ => LoadError::Parse(err.to_string()),
        }
    }
}

/// Diagnostics from one cleaning pass, printed after a load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    pub rows: usize,
    pub money_cells_zeroed: usize,
    pub quantity_defaulted: usize,
}

/// Read the payroll CSV and run the cleaning pass.
///
/// Per-value problems are never errors: blank or unparseable money becomes
/// 0, blank or unparseable quantity becomes 1, and both are counted in the
/// report. A structural problem in the file (a bad row, a missing required
/// column) fails the whole load; there is no partial dataset.
pub fn load_and_clean(path: &Path) -> Result<(Vec<EmployeeRecord>, LoadReport), LoadError> {
    let mut rdr = ReaderBuilder::new()
        .from_path(path)
        .map_err(|e| LoadError::from_csv(path, e))?;

    let headers = rdr
        .headers()
        .map_err(|e| LoadError::from_csv(path, e))?
        .clone();
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            // A structurally fine file that lacks a required column is the
            // generic failure, not a parse error.
            return Err(LoadError::Unknown(format!(
                "column '{}' is missing from the table",
                required
            )));
        }
    }
    // Cells from columns that simply are not in this file should not show
    // up in the diagnostics as "zeroed".
    let money_present: Vec<bool> = MONEY_COLUMNS
        .iter()
        .map(|col| headers.iter().any(|h| h == *col))
        .collect();

    let mut report = LoadReport::default();
    let mut rows: Vec<EmployeeRecord> = Vec::new();
    for result in rdr.deserialize::<RawRow>() {
        let raw = result.map_err(|e| LoadError::from_csv(path, e))?;
        rows.push(clean_row(raw, &money_present, &mut report));
    }
    report.rows = rows.len();
    Ok((rows, report))
}

fn clean_row(raw: RawRow, money_present: &[bool], report: &mut LoadReport) -> EmployeeRecord {
    let department = normalize_category(raw.department.as_deref(), "Unknown");
    let level = normalize_category(raw.level.as_deref(), "Unspecified");

    let parsed_quantity = coerce_numeric(raw.quantity.as_deref());
    if parsed_quantity.is_none() {
        report.quantity_defaulted += 1;
    }
    let quantity = fill_missing(parsed_quantity, 1.0);

    let raw_money = raw.money_fields();
    let money: [f64; 17] = std::array::from_fn(|i| {
        let parsed = parse_money(raw_money[i]);
        if parsed.is_none() && money_present[i] {
            report.money_cells_zeroed += 1;
        }
        fill_missing(parsed, 0.0)
    });
    // Destructured in MONEY_COLUMNS order.
    let [monthly_salary, benefits_avg, benefits_adjusted, service_bonus, severance, severance_interest, vacation, sena, icbf, compensation_fund, health, pension, arl, total_monthly_cop, annual_cop, monthly_usd, annual_usd] =
        money;

    EmployeeRecord {
        department,
        level,
        quantity,
        monthly_salary,
        benefits_avg,
        benefits_adjusted,
        service_bonus,
        severance,
        severance_interest,
        vacation,
        sena,
        icbf,
        compensation_fund,
        health,
        pension,
        arl,
        total_monthly_cop,
        annual_cop,
        monthly_usd,
        annual_usd,
    }
}

fn normalize_category(value: Option<&str>, fallback: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}
