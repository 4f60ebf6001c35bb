use serde::{Deserialize, Serialize};

/// The monetary columns of the source table, in the order returned by
/// [`RawRow::money_fields`]. Columns absent from a given file load as 0.
pub const MONEY_COLUMNS: [&str; 17] = [
    "SALARIO MENSUAL INDIVIDUAL",
    "Prestaciones AVG",
    "Prestaciones Ajustado",
    "Prima Servicios",
    "Cesantías",
    "Intereses Cesantias",
    "Vacaciones",
    "SENA",
    "ICBF",
    "Caja de Compensación",
    "Salud",
    "Pensión",
    "ARL (2% avg)",
    "Total Mensual (COP)",
    "Anual (COP)",
    "Mensual (USD)",
    "Anual (USD)",
];

/// Columns the loader refuses to proceed without.
pub const REQUIRED_COLUMNS: [&str; 3] = ["DEPARTAMENTO", "Nivel", "CANTIDAD"];

/// One row of the payroll CSV exactly as it appears on disk. Every field is
/// optional text; cleaning and typing happen in the loader.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawRow {
    #[serde(rename = "DEPARTAMENTO")]
    pub department: Option<String>,
    #[serde(rename = "Nivel")]
    pub level: Option<String>,
    #[serde(rename = "CANTIDAD")]
    pub quantity: Option<String>,
    #[serde(rename = "SALARIO MENSUAL INDIVIDUAL")]
    pub monthly_salary: Option<String>,
    #[serde(rename = "Prestaciones AVG")]
    pub benefits_avg: Option<String>,
    #[serde(rename = "Prestaciones Ajustado")]
    pub benefits_adjusted: Option<String>,
    #[serde(rename = "Prima Servicios")]
    pub service_bonus: Option<String>,
    #[serde(rename = "Cesantías")]
    pub severance: Option<String>,
    #[serde(rename = "Intereses Cesantias")]
    pub severance_interest: Option<String>,
    #[serde(rename = "Vacaciones")]
    pub vacation: Option<String>,
    #[serde(rename = "SENA")]
    pub sena: Option<String>,
    #[serde(rename = "ICBF")]
    pub icbf: Option<String>,
    #[serde(rename = "Caja de Compensación")]
    pub compensation_fund: Option<String>,
    #[serde(rename = "Salud")]
    pub health: Option<String>,
    #[serde(rename = "Pensión")]
    pub pension: Option<String>,
    #[serde(rename = "ARL (2% avg)")]
    pub arl: Option<String>,
    #[serde(rename = "Total Mensual (COP)")]
    pub total_monthly_cop: Option<String>,
    #[serde(rename = "Anual (COP)")]
    pub annual_cop: Option<String>,
    #[serde(rename = "Mensual (USD)")]
    pub monthly_usd: Option<String>,
    #[serde(rename = "Anual (USD)")]
    pub annual_usd: Option<String>,
}

impl RawRow {
    /// Raw monetary values in [`MONEY_COLUMNS`] order.
    pub fn money_fields(&self) -> [Option<&str>; 17] {
        [
            self.monthly_salary.as_deref(),
            self.benefits_avg.as_deref(),
            self.benefits_adjusted.as_deref(),
            self.service_bonus.as_deref(),
            self.severance.as_deref(),
            self.severance_interest.as_deref(),
            self.vacation.as_deref(),
            self.sena.as_deref(),
            self.icbf.as_deref(),
            self.compensation_fund.as_deref(),
            self.health.as_deref(),
            self.pension.as_deref(),
            self.arl.as_deref(),
            self.total_monthly_cop.as_deref(),
            self.annual_cop.as_deref(),
            self.monthly_usd.as_deref(),
            self.annual_usd.as_deref(),
        ]
    }
}

/// One cleaned row. A record may represent several identical positions
/// (`quantity`); every monetary field is a plain number with missing values
/// already zero-filled. Immutable once the loader hands it out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeRecord {
    pub department: String,
    pub level: String,
    pub quantity: f64,
    pub monthly_salary: f64,
    pub benefits_avg: f64,
    pub benefits_adjusted: f64,
    pub service_bonus: f64,
    pub severance: f64,
    pub severance_interest: f64,
    pub vacation: f64,
    pub sena: f64,
    pub icbf: f64,
    pub compensation_fund: f64,
    pub health: f64,
    pub pension: f64,
    pub arl: f64,
    pub total_monthly_cop: f64,
    pub annual_cop: f64,
    pub monthly_usd: f64,
    pub annual_usd: f64,
}

/// Five-number salary summary for one department (box-plot panel).
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryDistribution {
    pub department: String,
    pub positions: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Headcount (sum of quantity) for one level.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelHeadcount {
    pub level: String,
    pub headcount: f64,
}

/// Total monthly cost for one department.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentCost {
    pub department: String,
    pub total_monthly_cop: f64,
}

/// One scatter point: a position's salary against its average benefits,
/// annotated by level and weighted by quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryBenefitsPoint {
    pub level: String,
    pub monthly_salary: f64,
    pub benefits_avg: f64,
    pub quantity: f64,
}

/// Mean of one statutory component over the view, plus its share of the
/// six-component total (pie panel).
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentShare {
    pub component: String,
    pub mean: f64,
    pub share_pct: f64,
}

/// The three scalar metric tiles. `avg_monthly_salary` is `None` when the
/// filtered view is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMetrics {
    pub total_headcount: f64,
    pub total_monthly_cost: f64,
    pub avg_monthly_salary: Option<f64>,
}

/// One row of the department summary table, rounded to two decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentSummary {
    pub department: String,
    pub headcount: f64,
    pub avg_monthly_salary: f64,
    pub total_monthly_cop: f64,
}

/// Contents of the exported `summary.json`.
#[derive(Debug, Serialize)]
pub struct SummaryExport {
    pub generated_at: String,
    pub departments: Vec<String>,
    pub levels: Vec<String>,
    pub total_headcount: f64,
    pub total_monthly_cost_cop: f64,
    pub avg_monthly_salary_cop: Option<f64>,
}
