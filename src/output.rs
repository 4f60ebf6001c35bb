// Rendering and export.
//
// The view functions return plain numbers; everything here is about turning
// them into console tables (`tabled`, markdown style), CSV exports, and the
// JSON summary. Display rows keep the Spanish column names of the source
// dataset.
use crate::types::{
    ComponentShare, DepartmentCost, DepartmentSummary, KeyMetrics, LevelHeadcount,
    SalaryBenefitsPoint, SalaryDistribution,
};
use crate::util::format_number;
use serde::Serialize;
use std::error::Error;
use tabled::{settings::Style, Table, Tabled};

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct SalaryDistributionRow {
    #[serde(rename = "Departamento")]
    #[tabled(rename = "Departamento")]
    pub department: String,
    #[serde(rename = "Posiciones")]
    #[tabled(rename = "Posiciones")]
    pub positions: usize,
    #[serde(rename = "Mínimo")]
    #[tabled(rename = "Mínimo")]
    pub min: String,
    #[serde(rename = "Q1")]
    #[tabled(rename = "Q1")]
    pub q1: String,
    #[serde(rename = "Mediana")]
    #[tabled(rename = "Mediana")]
    pub median: String,
    #[serde(rename = "Q3")]
    #[tabled(rename = "Q3")]
    pub q3: String,
    #[serde(rename = "Máximo")]
    #[tabled(rename = "Máximo")]
    pub max: String,
}

impl From<&SalaryDistribution> for SalaryDistributionRow {
    fn from(d: &SalaryDistribution) -> Self {
        SalaryDistributionRow {
            department: d.department.clone(),
            positions: d.positions,
            min: format_number(d.min, 2),
            q1: format_number(d.q1, 2),
            median: format_number(d.median, 2),
            q3: format_number(d.q3, 2),
            max: format_number(d.max, 2),
        }
    }
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct LevelHeadcountRow {
    #[serde(rename = "Nivel")]
    #[tabled(rename = "Nivel")]
    pub level: String,
    #[serde(rename = "Cantidad")]
    #[tabled(rename = "Cantidad")]
    pub headcount: String,
}

impl From<&LevelHeadcount> for LevelHeadcountRow {
    fn from(h: &LevelHeadcount) -> Self {
        LevelHeadcountRow {
            level: h.level.clone(),
            headcount: format_number(h.headcount, 0),
        }
    }
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct DepartmentCostRow {
    #[serde(rename = "Departamento")]
    #[tabled(rename = "Departamento")]
    pub department: String,
    #[serde(rename = "Total Mensual (COP)")]
    #[tabled(rename = "Total Mensual (COP)")]
    pub total_monthly_cop: String,
}

impl From<&DepartmentCost> for DepartmentCostRow {
    fn from(c: &DepartmentCost) -> Self {
        DepartmentCostRow {
            department: c.department.clone(),
            total_monthly_cop: format_number(c.total_monthly_cop, 2),
        }
    }
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct SalaryBenefitsRow {
    #[serde(rename = "Nivel")]
    #[tabled(rename = "Nivel")]
    pub level: String,
    #[serde(rename = "Salario Mensual")]
    #[tabled(rename = "Salario Mensual")]
    pub monthly_salary: String,
    #[serde(rename = "Prestaciones AVG")]
    #[tabled(rename = "Prestaciones AVG")]
    pub benefits_avg: String,
    #[serde(rename = "Cantidad")]
    #[tabled(rename = "Cantidad")]
    pub quantity: String,
}

impl From<&SalaryBenefitsPoint> for SalaryBenefitsRow {
    fn from(p: &SalaryBenefitsPoint) -> Self {
        SalaryBenefitsRow {
            level: p.level.clone(),
            monthly_salary: format_number(p.monthly_salary, 2),
            benefits_avg: format_number(p.benefits_avg, 2),
            quantity: format_number(p.quantity, 0),
        }
    }
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct ComponentShareRow {
    #[serde(rename = "Componente")]
    #[tabled(rename = "Componente")]
    pub component: String,
    #[serde(rename = "Promedio")]
    #[tabled(rename = "Promedio")]
    pub mean: String,
    #[serde(rename = "Participación %")]
    #[tabled(rename = "Participación %")]
    pub share_pct: String,
}

impl From<&ComponentShare> for ComponentShareRow {
    fn from(s: &ComponentShare) -> Self {
        ComponentShareRow {
            component: s.component.clone(),
            mean: format_number(s.mean, 2),
            share_pct: format_number(s.share_pct, 2),
        }
    }
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct DepartmentSummaryRow {
    #[serde(rename = "Departamento")]
    #[tabled(rename = "Departamento")]
    pub department: String,
    #[serde(rename = "Cantidad de Empleados")]
    #[tabled(rename = "Cantidad de Empleados")]
    pub headcount: String,
    #[serde(rename = "Salario Promedio")]
    #[tabled(rename = "Salario Promedio")]
    pub avg_monthly_salary: String,
    #[serde(rename = "Costo Total Mensual")]
    #[tabled(rename = "Costo Total Mensual")]
    pub total_monthly_cop: String,
}

impl From<&DepartmentSummary> for DepartmentSummaryRow {
    fn from(s: &DepartmentSummary) -> Self {
        DepartmentSummaryRow {
            department: s.department.clone(),
            headcount: format_number(s.headcount, 0),
            avg_monthly_salary: format_number(s.avg_monthly_salary, 2),
            total_monthly_cop: format_number(s.total_monthly_cop, 2),
        }
    }
}

pub fn write_csv<T: Serialize>(path: &str, rows: &[T]) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_path(path)?;
    for r in rows {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<T: Serialize>(path: &str, value: &T) -> Result<(), Box<dyn Error>> {
    let s = serde_json::to_string_pretty(value)?;
    std::fs::write(path, s)?;
    Ok(())
}

/// Print a full table in markdown style, or "(no rows)" for an empty view.
pub fn render_table<T>(rows: &[T])
where
    T: Tabled + Clone,
{
    preview_table_rows(rows, rows.len().max(1));
}

/// Print at most `max_rows` rows of a table; used where the full panel
/// would flood the console (the scatter panel).
pub fn preview_table_rows<T>(rows: &[T], max_rows: usize)
where
    T: Tabled + Clone,
{
    let slice: Vec<T> = rows.iter().cloned().take(max_rows).collect();
    if slice.is_empty() {
        println!("(no rows)\n");
        return;
    }
    let table_str = Table::new(slice).with(Style::markdown()).to_string();
    println!("{}\n", table_str);
}

/// The three metric tiles, thousands-separated with zero decimals. An
/// empty view has no average salary; say so instead of printing 0.
pub fn render_metrics(m: &KeyMetrics) {
    println!("Total Empleados: {}", format_number(m.total_headcount, 0));
    println!(
        "Costo Mensual Total: ${} COP",
        format_number(m.total_monthly_cost, 0)
    );
    match m.avg_monthly_salary {
        Some(avg) => println!("Salario Promedio: ${} COP", format_number(avg, 0)),
        None => println!("Salario Promedio: (sin datos)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_rows_format_with_separators() {
        let row: DepartmentSummaryRow = (&DepartmentSummary {
            department: "Operaciones".to_string(),
            headcount: 12.0,
            avg_monthly_salary: 4_500_000.25,
            total_monthly_cop: 54_000_003.0,
        })
            .into();
        assert_eq!(row.headcount, "12");
        assert_eq!(row.avg_monthly_salary, "4,500,000.25");
        assert_eq!(row.total_monthly_cop, "54,000,003.00");
    }

    #[test]
    fn metric_rows_survive_empty_views() {
        // Rendering must not panic when there is nothing to show.
        render_metrics(&KeyMetrics {
            total_headcount: 0.0,
            total_monthly_cost: 0.0,
            avg_monthly_salary: None,
        });
        render_table::<LevelHeadcountRow>(&[]);
    }
}
