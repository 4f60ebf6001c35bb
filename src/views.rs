// Aggregations behind the dashboard panels.
//
// Each function is a pure computation over a filtered view; none depends on
// another's output, and all of them tolerate an empty view.
use crate::types::{
    ComponentShare, DepartmentCost, DepartmentSummary, EmployeeRecord, KeyMetrics, LevelHeadcount,
    SalaryBenefitsPoint, SalaryDistribution,
};
use crate::util::{mean, percentile, round2, sorted};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Salary distribution per department: the five-number summary feeding the
/// box-plot panel, sorted by department name.
pub fn salary_by_department(rows: &[EmployeeRecord]) -> Vec<SalaryDistribution> {
    let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for r in rows {
        groups
            .entry(r.department.clone())
            .or_default()
            .push(r.monthly_salary);
    }
    groups
        .into_iter()
        .map(|(department, salaries)| {
            let s = sorted(salaries);
            SalaryDistribution {
                department,
                positions: s.len(),
                min: percentile(&s, 0.0),
                q1: percentile(&s, 0.25),
                median: percentile(&s, 0.5),
                q3: percentile(&s, 0.75),
                max: percentile(&s, 1.0),
            }
        })
        .collect()
}

/// Headcount per level: sum of quantity, sorted by level name.
pub fn headcount_by_level(rows: &[EmployeeRecord]) -> Vec<LevelHeadcount> {
    let mut groups: BTreeMap<String, f64> = BTreeMap::new();
    for r in rows {
        *groups.entry(r.level.clone()).or_default() += r.quantity;
    }
    groups
        .into_iter()
        .map(|(level, headcount)| LevelHeadcount { level, headcount })
        .collect()
}

/// Total monthly cost per department, sorted ascending by cost.
pub fn monthly_cost_by_department(rows: &[EmployeeRecord]) -> Vec<DepartmentCost> {
    let mut groups: BTreeMap<String, f64> = BTreeMap::new();
    for r in rows {
        *groups.entry(r.department.clone()).or_default() += r.total_monthly_cop;
    }
    let mut costs: Vec<DepartmentCost> = groups
        .into_iter()
        .map(|(department, total_monthly_cop)| DepartmentCost {
            department,
            total_monthly_cop,
        })
        .collect();
    costs.sort_by(|a, b| {
        a.total_monthly_cop
            .partial_cmp(&b.total_monthly_cop)
            .unwrap_or(Ordering::Equal)
    });
    costs
}

/// One point per row for the salary-vs-benefits scatter panel.
pub fn salary_vs_benefits(rows: &[EmployeeRecord]) -> Vec<SalaryBenefitsPoint> {
    rows.iter()
        .map(|r| SalaryBenefitsPoint {
            level: r.level.clone(),
            monthly_salary: r.monthly_salary,
            benefits_avg: r.benefits_avg,
            quantity: r.quantity,
        })
        .collect()
}

/// Mean of each statutory component across the view, as a share of the
/// six-component total. Empty view yields no rows; an all-zero view keeps
/// the rows but reports every share as 0.
pub fn component_breakdown(rows: &[EmployeeRecord]) -> Vec<ComponentShare> {
    if rows.is_empty() {
        return Vec::new();
    }
    let components: [(&str, fn(&EmployeeRecord) -> f64); 6] = [
        ("Salud", |r| r.health),
        ("Pensión", |r| r.pension),
        ("ARL (2% avg)", |r| r.arl),
        ("SENA", |r| r.sena),
        ("ICBF", |r| r.icbf),
        ("Caja de Compensación", |r| r.compensation_fund),
    ];
    let means: Vec<(&str, f64)> = components
        .iter()
        .map(|(name, get)| {
            let values: Vec<f64> = rows.iter().map(|r| get(r)).collect();
            (*name, mean(&values).unwrap_or(0.0))
        })
        .collect();
    let total: f64 = means.iter().map(|(_, m)| m).sum();
    means
        .into_iter()
        .map(|(component, component_mean)| ComponentShare {
            component: component.to_string(),
            mean: component_mean,
            share_pct: if total.abs() < f64::EPSILON {
                0.0
            } else {
                component_mean / total * 100.0
            },
        })
        .collect()
}

/// The three scalar metric tiles. Sums over an empty view are 0; the mean
/// is `None` so the UI can say "no data".
pub fn key_metrics(rows: &[EmployeeRecord]) -> KeyMetrics {
    let salaries: Vec<f64> = rows.iter().map(|r| r.monthly_salary).collect();
    KeyMetrics {
        total_headcount: rows.iter().map(|r| r.quantity).sum(),
        total_monthly_cost: rows.iter().map(|r| r.total_monthly_cop).sum(),
        avg_monthly_salary: mean(&salaries),
    }
}

/// Department summary table: headcount, mean salary, total monthly cost,
/// rounded to two decimals, one row per department sorted by name.
pub fn department_summary(rows: &[EmployeeRecord]) -> Vec<DepartmentSummary> {
    #[derive(Default)]
    struct Acc {
        headcount: f64,
        salaries: Vec<f64>,
        total_cost: f64,
    }
    let mut groups: BTreeMap<String, Acc> = BTreeMap::new();
    for r in rows {
        let acc = groups.entry(r.department.clone()).or_default();
        acc.headcount += r.quantity;
        acc.salaries.push(r.monthly_salary);
        acc.total_cost += r.total_monthly_cop;
    }
    groups
        .into_iter()
        .map(|(department, acc)| DepartmentSummary {
            department,
            headcount: round2(acc.headcount),
            avg_monthly_salary: round2(mean(&acc.salaries).unwrap_or(0.0)),
            total_monthly_cop: round2(acc.total_cost),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(department: &str, level: &str, quantity: f64, salary: f64, cost: f64) -> EmployeeRecord {
        EmployeeRecord {
            department: department.to_string(),
            level: level.to_string(),
            quantity,
            monthly_salary: salary,
            total_monthly_cop: cost,
            ..EmployeeRecord::default()
        }
    }

    fn sample() -> Vec<EmployeeRecord> {
        vec![
            rec("A", "Senior", 2.0, 1000.0, 1000.0),
            rec("A", "Junior", 3.0, 2000.0, 2000.0),
            rec("B", "Senior", 1.0, 500.0, 500.0),
        ]
    }

    #[test]
    fn key_metrics_aggregate_the_view() {
        let m = key_metrics(&sample());
        assert_eq!(m.total_headcount, 6.0);
        assert_eq!(m.total_monthly_cost, 3500.0);
        assert_eq!(m.avg_monthly_salary, Some(3500.0 / 3.0));
    }

    #[test]
    fn empty_view_aggregations_are_well_defined() {
        let m = key_metrics(&[]);
        assert_eq!(m.total_headcount, 0.0);
        assert_eq!(m.total_monthly_cost, 0.0);
        assert_eq!(m.avg_monthly_salary, None);

        assert!(salary_by_department(&[]).is_empty());
        assert!(headcount_by_level(&[]).is_empty());
        assert!(monthly_cost_by_department(&[]).is_empty());
        assert!(salary_vs_benefits(&[]).is_empty());
        assert!(component_breakdown(&[]).is_empty());
        assert!(department_summary(&[]).is_empty());
    }

    #[test]
    fn headcount_sums_quantity_per_level() {
        let rows = headcount_by_level(&sample());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].level, "Junior");
        assert_eq!(rows[0].headcount, 3.0);
        assert_eq!(rows[1].level, "Senior");
        assert_eq!(rows[1].headcount, 3.0);
    }

    #[test]
    fn cost_ranking_is_ascending() {
        let rows = monthly_cost_by_department(&sample());
        assert_eq!(rows[0].department, "B");
        assert_eq!(rows[0].total_monthly_cop, 500.0);
        assert_eq!(rows[1].department, "A");
        assert_eq!(rows[1].total_monthly_cop, 3000.0);
    }

    #[test]
    fn salary_distribution_five_number_summary() {
        let rows = vec![
            rec("A", "Senior", 1.0, 100.0, 0.0),
            rec("A", "Senior", 1.0, 200.0, 0.0),
            rec("A", "Senior", 1.0, 300.0, 0.0),
            rec("A", "Senior", 1.0, 400.0, 0.0),
        ];
        let dist = salary_by_department(&rows);
        assert_eq!(dist.len(), 1);
        let d = &dist[0];
        assert_eq!(d.positions, 4);
        assert_eq!(d.min, 100.0);
        assert_eq!(d.q1, 175.0);
        assert_eq!(d.median, 250.0);
        assert_eq!(d.q3, 325.0);
        assert_eq!(d.max, 400.0);
    }

    #[test]
    fn component_shares_are_proportions_of_their_sum() {
        let mut row = rec("A", "Senior", 1.0, 0.0, 0.0);
        row.health = 80.0;
        row.pension = 120.0;
        let shares = component_breakdown(&[row]);
        assert_eq!(shares.len(), 6);
        let total: f64 = shares.iter().map(|s| s.share_pct).sum();
        assert!((total - 100.0).abs() < 1e-9);
        let health = shares.iter().find(|s| s.component == "Salud").unwrap();
        assert_eq!(health.mean, 80.0);
        assert_eq!(health.share_pct, 40.0);
    }

    #[test]
    fn component_shares_of_all_zero_view_are_zero() {
        let shares = component_breakdown(&[rec("A", "Senior", 1.0, 0.0, 0.0)]);
        assert_eq!(shares.len(), 6);
        assert!(shares.iter().all(|s| s.share_pct == 0.0 && s.mean == 0.0));
    }

    #[test]
    fn department_summary_rounds_to_two_decimals() {
        let rows = vec![
            rec("A", "Senior", 2.0, 1000.0, 1000.567),
            rec("A", "Junior", 3.0, 2001.0, 2000.0),
        ];
        let summary = department_summary(&rows);
        assert_eq!(summary.len(), 1);
        let a = &summary[0];
        assert_eq!(a.headcount, 5.0);
        assert_eq!(a.avg_monthly_salary, 1500.5);
        assert_eq!(a.total_monthly_cop, 3000.57);
    }

    #[test]
    fn filtered_department_scenario() {
        // Departments {A, A, B}, quantities {2, 3, 1}, costs {1000, 2000, 500}:
        // restricted to A, headcount is 5 and monthly cost is 3000.
        let view: Vec<EmployeeRecord> = sample()
            .into_iter()
            .filter(|r| r.department == "A")
            .collect();
        let m = key_metrics(&view);
        assert_eq!(m.total_headcount, 5.0);
        assert_eq!(m.total_monthly_cost, 3000.0);
    }
}
