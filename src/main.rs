// Console front end.
//
// The core stays UI-agnostic; this binary only wires the cache, the filter
// selections, and the renderers together, re-running the full
// load -> filter -> aggregate pass on each interaction:
// - Option [1] loads and cleans the CSV through the cache, printing
//   diagnostics.
// - Option [2] adjusts the department/level multi-selects.
// - Option [3] renders every dashboard panel for the current filters.
// - Option [4] exports the panels as CSV files plus a JSON summary.
use chrono::Local;
use clap::Parser;
use once_cell::sync::Lazy;
use payroll_report::cache::{CachedLoad, DatasetCache};
use payroll_report::filter::{observed_departments, observed_levels, FilterSpec};
use payroll_report::output;
use payroll_report::types::{EmployeeRecord, SummaryExport};
use payroll_report::util::format_int;
use payroll_report::views;
use std::collections::BTreeSet;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

// Process-wide cache: the dataset is read once and reused by every render
// pass until explicitly cleared.
static CACHE: Lazy<DatasetCache> = Lazy::new(DatasetCache::new);

const SCATTER_PREVIEW_ROWS: usize = 12;
const NO_DATA_MSG: &str = "Error: No data loaded. Please load the CSV file first (option 1).\n";

#[derive(Parser)]
#[command(
    name = "payroll_report",
    about = "Interactive payroll analysis dashboard over a Planta.csv export"
)]
struct Cli {
    /// Path to the payroll CSV file.
    #[arg(default_value = "Planta.csv")]
    csv_path: PathBuf,
}

/// Per-run UI state. The dataset itself lives in the cache; this only
/// tracks what the user is currently looking at.
struct Session {
    data: Option<Arc<Vec<EmployeeRecord>>>,
    filters: FilterSpec,
}

/// Read a single line of input after printing the common "Enter choice:"
/// prompt.
fn read_choice() -> String {
    print!("Enter choice: ");
    let _ = io::stdout().flush();
    read_line_trimmed()
}

fn read_line_trimmed() -> String {
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    buf.trim().to_string()
}

/// Ask whether to go back to the menu after rendering the dashboard.
fn prompt_back_to_menu() -> bool {
    loop {
        print!("Back to menu (Y/N): ");
        let _ = io::stdout().flush();
        match read_line_trimmed().to_uppercase().as_str() {
            "Y" => return true,
            "N" => return false,
            _ => println!("Invalid choice. Please enter Y or N."),
        }
    }
}

/// Handle option [1]: load the CSV through the cache and reset the filters
/// to every observed category.
fn handle_load(csv_path: &Path, session: &mut Session) {
    match CACHE.load(csv_path) {
        Ok(loaded) => {
            print_load_report(&loaded);
            session.filters = FilterSpec::all_observed(loaded.rows.as_slice());
            session.data = Some(loaded.rows);
        }
        Err(e) => {
            eprintln!("Failed to load file: {}\n", e);
        }
    }
}

fn print_load_report(loaded: &CachedLoad) {
    let r = &loaded.report;
    if loaded.from_cache {
        println!(
            "Dataset served from cache ({} rows).",
            format_int(r.rows as i64)
        );
    } else {
        println!(
            "Processing dataset... ({} rows loaded)",
            format_int(r.rows as i64)
        );
        println!(
            "Note: {} blank or unparseable money cells set to 0.",
            format_int(r.money_cells_zeroed as i64)
        );
        println!(
            "Note: {} quantity cells defaulted to 1.",
            format_int(r.quantity_defaulted as i64)
        );
    }
    println!("Filters reset to all departments and levels.\n");
}

/// Handle option [2]: numbered multi-select per dimension.
fn handle_filters(session: &mut Session) {
    let Some(data) = session.data.clone() else {
        println!("{}", NO_DATA_MSG);
        return;
    };
    let departments = observed_departments(data.as_slice());
    let levels = observed_levels(data.as_slice());
    session.filters.departments = prompt_selection("departments", &departments);
    session.filters.levels = prompt_selection("levels", &levels);
    println!(
        "Active filters: {} of {} departments, {} of {} levels.\n",
        session.filters.departments.len(),
        departments.len(),
        session.filters.levels.len(),
        levels.len()
    );
}

fn prompt_selection(dimension: &str, options: &[String]) -> BTreeSet<String> {
    println!("Available {}:", dimension);
    for (idx, name) in options.iter().enumerate() {
        println!("  [{}] {}", idx + 1, name);
    }
    loop {
        print!(
            "Select {} (all / none / comma-separated numbers): ",
            dimension
        );
        let _ = io::stdout().flush();
        let input = read_line_trimmed().to_lowercase();
        match input.as_str() {
            "" | "all" => return options.iter().cloned().collect(),
            "none" => return BTreeSet::new(),
            _ => {}
        }
        let mut selected = BTreeSet::new();
        let mut valid = true;
        for part in input.split(',') {
            match part.trim().parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => {
                    selected.insert(options[n - 1].clone());
                }
                _ => {
                    valid = false;
                    break;
                }
            }
        }
        if valid {
            return selected;
        }
        println!(
            "Invalid choice. Enter all, none, or numbers between 1 and {}.",
            options.len()
        );
    }
}

/// Handle option [3]: render every panel over the filtered view.
fn handle_render(session: &Session) {
    let Some(data) = session.data.as_ref() else {
        println!("{}", NO_DATA_MSG);
        return;
    };
    let view = session.filters.apply(data.as_slice());

    println!("Distribución de Salarios por Departamento\n");
    let salary_rows: Vec<output::SalaryDistributionRow> =
        views::salary_by_department(&view).iter().map(Into::into).collect();
    output::render_table(&salary_rows);

    println!("Cantidad de Empleados por Nivel\n");
    let level_rows: Vec<output::LevelHeadcountRow> =
        views::headcount_by_level(&view).iter().map(Into::into).collect();
    output::render_table(&level_rows);

    println!("Costos Totales Mensuales por Departamento\n");
    let cost_rows: Vec<output::DepartmentCostRow> =
        views::monthly_cost_by_department(&view).iter().map(Into::into).collect();
    output::render_table(&cost_rows);

    println!("Relación Salario vs Prestaciones\n");
    let points = views::salary_vs_benefits(&view);
    let point_rows: Vec<output::SalaryBenefitsRow> = points.iter().map(Into::into).collect();
    output::preview_table_rows(&point_rows, SCATTER_PREVIEW_ROWS);
    if points.len() > SCATTER_PREVIEW_ROWS {
        println!(
            "(showing {} of {} positions; export for the full set)\n",
            SCATTER_PREVIEW_ROWS,
            format_int(points.len() as i64)
        );
    }

    println!("Distribución Promedio de Componentes Salariales\n");
    let share_rows: Vec<output::ComponentShareRow> =
        views::component_breakdown(&view).iter().map(Into::into).collect();
    output::render_table(&share_rows);

    println!("Métricas Clave\n");
    output::render_metrics(&views::key_metrics(&view));

    println!("\nTabla de Resumen por Departamento\n");
    let summary_rows: Vec<output::DepartmentSummaryRow> =
        views::department_summary(&view).iter().map(Into::into).collect();
    output::render_table(&summary_rows);
}

/// Handle option [4]: write one CSV per tabular panel plus `summary.json`.
fn handle_export(session: &Session) {
    let Some(data) = session.data.as_ref() else {
        println!("{}", NO_DATA_MSG);
        return;
    };
    let view = session.filters.apply(data.as_slice());
    println!("Generating reports...\n");

    let salary_rows: Vec<output::SalaryDistributionRow> =
        views::salary_by_department(&view).iter().map(Into::into).collect();
    export_csv("report_salarios_departamento.csv", &salary_rows);

    let level_rows: Vec<output::LevelHeadcountRow> =
        views::headcount_by_level(&view).iter().map(Into::into).collect();
    export_csv("report_personal_nivel.csv", &level_rows);

    let cost_rows: Vec<output::DepartmentCostRow> =
        views::monthly_cost_by_department(&view).iter().map(Into::into).collect();
    export_csv("report_costos_departamento.csv", &cost_rows);

    let point_rows: Vec<output::SalaryBenefitsRow> =
        views::salary_vs_benefits(&view).iter().map(Into::into).collect();
    export_csv("report_salario_prestaciones.csv", &point_rows);

    let share_rows: Vec<output::ComponentShareRow> =
        views::component_breakdown(&view).iter().map(Into::into).collect();
    export_csv("report_componentes.csv", &share_rows);

    let summary_rows: Vec<output::DepartmentSummaryRow> =
        views::department_summary(&view).iter().map(Into::into).collect();
    export_csv("report_resumen_departamento.csv", &summary_rows);

    let metrics = views::key_metrics(&view);
    let summary = SummaryExport {
        generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        departments: session.filters.departments.iter().cloned().collect(),
        levels: session.filters.levels.iter().cloned().collect(),
        total_headcount: metrics.total_headcount,
        total_monthly_cost_cop: metrics.total_monthly_cost,
        avg_monthly_salary_cop: metrics.avg_monthly_salary,
    };
    match output::write_json("summary.json", &summary) {
        Ok(()) => println!("(Exported summary.json)"),
        Err(e) => eprintln!("Write error: {}", e),
    }
    println!();
}

fn export_csv<T: serde::Serialize>(path: &str, rows: &[T]) {
    match output::write_csv(path, rows) {
        Ok(()) => println!("(Exported {})", path),
        Err(e) => eprintln!("Write error: {}", e),
    }
}

fn main() {
    let cli = Cli::parse();
    let mut session = Session {
        data: None,
        filters: FilterSpec::default(),
    };
    loop {
        println!("Payroll Analysis Dashboard ({})", cli.csv_path.display());
        println!("[1] Load payroll file");
        println!("[2] Adjust filters");
        println!("[3] Render dashboard");
        println!("[4] Export reports");
        println!("[5] Clear cached dataset");
        println!("[0] Exit\n");
        match read_choice().as_str() {
            "1" => handle_load(&cli.csv_path, &mut session),
            "2" => handle_filters(&mut session),
            "3" => {
                println!();
                handle_render(&session);
                if !prompt_back_to_menu() {
                    println!("Exiting the program.");
                    break;
                }
            }
            "4" => {
                println!();
                handle_export(&session);
            }
            "5" => {
                CACHE.clear();
                session.data = None;
                println!("Cached dataset cleared.\n");
            }
            "0" => {
                println!("Exiting the program.");
                break;
            }
            _ => {
                println!("Invalid choice. Please enter a number between 0 and 5.\n");
            }
        }
    }
}
