// Payroll reporting core: load and clean a payroll CSV, filter it by
// department and level, and compute the dashboard's aggregate views.
//
// The core is UI-agnostic; `main.rs` wires it to a console menu.
pub mod cache;
pub mod filter;
pub mod loader;
pub mod output;
pub mod types;
pub mod util;
pub mod views;
