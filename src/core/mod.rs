mod engine;
mod scenarios;
mod tax;
mod types;

pub use engine::simulate;
pub use scenarios::{ExpectedOutcome, Scenario, examples, find_example};
pub use tax::{BASIC_DEDUCTION, income_tax, resident_tax, salary_deduction, social_insurance};
pub use types::{SimulationParams, SimulationResult, YearRecord};
