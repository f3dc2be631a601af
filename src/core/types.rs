use serde::Serialize;

/// Input parameter set for one projection run. Currency amounts are integer
/// yen; the two rates are fractions (0.02 = 2%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationParams {
    pub current_age: u32,
    pub retirement_age: u32,
    pub current_annual_income: i64,
    pub income_growth_rate: f64,
    pub current_savings: i64,
    pub savings_rate: f64,
}

/// One simulated year of the ledger, snapshotted before the next year's pay
/// rise is applied. `total_assets` already includes this year's savings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRecord {
    pub age: u32,
    pub annual_income: i64,
    pub salary_deduction: i64,
    pub social_insurance: i64,
    pub taxable_income: i64,
    pub income_tax: i64,
    pub resident_tax: i64,
    pub total_tax: i64,
    pub net_income: i64,
    pub annual_savings: i64,
    pub total_assets: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub final_age: u32,
    pub final_total_assets: i64,
    pub total_years: u32,
    pub total_tax_paid: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yearly_records: Option<Vec<YearRecord>>,
}
