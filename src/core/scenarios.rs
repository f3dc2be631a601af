use serde::Serialize;

use super::types::SimulationParams;

/// Outcome a scenario is documented to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedOutcome {
    pub final_age: u32,
    pub final_total_assets: i64,
    pub total_years: u32,
}

/// A named example projection with its documented outcome. The seven entries
/// cover the standard case, a high earner, both age boundaries, and the
/// no-growth / high-savings-rate / short-span edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: &'static str,
    pub description: &'static str,
    pub params: SimulationParams,
    pub expected: ExpectedOutcome,
}

pub fn examples() -> [Scenario; 7] {
    [
        Scenario {
            id: "basic-case",
            description: "age 30, 5M yen salary, 20% savings rate, retiring at 65",
            params: SimulationParams {
                current_age: 30,
                retirement_age: 65,
                current_annual_income: 5_000_000,
                income_growth_rate: 0.02,
                current_savings: 1_000_000,
                savings_rate: 0.20,
            },
            expected: ExpectedOutcome {
                final_age: 65,
                final_total_assets: 38_310_355,
                total_years: 35,
            },
        },
        Scenario {
            id: "high-income",
            description: "high earner on a 10M yen salary",
            params: SimulationParams {
                current_age: 35,
                retirement_age: 60,
                current_annual_income: 10_000_000,
                income_growth_rate: 0.01,
                current_savings: 5_000_000,
                savings_rate: 0.30,
            },
            expected: ExpectedOutcome {
                final_age: 60,
                final_total_assets: 63_939_117,
                total_years: 25,
            },
        },
        Scenario {
            id: "boundary-min-age",
            description: "starting at the minimum age of 20 with no savings",
            params: SimulationParams {
                current_age: 20,
                retirement_age: 65,
                current_annual_income: 3_000_000,
                income_growth_rate: 0.03,
                current_savings: 0,
                savings_rate: 0.15,
            },
            expected: ExpectedOutcome {
                final_age: 65,
                final_total_assets: 31_284_218,
                total_years: 45,
            },
        },
        Scenario {
            id: "boundary-max-age",
            description: "late start at 60 with savings already in place",
            params: SimulationParams {
                current_age: 60,
                retirement_age: 65,
                current_annual_income: 8_000_000,
                income_growth_rate: 0.0,
                current_savings: 20_000_000,
                savings_rate: 0.40,
            },
            expected: ExpectedOutcome {
                final_age: 65,
                final_total_assets: 31_801_660,
                total_years: 5,
            },
        },
        Scenario {
            id: "edge-no-growth",
            description: "flat salary with no annual raise",
            params: SimulationParams {
                current_age: 40,
                retirement_age: 65,
                current_annual_income: 6_000_000,
                income_growth_rate: 0.0,
                current_savings: 3_000_000,
                savings_rate: 0.25,
            },
            expected: ExpectedOutcome {
                final_age: 65,
                final_total_assets: 31_776_600,
                total_years: 25,
            },
        },
        Scenario {
            id: "edge-high-savings-rate",
            description: "aggressive saver putting away half of net income",
            params: SimulationParams {
                current_age: 25,
                retirement_age: 60,
                current_annual_income: 4_000_000,
                income_growth_rate: 0.025,
                current_savings: 500_000,
                savings_rate: 0.50,
            },
            expected: ExpectedOutcome {
                final_age: 60,
                final_total_assets: 83_565_438,
                total_years: 35,
            },
        },
        Scenario {
            id: "edge-short-period",
            description: "only five working years left",
            params: SimulationParams {
                current_age: 55,
                retirement_age: 60,
                current_annual_income: 7_000_000,
                income_growth_rate: 0.0,
                current_savings: 10_000_000,
                savings_rate: 0.35,
            },
            expected: ExpectedOutcome {
                final_age: 60,
                final_total_assets: 19_235_165,
                total_years: 5,
            },
        },
    ]
}

pub fn find_example(id: &str) -> Option<Scenario> {
    examples().into_iter().find(|scenario| scenario.id == id)
}
