use super::tax;
use super::types::{SimulationParams, SimulationResult, YearRecord};

/// Projects accumulated assets from the current age up to (excluding) the
/// retirement age. Pure and deterministic: identical params always yield an
/// identical result. When `record_years` is set the result carries one
/// `YearRecord` per simulated year, in chronological order.
pub fn simulate(params: &SimulationParams, record_years: bool) -> SimulationResult {
    let total_years = params.retirement_age.saturating_sub(params.current_age);

    let mut total_assets = params.current_savings;
    let mut annual_income = params.current_annual_income;
    let mut total_tax_paid = 0_i64;
    let mut yearly_records = if record_years {
        Some(Vec::with_capacity(total_years as usize))
    } else {
        None
    };

    for age in params.current_age..params.retirement_age {
        // Insurance premiums come first: they count as an income deduction.
        let social_insurance = tax::social_insurance(annual_income);
        let salary_deduction = tax::salary_deduction(annual_income);
        let taxable_income =
            (annual_income - salary_deduction - tax::BASIC_DEDUCTION - social_insurance).max(0);

        let income_tax = tax::income_tax(taxable_income);
        let resident_tax = tax::resident_tax(taxable_income);
        let total_tax = income_tax + resident_tax + social_insurance;

        let net_income = annual_income - total_tax;
        let annual_savings = (net_income as f64 * params.savings_rate) as i64;
        total_assets += annual_savings;
        total_tax_paid += total_tax;

        if let Some(records) = yearly_records.as_mut() {
            records.push(YearRecord {
                age,
                annual_income,
                salary_deduction,
                social_insurance,
                taxable_income,
                income_tax,
                resident_tax,
                total_tax,
                net_income,
                annual_savings,
                total_assets,
            });
        }

        // The raise lands after the snapshot and only affects next year.
        annual_income = (annual_income as f64 * (1.0 + params.income_growth_rate)) as i64;
    }

    SimulationResult {
        final_age: params.retirement_age,
        final_total_assets: total_assets,
        total_years,
        total_tax_paid,
        yearly_records,
    }
}

#[cfg(test)]
mod tests {
    use super::super::scenarios::{examples, find_example};
    use super::*;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

    fn basic_params() -> SimulationParams {
        find_example("basic-case").expect("catalogue entry").params
    }

    #[test]
    fn example_scenarios_reproduce_documented_totals() {
        for scenario in examples() {
            let result = simulate(&scenario.params, false);
            assert_eq!(result.final_age, scenario.expected.final_age, "{}", scenario.id);
            assert_eq!(result.total_years, scenario.expected.total_years, "{}", scenario.id);
            assert_eq!(
                result.final_total_assets, scenario.expected.final_total_assets,
                "{}",
                scenario.id
            );
        }
    }

    #[test]
    fn basic_case_first_three_years_of_ledger() {
        let result = simulate(&basic_params(), true);
        let records = result.yearly_records.as_deref().expect("trace requested");
        assert_eq!(records.len(), 35);

        let expected = [
            YearRecord {
                age: 30,
                annual_income: 5_000_000,
                salary_deduction: 1_440_000,
                social_insurance: 737_500,
                taxable_income: 2_342_500,
                income_tax: 139_621,
                resident_tax: 239_250,
                total_tax: 1_116_371,
                net_income: 3_883_629,
                annual_savings: 776_725,
                total_assets: 1_776_725,
            },
            YearRecord {
                age: 31,
                annual_income: 5_100_000,
                salary_deduction: 1_460_000,
                social_insurance: 752_250,
                taxable_income: 2_407_750,
                income_tax: 146_283,
                resident_tax: 245_775,
                total_tax: 1_144_308,
                net_income: 3_955_692,
                annual_savings: 791_138,
                total_assets: 2_567_863,
            },
            YearRecord {
                age: 32,
                annual_income: 5_202_000,
                salary_deduction: 1_480_400,
                social_insurance: 767_295,
                taxable_income: 2_474_305,
                income_tax: 153_079,
                resident_tax: 252_430,
                total_tax: 1_172_804,
                net_income: 4_029_196,
                annual_savings: 805_839,
                total_assets: 3_373_702,
            },
        ];
        assert_eq!(&records[..3], &expected);
    }

    #[test]
    fn ledger_is_absent_unless_requested() {
        let result = simulate(&basic_params(), false);
        assert!(result.yearly_records.is_none());
    }

    #[test]
    fn equal_ages_simulate_zero_years() {
        let params = SimulationParams {
            current_age: 55,
            retirement_age: 55,
            current_annual_income: 7_000_000,
            income_growth_rate: 0.0,
            current_savings: 10_000_000,
            savings_rate: 0.35,
        };
        let result = simulate(&params, true);
        assert_eq!(result.total_years, 0);
        assert_eq!(result.final_age, 55);
        assert_eq!(result.final_total_assets, 10_000_000);
        assert_eq!(result.total_tax_paid, 0);
        assert_eq!(result.yearly_records, Some(Vec::new()));
    }

    #[test]
    fn lifetime_tax_sums_the_ledger() {
        let result = simulate(&basic_params(), true);
        let records = result.yearly_records.as_deref().expect("trace requested");
        let ledger_sum: i64 = records.iter().map(|r| r.total_tax).sum();
        assert_eq!(result.total_tax_paid, ledger_sum);
        assert_eq!(result.total_tax_paid, 63_420_263);
    }

    #[test]
    fn deductions_above_income_clamp_taxable_income_to_zero() {
        // Resident tax's flat component still applies, so net income can go
        // slightly negative and savings are truncated toward zero.
        let params = SimulationParams {
            current_age: 30,
            retirement_age: 31,
            current_annual_income: 5_000,
            income_growth_rate: 0.0,
            current_savings: 100_000,
            savings_rate: 0.20,
        };
        let result = simulate(&params, true);
        let records = result.yearly_records.as_deref().expect("trace requested");
        assert_eq!(records[0].taxable_income, 0);
        assert_eq!(records[0].income_tax, 0);
        assert_eq!(records[0].resident_tax, 5_000);
        assert_eq!(records[0].net_income, -737);
        assert_eq!(records[0].annual_savings, -147);
        assert_eq!(result.final_total_assets, 99_853);
    }

    fn arbitrary_params(
        current_age: u32,
        span: u32,
        income: i64,
        growth_bp: u32,
        savings: i64,
        rate_pct: u32,
    ) -> SimulationParams {
        SimulationParams {
            current_age,
            retirement_age: current_age + span,
            current_annual_income: income,
            income_growth_rate: growth_bp as f64 / 10_000.0,
            current_savings: savings,
            savings_rate: rate_pct as f64 / 100.0,
        }
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(48))]

        #[test]
        fn prop_year_count_matches_span(
            current_age in 18u32..70,
            span in 0u32..47,
            income in 10_000i64..100_000_000,
            growth_bp in 0u32..1_000,
            savings in 0i64..100_000_000,
            rate_pct in 0u32..=100
        ) {
            let params = arbitrary_params(current_age, span, income, growth_bp, savings, rate_pct);
            let result = simulate(&params, true);

            prop_assert_eq!(result.total_years, span);
            prop_assert_eq!(result.final_age, params.retirement_age);
            let records = result.yearly_records.as_deref().expect("trace requested");
            prop_assert_eq!(records.len(), span as usize);
        }

        #[test]
        fn prop_assets_accumulate_and_summary_matches_ledger(
            current_age in 18u32..70,
            span in 1u32..47,
            income in 10_000i64..100_000_000,
            growth_bp in 0u32..1_000,
            savings in 0i64..100_000_000,
            rate_pct in 0u32..=100
        ) {
            let params = arbitrary_params(current_age, span, income, growth_bp, savings, rate_pct);
            let result = simulate(&params, true);
            let records = result.yearly_records.as_deref().expect("trace requested");

            let mut previous_assets = params.current_savings;
            for record in records {
                prop_assert!(record.taxable_income >= 0);
                prop_assert!(record.annual_savings >= 0);
                prop_assert!(record.total_assets >= previous_assets);
                previous_assets = record.total_assets;
            }

            let last = records.last().expect("non-empty span");
            prop_assert_eq!(last.total_assets, result.final_total_assets);
            prop_assert!(result.final_total_assets >= params.current_savings);

            let ledger_tax: i64 = records.iter().map(|r| r.total_tax).sum();
            prop_assert_eq!(ledger_tax, result.total_tax_paid);
        }

        #[test]
        fn prop_simulation_is_deterministic(
            current_age in 18u32..70,
            span in 0u32..47,
            income in 10_000i64..100_000_000,
            growth_bp in 0u32..1_000,
            savings in 0i64..100_000_000,
            rate_pct in 0u32..=100
        ) {
            let params = arbitrary_params(current_age, span, income, growth_bp, savings, rate_pct);
            prop_assert_eq!(simulate(&params, true), simulate(&params, true));
        }
    }
}
