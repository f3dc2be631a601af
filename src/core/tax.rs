//! 2024 fiscal-year tax and social-insurance schedule.
//!
//! Every function truncates toward zero exactly where the published formulas
//! do; fusing the truncations differently shifts downstream figures by a yen.

/// Basic deduction granted to every taxpayer.
pub const BASIC_DEDUCTION: i64 = 480_000;

/// Reconstruction surtax, levied on the base income tax.
const RECONSTRUCTION_TAX_RATE: f64 = 0.021;

/// Resident tax, proportional component.
const RESIDENT_TAX_RATE: f64 = 0.10;

/// Resident tax, flat per-capita component.
const RESIDENT_TAX_FLAT: i64 = 5_000;

/// Employee pension premium rate (employee share).
const PENSION_RATE: f64 = 0.0915;

/// Health insurance premium rate (employee share).
const HEALTH_INSURANCE_RATE: f64 = 0.05;

/// Employment insurance premium rate.
const EMPLOYMENT_INSURANCE_RATE: f64 = 0.006;

/// Standardized wage-income deduction, six bands with a hard cap above
/// 8,500,000 yen.
pub fn salary_deduction(salary: i64) -> i64 {
    if salary <= 1_625_000 {
        550_000
    } else if salary <= 1_800_000 {
        (salary as f64 * 0.40 - 100_000.0) as i64
    } else if salary <= 3_600_000 {
        (salary as f64 * 0.30 + 80_000.0) as i64
    } else if salary <= 6_600_000 {
        (salary as f64 * 0.20 + 440_000.0) as i64
    } else if salary <= 8_500_000 {
        (salary as f64 * 0.10 + 1_100_000.0) as i64
    } else {
        1_950_000
    }
}

/// Progressive income tax on taxable income, reconstruction surtax included.
/// Each bracket is the flattened `income x rate - subtraction` form of the
/// marginal schedule; the surtax is added before the single truncation.
pub fn income_tax(taxable_income: i64) -> i64 {
    let t = taxable_income as f64;
    let base_tax = if taxable_income <= 1_950_000 {
        t * 0.05
    } else if taxable_income <= 3_300_000 {
        t * 0.10 - 97_500.0
    } else if taxable_income <= 6_950_000 {
        t * 0.20 - 427_500.0
    } else if taxable_income <= 9_000_000 {
        t * 0.23 - 636_000.0
    } else if taxable_income <= 18_000_000 {
        t * 0.33 - 1_536_000.0
    } else if taxable_income <= 40_000_000 {
        t * 0.40 - 2_796_000.0
    } else {
        t * 0.45 - 4_796_000.0
    };

    (base_tax + base_tax * RECONSTRUCTION_TAX_RATE) as i64
}

/// Resident tax: 10% of taxable income plus the flat per-capita amount.
pub fn resident_tax(taxable_income: i64) -> i64 {
    (taxable_income as f64 * RESIDENT_TAX_RATE) as i64 + RESIDENT_TAX_FLAT
}

/// Annual social-insurance premiums, approximated from a notional monthly
/// wage (annual / 12). The real system keys pension and health premiums off a
/// bracketed standard-monthly-remuneration table; this flat-rate shortcut is
/// intentional and must stay, or every projected figure drifts.
pub fn social_insurance(annual_income: i64) -> i64 {
    let monthly_salary = annual_income as f64 / 12.0;

    let pension = monthly_salary * PENSION_RATE * 12.0;
    let health = monthly_salary * HEALTH_INSURANCE_RATE * 12.0;
    let employment = annual_income as f64 * EMPLOYMENT_INSURANCE_RATE;

    (pension + health + employment) as i64
}
