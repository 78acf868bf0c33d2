//! Batch summary aggregation.

use rust_decimal::Decimal;

use crate::models::{PayrollSummary, ProvisionedRecord};

use super::rounding::round_currency;

/// Aggregates a batch of provisioned records into a [`PayrollSummary`].
///
/// Totals are sums of the per-row values the user sees (provisions and
/// monthly totals are already rounded per row), each rounded to cents once
/// at the end. Deriving the totals from the raw salaries instead would drift
/// from the sum of the displayed rows.
///
/// An empty batch yields a zeroed summary.
///
/// # Examples
///
/// ```
/// use payroll_provisions::calculation::compute_summary;
///
/// let summary = compute_summary(&[]);
/// assert_eq!(summary.employee_count, 0);
/// assert_eq!(summary.total_monthly_cost.to_string(), "0.00");
/// ```
pub fn compute_summary(records: &[ProvisionedRecord]) -> PayrollSummary {
    let mut salaries = Decimal::ZERO;
    let mut meal_allowances = Decimal::ZERO;
    let mut insurance = Decimal::ZERO;
    let mut social_charges = Decimal::ZERO;
    let mut thirteenth = Decimal::ZERO;
    let mut vacation = Decimal::ZERO;
    let mut severance = Decimal::ZERO;
    let mut monthly = Decimal::ZERO;

    for row in records {
        salaries += row.record.salary;
        meal_allowances += row.record.meal_allowance;
        insurance += row.record.insurance;
        social_charges += row.provisions.social_charges;
        thirteenth += row.provisions.thirteenth_salary;
        vacation += row.provisions.vacation;
        severance += row.provisions.severance_indemnity;
        monthly += row.monthly_total;
    }

    PayrollSummary {
        employee_count: records.len(),
        total_salaries: round_currency(salaries),
        total_benefits: round_currency(meal_allowances + insurance),
        total_social_charges: round_currency(social_charges),
        total_provisions: round_currency(thirteenth + vacation + severance),
        total_monthly_cost: round_currency(monthly),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{compute_provisions, compute_row_total};
    use crate::config::ProvisionRates;
    use crate::models::EmployeeRecord;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn provisioned(salary: &str, meal: &str, insurance: &str) -> ProvisionedRecord {
        let mut record = EmployeeRecord::with_salary(dec(salary));
        record.meal_allowance = dec(meal);
        record.insurance = dec(insurance);
        let provisions = compute_provisions(record.salary, &ProvisionRates::default());
        let monthly_total = compute_row_total(&record, &provisions);
        ProvisionedRecord {
            record,
            provisions,
            monthly_total,
        }
    }

    #[test]
    fn test_summary_of_example_batch() {
        let rows = vec![
            provisioned("5000.00", "500.00", "100.00"),
            provisioned("6000.00", "500.00", "100.00"),
            provisioned("4500.00", "500.00", "100.00"),
        ];
        let summary = compute_summary(&rows);

        assert_eq!(summary.employee_count, 3);
        assert_eq!(summary.total_salaries, dec("15500.00"));
        assert_eq!(summary.total_benefits, dec("1800.00"));
        assert_eq!(summary.total_social_charges, dec("4464.00"));
        assert_eq!(summary.total_provisions, dec("4656.90"));
        assert_eq!(summary.total_monthly_cost, dec("26420.90"));
    }

    #[test]
    fn test_summary_sums_rounded_row_values() {
        // 3 × 1234.56: each row rounds its provisions before summation.
        let rows = vec![
            provisioned("1234.56", "0", "0"),
            provisioned("1234.56", "0", "0"),
            provisioned("1234.56", "0", "0"),
        ];
        let summary = compute_summary(&rows);

        // 355.55 per row, although 3 × 1234.56 × 0.288 = 1066.66...
        assert_eq!(summary.total_social_charges, dec("1066.65"));
        assert_eq!(
            summary.total_monthly_cost,
            rows.iter().map(|r| r.monthly_total).sum::<Decimal>()
        );
    }

    #[test]
    fn test_empty_batch_is_zero() {
        let summary = compute_summary(&[]);
        assert_eq!(summary, PayrollSummary {
            employee_count: 0,
            total_salaries: Decimal::ZERO,
            total_benefits: Decimal::ZERO,
            total_social_charges: Decimal::ZERO,
            total_provisions: Decimal::ZERO,
            total_monthly_cost: Decimal::ZERO,
        });
    }

    #[test]
    fn test_summary_is_order_independent() {
        let mut rows = vec![
            provisioned("1412.00", "300", "0"),
            provisioned("9876.54", "0", "250"),
            provisioned("3000", "450.50", "99.90"),
        ];
        let forward = compute_summary(&rows);
        rows.reverse();
        assert_eq!(compute_summary(&rows), forward);
    }
}
