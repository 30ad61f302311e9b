//! Price and SAC installment formulas

/// First and last installments of a SAC schedule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SacInstallments {
    pub first: f64,
    pub last: f64,
}

/// Fixed installment of a Price (French) schedule.
///
/// installment = P × i × (1 + i)^n / [(1 + i)^n - 1]
///
/// Where:
/// - P = principal (financed amount)
/// - i = monthly rate (`annual_rate` / 12, with `annual_rate` as a fraction)
/// - n = number of months
///
/// Not defined for `months <= 0`; callers guard before invoking.
pub fn price_installment(principal: f64, annual_rate: f64, months: i64) -> f64 {
    let i = annual_rate / 12.0;
    let n = months as f64;
    let factor = (1.0 + i).powf(n);
    principal * (i * factor) / (factor - 1.0)
}

/// First and last installments of a SAC schedule.
///
/// amortization = P / n; first = amortization + P × i.
/// The last installment charges interest on a single amortization share,
/// an estimate of the true final-period balance kept for parity with the
/// published simulator.
///
/// Not defined for `months <= 0`; callers guard before invoking.
pub fn sac_installments(principal: f64, annual_rate: f64, months: i64) -> SacInstallments {
    let i = annual_rate / 12.0;
    let amortization = principal / months as f64;
    SacInstallments {
        first: amortization + principal * i,
        last: amortization + amortization * i,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_installment_known_value() {
        // 400k at 9.5% a.a. over 360 months
        let installment = price_installment(400_000.0, 0.095, 360);
        assert!((installment - 3363.4).abs() < 1.0);
    }

    #[test]
    fn test_price_installment_positive_and_deterministic() {
        for &(principal, rate, months) in &[
            (100_000.0, 0.095, 120),
            (250_000.0, 0.08, 240),
            (1_000_000.0, 0.12, 420),
        ] {
            let a = price_installment(principal, rate, months);
            let b = price_installment(principal, rate, months);
            assert!(a > 0.0);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_price_single_month_repays_principal_plus_interest() {
        let installment = price_installment(12_000.0, 0.12, 1);
        // One month at 1%: 12000 * 1.01
        assert!((installment - 12_120.0).abs() < 1e-6);
    }

    #[test]
    fn test_sac_installments_exact() {
        // 120k at 9.5% a.a. over 12 months: amortization 10k, P*i = 950
        let sac = sac_installments(120_000.0, 0.095, 12);
        assert!((sac.first - 10_950.0).abs() < 1e-9);
        assert!((sac.last - 10_079.1666).abs() < 1e-3);
    }

    #[test]
    fn test_sac_first_exceeds_last() {
        let sac = sac_installments(300_000.0, 0.095, 360);
        assert!(sac.first > sac.last);
        assert!(sac.last > 0.0);
    }
}
