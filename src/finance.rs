//! Financial formulas.
//!
//! Interest, loan amortization, discounted cash flows and European
//! option pricing. Rates follow the convention of each formula: simple,
//! compound and amortization rates are percentages (`5.0` = 5 %), while
//! NPV, IRR and Black–Scholes use fractions (`0.05` = 5 %).
//!
//! Non-positive interest parameters are accepted with a `tracing`
//! warning; inputs that make a formula undefined are rejected.

use serde::Serialize;
use tracing::warn;

use crate::error::{Result, UtilError};
use crate::numerics::{find_root_newton_with, NewtonOptions, RootOutcome};
use crate::special::normal_cdf;

/// Shortest compounding interval accepted by [`compound_interest`], in years.
pub const COMPOUND_INTERVAL_MIN: f64 = 0.25;
/// Longest compounding interval accepted by [`compound_interest`], in years.
pub const COMPOUND_INTERVAL_MAX: f64 = 1.0;
/// Compounding intervals are rounded to a multiple of this step.
pub const COMPOUND_INTERVAL_STEP: f64 = 0.25;

/// Starting rate for [`internal_rate_of_return`] when no guess is given.
pub const DEFAULT_IRR_GUESS: f64 = 0.1;

fn warn_non_positive(formula: &'static str, principal: f64, rate: f64, time: f64) {
    if principal <= 0.0 || rate <= 0.0 || time <= 0.0 {
        warn!(formula, principal, rate, time, "non-positive interest parameter");
    }
}

/// Simple interest `P·R·T / 100`.
///
/// # Examples
/// ```
/// use u_toolkit::finance::simple_interest;
/// assert_eq!(simple_interest(12500.0, 10.0, 3.0), 3750.0);
/// ```
pub fn simple_interest(principal: f64, rate: f64, time: f64) -> f64 {
    warn_non_positive("simple_interest", principal, rate, time);
    principal * rate * time / 100.0
}

/// Rounds a requested compounding interval onto the allowed grid
/// `{0.25, 0.5, 0.75, 1.0}` years.
pub fn snap_compound_interval(interval: f64) -> f64 {
    let clamped = if interval.is_nan() {
        COMPOUND_INTERVAL_MAX
    } else {
        interval.clamp(COMPOUND_INTERVAL_MIN, COMPOUND_INTERVAL_MAX)
    };
    (clamped / COMPOUND_INTERVAL_STEP).round() * COMPOUND_INTERVAL_STEP
}

/// Compound interest earned (final amount minus principal).
///
/// The compounding interval is snapped with [`snap_compound_interval`],
/// the number of periods is `n = time / interval`, and the amount is
/// `P·(1 + rate/100)ⁿ`.
///
/// # Examples
/// ```
/// use u_toolkit::finance::compound_interest;
/// let earned = compound_interest(1000.0, 5.0, 3.0, 1.0);
/// assert!((earned - 157.625).abs() < 1e-9);
/// ```
pub fn compound_interest(principal: f64, rate: f64, time: f64, compound_interval: f64) -> f64 {
    warn_non_positive("compound_interest", principal, rate, time);
    let interval = snap_compound_interval(compound_interval);
    let periods = time / interval;
    let amount = principal * (1.0 + rate / 100.0).powf(periods);
    amount - principal
}

/// One row of an [`AmortizationSchedule`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmortizationPeriod {
    /// 1-based payment number.
    pub period: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    /// Outstanding balance after this payment.
    pub balance: f64,
}

/// Level-payment loan schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmortizationSchedule {
    pub payment: f64,
    pub total_interest: f64,
    pub total_paid: f64,
    pub periods: Vec<AmortizationPeriod>,
}

/// Upper bound on the number of payments in one schedule (1000 years of
/// monthly payments).
pub const MAX_AMORTIZATION_PERIODS: u32 = 12_000;

/// Builds the amortization schedule of a fixed-rate loan.
///
/// # Algorithm
/// Periodic rate `r = annual_rate / 100 / periods_per_year`, payment count
/// `n = round(years · periods_per_year)`, level payment from the annuity
/// formula `P·r / (1 − (1+r)⁻ⁿ)` (or `P/n` for an interest-free loan).
/// Each period splits the payment into interest on the outstanding
/// balance and the remaining principal portion. The last balance is
/// clamped at zero to absorb rounding drift.
///
/// # Errors
/// Returns `InvalidArgument` if the principal is not positive, the rate is
/// negative, or the loan has no payment periods or more than
/// [`MAX_AMORTIZATION_PERIODS`] of them.
///
/// # Examples
/// ```
/// use u_toolkit::finance::amortization_schedule;
/// let s = amortization_schedule(100_000.0, 6.0, 30.0, 12).unwrap();
/// assert_eq!(s.periods.len(), 360);
/// assert!((s.payment - 599.55).abs() < 0.01);
/// ```
pub fn amortization_schedule(
    principal: f64,
    annual_rate: f64,
    years: f64,
    periods_per_year: u32,
) -> Result<AmortizationSchedule> {
    if !(principal > 0.0) || !principal.is_finite() {
        return Err(UtilError::invalid(
            "principal",
            format!("must be positive, got {principal}"),
        ));
    }
    if !(annual_rate >= 0.0) {
        return Err(UtilError::invalid(
            "annual_rate",
            format!("must be non-negative, got {annual_rate}"),
        ));
    }
    let count = (years * f64::from(periods_per_year)).round();
    if !(count >= 1.0) || !count.is_finite() {
        return Err(UtilError::invalid(
            "years",
            format!("loan of {years} years at {periods_per_year}/year has no payments"),
        ));
    }
    if count > f64::from(MAX_AMORTIZATION_PERIODS) {
        return Err(UtilError::invalid(
            "years",
            format!(
                "loan of {years} years at {periods_per_year}/year exceeds \
                 {MAX_AMORTIZATION_PERIODS} payments"
            ),
        ));
    }
    // 1 <= count <= MAX_AMORTIZATION_PERIODS, so the casts are exact
    let count = count as u32;
    let rate = annual_rate / 100.0 / f64::from(periods_per_year);

    let discount = 1.0 - (1.0 + rate).powi(-(count as i32));
    let payment = if rate == 0.0 || discount == 0.0 {
        principal / f64::from(count)
    } else {
        principal * rate / discount
    };

    let mut balance = principal;
    let mut total_interest = 0.0;
    let mut periods = Vec::with_capacity(count as usize);
    for period in 1..=count {
        let interest = balance * rate;
        let principal_part = payment - interest;
        balance -= principal_part;
        if period == count || balance < 0.0 {
            balance = balance.max(0.0);
        }
        total_interest += interest;
        periods.push(AmortizationPeriod {
            period,
            payment,
            interest,
            principal: principal_part,
            balance,
        });
    }

    Ok(AmortizationSchedule {
        payment,
        total_interest,
        total_paid: payment * f64::from(count),
        periods,
    })
}

fn npv_unchecked(rate: f64, cash_flows: &[f64]) -> f64 {
    cash_flows
        .iter()
        .enumerate()
        .map(|(t, cf)| cf / (1.0 + rate).powi(t as i32))
        .sum()
}

fn npv_derivative(rate: f64, cash_flows: &[f64]) -> f64 {
    cash_flows
        .iter()
        .enumerate()
        .skip(1)
        .map(|(t, cf)| -(t as f64) * cf / (1.0 + rate).powi(t as i32 + 1))
        .sum()
}

/// Net present value `Σ cf_t / (1 + rate)^t`; the flow at index 0 is
/// not discounted.
///
/// # Errors
/// Returns `InvalidArgument` if `rate <= -1`.
///
/// # Examples
/// ```
/// use u_toolkit::finance::net_present_value;
/// let npv = net_present_value(0.1, &[-100.0, 50.0, 60.0]).unwrap();
/// assert!((npv + 4.958677).abs() < 1e-6);
/// ```
pub fn net_present_value(rate: f64, cash_flows: &[f64]) -> Result<f64> {
    if !(rate > -1.0) {
        return Err(UtilError::invalid(
            "rate",
            format!("must be greater than -1, got {rate}"),
        ));
    }
    Ok(npv_unchecked(rate, cash_flows))
}

/// Internal rate of return: the discount rate that drives the NPV to zero.
///
/// Newton search from `guess` (default [`DEFAULT_IRR_GUESS`]) using the
/// analytic derivative `Σ −t·cf_t / (1+r)^(t+1)`. A vanishing derivative
/// ends the search with the best guess so far, reported through
/// [`crate::numerics::RootStatus::FlatDerivative`].
///
/// # Errors
/// Returns `InvalidArgument` for fewer than two cash flows or when all
/// flows share one sign (no IRR exists).
pub fn internal_rate_of_return(cash_flows: &[f64], guess: Option<f64>) -> Result<RootOutcome> {
    if cash_flows.len() < 2 {
        return Err(UtilError::invalid(
            "cash_flows",
            format!("need at least 2 flows, got {}", cash_flows.len()),
        ));
    }
    let has_inflow = cash_flows.iter().any(|&cf| cf > 0.0);
    let has_outflow = cash_flows.iter().any(|&cf| cf < 0.0);
    if !(has_inflow && has_outflow) {
        return Err(UtilError::invalid(
            "cash_flows",
            "need both positive and negative flows",
        ));
    }
    let options = NewtonOptions::default();
    Ok(find_root_newton_with(
        |r| npv_unchecked(r, cash_flows),
        |r| npv_derivative(r, cash_flows),
        guess.unwrap_or(DEFAULT_IRR_GUESS),
        &options,
    ))
}

fn black_scholes_d1_d2(
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    volatility: f64,
) -> Result<(f64, f64)> {
    for (name, value) in [
        ("spot", spot),
        ("strike", strike),
        ("time", time),
        ("volatility", volatility),
    ] {
        if !(value > 0.0) {
            return Err(UtilError::invalid(name, format!("must be positive, got {value}")));
        }
    }
    let vol_sqrt_t = volatility * time.sqrt();
    let d1 = ((spot / strike).ln() + (rate + 0.5 * volatility * volatility) * time) / vol_sqrt_t;
    Ok((d1, d1 - vol_sqrt_t))
}

/// Black–Scholes price of a European call.
///
/// ```text
/// C = S·Φ(d₁) − K·e^(−rT)·Φ(d₂)
/// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T),  d₂ = d₁ − σ√T
/// ```
/// Φ is evaluated through [`normal_cdf`].
///
/// # Errors
/// Returns `InvalidArgument` if spot, strike, time or volatility is not positive.
///
/// # Examples
/// ```
/// use u_toolkit::finance::black_scholes_call;
/// let c = black_scholes_call(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// assert!((c - 10.4506).abs() < 1e-3);
/// ```
pub fn black_scholes_call(
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    volatility: f64,
) -> Result<f64> {
    let (d1, d2) = black_scholes_d1_d2(spot, strike, time, rate, volatility)?;
    Ok(spot * normal_cdf(d1) - strike * (-rate * time).exp() * normal_cdf(d2))
}

/// Black–Scholes price of a European put, `K·e^(−rT)·Φ(−d₂) − S·Φ(−d₁)`.
pub fn black_scholes_put(
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    volatility: f64,
) -> Result<f64> {
    let (d1, d2) = black_scholes_d1_d2(spot, strike, time, rate, volatility)?;
    Ok(strike * (-rate * time).exp() * normal_cdf(-d2) - spot * normal_cdf(-d1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerics::RootStatus;

    #[test]
    fn test_simple_interest() {
        assert_eq!(simple_interest(12500.0, 10.0, 3.0), 3750.0);
        assert_eq!(simple_interest(0.0, 10.0, 3.0), 0.0);
    }

    #[test]
    fn test_snap_compound_interval() {
        assert_eq!(snap_compound_interval(0.01), 0.25);
        assert_eq!(snap_compound_interval(0.4), 0.5);
        assert_eq!(snap_compound_interval(0.6), 0.5);
        assert_eq!(snap_compound_interval(0.9), 1.0);
        assert_eq!(snap_compound_interval(12.0), 1.0);
        assert_eq!(snap_compound_interval(f64::NAN), 1.0);
    }

    #[test]
    fn test_compound_interest_yearly() {
        let earned = compound_interest(1000.0, 5.0, 3.0, 1.0);
        assert!((earned - 157.625).abs() < 1e-9);
    }

    #[test]
    fn test_compound_interest_half_yearly() {
        // 2 years at 0.5-year interval → 4 periods of 5 %
        let earned = compound_interest(1000.0, 5.0, 2.0, 0.5);
        assert!((earned - 215.50625).abs() < 1e-9);
    }

    #[test]
    fn test_compound_interest_zero_rate() {
        assert_eq!(compound_interest(1000.0, 0.0, 5.0, 1.0), 0.0);
    }

    #[test]
    fn test_amortization_mortgage() {
        let s = amortization_schedule(100_000.0, 6.0, 30.0, 12).unwrap();
        assert_eq!(s.periods.len(), 360);
        assert!((s.payment - 599.5505).abs() < 1e-3);
        assert!((s.total_interest - 115_838.19).abs() < 0.05);
        assert!((s.total_paid - s.payment * 360.0).abs() < 1e-6);

        let first = &s.periods[0];
        assert_eq!(first.period, 1);
        assert!((first.interest - 500.0).abs() < 1e-9);
        assert!((first.principal - 99.5505).abs() < 1e-3);

        let last = s.periods.last().unwrap();
        assert_eq!(last.period, 360);
        assert!(last.balance.abs() < 1e-6);

        let principal_paid: f64 = s.periods.iter().map(|p| p.principal).sum();
        assert!((principal_paid - 100_000.0).abs() < 1e-4);
    }

    #[test]
    fn test_amortization_balance_decreases() {
        let s = amortization_schedule(5_000.0, 12.0, 2.0, 12).unwrap();
        for w in s.periods.windows(2) {
            assert!(w[1].balance < w[0].balance);
            assert!(w[1].interest < w[0].interest);
        }
    }

    #[test]
    fn test_amortization_zero_rate() {
        let s = amortization_schedule(1200.0, 0.0, 1.0, 12).unwrap();
        assert_eq!(s.payment, 100.0);
        assert_eq!(s.total_interest, 0.0);
        assert_eq!(s.periods[11].balance, 0.0);
    }

    #[test]
    fn test_amortization_invalid() {
        assert!(amortization_schedule(0.0, 5.0, 1.0, 12).is_err());
        assert!(amortization_schedule(1000.0, -1.0, 1.0, 12).is_err());
        assert!(amortization_schedule(1000.0, 5.0, 0.0, 12).is_err());
        assert!(amortization_schedule(1000.0, 5.0, 1.0, 0).is_err());
    }

    #[test]
    fn test_amortization_payment_count_limit() {
        let err = amortization_schedule(1000.0, 5.0, 2_147_483_648.0, 1).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(amortization_schedule(1000.0, 5.0, 1e300, 12).is_err());
        assert!(amortization_schedule(1000.0, 5.0, 1001.0, 12).is_err());
        let longest = amortization_schedule(1000.0, 5.0, 1000.0, 12).unwrap();
        assert_eq!(longest.periods.len(), MAX_AMORTIZATION_PERIODS as usize);
    }

    #[test]
    fn test_amortization_serializes() {
        let s = amortization_schedule(1000.0, 12.0, 0.25, 12).unwrap();
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["periods"].as_array().unwrap().len(), 3);
        assert_eq!(json["periods"][0]["period"], 1);
    }

    #[test]
    fn test_npv() {
        let npv = net_present_value(0.1, &[-100.0, 50.0, 60.0]).unwrap();
        assert!((npv + 4.958677).abs() < 1e-6);
        assert_eq!(net_present_value(0.1, &[]).unwrap(), 0.0);
        assert_eq!(net_present_value(0.5, &[42.0]).unwrap(), 42.0);
    }

    #[test]
    fn test_npv_invalid_rate() {
        assert!(net_present_value(-1.0, &[1.0, 2.0]).is_err());
        assert!(net_present_value(f64::NAN, &[1.0]).is_err());
    }

    #[test]
    fn test_irr_single_period() {
        let out = internal_rate_of_return(&[-100.0, 110.0], None).unwrap();
        assert!(out.is_root());
        assert!((out.value - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_irr_multi_period() {
        let flows = [-1000.0, 300.0, 400.0, 500.0];
        let out = internal_rate_of_return(&flows, Some(0.05)).unwrap();
        assert_eq!(out.status, RootStatus::Converged);
        assert!((out.value - 0.0889634).abs() < 1e-6);
        let npv = net_present_value(out.value, &flows).unwrap();
        assert!(npv.abs() < 1e-4);
    }

    #[test]
    fn test_irr_invalid() {
        assert!(internal_rate_of_return(&[-100.0], None).is_err());
        assert!(internal_rate_of_return(&[100.0, 50.0], None).is_err());
    }

    #[test]
    fn test_black_scholes_call_reference() {
        let c = black_scholes_call(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
        assert!((c - 10.450584).abs() < 1e-4);
    }

    #[test]
    fn test_black_scholes_put_call_parity() {
        let (s, k, t, r, v) = (105.0, 95.0, 0.5, 0.03, 0.25);
        let call = black_scholes_call(s, k, t, r, v).unwrap();
        let put = black_scholes_put(s, k, t, r, v).unwrap();
        let parity = call - put - (s - k * (-r * t).exp());
        assert!(parity.abs() < 1e-6, "parity residual {parity}");
    }

    #[test]
    fn test_black_scholes_invalid() {
        assert!(black_scholes_call(0.0, 100.0, 1.0, 0.05, 0.2).is_err());
        assert!(black_scholes_call(100.0, 100.0, 0.0, 0.05, 0.2).is_err());
        assert!(black_scholes_call(100.0, 100.0, 1.0, 0.05, -0.2).is_err());
    }
}
