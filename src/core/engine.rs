use log::debug;

use super::error::PlanError;
use super::types::{
    CorpusAssessment, DecumulationPath, DerivedScalars, PlannerInputs, Rate, Returns, YearlySeries,
};

const DEGENERATE_EPS: f64 = 1e-12;

/// Rounds to the nearest whole currency unit, ties to even.
pub fn round_unit(value: f64) -> f64 {
    value.round_ties_even()
}

/// `principal * (1 + r)^periods`, rounded to whole currency units.
pub fn compound(principal: f64, rate: Rate, periods: u32) -> f64 {
    compound_with_frequency(principal, rate, periods, 1)
}

/// Compound growth with `frequency` compounding steps per period.
/// A frequency of zero is treated as annual compounding.
pub fn compound_with_frequency(principal: f64, rate: Rate, periods: u32, frequency: u32) -> f64 {
    let n = frequency.max(1) as f64;
    let value = principal * (1.0 + rate.fraction() / n).powf(n * periods as f64);
    round_unit(value)
}

pub fn size_corpus(inputs: &PlannerInputs) -> Result<DerivedScalars, PlanError> {
    validate_inputs(inputs)?;

    let years_to_retire = inputs.years_to_retire();
    if years_to_retire == 0 {
        return Err(PlanError::degenerate(
            "retirement age equals current age, leaving no years to save",
        ));
    }

    let safe_monthly_expense = round_unit(
        (inputs.monthly_expenses + inputs.other_annual_expenses / 12.0)
            * inputs.safety_margin.factor(),
    );

    let future_value_of_current_investments = compound(
        inputs.current_investments,
        inputs.return_current_investments,
        years_to_retire,
    );

    let expenses_at_retirement = compound(
        safe_monthly_expense * 12.0,
        inputs.inflation_pre_retirement,
        years_to_retire,
    );

    let inflation_adjusted_return =
        inputs.return_post_retirement.factor() / inputs.inflation_post_retirement.factor() - 1.0;

    // Discounted expense stream, not a depleting-balance annuity.
    let total_corpus_required = round_unit(
        (1..=inputs.years_in_retirement)
            .map(|year| expenses_at_retirement / (1.0 + inflation_adjusted_return).powf(year as f64))
            .sum::<f64>(),
    );

    let shortfall = round_unit(total_corpus_required - future_value_of_current_investments);

    let yearly_corpus = step_up_first_contribution(
        shortfall,
        inputs.return_pre_retirement,
        inputs.annual_step_up,
        years_to_retire,
    )?;

    debug!(
        "sized corpus: required={total_corpus_required} shortfall={shortfall} yearly={yearly_corpus:.2}"
    );

    Ok(DerivedScalars {
        years_to_retire,
        safe_monthly_expense,
        future_value_of_current_investments,
        expenses_at_retirement,
        inflation_adjusted_return,
        total_corpus_required,
        shortfall,
        yearly_corpus,
    })
}

/// First-year payment of a contribution stream growing by `step_up` a year
/// whose future value at `expected_return` equals `target`.
fn step_up_first_contribution(
    target: f64,
    expected_return: Rate,
    step_up: Rate,
    years: u32,
) -> Result<f64, PlanError> {
    if years == 0 {
        return Err(PlanError::degenerate("no years to save"));
    }

    let years_f = years as f64;
    let step_up_ratio = step_up.factor() / expected_return.factor();
    let denominator = step_up_ratio.powf(years_f) - 1.0;
    if !denominator.is_finite() || denominator.abs() <= DEGENERATE_EPS {
        return Err(PlanError::degenerate(format!(
            "step-up rate {}% equals expected return {}%",
            step_up.percent(),
            expected_return.percent()
        )));
    }

    let discounted_target = target / expected_return.factor().powf(years_f);
    Ok(discounted_target * ((step_up_ratio - 1.0) / denominator))
}

pub fn project_yearly_series(
    inputs: &PlannerInputs,
    derived: &DerivedScalars,
) -> Result<YearlySeries, PlanError> {
    validate_inputs(inputs)?;

    let years_to_retire = inputs.years_to_retire();
    if derived.years_to_retire != years_to_retire {
        return Err(PlanError::InvalidInput(format!(
            "derived scalars cover {} years to retirement, inputs cover {}",
            derived.years_to_retire, years_to_retire
        )));
    }
    let years_in_retirement = inputs.years_in_retirement as usize;
    let pre_years = years_to_retire as usize;

    let annual_expense_now = derived.safe_monthly_expense * 12.0;
    let mut expenses = (0..years_to_retire)
        .map(|year| compound(annual_expense_now, inputs.inflation_pre_retirement, year))
        .collect::<Vec<_>>();

    // The contribution of the first retirement year is kept, so the pre-retirement
    // leg is one entry longer than the expense leg.
    let mut investment_amount = (0..=years_to_retire)
        .map(|year| {
            round_unit(derived.yearly_corpus * inputs.annual_step_up.factor().powf(year as f64))
        })
        .collect::<Vec<_>>();
    if years_in_retirement == 0 {
        investment_amount.truncate(pre_years);
    } else {
        investment_amount.resize(pre_years + years_in_retirement, 0.0);
    }

    let sip_values = investment_amount[..pre_years]
        .iter()
        .scan(0.0, |sip, contribution| {
            *sip = (*sip + contribution) * inputs.return_pre_retirement.factor();
            Some(*sip)
        })
        .collect::<Vec<_>>();

    let mut retirement_corpus = sip_values
        .iter()
        .enumerate()
        .map(|(year, sip)| {
            round_unit(
                compound(
                    inputs.current_investments,
                    inputs.return_current_investments,
                    year as u32,
                ) + sip,
            )
        })
        .collect::<Vec<_>>();

    let retirement = simulate_decumulation(
        derived.total_corpus_required,
        derived.expenses_at_retirement,
        inputs.inflation_post_retirement,
        &Returns::Flat(inputs.return_post_retirement),
        inputs.years_in_retirement,
        true,
    )?;
    expenses.extend(retirement.expenses);
    retirement_corpus.extend(retirement.balances);

    let age = (inputs.current_age..inputs.retire_age + inputs.years_in_retirement)
        .collect::<Vec<_>>();

    Ok(YearlySeries {
        age,
        expenses,
        investment_amount,
        retirement_corpus,
    })
}

/// Draws a corpus down over `n_years`, growing it by `returns` and paying an
/// expense that inflates every year. Reported balances are floored at zero;
/// the balance carried into the next year is not.
pub fn simulate_decumulation(
    initial_corpus: f64,
    initial_expense: f64,
    inflation: Rate,
    returns: &Returns,
    n_years: u32,
    ignore_first_year_expense: bool,
) -> Result<DecumulationPath, PlanError> {
    ensure_finite("initial corpus", initial_corpus)?;
    ensure_finite("initial expense", initial_expense)?;
    if let Returns::PerYear(rates) = returns {
        if rates.len() < n_years as usize {
            return Err(PlanError::InvalidRange(format!(
                "{} yearly returns supplied for a {n_years} year horizon",
                rates.len()
            )));
        }
    }

    let expenses = inflated_expenses(initial_expense, inflation, n_years);
    let balances = decumulate(
        initial_corpus,
        &expenses,
        ignore_first_year_expense,
        |year, balance| {
            let rate = returns.for_year(year).unwrap_or(Rate::zero());
            balance * rate.factor()
        },
    );

    Ok(DecumulationPath { balances, expenses })
}

pub(crate) fn inflated_expenses(initial_expense: f64, inflation: Rate, n_years: u32) -> Vec<f64> {
    (0..n_years)
        .map(|year| compound(initial_expense, inflation, year))
        .collect()
}

/// Year-by-year fold shared by the single-path and bucket simulators.
/// `grow` maps the running balance to its value after that year's returns.
pub(crate) fn decumulate<F>(
    initial_corpus: f64,
    expenses: &[f64],
    ignore_first_year_expense: bool,
    mut grow: F,
) -> Vec<f64>
where
    F: FnMut(usize, f64) -> f64,
{
    expenses
        .iter()
        .enumerate()
        .scan(initial_corpus, |balance, (year, expense)| {
            *balance = grow(year, *balance) - expense;
            if year == 0 && ignore_first_year_expense {
                *balance = initial_corpus;
            }
            Some(balance.max(0.0))
        })
        .collect()
}

/// Number of years the reported balance stays strictly positive.
pub fn lasting_years(balances: &[f64]) -> usize {
    balances.iter().filter(|balance| **balance > 0.0).count()
}

/// Corpus implied by an N% withdrawal rule on the first retirement year's expenses.
pub fn withdrawal_rule_corpus(expenses_at_retirement: f64, rule: Rate) -> Result<f64, PlanError> {
    let fraction = rule.fraction();
    if !fraction.is_finite() || fraction <= 0.0 {
        return Err(PlanError::InvalidInput(
            "withdrawal rule must be greater than 0%".to_string(),
        ));
    }
    Ok(expenses_at_retirement / fraction)
}

/// Runs the retirement leg on a corpus the user already has in mind.
pub fn assess_corpus(
    inputs: &PlannerInputs,
    derived: &DerivedScalars,
    assumed_corpus: f64,
) -> Result<CorpusAssessment, PlanError> {
    ensure_finite("assumed corpus", assumed_corpus)?;
    let path = simulate_decumulation(
        assumed_corpus,
        derived.expenses_at_retirement,
        inputs.inflation_post_retirement,
        &Returns::Flat(inputs.return_post_retirement),
        inputs.years_in_retirement,
        true,
    )?;

    let gap_to_required = (derived.total_corpus_required > assumed_corpus)
        .then(|| derived.total_corpus_required - assumed_corpus);

    Ok(CorpusAssessment {
        assumed_corpus,
        gap_to_required,
        lasting_years: lasting_years(&path.balances),
        path,
    })
}

fn validate_inputs(inputs: &PlannerInputs) -> Result<(), PlanError> {
    if inputs.retire_age < inputs.current_age {
        return Err(PlanError::InvalidRange(format!(
            "retirement age {} is before current age {}",
            inputs.retire_age, inputs.current_age
        )));
    }

    for (label, amount) in [
        ("monthly expenses", inputs.monthly_expenses),
        ("other annual expenses", inputs.other_annual_expenses),
        ("current investments", inputs.current_investments),
    ] {
        ensure_finite(label, amount)?;
        if amount < 0.0 {
            return Err(PlanError::InvalidInput(format!("{label} must be >= 0")));
        }
    }

    for (label, rate) in [
        ("safety margin", inputs.safety_margin),
        ("pre-retirement inflation", inputs.inflation_pre_retirement),
        ("post-retirement inflation", inputs.inflation_post_retirement),
        ("return on current investments", inputs.return_current_investments),
        ("pre-retirement return", inputs.return_pre_retirement),
        ("post-retirement return", inputs.return_post_retirement),
        ("annual step-up", inputs.annual_step_up),
    ] {
        ensure_finite(label, rate.fraction())?;
        if rate.factor() <= 0.0 {
            return Err(PlanError::InvalidInput(format!(
                "{label} must be above -100%"
            )));
        }
    }

    Ok(())
}

pub(crate) fn ensure_finite(label: &str, value: f64) -> Result<(), PlanError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PlanError::InvalidInput(format!("{label} must be finite")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn assert_approx_tol(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}, tolerance {tol}"
        );
    }

    fn sample_inputs() -> PlannerInputs {
        PlannerInputs {
            current_age: 35,
            retire_age: 60,
            years_in_retirement: 30,
            monthly_expenses: 50_000.0,
            other_annual_expenses: 100_000.0,
            safety_margin: Rate::Percent(10.0),
            current_investments: 1_000_000.0,
            inflation_pre_retirement: Rate::Percent(7.0),
            inflation_post_retirement: Rate::Percent(6.0),
            return_current_investments: Rate::Percent(14.0),
            return_pre_retirement: Rate::Percent(12.0),
            return_post_retirement: Rate::Percent(6.0),
            annual_step_up: Rate::Percent(10.0),
        }
    }

    #[test]
    fn rate_coerce_treats_values_above_one_as_percent() {
        assert_approx(Rate::coerce(7.0).fraction(), 0.07);
        assert_approx(Rate::coerce(0.07).fraction(), 0.07);
        assert_approx(Rate::coerce(1.0).fraction(), 1.0);
        assert_approx(Rate::Fraction(0.5).percent(), 50.0);
    }

    #[test]
    fn compound_matches_hand_calculation() {
        assert_eq!(compound(1_000.0, Rate::Percent(10.0), 2), 1_210.0);
        assert_eq!(compound(1_000.0, Rate::Fraction(0.10), 0), 1_000.0);
        // 1000 * 1.01^12 = 1126.825...
        assert_eq!(
            compound_with_frequency(1_000.0, Rate::Percent(12.0), 1, 12),
            1_127.0
        );
        assert_eq!(
            compound_with_frequency(1_000.0, Rate::Percent(10.0), 2, 0),
            1_210.0
        );
    }

    #[test]
    fn compound_rounds_half_to_even() {
        assert_eq!(compound(2.5, Rate::zero(), 3), 2.0);
        assert_eq!(compound(3.5, Rate::zero(), 0), 4.0);
    }

    #[test]
    fn size_corpus_matches_independent_formula() {
        let inputs = sample_inputs();
        let derived = size_corpus(&inputs).expect("valid inputs");

        assert_eq!(derived.years_to_retire, 25);
        assert_eq!(derived.safe_monthly_expense, 64_167.0);

        let fv = (1_000_000.0 * 1.14_f64.powf(25.0)).round_ties_even();
        let expenses = (64_167.0 * 12.0 * 1.07_f64.powf(25.0)).round_ties_even();
        let real: f64 = ((1.0 + 6.0 / 100.0) / (1.0 + 6.0 / 100.0) - 1.0) * 100.0;
        let total = (1..=30)
            .map(|y| expenses / (1.0 + real / 100.0).powf(y as f64))
            .sum::<f64>()
            .round_ties_even();
        let shortfall = (total - fv).round_ties_even();
        let ratio: f64 = (1.0 + 10.0 / 100.0) / (1.0 + 12.0 / 100.0);
        let yearly = (shortfall / 1.12_f64.powf(25.0)) * ((ratio - 1.0) / (ratio.powf(25.0) - 1.0));

        assert_approx_tol(derived.future_value_of_current_investments, fv, 1.0);
        assert_approx_tol(derived.expenses_at_retirement, expenses, 1.0);
        assert_approx(derived.inflation_adjusted_return, 0.0);
        assert_approx_tol(derived.total_corpus_required, total, 1.0);
        assert_approx_tol(derived.shortfall, shortfall, 2.0);
        assert_approx_tol(derived.yearly_corpus, yearly, yearly.abs() * 1e-6);
        assert_approx(derived.monthly_step_up_investment(), derived.yearly_corpus / 12.0);
        assert!(derived.yearly_corpus > 0.0);
    }

    #[test]
    fn size_corpus_discounts_expenses_by_real_return() {
        let mut inputs = sample_inputs();
        inputs.years_in_retirement = 2;
        inputs.return_post_retirement = Rate::Percent(10.0);
        inputs.inflation_post_retirement = Rate::zero();

        let derived = size_corpus(&inputs).expect("valid inputs");
        let e = derived.expenses_at_retirement;
        assert_approx(derived.inflation_adjusted_return, 0.10);
        assert_approx_tol(
            derived.total_corpus_required,
            e / 1.1 + e / (1.1 * 1.1),
            0.5 + EPS,
        );
    }

    #[test]
    fn size_corpus_is_idempotent() {
        let inputs = sample_inputs();
        let a = size_corpus(&inputs).expect("valid inputs");
        let b = size_corpus(&inputs).expect("valid inputs");
        assert_eq!(a, b);
        assert_eq!(a.yearly_corpus.to_bits(), b.yearly_corpus.to_bits());
    }

    #[test]
    fn size_corpus_rejects_step_up_equal_to_return() {
        let mut inputs = sample_inputs();
        inputs.annual_step_up = Rate::Percent(12.0);
        let err = size_corpus(&inputs).expect_err("must reject equal rates");
        assert!(matches!(err, PlanError::DegenerateRatio { .. }));
    }

    #[test]
    fn size_corpus_rejects_zero_years_to_retire() {
        let mut inputs = sample_inputs();
        inputs.retire_age = inputs.current_age;
        let err = size_corpus(&inputs).expect_err("must reject zero saving years");
        assert!(matches!(err, PlanError::DegenerateRatio { .. }));
    }

    #[test]
    fn size_corpus_rejects_retirement_before_current_age() {
        let mut inputs = sample_inputs();
        inputs.retire_age = 30;
        let err = size_corpus(&inputs).expect_err("must reject inverted ages");
        assert!(matches!(err, PlanError::InvalidRange(_)));
    }

    #[test]
    fn size_corpus_rejects_non_finite_amounts() {
        let mut inputs = sample_inputs();
        inputs.current_investments = f64::NAN;
        let err = size_corpus(&inputs).expect_err("must reject NaN");
        assert!(matches!(err, PlanError::InvalidInput(_)));
    }

    #[test]
    fn projection_series_share_length_and_ages_step_by_one() {
        let inputs = sample_inputs();
        let derived = size_corpus(&inputs).expect("valid inputs");
        let series = project_yearly_series(&inputs, &derived).expect("valid projection");

        assert_eq!(series.len(), 25 + 30);
        assert_eq!(series.expenses.len(), series.len());
        assert_eq!(series.investment_amount.len(), series.len());
        assert_eq!(series.retirement_corpus.len(), series.len());
        assert_eq!(series.age[0], 35);
        assert_eq!(*series.age.last().expect("non-empty"), 89);
        assert!(series.age.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn projection_pre_retirement_leg_matches_hand_calculation() {
        let inputs = sample_inputs();
        let derived = size_corpus(&inputs).expect("valid inputs");
        let series = project_yearly_series(&inputs, &derived).expect("valid projection");

        let growth = 1.0 + 12.0 / 100.0;
        let step_up = 1.0 + 10.0 / 100.0;
        let first_contribution = derived.yearly_corpus.round_ties_even();
        assert_eq!(series.investment_amount[0], first_contribution);
        assert_eq!(series.expenses[0], 64_167.0 * 12.0);
        assert_eq!(
            series.retirement_corpus[0],
            (1_000_000.0 + first_contribution * growth).round_ties_even()
        );

        let second_contribution = (derived.yearly_corpus * step_up).round_ties_even();
        let sip_1 = (first_contribution * growth + second_contribution) * growth;
        assert_eq!(series.investment_amount[1], second_contribution);
        assert_eq!(
            series.retirement_corpus[1],
            (1_140_000.0 + sip_1).round_ties_even()
        );
    }

    #[test]
    fn projection_keeps_contribution_in_first_retirement_year() {
        let inputs = sample_inputs();
        let derived = size_corpus(&inputs).expect("valid inputs");
        let series = project_yearly_series(&inputs, &derived).expect("valid projection");

        assert!(series.investment_amount[25] > 0.0);
        assert!(series.investment_amount[26..].iter().all(|v| *v == 0.0));
    }

    #[test]
    fn projection_retirement_leg_starts_at_required_corpus() {
        let inputs = sample_inputs();
        let derived = size_corpus(&inputs).expect("valid inputs");
        let series = project_yearly_series(&inputs, &derived).expect("valid projection");

        assert_eq!(series.retirement_corpus[25], derived.total_corpus_required);
        assert_eq!(series.expenses[25], derived.expenses_at_retirement);
    }

    #[test]
    fn projection_without_retirement_years_covers_saving_years_only() {
        let mut inputs = sample_inputs();
        inputs.years_in_retirement = 0;
        let derived = size_corpus(&inputs).expect("valid inputs");
        assert_eq!(derived.total_corpus_required, 0.0);

        let series = project_yearly_series(&inputs, &derived).expect("valid projection");
        assert_eq!(series.len(), 25);
        assert_eq!(series.investment_amount.len(), 25);
        assert_eq!(series.retirement_corpus.len(), 25);
    }

    #[test]
    fn projection_rejects_scalars_from_other_inputs() {
        let inputs = sample_inputs();
        let derived = size_corpus(&inputs).expect("valid inputs");
        let mut other = inputs.clone();
        other.retire_age = 55;
        let err = project_yearly_series(&other, &derived).expect_err("must reject mismatch");
        assert!(matches!(err, PlanError::InvalidInput(_)));
    }

    #[test]
    fn decumulation_first_year_ignores_withdrawal() {
        let path = simulate_decumulation(
            1_000.0,
            100.0,
            Rate::zero(),
            &Returns::Flat(Rate::Percent(10.0)),
            3,
            true,
        )
        .expect("valid run");
        assert_eq!(path.balances, vec![1_000.0, 1_000.0, 1_000.0]);
        assert_eq!(path.expenses, vec![100.0, 100.0, 100.0]);
    }

    #[test]
    fn decumulation_floors_reported_balance_and_inflates_expenses() {
        let path = simulate_decumulation(
            250.0,
            100.0,
            Rate::Percent(10.0),
            &Returns::Flat(Rate::zero()),
            4,
            false,
        )
        .expect("valid run");
        assert_eq!(path.expenses, vec![100.0, 110.0, 121.0, 133.0]);
        assert_eq!(path.balances, vec![150.0, 40.0, 0.0, 0.0]);
        assert_eq!(lasting_years(&path.balances), 2);
    }

    #[test]
    fn decumulation_carries_unfloored_balance_forward() {
        // A -500% year flips the carried deficit of -50 into +200 before paying 150.
        let path = simulate_decumulation(
            100.0,
            150.0,
            Rate::zero(),
            &Returns::PerYear(vec![Rate::zero(), Rate::Fraction(-5.0)]),
            2,
            false,
        )
        .expect("valid run");
        assert_eq!(path.balances, vec![0.0, 50.0]);
    }

    #[test]
    fn decumulation_with_zero_years_is_empty() {
        let path = simulate_decumulation(
            1_000.0,
            100.0,
            Rate::Percent(6.0),
            &Returns::Flat(Rate::Percent(6.0)),
            0,
            true,
        )
        .expect("valid run");
        assert!(path.balances.is_empty());
        assert!(path.expenses.is_empty());
    }

    #[test]
    fn decumulation_rejects_short_return_sequence() {
        let err = simulate_decumulation(
            1_000.0,
            100.0,
            Rate::zero(),
            &Returns::PerYear(vec![Rate::zero()]),
            3,
            true,
        )
        .expect_err("must reject short sequence");
        assert!(matches!(err, PlanError::InvalidRange(_)));
    }

    #[test]
    fn withdrawal_rule_corpus_scales_expenses() {
        assert_approx(
            withdrawal_rule_corpus(300.0, Rate::Percent(3.0)).expect("valid rule"),
            10_000.0,
        );
        assert_approx(
            withdrawal_rule_corpus(400.0, Rate::Percent(4.0)).expect("valid rule"),
            10_000.0,
        );
        assert!(withdrawal_rule_corpus(400.0, Rate::zero()).is_err());
    }

    #[test]
    fn assess_corpus_reports_gap_only_when_short() {
        let inputs = sample_inputs();
        let derived = size_corpus(&inputs).expect("valid inputs");

        let short = assess_corpus(&inputs, &derived, derived.total_corpus_required / 2.0)
            .expect("valid assessment");
        assert_approx(
            short.gap_to_required.expect("gap expected"),
            derived.total_corpus_required / 2.0,
        );
        assert!(short.lasting_years < 30);

        let ample = assess_corpus(&inputs, &derived, derived.total_corpus_required * 2.0)
            .expect("valid assessment");
        assert!(ample.gap_to_required.is_none());
        assert_eq!(ample.lasting_years, 30);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_compound_identities_hold(
            principal in 0u32..10_000_000,
            rate_bp in 0u32..3_000,
            periods in 0u32..60
        ) {
            let p = principal as f64;
            let rate = Rate::Percent(rate_bp as f64 / 100.0);
            prop_assert_eq!(compound(p, rate, 0), round_unit(p));
            prop_assert_eq!(compound(p, Rate::zero(), periods), round_unit(p));
            prop_assert!(compound(p, rate, periods + 1) >= compound(p, rate, periods));
        }

        #[test]
        fn prop_decumulation_balances_never_negative(
            corpus in 0u32..50_000_000,
            expense in 0u32..5_000_000,
            inflation_bp in 0u32..1_500,
            return_bp in 0u32..1_500,
            years in 0u32..60,
            ignore_first in proptest::bool::ANY
        ) {
            let path = simulate_decumulation(
                corpus as f64,
                expense as f64,
                Rate::Percent(inflation_bp as f64 / 100.0),
                &Returns::Flat(Rate::Percent(return_bp as f64 / 100.0)),
                years,
                ignore_first,
            ).expect("valid run");
            prop_assert_eq!(path.balances.len(), years as usize);
            prop_assert_eq!(path.expenses.len(), years as usize);
            prop_assert!(path.balances.iter().all(|b| *b >= 0.0));
        }

        #[test]
        fn prop_projection_length_matches_horizon(
            current_age in 18u32..60,
            saving_years in 1u32..35,
            years_in_retirement in 0u32..45,
            step_up_bp in 0u32..1_100
        ) {
            let mut inputs = sample_inputs();
            inputs.current_age = current_age;
            inputs.retire_age = current_age + saving_years;
            inputs.years_in_retirement = years_in_retirement;
            // Step-up stays strictly below the 12% expected return.
            inputs.annual_step_up = Rate::Percent(step_up_bp as f64 / 100.0);

            let derived = size_corpus(&inputs).expect("valid inputs");
            let series = project_yearly_series(&inputs, &derived).expect("valid projection");
            let expected = (saving_years + years_in_retirement) as usize;
            prop_assert_eq!(series.len(), expected);
            prop_assert_eq!(series.expenses.len(), expected);
            prop_assert_eq!(series.investment_amount.len(), expected);
            prop_assert_eq!(series.retirement_corpus.len(), expected);
            prop_assert!(series.age.windows(2).all(|w| w[1] == w[0] + 1));
        }
    }
}
