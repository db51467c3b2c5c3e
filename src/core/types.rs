use serde::Serialize;

/// An annual rate with an explicit unit.
///
/// Every rate that crosses into the core carries its unit, so `1.0` and
/// `0.5` are never guessed at. Use [`Rate::coerce`] only for bare numbers
/// that follow the legacy convention.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "unit", content = "value", rename_all = "lowercase")]
pub enum Rate {
    Percent(f64),
    Fraction(f64),
}

impl Rate {
    pub const fn zero() -> Self {
        Rate::Fraction(0.0)
    }

    /// Legacy heuristic: values above 1.0 are percentages, anything else is
    /// already a fraction. `1.0` therefore means 100%.
    pub fn coerce(raw: f64) -> Self {
        if raw > 1.0 {
            Rate::Percent(raw)
        } else {
            Rate::Fraction(raw)
        }
    }

    pub fn fraction(self) -> f64 {
        match self {
            Rate::Percent(p) => p / 100.0,
            Rate::Fraction(f) => f,
        }
    }

    pub fn percent(self) -> f64 {
        match self {
            Rate::Percent(p) => p,
            Rate::Fraction(f) => f * 100.0,
        }
    }

    /// Growth factor `1 + r` for one period.
    pub fn factor(self) -> f64 {
        1.0 + self.fraction()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannerInputs {
    pub current_age: u32,
    pub retire_age: u32,
    pub years_in_retirement: u32,
    pub monthly_expenses: f64,
    pub other_annual_expenses: f64,
    pub safety_margin: Rate,
    pub current_investments: f64,
    pub inflation_pre_retirement: Rate,
    pub inflation_post_retirement: Rate,
    pub return_current_investments: Rate,
    pub return_pre_retirement: Rate,
    pub return_post_retirement: Rate,
    pub annual_step_up: Rate,
}

impl PlannerInputs {
    /// Saturates at zero; callers validate the ordering first.
    pub fn years_to_retire(&self) -> u32 {
        self.retire_age.saturating_sub(self.current_age)
    }

    pub fn horizon_years(&self) -> u32 {
        self.years_to_retire() + self.years_in_retirement
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedScalars {
    pub years_to_retire: u32,
    pub safe_monthly_expense: f64,
    pub future_value_of_current_investments: f64,
    pub expenses_at_retirement: f64,
    /// Real return during retirement, as a fraction.
    pub inflation_adjusted_return: f64,
    pub total_corpus_required: f64,
    pub shortfall: f64,
    /// First-year annual contribution of the step-up plan.
    pub yearly_corpus: f64,
}

impl DerivedScalars {
    pub fn monthly_step_up_investment(&self) -> f64 {
        self.yearly_corpus / 12.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlySeries {
    pub age: Vec<u32>,
    pub expenses: Vec<f64>,
    pub investment_amount: Vec<f64>,
    pub retirement_corpus: Vec<f64>,
}

impl YearlySeries {
    pub fn len(&self) -> usize {
        self.age.len()
    }

    pub fn is_empty(&self) -> bool {
        self.age.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = YearRow> + '_ {
        (0..self.len()).map(|idx| YearRow {
            age: self.age[idx],
            expenses: self.expenses[idx],
            investment_amount: self.investment_amount[idx],
            retirement_corpus: self.retirement_corpus[idx],
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRow {
    pub age: u32,
    pub expenses: f64,
    pub investment_amount: f64,
    pub retirement_corpus: f64,
}

/// Return assumption for a decumulation run.
#[derive(Debug, Clone, PartialEq)]
pub enum Returns {
    Flat(Rate),
    PerYear(Vec<Rate>),
}

impl Returns {
    pub fn for_year(&self, year: usize) -> Option<Rate> {
        match self {
            Returns::Flat(rate) => Some(*rate),
            Returns::PerYear(rates) => rates.get(year).copied(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecumulationPath {
    pub balances: Vec<f64>,
    pub expenses: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusAssessment {
    pub assumed_corpus: f64,
    /// Present only when the assumed corpus falls short of the required one.
    pub gap_to_required: Option<f64>,
    pub lasting_years: usize,
    pub path: DecumulationPath,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BucketKind {
    FixedDeposit,
    Debt,
    Hybrid,
    LargeCap,
    MidCap,
}

impl BucketKind {
    pub const ALL: [BucketKind; 5] = [
        BucketKind::FixedDeposit,
        BucketKind::Debt,
        BucketKind::Hybrid,
        BucketKind::LargeCap,
        BucketKind::MidCap,
    ];
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    pub kind: BucketKind,
    /// Share of the corpus, as a fraction.
    pub allocation: f64,
    pub mean_return: Rate,
    /// Standard deviation of the yearly draw; `None` grows deterministically.
    pub volatility: Option<Rate>,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketAllocation {
    pub buckets: [Bucket; 5],
}

impl BucketAllocation {
    pub fn total_allocation(&self) -> f64 {
        self.buckets.iter().map(|b| b.allocation).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketSimulation {
    /// One balance path per trial, indexed by trial.
    pub trials: Vec<Vec<f64>>,
    pub expenses: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSummary {
    pub trials: usize,
    pub median_path: Vec<f64>,
    /// Percentage of trials still funded in the final year.
    pub survival_rate: f64,
    pub median_lasting_years: usize,
}
