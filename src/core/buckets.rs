use std::f64::consts::PI;

use log::debug;

use super::engine::{decumulate, ensure_finite, inflated_expenses, lasting_years};
use super::error::PlanError;
use super::types::{BucketAllocation, BucketSimulation, Rate, SimulationSummary};

const ALLOCATION_TOLERANCE: f64 = 1e-6;

/// Runs `num_trials` independent drawdowns of a corpus split across five
/// buckets. Volatile buckets draw a normal return per year; a bucket without
/// volatility grows at its mean. Trial `i` is seeded from `(seed, i)`, so a
/// run is reproducible and trials never share a stream.
pub fn run_bucket_simulation(
    initial_corpus: f64,
    initial_expense: f64,
    inflation: Rate,
    n_years: u32,
    allocation: &BucketAllocation,
    num_trials: u32,
    seed: u64,
) -> Result<BucketSimulation, PlanError> {
    ensure_finite("initial corpus", initial_corpus)?;
    ensure_finite("initial expense", initial_expense)?;
    validate_allocation(allocation)?;
    if num_trials == 0 {
        return Err(PlanError::InvalidInput(
            "number of trials must be > 0".to_string(),
        ));
    }

    let expenses = inflated_expenses(initial_expense, inflation, n_years);

    let mut trials = Vec::with_capacity(num_trials as usize);
    for trial in 0..num_trials {
        let mut rng = Rng::new(derive_seed(seed, trial));
        let yearly_returns = sample_bucket_returns(allocation, n_years as usize, &mut rng);
        let balances = decumulate(initial_corpus, &expenses, true, |year, balance| {
            allocation
                .buckets
                .iter()
                .zip(yearly_returns[year])
                .map(|(bucket, r)| balance * bucket.allocation * (1.0 + r))
                .sum()
        });
        trials.push(balances);
    }

    debug!("bucket simulation finished: trials={num_trials} years={n_years} seed={seed}");

    Ok(BucketSimulation { trials, expenses })
}

/// Per-year median path and survival rate across trials.
///
/// Every trial must cover the same horizon as `expenses`.
pub fn summarize(simulation: &BucketSimulation) -> Result<SimulationSummary, PlanError> {
    let n_years = simulation.expenses.len();
    let n_trials = simulation.trials.len();
    if n_trials == 0 {
        return Err(PlanError::InvalidInput(
            "cannot summarize a simulation without trials".to_string(),
        ));
    }
    if let Some((trial, path)) = simulation
        .trials
        .iter()
        .enumerate()
        .find(|(_, path)| path.len() != n_years)
    {
        return Err(PlanError::InvalidRange(format!(
            "trial {trial} has {} balances for a {n_years}-year horizon",
            path.len()
        )));
    }

    let mut column = Vec::with_capacity(n_trials);
    let median_path = (0..n_years)
        .map(|year| {
            column.clear();
            column.extend(simulation.trials.iter().map(|path| path[year]));
            percentile(&mut column, 50.0)
        })
        .collect::<Vec<_>>();

    // A zero-year horizon never runs out.
    let survival_rate = if n_years == 0 {
        100.0
    } else {
        let survivors = simulation
            .trials
            .iter()
            .filter(|path| path.last().is_some_and(|b| *b > 0.0))
            .count();
        survivors as f64 / n_trials as f64 * 100.0
    };

    debug!("bucket simulation survival rate: {survival_rate:.1}% over {n_trials} trials");

    Ok(SimulationSummary {
        trials: n_trials,
        median_lasting_years: lasting_years(&median_path),
        median_path,
        survival_rate,
    })
}

fn validate_allocation(allocation: &BucketAllocation) -> Result<(), PlanError> {
    for bucket in &allocation.buckets {
        if !bucket.allocation.is_finite() || !(0.0..=1.0).contains(&bucket.allocation) {
            return Err(PlanError::InvalidAllocation {
                sum: allocation.total_allocation(),
            });
        }
        ensure_finite("bucket mean return", bucket.mean_return.fraction())?;
        if let Some(vol) = bucket.volatility {
            let vol = vol.fraction();
            if !vol.is_finite() || vol < 0.0 {
                return Err(PlanError::InvalidInput(
                    "bucket volatility must be >= 0".to_string(),
                ));
            }
        }
    }

    let sum = allocation.total_allocation();
    if (sum - 1.0).abs() > ALLOCATION_TOLERANCE {
        return Err(PlanError::InvalidAllocation { sum });
    }
    Ok(())
}

/// Year-major table of bucket returns as fractions. Each bucket draws its
/// whole horizon before the next bucket starts.
fn sample_bucket_returns(
    allocation: &BucketAllocation,
    n_years: usize,
    rng: &mut Rng,
) -> Vec<[f64; 5]> {
    let mut table = vec![[0.0; 5]; n_years];
    for (idx, bucket) in allocation.buckets.iter().enumerate() {
        let mean = bucket.mean_return.fraction();
        for row in table.iter_mut() {
            row[idx] = match bucket.volatility {
                Some(vol) => mean + vol.fraction() * rng.standard_normal(),
                None => mean,
            };
        }
    }
    table
}

fn derive_seed(base_seed: u64, trial: u32) -> u64 {
    let mixed = base_seed ^ ((trial as u64) << 32) ^ trial as u64;
    splitmix64(mixed)
}

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// xorshift64* with a cached Box-Muller pair.
struct Rng {
    state: u64,
    cached_normal: Option<f64>,
}

impl Rng {
    fn new(seed: u64) -> Self {
        let state = if seed == 0 {
            0xA5A5_A5A5_A5A5_A5A5
        } else {
            seed
        };
        Self {
            state,
            cached_normal: None,
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    fn next_f64(&mut self) -> f64 {
        const DENOM: f64 = (1_u64 << 53) as f64;
        let v = self.next_u64() >> 11;
        ((v as f64) + 0.5) / DENOM
    }

    fn standard_normal(&mut self) -> f64 {
        if let Some(z) = self.cached_normal.take() {
            return z;
        }

        let u1 = self.next_f64().max(1e-12);
        let u2 = self.next_f64();
        let r = (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * PI * u2;

        self.cached_normal = Some(r * theta.sin());
        r * theta.cos()
    }
}

/// Linear-interpolation percentile, the same rule as numpy's default, so
/// `p = 50` is numpy's median: the mean of the two middle balances for an
/// even trial count.
fn percentile(values: &mut [f64], p: f64) -> f64 {
    values.sort_by(f64::total_cmp);
    match values {
        [] => 0.0,
        [only] => *only,
        _ => {
            let rank = (p / 100.0) * (values.len() - 1) as f64;
            let below = rank.floor() as usize;
            let above = rank.ceil() as usize;
            let weight = rank - below as f64;
            values[below] + (values[above] - values[below]) * weight
        }
    }
}
