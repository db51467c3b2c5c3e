use axum::{
    Router,
    extract::{Json, Query},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use clap::Args;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::net::SocketAddr;
use tokio::net::TcpListener;

mod format;

pub use format::format_inr;

use crate::core::{
    Bucket, BucketAllocation, BucketKind, CorpusAssessment, DerivedScalars, PlannerInputs, Rate,
    Returns, SimulationSummary, YearRow, assess_corpus, lasting_years, project_yearly_series,
    run_bucket_simulation, simulate_decumulation, size_corpus, summarize, withdrawal_rule_corpus,
};

/// Upper bound on Monte Carlo trials accepted from the CLI and HTTP API.
pub const MAX_TRIALS: u32 = 1_000;
const MAX_AMOUNT: f64 = 1e10;
const MAX_AGE: u32 = 100;
const WITHDRAWAL_RULES: [f64; 2] = [3.0, 4.0];

#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    #[arg(long, default_value_t = 35)]
    pub current_age: u32,
    #[arg(long, default_value_t = 60)]
    pub retire_age: u32,
    #[arg(long, default_value_t = 40)]
    pub years_in_retirement: u32,
    #[arg(long, default_value_t = 50_000.0)]
    pub monthly_expenses: f64,
    #[arg(long, default_value_t = 100_000.0)]
    pub other_annual_expenses: f64,
    #[arg(
        long,
        default_value_t = 10.0,
        help = "Overestimate expenses for safety, in percent"
    )]
    pub safety_margin: f64,
    #[arg(long, default_value_t = 1_000_000.0)]
    pub current_investments: f64,
    #[arg(long, default_value_t = 7.0, help = "Inflation before retirement in percent")]
    pub inflation_pre_retirement: f64,
    #[arg(long, default_value_t = 6.0, help = "Inflation after retirement in percent")]
    pub inflation_post_retirement: f64,
    #[arg(long, default_value_t = 14.0, help = "Return on current investments in percent")]
    pub return_current_investments: f64,
    #[arg(
        long,
        default_value_t = 12.0,
        help = "Expected return on new investments before retirement in percent"
    )]
    pub return_pre_retirement: f64,
    #[arg(
        long,
        default_value_t = 6.0,
        help = "Expected return after retirement in percent"
    )]
    pub return_post_retirement: f64,
    #[arg(
        long,
        default_value_t = 10.0,
        help = "Yearly step-up of the investment amount in percent"
    )]
    pub annual_step_up: f64,
}

#[derive(Args, Debug, Clone)]
pub struct SimulationArgs {
    #[arg(
        long,
        default_value_t = 1e8,
        help = "Corpus you expect to hold at retirement"
    )]
    pub assumed_corpus: f64,
    #[arg(long, default_value_t = 8.0)]
    pub fixed_deposit_return: f64,
    #[arg(long, default_value_t = 9.0)]
    pub debt_return: f64,
    #[arg(long, default_value_t = 3.0)]
    pub debt_volatility: f64,
    #[arg(long, default_value_t = 10.0)]
    pub hybrid_return: f64,
    #[arg(long, default_value_t = 10.0)]
    pub hybrid_volatility: f64,
    #[arg(long, default_value_t = 12.0)]
    pub large_cap_return: f64,
    #[arg(long, default_value_t = 20.0)]
    pub large_cap_volatility: f64,
    #[arg(long, default_value_t = 15.0)]
    pub mid_cap_return: f64,
    #[arg(long, default_value_t = 30.0)]
    pub mid_cap_volatility: f64,
    #[arg(long, default_value_t = 50.0, help = "Allocation to fixed deposits in percent")]
    pub alloc_fixed_deposit: f64,
    #[arg(long, default_value_t = 10.0)]
    pub alloc_debt: f64,
    #[arg(long, default_value_t = 20.0)]
    pub alloc_hybrid: f64,
    #[arg(long, default_value_t = 10.0)]
    pub alloc_large_cap: f64,
    #[arg(long, default_value_t = 10.0)]
    pub alloc_mid_cap: f64,
    #[arg(long, default_value_t = 10)]
    pub trials: u32,
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PlannerPayload {
    current_age: Option<u32>,
    retire_age: Option<u32>,
    years_in_retirement: Option<u32>,
    monthly_expenses: Option<f64>,
    other_annual_expenses: Option<f64>,
    #[serde(alias = "overestimateExpenses")]
    safety_margin: Option<f64>,
    current_investments: Option<f64>,
    inflation_pre_retirement: Option<f64>,
    inflation_post_retirement: Option<f64>,
    return_current_investments: Option<f64>,
    return_pre_retirement: Option<f64>,
    return_post_retirement: Option<f64>,
    annual_step_up: Option<f64>,

    assumed_corpus: Option<f64>,
    fixed_deposit_return: Option<f64>,
    debt_return: Option<f64>,
    debt_volatility: Option<f64>,
    hybrid_return: Option<f64>,
    hybrid_volatility: Option<f64>,
    large_cap_return: Option<f64>,
    large_cap_volatility: Option<f64>,
    mid_cap_return: Option<f64>,
    mid_cap_volatility: Option<f64>,
    alloc_fixed_deposit: Option<f64>,
    alloc_debt: Option<f64>,
    alloc_hybrid: Option<f64>,
    alloc_large_cap: Option<f64>,
    alloc_mid_cap: Option<f64>,
    #[serde(alias = "simulations")]
    trials: Option<u32>,
    seed: Option<u64>,
}

#[derive(Debug)]
struct SimulationRequest {
    inputs: PlannerInputs,
    allocation: BucketAllocation,
    assumed_corpus: f64,
    trials: u32,
    seed: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FormattedScalars {
    safe_monthly_expense: String,
    future_value_of_current_investments: String,
    expenses_at_retirement: String,
    total_corpus_required: String,
    shortfall: String,
    monthly_step_up_investment: String,
}

impl From<&DerivedScalars> for FormattedScalars {
    fn from(derived: &DerivedScalars) -> Self {
        Self {
            safe_monthly_expense: format_inr(derived.safe_monthly_expense),
            future_value_of_current_investments: format_inr(
                derived.future_value_of_current_investments,
            ),
            expenses_at_retirement: format_inr(derived.expenses_at_retirement),
            total_corpus_required: format_inr(derived.total_corpus_required),
            shortfall: format_inr(derived.shortfall),
            monthly_step_up_investment: format_inr(derived.monthly_step_up_investment()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RuleCorpusResponse {
    rule_percent: f64,
    corpus: f64,
    lasting_years: usize,
    balances: Vec<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PlanResponse {
    derived: DerivedScalars,
    monthly_step_up_investment: f64,
    formatted: FormattedScalars,
    years: Vec<YearRow>,
    withdrawal_rules: Vec<RuleCorpusResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RuleBucketSummary {
    rule_percent: f64,
    corpus: f64,
    summary: SimulationSummary,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SimulateResponse {
    total_corpus_required: f64,
    retirement_ages: Vec<u32>,
    assessment: CorpusAssessment,
    bucket_summary: SimulationSummary,
    rule_bucket_summaries: Vec<RuleBucketSummary>,
    trial_paths: Vec<Vec<f64>>,
    expenses: Vec<f64>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn build_inputs(args: &PlanArgs) -> Result<PlannerInputs, String> {
    if args.current_age > MAX_AGE {
        return Err(format!("--current-age must be <= {MAX_AGE}"));
    }
    if args.retire_age > MAX_AGE {
        return Err(format!("--retire-age must be <= {MAX_AGE}"));
    }
    if args.retire_age <= args.current_age {
        return Err("--retire-age must be > --current-age".to_string());
    }
    if args.years_in_retirement > MAX_AGE {
        return Err(format!("--years-in-retirement must be <= {MAX_AGE}"));
    }

    for (flag, value) in [
        ("--monthly-expenses", args.monthly_expenses),
        ("--other-annual-expenses", args.other_annual_expenses),
        ("--current-investments", args.current_investments),
    ] {
        check_amount(flag, value)?;
    }

    for (flag, value) in [
        ("--safety-margin", args.safety_margin),
        ("--inflation-pre-retirement", args.inflation_pre_retirement),
        ("--inflation-post-retirement", args.inflation_post_retirement),
        ("--return-current-investments", args.return_current_investments),
        ("--return-pre-retirement", args.return_pre_retirement),
        ("--return-post-retirement", args.return_post_retirement),
        ("--annual-step-up", args.annual_step_up),
    ] {
        check_percent(flag, value)?;
    }

    if (args.annual_step_up - args.return_pre_retirement).abs() < 1e-12 {
        return Err("--annual-step-up must differ from --return-pre-retirement".to_string());
    }

    Ok(PlannerInputs {
        current_age: args.current_age,
        retire_age: args.retire_age,
        years_in_retirement: args.years_in_retirement,
        monthly_expenses: args.monthly_expenses,
        other_annual_expenses: args.other_annual_expenses,
        safety_margin: Rate::Percent(args.safety_margin),
        current_investments: args.current_investments,
        inflation_pre_retirement: Rate::Percent(args.inflation_pre_retirement),
        inflation_post_retirement: Rate::Percent(args.inflation_post_retirement),
        return_current_investments: Rate::Percent(args.return_current_investments),
        return_pre_retirement: Rate::Percent(args.return_pre_retirement),
        return_post_retirement: Rate::Percent(args.return_post_retirement),
        annual_step_up: Rate::Percent(args.annual_step_up),
    })
}

fn build_allocation(args: &SimulationArgs) -> Result<BucketAllocation, String> {
    for (flag, value) in [
        ("--fixed-deposit-return", args.fixed_deposit_return),
        ("--debt-return", args.debt_return),
        ("--debt-volatility", args.debt_volatility),
        ("--hybrid-return", args.hybrid_return),
        ("--hybrid-volatility", args.hybrid_volatility),
        ("--large-cap-return", args.large_cap_return),
        ("--large-cap-volatility", args.large_cap_volatility),
        ("--mid-cap-return", args.mid_cap_return),
        ("--mid-cap-volatility", args.mid_cap_volatility),
        ("--alloc-fixed-deposit", args.alloc_fixed_deposit),
        ("--alloc-debt", args.alloc_debt),
        ("--alloc-hybrid", args.alloc_hybrid),
        ("--alloc-large-cap", args.alloc_large_cap),
        ("--alloc-mid-cap", args.alloc_mid_cap),
    ] {
        check_percent(flag, value)?;
    }

    let total = args.alloc_fixed_deposit
        + args.alloc_debt
        + args.alloc_hybrid
        + args.alloc_large_cap
        + args.alloc_mid_cap;
    if (total - 100.0).abs() > 1e-4 {
        return Err(format!(
            "--alloc-* percentages must sum to 100 (got {total:.2})"
        ));
    }

    let volatile = |kind, allocation: f64, mean: f64, vol: f64| Bucket {
        kind,
        allocation: allocation / 100.0,
        mean_return: Rate::Percent(mean),
        volatility: Some(Rate::Percent(vol)),
    };

    Ok(BucketAllocation {
        buckets: [
            Bucket {
                kind: BucketKind::FixedDeposit,
                allocation: args.alloc_fixed_deposit / 100.0,
                mean_return: Rate::Percent(args.fixed_deposit_return),
                volatility: None,
            },
            volatile(
                BucketKind::Debt,
                args.alloc_debt,
                args.debt_return,
                args.debt_volatility,
            ),
            volatile(
                BucketKind::Hybrid,
                args.alloc_hybrid,
                args.hybrid_return,
                args.hybrid_volatility,
            ),
            volatile(
                BucketKind::LargeCap,
                args.alloc_large_cap,
                args.large_cap_return,
                args.large_cap_volatility,
            ),
            volatile(
                BucketKind::MidCap,
                args.alloc_mid_cap,
                args.mid_cap_return,
                args.mid_cap_volatility,
            ),
        ],
    })
}

fn check_amount(flag: &str, value: f64) -> Result<(), String> {
    if !value.is_finite() || !(0.0..=MAX_AMOUNT).contains(&value) {
        return Err(format!("{flag} must be between 0 and {MAX_AMOUNT:e}"));
    }
    Ok(())
}

fn check_percent(flag: &str, value: f64) -> Result<(), String> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(format!("{flag} must be between 0 and 100"));
    }
    Ok(())
}

fn build_simulation_request(
    plan: &PlanArgs,
    simulation: &SimulationArgs,
) -> Result<SimulationRequest, String> {
    let inputs = build_inputs(plan)?;
    let allocation = build_allocation(simulation)?;
    check_amount("--assumed-corpus", simulation.assumed_corpus)?;
    if simulation.trials == 0 || simulation.trials > MAX_TRIALS {
        return Err(format!("--trials must be between 1 and {MAX_TRIALS}"));
    }

    Ok(SimulationRequest {
        inputs,
        allocation,
        assumed_corpus: simulation.assumed_corpus,
        trials: simulation.trials,
        seed: simulation.seed,
    })
}

fn build_plan_response(inputs: &PlannerInputs) -> Result<PlanResponse, String> {
    let derived = size_corpus(inputs).map_err(|e| e.to_string())?;
    let series = project_yearly_series(inputs, &derived).map_err(|e| e.to_string())?;

    let mut withdrawal_rules = Vec::with_capacity(WITHDRAWAL_RULES.len());
    for rule_percent in WITHDRAWAL_RULES {
        let corpus = withdrawal_rule_corpus(derived.expenses_at_retirement, Rate::Percent(rule_percent))
            .map_err(|e| e.to_string())?;
        let path = simulate_decumulation(
            corpus,
            derived.expenses_at_retirement,
            inputs.inflation_post_retirement,
            &Returns::Flat(inputs.return_post_retirement),
            inputs.years_in_retirement,
            true,
        )
        .map_err(|e| e.to_string())?;
        withdrawal_rules.push(RuleCorpusResponse {
            rule_percent,
            corpus,
            lasting_years: lasting_years(&path.balances),
            balances: path.balances,
        });
    }

    Ok(PlanResponse {
        monthly_step_up_investment: derived.monthly_step_up_investment(),
        formatted: FormattedScalars::from(&derived),
        years: series.rows().collect(),
        derived,
        withdrawal_rules,
    })
}

fn build_simulate_response(request: &SimulationRequest) -> Result<SimulateResponse, String> {
    let inputs = &request.inputs;
    let derived = size_corpus(inputs).map_err(|e| e.to_string())?;
    let assessment =
        assess_corpus(inputs, &derived, request.assumed_corpus).map_err(|e| e.to_string())?;
    let run = |corpus: f64| {
        run_bucket_simulation(
            corpus,
            derived.expenses_at_retirement,
            inputs.inflation_post_retirement,
            inputs.years_in_retirement,
            &request.allocation,
            request.trials,
            request.seed,
        )
        .map_err(|e| e.to_string())
    };

    let simulation = run(request.assumed_corpus)?;
    let bucket_summary = summarize(&simulation).map_err(|e| e.to_string())?;

    // Rule corpora share the seed, so every trial sees the same market path.
    let mut rule_bucket_summaries = Vec::with_capacity(WITHDRAWAL_RULES.len());
    for rule_percent in WITHDRAWAL_RULES {
        let corpus = withdrawal_rule_corpus(derived.expenses_at_retirement, Rate::Percent(rule_percent))
            .map_err(|e| e.to_string())?;
        let summary = summarize(&run(corpus)?).map_err(|e| e.to_string())?;
        rule_bucket_summaries.push(RuleBucketSummary {
            rule_percent,
            corpus,
            summary,
        });
    }

    Ok(SimulateResponse {
        total_corpus_required: derived.total_corpus_required,
        retirement_ages: (inputs.retire_age..inputs.retire_age + inputs.years_in_retirement)
            .collect(),
        assessment,
        bucket_summary,
        rule_bucket_summaries,
        trial_paths: simulation.trials,
        expenses: simulation.expenses,
    })
}

/// Text report for `nestegg plan`.
pub fn run_plan_command(args: &PlanArgs) -> Result<String, String> {
    let inputs = build_inputs(args)?;
    let response = build_plan_response(&inputs)?;
    render_plan_report(args, &response).map_err(|e| format!("failed to render report: {e}"))
}

/// JSON report for `nestegg simulate`.
pub fn run_simulate_command(plan: &PlanArgs, simulation: &SimulationArgs) -> Result<String, String> {
    let request = build_simulation_request(plan, simulation)?;
    let response = build_simulate_response(&request)?;
    serde_json::to_string_pretty(&response).map_err(|e| format!("failed to encode report: {e}"))
}

fn render_plan_report(args: &PlanArgs, response: &PlanResponse) -> Result<String, std::fmt::Error> {
    let f = &response.formatted;
    let mut out = String::new();
    writeln!(
        out,
        "Current monthly expenses (+{}% for safety): {}",
        args.safety_margin, f.safe_monthly_expense
    )?;
    writeln!(
        out,
        "Value of current investments at retirement: {}",
        f.future_value_of_current_investments
    )?;
    writeln!(
        out,
        "Annual expenses in the first year of retirement: {}",
        f.expenses_at_retirement
    )?;
    writeln!(out, "Total retirement corpus required: {}", f.total_corpus_required)?;
    writeln!(out, "Corpus still to accumulate: {}", f.shortfall)?;
    writeln!(
        out,
        "Monthly investment to start now ({}% yearly step-up): {}",
        args.annual_step_up, f.monthly_step_up_investment
    )?;
    for rule in &response.withdrawal_rules {
        writeln!(
            out,
            "{}% rule corpus: {} (lasts {} years)",
            rule.rule_percent,
            format_inr(rule.corpus.round()),
            rule.lasting_years
        )?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "{:>4}  {:>22}  {:>22}  {:>26}",
        "age", "expenses", "investment", "corpus"
    )?;
    for row in &response.years {
        writeln!(
            out,
            "{:>4}  {:>22}  {:>22}  {:>26}",
            row.age,
            format_inr(row.expenses),
            format_inr(row.investment_amount),
            format_inr(row.retirement_corpus.round())
        )?;
    }
    Ok(out)
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route("/api/plan", get(plan_get_handler).post(plan_post_handler))
        .route(
            "/api/simulate",
            get(simulate_get_handler).post(simulate_post_handler),
        )
        .fallback(not_found_handler);

    let listener = TcpListener::bind(addr).await?;
    info!("planner HTTP API listening on http://{addr}");

    axum::serve(listener, app).await
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn plan_get_handler(Query(payload): Query<PlannerPayload>) -> Response {
    plan_handler_impl(payload).await
}

async fn plan_post_handler(Json(payload): Json<PlannerPayload>) -> Response {
    plan_handler_impl(payload).await
}

async fn simulate_get_handler(Query(payload): Query<PlannerPayload>) -> Response {
    simulate_handler_impl(payload).await
}

async fn simulate_post_handler(Json(payload): Json<PlannerPayload>) -> Response {
    simulate_handler_impl(payload).await
}

async fn plan_handler_impl(payload: PlannerPayload) -> Response {
    let plan = plan_args_from_payload(&payload);
    let response = build_inputs(&plan).and_then(|inputs| build_plan_response(&inputs));
    match response {
        Ok(body) => json_response(StatusCode::OK, body),
        Err(msg) => error_response(StatusCode::BAD_REQUEST, &msg),
    }
}

async fn simulate_handler_impl(payload: PlannerPayload) -> Response {
    let plan = plan_args_from_payload(&payload);
    let simulation = simulation_args_from_payload(&payload);
    let response = build_simulation_request(&plan, &simulation)
        .and_then(|request| build_simulate_response(&request));
    match response {
        Ok(body) => json_response(StatusCode::OK, body),
        Err(msg) => error_response(StatusCode::BAD_REQUEST, &msg),
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    if status == StatusCode::BAD_REQUEST {
        warn!("rejected request: {msg}");
    }
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

fn plan_args_from_payload(payload: &PlannerPayload) -> PlanArgs {
    let mut args = default_plan_args();
    if let Some(v) = payload.current_age {
        args.current_age = v;
    }
    if let Some(v) = payload.retire_age {
        args.retire_age = v;
    }
    if let Some(v) = payload.years_in_retirement {
        args.years_in_retirement = v;
    }
    if let Some(v) = payload.monthly_expenses {
        args.monthly_expenses = v;
    }
    if let Some(v) = payload.other_annual_expenses {
        args.other_annual_expenses = v;
    }
    if let Some(v) = payload.safety_margin {
        args.safety_margin = v;
    }
    if let Some(v) = payload.current_investments {
        args.current_investments = v;
    }
    if let Some(v) = payload.inflation_pre_retirement {
        args.inflation_pre_retirement = v;
    }
    if let Some(v) = payload.inflation_post_retirement {
        args.inflation_post_retirement = v;
    }
    if let Some(v) = payload.return_current_investments {
        args.return_current_investments = v;
    }
    if let Some(v) = payload.return_pre_retirement {
        args.return_pre_retirement = v;
    }
    if let Some(v) = payload.return_post_retirement {
        args.return_post_retirement = v;
    }
    if let Some(v) = payload.annual_step_up {
        args.annual_step_up = v;
    }
    args
}

fn simulation_args_from_payload(payload: &PlannerPayload) -> SimulationArgs {
    let mut args = default_simulation_args();
    if let Some(v) = payload.assumed_corpus {
        args.assumed_corpus = v;
    }
    if let Some(v) = payload.fixed_deposit_return {
        args.fixed_deposit_return = v;
    }
    if let Some(v) = payload.debt_return {
        args.debt_return = v;
    }
    if let Some(v) = payload.debt_volatility {
        args.debt_volatility = v;
    }
    if let Some(v) = payload.hybrid_return {
        args.hybrid_return = v;
    }
    if let Some(v) = payload.hybrid_volatility {
        args.hybrid_volatility = v;
    }
    if let Some(v) = payload.large_cap_return {
        args.large_cap_return = v;
    }
    if let Some(v) = payload.large_cap_volatility {
        args.large_cap_volatility = v;
    }
    if let Some(v) = payload.mid_cap_return {
        args.mid_cap_return = v;
    }
    if let Some(v) = payload.mid_cap_volatility {
        args.mid_cap_volatility = v;
    }
    if let Some(v) = payload.alloc_fixed_deposit {
        args.alloc_fixed_deposit = v;
    }
    if let Some(v) = payload.alloc_debt {
        args.alloc_debt = v;
    }
    if let Some(v) = payload.alloc_hybrid {
        args.alloc_hybrid = v;
    }
    if let Some(v) = payload.alloc_large_cap {
        args.alloc_large_cap = v;
    }
    if let Some(v) = payload.alloc_mid_cap {
        args.alloc_mid_cap = v;
    }
    if let Some(v) = payload.trials {
        args.trials = v;
    }
    if let Some(v) = payload.seed {
        args.seed = v;
    }
    args
}

fn default_plan_args() -> PlanArgs {
    PlanArgs {
        current_age: 35,
        retire_age: 60,
        years_in_retirement: 40,
        monthly_expenses: 50_000.0,
        other_annual_expenses: 100_000.0,
        safety_margin: 10.0,
        current_investments: 1_000_000.0,
        inflation_pre_retirement: 7.0,
        inflation_post_retirement: 6.0,
        return_current_investments: 14.0,
        return_pre_retirement: 12.0,
        return_post_retirement: 6.0,
        annual_step_up: 10.0,
    }
}

fn default_simulation_args() -> SimulationArgs {
    SimulationArgs {
        assumed_corpus: 1e8,
        fixed_deposit_return: 8.0,
        debt_return: 9.0,
        debt_volatility: 3.0,
        hybrid_return: 10.0,
        hybrid_volatility: 10.0,
        large_cap_return: 12.0,
        large_cap_volatility: 20.0,
        mid_cap_return: 15.0,
        mid_cap_volatility: 30.0,
        alloc_fixed_deposit: 50.0,
        alloc_debt: 10.0,
        alloc_hybrid: 20.0,
        alloc_large_cap: 10.0,
        alloc_mid_cap: 10.0,
        trials: 10,
        seed: 42,
    }
}
