mod buckets;
mod engine;
mod error;
mod types;

pub use buckets::{run_bucket_simulation, summarize};
pub use engine::{
    assess_corpus, compound, compound_with_frequency, lasting_years, project_yearly_series,
    round_unit, simulate_decumulation, size_corpus, withdrawal_rule_corpus,
};
pub use error::PlanError;
pub use types::{
    Bucket, BucketAllocation, BucketKind, BucketSimulation, CorpusAssessment, DecumulationPath,
    DerivedScalars, PlannerInputs, Rate, Returns, SimulationSummary, YearRow, YearlySeries,
};
