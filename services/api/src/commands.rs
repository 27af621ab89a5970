use clap::Args;
use postcode_eligibility::classification::{
    load_or_empty, lookup, DatasetStats, JsonFileStore, Postcode, SnapshotStore, UpdatePipeline,
    VisaSubclass,
};
use postcode_eligibility::config::AppConfig;
use postcode_eligibility::error::AppError;
use postcode_eligibility::telemetry;
use serde::Serialize;

#[derive(Args, Debug, Default)]
pub(crate) struct VerifyArgs {
    /// Report what would change without writing the snapshot
    #[arg(long)]
    pub(crate) dry_run: bool,
}

#[derive(Args, Debug)]
pub(crate) struct LookupArgs {
    /// Four-digit postcode, e.g. 0800
    #[arg(value_parser = parse_postcode)]
    pub(crate) postcode: Postcode,
    /// Visa subclass whose lookup rules apply (417 or 462)
    #[arg(long, value_parser = parse_visa)]
    pub(crate) visa: Option<VisaSubclass>,
}

fn parse_postcode(raw: &str) -> Result<Postcode, String> {
    raw.parse().map_err(|err| format!("{err}"))
}

fn parse_visa(raw: &str) -> Result<VisaSubclass, String> {
    VisaSubclass::from_code(raw).ok_or_else(|| format!("unsupported visa subclass '{raw}'"))
}

fn init() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn file_store(config: &AppConfig) -> JsonFileStore {
    JsonFileStore::new(&config.storage.data_path, &config.storage.backup_dir)
}

pub(crate) fn run_update() -> Result<(), AppError> {
    let config = init()?;
    let outcome = UpdatePipeline::from_config(&config).run()?;
    print_json(&outcome.report)
}

pub(crate) fn run_verify(args: VerifyArgs) -> Result<(), AppError> {
    let config = init()?;
    let outcome = UpdatePipeline::from_config(&config).verify(args.dry_run)?;
    print_json(&outcome.report)
}

pub(crate) fn run_stats() -> Result<(), AppError> {
    let config = init()?;
    print_json(&snapshot_stats(&file_store(&config)))
}

fn snapshot_stats<S: SnapshotStore>(store: &S) -> DatasetStats {
    DatasetStats::compute(&load_or_empty(store))
}

pub(crate) fn run_lookup(args: LookupArgs) -> Result<(), AppError> {
    let config = init()?;
    let dataset = load_or_empty(&file_store(&config));
    print_json(&lookup(&dataset, args.postcode, args.visa))
}
