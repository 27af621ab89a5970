//! End-to-end update runs against a temporary snapshot directory.

use postcode_eligibility::classification::{
    ClassificationRecord, Confidence, Contribution, ContributionSource, CriticalOverrideTable,
    Dataset, FetchError, Flag, JsonFileStore, LoadError, Postcode, SaveError, SaveReceipt,
    SnapshotStore, StoredRecord, UpdateError, UpdateLog, UpdatePipeline,
};
use postcode_eligibility::classification::sources::OfficialTableSource;
use std::fs;
use std::path::Path;

struct FixedSource(Vec<Contribution>);

impl ContributionSource for FixedSource {
    fn label(&self) -> &str {
        "fixed"
    }

    fn collect(&self) -> Result<Vec<Contribution>, FetchError> {
        Ok(self.0.clone())
    }
}

struct UnreachableSource;

impl ContributionSource for UnreachableSource {
    fn label(&self) -> &str {
        "unreachable"
    }

    fn collect(&self) -> Result<Vec<Contribution>, FetchError> {
        Err(FetchError::Io {
            path: "https://example.invalid/postcodes".into(),
            source: std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out"),
        })
    }
}

/// Loads fine but refuses every write.
struct ReadOnlyStore;

impl SnapshotStore for ReadOnlyStore {
    fn load(&self) -> Result<Dataset, LoadError> {
        Err(LoadError::Missing("postcodes.json".into()))
    }

    fn save(&self, _dataset: &Dataset) -> Result<SaveReceipt, SaveError> {
        Err(SaveError::Write {
            path: "postcodes.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }
}

fn code(value: u16) -> Postcode {
    Postcode::literal(value)
}

fn file_store(dir: &Path) -> JsonFileStore {
    JsonFileStore::new(dir.join("postcodes.json"), dir.join("backups"))
}

fn remote_only(postcode: Postcode) -> Contribution {
    let mut contribution = Contribution::additive("remote", Confidence::Official);
    contribution.assert(postcode, Flag::Remote, true);
    contribution
}

#[test]
fn official_tables_produce_a_consistent_snapshot() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log = UpdateLog::new(dir.path().join("update_logs.json"), 50);
    let pipeline = UpdatePipeline::new(file_store(dir.path()))
        .with_source(OfficialTableSource::standard())
        .with_update_log(log.clone());

    let outcome = pipeline.run().expect("update succeeds");
    let dataset = &outcome.dataset;

    assert_eq!(outcome.report.loaded, 0);
    assert!(outcome.report.load_error.is_some());
    assert_eq!(outcome.report.seeded, 0);
    for postcode in Postcode::northern_territory() {
        let record = dataset.classification(postcode).expect("NT postcode present");
        assert!(record.northern && record.remote && record.regional, "{postcode}");
    }
    for (postcode, expected) in CriticalOverrideTable::standard().entries() {
        assert_eq!(dataset.classification(*postcode).as_ref(), Some(expected));
    }
    for (postcode, stored) in dataset.iter() {
        let record = stored.materialized();
        assert!(!stored.has_legacy_flood());
        assert!(stored.missing_flags().is_empty());
        assert!(!record.northern || record.regional, "{postcode} northern");
        if *postcode != code(6161) {
            assert!(!record.remote || record.regional, "{postcode} remote");
        }
    }

    let persisted = file_store(dir.path()).load().expect("snapshot written");
    assert_eq!(&persisted, dataset);

    let entries = log.entries();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].success);
}

#[test]
fn remote_contribution_then_reconcile_applies_critical_values() {
    let dir = tempfile::tempdir().expect("tempdir");
    let pipeline = UpdatePipeline::new(file_store(dir.path()))
        .with_source(FixedSource(vec![remote_only(code(6721)), remote_only(code(5440))]));

    let outcome = pipeline.run().expect("update succeeds");

    assert_eq!(
        outcome.dataset.classification(code(5440)),
        Some(ClassificationRecord::new(true, true, false, false, false))
    );
    assert_eq!(
        outcome.dataset.classification(code(6721)),
        Some(ClassificationRecord::new(true, true, true, false, false))
    );
}

#[test]
fn sparse_runs_are_seeded_with_fallback_postcodes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let pipeline = UpdatePipeline::new(file_store(dir.path()))
        .with_source(FixedSource(vec![remote_only(code(5440))]));

    let outcome = pipeline.run().expect("update succeeds");

    assert!(outcome.report.seeded > 0);
    let dataset = &outcome.dataset;
    assert_eq!(dataset.classification(code(2000)), Some(ClassificationRecord::default()));
    assert_eq!(
        dataset.classification(code(6330)),
        Some(ClassificationRecord::new(true, false, false, false, false))
    );
    assert_eq!(
        dataset.classification(code(4870)),
        Some(ClassificationRecord::new(true, false, true, false, false))
    );
}

#[test]
fn failing_sources_contribute_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let pipeline = UpdatePipeline::new(file_store(dir.path()))
        .with_source(UnreachableSource)
        .with_source(FixedSource(vec![remote_only(code(5440))]));

    let outcome = pipeline.run().expect("a failing source is not fatal");

    let summaries = &outcome.report.sources;
    assert_eq!(summaries.len(), 2);
    assert!(summaries[0].error.is_some());
    assert_eq!(summaries[0].postcodes, 0);
    assert_eq!(summaries[1].postcodes, 1);
    assert!(outcome.dataset.contains(code(5440)));
}

#[test]
fn save_failure_fails_the_run_and_is_logged() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log = UpdateLog::new(dir.path().join("update_logs.json"), 50);
    let pipeline = UpdatePipeline::new(ReadOnlyStore).with_update_log(log.clone());

    let result = pipeline.run();

    assert!(matches!(result, Err(UpdateError::Save(SaveError::Write { .. }))));
    let entries = log.entries();
    assert_eq!(entries.len(), 1);
    assert!(!entries[0].success);
    assert!(entries[0].message.contains("read-only"));
}

#[test]
fn existing_snapshot_is_backed_up_and_never_lowered() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = file_store(dir.path());
    let existing: Dataset = Postcode::range(code(2600), code(2611))
        .map(|postcode| (postcode, ClassificationRecord::new(false, false, false, true, false)))
        .collect();
    store.save(&existing).expect("seed snapshot");

    let pipeline = UpdatePipeline::new(file_store(dir.path()))
        .with_source(FixedSource(vec![remote_only(code(5440))]));
    let outcome = pipeline.run().expect("update succeeds");

    assert_eq!(outcome.report.loaded, 12);
    assert_eq!(outcome.report.seeded, 0);
    let backup = outcome.report.saved.backup.expect("prior snapshot backed up");
    let previous: Dataset =
        serde_json::from_str(&fs::read_to_string(backup).expect("read backup")).expect("parse");
    assert_eq!(previous, existing);
    assert!(outcome
        .dataset
        .classification(code(2605))
        .is_some_and(|record| record.bushfire));
}

#[test]
fn verify_migrates_legacy_snapshots_and_respects_dry_run() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("postcodes.json");
    fs::write(
        &path,
        r#"{
  "0810": { "regional": false, "remote": false },
  "4870": { "regional": true, "remote": false, "northern": true, "bushfire": false, "flood": true }
}"#,
    )
    .expect("write legacy snapshot");
    let pipeline = UpdatePipeline::new(file_store(dir.path()));

    let dry = pipeline.verify(true).expect("dry run");
    assert!(dry.report.changed);
    assert!(dry.report.saved.is_none());
    assert!(fs::read_to_string(&path).expect("read").contains("flood"));

    let applied = pipeline.verify(false).expect("verify");
    assert!(applied.report.saved.is_some());
    assert_eq!(applied.report.audit.counts.legacy_flood, 1);
    assert_eq!(applied.report.audit.counts.inconsistent_nt, 1);
    let written = fs::read_to_string(&path).expect("read");
    assert!(!written.contains("flood"));

    let again = pipeline.verify(false).expect("second verify");
    assert!(!again.report.changed);
    assert!(again.report.audit.is_clean());
    assert!(again.report.saved.is_none());
}

#[test]
fn verify_refuses_to_replace_an_unreadable_snapshot() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("postcodes.json");
    fs::write(&path, "{ \"0800\": { \"regional\": tru").expect("write corrupt snapshot");
    let pipeline = UpdatePipeline::new(file_store(dir.path()));

    let err = pipeline.verify(false).expect_err("corrupt snapshot is not verified");
    assert!(matches!(err, UpdateError::Load(LoadError::Corrupt { .. })));
    assert_eq!(
        fs::read_to_string(&path).expect("read"),
        "{ \"0800\": { \"regional\": tru"
    );
    assert!(!dir.path().join("backups").exists());
}

#[test]
fn verify_without_a_snapshot_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let pipeline = UpdatePipeline::new(file_store(dir.path()));

    let err = pipeline.verify(false).expect_err("missing snapshot is not verified");
    assert!(matches!(err, UpdateError::Load(LoadError::Missing(_))));
    assert!(!dir.path().join("postcodes.json").exists());
}

#[test]
fn save_of_a_loaded_snapshot_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = file_store(dir.path());
    let dataset: Dataset = [
        (code(800), StoredRecord::from(ClassificationRecord::new(true, true, true, false, false))),
        (
            code(2650),
            StoredRecord {
                regional: Some(true),
                ..StoredRecord::default()
            },
        ),
    ]
    .into_iter()
    .collect();
    store.save(&dataset).expect("save");

    let loaded = store.load().expect("load");
    store.save(&loaded).expect("save again");
    let reloaded = store.load().expect("reload");

    assert_eq!(reloaded, dataset);
    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(store.data_path()).expect("read")).expect("json");
    assert_eq!(raw["2650"], serde_json::json!({ "regional": true }));
}
