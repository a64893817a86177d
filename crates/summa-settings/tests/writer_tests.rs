//! Integration tests for settings-file generation.

use std::fs;

use summa_common::{DecisionSet, RunDescriptor, RunLabel, RunPeriod, SiteId, SummaError};
use summa_settings::{write_run_settings, ContainerPaths, SettingsLayout};

fn cdp_test_run() -> RunDescriptor {
    RunDescriptor::new(
        SiteId::new("CDP").unwrap(),
        RunLabel::new("test").unwrap(),
        RunPeriod::from_date_strs("2005-10-01", "2006-09-30").unwrap(),
    )
}

fn container_paths() -> ContainerPaths {
    ContainerPaths::new(
        "/summaTestCases/settings/",
        "/summaTestCases/input/",
        "/summaTestCases/output/",
    )
}

// ============================================================================
// Happy path
// ============================================================================

#[test]
fn test_writes_both_settings_files() {
    let dir = tempfile::tempdir().unwrap();
    let layout = SettingsLayout::new(dir.path());
    let decisions = DecisionSet::from_pairs([("astability", "louisinv")]).unwrap();

    let files =
        write_run_settings(&layout, &cdp_test_run(), &decisions, &container_paths()).unwrap();

    assert_eq!(
        files.decisions_file,
        dir.path().join("summa_zDecisions_test.txt")
    );
    assert_eq!(
        files.file_manager,
        dir.path().join("summa_fileManager_test.txt")
    );
    assert!(files.decisions_file.is_file());
    assert!(files.file_manager.is_file());
}

#[test]
fn test_decisions_file_encodes_option_and_dates() {
    let dir = tempfile::tempdir().unwrap();
    let layout = SettingsLayout::new(dir.path());
    let decisions = DecisionSet::from_pairs([("astability", "louisinv")]).unwrap();

    let files =
        write_run_settings(&layout, &cdp_test_run(), &decisions, &container_paths()).unwrap();
    let text = fs::read_to_string(&files.decisions_file).unwrap();

    let astability = text
        .lines()
        .find(|l| l.starts_with("astability"))
        .expect("astability line");
    assert!(astability.contains("louisinv"));
    assert!(text.contains("'2005-10-01 00:00'"));
    assert!(text.contains("'2006-09-30 23:00'"));
}

#[test]
fn test_file_manager_references_decisions_file() {
    let dir = tempfile::tempdir().unwrap();
    let layout = SettingsLayout::new(dir.path());

    let files = write_run_settings(
        &layout,
        &cdp_test_run(),
        &DecisionSet::new(),
        &container_paths(),
    )
    .unwrap();
    let text = fs::read_to_string(&files.file_manager).unwrap();

    assert!(text.contains("summa_zDecisions_test.txt"));
    assert!(text.contains("CDP_test"));
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn test_rerun_produces_byte_identical_files() {
    let dir = tempfile::tempdir().unwrap();
    let layout = SettingsLayout::new(dir.path());
    let decisions =
        DecisionSet::from_pairs([("astability", "louisinv"), ("alb_method", "varDecay")]).unwrap();

    let first =
        write_run_settings(&layout, &cdp_test_run(), &decisions, &container_paths()).unwrap();
    let decisions_a = fs::read(&first.decisions_file).unwrap();
    let manager_a = fs::read(&first.file_manager).unwrap();

    let second =
        write_run_settings(&layout, &cdp_test_run(), &decisions, &container_paths()).unwrap();
    let decisions_b = fs::read(&second.decisions_file).unwrap();
    let manager_b = fs::read(&second.file_manager).unwrap();

    assert_eq!(decisions_a, decisions_b);
    assert_eq!(manager_a, manager_b);
}

// ============================================================================
// Failure conditions
// ============================================================================

#[test]
fn test_missing_settings_dir_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");
    let layout = SettingsLayout::new(&missing);

    let err = write_run_settings(
        &layout,
        &cdp_test_run(),
        &DecisionSet::new(),
        &container_paths(),
    )
    .unwrap_err();

    assert!(matches!(err, SummaError::MissingSettingsDir(_)));
    assert!(!missing.exists());
}

#[test]
fn test_reversed_period_is_rejected_before_any_write() {
    // The descriptor cannot be built with start > end, so the writer is
    // never reached with a bad period.
    let err = RunPeriod::from_date_strs("2006-09-30", "2005-10-01").unwrap_err();
    assert!(matches!(err, SummaError::InvalidPeriod { .. }));
}

#[test]
fn test_no_temp_files_left_behind() {
    let dir = tempfile::tempdir().unwrap();
    let layout = SettingsLayout::new(dir.path());

    write_run_settings(
        &layout,
        &cdp_test_run(),
        &DecisionSet::new(),
        &container_paths(),
    )
    .unwrap();

    let leftovers: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .filter(|name| name.ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "temp files left: {:?}", leftovers);
}

// ============================================================================
// Empty decision set
// ============================================================================

#[test]
fn test_empty_decisions_still_produces_well_formed_file() {
    let dir = tempfile::tempdir().unwrap();
    let layout = SettingsLayout::new(dir.path());

    let files = write_run_settings(
        &layout,
        &cdp_test_run(),
        &DecisionSet::new(),
        &container_paths(),
    )
    .unwrap();
    let text = fs::read_to_string(&files.decisions_file).unwrap();

    assert!(text.contains("simulStart"));
    assert!(text.contains("simulFinsh"));
    assert!(text.contains("CDP"));
    let non_comment_lines: Vec<_> = text.lines().filter(|l| !l.starts_with('!')).collect();
    assert_eq!(non_comment_lines.len(), 2);
}
