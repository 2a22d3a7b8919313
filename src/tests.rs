/*!
 * Tests for bundlefs functionality
 */

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use indicatif::ProgressBar;
use tempfile::tempdir;

use crate::config::Config;
use crate::merger::Merger;
use crate::types::{RecordContent, SourceSet};
use crate::utils::{relative_to_cwd, reset_directory, run_timestamp};
use crate::writer::RecordWriter;

fn hidden_merger() -> Merger {
    Merger::new(Arc::new(ProgressBar::hidden()))
}

// Helper function to create a small script-asset directory
fn setup_source_directory() -> io::Result<tempfile::TempDir> {
    let temp_dir = tempdir()?;
    let src = temp_dir.path().join("js");
    fs::create_dir(&src)?;
    fs::write(src.join("a.js"), "1")?;
    fs::write(src.join("b.js"), "2")?;
    Ok(temp_dir)
}

#[test]
fn test_reset_directory_clears_existing_tree() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let scratch = temp_dir.path().join("tmp");

    fs::create_dir_all(scratch.join("nested"))?;
    fs::write(scratch.join("stale.txt"), "old output")?;
    fs::write(scratch.join("nested").join("deeper.txt"), "more")?;

    reset_directory(&scratch).unwrap();

    assert!(scratch.is_dir());
    assert_eq!(fs::read_dir(&scratch)?.count(), 0);

    Ok(())
}

#[test]
fn test_reset_directory_replaces_regular_file() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let scratch = temp_dir.path().join("tmp");

    fs::write(&scratch, "a file sits where the directory should be")?;

    reset_directory(&scratch).unwrap();

    assert!(scratch.is_dir());
    assert_eq!(fs::read_dir(&scratch)?.count(), 0);

    Ok(())
}

#[test]
fn test_reset_directory_is_idempotent() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let scratch = temp_dir.path().join("deep").join("tmp");

    reset_directory(&scratch).unwrap();
    reset_directory(&scratch).unwrap();

    assert!(scratch.is_dir());
    assert_eq!(fs::read_dir(&scratch)?.count(), 0);

    Ok(())
}

#[test]
fn test_run_timestamp_is_ten_digits() {
    let timestamp = run_timestamp();

    assert_eq!(timestamp.len(), 10);
    assert!(timestamp.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn test_relative_to_cwd_passes_relative_paths_through() {
    let path = PathBuf::from("./js/a.js");
    assert_eq!(relative_to_cwd(&path), path);
}

#[test]
fn test_relative_to_cwd_strips_working_directory_prefix() -> io::Result<()> {
    let cwd = std::env::current_dir()?;
    let abs = cwd.join("some_file.txt");

    assert_eq!(relative_to_cwd(&abs), PathBuf::from("some_file.txt"));

    Ok(())
}

#[test]
fn test_merge_directory_writes_one_record_per_file() -> io::Result<()> {
    let temp_dir = setup_source_directory()?;
    let src = temp_dir.path().join("js");
    let output = temp_dir.path().join("out.txt");

    let summary = hidden_merger().merge_directory("js", &src, &output).unwrap();

    assert_eq!(summary.files_processed, 2);
    assert_eq!(summary.output_file.as_deref(), Some(output.as_path()));

    let content = fs::read_to_string(&output)?;
    let expected = format!(
        "{}\n---\n1\n---\n\n{}\n---\n2\n---\n\n",
        src.join("a.js").display(),
        src.join("b.js").display()
    );
    assert_eq!(content, expected);

    Ok(())
}

#[test]
fn test_merge_directory_round_trips_content() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let src = temp_dir.path().join("data");
    fs::create_dir(&src)?;

    let content = "first line\nsecond line with ünïcödé\n\ttabbed\n";
    fs::write(src.join("notes.txt"), content)?;

    let output = temp_dir.path().join("out.txt");
    hidden_merger().merge_directory("data", &src, &output).unwrap();

    let bundled = fs::read_to_string(&output)?;
    let expected = format!(
        "{}\n---\n{}\n---\n\n",
        src.join("notes.txt").display(),
        content
    );
    assert_eq!(bundled, expected);

    Ok(())
}

#[test]
fn test_merge_directory_missing_source_creates_no_output() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let src = temp_dir.path().join("nope");
    let output = temp_dir.path().join("out.txt");

    let summary = hidden_merger().merge_directory("nope", &src, &output).unwrap();

    assert!(summary.output_file.is_none());
    assert_eq!(summary.files_processed, 0);
    assert!(!output.exists());

    Ok(())
}

#[test]
fn test_merge_directory_orders_entries_lexicographically() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let src = temp_dir.path().join("src");
    fs::create_dir(&src)?;

    // Created out of order on purpose
    fs::write(src.join("c.txt"), "c")?;
    fs::write(src.join("a.txt"), "a")?;
    fs::write(src.join("b.txt"), "b")?;
    fs::create_dir(src.join("m"))?;
    fs::write(src.join("m").join("z.txt"), "z")?;

    let output = temp_dir.path().join("out.txt");
    let summary = hidden_merger().merge_directory("src", &src, &output).unwrap();

    assert_eq!(summary.files_processed, 4);

    let content = fs::read_to_string(&output)?;
    let pos = |name: &str| {
        content
            .find(&src.join(name).display().to_string())
            .unwrap_or_else(|| panic!("missing record for {}", name))
    };

    assert!(pos("a.txt") < pos("b.txt"));
    assert!(pos("b.txt") < pos("c.txt"));
    assert!(content.contains(&src.join("m").join("z.txt").display().to_string()));

    Ok(())
}

#[test]
fn test_merge_directory_annotates_invalid_utf8_and_continues() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let src = temp_dir.path().join("mixed");
    fs::create_dir(&src)?;

    // 0xff can never appear in well-formed UTF-8
    fs::write(src.join("bad.dat"), [0xffu8, 0xfe, 0x00, 0x01])?;
    fs::write(src.join("good.txt"), "still here")?;

    let output = temp_dir.path().join("out.txt");
    let summary = hidden_merger().merge_directory("mixed", &src, &output).unwrap();

    assert_eq!(summary.files_processed, 2);

    let content = fs::read_to_string(&output)?;
    let annotation = format!(
        "--- Error: file '{}' cannot be decoded as UTF-8 (maybe a binary file) ---",
        src.join("bad.dat").display()
    );
    assert!(content.contains(&annotation));
    assert!(content.contains("still here"));

    Ok(())
}

#[test]
fn test_merge_directory_skips_its_own_output() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let src = temp_dir.path().join("src");
    fs::create_dir(&src)?;
    fs::write(src.join("one.txt"), "only record")?;

    // Output sits inside the tree being merged
    let output = src.join("bundle.txt");
    let summary = hidden_merger().merge_directory("src", &src, &output).unwrap();

    assert_eq!(summary.files_processed, 1);

    let content = fs::read_to_string(&output)?;
    assert!(content.contains("only record"));
    assert!(!content.contains("bundle.txt"));

    Ok(())
}

#[test]
fn test_merge_file_list_keeps_caller_order_and_skips_missing() -> io::Result<()> {
    let temp_dir = tempdir()?;
    fs::write(temp_dir.path().join("second.txt"), "2nd")?;
    fs::write(temp_dir.path().join("first.txt"), "1st")?;

    let paths = vec![
        temp_dir.path().join("second.txt"),
        temp_dir.path().join("missing.txt"),
        temp_dir.path().join("first.txt"),
    ];
    let output = temp_dir.path().join("out.txt");

    let summary = hidden_merger()
        .merge_file_list("root_files", &paths, &output)
        .unwrap();

    assert_eq!(summary.files_processed, 2);
    assert_eq!(summary.files_skipped, 1);

    let content = fs::read_to_string(&output)?;
    let second_pos = content.find("2nd").unwrap();
    let first_pos = content.find("1st").unwrap();
    assert!(second_pos < first_pos, "list order must be preserved");
    assert!(!content.contains("missing.txt"));

    Ok(())
}

#[test]
fn test_merge_file_list_creates_output_directory() -> io::Result<()> {
    let temp_dir = tempdir()?;
    fs::write(temp_dir.path().join("config.php"), "<?php ?>")?;

    let paths = vec![temp_dir.path().join("config.php")];
    let output = temp_dir.path().join("tmp").join("deep").join("out.txt");

    let summary = hidden_merger()
        .merge_file_list("root_files", &paths, &output)
        .unwrap();

    assert_eq!(summary.files_processed, 1);
    assert!(output.exists());

    Ok(())
}

#[test]
fn test_merge_file_list_with_only_missing_paths_writes_empty_bundle() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let paths = vec![temp_dir.path().join("missing.txt")];
    let output = temp_dir.path().join("out.txt");

    let summary = hidden_merger()
        .merge_file_list("root_files", &paths, &output)
        .unwrap();

    assert_eq!(summary.files_processed, 0);
    assert_eq!(summary.files_skipped, 1);
    assert!(output.exists());
    assert_eq!(fs::read_to_string(&output)?, "");

    Ok(())
}

#[test]
fn test_record_writer_accounting_matches_disk() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let output = temp_dir.path().join("out.txt");

    let mut writer = RecordWriter::create(&output).unwrap();
    writer
        .write_record(
            &PathBuf::from("./js/a.js"),
            &RecordContent::Text("1".to_string()),
        )
        .unwrap();
    writer
        .write_record(
            &PathBuf::from("./js/locked.js"),
            &RecordContent::Unreadable("permission denied".to_string()),
        )
        .unwrap();

    let (records, bytes) = writer.finish().unwrap();

    assert_eq!(records, 2);
    assert_eq!(bytes, fs::metadata(&output)?.len());

    let content = fs::read_to_string(&output)?;
    assert!(content.starts_with("./js/a.js\n---\n1\n---\n\n"));
    assert!(content.contains("--- Error: cannot read file './js/locked.js': permission denied ---"));

    Ok(())
}

#[test]
fn test_standard_config_shape() {
    let config = Config::standard();

    assert_eq!(config.scratch_dir, PathBuf::from("./tmp"));
    assert_eq!(config.sources.len(), 6);

    let labels: Vec<&str> = config.sources.iter().map(|s| s.label()).collect();
    assert_eq!(labels, ["js", "css", "data", "doc", "tests", "root_files"]);

    match &config.sources[5] {
        SourceSet::FileList { paths, .. } => assert_eq!(paths.len(), 9),
        other => panic!("expected file list, got {:?}", other),
    }
}
