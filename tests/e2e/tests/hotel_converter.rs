//! E2E тесты для CLI инструмента `hotel-converter`.
//!
//! Проверяем полный запуск: CSV на входе, JSON, XML и файл отклонённых
//! строк на выходе.

use std::fs;

use assert_cmd::Command;
use e2e_tests::{find_output, fixture, fixtures_dir};
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

/// Создать команду для запуска hotel-converter.
///
/// `cargo_bin` deprecated из-за edge case с custom build directories,
/// но это единственный способ для кросс-крейтовых бинарников.
/// Бинарник должен быть собран заранее: `cargo build --workspace`.
#[expect(deprecated)]
fn hotel_converter() -> Command {
    Command::cargo_bin("hotel-converter")
        .expect("hotel-converter binary not found, run `cargo build --workspace` first")
}

/// Звёзды отелей из JSON-результата в порядке следования.
fn json_stars(json: &Value) -> Vec<u64> {
    json.as_array().unwrap().iter().map(|h| h["stars"].as_u64().unwrap()).collect()
}

// ============================================================================
// Основной сценарий
// ============================================================================

#[test]
fn test_mixed_file() {
    let dir = tempdir().unwrap();

    hotel_converter()
        .args([
            "--file",
            fixture("hotels.csv").to_str().unwrap(),
            "--results-dir",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Converted 3 hotel(s), rejected 2 row(s)"));

    let json: Value =
        serde_json::from_slice(&fs::read(find_output(dir.path(), ".json").unwrap()).unwrap())
            .unwrap();
    // Без сортировки порядок совпадает с входным
    assert_eq!(json_stars(&json), [5, 2, 4]);
    assert_eq!(json[1]["name"], "Hôtel du Lac");
    assert_eq!(json[0]["address"], "01, test street");

    let xml = fs::read_to_string(find_output(dir.path(), ".xml").unwrap()).unwrap();
    assert!(xml.starts_with("<?xml"));
    assert_eq!(xml.matches("<hotel>").count(), 3);
    assert!(xml.contains("<name>Grand Palace</name>"));

    let invalid = fs::read_to_string(find_output(dir.path(), "-invalid.csv").unwrap()).unwrap();
    let lines: Vec<&str> = invalid.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "name,address,stars,contact,phone,uri");
    assert!(lines[1].contains("schneider.fr/index/"));
    assert!(lines[2].contains("ftp://broken-link.fr"));
}

#[test]
fn test_output_names_follow_input_name() {
    let dir = tempdir().unwrap();

    hotel_converter()
        .args([
            "--file",
            fixture("hotels_valid.csv").to_str().unwrap(),
            "--results-dir",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .success();

    let json = find_output(dir.path(), "-hotels_valid.json").unwrap();
    let stem = json.file_stem().unwrap().to_str().unwrap();
    let (timestamp, _) = stem.split_once('-').unwrap();
    assert!(timestamp.parse::<i64>().is_ok());

    assert!(find_output(dir.path(), "-hotels_valid.xml").is_ok());
}

#[test]
fn test_no_invalid_file_for_valid_input() {
    let dir = tempdir().unwrap();

    hotel_converter()
        .args([
            "--file",
            fixture("hotels_valid.csv").to_str().unwrap(),
            "--results-dir",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Converted 2 hotel(s), rejected 0 row(s)"));

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
}

#[test]
fn test_files_dir_resolution() {
    let dir = tempdir().unwrap();

    hotel_converter()
        .args([
            "--file",
            "hotels_valid.csv",
            "--files-dir",
            fixtures_dir().to_str().unwrap(),
            "--results-dir",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .success();

    assert!(find_output(dir.path(), ".json").is_ok());
}

#[test]
fn test_results_dir_is_created() {
    let dir = tempdir().unwrap();
    let results = dir.path().join("share").join("results");

    hotel_converter()
        .args([
            "--file",
            fixture("hotels_valid.csv").to_str().unwrap(),
            "--results-dir",
            results.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert!(find_output(&results, ".xml").is_ok());
}

// ============================================================================
// Сортировка
// ============================================================================

#[test]
fn test_sort_ascend() {
    let dir = tempdir().unwrap();

    hotel_converter()
        .args([
            "--file",
            fixture("hotels.csv").to_str().unwrap(),
            "--sort",
            "ascend",
            "--results-dir",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .success();

    let json: Value =
        serde_json::from_slice(&fs::read(find_output(dir.path(), ".json").unwrap()).unwrap())
            .unwrap();
    assert_eq!(json_stars(&json), [2, 4, 5]);
}

#[test]
fn test_sort_descend_ignores_case() {
    let dir = tempdir().unwrap();

    hotel_converter()
        .args([
            "--file",
            fixture("hotels.csv").to_str().unwrap(),
            "--sort",
            "DESCEND",
            "--results-dir",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .success();

    let json: Value =
        serde_json::from_slice(&fs::read(find_output(dir.path(), ".json").unwrap()).unwrap())
            .unwrap();
    assert_eq!(json_stars(&json), [5, 4, 2]);

    // XML в том же порядке
    let xml = fs::read_to_string(find_output(dir.path(), ".xml").unwrap()).unwrap();
    let five = xml.find("<stars>5</stars>").unwrap();
    let four = xml.find("<stars>4</stars>").unwrap();
    let two = xml.find("<stars>2</stars>").unwrap();
    assert!(five < four && four < two);
}

// ============================================================================
// Тесты обработки ошибок
// ============================================================================

#[test]
fn test_invalid_sort_value() {
    let dir = tempdir().unwrap();

    hotel_converter()
        .args([
            "--file",
            fixture("hotels.csv").to_str().unwrap(),
            "--sort",
            "sideways",
            "--results-dir",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_missing_input_file() {
    let dir = tempdir().unwrap();

    hotel_converter()
        .args([
            "--file",
            "/nonexistent/path/to/hotels.csv",
            "--results-dir",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open input file"));
}

#[test]
fn test_missing_required_args() {
    hotel_converter()
        .args(["--sort", "ascend"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--file"));
}
