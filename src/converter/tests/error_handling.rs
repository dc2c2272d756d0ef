//! Fatal error paths: nothing may be written when a run fails

use super::{
    HONBU_HEADER, KEISATSUSHO_HEADER, KOBAN_HEADER, SHELTER_HEADER, honbu_row, keisatsusho_row,
    koban_row, police_sources, write_csv,
};
use crate::converter::{PoliceConverter, ShelterConverter};
use crate::error::ConvertError;
use crate::models::PoliceTier;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_shelter_input() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("nonexistent.csv");
    let output = temp_dir.path().join("Datas").join("shelters.json");

    let result = ShelterConverter::new(&input, &output).run();

    match result.unwrap_err() {
        ConvertError::MissingInput { path } => assert_eq!(path, input),
        other => panic!("Expected MissingInput error, got {:?}", other),
    }
    assert!(!output.exists());
    assert!(!output.parent().unwrap().exists());
}

#[test]
fn test_malformed_shelter_latitude_aborts() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_csv(
        temp_dir.path(),
        "shelters.csv",
        SHELTER_HEADER,
        &[
            "011011,北海道札幌市中央区,1,大通公園,住所,0,0,0,1,0,0,0,0,0,43.0,141.0,",
            "011011,北海道札幌市中央区,2,中島公園,住所,0,0,0,1,0,0,0,0,0,北緯43度,141.0,",
        ],
    );
    let output = temp_dir.path().join("shelters.json");

    match ShelterConverter::new(&input, &output).run().unwrap_err() {
        ConvertError::InvalidValue { row, column, value, .. } => {
            assert_eq!(row, 2);
            assert_eq!(column, "緯度");
            assert_eq!(value, "北緯43度");
        }
        other => panic!("Expected InvalidValue error, got {:?}", other),
    }
    assert!(!output.exists());
}

#[test]
fn test_shelter_missing_required_column() {
    let temp_dir = TempDir::new().unwrap();
    let header = SHELTER_HEADER.replace("経度", "lng");
    let input = write_csv(
        temp_dir.path(),
        "shelters.csv",
        &header,
        &["011011,北海道札幌市中央区,1,大通公園,住所,0,0,0,1,0,0,0,0,0,43.0,141.0,"],
    );
    let output = temp_dir.path().join("shelters.json");

    match ShelterConverter::new(&input, &output).run().unwrap_err() {
        ConvertError::MissingColumn { column, .. } => assert_eq!(column, "経度"),
        other => panic!("Expected MissingColumn error, got {:?}", other),
    }
}

#[test]
fn test_shelter_row_wider_than_header_aborts() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_csv(
        temp_dir.path(),
        "shelters.csv",
        SHELTER_HEADER,
        &[
            "011011,北海道札幌市中央区,1,大通公園,北海道札幌市中央区大通西7丁目,0,0,0,1,0,0,0,0,0,43.0597,141.3468,",
            "011011,北海道札幌市中央区,2,大通公園,北海道札幌市中央区大通西1,2丁目,0,0,0,1,0,0,0,0,0,43.0597,141.3468,",
        ],
    );
    let output = temp_dir.path().join("shelters.json");

    match ShelterConverter::new(&input, &output).run().unwrap_err() {
        ConvertError::InvalidFormat {
            path,
            row,
            expected,
            found,
        } => {
            assert_eq!(path, input);
            assert_eq!(row, 2);
            assert_eq!(expected, 17);
            assert_eq!(found, 18);
        }
        other => panic!("Expected InvalidFormat error, got {:?}", other),
    }
    assert!(!output.exists());
}

#[test]
fn test_koban_row_wider_than_header_aborts() {
    let temp_dir = TempDir::new().unwrap();
    write_csv(
        temp_dir.path(),
        "koban.csv",
        KOBAN_HEADER,
        &[
            koban_row("丸の内交番", "丸の内警察署"),
            koban_row("有楽町交番", "丸の内警察署").replacen("丸の内2-1,", "丸の内2,1,", 1),
        ],
    );
    let output = temp_dir.path().join("polices.json");

    let err = PoliceConverter::new(police_sources(&temp_dir), &output)
        .run()
        .unwrap_err();

    match err {
        ConvertError::Tier { tier, source } => {
            assert_eq!(tier, PoliceTier::Koban);
            assert!(matches!(
                *source,
                ConvertError::InvalidFormat {
                    row: 2,
                    expected: 13,
                    found: 14,
                    ..
                }
            ));
        }
        other => panic!("Expected Tier error, got {:?}", other),
    }
    assert!(!output.exists());
}

#[test]
fn test_malformed_police_coordinate_aborts_without_output() {
    let temp_dir = TempDir::new().unwrap();
    write_csv(
        temp_dir.path(),
        "honbu.csv",
        HONBU_HEADER,
        &[&honbu_row("警視庁", "139.7528", "35.6764", "1")],
    );
    write_csv(
        temp_dir.path(),
        "keisatsusho.csv",
        KEISATSUSHO_HEADER,
        &[
            keisatsusho_row("丸の内警察署", "警視庁"),
            keisatsusho_row("神田警察署", "警視庁").replace("139.7671", "東経139度"),
        ],
    );
    let output = temp_dir.path().join("polices.json");

    let err = PoliceConverter::new(police_sources(&temp_dir), &output)
        .run()
        .unwrap_err();

    match &err {
        ConvertError::Tier { tier, source } => {
            assert_eq!(*tier, PoliceTier::Keisatsusho);
            match source.as_ref() {
                ConvertError::InvalidValue { row, column, .. } => {
                    assert_eq!(*row, 2);
                    assert_eq!(column, "Longitude");
                }
                other => panic!("Expected InvalidValue source, got {:?}", other),
            }
        }
        other => panic!("Expected Tier error, got {:?}", other),
    }
    assert!(err.to_string().starts_with("Error creating police object for keisatsusho"));
    assert!(!output.exists());
}

#[test]
fn test_failed_police_run_keeps_previous_output() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("polices.json");
    let previous = "{\n  \"polices\": []\n}";
    fs::write(&output, previous).unwrap();

    write_csv(
        temp_dir.path(),
        "honbu.csv",
        HONBU_HEADER,
        &[&honbu_row("警視庁", "139.7528", "35.6764", "maybe")],
    );

    let err = PoliceConverter::new(police_sources(&temp_dir), &output)
        .run()
        .unwrap_err();

    assert!(matches!(
        err,
        ConvertError::Tier {
            tier: PoliceTier::Honbu,
            ..
        }
    ));
    assert_eq!(fs::read_to_string(&output).unwrap(), previous);
}

#[test]
fn test_police_missing_parent_name_column() {
    let temp_dir = TempDir::new().unwrap();
    let header = KEISATSUSHO_HEADER.replace("警察本部名称,", "");
    write_csv(
        temp_dir.path(),
        "keisatsusho.csv",
        &header,
        &["丸の内警察署,マルノウチ,東京都,03-3213-0110,100-0005,千代田区,131016,東京都千代田区丸の内1-9-2,丸の内1-9-2,,139.7671,35.6812,1"],
    );
    let output = temp_dir.path().join("polices.json");

    let err = PoliceConverter::new(police_sources(&temp_dir), &output)
        .run()
        .unwrap_err();

    match err {
        ConvertError::Tier { tier, source } => {
            assert_eq!(tier, PoliceTier::Keisatsusho);
            assert!(matches!(
                *source,
                ConvertError::MissingColumn { ref column, .. } if column == "警察本部名称"
            ));
        }
        other => panic!("Expected Tier error, got {:?}", other),
    }
    assert!(!output.exists());
}
