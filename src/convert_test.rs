/// Tests for the conversion pipelines
#[cfg(test)]
mod tests {
    use crate::config::ConversionConfig;
    use crate::convert::*;
    use crate::error::ConvertError;
    use crate::report::ArtifactKind;
    use crate::types::*;
    use std::fs;

    fn sample_products() -> Vec<Product> {
        let testcase = |name: &str, path: &str, result: i64| TestCase {
            name: name.to_string(),
            preconditions: String::new(),
            path: path.to_string(),
            priority: 2,
            result,
            writer: String::new(),
            executor: String::new(),
            steps: vec![Step { number: Some(1), actions: "open".to_string(), expected: Some("shown".to_string()) }],
        };
        vec![Product {
            name: "Shop".to_string(),
            suites: vec![Suite {
                name: "Front".to_string(),
                sub_suites: vec![SubSuite {
                    name: "Login".to_string(),
                    writer: Some("lee".to_string()),
                    testcases: vec![testcase("a", "UI/Login", 1), testcase("b", "UI/Login", 2), testcase("c", "UI", 0)],
                }],
            }],
        }]
    }

    #[test]
    fn test_testcase_json_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("cases.toml");

        let written = write_testcase_json(&source, &sample_products(), &ConversionConfig::default()).unwrap();

        assert_eq!(written, dir.path().join("cases.json"));
        let value: serde_json::Value = serde_json::from_slice(&fs::read(&written).unwrap()).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["second_module"], "UI");
        assert_eq!(records[0]["third_module"], "Login");
        assert_eq!(records[2]["third_module"], "-");
        assert_eq!(records[0]["writer"], "lee");
        assert_eq!(records[0]["step_text"], "1. open");
        assert_eq!(records[1]["result"], "NG");
    }

    #[test]
    fn test_testsuite_json_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("cases.toml");

        let written = write_testsuite_json(&source, &testsuite_list(&sample_products())).unwrap();

        assert_eq!(written, dir.path().join("cases_testsuite.json"));
        let value: serde_json::Value = serde_json::from_slice(&fs::read(&written).unwrap()).unwrap();
        assert_eq!(value[0]["name"], "Shop");
        assert_eq!(value[0]["statistics"]["case_num"], 3);
        assert_eq!(value[0]["statistics"]["pass"], 1);
        assert_eq!(value[0]["suites"][0]["sub_suites"][0]["statistics"]["failed"], 1);
    }

    #[test]
    fn test_spreadsheet_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("cases.toml");

        let written = write_testcase_xlsx(&source, &sample_products(), &ConversionConfig::default()).unwrap();

        assert_eq!(written, dir.path().join("cases.xlsx"));
        let bytes = fs::read(&written).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_grid_for_sample_products() {
        let grid = testcase_grid(&sample_products(), &ConversionConfig::default()).unwrap();

        assert_eq!(grid.row_count(), 4);
        assert_eq!(grid.header.len(), 14);
        // levels 1 and 2 are shared by all rows, level 3 only by the two "UI/Login" rows
        assert!(grid.merges.iter().any(|m| m.column == 1 && m.first_row == 1 && m.last_row == 3));
        assert!(grid.merges.iter().any(|m| m.column == 2 && m.first_row == 1 && m.last_row == 3));
        assert!(grid.merges.iter().any(|m| m.column == 3 && m.first_row == 1 && m.last_row == 2));
        assert_eq!(grid.validations.len(), 2);
    }

    #[test]
    fn test_existing_artifact_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("cases.toml");
        fs::write(dir.path().join("cases.json"), "stale").unwrap();
        fs::write(dir.path().join("cases.xlsx"), "stale").unwrap();

        let products = sample_products();
        let reports = testsuite_list(&products);
        let config = ConversionConfig::default();
        write_artifact(ArtifactKind::TestcaseJson, &source, &products, &reports, &config).unwrap();
        write_artifact(ArtifactKind::Spreadsheet, &source, &products, &reports, &config).unwrap();

        let json = fs::read_to_string(dir.path().join("cases.json")).unwrap();
        assert!(json.starts_with('['));
        assert!(fs::read(dir.path().join("cases.xlsx")).unwrap().starts_with(b"PK"));
    }

    #[test]
    fn test_empty_products_give_empty_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("empty.toml");

        let json = write_testcase_json(&source, &[], &ConversionConfig::default()).unwrap();
        assert_eq!(fs::read_to_string(json).unwrap(), "[]");

        let suites = write_testsuite_json(&source, &[]).unwrap();
        assert_eq!(fs::read_to_string(suites).unwrap(), "[]");

        let xlsx = write_testcase_xlsx(&source, &[], &ConversionConfig::default()).unwrap();
        assert!(xlsx.exists());
    }

    #[test]
    fn test_destinations_are_checked_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let all = [ArtifactKind::Spreadsheet, ArtifactKind::TestcaseJson, ArtifactKind::SuiteJson];

        let toml_source = dir.path().join("cases.toml");
        let planned = plan_destinations(&toml_source, &all).unwrap();
        assert_eq!(
            planned,
            vec![dir.path().join("cases.xlsx"), dir.path().join("cases.json"), dir.path().join("cases_testsuite.json")]
        );

        let json_source = dir.path().join("cases.json");
        let err = plan_destinations(&json_source, &all).unwrap_err();
        assert!(matches!(err, ConvertError::DestinationIsSource(_)));
        assert!(plan_destinations(&json_source, &[ArtifactKind::Spreadsheet, ArtifactKind::SuiteJson]).is_ok());
        assert!(!dir.path().join("cases.xlsx").exists());
    }

    #[test]
    fn test_suite_artifact_writes_given_reports() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("cases.toml");
        let mut reports = testsuite_list(&sample_products());
        reports[0].name = "Renamed".to_string();

        let written = write_testsuite_json(&source, &reports).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&fs::read(written).unwrap()).unwrap();
        assert_eq!(value[0]["name"], "Renamed");
    }

    #[test]
    fn test_json_source_is_never_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("cases.json");
        fs::write(&source, "{\"products\": []}").unwrap();

        let err = write_testcase_json(&source, &sample_products(), &ConversionConfig::default()).unwrap_err();

        assert!(matches!(err, ConvertError::DestinationIsSource(_)));
        assert_eq!(fs::read_to_string(&source).unwrap(), "{\"products\": []}");
    }
}
