/// Tests for suite tree and flat record serialization
///
/// These tests pin the JSON shape of the input document and of the
/// flat testcase records written to the testcase JSON artifact.

#[cfg(test)]
mod tests {
    use crate::types::*;

    #[test]
    fn test_document_deserialization_with_defaults() {
        let json = r#"{
            "products": [{
                "name": "Shop",
                "suites": [{
                    "name": "Front",
                    "sub_suites": [{
                        "name": "Login",
                        "testcases": [{"name": "Log in", "steps": [{"actions": "open page"}]}]
                    }]
                }]
            }]
        }"#;

        let document: SuiteDocument = serde_json::from_str(json).unwrap();
        let sub_suite = &document.products[0].suites[0].sub_suites[0];
        let case = &sub_suite.testcases[0];

        assert_eq!(sub_suite.writer, None);
        assert_eq!(case.priority, 3, "priority defaults to B's rank");
        assert_eq!(case.result, 0);
        assert_eq!(case.path, "");
        assert_eq!(case.steps[0].number, None);
        assert_eq!(case.steps[0].expected, None);
    }

    #[test]
    fn test_missing_testcase_name_is_rejected() {
        let json = r#"{"products": [{"name": "Shop", "suites": [{"name": "S", "sub_suites": [
            {"name": "Sub", "testcases": [{"priority": 1}]}
        ]}]}]}"#;

        assert!(serde_json::from_str::<SuiteDocument>(json).is_err());
    }

    #[test]
    fn test_testcase_count_spans_all_sub_suites() {
        let json = r#"{"name": "Shop", "suites": [
            {"name": "A", "sub_suites": [
                {"name": "a1", "testcases": [{"name": "1"}, {"name": "2"}]},
                {"name": "a2", "testcases": []}
            ]},
            {"name": "B", "sub_suites": [{"name": "b1", "testcases": [{"name": "3"}]}]}
        ]}"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.testcase_count(), 3);
    }

    #[test]
    fn test_flat_testcase_serialization_keys() {
        let record = FlatTestcase {
            product: "Shop".to_string(),
            suite: "Front".to_string(),
            second_module: "UI(功能)".to_string(),
            third_module: "-".to_string(),
            title: "Log in".to_string(),
            precondition: String::new(),
            steps: vec![Step { number: Some(1), actions: "open".to_string(), expected: None }],
            step_text: "1. open".to_string(),
            expected_text: String::new(),
            priority: "A".to_string(),
            result: "PASS".to_string(),
            writer: "lee".to_string(),
            executor: String::new(),
        };

        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();
        let keys: Vec<&str> = object.keys().map(String::as_str).collect();

        for key in [
            "product",
            "suite",
            "second_module",
            "third_module",
            "title",
            "precondition",
            "steps",
            "step_text",
            "expected_text",
            "priority",
            "result",
            "writer",
            "executor",
        ] {
            assert!(keys.contains(&key), "missing key {}", key);
        }
        assert_eq!(object["steps"][0], serde_json::json!({"number": 1, "actions": "open"}));
        assert_eq!(object["second_module"], "UI(功能)");
    }
}
