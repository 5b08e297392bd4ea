//! Tests for the flat-parameter codec

use super::*;
use pretty_assertions::assert_eq;
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use test_case::test_case;

fn params(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

// ============================================================================
// extract_param_list Tests
// ============================================================================

#[test]
fn test_extract_param_list() {
    let input = params(&[
        ("MetricData.member.1.MetricName", "buffers"),
        ("MetricData.member.1.Unit", "Bytes"),
        ("MetricData.member.1.Value", "1"),
        ("MetricData.member.2.MetricName", "cpu"),
        ("MetricData.member.2.Unit", "Percent"),
        ("MetricData.member.2.Value", "2"),
    ]);

    let members = extract_param_list(&input, "MetricData");

    assert_eq!(members.len(), 2);
    assert_eq!(members[0]["MetricName"], "buffers");
    assert_eq!(members[0]["Unit"], "Bytes");
    assert_eq!(members[0]["Value"], "1");
    assert_eq!(members[1]["MetricName"], "cpu");
    assert_eq!(members[1]["Unit"], "Percent");
    assert_eq!(members[1]["Value"], "2");
}

#[test]
fn test_extract_param_list_ascending_order() {
    // HashMap iteration order is arbitrary; output order must come from
    // the numeric index alone
    let input = params(&[
        ("P.member.30.Name", "third"),
        ("P.member.2.Name", "first"),
        ("P.member.10.Name", "second"),
    ]);

    let members = extract_param_list(&input, "P");

    let names: Vec<&Value> = members.iter().map(|m| &m["Name"]).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[test]
fn test_extract_param_list_sparse_indices() {
    let input = params(&[
        ("P.member.1.Name", "one"),
        ("P.member.7.Name", "seven"),
    ]);

    let members = extract_param_list(&input, "P");
    assert_eq!(members.len(), 2);
    assert_eq!(members[0]["Name"], "one");
    assert_eq!(members[1]["Name"], "seven");
}

#[test]
fn test_extract_param_list_no_matches() {
    let input = params(&[("Unrelated", "x"), ("Other.member.1.Name", "y")]);
    assert!(extract_param_list(&input, "P").is_empty());
    assert!(extract_param_list(&HashMap::new(), "P").is_empty());
}

#[test]
fn test_extract_param_list_skips_malformed_index() {
    let input = params(&[
        ("P.member.x.Field", "dropped"),
        ("P.member.1.Field", "kept"),
    ]);

    let members = extract_param_list(&input, "P");
    assert_eq!(members.len(), 1);
    assert_eq!(members[0]["Field"], "kept");
}

#[test_case("P.member.1"; "missing field segment")]
#[test_case("P.member.1."; "empty field segment")]
#[test_case("P.member..Field"; "empty index segment")]
#[test_case("P.1.Field"; "missing member literal")]
#[test_case("PX.member.1.Field"; "prefix not followed by dot")]
fn test_extract_param_list_ignores_non_matching(key: &str) {
    let input = params(&[(key, "v")]);
    assert!(extract_param_list(&input, "P").is_empty());
}

#[test]
fn test_extract_param_list_dotted_field_names() {
    let input = params(&[("P.member.1.Dimensions.Name", "az")]);

    let members = extract_param_list(&input, "P");
    assert_eq!(members[0]["Dimensions.Name"], "az");
}

#[test]
fn test_extract_param_list_values_verbatim() {
    // Values pass through unchanged, no trimming or type coercion
    let input = params(&[("P.member.1.Value", " 42 ")]);

    let members = extract_param_list(&input, "P");
    assert_eq!(members[0]["Value"], " 42 ");
}

#[test]
fn test_extract_param_list_round_trip() {
    // Encode a known structure, decode it, compare triples
    let records = [
        (2_u64, vec![("Name", "a"), ("Value", "1")]),
        (5_u64, vec![("Name", "b"), ("Value", "2")]),
        (9_u64, vec![("Name", "c"), ("Value", "3")]),
    ];

    let mut input = HashMap::new();
    for (index, fields) in &records {
        for (field, value) in fields {
            input.insert(format!("R.member.{index}.{field}"), (*value).to_string());
        }
    }

    let members = extract_param_list(&input, "R");

    assert_eq!(members.len(), records.len());
    for (member, (_, fields)) in members.iter().zip(&records) {
        assert_eq!(member.len(), fields.len());
        for (field, value) in fields {
            assert_eq!(member[*field], *value);
        }
    }
}

// ============================================================================
// extract_param_pairs Tests
// ============================================================================

#[test]
fn test_extract_param_pairs() {
    let input = params(&[
        ("P.member.1.Name", "Foo"),
        ("P.member.1.Value", "Bar"),
    ]);

    let pairs = extract_param_pairs(&input, "P", "Name", "Value");

    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs["Foo"], "Bar");
}

#[test]
fn test_extract_param_pairs_multiple_indices() {
    let input = params(&[
        ("Parameters.member.1.ParameterKey", "KeyName"),
        ("Parameters.member.1.ParameterValue", "mykey"),
        ("Parameters.member.2.ParameterKey", "InstanceType"),
        ("Parameters.member.2.ParameterValue", "m1.large"),
    ]);

    let pairs = extract_param_pairs(&input, "Parameters", "ParameterKey", "ParameterValue");

    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs["KeyName"], "mykey");
    assert_eq!(pairs["InstanceType"], "m1.large");
}

#[test]
fn test_extract_param_pairs_skips_missing_value() {
    // Index 2 has a key entry but no value entry; the pair is dropped and
    // the rest of the decode survives
    let input = params(&[
        ("P.member.1.Name", "Foo"),
        ("P.member.1.Value", "Bar"),
        ("P.member.2.Name", "Orphan"),
    ]);

    let pairs = extract_param_pairs(&input, "P", "Name", "Value");

    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs["Foo"], "Bar");
    assert!(!pairs.contains_key("Orphan"));
}

#[test]
fn test_extract_param_pairs_noncanonical_index() {
    // A zero-padded index is still a valid integer; the sibling value key
    // must be found under the index segment as written, not its canonical
    // spelling
    let input = params(&[
        ("P.member.01.Name", "Foo"),
        ("P.member.01.Value", "Bar"),
    ]);

    let pairs = extract_param_pairs(&input, "P", "Name", "Value");

    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs["Foo"], "Bar");
}

#[test]
fn test_extract_param_pairs_exact_field_match() {
    // "NameSuffix" must not match key field "Name"
    let input = params(&[
        ("P.member.1.NameSuffix", "Foo"),
        ("P.member.1.Value", "Bar"),
    ]);

    let pairs = extract_param_pairs(&input, "P", "Name", "Value");
    assert!(pairs.is_empty());
}

#[test]
fn test_extract_param_pairs_malformed_index() {
    let input = params(&[
        ("P.member.x.Name", "Foo"),
        ("P.member.x.Value", "Bar"),
    ]);

    let pairs = extract_param_pairs(&input, "P", "Name", "Value");
    assert!(pairs.is_empty());
}

#[test]
fn test_extract_param_pairs_empty_input() {
    let pairs = extract_param_pairs(&HashMap::new(), "P", "Name", "Value");
    assert!(pairs.is_empty());
}

// ============================================================================
// remap_keys Tests
// ============================================================================

#[test]
fn test_remap_keys() {
    let table = HashMap::from([("a".to_string(), "x".to_string())]);
    let mut input = Map::new();
    input.insert("a".to_string(), json!(1));
    input.insert("b".to_string(), json!(2));

    let result = remap_keys(&table, &input).unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result["x"], 1);
    assert!(!result.contains_key("a"));
    assert!(!result.contains_key("b"));
}

#[test]
fn test_remap_keys_missing_source_is_fatal() {
    let table = HashMap::from([("a".to_string(), "x".to_string())]);
    let mut input = Map::new();
    input.insert("b".to_string(), json!(2));

    let err = remap_keys(&table, &input).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Rename source key 'a' not present in input"
    );
}

#[test]
fn test_remap_keys_empty_table() {
    let mut input = Map::new();
    input.insert("a".to_string(), json!(1));

    let result = remap_keys(&HashMap::new(), &input).unwrap();
    assert!(result.is_empty());
}

// ============================================================================
// format_response Tests
// ============================================================================

#[test]
fn test_format_response() {
    let response = format_response("ListThings", json!([1, 2, 3]));

    assert_eq!(
        response,
        json!({"ListThingsResponse": {"ListThingsResult": [1, 2, 3]}})
    );
}

#[test]
fn test_format_response_object_payload() {
    let response = format_response("DescribeStacks", json!({"Stacks": []}));

    assert_eq!(
        response,
        json!({"DescribeStacksResponse": {"DescribeStacksResult": {"Stacks": []}}})
    );
}

#[test]
fn test_format_response_null_payload() {
    let response = format_response("DeleteStack", Value::Null);

    assert_eq!(
        response,
        json!({"DeleteStackResponse": {"DeleteStackResult": null}})
    );
}
