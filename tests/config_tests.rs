use commodore::config::Config;
use commodore::error::ValidationError;
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

fn config() -> Config {
    Config::new(std::env::temp_dir())
}

fn aliases(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(a, c)| (a.to_string(), c.to_string()))
        .collect()
}

fn params(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

#[test]
fn test_verify_component_aliases() {
    let mut config = config();
    config.register_component_aliases(aliases(&[("baz", "bar")]));
    let p = params(json!({"bar": {"multi_instance": true, "namespace": "syn-bar"}}));

    config.verify_component_aliases(&p).unwrap();
}

#[test]
fn test_verify_single_instance_alias_target() {
    let mut config = config();
    config.register_component_aliases(aliases(&[("baz", "bar")]));
    let p = params(json!({"bar": {"namespace": "syn-bar"}}));

    config.verify_component_aliases(&p).unwrap();
}

#[test]
fn test_verify_component_aliases_error() {
    let mut config = config();
    config.register_component_aliases(aliases(&[("baz", "bar")]));
    let p = params(json!({"bar": {"multi_instance": true}}));

    let err = config.verify_component_aliases(&p).unwrap_err();
    assert!(matches!(err, ValidationError::MissingNamespace { component } if component == "bar"));
}

#[test]
fn test_register_component_deprecations() {
    let cases: Vec<(Value, Vec<&str>)> = vec![
        (json!({"bar": {"namespace": "syn-bar"}, "foo": {}}), vec![]),
        (
            json!({
                "bar": {"namespace": "syn-bar", "_metadata": {"deprecated": false, "replaced_by": "irrelevant"}},
                "foo": {}
            }),
            vec![],
        ),
        (
            json!({"bar": {"namespace": "syn-bar", "_metadata": {"deprecated": true}}, "foo": {}}),
            vec!["Component bar is deprecated."],
        ),
        (
            json!({
                "bar": {"namespace": "syn-bar", "_metadata": {"deprecated": true, "replaced_by": "foo"}},
                "foo": {}
            }),
            vec!["Component bar is deprecated. Use component foo instead."],
        ),
        (
            json!({
                "bar": {"deprecated": true, "replaced_by": "foo", "deprecation_notice": "See https://x"},
                "foo": {}
            }),
            vec!["Component bar is deprecated. Use component foo instead. See https://x"],
        ),
        (
            json!({
                "bar": {"namespace": "syn-bar", "_metadata": {"deprecated": true}},
                "foo": {"namespace": "syn-foo", "_metadata": {"deprecated": true}}
            }),
            vec!["Component bar is deprecated.", "Component foo is deprecated."],
        ),
    ];

    for (p, mut expected) in cases {
        let mut config = config();
        config.register_component_aliases(aliases(&[("baz", "bar"), ("qux", "foo")]));

        config.register_component_deprecations(&params(p));

        let mut actual = config.deprecation_notices().to_vec();
        actual.sort();
        expected.sort();
        assert_eq!(actual, expected);
    }
}

fn setup_deprecation_notices(config: &mut Config) {
    config.register_deprecation_notice("test 1");
    config.register_deprecation_notice("test 2");
}

#[test]
fn test_register_deprecation_notices() {
    let mut config = config();
    setup_deprecation_notices(&mut config);

    assert_eq!(config.deprecation_notices(), ["test 1", "test 2"]);
}

#[test]
fn test_print_deprecation_notices_no_notices() {
    let config = config();
    let mut out = Vec::new();

    config.write_deprecation_notices(&mut out).unwrap();

    assert!(out.is_empty());
}

#[test]
fn test_print_deprecation_notices() {
    let mut config = config();
    setup_deprecation_notices(&mut config);
    let mut out = Vec::new();

    config.write_deprecation_notices(&mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\nCommodore notices:\n > test 1\n > test 2\n"
    );
}
