use commodore::cluster::{render_target, GLOBAL_CLASS};
use commodore::error::ValidationError;
use commodore::inventory::Inventory;
use proptest::prelude::*;
use tempfile::TempDir;

fn setup_working_dir(inv: &Inventory, components: &[&str]) {
    inv.ensure_dirs().unwrap();
    for c in components {
        std::fs::write(inv.defaults_file(c), "").unwrap();
        std::fs::write(inv.component_file(c), "").unwrap();
    }
}

fn names(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn test_render_bootstrap_target() {
    let temp_dir = TempDir::new().unwrap();
    let inv = Inventory::new(temp_dir.path());
    setup_working_dir(&inv, &["foo", "bar"]);

    let target = render_target(&inv, "cluster", &names(&["foo", "bar", "baz"]), None).unwrap();

    assert_eq!(
        target.classes,
        ["params.cluster", "defaults.foo", "defaults.bar", "global.commodore"]
    );
    assert_eq!(target.parameters["_instance"], "cluster");
    assert_eq!(target.parameters["kapitan"]["vars"]["target"], "cluster");
}

#[test]
fn test_render_target() {
    let temp_dir = TempDir::new().unwrap();
    let inv = Inventory::new(temp_dir.path());
    setup_working_dir(&inv, &["foo", "bar"]);

    let target = render_target(&inv, "foo", &names(&["foo", "bar", "baz"]), None).unwrap();

    assert_eq!(
        target.classes,
        [
            "params.cluster",
            "defaults.foo",
            "defaults.bar",
            "global.commodore",
            "components.foo"
        ]
    );
    assert_eq!(target.parameters["kapitan"]["vars"]["target"], "foo");
    assert_eq!(target.parameters["_instance"], "foo");
    assert!(target.parameters.get("foo").is_none());
}

#[test]
fn test_render_aliased_target() {
    let temp_dir = TempDir::new().unwrap();
    let inv = Inventory::new(temp_dir.path());
    setup_working_dir(&inv, &["foo", "bar"]);

    let target =
        render_target(&inv, "fooer", &names(&["foo", "bar", "baz"]), Some("foo")).unwrap();

    assert_eq!(
        target.classes,
        [
            "params.cluster",
            "defaults.foo",
            "defaults.bar",
            "global.commodore",
            "components.foo"
        ]
    );
    assert_eq!(target.parameters["kapitan"]["vars"]["target"], "fooer");
    assert_eq!(target.parameters["foo"], "${fooer}");
    assert_eq!(target.parameters["_instance"], "fooer");
}

#[test]
fn test_render_aliased_target_with_dash() {
    let temp_dir = TempDir::new().unwrap();
    let inv = Inventory::new(temp_dir.path());
    setup_working_dir(&inv, &["foo-comp", "bar"]);

    let target = render_target(
        &inv,
        "foo-1",
        &names(&["foo-comp", "bar", "baz"]),
        Some("foo-comp"),
    )
    .unwrap();

    assert_eq!(
        target.classes,
        [
            "params.cluster",
            "defaults.foo-comp",
            "defaults.bar",
            "global.commodore",
            "components.foo-comp"
        ]
    );
    assert_eq!(target.parameters["kapitan"]["vars"]["target"], "foo-1");
    assert_eq!(target.parameters["foo_comp"], "${foo_1}");
    assert!(target.parameters.get("foo-comp").is_none());
    assert_eq!(target.parameters["_instance"], "foo-1");
}

#[test]
fn test_unknown_target_renders_without_component_class() {
    let temp_dir = TempDir::new().unwrap();
    let inv = Inventory::new(temp_dir.path());
    setup_working_dir(&inv, &["foo"]);

    let target = render_target(&inv, "other", &names(&["foo"]), None).unwrap();

    assert_eq!(target.classes.last().unwrap(), GLOBAL_CLASS);
}

#[test]
fn test_aliased_target_with_missing_class_fails() {
    let temp_dir = TempDir::new().unwrap();
    let inv = Inventory::new(temp_dir.path());
    setup_working_dir(&inv, &["bar"]);
    std::fs::write(inv.defaults_file("foo"), "").unwrap();

    let err = render_target(&inv, "fooer", &names(&["foo", "bar"]), Some("foo")).unwrap_err();
    assert!(matches!(err, ValidationError::MissingClassFile { .. }));
}

#[test]
fn test_target_serializes_to_yaml() {
    let temp_dir = TempDir::new().unwrap();
    let inv = Inventory::new(temp_dir.path());
    setup_working_dir(&inv, &["foo"]);

    let target = render_target(&inv, "fooer", &names(&["foo"]), Some("foo")).unwrap();
    let yaml = serde_yaml::to_string(&target).unwrap();

    assert!(yaml.starts_with("classes:\n- params.cluster\n- defaults.foo\n"));
    assert!(yaml.contains("${fooer}"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_class_list_order(
        entries in prop::collection::hash_map("[a-z][a-z0-9-]{0,8}", any::<bool>(), 1..8)
    ) {
        let temp_dir = TempDir::new().unwrap();
        let inv = Inventory::new(temp_dir.path());
        inv.ensure_dirs().unwrap();

        let mut known: Vec<String> = entries.keys().cloned().collect();
        let target_name = format!("{}-target", known[0]);
        let canonical = known[0].clone();
        let mut with_defaults = Vec::new();
        for (i, name) in known.iter().enumerate() {
            if i == 0 || entries[name] {
                std::fs::write(inv.defaults_file(name), "").unwrap();
                with_defaults.push(format!("defaults.{name}"));
            }
        }
        std::fs::write(inv.component_file(&canonical), "").unwrap();

        let target = render_target(&inv, &target_name, &known, Some(canonical.as_str())).unwrap();

        let mut expected = vec!["params.cluster".to_string()];
        expected.extend(with_defaults);
        expected.push(GLOBAL_CLASS.to_string());
        expected.push(format!("components.{canonical}"));
        prop_assert_eq!(&target.classes, &expected);
        prop_assert_eq!(&target.parameters["_instance"], &serde_json::json!(target_name.as_str()));

        known.reverse();
        let reversed = render_target(&inv, &target_name, &known, Some(canonical.as_str())).unwrap();
        let mut middle = expected[1..expected.len() - 2].to_vec();
        middle.reverse();
        prop_assert_eq!(&reversed.classes[1..reversed.classes.len() - 2], &middle[..]);
    }
}
