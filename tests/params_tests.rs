use commodore::cluster::{render_params, Cluster, ClusterInfo, TenantInfo};
use commodore::error::ValidationError;
use commodore::inventory::Inventory;
use serde_json::json;

fn cluster_info() -> ClusterInfo {
    serde_json::from_value(json!({
        "id": "mycluster",
        "displayName": "My Test Cluster",
        "tenant": "mytenant",
        "facts": {
            "distribution": "rancher",
            "cloud": "cloudscale",
        },
        "gitRepo": {
            "url": "ssh://git@git.example.com/cluster-catalogs/mycluster",
        },
    }))
    .unwrap()
}

fn tenant_info() -> TenantInfo {
    TenantInfo {
        id: "mytenant".to_string(),
        display_name: "My Test Tenant".to_string(),
    }
}

#[test]
fn test_render_params() {
    let inv = Inventory::new("/work");
    let target = inv.bootstrap_target();
    let info = cluster_info();
    let cluster = Cluster::new(info.clone(), tenant_info());

    let params = render_params(&inv, &cluster).unwrap();
    let p = &params["parameters"];

    assert_eq!(p["cluster"]["name"], "mycluster");
    assert_eq!(p[target]["name"], "mycluster");
    assert_eq!(p[target]["display_name"], "My Test Cluster");
    assert_eq!(
        p[target]["catalog_url"],
        "ssh://git@git.example.com/cluster-catalogs/mycluster"
    );
    assert_eq!(p[target]["tenant"], "mytenant");
    assert_eq!(p[target]["tenant_display_name"], "My Test Tenant");
    assert_eq!(p[target]["dist"], "rancher");
    assert_eq!(p["facts"], json!(info.facts));
    assert_eq!(p["cloud"]["provider"], "cloudscale");
    assert!(p["cloud"].get("region").is_none());
    assert_eq!(p["customer"]["name"], "mytenant");
}

#[test]
fn test_region_fact_is_copied() {
    let mut info = cluster_info();
    info.facts.insert("region".to_string(), "rma1".to_string());
    let cluster = Cluster::new(info, tenant_info());

    let params = render_params(&Inventory::new("/work"), &cluster).unwrap();

    assert_eq!(params["parameters"]["cloud"]["region"], "rma1");
    assert_eq!(params["parameters"]["facts"]["region"], "rma1");
}

#[test]
fn test_missing_facts() {
    let mut info = cluster_info();
    info.facts.remove("cloud");
    let cluster = Cluster::new(info, tenant_info());

    let err = render_params(&Inventory::new("/work"), &cluster).unwrap_err();
    assert!(matches!(err, ValidationError::MissingFact { fact } if fact == "cloud"));
}

#[test]
fn test_empty_facts() {
    let mut info = cluster_info();
    info.facts.insert("cloud".to_string(), String::new());
    let cluster = Cluster::new(info, tenant_info());

    let err = render_params(&Inventory::new("/work"), &cluster).unwrap_err();
    assert!(matches!(err, ValidationError::EmptyFact { fact } if fact == "cloud"));
}

#[test]
fn test_missing_distribution() {
    let mut info = cluster_info();
    info.facts.remove("distribution");
    let cluster = Cluster::new(info, tenant_info());

    let err = render_params(&Inventory::new("/work"), &cluster).unwrap_err();
    assert!(err.to_string().contains("distribution"));
}
