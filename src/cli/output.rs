use crate::cluster::RenderedInventory;
use crate::component::CompiledComponent;
use crate::inventory::Inventory;

/// Print where a compiled component ended up
pub fn print_compiled_component(result: &CompiledComponent) {
    println!(
        " > Component {} compiled to {}",
        result.name,
        result.output_dir.display()
    );
    if let Some(workspace) = &result.kept_workspace {
        println!(" > Temp dir left in place {}", workspace.display());
    }
}

/// Print the targets written into the inventory
pub fn print_rendered_inventory(inventory: &Inventory, rendered: &RenderedInventory) {
    println!(
        "Rendered {} targets into {}",
        rendered.targets.len(),
        inventory.targets_dir().display()
    );
    for (name, target) in &rendered.targets {
        let component = target
            .classes
            .iter()
            .find_map(|c| c.strip_prefix("components."))
            .unwrap_or("-");
        println!("  • {name} ({component})");
    }
}

pub fn print_cluster_and_tenant(cluster: &str, tenant: &str) {
    println!("Cluster: {cluster}");
    println!("Tenant:  {tenant}");
}
