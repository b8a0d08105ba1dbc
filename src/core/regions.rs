use crate::domain::model::{AreaNode, Region};
use crate::domain::ports::VacancyApi;
use crate::utils::error::Result;

/// Flattens the fetched area tree into its leaf regions, depth-first and
/// order-preserving. Aggregate nodes (country, federal district) are expanded
/// into their children and never emitted themselves.
pub fn leaf_regions(node: &AreaNode) -> Vec<Region> {
    let mut regions = Vec::new();
    collect_leaves(node, &mut regions);
    regions
}

fn collect_leaves(node: &AreaNode, out: &mut Vec<Region>) {
    if node.areas.is_empty() {
        out.push(Region {
            id: node.id.clone(),
            name: node.name.clone(),
        });
        return;
    }
    for child in &node.areas {
        collect_leaves(child, out);
    }
}

/// Fetches the region tree once and flattens it in memory.
pub async fn enumerate_regions<A: VacancyApi>(api: &A, root_id: &str) -> Result<Vec<Region>> {
    let tree = api.area_tree(root_id).await?;
    let regions = leaf_regions(&tree);
    tracing::debug!("Enumerated {} leaf regions under area {}", regions.len(), root_id);
    Ok(regions)
}
