use serde::Serialize;

use crate::domain::Variant;

/// Catalog entry for one script generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantSummary {
    pub name: &'static str,
    pub id: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub hub_fields: Vec<&'static str>,
    pub branch_fields: Vec<&'static str>,
}

impl From<Variant> for VariantSummary {
    fn from(variant: Variant) -> Self {
        let profile = variant.profile();
        Self {
            name: variant.name(),
            id: variant.id(),
            display_name: variant.display_name(),
            description: variant.description(),
            hub_fields: profile.hub_fields.iter().map(|f| f.label()).collect(),
            branch_fields: profile.branch_fields.iter().map(|f| f.label()).collect(),
        }
    }
}

/// List every available generator in catalog order.
pub fn execute() -> Vec<VariantSummary> {
    Variant::ALL.into_iter().map(VariantSummary::from).collect()
}
