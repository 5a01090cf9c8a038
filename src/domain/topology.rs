//! Topology data model: one hub ("matrix") site and its branch sites.
//!
//! The record is a plain value. Commands read it, validators and generators borrow it,
//! and only the presentation shell (the `form`, `init` and `resize` commands) produces
//! new revisions of it.

use serde::{Deserialize, Serialize};

use super::{AppError, Variant};

/// Upper bound on the number of branch sites in one topology.
pub const MAX_BRANCHES: usize = 10;

/// A single branch site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BranchOffice {
    /// Display identifier, used as the VPN name in the untagged variant.
    pub name: String,
    /// VPN/neighbor tag (tagged variant).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tag: String,
    /// Pseudowire identifier.
    pub pw_id: String,
    /// Branch device address (untagged variant).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ip: String,
}

impl BranchOffice {
    /// Fresh entry for the branch at 1-based `position`.
    pub fn defaulted(position: usize) -> Self {
        Self {
            name: format!("EDD-FILIAL-{:03}", position),
            tag: format!("FILIAL-{:02}", position),
            pw_id: String::new(),
            ip: String::new(),
        }
    }
}

/// Hub parameters plus the ordered branch list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub matrix_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub matrix_tag: String,
    pub matrix_ip: String,
    pub vlan_id: String,
    pub branches: Vec<BranchOffice>,
}

impl NetworkConfig {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of branch sites. Always equal to `branches.len()`.
    pub fn branch_count(&self) -> usize {
        self.branches.len()
    }

    /// Replace the branch list with `count` freshly defaulted entries.
    ///
    /// Previously entered branch values are discarded, even when the count is unchanged.
    pub fn set_branch_count(&mut self, count: usize) -> Result<(), AppError> {
        check_branch_count(count)?;
        self.branches = (1..=count).map(BranchOffice::defaulted).collect();
        Ok(())
    }

    /// Builder-style variant of [`NetworkConfig::set_branch_count`].
    pub fn with_branch_count(mut self, count: usize) -> Result<Self, AppError> {
        self.set_branch_count(count)?;
        Ok(self)
    }

    /// Look up a branch by 1-based number.
    pub fn branch(&self, number: usize) -> Result<&BranchOffice, AppError> {
        number
            .checked_sub(1)
            .and_then(|index| self.branches.get(index))
            .ok_or(AppError::BranchIndexOutOfRange { index: number, count: self.branch_count() })
    }
}

pub(crate) fn check_branch_count(count: usize) -> Result<(), AppError> {
    if count > MAX_BRANCHES {
        return Err(AppError::BranchCountOutOfRange { count, max: MAX_BRANCHES });
    }
    Ok(())
}

/// On-disk topology document: the generator variant plus the record itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyFile {
    #[serde(default)]
    pub variant: Variant,
    #[serde(flatten)]
    pub config: NetworkConfig,
}

impl TopologyFile {
    pub fn new(variant: Variant, config: NetworkConfig) -> Self {
        Self { variant, config }
    }
}

/// Clean up a hub IP typed by hand.
///
/// Commas become dots, then everything except ASCII digits and dots is dropped.
/// Dotted-quad well-formedness is not checked.
pub fn sanitize_hub_ip(input: &str) -> String {
    input
        .chars()
        .map(|c| if c == ',' { '.' } else { c })
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}
