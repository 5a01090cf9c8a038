use std::fmt;

use serde::{Deserialize, Serialize};

use super::AppError;

/// Script generator variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Untagged VLAN: branches are keyed by their own IP address.
    #[default]
    Untagged,
    /// Tagged VLAN: hub and branches are identified by tags, branch IPs are unused.
    Tagged,
}

/// Field of the hub section of a topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HubField {
    Name,
    Tag,
    Ip,
    VlanId,
}

impl HubField {
    pub fn label(&self) -> &'static str {
        match self {
            HubField::Name => "matrix_name",
            HubField::Tag => "matrix_tag",
            HubField::Ip => "matrix_ip",
            HubField::VlanId => "vlan_id",
        }
    }
}

/// Field of a single branch entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchField {
    Name,
    Tag,
    PwId,
    Ip,
}

impl BranchField {
    pub fn label(&self) -> &'static str {
        match self {
            BranchField::Name => "name",
            BranchField::Tag => "tag",
            BranchField::PwId => "pw_id",
            BranchField::Ip => "ip",
        }
    }
}

/// How the hub script declares its targeted LDP neighbors and keys its pseudowires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeighborKeying {
    /// One targeted neighbor per branch IP; pseudowires keyed by branch IP.
    BranchIp,
    /// A single targeted neighbor on the hub IP; pseudowires keyed by branch tag.
    BranchTag,
}

/// Everything that differs between the two generators.
#[derive(Debug, Clone, Copy)]
pub struct VariantProfile {
    pub hub_fields: &'static [HubField],
    pub branch_fields: &'static [BranchField],
    pub keying: NeighborKeying,
}

const UNTAGGED_PROFILE: VariantProfile = VariantProfile {
    hub_fields: &[HubField::Name, HubField::Ip, HubField::VlanId],
    branch_fields: &[BranchField::Name, BranchField::PwId, BranchField::Ip],
    keying: NeighborKeying::BranchIp,
};

const TAGGED_PROFILE: VariantProfile = VariantProfile {
    hub_fields: &[HubField::Name, HubField::Tag, HubField::Ip, HubField::VlanId],
    branch_fields: &[BranchField::Name, BranchField::Tag, BranchField::PwId],
    keying: NeighborKeying::BranchTag,
};

impl Variant {
    /// All generators, in catalog order.
    pub const ALL: [Variant; 2] = [Variant::Untagged, Variant::Tagged];

    /// Short name used in topology files and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Untagged => "untagged",
            Variant::Tagged => "tagged",
        }
    }

    /// Catalog identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Variant::Untagged => "mpls-vlan-untagged",
            Variant::Tagged => "mpls-vlan-tagged",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Variant::Untagged => "MPLS with untagged VLAN",
            Variant::Tagged => "MPLS with tagged VLAN",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Variant::Untagged => {
                "Hub and branch scripts for untagged VLAN circuits, pseudowires keyed by branch IP."
            }
            Variant::Tagged => {
                "Hub and branch scripts for tagged VLAN circuits, pseudowires keyed by branch tag."
            }
        }
    }

    pub fn profile(&self) -> &'static VariantProfile {
        match self {
            Variant::Untagged => &UNTAGGED_PROFILE,
            Variant::Tagged => &TAGGED_PROFILE,
        }
    }

    /// Parse a variant from its short name or catalog id.
    pub fn from_name(name: &str) -> Option<Variant> {
        match name.to_lowercase().as_str() {
            "untagged" | "mpls-vlan-untagged" => Some(Variant::Untagged),
            "tagged" | "mpls-vlan-tagged" => Some(Variant::Tagged),
            _ => None,
        }
    }

    pub fn parse(name: &str) -> Result<Variant, AppError> {
        Variant::from_name(name).ok_or_else(|| AppError::UnknownVariant(name.to_string()))
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
