//! Required-field completeness checks.
//!
//! Only emptiness is checked. IP syntax, VLAN range and pseudowire numbering pass through
//! untouched into the generated scripts.

use std::fmt;

use super::{BranchField, BranchOffice, HubField, NetworkConfig, Variant};

/// Notification title for an incomplete topology.
pub const VALIDATION_TITLE: &str = "Validation error";
/// Message shown when a hub field is missing or no branches exist.
pub const MISSING_REQUIRED_FIELDS: &str = "Please fill in all required fields.";
/// Message shown when any branch entry is incomplete.
pub const MISSING_BRANCH_DATA: &str = "Please fill in all branch data.";

/// A single reason a topology cannot be rendered yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    MissingHubField(HubField),
    NoBranches,
    /// `branch` is the 1-based branch number.
    MissingBranchField { branch: usize, field: BranchField },
}

impl ValidationIssue {
    fn is_hub_level(&self) -> bool {
        matches!(self, ValidationIssue::MissingHubField(_) | ValidationIssue::NoBranches)
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::MissingHubField(field) => write!(f, "{} is empty", field.label()),
            ValidationIssue::NoBranches => write!(f, "no branches configured"),
            ValidationIssue::MissingBranchField { branch, field } => {
                write!(f, "branch {}: {} is empty", branch, field.label())
            }
        }
    }
}

/// Outcome of checking a topology against a variant's required fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// The single user-facing message for this report, hub problems first.
    pub fn summary(&self) -> Option<&'static str> {
        if self.issues.iter().any(ValidationIssue::is_hub_level) {
            Some(MISSING_REQUIRED_FIELDS)
        } else if self.issues.is_empty() {
            None
        } else {
            Some(MISSING_BRANCH_DATA)
        }
    }
}

fn hub_value<'a>(config: &'a NetworkConfig, field: HubField) -> &'a str {
    match field {
        HubField::Name => &config.matrix_name,
        HubField::Tag => &config.matrix_tag,
        HubField::Ip => &config.matrix_ip,
        HubField::VlanId => &config.vlan_id,
    }
}

fn branch_value(branch: &BranchOffice, field: BranchField) -> &str {
    match field {
        BranchField::Name => &branch.name,
        BranchField::Tag => &branch.tag,
        BranchField::PwId => &branch.pw_id,
        BranchField::Ip => &branch.ip,
    }
}

/// Collect every missing required field for `variant`.
pub fn validate_config(config: &NetworkConfig, variant: Variant) -> ValidationReport {
    let profile = variant.profile();
    let mut issues = Vec::new();

    for &field in profile.hub_fields {
        if hub_value(config, field).is_empty() {
            issues.push(ValidationIssue::MissingHubField(field));
        }
    }

    if config.branch_count() == 0 {
        issues.push(ValidationIssue::NoBranches);
    }

    for (index, branch) in config.branches.iter().enumerate() {
        for &field in profile.branch_fields {
            if branch_value(branch, field).is_empty() {
                issues.push(ValidationIssue::MissingBranchField { branch: index + 1, field });
            }
        }
    }

    ValidationReport { issues }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn complete_untagged() -> NetworkConfig {
        NetworkConfig {
            matrix_name: "EDD-MATRIZ".to_string(),
            matrix_tag: String::new(),
            matrix_ip: "10.0.0.1".to_string(),
            vlan_id: "100".to_string(),
            branches: vec![BranchOffice {
                name: "EDD-FILIAL-001".to_string(),
                tag: String::new(),
                pw_id: "1001".to_string(),
                ip: "10.0.0.2".to_string(),
            }],
        }
    }

    fn complete_tagged() -> NetworkConfig {
        NetworkConfig {
            matrix_name: "EDD-MATRIZ".to_string(),
            matrix_tag: "TRANSPORTE-MATRIZ".to_string(),
            matrix_ip: "10.0.0.1".to_string(),
            vlan_id: "100".to_string(),
            branches: vec![BranchOffice {
                name: "EDD-FILIAL-001".to_string(),
                tag: "FILIAL-01".to_string(),
                pw_id: "1001".to_string(),
                ip: String::new(),
            }],
        }
    }

    #[test]
    fn complete_untagged_is_valid() {
        let report = validate_config(&complete_untagged(), Variant::Untagged);
        assert!(report.is_valid());
        assert_eq!(report.summary(), None);
    }

    #[test]
    fn complete_tagged_is_valid_without_branch_ip() {
        assert!(validate_config(&complete_tagged(), Variant::Tagged).is_valid());
    }

    #[test]
    fn untagged_config_fails_tagged_checks() {
        let report = validate_config(&complete_untagged(), Variant::Tagged);
        assert!(report.issues.contains(&ValidationIssue::MissingHubField(HubField::Tag)));
        assert!(
            report
                .issues
                .contains(&ValidationIssue::MissingBranchField { branch: 1, field: BranchField::Tag })
        );
    }

    #[test]
    fn no_branches_is_invalid() {
        let mut config = complete_untagged();
        config.branches.clear();

        let report = validate_config(&config, Variant::Untagged);

        assert_eq!(report.issues, vec![ValidationIssue::NoBranches]);
        assert_eq!(report.summary(), Some(MISSING_REQUIRED_FIELDS));
    }

    #[test]
    fn one_empty_pw_id_fails_everything() {
        let mut config = complete_untagged();
        let mut second = config.branches[0].clone();
        second.pw_id.clear();
        config.branches.push(second);

        let report = validate_config(&config, Variant::Untagged);

        assert_eq!(
            report.issues,
            vec![ValidationIssue::MissingBranchField { branch: 2, field: BranchField::PwId }]
        );
        assert_eq!(report.summary(), Some(MISSING_BRANCH_DATA));
    }

    #[test]
    fn hub_message_wins_over_branch_message() {
        let mut config = complete_untagged();
        config.vlan_id.clear();
        config.branches[0].ip.clear();

        let report = validate_config(&config, Variant::Untagged);

        assert_eq!(report.issues.len(), 2);
        assert_eq!(report.summary(), Some(MISSING_REQUIRED_FIELDS));
    }

    #[test]
    fn whitespace_counts_as_filled() {
        let mut config = complete_untagged();
        config.matrix_name = " ".to_string();
        assert!(validate_config(&config, Variant::Untagged).is_valid());
    }

    #[test]
    fn malformed_values_pass() {
        let mut config = complete_untagged();
        config.matrix_ip = "not-an-ip".to_string();
        config.vlan_id = "vlan".to_string();
        config.branches[0].pw_id = "x".to_string();
        assert!(validate_config(&config, Variant::Untagged).is_valid());
    }

    #[test]
    fn issues_display_field_labels() {
        let issue = ValidationIssue::MissingBranchField { branch: 3, field: BranchField::PwId };
        assert_eq!(issue.to_string(), "branch 3: pw_id is empty");
    }

    fn filled() -> impl Strategy<Value = String> {
        "[A-Za-z0-9.-]{1,12}"
    }

    fn branch_strategy() -> impl Strategy<Value = BranchOffice> {
        (filled(), filled(), filled(), filled())
            .prop_map(|(name, tag, pw_id, ip)| BranchOffice { name, tag, pw_id, ip })
    }

    fn config_strategy() -> impl Strategy<Value = NetworkConfig> {
        (filled(), filled(), filled(), filled(), prop::collection::vec(branch_strategy(), 1..=10))
            .prop_map(|(matrix_name, matrix_tag, matrix_ip, vlan_id, branches)| NetworkConfig {
                matrix_name,
                matrix_tag,
                matrix_ip,
                vlan_id,
                branches,
            })
    }

    proptest! {
        #[test]
        fn fully_filled_configs_pass_both_variants(config in config_strategy()) {
            for variant in Variant::ALL {
                prop_assert!(validate_config(&config, variant).is_valid());
            }
        }

        #[test]
        fn zero_branches_always_fail(config in config_strategy()) {
            let mut config = config;
            config.branches.clear();
            for variant in Variant::ALL {
                prop_assert!(!validate_config(&config, variant).is_valid());
            }
        }

        #[test]
        fn clearing_any_pw_id_fails(config in config_strategy(), pick in any::<prop::sample::Index>()) {
            let mut config = config;
            let index = pick.index(config.branches.len());
            config.branches[index].pw_id.clear();
            for variant in Variant::ALL {
                prop_assert!(!validate_config(&config, variant).is_valid());
            }
        }
    }
}
