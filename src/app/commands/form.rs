//! Interactive topology entry.

use crate::domain::{AppError, MAX_BRANCHES, NetworkConfig, TopologyFile, Variant, sanitize_hub_ip};
use crate::ports::FormInput;

/// Walk the operator through every field of a topology.
///
/// Returns `Ok(None)` when the operator cancels. Only the fields the chosen variant uses are
/// asked for. In the tagged variant the hub IP is cleaned with [`sanitize_hub_ip`].
pub fn execute<F: FormInput>(
    input: &mut F,
    variant: Option<Variant>,
) -> Result<Option<TopologyFile>, AppError> {
    let variant = match variant {
        Some(variant) => variant,
        None => match input.select_variant(&Variant::ALL)? {
            Some(variant) => variant,
            None => return Ok(None),
        },
    };
    let tagged = variant == Variant::Tagged;

    let mut config = NetworkConfig::new();

    let Some(matrix_name) = input.text("Hub name", "")? else {
        return Ok(None);
    };
    config.matrix_name = matrix_name;

    if tagged {
        let Some(matrix_tag) = input.text("Hub tag", "")? else {
            return Ok(None);
        };
        config.matrix_tag = matrix_tag;
    }

    let Some(matrix_ip) = input.text("Hub IP", "")? else {
        return Ok(None);
    };
    config.matrix_ip = if tagged { sanitize_hub_ip(&matrix_ip) } else { matrix_ip };

    let Some(vlan_id) = input.text("VLAN ID", "")? else {
        return Ok(None);
    };
    config.vlan_id = vlan_id;

    let Some(count) = input.count("Number of branches", MAX_BRANCHES)? else {
        return Ok(None);
    };
    config.set_branch_count(count)?;

    for (index, branch) in config.branches.iter_mut().enumerate() {
        let number = index + 1;

        let Some(name) = input.text(&format!("Branch {} name", number), &branch.name)? else {
            return Ok(None);
        };
        branch.name = name;

        if tagged {
            let Some(tag) = input.text(&format!("Branch {} tag", number), &branch.tag)? else {
                return Ok(None);
            };
            branch.tag = tag;
        } else {
            branch.tag.clear();
            let Some(ip) = input.text(&format!("Branch {} IP", number), "")? else {
                return Ok(None);
            };
            branch.ip = ip;
        }

        let Some(pw_id) = input.text(&format!("Branch {} PW-ID", number), "")? else {
            return Ok(None);
        };
        branch.pw_id = pw_id;
    }

    Ok(Some(TopologyFile::new(variant, config)))
}
