//! Script generation for hub and branch routers.
//!
//! Hub and branch scripts, in both variants, share one skeleton template. The variant
//! only decides which values flow into it: the VPN identifier, the targeted LDP
//! neighbors and the pseudowire keys.

use std::path::{Component, Path};

use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;

use super::{AppError, BranchOffice, NeighborKeying, NetworkConfig, Variant};
use crate::ports::ScriptTemplateStore;

/// Name of the skeleton template every script is rendered from.
pub const SKELETON_TEMPLATE: &str = "vpls.cfg.j2";

#[derive(Debug, Serialize)]
struct Pseudowire<'a> {
    neighbor: &'a str,
    pw_id: &'a str,
}

#[derive(Debug, Serialize)]
struct SkeletonContext<'a> {
    ldp_neighbors: Vec<&'a str>,
    vpn: &'a str,
    pseudowires: Vec<Pseudowire<'a>>,
    vlan_id: &'a str,
}

impl<'a> SkeletonContext<'a> {
    fn hub(config: &'a NetworkConfig, variant: Variant) -> Self {
        let (vpn, ldp_neighbors) = match variant.profile().keying {
            NeighborKeying::BranchIp => (
                config.matrix_name.as_str(),
                config.branches.iter().map(|b| b.ip.as_str()).collect(),
            ),
            NeighborKeying::BranchTag => {
                (config.matrix_tag.as_str(), vec![config.matrix_ip.as_str()])
            }
        };

        let pseudowires = config
            .branches
            .iter()
            .map(|branch| Pseudowire {
                neighbor: match variant.profile().keying {
                    NeighborKeying::BranchIp => branch.ip.as_str(),
                    NeighborKeying::BranchTag => branch.tag.as_str(),
                },
                pw_id: &branch.pw_id,
            })
            .collect();

        Self { ldp_neighbors, vpn, pseudowires, vlan_id: &config.vlan_id }
    }

    fn branch(config: &'a NetworkConfig, branch: &'a BranchOffice, variant: Variant) -> Self {
        let vpn = match variant.profile().keying {
            NeighborKeying::BranchIp => branch.name.as_str(),
            NeighborKeying::BranchTag => branch.tag.as_str(),
        };

        Self {
            ldp_neighbors: vec![config.matrix_ip.as_str()],
            vpn,
            pseudowires: vec![Pseudowire { neighbor: &config.matrix_ip, pw_id: &branch.pw_id }],
            vlan_id: &config.vlan_id,
        }
    }
}

/// Which router a script is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ScriptTarget {
    Hub,
    /// `number` is the 1-based branch position.
    Branch { number: usize },
}

/// One rendered script with its display and download metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedScript {
    pub target: ScriptTarget,
    pub title: String,
    /// Download file name without the `.txt` extension.
    pub file_stem: String,
    pub content: String,
}

/// Hub script followed by one script per branch, in branch order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptBundle {
    pub variant: Variant,
    pub hub: GeneratedScript,
    pub branches: Vec<GeneratedScript>,
}

impl ScriptBundle {
    /// All scripts, hub first.
    pub fn scripts(&self) -> impl Iterator<Item = &GeneratedScript> {
        std::iter::once(&self.hub).chain(self.branches.iter())
    }

    pub fn script_count(&self) -> usize {
        1 + self.branches.len()
    }

    /// Look up one script of the bundle.
    pub fn get(&self, target: ScriptTarget) -> Result<&GeneratedScript, AppError> {
        match target {
            ScriptTarget::Hub => Ok(&self.hub),
            ScriptTarget::Branch { number } => number
                .checked_sub(1)
                .and_then(|index| self.branches.get(index))
                .ok_or(AppError::BranchIndexOutOfRange {
                    index: number,
                    count: self.branches.len(),
                }),
        }
    }
}

/// A download name must be exactly one plain file name.
///
/// Empty names, `.`/`..`, path separators and absolute paths are rejected.
pub fn check_file_stem(stem: &str) -> Result<(), AppError> {
    let mut components = Path::new(stem).components();
    let single_normal =
        matches!((components.next(), components.next()), (Some(Component::Normal(_)), None));

    if stem.is_empty() || !single_normal || stem.contains(['/', '\\']) {
        return Err(AppError::InvalidFileName(stem.to_string()));
    }
    Ok(())
}

/// Renders hub and branch scripts from a loaded skeleton template.
///
/// Rendering never mutates the topology, so repeated calls with the same input produce
/// byte-identical output.
pub struct ScriptGenerator {
    env: Environment<'static>,
}

impl ScriptGenerator {
    /// Build a generator from every template in `store`.
    pub fn new<S: ScriptTemplateStore>(store: &S) -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        // Field values reach the router console as typed.
        env.set_auto_escape_callback(|_| AutoEscape::None);

        for template in store.templates() {
            let name = template.name.clone();
            env.add_template_owned(template.name, template.source).map_err(|e| {
                AppError::Template { template: name, reason: e.to_string() }
            })?;
        }

        env.get_template(SKELETON_TEMPLATE).map_err(|e| AppError::Template {
            template: SKELETON_TEMPLATE.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { env })
    }

    fn render(&self, context: &SkeletonContext<'_>) -> Result<String, AppError> {
        let template = self.env.get_template(SKELETON_TEMPLATE).map_err(|e| {
            AppError::Template { template: SKELETON_TEMPLATE.to_string(), reason: e.to_string() }
        })?;

        template.render(context).map_err(|e| AppError::Template {
            template: SKELETON_TEMPLATE.to_string(),
            reason: e.to_string(),
        })
    }

    /// Script for the hub router, covering every branch.
    pub fn hub_script(&self, config: &NetworkConfig, variant: Variant) -> Result<String, AppError> {
        tracing::debug!(variant = %variant, branches = config.branch_count(), "rendering hub script");
        self.render(&SkeletonContext::hub(config, variant))
    }

    /// Script for a single branch router, pointing back at the hub.
    pub fn branch_script(
        &self,
        config: &NetworkConfig,
        branch: &BranchOffice,
        variant: Variant,
    ) -> Result<String, AppError> {
        tracing::debug!(variant = %variant, branch = %branch.name, "rendering branch script");
        self.render(&SkeletonContext::branch(config, branch, variant))
    }

    /// Render the hub script and every branch script.
    ///
    /// No completeness check happens here; callers validate first.
    pub fn bundle(&self, config: &NetworkConfig, variant: Variant) -> Result<ScriptBundle, AppError> {
        let hub = GeneratedScript {
            target: ScriptTarget::Hub,
            title: format!("Hub script: {}", config.matrix_name),
            file_stem: format!("script_matriz_{}", config.matrix_name),
            content: self.hub_script(config, variant)?,
        };

        let branches = config
            .branches
            .iter()
            .enumerate()
            .map(|(index, branch)| {
                Ok(GeneratedScript {
                    target: ScriptTarget::Branch { number: index + 1 },
                    title: format!("Branch script: {}", branch.name),
                    file_stem: format!("script_filial_{}", branch.name),
                    content: self.branch_script(config, branch, variant)?,
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        Ok(ScriptBundle { variant, hub, branches })
    }
}
