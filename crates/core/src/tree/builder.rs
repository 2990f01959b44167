use super::TreeNode;
use crate::error::Result;
use crate::exec::{DEFAULT_WORKERS, parallel_map};
use crate::model::Path;
use crate::resource::{ResourceLink, ResourceSource};
use dashmap::DashSet;
use futures::FutureExt;
use futures::future::BoxFuture;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Which relation each node expands into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalMode {
    /// Forward references (the default).
    #[default]
    Refs,
    /// Back references.
    BackRefs,
    /// The zero-or-one parent chain.
    Parent,
}

impl TraversalMode {
    /// Maps the command surface's mutually exclusive flags onto a mode.
    pub fn select(reverse: bool, parent: bool) -> Self {
        if parent {
            TraversalMode::Parent
        } else if reverse {
            TraversalMode::BackRefs
        } else {
            TraversalMode::Refs
        }
    }
}

/// Cycle and duplicate guard shared by every branch of one invocation.
///
/// Insertion doubles as the claim: only the first branch to claim a UUID gets
/// to expand it, so two branches racing on the same resource can never both
/// recurse into it.
#[derive(Debug, Default)]
struct ClaimSet(DashSet<Uuid>);

impl ClaimSet {
    /// Atomic check-then-insert; true only for the first claimant.
    fn claim(&self, uuid: Uuid) -> bool {
        self.0.insert(uuid)
    }

    fn contains(&self, uuid: &Uuid) -> bool {
        self.0.contains(uuid)
    }
}

struct Traversal {
    source: Arc<dyn ResourceSource>,
    mode: TraversalMode,
    workers: usize,
    base: Path,
    claimed: ClaimSet,
}

/// Expands resource reference graphs into printable trees.
///
/// Every fan-out, the roots included, goes through the bounded mapper, so the
/// whole invocation never holds more than `workers` fetches in flight and the
/// rendered order always follows the order of the remote reference lists.
pub struct TreeBuilder {
    source: Arc<dyn ResourceSource>,
    mode: TraversalMode,
    workers: usize,
    base: Path,
}

impl TreeBuilder {
    pub fn new(source: Arc<dyn ResourceSource>, mode: TraversalMode) -> Self {
        Self {
            source,
            mode,
            workers: DEFAULT_WORKERS,
            base: Path::root(),
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Node paths are displayed relative to this base.
    pub fn with_base(mut self, base: Path) -> Self {
        self.base = base;
        self
    }

    /// Expands every root, sharing one claim set across all of them: a
    /// resource already expanded under one root is not expanded again under
    /// another. The claim set lives exactly as long as this call.
    ///
    /// Any fetch failure fails the whole invocation; partial trees are never
    /// returned.
    pub async fn build(&self, roots: Vec<ResourceLink>) -> Result<Vec<TreeNode>> {
        let traversal = Arc::new(Traversal {
            source: Arc::clone(&self.source),
            mode: self.mode,
            workers: self.workers,
            base: self.base.clone(),
            claimed: ClaimSet::default(),
        });
        parallel_map(roots, self.workers, |root| {
            expand(Arc::clone(&traversal), root)
        })
        .await
    }
}

/// One traversal step: fetch, claim, select candidates by mode, filter the
/// already-claimed ones, recurse over the rest through the bounded mapper.
fn expand(traversal: Arc<Traversal>, link: ResourceLink) -> BoxFuture<'static, Result<TreeNode>> {
    async move {
        let resource = traversal.source.fetch(&link).await?;
        let path = resource.path().relative_to(&traversal.base).to_string();
        let fq_name = resource.fq_name.to_string();

        if !traversal.claimed.claim(resource.uuid) {
            // Another branch got here first; render a leaf instead of
            // expanding the same resource twice.
            debug!(%path, "already expanded elsewhere");
            return Ok(TreeNode {
                path,
                fq_name,
                children: Vec::new(),
            });
        }
        debug!(%path, mode = ?traversal.mode, "expanding");

        let candidates = match traversal.mode {
            TraversalMode::Parent => resource.parent.into_iter().collect(),
            TraversalMode::BackRefs => resource.back_refs,
            TraversalMode::Refs => resource.refs,
        };
        let pending: Vec<ResourceLink> = candidates
            .into_iter()
            .filter(|candidate| !traversal.claimed.contains(&candidate.uuid))
            .collect();

        let children = if pending.is_empty() {
            Vec::new()
        } else {
            parallel_map(pending, traversal.workers, |child| {
                expand(Arc::clone(&traversal), child)
            })
            .await?
        };

        Ok(TreeNode {
            path,
            fq_name,
            children,
        })
    }
    .boxed()
}
