use crate::error::Result;
use crate::model::{FqName, Path};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Address of one resource: its collection name plus its UUID.
///
/// A link is all the traversal needs to fetch the full document; its
/// canonical path in the virtual namespace is `/{kind}/{uuid}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceLink {
    pub kind: String,
    pub uuid: Uuid,
}

impl ResourceLink {
    pub fn new(kind: impl Into<String>, uuid: Uuid) -> Self {
        Self {
            kind: kind.into(),
            uuid,
        }
    }

    /// Reads a link back out of a resource path. Collection paths and paths
    /// whose final segment is not a v4 UUID give `None`.
    pub fn from_path(path: &Path) -> Option<Self> {
        if !path.is_resource() || path.is_collection() {
            return None;
        }
        let uuid = Uuid::parse_str(path.name()).ok()?;
        Some(Self::new(path.base(), uuid))
    }

    pub fn path(&self) -> Path {
        Path::from(format!("/{}/{}", self.kind, self.uuid))
    }
}

impl fmt::Display for ResourceLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.kind, self.uuid)
    }
}

/// A fetched resource document.
///
/// `refs` and `back_refs` keep the order the remote source lists them in;
/// that order is what the rendered tree reflects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub kind: String,
    pub uuid: Uuid,
    pub fq_name: FqName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ResourceLink>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub refs: Vec<ResourceLink>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub back_refs: Vec<ResourceLink>,
}

impl Resource {
    pub fn link(&self) -> ResourceLink {
        ResourceLink::new(self.kind.clone(), self.uuid)
    }

    pub fn path(&self) -> Path {
        self.link().path()
    }
}

/// Where resource documents come from.
///
/// The traversal core only ever talks to this seam; the HTTP client and the
/// in-memory sources used by tests both live behind it.
#[async_trait]
pub trait ResourceSource: Send + Sync {
    /// Fetch the full document behind a link. Transport failures and unknown
    /// links are errors; the traversal treats both as fatal.
    async fn fetch(&self, link: &ResourceLink) -> Result<Resource>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Path;

    const UUID4: &str = "00000000-0000-4000-8000-000000000000";

    #[test]
    fn link_round_trips_through_its_path() {
        let link = ResourceLink::new("virtual-network", Uuid::parse_str(UUID4).unwrap());
        assert_eq!(link.path().to_string(), format!("/virtual-network/{UUID4}"));
        assert_eq!(ResourceLink::from_path(&link.path()), Some(link));
    }

    #[test]
    fn from_path_rejects_non_resource_paths() {
        assert_eq!(ResourceLink::from_path(&Path::from("/virtual-network")), None);
        assert_eq!(ResourceLink::from_path(&Path::from("/a/not-a-uuid")), None);
        // A bare UUID path has no collection segment.
        assert_eq!(ResourceLink::from_path(&Path::from(format!("/{UUID4}"))), None);
    }

    #[test]
    fn documents_deserialize_with_missing_relation_fields() {
        let doc = format!(r#"{{"kind":"project","uuid":"{UUID4}","fq_name":["default","p"]}}"#);
        let resource: Resource = serde_json::from_str(&doc).unwrap();
        assert_eq!(resource.fq_name.to_string(), "default:p");
        assert!(resource.parent.is_none());
        assert!(resource.refs.is_empty());
        assert!(resource.back_refs.is_empty());
    }
}
