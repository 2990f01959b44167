use refscope_core::RefscopeError;
use refscope_core::client::HttpSource;
use refscope_core::model::Path;
use refscope_core::resource::ResourceLink;
use refscope_core::tree::{TraversalMode, TreeBuilder, format_forest};
use std::sync::Arc;
use tracing::info;
use url::Url;

pub async fn run(
    paths: Vec<String>,
    reverse: bool,
    parent: bool,
    server: Url,
    workers: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let roots = resolve_roots(&paths)?;
    info!(roots = roots.len(), %server, "starting traversal");

    let source = Arc::new(HttpSource::new(server));
    let builder =
        TreeBuilder::new(source, TraversalMode::select(reverse, parent)).with_workers(workers);

    let trees = match builder.build(roots).await {
        Ok(trees) => trees,
        Err(err) => {
            tracing::error!(%err, "traversal failed");
            return Err(err.into());
        }
    };
    println!("{}", format_forest(&trees));
    Ok(())
}

/// Every starting path must address a single resource; anything else is a
/// usage error naming the offending path.
fn resolve_roots(paths: &[String]) -> Result<Vec<ResourceLink>, RefscopeError> {
    paths
        .iter()
        .map(|raw| {
            ResourceLink::from_path(&Path::from(raw.as_str()))
                .ok_or_else(|| RefscopeError::NotAResource(raw.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const UUID4: &str = "00000000-0000-4000-8000-000000000000";

    #[test]
    fn resolves_resource_paths_to_links() {
        let roots = resolve_roots(&[format!("/virtual-network/{UUID4}")]).unwrap();
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].kind, "virtual-network");
        assert_eq!(roots[0].uuid.to_string(), UUID4);
    }

    #[test]
    fn redundant_spellings_resolve_to_the_same_link() {
        let canonical = resolve_roots(&[format!("/virtual-network/{UUID4}")]).unwrap();
        let redundant = resolve_roots(&[format!("/virtual-network/./../virtual-network/{UUID4}")])
            .unwrap();
        assert_eq!(canonical, redundant);
    }

    #[test]
    fn collection_paths_are_rejected_by_name() {
        let outcome = resolve_roots(&["/virtual-network".to_string()]);
        match outcome {
            Err(RefscopeError::NotAResource(path)) => assert_eq!(path, "/virtual-network"),
            other => panic!("expected NotAResource, got {other:?}"),
        }
    }

    #[test]
    fn no_paths_means_no_roots() {
        assert!(resolve_roots(&[]).unwrap().is_empty());
    }
}
