use crate::resource::ResourceLink;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RefscopeError {
    #[error("resource {0} not found")]
    NotFound(ResourceLink),
    #[error("fetch failed for {link}: {source}")]
    Fetch {
        link: ResourceLink,
        #[source]
        source: reqwest::Error,
    },
    #[error("not a resource path: {0}")]
    NotAResource(String),
    #[error("invalid resource URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("worker task failed: {0}")]
    Worker(String),
}

pub type Result<T> = std::result::Result<T, RefscopeError>;
