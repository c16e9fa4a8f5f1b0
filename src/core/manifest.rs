//! The fetch manifest
//!
//! The manifest is the fixed list of remote resources the tool
//! retrieves: the upstream text files (readme, reference, permissions)
//! and the versioned topography grid.

use crate::core::fetch::FetchConfig;

/// Remote pattern matching the upstream text files
pub const TEXT_GLOB: &str = "*.txt";

/// Suffix used to select text files from a directory listing
pub const TEXT_SUFFIX: &str = ".txt";

/// One entry of the fetch manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteResource {
    /// The `*.txt` companion files in the upstream directory
    TextFiles,
    /// The gridded topography file `topo_<version>.img`
    TopoGrid { version: String },
}

impl RemoteResource {
    /// The remote name of this entry; the glob entry keeps its `*`
    /// unexpanded, expansion happens at fetch time against a listing.
    pub fn remote_name(&self) -> String {
        match self {
            Self::TextFiles => TEXT_GLOB.to_string(),
            Self::TopoGrid { version } => format!("topo_{version}.img"),
        }
    }

    /// Whether this entry is a glob over the remote directory
    pub fn is_glob(&self) -> bool {
        matches!(self, Self::TextFiles)
    }

    /// Concrete URL of this entry under `base_url`
    pub fn url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.remote_name())
    }
}

/// The fixed two-entry manifest for a dataset version
pub fn manifest(version: &str) -> Vec<RemoteResource> {
    vec![
        RemoteResource::TextFiles,
        RemoteResource::TopoGrid {
            version: version.to_string(),
        },
    ]
}

/// Resolve the manifest against a configuration, yielding the two URLs
/// in fetch order.
pub fn resolve_manifest(config: &FetchConfig) -> Vec<String> {
    manifest(&config.version)
        .iter()
        .map(|resource| resource.url(&config.base_url))
        .collect()
}

/// Select the text-file names out of a directory listing
pub fn text_file_names(listing: &[String]) -> Vec<String> {
    listing
        .iter()
        .filter(|name| name.ends_with(TEXT_SUFFIX))
        .cloned()
        .collect()
}
