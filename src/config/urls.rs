//! Upstream data server URLs

/// Smith-Sandwell global 1-minute topography directory (UCSD).
///
/// The same tree is published over FTP at
/// `ftp://topex.ucsd.edu/pub/global_topo_1min`.
pub const TOPO_BASE_URL: &str = "https://topex.ucsd.edu/pub/global_topo_1min";
