/// Configuration for [`load_map`](super::load_map).
#[derive(Debug, Clone)]
pub struct LoadConfig {
    /// Prune nodes no road touches during finalization and recompute the
    /// graph extent.
    pub remove_isolated: bool,
    /// Fail the load on a link referencing an unknown node id instead of
    /// skipping it with a warning.
    pub strict_links: bool,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            remove_isolated: true,
            strict_links: false,
        }
    }
}
