/// Capabilities a host exposes for each embedded content instance
pub trait ContentCapabilities {
    /// Library machine name (e.g., "H5P.MultiChoice")
    fn machine_name(&self) -> &str;

    /// Human-readable title, if the content has one
    fn title(&self) -> Option<&str> {
        None
    }

    /// Self-declared task flag (optional, default = let the catalog decide)
    fn is_task(&self) -> Option<bool> {
        None
    }

    /// Current score, for content that can report one
    fn score(&self) -> Option<f64> {
        None
    }

    /// Current max score, for content that can report one
    fn max_score(&self) -> Option<f64> {
        None
    }
}
