//! Degraded-data marker for catalog pages
//!
//! When a catalog fetch fails, pages fall back to embedded sample content
//! instead of an empty screen, and must say so. This enum is what makes
//! the substitution explicit rather than silent.

/// Where the content a page is currently showing came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentSource {
    /// Nothing fetched yet.
    #[default]
    Loading,
    /// Live server data.
    Live,
    /// Embedded sample data, shown because the fetch failed.
    Sample,
}

impl ContentSource {
    pub fn is_loading(&self) -> bool {
        matches!(self, ContentSource::Loading)
    }

    pub fn is_sample(&self) -> bool {
        matches!(self, ContentSource::Sample)
    }
}

/// Banner shown above any page section rendered from sample data.
pub const SAMPLE_NOTICE: &str = "服务器暂时无法连接，以下为示例内容";
