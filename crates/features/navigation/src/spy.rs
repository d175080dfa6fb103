use folio_domain::SectionId;
use serde::{Deserialize, Serialize};

/// Distance from the top of the viewport, in CSS pixels, used to pick the active section.
pub const PROBE_OFFSET: f64 = 100.0;

/// Viewport-relative bounds of a section element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub id: SectionId,
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    #[must_use]
    pub fn contains(&self, probe: f64) -> bool {
        self.top <= probe && self.bottom >= probe
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSpy {
    probe: f64,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self { probe: PROBE_OFFSET }
    }
}

impl ScrollSpy {
    #[cfg(test)]
    pub(crate) const fn with_probe(probe: f64) -> Self {
        Self { probe }
    }

    /// First section in page order that straddles the probe line.
    #[must_use]
    pub fn detect(&self, bounds: &[SectionBounds]) -> Option<SectionId> {
        SectionId::ALL
            .into_iter()
            .find(|id| bounds.iter().any(|b| b.id == *id && b.contains(self.probe)))
    }
}
