//! Facade crate for the portfolio's shared modules and feature slices.
//! Re-exports domain, content and kernel primitives alongside every feature crate.
//! Keep this crate thin: it composes other crates and holds no page logic.

pub use folio_content as content;
pub use folio_domain as domain;
pub use folio_kernel as kernel;

/// Feature registry for runtime introspection.
pub mod features {
    pub use folio_contact as contact;
    pub use folio_motion as motion;
    pub use folio_navigation as navigation;
    pub use folio_showcase as showcase;

    /// Feature slices compiled into this build.
    pub const ENABLED: &[&str] = &["motion", "navigation", "showcase", "contact"];

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn registry_lists_each_slice() {
            for name in ["motion", "navigation", "showcase", "contact"] {
                assert!(ENABLED.contains(&name), "{name} should be enabled");
            }
            assert_eq!(ENABLED.len(), 4);
        }
    }
}
