//! Facade crate for `SchoolHub` features and shared modules.
//! Re-exports domain primitives and the feature crates behind one door.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `shub` and reach everything through the re-exported modules
//!   (`shub::packages`, `shub::platform`, ...).

pub use shub_domain as domain;
pub use shub_normalize as normalize;

/// Feature registry for runtime introspection.
pub mod features {
    pub use shub_packages as packages;
    pub use shub_platform as platform;
    pub use shub_query as query;

    /// Build-time enabled features.
    pub const ENABLED: &[&str] = &["packages", "platform", "query"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

pub use features::{packages, platform, query};
