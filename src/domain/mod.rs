//! Domain logic - pure version and tag rules independent of git operations

pub mod natural;
pub mod numeric;
pub mod prerelease;
pub mod tag;
pub mod version;

pub use natural::{natural_cmp, sort_natural, sort_versions, SortOrder};
pub use numeric::Numeric;
pub use prerelease::PreRelease;
pub use tag::TagSet;
pub use version::Version;
