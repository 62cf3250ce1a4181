//! Pure shaping of TMDB payloads into view-ready data.
//!
//! Nothing in here performs I/O; every function is total over its input.

pub mod certificate;
pub mod credits;
pub mod grouping;
pub mod images;
pub mod pagination;
pub mod random;

pub use certificate::{resolve_certificate, resolve_rating, ResolvedCertificate};
pub use credits::{CombinedCast, CombinedCredits, CombinedCrew};
pub use grouping::{department_key, Group, Grouping};
pub use images::{combine_images, CombinedImage};
pub use pagination::{page_window, PageItem, Pagination};
