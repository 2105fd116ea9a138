//! The five compliance checks.
//!
//! Each check walks the document once and appends to a shared
//! [`FindingStore`](pubcheck_core::FindingStore). Per-page failures are
//! recorded against the page and never stop the walk.

mod font;
mod margin;
mod page_limit;
mod page_size;
mod references;

use std::collections::BTreeSet;

pub use font::{FontTally, check_font};
pub use margin::{MarginBands, MarginEdge, PageMargins, check_page_margins, inspect_page_margins};
pub use page_limit::{PageLimitMarker, check_page_limit, find_marker};
pub use page_size::check_page_size;
pub use references::{LinkCounts, check_references};

/// 1-based numbers of pages with a confirmed size mismatch. Geometry checks
/// skip these pages.
pub type PageErrorSet = BTreeSet<usize>;
