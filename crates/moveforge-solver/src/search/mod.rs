//! Symmetry-breaking searches.
//!
//! Both searches always act on the smallest non-zero position, which fixes
//! one representative among move orders that differ only by commuting
//! independent moves.
//!
//! - [`BaseSearch`]: bidirectional base/blacklist search, any moves
//! - [`realize`]: forward-only assignment of a given magnitude multiset

mod assignment;
mod base;
mod resolved;

pub use assignment::realize;
pub use base::BaseSearch;
pub use resolved::ResolvedSet;
