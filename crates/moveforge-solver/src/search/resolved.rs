//! Persistent set of positions a search branch may no longer touch.

use std::fmt;
use std::rc::Rc;

use moveforge_core::Position;

#[derive(Debug)]
struct Link {
    position: Position,
    next: Option<Rc<Link>>,
}

/// Immutable list of resolved positions, newest first.
///
/// Extending the list shares the tail with the original, so sibling
/// branches can hold different extensions of a common history without
/// copying it.
///
/// # Example
///
/// ```
/// use moveforge_solver::search::ResolvedSet;
///
/// let root = ResolvedSet::new().with(0);
/// let branch = root.with(3);
///
/// assert_eq!(root.base(), Some(0));
/// assert_eq!(branch.base(), Some(3));
/// assert!(branch.contains(0));
/// assert!(!root.contains(3));
/// ```
#[derive(Clone, Default)]
pub struct ResolvedSet {
    head: Option<Rc<Link>>,
    len: usize,
}

impl ResolvedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a set that also contains `position`, which becomes the base.
    pub fn with(&self, position: Position) -> Self {
        Self {
            head: Some(Rc::new(Link {
                position,
                next: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    /// The most recently resolved position: the base currently being drained.
    pub fn base(&self) -> Option<Position> {
        self.head.as_ref().map(|link| link.position)
    }

    pub fn contains(&self, position: Position) -> bool {
        self.iter().any(|p| p == position)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Positions from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        let mut cursor = self.head.as_deref();
        std::iter::from_fn(move || {
            let link = cursor?;
            cursor = link.next.as_deref();
            Some(link.position)
        })
    }
}

impl fmt::Debug for ResolvedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
