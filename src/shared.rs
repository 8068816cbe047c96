//! Type-erased, reference-counted predicates.
//!
//! Composed predicates are deeply nested generic types. `SharedBiPredicate`
//! erases that type behind an `Arc` so a predicate can be stored in a field,
//! cloned cheaply and evaluated from many threads at once.

use alloc::sync::Arc;
use core::fmt;

use crate::predicate::BiPredicate;

/// A cloneable, thread-safe handle to any predicate reporting `E`.
pub struct SharedBiPredicate<E> {
    inner: Arc<dyn BiPredicate<Error = E> + Send + Sync>,
}

/// Erase `predicate` into a [`SharedBiPredicate`].
///
/// ```
/// use tola_bipred::prelude::*;
///
/// let p = shared(greater().and(within(0, 100)));
/// let q = p.clone();
/// let handle = std::thread::spawn(move || q.test(50, 10));
///
/// assert!(handle.join().unwrap());
/// assert!(!p.test(10, 50));
/// ```
pub fn shared<P>(predicate: P) -> SharedBiPredicate<P::Error>
where
    P: BiPredicate + Send + Sync + 'static,
    P::Error: 'static,
{
    SharedBiPredicate { inner: Arc::new(predicate) }
}

impl<E> SharedBiPredicate<E> {
    /// Number of handles sharing this predicate.
    pub fn handle_count(this: &Self) -> usize {
        Arc::strong_count(&this.inner)
    }

    /// Whether both handles point at the same predicate.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.inner, &other.inner)
    }
}

impl<E> BiPredicate for SharedBiPredicate<E> {
    type Error = E;

    #[inline]
    fn evaluate(&self, left: i64, right: i64) -> Result<bool, E> {
        self.inner.evaluate(left, right)
    }
}

impl<E> Clone for SharedBiPredicate<E> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<E> fmt::Debug for SharedBiPredicate<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedBiPredicate")
            .field("handles", &Arc::strong_count(&self.inner))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use super::*;
    use crate::InfallibleBiPredicate;
    use crate::primitives::{Equal, Less};

    #[test]
    fn test_clone_shares_predicate() {
        let p = shared(Less);
        let q = p.clone();
        assert!(SharedBiPredicate::ptr_eq(&p, &q));
        assert_eq!(SharedBiPredicate::handle_count(&p), 2);
        assert!(q.test(1, 2));
    }

    #[test]
    fn test_heterogeneous_predicates_share_a_type() {
        let table: [SharedBiPredicate<Infallible>; 2] = [shared(Less), shared(Less.or(Equal).negate())];
        assert!(table[0].test(1, 2));
        assert!(table[1].test(2, 1));
        assert!(!table[1].test(2, 2));
    }

    #[test]
    fn test_shared_composes_further() {
        let p = shared(Less).and(shared(Equal.negate()));
        assert!(p.test(1, 2));
        assert!(!p.test(2, 2));
    }
}
