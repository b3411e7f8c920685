//! Ordering policies supplied to an [`RBTree`](crate::RBTree) at construction.
//!
//! A tree stores values of type `V` and orders them by a key projected out of
//! each value ([`KeyOfValue`]) under a strict weak order ([`Compare`]).

/// Projects the ordering key out of a stored value.
///
/// # Examples
///
/// ```
/// use rbtree::{KeyOfValue, NaturalOrder, RBTree};
///
/// struct Employee {
///     id: u32,
///     name: &'static str,
/// }
///
/// struct ById;
///
/// impl KeyOfValue<Employee> for ById {
///     type Key = u32;
///
///     fn key<'a>(&self, value: &'a Employee) -> &'a u32 {
///         &value.id
///     }
/// }
///
/// let mut staff = RBTree::with_comparator(ById, NaturalOrder);
/// staff.insert_unique(Employee { id: 7, name: "Grace" });
/// staff.insert_unique(Employee { id: 3, name: "Ada" });
/// assert_eq!(staff.first().map(|e| e.name), Some("Ada"));
/// ```
pub trait KeyOfValue<V> {
    /// The key type compared by the tree.
    type Key: ?Sized;

    /// Borrows the key of `value`.
    fn key<'a>(&self, value: &'a V) -> &'a Self::Key;
}

/// The value is its own key, giving set semantics.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Identity;

impl<V> KeyOfValue<V> for Identity {
    type Key = V;

    #[inline]
    fn key<'a>(&self, value: &'a V) -> &'a V {
        value
    }
}

/// Keys are the first element of a pair, giving map semantics.
///
/// ```
/// use rbtree::{First, NaturalOrder, RBTree};
///
/// let mut map = RBTree::with_comparator(First, NaturalOrder);
/// map.insert_unique(("b", 2));
/// map.insert_unique(("a", 1));
/// assert_eq!(map.get(map.find(&"a")), Some(&("a", 1)));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct First;

impl<K, T> KeyOfValue<(K, T)> for First {
    type Key = K;

    #[inline]
    fn key<'a>(&self, value: &'a (K, T)) -> &'a K {
        &value.0
    }
}

/// A strict weak ordering over keys.
///
/// `less(a, b)` must be irreflexive and transitive, and incomparability
/// (`!less(a, b) && !less(b, a)`) must be transitive. Two keys that are
/// incomparable are *equivalent*. A comparator that breaks these rules leaves
/// the tree memory-safe, but its order and lookup results are unspecified.
///
/// Any `Fn(&K, &K) -> bool` closure is a comparator:
///
/// ```
/// use rbtree::{Identity, RBTree};
///
/// let mut tree = RBTree::with_comparator(Identity, |a: &i32, b: &i32| a.abs() < b.abs());
/// tree.insert_equal(-3);
/// tree.insert_equal(2);
/// tree.insert_equal(3);
/// let values: Vec<_> = tree.iter().copied().collect();
/// assert_eq!(values, [2, -3, 3]);
/// ```
pub trait Compare<K: ?Sized> {
    /// Returns `true` if `a` orders strictly before `b`.
    fn less(&self, a: &K, b: &K) -> bool;
}

impl<K: ?Sized, F> Compare<K> for F
where
    F: Fn(&K, &K) -> bool,
{
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        self(a, b)
    }
}

/// Ascending order by [`Ord`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct NaturalOrder;

impl<K: Ord + ?Sized> Compare<K> for NaturalOrder {
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        a < b
    }
}

/// Descending order by [`Ord`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct ReverseOrder;

impl<K: Ord + ?Sized> Compare<K> for ReverseOrder {
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        b < a
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn natural_and_reverse_are_mirror_images() {
        assert!(NaturalOrder.less(&1, &2));
        assert!(!NaturalOrder.less(&2, &2));
        assert!(ReverseOrder.less(&2, &1));
        assert!(!ReverseOrder.less(&1, &1));
    }

    #[test]
    fn closures_compare() {
        let by_len = |a: &&str, b: &&str| a.len() < b.len();
        assert!(by_len.less(&"ab", &"abc"));
        assert!(!by_len.less(&"abc", &"xyz"));
    }

    #[test]
    fn projections_borrow_from_the_value() {
        let pair = (5u8, "five");
        assert_eq!(*First.key(&pair), 5);
        assert_eq!(Identity.key(&pair), &pair);
    }
}
