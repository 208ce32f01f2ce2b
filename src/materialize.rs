//! Endpoints that drain a cursor into a container or fold it into a value
//!
//! Every endpoint starts the cursor if needed and then works from the value
//! currently exposed, so a cursor that has already been advanced contributes
//! its current value and everything after it. Endpoints borrow the cursor,
//! which stays observable afterwards (a fully drained cursor is exhausted).
//! A failure raised while advancing aborts the endpoint and is returned to
//! the caller; no partial result is produced.

use crate::cursor::Cursor;
use crate::error::Result;
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::Hash;

/// Visit the values of `cursor` in order until `visit` returns `false` or the
/// cursor is exhausted
pub(crate) fn visit<C, F>(cursor: &mut C, mut visit: F) -> Result<()>
where
    C: Cursor,
    F: FnMut(&C::Item) -> bool,
{
    cursor.start()?;
    while cursor.has_current() {
        if !visit(cursor.current()?) {
            return Ok(());
        }
        cursor.next()?;
    }
    Ok(())
}

/// Defines how a container is built by draining a cursor
pub trait FromCursor<T>: Sized {
    fn from_cursor<C>(cursor: &mut C) -> Result<Self>
    where
        C: Cursor<Item = T>;
}

impl<T: Clone> FromCursor<T> for Vec<T> {
    fn from_cursor<C>(cursor: &mut C) -> Result<Self>
    where
        C: Cursor<Item = T>,
    {
        let mut vec = Vec::new();
        visit(cursor, |value| {
            vec.push(value.clone());
            true
        })?;
        Ok(vec)
    }
}

impl<T: Clone> FromCursor<T> for VecDeque<T> {
    fn from_cursor<C>(cursor: &mut C) -> Result<Self>
    where
        C: Cursor<Item = T>,
    {
        let mut deque = VecDeque::new();
        visit(cursor, |value| {
            deque.push_back(value.clone());
            true
        })?;
        Ok(deque)
    }
}

impl<T> FromCursor<T> for HashSet<T>
where
    T: Clone + Eq + Hash,
{
    fn from_cursor<C>(cursor: &mut C) -> Result<Self>
    where
        C: Cursor<Item = T>,
    {
        let mut set = HashSet::new();
        visit(cursor, |value| {
            if !set.contains(value) {
                set.insert(value.clone());
            }
            true
        })?;
        Ok(set)
    }
}

impl<T> FromCursor<T> for BTreeSet<T>
where
    T: Clone + Ord,
{
    fn from_cursor<C>(cursor: &mut C) -> Result<Self>
    where
        C: Cursor<Item = T>,
    {
        let mut set = BTreeSet::new();
        visit(cursor, |value| {
            if !set.contains(value) {
                set.insert(value.clone());
            }
            true
        })?;
        Ok(set)
    }
}

fn extreme_by<C, F>(cursor: &mut C, mut compare: F, keep: Ordering) -> Result<Option<C::Item>>
where
    C: Cursor,
    C::Item: Clone,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    let mut best: Option<C::Item> = None;
    visit(cursor, |value| {
        let replace = match &best {
            None => true,
            Some(current) => compare(value, current) == keep,
        };
        if replace {
            best = Some(value.clone());
        }
        true
    })?;
    Ok(best)
}

/// Extension trait adding materialization endpoints to all cursors
pub trait MaterializeExt: Cursor + Sized {
    /// Drain into any container implementing [`FromCursor`]
    fn collect_into<B>(&mut self) -> Result<B>
    where
        B: FromCursor<Self::Item>,
    {
        B::from_cursor(self)
    }

    fn to_vec(&mut self) -> Result<Vec<Self::Item>>
    where
        Self::Item: Clone,
    {
        Vec::from_cursor(self)
    }

    fn to_set(&mut self) -> Result<HashSet<Self::Item>>
    where
        Self::Item: Clone + Eq + Hash,
    {
        HashSet::from_cursor(self)
    }

    fn to_btree_set(&mut self) -> Result<BTreeSet<Self::Item>>
    where
        Self::Item: Clone + Ord,
    {
        BTreeSet::from_cursor(self)
    }

    /// Drain into a map, later values overwriting earlier ones with the same key
    fn to_map<K, V, KF, VF>(&mut self, mut key_fn: KF, mut value_fn: VF) -> Result<HashMap<K, V>>
    where
        K: Eq + Hash,
        KF: FnMut(&Self::Item) -> K,
        VF: FnMut(&Self::Item) -> V,
    {
        let mut map = HashMap::new();
        visit(self, |value| {
            map.insert(key_fn(value), value_fn(value));
            true
        })?;
        Ok(map)
    }

    /// Number of values surfaced until exhaustion
    fn count(&mut self) -> Result<usize> {
        let mut count = 0;
        visit(self, |_| {
            count += 1;
            true
        })?;
        Ok(count)
    }

    /// The first value, leaving the cursor positioned on it
    fn first(&mut self) -> Result<Option<Self::Item>>
    where
        Self::Item: Clone,
    {
        self.first_matching(|_| true)
    }

    /// The first value matching `predicate`, leaving the cursor positioned on it
    fn first_matching<P>(&mut self, mut predicate: P) -> Result<Option<Self::Item>>
    where
        Self::Item: Clone,
        P: FnMut(&Self::Item) -> bool,
    {
        let mut found = None;
        visit(self, |value| {
            if predicate(value) {
                found = Some(value.clone());
                return false;
            }
            true
        })?;
        Ok(found)
    }

    fn last(&mut self) -> Result<Option<Self::Item>>
    where
        Self::Item: Clone,
    {
        self.last_matching(|_| true)
    }

    fn last_matching<P>(&mut self, mut predicate: P) -> Result<Option<Self::Item>>
    where
        Self::Item: Clone,
        P: FnMut(&Self::Item) -> bool,
    {
        let mut found = None;
        visit(self, |value| {
            if predicate(value) {
                found = Some(value.clone());
            }
            true
        })?;
        Ok(found)
    }

    /// Whether `needle` is surfaced, stopping at the first match
    fn contains(&mut self, needle: &Self::Item) -> Result<bool>
    where
        Self::Item: PartialEq,
    {
        self.contains_matching(|value| value == needle)
    }

    fn contains_matching<P>(&mut self, mut predicate: P) -> Result<bool>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut found = false;
        visit(self, |value| {
            found = predicate(value);
            !found
        })?;
        Ok(found)
    }

    /// The smallest value according to `compare`, the earliest one on ties
    fn minimum<F>(&mut self, compare: F) -> Result<Option<Self::Item>>
    where
        Self::Item: Clone,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        extreme_by(self, compare, Ordering::Less)
    }

    /// The largest value according to `compare`, the earliest one on ties
    fn maximum<F>(&mut self, compare: F) -> Result<Option<Self::Item>>
    where
        Self::Item: Clone,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        extreme_by(self, compare, Ordering::Greater)
    }

    fn min(&mut self) -> Result<Option<Self::Item>>
    where
        Self::Item: Clone + Ord,
    {
        self.minimum(Ord::cmp)
    }

    fn max(&mut self) -> Result<Option<Self::Item>>
    where
        Self::Item: Clone + Ord,
    {
        self.maximum(Ord::cmp)
    }
}

/// Implement MaterializeExt for all cursors
impl<C: Cursor> MaterializeExt for C {}
