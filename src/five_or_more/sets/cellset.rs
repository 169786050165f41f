use crate::five_or_more::prelude::*;
use itertools::Itertools;

type SubSet = u64;
const SUBSET_SIZE: usize = SubSet::BITS as usize;

/// A set of cell indices, stored as a growable bitset. Iteration is always in ascending index order.
#[derive(Clone, Debug, Default)]
pub struct CellSet(Vec<SubSet>);

impl CellSet {
    #[inline]
    fn _index(value: usize) -> (usize, usize) {
        (value / SUBSET_SIZE, value % SUBSET_SIZE)
    }

    /// An empty set with room for `cells` indices.
    pub fn with_capacity(cells: usize) -> CellSet {
        CellSet(vec![0; cells.div_ceil(SUBSET_SIZE)])
    }

    /// Gets the `n`th smallest index in the set.
    pub fn nth(&self, n: usize) -> Option<usize> {
        self.iter().nth(n)
    }

    /// Notates the set as a comma-separated list of indices.
    pub fn notate(&self) -> String {
        self.iter().join(",")
    }

    fn _grow(&mut self, words: usize) {
        if self.0.len() < words {
            self.0.resize(words, 0);
        }
    }
}

impl PartialEq for CellSet {
    fn eq(&self, other: &Self) -> bool {
        // sets of different capacity are equal if their extra words are empty
        let longest = self.0.len().max(other.0.len());
        (0..longest).all(|i| self.0.get(i).copied().unwrap_or(0) == other.0.get(i).copied().unwrap_or(0))
    }
}
impl Eq for CellSet {}

impl SetOps<usize> for CellSet {
    fn contains(&self, value: &usize) -> bool {
        let (ia, ib) = CellSet::_index(*value);
        self.0.get(ia).is_some_and(|sub| (sub >> ib) & 1 == 1)
    }

    fn len(&self) -> usize {
        self.0.iter().map(|sub| sub.count_ones() as usize).sum()
    }

    fn iter(&self) -> impl Iterator<Item = usize> {
        CellSetIterator::new(&self.0)
    }

    fn insert(&mut self, value: &usize) -> &mut Self {
        let (ia, ib) = CellSet::_index(*value);
        self._grow(ia + 1);
        self.0[ia] |= (1 as SubSet) << ib;
        self
    }

    fn remove(&mut self, value: &usize) -> &mut Self {
        let (ia, ib) = CellSet::_index(*value);
        if let Some(sub) = self.0.get_mut(ia) {
            *sub &= !((1 as SubSet) << ib);
        }
        self
    }

    fn union(&self, other: &Self) -> Self {
        let mut s = self.clone();
        s.union_inplace(other);
        s
    }

    fn union_inplace(&mut self, other: &Self) -> &mut Self {
        self._grow(other.0.len());
        self.0.iter_mut().zip(other.0.iter()).for_each(|(l, r)| {
            *l |= r;
        });
        self
    }
}

impl FromIterator<usize> for CellSet {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        let mut s = CellSet::default();
        iter.into_iter().for_each(|i| {
            s.insert(&i);
        });
        s
    }
}

pub struct CellSetIterator<'a> {
    data: &'a [SubSet],
    mask: SubSet,
    current_subset: usize,
}

impl<'a> CellSetIterator<'a> {
    pub fn new<'d>(data: &'d [SubSet]) -> CellSetIterator<'d> {
        CellSetIterator { data, mask: SubSet::MAX, current_subset: 0 }
    }
}

impl<'a> Iterator for CellSetIterator<'a> {
    type Item = usize;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current_subset >= self.data.len() {
                return None;
            }

            let subject = self.data[self.current_subset] & self.mask;
            if subject == 0 {
                self.current_subset += 1;
                self.mask = SubSet::MAX;
                continue;
            }

            let tz = subject.trailing_zeros() as usize;
            self.mask ^= (1 as SubSet) << tz;
            return Some(self.current_subset * SUBSET_SIZE + tz);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::SetOps;

    use super::CellSet;
    use std::collections::BTreeSet;

    #[test]
    fn iterate() {
        let elements = BTreeSet::from_iter([0, 1, 4, 63, 64, 80, 144].into_iter());

        let mut s = CellSet::default();
        elements.iter().for_each(|i| { s.insert(i); });
        let recovered = s.iter().collect::<Vec<_>>();

        assert_eq!(recovered, elements.into_iter().collect::<Vec<_>>());
        assert_eq!(s.len(), 7);
        assert_eq!(s.nth(4), Some(64));
    }

    #[test]
    fn set_algebra() {
        let lhs = CellSet::from_iter([1, 2, 3, 70]);
        let rhs = CellSet::from_iter([3, 4, 100]);

        assert_eq!(lhs.union(&rhs), CellSet::from_iter([1, 2, 3, 4, 70, 100]));

        let mut s = lhs.clone();
        s.remove(&70).remove(&1000);
        assert!(!s.contains(&70));
        assert_eq!(s, CellSet::from_iter([1, 2, 3]));
    }

    #[test]
    fn capacity_does_not_affect_equality() {
        let mut s = CellSet::with_capacity(81);
        assert!(s.is_empty());
        assert_eq!(s, CellSet::default());
        s.insert(&5);
        assert_eq!(s, CellSet::from_iter([5]));
        assert_eq!(CellSet::from_iter(0..3).notate(), "0,1,2");
    }
}
