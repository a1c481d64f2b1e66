//! Multi-indices describing partial derivatives
//!
//! A multi-index `(a_0, ..., a_{n-1})` denotes the derivative
//! `d^{a_0} / dx_0^{a_0} ... d^{a_{n-1}} / dx_{n-1}^{a_{n-1}}`. Tabulations store derivatives
//! in a fixed order: first by total order, then, for a fixed total order, by decreasing first
//! entry, recursively. In two dimensions this is `(0,0), (1,0), (0,1), (2,0), (1,1), (0,2), ...`.
use crate::types::ElementError;
use std::fmt;

/// Binomial coefficient
fn choose(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = std::cmp::min(k, n - k);
    let mut result = 1;
    for i in 0..k {
        result = result * (n - i) / (i + 1);
    }
    result
}

/// The number of ways of writing `total` as an ordered sum of `parts` non-negative integers
fn composition_count(total: usize, parts: usize) -> usize {
    if parts == 0 {
        usize::from(total == 0)
    } else {
        choose(total + parts - 1, parts - 1)
    }
}

/// The number of multi-indices of length `tdim` with total order at most `nderivs`
pub fn derivative_count(tdim: usize, nderivs: usize) -> usize {
    choose(tdim + nderivs, tdim)
}

/// A multi-index
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MultiIndex(Vec<usize>);

impl MultiIndex {
    /// Create a multi-index
    pub fn new(entries: Vec<usize>) -> Self {
        Self(entries)
    }

    /// The multi-index of length `tdim` that denotes no derivative
    pub fn zero(tdim: usize) -> Self {
        Self(vec![0; tdim])
    }

    /// The entries of the multi-index
    pub fn entries(&self) -> &[usize] {
        &self.0
    }

    /// The number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Is the multi-index empty?
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The total order of the derivative
    pub fn order(&self) -> usize {
        self.0.iter().sum()
    }

    /// Split into the multi-indices of two disjoint blocks of coordinates
    ///
    /// The first `dim_a` entries form the first multi-index and the last `dim_b` entries the
    /// second. As the blocks are independent variables, the derivative of a product
    /// `f(x)g(y)` by this multi-index is the product of the derivatives of `f` and `g` by the
    /// two parts: the Leibniz rule has no cross terms.
    pub fn split(
        &self,
        dim_a: usize,
        dim_b: usize,
    ) -> Result<(MultiIndex, MultiIndex), ElementError> {
        if self.len() != dim_a + dim_b {
            return Err(ElementError::DimensionMismatch {
                expected: dim_a + dim_b,
                actual: self.len(),
            });
        }
        Ok(self.split_at(dim_a))
    }

    fn split_at(&self, dim_a: usize) -> (MultiIndex, MultiIndex) {
        let (a, b) = self.0.split_at(dim_a);
        (Self(a.to_vec()), Self(b.to_vec()))
    }

    /// Join two multi-indices; this is the inverse of `split`
    pub fn concat(&self, other: &MultiIndex) -> MultiIndex {
        let mut entries = self.0.clone();
        entries.extend_from_slice(&other.0);
        Self(entries)
    }

    /// The position of this multi-index in the derivative ordering
    pub fn index(&self) -> usize {
        let order = self.order();
        let lower = if order == 0 {
            0
        } else {
            derivative_count(self.len(), order - 1)
        };
        lower + rank_within_order(&self.0, order)
    }
}

/// The position of a multi-index among the multi-indices of the same length and total order
fn rank_within_order(entries: &[usize], total: usize) -> usize {
    if entries.len() <= 1 {
        return 0;
    }
    let parts = entries.len() - 1;
    let preceding = (entries[0] + 1..=total)
        .map(|first| composition_count(total - first, parts))
        .sum::<usize>();
    preceding + rank_within_order(&entries[1..], total - entries[0])
}

impl fmt::Display for MultiIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{e}")?;
        }
        write!(f, ")")
    }
}

impl From<Vec<usize>> for MultiIndex {
    fn from(entries: Vec<usize>) -> Self {
        Self(entries)
    }
}

impl From<&[usize]> for MultiIndex {
    fn from(entries: &[usize]) -> Self {
        Self(entries.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for MultiIndex {
    fn from(entries: [usize; N]) -> Self {
        Self(entries.to_vec())
    }
}

/// Iterator over all multi-indices of a given length up to a given total order
///
/// The multi-indices are produced in the derivative ordering, so the `i`th item has index `i`.
#[derive(Debug, Clone)]
pub struct AllOrders {
    nderivs: usize,
    next: Option<Vec<usize>>,
}

/// All multi-indices of length `tdim` whose total order is at most `nderivs`
pub fn all_orders_up_to(nderivs: usize, tdim: usize) -> AllOrders {
    AllOrders {
        nderivs,
        next: Some(vec![0; tdim]),
    }
}

impl AllOrders {
    fn successor(&self, mut entries: Vec<usize>) -> Option<Vec<usize>> {
        let n = entries.len();
        if n == 0 {
            return None;
        }
        if let Some(i) = (0..n - 1).rev().find(|i| entries[*i] > 0) {
            // Move one unit out of entry i and gather everything after it into entry i + 1
            entries[i] -= 1;
            let rest = entries[i + 1..].iter().sum::<usize>();
            for e in entries.iter_mut().skip(i + 1) {
                *e = 0;
            }
            entries[i + 1] = rest + 1;
            Some(entries)
        } else {
            let order = entries[n - 1];
            if order >= self.nderivs {
                None
            } else {
                let mut first = vec![0; n];
                first[0] = order + 1;
                Some(first)
            }
        }
    }
}

impl Iterator for AllOrders {
    type Item = MultiIndex;

    fn next(&mut self) -> Option<MultiIndex> {
        let current = self.next.take()?;
        self.next = self.successor(current.clone());
        Some(MultiIndex(current))
    }
}

/// The derivatives of the two factors of a tensor product that make up a derivative of the product
///
/// The two factors depend on disjoint blocks of coordinates, so the only term of the Leibniz rule
/// is `alpha` split into its first `dim_a` and last `dim_b` entries.
pub fn leibniz_splits(
    alpha: &MultiIndex,
    dim_a: usize,
    dim_b: usize,
) -> Result<(MultiIndex, MultiIndex), ElementError> {
    alpha.split(dim_a, dim_b)
}

/// Split every multi-index of length `dim_a + dim_b` and order at most `nderivs` into blocks
///
/// Each item is `(alpha, alpha_a, alpha_b)` where `alpha_a` holds the first `dim_a` entries of
/// `alpha` and `alpha_b` the remaining `dim_b`. Items are produced in the derivative ordering of
/// `alpha`.
pub fn block_splits(
    nderivs: usize,
    dim_a: usize,
    dim_b: usize,
) -> impl Iterator<Item = (MultiIndex, MultiIndex, MultiIndex)> + Clone {
    all_orders_up_to(nderivs, dim_a + dim_b).map(move |alpha| {
        let (alpha_a, alpha_b) = alpha.split_at(dim_a);
        (alpha, alpha_a, alpha_b)
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_derivative_count() {
        assert_eq!(derivative_count(1, 0), 1);
        assert_eq!(derivative_count(1, 3), 4);
        assert_eq!(derivative_count(2, 2), 6);
        assert_eq!(derivative_count(3, 1), 4);
        assert_eq!(derivative_count(3, 2), 10);
        assert_eq!(derivative_count(4, 3), 35);
    }

    #[test]
    fn test_ordering_2d() {
        let orders = all_orders_up_to(2, 2)
            .map(|a| a.entries().to_vec())
            .collect::<Vec<_>>();
        assert_eq!(
            orders,
            vec![
                vec![0, 0],
                vec![1, 0],
                vec![0, 1],
                vec![2, 0],
                vec![1, 1],
                vec![0, 2]
            ]
        );
    }

    #[test]
    fn test_ordering_3d() {
        let orders = all_orders_up_to(1, 3)
            .map(|a| a.entries().to_vec())
            .collect::<Vec<_>>();
        assert_eq!(
            orders,
            vec![vec![0, 0, 0], vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]]
        );
    }

    #[test]
    fn test_index_matches_iteration() {
        for tdim in 1..5 {
            for nderivs in 0..5 {
                let mut count = 0;
                for (i, alpha) in all_orders_up_to(nderivs, tdim).enumerate() {
                    assert_eq!(alpha.len(), tdim);
                    assert!(alpha.order() <= nderivs);
                    assert_eq!(alpha.index(), i);
                    count += 1;
                }
                assert_eq!(count, derivative_count(tdim, nderivs));
            }
        }
    }

    #[test]
    fn test_restartable() {
        let orders = all_orders_up_to(3, 2);
        let first = orders.clone().collect::<Vec<_>>();
        let second = orders.collect::<Vec<_>>();
        assert_eq!(first, second);
    }

    #[test]
    fn test_order_zero() {
        let orders = all_orders_up_to(0, 3).collect::<Vec<_>>();
        assert_eq!(orders, vec![MultiIndex::zero(3)]);
    }

    #[test]
    fn test_split() {
        let alpha = MultiIndex::from([1, 0, 2]);
        let (a, b) = alpha.split(2, 1).unwrap();
        assert_eq!(a, MultiIndex::from([1, 0]));
        assert_eq!(b, MultiIndex::from([2]));
        assert_eq!(a.concat(&b), alpha);

        let (a, b) = alpha.split(1, 2).unwrap();
        assert_eq!(a, MultiIndex::from([1]));
        assert_eq!(b, MultiIndex::from([0, 2]));

        assert_eq!(
            alpha.split(1, 1),
            Err(ElementError::DimensionMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn test_leibniz_splits() {
        let (a, b) = leibniz_splits(&MultiIndex::from([0, 2, 1]), 2, 1).unwrap();
        assert_eq!(a, MultiIndex::from([0, 2]));
        assert_eq!(b, MultiIndex::from([1]));
        assert!(leibniz_splits(&MultiIndex::from([0, 2, 1]), 1, 1).is_err());
    }

    #[test]
    fn test_block_splits() {
        let splits = block_splits(1, 2, 1).collect::<Vec<_>>();
        assert_eq!(splits.len(), 4);
        for (i, (alpha, a, b)) in splits.iter().enumerate() {
            assert_eq!(alpha.index(), i);
            assert_eq!(a.len(), 2);
            assert_eq!(b.len(), 1);
            assert_eq!(&a.concat(b), alpha);
        }
        assert_eq!(splits[3].1, MultiIndex::from([0, 0]));
        assert_eq!(splits[3].2, MultiIndex::from([1]));
    }

    #[test]
    fn test_display() {
        assert_eq!(MultiIndex::from([1, 0, 2]).to_string(), "(1, 0, 2)");
    }
}
