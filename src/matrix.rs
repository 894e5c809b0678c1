//! Containment predicate and incidence-matrix construction.

use ndarray::Array2;

use crate::itemset::Itemset;
use crate::ngram::ItemId;

/// "Transaction T contains itemset I": not general subset containment,
/// I must appear as a contiguous, prefix-aligned subrun of T starting at
/// T's first occurrence of I's first item. Both T and I are sorted
/// ascending, which is what makes this well-defined, but it is *not*
/// equivalent to set inclusion; do not "optimize" it into one.
pub fn contains(transaction: &[ItemId], itemset: &[ItemId]) -> bool {
    let Some(first) = itemset.first() else {
        return true;
    };
    let Some(start) = transaction.iter().position(|item| item == first) else {
        return false;
    };
    let end = (start + itemset.len() - 1).min(transaction.len() - 1);
    transaction[start..=end] == *itemset
}

/// Builds the dense `(|itemsets|, |non-empty transactions|)` 0/1 matrix.
/// Returns `None` when either dimension is zero, signalling the caller to
/// skip the SVD and zero-fill salience instead.
pub fn build_incidence_matrix(itemsets: &[Itemset], transactions: &[Vec<ItemId>]) -> Option<Array2<f64>> {
    let rows = itemsets.len();
    let cols = transactions.len();
    if rows == 0 || cols == 0 {
        return None;
    }

    let mut matrix = Array2::<f64>::zeros((rows, cols));
    for (i, itemset) in itemsets.iter().enumerate() {
        for (j, transaction) in transactions.iter().enumerate() {
            if contains(transaction, &itemset.items) {
                matrix[[i, j]] = 1.0;
            }
        }
    }
    Some(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_at_start() {
        assert!(contains(&[1, 2, 3], &[1, 2]));
    }

    #[test]
    fn aligned_in_middle() {
        assert!(contains(&[5, 1, 2, 9], &[1, 2]));
    }

    #[test]
    fn missing_first_item_is_not_contained() {
        assert!(!contains(&[5, 9], &[1, 2]));
    }

    #[test]
    fn truncated_tail_does_not_match() {
        // itemset's first item is the transaction's last: the slice gets
        // truncated to length 1 and can't equal a length-2 itemset.
        assert!(!contains(&[1, 2, 3], &[3, 4]));
    }

    #[test]
    fn not_general_subset_containment() {
        // {1, 3} is a subset of {1, 2, 3} in the set sense, but is not a
        // contiguous run starting at the first occurrence of 1.
        assert!(!contains(&[1, 2, 3], &[1, 3]));
    }

    #[test]
    fn empty_itemset_is_trivially_contained() {
        assert!(contains(&[1, 2, 3], &[]));
    }

    #[test]
    fn zero_itemsets_short_circuits() {
        assert!(build_incidence_matrix(&[], &[vec![1, 2]]).is_none());
    }

    #[test]
    fn zero_transactions_short_circuits() {
        let itemsets = vec![Itemset { items: vec![1], support: 1 }];
        assert!(build_incidence_matrix(&itemsets, &[]).is_none());
    }

    #[test]
    fn matrix_entries_reflect_containment() {
        let itemsets = vec![
            Itemset { items: vec![1, 2], support: 2 },
            Itemset { items: vec![3], support: 1 },
        ];
        let transactions = vec![vec![1, 2, 3], vec![1, 2]];
        let matrix = build_incidence_matrix(&itemsets, &transactions).unwrap();
        assert_eq!(matrix.shape(), &[2, 2]);
        assert_eq!(matrix[[0, 0]], 1.0);
        assert_eq!(matrix[[0, 1]], 1.0);
        assert_eq!(matrix[[1, 0]], 1.0);
        assert_eq!(matrix[[1, 1]], 0.0);
    }
}
