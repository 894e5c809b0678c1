//! Frequent-itemset mining with closed-itemset semantics (Uno, Kiyomi and
//! Arimura's LCM family): an itemset is closed iff no proper superset
//! shares its support. The mining algorithm itself is a performance
//! choice, not a correctness one, as long as closed-itemset semantics
//! hold. This implementation favours a simple, obviously-correct
//! construction over LCM's prefix-preserving-closure traversal: it
//! generates frequent itemsets level-wise (Apriori-style candidate
//! generation over tid-lists, a la Eclat) and canonicalizes each one to
//! its closure, the intersection of the item sets of every transaction it
//! occurs in, before deduplicating by that closure. Two generators with
//! the same tid-list always canonicalize to the same closed itemset, so
//! the dedup step recovers exactly the closed frequent itemsets.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::ngram::ItemId;

#[derive(Debug, Clone, PartialEq)]
pub struct Itemset {
    pub items: Vec<ItemId>,
    pub support: usize,
}

/// `ceil(min_support * n_transactions)`, floored to 1.
pub fn min_support_count(min_support: f64, n_transactions: usize) -> usize {
    if n_transactions == 0 {
        return 1;
    }
    let raw = (min_support * n_transactions as f64).ceil() as usize;
    raw.max(1)
}

/// Mines closed frequent itemsets from non-empty transactions, flattened
/// into ascending-size ("level") order.
pub fn mine_closed_itemsets(transactions: &[Vec<ItemId>], min_support: f64) -> Vec<Itemset> {
    if transactions.is_empty() {
        return Vec::new();
    }

    let min_count = min_support_count(min_support, transactions.len());
    let transaction_sets: Vec<HashSet<ItemId>> =
        transactions.iter().map(|t| t.iter().copied().collect()).collect();

    // item -> sorted tid-list
    let mut item_tids: BTreeMap<ItemId, Vec<usize>> = BTreeMap::new();
    for (tid, txn) in transactions.iter().enumerate() {
        for &item in txn {
            item_tids.entry(item).or_default().push(tid);
        }
    }

    // closure(tidlist) = items common to every transaction it contains.
    let closure_of = |tids: &[usize]| -> Vec<ItemId> {
        let mut iter = tids.iter();
        let first = iter.next().expect("tidlist is never empty for a frequent itemset");
        let mut common = transaction_sets[*first].clone();
        for &tid in iter {
            common.retain(|item| transaction_sets[tid].contains(item));
        }
        let mut items: Vec<ItemId> = common.into_iter().collect();
        items.sort_unstable();
        items
    };

    // closed itemset (sorted items) -> support
    let mut closed: HashMap<Vec<ItemId>, usize> = HashMap::new();

    // Level 1: frequent singletons.
    let mut frontier: Vec<(Vec<ItemId>, Vec<usize>)> = item_tids
        .iter()
        .filter(|(_, tids)| tids.len() >= min_count)
        .map(|(&item, tids)| (vec![item], tids.clone()))
        .collect();

    for (itemset, tids) in &frontier {
        closed.entry(closure_of(tids)).or_insert(tids.len());
        let _ = itemset;
    }

    // Level k: classic Apriori join on the common (k-2)-prefix, intersecting
    // tid-lists instead of recounting support from scratch.
    while !frontier.is_empty() {
        let mut next: Vec<(Vec<ItemId>, Vec<usize>)> = Vec::new();
        for i in 0..frontier.len() {
            for j in (i + 1)..frontier.len() {
                let (a, a_tids) = &frontier[i];
                let (b, b_tids) = &frontier[j];
                let k = a.len();
                if a[..k - 1] != b[..k - 1] || a[k - 1] >= b[k - 1] {
                    continue;
                }
                let mut candidate = a.clone();
                candidate.push(b[k - 1]);

                let tids = intersect_sorted(a_tids, b_tids);
                if tids.len() >= min_count {
                    closed.entry(closure_of(&tids)).or_insert(tids.len());
                    next.push((candidate, tids));
                }
            }
        }
        frontier = next;
    }

    let mut result: Vec<Itemset> = closed
        .into_iter()
        .map(|(items, support)| Itemset { items, support })
        .collect();
    result.sort_by(|a, b| a.items.len().cmp(&b.items.len()).then_with(|| a.items.cmp(&b.items)));
    result
}

fn intersect_sorted(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut out = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}
