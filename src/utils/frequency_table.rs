use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counts kept in first-seen order.
///
/// Absent keys are reported as absent (`get`) or as an explicit zero
/// (`count`); nothing is inserted by a lookup.
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    entries: Vec<(K, usize)>,
    positions: HashMap<K, usize>,
}

impl<K> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<K: Copy + Eq + Hash> FrequencyTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, key: K) {
        self.add(key, 1);
    }

    pub fn add(&mut self, key: K, amount: usize) {
        match self.positions.get(&key) {
            Some(&pos) => self.entries[pos].1 += amount,
            None => {
                self.positions.insert(key, self.entries.len());
                self.entries.push((key, amount));
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<usize> {
        self.positions.get(key).map(|&pos| self.entries[pos].1)
    }

    pub fn count(&self, key: &K) -> usize {
        self.get(key).unwrap_or(0)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|&(_, c)| c).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, usize)> + '_ {
        self.entries.iter().copied()
    }

    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.entries.iter().map(|&(k, _)| k)
    }

    /// Key with the highest count; on ties the key seen first wins.
    pub fn most_frequent(&self) -> Option<(K, usize)> {
        argmax_first(self.iter())
    }
}

impl<K: Copy + Eq + Hash> FromIterator<K> for FrequencyTable<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = Self::new();
        for key in iter {
            table.increment(key);
        }
        table
    }
}

/// Order-stable max-reduction: only a strictly greater score replaces the
/// current best, so the earliest maximum is kept.
pub fn argmax_first<K, S, I>(items: I) -> Option<(K, S)>
where
    S: PartialOrd,
    I: IntoIterator<Item = (K, S)>,
{
    let mut best: Option<(K, S)> = None;
    for (key, score) in items {
        let replace = match &best {
            Some((_, best_score)) => score > *best_score,
            None => true,
        };
        if replace {
            best = Some((key, score));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_keep_first_seen_order() {
        let table: FrequencyTable<i32> = [3, 1, 3, 2, 1, 3].into_iter().collect();
        let entries: Vec<_> = table.iter().collect();
        assert_eq!(entries, vec![(3, 3), (1, 2), (2, 1)]);
        assert_eq!(table.total(), 6);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn absent_keys_are_distinguished_from_zero() {
        let mut table = FrequencyTable::new();
        table.add(7, 0);
        assert_eq!(table.get(&7), Some(0));
        assert!(table.contains(&7));
        assert_eq!(table.get(&8), None);
        assert_eq!(table.count(&8), 0);
        assert!(!table.contains(&8));
    }

    #[test]
    fn most_frequent_breaks_ties_by_first_seen() {
        let table: FrequencyTable<i32> = [5, 9, 9, 5].into_iter().collect();
        assert_eq!(table.most_frequent(), Some((5, 2)));

        let table: FrequencyTable<i32> = [9, 5, 5, 9].into_iter().collect();
        assert_eq!(table.most_frequent(), Some((9, 2)));
    }

    #[test]
    fn most_frequent_of_empty_table_is_none() {
        let table: FrequencyTable<i32> = FrequencyTable::new();
        assert!(table.is_empty());
        assert_eq!(table.most_frequent(), None);
    }

    #[test]
    fn argmax_first_keeps_earliest_maximum() {
        let best = argmax_first(vec![("a", 1.0), ("b", 3.0), ("c", 3.0), ("d", 2.0)]);
        assert_eq!(best, Some(("b", 3.0)));
    }

    #[test]
    fn argmax_first_handles_negative_scores() {
        let best = argmax_first(vec![(0, -10.5), (1, -2.25), (2, -7.0)]);
        assert_eq!(best, Some((1, -2.25)));
    }
}
