//! Dictionary helpers over `BTreeMap`, so iteration order is stable.

use std::collections::BTreeMap;

/// Merges `overlay` into a copy of `base`. On key collisions the overlay
/// value wins only when `overwrite` is set.
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
/// use u_toolkit::collections::dict_merge;
/// let base = BTreeMap::from([("hp", 10), ("mp", 5)]);
/// let overlay = BTreeMap::from([("hp", 99), ("xp", 1)]);
/// let kept = dict_merge(&base, &overlay, false);
/// assert_eq!(kept["hp"], 10);
/// assert_eq!(kept["xp"], 1);
/// assert_eq!(dict_merge(&base, &overlay, true)["hp"], 99);
/// ```
pub fn dict_merge<K: Ord + Clone, V: Clone>(
    base: &BTreeMap<K, V>,
    overlay: &BTreeMap<K, V>,
    overwrite: bool,
) -> BTreeMap<K, V> {
    let mut out = base.clone();
    for (k, v) in overlay {
        if overwrite || !out.contains_key(k) {
            out.insert(k.clone(), v.clone());
        }
    }
    out
}

/// Swaps keys and values. When several keys share a value, the greatest
/// key wins (keys are visited in ascending order).
pub fn dict_invert<K: Ord + Clone, V: Ord + Clone>(map: &BTreeMap<K, V>) -> BTreeMap<V, K> {
    map.iter().map(|(k, v)| (v.clone(), k.clone())).collect()
}

/// Entries whose key is listed in `keys`.
pub fn dict_pick<K: Ord + Clone, V: Clone>(map: &BTreeMap<K, V>, keys: &[K]) -> BTreeMap<K, V> {
    keys.iter()
        .filter_map(|k| map.get(k).map(|v| (k.clone(), v.clone())))
        .collect()
}

/// Entries whose key is not listed in `keys`.
pub fn dict_omit<K: Ord + Clone, V: Clone>(map: &BTreeMap<K, V>, keys: &[K]) -> BTreeMap<K, V> {
    map.iter()
        .filter(|(k, _)| !keys.contains(*k))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// All keys mapped to `value`, ascending.
pub fn dict_keys_for_value<K: Ord + Clone, V: PartialEq>(map: &BTreeMap<K, V>, value: &V) -> Vec<K> {
    map.iter()
        .filter(|(_, v)| *v == value)
        .map(|(k, _)| k.clone())
        .collect()
}

/// Value for `key`, or `default` when absent.
pub fn dict_get_or<K: Ord, V: Clone>(map: &BTreeMap<K, V>, key: &K, default: V) -> V {
    map.get(key).cloned().unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> BTreeMap<&'static str, i32> {
        BTreeMap::from([("str", 3), ("dex", 5), ("int", 3)])
    }

    #[test]
    fn test_merge() {
        let overlay = BTreeMap::from([("str", 9), ("luck", 1)]);
        let kept = dict_merge(&stats(), &overlay, false);
        assert_eq!(kept["str"], 3);
        assert_eq!(kept["luck"], 1);
        assert_eq!(kept.len(), 4);
        let replaced = dict_merge(&stats(), &overlay, true);
        assert_eq!(replaced["str"], 9);
    }

    #[test]
    fn test_invert() {
        let inv = dict_invert(&stats());
        assert_eq!(inv.len(), 2);
        // "str" > "int", so it wins the shared value 3
        assert_eq!(inv[&3], "str");
        assert_eq!(inv[&5], "dex");
    }

    #[test]
    fn test_pick_omit() {
        let picked = dict_pick(&stats(), &["dex", "missing"]);
        assert_eq!(picked, BTreeMap::from([("dex", 5)]));
        let omitted = dict_omit(&stats(), &["dex"]);
        assert_eq!(omitted, BTreeMap::from([("int", 3), ("str", 3)]));
    }

    #[test]
    fn test_keys_for_value() {
        assert_eq!(dict_keys_for_value(&stats(), &3), vec!["int", "str"]);
        assert!(dict_keys_for_value(&stats(), &42).is_empty());
    }

    #[test]
    fn test_get_or() {
        assert_eq!(dict_get_or(&stats(), &"dex", 0), 5);
        assert_eq!(dict_get_or(&stats(), &"luck", 0), 0);
    }
}
