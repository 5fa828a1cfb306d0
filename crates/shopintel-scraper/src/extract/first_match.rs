use std::collections::btree_map::{BTreeMap, Entry};

/// Fills `key` with the value produced by `resolve`, unless `key` already
/// holds a value. `resolve` is only called for unresolved keys, and a `None`
/// result leaves the key open for a later candidate.
///
/// Returns `true` when this call filled the key.
pub(crate) fn resolve_if_absent<K, V, F>(map: &mut BTreeMap<K, V>, key: K, resolve: F) -> bool
where
    K: Ord,
    F: FnOnce() -> Option<V>,
{
    match map.entry(key) {
        Entry::Occupied(_) => false,
        Entry::Vacant(slot) => match resolve() {
            Some(value) => {
                slot.insert(value);
                true
            }
            None => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_value_wins() {
        let mut map = BTreeMap::new();
        assert!(resolve_if_absent(&mut map, "contact", || Some("/a")));
        assert!(!resolve_if_absent(&mut map, "contact", || Some("/b")));
        assert_eq!(map.get("contact"), Some(&"/a"));
    }

    #[test]
    fn resolver_not_called_once_resolved() {
        let mut map = BTreeMap::new();
        map.insert(1, "x");
        let filled = resolve_if_absent(&mut map, 1, || -> Option<&str> {
            panic!("resolver must not run for a resolved key")
        });
        assert!(!filled);
    }

    #[test]
    fn none_leaves_key_open() {
        let mut map: BTreeMap<&str, &str> = BTreeMap::new();
        assert!(!resolve_if_absent(&mut map, "blog", || None));
        assert!(map.is_empty());
        assert!(resolve_if_absent(&mut map, "blog", || Some("/blog")));
    }
}
