//! Client-side grouping for batched child lookups
//!
//! Batched repository queries return `(parent_id, child)` pairs for every parent in
//! the batch. Parents without children never appear in the grouped map, so readers go
//! through [`take_children`] which defaults a miss to an empty list.

use std::collections::HashMap;

/// Children grouped under their parent's id.
pub type ChildrenByParent<C> = HashMap<i64, Vec<C>>;

/// Group `(parent_id, child)` rows by parent, keeping row order within each group.
pub fn group_by_parent<C>(rows: impl IntoIterator<Item = (i64, C)>) -> ChildrenByParent<C> {
    let mut grouped: ChildrenByParent<C> = HashMap::new();
    for (parent_id, child) in rows {
        grouped.entry(parent_id).or_default().push(child);
    }
    grouped
}

/// Remove and return the children of `parent_id`, or an empty list on a miss.
pub fn take_children<C>(grouped: &mut ChildrenByParent<C>, parent_id: i64) -> Vec<C> {
    grouped.remove(&parent_id).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: i64 = 1;
    const B: i64 = 2;
    const C: i64 = 3;

    #[test]
    fn parents_without_children_are_absent() {
        let grouped = group_by_parent(vec![(A, "x"), (C, "y"), (C, "z")]);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[&A], vec!["x"]);
        assert_eq!(grouped[&C], vec!["y", "z"]);
        assert!(!grouped.contains_key(&B));
    }

    #[test]
    fn empty_rows_give_empty_map() {
        let grouped: ChildrenByParent<&str> = group_by_parent(Vec::new());
        assert!(grouped.is_empty());
    }

    #[test]
    fn take_children_defaults_to_empty() {
        let mut grouped = group_by_parent(vec![(A, "x"), (C, "y"), (C, "z")]);

        assert_eq!(take_children(&mut grouped, A), vec!["x"]);
        assert!(take_children(&mut grouped, B).is_empty());
        assert_eq!(take_children(&mut grouped, C), vec!["y", "z"]);

        // taken entries are gone
        assert!(take_children(&mut grouped, A).is_empty());
        assert!(grouped.is_empty());
    }
}
