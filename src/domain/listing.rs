//! Derivations over server-ordered content lists.

/// Number of items shown in summary teasers.
pub const TEASER_LEN: usize = 3;

/// The first [`TEASER_LEN`] items, in list order.
pub fn teaser<T>(items: &[T]) -> &[T] {
    &items[..items.len().min(TEASER_LEN)]
}

/// Items adjacent to the current entry of an ordered list.
#[derive(Debug, PartialEq, Eq)]
pub struct Neighbors<'a, T> {
    pub prev: Option<&'a T>,
    pub next: Option<&'a T>,
}

impl<T> Neighbors<'_, T> {
    pub fn none() -> Self {
        Self {
            prev: None,
            next: None,
        }
    }
}

// Manual impls: derived Clone/Copy would require `T: Copy`.
impl<T> Clone for Neighbors<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Neighbors<'_, T> {}

/// Neighbors of the entry at `index`; an absent index yields none.
pub fn neighbors_at<T>(items: &[T], index: Option<usize>) -> Neighbors<'_, T> {
    match index {
        Some(index) if index < items.len() => Neighbors {
            prev: index.checked_sub(1).and_then(|prev| items.get(prev)),
            next: items.get(index + 1),
        },
        _ => Neighbors::none(),
    }
}

/// Neighbors of the first entry matching `is_current`.
pub fn neighbors_by<T, F>(items: &[T], is_current: F) -> Neighbors<'_, T>
where
    F: FnMut(&T) -> bool,
{
    neighbors_at(items, items.iter().position(is_current))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn teaser_takes_at_most_three_in_order() {
        let lists: [&[u32]; 5] = [&[], &[1], &[1, 2], &[1, 2, 3], &[1, 2, 3, 4, 5]];
        for list in lists {
            let slice = teaser(list);
            assert_eq!(slice.len(), list.len().min(3));
            assert_eq!(slice, &list[..slice.len()]);
        }
    }

    #[test]
    fn first_entry_has_no_prev() {
        let items = ["a", "b", "c"];
        let found = neighbors_by(&items, |item| *item == "a");
        assert_eq!(found.prev, None);
        assert_eq!(found.next, Some(&"b"));
    }

    #[test]
    fn last_entry_has_no_next() {
        let items = ["a", "b", "c"];
        let found = neighbors_by(&items, |item| *item == "c");
        assert_eq!(found.prev, Some(&"b"));
        assert_eq!(found.next, None);
    }

    #[test]
    fn middle_entry_has_both() {
        let items = ["a", "b", "c"];
        let found = neighbors_by(&items, |item| *item == "b");
        assert_eq!(found.prev, Some(&"a"));
        assert_eq!(found.next, Some(&"c"));
    }

    #[test]
    fn absent_entry_has_no_neighbors() {
        let items = ["a", "b", "c"];
        assert_eq!(neighbors_by(&items, |item| *item == "z"), Neighbors::none());

        let empty: [&str; 0] = [];
        assert_eq!(neighbors_by(&empty, |item| *item == "a"), Neighbors::none());
        assert_eq!(neighbors_at(&items, Some(9)), Neighbors::none());
    }

    #[test]
    fn single_entry_has_no_neighbors() {
        let items = ["only"];
        assert_eq!(neighbors_at(&items, Some(0)), Neighbors::none());
    }
}
