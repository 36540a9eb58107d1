//! List helpers shared by the table pages (sorting and header indicators).

use std::cmp::Ordering;

/// Row types that support sorting by a named column.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sort a snapshot for display by the given column.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Current sort column and direction of one table.
#[derive(Clone, Debug)]
pub struct SortState {
    pub field: String,
    pub ascending: bool,
}

impl SortState {
    pub fn new(initial_field: &str) -> Self {
        Self { field: initial_field.to_string(), ascending: true }
    }

    /// Clicking the active column flips the direction; clicking another
    /// column sorts it ascending.
    pub fn toggle(&mut self, field: &str) {
        if self.field == field {
            self.ascending = !self.ascending;
        } else {
            self.field = field.to_string();
            self.ascending = true;
        }
    }
}

/// Header indicator for a sortable column.
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: String,
        quantity: u32,
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
                "quantity" => self.quantity.cmp(&other.quantity),
                _ => Ordering::Equal,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "suite".into(), quantity: 2 },
            Row { name: "Doble".into(), quantity: 10 },
        ]
    }

    #[test]
    fn sorts_case_insensitively_and_reverses_on_descending() {
        let mut items = rows();
        sort_list(&mut items, "name", true);
        assert_eq!(items[0].name, "Doble");

        sort_list(&mut items, "name", false);
        assert_eq!(items[0].name, "suite");
    }

    #[test]
    fn an_unknown_field_leaves_the_order_alone() {
        let mut items = rows();
        sort_list(&mut items, "missing", true);
        assert_eq!(items[0].name, "suite");
    }

    #[test]
    fn toggling_flips_direction_on_the_same_column_only() {
        let mut sort = SortState::new("name");
        sort.toggle("name");
        assert!(!sort.ascending);
        sort.toggle("quantity");
        assert_eq!(sort.field, "quantity");
        assert!(sort.ascending);
    }

    #[test]
    fn the_indicator_tracks_the_active_column() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("name", "quantity", true), " ⇅");
    }
}
