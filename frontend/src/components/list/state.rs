//! Component state for the restaurant list controller.

use common::query::SortKey;

/// Main state container for the `RestaurantList`.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules. The derived sequence itself is never stored; it is
/// recomputed from these fields and the props on every render.
pub struct RestaurantList {
    /// Free-text filter, matched case-insensitively against `name`.
    pub filter: String,
    /// The active sort column.
    pub sort_key: SortKey,
    /// Sort direction; `true` is ascending.
    pub ascending: bool,
}

impl RestaurantList {
    /// Default state: empty filter, name sort, ascending.
    pub fn new() -> Self {
        Self {
            filter: String::new(),
            sort_key: SortKey::Name,
            ascending: true,
        }
    }

    /// Applies a click on a sort control.
    ///
    /// Selecting the already-active key flips the direction; selecting a
    /// different key switches to it and resets the direction to
    /// ascending. The filter is never touched.
    pub fn select_sort_key(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.ascending = !self.ascending;
        } else {
            self.sort_key = key;
            self.ascending = true;
        }
    }
}
