// Selection state for list panels.

use ratatui::widgets::ListState;

/// A list with keyboard selection. `items` stays `None` until the first load.
#[derive(Debug, Clone)]
pub struct SelectableList<T> {
    pub items: Option<Vec<T>>,
    pub list_state: ListState,
}

impl<T> Default for SelectableList<T> {
    fn default() -> Self {
        Self {
            items: None,
            list_state: ListState::default(),
        }
    }
}

impl<T> SelectableList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn len(&self) -> usize {
        self.items.as_ref().map_or(0, Vec::len)
    }

    /// Select the next item in the list.
    pub fn select_next(&mut self) {
        let len = self.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i, // Stay at end
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Select the previous item in the list.
    pub fn select_prev(&mut self) {
        if self.len() == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Get the selected item.
    pub fn selected_item(&self) -> Option<&T> {
        let index = self.list_state.selected()?;
        self.items.as_ref()?.get(index)
    }

    /// Set loaded data, replacing the previous items.
    pub fn set_loaded(&mut self, items: Vec<T>) {
        let selected = if items.is_empty() { None } else { Some(0) };
        self.items = Some(items);
        self.list_state.select(selected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_clamps_at_ends() {
        let mut list = SelectableList::new();
        list.set_loaded(vec!["a", "b"]);
        assert_eq!(list.selected_item(), Some(&"a"));

        list.select_prev();
        assert_eq!(list.selected_item(), Some(&"a"));

        list.select_next();
        list.select_next();
        assert_eq!(list.selected_item(), Some(&"b"));
    }

    #[test]
    fn test_empty_list_has_no_selection() {
        let mut list: SelectableList<&str> = SelectableList::new();
        list.set_loaded(Vec::new());
        list.select_next();
        assert_eq!(list.selected_item(), None);
    }

    #[test]
    fn test_reload_resets_selection() {
        let mut list = SelectableList::new();
        list.set_loaded(vec![1, 2, 3]);
        list.select_next();
        list.select_next();

        list.set_loaded(vec![4]);
        assert_eq!(list.selected_item(), Some(&4));
    }
}
