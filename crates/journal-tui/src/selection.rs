#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected_index: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn set(&mut self, index: Option<usize>) {
        self.selected_index = index;
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => (idx + 1).min(len - 1),
            None => 0,
        });
    }

    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => idx.saturating_sub(1).min(len - 1),
            None => 0,
        });
    }

    pub fn jump_to_first(&mut self, len: usize) {
        if len > 0 {
            self.selected_index = Some(0);
        }
    }

    pub fn jump_to_last(&mut self, len: usize) {
        if len > 0 {
            self.selected_index = Some(len - 1);
        }
    }

    pub fn auto_select_first_if_empty(&mut self, len: usize) {
        if self.selected_index.is_none() && len > 0 {
            self.selected_index = Some(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_and_prev_on_empty_list_do_nothing() {
        let mut selection = SelectionState::new();
        selection.next(0);
        selection.prev(0);
        assert_eq!(selection.get(), None);
    }

    #[test]
    fn test_next_stops_at_last() {
        let mut selection = SelectionState::new();
        selection.next(2);
        assert_eq!(selection.get(), Some(0));
        selection.next(2);
        selection.next(2);
        assert_eq!(selection.get(), Some(1));
    }

    #[test]
    fn test_prev_stops_at_first() {
        let mut selection = SelectionState::new();
        selection.set(Some(1));
        selection.prev(3);
        selection.prev(3);
        assert_eq!(selection.get(), Some(0));
    }

    #[test]
    fn test_jumps() {
        let mut selection = SelectionState::new();
        selection.jump_to_last(4);
        assert_eq!(selection.get(), Some(3));
        selection.jump_to_first(4);
        assert_eq!(selection.get(), Some(0));

        let mut empty = SelectionState::new();
        empty.jump_to_last(0);
        empty.jump_to_first(0);
        assert_eq!(empty.get(), None);
    }

    #[test]
    fn test_auto_select_first() {
        let mut selection = SelectionState::new();
        selection.auto_select_first_if_empty(0);
        assert_eq!(selection.get(), None);
        selection.auto_select_first_if_empty(5);
        assert_eq!(selection.get(), Some(0));
        selection.set(Some(2));
        selection.auto_select_first_if_empty(5);
        assert_eq!(selection.get(), Some(2));
    }
}
