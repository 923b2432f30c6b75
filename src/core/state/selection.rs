/// Cursor movement over a list with an optional selection
pub trait ScrollableList {
    fn select(&mut self, index: Option<usize>);

    fn selected(&self) -> Option<usize>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn scroll_up(&mut self) {
        let selection = match self.selected() {
            _ if self.is_empty() => None,
            Some(i) => Some(i.saturating_sub(1)),
            None => Some(0),
        };
        self.select(selection);
    }

    fn scroll_down(&mut self) {
        let selection = match self.selected() {
            _ if self.is_empty() => None,
            Some(i) => Some((i + 1).min(self.len() - 1)),
            None => Some(0),
        };
        self.select(selection);
    }

    fn scroll_to_top(&mut self) {
        let selection = if self.is_empty() { None } else { Some(0) };
        self.select(selection);
    }

    fn scroll_to_bottom(&mut self) {
        let selection = if self.is_empty() {
            None
        } else {
            Some(self.len() - 1)
        };
        self.select(selection);
    }

    /// Keeps the selection inside the list after items were removed.
    fn clamp_selection(&mut self) {
        let selection = match self.selected() {
            _ if self.is_empty() => None,
            Some(i) => Some(i.min(self.len() - 1)),
            None => None,
        };
        self.select(selection);
    }
}
