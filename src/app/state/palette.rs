use crate::app::commands::{CommandAction, CommandRegistry};

/// Live only while the palette is open; `AppState` holds
/// `Option<PaletteState>` so closing destroys the query and cursor
/// structurally instead of resetting fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PaletteState {
    pub query: String,
    /// Indices into the registry, already in display order.
    pub matches: Vec<usize>,
    /// Flat cursor over `matches`; category headers consume no slots.
    pub selected_index: usize,
}

impl PaletteState {
    #[must_use]
    pub fn open(registry: &CommandRegistry) -> Self {
        Self {
            query: String::new(),
            matches: registry.search(""),
            selected_index: 0,
        }
    }

    pub fn push_char(&mut self, c: char, registry: &CommandRegistry) {
        self.query.push(c);
        self.requery(registry);
    }

    pub fn pop_char(&mut self, registry: &CommandRegistry) {
        self.query.pop();
        self.requery(registry);
    }

    fn requery(&mut self, registry: &CommandRegistry) {
        self.matches = registry.search(&self.query);
        self.selected_index = 0;
    }

    pub fn select_next(&mut self) {
        if !self.matches.is_empty() {
            self.selected_index = (self.selected_index + 1).min(self.matches.len() - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Action of the command under the cursor, if any results are showing.
    #[must_use]
    pub fn selected_action(&self, registry: &CommandRegistry) -> Option<CommandAction> {
        let idx = *self.matches.get(self.selected_index)?;
        registry.get(idx).map(|cmd| cmd.action)
    }

    /// Action of the clicked row, bypassing the cursor.
    #[must_use]
    pub fn action_at(&self, row: usize, registry: &CommandRegistry) -> Option<CommandAction> {
        let idx = *self.matches.get(row)?;
        registry.get(idx).map(|cmd| cmd.action)
    }
}
