use crate::app::commands::{CommandCategory, CommandRegistry};
use crate::app::state::PaletteState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

/// One display row of the result list. Category headers are rendering
/// chrome only; the flat selection index counts `Item` rows exclusively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteRow {
    Header(CommandCategory),
    Item { flat: usize, command: usize },
}

#[must_use]
pub fn visible_rows(state: &PaletteState, registry: &CommandRegistry) -> Vec<PaletteRow> {
    let mut rows = Vec::with_capacity(state.matches.len() + 4);
    let mut last_category = None;
    for (flat, &command) in state.matches.iter().enumerate() {
        let Some(def) = registry.get(command) else {
            continue;
        };
        if last_category != Some(def.category) {
            rows.push(PaletteRow::Header(def.category));
            last_category = Some(def.category);
        }
        rows.push(PaletteRow::Item { flat, command });
    }
    rows
}

#[must_use]
pub fn palette_area(area: Rect) -> Rect {
    centered_rect(60, 60, area)
}

/// Where a pointer-down landed relative to the open palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteHit {
    /// Outside the modal surface entirely.
    Outside,
    /// On the surface but not on a result row.
    Surface,
    /// On the result row with this flat index.
    Item(usize),
}

#[must_use]
pub fn hit_test(
    state: &PaletteState,
    registry: &CommandRegistry,
    area: Rect,
    column: u16,
    row: u16,
) -> PaletteHit {
    let modal = palette_area(area);
    if modal.width < 3
        || column < modal.x
        || column >= modal.right()
        || row < modal.y
        || row >= modal.bottom()
    {
        return PaletteHit::Outside;
    }
    // Inner area starts past the border; query row, then separator, then
    // the result list.
    let results_top = modal.y + 3;
    let results_bottom = modal.bottom().saturating_sub(1);
    if row < results_top || row >= results_bottom {
        return PaletteHit::Surface;
    }
    let rows = visible_rows(state, registry);
    match rows.get((row - results_top) as usize) {
        Some(PaletteRow::Item { flat, .. }) => PaletteHit::Item(*flat),
        _ => PaletteHit::Surface,
    }
}

pub struct CommandPaletteModal<'a> {
    pub theme: &'a Theme,
    pub state: &'a PaletteState,
    pub registry: &'a CommandRegistry,
}

impl Widget for CommandPaletteModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = palette_area(area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" COMMAND PALETTE ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let inner_area = block.inner(modal_area);
        block.render(modal_area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Query input
                Constraint::Length(1), // Separator
                Constraint::Min(0),    // Results
            ])
            .split(inner_area);

        let query_line = Line::from(vec![
            Span::styled(" > ", self.theme.footer_segment_key),
            Span::styled(&self.state.query, self.theme.footer_segment_val),
            Span::styled(
                "_",
                self.theme
                    .footer_segment_val
                    .add_modifier(ratatui::style::Modifier::SLOW_BLINK),
            ),
        ]);
        buf.set_line(layout[0].x, layout[0].y, &query_line, layout[0].width);

        let separator = "─".repeat(layout[1].width as usize);
        buf.set_string(layout[1].x, layout[1].y, separator, self.theme.border_focus);

        let results = layout[2];
        let rows = visible_rows(self.state, self.registry);
        if rows.is_empty() {
            let no_results = Line::from(Span::styled(
                "  No commands found.",
                self.theme.dimmed,
            ));
            if results.height > 1 {
                buf.set_line(results.x, results.y + 1, &no_results, results.width);
            }
            return;
        }

        for (offset, palette_row) in rows.iter().enumerate() {
            let y = results.y + offset as u16;
            if y >= results.bottom() {
                break;
            }
            let line = match palette_row {
                PaletteRow::Header(category) => Line::from(Span::styled(
                    format!(" {} ", category.label().to_uppercase()),
                    self.theme.category,
                )),
                PaletteRow::Item { flat, command } => {
                    let Some(def) = self.registry.get(*command) else {
                        continue;
                    };
                    let selected = *flat == self.state.selected_index;
                    let style = if selected {
                        self.theme.list_selected
                    } else {
                        self.theme.list_item
                    };
                    Line::from(vec![
                        Span::styled(if selected { " > " } else { "   " }, style),
                        Span::styled(format!("{:<20}", def.title), style),
                        Span::styled(
                            format!(" {}", def.description),
                            self.theme
                                .list_item
                                .add_modifier(ratatui::style::Modifier::DIM),
                        ),
                    ])
                }
            };
            buf.set_line(results.x, y, &line, results.width);
        }
    }
}
