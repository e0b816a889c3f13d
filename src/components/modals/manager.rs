use crate::app::state::{AppMode, AppState};
use crate::theme::Theme;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::command_palette::CommandPaletteModal;
use super::helpers::dim_area;

pub struct ModalManager<'a> {
    pub theme: &'a Theme,
    pub app_state: &'a AppState,
}

impl Widget for ModalManager<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.app_state.mode != AppMode::Palette {
            return;
        }
        dim_area(buf, area);
        if let Some(palette) = &self.app_state.palette {
            CommandPaletteModal {
                theme: self.theme,
                state: palette,
                registry: &self.app_state.registry,
            }
            .render(area, buf);
        }
    }
}
