use crate::app::layout::{Composite, LayoutState};
use crate::domain::models::Route;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

/// First nav item row, relative to the panel top (title row + blank row).
pub const NAV_TOP_OFFSET: u16 = 2;

/// What a pointer-down inside the panel landed on. Shared by the renderer
/// and the input mapper so clicks always agree with the drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarHit {
    Route(Route),
    Toggle,
}

#[must_use]
pub fn hit(area: Rect, column: u16, row: u16) -> Option<SidebarHit> {
    if area.width == 0
        || column < area.x
        || column >= area.right()
        || row < area.y
        || row >= area.bottom()
    {
        return None;
    }
    if area.height > NAV_TOP_OFFSET && row == area.bottom() - 1 {
        return Some(SidebarHit::Toggle);
    }
    let index = row.checked_sub(area.y + NAV_TOP_OFFSET)? as usize;
    Route::ALL.get(index).copied().map(SidebarHit::Route)
}

pub struct Sidebar<'a> {
    pub theme: &'a Theme,
    pub layout: &'a LayoutState,
    pub route: Route,
}

impl Sidebar<'_> {
    fn is_rail(&self) -> bool {
        matches!(
            self.layout.composite(),
            Composite::DesktopCollapsed | Composite::TabletCollapsed
        )
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let rail = self.is_rail();

        // Title row.
        let title = if rail { "≋" } else { " TRADEDECK" };
        buf.set_line(
            area.x,
            area.y,
            &Line::from(Span::styled(title, self.theme.nav_rail)),
            area.width,
        );

        // Nav items.
        for (i, route) in Route::ALL.iter().enumerate() {
            let y = area.y + NAV_TOP_OFFSET + i as u16;
            if y >= area.bottom().saturating_sub(1) {
                break;
            }
            let selected = *route == self.route;
            let style = if selected {
                self.theme.nav_selected
            } else {
                self.theme.nav_item
            };
            let line = if rail {
                Line::from(Span::styled(format!(" {} ", route.glyph()), style))
            } else {
                Line::from(vec![
                    Span::styled(if selected { "▸ " } else { "  " }, style),
                    Span::styled(route.glyph(), style),
                    Span::styled(" ", style),
                    Span::styled(route.title(), style),
                ])
            };
            buf.set_line(area.x, y, &line, area.width);
        }

        // Toggle control on the bottom row.
        if area.height > NAV_TOP_OFFSET {
            let label = match self.layout.composite() {
                Composite::MobileOpen => "  ✕ close",
                Composite::DesktopCollapsed | Composite::TabletCollapsed => " »",
                _ => "  « collapse",
            };
            buf.set_line(
                area.x,
                area.bottom() - 1,
                &Line::from(Span::styled(label, self.theme.dimmed)),
                area.width,
            );
        }

        // Drag handle column on the expanded desktop panel.
        if self.layout.has_drag_handle() {
            let style = if self.layout.resizing {
                self.theme.handle_active
            } else {
                self.theme.handle
            };
            let x = area.right() - 1;
            for y in area.top()..area.bottom() {
                buf[(x, y)].set_symbol("│").set_style(style);
            }
        }
    }
}
