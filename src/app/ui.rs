use crate::app::layout::{LayoutState, CELL_PX};
use crate::app::state::AppState;
use crate::components::content::Content;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::modals::helpers::dim_area;
use crate::components::modals::manager::ModalManager;
use crate::components::sidebar::Sidebar;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Clear,
    Frame,
};

/// Resolved shell geometry, in cells. Input hit-testing and rendering
/// share this so a click always lands on what was drawn.
pub struct ShellLayout {
    pub header: Rect,
    pub sidebar: Rect,
    pub content: Rect,
    pub footer: Rect,
    /// One-column drag handle; present only on Desktop with the panel
    /// expanded.
    pub handle: Option<Rect>,
    /// Overlay panel floating above the content on Mobile.
    pub mobile_panel: Option<Rect>,
}

#[must_use]
pub fn get_layout(area: Rect, layout: &LayoutState) -> ShellLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);
    let body = main[1];

    let sidebar_cells = (layout.panel_width() / CELL_PX).min(body.width);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_cells), Constraint::Min(0)])
        .split(body);

    let sidebar = columns[0];
    let handle = if layout.has_drag_handle() && sidebar.width > 0 {
        Some(Rect {
            x: sidebar.right().saturating_sub(1),
            y: sidebar.y,
            width: 1,
            height: sidebar.height,
        })
    } else {
        None
    };

    let mobile_panel = if layout.mobile_open {
        Some(Rect {
            x: body.x,
            y: body.y,
            width: (body.width.saturating_mul(3) / 4).min(32),
            height: body.height,
        })
    } else {
        None
    };

    ShellLayout {
        header: main[0],
        sidebar,
        content: columns[1],
        footer: main[2],
        handle,
        mobile_panel,
    }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }
    let theme = app_state.theme.clone();
    let layout = get_layout(f.area(), &app_state.layout);

    if layout.header.height > 0 {
        f.render_widget(
            Header {
                theme: &theme,
                route: app_state.route,
            },
            layout.header,
        );
    }

    if layout.content.width > 0 && layout.content.height > 0 {
        f.render_widget(
            Content {
                theme: &theme,
                route: app_state.route,
            },
            layout.content,
        );
    }

    if layout.sidebar.width > 0 && layout.sidebar.height > 0 {
        f.render_widget(
            Sidebar {
                theme: &theme,
                layout: &app_state.layout,
                route: app_state.route,
            },
            layout.sidebar,
        );
    }

    if layout.footer.height > 0 {
        f.render_widget(
            Footer {
                theme: &theme,
                app_state,
            },
            layout.footer,
        );
    }

    // Mobile overlay: dim the page, then float the panel above it.
    if let Some(panel) = layout.mobile_panel {
        dim_area(f.buffer_mut(), layout.content);
        f.render_widget(Clear, panel);
        f.render_widget(
            Sidebar {
                theme: &theme,
                layout: &app_state.layout,
                route: app_state.route,
            },
            panel,
        );
    }

    f.render_widget(
        ModalManager {
            theme: &theme,
            app_state,
        },
        f.area(),
    );
}
