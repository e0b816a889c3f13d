use crate::domain::models::Route;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    pub theme: &'a Theme,
    pub route: Route,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let clock = chrono::Local::now().format("%H:%M:%S").to_string();
        let left = " TRADEDECK ";
        let route = format!(" {} ", self.route.title());
        let hint = " Ctrl+K commands ";
        let used = left.len() + route.len() + hint.len() + clock.len() + 2;
        let padding = (area.width as usize).saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(left, self.theme.header_logo),
            Span::styled(route, self.theme.header_active),
            Span::styled(hint, self.theme.header_item),
            Span::styled(" ".repeat(padding), self.theme.header),
            Span::styled(clock, self.theme.header_clock),
            Span::styled("  ", self.theme.header),
        ]);
        Paragraph::new(line).style(self.theme.header).render(area, buf);
    }
}
