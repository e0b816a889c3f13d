use crate::app::layout::{Composite, DeviceClass};
use crate::app::state::AppState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Footer<'a> {
    pub theme: &'a Theme,
    pub app_state: &'a AppState,
}

impl Footer<'_> {
    fn layout_badge(&self) -> String {
        let layout = &self.app_state.layout;
        let device = match layout.device {
            DeviceClass::Desktop => "desktop",
            DeviceClass::Tablet => "tablet",
            DeviceClass::Mobile => "mobile",
        };
        match layout.composite() {
            Composite::DesktopExpanded => format!(" {device} · {}px ", layout.width),
            _ => format!(" {device} "),
        }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let mut spans = vec![
            Span::styled(" ^K ", self.theme.footer_segment_key),
            Span::styled(" palette  ", self.theme.footer),
            Span::styled(" ^B ", self.theme.footer_segment_key),
            Span::styled(" panel  ", self.theme.footer),
            Span::styled(" q ", self.theme.footer_segment_key),
            Span::styled(" quit  ", self.theme.footer),
        ];
        if let Some(error) = &self.app_state.last_error {
            spans.push(Span::styled(
                format!("✗ {error}"),
                self.theme.status_error,
            ));
        } else if let Some(message) = &self.app_state.status_message {
            spans.push(Span::styled(
                format!("· {message}"),
                self.theme.status_info,
            ));
        }

        let badge = self.layout_badge();
        let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let padding = (area.width as usize).saturating_sub(used + badge.chars().count());
        spans.push(Span::styled(" ".repeat(padding), self.theme.footer));
        spans.push(Span::styled(badge, self.theme.dimmed));

        Paragraph::new(Line::from(spans))
            .style(self.theme.footer)
            .render(area, buf);
    }
}
