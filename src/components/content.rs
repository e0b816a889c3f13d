use crate::domain::models::Route;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Placeholder page body. The real dashboard panes (tables, charts,
/// filters) belong to the host; the shell only needs something to frame.
pub struct Content<'a> {
    pub theme: &'a Theme,
    pub route: Route,
}

impl Widget for Content<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(self.route.title().to_uppercase(), self.theme.highlight),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border);

        let lines: Vec<Line> = match self.route {
            Route::Dashboard => vec![
                Line::from("Portfolio value        ₹ 12,45,300.00"),
                Line::from("Day P&L                ₹    +8,420.50"),
                Line::from("Open positions         4"),
            ],
            Route::Portfolio => vec![
                Line::from("RELIANCE     40 @ 2,981.00"),
                Line::from("TCS          12 @ 4,102.35"),
                Line::from("INFY         55 @ 1,640.80"),
            ],
            Route::Trades => vec![
                Line::from("09:21  BUY   RELIANCE   10   2,975.20"),
                Line::from("11:04  SELL  HDFCBANK   25   1,712.00"),
            ],
            Route::News => vec![Line::from("No unread headlines.")],
            Route::Stocks => vec![Line::from("Screener idle — 0 of 500 scanned today.")],
            Route::Settings => vec![Line::from("Shell settings are read from config.toml.")],
        };
        let body: Vec<Line> = lines
            .into_iter()
            .map(|l| l.style(self.theme.dimmed))
            .collect();

        Paragraph::new(body).block(block).render(area, buf);
    }
}
