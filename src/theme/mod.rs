use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod catppuccin;
pub mod nord;
pub mod palette;

pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header: Style,
    pub header_logo: Style,
    pub header_active: Style,
    pub header_item: Style,
    pub header_clock: Style,

    pub nav_item: Style,
    pub nav_selected: Style,
    pub nav_rail: Style,

    pub handle: Style,
    pub handle_active: Style,

    pub category: Style,
    pub list_item: Style,
    pub list_selected: Style,

    pub footer: Style,
    pub footer_segment_key: Style,
    pub footer_segment_val: Style,

    pub status_info: Style,
    pub status_error: Style,

    pub highlight: Style,
    pub dimmed: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    #[default]
    CatppuccinMocha,
    Nord,
}

impl PaletteType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaletteType::CatppuccinMocha => "Catppuccin (Mocha)",
            PaletteType::Nord => "Nord",
        }
    }

    #[must_use]
    pub fn all() -> &'static [PaletteType] {
        &[PaletteType::CatppuccinMocha, PaletteType::Nord]
    }
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::CatppuccinMocha => Self::from_palette(&catppuccin::CATPPUCCIN_MOCHA),
            PaletteType::Nord => Self::from_palette(&nord::NORD),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.blue),

            header: Style::default().bg(p.base).fg(p.text),
            header_logo: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_active: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_item: Style::default().bg(p.surface0).fg(p.text),
            header_clock: Style::default().fg(p.subtext0).add_modifier(Modifier::DIM),

            nav_item: Style::default().fg(p.text),
            nav_selected: Style::default()
                .bg(dim_color(p.blue, 0.25))
                .fg(p.text)
                .add_modifier(Modifier::BOLD),
            nav_rail: Style::default().fg(p.subtext0),

            handle: Style::default().fg(p.surface2),
            handle_active: Style::default().fg(p.blue).add_modifier(Modifier::BOLD),

            category: Style::default()
                .fg(p.mauve)
                .add_modifier(Modifier::BOLD),
            list_item: Style::default().fg(p.text),
            list_selected: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),

            footer: Style::default().bg(p.crust).fg(p.subtext0),
            footer_segment_key: Style::default()
                .bg(p.surface0)
                .fg(p.blue)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.base).fg(p.text),

            status_info: Style::default().fg(p.green),
            status_error: Style::default().fg(p.red).add_modifier(Modifier::BOLD),

            highlight: Style::default().bg(p.surface0).add_modifier(Modifier::BOLD),
            dimmed: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::CatppuccinMocha)
    }
}
