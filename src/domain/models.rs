/// Pages of the dashboard the shell can navigate to. The shell only knows
/// their identity and path; what each page renders belongs to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Dashboard,
    Portfolio,
    Trades,
    News,
    Stocks,
    Settings,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Dashboard,
        Route::Portfolio,
        Route::Trades,
        Route::News,
        Route::Stocks,
        Route::Settings,
    ];

    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Portfolio => "/portfolio",
            Route::Trades => "/trades",
            Route::News => "/news",
            Route::Stocks => "/stocks",
            Route::Settings => "/settings",
        }
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Portfolio => "Portfolio",
            Route::Trades => "Trade Log",
            Route::News => "News",
            Route::Stocks => "Stocks",
            Route::Settings => "Settings",
        }
    }

    /// Single-character glyph shown on the collapsed rail.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Route::Dashboard => "◆",
            Route::Portfolio => "◫",
            Route::Trades => "≡",
            Route::News => "¶",
            Route::Stocks => "▲",
            Route::Settings => "⚙",
        }
    }
}
