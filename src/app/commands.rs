use crate::domain::models::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandCategory {
    Navigation,
    Trading,
    Data,
    Settings,
}

impl CommandCategory {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            CommandCategory::Navigation => "Navigation",
            CommandCategory::Trading => "Trading",
            CommandCategory::Data => "Data",
            CommandCategory::Settings => "Settings",
        }
    }
}

/// The opaque callback boundary: the palette forwards the action to the
/// host untouched, it never looks inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    Navigate(Route),
    Execute(&'static str),
}

#[derive(Debug, Clone)]
pub struct CommandDefinition {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: CommandCategory,
    pub keywords: &'static [&'static str],
    pub action: CommandAction,
}

impl CommandDefinition {
    /// Term-conjunction substring match: every term must appear somewhere
    /// in the title, the description, or one of the keywords. No scoring,
    /// no edit distance.
    fn matches(&self, terms: &[String]) -> bool {
        terms.iter().all(|term| {
            self.title.to_lowercase().contains(term)
                || self.description.to_lowercase().contains(term)
                || self
                    .keywords
                    .iter()
                    .any(|kw| kw.to_lowercase().contains(term))
        })
    }
}

/// Host-supplied, ordered list of palette entries. Immutable once built;
/// the palette holds it behind `Arc` and only ever reads.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: Vec<CommandDefinition>,
}

impl CommandRegistry {
    /// Commands are stably grouped by category in order of first
    /// appearance, so a filtered result walked front to back is already in
    /// display order and headers never consume index slots.
    #[must_use]
    pub fn new(commands: Vec<CommandDefinition>) -> Self {
        let mut category_rank: Vec<CommandCategory> = Vec::new();
        for cmd in &commands {
            if !category_rank.contains(&cmd.category) {
                category_rank.push(cmd.category);
            }
        }
        let mut commands = commands;
        commands.sort_by_key(|cmd| {
            category_rank
                .iter()
                .position(|c| *c == cmd.category)
                .unwrap_or(usize::MAX)
        });
        Self { commands }
    }

    #[must_use]
    pub fn commands(&self) -> &[CommandDefinition] {
        &self.commands
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CommandDefinition> {
        self.commands.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Filter the registry against a free-text query. Empty query returns
    /// every index in registry order.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<usize> {
        let terms: Vec<String> = query
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();
        if terms.is_empty() {
            return (0..self.commands.len()).collect();
        }
        self.commands
            .iter()
            .enumerate()
            .filter(|(_, cmd)| cmd.matches(&terms))
            .map(|(i, _)| i)
            .collect()
    }
}

/// The trader-dashboard command set: navigation targets plus bot control
/// and data actions wired to opaque host action ids.
#[must_use]
pub fn default_registry() -> CommandRegistry {
    CommandRegistry::new(vec![
        CommandDefinition {
            id: "nav-dashboard",
            title: "Dashboard",
            description: "Go to the portfolio overview",
            category: CommandCategory::Navigation,
            keywords: &["home", "overview", "summary"],
            action: CommandAction::Navigate(Route::Dashboard),
        },
        CommandDefinition {
            id: "nav-portfolio",
            title: "Portfolio",
            description: "Holdings, balances and performance",
            category: CommandCategory::Navigation,
            keywords: &["holdings", "positions", "balance"],
            action: CommandAction::Navigate(Route::Portfolio),
        },
        CommandDefinition {
            id: "nav-trades",
            title: "Trade Log",
            description: "Executed trades and order history",
            category: CommandCategory::Navigation,
            keywords: &["trades", "orders", "history", "log"],
            action: CommandAction::Navigate(Route::Trades),
        },
        CommandDefinition {
            id: "nav-news",
            title: "News",
            description: "Market headlines and sentiment feed",
            category: CommandCategory::Navigation,
            keywords: &["headlines", "sentiment", "feed"],
            action: CommandAction::Navigate(Route::News),
        },
        CommandDefinition {
            id: "nav-stocks",
            title: "Stocks",
            description: "Screened stock universe and watchlist",
            category: CommandCategory::Navigation,
            keywords: &["watchlist", "universe", "symbols"],
            action: CommandAction::Navigate(Route::Stocks),
        },
        CommandDefinition {
            id: "bot-start",
            title: "Start Bot",
            description: "Launch the automated trading loop",
            category: CommandCategory::Trading,
            keywords: &["start", "bot", "run", "trading"],
            action: CommandAction::Execute("bot.start"),
        },
        CommandDefinition {
            id: "bot-stop",
            title: "Stop Bot",
            description: "Halt the automated trading loop",
            category: CommandCategory::Trading,
            keywords: &["stop", "bot", "halt", "trading"],
            action: CommandAction::Execute("bot.stop"),
        },
        CommandDefinition {
            id: "data-refresh",
            title: "Refresh Market Data",
            description: "Re-poll quotes and portfolio figures",
            category: CommandCategory::Data,
            keywords: &["reload", "quotes", "poll"],
            action: CommandAction::Execute("data.refresh"),
        },
        CommandDefinition {
            id: "data-screener",
            title: "Run Screener",
            description: "Run the daily stock screening pass",
            category: CommandCategory::Data,
            keywords: &["screen", "scan", "filter"],
            action: CommandAction::Execute("data.screener"),
        },
        CommandDefinition {
            id: "settings-open",
            title: "Settings",
            description: "Configure the dashboard shell",
            category: CommandCategory::Settings,
            keywords: &["config", "preferences", "theme", "keys"],
            action: CommandAction::Navigate(Route::Settings),
        },
    ])
}
