use serde::{Deserialize, Serialize};

/// Task priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Numeric rank used for sorting (higher = more urgent)
    pub fn rank(&self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
        }
    }

    /// Short display name
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Picker label with the P-level shorthand
    pub fn picker_label(&self) -> &'static str {
        match self {
            Self::Low => "P3 - Low",
            Self::Medium => "P2 - Medium",
            Self::High => "P1 - High",
        }
    }

    /// Cycle to the next priority (wraps around)
    pub fn next(&self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High => Self::Low,
        }
    }

    /// Cycle to the previous priority (wraps around)
    pub fn prev(&self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::Medium => Self::Low,
            Self::High => Self::Medium,
        }
    }
}

/// Ordering applied to task lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    /// Ascending by due date (earliest first)
    #[default]
    Date,
    /// Descending by priority rank (high first)
    Priority,
}

impl SortOption {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Date => "By Date",
            Self::Priority => "By Priority",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Date => Self::Priority,
            Self::Priority => Self::Date,
        }
    }
}

/// Top-level screen tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Tasks,
    Completed,
    Analytics,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Tasks => "Tasks",
            Self::Completed => "Completed",
            Self::Analytics => "Analytics",
        }
    }

    pub fn all() -> &'static [Tab] {
        &[Tab::Tasks, Tab::Completed, Tab::Analytics]
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Tasks => Self::Completed,
            Self::Completed => Self::Analytics,
            Self::Analytics => Self::Tasks,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Tasks => Self::Analytics,
            Self::Completed => Self::Tasks,
            Self::Analytics => Self::Completed,
        }
    }
}

/// Color theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AppTheme {
    #[default]
    System,
    Light,
    Dark,
}

impl AppTheme {
    pub fn label(&self) -> &'static str {
        match self {
            Self::System => "System",
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    pub fn all() -> &'static [AppTheme] {
        &[AppTheme::System, AppTheme::Light, AppTheme::Dark]
    }

    pub fn next(&self) -> Self {
        match self {
            Self::System => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
        }
    }
}

/// Accent color applied to highlights and selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccentColor {
    #[default]
    Green,
    Blue,
    Red,
    Orange,
    Purple,
    Pink,
    Yellow,
    Mint,
    Teal,
    Indigo,
    Brown,
}

impl AccentColor {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Red => "Red",
            Self::Orange => "Orange",
            Self::Purple => "Purple",
            Self::Pink => "Pink",
            Self::Yellow => "Yellow",
            Self::Mint => "Mint",
            Self::Teal => "Teal",
            Self::Indigo => "Indigo",
            Self::Brown => "Brown",
        }
    }

    pub fn all() -> &'static [AccentColor] {
        &[
            AccentColor::Green,
            AccentColor::Blue,
            AccentColor::Red,
            AccentColor::Orange,
            AccentColor::Purple,
            AccentColor::Pink,
            AccentColor::Yellow,
            AccentColor::Mint,
            AccentColor::Teal,
            AccentColor::Indigo,
            AccentColor::Brown,
        ]
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    /// Typing into the search box
    Searching,
    /// Task detail open (viewing or editing, per the editor session state)
    Detail,
    /// Typing a new comment in the detail view
    CommentEntry,
    /// Settings modal open
    Settings,
    /// Validation alert on top of the detail view
    Alert,
}
