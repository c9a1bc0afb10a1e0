//! Gesture keys and the table mapping them to actions.
//!
//! The key space is closed: four swipes, the two-leg corners, and the two V
//! orientations. Actions are symbolic; performing them is the host's job.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::direction::Direction4;
use crate::error::{MapError, Result};

/// A recognized gesture shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GestureKey {
    /// Straight stroke along one axis (`"L"`, `"R"`, `"U"`, `"D"`).
    Swipe(Direction4),
    /// Two legs meeting at a corner, first leg then second (`"DR"`, `"LU"`, …).
    /// The legs always differ; `"RR"` is not a key.
    Corner(Direction4, Direction4),
    /// Checkmark with the vertex below both endpoints (`"V"`).
    V,
    /// Caret with the vertex above both endpoints (`"INV_V"`).
    InvV,
}

impl GestureKey {
    /// Renders the key as arrow glyphs, e.g. `"↓→"`.
    #[must_use]
    pub fn arrows(&self) -> String {
        match self {
            Self::Swipe(d) => d.arrow().to_string(),
            Self::Corner(a, b) => [a.arrow(), b.arrow()].iter().collect(),
            Self::V => "V".to_owned(),
            Self::InvV => "\u{039B}".to_owned(),
        }
    }
}

impl fmt::Display for GestureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Swipe(d) => write!(f, "{d}"),
            Self::Corner(a, b) => write!(f, "{a}{b}"),
            Self::V => f.write_str("V"),
            Self::InvV => f.write_str("INV_V"),
        }
    }
}

impl FromStr for GestureKey {
    type Err = MapError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "V" => return Ok(Self::V),
            "INV_V" => return Ok(Self::InvV),
            _ => {}
        }
        let mut chars = s.chars();
        let first = chars.next().and_then(Direction4::from_symbol);
        let second = chars.next().map(Direction4::from_symbol);
        match (first, second, chars.next()) {
            (Some(d), None, None) => Ok(Self::Swipe(d)),
            (Some(a), Some(Some(b)), None) if a != b => Ok(Self::Corner(a, b)),
            _ => Err(MapError::UnknownGesture(s.to_owned())),
        }
    }
}

impl TryFrom<String> for GestureKey {
    type Error = MapError;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<GestureKey> for String {
    fn from(key: GestureKey) -> Self {
        key.to_string()
    }
}

/// Where an action takes effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionScope {
    /// Does nothing.
    None,
    /// Acts on the current page (scrolling, history, loading).
    Page,
    /// Needs the browser's tab layer.
    Tab,
}

/// A symbolic action a gesture can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    None,
    Back,
    Forward,
    ScrollUp,
    ScrollDown,
    ScrollTop,
    ScrollBottom,
    CloseTab,
    NewTab,
    RestoreClosedTab,
    Reload,
    StopLoading,
    TabLeft,
    TabRight,
    CloseAllTabs,
}

impl Action {
    /// Every action, in menu order.
    pub const ALL: [Self; 15] = [
        Self::None,
        Self::Back,
        Self::Forward,
        Self::ScrollUp,
        Self::ScrollDown,
        Self::ScrollTop,
        Self::ScrollBottom,
        Self::CloseTab,
        Self::NewTab,
        Self::RestoreClosedTab,
        Self::Reload,
        Self::StopLoading,
        Self::TabLeft,
        Self::TabRight,
        Self::CloseAllTabs,
    ];

    /// Stable identifier, e.g. `"CLOSE_TAB"`.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Back => "BACK",
            Self::Forward => "FORWARD",
            Self::ScrollUp => "SCROLL_UP",
            Self::ScrollDown => "SCROLL_DOWN",
            Self::ScrollTop => "SCROLL_TOP",
            Self::ScrollBottom => "SCROLL_BOTTOM",
            Self::CloseTab => "CLOSE_TAB",
            Self::NewTab => "NEW_TAB",
            Self::RestoreClosedTab => "RESTORE_CLOSED_TAB",
            Self::Reload => "RELOAD",
            Self::StopLoading => "STOP_LOADING",
            Self::TabLeft => "TAB_LEFT",
            Self::TabRight => "TAB_RIGHT",
            Self::CloseAllTabs => "CLOSE_ALL_TABS",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "No action",
            Self::Back => "Back",
            Self::Forward => "Forward",
            Self::ScrollUp => "Scroll up",
            Self::ScrollDown => "Scroll down",
            Self::ScrollTop => "Scroll to top",
            Self::ScrollBottom => "Scroll to bottom",
            Self::CloseTab => "Close tab",
            Self::NewTab => "New tab",
            Self::RestoreClosedTab => "Reopen closed tab",
            Self::Reload => "Reload",
            Self::StopLoading => "Stop loading",
            Self::TabLeft => "Switch to left tab",
            Self::TabRight => "Switch to right tab",
            Self::CloseAllTabs => "Close all tabs",
        }
    }

    /// Feedback glyph shown next to the label, if any.
    #[must_use]
    pub fn icon(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Back => Some("\u{2190}"),
            Self::Forward => Some("\u{2192}"),
            Self::ScrollUp => Some("\u{2191}"),
            Self::ScrollDown => Some("\u{2193}"),
            Self::ScrollTop => Some("\u{2191}\u{2191}"),
            Self::ScrollBottom => Some("\u{2193}\u{2193}"),
            Self::CloseTab => Some("\u{2715}"),
            Self::NewTab => Some("+"),
            Self::RestoreClosedTab => Some("\u{21A9}"),
            Self::Reload => Some("\u{21BB}"),
            Self::StopLoading => Some("\u{25A0}"),
            Self::TabLeft => Some("\u{25C0}"),
            Self::TabRight => Some("\u{25B6}"),
            Self::CloseAllTabs => Some("\u{2715}\u{2715}"),
        }
    }

    /// Whether the action is handled by the page or by the tab layer.
    #[must_use]
    pub fn scope(self) -> ActionScope {
        match self {
            Self::None => ActionScope::None,
            Self::Back
            | Self::Forward
            | Self::ScrollUp
            | Self::ScrollDown
            | Self::ScrollTop
            | Self::ScrollBottom
            | Self::Reload
            | Self::StopLoading => ActionScope::Page,
            Self::CloseTab
            | Self::NewTab
            | Self::RestoreClosedTab
            | Self::TabLeft
            | Self::TabRight
            | Self::CloseAllTabs => ActionScope::Tab,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Action {
    type Err = MapError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.id() == s)
            .ok_or_else(|| MapError::UnknownAction(s.to_owned()))
    }
}

/// Default bindings, in the order a settings page lists them.
const DEFAULT_BINDINGS: [(&str, Action); 16] = [
    ("L", Action::Back),
    ("R", Action::Forward),
    ("U", Action::ScrollUp),
    ("D", Action::ScrollDown),
    ("DR", Action::CloseTab),
    ("DL", Action::StopLoading),
    ("RU", Action::NewTab),
    ("LU", Action::RestoreClosedTab),
    ("RD", Action::Reload),
    ("UL", Action::TabLeft),
    ("UR", Action::TabRight),
    ("LD", Action::CloseAllTabs),
    ("UD", Action::ScrollBottom),
    ("DU", Action::ScrollTop),
    ("LR", Action::CloseTab),
    ("RL", Action::RestoreClosedTab),
];

/// Snapshot of gesture-to-action bindings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GestureMap {
    bindings: BTreeMap<GestureKey, Action>,
}

impl Default for GestureMap {
    fn default() -> Self {
        let bindings = DEFAULT_BINDINGS
            .iter()
            .filter_map(|(key, action)| Some((key.parse().ok()?, *action)))
            .collect();
        Self { bindings }
    }
}

impl GestureMap {
    /// Creates a map with no bindings.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bindings: BTreeMap::new(),
        }
    }

    /// Parses stored overrides and merges them over the default bindings.
    ///
    /// # Errors
    ///
    /// Returns `MapError::Json` if the text is not an object of known gesture
    /// keys to known action identifiers.
    pub fn from_json(text: &str) -> Result<Self> {
        let overrides: BTreeMap<GestureKey, Action> =
            serde_json::from_str(text).map_err(MapError::Json)?;
        let mut map = Self::default();
        map.bindings.extend(overrides);
        Ok(map)
    }

    /// Serializes all bindings as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns `MapError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.bindings).map_err(|e| MapError::Json(e).into())
    }

    /// The keys bound by default, in display order.
    pub fn display_order() -> impl Iterator<Item = GestureKey> {
        DEFAULT_BINDINGS
            .into_iter()
            .filter_map(|(key, _)| key.parse().ok())
    }

    /// Binds `key` to `action`, returning the previous binding.
    pub fn insert(&mut self, key: GestureKey, action: Action) -> Option<Action> {
        self.bindings.insert(key, action)
    }

    /// Returns the raw binding for `key`, including explicit [`Action::None`].
    #[must_use]
    pub fn get(&self, key: GestureKey) -> Option<Action> {
        self.bindings.get(&key).copied()
    }

    /// Returns the action `key` triggers, or `None` if it is unbound or bound
    /// to [`Action::None`].
    #[must_use]
    pub fn resolve(&self, key: GestureKey) -> Option<Action> {
        self.get(key).filter(|a| *a != Action::None)
    }

    /// Iterates over all bindings in key order.
    pub fn iter(&self) -> impl Iterator<Item = (GestureKey, Action)> + '_ {
        self.bindings.iter().map(|(k, a)| (*k, *a))
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if there are no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
