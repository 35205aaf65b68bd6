use {
    serde::{Deserialize, Serialize},
    std::{collections::BTreeMap, str::FromStr},
    strum::IntoEnumIterator,
    strum_macros::{AsRefStr, Display, EnumIter, EnumString},
};

/// Technical indicators the forecasting service knows how to add as features.
///
/// Declaration order is significant: it is the order in which enabled
/// indicators appear in the request payload.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Indicator {
    #[strum(serialize = "RSI")]
    #[serde(rename = "RSI")]
    Rsi,
    #[strum(serialize = "MACD")]
    #[serde(rename = "MACD")]
    Macd,
    #[strum(serialize = "EMA_20")]
    #[serde(rename = "EMA_20")]
    Ema20,
    #[strum(serialize = "EMA_50")]
    #[serde(rename = "EMA_50")]
    Ema50,
    #[strum(serialize = "BB_High")]
    #[serde(rename = "BB_High")]
    BbHigh,
    #[strum(serialize = "BB_Low")]
    #[serde(rename = "BB_Low")]
    BbLow,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown indicator '{name}' (expected one of: {valid})")]
pub struct UnknownIndicator {
    pub name: String,
    pub valid: String,
}

impl Indicator {
    /// Wire name, e.g. `EMA_20`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Rsi => "RSI",
            Self::Macd => "MACD",
            Self::Ema20 => "EMA_20",
            Self::Ema50 => "EMA_50",
            Self::BbHigh => "BB_High",
            Self::BbLow => "BB_Low",
        }
    }

    pub fn parse(text: &str) -> Result<Self, UnknownIndicator> {
        Self::from_str(text.trim()).map_err(|_| UnknownIndicator {
            name: text.trim().to_string(),
            valid: Self::iter().map(Self::name).collect::<Vec<_>>().join(", "),
        })
    }
}

/// Which indicators the user has ticked. Every indicator always has an entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndicatorSet {
    flags: BTreeMap<Indicator, bool>,
}

impl Default for IndicatorSet {
    fn default() -> Self {
        Self {
            flags: Indicator::iter().map(|ind| (ind, false)).collect(),
        }
    }
}

impl IndicatorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set with exactly the given indicators enabled.
    pub fn with_enabled(enabled: impl IntoIterator<Item = Indicator>) -> Self {
        let mut set = Self::default();
        for ind in enabled {
            set.set(ind, true);
        }
        set
    }

    pub fn toggle(&mut self, indicator: Indicator) {
        let flag = self.flags.entry(indicator).or_insert(false);
        *flag = !*flag;
    }

    pub fn set(&mut self, indicator: Indicator, enabled: bool) {
        self.flags.insert(indicator, enabled);
    }

    pub fn is_enabled(&self, indicator: Indicator) -> bool {
        self.flags.get(&indicator).copied().unwrap_or(false)
    }

    /// Mutable flag for a checkbox widget.
    pub fn flag_mut(&mut self, indicator: Indicator) -> &mut bool {
        self.flags.entry(indicator).or_insert(false)
    }

    /// Enabled indicators in declaration order (never in the order they were ticked).
    pub fn selected(&self) -> Vec<Indicator> {
        self.flags
            .iter()
            .filter(|&(_, &enabled)| enabled)
            .map(|(&ind, _)| ind)
            .collect()
    }

    pub fn selected_names(&self) -> Vec<&'static str> {
        self.selected().into_iter().map(Indicator::name).collect()
    }

    pub fn is_empty(&self) -> bool {
        !self.flags.values().any(|&enabled| enabled)
    }

    /// All indicators with their flag, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Indicator, bool)> + '_ {
        self.flags.iter().map(|(&ind, &enabled)| (ind, enabled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_nothing_selected() {
        let set = IndicatorSet::new();
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 6);
    }

    #[test]
    fn selected_names_follow_declaration_order() {
        let mut set = IndicatorSet::new();
        set.toggle(Indicator::BbLow);
        set.toggle(Indicator::Rsi);
        set.toggle(Indicator::Ema50);
        assert_eq!(set.selected_names(), vec!["RSI", "EMA_50", "BB_Low"]);
    }

    #[test]
    fn toggle_twice_restores_flag() {
        let mut set = IndicatorSet::new();
        set.toggle(Indicator::Macd);
        assert!(set.is_enabled(Indicator::Macd));
        set.toggle(Indicator::Macd);
        assert!(!set.is_enabled(Indicator::Macd));
        assert!(set.is_empty());
    }

    #[test]
    fn parse_accepts_wire_names_case_insensitively() {
        assert_eq!(Indicator::parse("EMA_20"), Ok(Indicator::Ema20));
        assert_eq!(Indicator::parse(" bb_high "), Ok(Indicator::BbHigh));
        let err = Indicator::parse("VWAP").unwrap_err();
        assert_eq!(err.name, "VWAP");
        assert!(err.valid.starts_with("RSI, MACD"));
    }

    #[test]
    fn display_and_serde_use_wire_names() {
        assert_eq!(Indicator::Ema20.to_string(), "EMA_20");
        assert_eq!(Indicator::BbHigh.as_ref(), "BB_High");
        assert_eq!(
            serde_json::to_string(&Indicator::BbLow).unwrap(),
            "\"BB_Low\""
        );
    }
}
