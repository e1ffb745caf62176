use serde::{Deserialize, Serialize};

/// Match rule toggles.
///
/// Only `elemental` changes how captures resolve. Same, Plus and Combo are
/// always applied by the capture engine; their flags are carried so callers can
/// display or persist the configuration a match was created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Rule {
    pub open: bool,
    pub random: bool,
    pub elemental: bool,
    pub sudden_death: bool,
    pub same: bool,
    pub plus: bool,
    pub combo: bool,
}

impl Default for Rule {
    fn default() -> Self {
        Self::standard()
    }
}

impl Rule {
    /// Open hands with Same, Plus and Combo. No elemental cells.
    #[inline]
    pub const fn standard() -> Self {
        Self {
            open: true,
            random: false,
            elemental: false,
            sudden_death: false,
            same: true,
            plus: true,
            combo: true,
        }
    }

    #[inline]
    pub const fn with_elemental(mut self, elemental: bool) -> Self {
        self.elemental = elemental;
        self
    }

    #[inline]
    pub const fn all_enabled() -> Self {
        Self {
            open: true,
            random: true,
            elemental: true,
            sudden_death: true,
            same: true,
            plus: true,
            combo: true,
        }
    }

    /// Parse a comma separated toggle list such as `elemental,same,plus`.
    /// `none` or an empty string turns everything off. Unknown tokens are ignored.
    pub fn from_toggles(s: &str) -> Self {
        let mut r = Self {
            open: false,
            random: false,
            elemental: false,
            sudden_death: false,
            same: false,
            plus: false,
            combo: false,
        };
        let s = s.trim();
        if s.eq_ignore_ascii_case("none") || s.is_empty() {
            return r;
        }
        for tok in s.split(',') {
            match tok.trim().to_ascii_lowercase().as_str() {
                "open" => r.open = true,
                "random" => r.random = true,
                "elemental" => r.elemental = true,
                "sudden_death" | "suddendeath" => r.sudden_death = true,
                "same" => r.same = true,
                "plus" => r.plus = true,
                "combo" => r.combo = true,
                "" => {}
                other => log::warn!("ignoring unknown rule toggle '{other}'"),
            }
        }
        r
    }
}
