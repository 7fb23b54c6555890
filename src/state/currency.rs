//! Display-currency preference.
//!
//! Amounts are never converted. A record is always shown in its own
//! currency; the preference only picks the currency for dashboard totals and
//! new records that have none yet.

#[cfg(test)]
#[path = "currency_test.rs"]
mod currency_test;

use serde::{Deserialize, Serialize};

use crate::util::format::format_money;
use crate::util::storage::{KeyValueStore, load_json_from, save_json_to};

pub const CURRENCY_KEY: &str = "paybord.currency";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Ngn,
}

impl Currency {
    pub const ALL: [Self; 4] = [Self::Usd, Self::Eur, Self::Gbp, Self::Ngn];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Ngn => "NGN",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code().eq_ignore_ascii_case(code.trim()))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CurrencyState {
    pub selected: Currency,
}

impl CurrencyState {
    /// Restore the saved preference, defaulting to USD.
    pub fn load(store: &impl KeyValueStore) -> Self {
        Self { selected: load_json_from(store, CURRENCY_KEY).unwrap_or_default() }
    }

    pub fn select(&mut self, currency: Currency, store: &impl KeyValueStore) {
        self.selected = currency;
        save_json_to(store, CURRENCY_KEY, &currency);
    }

    /// Format an amount in the selected currency.
    #[must_use]
    pub fn format(&self, amount_minor: i64) -> String {
        format_money(amount_minor, self.selected.code())
    }
}
