use super::*;
use crate::util::storage::MemoryStore;

#[test]
fn from_code_is_case_insensitive() {
    assert_eq!(Currency::from_code("eur"), Some(Currency::Eur));
    assert_eq!(Currency::from_code(" NGN "), Some(Currency::Ngn));
    assert_eq!(Currency::from_code("JPY"), None);
}

#[test]
fn selection_persists_across_loads() {
    let store = MemoryStore::new();
    assert_eq!(CurrencyState::load(&store).selected, Currency::Usd);

    let mut state = CurrencyState::default();
    state.select(Currency::Gbp, &store);
    assert_eq!(store.get(CURRENCY_KEY).as_deref(), Some("\"GBP\""));
    assert_eq!(CurrencyState::load(&store).selected, Currency::Gbp);
}

#[test]
fn format_uses_selected_symbol_without_conversion() {
    let state = CurrencyState { selected: Currency::Eur };
    assert_eq!(state.format(1_050), "€10.50");
}
