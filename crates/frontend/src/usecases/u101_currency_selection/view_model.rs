use super::api;
use super::error::CatalogLoadFailure;
use super::state::{LoadedCatalogs, PageView, SelectOption, SelectionState};
use crate::shared::config::ApiConfig;
use contracts::domain::a001_crypto_asset::aggregate::CryptoAsset;
use contracts::domain::a002_fiat_currency::aggregate::FiatCurrency;
use leptos::prelude::*;

/// ViewModel for the currency selection page
#[derive(Clone, Copy)]
pub struct CurrencySelectionViewModel {
    pub state: RwSignal<SelectionState>,
}

impl CurrencySelectionViewModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SelectionState::new()),
        }
    }

    /// Load both catalogs once. A result that arrives after the page was
    /// disposed is dropped.
    pub fn initialize(&self, api: ApiConfig) {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::fetch_catalogs(&api).await;
            vm.apply_load_result(result);
        });
    }

    /// Returns `false` when the result was not applied: either the page is
    /// already disposed (the signal no longer exists) or it already loaded.
    pub fn apply_load_result(&self, result: Result<LoadedCatalogs, CatalogLoadFailure>) -> bool {
        match self.state.try_update(|s| s.apply_load_result(result)) {
            Some(applied) => applied,
            None => {
                log::warn!("Currency catalogs arrived after the page was closed; discarded");
                false
            }
        }
    }

    pub fn select_crypto(&self, display_id: &str) {
        self.state.update(|s| s.select_crypto(display_id));
    }

    pub fn select_fiat(&self, symbol: &str) {
        self.state.update(|s| s.select_fiat(symbol));
    }

    pub fn page_view(&self) -> PageView {
        self.state.with(|s| s.page_view())
    }

    pub fn selected_crypto(&self) -> Option<CryptoAsset> {
        self.state.with(|s| s.selected_crypto().cloned())
    }

    pub fn selected_fiat(&self) -> Option<FiatCurrency> {
        self.state.with(|s| s.selected_fiat().cloned())
    }

    pub fn crypto_value(&self) -> String {
        self.state.with(|s| s.crypto_value())
    }

    pub fn fiat_value(&self) -> String {
        self.state.with(|s| s.fiat_value())
    }

    pub fn crypto_options(&self) -> Vec<SelectOption> {
        self.state.with(|s| s.crypto_options())
    }

    pub fn fiat_options(&self) -> Vec<SelectOption> {
        self.state.with(|s| s.fiat_options())
    }

    /// Notice text for a crypto/fiat pair the network does not support
    pub fn unsupported_pair_notice(&self) -> Option<String> {
        self.state.with(|s| {
            s.unsupported_pair().map(|(crypto, fiat)| {
                format!(
                    "{} on {} cannot be bought with {}",
                    crypto.symbol, crypto.network.name, fiat.symbol
                )
            })
        })
    }
}

impl Default for CurrencySelectionViewModel {
    fn default() -> Self {
        Self::new()
    }
}
