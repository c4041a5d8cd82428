use super::error::CatalogLoadFailure;
use contracts::domain::a001_crypto_asset::aggregate::CryptoAsset;
use contracts::domain::a002_fiat_currency::aggregate::FiatCurrency;
use contracts::domain::common::{Catalog, CatalogEntry};

/// `Loading -> Ready` only; never goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
}

/// What the page should render right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageView {
    Loading,
    /// Loaded, but at least one catalog is empty (including after a failure)
    Empty,
    Ready,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn placeholder<T: CatalogEntry>() -> Self {
        Self {
            value: String::new(),
            label: T::placeholder_label().to_string(),
        }
    }

    fn from_entry<T: CatalogEntry>(entry: &T) -> Self {
        Self {
            value: entry.catalog_key().to_string(),
            label: entry.option_label(),
        }
    }
}

/// Result of a successful joint fetch
#[derive(Debug, Clone, Default)]
pub struct LoadedCatalogs {
    pub cryptos: Vec<CryptoAsset>,
    pub fiats: Vec<FiatCurrency>,
}

/// Single owned state of the currency selection page.
///
/// Selections are stored as catalog keys and resolved on read, so a selection
/// can never point at an entry that is not in its catalog.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    phase: LoadPhase,
    cryptos: Catalog<CryptoAsset>,
    fiats: Catalog<FiatCurrency>,
    selected_crypto: Option<String>,
    selected_fiat: Option<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Reducers
    // ------------------------------------------------------------------

    /// Apply the outcome of the initial load.
    ///
    /// Returns `false` when the state already left `Loading` and the result
    /// was ignored.
    pub fn apply_load_result(&mut self, result: Result<LoadedCatalogs, CatalogLoadFailure>) -> bool {
        if self.phase == LoadPhase::Ready {
            log::warn!("Catalog load result arrived after the page was ready; ignored");
            return false;
        }
        self.phase = LoadPhase::Ready;

        match result {
            Ok(loaded) => {
                self.cryptos = build_catalog(loaded.cryptos);
                self.fiats = build_catalog(loaded.fiats);
                self.selected_crypto = first_key(&self.cryptos);
                self.selected_fiat = first_key(&self.fiats);
                log::debug!(
                    "Catalogs loaded: {} crypto, {} fiat",
                    self.cryptos.len(),
                    self.fiats.len()
                );
            }
            Err(e) => {
                log::error!("Error fetching data: {}", e);
            }
        }
        true
    }

    pub fn select_crypto(&mut self, display_id: &str) {
        self.selected_crypto = select_key(&self.cryptos, display_id);
        log::debug!("Selected crypto: {:?}", self.selected_crypto);
    }

    pub fn select_fiat(&mut self, symbol: &str) {
        self.selected_fiat = select_key(&self.fiats, symbol);
        log::debug!("Selected fiat: {:?}", self.selected_fiat);
    }

    // ------------------------------------------------------------------
    // Derived values
    // ------------------------------------------------------------------

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn page_view(&self) -> PageView {
        if self.is_loading() {
            PageView::Loading
        } else if self.cryptos.is_empty() || self.fiats.is_empty() {
            PageView::Empty
        } else {
            PageView::Ready
        }
    }

    pub fn cryptos(&self) -> &Catalog<CryptoAsset> {
        &self.cryptos
    }

    pub fn fiats(&self) -> &Catalog<FiatCurrency> {
        &self.fiats
    }

    pub fn selected_crypto(&self) -> Option<&CryptoAsset> {
        self.selected_crypto
            .as_deref()
            .and_then(|key| self.cryptos.get(key))
    }

    pub fn selected_fiat(&self) -> Option<&FiatCurrency> {
        self.selected_fiat
            .as_deref()
            .and_then(|key| self.fiats.get(key))
    }

    /// Value of the crypto selector; `""` selects the placeholder
    pub fn crypto_value(&self) -> String {
        self.selected_crypto.clone().unwrap_or_default()
    }

    pub fn fiat_value(&self) -> String {
        self.selected_fiat.clone().unwrap_or_default()
    }

    pub fn crypto_options(&self) -> Vec<SelectOption> {
        build_options(&self.cryptos)
    }

    pub fn fiat_options(&self) -> Vec<SelectOption> {
        build_options(&self.fiats)
    }

    /// Both selected, but the crypto network excludes the fiat currency
    pub fn unsupported_pair(&self) -> Option<(&CryptoAsset, &FiatCurrency)> {
        let crypto = self.selected_crypto()?;
        let fiat = self.selected_fiat()?;
        (!crypto.supports_fiat(&fiat.symbol)).then_some((crypto, fiat))
    }
}

fn build_catalog<T: CatalogEntry>(entries: Vec<T>) -> Catalog<T> {
    let catalog = Catalog::new(entries);
    for key in catalog.duplicate_keys() {
        log::warn!(
            "Duplicate key '{}' in {}; first entry is used",
            key,
            T::catalog_name()
        );
    }
    catalog
}

fn first_key<T: CatalogEntry>(catalog: &Catalog<T>) -> Option<String> {
    catalog.first().map(|entry| entry.catalog_key().to_string())
}

fn select_key<T: CatalogEntry>(catalog: &Catalog<T>, key: &str) -> Option<String> {
    catalog.contains(key).then(|| key.to_string())
}

fn build_options<T: CatalogEntry>(catalog: &Catalog<T>) -> Vec<SelectOption> {
    std::iter::once(SelectOption::placeholder::<T>())
        .chain(catalog.iter().map(SelectOption::from_entry))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crypto(display_id: &str, symbol: &str, network: &str) -> CryptoAsset {
        serde_json::from_value(serde_json::json!({
            "coinId": symbol.to_lowercase(),
            "uniqueId": display_id,
            "name": symbol,
            "symbol": symbol,
            "network": { "name": network },
            "image": { "thumb": format!("https://assets.transak.com/images/{symbol}.png") }
        }))
        .unwrap()
    }

    fn fiat(symbol: &str, name: &str) -> FiatCurrency {
        serde_json::from_value(serde_json::json!({
            "symbol": symbol,
            "name": name,
            "icon": "<svg viewBox=\"0 0 1 1\"></svg>",
            "paymentOptions": [
                { "name": "Card", "processingTime": "5 min", "icon": "https://assets.transak.com/images/card.svg" }
            ]
        }))
        .unwrap()
    }

    fn loaded_state() -> SelectionState {
        let mut state = SelectionState::new();
        state.apply_load_result(Ok(LoadedCatalogs {
            cryptos: vec![
                crypto("btc-mainnet", "BTC", "Mainnet"),
                crypto("eth-mainnet", "ETH", "Mainnet"),
                crypto("usdt-polygon", "USDT", "polygon"),
            ],
            fiats: vec![fiat("USD", "US Dollar"), fiat("GBP", "British Pound")],
        }));
        state
    }

    fn failure() -> CatalogLoadFailure {
        CatalogLoadFailure::Status {
            catalog: "crypto-currencies",
            status: 503,
        }
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = SelectionState::new();
        assert!(state.is_loading());
        assert_eq!(state.page_view(), PageView::Loading);
        assert!(state.selected_crypto().is_none());
        assert!(state.selected_fiat().is_none());
    }

    #[test]
    fn test_successful_load_selects_first_entries() {
        let state = loaded_state();
        assert!(!state.is_loading());
        assert_eq!(state.page_view(), PageView::Ready);
        assert_eq!(
            state.selected_crypto().map(|c| c.display_id.as_str()),
            Some("btc-mainnet")
        );
        assert_eq!(state.selected_fiat().map(|f| f.symbol.as_str()), Some("USD"));
    }

    #[test]
    fn test_failed_load_leaves_catalogs_empty() {
        let mut state = SelectionState::new();
        assert!(state.apply_load_result(Err(failure())));
        assert!(!state.is_loading());
        assert!(state.cryptos().is_empty());
        assert!(state.fiats().is_empty());
        assert!(state.selected_crypto().is_none());
        assert_eq!(state.page_view(), PageView::Empty);
    }

    #[test]
    fn test_empty_catalog_selects_nothing() {
        let mut state = SelectionState::new();
        state.apply_load_result(Ok(LoadedCatalogs {
            cryptos: vec![crypto("btc-mainnet", "BTC", "Mainnet")],
            fiats: vec![],
        }));
        assert!(state.selected_crypto().is_some());
        assert!(state.selected_fiat().is_none());
        assert_eq!(state.page_view(), PageView::Empty);
    }

    #[test]
    fn test_ready_never_reenters_loading() {
        let mut state = loaded_state();
        assert!(!state.apply_load_result(Err(failure())));
        assert!(!state.is_loading());
        assert_eq!(state.cryptos().len(), 3);
        assert_eq!(
            state.selected_crypto().map(|c| c.display_id.as_str()),
            Some("btc-mainnet")
        );
    }

    #[test]
    fn test_select_crypto_present_keys() {
        let mut state = loaded_state();
        for key in ["btc-mainnet", "eth-mainnet", "usdt-polygon"] {
            state.select_crypto(key);
            assert_eq!(state.selected_crypto().map(|c| c.display_id.as_str()), Some(key));
            assert_eq!(state.crypto_value(), key);
        }
    }

    #[test]
    fn test_select_crypto_unknown_keys_clear_selection() {
        for key in ["", "btc", "BTC-MAINNET", "btc-mainnet ", "doge-mainnet"] {
            let mut state = loaded_state();
            state.select_crypto(key);
            assert!(state.selected_crypto().is_none(), "key {key:?}");
            assert_eq!(state.crypto_value(), "");
        }
    }

    #[test]
    fn test_select_fiat_symmetric() {
        let mut state = loaded_state();
        state.select_fiat("GBP");
        assert_eq!(state.selected_fiat().map(|f| f.symbol.as_str()), Some("GBP"));
        state.select_fiat("");
        assert!(state.selected_fiat().is_none());
        assert_eq!(state.fiat_value(), "");
    }

    #[test]
    fn test_select_crypto_idempotent() {
        let mut state = loaded_state();
        state.select_crypto("eth-mainnet");
        let once = state.selected_crypto().cloned();
        state.select_crypto("eth-mainnet");
        assert_eq!(state.selected_crypto().cloned(), once);
        assert_eq!(state.crypto_value(), "eth-mainnet");
    }

    #[test]
    fn test_select_before_load_is_noop() {
        let mut state = SelectionState::new();
        state.select_crypto("btc-mainnet");
        assert!(state.selected_crypto().is_none());
        assert!(state.is_loading());
    }

    #[test]
    fn test_single_entry_scenario() {
        let mut state = SelectionState::new();
        state.apply_load_result(Ok(LoadedCatalogs {
            cryptos: vec![crypto("btc-mainnet", "BTC", "Mainnet")],
            fiats: vec![fiat("USD", "US Dollar")],
        }));

        let selected = state.selected_crypto().unwrap();
        assert_eq!(selected.symbol, "BTC");
        assert_eq!(selected.network.name, "Mainnet");

        let usd = state.selected_fiat().unwrap();
        assert_eq!(usd.name, "US Dollar");
        assert_eq!(usd.payment_methods[0].summary(), "Card - 5 min");

        assert_eq!(
            state.crypto_options(),
            vec![
                SelectOption {
                    value: String::new(),
                    label: "Select a cryptocurrency".to_string(),
                },
                SelectOption {
                    value: "btc-mainnet".to_string(),
                    label: "BTC (BTC) - Mainnet".to_string(),
                },
            ]
        );
        assert_eq!(
            state.fiat_options(),
            vec![
                SelectOption {
                    value: String::new(),
                    label: "Select a fiat currency".to_string(),
                },
                SelectOption {
                    value: "USD".to_string(),
                    label: "US Dollar (USD)".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_unknown_fiat_clears_only_fiat() {
        let mut state = loaded_state();
        state.select_crypto("eth-mainnet");
        state.select_fiat("EUR");
        assert!(state.selected_fiat().is_none());
        assert_eq!(
            state.selected_crypto().map(|c| c.display_id.as_str()),
            Some("eth-mainnet")
        );
        assert_eq!(state.page_view(), PageView::Ready);
    }

    #[test]
    fn test_unsupported_pair() {
        let mut restricted = crypto("usdc-solana", "USDC", "solana");
        restricted.network.fiat_exclusions.insert("GBP".to_string());

        let mut state = SelectionState::new();
        state.apply_load_result(Ok(LoadedCatalogs {
            cryptos: vec![restricted],
            fiats: vec![fiat("USD", "US Dollar"), fiat("GBP", "British Pound")],
        }));
        assert!(state.unsupported_pair().is_none());

        state.select_fiat("GBP");
        let (c, f) = state.unsupported_pair().unwrap();
        assert_eq!((c.symbol.as_str(), f.symbol.as_str()), ("USDC", "GBP"));

        state.select_crypto("");
        assert!(state.unsupported_pair().is_none());
    }
}
