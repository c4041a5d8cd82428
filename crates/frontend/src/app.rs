use crate::shared::config::load_config;
use crate::usecases::u101_currency_selection::CurrencySelectionPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the build-time configuration to the whole app via context.
    let config = load_config();
    log::debug!("API base: {}", config.api.base_url);
    provide_context(config);

    view! {
        <CurrencySelectionPage />
    }
}
