use super::state::{PageView, SelectOption};
use super::view_model::CurrencySelectionViewModel;
use crate::shared::config::AppConfig;
use crate::shared::icon_view::IconView;
use crate::shared::icons::icon;
use contracts::domain::common::IconRef;
use leptos::prelude::*;

#[component]
pub fn CurrencySelectionPage() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let vm = CurrencySelectionViewModel::new();
    vm.initialize(config.api.clone());

    on_cleanup(move || {
        log::debug!("Currency selection page disposed");
    });

    // Recomputed on every state change, but catalogs are fixed after load,
    // so the selects are only notified when the options actually differ
    let crypto_options = Memo::new(move |_| vm.crypto_options());
    let fiat_options = Memo::new(move |_| vm.fiat_options());

    view! {
        <div class="currency-page">
            {move || match vm.page_view() {
                PageView::Loading => view! {
                    <div class="currency-page__loading">
                        <div class="spinner"></div>
                    </div>
                }
                .into_any(),
                PageView::Empty => ().into_any(),
                PageView::Ready => view! {
                    <div class="currency-page__content">
                        <CryptoSummary vm=vm />
                        <FiatSummary vm=vm />
                        <PairNotice vm=vm />
                        <CatalogSelect
                            options=crypto_options
                            value=Signal::derive(move || vm.crypto_value())
                            on_change=Callback::new(move |key: String| vm.select_crypto(&key))
                        />
                        <CatalogSelect
                            options=fiat_options
                            value=Signal::derive(move || vm.fiat_value())
                            on_change=Callback::new(move |key: String| vm.select_fiat(&key))
                        />
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn CryptoSummary(vm: CurrencySelectionViewModel) -> impl IntoView {
    move || {
        vm.selected_crypto().map(|asset| {
            view! {
                <div class="card card--crypto">
                    <IconView
                        source={IconRef::Url(asset.icon_url().to_string())}
                        alt={format!("{} logo", asset.name)}
                        size=48
                    />
                    <div class="card__body">
                        <h2 class="card__title">{format!("{} ({})", asset.name, asset.symbol)}</h2>
                        <p class="card__subtitle">{format!("Network: {}", asset.network.name)}</p>
                    </div>
                </div>
            }
        })
    }
}

#[component]
fn FiatSummary(vm: CurrencySelectionViewModel) -> impl IntoView {
    move || {
        vm.selected_fiat().map(|fiat| {
            let methods = fiat
                .payment_methods
                .iter()
                .map(|method| {
                    view! {
                        <li class="payment-methods__item">
                            <IconView
                                source=method.icon.clone()
                                alt={format!("{} icon", method.name)}
                                size=24
                                fallback="payment"
                            />
                            <span>{method.summary()}</span>
                        </li>
                    }
                })
                .collect_view();

            view! {
                <div class="card card--fiat">
                    <div class="card__header">
                        <IconView
                            source=fiat.icon.clone()
                            alt={format!("{} flag", fiat.name)}
                            size=40
                        />
                        <h2 class="card__title">{format!("{} ({})", fiat.name, fiat.symbol)}</h2>
                    </div>
                    <h3 class="card__section-title">"Payment Methods:"</h3>
                    <ul class="payment-methods">{methods}</ul>
                </div>
            }
        })
    }
}

#[component]
fn PairNotice(vm: CurrencySelectionViewModel) -> impl IntoView {
    move || {
        vm.unsupported_pair_notice().map(|text| {
            view! {
                <div class="notice notice--warning">
                    {icon("alert")}
                    <span>{text}</span>
                </div>
            }
        })
    }
}

/// Selector over one catalog. The first option is always the `""` placeholder.
#[component]
fn CatalogSelect(
    /// Placeholder followed by catalog entries
    #[prop(into)]
    options: Signal<Vec<SelectOption>>,
    /// Key of the current selection, `""` when nothing is selected
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            class="currency-select"
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <For
                each=move || options.get()
                key=|opt| opt.value.clone()
                children=move |opt| {
                    let val_clone = opt.value.clone();
                    let is_selected = move || value.get() == val_clone;
                    view! {
                        <option value=opt.value selected=is_selected>
                            {opt.label}
                        </option>
                    }
                }
            />
        </select>
    }
}
