use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use crate::shared::sanitize::sanitize_svg;
use contracts::domain::common::IconRef;
use leptos::prelude::*;

/// Renders an API icon reference.
///
/// URLs go through the image host allow-list; anything else falls back to
/// the `fallback` glyph. Inline SVG is sanitized before injection.
#[component]
pub fn IconView(
    source: IconRef,
    #[prop(into)] alt: String,
    size: u32,
    #[prop(optional)] fallback: Option<&'static str>,
) -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let side = size.to_string();
    let box_style = format!("width: {size}px; height: {size}px;");

    match source {
        IconRef::Url(url) if config.images.is_allowed(&url) => view! {
            <img class="icon-image" src=url alt=alt width=side.clone() height=side />
        }
        .into_any(),
        IconRef::Url(url) => {
            if !url.is_empty() {
                log::warn!("Image host is not allow-listed, using placeholder: {}", url);
            }
            view! {
                <span class="icon-placeholder" title=alt style=box_style>
                    {icon(fallback.unwrap_or("coin"))}
                </span>
            }
            .into_any()
        }
        IconRef::InlineSvg(markup) => view! {
            <span
                class="icon-inline"
                role="img"
                aria-label=alt
                style=box_style
                inner_html=sanitize_svg(&markup)
            ></span>
        }
        .into_any(),
    }
}
