//! The single tooltip shared by every word

use leptos::prelude::*;
use wordcloud_core::HoverState;
use wordcloud_core::hover::Tooltip as TooltipModel;

fn tooltip_style(tooltip: &TooltipModel) -> String {
    format!(
        "visibility: {}; opacity: {}; left: {}px; top: {}px;",
        tooltip.visibility_css(),
        tooltip.opacity(),
        tooltip.left,
        tooltip.top
    )
}

#[component]
pub fn Tooltip(hover: RwSignal<HoverState>) -> impl IntoView {
    view! {
        <div id="tooltip" style=move || hover.with(|h| tooltip_style(h.tooltip()))>
            <div id="tooltip-title">{move || hover.with(|h| h.tooltip().title.clone())}</div>
            <div id="tooltip-body">{move || hover.with(|h| h.tooltip().body.clone())}</div>
        </div>
    }
}
