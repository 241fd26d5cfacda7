//! SVG word cloud
//!
//! Each scene replaces the previous one wholesale. Words sit at offsets from
//! the group's center and fade in one after another; hovering a word dims
//! the rest and feeds the shared tooltip.

use leptos::prelude::*;
use web_sys::{MouseEvent, TouchEvent};
use wordcloud_core::{HoverState, Scene, WordElement};

/// Inline style for the entrance wrapper around one word
fn entrance_style(duration_ms: u32, delay_ms: u32) -> String {
    format!("animation-duration: {duration_ms}ms; animation-delay: {delay_ms}ms;")
}

/// Inline style for a word's text, without the hover opacity
fn word_style(scene: &Scene, element: &WordElement) -> String {
    format!(
        "font-family: {}; font-weight: {}; font-size: {}; fill: {};",
        scene.font_family,
        scene.font_weight,
        element.font_size_css(),
        element.fill
    )
}

fn touch_point(ev: &TouchEvent) -> Option<(f64, f64)> {
    ev.touches()
        .get(0)
        .map(|t| (f64::from(t.page_x()), f64::from(t.page_y())))
}

fn word_view(
    scene: &Scene,
    index: usize,
    element: WordElement,
    hover: RwSignal<HoverState>,
) -> impl IntoView + use<> {
    let base_style = word_style(scene, &element);
    let text_style = move || format!("{base_style} opacity: {};", hover.with(|h| h.opacity_of(index)));
    let enter_style = entrance_style(scene.duration_ms, element.delay_ms);
    let transform = element.transform();

    let WordElement {
        text, description, ..
    } = element;
    let (touch_text, touch_description) = (text.clone(), description.clone());
    let label = text.clone();

    view! {
        <g class="word-enter" style=enter_style>
            <text
                class="word"
                text-anchor="middle"
                transform=transform
                style=text_style
                on:mouseover=move |_: MouseEvent| hover.update(|h| h.enter(index, &text, &description))
                on:touchstart=move |ev: TouchEvent| {
                    hover.update(|h| {
                        h.enter(index, &touch_text, &touch_description);
                        if let Some((x, y)) = touch_point(&ev) {
                            h.move_to(x, y);
                        }
                    });
                }
                on:mousemove=move |ev: MouseEvent| {
                    hover.update(|h| h.move_to(f64::from(ev.page_x()), f64::from(ev.page_y())));
                }
                on:touchmove=move |ev: TouchEvent| {
                    if let Some((x, y)) = touch_point(&ev) {
                        hover.update(|h| h.move_to(x, y));
                    }
                }
                on:mouseout=move |_: MouseEvent| hover.update(HoverState::leave)
                on:touchend=move |_: TouchEvent| hover.update(HoverState::leave)
            >
                {label}
            </text>
        </g>
    }
}

fn scene_view(mut scene: Scene, hover: RwSignal<HoverState>) -> impl IntoView {
    let elements = std::mem::take(&mut scene.elements);
    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| word_view(&scene, index, element, hover))
        .collect_view()
}

#[component]
pub fn WordCloud(scene: RwSignal<Option<Scene>>, hover: RwSignal<HoverState>) -> impl IntoView {
    let dimension = move |pick: fn(&Scene) -> f64| {
        move || scene.with(|s| s.as_ref().map(|s| pick(s).to_string()))
    };

    view! {
        <svg class="cloud" width=dimension(|s| s.width) height=dimension(|s| s.height)>
            <g transform=move || scene.with(|s| s.as_ref().map(Scene::group_transform))>
                {move || scene.get().map(|s| scene_view(s, hover))}
            </g>
        </svg>
    }
}
