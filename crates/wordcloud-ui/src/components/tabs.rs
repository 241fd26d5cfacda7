//! Dataset tab bar

use leptos::prelude::*;
use wordcloud_core::{DatasetKind, TabState};

fn tab_state(tabs: &[TabState; 2], kind: DatasetKind) -> Option<TabState> {
    tabs.iter().copied().find(|t| t.kind == kind)
}

fn active_kind(tabs: &[TabState; 2]) -> Option<&'static str> {
    tabs.iter().find(|t| t.active).map(|t| t.kind.as_str())
}

/// One button per dataset. The group's `data-active-tab` names the active
/// dataset; the active button is highlighted and disabled.
#[component]
pub fn Tabs(tabs: RwSignal<[TabState; 2]>, on_select: Callback<DatasetKind>) -> impl IntoView {
    let buttons = DatasetKind::ALL
        .into_iter()
        .map(|kind| {
            let is_active = move || tabs.with(|t| tab_state(t, kind).is_some_and(|s| s.active));
            let is_disabled = move || tabs.with(|t| tab_state(t, kind).is_some_and(|s| s.disabled));
            view! {
                <button
                    class="tab"
                    class:active=is_active
                    data-type=kind.as_str()
                    disabled=is_disabled
                    on:click=move |_| on_select.run(kind)
                >
                    {kind.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="tabs" data-active-tab=move || tabs.with(active_kind)>
            {buttons}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs_with(active: DatasetKind) -> [TabState; 2] {
        DatasetKind::ALL.map(|kind| TabState {
            kind,
            active: kind == active,
            disabled: kind == active,
        })
    }

    #[test]
    fn test_active_kind_names_the_active_tab() {
        assert_eq!(active_kind(&tabs_with(DatasetKind::Emoji)), Some("emoji"));
        assert_eq!(active_kind(&tabs_with(DatasetKind::Slang)), Some("slang"));
    }

    #[test]
    fn test_tab_state_lookup() {
        let tabs = tabs_with(DatasetKind::Slang);
        assert!(tab_state(&tabs, DatasetKind::Slang).is_some_and(|s| s.disabled));
        assert!(tab_state(&tabs, DatasetKind::Emoji).is_some_and(|s| !s.active));
    }
}
