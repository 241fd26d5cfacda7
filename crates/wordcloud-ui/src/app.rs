//! Root component and the render pipeline
//!
//! Loading, tab clicks, and resizes all funnel into [`CloudRuntime::dispatch`],
//! which defers the packer to a zero-delay timeout so the event handler
//! returns first. The controller drops any layout that finishes after a newer
//! request was issued.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen_futures::spawn_local;
use wordcloud_core::{
    CloudConfig, CloudController, DatasetKind, HoverState, RenderRequest, Scene, TabState,
    Viewport, load_datasets,
};

use crate::components::{Tabs, Tooltip, WordCloud};
use crate::fetch::HttpSource;
use crate::measure::BrowserMeasure;
use crate::resize::{ResizeHandler, attach_resize_listener, current_viewport};

const EMBEDDED_CONFIG: &str = include_str!("../cloud.toml");

/// Controller plus the generator every render draws from
struct Session {
    controller: CloudController,
    rng: StdRng,
}

/// Reads the embedded `cloud.toml`, falling back to defaults if it is invalid
pub fn load_config() -> CloudConfig {
    CloudConfig::from_toml_str(EMBEDDED_CONFIG).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid cloud.toml, using defaults");
        CloudConfig::default()
    })
}

/// Seed drawn from `Math.random`, the only entropy source in the page
fn browser_seed() -> u64 {
    (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64
}

/// Copyable handles shared by every event handler
#[derive(Clone, Copy)]
struct CloudRuntime {
    session: StoredValue<Session>,
    measure: StoredValue<BrowserMeasure, LocalStorage>,
    scene: RwSignal<Option<Scene>>,
    hover: RwSignal<HoverState>,
    tabs: RwSignal<[TabState; 2]>,
}

impl CloudRuntime {
    fn new(config: CloudConfig) -> Self {
        let measure = BrowserMeasure::detect(&config.font_family, config.font_weight);
        let controller = CloudController::new(config);
        let tabs = controller.tabs();
        Self {
            session: StoredValue::new(Session {
                controller,
                rng: StdRng::seed_from_u64(browser_seed()),
            }),
            measure: StoredValue::new_local(measure),
            scene: RwSignal::new(None),
            hover: RwSignal::new(HoverState::new()),
            tabs: RwSignal::new(tabs),
        }
    }

    fn load(self) {
        let Some(resources) = self
            .session
            .try_with_value(|s| s.controller.config().resources.clone())
        else {
            return;
        };

        spawn_local(async move {
            let viewport = current_viewport();
            let mut rng = StdRng::seed_from_u64(browser_seed());
            let Ok(datasets) = load_datasets(&HttpSource, &resources, viewport, &mut rng).await
            else {
                return;
            };

            let request = self.session.try_update_value(|s| {
                s.controller.on_loaded(datasets, viewport, &mut s.rng)
            });
            match request {
                Some(Ok(request)) => self.dispatch(request),
                Some(Err(e)) => tracing::warn!(error = %e, "Ignoring duplicate load"),
                None => {}
            }
        });
    }

    fn select(self, kind: DatasetKind) {
        let viewport = current_viewport();
        let request = self
            .session
            .try_update_value(|s| s.controller.select_tab(kind, viewport, &mut s.rng))
            .flatten();
        self.dispatch(request);
    }

    fn resize(self, viewport: Viewport) {
        let request = self
            .session
            .try_update_value(|s| s.controller.on_resize(viewport, &mut s.rng))
            .flatten();
        self.dispatch(request);
    }

    fn dispatch(self, request: Option<RenderRequest>) {
        if let Some(tabs) = self.session.try_with_value(|s| s.controller.tabs()) {
            self.tabs.set(tabs);
        }
        let Some(request) = request else {
            return;
        };

        Timeout::new(0, move || self.complete(request)).forget();
    }

    fn complete(self, request: RenderRequest) {
        let scene = self
            .measure
            .try_with_value(|measure| {
                self.session.try_update_value(|s| {
                    let outcome = request.execute(measure, &mut s.rng);
                    s.controller.complete(outcome, &mut s.rng)
                })
            })
            .flatten()
            .flatten();

        if let Some(scene) = scene {
            self.hover.set(HoverState::new());
            self.scene.set(Some(scene));
        }
    }
}

/// Root component: header, tab bar, cloud, and the shared tooltip
#[component]
pub fn App() -> impl IntoView {
    let runtime = CloudRuntime::new(load_config());
    let debounce_ms = runtime
        .session
        .try_with_value(|s| s.controller.config().resize_debounce_ms)
        .unwrap_or_default();

    let listener: StoredValue<Option<ResizeHandler>, LocalStorage> =
        StoredValue::new_local(match attach_resize_listener(debounce_ms, move |viewport| runtime.resize(viewport)) {
            Ok(handler) => Some(handler),
            Err(e) => {
                tracing::error!(error = %e, "Resize handling disabled");
                None
            }
        });
    on_cleanup(move || {
        if let Some(Some(handler)) = listener.try_update_value(Option::take) {
            if let Err(e) = handler.remove() {
                tracing::warn!(error = %e, "Resize listener left attached");
            }
        }
    });

    runtime.load();

    let on_select = Callback::new(move |kind: DatasetKind| runtime.select(kind));

    view! {
        <div class="app-container">
            <header class="app-header">
                <h1>"The Language of Gen Z"</h1>
                <p class="subtitle">"Hover or tap a word to see what it means"</p>
            </header>
            <main class="app-main">
                <Tabs tabs=runtime.tabs on_select=on_select />
                <div id="word-cloud" class="cloud-container">
                    <WordCloud scene=runtime.scene hover=runtime.hover />
                </div>
            </main>
            <Tooltip hover=runtime.hover />
        </div>
    }
}
