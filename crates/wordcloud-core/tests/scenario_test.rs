//! End-to-end scenarios: load both CSVs, render, switch tabs, resize, hover.
//!
//! These drive the controller exactly as the browser glue does, with an
//! in-memory resource source in place of HTTP.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::collections::HashMap;

use futures::executor::block_on;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordcloud_core::config::ResourceConfig;
use wordcloud_core::hover::DIMMED_OPACITY;
use wordcloud_core::layout::HeuristicMeasure;
use wordcloud_core::{
    CloudConfig, CloudController, DatasetKind, Error, HoverState, ResourceSource, Result, Scene,
    Viewport, load_datasets,
};

const SLANG_CSV: &str = "keyword,description\n\
bet,to understand\n\
rizz,charisma\n\
no cap,no lie\n";

const EMOJI_CSV: &str = "emoji,Description\n\
💀,dying of laughter\n\
🧢,that's a lie\n";

const DESKTOP: Viewport = Viewport {
    width: 1280.0,
    height: 800.0,
};

struct StaticSource {
    bodies: HashMap<String, String>,
}

impl StaticSource {
    fn new(resources: &ResourceConfig) -> Self {
        let mut bodies = HashMap::new();
        bodies.insert(resources.slang.clone(), SLANG_CSV.to_string());
        bodies.insert(resources.emoji.clone(), EMOJI_CSV.to_string());
        Self { bodies }
    }

    fn without(mut self, path: &str) -> Self {
        self.bodies.remove(path);
        self
    }
}

impl ResourceSource for StaticSource {
    async fn fetch(&self, path: &str) -> Result<String> {
        self.bodies
            .get(path)
            .cloned()
            .ok_or_else(|| Error::resource_unavailable(path, "404 Not Found"))
    }
}

fn render(controller: &mut CloudController, request: wordcloud_core::RenderRequest, rng: &mut StdRng) -> Scene {
    let outcome = request.execute(&HeuristicMeasure::default(), rng);
    controller.complete(outcome, rng).expect("current layout renders")
}

fn boot(rng: &mut StdRng) -> (CloudController, Scene) {
    let config = CloudConfig::default();
    let source = StaticSource::new(&config.resources);
    let datasets = block_on(load_datasets(&source, &config.resources, DESKTOP, rng)).unwrap();
    let mut controller = CloudController::new(config);
    let request = controller.on_loaded(datasets, DESKTOP, rng).unwrap().unwrap();
    let scene = render(&mut controller, request, rng);
    (controller, scene)
}

#[test]
fn test_round_trip_load_and_first_render() {
    let mut rng = StdRng::seed_from_u64(2024);
    let (controller, scene) = boot(&mut rng);

    let datasets = controller.datasets().unwrap();
    assert_eq!(datasets.get(DatasetKind::Slang).len(), 3);
    assert_eq!(datasets.get(DatasetKind::Emoji).len(), 2);
    assert_eq!(datasets.get(DatasetKind::Slang)[0].description, "to understand");
    assert_eq!(datasets.get(DatasetKind::Emoji)[1].description, "that's a lie");

    assert_eq!(scene.kind, DatasetKind::Slang);
    assert!(scene.len() <= 3);
    assert!(scene.elements.iter().all(|e| ["bet", "rizz", "no cap"].contains(&e.text.as_str())));
}

#[test]
fn test_failed_resource_renders_nothing() {
    let mut rng = StdRng::seed_from_u64(1);
    let config = CloudConfig::default();
    let source = StaticSource::new(&config.resources).without(&config.resources.emoji);
    let result = block_on(load_datasets(&source, &config.resources, DESKTOP, &mut rng));
    assert_eq!(result.unwrap_err(), Error::InitializationAborted);

    let mut controller = CloudController::new(config);
    assert!(controller.on_resize(DESKTOP, &mut rng).is_none());
}

#[test]
fn test_resize_while_emoji_active_rerenders_emoji() {
    let mut rng = StdRng::seed_from_u64(7);
    let (mut controller, _) = boot(&mut rng);

    let request = controller.select_tab(DatasetKind::Emoji, DESKTOP, &mut rng).unwrap();
    let scene = render(&mut controller, request, &mut rng);
    assert_eq!(scene.kind, DatasetKind::Emoji);

    let request = controller.on_resize(Viewport::new(900.0, 600.0), &mut rng).unwrap();
    let scene = render(&mut controller, request, &mut rng);
    assert_eq!(scene.kind, DatasetKind::Emoji);
    assert!(scene.elements.iter().all(|e| e.text == "💀" || e.text == "🧢"));
    assert_eq!(scene.width, 900.0 - 128.0);
}

#[test]
fn test_hover_shows_description_and_dims_siblings() {
    let mut rng = StdRng::seed_from_u64(11);
    let (_, scene) = boot(&mut rng);

    let (index, word) = scene
        .elements
        .iter()
        .enumerate()
        .find(|(_, e)| e.text == "bet")
        .expect("a lone short word always fits on a desktop canvas");

    let mut hover = HoverState::new();
    hover.enter(index, &word.text, &word.description);
    assert_eq!(hover.tooltip().body, "to understand");
    assert_eq!(hover.tooltip().title, "bet");

    for (i, _) in scene.elements.iter().enumerate() {
        let expected = if i == index { 1.0 } else { DIMMED_OPACITY };
        assert_eq!(hover.opacity_of(i), expected);
    }

    hover.move_to(320.0, 240.0);
    assert_eq!((hover.tooltip().left, hover.tooltip().top), (330.0, 230.0));

    hover.leave();
    assert!(scene.elements.iter().enumerate().all(|(i, _)| hover.opacity_of(i) == 1.0));
}

#[test]
fn test_rapid_tab_switching_applies_only_last_request() {
    let mut rng = StdRng::seed_from_u64(5);
    let (mut controller, _) = boot(&mut rng);

    let to_emoji = controller.select_tab(DatasetKind::Emoji, DESKTOP, &mut rng).unwrap();
    let back_to_slang = controller.select_tab(DatasetKind::Slang, DESKTOP, &mut rng).unwrap();

    let measure = HeuristicMeasure::default();
    let latest = back_to_slang.execute(&measure, &mut rng);
    let stale = to_emoji.execute(&measure, &mut rng);

    // completion order is reversed on purpose
    let applied = controller.complete(latest, &mut rng).unwrap();
    assert!(controller.complete(stale, &mut rng).is_none());
    assert_eq!(applied.kind, DatasetKind::Slang);
    assert_eq!(controller.active(), DatasetKind::Slang);
}
