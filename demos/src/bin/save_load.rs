//! # Save/Load Demo
//!
//! End-to-end walkthrough of Firethorn persistence:
//! - build a registry with two contexts and mixed component kinds
//! - spawn entities, some carrying transient-only state
//! - save a pretty JSON document through a directory asset source
//! - reload it into a fresh registry and report what came back

use firethorn_assets::{AssetRouter, DirAssets};
use firethorn_ecs::serialize::Format;
use firethorn_ecs::{
    context_archetypes, load_entities, save_entities, Component, Context, ContextRegistry,
};
use serde::{Deserialize, Serialize};

#[derive(Component, Debug, Default, Clone, Serialize, Deserialize)]
struct Position {
    x: f64,
    y: f64,
}

#[derive(Component, Debug, Default, Clone, Serialize, Deserialize)]
struct Velocity {
    x: f64,
    y: f64,
}

#[derive(Component, Debug, Default, Clone, Serialize, Deserialize)]
struct Label(String);

/// Editor-style selection marker; deliberately not persisted.
#[derive(Component, Debug, Default, Clone)]
struct Selected;

fn build_registry() -> ContextRegistry {
    let mut registry = ContextRegistry::new();

    let game = registry.register(Context::new("game"));
    game.register_serializable::<Position>();
    game.register_serializable::<Velocity>();
    game.register::<Selected>();

    let ui = registry.register(Context::new("ui"));
    ui.register_serializable::<Label>();

    registry
}

fn populate(registry: &mut ContextRegistry) {
    let game = registry.get_mut("game").expect("game context is registered");
    game.create_entity_with((Position { x: 0.0, y: 0.0 }, Velocity { x: 1.0, y: 0.0 }))
        .expect("game kinds are registered");
    game.create_entity_with((Position { x: 10.0, y: -3.0 },))
        .expect("game kinds are registered");
    // Selection state exists only for this session
    game.create_entity_with((Position { x: 5.0, y: 5.0 }, Selected))
        .expect("game kinds are registered");

    let ui = registry.get_mut("ui").expect("ui context is registered");
    ui.create_entity_with((Label("main menu".to_string()),))
        .expect("ui kinds are registered");
    ui.create_entity_with((Label("settings".to_string()),))
        .expect("ui kinds are registered");
}

fn report(registry: &ContextRegistry) {
    for context in registry.iter() {
        log::info!(
            "context {:?}: {} entities",
            context.name(),
            context.entity_count()
        );
        for archetype in context_archetypes(context) {
            let kinds: Vec<&str> = archetype
                .components()
                .iter()
                .map(|component| component.component_name())
                .collect();
            log::info!("  archetype {:?}: kinds {:?}", archetype.kind_indexes(), kinds);
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut save_dir = std::env::temp_dir();
    save_dir.push("firethorn-save-load-demo");

    let mut router = AssetRouter::new();
    router.mount("saves", DirAssets::new(&save_dir));

    let mut registry = build_registry();
    populate(&mut registry);

    log::info!("--- before save ---");
    report(&registry);

    pollster::block_on(save_entities(
        &registry,
        &router,
        "saves/world.json",
        Format::Pretty,
    ))
    .expect("save failed");
    log::info!("saved to {}", save_dir.join("world.json").display());

    let mut restored = build_registry();
    let created = pollster::block_on(load_entities(&mut restored, &router, "saves/world.json"))
        .expect("load failed");
    log::info!("--- after load ({created} entities restored) ---");
    report(&restored);

    log::info!(
        "note: the selection marker is transient, so the save holds {} game entities",
        restored
            .get("game")
            .map(|context| context.entity_count())
            .unwrap_or(0)
    );
}
