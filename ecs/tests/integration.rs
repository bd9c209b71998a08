use firethorn_assets::{AssetRouter, MemoryAssets};
use firethorn_ecs::serialize::{
    deserialize_contexts, serialize_contexts, validate_all, ComponentData, ContextData,
    DeserializeError, Format,
};
use firethorn_ecs::{
    context_archetypes, load_entities, save_entities, Component, Context, ContextRegistry,
};
use serde::{Deserialize, Serialize};

#[derive(Component, Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct Position {
    x: f64,
    y: f64,
}

#[derive(Component, Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct Velocity {
    x: f64,
    y: f64,
}

#[derive(Component, Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct Label(String);

// Transient: registered without save support
#[derive(Component, Debug, Default, Clone, PartialEq)]
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

fn memory_router() -> AssetRouter {
    let mut router = AssetRouter::new();
    router.mount("saves", MemoryAssets::new());
    router
}

// ---------------------------------------------------------------------------
// Full round trip: spawn → save → load → verify
// ---------------------------------------------------------------------------

#[test]
fn save_load_round_trip() {
    let router = memory_router();

    // Populate the source registry
    let mut source = build_registry();
    let game = source.get_mut("game").unwrap();
    game.create_entity_with((Position { x: 1.0, y: 2.0 }, Velocity { x: 0.5, y: -0.5 }))
        .unwrap();
    game.create_entity_with((Position { x: 3.0, y: 4.0 }, Selected))
        .unwrap();
    let ui = source.get_mut("ui").unwrap();
    ui.create_entity_with((Label("menu".to_string()),)).unwrap();

    pollster::block_on(save_entities(
        &source,
        &router,
        "saves/world.json",
        Format::Compact,
    ))
    .unwrap();

    // Restore into a fresh registry with the same catalogs
    let mut target = build_registry();
    let created =
        pollster::block_on(load_entities(&mut target, &router, "saves/world.json")).unwrap();
    assert_eq!(created, 3);

    let game = target.get("game").unwrap();
    assert_eq!(game.entity_count(), 2);
    let entities = game.entities();
    assert_eq!(
        game.get::<Position>(entities[0]),
        Some(&Position { x: 1.0, y: 2.0 })
    );
    assert_eq!(
        game.get::<Velocity>(entities[0]),
        Some(&Velocity { x: 0.5, y: -0.5 })
    );
    assert_eq!(
        game.get::<Position>(entities[1]),
        Some(&Position { x: 3.0, y: 4.0 })
    );
    // Transient state does not survive the trip
    assert!(!game.has::<Selected>(entities[1]));

    let ui = target.get("ui").unwrap();
    assert_eq!(ui.entity_count(), 1);
    assert_eq!(
        ui.get::<Label>(ui.entities()[0]),
        Some(&Label("menu".to_string()))
    );
}

// ---------------------------------------------------------------------------
// Snapshot shape: one serializable entity, one transient-only entity
// ---------------------------------------------------------------------------

#[test]
fn transient_only_entities_are_dropped_from_documents() {
    let mut registry = ContextRegistry::new();
    let game = registry.register(Context::new("game"));
    game.register_serializable::<Position>();
    game.register::<Selected>();

    game.create_entity_with((Position { x: 1.0, y: 2.0 },))
        .unwrap();
    game.create_entity_with((Selected,)).unwrap();

    let text = serialize_contexts(&registry, Format::Compact).unwrap();
    let records = deserialize_contexts(&text).unwrap();

    // One context record, one entity record, one component
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].context, "game");
    assert_eq!(records[0].entities.len(), 1);
    assert_eq!(records[0].entities[0].len(), 1);
    assert_eq!(records[0].entities[0][0].kind, "Position");
    assert_eq!(
        records[0].entities[0][0].data,
        serde_json::json!({ "x": 1.0, "y": 2.0 })
    );
}

// ---------------------------------------------------------------------------
// Unknown context: descriptive error, no mutation
// ---------------------------------------------------------------------------

#[test]
fn loading_into_a_registry_missing_the_context_fails_cleanly() {
    let router = memory_router();

    let mut source = build_registry();
    source
        .get_mut("game")
        .unwrap()
        .create_entity_with((Position::default(),))
        .unwrap();
    pollster::block_on(save_entities(
        &source,
        &router,
        "saves/world.json",
        Format::Compact,
    ))
    .unwrap();

    // Target registry only knows "ui"
    let mut target = ContextRegistry::new();
    target
        .register(Context::new("ui"))
        .register_serializable::<Label>();

    let err =
        pollster::block_on(load_entities(&mut target, &router, "saves/world.json")).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("game"), "unhelpful error: {message}");
    assert_eq!(target.get("ui").unwrap().entity_count(), 0);
}

#[test]
fn empty_registry_reports_unknown_context_for_any_document() {
    let mut empty = ContextRegistry::new();
    let records = deserialize_contexts(
        r#"[{"context":"game","entities":[]}]"#,
    )
    .unwrap();

    let err = firethorn_ecs::serialize::apply_context_data(&mut empty, &records).unwrap_err();
    assert!(matches!(err, DeserializeError::UnknownContext { .. }));
}

// ---------------------------------------------------------------------------
// Archetypes survive the round trip
// ---------------------------------------------------------------------------

#[test]
fn archetypes_are_all_retained_after_reload() {
    let router = memory_router();

    let mut source = build_registry();
    let game = source.get_mut("game").unwrap();
    game.create_entity_with((Position::default(),)).unwrap();
    game.create_entity_with((Velocity::default(),)).unwrap();
    game.create_entity_with((Position::default(), Velocity::default()))
        .unwrap();

    pollster::block_on(save_entities(
        &source,
        &router,
        "saves/world.json",
        Format::Pretty,
    ))
    .unwrap();

    let mut target = build_registry();
    pollster::block_on(load_entities(&mut target, &router, "saves/world.json")).unwrap();

    let archetypes = context_archetypes(target.get("game").unwrap());
    let index_sets: Vec<&[usize]> = archetypes.iter().map(|a| a.kind_indexes()).collect();
    assert_eq!(index_sets, vec![&[0][..], &[0, 1][..], &[1][..]]);
}

// ---------------------------------------------------------------------------
// Authoring validation
// ---------------------------------------------------------------------------

#[test]
fn authored_records_with_duplicate_kinds_fail_validation() {
    let records = vec![ContextData {
        context: "game".to_string(),
        entities: vec![vec![
            ComponentData {
                kind: "Position".to_string(),
                data: serde_json::json!({ "x": 0.0, "y": 0.0 }),
            },
            ComponentData {
                kind: "Position".to_string(),
                data: serde_json::json!({ "x": 1.0, "y": 1.0 }),
            },
        ]],
    }];

    let err = validate_all(&records).unwrap_err();
    assert!(err.to_string().contains("Position"));
}

// ---------------------------------------------------------------------------
// Derive macro
// ---------------------------------------------------------------------------

#[test]
fn derive_generates_the_kind_name() {
    assert_eq!(Position::NAME, "Position");
    assert_eq!(Selected::NAME, "Selected");

    let value = Label("x".to_string());
    assert_eq!(value.component_name(), "Label");
}

// ---------------------------------------------------------------------------
// Filesystem-backed documents
// ---------------------------------------------------------------------------

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn round_trip_through_a_directory_source() {
    use firethorn_assets::DirAssets;

    let mut root = std::env::temp_dir();
    root.push(format!("firethorn-ecs-it-{}", std::process::id()));

    let mut router = AssetRouter::new();
    router.mount("saves", DirAssets::new(&root));

    let mut source = build_registry();
    source
        .get_mut("game")
        .unwrap()
        .create_entity_with((Position { x: 9.0, y: 8.0 },))
        .unwrap();

    pollster::block_on(save_entities(
        &source,
        &router,
        "saves/slot1/world.json",
        Format::Pretty,
    ))
    .unwrap();

    let mut target = build_registry();
    let created =
        pollster::block_on(load_entities(&mut target, &router, "saves/slot1/world.json"))
            .unwrap();
    assert_eq!(created, 1);

    let game = target.get("game").unwrap();
    assert_eq!(
        game.get::<Position>(game.entities()[0]),
        Some(&Position { x: 9.0, y: 8.0 })
    );

    std::fs::remove_dir_all(&root).unwrap();
}
