//! Integration tests for persistence and the public share preview

use invite_studio::{
    render_preview, render_share, Catalog, CanvasSurface, DocumentStore, EditorSession,
    EventRecord, FsStore, Point, SvgConfig, Theme,
};
use tempfile::TempDir;

fn build_session() -> EditorSession {
    let mut session = EditorSession::untitled();
    let mut surface = CanvasSurface::new();
    let catalog = Catalog::standard();

    for (label, at) in [
        ("Text", Point::new(50.0, 40.0)),
        ("Bride's Name", Point::new(50.0, 120.0)),
        ("Groom's Name", Point::new(50.0, 180.0)),
        ("Wedding Date", Point::new(50.0, 240.0)),
    ] {
        let template = catalog.by_label(label).expect("template");
        surface.drop_from_catalog(&mut session, template, at, Point::new(0.0, 0.0));
    }
    session.document_mut().name = "Emma & Jack".to_string();
    session
}

#[test]
fn test_save_reload_and_continue_editing() {
    let dir = TempDir::new().expect("temp dir");
    let store = FsStore::open(dir.path()).expect("open store");

    let session = build_session();
    let id = session.save(&store, None).expect("save");

    let mut reopened = EditorSession::open(&store, &id).expect("open");
    assert_eq!(reopened.elements().len(), 4);

    // Fresh ids in the reopened session never collide with loaded ones
    let catalog = Catalog::standard();
    let mut surface = CanvasSurface::new();
    let template = catalog.by_label("Venue").expect("template");
    let new_id =
        surface.drop_from_catalog(&mut reopened, template, Point::new(50.0, 300.0), Point::new(0.0, 0.0));
    let count = reopened
        .elements()
        .iter()
        .filter(|e| e.id == new_id)
        .count();
    assert_eq!(count, 1);
}

#[test]
fn test_open_missing_falls_back_to_untitled() {
    let dir = TempDir::new().expect("temp dir");
    let store = FsStore::open(dir.path()).expect("open store");

    let (session, notice) = EditorSession::open_or_untitled(&store, "missing");
    assert!(notice.is_some());
    assert!(session.elements().is_empty());
    assert_eq!(session.document().name, "Untitled Design");
}

#[test]
fn test_share_route_renders_placeholders_only() {
    let dir = TempDir::new().expect("temp dir");
    let store = FsStore::open(dir.path()).expect("open store");
    let session = build_session();
    session.save(&store, None).expect("save");

    let id = store.resolve_slug("emma-jack").expect("slug resolves");
    let document = store.load(&id).expect("load");

    let svg = render_share(&document, &SvgConfig::default(), &Theme::default());
    assert!(svg.contains("Sarah"));
    assert!(svg.contains("Michael"));
    assert!(svg.contains("June 15, 2024"));
}

#[test]
fn test_share_output_matches_recordless_preview() {
    let session = build_session();
    let document = session.document();

    let config = SvgConfig::default();
    let theme = Theme::default();
    let share = render_share(document, &config, &theme);
    let preview = render_preview(document, None, &config, &theme);
    assert_eq!(share, preview);
}

#[test]
fn test_live_preview_substitutes_record_values() {
    let session = build_session();
    let record = EventRecord {
        bride_name: Some("Emma".to_string()),
        groom_name: Some("Jack".to_string()),
        wedding_date: Some("September 20, 2026".to_string()),
        ..Default::default()
    };

    let svg = render_preview(
        session.document(),
        Some(&record),
        &SvgConfig::default(),
        &Theme::default(),
    );
    assert!(svg.contains("Emma"));
    assert!(svg.contains("Jack"));
    assert!(svg.contains("September 20, 2026"));
    assert!(!svg.contains("June 15, 2024"));
}

#[test]
fn test_themed_output_carries_palette() {
    let theme = Theme::from_toml(
        r##"
[metadata]
name = "Midnight"

[colors]
canvas = "#101418"

[fonts]
family = "Cormorant Garamond, serif"
"##,
    )
    .expect("theme parses");

    let session = build_session();
    let svg = render_preview(session.document(), None, &SvgConfig::default(), &theme);
    assert!(svg.contains(r##"fill="#101418""##));
    assert!(svg.contains("Cormorant Garamond"));
}
