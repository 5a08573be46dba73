//! End-to-end scenarios over the library API: load, filter, render, preview.

use brickdex::{
    BrowserState, Catalog, CatalogSource, CardView, CloseTrigger, FilterCriteria, FilterEngine,
    LoadStatus,
};

fn two_item_catalog() -> Catalog {
    Catalog::from_json(
        r#"[
            {"title": "A", "category": "Motors", "difficulty": 2, "tags": ["x"]},
            {"title": "B", "category": "Sensors", "difficulty": 4}
        ]"#,
    )
    .unwrap()
}

#[test]
fn search_narrows_to_one_card_and_reports_one_of_two() {
    let mut state = BrowserState::new();
    state.set_catalog(two_item_catalog());
    state.set_search("a");
    state.set_category(None);
    state.set_difficulty(None);

    assert_eq!(state.visible_count(), 1);
    assert_eq!(state.visible_item(0).unwrap().title.as_deref(), Some("A"));
    assert_eq!(state.status_line(), "Showing 1 of 2 instructions.");
    assert!(!state.is_empty_result());
}

#[test]
fn load_failure_shows_guidance_and_empty_state() {
    let mut state = BrowserState::new();
    state.load(&CatalogSource::parse("no/such/instructions.json"));

    assert!(matches!(state.status(), LoadStatus::Failed(_)));
    assert!(state.status_line().contains("Check that"));
    assert_eq!(state.total_count(), 0);
    assert!(state.is_empty_result());
}

#[test]
fn url_load_failure_is_recovered_with_guidance() {
    // Port 9 (discard) is not listening; the fetch fails without touching
    // the network beyond loopback.
    let mut state = BrowserState::new();
    state.load(&CatalogSource::parse("http://127.0.0.1:9/instructions.json"));

    assert!(matches!(state.status(), LoadStatus::Failed(_)));
    assert!(state.status_line().starts_with("Could not load the catalog"));
    assert!(state.is_empty_result());
}

#[test]
fn unfiltered_criteria_return_the_full_catalog_in_order() {
    let catalog = two_item_catalog();
    let visible = FilterEngine::new(&catalog).apply(&FilterCriteria::default());

    let titles: Vec<_> = visible.iter().filter_map(|i| i.title.as_deref()).collect();
    assert_eq!(titles, vec!["A", "B"]);
}

#[test]
fn filter_is_monotonic_under_added_criteria() {
    let catalog = Catalog::load_embedded().unwrap();
    let engine = FilterEngine::new(&catalog);

    let relaxed = FilterCriteria::new().with_search("motor");
    let baseline = engine.apply(&relaxed).len();
    assert!(baseline > 0);

    for narrowed in [
        relaxed.clone().with_category("Machines"),
        relaxed.clone().with_difficulty("2"),
        relaxed.clone().with_search("motorized"),
    ] {
        assert!(engine.apply(&narrowed).len() <= baseline);
    }
}

#[test]
fn filter_results_are_deep_equal_across_calls() {
    let catalog = Catalog::load_embedded().unwrap();
    let engine = FilterEngine::new(&catalog);
    let criteria = FilterCriteria::new().with_search("rover").with_category("Robots");

    assert_eq!(engine.apply(&criteria), engine.apply(&criteria));
}

#[test]
fn preview_lifecycle_through_the_browser_state() {
    let catalog = Catalog::from_json(
        r#"[
            {"title": "Milo", "pdf_url": "https://drive.google.com/file/d/ABC123/view"},
            {"title": "No document"}
        ]"#,
    )
    .unwrap();

    let mut state = BrowserState::new();
    state.set_catalog(catalog);

    // Opening the first card rewrites the Drive link to its preview form.
    assert!(state.open_preview(0));
    assert_eq!(
        state.modal().url(),
        Some("https://drive.google.com/file/d/ABC123/preview")
    );
    assert_eq!(state.modal().header().unwrap(), "Preview: Milo");

    // Opening a card without a document leaves the current preview alone.
    assert!(!state.open_preview(1));
    assert_eq!(state.modal().header().unwrap(), "Preview: Milo");

    for trigger in [
        CloseTrigger::CloseAction,
        CloseTrigger::Backdrop,
        CloseTrigger::CancelKey,
    ] {
        state.open_preview(0);
        state.close_preview(trigger);
        assert!(!state.modal().is_open());
        assert!(state.modal().url().is_none());
    }
}

#[test]
fn cards_resolve_images_and_previews_per_policy() {
    let catalog = Catalog::from_json(
        r#"[
            {"title": "Bare", "image_url": "foo.png", "pdf_url": "https://example.com/a.pdf"},
            {"title": "Rooted", "image_url": "/a.png"},
            {"title": "Data", "image_url": "data:image/png;base64,AA=="},
            {"title": "None"}
        ]"#,
    )
    .unwrap();

    let cards: Vec<CardView> = catalog.iter().map(CardView::from_item).collect();
    assert_eq!(cards[0].image.as_deref(), Some("img/foo.png"));
    assert_eq!(cards[1].image.as_deref(), Some("/a.png"));
    assert_eq!(cards[2].image.as_deref(), Some("data:image/png;base64,AA=="));
    assert!(cards[3].image.is_none());

    // Non-Drive links preview as-is; missing links preview as nothing.
    assert_eq!(cards[0].preview, "https://example.com/a.pdf");
    assert!(!cards[3].has_preview());
}

#[test]
fn embedded_catalog_feeds_the_whole_pipeline() {
    let mut state = BrowserState::new();
    state.set_catalog(Catalog::load_embedded().unwrap());

    assert!(state.total_count() >= 10);
    assert!(state.categories().contains(&"Robots".to_string()));
    assert_eq!(state.visible_count(), state.total_count());

    state.set_difficulty(Some("3".to_string()));
    assert!(state.visible_count() > 0);
    assert!(state.visible_count() < state.total_count());

    // Every visible card can open a preview: the embedded catalog links
    // Drive file-view URLs, which all rewrite to /preview.
    let card = state.visible_card(0).unwrap();
    assert!(card.preview.ends_with("/preview"));
}
