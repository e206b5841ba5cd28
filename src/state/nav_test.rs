use super::*;

fn section(id: &str, top: f64, height: f64) -> SectionBounds {
    SectionBounds { id: id.to_owned(), top, height }
}

fn page() -> Vec<SectionBounds> {
    vec![
        section("home", 0.0, 600.0),
        section("features", 600.0, 800.0),
        section("gallery", 1400.0, 700.0),
        section("contact", 2100.0, 500.0),
    ]
}

// =============================================================
// Menu
// =============================================================

#[test]
fn menu_starts_closed() {
    assert!(!NavState::default().menu_open);
}

#[test]
fn toggle_menu_flips_open_state() {
    let mut nav = NavState::default();
    nav.toggle_menu();
    assert!(nav.menu_open);
    nav.toggle_menu();
    assert!(!nav.menu_open);
}

#[test]
fn close_menu_is_idempotent() {
    let mut nav = NavState { menu_open: true, active: None };
    nav.close_menu();
    nav.close_menu();
    assert!(!nav.menu_open);
}

#[test]
fn nav_click_closes_menu_and_marks_link() {
    let mut nav = NavState { menu_open: true, active: Some("home".to_owned()) };
    nav.handle_nav_click("gallery", true);
    assert!(!nav.menu_open);
    assert!(nav.is_active("gallery"));
    assert!(!nav.is_active("home"));
}

#[test]
fn nav_click_to_missing_section_changes_nothing() {
    let mut nav = NavState { menu_open: true, active: Some("home".to_owned()) };
    nav.handle_nav_click("nowhere", false);
    assert!(nav.menu_open);
    assert!(nav.is_active("home"));
}

// =============================================================
// Scroll-spy
// =============================================================

#[test]
fn offset_is_added_to_scroll_position() {
    // 550 + 100 lands inside "features".
    assert_eq!(section_at(&page(), 550.0), Some("features"));
    assert_eq!(section_at(&page(), 450.0), Some("home"));
}

#[test]
fn section_bottom_edge_is_exclusive() {
    // 500 + 100 == 600, the first pixel of "features".
    assert_eq!(section_at(&page(), 500.0), Some("features"));
}

#[test]
fn exactly_one_link_marked_when_one_section_matches() {
    let mut nav = NavState::default();
    assert!(nav.update_active_link(&page(), 1500.0));
    assert_eq!(nav.active.as_deref(), Some("gallery"));
    let marked = page().iter().filter(|s| nav.is_active(&s.id)).count();
    assert_eq!(marked, 1);
}

#[test]
fn top_of_page_with_sections_below_fold_marks_nothing() {
    let below = vec![section("features", 900.0, 400.0), section("contact", 1300.0, 400.0)];
    let mut nav = NavState::default();
    assert!(!nav.update_active_link(&below, 0.0));
    assert_eq!(nav.active, None);
}

#[test]
fn leaving_all_sections_clears_active_link() {
    let mut nav = NavState::default();
    nav.update_active_link(&page(), 1500.0);
    assert!(nav.update_active_link(&page(), 5000.0));
    assert_eq!(nav.active, None);
}

#[test]
fn overlapping_sections_resolve_to_last_in_document_order() {
    let overlapping = vec![section("outer", 0.0, 1000.0), section("inner", 200.0, 300.0)];
    assert_eq!(section_at(&overlapping, 150.0), Some("inner"));
    assert_eq!(section_at(&overlapping, 50.0), Some("outer"));
}

#[test]
fn update_reports_no_change_when_same_section() {
    let mut nav = NavState::default();
    assert!(nav.update_active_link(&page(), 700.0));
    assert!(!nav.update_active_link(&page(), 900.0));
}

#[test]
fn zero_height_section_never_matches() {
    let sections = vec![section("empty", 100.0, 0.0)];
    assert_eq!(section_at(&sections, 0.0), None);
}

// =============================================================
// Links
// =============================================================

#[test]
fn section_id_from_href_strips_hash() {
    assert_eq!(section_id_from_href("#contact"), Some("contact"));
    assert_eq!(section_id_from_href("#"), None);
    assert_eq!(section_id_from_href("https://example.com"), None);
}

#[test]
fn fallback_scroll_skips_navbar_links() {
    assert_eq!(fallback_scroll_target("#features", "nav-link"), None);
    assert_eq!(fallback_scroll_target("#features", "nav-link active"), None);
}

#[test]
fn fallback_scroll_handles_other_in_page_links() {
    assert_eq!(fallback_scroll_target("#home", "nav-logo"), Some("home"));
    assert_eq!(fallback_scroll_target("#contact", ""), Some("contact"));
    assert_eq!(fallback_scroll_target("#", "footer-link"), None);
    assert_eq!(fallback_scroll_target("#features", "nav-linkish"), Some("features"));
}
