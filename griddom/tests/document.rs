use griddom::{find_element, Content, Document, Element, MountError};

fn sample_tree() -> Element {
    Element::box_()
        .id("root")
        .child(Element::box_().id("sidebar"))
        .child(
            Element::box_()
                .id("main")
                .child(Element::text("hello").id("greeting")),
        )
}

// ============================================================================
// Tree Search
// ============================================================================

#[test]
fn test_find_element_nested() {
    let root = sample_tree();

    assert!(find_element(&root, "root").is_some());
    assert!(find_element(&root, "sidebar").is_some());
    assert_eq!(
        find_element(&root, "greeting").map(|e| &e.content),
        Some(&Content::Text("hello".into()))
    );
    assert!(find_element(&root, "missing").is_none());
}

#[test]
fn test_generated_ids_are_unique() {
    let a = Element::box_();
    let b = Element::box_();
    assert_ne!(a.id, b.id);
}

// ============================================================================
// Mounting
// ============================================================================

#[test]
fn test_mount_replaces_container_content() {
    let mut doc = Document::with_root(sample_tree());

    doc.mount("main", Element::text("replaced").id("widget"))
        .unwrap();

    // Old child is gone, new child is reachable
    assert!(doc.get("greeting").is_none());
    assert_eq!(
        doc.get("widget").map(|e| &e.content),
        Some(&Content::Text("replaced".into()))
    );
}

#[test]
fn test_mount_unknown_container_fails() {
    let mut doc = Document::with_root(sample_tree());

    let err = doc
        .mount("nope", Element::text("x"))
        .unwrap_err();
    assert_eq!(err, MountError::ContainerNotFound("nope".into()));

    // Tree untouched
    assert!(doc.get("greeting").is_some());
}

#[test]
fn test_unmount_clears_container() {
    let mut doc = Document::with_root(sample_tree());

    doc.unmount("main").unwrap();
    assert!(doc.get("greeting").is_none());
    assert_eq!(doc.get("main").map(|e| &e.content), Some(&Content::None));
}

// ============================================================================
// Element Builders
// ============================================================================

#[test]
fn test_interactive_constructors() {
    let button = Element::button("Go");
    assert!(button.clickable);
    assert!(button.focusable);
    assert_eq!(button.content.text(), Some("Go"));

    let input = Element::text_input("abc").placeholder("type here");
    assert_eq!(
        input.content,
        Content::TextInput {
            value: "abc".into(),
            placeholder: Some("type here".into()),
        }
    );

    let checkbox = Element::checkbox(true).label("approve");
    assert_eq!(
        checkbox.content,
        Content::Checkbox {
            checked: true,
            label: Some("approve".into()),
        }
    );

    let link = Element::link("https://example.com", "Open");
    assert!(link.clickable);
}

#[test]
fn test_data_attributes_round_trip() {
    let el = Element::button("Run")
        .data("handler", "approve")
        .data("row", "3");

    assert_eq!(el.get_data("handler").map(String::as_str), Some("approve"));
    assert_eq!(el.get_data("row").map(String::as_str), Some("3"));
    assert_eq!(el.get_data("col"), None);
}
