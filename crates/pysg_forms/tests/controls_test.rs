use pysg_forms::{Control, Label, TextField};
use pysg_runtime::{Dynamic, Gui, GuiConfig, HeadlessBackend};

fn headless_gui() -> (HeadlessBackend, Gui) {
    let backend = HeadlessBackend::new();
    let gui = Gui::init(backend.clone(), GuiConfig::default()).expect("headless init");
    (backend, gui)
}

#[test]
fn test_label_builds_fresh_object_per_encode() {
    let (backend, gui) = headless_gui();
    let label = Label::new("Hi");
    let first = label.encode(&gui).expect("encode").as_handle().expect("handle");
    let second = label.encode(&gui).expect("encode").as_handle().expect("handle");
    assert_ne!(first, second);
    assert_eq!(backend.class_of(first).as_deref(), Some("Text"));
    assert_eq!(backend.attr(second, "text"), Some(Dynamic::Str("Hi".into())));
}

#[test]
fn test_label_text_change_applies_on_next_encode() {
    let (backend, gui) = headless_gui();
    let mut label = Label::new("Hi");
    label.set_text("Bye");
    assert_eq!(label.text(), "Bye");
    let handle = label.encode(&gui).expect("encode").as_handle().expect("handle");
    assert_eq!(backend.attr(handle, "text"), Some(Dynamic::Str("Bye".into())));
}

#[test]
fn test_text_field_carries_default_and_key() {
    let (backend, gui) = headless_gui();
    let field = TextField::new("name").with_default_text("Alice");
    assert_eq!(field.key(), "name");
    assert_eq!(field.default_text(), "Alice");

    let handle = field.encode(&gui).expect("encode").as_handle().expect("handle");
    assert_eq!(backend.class_of(handle).as_deref(), Some("InputText"));
    assert_eq!(backend.attr(handle, "key"), Some(Dynamic::Str("name".into())));
    assert_eq!(backend.attr(handle, "default_text"), Some(Dynamic::Str("Alice".into())));
}

#[test]
fn test_text_field_default_text_is_empty_string() {
    let (backend, gui) = headless_gui();
    let field = TextField::new("email");
    let handle = field.encode(&gui).expect("encode").as_handle().expect("handle");
    assert_eq!(backend.attr(handle, "default_text"), Some(Dynamic::Str(String::new())));
}
