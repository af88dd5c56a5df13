use std::time::Duration;

use pysg_forms::{layout, Button, ButtonConfig, Control, FormsError, Label, TextField, Window, WindowState};
use pysg_runtime::headless::TIMEOUT_EVENT;
use pysg_runtime::{Dynamic, Gui, GuiConfig, HeadlessBackend};

fn headless_gui() -> (HeadlessBackend, Gui) {
    let backend = HeadlessBackend::new();
    let gui = Gui::init(backend.clone(), GuiConfig::default()).expect("headless init");
    (backend, gui)
}

#[test]
fn test_window_lifecycle_scenario() {
    let (backend, gui) = headless_gui();
    let greeting = Label::new("Hi");
    let name = TextField::new("name");
    let ok = Button::new(&gui, ButtonConfig::new("OK").with_key("ok")).expect("button");

    let mut window = Window::new(&gui);
    assert_eq!(window.state(), WindowState::Unopened);
    window.open("Demo", &layout![[greeting, name], [ok]]).expect("open");
    assert_eq!(window.state(), WindowState::Open);
    assert_eq!(window.title().expect("title"), "Demo");
    let windows = backend.live_objects("Window");
    assert_eq!(windows.len(), 1);
    let window_handle = windows[0];

    backend.script_event("ok", &[("name", "Alice")]);
    let (event, values) = window.read().expect("read");
    assert_eq!(event, "ok");
    let values = values.expect("values present");
    assert_eq!(values.len(), 1);
    assert_eq!(values.get("name").map(String::as_str), Some("Alice"));

    window.close().expect("close");
    assert_eq!(window.state(), WindowState::Closed);
    assert_eq!(backend.open_windows(), 0);
    assert!(!backend.is_live(window_handle), "close should release the window handle");
}

#[test]
fn test_layout_is_encoded_row_by_row() {
    let (backend, gui) = headless_gui();
    let greeting = Label::new("Hi");
    let name = TextField::new("name").with_default_text("Bob");
    let ok = Button::new(&gui, ButtonConfig::new("OK").with_key("ok")).expect("button");
    let ok_handle = ok.encode(&gui).expect("encode").as_handle().expect("handle");

    let window = Window::create(&gui, "Demo", &layout![[greeting, name], [ok]]).expect("create");
    assert_eq!(window.state(), WindowState::Open);

    // 1 button + 1 label + 1 input + 1 window
    assert_eq!(backend.construct_count(), 4);

    let window_handle = backend.live_objects("Window")[0];
    assert_eq!(backend.class_of(window_handle).as_deref(), Some("Window"));
    let rows = match backend.attr(window_handle, "layout") {
        Some(Dynamic::List(rows)) => rows,
        other => panic!("layout should be a list, got {:?}", other),
    };
    assert_eq!(rows.len(), 2);
    let first: Vec<String> = match &rows[0] {
        Dynamic::List(elements) => elements
            .iter()
            .map(|e| backend.class_of(e.as_handle().expect("handle")).expect("live"))
            .collect(),
        other => panic!("row should be a list, got {:?}", other),
    };
    assert_eq!(first, ["Text", "InputText"]);
    assert_eq!(rows[1], Dynamic::List(vec![Dynamic::Object(ok_handle)]));
}

#[test]
fn test_lenient_read_on_undecodable_event() {
    let (backend, gui) = headless_gui();
    let mut window = Window::create(&gui, "Demo", &layout![]).expect("create");

    backend.script_raw(Dynamic::pair(Dynamic::Int(42), Dynamic::Dict(Vec::new())));
    assert_eq!(window.read().expect("lenient"), (String::new(), None));

    let mixed = Dynamic::Dict(vec![(Dynamic::Str("count".into()), Dynamic::Int(2))]);
    backend.script_raw(Dynamic::pair(Dynamic::Str("ok".into()), mixed));
    assert_eq!(window.read().expect("lenient"), (String::new(), None));

    // Window closed by the user: (None, None)
    assert_eq!(window.read().expect("lenient"), (String::new(), None));
    window.close().expect("close");
}

#[test]
fn test_read_timeout_returns_timeout_event() {
    let (_backend, gui) = headless_gui();
    let mut window = Window::create(&gui, "Demo", &layout![]).expect("create");
    let (event, values) = window.read_timeout(Duration::from_millis(50)).expect("timed read");
    assert_eq!(event, TIMEOUT_EVENT);
    assert_eq!(values, Some(Default::default()));
}

#[test]
fn test_configured_timeout_applies_to_read() {
    let backend = HeadlessBackend::new();
    let config = GuiConfig::from_json_str(r#"{ "read_timeout_ms": 10 }"#).expect("config");
    let gui = Gui::init(backend, config).expect("init");
    let mut window = Window::create(&gui, "Demo", &layout![]).expect("create");
    let (event, _) = window.read().expect("read");
    assert_eq!(event, TIMEOUT_EVENT);
}

#[test]
fn test_title_round_trips_through_handle() {
    let (backend, gui) = headless_gui();
    let mut window = Window::create(&gui, "Demo", &layout![]).expect("create");
    window.set_title("Renamed").expect("set title");
    assert_eq!(window.title().expect("title"), "Renamed");
    assert_eq!(
        backend.attr(backend.live_objects("Window")[0], "title"),
        Some(Dynamic::Str("Renamed".into()))
    );
}

#[test]
fn test_state_machine_guards() {
    let (backend, gui) = headless_gui();
    let mut window = Window::new(&gui);
    assert!(matches!(
        window.read(),
        Err(FormsError::InvalidState { operation: "read", state: WindowState::Unopened })
    ));
    assert!(window.title().is_err());

    window.open("Demo", &layout![]).expect("open");
    let err = window.open("Again", &layout![]).unwrap_err();
    assert_eq!(err, FormsError::InvalidState { operation: "open", state: WindowState::Open });

    window.close().expect("close");
    assert!(matches!(window.read(), Err(FormsError::InvalidState { state: WindowState::Closed, .. })));
    assert!(window.set_title("Late").is_err());
    assert!(window.open("Reopen", &layout![]).is_err());

    // A second close touches nothing foreign
    let constructed = backend.construct_count();
    window.close().expect("second close");
    assert_eq!(window.state(), WindowState::Closed);
    assert_eq!(backend.construct_count(), constructed);
}

#[test]
fn test_close_without_open() {
    let (_backend, gui) = headless_gui();
    let mut window = Window::new(&gui);
    window.close().expect("close");
    assert_eq!(window.state(), WindowState::Closed);
}

#[test]
fn test_window_is_not_closed_on_drop() {
    let (backend, gui) = headless_gui();
    {
        let _window = Window::create(&gui, "Demo", &layout![]).expect("create");
    }
    assert_eq!(backend.open_windows(), 1);
}
