use pysg_forms::{layout, Button, ButtonConfig, FormsError, Label, Size, TextField, Window};
use pysg_runtime::{Gui, GuiConfig, HeadlessBackend};

fn main() -> Result<(), FormsError> {
    let backend = HeadlessBackend::new();
    let gui = Gui::init(backend.clone(), GuiConfig::default())?;

    let prompt = Label::new("What is your name?");
    let name = TextField::new("name");
    let mut ok = Button::new(&gui, ButtonConfig::new("OK").with_key("ok"))?;
    ok.set_size(Size::exact(120, 40))?;

    let mut window = Window::create(&gui, "Demo", &layout![[prompt, name], [ok]])?;

    backend.script_event("ok", &[("name", "Alice")]);
    loop {
        let (event, values) = window.read()?;
        if event.is_empty() {
            println!("window closed");
            break;
        }
        let greeting = values.as_ref().and_then(|v| v.get("name")).map(String::as_str).unwrap_or("stranger");
        println!("{} -> hello, {}", event, greeting);
        ok.set_disabled(true)?;
    }

    window.close()
}
