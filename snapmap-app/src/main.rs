use anyhow::anyhow;
use leptos::*;
use wasm_bindgen::JsCast;

use snapmap_app::App;

fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    log::info!("Start web application");
    if let Err(err) = mount() {
        log::error!("Unable to start web application: {err}");
    }
}

fn mount() -> anyhow::Result<()> {
    let app_container = document()
        .get_element_by_id("app")
        .ok_or_else(|| anyhow!("Missing app container element"))?
        .dyn_into()
        .map_err(|_| anyhow!("App container is not an HtmlElement"))?;
    mount_to(app_container, || view! { <App /> });
    Ok(())
}
