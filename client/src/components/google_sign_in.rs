//! Google Identity Services sign-in button.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the GIS script on demand, renders Google's button into a container
//! div, and enables One Tap. The ID-token credential from Google is handed to
//! `on_credential`; any failure to produce one goes to `on_error`.
//!
//! TRADE-OFFS
//! ==========
//! GIS is driven through a minimal `wasm_bindgen` extern block instead of a
//! wrapper crate; only `initialize`, `renderButton`, and `prompt` are used.

use leptos::prelude::*;

#[component]
pub fn GoogleSignIn(
    #[prop(into)] client_id: String,
    on_credential: Callback<String>,
    on_error: Callback<()>,
) -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(element) = container.get() else {
            return;
        };
        gis::mount(element, client_id.clone(), on_credential, on_error);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (client_id, on_credential, on_error);

    view! { <div class="google-sign-in" node_ref=container></div> }
}

#[cfg(feature = "hydrate")]
mod gis {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast as _;
    use wasm_bindgen::prelude::*;

    const SCRIPT_SRC: &str = "https://accounts.google.com/gsi/client";
    const SCRIPT_ID: &str = "google-identity-services";

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = ["google", "accounts", "id"], js_name = initialize, catch)]
        fn gis_initialize(config: &JsValue) -> Result<(), JsValue>;

        #[wasm_bindgen(js_namespace = ["google", "accounts", "id"], js_name = renderButton, catch)]
        fn gis_render_button(parent: &web_sys::HtmlElement, options: &JsValue) -> Result<(), JsValue>;

        #[wasm_bindgen(js_namespace = ["google", "accounts", "id"], js_name = prompt, catch)]
        fn gis_prompt() -> Result<(), JsValue>;
    }

    /// Render the button now if GIS is loaded, otherwise after the script loads.
    pub fn mount(
        element: web_sys::HtmlDivElement,
        client_id: String,
        on_credential: Callback<String>,
        on_error: Callback<()>,
    ) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            on_error.run(());
            return;
        };
        let show = move || render(&element, &client_id, on_credential, on_error);

        if let Some(script) = document.get_element_by_id(SCRIPT_ID) {
            if script.get_attribute("data-loaded").is_some() {
                show();
            } else {
                listen_for_load(&script, show);
            }
            return;
        }

        let Ok(script) = document.create_element("script") else {
            on_error.run(());
            return;
        };
        script.set_id(SCRIPT_ID);
        let _ = script.set_attribute("src", SCRIPT_SRC);
        let _ = script.set_attribute("async", "");
        let _ = script.set_attribute("defer", "");
        listen_for_load(&script, show);
        if let Some(body) = document.body() {
            if body.append_child(&script).is_err() {
                on_error.run(());
            }
        }
    }

    fn listen_for_load(script: &web_sys::Element, show: impl FnOnce() + 'static) {
        let marker = script.clone();
        let on_load = Closure::once_into_js(move || {
            let _ = marker.set_attribute("data-loaded", "");
            show();
        });
        let _ = script.add_event_listener_with_callback("load", on_load.unchecked_ref());
    }

    fn render(element: &web_sys::HtmlDivElement, client_id: &str, on_credential: Callback<String>, on_error: Callback<()>) {
        let callback = Closure::<dyn Fn(JsValue)>::new(move |response: JsValue| {
            match js_sys::Reflect::get(&response, &"credential".into()).ok().and_then(|v| v.as_string()) {
                Some(credential) => on_credential.run(credential),
                None => on_error.run(()),
            }
        })
        .into_js_value();

        let config = js_sys::Object::new();
        let options = js_sys::Object::new();
        let set = |target: &js_sys::Object, key: &str, value: &JsValue| {
            let _ = js_sys::Reflect::set(target, &key.into(), value);
        };
        set(&config, "client_id", &client_id.into());
        set(&config, "callback", &callback);
        set(&options, "theme", &"outline".into());
        set(&options, "size", &"large".into());
        set(&options, "text", &"signin_with".into());
        set(&options, "shape", &"pill".into());

        let rendered = gis_initialize(&config)
            .and_then(|()| gis_render_button(element, &options))
            .and_then(|()| gis_prompt());
        if let Err(err) = rendered {
            log::warn!("google sign-in unavailable: {err:?}");
            on_error.run(());
        }
    }
}
