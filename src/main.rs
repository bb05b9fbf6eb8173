use dioxus::prelude::*;
use theme_switch::configs::{ active_tokens, default_tokens, DesignTokens, FontFamily };
use theme_switch::utils::{ apply_root_marker, ThemeStore };
use theme_switch::Route;

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();

        if let Err(e) = active_tokens() {
            log::error!("Failed to load design tokens: {}", e);
            std::process::exit(1);
        }
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to initialise logging: {}", e).into());
        }
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let tokens: &'static DesignTokens = use_context_provider(|| {
        active_tokens().unwrap_or_else(|e| {
            log::error!("Falling back to built-in design tokens: {}", e);
            default_tokens()
        })
    });
    let marker_class = tokens.dark_mode().marker_class();
    let theme = use_context_provider(|| {
        let mut store = ThemeStore::new();
        apply_root_marker(marker_class, store.is_dark_mode());
        store.subscribe(move |is_dark| apply_root_marker(marker_class, is_dark));
        Signal::new(store)
    });

    let font = tokens.font_families().first().map(FontFamily::css_value).unwrap_or_default();

    rsx! {
        div {
            class: tokens.root_class(theme.read().mode()).unwrap_or_default(),
            style: "font-family: {font}",
            document::Link { rel: "stylesheet", href: MAIN_CSS }
            document::Link { rel: "stylesheet", href: TAILWIND_CSS }
            Router::<Route> {}
        }
    }
}
