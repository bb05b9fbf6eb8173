use dioxus::prelude::*;
use crate::routes::Route;
use crate::utils::ThemeStore;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component(no_case_check)]
pub fn Navbar() -> Element {
    let mut theme = use_context::<Signal<ThemeStore>>();
    let is_dark = theme.read().is_dark_mode();

    let link_class = if is_dark {
        "text-dm_white hover:text-primary transition-colors"
    } else {
        "text-lm_dark hover:text-primary transition-colors"
    };

    rsx! {
        div {
            document::Link { rel: "stylesheet", href: NAVBAR_CSS }

            nav {
                class: if is_dark {
                    "bg-dm_darkblue shadow-lg transition-colors duration-200"
                } else {
                    "bg-lm_white shadow-lg transition-colors duration-200"
                },
                div {
                    id: "navbar",
                    class: "container mx-auto px-4 py-3 flex justify-between items-center",
                    div {
                        class: "flex items-center space-x-6",
                        Link { class: link_class, to: Route::Home, "Home" }
                        Link { class: link_class, to: Route::Tokens, "Tokens" }
                    }
                    button {
                        class: if is_dark {
                            "p-2 rounded-lg bg-dm_black hover:bg-dm_blue transition-colors"
                        } else {
                            "p-2 rounded-lg bg-lm_whitegrey hover:bg-lm_greyblue transition-colors"
                        },
                        title: if is_dark { "Switch to light mode" } else { "Switch to dark mode" },
                        onclick: move |_| theme.write().toggle_dark_mode(),
                        if is_dark {
                            "🌞"
                        } else {
                            "🌙"
                        }
                    }
                }
            }
            Outlet::<Route> {}
        }
    }
}
