use dioxus::prelude::*;
use crate::configs::DesignTokens;
use crate::utils::ThemeStore;

#[component]
pub fn Home() -> Element {
    let theme = use_context::<Signal<ThemeStore>>();
    let tokens = use_context::<&'static DesignTokens>();

    let mode = theme.read().mode();
    let label = mode.label();
    let slots: Vec<(String, String)> = tokens
        .colors_for_mode(mode)
        .map(|slot| (slot.name.clone(), slot.css_value()))
        .collect();

    rsx! {
        div {
            class: "container mx-auto p-4",
            h1 {
                class: "text-2xl font-bold mb-4 text-primary",
                "{label} mode"
            }
            p {
                class: "text-lm_darkblue dark:text-dm_white mb-4",
                "Color slots available in the current palette."
            }
            ul {
                class: "space-y-2",
                {slots.iter().map(|(name, value)| rsx! {
                    li {
                        key: "{name}",
                        class: "flex items-center gap-3",
                        span {
                            class: "inline-block w-6 h-6 rounded border border-primarydimmed",
                            style: "background-color: {value}",
                        }
                        span { class: "font-medium", "{name}" }
                        code { class: "text-sm text-primarydimmed", "{value}" }
                    }
                })}
            }
        }
    }
}
