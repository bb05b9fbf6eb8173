use dioxus::prelude::*;
use crate::configs::DesignTokens;

#[component]
pub fn Tokens() -> Element {
    let tokens = use_context::<&'static DesignTokens>();

    let screens: Vec<(String, u32, String)> = tokens
        .breakpoints()
        .iter()
        .map(|screen| (screen.name.clone(), screen.min_width_px, screen.media_query()))
        .collect();
    let fonts: Vec<(String, String)> = tokens
        .font_families()
        .iter()
        .map(|family| (family.name.clone(), family.css_value()))
        .collect();

    rsx! {
        div {
            class: "container mx-auto p-4 space-y-8",
            section {
                h2 { class: "text-xl font-bold mb-2", "Breakpoints" }
                table {
                    class: "min-w-full divide-y divide-lm_whitegrey dark:divide-dm_blue",
                    thead {
                        tr {
                            th { class: "py-3.5 px-3 text-left text-sm font-semibold", "Name" }
                            th { class: "py-3.5 px-3 text-left text-sm font-semibold", "Min width" }
                            th { class: "py-3.5 px-3 text-left text-sm font-semibold", "Media query" }
                        }
                    }
                    tbody {
                        {screens.iter().map(|(name, width, query)| rsx! {
                            tr {
                                key: "{name}",
                                td { class: "px-6 py-4", "{name}" }
                                td { class: "px-6 py-4", "{width}px" }
                                td { class: "px-6 py-4", code { "{query}" } }
                            }
                        })}
                    }
                }
            }
            section {
                h2 { class: "text-xl font-bold mb-2", "Fonts" }
                ul {
                    {fonts.iter().map(|(name, value)| rsx! {
                        li {
                            key: "{name}",
                            style: "font-family: {value}",
                            "{name}: {value}"
                        }
                    })}
                }
            }
        }
    }
}
