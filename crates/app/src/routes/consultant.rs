use dioxus::prelude::*;

use crate::routes::SectionHeader;

/// Consultant section home.
#[component]
pub fn ConsultantHome() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./section.css") }

        div { class: "section-page",
            SectionHeader { title: "Consulting" }
            main { class: "section-content",
                h1 { "Seeds & Recommendations" }
                p { "Curate the seed catalog and advise farmers on what to plant." }
                div { class: "section-cards",
                    div { class: "section-card",
                        h2 { "Seed Catalog" }
                        p { "Varieties, growing seasons, and soil preferences." }
                    }
                    div { class: "section-card",
                        h2 { "Recommendations" }
                        p { "Planting advice issued to client lands." }
                    }
                }
            }
        }
    }
}
