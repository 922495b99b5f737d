use dioxus::prelude::*;
use shared_types::UserRole;

use crate::auth::use_user_role;
use crate::routes::SectionHeader;

/// Section home shared by the client and farmer roles.
#[component]
pub fn ClientHome() -> Element {
    let subtitle = match use_user_role() {
        Some(UserRole::Farmer) => "Your fields at a glance.",
        _ => "Everything growing on your lands, in one place.",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./section.css") }

        div { class: "section-page",
            SectionHeader { title: "My Farm" }
            main { class: "section-content",
                h1 { "Lands & Irrigation" }
                p { "{subtitle}" }
                div { class: "section-cards",
                    div { class: "section-card",
                        h2 { "Lands" }
                        p { "Register fields and track what is planted where." }
                    }
                    div { class: "section-card",
                        h2 { "Sensors" }
                        p { "Soil moisture and climate readings per field." }
                    }
                    div { class: "section-card",
                        h2 { "Valves & Pumps" }
                        p { "Irrigation hardware and the automations that drive it." }
                    }
                }
            }
        }
    }
}
