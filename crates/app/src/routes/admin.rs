use dioxus::prelude::*;

use crate::routes::SectionHeader;

/// Admin section home.
#[component]
pub fn AdminHome() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./section.css") }

        div { class: "section-page",
            SectionHeader { title: "Administration" }
            main { class: "section-content",
                h1 { "User Management" }
                p { "Create accounts, assign roles, and keep the organisation tidy." }
                div { class: "section-cards",
                    div { class: "section-card",
                        h2 { "Users" }
                        p { "Invite, update, and remove dashboard accounts." }
                    }
                    div { class: "section-card",
                        h2 { "Roles" }
                        p {
                            "Admins, clients, farmers, and consultants each work in "
                            "their own section of the dashboard."
                        }
                    }
                }
            }
        }
    }
}
