use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBook, FaRightFromBracket};
use dioxus_free_icons::Icon;

pub use crate::client::router::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200 fixed",
            div {
                class: "navbar-start",
                Link { to: Route::Home {},
                    div { class: "flex items-center gap-2",
                        p { class: "text-xl",
                            "Guildhall"
                        }
                        p { class: "text-xs",
                            "v0.1.0.Alpha-1"
                        }
                    }
                }
            }
            div {
                class: "navbar-end flex gap-2",
                a { href: "/api/docs",
                    button { class: "btn btn-ghost flex gap-2",
                        Icon { width: 16, height: 16, icon: FaBook }
                        "API Docs"
                    }
                }
                a { href: "/api/auth/logout",
                    button { class: "btn btn-outline flex gap-2",
                        Icon { width: 16, height: 16, icon: FaRightFromBracket }
                        "Logout"
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
