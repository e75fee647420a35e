use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use guildhall::model::auth::{LoginDto, ViewerDto};

use crate::client::{components::Page, router::Route, util::api};

#[component]
pub fn Home() -> Element {
    let mut viewer = use_signal(|| None::<ViewerDto>);

    // Silently re-validate an existing session on load
    let _ = use_resource(move || async move {
        if let Ok(current) = api::get_viewer().await {
            viewer.set(current);
        }
    });

    rsx!(
        Title { "Guildhall Home" }
        Meta {
            name: "description",
            content: "Guild dashboard for player rosters, gear inventories, and drifter loadouts."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4 w-full max-w-96",
                p { class: "text-2xl", "Guildhall" }
                match viewer() {
                    Some(current) => rsx!(SignedIn { viewer: current }),
                    None => rsx!(LoginForm { viewer }),
                }
                OpenPlayer {}
            }
        }
    )
}

#[component]
fn SignedIn(viewer: ViewerDto) -> Element {
    rsx!(
        div { class: "flex flex-col items-center gap-2",
            p { "Signed in as {viewer.username}" }
            if let Some(player_id) = viewer.player_id {
                Link {
                    to: Route::PlayerLoadout { player_id, token: String::new() },
                    class: "btn btn-primary",
                    "My loadout"
                }
            }
        }
    )
}

#[component]
fn LoginForm(viewer: Signal<Option<ViewerDto>>) -> Element {
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }
        busy.set(true);

        let credentials = LoginDto {
            username: username(),
            password: password(),
        };

        spawn(async move {
            match api::login(&credentials).await {
                Ok(signed_in) => {
                    error.set(None);
                    viewer.set(Some(signed_in));
                }
                Err(err) => error.set(Some(err.message)),
            }
            busy.set(false);
        });
    };

    rsx!(
        form { class: "flex flex-col gap-2 w-full", onsubmit: submit,
            input {
                class: "input input-bordered",
                placeholder: "Username",
                value: "{username}",
                oninput: move |evt| username.set(evt.value()),
            }
            input {
                class: "input input-bordered",
                r#type: "password",
                placeholder: "Password",
                value: "{password}",
                oninput: move |evt| password.set(evt.value()),
            }
            if let Some(message) = error() {
                p { class: "text-error text-sm", "{message}" }
            }
            button { class: "btn btn-primary", r#type: "submit", disabled: busy(), "Sign in" }
        }
    )
}

#[component]
fn OpenPlayer() -> Element {
    let mut player_id = use_signal(String::new);
    let navigator = use_navigator();

    rsx!(
        div { class: "flex gap-2 w-full",
            input {
                class: "input input-bordered flex-1",
                placeholder: "Player ID",
                value: "{player_id}",
                oninput: move |evt| player_id.set(evt.value()),
            }
            button {
                class: "btn",
                disabled: player_id.read().trim().parse::<i64>().is_err(),
                onclick: move |_| {
                    if let Ok(id) = player_id.read().trim().parse::<i64>() {
                        navigator.push(Route::PlayerLoadout { player_id: id, token: String::new() });
                    }
                },
                "Open"
            }
        }
    )
}
