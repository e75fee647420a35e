use dioxus::prelude::*;

use guildhall::model::{
    filter::{filter_gear, TypeFilter},
    gear::{GearDto, GearType},
};

/// Searchable list of unequipped gear; clicking an item selects it for equipping
#[component]
pub fn GearPicker(
    available: Vec<GearDto>,
    search: Signal<String>,
    type_filter: Signal<TypeFilter>,
    selected: Signal<Option<i64>>,
    busy: bool,
) -> Element {
    let matches: Vec<GearDto> = filter_gear(&available, &search.read(), *type_filter.read())
        .into_iter()
        .cloned()
        .collect();

    rsx!(
        div { class: "card shadow-sm w-full max-w-96",
            div { class: "card-body gap-2",
                h2 { class: "card-title", "Gear" }
                input {
                    class: "input input-bordered w-full",
                    r#type: "search",
                    placeholder: "Search by name or skill",
                    value: "{search}",
                    oninput: move |evt| search.set(evt.value()),
                }
                select {
                    class: "select select-bordered w-full",
                    onchange: move |evt| {
                        if let Ok(filter) = evt.value().parse::<TypeFilter>() {
                            type_filter.set(filter);
                        }
                    },
                    option { value: "all", selected: *type_filter.read() == TypeFilter::All, "All types" }
                    for gear_type in GearType::ALL {
                        option {
                            value: "{gear_type}",
                            selected: *type_filter.read() == TypeFilter::Only(gear_type),
                            "{gear_type}"
                        }
                    }
                }
                if matches.is_empty() {
                    p { class: "text-sm opacity-70", "No gear matches." }
                }
                ul { class: "menu w-full",
                    for gear in matches {
                        li { key: "{gear.id}",
                            button {
                                class: if *selected.read() == Some(gear.id) { "menu-active" } else { "" },
                                disabled: busy,
                                onclick: move |_| selected.set(Some(gear.id)),
                                div { class: "flex flex-col items-start",
                                    span { class: "font-semibold", "{gear.name}" }
                                    span { class: "text-xs opacity-70",
                                        "{gear.gear_type} · {gear.rarity}"
                                    }
                                    if let Some(skill) = gear.skill.as_deref() {
                                        span { class: "text-xs", "{skill}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
