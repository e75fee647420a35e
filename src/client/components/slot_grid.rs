use dioxus::prelude::*;

use guildhall::model::{
    loadout::DrifterLoadoutDto,
    slot::SlotRef,
};

/// Equipment and mod slots of one drifter
#[component]
pub fn SlotGrid(
    drifter: DrifterLoadoutDto,
    can_edit: bool,
    busy: bool,
    selected: Option<i64>,
    on_equip: EventHandler<SlotRef>,
    on_unequip: EventHandler<i64>,
    on_select: EventHandler<i64>,
) -> Element {
    let ordinal = drifter.ordinal;
    let totals = drifter.totals;

    rsx!(
        div { class: "card shadow-sm w-full max-w-96",
            div { class: "card-body gap-2",
                h2 { class: "card-title",
                    "Drifter {ordinal}: {drifter.name}"
                }
                if !drifter.assigned {
                    p { class: "text-sm opacity-70", "No character is assigned to this drifter." }
                } else {
                    p { class: "text-xs",
                        "HP {totals.health} · EN {totals.energy} · DMG {totals.damage} (+{totals.damage_pct}%) · DEF {totals.defense}"
                    }
                    table { class: "table table-sm",
                        tbody {
                            for slot in drifter.slots {
                                tr { key: "{slot.key}",
                                    td { class: if slot.is_mod { "opacity-70" } else { "" },
                                        "{slot.key}"
                                    }
                                    td {
                                        match &slot.gear {
                                            Some(gear) => rsx!(
                                                span { "{gear.name}" }
                                            ),
                                            None => rsx!(
                                                span { class: "opacity-50", "empty ({slot.accepted_type})" }
                                            ),
                                        }
                                    }
                                    td {
                                        if can_edit {
                                            SlotActions {
                                                target: SlotRef { drifter: ordinal, slot: slot.key },
                                                equipped: slot.gear.as_ref().map(|g| g.id),
                                                busy,
                                                selected,
                                                on_equip,
                                                on_unequip,
                                                on_select,
                                            }
                                        }
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

#[component]
fn SlotActions(
    target: SlotRef,
    equipped: Option<i64>,
    busy: bool,
    selected: Option<i64>,
    on_equip: EventHandler<SlotRef>,
    on_unequip: EventHandler<i64>,
    on_select: EventHandler<i64>,
) -> Element {
    let can_place = selected.is_some() && selected != equipped;

    rsx!(
        div { class: "flex gap-1 justify-end",
            if can_place {
                button {
                    class: "btn btn-xs btn-primary",
                    disabled: busy,
                    onclick: move |_| on_equip.call(target),
                    "Equip"
                }
            }
            if let Some(gear_id) = equipped {
                button {
                    class: "btn btn-xs",
                    disabled: busy,
                    onclick: move |_| on_select.call(gear_id),
                    "Move"
                }
                button {
                    class: "btn btn-xs btn-outline",
                    disabled: busy,
                    onclick: move |_| on_unequip.call(gear_id),
                    "Unequip"
                }
            }
        }
    )
}

