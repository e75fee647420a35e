use dioxus::prelude::*;
use dioxus_logger::tracing;

use guildhall::model::{
    api::{ApiError, EquipRequestDto, UnequipRequestDto},
    filter::TypeFilter,
    slot::SlotRef,
    view::{LoadoutView, ViewUpdate},
};

use crate::client::{
    components::{GearPicker, Page, SlotGrid},
    util::api,
};

#[component]
pub fn PlayerLoadout(player_id: i64, token: String) -> Element {
    let mut view = use_signal(|| LoadoutView::new(player_id));
    let mut error = use_signal(|| None::<ApiError>);
    let search = use_signal(String::new);
    let type_filter = use_signal(TypeFilter::default);
    let mut selected = use_signal(|| None::<i64>);
    let token = use_memo(use_reactive!(|token| token));

    // (Re)load whenever the player or link changes; results for a previous player are discarded
    use_effect(use_reactive!(|player_id| {
        if view.peek().player_id() != player_id {
            view.write().switch_player(player_id);
            selected.set(None);
        }

        let ticket = view.write().begin_load();
        let token = token();

        spawn(async move {
            let result = api::get_loadout(player_id, &token).await;
            report(view.write().finish(ticket, result), error);
        });
    }));

    use_drop(move || {
        if let Ok(mut view) = view.try_write() {
            view.close();
        }
    });

    let equip = move |target: SlotRef| {
        let Some(gear_id) = selected() else {
            return;
        };
        let Some(loadout) = view.read().loadout().cloned() else {
            return;
        };

        if let Err(rejection) = loadout.check_equip(gear_id, target) {
            error.set(Some(rejection.into()));
            return;
        }

        let Ok(ticket) = view.write().begin_mutation() else {
            return;
        };
        error.set(None);

        let request = EquipRequestDto {
            gear_id,
            drifter: target.drifter,
            slot: target.slot,
        };

        spawn(async move {
            let result = api::equip_gear(player_id, &token(), &request).await;
            if result.is_ok() {
                selected.set(None);
            }
            report(view.write().finish(ticket, result), error);
        });
    };

    let unequip = move |gear_id: i64| {
        let Ok(ticket) = view.write().begin_mutation() else {
            return;
        };
        error.set(None);

        spawn(async move {
            let result = api::unequip_gear(player_id, &token(), &UnequipRequestDto { gear_id }).await;
            report(view.write().finish(ticket, result), error);
        });
    };

    let current = view.read();
    let busy = current.is_busy();

    rsx!(
        Title { "Loadout | Guildhall" }
        Page { class: "flex flex-col items-center gap-4",
            if let Some(err) = error() {
                div { class: "alert alert-error w-full max-w-[1440px]",
                    span { "{err.message}" }
                    if err.needs_new_link() {
                        span { class: "text-sm", "Ask a guild officer for a new profile link." }
                    }
                }
            }
            match current.loadout().cloned() {
                Some(loadout) => rsx!(
                    div { class: "w-full max-w-[1440px] flex flex-col gap-2",
                        h1 { class: "text-2xl",
                            "{loadout.player.name}"
                        }
                        p { class: "text-sm opacity-70",
                            "Level {loadout.player.level}"
                            if let Some(guild) = loadout.player.guild.as_ref() {
                                " · {guild.name}"
                            }
                        }
                        if !loadout.can_edit {
                            p { class: "text-sm", "Read-only view" }
                        }
                    }
                    div { class: "w-full max-w-[1440px] flex flex-wrap justify-center gap-2",
                        for drifter in loadout.drifters.iter().cloned() {
                            SlotGrid {
                                key: "{drifter.ordinal}",
                                drifter,
                                can_edit: loadout.can_edit,
                                busy,
                                selected: selected(),
                                on_equip: equip,
                                on_unequip: unequip,
                                on_select: move |gear_id| selected.set(Some(gear_id)),
                            }
                        }
                        if loadout.can_edit {
                            GearPicker {
                                available: loadout.available.clone(),
                                search,
                                type_filter,
                                selected,
                                busy,
                            }
                        }
                    }
                ),
                None if error.read().is_none() => rsx!(
                    div { class: "skeleton h-64 w-full max-w-[1440px]" }
                ),
                None => rsx!(),
            }
        }
    )
}

/// Surfaces a failed operation; the previously shown loadout stays in place.
fn report(update: ViewUpdate<ApiError>, mut error: Signal<Option<ApiError>>) {
    match update {
        ViewUpdate::Applied => error.set(None),
        ViewUpdate::Failed(err) => {
            tracing::debug!("Loadout operation failed: {}", err);
            error.set(Some(err));
        }
        ViewUpdate::Discarded => (),
    }
}
