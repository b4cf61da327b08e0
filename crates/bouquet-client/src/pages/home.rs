//! Home page: the bouquet builder.

use bouquet_core::{DragMove, PlacementId, RevealTicket};
use yew::prelude::*;

use crate::components::{BouquetCanvas, FinishButton, FlowerPicker, RevealCard};
use crate::state::{AppAction, AppState};

/// Bouquet builder page. Owns the application state and hands slices of it
/// to the picker, canvas and reveal card.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let state = use_reducer_eq(AppState::default);

    let on_select = {
        let state = state.clone();
        use_callback((), move |kind: String, _| {
            state.dispatch(AppAction::AddFlower(kind));
        })
    };

    let on_move = {
        let state = state.clone();
        use_callback((), move |drag: DragMove, _| {
            state.dispatch(AppAction::MoveFlower(drag));
        })
    };

    let on_remove = {
        let state = state.clone();
        use_callback((), move |id: PlacementId, _| {
            state.dispatch(AppAction::RemoveFlower(id));
        })
    };

    let on_start_over = {
        let state = state.clone();
        use_callback((), move |_: MouseEvent, _| {
            state.dispatch(AppAction::ClearBouquet);
        })
    };

    let on_finish = {
        let state = state.clone();
        use_callback((), move |(): (), _| {
            state.dispatch(AppAction::OpenReveal);
        })
    };

    let on_settle = {
        let state = state.clone();
        use_callback((), move |ticket: RevealTicket, _| {
            state.dispatch(AppAction::SettleReveal(ticket));
        })
    };

    let on_close = {
        let state = state.clone();
        use_callback((), move |(): (), _| {
            state.dispatch(AppAction::CloseReveal);
        })
    };

    html! {
        <main class="app-container">
            <div class="ui-layer">
                <div class="glass-panel sidebar">
                    <FlowerPicker catalog={state.catalog.clone()} {on_select} />
                    if state.can_finish() {
                        <button class="start-over-btn" onclick={on_start_over}>
                            { "Start over" }
                        </button>
                    }
                </div>
                <FinishButton visible={state.can_finish()} {on_finish} />
            </div>

            <BouquetCanvas
                bouquet={state.bouquet.clone()}
                catalog={state.catalog.clone()}
                {on_move}
                {on_remove}
            />

            <RevealCard
                reveal={state.reveal}
                delay_ms={state.config.reveal_delay_ms}
                {on_settle}
                {on_close}
            />
        </main>
    }
}
