//! Toolbar: the editor's command surface.
//!
//! Six commands total: two mode selectors plus four one-shot actions. Mode
//! is plain shared state; one-shot actions bump their sequence counter and
//! the canvas host reacts.

use leptos::prelude::*;

use crate::state::ui::{ModeChoice, SaveFeedback, UiState};

#[component]
pub fn Toolbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let feedback = expect_context::<RwSignal<SaveFeedback>>();

    let select_add = move |_| ui.update(|u| u.mode = ModeChoice::AddPoints);
    let select_pan = move |_| ui.update(|u| u.mode = ModeChoice::Pan);
    let zoom_in = move |_| ui.update(|u| u.zoom_in_seq = u.zoom_in_seq.saturating_add(1));
    let zoom_out = move |_| ui.update(|u| u.zoom_out_seq = u.zoom_out_seq.saturating_add(1));
    let undo = move |_| ui.update(|u| u.undo_seq = u.undo_seq.saturating_add(1));
    let save = move |_| ui.update(|u| u.save_seq = u.save_seq.saturating_add(1));

    view! {
        <div class="toolbar">
            <button
                class="toolbar__button"
                class:toolbar__button--active=move || ui.get().mode == ModeChoice::AddPoints
                on:click=select_add
            >
                "Add points"
            </button>
            <button
                class="toolbar__button"
                class:toolbar__button--active=move || ui.get().mode == ModeChoice::Pan
                on:click=select_pan
            >
                "Move"
            </button>
            <button class="toolbar__button" on:click=zoom_in>"Zoom in"</button>
            <button class="toolbar__button" on:click=zoom_out>"Zoom out"</button>
            <button class="toolbar__button" on:click=undo>"Undo"</button>
            <button
                class="toolbar__button toolbar__button--save"
                prop:disabled=move || feedback.get().in_flight()
                on:click=save
            >
                "Save"
            </button>
        </div>
    }
}
