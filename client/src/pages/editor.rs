//! The editor page: toolbar, canvas, and the save status line.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::editor_host::EditorHost;
use crate::components::toolbar::Toolbar;
use crate::state::config::EditorConfig;
use crate::state::ui::{SaveFeedback, UiState};

/// Single-page editor, configured entirely by the hosting page's query
/// parameters: `imageUrl` points at the image to annotate, `bubbleUrl` at
/// the Bubble workflow that stores the finished point list.
#[component]
pub fn EditorPage() -> impl IntoView {
    let query = use_query_map();
    let config = query.with_untracked(|q| {
        EditorConfig::from_params(q.get("imageUrl"), q.get("bubbleUrl"))
    });
    if config.image_url.is_none() {
        leptos::logging::warn!("no imageUrl query parameter; using the placeholder image");
    }

    provide_context(StoredValue::new(config));
    provide_context(RwSignal::new(UiState::default()));
    provide_context(RwSignal::new(SaveFeedback::default()));

    let feedback = expect_context::<RwSignal<SaveFeedback>>();

    view! {
        <div class="editor-page">
            <Toolbar/>
            <div class="canvas-container">
                <EditorHost/>
            </div>
            <p class=move || feedback.get().css_class()>{move || feedback.get().message()}</p>
        </div>
    }
}
