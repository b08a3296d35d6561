//! Bridge component between Leptos state and the imperative `editor::Editor`.
//!
//! ARCHITECTURE
//! ============
//! The editor crate owns all annotation and view state; this host maps DOM
//! events and toolbar commands into engine calls, applies the actions the
//! engine returns, and schedules repaints. Pointer handlers repaint
//! immediately; effect-driven repaints (commands, animation, resize) are
//! coalesced through a single requestAnimationFrame gate. The dash
//! animation runs on a repeating interval that only advances and repaints
//! while the engine reports a closed path.

use leptos::prelude::*;

use crate::state::config::EditorConfig;
use crate::state::ui::{SaveFeedback, UiState};

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use editor::engine::{Action, Editor};
#[cfg(feature = "hydrate")]
use editor::input::Key as EditorKey;
#[cfg(feature = "hydrate")]
use gloo_timers::callback::Interval;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;
#[cfg(feature = "hydrate")]
use wasm_bindgen_futures::spawn_local;
#[cfg(feature = "hydrate")]
use wire::{SavePayload, WirePoint};

#[cfg(feature = "hydrate")]
use crate::net::api::save_annotation;
#[cfg(feature = "hydrate")]
use crate::util::canvas_input::{map_button, map_mode, map_modifiers, pointer_point};

/// Dash animation cadence in milliseconds.
#[cfg(feature = "hydrate")]
const ANIMATION_TICK_MS: u32 = 33;

#[cfg(feature = "hydrate")]
fn render_now(editor: &Editor) {
    if let Err(e) = editor.render() {
        log::warn!("render failed: {e:?}");
    }
}

/// Apply engine actions: cursor changes go to the style signal, and any
/// `RenderNeeded` triggers one immediate repaint.
#[cfg(feature = "hydrate")]
fn process_actions(actions: &[Action], editor: &Editor, cursor: RwSignal<String>) {
    let mut needs_render = false;
    for action in actions {
        match action {
            Action::SetCursor(c) => cursor.set((*c).to_owned()),
            Action::RenderNeeded => needs_render = true,
        }
    }
    if needs_render {
        render_now(editor);
    }
}

/// Read the canvas element's CSS dimensions and push them to the engine.
///
/// Called before every input event and on window resize so the backing
/// store and coordinate transforms stay accurate.
#[cfg(feature = "hydrate")]
fn sync_viewport(editor: &mut Editor, canvas_ref: &NodeRef<leptos::html::Canvas>) {
    let Some(canvas) = canvas_ref.get_untracked() else {
        return;
    };
    let width = f64::from(canvas.client_width()).max(1.0);
    let height = f64::from(canvas.client_height()).max(1.0);
    editor.set_viewport(width, height);
}

/// Coalesce repaints through requestAnimationFrame: at most one render per
/// displayed frame no matter how many requests arrive in between.
#[cfg(feature = "hydrate")]
fn request_render(editor: &Rc<RefCell<Option<Editor>>>, raf_pending: RwSignal<bool>) {
    if raf_pending.get_untracked() {
        return;
    }
    raf_pending.set(true);

    let Some(window) = web_sys::window() else {
        raf_pending.set(false);
        if let Some(editor) = editor.borrow().as_ref() {
            render_now(editor);
        }
        return;
    };

    let editor_for_cb = Rc::clone(editor);
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        raf_pending.set(false);
        if let Some(editor) = editor_for_cb.borrow().as_ref() {
            render_now(editor);
        }
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>);

    if window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .is_ok()
    {
        *holder.borrow_mut() = Some(cb);
    } else {
        raf_pending.set(false);
        if let Some(editor) = editor.borrow().as_ref() {
            render_now(editor);
        }
    }
}

/// Kick off an image load; once decoded, the element is handed to the
/// engine, which refits the view to the image's pixel size.
#[cfg(feature = "hydrate")]
fn load_image(editor: &Rc<RefCell<Option<Editor>>>, source: &str) {
    let Ok(image) = web_sys::HtmlImageElement::new() else {
        log::warn!("image element creation failed");
        return;
    };
    let editor_for_load = Rc::clone(editor);
    let image_for_load = image.clone();
    let onload = Closure::once(move || {
        if let Some(editor) = editor_for_load.borrow_mut().as_mut() {
            editor.set_image(image_for_load);
            render_now(editor);
        }
    });
    image.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();
    image.set_src(source);
}

/// Canvas host component.
///
/// On hydration, this mounts `editor::Editor` on the canvas element, loads
/// the configured image, wires pointer/keyboard events into the engine, and
/// reacts to toolbar commands.
#[component]
pub fn EditorHost() -> impl IntoView {
    let _config = expect_context::<StoredValue<EditorConfig>>();
    let _ui = expect_context::<RwSignal<UiState>>();
    let _feedback = expect_context::<RwSignal<SaveFeedback>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let cursor = RwSignal::new("crosshair".to_owned());
    #[cfg(feature = "hydrate")]
    let raf_pending = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let animation_tick = Rc::new(RefCell::new(None::<Interval>));
    #[cfg(feature = "hydrate")]
    let editor = Rc::new(RefCell::new(None::<Editor>));

    // Mount: create the engine, size it, start the image load, hook window
    // resize, and start the animation interval.
    #[cfg(feature = "hydrate")]
    {
        let editor = Rc::clone(&editor);
        let animation_tick = Rc::clone(&animation_tick);
        let canvas_ref_mount = canvas_ref;
        Effect::new(move || {
            let Some(canvas) = canvas_ref_mount.get() else {
                return;
            };
            if editor.borrow().is_some() {
                return;
            }

            let mut instance = Editor::new(canvas);
            sync_viewport(&mut instance, &canvas_ref_mount);
            let actions = instance.set_mode(map_mode(_ui.get_untracked().mode));
            process_actions(&actions, &instance, cursor);
            render_now(&instance);
            *editor.borrow_mut() = Some(instance);

            load_image(&editor, &_config.get_value().image_source());

            // Refit and repaint when the hosting page resizes the container.
            let editor_for_resize = Rc::clone(&editor);
            let canvas_ref_resize = canvas_ref_mount;
            let on_resize = Closure::<dyn FnMut()>::new(move || {
                if let Some(editor_mut) = editor_for_resize.borrow_mut().as_mut() {
                    sync_viewport(editor_mut, &canvas_ref_resize);
                }
                request_render(&editor_for_resize, raf_pending);
            });
            if let Some(window) = web_sys::window() {
                if window
                    .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
                    .is_ok()
                {
                    on_resize.forget();
                }
            }

            // Dash animation: advance + repaint only while the path is
            // closed; an open path costs nothing per tick.
            let editor_for_tick = Rc::clone(&editor);
            let tick = Interval::new(ANIMATION_TICK_MS, move || {
                let animate = {
                    let mut borrowed = editor_for_tick.borrow_mut();
                    match borrowed.as_mut() {
                        Some(editor_mut) if editor_mut.core.needs_animation() => {
                            editor_mut.core.advance_dash();
                            true
                        }
                        _ => false,
                    }
                };
                if animate {
                    request_render(&editor_for_tick, raf_pending);
                }
            });
            *animation_tick.borrow_mut() = Some(tick);
        });
    }

    // Mode selection from the toolbar.
    #[cfg(feature = "hydrate")]
    {
        let editor = Rc::clone(&editor);
        Effect::new(move || {
            let mode = map_mode(_ui.get().mode);
            if let Some(editor_mut) = editor.borrow_mut().as_mut() {
                let actions = editor_mut.set_mode(mode);
                process_actions(&actions, editor_mut, cursor);
            }
        });
    }

    // One-shot toolbar commands, keyed by sequence number.
    #[cfg(feature = "hydrate")]
    {
        let zoom_in_editor = Rc::clone(&editor);
        let last_zoom_in_seq = RwSignal::new(0_u64);
        Effect::new(move || {
            let seq = _ui.get().zoom_in_seq;
            if seq == 0 || seq == last_zoom_in_seq.get_untracked() {
                return;
            }
            if let Some(editor_mut) = zoom_in_editor.borrow_mut().as_mut() {
                let actions = editor_mut.zoom_in();
                process_actions(&actions, editor_mut, cursor);
            }
            last_zoom_in_seq.set(seq);
        });

        let zoom_out_editor = Rc::clone(&editor);
        let last_zoom_out_seq = RwSignal::new(0_u64);
        Effect::new(move || {
            let seq = _ui.get().zoom_out_seq;
            if seq == 0 || seq == last_zoom_out_seq.get_untracked() {
                return;
            }
            if let Some(editor_mut) = zoom_out_editor.borrow_mut().as_mut() {
                let actions = editor_mut.zoom_out();
                process_actions(&actions, editor_mut, cursor);
            }
            last_zoom_out_seq.set(seq);
        });

        let undo_editor = Rc::clone(&editor);
        let last_undo_seq = RwSignal::new(0_u64);
        Effect::new(move || {
            let seq = _ui.get().undo_seq;
            if seq == 0 || seq == last_undo_seq.get_untracked() {
                return;
            }
            if let Some(editor_mut) = undo_editor.borrow_mut().as_mut() {
                let actions = editor_mut.undo();
                process_actions(&actions, editor_mut, cursor);
            }
            last_undo_seq.set(seq);
        });
    }

    // Save: serialize the current path and hand it to the relay. The
    // in-flight flag keeps a second press from racing the first.
    #[cfg(feature = "hydrate")]
    {
        let save_editor = Rc::clone(&editor);
        let last_save_seq = RwSignal::new(0_u64);
        Effect::new(move || {
            let seq = _ui.get().save_seq;
            if seq == 0 || seq == last_save_seq.get_untracked() {
                return;
            }
            last_save_seq.set(seq);
            if _feedback.get_untracked().in_flight() {
                return;
            }

            let config = _config.get_value();
            if let Some(blocker) = config.save_blocker() {
                _feedback.set(SaveFeedback::Error(blocker.to_owned()));
                return;
            }
            let (Some(image_url), Some(bubble_save_url)) = (config.image_url, config.bubble_save_url)
            else {
                return;
            };
            let annotations: Vec<WirePoint> = save_editor.borrow().as_ref().map_or_else(
                Vec::new,
                |editor_ref| {
                    editor_ref
                        .core
                        .path
                        .points()
                        .iter()
                        .map(|p| WirePoint::new(p.x, p.y))
                        .collect()
                },
            );
            let payload = SavePayload { image_url, annotations, bubble_save_url };
            _feedback.set(SaveFeedback::Saving);

            let editor_for_save = Rc::clone(&save_editor);
            spawn_local(async move {
                match save_annotation(&payload).await {
                    Ok(response) if response.success => {
                        // Post-save policy: a saved outline starts fresh.
                        if let Some(editor_mut) = editor_for_save.borrow_mut().as_mut() {
                            let actions = editor_mut.clear_path();
                            process_actions(&actions, editor_mut, cursor);
                        }
                        _feedback.set(SaveFeedback::Success(response.message));
                    }
                    Ok(response) => _feedback.set(SaveFeedback::Error(response.message)),
                    Err(message) => _feedback.set(SaveFeedback::Error(message)),
                }
            });
        });
    }

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            let canvas_ref = canvas_ref;
            let editor = Rc::clone(&editor);
            move |ev: leptos::ev::PointerEvent| {
                ev.prevent_default();
                let Some(canvas) = canvas_ref.get() else {
                    return;
                };
                let _ = canvas.focus();
                let _ = canvas.set_pointer_capture(ev.pointer_id());
                if let Some(editor_mut) = editor.borrow_mut().as_mut() {
                    sync_viewport(editor_mut, &canvas_ref);
                    let point = pointer_point(&ev, &canvas);
                    let actions = editor_mut.on_pointer_down(point, map_button(ev.button()));
                    process_actions(&actions, editor_mut, cursor);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            let canvas_ref = canvas_ref;
            let editor = Rc::clone(&editor);
            move |ev: leptos::ev::PointerEvent| {
                let Some(canvas) = canvas_ref.get() else {
                    return;
                };
                if let Some(editor_mut) = editor.borrow_mut().as_mut() {
                    let point = pointer_point(&ev, &canvas);
                    let actions = editor_mut.on_pointer_move(point);
                    process_actions(&actions, editor_mut, cursor);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "hydrate")]
        {
            let canvas_ref = canvas_ref;
            let editor = Rc::clone(&editor);
            move |ev: leptos::ev::PointerEvent| {
                let Some(canvas) = canvas_ref.get() else {
                    return;
                };
                let _ = canvas.release_pointer_capture(ev.pointer_id());
                if let Some(editor_mut) = editor.borrow_mut().as_mut() {
                    sync_viewport(editor_mut, &canvas_ref);
                    let point = pointer_point(&ev, &canvas);
                    let actions = editor_mut.on_pointer_up(point, map_button(ev.button()));
                    process_actions(&actions, editor_mut, cursor);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_leave = {
        #[cfg(feature = "hydrate")]
        {
            let canvas_ref = canvas_ref;
            let editor = Rc::clone(&editor);
            move |ev: leptos::ev::PointerEvent| {
                let Some(canvas) = canvas_ref.get() else {
                    return;
                };
                // Leaving mid-drag ends the gesture where the pointer left.
                if let Some(editor_mut) = editor.borrow_mut().as_mut() {
                    let point = pointer_point(&ev, &canvas);
                    let actions = editor_mut.on_pointer_up(point, map_button(ev.button()));
                    process_actions(&actions, editor_mut, cursor);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_key_down = {
        #[cfg(feature = "hydrate")]
        {
            let editor = Rc::clone(&editor);
            move |ev: leptos::ev::KeyboardEvent| {
                let key = ev.key();
                let handled_here = matches!(key.as_str(), "+" | "=" | "-")
                    || (matches!(key.as_str(), "z" | "Z") && (ev.ctrl_key() || ev.meta_key()));
                if handled_here {
                    ev.prevent_default();
                }
                if let Some(editor_mut) = editor.borrow_mut().as_mut() {
                    let modifiers =
                        map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
                    let actions = editor_mut.on_key_down(&EditorKey(key), modifiers);
                    process_actions(&actions, editor_mut, cursor);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::KeyboardEvent| {}
        }
    };

    view! {
        <canvas
            class="editor-canvas"
            tabindex="0"
            node_ref=canvas_ref
            style:cursor=move || cursor.get()
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointerleave=on_pointer_leave
            on:keydown=on_key_down
        ></canvas>
    }
}
