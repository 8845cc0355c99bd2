//! Draggable carousel component shared by the blog slider and testimonials.
//!
//! ARCHITECTURE
//! ============
//! `DraggableCarousel` owns one `carousel::Carousel` engine in a signal and is
//! the only code that touches the DOM on its behalf. It forwards mouse, touch,
//! keyboard, and resize events, executes the returned effects with window
//! listeners and `gloo-timers`, and renders the track from `TrackStyle`.
//! Card renderers stay opaque; they only consult [`DragGuard`] to drop the
//! click that ends a drag.
//!
//! TRADE-OFFS
//! ==========
//! Settle timeouts are fire-and-forget. A late one reaches the engine with an
//! old token and is ignored, so no handle bookkeeping is needed for them.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use carousel::{Carousel as Engine, CarouselConfig, Effect as EngineEffect};
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::util::viewport::{first_touch_x, mouse_x, window_width};
#[cfg(feature = "hydrate")]
use gloo_timers::callback::{Interval, Timeout};

/// Keys that move a focused carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyNav {
    Prev,
    Next,
}

impl KeyNav {
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Prev),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }
}

/// Only the primary button starts a mouse drag.
#[must_use]
pub fn is_primary_press(button: i16) -> bool {
    button == 0
}

fn dot_label(index: usize) -> String {
    format!("{}. slayta git", index + 1)
}

fn index_to_i64(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}

// =============================================================================
// DRAG GUARD
// =============================================================================

/// Click filter provided to card renderers through context.
#[derive(Clone, Copy)]
pub struct DragGuard {
    engine: RwSignal<Engine>,
}

impl DragGuard {
    /// Whether a click on card content right now is the tail of a drag.
    #[must_use]
    pub fn should_suppress(&self) -> bool {
        self.engine
            .try_with_untracked(Engine::should_suppress_click)
            .unwrap_or(false)
    }

    /// Cancel `ev` if it is the click that ends a drag.
    pub fn intercept(&self, ev: &leptos::ev::MouseEvent) {
        if self.should_suppress() {
            ev.prevent_default();
            ev.stop_propagation();
        }
    }
}

/// Guard of the nearest enclosing carousel, if any.
pub fn use_drag_guard() -> Option<DragGuard> {
    use_context::<DragGuard>()
}

// =============================================================================
// HOST
// =============================================================================

#[cfg(feature = "hydrate")]
#[derive(Default)]
struct HostHandles {
    /// Dropping the interval cancels it.
    autoplay: Option<Interval>,
    pointer: Vec<WindowListenerHandle>,
    resize: Option<WindowListenerHandle>,
}

/// Executes engine effects against the browser.
#[derive(Clone, Copy)]
struct CarouselHost {
    engine: RwSignal<Engine>,
    #[cfg(feature = "hydrate")]
    handles: StoredValue<HostHandles, LocalStorage>,
}

impl CarouselHost {
    fn new(config: CarouselConfig) -> Self {
        Self {
            engine: RwSignal::new(Engine::new(config)),
            #[cfg(feature = "hydrate")]
            handles: StoredValue::new_local(HostHandles::default()),
        }
    }

    /// Run an engine operation and carry out the effects it returns.
    fn dispatch(self, op: impl FnOnce(&mut Engine) -> Vec<EngineEffect>) {
        let effects = self.engine.try_update(op).unwrap_or_default();
        for effect in effects {
            self.apply(effect);
        }
    }

    /// Navigation operations return the new index and no effects.
    fn navigate(self, op: impl FnOnce(&mut Engine) -> usize) {
        self.engine.try_update(op);
    }

    #[cfg(feature = "hydrate")]
    fn apply(self, effect: EngineEffect) {
        match effect {
            EngineEffect::ListenPointer => self.listen_pointer(),
            EngineEffect::UnlistenPointer => self.handles.update_value(|h| {
                for handle in h.pointer.drain(..) {
                    handle.remove();
                }
            }),
            EngineEffect::ScheduleSettle { token, delay_ms } => {
                let engine = self.engine;
                Timeout::new(delay_ms, move || {
                    engine.try_update(|c| c.settle(token));
                })
                .forget();
            }
            EngineEffect::StartAutoplay { generation, interval_ms } => {
                let engine = self.engine;
                let tick = Interval::new(interval_ms, move || {
                    engine.try_update(|c| c.autoplay_tick(generation));
                });
                self.handles.update_value(|h| h.autoplay = Some(tick));
            }
            EngineEffect::StopAutoplay => self.handles.update_value(|h| h.autoplay = None),
        }
    }

    #[cfg(not(feature = "hydrate"))]
    fn apply(self, effect: EngineEffect) {
        // Effects never run during the server render.
        let _ = (self, effect);
    }

    #[cfg(feature = "hydrate")]
    fn listen_pointer(self) {
        let engine = self.engine;
        let on_move = window_event_listener(leptos::ev::mousemove, move |ev| {
            let x = mouse_x(&ev);
            engine.try_update(|c| c.on_drag_move(x));
        });
        let on_up = window_event_listener(leptos::ev::mouseup, move |_| {
            self.dispatch(Engine::on_drag_end);
        });
        self.handles.update_value(|h| {
            h.pointer.push(on_move);
            h.pointer.push(on_up);
        });
    }

    /// Measure the window once and follow later resizes.
    #[cfg(feature = "hydrate")]
    fn mount(self) {
        let resize = window_event_listener(leptos::ev::resize, move |_| {
            if let Some(width) = window_width() {
                self.dispatch(|c| c.resize(width));
            }
        });
        self.handles.update_value(|h| h.resize = Some(resize));
        if let Some(width) = window_width() {
            self.dispatch(|c| c.resize(width));
        }
    }

    fn teardown(self) {
        self.dispatch(Engine::shutdown);
        #[cfg(feature = "hydrate")]
        {
            self.handles.try_update_value(|h| {
                h.autoplay = None;
                for handle in h.pointer.drain(..) {
                    handle.remove();
                }
                if let Some(handle) = h.resize.take() {
                    handle.remove();
                }
            });
        }
    }
}

// =============================================================================
// COMPONENT
// =============================================================================

/// Horizontally scrolling slider with drag, swipe, autoplay, and dots.
///
/// Renders nothing for an empty list. With a single page of cards the track
/// is static: no buttons, no dots, no autoplay, and drags are ignored.
#[component]
pub fn DraggableCarousel<T, KF, V, VF>(
    /// Cards in display order.
    #[prop(into)]
    items: Signal<Vec<T>>,
    /// Stable unique key per card.
    item_key: KF,
    /// Card renderer; treated as an opaque slot.
    render: VF,
    /// Accessible name of the carousel region.
    #[prop(into)]
    label: String,
    #[prop(optional)] config: Option<CarouselConfig>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    KF: Fn(&T) -> String + Clone + Send + Sync + 'static,
    V: IntoView + 'static,
    VF: Fn(T) -> V + Clone + Send + Sync + 'static,
{
    let host = CarouselHost::new(config.unwrap_or_default());
    let engine = host.engine;
    provide_context(DragGuard { engine });

    #[cfg(feature = "hydrate")]
    Effect::new(move || host.mount());

    Effect::new(move || {
        let count = items.with(Vec::len);
        host.dispatch(|c| c.set_item_count(count));
    });

    on_cleanup(move || host.teardown());

    let section_ref = NodeRef::<leptos::html::Section>::new();

    let on_mouse_down = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            if !is_primary_press(ev.button()) {
                return;
            }
            // Keeps the browser from starting a text selection or image drag.
            // That also suppresses the default focus, so arrow keys need it restored.
            ev.prevent_default();
            if let Some(section) = section_ref.get() {
                let _ = section.focus();
            }
            let x = mouse_x(&ev);
            host.dispatch(|c| c.on_drag_start(x));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_touch_start = move |ev: leptos::ev::TouchEvent| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(x) = first_touch_x(&ev) {
                host.dispatch(|c| c.on_drag_start(x));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_touch_move = move |ev: leptos::ev::TouchEvent| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(x) = first_touch_x(&ev) {
                engine.try_update(|c| c.on_drag_move(x));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_key_down = move |ev: leptos::ev::KeyboardEvent| {
        #[cfg(feature = "hydrate")]
        {
            match KeyNav::from_key(&ev.key()) {
                Some(KeyNav::Prev) => {
                    ev.prevent_default();
                    host.navigate(Engine::prev);
                }
                Some(KeyNav::Next) => {
                    ev.prevent_default();
                    host.navigate(Engine::next);
                }
                None => {}
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let track_transform = move || engine.with(|c| c.track_style().css_transform());
    let track_transition = move || engine.with(|c| c.track_style().css_transition());
    let card_flex = move || engine.with(Engine::card_flex);
    let dragging = move || engine.with(Engine::is_dragging);
    let show_controls = move || engine.with(Engine::show_controls);
    let at_start = move || engine.with(|c| c.current_index() == 0);
    let at_end = move || engine.with(|c| c.current_index() >= c.max_index());

    view! {
        <Show when=move || items.with(|list| !list.is_empty())>
            <section
                class="carousel"
                class:carousel--dragging=dragging
                role="region"
                aria-roledescription="carousel"
                aria-label=label.clone()
                tabindex="0"
                node_ref=section_ref
                on:keydown=on_key_down
            >
                <div class="carousel__viewport">
                    <div
                        class="carousel__track"
                        style:transform=track_transform
                        style:transition=track_transition
                        on:mousedown=on_mouse_down
                        on:touchstart=on_touch_start
                        on:touchmove=on_touch_move
                        on:touchend=move |_| host.dispatch(Engine::on_drag_end)
                        on:touchcancel=move |_| host.dispatch(Engine::on_drag_end)
                        on:dragstart=move |ev| ev.prevent_default()
                    >
                        <For
                            each=move || items.get()
                            key=item_key.clone()
                            children={
                                let render = render.clone();
                                move |item| {
                                    view! {
                                        <div class="carousel__card" style:flex=card_flex>
                                            {render(item)}
                                        </div>
                                    }
                                }
                            }
                        />
                    </div>
                </div>
                <Show when=show_controls>
                    <button
                        class="carousel__nav carousel__nav--prev"
                        aria-label="Önceki"
                        disabled=at_start
                        on:click=move |_| host.navigate(Engine::prev)
                    >
                        "‹"
                    </button>
                    <button
                        class="carousel__nav carousel__nav--next"
                        aria-label="Sonraki"
                        disabled=at_end
                        on:click=move |_| host.navigate(Engine::next)
                    >
                        "›"
                    </button>
                    <div class="carousel__dots" role="tablist">
                        <For
                            each=move || engine.with(Engine::indicators)
                            key=|dot| (dot.index, dot.active)
                            children=move |dot| {
                                view! {
                                    <button
                                        class="carousel__dot"
                                        class:carousel__dot--active=dot.active
                                        role="tab"
                                        aria-selected=if dot.active { "true" } else { "false" }
                                        aria-label=dot_label(dot.index)
                                        on:click=move |_| host.navigate(|c| c.go_to(index_to_i64(dot.index)))
                                    ></button>
                                }
                            }
                        />
                    </div>
                </Show>
            </section>
        </Show>
    }
}
