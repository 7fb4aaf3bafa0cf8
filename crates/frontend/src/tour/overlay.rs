//! Spotlight tour overlay component.
//!
//! Hosts the phase machine from `coordinator`, schedules the cancelable entry
//! timer on the landing route, measures the current step's anchor after layout
//! settles, tracks resizes, and blocks page scrolling while active. Every
//! listener and timer is torn down when the tour leaves `Active` or the shell
//! unmounts.

use super::anchors::{AnchorRects, DomAnchorRects, Rect};
use super::coordinator::TourPhase;
use super::steps::{ArrowDirection, TooltipPlacement, STEPS};
use crate::layout::global_context::{AppGlobalContext, PerformanceMode};
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

/// Route that triggers the tour on first visit.
const LANDING_PATH: &str = "/dashboard";
/// Delay between landing and the first spotlight.
const ENTRY_DELAY_MS: u32 = 2500;
const TOOLTIP_GAP: f64 = 16.0;
const HIGHLIGHT_PAD: f64 = 6.0;

const SCROLL_KEYS: &[&str] = &[
    "ArrowUp", "ArrowDown", "ArrowLeft", "ArrowRight", " ", "PageUp", "PageDown", "Home", "End",
];

/// Window-level listeners that suppress page scroll while the tour is active.
/// Dropping the guard removes them; nothing is leaked across remounts.
struct ScrollLock {
    wheel: Closure<dyn FnMut(web_sys::Event)>,
    touch: Closure<dyn FnMut(web_sys::Event)>,
    keys: Closure<dyn FnMut(web_sys::KeyboardEvent)>,
}

impl ScrollLock {
    fn install() -> Option<Self> {
        let window = web_sys::window()?;

        let wheel = Closure::wrap(Box::new(|ev: web_sys::Event| ev.prevent_default())
            as Box<dyn FnMut(web_sys::Event)>);
        let touch = Closure::wrap(Box::new(|ev: web_sys::Event| ev.prevent_default())
            as Box<dyn FnMut(web_sys::Event)>);
        let keys = Closure::wrap(Box::new(|ev: web_sys::KeyboardEvent| {
            if SCROLL_KEYS.contains(&ev.key().as_str()) {
                ev.prevent_default();
            }
        }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);

        // Wheel and touch listeners must be non-passive for preventDefault to
        // take effect.
        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(false);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "wheel",
                wheel.as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "touchmove",
                touch.as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;
        window
            .add_event_listener_with_callback("keydown", keys.as_ref().unchecked_ref())
            .ok()?;

        Some(Self { wheel, touch, keys })
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("wheel", self.wheel.as_ref().unchecked_ref());
            let _ = window
                .remove_event_listener_with_callback("touchmove", self.touch.as_ref().unchecked_ref());
            let _ = window
                .remove_event_listener_with_callback("keydown", self.keys.as_ref().unchecked_ref());
        }
    }
}

/// Re-measures the current step's anchor on every window resize.
struct ResizeWatch {
    closure: Closure<dyn FnMut()>,
}

impl ResizeWatch {
    fn install(phase: RwSignal<TourPhase>, rect: RwSignal<Option<Rect>>) -> Option<Self> {
        let window = web_sys::window()?;
        let closure = Closure::wrap(Box::new(move || {
            if let Some(step) = phase.get_untracked().step() {
                if let Some(measured) = DomAnchorRects.measure(STEPS[step].anchor) {
                    let _ = rect.try_set(Some(measured));
                }
            }
        }) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { closure })
    }
}

impl Drop for ResizeWatch {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("resize", self.closure.as_ref().unchecked_ref());
        }
    }
}

fn highlight_style(rect: Rect) -> String {
    format!(
        "left: {}px; top: {}px; width: {}px; height: {}px;",
        rect.x - HIGHLIGHT_PAD,
        rect.y - HIGHLIGHT_PAD,
        rect.w + HIGHLIGHT_PAD * 2.0,
        rect.h + HIGHLIGHT_PAD * 2.0,
    )
}

fn tooltip_style(rect: Rect, placement: TooltipPlacement) -> String {
    match placement {
        TooltipPlacement::RightOf => format!(
            "left: {}px; top: {}px; transform: translateY(-50%);",
            rect.x + rect.w + TOOLTIP_GAP,
            rect.y + rect.h / 2.0,
        ),
        TooltipPlacement::Below => format!(
            "left: {}px; top: {}px; transform: translateX(-100%);",
            rect.x + rect.w,
            rect.y + rect.h + TOOLTIP_GAP,
        ),
        TooltipPlacement::Centered => format!(
            "left: {}px; top: {}px; transform: translate(-50%, -50%);",
            rect.x + rect.w / 2.0,
            rect.y + rect.h / 2.0,
        ),
        TooltipPlacement::LeftOf => format!(
            "left: {}px; top: {}px; transform: translate(-100%, -50%);",
            rect.x - TOOLTIP_GAP,
            rect.y + rect.h / 2.0,
        ),
    }
}

fn arrow_class(arrow: ArrowDirection) -> &'static str {
    match arrow {
        ArrowDirection::Left => "tour-tooltip tour-tooltip--arrow-left",
        ArrowDirection::Up => "tour-tooltip tour-tooltip--arrow-up",
        ArrowDirection::None => "tour-tooltip",
        ArrowDirection::Right => "tour-tooltip tour-tooltip--arrow-right",
    }
}

#[component]
pub fn TourOverlay() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let pathname = use_location().pathname;

    let phase = RwSignal::new(TourPhase::Idle);
    let rect = RwSignal::new(None::<Rect>);

    let entry_timer = StoredValue::new_local(None::<Timeout>);
    let scroll_lock = StoredValue::new_local(None::<ScrollLock>);
    let resize_watch = StoredValue::new_local(None::<ResizeWatch>);

    // Entry scheduling: first visit to the landing route this session arms a
    // cancelable timer; navigating away before it fires disarms it.
    Effect::new(move |_| {
        let on_landing = pathname.get() == LANDING_PATH;
        if on_landing {
            if !ctx.tour_done.get_untracked() && phase.get_untracked() == TourPhase::Idle {
                phase.set(TourPhase::Idle.begin());
                let timer = Timeout::new(ENTRY_DELAY_MS, move || {
                    phase.update(|p| *p = p.timer_fired());
                });
                entry_timer.set_value(Some(timer));
            }
        } else if phase.get_untracked() == TourPhase::Pending {
            // Dropping the handle clears the timeout.
            entry_timer.set_value(None);
            phase.update(|p| *p = p.cancel_pending());
        }
    });

    // Measure the step's anchor after the next layout pass. A missing element
    // leaves the previous rectangle in place.
    Effect::new(move |_| {
        if let Some(step) = phase.get().step() {
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                if let Some(measured) = DomAnchorRects.measure(STEPS[step].anchor) {
                    let _ = rect.try_set(Some(measured));
                }
            });
        }
    });

    // Scroll lock and resize tracking live exactly as long as `Active`.
    Effect::new(move |_| {
        if phase.get().is_active() {
            if scroll_lock.with_value(|l| l.is_none()) {
                scroll_lock.set_value(ScrollLock::install());
            }
            if resize_watch.with_value(|w| w.is_none()) {
                resize_watch.set_value(ResizeWatch::install(phase, rect));
            }
        } else {
            scroll_lock.set_value(None);
            resize_watch.set_value(None);
        }
    });

    // Terminal state marks the session so the tour never re-arms.
    Effect::new(move |_| {
        if phase.get() == TourPhase::Done && !ctx.tour_done.get_untracked() {
            ctx.mark_tour_done();
            leptos::logging::log!("tour finished for this session");
        }
    });

    on_cleanup(move || {
        entry_timer.set_value(None);
        scroll_lock.set_value(None);
        resize_watch.set_value(None);
    });

    let advance = move |_| {
        phase.update(|p| *p = p.advance(STEPS.len()));
    };

    view! {
        <Show when=move || phase.get().is_active()>
            <div
                class="tour-overlay"
                class:tour-overlay--static=move || ctx.performance_mode.get() == PerformanceMode::Reduced
                on:click=advance
            >
                {move || {
                    rect.get().map(|r| view! {
                        <div class="tour-overlay__highlight" style=highlight_style(r)></div>
                    })
                }}
                {move || {
                    let step_idx = phase.get().step()?;
                    let step = &STEPS[step_idx];
                    let r = rect.get()?;
                    Some(view! {
                        <div
                            class=arrow_class(step.arrow)
                            style=tooltip_style(r, step.placement)
                            on:click=|ev| ev.stop_propagation()
                        >
                            <div class="tour-tooltip__title">{step.title}</div>
                            <div class="tour-tooltip__text">{step.description}</div>
                            <div class="tour-tooltip__footer">
                                <span class="tour-tooltip__progress">
                                    {format!("{} / {}", step_idx + 1, STEPS.len())}
                                </span>
                                <button
                                    class="tour-tooltip__skip"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        phase.update(|p| *p = p.skip());
                                    }
                                >
                                    "Skip tour"
                                </button>
                            </div>
                        </div>
                    })
                }}
            </div>
        </Show>
    }
}
