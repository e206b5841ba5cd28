//! Bridge component between Leptos state and the imperative `chart::engine::Chart`.
//!
//! ARCHITECTURE
//! ============
//! The chart crate owns animation and drawing; this host measures the
//! canvas, drives the frame loop while the chart asks for frames, and
//! redraws when the viewport or the theme changes.

use leptos::prelude::*;

use crate::app::ViewportState;
#[cfg(feature = "csr")]
use crate::state::theme::ThemeState;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use chart::consts::FALLBACK_LABEL_COLOR;
#[cfg(feature = "csr")]
use chart::engine::Chart;
#[cfg(feature = "csr")]
use chart::series::Series;
#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(feature = "csr")]
type SharedChart = Rc<RefCell<Option<Chart>>>;

#[cfg(feature = "csr")]
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Match the backing store to the displayed box at device pixel density.
#[cfg(feature = "csr")]
fn sync_viewport(chart: &mut Chart, canvas: &web_sys::HtmlCanvasElement) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let rect = canvas.get_bounding_client_rect();
    chart.set_viewport(rect.width(), rect.height(), window.device_pixel_ratio());
}

#[cfg(feature = "csr")]
fn draw(chart: &Chart) {
    let color = crate::util::dom::css_variable("--text-color");
    if let Err(err) = chart.render(color.as_deref().unwrap_or(FALLBACK_LABEL_COLOR)) {
        log::warn!("chart render failed: {err:?}");
    }
}

#[cfg(feature = "csr")]
fn schedule(frame: &FrameCallback) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let slot = frame.borrow();
    let Some(cb) = slot.as_ref() else {
        return false;
    };
    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(_) => true,
        Err(err) => {
            log::warn!("requestAnimationFrame failed: {err:?}");
            false
        }
    }
}

/// Tick and redraw once per frame until the animation reports `Done`.
#[cfg(feature = "csr")]
fn run_animation(chart: &SharedChart) {
    let frame: FrameCallback = Rc::new(RefCell::new(None));
    let frame_for_cb = Rc::clone(&frame);
    let chart_for_cb = Rc::clone(chart);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        let more = match chart_for_cb.borrow_mut().as_mut() {
            Some(chart) => {
                let more = chart.tick();
                draw(chart);
                more
            }
            None => false,
        };
        if !more || !schedule(&frame_for_cb) {
            frame_for_cb.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>);

    *frame.borrow_mut() = Some(cb);
    if !schedule(&frame) {
        frame.borrow_mut().take();
    }
}

#[component]
pub fn ChartHost() -> impl IntoView {
    let viewport = expect_context::<RwSignal<ViewportState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "csr")]
    {
        let theme = expect_context::<RwSignal<ThemeState>>();
        let chart: SharedChart = Rc::new(RefCell::new(None));

        let chart_mount = Rc::clone(&chart);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if chart_mount.borrow().is_some() {
                return;
            }
            let mut instance = match Chart::new(canvas.clone(), Series::weekly()) {
                Ok(instance) => instance,
                Err(err) => {
                    log::warn!("chart disabled: {err:?}");
                    return;
                }
            };
            sync_viewport(&mut instance, &canvas);
            draw(&instance);
            *chart_mount.borrow_mut() = Some(instance);
            run_animation(&chart_mount);
        });

        // Resize and theme changes redraw at the current progress.
        let chart_redraw = Rc::clone(&chart);
        Effect::new(move || {
            viewport.track();
            theme.track();
            let Some(canvas) = canvas_ref.get_untracked() else {
                return;
            };
            if let Some(chart) = chart_redraw.borrow_mut().as_mut() {
                sync_viewport(chart, &canvas);
                draw(chart);
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = viewport;
    }

    view! {
        <section id="analytics" class="analytics">
            <h2 class="section-title">"Weekly Activity"</h2>
            <div class="chart-container">
                <canvas id="myChart" class="chart-canvas" node_ref=canvas_ref></canvas>
            </div>
        </section>
    }
}
