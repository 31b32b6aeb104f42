//! DOM wiring for the small portfolio widgets: count-up numbers, the skill
//! radar and the sentiment playground. Missing elements are skipped.

use crate::constants::*;
use crate::dom;
use crate::frame::{self, FrameDriver};
use crate::input::parse_attr;
use field_core::radar::{self, RadarChart, DEFAULT_SKILLS};
use field_core::sentiment::{self, Prediction};
use field_core::{progress, AnimatedCounter, Continuation, INFERENCE_DELAY_MS};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_all(document: &web::Document) {
    start_counters(document);
    draw_radar(document);
    wire_sentiment_demo(document);
}

// ---------------- Counters ----------------

struct CounterBoard {
    started: Instant,
    items: Vec<(web::Element, AnimatedCounter)>,
}

impl FrameDriver for CounterBoard {
    fn frame(&mut self) -> Continuation {
        let elapsed = self.started.elapsed();
        for (el, counter) in &self.items {
            el.set_text_content(Some(&counter.text_at(elapsed)));
        }
        if self.items.iter().all(|(_, c)| c.is_done(elapsed)) {
            Continuation::Halt
        } else {
            Continuation::Next
        }
    }
}

fn start_counters(document: &web::Document) {
    let nodes = match document.query_selector_all(COUNTER_SELECTOR) {
        Ok(n) => n,
        Err(e) => {
            log::warn!("[counters] query failed: {:?}", e);
            return;
        }
    };
    let mut items = Vec::new();
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let Some(end) = parse_attr::<u64>(el.get_attribute(ATTR_COUNTER_END).as_deref()) else {
            continue;
        };
        let duration_ms = parse_attr::<u64>(el.get_attribute(ATTR_COUNTER_DURATION).as_deref())
            .unwrap_or(field_core::COUNTER_DEFAULT_DURATION_MS);
        let suffix = el.get_attribute(ATTR_COUNTER_SUFFIX).unwrap_or_default();
        let counter =
            AnimatedCounter::new(end, Duration::from_millis(duration_ms)).with_suffix(suffix);
        items.push((el, counter));
    }
    if items.is_empty() {
        return;
    }
    log::info!("[counters] animating {}", items.len());
    // Counters run to completion and halt on their own; no handle is kept.
    let _ = frame::start_loop(CounterBoard {
        started: Instant::now(),
        items,
    });
}

// ---------------- Radar ----------------

fn svg_child(
    document: &web::Document,
    parent: &web::Element,
    tag: &str,
    attrs: &[(&str, String)],
) -> Option<web::Element> {
    let el = document.create_element_ns(Some(SVG_NS), tag).ok()?;
    for (name, value) in attrs {
        let _ = el.set_attribute(name, value);
    }
    parent.append_child(&el).ok()?;
    Some(el)
}

fn draw_radar(document: &web::Document) {
    let chart = RadarChart::default();
    let c = chart.center;

    if let Some(el) = document.get_element_by_id(RADAR_POLYGON_ID) {
        let points = chart.polygon(&DEFAULT_SKILLS);
        let _ = el.set_attribute("points", &radar::points_attr(&points));
    }
    if let Some(group) = document.get_element_by_id(RADAR_RINGS_ID) {
        for r in chart.ring_radii() {
            svg_child(
                document,
                &group,
                "circle",
                &[("cx", c.x.to_string()), ("cy", c.y.to_string()), ("r", r.to_string())],
            );
        }
    }
    if let Some(group) = document.get_element_by_id(RADAR_AXES_ID) {
        for skill in &DEFAULT_SKILLS {
            let end = chart.axis_end(skill);
            svg_child(
                document,
                &group,
                "line",
                &[
                    ("x1", c.x.to_string()),
                    ("y1", c.y.to_string()),
                    ("x2", end.x.to_string()),
                    ("y2", end.y.to_string()),
                ],
            );
        }
    }
    if let Some(group) = document.get_element_by_id(RADAR_POINTS_ID) {
        for skill in &DEFAULT_SKILLS {
            let p = chart.point(skill);
            svg_child(
                document,
                &group,
                "circle",
                &[
                    ("cx", p.x.to_string()),
                    ("cy", p.y.to_string()),
                    ("r", RADAR_POINT_RADIUS.to_string()),
                ],
            );
        }
    }
    if let Some(group) = document.get_element_by_id(RADAR_LABELS_ID) {
        for skill in &DEFAULT_SKILLS {
            let p = chart.label_position(skill);
            if let Some(text) = svg_child(
                document,
                &group,
                "text",
                &[("x", p.x.to_string()), ("y", p.y.to_string())],
            ) {
                text.set_text_content(Some(skill.name));
            }
        }
    }
}

// ---------------- Sentiment playground ----------------

fn show_prediction(document: &web::Document, p: &Prediction) {
    for (id, value) in [
        (PRED_POSITIVE_ID, p.positive),
        (PRED_NEUTRAL_ID, p.neutral),
        (PRED_NEGATIVE_ID, p.negative),
    ] {
        dom::set_text(document, id, &format!("{value:.1}%"));
        dom::set_width_style(
            document,
            &format!("{id}{PRED_BAR_SUFFIX}"),
            &progress::width_percent(value, 100.0),
        );
    }
    dom::set_text(document, PRED_LABEL_ID, p.dominant());
}

fn set_running(document: &web::Document, running: bool) {
    if let Some(btn) = document.get_element_by_id(RUN_INFERENCE_ID) {
        let _ = if running {
            btn.set_attribute("disabled", "")
        } else {
            btn.remove_attribute("disabled")
        };
    }
}

fn wire_sentiment_demo(document: &web::Document) {
    if document.get_element_by_id(RUN_INFERENCE_ID).is_none() {
        return;
    }
    show_prediction(document, &Prediction::INITIAL);
    let rng = Rc::new(RefCell::new(StdRng::from_entropy()));

    let doc = document.clone();
    let rng_sample = rng.clone();
    dom::add_click_listener(document, RANDOM_SAMPLE_ID, move || {
        let sample = sentiment::pick_sample(&mut *rng_sample.borrow_mut());
        if let Some(input) = doc
            .get_element_by_id(INFERENCE_INPUT_ID)
            .and_then(|el| el.dyn_into::<web::HtmlTextAreaElement>().ok())
        {
            input.set_value(sample);
        }
    });

    let doc = document.clone();
    let running = Rc::new(Cell::new(false));
    dom::add_click_listener(document, RUN_INFERENCE_ID, move || {
        if running.replace(true) {
            return;
        }
        set_running(&doc, true);
        let doc_done = doc.clone();
        let rng_done = rng.clone();
        let running_done = running.clone();
        let done = Closure::once_into_js(move || {
            let prediction = sentiment::simulate(&mut *rng_done.borrow_mut());
            show_prediction(&doc_done, &prediction);
            set_running(&doc_done, false);
            running_done.set(false);
        });
        let scheduled = web::window().map(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(
                done.unchecked_ref(),
                INFERENCE_DELAY_MS,
            )
        });
        if !matches!(scheduled, Some(Ok(_))) {
            log::warn!("[playground] could not schedule inference");
            set_running(&doc, false);
            running.set(false);
        }
    });
}
