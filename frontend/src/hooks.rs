use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// True once the window has scrolled past `threshold` pixels.
///
/// Registers a window `scroll` listener on mount and removes it on unmount.
/// Both scroll-driven affordances share this hook: the condensed header at
/// 50px and the scroll-to-top reveal at 400px.
#[hook]
pub fn use_scroll_past(threshold: f64) -> bool {
    let past = use_state(|| false);

    {
        let past = past.clone();
        use_effect_with((), move |_| {
            let window = window().expect("no global `window` exists");

            let closure = {
                let past = past.clone();
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    let scroll_y = window.scroll_y().unwrap_or(0.0);
                    past.set(past_threshold(scroll_y, threshold));
                }) as Box<dyn Fn()>)
            };

            window
                .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
                .unwrap();

            move || {
                let _ = window.remove_event_listener_with_callback(
                    "scroll",
                    closure.as_ref().unchecked_ref(),
                );
                drop(closure);
            }
        });
    }

    *past
}

/// Id of the section the scroll-spy currently highlights, if any.
///
/// Observes every listed section with an IntersectionObserver at the given
/// visibility threshold. Within one batch of intersection records the topmost
/// section still on screen wins; nothing is highlighted until the first
/// record arrives.
#[hook]
pub fn use_scroll_spy(section_ids: &'static [&'static str], threshold: f64) -> Option<String> {
    let active = use_state(|| None::<String>);

    {
        let active = active.clone();
        use_effect_with((), move |_| {
            let closure = {
                let active = active.clone();
                Closure::wrap(Box::new(move |entries: js_sys::Array| {
                    let mut visible = Vec::new();
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        if entry.is_intersecting() {
                            let id = entry.target().id();
                            if !id.is_empty() {
                                visible.push((id, entry.bounding_client_rect().top()));
                            }
                        }
                    }
                    if let Some(id) = pick_topmost(&visible) {
                        active.set(Some(id.to_string()));
                    }
                }) as Box<dyn Fn(js_sys::Array)>)
            };

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(threshold));

            let observer =
                IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options)
                    .ok();

            let document = window().and_then(|win| win.document());
            if let (Some(document), Some(observer)) = (document.as_ref(), observer.as_ref()) {
                for id in section_ids {
                    match document.get_element_by_id(id) {
                        Some(section) => observer.observe(&section),
                        None => web_sys::console::error_1(
                            &format!("scroll-spy: missing section #{id}").into(),
                        ),
                    }
                }
            }

            move || {
                if let Some(observer) = observer {
                    observer.disconnect();
                }
                drop(closure);
            }
        });
    }

    (*active).clone()
}

fn past_threshold(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Topmost candidate (smallest bounding-rect top) among the sections a
/// single observer batch reported visible.
fn pick_topmost(visible: &[(String, f64)]) -> Option<&str> {
    visible
        .iter()
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id.as_str())
}

#[cfg(test)]
mod tests {
    use super::{past_threshold, pick_topmost};
    use crate::config::{HEADER_SCROLL_THRESHOLD, SCROLL_TOP_THRESHOLD};

    #[test]
    fn header_condenses_strictly_past_fifty() {
        assert!(!past_threshold(0.0, HEADER_SCROLL_THRESHOLD));
        assert!(!past_threshold(50.0, HEADER_SCROLL_THRESHOLD));
        assert!(past_threshold(50.5, HEADER_SCROLL_THRESHOLD));
    }

    #[test]
    fn scroll_top_reveals_strictly_past_four_hundred() {
        assert!(!past_threshold(400.0, SCROLL_TOP_THRESHOLD));
        assert!(past_threshold(401.0, SCROLL_TOP_THRESHOLD));
    }

    #[test]
    fn topmost_section_wins_within_a_batch() {
        let visible = vec![
            ("about".to_string(), 180.0),
            ("home".to_string(), -20.0),
            ("skills".to_string(), 560.0),
        ];
        assert_eq!(pick_topmost(&visible), Some("home"));
    }

    #[test]
    fn empty_batch_selects_nothing() {
        assert_eq!(pick_topmost(&[]), None);
    }
}
