use gloo_events::EventListener;
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::Event;

/// Subscribes `handler` to a window event. The subscription lives as long as
/// the returned listener, so an effect destructor that drops it guarantees
/// the callback never fires again. `None` when there is no window.
pub fn on_window<F>(event: &'static str, mut handler: F) -> Option<EventListener>
where
    F: FnMut(&Event) + 'static,
{
    let Some(window) = web_sys::window() else {
        warn!("no window to listen for {} events on", event);
        return None;
    };
    Some(EventListener::new(&window, event, move |event| handler(event)))
}

/// Same as [`on_window`] but hands the handler the typed event, skipping
/// events of any other type.
pub fn on_window_typed<E, F>(event: &'static str, mut handler: F) -> Option<EventListener>
where
    E: JsCast + 'static,
    F: FnMut(&E) + 'static,
{
    on_window(event, move |raw: &Event| {
        if let Some(typed) = raw.dyn_ref::<E>() {
            handler(typed);
        }
    })
}

/// Scrolls the window back to the top, as every page does on mount.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
