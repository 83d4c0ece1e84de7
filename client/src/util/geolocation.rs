//! One-shot browser geolocation.
//!
//! TRADE-OFFS
//! ==========
//! Position lookup is best-effort browser-only behavior; SSR resolves to
//! [`GeoError::Unsupported`] so callers handle both paths the same way.

use crate::net::types::GeoPoint;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GeoError {
    #[error("Geolocation is not supported by your browser")]
    Unsupported,
    #[error("Could not get your location")]
    Unavailable,
}

/// Ask the browser for the current position.
///
/// # Errors
///
/// Returns [`GeoError::Unsupported`] without a geolocation API and
/// [`GeoError::Unavailable`] when the lookup is denied or fails.
#[allow(clippy::unused_async)]
pub async fn current_position() -> Result<GeoPoint, GeoError> {
    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;
        use wasm_bindgen::JsCast as _;
        use wasm_bindgen::JsValue;
        use wasm_bindgen::closure::Closure;

        let geolocation = web_sys::window()
            .and_then(|w| w.navigator().geolocation().ok())
            .ok_or(GeoError::Unsupported)?;

        let (tx, rx) = futures::channel::oneshot::channel::<Result<GeoPoint, GeoError>>();
        let tx = Rc::new(RefCell::new(Some(tx)));

        let tx_ok = Rc::clone(&tx);
        let on_success = Closure::once(move |position: JsValue| {
            let result = read_coords(&position).ok_or(GeoError::Unavailable);
            if let Some(tx) = tx_ok.borrow_mut().take() {
                let _ = tx.send(result);
            }
        });
        let tx_err = Rc::clone(&tx);
        let on_error = Closure::once(move |_err: JsValue| {
            if let Some(tx) = tx_err.borrow_mut().take() {
                let _ = tx.send(Err(GeoError::Unavailable));
            }
        });

        geolocation
            .get_current_position_with_error_callback(
                on_success.as_ref().unchecked_ref(),
                Some(on_error.as_ref().unchecked_ref()),
            )
            .map_err(|_| GeoError::Unavailable)?;

        let result = rx.await.unwrap_or(Err(GeoError::Unavailable));
        drop((on_success, on_error));
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(GeoError::Unsupported)
    }
}

#[cfg(feature = "hydrate")]
fn read_coords(position: &wasm_bindgen::JsValue) -> Option<GeoPoint> {
    let coords = js_sys::Reflect::get(position, &"coords".into()).ok()?;
    let lat = js_sys::Reflect::get(&coords, &"latitude".into()).ok()?.as_f64()?;
    let lng = js_sys::Reflect::get(&coords, &"longitude".into()).ok()?.as_f64()?;
    Some(GeoPoint { lat, lng })
}
