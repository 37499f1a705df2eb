use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::window;
use crate::config::WALLET_BRIDGE;

pub fn wallet_bridge() -> Result<JsValue, String> {
    let window = window().ok_or("No window")?;
    let bridge = Reflect::get(&window, &WALLET_BRIDGE.into())
        .map_err(|_| "Wallet bridge not found".to_string())?;
    if bridge.is_undefined() || bridge.is_null() {
        return Err("Wallet bridge not found".into());
    }
    Ok(bridge)
}

/// `Ok(None)` when the bridge leaves `method` unset.
pub fn bridge_method(method: &str) -> Result<Option<(JsValue, Function)>, String> {
    let bridge = wallet_bridge()?;
    let value = Reflect::get(&bridge, &method.into())
        .map_err(|_| format!("{} not found", method))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }

    let func = value
        .dyn_into::<Function>()
        .map_err(|_| format!("{} is not a function", method))?;
    Ok(Some((bridge, func)))
}

pub fn bridge_call(method: &str) -> Result<JsValue, String> {
    let (bridge, func) = bridge_method(method)?.ok_or_else(|| format!("{} not found", method))?;
    func.call0(&bridge).map_err(get_error_message)
}

/// Calls an optional bridge method and waits for it if it hands back a
/// promise. An unset method is skipped and yields `Ok(None)`.
pub async fn bridge_call_async(method: &str) -> Result<Option<JsValue>, String> {
    let Some((bridge, func)) = bridge_method(method)? else {
        return Ok(None);
    };
    let result = func.call0(&bridge).map_err(get_error_message)?;
    if !result.is_instance_of::<Promise>() {
        return Ok(Some(result));
    }

    JsFuture::from(Promise::from(result))
        .await
        .map(Some)
        .map_err(get_error_message)
}

pub fn get_error_message(res: JsValue) -> String {
    if let Ok(error_val) = Reflect::get(&res, &"error".into()) {
        if let Some(s) = error_val.as_string() {
            return s;
        }
    }

    if let Some(s) = res.as_string() {
        return s;
    }

    if let Ok(message) = Reflect::get(&res, &"message".into()) {
        if let Some(s) = message.as_string() {
            return s;
        }
    }

    if let Ok(str_val) = js_sys::JSON::stringify(&res) {
        if let Some(s) = str_val.as_string() {
            return s;
        }
    }

    "Unknown error (failed to extract message)".to_string()
}
