use log::{info, warn};
use web_sys::window;

/// localStorage key that switches the connect button into test mode.
pub const TEST_MODE_KEY: &str = "__TEST__";
/// Global object the page's wallet library exposes to the UI.
pub const WALLET_BRIDGE: &str = "__PHEME_WALLET__";
/// Dispatched on `window` whenever the wallet bridge state changes.
pub const WALLET_CHANGE_EVENT: &str = "pheme:wallet-change";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppConfig {
    pub test_mode: bool,
}

impl AppConfig {
    pub fn load() -> Self {
        let test_mode = read_test_mode();
        if test_mode {
            info!("Test mode enabled via localStorage[{}]", TEST_MODE_KEY);
        }
        AppConfig { test_mode }
    }
}

pub fn is_test_flag(value: Option<&str>) -> bool {
    value == Some("true")
}

pub fn read_test_mode() -> bool {
    let storage = match window().map(|w| w.local_storage()) {
        Some(Ok(Some(storage))) => storage,
        _ => {
            warn!("localStorage unavailable, test mode disabled");
            return false;
        }
    };

    match storage.get_item(TEST_MODE_KEY) {
        Ok(value) => is_test_flag(value.as_deref()),
        Err(_) => {
            warn!("Failed to read localStorage[{}], test mode disabled", TEST_MODE_KEY);
            false
        }
    }
}
