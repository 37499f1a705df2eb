use futures_util::future::LocalBoxFuture;
use std::rc::Rc;
use gloo::events::EventListener;
use log::{debug, error, info, warn};
use yew::prelude::*;
use crate::config::WALLET_CHANGE_EVENT;
use crate::models::{ConnectError, WalletSnapshot, WalletStatus};
use crate::utils::{bridge_call, bridge_call_async};

/// Actions the page's wallet library performs on our behalf.
pub trait WalletActions {
    fn open_connect_modal(&self) -> LocalBoxFuture<'_, Result<(), ConnectError>>;
    fn disconnect(&self);
}

/// Talks to `window.__PHEME_WALLET__`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct JsWalletBridge;

impl JsWalletBridge {
    pub fn snapshot(&self) -> WalletSnapshot {
        let raw = match bridge_call("state") {
            Ok(raw) => raw,
            Err(e) => {
                debug!("Wallet state unavailable: {}", e);
                return WalletSnapshot::default();
            }
        };
        serde_wasm_bindgen::from_value(raw).unwrap_or_else(|e| {
            warn!("Malformed wallet state: {}", e);
            WalletSnapshot::default()
        })
    }
}

impl WalletActions for JsWalletBridge {
    // An unset `openConnectModal` means the modal can't open right now and the
    // click does nothing. A missing bridge is still reported.
    fn open_connect_modal(&self) -> LocalBoxFuture<'_, Result<(), ConnectError>> {
        Box::pin(async {
            bridge_call_async("openConnectModal")
                .await
                .map(|_| ())
                .map_err(ConnectError::new)
        })
    }

    // Rejections from the wallet library are not observed here.
    fn disconnect(&self) {
        if let Err(e) = bridge_call("disconnect") {
            warn!("disconnect failed: {}", e);
        }
    }
}

#[derive(Clone, Default, PartialEq)]
pub struct ClickHandlers {
    pub on_click: Option<Callback<()>>,
    pub on_connect_click: Option<Callback<()>>,
    pub on_error: Option<Callback<ConnectError>>,
}

impl ClickHandlers {
    fn notify_click(&self) {
        if let Some(cb) = &self.on_click {
            cb.emit(());
        }
        if let Some(cb) = &self.on_connect_click {
            cb.emit(());
        }
    }
}

pub fn run_test_mode_click(handlers: &ClickHandlers) {
    info!("Connect clicked (test mode)");
    handlers.notify_click();
}

/// Fires the click callbacks right away and returns the connect attempt. A
/// failure goes to `on_error` and stops there.
pub fn start_connect_click(
    handlers: &ClickHandlers,
    wallet: Rc<dyn WalletActions>,
) -> LocalBoxFuture<'static, ()> {
    info!("Connect clicked");
    handlers.notify_click();
    let handlers = handlers.clone();
    Box::pin(async move {
        if let Err(e) = wallet.open_connect_modal().await {
            error!("Failed to open connect modal: {}", e);
            if let Some(cb) = &handlers.on_error {
                cb.emit(e);
            }
        }
    })
}

#[hook]
pub fn use_wallet_status() -> WalletStatus {
    let status = use_state(|| JsWalletBridge.snapshot().status());
    {
        let status = status.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, WALLET_CHANGE_EVENT, move |_| {
                    let next = JsWalletBridge.snapshot().status();
                    debug!("Wallet status changed: {:?}", next);
                    status.set(next);
                })
            });
            move || drop(listener)
        });
    }
    (*status).clone()
}
