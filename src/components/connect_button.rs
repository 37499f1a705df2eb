use std::rc::Rc;
use futures_util::future::LocalBoxFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use crate::config::{read_test_mode, AppConfig};
use crate::models::{ConnectError, WalletStatus};
use crate::wallet::{
    run_test_mode_click, start_connect_click, use_wallet_status, ClickHandlers, JsWalletBridge,
    WalletActions,
};

const BASE_CLASSES: &str = "bg-blue-500 hover:bg-blue-600 text-white px-5 py-2 rounded-md font-semibold";
const BORDER_CLASSES: &str = "border-2 border-blue-700";
const DISABLED_CLASSES: &str = "disabled:opacity-50 disabled:cursor-not-allowed";
const CONNECTED_CLASSES: &str = "flex items-center gap-2";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonKind {
    TestMode,
    Connect,
    Disconnect,
}

/// Everything the button shows for one render.
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonView {
    pub kind: ButtonKind,
    pub label: &'static str,
    pub disabled: bool,
    pub class: String,
    pub account_name: Option<String>,
    pub chain_name: Option<String>,
}

fn button_class(parts: &[&str], custom: &str) -> String {
    std::iter::once(BASE_CLASSES)
        .chain(parts.iter().copied())
        .chain(Some(custom).filter(|c| !c.is_empty()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `None` means nothing is rendered.
pub fn button_view(test_mode: bool, status: &WalletStatus, custom_class: &str) -> Option<ButtonView> {
    if test_mode {
        return Some(ButtonView {
            kind: ButtonKind::TestMode,
            label: "Connect Wallet",
            disabled: false,
            class: button_class(&[BORDER_CLASSES], custom_class),
            account_name: None,
            chain_name: None,
        });
    }

    match status {
        WalletStatus::NotReady => None,
        WalletStatus::NotConnected { is_connecting } => Some(ButtonView {
            kind: ButtonKind::Connect,
            label: if *is_connecting { "Connecting..." } else { "Connect Wallet" },
            disabled: *is_connecting,
            class: button_class(&[BORDER_CLASSES, DISABLED_CLASSES], custom_class),
            account_name: None,
            chain_name: None,
        }),
        WalletStatus::Connected { account, chain } => Some(ButtonView {
            kind: ButtonKind::Disconnect,
            label: "Disconnect",
            disabled: false,
            class: button_class(&[CONNECTED_CLASSES, BORDER_CLASSES], custom_class),
            account_name: Some(if account.display_name.is_empty() {
                account.address.clone()
            } else {
                account.display_name.clone()
            }),
            chain_name: chain.as_ref().and_then(|c| c.name.clone()),
        }),
    }
}

/// Runs the click for `kind`. Callbacks fire before this returns; only the
/// connect attempt is handed back for the caller to spawn.
pub fn click_action(
    kind: ButtonKind,
    handlers: &ClickHandlers,
    wallet: Rc<dyn WalletActions>,
) -> Option<LocalBoxFuture<'static, ()>> {
    match kind {
        ButtonKind::TestMode => {
            run_test_mode_click(handlers);
            None
        }
        ButtonKind::Connect => Some(start_connect_click(handlers, wallet)),
        ButtonKind::Disconnect => {
            wallet.disconnect();
            None
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ConnectButtonProps {
    #[prop_or_default]
    pub on_error: Option<Callback<ConnectError>>,
    #[prop_or_default]
    pub on_connect_click: Option<Callback<()>>,
    #[prop_or_default]
    pub on_click: Option<Callback<()>>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ConnectButton)]
pub fn connect_button(props: &ConnectButtonProps) -> Html {
    let config = use_context::<AppConfig>();
    // Decided before the first paint and kept for the component's lifetime.
    let is_test_mode = use_state(move || config.map_or_else(read_test_mode, |c| c.test_mode));
    let status = use_wallet_status();
    let wallet: Rc<dyn WalletActions> = Rc::new(JsWalletBridge);

    let custom_class = props.class.to_string();
    let Some(view) = button_view(*is_test_mode, &status, &custom_class) else {
        return html! {};
    };

    let handlers = ClickHandlers {
        on_click: props.on_click.clone(),
        on_connect_click: props.on_connect_click.clone(),
        on_error: props.on_error.clone(),
    };

    let kind = view.kind;
    let onclick = Callback::from(move |_: MouseEvent| {
        if let Some(pending) = click_action(kind, &handlers, wallet.clone()) {
            spawn_local(pending);
        }
    });

    match view.kind {
        ButtonKind::Disconnect => html! {
            <button type="button" class={view.class} {onclick}>
                <span>{ view.label }</span>
                <span class="text-sm opacity-80">
                    { format!("({})", view.account_name.unwrap_or_default()) }
                </span>
                if let Some(chain) = view.chain_name {
                    <span class="text-xs bg-blue-700 px-2 py-1 rounded-full">{ chain }</span>
                }
            </button>
        },
        _ => html! {
            <button type="button" class={view.class} disabled={view.disabled} {onclick}>
                { view.label }
            </button>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, Chain};
    use crate::wallet::testing::{recording_handlers, FakeWallet};
    use futures::executor::block_on;
    use std::cell::RefCell;

    fn connected(chain: Option<&str>) -> WalletStatus {
        WalletStatus::Connected {
            account: Account {
                display_name: "alice.eth".into(),
                address: "0xa11ce".into(),
            },
            chain: chain.map(|name| Chain { id: 1, name: Some(name.into()) }),
        }
    }

    #[test]
    fn nothing_rendered_before_mount() {
        assert_eq!(button_view(false, &WalletStatus::NotReady, ""), None);
    }

    #[test]
    fn connecting_is_disabled() {
        let view = button_view(false, &WalletStatus::NotConnected { is_connecting: true }, "").unwrap();
        assert_eq!(view.kind, ButtonKind::Connect);
        assert_eq!(view.label, "Connecting...");
        assert!(view.disabled);
    }

    #[test]
    fn idle_connect_is_enabled() {
        let view = button_view(false, &WalletStatus::NotConnected { is_connecting: false }, "").unwrap();
        assert_eq!(view.label, "Connect Wallet");
        assert!(!view.disabled);
        assert!(view.class.contains("disabled:cursor-not-allowed"));
    }

    #[test]
    fn connected_shows_account_and_chain() {
        let view = button_view(false, &connected(Some("Base")), "").unwrap();
        assert_eq!(view.kind, ButtonKind::Disconnect);
        assert_eq!(view.label, "Disconnect");
        assert_eq!(view.account_name.as_deref(), Some("alice.eth"));
        assert_eq!(view.chain_name.as_deref(), Some("Base"));
        assert!(view.class.contains("gap-2"));

        let view = button_view(false, &connected(None), "").unwrap();
        assert_eq!(view.chain_name, None);
    }

    #[test]
    fn test_mode_overrides_every_status() {
        for status in [
            WalletStatus::NotReady,
            WalletStatus::NotConnected { is_connecting: true },
            connected(Some("Base")),
        ] {
            let view = button_view(true, &status, "").unwrap();
            assert_eq!(view.kind, ButtonKind::TestMode);
            assert_eq!(view.label, "Connect Wallet");
            assert!(!view.disabled);
        }
    }

    #[test]
    fn custom_class_is_appended_last() {
        let view = button_view(false, &WalletStatus::NotConnected { is_connecting: false }, "w-full").unwrap();
        assert!(view.class.starts_with(BASE_CLASSES));
        assert!(view.class.ends_with(" w-full"));

        let view = button_view(true, &WalletStatus::NotReady, "").unwrap();
        assert_eq!(
            view.class,
            "bg-blue-500 hover:bg-blue-600 text-white px-5 py-2 rounded-md font-semibold border-2 border-blue-700"
        );
    }

    #[test]
    fn connected_layout_classes_precede_border() {
        let view = button_view(false, &connected(None), "ml-auto").unwrap();
        assert_eq!(
            view.class,
            "bg-blue-500 hover:bg-blue-600 text-white px-5 py-2 rounded-md font-semibold \
             flex items-center gap-2 border-2 border-blue-700 ml-auto"
        );
    }

    #[test]
    fn unnamed_account_falls_back_to_address() {
        let status = WalletStatus::Connected {
            account: Account { display_name: String::new(), address: "0xa11ce".into() },
            chain: Some(Chain { id: 999999, name: None }),
        };
        let view = button_view(false, &status, "").unwrap();
        assert_eq!(view.account_name.as_deref(), Some("0xa11ce"));
        assert_eq!(view.chain_name, None);
    }

    fn fake_wallet(log: &Rc<RefCell<Vec<String>>>) -> Rc<dyn WalletActions> {
        Rc::new(FakeWallet { fail_with: None, log: log.clone() })
    }

    #[test]
    fn disconnect_click_disconnects_once() {
        let log = Rc::new(RefCell::new(Vec::new()));

        let pending = click_action(ButtonKind::Disconnect, &recording_handlers(&log), fake_wallet(&log));

        assert!(pending.is_none());
        assert_eq!(*log.borrow(), vec!["disconnect"]);
    }

    #[test]
    fn test_mode_click_skips_wallet() {
        let log = Rc::new(RefCell::new(Vec::new()));

        let pending = click_action(ButtonKind::TestMode, &recording_handlers(&log), fake_wallet(&log));

        assert!(pending.is_none());
        assert_eq!(*log.borrow(), vec!["click", "connect_click"]);
    }

    #[test]
    fn connect_click_opens_modal_after_callbacks() {
        let log = Rc::new(RefCell::new(Vec::new()));

        let pending = click_action(ButtonKind::Connect, &recording_handlers(&log), fake_wallet(&log))
            .expect("connect click leaves work to spawn");
        assert_eq!(*log.borrow(), vec!["click", "connect_click"]);

        block_on(pending);

        assert_eq!(*log.borrow(), vec!["click", "connect_click", "open"]);
    }
}
