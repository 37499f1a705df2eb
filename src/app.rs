use crate::components::{use_toast, ConnectButton};
use crate::config::AppConfig;
use crate::models::{ConnectError, ToastKind};
use log::info;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: AppConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let toast = use_toast();

    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let on_error = {
        let push = toast.push.clone();
        Callback::from(move |e: ConnectError| {
            push.emit((format!("Wallet connection failed: {}", e), ToastKind::Error));
        })
    };

    let on_connect_click = {
        let push = toast.push.clone();
        let test_mode = props.config.test_mode;
        Callback::from(move |_: ()| {
            info!("Wallet connect requested");
            if test_mode {
                push.emit(("Test mode: wallet connection simulated".to_string(), ToastKind::Info));
            }
        })
    };

    html! {
        <ContextProvider<AppConfig> context={props.config.clone()}>
            <header class="flex items-center justify-between px-6 py-4">
                <h1 class="text-xl font-bold">{"Pheme"}</h1>
                <ConnectButton on_error={on_error} on_connect_click={on_connect_click} />
            </header>
            { toast.view }
            <footer class="version">{ format!("v{}", VERSION) }</footer>
        </ContextProvider<AppConfig>>
    }
}
