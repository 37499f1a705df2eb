use yew::prelude::*;
use gloo_timers::callback::Timeout;
use log::debug;
use crate::models::ToastKind;

const TOAST_TIMEOUT_MS: u32 = 8_000;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: String,
    #[prop_or_default]
    pub kind: ToastKind,
    pub on_close: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div class={classes!("toast", props.kind.class())} role="alert">
            <span class="toast-message">{ &props.message }</span>
            <button type="button" class="toast-close" aria-label="Dismiss" onclick={close}>{ "×" }</button>
        </div>
    }
}

pub struct ToastHandle {
    pub push: Callback<(String, ToastKind)>,
    pub view: Html,
}

/// One toast at a time; a newer message replaces the current one.
#[hook]
pub fn use_toast() -> ToastHandle {
    let toast = use_state(|| None::<(String, ToastKind)>);
    {
        let toast = toast.clone();
        use_effect_with(toast.clone(), move |current| {
            let timeout = current
                .is_some()
                .then(|| Timeout::new(TOAST_TIMEOUT_MS, move || toast.set(None)));
            move || drop(timeout)
        });
    }

    let clear = {
        let toast = toast.clone();
        Callback::from(move |_: ()| toast.set(None))
    };

    let push = {
        let toast = toast.clone();
        Callback::from(move |(msg, kind): (String, ToastKind)| {
            debug!("toast ({:?}): {}", kind, msg);
            toast.set(Some((msg, kind)))
        })
    };

    let view = html! {
        <div class="toast-container">
            if let Some((msg, kind)) = &*toast {
                <Toast message={msg.clone()} kind={kind.clone()} on_close={clear} />
            }
        </div>
    };

    ToastHandle { push, view }
}
