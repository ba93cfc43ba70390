use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

pub const TOAST_DISMISS_MS: u32 = 4_000;

#[derive(Clone, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub title: String,
    pub body: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn success(title: &str, body: &str) -> Self {
        Toast {
            title: title.to_string(),
            body: body.to_string(),
            kind: ToastKind::Success,
        }
    }

    pub fn error(title: &str, body: &str) -> Self {
        Toast {
            title: title.to_string(),
            body: body.to_string(),
            kind: ToastKind::Error,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastViewProps {
    pub toast: Option<Toast>,
    pub on_dismiss: Callback<()>,
}

#[function_component(ToastView)]
pub fn toast_view(props: &ToastViewProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |toast: &Option<Toast>| {
                let timeout = toast
                    .is_some()
                    .then(|| Timeout::new(TOAST_DISMISS_MS, move || on_dismiss.emit(())));
                move || drop(timeout)
            },
            props.toast.clone(),
        );
    }

    let dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    match props.toast.as_ref() {
        Some(toast) => {
            let kind_class = match toast.kind {
                ToastKind::Success => "toast-success",
                ToastKind::Error => "toast-error",
            };
            html! {
                <div class={classes!("toast", kind_class)} onclick={dismiss}>
                    <p class="toast-title">{&toast.title}</p>
                    <p class="toast-body">{&toast.body}</p>
                    <style>
                        {r#"
                            .toast {
                                position: fixed;
                                bottom: 2rem;
                                right: 2rem;
                                z-index: 200;
                                max-width: 340px;
                                padding: 1rem 1.4rem;
                                border-radius: 10px;
                                box-shadow: 0 12px 28px rgba(0, 0, 0, 0.18);
                                cursor: pointer;
                                animation: toast-in 0.25s ease-out;
                                background: #fff;
                            }
                            .toast-success {
                                border-left: 4px solid #6FA06B;
                            }
                            .toast-error {
                                border-left: 4px solid #C05746;
                            }
                            .toast-title {
                                margin: 0 0 0.25rem 0;
                                font-weight: 600;
                                color: #4A4238;
                            }
                            .toast-body {
                                margin: 0;
                                font-size: 0.9rem;
                                color: #8B7E74;
                            }
                            @keyframes toast-in {
                                from { transform: translateY(12px); opacity: 0; }
                                to { transform: translateY(0); opacity: 1; }
                            }
                        "#}
                    </style>
                </div>
            }
        }
        None => html! {},
    }
}
