//! Modal confirmation: a [`Modal`] shell with a message, optional extra
//! inputs and a cancel/confirm footer.

use crate::components::common::ButtonVariant;
use leptos::ev::KeyboardEvent;
use leptos::*;

const FOOTER_BUTTON_CLASS: &str =
    "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold disabled:opacity-50";

/// How the confirm button reads. Destructive actions get the danger colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConfirmTone {
    #[default]
    Neutral,
    Destructive,
}

impl ConfirmTone {
    pub fn destructive_if(flag: bool) -> Self {
        if flag {
            Self::Destructive
        } else {
            Self::Neutral
        }
    }

    pub fn variant(self) -> ButtonVariant {
        match self {
            Self::Neutral => ButtonVariant::Primary,
            Self::Destructive => ButtonVariant::Danger,
        }
    }
}

/// Backdrop and dialog panel. Escape, a backdrop click and the close button
/// all call `on_close`.
#[component]
pub fn Modal(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let title = Signal::derive(move || title.get());

    view! {
        <Show when=move || is_open.get()>
            <div
                class="fixed inset-0 z-[70] flex items-center justify-center p-4"
                on:keydown=move |ev: KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        on_close.call(());
                    }
                }
            >
                <div class="absolute inset-0 bg-overlay-backdrop" on:click=move |_| on_close.call(())></div>
                <section
                    class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                >
                    <header class="flex items-center justify-between border-b border-border px-6 py-4">
                        <h2 class="text-lg font-semibold text-fg">{move || title.get()}</h2>
                        <button
                            type="button"
                            aria-label="Close"
                            class="text-fg-muted hover:text-fg"
                            on:click=move |_| on_close.call(())
                        >
                            <i class="fas fa-times"></i>
                        </button>
                    </header>
                    <div class="px-6 py-4 space-y-4">{children()}</div>
                </section>
            </div>
        </Show>
    }
}

/// Asks before an action runs. While `busy`, the confirm button is disabled
/// and says so.
#[component]
pub fn ConfirmDialog(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(into, default = "Confirm".into())] confirm_label: MaybeSignal<String>,
    #[prop(into, default = "Cancel".into())] cancel_label: MaybeSignal<String>,
    #[prop(optional, into)] busy: MaybeSignal<bool>,
    #[prop(optional)] tone: ConfirmTone,
    /// Extra inputs shown under the message.
    #[prop(optional)]
    children: Option<ChildrenFn>,
) -> impl IntoView {
    let message = Signal::derive(move || message.get());
    let confirm_text = Signal::derive(move || {
        if busy.get() {
            "Working...".to_string()
        } else {
            confirm_label.get()
        }
    });
    let cancel_text = Signal::derive(move || cancel_label.get());
    let confirm_class = format!("{} {}", FOOTER_BUTTON_CLASS, tone.variant().classes());
    let cancel_class = format!("{} {}", FOOTER_BUTTON_CLASS, ButtonVariant::Secondary.classes());

    view! {
        <Modal is_open=is_open title=title on_close=on_cancel>
            <p class="text-sm text-fg-muted">{move || message.get()}</p>
            {children.clone().map(|extra| extra())}
            <footer class="flex justify-end gap-2 pt-2">
                <button type="button" class=cancel_class.clone() on:click=move |_| on_cancel.call(())>
                    {move || cancel_text.get()}
                </button>
                <button
                    type="button"
                    class=confirm_class.clone()
                    disabled=move || busy.get()
                    on:click=move |_| on_confirm.call(())
                >
                    {move || confirm_text.get()}
                </button>
            </footer>
        </Modal>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn open_dialog_renders_message_extras_and_default_labels() {
        let html = render_to_string(move || {
            view! {
                <ConfirmDialog
                    is_open=Signal::derive(|| true)
                    title="Reject request"
                    message="Reject this leave request?"
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                    tone=ConfirmTone::Destructive
                >
                    <textarea name="decision-comment"></textarea>
                </ConfirmDialog>
            }
        });
        assert!(html.contains("decision-comment"));
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("Reject this leave request?"));
        assert!(html.contains("Confirm"));
        assert!(html.contains("Cancel"));
        assert!(html.contains("bg-action-danger-bg"));
    }

    #[test]
    fn busy_dialog_says_it_is_working() {
        let html = render_to_string(move || {
            view! {
                <ConfirmDialog
                    is_open=Signal::derive(|| true)
                    title="Delete task"
                    message="Delete this task?"
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                    confirm_label="Delete"
                    busy=true
                />
            }
        });
        assert!(html.contains("Working..."));
    }

    #[test]
    fn closed_dialog_renders_nothing() {
        let html = render_to_string(move || {
            view! {
                <ConfirmDialog
                    is_open=Signal::derive(|| false)
                    title="Delete task"
                    message="Delete this task?"
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                    confirm_label="Delete"
                />
            }
        });
        assert!(!html.contains("Delete this task?"));
    }
}
