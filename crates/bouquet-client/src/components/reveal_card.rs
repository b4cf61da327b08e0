//! Reveal card shown when the bouquet is finished.

use bouquet_core::{RevealTicket, RevealToggle};
use yew::prelude::*;

use super::modal::Modal;
use crate::hooks::use_reveal_timer;

#[derive(Properties, PartialEq)]
pub struct RevealCardProps {
    pub reveal: RevealToggle,
    /// Delay before the fade-in starts.
    pub delay_ms: u32,
    pub on_settle: Callback<RevealTicket>,
    pub on_close: Callback<()>,
}

#[function_component(RevealCard)]
pub fn reveal_card(props: &RevealCardProps) -> Html {
    use_reveal_timer(props.reveal.pending(), props.delay_ms, props.on_settle.clone());

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <Modal
            open={props.reveal.is_open()}
            visible={props.reveal.is_visible()}
            class="reveal-card"
        >
            <div class="reveal-card-content">
                <h1>{ "Happy Rose Day!" }</h1>
                <p>
                    { "Just like this bouquet, you bring color and beauty into my life." }
                    <br />
                    <br />
                    { "No matter which flowers you picked, you are the most beautiful one of all." }
                </p>
                <div class="heart">{ "❤️" }</div>
                <button class="btn close-btn" onclick={on_close}>
                    { "Close" }
                </button>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::*;
    use crate::state::{AppAction, AppState};

    const DELAY_MS: u32 = 150;

    /// Opens the reveal as soon as it mounts.
    #[function_component(OpenedReveal)]
    fn opened_reveal() -> Html {
        let state = use_reducer_eq(AppState::default);
        {
            let state = state.clone();
            use_effect_with((), move |_| {
                state.dispatch(AppAction::OpenReveal);
            });
        }

        let on_settle = {
            let state = state.clone();
            Callback::from(move |ticket: RevealTicket| state.dispatch(AppAction::SettleReveal(ticket)))
        };
        let on_close = {
            let state = state.clone();
            Callback::from(move |(): ()| state.dispatch(AppAction::CloseReveal))
        };

        html! {
            <RevealCard reveal={state.reveal} delay_ms={DELAY_MS} {on_settle} {on_close} />
        }
    }

    fn overlay_classes(root: &web_sys::Element) -> Option<String> {
        let overlay = root.query_selector(".modal-overlay").ok()??;
        Some(overlay.class_name())
    }

    fn is_shown(root: &web_sys::Element) -> bool {
        overlay_classes(root)
            .is_some_and(|classes| classes.split_whitespace().any(|class| class == "visible"))
    }

    #[wasm_bindgen_test]
    async fn test_card_fades_in_after_delay() {
        let root = gloo::utils::document().create_element("div").unwrap();
        gloo::utils::body().append_child(&root).unwrap();
        let handle = yew::Renderer::<OpenedReveal>::with_root(root.clone()).render();

        TimeoutFuture::new(20).await;
        assert!(overlay_classes(&root).is_some(), "overlay should be mounted once opened");
        assert!(!is_shown(&root), "overlay visible before the delay");

        TimeoutFuture::new(DELAY_MS + 100).await;
        assert!(is_shown(&root), "overlay still hidden after the delay");

        handle.destroy();
        root.remove();
    }
}
