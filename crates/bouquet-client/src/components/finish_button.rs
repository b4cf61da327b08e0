//! Call-to-action that opens the reveal overlay.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FinishButtonProps {
    /// Hidden until at least one flower is placed.
    pub visible: bool,
    pub on_finish: Callback<()>,
}

#[function_component(FinishButton)]
pub fn finish_button(props: &FinishButtonProps) -> Html {
    if !props.visible {
        return html! {};
    }

    let onclick = {
        let on_finish = props.on_finish.clone();
        Callback::from(move |_: MouseEvent| on_finish.emit(()))
    };

    html! {
        <div class="finish-container">
            <button class="finish-btn" {onclick}>
                { "Finish Bouquet ❤️" }
            </button>
        </div>
    }
}
