//! Common modal component.

use yew::prelude::*;

/// Props for the Modal component.
#[derive(Properties, PartialEq)]
pub struct ModalProps {
    /// Whether the modal is mounted at all.
    pub open: bool,
    /// Whether the fade-in has started; drives the `visible` class.
    #[prop_or(false)]
    pub visible: bool,
    /// Modal content.
    pub children: Children,
    /// Additional CSS classes for the modal container.
    #[prop_or_default]
    pub class: Classes,
}

/// Full-screen overlay with a centered card.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    if !props.open {
        return html! {};
    }

    let overlay_classes = classes!("modal-overlay", props.visible.then_some("visible"));
    let modal_classes = classes!("modal", props.class.clone());

    html! {
        <div class={overlay_classes}>
            <div class={modal_classes}>
                { for props.children.iter() }
            </div>
        </div>
    }
}
