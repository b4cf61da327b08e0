//! Sidebar palette listing the flower catalog.

use std::rc::Rc;

use bouquet_core::Catalog;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FlowerPickerProps {
    pub catalog: Rc<Catalog>,
    /// Emits the catalog key of the clicked flower.
    pub on_select: Callback<String>,
}

#[function_component(FlowerPicker)]
pub fn flower_picker(props: &FlowerPickerProps) -> Html {
    html! {
        <div class="flower-picker">
            <h3 class="picker-title">{ "Pick a Flower" }</h3>
            <div class="flower-list">
                { for props.catalog.entries().iter().map(|flower| {
                    let onclick = {
                        let on_select = props.on_select.clone();
                        let id = flower.id.clone();
                        Callback::from(move |_: MouseEvent| on_select.emit(id.clone()))
                    };
                    let onkeydown = {
                        let on_select = props.on_select.clone();
                        let id = flower.id.clone();
                        Callback::from(move |e: KeyboardEvent| {
                            if e.key() == "Enter" || e.key() == " " {
                                e.prevent_default();
                                on_select.emit(id.clone());
                            }
                        })
                    };
                    html! {
                        <div
                            key={flower.id.clone()}
                            class="flower-item"
                            role="button"
                            tabindex="0"
                            {onclick}
                            {onkeydown}
                        >
                            <div class="img-wrapper">
                                <img src={flower.src.clone()} alt={flower.name.clone()} loading="lazy" />
                            </div>
                            <span class="flower-name">{ flower.name.clone() }</span>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
