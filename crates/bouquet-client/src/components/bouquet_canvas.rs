//! Canvas where placed flowers are rendered and dragged.

use std::cell::RefCell;
use std::rc::Rc;

use bouquet_core::{
    Bouquet, CanvasRect, Catalog, DragMove, PlacedItem, PlacementId, PointerInput, PointerKind,
    PointerResponse, PointerTracker,
};
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BouquetCanvasProps {
    pub bouquet: Bouquet,
    pub catalog: Rc<Catalog>,
    /// Emitted for every pointer move while a flower is dragged.
    pub on_move: Callback<DragMove>,
    /// Emitted when a flower is double-clicked.
    pub on_remove: Callback<PlacementId>,
}

/// Reads the canvas bounding box in client pixels.
fn canvas_rect(node: &NodeRef) -> Option<CanvasRect> {
    let element = node.cast::<web_sys::Element>()?;
    let rect = element.get_bounding_client_rect();
    Some(CanvasRect::new(
        rect.left(),
        rect.top(),
        rect.width(),
        rect.height(),
    ))
}

/// Client position of the first active touch.
fn first_touch(e: &web_sys::TouchEvent) -> Option<(f64, f64)> {
    let touch = e.touches().get(0)?;
    Some((f64::from(touch.client_x()), f64::from(touch.client_y())))
}

/// Builds the callback that feeds pointer input through the tracker and
/// forwards resulting moves to the placement store.
fn pointer_feed(
    tracker: Rc<RefCell<PointerTracker>>,
    dragging: UseStateHandle<Option<PlacementId>>,
    on_move: Callback<DragMove>,
) -> Callback<PointerInput, PointerResponse> {
    Callback::from(move |input: PointerInput| {
        let response = tracker.borrow_mut().handle(input);
        dragging.set(tracker.borrow().dragging());
        if let Some(drag) = response.drag {
            on_move.emit(drag);
        }
        response
    })
}

fn flower_style(item: &PlacedItem, is_dragging: bool) -> String {
    format!(
        "left: {}%; top: {}%; transform: translate(-50%, -50%) rotate({}deg) scale({}); \
         z-index: {}; cursor: {}; touch-action: none;",
        item.position.x,
        item.position.y,
        item.rotation,
        item.scale,
        item.stack_order,
        if is_dragging { "grabbing" } else { "grab" },
    )
}

#[function_component(BouquetCanvas)]
pub fn bouquet_canvas(props: &BouquetCanvasProps) -> Html {
    let canvas_ref = use_node_ref();
    let tracker = use_mut_ref(PointerTracker::new);
    // Mirrors the tracker so the grab cursor re-renders.
    let dragging = use_state_eq(|| None::<PlacementId>);

    let feed = pointer_feed(tracker.clone(), dragging.clone(), props.on_move.clone());

    // touchmove is registered by hand: it must be non-passive so scrolling
    // can be suppressed while a flower is dragged.
    {
        let canvas_ref = canvas_ref.clone();
        let tracker = tracker.clone();
        let dragging = dragging.clone();
        use_effect_with(props.on_move.clone(), move |on_move| {
            let feed = pointer_feed(tracker, dragging, on_move.clone());
            let listener = canvas_ref.cast::<web_sys::Element>().map(|canvas| {
                let canvas_ref = canvas_ref.clone();
                EventListener::new_with_options(
                    &canvas,
                    "touchmove",
                    EventListenerOptions::enable_prevent_default(),
                    move |event| {
                        let Some(touch_event) = event.dyn_ref::<web_sys::TouchEvent>() else {
                            return;
                        };
                        let (Some((client_x, client_y)), Some(rect)) =
                            (first_touch(touch_event), canvas_rect(&canvas_ref))
                        else {
                            return;
                        };
                        let response = feed.emit(PointerInput::Move {
                            kind: PointerKind::Touch,
                            client_x,
                            client_y,
                            rect,
                        });
                        if response.prevent_default {
                            touch_event.prevent_default();
                        }
                    },
                )
            });

            move || drop(listener)
        });
    }

    let on_mouse_move = {
        let canvas_ref = canvas_ref.clone();
        let feed = feed.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(rect) = canvas_rect(&canvas_ref) else {
                return;
            };
            feed.emit(PointerInput::Move {
                kind: PointerKind::Mouse,
                client_x: f64::from(e.client_x()),
                client_y: f64::from(e.client_y()),
                rect,
            });
        })
    };

    let on_mouse_up = {
        let feed = feed.clone();
        Callback::from(move |_: MouseEvent| {
            feed.emit(PointerInput::Up);
        })
    };

    let on_mouse_leave = {
        let feed = feed.clone();
        Callback::from(move |_: MouseEvent| {
            feed.emit(PointerInput::Leave);
        })
    };

    let on_touch_end = {
        let feed = feed.clone();
        Callback::from(move |_: TouchEvent| {
            feed.emit(PointerInput::Up);
        })
    };

    let on_touch_cancel = {
        let feed = feed.clone();
        Callback::from(move |_: TouchEvent| {
            feed.emit(PointerInput::Cancel);
        })
    };

    let flowers = props.bouquet.items().iter().filter_map(|item| {
        let Some(kind) = props.catalog.get(&item.type_id) else {
            tracing::warn!(id = %item.id, type_id = %item.type_id, "Placed flower has no catalog entry");
            return None;
        };
        let id = item.id;

        let on_mouse_down = {
            let feed = feed.clone();
            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                feed.emit(PointerInput::Down {
                    id,
                    kind: PointerKind::Mouse,
                });
            })
        };
        let on_touch_start = {
            let feed = feed.clone();
            Callback::from(move |e: TouchEvent| {
                e.stop_propagation();
                feed.emit(PointerInput::Down {
                    id,
                    kind: PointerKind::Touch,
                });
            })
        };
        let on_double_click = {
            let on_remove = props.on_remove.clone();
            Callback::from(move |_: MouseEvent| on_remove.emit(id))
        };

        Some(html! {
            <div
                key={id.to_string()}
                class="placed-flower"
                style={flower_style(item, *dragging == Some(id))}
                onmousedown={on_mouse_down}
                ontouchstart={on_touch_start}
                ondblclick={on_double_click}
                title="Drag to move, Double click to remove"
            >
                <img src={kind.src.clone()} alt={kind.name.clone()} draggable="false" />
            </div>
        })
    });

    html! {
        <div
            ref={canvas_ref}
            class="bouquet-canvas"
            onmousemove={on_mouse_move}
            onmouseup={on_mouse_up}
            onmouseleave={on_mouse_leave}
            ontouchend={on_touch_end}
            ontouchcancel={on_touch_cancel}
        >
            { for flowers }
            { if props.bouquet.is_empty() {
                html! {
                    <div class="empty-state">
                        <p>{ "Pick flowers to build your bouquet..." }</p>
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
