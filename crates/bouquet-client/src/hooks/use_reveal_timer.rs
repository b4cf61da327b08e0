//! Hook that arms the reveal fade-in timer.

use bouquet_core::RevealTicket;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

/// Emits `on_settle(ticket)` once `delay_ms` has passed after `pending`
/// becomes `Some`. The timer is dropped (cancelled) when `pending` changes or
/// the component unmounts.
#[hook]
pub fn use_reveal_timer(
    pending: Option<RevealTicket>,
    delay_ms: u32,
    on_settle: Callback<RevealTicket>,
) {
    use_effect_with((pending, delay_ms), move |(pending, delay_ms)| {
        let timeout = (*pending).map(|ticket| {
            Timeout::new(*delay_ms, move || {
                on_settle.emit(ticket);
            })
        });
        move || drop(timeout)
    });
}
