//! Application state management.

use std::rc::Rc;

use bouquet_core::{Bouquet, BouquetConfig, Catalog, DragMove, PlacementId, RevealTicket, RevealToggle};
use yew::prelude::*;

/// Application state: the placed flowers and the reveal overlay.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Rc<Catalog>,
    pub config: Rc<BouquetConfig>,
    /// Current placement snapshot
    pub bouquet: Bouquet,
    pub reveal: RevealToggle,
}

impl PartialEq for AppState {
    fn eq(&self, other: &Self) -> bool {
        // Snapshots are compared by identity; every real change allocates.
        self.bouquet.ptr_eq(&other.bouquet)
            && self.reveal == other.reveal
            && Rc::ptr_eq(&self.catalog, &other.catalog)
            && Rc::ptr_eq(&self.config, &other.config)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::default_garden(), BouquetConfig::default())
    }
}

impl AppState {
    pub fn new(catalog: Catalog, config: BouquetConfig) -> Self {
        Self {
            catalog: Rc::new(catalog),
            config: Rc::new(config),
            bouquet: Bouquet::new(),
            reveal: RevealToggle::new(),
        }
    }

    /// Whether the finish button should be offered.
    pub fn can_finish(&self) -> bool {
        !self.bouquet.is_empty()
    }
}

/// Actions that can be dispatched to update the application state.
#[derive(Debug, Clone)]
pub enum AppAction {
    /// Place a flower of the given catalog kind
    AddFlower(String),
    /// Remove a placed flower
    RemoveFlower(PlacementId),
    /// Move a placed flower while dragging
    MoveFlower(DragMove),
    /// Remove every placed flower
    ClearBouquet,
    OpenReveal,
    /// Fade-in timer fired
    SettleReveal(RevealTicket),
    CloseReveal,
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            AppAction::AddFlower(kind) => {
                let mut rng = rand::rng();
                next.bouquet = self
                    .bouquet
                    .add(&self.catalog, &kind, &self.config.pose, &mut rng);
            }
            AppAction::RemoveFlower(id) => {
                next.bouquet = self.bouquet.remove(id);
            }
            AppAction::MoveFlower(DragMove { id, position }) => {
                next.bouquet = self.bouquet.move_to(id, position.x, position.y);
            }
            AppAction::ClearBouquet => {
                next.bouquet = self.bouquet.clear();
            }
            AppAction::OpenReveal => {
                next.reveal.open();
            }
            AppAction::SettleReveal(ticket) => {
                next.reveal.settle(ticket);
            }
            AppAction::CloseReveal => {
                next.reveal.close();
            }
        }

        if next == *self {
            return self;
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bouquet_core::Position;
    use wasm_bindgen_test::wasm_bindgen_test;

    fn reduce(state: Rc<AppState>, action: AppAction) -> Rc<AppState> {
        state.reduce(action)
    }

    #[wasm_bindgen_test]
    fn test_add_and_remove_flower() {
        let state = Rc::new(AppState::default());
        assert!(!state.can_finish());

        let state = reduce(state, AppAction::AddFlower("rose".to_string()));
        assert_eq!(state.bouquet.len(), 1);
        assert!(state.can_finish());

        let id = state.bouquet.items()[0].id;
        let state = reduce(state, AppAction::RemoveFlower(id));
        assert!(state.bouquet.is_empty());
    }

    #[wasm_bindgen_test]
    fn test_noop_keeps_same_state() {
        let state = Rc::new(AppState::default());
        let after = reduce(state.clone(), AppAction::AddFlower("cactus".to_string()));
        assert!(Rc::ptr_eq(&state, &after));

        let after = reduce(state.clone(), AppAction::CloseReveal);
        assert!(Rc::ptr_eq(&state, &after));
    }

    #[wasm_bindgen_test]
    fn test_move_flower() {
        let state = reduce(
            Rc::new(AppState::default()),
            AppAction::AddFlower("tulip".to_string()),
        );
        let id = state.bouquet.items()[0].id;

        let state = reduce(
            state,
            AppAction::MoveFlower(DragMove {
                id,
                position: Position::new(12.5, 87.0),
            }),
        );
        assert_eq!(
            state.bouquet.get(id).unwrap().position,
            Position::new(12.5, 87.0)
        );
    }

    #[wasm_bindgen_test]
    fn test_clear_bouquet() {
        let state = Rc::new(AppState::default());
        let state = reduce(state, AppAction::AddFlower("rose".to_string()));
        let state = reduce(state, AppAction::AddFlower("fern".to_string()));
        let first_ids: Vec<_> = state.bouquet.items().iter().map(|item| item.id).collect();

        let cleared = reduce(state, AppAction::ClearBouquet);
        assert!(cleared.bouquet.is_empty());
        assert!(!cleared.can_finish());

        let again = reduce(cleared.clone(), AppAction::ClearBouquet);
        assert!(Rc::ptr_eq(&cleared, &again));

        let refilled = reduce(cleared, AppAction::AddFlower("lily".to_string()));
        assert!(!first_ids.contains(&refilled.bouquet.items()[0].id));
    }

    #[wasm_bindgen_test]
    fn test_reveal_cycle() {
        let state = reduce(Rc::new(AppState::default()), AppAction::OpenReveal);
        assert!(state.reveal.is_open());
        assert!(!state.reveal.is_visible());

        let ticket = state.reveal.pending().unwrap();
        let closed = reduce(state.clone(), AppAction::CloseReveal);
        let late = reduce(closed.clone(), AppAction::SettleReveal(ticket));
        assert!(!late.reveal.is_visible());
        assert!(Rc::ptr_eq(&closed, &late));

        let opened = reduce(state, AppAction::SettleReveal(ticket));
        assert!(opened.reveal.is_visible());
    }
}
