//! # Reordering
//!
//! Manual reordering happens in two steps:
//!
//! 1. [`ReorderController`] tracks a drag gesture over the displayed sequence
//!    and, when the gesture ends on a different position, emits a [`Move`].
//! 2. [`commit`] applies a `Move` to the canonical collection through
//!    [`ProductStore::replace_order`].
//!
//! ## Drag States
//!
//! | state                     | event     | next                 | output      |
//! |---------------------------|-----------|----------------------|-------------|
//! | Idle                      | start(i)  | Dragging{i, None}    |             |
//! | Idle                      | over/end/cancel | Idle           | None        |
//! | Dragging{s, _}            | start(i)  | Dragging{i, None}    | restarts    |
//! | Dragging{s, _}            | over(j)   | Dragging{s, Some(j)} |             |
//! | Dragging{s, Some(t)}, t≠s | end       | Idle                 | Move{s, t}  |
//! | Dragging{s, None/Some(s)} | end       | Idle                 | None        |
//! | Dragging                  | cancel    | Idle                 |             |
//!
//! Every exit path drops the tracked target, so a stale hover position never
//! carries into the next gesture.
//!
//! ## Filtered Views
//!
//! Indices in a `Move` refer to the displayed sequence, which may be a
//! filtered subset. The canonical positions held by the visible products are
//! treated as slots: the visible products are reordered and written back into
//! the same slots, while hidden products stay exactly where they were. With no
//! filter active this is a plain remove-and-insert on the whole collection.
//!
//! Commits are only accepted while the view is in manual-order mode. In a
//! sorted view the displayed order is not the canonical order, so a move has no
//! meaning and is rejected with [`CatalogError::InvalidOrder`].

use crate::error::{CatalogError, Result};
use crate::store::product_store::ProductStore;
use crate::store::PersistenceAdapter;
use crate::view::{self, ViewConfig};

/// A completed gesture: move the item displayed at `from` so it ends up at `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: usize,
    pub to: usize,
}

impl Move {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        source: usize,
        target: Option<usize>,
    },
}

#[derive(Debug, Default)]
pub struct ReorderController {
    state: DragState,
}

impl ReorderController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Begins a gesture at `index`. A gesture already in progress is abandoned.
    pub fn start(&mut self, index: usize) {
        if let DragState::Dragging { source, .. } = self.state {
            tracing::debug!(previous = source, index, "drag restarted");
        }
        self.state = DragState::Dragging {
            source: index,
            target: None,
        };
    }

    pub fn over(&mut self, index: usize) {
        if let DragState::Dragging { target, .. } = &mut self.state {
            *target = Some(index);
        }
    }

    pub fn end(&mut self) -> Option<Move> {
        let finished = std::mem::take(&mut self.state);
        match finished {
            DragState::Dragging {
                source,
                target: Some(target),
            } if target != source => Some(Move::new(source, target)),
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}

/// Applies `mv` to the canonical order of `store`, as seen through `config`.
pub fn commit<A: PersistenceAdapter>(
    store: &mut ProductStore<A>,
    config: &ViewConfig,
    mv: Move,
) -> Result<()> {
    if !config.manual_order {
        return Err(CatalogError::InvalidOrder(
            "reordering requires manual order mode".to_string(),
        ));
    }

    let mut visible: Vec<String> = view::derive(store.products(), config)
        .into_iter()
        .map(|p| p.id.clone())
        .collect();

    for index in [mv.from, mv.to] {
        if index >= visible.len() {
            return Err(CatalogError::InvalidOrder(format!(
                "position {} is out of range ({} displayed)",
                index,
                visible.len()
            )));
        }
    }

    if mv.from == mv.to {
        tracing::debug!(index = mv.from, "move to same position, nothing to commit");
        return Ok(());
    }

    // Canonical positions of the visible products, in canonical order.
    let slots: Vec<usize> = store
        .products()
        .iter()
        .enumerate()
        .filter(|(_, p)| config.matches(p))
        .map(|(i, _)| i)
        .collect();

    let moved = visible.remove(mv.from);
    visible.insert(mv.to, moved);

    let mut order: Vec<String> = store.products().iter().map(|p| p.id.clone()).collect();
    for (slot, id) in slots.into_iter().zip(visible) {
        order[slot] = id;
    }

    tracing::debug!(
        from = mv.from,
        to = mv.to,
        filtered = config.has_active_filters(),
        "committing manual reorder"
    );
    store.replace_order(&order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Price, ProductDraft};
    use crate::store::memory::MemAdapter;

    fn store_with(names: &[&str]) -> ProductStore<MemAdapter> {
        let mut store = ProductStore::open(MemAdapter::with_products(Vec::new())).unwrap();
        for name in names {
            store
                .create(ProductDraft::new(*name, Price::ZERO))
                .unwrap();
        }
        store
    }

    fn names(store: &ProductStore<MemAdapter>) -> Vec<String> {
        store.products().iter().map(|p| p.name.clone()).collect()
    }

    fn manual() -> ViewConfig {
        ViewConfig {
            manual_order: true,
            ..Default::default()
        }
    }

    // --- Controller ---

    #[test]
    fn test_gesture_produces_move() {
        let mut ctl = ReorderController::new();
        ctl.start(2);
        ctl.over(1);
        ctl.over(0);
        assert_eq!(ctl.end(), Some(Move::new(2, 0)));
        assert_eq!(ctl.state(), DragState::Idle);
    }

    #[test]
    fn test_end_without_target_is_noop() {
        let mut ctl = ReorderController::new();
        ctl.start(1);
        assert_eq!(ctl.end(), None);
        assert_eq!(ctl.state(), DragState::Idle);
    }

    #[test]
    fn test_end_on_source_is_noop() {
        let mut ctl = ReorderController::new();
        ctl.start(1);
        ctl.over(2);
        ctl.over(1);
        assert_eq!(ctl.end(), None);
    }

    #[test]
    fn test_idle_ignores_over_and_end() {
        let mut ctl = ReorderController::new();
        ctl.over(3);
        assert_eq!(ctl.state(), DragState::Idle);
        assert_eq!(ctl.end(), None);
        ctl.cancel();
        assert_eq!(ctl.state(), DragState::Idle);
    }

    #[test]
    fn test_cancel_clears_target() {
        let mut ctl = ReorderController::new();
        ctl.start(0);
        ctl.over(2);
        ctl.cancel();
        assert!(!ctl.is_dragging());

        ctl.start(0);
        assert_eq!(
            ctl.state(),
            DragState::Dragging {
                source: 0,
                target: None
            }
        );
        assert_eq!(ctl.end(), None);
    }

    #[test]
    fn test_restart_drops_stale_target() {
        let mut ctl = ReorderController::new();
        ctl.start(0);
        ctl.over(2);
        ctl.start(1);
        assert_eq!(
            ctl.state(),
            DragState::Dragging {
                source: 1,
                target: None
            }
        );
        assert_eq!(ctl.end(), None);
    }

    // --- Commit ---

    #[test]
    fn test_move_last_to_first() {
        let mut store = store_with(&["A", "B", "C"]);
        commit(&mut store, &manual(), Move::new(2, 0)).unwrap();
        assert_eq!(names(&store), vec!["C", "A", "B"]);
        assert_eq!(
            store.adapter().saved().unwrap()[0].name,
            "C".to_string()
        );
    }

    #[test]
    fn test_move_first_to_last() {
        let mut store = store_with(&["A", "B", "C", "D"]);
        commit(&mut store, &manual(), Move::new(0, 3)).unwrap();
        assert_eq!(names(&store), vec!["B", "C", "D", "A"]);
    }

    #[test]
    fn test_commit_rejected_outside_manual_mode() {
        let mut store = store_with(&["A", "B", "C"]);
        let saves = store.adapter().save_count();
        let result = commit(&mut store, &ViewConfig::default(), Move::new(0, 1));
        assert!(matches!(result, Err(CatalogError::InvalidOrder(_))));
        assert_eq!(names(&store), vec!["A", "B", "C"]);
        assert_eq!(store.adapter().save_count(), saves);
    }

    #[test]
    fn test_commit_rejects_out_of_range() {
        let mut store = store_with(&["A", "B"]);
        let result = commit(&mut store, &manual(), Move::new(0, 2));
        assert!(matches!(result, Err(CatalogError::InvalidOrder(_))));
        assert_eq!(names(&store), vec!["A", "B"]);
    }

    #[test]
    fn test_filtered_move_keeps_hidden_items_in_place() {
        let mut store = store_with(&["A1", "x", "A2", "y", "A3"]);
        let config = ViewConfig {
            search: "a".into(),
            ..manual()
        };
        // Displayed: [A1, A2, A3]; move A3 to the top.
        commit(&mut store, &config, Move::new(2, 0)).unwrap();
        assert_eq!(names(&store), vec!["A3", "x", "A1", "y", "A2"]);
    }

    #[test]
    fn test_controller_and_commit_together() {
        let mut store = store_with(&["A", "B", "C"]);
        let mut ctl = ReorderController::new();
        ctl.start(0);
        ctl.over(1);
        let mv = ctl.end().unwrap();
        commit(&mut store, &manual(), mv).unwrap();
        assert_eq!(names(&store), vec!["B", "A", "C"]);
    }
}
