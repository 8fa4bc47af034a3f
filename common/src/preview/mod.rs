//! Shared preview selection between the card grid and the modal viewer.
//!
//! The grid only calls [`PreviewCoordinator::show`], the viewer only reads
//! [`PreviewCoordinator::current`] (or listens through
//! [`PreviewCoordinator::subscribe`]) and calls [`PreviewCoordinator::hide`]
//! from its close affordance.

mod modal;

pub use modal::{ModalContent, modal_content};

use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PreviewState {
    #[default]
    Hidden,
    Visible { image_url: String },
}

impl PreviewState {
    pub fn is_visible(&self) -> bool {
        matches!(self, PreviewState::Visible { .. })
    }

    /// The selected URL, empty while hidden.
    pub fn image_url(&self) -> &str {
        match self {
            PreviewState::Visible { image_url } => image_url,
            PreviewState::Hidden => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&PreviewState)>;

#[derive(Default)]
pub struct PreviewCoordinator {
    state: RefCell<PreviewState>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_id: Cell<u64>,
}

impl PreviewCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> PreviewState {
        self.state.borrow().clone()
    }

    /// Shows `image_url`, replacing whatever is shown. Visibility and URL
    /// change in a single update.
    pub fn show(&self, image_url: impl Into<String>) {
        self.transition(PreviewState::Visible {
            image_url: image_url.into(),
        });
    }

    pub fn hide(&self) {
        self.transition(PreviewState::Hidden);
    }

    /// Registers `listener`, called after every state change.
    pub fn subscribe(&self, listener: impl Fn(&PreviewState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.borrow_mut().retain(|(sid, _)| *sid != id);
    }

    fn transition(&self, next: PreviewState) {
        {
            let mut state = self.state.borrow_mut();
            if *state == next {
                return;
            }
            log::debug!("preview {:?} -> {:?}", *state, next);
            *state = next.clone();
        }

        // Listeners may call back into the coordinator, so nothing stays borrowed.
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            listener(&next);
        }
    }
}
