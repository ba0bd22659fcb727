use crate::domain::catalog::Catalog;
#[cfg(test)]
use crate::domain::overlay::CardData;
use crate::domain::overlay::Overlay;
use std::collections::HashMap;

/// What a card's click handler fills the overlay from.
#[derive(Debug, Clone)]
pub enum ClickHandler {
    /// Fields carried on the card itself.
    #[cfg(test)]
    Inline(CardData),
    /// Look the listing up in the catalog at click time.
    Lookup(String),
}

/// Click dispatch for the dashboard: one handler per card, registered up
/// front, all writing into one shared overlay.
pub struct DetailView<'a> {
    catalog: &'a Catalog,
    handlers: HashMap<String, ClickHandler>,
    overlay: Overlay,
}

impl<'a> DetailView<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            handlers: HashMap::new(),
            overlay: Overlay::default(),
        }
    }

    /// Registers a lookup handler for every listing in the catalog.
    pub fn setup(catalog: &'a Catalog) -> Self {
        let mut view = Self::new(catalog);
        for listing in catalog.listings() {
            view.subscribe(listing.id.clone(), ClickHandler::Lookup(listing.id.clone()));
        }
        view
    }

    /// Replaces any handler already registered for `card_id`.
    pub fn subscribe(&mut self, card_id: impl Into<String>, handler: ClickHandler) {
        self.handlers.insert(card_id.into(), handler);
    }

    /// Runs the card's handler. Returns false, leaving the overlay as it was,
    /// when the card has no handler or its listing isn't in the catalog.
    pub fn click(&mut self, card_id: &str) -> bool {
        let Some(handler) = self.handlers.get(card_id) else {
            return false;
        };

        match handler {
            #[cfg(test)]
            ClickHandler::Inline(card) => {
                self.overlay.show_card(card);
                true
            }
            ClickHandler::Lookup(id) => match self.catalog.get(id) {
                Some(listing) => {
                    self.overlay.show_listing(listing);
                    true
                }
                None => false,
            },
        }
    }

    #[cfg(test)]
    pub fn dismiss(&mut self) {
        self.overlay.dismiss();
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    #[cfg(test)]
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}
