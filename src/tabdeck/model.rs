use serde::{Deserialize, Serialize};

pub type CardId = u32;
pub type TabId = u32;

/// Id of the tab that drives reorders.
pub const FIRST_TAB_ID: TabId = 0;
/// Id of the tab that mirrors them.
pub const SECOND_TAB_ID: TabId = 1;

/// An atomic content item. Identity is the `id` field, which correlates the
/// card across the two tabs; content never changes after construction, only
/// the card's position within each tab's sequence does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    pub content: String,
    pub icon: String,
}

impl Card {
    pub fn new(id: CardId, title: &str, content: &str, icon: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            content: content.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// An ordered collection of cards plus display metadata. Exactly two exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub id: TabId,
    pub title: String,
    pub icon: String,
    pub cards: Vec<Card>,
}

/// The whole persisted state: which tab is active plus both tabs.
///
/// Serialized as `{"activeTab": …, "tabs": […]}` — the same shape the
/// stored blob has always had.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub active_tab: TabId,
    pub tabs: Vec<Tab>,
}

fn seed_cards() -> Vec<Card> {
    vec![
        Card::new(1, "Reach", "How far the message travels.", "reach.png"),
        Card::new(2, "Retention", "How long it stays remembered.", "retention.png"),
        Card::new(3, "Engagement", "How much it gets talked about.", "engagement.png"),
        Card::new(4, "Resonance", "How strongly it lands emotionally.", "resonance.png"),
    ]
}

impl AppState {
    /// Fresh seed state: both tabs start with the same cards in the same
    /// order, `active_tab` is 0. Every call allocates independent card
    /// lists; nothing is shared between invocations or between the tabs.
    ///
    /// The seed deliberately lists the id-1 tab before the id-0 tab — the
    /// display order and the id assignment disagree in the historical data
    /// and consumers depend on both, so neither is corrected here.
    pub fn default_state() -> Self {
        Self {
            active_tab: FIRST_TAB_ID,
            tabs: vec![
                Tab {
                    id: SECOND_TAB_ID,
                    title: "Direct".to_string(),
                    icon: "retention.png".to_string(),
                    cards: seed_cards(),
                },
                Tab {
                    id: FIRST_TAB_ID,
                    title: "Indirect".to_string(),
                    icon: "engagement.png".to_string(),
                    cards: seed_cards(),
                },
            ],
        }
    }

    /// Look up a tab by id.
    pub fn tab(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.id == id)
    }

    /// Structural integrity check, used when adopting loaded state.
    ///
    /// Verifies: exactly two tabs with distinct ids, `active_tab` names one
    /// of them, no duplicate card id within a tab, and both tabs hold the
    /// same multiset of card ids (order may differ).
    pub fn validate(&self) -> Result<(), String> {
        if self.tabs.len() != 2 {
            return Err(format!("expected 2 tabs, found {}", self.tabs.len()));
        }
        if self.tabs[0].id == self.tabs[1].id {
            return Err(format!("duplicate tab id {}", self.tabs[0].id));
        }
        if self.tab(self.active_tab).is_none() {
            return Err(format!("active_tab {} matches no tab", self.active_tab));
        }
        for tab in &self.tabs {
            let mut ids: Vec<CardId> = tab.cards.iter().map(|c| c.id).collect();
            ids.sort_unstable();
            if ids.windows(2).any(|w| w[0] == w[1]) {
                return Err(format!("duplicate card id in tab {}", tab.id));
            }
        }
        let mut first: Vec<CardId> = self.tabs[0].cards.iter().map(|c| c.id).collect();
        let mut second: Vec<CardId> = self.tabs[1].cards.iter().map(|c| c.id).collect();
        first.sort_unstable();
        second.sort_unstable();
        if first != second {
            return Err("tabs hold different card sets".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_valid_and_starts_on_tab_zero() {
        let state = AppState::default_state();
        state.validate().unwrap();
        assert_eq!(state.active_tab, 0);
        // Historical inversion: the id-1 tab renders first.
        assert_eq!(state.tabs[0].id, 1);
        assert_eq!(state.tabs[1].id, 0);
    }

    #[test]
    fn default_state_calls_do_not_alias() {
        let mut a = AppState::default_state();
        let b = AppState::default_state();
        a.tabs[0].cards.remove(0);
        assert_eq!(b.tabs[0].cards.len(), 4);
        // The two tabs within one state are independent too.
        assert_eq!(a.tabs[1].cards.len(), 4);
    }

    #[test]
    fn validate_rejects_mismatched_card_sets() {
        let mut state = AppState::default_state();
        state.tabs[1].cards.pop();
        assert!(state.validate().is_err());
    }

    #[test]
    fn validate_rejects_duplicate_card_id() {
        let mut state = AppState::default_state();
        let dup = state.tabs[0].cards[0].clone();
        state.tabs[0].cards.push(dup);
        assert!(state.validate().is_err());
    }

    #[test]
    fn validate_rejects_unknown_active_tab() {
        let mut state = AppState::default_state();
        state.active_tab = 7;
        assert!(state.validate().is_err());
    }

    #[test]
    fn state_round_trips_with_camel_case_field_names() {
        let state = AppState::default_state();
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"activeTab\":0"));
        let back: AppState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
