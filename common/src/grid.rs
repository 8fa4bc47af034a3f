//! Card grid mapping: records in, cards out, in store order.

use crate::model::image_record::ImageRecord;
use crate::preview::PreviewCoordinator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub key: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub created_at: i64,
}

impl From<&ImageRecord> for Card {
    fn from(record: &ImageRecord) -> Self {
        Self {
            key: record.id.to_string(),
            title: record.title.clone(),
            description: record.description.clone(),
            url: record.url.clone(),
            created_at: record.created_at,
        }
    }
}

impl Card {
    /// The card's "view" action.
    pub fn view(&self, coordinator: &PreviewCoordinator) {
        coordinator.show(self.url.clone());
    }
}

pub fn cards(records: &[ImageRecord]) -> Vec<Card> {
    records.iter().map(Card::from).collect()
}

/// Relative age of a card, e.g. `"3 hours ago"`.
pub fn relative_time(created_at_ms: i64, now_ms: i64) -> String {
    let seconds = now_ms.saturating_sub(created_at_ms).max(0) / 1000;
    let (amount, unit) = match seconds {
        0..=59 => return "just now".to_string(),
        60..=3_599 => (seconds / 60, "minute"),
        3_600..=86_399 => (seconds / 3_600, "hour"),
        86_400..=2_591_999 => (seconds / 86_400, "day"),
        2_592_000..=31_535_999 => (seconds / 2_592_000, "month"),
        _ => (seconds / 31_536_000, "year"),
    };
    let plural = if amount == 1 { "" } else { "s" };
    format!("{} {}{} ago", amount, unit, plural)
}
