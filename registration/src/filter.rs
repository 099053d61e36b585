//! Pure search filtering over the event catalog.

use samyak_api::{Event, EventCategory};

/// Narrows the catalog to events whose title or description contains the
/// query, case-insensitively.
///
/// A query that is empty after trimming returns the catalog unchanged.
/// Categories left with no matching events are dropped entirely; category
/// and event order is otherwise preserved. The stored catalog is never
/// mutated, so clearing the query restores the full listing.
#[must_use]
pub fn filter_catalog(catalog: &[EventCategory], query: &str) -> Vec<EventCategory> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return catalog.to_vec();
    }
    let needle = trimmed.to_lowercase();

    catalog
        .iter()
        .filter_map(|category| {
            let events: Vec<Event> = category
                .events
                .iter()
                .filter(|event| matches_query(event, &needle))
                .cloned()
                .collect();
            if events.is_empty() {
                None
            } else {
                Some(EventCategory {
                    events,
                    ..category.clone()
                })
            }
        })
        .collect()
}

fn matches_query(event: &Event, needle: &str) -> bool {
    event.title.to_lowercase().contains(needle)
        || event.details.description.to_lowercase().contains(needle)
}
