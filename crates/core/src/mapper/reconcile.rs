//! Id-indexed reconciliation of child collections.

use std::collections::HashMap;

use crate::error::CoreError;
use crate::types::DbId;

/// Reconcile an entity child collection against an incoming DTO list.
///
/// Existing children are indexed by id and diffed against the list:
///
/// - a DTO carrying a known id updates the matching child,
/// - a DTO without an id creates a new child,
/// - children absent (by id) from the DTO list are dropped,
/// - a DTO carrying an unknown id is a stale reference and is rejected
///   with a validation error.
///
/// The returned collection follows the DTO list order.
pub fn reconcile<E, D>(
    existing: Vec<E>,
    incoming: &[D],
    entity_name: &'static str,
    entity_id: impl Fn(&E) -> Option<DbId>,
    dto_id: impl Fn(&D) -> Option<DbId>,
    mut apply: impl FnMut(&D, Option<E>) -> E,
) -> Result<Vec<E>, CoreError> {
    let mut index: HashMap<DbId, E> = existing
        .into_iter()
        .filter_map(|entity| entity_id(&entity).map(|id| (id, entity)))
        .collect();

    let mut result = Vec::with_capacity(incoming.len());
    for dto in incoming {
        match dto_id(dto) {
            Some(id) => match index.remove(&id) {
                Some(entity) => result.push(apply(dto, Some(entity))),
                None => {
                    return Err(CoreError::Validation(format!(
                        "Unknown {entity_name} id {id}: not a child of the target entity"
                    )));
                }
            },
            None => result.push(apply(dto, None)),
        }
    }

    // Whatever is left in the index was dropped by the client.
    Ok(result)
}
