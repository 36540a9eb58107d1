use std::collections::HashMap;
use std::hash::Hash;

use crate::domain::common::Labeled;

/// Label shown when a foreign key does not resolve, either because the parent
/// record is gone or the parent collection failed to load. The record still
/// renders with its raw data.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// id → label lookup over one parent collection, built in a single pass.
#[derive(Debug, Clone, Default)]
pub struct LabelIndex<I> {
    labels: HashMap<I, String>,
}

impl<I: Copy + Eq + Hash> LabelIndex<I> {
    pub fn build<'a, T>(parents: impl IntoIterator<Item = &'a T>) -> Self
    where
        T: Labeled<Id = I> + 'a,
    {
        Self {
            labels: parents
                .into_iter()
                .map(|parent| (parent.id(), parent.label().to_string()))
                .collect(),
        }
    }

    /// Resolve one foreign key; a dangling reference yields the sentinel
    /// instead of failing the record.
    pub fn label_for(&self, id: I) -> String {
        self.labels
            .get(&id)
            .cloned()
            .unwrap_or_else(|| UNKNOWN_LABEL.to_string())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_room_type::aggregate::{RoomType, RoomTypeId};

    #[test]
    fn resolves_known_ids_and_falls_back_to_the_sentinel() {
        let parents = vec![
            RoomType { id: RoomTypeId(1), name: "Doble".into() },
            RoomType { id: RoomTypeId(2), name: "Suite".into() },
        ];
        let index = LabelIndex::build(&parents);

        assert_eq!(index.len(), 2);
        assert_eq!(index.label_for(RoomTypeId(1)), "Doble");
        assert_eq!(index.label_for(RoomTypeId(99)), UNKNOWN_LABEL);
    }

    #[test]
    fn an_empty_parent_collection_resolves_everything_to_the_sentinel() {
        let index: LabelIndex<RoomTypeId> = LabelIndex::build(&[] as &[RoomType]);
        assert!(index.is_empty());
        assert_eq!(index.label_for(RoomTypeId(1)), UNKNOWN_LABEL);
    }
}
