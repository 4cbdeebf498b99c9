/// Real items framed by one clone on each side
///
/// Slot `0` shows a copy of the last item, slot `len() + 1` a copy of the
/// first; slots `1..=len()` are the real items in order.
#[derive(Debug, Clone)]
pub struct ExtendedTrack<I> {
    slots: Vec<I>,
}

impl<I: Clone> ExtendedTrack<I> {
    /// Build the track; returns `None` when there is nothing to show
    pub fn build(items: &[I]) -> Option<Self> {
        let (first, last) = (items.first()?, items.last()?);

        let mut slots = Vec::with_capacity(items.len() + 2);
        slots.push(last.clone());
        slots.extend_from_slice(items);
        slots.push(first.clone());

        Some(Self { slots })
    }
}

impl<I> ExtendedTrack<I> {
    /// Number of real items
    pub fn len(&self) -> usize {
        self.slots.len() - 2
    }

    /// Always false; an empty track is never built
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of slots including both clones
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Real item index shown in `slot`
    pub fn real_index(&self, slot: usize) -> usize {
        let n = self.len();
        (slot + n - 1) % n
    }

    pub fn slot(&self, slot: usize) -> Option<&I> {
        self.slots.get(slot)
    }

    pub fn slots(&self) -> &[I] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_items_build_nothing() {
        assert!(ExtendedTrack::<u8>::build(&[]).is_none());
    }

    #[test]
    fn test_clones_frame_real_items() {
        let track = ExtendedTrack::build(&['a', 'b', 'c']).unwrap();
        assert_eq!(track.slots(), &['c', 'a', 'b', 'c', 'a']);
        assert_eq!(track.len(), 3);
        assert_eq!(track.slot_count(), 5);
    }

    #[test]
    fn test_clone_slots_map_to_real_items() {
        let track = ExtendedTrack::build(&['a', 'b', 'c']).unwrap();
        assert_eq!(track.real_index(0), 2);
        assert_eq!(track.real_index(1), 0);
        assert_eq!(track.real_index(3), 2);
        assert_eq!(track.real_index(4), 0);
    }

    #[test]
    fn test_single_item_track() {
        let track = ExtendedTrack::build(&["only"]).unwrap();
        assert_eq!(track.slot_count(), 3);
        assert_eq!(track.real_index(0), 0);
        assert_eq!(track.real_index(2), 0);
    }
}
