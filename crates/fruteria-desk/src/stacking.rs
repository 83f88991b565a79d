//! Stacking coordinator
//!
//! Hands out z-indices from a counter that only ever grows, so the most
//! recently raised panel is always strictly on top and no two open panels
//! share a value. Closing a panel leaves a gap; only relative order
//! matters. When the counter reaches its limit, the open panels are
//! renumbered `1..=N` in their current order and counting resumes.

use crate::panel::{Panel, PanelId, ZIndex};

/// Monotonic z-index allocator
#[derive(Clone, Debug)]
pub struct StackingCoordinator {
    counter: ZIndex,
    limit: ZIndex,
}

impl Default for StackingCoordinator {
    fn default() -> Self {
        Self::new(ZIndex::MAX - 1)
    }
}

impl StackingCoordinator {
    /// Create a coordinator that compacts once the counter reaches `limit`
    pub fn new(limit: ZIndex) -> Self {
        Self {
            counter: 0,
            limit: limit.max(2),
        }
    }

    /// Highest z-index handed out since the last compaction
    pub fn counter(&self) -> ZIndex {
        self.counter
    }

    /// Allocate the next z-index, compacting `panels` first if needed
    pub fn next_z_index(&mut self, panels: &mut [Panel]) -> ZIndex {
        if self.counter >= self.limit {
            self.compact(panels);
        }
        self.counter += 1;
        self.counter
    }

    /// Raise a panel above every other open panel.
    ///
    /// Returns the new z-index, or `None` if the panel is not open.
    pub fn bring_to_front(&mut self, panels: &mut [Panel], id: &PanelId) -> Option<ZIndex> {
        if !panels.iter().any(|p| &p.id == id) {
            return None;
        }
        let z = self.next_z_index(panels);
        let panel = panels.iter_mut().find(|p| &p.id == id)?;
        panel.z_index = z;
        Some(z)
    }

    /// Renumber open panels to `1..=N`, preserving their relative order
    fn compact(&mut self, panels: &mut [Panel]) {
        tracing::warn!(
            counter = self.counter,
            panels = panels.len(),
            "z-index limit reached, compacting"
        );
        let mut order: Vec<usize> = (0..panels.len()).collect();
        order.sort_by_key(|&i| panels[i].z_index);
        for (rank, &i) in order.iter().enumerate() {
            panels[i].z_index = rank as ZIndex + 1;
        }
        self.counter = panels.len() as ZIndex;
    }

    /// Forget all allocations (workspace re-initialization)
    pub fn reset(&mut self) {
        self.counter = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Rect, Size};

    fn panel(id: &str, z: ZIndex) -> Panel {
        Panel {
            id: PanelId::from(id),
            key: "about".to_string(),
            title: "About".to_string(),
            rect: Rect::new(0.0, 0.0, 300.0, 200.0),
            z_index: z,
            min_size: Size::new(200.0, 100.0),
        }
    }

    #[test]
    fn test_next_z_index_monotonic() {
        let mut stacking = StackingCoordinator::default();
        let mut panels: Vec<Panel> = Vec::new();
        assert_eq!(stacking.next_z_index(&mut panels), 1);
        assert_eq!(stacking.next_z_index(&mut panels), 2);
        assert_eq!(stacking.counter(), 2);
    }

    #[test]
    fn test_bring_to_front() {
        let mut stacking = StackingCoordinator::default();
        let mut panels = vec![panel("a", 0), panel("b", 0)];
        for i in 0..2 {
            let z = stacking.next_z_index(&mut panels);
            panels[i].z_index = z;
        }

        assert_eq!(stacking.bring_to_front(&mut panels, &PanelId::from("a")), Some(3));
        assert!(panels[0].z_index > panels[1].z_index);
    }

    #[test]
    fn test_bring_to_front_unknown_does_not_allocate() {
        let mut stacking = StackingCoordinator::default();
        let mut panels = vec![panel("a", 1)];
        assert_eq!(stacking.bring_to_front(&mut panels, &PanelId::from("zz")), None);
        assert_eq!(stacking.counter(), 0);
    }

    #[test]
    fn test_compaction_preserves_order() {
        let mut stacking = StackingCoordinator::new(10);
        let mut panels = vec![panel("a", 0), panel("b", 0), panel("c", 0)];
        for i in 0..3 {
            let z = stacking.next_z_index(&mut panels);
            panels[i].z_index = z;
        }
        // Churn until the limit forces a compaction
        for _ in 0..10 {
            stacking.bring_to_front(&mut panels, &PanelId::from("a"));
            stacking.bring_to_front(&mut panels, &PanelId::from("b"));
        }
        assert!(stacking.counter() <= 10);
        // b was raised last, then a, c is at the bottom
        assert!(panels[1].z_index > panels[0].z_index);
        assert!(panels[0].z_index > panels[2].z_index);
        let mut zs: Vec<_> = panels.iter().map(|p| p.z_index).collect();
        zs.sort_unstable();
        zs.dedup();
        assert_eq!(zs.len(), 3);
    }
}
