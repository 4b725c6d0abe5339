mod tests {
    use std::collections::HashSet;

    use blinkt_mirror::{Duration, Instant, ResourceRegistry, ResourceState};

    const T0: Instant = Instant::from_millis(0);

    fn state_of(registry: &ResourceRegistry, name: &str) -> Option<ResourceState> {
        registry.get(name).map(|entry| entry.state())
    }

    #[test]
    fn test_add_appends_in_arrival_order() {
        let mut registry = ResourceRegistry::new();
        assert!(registry.add("a", "00FF00", T0));
        assert!(registry.add("b", "0000FF", T0));

        let names: Vec<_> = registry.iter().map(|entry| entry.name()).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(state_of(&registry, "a"), Some(ResourceState::Added));
        assert_eq!(registry.position("b"), Some(1));
    }

    #[test]
    fn test_duplicate_add_updates_in_place() {
        let mut registry = ResourceRegistry::new();
        assert!(registry.add("p1", "00FF00", T0));
        assert!(registry.add("p1", "0000FF", T0));

        assert_eq!(registry.len(), 1);
        let entry = registry.get("p1").unwrap();
        assert_eq!(entry.color(), "0000FF");
        assert_eq!(entry.state(), ResourceState::Updated);
    }

    #[test]
    fn test_duplicate_add_with_same_color_still_renders() {
        let mut registry = ResourceRegistry::new();
        registry.add("p1", "00FF00", T0);
        assert!(registry.add("p1", "00FF00", T0));
        assert_eq!(registry.len(), 1);
        assert_eq!(state_of(&registry, "p1"), Some(ResourceState::Added));
    }

    #[test]
    fn test_update_unknown_is_ignored() {
        let mut registry = ResourceRegistry::new();
        assert!(!registry.update("ghost", "00FF00", T0));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_update_same_color_is_noop() {
        let mut registry = ResourceRegistry::new();
        registry.add("p1", "0000FF", T0);
        assert!(!registry.update("p1", "0000FF", T0));
        assert_eq!(state_of(&registry, "p1"), Some(ResourceState::Added));
    }

    #[test]
    fn test_update_changes_color() {
        let mut registry = ResourceRegistry::new();
        registry.add("p1", "0000FF", T0);
        assert!(registry.update("p1", "FF0000", T0));
        let entry = registry.get("p1").unwrap();
        assert_eq!(entry.color(), "FF0000");
        assert_eq!(entry.state(), ResourceState::Updated);
    }

    #[test]
    fn test_update_refreshes_last_seen() {
        let mut registry = ResourceRegistry::new();
        registry.add("p1", "0000FF", T0);
        let later = T0 + Duration::from_secs(5);
        assert!(!registry.update("p1", "0000FF", later));
        assert_eq!(registry.get("p1").unwrap().last_seen(), Some(later));
    }

    #[test]
    fn test_delete_marks_entry() {
        let mut registry = ResourceRegistry::new();
        registry.add("p1", "0000FF", T0);
        assert!(!registry.delete("ghost"));
        assert!(registry.delete("p1"));
        // Removal happens in the render pass
        assert_eq!(registry.len(), 1);
        assert_eq!(state_of(&registry, "p1"), Some(ResourceState::Deleted));
    }

    #[test]
    fn test_add_revives_pending_delete() {
        let mut registry = ResourceRegistry::new();
        registry.add("p1", "0000FF", T0);
        registry.delete("p1");
        assert!(registry.add("p1", "0000FF", T0));
        assert_eq!(state_of(&registry, "p1"), Some(ResourceState::Updated));
    }

    #[test]
    fn test_evict_stale() {
        let mut registry = ResourceRegistry::new();
        registry.add("old", "0000FF", T0);
        registry.add("fresh", "0000FF", Instant::from_secs(20));

        let cutoff = Instant::from_secs(10);
        assert!(registry.has_stale(cutoff));
        assert_eq!(registry.evict_stale(cutoff), 1);
        assert_eq!(state_of(&registry, "old"), Some(ResourceState::Deleted));
        assert_eq!(state_of(&registry, "fresh"), Some(ResourceState::Added));
        // Already marked entries are not counted twice
        assert_eq!(registry.evict_stale(cutoff), 0);
    }

    #[test]
    fn test_names_stay_unique() {
        let mut registry = ResourceRegistry::new();
        let names = ["a", "b", "c", "a", "b", "d", "a"];
        for (step, name) in names.iter().cycle().take(50).enumerate() {
            let color = format!("{:06X}", step);
            match step % 3 {
                0 => registry.add(name, &color, T0),
                1 => registry.update(name, &color, T0),
                _ => registry.delete(name),
            };
            let unique: HashSet<_> = registry.iter().map(|entry| entry.name()).collect();
            assert_eq!(unique.len(), registry.len());
        }
    }
}
