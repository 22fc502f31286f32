//! Tests for random path selection.

#[cfg(test)]
mod tests {
    use crate::logsink::MemoryLogSink;
    use crate::script::{
        CustomerId, PathSelector, ScriptCatalog, SelectError, DEFAULT_SINGLE_DIGIT_DELAY,
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Arc;

    fn catalog_of(lines: &str) -> ScriptCatalog {
        ScriptCatalog::from_text(lines, CustomerId::from_value(10), DEFAULT_SINGLE_DIGIT_DELAY)
            .unwrap()
    }

    #[test]
    fn test_empty_catalog_is_an_error() {
        let catalog = catalog_of("");
        let mut selector =
            PathSelector::new(StdRng::seed_from_u64(1), Arc::new(MemoryLogSink::new()));
        assert_eq!(
            selector.select(&catalog).unwrap_err(),
            SelectError::EmptyCatalog
        );
    }

    #[test]
    fn test_index_always_in_range_and_all_indices_reachable() {
        let catalog = catalog_of("[1]\n[2]\n[3]\n[4]\n[5]");
        let mut selector =
            PathSelector::new(StdRng::seed_from_u64(42), Arc::new(MemoryLogSink::new()));

        let mut seen = [false; 5];
        for _ in 0..500 {
            let (index, path) = selector.select(&catalog).unwrap();
            assert!(index < catalog.len());
            assert_eq!(path, catalog.get(index).unwrap());
            seen[index] = true;
        }
        assert!(seen.iter().all(|s| *s), "unreachable index: {seen:?}");
    }

    #[test]
    fn test_seeded_selection_is_reproducible() {
        let catalog = catalog_of("[1]\n[2]\n[3]\n[4]\n[5]\n[6]\n[7]");

        let draw = |seed| {
            let mut selector =
                PathSelector::new(StdRng::seed_from_u64(seed), Arc::new(MemoryLogSink::new()));
            (0..20)
                .map(|_| selector.select(&catalog).unwrap().0)
                .collect::<Vec<_>>()
        };
        assert_eq!(draw(7), draw(7));
    }

    #[test]
    fn test_selection_is_logged_before_returning() {
        let catalog = catalog_of("[2,2,2] [7]");
        let sink = Arc::new(MemoryLogSink::new());
        let mut selector = PathSelector::new(StdRng::seed_from_u64(3), sink.clone());

        selector.select(&catalog).unwrap();

        let lines = sink.lines();
        assert_eq!(lines, vec!["Path = 0", "Path: [2,2,2] [7]"]);
    }
}
