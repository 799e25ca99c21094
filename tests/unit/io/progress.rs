//! Tests for batch progress tracking

#[cfg(test)]
mod tests {
    use eyespye::io::progress::ProgressManager;
    use std::path::Path;

    // Tests completed files are counted
    #[test]
    fn test_progress_counts_completions() {
        let pm = ProgressManager::hidden();
        pm.initialize(3);
        pm.complete_file(Path::new("dir/a.png"));
        pm.complete_file(Path::new("b.png"));

        assert_eq!(pm.completed(), 2);
        pm.finish();
    }

    // Tests re-initialization resets the count
    #[test]
    fn test_progress_reinitialize() {
        let pm = ProgressManager::default();
        pm.initialize(1);
        pm.complete_file(Path::new("a.png"));
        pm.initialize(4);

        assert_eq!(pm.completed(), 0);
        pm.finish();
    }

    // Tests the manager can be shared across threads
    #[test]
    fn test_progress_shared_between_threads() {
        let pm = ProgressManager::hidden();
        pm.initialize(8);

        std::thread::scope(|scope| {
            for i in 0..8 {
                let pm = &pm;
                scope.spawn(move || pm.complete_file(Path::new(&format!("{i}.png"))));
            }
        });

        assert_eq!(pm.completed(), 8);
    }
}
