//! Tests for spinner and batch progress tracking

#[cfg(test)]
mod tests {
    use qmemento::io::progress::ProgressManager;
    use std::path::Path;

    // Tests the batch bar advances once per completed photo
    // Verified by skipping the increment
    #[test]
    fn test_batch_progress_counts_files() {
        let mut manager = ProgressManager::new();
        manager.initialize(3);

        for name in ["a.png", "b.png"] {
            let spinner = manager.start_file(Path::new(name), 1024);
            manager.complete_file(&spinner);
        }

        assert_eq!(manager.completed(), 2);
        manager.finish();
    }

    // Tests a single photo gets no batch bar
    // Verified by creating the batch bar for any file count
    #[test]
    fn test_single_file_has_no_batch_bar() {
        let mut manager = ProgressManager::default();
        manager.initialize(1);

        let spinner = manager.start_file(Path::new("only.jpg"), 512);
        manager.complete_file(&spinner);

        assert_eq!(manager.completed(), 0);
        assert!(spinner.is_finished());
        manager.finish();
    }

    // Tests a failed photo clears its spinner without advancing the batch
    // Verified by completing the spinner on failure
    #[test]
    fn test_abandoned_file_not_counted() {
        let mut manager = ProgressManager::new();
        manager.initialize(2);

        let failed = manager.start_file(Path::new("broken.png"), 512);
        manager.abandon_file(&failed);
        assert!(failed.is_finished());
        assert_eq!(manager.completed(), 0);

        let spinner = manager.start_file(Path::new("fine.png"), 512);
        manager.complete_file(&spinner);
        assert_eq!(manager.completed(), 1);
        manager.finish();
    }
}
