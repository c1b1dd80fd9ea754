//! Tests for argument parsing and batch processing from the command line

#[cfg(test)]
mod tests {
    use clap::Parser;
    use image::{Rgb, RgbImage};
    use qmemento::io::cli::{Cli, Command, certificate_path, output_path};
    use qmemento::io::logger::RunLogger;
    use qmemento::transform::Mode;
    use std::path::{Path, PathBuf};

    fn write_photo(path: &Path) {
        RgbImage::from_fn(64, 48, |x, y| Rgb([(x * 3) as u8, (y * 5) as u8, 90]))
            .save(path)
            .expect("fixture saved");
    }

    fn run_cli(log: &Path, target: &Path, extra: &[&str]) -> Cli {
        let mut args: Vec<String> = vec![
            "qmemento".into(),
            "--quiet".into(),
            "--log".into(),
            log.display().to_string(),
            "run".into(),
            target.display().to_string(),
            "--seed".into(),
            "7".into(),
            "--background".into(),
            "no-such-background.jpg".into(),
        ];
        args.extend(extra.iter().map(|s| (*s).to_string()));
        Cli::try_parse_from(args).expect("valid arguments")
    }

    // Tests run arguments and defaults are parsed
    // Verified by changing the default mode
    #[test]
    fn test_parse_run_arguments() {
        let cli = Cli::try_parse_from(["qmemento", "run", "photo.png", "-m", "Entanglement"])
            .expect("valid arguments");

        let Command::Run(args) = cli.command else {
            unreachable!("expected the run subcommand");
        };
        assert_eq!(args.target, PathBuf::from("photo.png"));
        assert_eq!(args.mode, Mode::Entanglement);
        assert_eq!(args.shots, 2048);
        assert!(args.skip_existing());
        assert_eq!(cli.log, PathBuf::from("quantum_research_log.csv"));
    }

    // Tests unknown modes and out-of-range shot counts are rejected
    // Verified by widening the shot range
    #[test]
    fn test_parse_rejects_bad_values() {
        assert!(Cli::try_parse_from(["qmemento", "run", "p.png", "--mode", "warp"]).is_err());
        assert!(Cli::try_parse_from(["qmemento", "run", "p.png", "--shots", "100"]).is_err());
        assert!(Cli::try_parse_from(["qmemento", "run", "p.png", "--shots", "5000"]).is_err());
    }

    // Tests output naming next to the input
    // Verified by keeping the input extension
    #[test]
    fn test_output_paths() {
        let input = Path::new("shots/portrait.jpg");
        assert_eq!(output_path(input), PathBuf::from("shots/portrait_moment.png"));
        assert_eq!(
            certificate_path(input),
            PathBuf::from("shots/portrait_certificate.png")
        );
    }

    // Tests a run writes the image, the certificate and one log line
    // Verified by skipping the certificate export
    #[test]
    fn test_run_single_photo() {
        let dir = tempfile::tempdir().expect("temp dir");
        let photo = dir.path().join("portrait.png");
        let log = dir.path().join("log.csv");
        write_photo(&photo);

        run_cli(&log, &photo, &["--mode", "tunneling", "--shots", "1024"])
            .execute()
            .expect("run succeeds");

        let output = image::open(output_path(&photo)).expect("output written");
        assert_eq!((output.width(), output.height()), (64, 48));
        let certificate = image::open(certificate_path(&photo)).expect("certificate written");
        assert_eq!((certificate.width(), certificate.height()), (1200, 750));

        let records = RunLogger::new(&log).records().expect("log readable");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].mode, Mode::Tunneling);
        assert_eq!(records[0].shots, 1024);
    }

    // Tests existing outputs are skipped unless forced
    // Verified by ignoring the skip flag
    #[test]
    fn test_skip_existing_output() {
        let dir = tempfile::tempdir().expect("temp dir");
        let photo = dir.path().join("portrait.png");
        let log = dir.path().join("log.csv");
        write_photo(&photo);

        run_cli(&log, &photo, &[]).execute().expect("first run");
        run_cli(&log, &photo, &[]).execute().expect("skipped run");
        assert_eq!(RunLogger::new(&log).records().expect("log").len(), 1);

        run_cli(&log, &photo, &["--no-skip"]).execute().expect("forced run");
        assert_eq!(RunLogger::new(&log).records().expect("log").len(), 2);
    }

    // Tests directories process every photo but not generated files
    // Verified by accepting files with the output suffix
    #[test]
    fn test_run_directory() {
        let dir = tempfile::tempdir().expect("temp dir");
        let photos = dir.path().join("photos");
        std::fs::create_dir(&photos).expect("photo dir");
        write_photo(&photos.join("a.png"));
        write_photo(&photos.join("b.png"));
        std::fs::write(photos.join("notes.txt"), "not a photo").expect("notes");
        let log = dir.path().join("log.csv");

        run_cli(&log, &photos, &["--no-certificate"])
            .execute()
            .expect("batch succeeds");

        assert!(output_path(&photos.join("a.png")).exists());
        assert!(output_path(&photos.join("b.png")).exists());
        assert!(!certificate_path(&photos.join("a.png")).exists());
        assert_eq!(RunLogger::new(&log).records().expect("log").len(), 2);

        run_cli(&log, &photos, &["--no-skip", "--no-certificate"])
            .execute()
            .expect("second batch succeeds");
        assert_eq!(RunLogger::new(&log).records().expect("log").len(), 4);
    }

    // Tests a certificate that cannot be saved does not stop the batch
    // Verified by propagating the certificate export error
    #[test]
    fn test_certificate_save_failure_continues_batch() {
        let dir = tempfile::tempdir().expect("temp dir");
        let photos = dir.path().join("photos");
        std::fs::create_dir(&photos).expect("photo dir");
        write_photo(&photos.join("a.png"));
        write_photo(&photos.join("b.png"));
        // A directory squatting on the certificate path makes the save fail
        std::fs::create_dir(certificate_path(&photos.join("a.png"))).expect("blocker");
        let log = dir.path().join("log.csv");

        run_cli(&log, &photos, &[])
            .execute()
            .expect("batch succeeds despite the certificate");

        assert!(output_path(&photos.join("a.png")).exists());
        assert!(output_path(&photos.join("b.png")).exists());
        assert!(certificate_path(&photos.join("b.png")).is_file());
        assert_eq!(RunLogger::new(&log).records().expect("log").len(), 2);
    }

    // Tests non-image targets are refused before any sampling
    // Verified by accepting any file extension
    #[test]
    fn test_run_rejects_non_image() {
        let dir = tempfile::tempdir().expect("temp dir");
        let notes = dir.path().join("notes.txt");
        std::fs::write(&notes, "text").expect("notes");
        let log = dir.path().join("log.csv");

        assert!(run_cli(&log, &notes, &[]).execute().is_err());
        assert!(!log.exists());
    }

    // Tests the circuit and history subcommands
    // Verified by writing the diagram to the default path
    #[test]
    fn test_circuit_and_history() {
        let dir = tempfile::tempdir().expect("temp dir");
        let diagram = dir.path().join("circuit.png");
        let log = dir.path().join("log.csv");

        Cli::try_parse_from(["qmemento", "circuit", diagram.to_str().expect("utf-8 path")])
            .expect("valid arguments")
            .execute()
            .expect("diagram written");
        assert!(diagram.exists());

        Cli::try_parse_from([
            "qmemento",
            "--log",
            log.to_str().expect("utf-8 path"),
            "history",
        ])
        .expect("valid arguments")
        .execute()
        .expect("empty history is fine");
    }
}
