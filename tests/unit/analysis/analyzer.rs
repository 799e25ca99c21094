//! Tests for the single-image pipeline from file to record

#[cfg(test)]
mod tests {
    use crate::fixtures::{RED, framed, write_png};
    use eyespye::AnalysisError;
    use eyespye::analysis::analyzer::{Analyze, ImageAnalyzer};
    use eyespye::analysis::classifier::BackgroundColor;
    use eyespye::io::configuration::{CLASSIFICATION_FUZZ, FLOODFILL_FUZZ};
    use eyespye::raster::{BLACK, Raster, WHITE};
    use image::{Rgba, RgbaImage};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::path::Path;

    // Tests the default analyzer carries the fixed tolerances
    #[test]
    fn test_default_tolerances() {
        let analyzer = ImageAnalyzer::default();
        assert!((analyzer.classification_fuzz() - CLASSIFICATION_FUZZ).abs() < f64::EPSILON);
        assert!((analyzer.floodfill_fuzz() - FLOODFILL_FUZZ).abs() < f64::EPSILON);
        assert_eq!(analyzer, ImageAnalyzer::new());
    }

    // Tests an all-white file is white with no coverage
    #[test]
    fn test_all_white_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "A.png", &RgbaImage::from_pixel(100, 100, WHITE));

        let info = ImageAnalyzer::new().analyze_path(&path).unwrap();
        assert_eq!(info.filename, path.to_string_lossy());
        assert_eq!(info.background_color, BackgroundColor::White);
        assert!(info.coverage.abs() < 1e-9);
        assert_eq!((info.width, info.height), (100, 100));
        assert_eq!(info.coverage + info.background, 100.0);
    }

    // Tests an all-black file is black with no coverage
    #[test]
    fn test_all_black_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "B.png", &RgbaImage::from_pixel(50, 50, BLACK));

        let info = ImageAnalyzer::new().analyze(&path).unwrap();
        assert_eq!(info.background_color, BackgroundColor::Black);
        assert!(info.coverage.abs() < 1e-9);
        assert_eq!((info.width, info.height), (50, 50));
    }

    // Tests a bordered subject covers its share of the image
    #[test]
    fn test_bordered_subject() {
        let raster = Raster::from_rgba(framed((40, 40), WHITE, RED, (10, 10), (20, 20)));
        let info = ImageAnalyzer::new()
            .analyze_image(Path::new("subject.png"), raster)
            .unwrap();

        assert_eq!(info.filename, "subject.png");
        assert_eq!(info.background_color, BackgroundColor::White);
        assert!((info.coverage - 25.0).abs() < 1e-9);
        assert!((info.background - 75.0).abs() < 1e-9);
        assert_eq!(info.coverage + info.background, 100.0);
    }

    // Tests non-square images keep width and height apart
    #[test]
    fn test_dimensions_not_swapped() {
        let raster = Raster::filled(64, 12, BLACK);
        let info = ImageAnalyzer::new()
            .analyze_image(Path::new("wide.png"), raster)
            .unwrap();

        assert_eq!(info.width, 64);
        assert_eq!(info.height, 12);
    }

    // Tests repeated analysis of the same pixels gives the same record
    #[test]
    fn test_deterministic() {
        let mut rng = StdRng::seed_from_u64(7);
        let image = RgbaImage::from_fn(48, 32, |x, y| {
            let border = x < 8 || x >= 40 || y < 8 || y >= 24;
            if border {
                WHITE
            } else {
                Rgba([rng.random(), rng.random(), rng.random(), 255])
            }
        });
        let analyzer = ImageAnalyzer::new();
        let path = Path::new("noise.png");

        let first = analyzer
            .analyze_image(path, Raster::from_rgba(image.clone()))
            .unwrap();
        let second = analyzer
            .analyze_image(path, Raster::from_rgba(image))
            .unwrap();

        assert_eq!(first, second);
        assert!(first.coverage > 0.0 && first.coverage <= 100.0);
        assert!((first.coverage + first.background - 100.0).abs() < 1e-9);
    }

    // Tests images below the sampling window fail fast
    #[test]
    fn test_too_small_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "small.png", &RgbaImage::from_pixel(9, 40, WHITE));

        assert!(matches!(
            ImageAnalyzer::new().analyze_path(&path),
            Err(AnalysisError::ImageTooSmall {
                width: 9,
                height: 40,
                ..
            })
        ));
    }

    // Tests a missing file is a decode failure
    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.png");

        assert!(matches!(
            ImageAnalyzer::new().analyze_path(&path),
            Err(AnalysisError::ImageLoad { .. })
        ));
    }
}
