//! Tests for configuration validation and the generation pipeline

#[cfg(test)]
mod tests {
    use dungeongen::GenerationError;
    use dungeongen::algorithm::executor::{GeneratorConfig, MapGenerator, generate};
    use dungeongen::io::configuration::{DEFAULT_MAX_RETRIES, MAX_GRID_DIMENSION};
    use dungeongen::spatial::Tile;

    // Verifies the default configuration
    // Verified by changing the default seed
    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!((config.width, config.height, config.seed), (80, 27, 3225));
        assert_eq!(config.max_retries, DEFAULT_MAX_RETRIES);
        assert_eq!((config.min_room_width, config.min_room_height), (4, 4));
        assert_eq!(config.minimum_dimensions(), (10, 10));
        assert!(config.validate().is_ok());
    }

    // Tests grids too small for a room are rejected before drawing
    // Verified by using the room minimum as the grid minimum
    #[test]
    fn test_dimension_validation() {
        assert!(GeneratorConfig::new(10, 10, 0).validate().is_ok());
        assert!(matches!(
            GeneratorConfig::new(9, 9, 0).validate(),
            Err(GenerationError::InvalidDimensions {
                width: 9,
                height: 9,
                minimum_width: 10,
                minimum_height: 10
            })
        ));
        assert!(matches!(
            GeneratorConfig::new(80, 9, 0).validate(),
            Err(GenerationError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            GeneratorConfig::new(MAX_GRID_DIMENSION + 1, 20, 0).validate(),
            Err(GenerationError::InvalidDimensions { .. })
        ));
    }

    // Tests parameter validation
    // Verified by accepting a zero retry budget
    #[test]
    fn test_parameter_validation() {
        let zero_retries = GeneratorConfig::default().with_max_retries(0);
        assert!(matches!(
            zero_retries.validate(),
            Err(GenerationError::InvalidParameter {
                parameter: "max_retries",
                ..
            })
        ));

        let thin = GeneratorConfig::default().with_min_room_size(2, 4);
        assert!(matches!(
            thin.validate(),
            Err(GenerationError::InvalidParameter {
                parameter: "min_room_width",
                ..
            })
        ));

        let larger = GeneratorConfig::new(20, 20, 0).with_min_room_size(6, 5);
        assert_eq!(larger.minimum_dimensions(), (14, 12));
        assert!(larger.validate().is_ok());
    }

    // Tests the generator refuses invalid configurations
    // Verified by validating lazily inside generate
    #[test]
    fn test_generator_validates() {
        assert!(MapGenerator::new(GeneratorConfig::new(5, 5, 0)).is_err());
        let generator = MapGenerator::new(GeneratorConfig::default()).expect("valid config");
        assert_eq!(generator.config(), &GeneratorConfig::default());
    }

    // Tests the reference map satisfies the layout counts
    // Verified by stopping selection one corridor early
    #[test]
    fn test_default_map_counts() {
        let map = generate(&GeneratorConfig::default()).expect("default seed generates");
        let rooms = map.room_count();

        assert_eq!((map.width(), map.height(), map.seed()), (80, 27, 3225));
        assert!(rooms >= 2);
        assert_eq!(map.corridors().len(), rooms - 1);
        assert_eq!(map.obstacles().len(), rooms - 1);
        assert_eq!(map.obstacle_goal(), rooms - 1);
        assert_eq!(map.exits().len(), 2);
        assert_eq!(map.grid().count(Tile::Avatar), 1);
        assert_eq!(map.grid().count(Tile::UnlockedExit), 2);
        assert_eq!(map.grid().count(Tile::Obstacle), rooms - 1);
        assert_eq!(map.grid().get(map.start_position()), Some(Tile::Avatar));
    }

    // Tests the same seed reproduces the same map
    // Verified by seeding the generator from entropy
    #[test]
    fn test_deterministic() {
        let config = GeneratorConfig::new(60, 24, 42);
        let first = generate(&config).expect("seed 42 generates");
        let second = MapGenerator::new(config)
            .and_then(MapGenerator::generate)
            .expect("seed 42 generates");

        assert_eq!(first, second);
        assert_eq!(first.grid().to_string(), second.into_grid().to_string());
    }

    // Tests different seeds give different maps
    // Verified by ignoring the configured seed
    #[test]
    fn test_seed_changes_map() {
        let first = generate(&GeneratorConfig::default().with_seed(1)).expect("seed 1 generates");
        let second = generate(&GeneratorConfig::default().with_seed(2)).expect("seed 2 generates");
        assert_ne!(first.grid(), second.grid());
    }

    // Tests the smallest legal grid either generates or reports too few rooms
    // Verified by letting placement draw from an empty range
    #[test]
    fn test_minimum_grid() {
        match generate(&GeneratorConfig::new(10, 10, 0)) {
            Ok(map) => {
                assert!(map.room_count() >= 2);
                assert_eq!(map.exits().len(), 2);
            }
            Err(error) => assert_eq!(error.reason_code(), "insufficient-rooms"),
        }
    }
}
