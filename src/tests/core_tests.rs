#[cfg(test)]
mod tests {
    use crate::tests::test_utils::{manual_generator, TEST_EPOCH};
    use crate::*;

    #[test]
    fn test_simulated_first_and_second_id() {
        let (generator, _clock) = manual_generator(7, 1_680_000_000_005);

        let first = generator.generate().unwrap();
        let second = generator.generate().unwrap();

        assert_eq!(generator.decompose(first), (1_680_000_000_005, 7, 0));
        assert_eq!(generator.decompose(second), (1_680_000_000_005, 7, 1));
    }

    #[test]
    fn test_id_bit_structure() {
        let (generator, _clock) = manual_generator(0b10_1010_1010, 1_680_000_000_005);
        let id = generator.generate().unwrap();
        let id2 = generator.generate().unwrap();

        assert_eq!(id, (5 << 22) | (0b10_1010_1010 << 12));
        assert_eq!(id2, id | 1);
    }

    #[test]
    fn test_new_millisecond_resets_sequence() {
        let (generator, clock) = manual_generator(3, 1_680_000_000_000);
        for _ in 0..10 {
            generator.generate().unwrap();
        }

        clock.advance(1);
        let id = generator.generate().unwrap();
        assert_eq!(generator.decompose(id), (TEST_EPOCH + 1, 3, 0));
    }

    #[test]
    fn test_clock_regression_fails_without_mutating_state() {
        let (generator, clock) = manual_generator(1, 1_680_000_000_100);
        generator.generate().unwrap();
        let before = generator.state_snapshot();

        clock.set(1_680_000_000_099);
        assert_eq!(
            generator.generate(),
            Err(SnowflakeError::ClockRegression {
                last_timestamp: 100,
                current_timestamp: 99,
            })
        );
        assert_eq!(generator.state_snapshot(), before);

        // Once the clock is back, the sequence continues where it left off.
        clock.set(1_680_000_000_100);
        let id = generator.generate().unwrap();
        assert_eq!(generator.decompose(id), (TEST_EPOCH + 100, 1, 1));
    }

    #[test]
    fn test_clock_before_epoch_fails() {
        let (generator, _clock) = manual_generator(1, 1_679_999_999_000);
        assert_eq!(
            generator.generate(),
            Err(SnowflakeError::ClockRegression {
                last_timestamp: 0,
                current_timestamp: -1000,
            })
        );
    }

    #[test]
    fn test_sequential_generation_is_ordered() {
        let generator = Snowflake::new(1).unwrap();
        let ids: Vec<u64> = (0..1000).map(|_| generator.generate().unwrap()).collect();
        crate::tests::test_utils::assert_ids_monotonic(&ids);
    }

    #[test]
    fn test_display() {
        let generator = Snowflake::with_epoch(42, 1_700_000_000_000).unwrap();
        assert_eq!(
            generator.to_string(),
            "Snowflake [timestamp_bits=41, node_id_bits=10, sequence_bits=12, custom_epoch=1700000000000, node_id=42]"
        );
    }
}
