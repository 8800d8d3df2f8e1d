#[cfg(test)]
mod tests {
    use crate::validate::{validate, ValidationError};
    use chrono::{Duration, Utc};
    use proptest::prelude::*;
    use slotbot_common::Booking;

    fn booking(environment: &str, duration: Duration) -> Booking {
        Booking {
            environment: environment.to_string(),
            service: "auth".to_string(),
            ticket: "OPS-42".to_string(),
            start: Utc::now(),
            duration,
            requester: "carol".to_string(),
        }
    }

    #[test]
    fn test_valid_booking() {
        assert_eq!(validate(&booking("staging", Duration::hours(1))), Ok(()));
    }

    #[test]
    fn test_environment_is_case_insensitive() {
        for env in ["STAGING", "Qa", "demo", "DeMo"] {
            assert_eq!(validate(&booking(env, Duration::minutes(30))), Ok(()), "{env}");
        }
    }

    #[test]
    fn test_invalid_environment() {
        assert_eq!(
            validate(&booking("prod", Duration::hours(1))),
            Err(ValidationError::InvalidEnvironment("prod".to_string()))
        );
        assert!(matches!(
            validate(&booking("", Duration::hours(1))),
            Err(ValidationError::InvalidEnvironment(_))
        ));
        assert!(matches!(
            validate(&booking(" staging", Duration::hours(1))),
            Err(ValidationError::InvalidEnvironment(_))
        ));
    }

    #[test]
    fn test_duration_bounds_are_inclusive() {
        assert_eq!(validate(&booking("qa", Duration::minutes(5))), Ok(()));
        assert_eq!(validate(&booking("qa", Duration::hours(2))), Ok(()));
        assert_eq!(
            validate(&booking("qa", Duration::hours(2) + Duration::seconds(1))),
            Err(ValidationError::DurationTooLong)
        );
        assert_eq!(
            validate(&booking("qa", Duration::minutes(5) - Duration::seconds(1))),
            Err(ValidationError::DurationTooShort)
        );
    }

    #[test]
    fn test_environment_checked_before_duration() {
        assert!(matches!(
            validate(&booking("prod", Duration::hours(3))),
            Err(ValidationError::InvalidEnvironment(_))
        ));
        assert!(matches!(
            validate(&booking("prod", Duration::minutes(1))),
            Err(ValidationError::InvalidEnvironment(_))
        ));
    }

    #[test]
    fn test_error_messages_are_user_facing() {
        assert_eq!(
            ValidationError::InvalidEnvironment("prod".into()).to_string(),
            "invalid environment: prod. Must be staging, qa, or demo"
        );
        assert_eq!(
            ValidationError::DurationTooLong.to_string(),
            "maximum booking duration is 2 hours"
        );
    }

    proptest! {
        #[test]
        fn test_unknown_environments_rejected(env in "[a-zA-Z]{1,12}") {
            prop_assume!(!["staging", "qa", "demo"].contains(&env.to_lowercase().as_str()));
            prop_assert_eq!(
                validate(&booking(&env, Duration::hours(1))),
                Err(ValidationError::InvalidEnvironment(env.clone()))
            );
        }

        #[test]
        fn test_duration_classification(secs in 0i64..(4 * 3600)) {
            let duration = Duration::seconds(secs);
            let result = validate(&booking("demo", duration));
            if secs > 2 * 3600 {
                prop_assert_eq!(result, Err(ValidationError::DurationTooLong));
            } else if secs < 5 * 60 {
                prop_assert_eq!(result, Err(ValidationError::DurationTooShort));
            } else {
                prop_assert_eq!(result, Ok(()));
            }
        }
    }
}
