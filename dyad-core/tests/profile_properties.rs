use proptest::prelude::*;

use dyad_core::profile::{TraitProfile, TypeCode};
use dyad_core::quiz::{QuestionSetSize, Score};

proptest! {
    #[test]
    fn score_parsing_accepts_exactly_the_likert_domain(value in -50i8..=50) {
        match Score::try_from(value) {
            Ok(score) => {
                prop_assert!((-2..=2).contains(&value));
                prop_assert_eq!(i8::from(score), value);
            }
            Err(_) => prop_assert!(!(-2..=2).contains(&value)),
        }
    }

    #[test]
    fn only_the_two_published_batteries_parse(count in 0u16..=200) {
        match QuestionSetSize::try_from(count) {
            Ok(size) => prop_assert_eq!(size.total(), count),
            Err(_) => prop_assert!(count != 18 && count != 54),
        }
    }

    #[test]
    fn type_codes_round_trip_through_their_string_form(index in 0usize..27) {
        let profile = TraitProfile::all().nth(index).unwrap();
        let parsed: TypeCode = profile.code().to_string().parse().unwrap();
        prop_assert_eq!(parsed.profile(), profile);
    }
}
