use proptest::prelude::*;
use seal_defines::defines::{DEFINES, rewrite};

fn any_define() -> impl Strategy<Value = usize> {
    0..DEFINES.len()
}

proptest! {
    #[test]
    fn lines_without_define_pass_through(lines in prop::collection::vec("[^#\n]*", 0..40),
                                         idx in any_define(),
                                         target in 0i64..=2) {
        let text = lines.join("\n");
        let out = rewrite(&text, &DEFINES[idx], target).unwrap();
        prop_assert_eq!(out, text);
    }

    #[test]
    fn every_legal_start_value_becomes_target(idx in any_define(),
                                              start_off in 0i64..5,
                                              target_off in 0i64..5,
                                              trailer in "[ a-z/*]{0,12}") {
        let spec = &DEFINES[idx];
        let span = spec.max - spec.min + 1;
        let start = spec.min + start_off % span;
        let target = spec.min + target_off % span;
        let line = format!("{} {}{}\n", spec.name, start, trailer);
        let out = rewrite(&line, spec, target).unwrap();
        prop_assert_eq!(out, format!("{} {}{}\n", spec.name, target, trailer));
    }

    #[test]
    fn rewrite_is_idempotent(idx in any_define(),
                             target_off in 0i64..5,
                             prefix in "[a-z ]{0,10}") {
        let spec = &DEFINES[idx];
        let target = spec.min + target_off % (spec.max - spec.min + 1);
        let text = format!("{prefix}\n{} 0\nint y = 1;\n", spec.name);
        let once = rewrite(&text, spec, target).unwrap();
        let twice = rewrite(&once, spec, target).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn out_of_range_targets_fail(idx in any_define(), delta in 1i64..1000) {
        let spec = &DEFINES[idx];
        let text = format!("{} 0\n", spec.name);
        prop_assert!(rewrite(&text, spec, spec.max + delta).is_err());
        prop_assert!(rewrite(&text, spec, spec.min - delta).is_err());
    }
}
