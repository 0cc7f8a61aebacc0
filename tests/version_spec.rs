use std::collections::HashSet;

use semver::Version;
use version_spec::{
    OperationError, ResolvedVersionSpec, UnresolvedVersionSpec, is_alias, normalize,
};

mod normalization {
    use super::*;

    #[test]
    fn normalize_is_idempotent_for_mixed_inputs() {
        let inputs = [
            "v1.2.3",
            " ^1.2 ||~1|| 3 ,4 ",
            ">= 1 && < 2",
            "1.*.*",
            "1..**",
            ",v1",
            "> , 1",
            "latest",
            "",
            "*",
        ];

        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn alias_boundary() {
        assert!(!is_alias("1.2.3"));
        assert!(!is_alias("1-3"));
        assert!(is_alias("foo-bar"));
        assert!(is_alias("next-2023"));
    }
}

mod resolved_spec {
    use super::*;

    #[test]
    fn end_to_end_tagged_version() {
        assert_eq!(normalize("v1.2.3"), "1.2.3");
        assert!(!is_alias("1.2.3"));

        let spec = ResolvedVersionSpec::parse("v1.2.3").unwrap();

        assert_eq!(spec, ResolvedVersionSpec::Version(Version::new(1, 2, 3)));
        assert_eq!(spec.to_string(), "1.2.3");
    }

    #[test]
    fn round_trips_through_display() {
        for input in ["1.2.3", "0.0.1-alpha.2+build.7", "latest", "stable", "canary"] {
            let spec = ResolvedVersionSpec::parse(input).unwrap();
            let reparsed = ResolvedVersionSpec::parse(&spec.to_string()).unwrap();

            assert_eq!(reparsed, spec, "input: {input}");
        }
    }

    #[test]
    fn canary_is_special_cased() {
        assert_eq!(
            ResolvedVersionSpec::parse("canary").unwrap(),
            ResolvedVersionSpec::Canary
        );
        assert_eq!(ResolvedVersionSpec::Canary.to_string(), "canary");
    }

    #[test]
    fn partial_versions_are_errors() {
        for input in ["1.2", "1", "%"] {
            assert!(ResolvedVersionSpec::parse(input).is_err(), "input: {input}");
        }
    }
}

mod unresolved_spec {
    use super::*;

    #[test]
    fn or_terms_are_order_independent() {
        assert_eq!(
            UnresolvedVersionSpec::parse("^1.2 || ~1 || 3,4").unwrap(),
            UnresolvedVersionSpec::parse("3,4 || ~1 || ^1.2").unwrap()
        );
    }

    #[test]
    fn comma_and_space_are_interchangeable() {
        let comma = UnresolvedVersionSpec::parse("1,2").unwrap();
        let space = UnresolvedVersionSpec::parse("1 2").unwrap();
        let spaced_comma = UnresolvedVersionSpec::parse("1 , 2").unwrap();

        assert_eq!(comma, space);
        assert_eq!(space, spaced_comma);
    }

    #[test]
    fn partial_versions_widen_to_tilde() {
        let cases = [("1.2", "~1.2"), ("1", "~1"), ("1.2.*", "~1.2")];

        for (input, expected) in cases {
            assert_eq!(
                UnresolvedVersionSpec::parse(input).unwrap(),
                UnresolvedVersionSpec::req(expected).unwrap(),
                "input: {input}"
            );
        }
    }

    #[test]
    fn equal_specs_hash_equally() {
        let specs: HashSet<UnresolvedVersionSpec> = ["^1.2 || ~1", "~1 || ^1.2", "1.2", "~1.2"]
            .into_iter()
            .map(|input| UnresolvedVersionSpec::parse(input).unwrap())
            .collect();

        assert_eq!(specs.len(), 2);
    }

    #[test]
    fn canonical_form_reparses_to_equal_spec() {
        for input in [
            "^1.2 || ~1 || 3,4",
            ">=1.2.3 <2",
            "1.2",
            "v1.2.3",
            "latest",
            "1.x || 2",
            ">=1 1.2.x",
        ] {
            let spec = UnresolvedVersionSpec::parse(input).unwrap();
            let reparsed = UnresolvedVersionSpec::parse(&spec.canonical_form()).unwrap();

            assert_eq!(reparsed, spec, "input: {input}");
        }
    }
}

mod conversion {
    use super::*;

    #[test]
    fn requirement_cannot_be_resolved() {
        let result = UnresolvedVersionSpec::parse("^1.2")
            .unwrap()
            .to_resolved_spec();

        assert!(matches!(
            result,
            Err(OperationError::InvalidOperation { .. })
        ));
    }

    #[test]
    fn exact_version_resolves() {
        let resolved = UnresolvedVersionSpec::parse("1.2.3")
            .unwrap()
            .to_resolved_spec()
            .unwrap();

        assert_eq!(resolved, ResolvedVersionSpec::parse("1.2.3").unwrap());
    }

    #[test]
    fn resolved_to_unresolved_and_back() {
        for input in ["1.2.3", "latest", "canary"] {
            let resolved = ResolvedVersionSpec::parse(input).unwrap();
            let back = resolved.to_unresolved_spec().to_resolved_spec().unwrap();

            assert_eq!(back, resolved, "input: {input}");
        }
    }
}

mod serialization {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    struct ResolveVersionOutput {
        candidate: Option<UnresolvedVersionSpec>,
        version: Option<ResolvedVersionSpec>,
    }

    #[test]
    fn specs_embed_in_json_payloads() {
        let output: ResolveVersionOutput = serde_json::from_str(
            r#"{ "candidate": "3,4 || ~1", "version": "v1.2.3" }"#,
        )
        .unwrap();

        assert_eq!(
            output.candidate,
            Some(UnresolvedVersionSpec::parse("~1 || 4 3").unwrap())
        );
        assert_eq!(
            serde_json::to_value(&output).unwrap(),
            serde_json::json!({ "candidate": "^3 ^4 || ~1", "version": "1.2.3" })
        );
    }

    #[test]
    fn wildcard_requirements_survive_a_json_round_trip() {
        let spec = UnresolvedVersionSpec::parse("1.x || 2").unwrap();

        let json = serde_json::to_string(&spec).unwrap();
        assert_eq!(json, r#""^2 || ~1""#);

        let restored: UnresolvedVersionSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, spec);
        assert!(
            restored
                .as_range()
                .unwrap()
                .matches(&Version::new(1, 9, 0))
        );
    }

    #[test]
    fn invalid_spec_fails_deserialization() {
        let result = serde_json::from_str::<ResolveVersionOutput>(
            r#"{ "candidate": null, "version": "1.2" }"#,
        );

        assert!(result.is_err());
    }
}
