//! Property-based tests for path normalization and directive parsing.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::directive::{parse_directives, scan, Scope};
    use crate::path::{join_target, normalize};
    use proptest::prelude::*;
    use std::path::{Component, Path};

    // ============================================================================
    // normalize property tests
    // ============================================================================

    proptest! {
        /// Property: normalize is idempotent
        #[test]
        fn normalize_is_idempotent(segments in prop::collection::vec("[a-z]{1,4}|\\.|\\.\\.", 0..8)) {
            let path = format!("/{}", segments.join("/"));
            let once = normalize(Path::new(&path));
            let twice = normalize(&once);
            prop_assert_eq!(once, twice);
        }

        /// Property: a normalized absolute path has no `.` or `..` components
        #[test]
        fn normalize_absolute_has_no_dot_components(segments in prop::collection::vec("[a-z]{1,4}|\\.|\\.\\.", 0..8)) {
            let path = format!("/{}", segments.join("/"));
            let normalized = normalize(Path::new(&path));
            for component in normalized.components() {
                prop_assert!(
                    !matches!(component, Component::CurDir | Component::ParentDir),
                    "unexpected component in {:?}",
                    normalized
                );
            }
        }

        /// Property: plain relative targets always stay under the base directory
        #[test]
        fn join_plain_target_stays_under_base(target in "[a-z]{1,6}(/[a-z]{1,6}){0,3}\\.md") {
            let joined = join_target(Path::new("/base"), &target);
            prop_assert!(joined.starts_with("/base"));
        }
    }

    // ============================================================================
    // directive parser property tests
    // ============================================================================

    proptest! {
        /// Property: a well-formed directive line round-trips its target and scope
        #[test]
        fn well_formed_directive_is_parsed(
            target in "[A-Za-z0-9_./-]{1,30}",
            extra in any::<bool>(),
            pad in "[ \t]{0,3}",
        ) {
            prop_assume!(!target.starts_with('%'));
            let marker = if extra { "%" } else { "" };
            let content = format!("@include {}{}{}", marker, target, pad);
            let directives = parse_directives(&content);
            prop_assert_eq!(directives.len(), 1);
            prop_assert_eq!(&directives[0].target_path, &target);
            let expected = if extra { Scope::ExtraRootsOnly } else { Scope::AllRoots };
            prop_assert_eq!(directives[0].scope, expected);
        }

        /// Property: text without the keyword yields neither directives nor warnings
        #[test]
        fn text_without_keyword_has_no_directives(content in "[^@]*") {
            let parsed = scan(&content);
            prop_assert!(parsed.directives.is_empty());
            prop_assert!(parsed.warnings.is_empty());
        }

        /// Property: every directive line number points at a line holding its raw text
        #[test]
        fn source_lines_point_at_raw_text(
            lines in prop::collection::vec(prop_oneof![
                "[a-z ]{0,10}",
                "@include [a-z]{1,5}\\.md",
            ], 0..12)
        ) {
            let content = lines.join("\n");
            let physical: Vec<&str> = content.lines().collect();
            for directive in parse_directives(&content) {
                prop_assert_eq!(physical[directive.source_line - 1], directive.raw_line.as_str());
            }
        }
    }
}
