// Helper macro to distinguish between patterns and expressions
#[macro_export]
macro_rules! assert_case {
    ($result:expr, { Ok($($pattern:tt)*) }) => {
        match $result {
            Ok($($pattern)*) => {},
            other => panic!("Expected Ok({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    ($result:expr, { Err($($pattern:tt)*) }) => {
        match $result {
            Err($($pattern)*) => {},
            other => panic!("Expected Err({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    // Default case - treat as expression for equality comparison
    ($result:expr, { $expected:expr }) => {
        let actual = $result;
        pretty_assertions::assert_eq!($expected, actual, "\n\n< expected / got >");
    };
}

// Helper macro to generate test functions based on field names
#[macro_export]
macro_rules! handle_case {
    ([$($attrs:meta)*] count, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_count() {
            let tree = input();
            assert_case!(exprfold::algo::count(&tree), $expected);
            pretty_assertions::assert_eq!(
                exprfold::drive_cata(&tree, exprfold::algo::count_node),
                exprfold::algo::count(&tree)
            );
        }
    };

    ([$($attrs:meta)*] depth, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_depth() {
            assert_case!(exprfold::algo::depth(&input()), $expected);
        }
    };

    ([$($attrs:meta)*] parens, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_parens() {
            assert_case!(exprfold::algo::count_parens(&input()), $expected);
        }
    };

    ([$($attrs:meta)*] flat, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_flat() {
            let tree = input();
            let flat = exprfold::algo::flatten(&tree);
            pretty_assertions::assert_eq!(exprfold::algo::flatten_via_cata(&tree), flat);
            pretty_assertions::assert_eq!(exprfold::algo::flatten_top_down(&tree), flat);
            assert!(!flat.contains_paren(), "Paren left in {:?}", flat);
            assert_case!(flat, $expected);
        }
    };

    ([$($attrs:meta)*] flat_count, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_flat_count() {
            let flat = exprfold::algo::flatten(&input());
            assert_case!(exprfold::algo::count(&flat), $expected);
        }
    };

    ([$($attrs:meta)*] checked, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_checked() {
            let result = exprfold::algo::check_depth(&input(), &limits());
            assert_case!(result, $expected);
        }
    };

    // Generic case for unknown field names
    ([$($attrs:meta)*] $field_name:ident, $expected:tt) => {
        compile_error!(concat!("Unknown test case field: ", stringify!($field_name)));
    };
}

// Helper macro to recursively parse assertion fields (now correctly capturing braces)
#[macro_export]
macro_rules! parse_assertions {
    // Base case: no more fields to parse
    (@parse [$($test_functions:tt)*]) => {
        $($test_functions)*
    };

    // Parse assertion field with potential attributes (handles both cases)
    (@parse [$($test_functions:tt)*] $(#[$attr:meta])* $field_name:ident: $field_value:tt, $($rest:tt)*) => {
        parse_assertions! {@parse [
            $($test_functions)*
            handle_case! {[$($attr)*] $field_name, $field_value}
        ] $($rest)*}
    };
}

// Main macro - name first, input second, optional limits, then any order for assertions
#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        input: $input:expr,
        limits: $limits:expr,
        $($assertion_fields:tt)*
    ) => {
        mod $name {
            #![allow(unused_imports, dead_code)]

            use super::*;

            // Trees are not `Sync`, so every test builds its own copy.
            fn input() -> exprfold::Tree {
                $input
            }

            fn limits() -> exprfold::Limits {
                $limits
            }

            // Generate all test functions
            parse_assertions! {@parse [] $($assertion_fields)*}
        }
    };

    (
        name: $name:ident,
        input: $input:expr,
        $($assertion_fields:tt)*
    ) => {
        test_case! {
            name: $name,
            input: $input,
            limits: exprfold::Limits::default(),
            $($assertion_fields)*
        }
    };
}
