//! Declarative macros for generating CLI parsing, execute and output tests.
//!
//! Grouped commands (`word add`, `category rename`, ...) are addressed with a
//! command path and the action variant the parser should produce:
//!
//! ```ignore
//! cli_option_test! {
//!     command: ["word", "add"],
//!     variant: Word,
//!     action: WordAction::Add,
//!     test_name: test_add_english,
//!     args: ["apple", "사과"],
//!     field: english,
//!     expected: "apple",
//! }
//! ```
//!
//! Flat commands (`import`, `setup`) use a single literal instead.

/// Generate a single CLI option test.
#[macro_export]
macro_rules! cli_option_test {
    (
        command: [$($cmd:literal),+],
        variant: $variant:ident,
        action: $action:path,
        test_name: $test_name:ident,
        args: [$($arg:literal),*],
        field: $field:ident,
        expected: $expected:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let args = Args::try_parse_from([
                "wordbook",
                $($cmd,)+
                $($arg),*
            ]).unwrap();
            match args.command {
                crate::commands::Command::$variant(cmd) => match cmd.action {
                    $action(parsed) => {
                        assert_eq!(parsed.$field, $expected,
                            concat!("Field ", stringify!($field), " mismatch"));
                    }
                    #[allow(unreachable_patterns)]
                    _ => panic!(concat!("Expected ", stringify!($action), " action")),
                },
                _ => panic!(concat!("Expected ", stringify!($variant), " command")),
            }
        }
    };
    (
        command: $cmd:literal,
        variant: $variant:ident,
        test_name: $test_name:ident,
        args: [$($arg:literal),*],
        field: $field:ident,
        expected: $expected:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let args = Args::try_parse_from([
                "wordbook",
                $cmd,
                $($arg),*
            ]).unwrap();
            match args.command {
                crate::commands::Command::$variant(cmd) => {
                    assert_eq!(cmd.$field, $expected,
                        concat!("Field ", stringify!($field), " mismatch"));
                }
                _ => panic!(concat!("Expected ", stringify!($variant), " command")),
            }
        }
    };
}

/// Generate a test that verifies a command requires a specific argument.
///
/// # Example
///
/// ```ignore
/// cli_required_arg_test! {
///     command: ["category", "list"],
///     test_name: test_list_requires_user,
///     required_arg: "--user",
/// }
/// ```
#[macro_export]
macro_rules! cli_required_arg_test {
    (
        command: [$($cmd:literal),+],
        test_name: $test_name:ident,
        required_arg: $arg:literal $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let result = Args::try_parse_from(["wordbook", $($cmd),+]);
            assert!(result.is_err(), concat!("Command should require ", $arg));
            assert!(
                result.unwrap_err().to_string().contains($arg),
                concat!("Error should mention ", $arg)
            );
        }
    };
}

/// Generate a test that verifies parsing fails with specific invalid args.
#[macro_export]
macro_rules! cli_error_test {
    (
        command: [$($cmd:literal),+],
        test_name: $test_name:ident,
        args: [$($arg:literal),+] $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let result = Args::try_parse_from([
                "wordbook",
                $($cmd,)+
                $($arg),+
            ]);
            assert!(result.is_err());
        }
    };
}

// =============================================================================
// Execute Test Macros
// =============================================================================

/// Generate a test that executes a command against a fixture database.
///
/// # Example
///
/// ```ignore
/// execute_test! {
///     test_name: test_list_all,
///     fixture: populated_db,
///     cmd: WordCmd { action: WordAction::List },
///     assertions: |result| {
///         assert!(matches!(result, WordResult::Listed { .. }));
///     },
/// }
/// ```
#[macro_export]
macro_rules! execute_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        cmd: $cmd:expr,
        assertions: |$result:ident| $assertions:block $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: crate::db::Database) {
            use crate::commands::{Execute, Session};
            let session = Session::new(&$fixture);
            let $result = $cmd.execute(&session).expect("Execute should succeed");
            $assertions
        }
    };
}

/// Generate a test that verifies command execution fails against a
/// database whose schema was never created.
#[macro_export]
macro_rules! execute_empty_db_test {
    (
        cmd_type: $cmd_type:ty,
        cmd: $cmd:expr $(,)?
    ) => {
        #[rstest]
        fn test_empty_db() {
            use crate::commands::{Execute, Session};
            let db = crate::db::Database::open_in_memory().expect("Failed to open db");
            let cmd: $cmd_type = $cmd;
            let result = cmd.execute(&Session::new(&db));
            assert!(result.is_err());
        }
    };
}

// =============================================================================
// Output Test Macros
// =============================================================================

/// Generate a test that verifies table output matches expected string.
#[macro_export]
macro_rules! output_table_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        expected: $expected:expr,
        format: $format:ident $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::{Outputable, OutputFormat};
            assert_eq!($fixture.format(OutputFormat::$format), $expected);
        }
    };
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        expected: $expected:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::Outputable;
            assert_eq!($fixture.to_table(), $expected);
        }
    };
}

/// Generate a test that verifies table output contains expected strings.
#[macro_export]
macro_rules! output_table_contains_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        contains: [$($needle:literal),* $(,)?] $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::Outputable;
            let output = $fixture.to_table();
            $(
                assert!(output.contains($needle), concat!("Table output should contain: ", $needle));
            )*
        }
    };
}

/// Generate a test that verifies JSON output is valid and contains expected fields.
#[macro_export]
macro_rules! output_json_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        assertions: { $($field:literal : $expected:expr),* $(,)? } $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::{Outputable, OutputFormat};
            let output = $fixture.format(OutputFormat::Json);
            let parsed: serde_json::Value = serde_json::from_str(&output)
                .expect("Should produce valid JSON");
            $(
                assert_eq!(parsed[$field], $expected, concat!("JSON field mismatch: ", $field));
            )*
        }
    };
}

/// Generate a test that verifies Toon output contains expected strings.
#[macro_export]
macro_rules! output_toon_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        contains: [$($needle:literal),* $(,)?] $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::{Outputable, OutputFormat};
            let output = $fixture.format(OutputFormat::Toon);
            $(
                assert!(output.contains($needle), concat!("Toon output should contain: ", $needle));
            )*
        }
    };
}
