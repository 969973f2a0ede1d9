//! Every lexical defect the lexer can report.
//!
//! The `Display` output of an [`Issue`] is its message and part of the lexer's contract,
//! reporters and tests match on the exact wording.

use rshint_errors::{Diagnostic, Position, Severity};
use smol_str::SmolStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum Issue {
    #[error("Unsafe character.")]
    UnsafeCharacter,
    #[error("Unexpected '{0}'.")]
    UnexpectedCharacter(char),
    #[error("Line too long.")]
    LineTooLong,
    #[error("Trailing whitespace.")]
    TrailingWhitespace,
    #[error("Mixed spaces and tabs.")]
    MixedSpacesAndTabs,

    #[error("Bad number '{0}'.")]
    BadNumber(SmolStr),
    #[error("Don't use extra leading zeros '{0}'.")]
    LeadingZeros(SmolStr),
    #[error("A leading decimal point can be confused with a dot: '{0}'.")]
    LeadingDecimalPoint(SmolStr),
    #[error("A trailing decimal point can be confused with a dot '{0}'.")]
    TrailingDecimalPoint(SmolStr),
    #[error("Missing space after '{0}'.")]
    MissingSpaceAfterNumber(SmolStr),
    #[error("Avoid 0x-. '{0}'.")]
    AvoidHexNumber(SmolStr),

    #[error("Control character in string: {0}.")]
    ControlCharacterInString(SmolStr),
    #[error("Bad escapement.")]
    BadEscapement,
    #[error("Unnecessary escapement.")]
    UnnecessaryEscapement,
    #[error("Bad escapement of EOL. Use option multistr if needed.")]
    EolEscapement,
    #[error("Unclosed string.")]
    UnclosedString,
    #[error("Script URL.")]
    ScriptUrl,
    #[error("Strings must use doublequote.")]
    SingleQuotedString,
    #[error("Avoid \\v.")]
    AvoidVerticalTabEscape,
    #[error("Avoid \\x-.")]
    AvoidHexEscape,
    #[error("Avoid \\'.")]
    AvoidSingleQuoteEscape,
    #[error("Avoid EOL escapement.")]
    AvoidEolEscapement,
    #[error("Expected a string and instead saw {0}.")]
    BarewordKey(SmolStr),

    #[error("Nested comment.")]
    NestedComment,
    #[error("Unbegun comment.")]
    UnbegunComment,
    #[error("Unclosed comment.")]
    UnclosedComment,

    #[error("Unexpected control character in regular expression.")]
    RegexControlCharacter,
    #[error("Unexpected escaped character '{0}' in regular expression.")]
    RegexUnexpectedEscape(char),
    #[error("Expected '{expected}' and instead saw '{found}'.")]
    Expected { expected: char, found: SmolStr },
    #[error("Expected a number and instead saw '{0}'.")]
    ExpectedNumber(SmolStr),
    #[error("Unescaped '{0}'.")]
    Unescaped(char),
    #[error("Empty class.")]
    EmptyClass,
    #[error("'{low}' should not be greater than '{high}'.")]
    QuantifierBounds { low: u64, high: u64 },
    #[error("Spaces are hard to count. Use {{{0}}}.")]
    RegexSpaces(usize),
    #[error("Unclosed regular expression.")]
    UnclosedRegex,
    #[error("A regular expression literal can be confused with '/='.")]
    RegexConfusedWithAssign,
    #[error("{0} unterminated regular expression group(s).")]
    UnterminatedGroups(usize),
    #[error("Invalid regular expression flag '{0}'.")]
    InvalidRegexFlag(char),
    #[error("Confusing regular expression.")]
    ConfusingRegex,

    #[error("'hasOwnProperty' is a really bad name.")]
    HasOwnProperty,
    #[error("The '__proto__' property is deprecated.")]
    ProtoProperty,
    #[error("'__iterator__' is only available in JavaScript 1.7.")]
    IteratorProperty,

    #[error("Unclosed template literal.")]
    UnclosedTemplate,
}

impl Issue {
    /// Malformed constructs are errors, everything else is a warning.
    pub fn severity(&self) -> Severity {
        use Issue::*;

        match self {
            UnexpectedCharacter(_)
            | BadEscapement
            | UnclosedString
            | UnclosedComment
            | Expected { .. }
            | ExpectedNumber(_)
            | Unescaped(_)
            | EmptyClass
            | QuantifierBounds { .. }
            | UnclosedRegex
            | InvalidRegexFlag(_)
            | UnclosedTemplate => Severity::Error,
            _ => Severity::Warning,
        }
    }

    pub fn code(&self) -> &'static str {
        use Issue::*;

        match self {
            UnsafeCharacter => "unsafe_character",
            UnexpectedCharacter(_) => "unexpected_character",
            LineTooLong => "line_too_long",
            TrailingWhitespace => "trailing_whitespace",
            MixedSpacesAndTabs => "mixed_spaces_and_tabs",
            BadNumber(_) => "bad_number",
            LeadingZeros(_) => "leading_zeros",
            LeadingDecimalPoint(_) => "leading_decimal_point",
            TrailingDecimalPoint(_) => "trailing_decimal_point",
            MissingSpaceAfterNumber(_) => "missing_space_after_number",
            AvoidHexNumber(_) => "json_hex_number",
            ControlCharacterInString(_) => "control_character_in_string",
            BadEscapement => "bad_escapement",
            UnnecessaryEscapement => "unnecessary_escapement",
            EolEscapement => "eol_escapement",
            UnclosedString => "unclosed_string",
            ScriptUrl => "script_url",
            SingleQuotedString => "json_single_quote",
            AvoidVerticalTabEscape => "json_vertical_tab_escape",
            AvoidHexEscape => "json_hex_escape",
            AvoidSingleQuoteEscape => "json_single_quote_escape",
            AvoidEolEscapement => "json_eol_escapement",
            BarewordKey(_) => "json_bareword_key",
            NestedComment => "nested_comment",
            UnbegunComment => "unbegun_comment",
            UnclosedComment => "unclosed_comment",
            RegexControlCharacter => "regex_control_character",
            RegexUnexpectedEscape(_) => "regex_unexpected_escape",
            Expected { .. } => "regex_expected",
            ExpectedNumber(_) => "regex_expected_number",
            Unescaped(_) => "regex_unescaped",
            EmptyClass => "regex_empty_class",
            QuantifierBounds { .. } => "regex_quantifier_bounds",
            RegexSpaces(_) => "regex_spaces",
            UnclosedRegex => "unclosed_regex",
            RegexConfusedWithAssign => "regex_confused_with_assign",
            UnterminatedGroups(_) => "regex_unterminated_groups",
            InvalidRegexFlag(_) => "regex_invalid_flag",
            ConfusingRegex => "confusing_regex",
            HasOwnProperty => "has_own_property",
            ProtoProperty => "proto_property",
            IteratorProperty => "iterator_property",
            UnclosedTemplate => "unclosed_template",
        }
    }

    pub fn into_diagnostic(self, position: Position) -> Diagnostic {
        let message = self.to_string();
        match self.severity() {
            Severity::Error => Diagnostic::error(position, self.code(), message),
            Severity::Warning => Diagnostic::warning(position, self.code(), message),
        }
    }
}
