//! A comment scanner for JavaScript (and other C-family) source.
//!
//! This is a lexical scanner, not a parser. It only understands enough of the language to avoid
//! mistaking comment delimiters inside string, template, and regular expression literals for real
//! comments.

use miette::LabeledSpan;
use miette::MietteDiagnostic;
use miette::Report;
use winnow::combinator::alt;
use winnow::combinator::cut_err;
use winnow::combinator::not;
use winnow::combinator::opt;
use winnow::combinator::peek;
use winnow::combinator::preceded;
use winnow::combinator::repeat;
use winnow::combinator::terminated;
use winnow::error::ContextError;
use winnow::error::ErrMode;
use winnow::error::StrContext;
use winnow::error::StrContextValue;
use winnow::stream::Location;
use winnow::stream::Stream;
use winnow::token::any;
use winnow::token::none_of;
use winnow::token::one_of;
use winnow::token::take_till;
use winnow::token::take_until;
use winnow::token::take_while;
use winnow::Located;
use winnow::PResult;
use winnow::Parser;

use super::CommentExtractor;
use super::CommentKind;
use super::CommentRecord;

/// Characters which end a `//` comment.
const LINE_TERMINATORS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

/// Keywords after which a `/` starts a regular expression rather than a division.
const REGEX_PRECEDING_KEYWORDS: [&str; 14] = [
    "await",
    "case",
    "delete",
    "do",
    "else",
    "in",
    "instanceof",
    "new",
    "of",
    "return",
    "throw",
    "typeof",
    "void",
    "yield",
];

/// Finds `//` and `/* */` comments in JavaScript source.
///
/// String literals, template literals (including comments nested in `${ }` substitutions), and
/// regular expression literals are skipped. Whether a `/` starts a regular expression is guessed
/// from the previous token; a `/` which can't be scanned as a regular expression is treated as a
/// division.
///
/// Unterminated block comments, string literals, and template literals are errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaScriptComments;

impl CommentExtractor for JavaScriptComments {
    fn extract_comments(&self, source: &str) -> miette::Result<Vec<CommentRecord>> {
        let mut input = Located::new(source);
        let mut scanner = Scanner::new();

        opt(hashbang)
            .parse_next(&mut input)
            .map_err(|err| scan_error(source, &err, 0))?;

        while input.eof_offset() > 0 {
            let start = input.location();
            let lexeme = scanner
                .lexeme(&mut input)
                .map_err(|err| scan_error(source, &err, start))?;
            scanner.advance(lexeme);
        }

        if !scanner.braces.is_empty() {
            tracing::debug!(
                unclosed = scanner.braces.len(),
                "Reached end of input with unclosed braces"
            );
        }

        Ok(scanner.comments)
    }
}

/// An opening brace we're inside of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Brace {
    /// A plain `{`.
    Block,
    /// A `${` in a template literal; the matching `}` resumes the template.
    Substitution,
}

/// How a run of template literal text ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TemplateEnd {
    /// With the closing `` ` ``.
    Closed,
    /// With a `${`, opening a substitution.
    Substitution,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Lexeme<'s> {
    Whitespace,
    Comment(CommentRecord),
    /// A string, regular expression, or template literal without substitutions.
    Operand,
    /// An identifier, keyword, or number.
    Word(&'s str),
    /// `` `...${ ``
    TemplateHead,
    /// `}...${`
    TemplateMiddle,
    /// `` }...` ``
    TemplateTail,
    /// `++` or `--`. When postfix, a following `/` is a division.
    Update,
    Punct(char),
}

#[derive(Debug)]
struct Scanner {
    comments: Vec<CommentRecord>,
    /// Open braces, innermost last.
    braces: Vec<Brace>,
    /// Whether a `/` here would start a regular expression.
    regex_allowed: bool,
}

impl Scanner {
    fn new() -> Self {
        Self {
            comments: Vec::new(),
            braces: Vec::new(),
            regex_allowed: true,
        }
    }

    fn lexeme<'s>(&self, input: &mut Located<&'s str>) -> PResult<Lexeme<'s>> {
        match peek(any).parse_next(input)? {
            '/' => {
                let comment = alt((line_comment, block_comment)).map(Lexeme::Comment);
                if self.regex_allowed {
                    alt((
                        comment,
                        regex_literal.value(Lexeme::Operand),
                        '/'.value(Lexeme::Punct('/')),
                    ))
                    .parse_next(input)
                } else {
                    alt((comment, '/'.value(Lexeme::Punct('/')))).parse_next(input)
                }
            }
            '\'' | '"' => string_literal.value(Lexeme::Operand).parse_next(input),
            '`' => preceded('`', template_chunk)
                .map(|end| match end {
                    TemplateEnd::Closed => Lexeme::Operand,
                    TemplateEnd::Substitution => Lexeme::TemplateHead,
                })
                .parse_next(input),
            '}' if self.braces.last() == Some(&Brace::Substitution) => {
                preceded('}', template_chunk)
                    .map(|end| match end {
                        TemplateEnd::Closed => Lexeme::TemplateTail,
                        TemplateEnd::Substitution => Lexeme::TemplateMiddle,
                    })
                    .parse_next(input)
            }
            c if c.is_whitespace() => take_while(1.., char::is_whitespace)
                .value(Lexeme::Whitespace)
                .parse_next(input),
            c if is_identifier_char(c) => take_while(1.., is_identifier_char)
                .map(Lexeme::Word)
                .parse_next(input),
            '+' | '-' => alt((
                alt(("++", "--")).value(Lexeme::Update),
                any.map(Lexeme::Punct),
            ))
            .parse_next(input),
            _ => any.map(Lexeme::Punct).parse_next(input),
        }
    }

    fn advance(&mut self, lexeme: Lexeme<'_>) {
        match lexeme {
            // Neither whitespace nor comments change what a following `/` means.
            Lexeme::Whitespace => {}
            Lexeme::Comment(comment) => {
                tracing::trace!(kind = %comment.kind, span = ?comment.span, "Found comment");
                self.comments.push(comment);
            }
            Lexeme::Operand => {
                self.regex_allowed = false;
            }
            Lexeme::Word(word) => {
                self.regex_allowed = REGEX_PRECEDING_KEYWORDS.contains(&word);
            }
            Lexeme::TemplateHead => {
                self.braces.push(Brace::Substitution);
                self.regex_allowed = true;
            }
            Lexeme::TemplateMiddle => {
                self.regex_allowed = true;
            }
            Lexeme::TemplateTail => {
                self.braces.pop();
                self.regex_allowed = false;
            }
            Lexeme::Update => {
                self.regex_allowed = false;
            }
            Lexeme::Punct(c) => {
                match c {
                    '{' => self.braces.push(Brace::Block),
                    '}' => {
                        if self.braces.last() == Some(&Brace::Block) {
                            self.braces.pop();
                        }
                    }
                    _ => {}
                }
                self.regex_allowed = !matches!(c, ')' | ']');
            }
        }
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// A `#!` line at the very start of a script.
fn hashbang<'s>(input: &mut Located<&'s str>) -> PResult<&'s str> {
    preceded("#!", take_till(0.., LINE_TERMINATORS)).parse_next(input)
}

fn line_comment(input: &mut Located<&str>) -> PResult<CommentRecord> {
    let (body, span) = preceded("//", take_till(0.., LINE_TERMINATORS))
        .with_span()
        .parse_next(input)?;
    Ok(CommentRecord::new(CommentKind::Line, body, span))
}

fn block_comment(input: &mut Located<&str>) -> PResult<CommentRecord> {
    let (body, span) = preceded(
        "/*",
        cut_err(terminated(take_until(0.., "*/"), "*/"))
            .context(StrContext::Label("block comment"))
            .context(StrContext::Expected(StrContextValue::StringLiteral("*/"))),
    )
    .with_span()
    .parse_next(input)?;
    Ok(CommentRecord::new(CommentKind::Block, body, span))
}

/// A backslash escape in a string, template, or regular expression literal.
fn escape(input: &mut Located<&str>) -> PResult<()> {
    ('\\', alt(("\r\n".void(), any.void())))
        .void()
        .parse_next(input)
}

fn string_literal(input: &mut Located<&str>) -> PResult<()> {
    let quote = one_of(['\'', '"']).parse_next(input)?;
    cut_err((
        repeat::<_, _, (), _, _>(
            0..,
            alt((escape, none_of([quote, '\\', '\n', '\r']).void())),
        ),
        quote,
    ))
    .void()
    .context(StrContext::Label("string literal"))
    .context(StrContext::Expected(StrContextValue::CharLiteral(quote)))
    .parse_next(input)
}

/// Template literal text, after the opening `` ` `` or the `}` closing a substitution.
fn template_chunk(input: &mut Located<&str>) -> PResult<TemplateEnd> {
    cut_err(preceded(
        repeat::<_, _, (), _, _>(
            0..,
            alt((
                escape,
                ('$', not('{')).void(),
                none_of(['`', '\\', '$']).void(),
            )),
        ),
        alt((
            '`'.value(TemplateEnd::Closed),
            "${".value(TemplateEnd::Substitution),
        )),
    ))
    .context(StrContext::Label("template literal"))
    .context(StrContext::Expected(StrContextValue::CharLiteral('`')))
    .parse_next(input)
}

fn regex_literal(input: &mut Located<&str>) -> PResult<()> {
    (
        '/',
        repeat::<_, _, (), _, _>(
            1..,
            alt((
                escape,
                regex_class,
                none_of(['/', '\\', '[', '\n', '\r']).void(),
            )),
        ),
        '/',
        take_while(0.., is_identifier_char),
    )
        .void()
        .parse_next(input)
}

/// A `[...]` character class, in which `/` doesn't end the regular expression.
fn regex_class(input: &mut Located<&str>) -> PResult<()> {
    (
        '[',
        repeat::<_, _, (), _, _>(
            0..,
            alt((escape, none_of([']', '\\', '\n', '\r']).void())),
        ),
        ']',
    )
        .void()
        .parse_next(input)
}

/// Convert a scanning error for the token starting at byte `start` into a diagnostic.
fn scan_error(source: &str, err: &ErrMode<ContextError>, start: usize) -> Report {
    let context = match err {
        ErrMode::Backtrack(err) | ErrMode::Cut(err) => Some(err),
        ErrMode::Incomplete(_) => None,
    };

    let label = context
        .and_then(|err| {
            err.context().find_map(|context| match context {
                StrContext::Label(label) => Some(*label),
                _ => None,
            })
        })
        .unwrap_or("token");

    let expected = context.and_then(|err| {
        err.context().find_map(|context| match context {
            StrContext::Expected(expected) => Some(expected.to_string()),
            _ => None,
        })
    });

    let opener_len = source[start..].chars().next().map_or(0, char::len_utf8);

    Report::new(MietteDiagnostic {
        message: format!("Unterminated {label}"),
        code: None,
        severity: None,
        help: expected.map(|expected| format!("Expected a closing {expected}")),
        url: None,
        labels: Some(vec![LabeledSpan::at(
            start..start + opener_len,
            format!("This {label} is never closed"),
        )]),
    })
}
