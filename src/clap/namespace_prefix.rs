//! Adapter for parsing [`NamespacePrefix`] with a [`clap::builder::Arg::value_parser`].

use clap::builder::StringValueParser;
use clap::builder::TypedValueParser;
use clap::builder::ValueParserFactory;
use miette::LabeledSpan;
use miette::MietteDiagnostic;
use miette::Report;

use crate::NamespacePrefix;
use crate::NamespacePrefixError;

use super::value_validation_error;

/// Adapter for parsing [`NamespacePrefix`] with a [`clap::builder::Arg::value_parser`].
#[derive(Default, Clone)]
pub struct NamespacePrefixValueParser {
    inner: StringValueParser,
}

impl TypedValueParser for NamespacePrefixValueParser {
    type Value = NamespacePrefix;

    fn parse_ref(
        &self,
        cmd: &clap::Command,
        arg: Option<&clap::Arg>,
        value: &std::ffi::OsStr,
    ) -> Result<Self::Value, clap::Error> {
        self.inner.parse_ref(cmd, arg, value).and_then(|str_value| {
            NamespacePrefix::new(str_value.clone()).map_err(|err| {
                let diagnostic = Report::new(MietteDiagnostic {
                    message: err.to_string(),
                    code: None,
                    severity: None,
                    help: Some(
                        "A namespace prefix is a dotted path like `mypkg` or `mypkg.util`"
                            .to_owned(),
                    ),
                    url: None,
                    labels: match err {
                        NamespacePrefixError::Empty => None,
                        NamespacePrefixError::Whitespace { span } => {
                            Some(vec![LabeledSpan::at(span, "Whitespace")])
                        }
                        NamespacePrefixError::EmptySegment { offset } => {
                            Some(vec![LabeledSpan::at(offset..offset, "Empty segment")])
                        }
                    },
                });
                value_validation_error(cmd, arg, &str_value, diagnostic)
            })
        })
    }
}

impl ValueParserFactory for NamespacePrefix {
    type Parser = NamespacePrefixValueParser;

    fn value_parser() -> Self::Parser {
        Self::Parser::default()
    }
}
