use miette::Report;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

/// Construct a [`clap::Error`] for an argument value rejected with a [`miette`] diagnostic.
///
/// The diagnostic's labels are byte offsets into `bad_value`, which is attached as its source
/// code so the rendered error points at the offending characters.
///
/// `clap` builds its own value-validation messages with a private API, so this imitates them.
/// See: <https://github.com/clap-rs/clap/issues/5065>
pub fn value_validation_error(
    cmd: &clap::Command,
    arg: Option<&clap::Arg>,
    bad_value: &str,
    diagnostic: Report,
) -> clap::Error {
    let diagnostic = diagnostic.with_source_code(bad_value.to_owned());
    clap::Error::raw(
        clap::error::ErrorKind::ValueValidation,
        format!(
            "invalid value '{bad_value}' for '{arg}'\n\n{diagnostic:?}\n",
            bad_value = bad_value.if_supports_color(Stderr, |text| text.yellow()),
            arg = arg
                .map(ToString::to_string)
                .unwrap_or_else(|| "...".to_owned())
                .if_supports_color(Stderr, |text| text.bold()),
        ),
    )
    .with_cmd(cmd)
}
