use phi_attrs::ErrorKind;
use phi_error::{Error, ErrorKind};

#[derive(Debug, ErrorKind)]
#[error(
    message = format!("unexpected symbol `{}`", symbol),
    labels = ["this symbol"],
    help = "remove it",
    note = "only operators and operands may appear in an equation",
)]
struct UnexpectedSymbol {
    symbol: char,
}

#[derive(Debug, ErrorKind)]
#[error(message = "cannot differentiate")]
struct Spanless;

/// Renders the report to a string without the terminal colors.
fn render(error: &Error, input: &str) -> String {
    let mut buf = Vec::new();
    error
        .build_report("input")
        .write(("input", ariadne::Source::from(input)), &mut buf)
        .unwrap();
    String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
}

#[test]
fn report_contains_message_label_help_and_note() {
    let error = Error::new(vec![3..4], UnexpectedSymbol { symbol: '$' });
    let report = render(&error, "xi+$");

    assert!(report.contains("unexpected symbol `$`"));
    assert!(report.contains("this symbol"));
    assert!(report.contains("remove it"));
    assert!(report.contains("only operators and operands may appear in an equation"));
}

#[test]
fn spanless_report() {
    let error = Error::spanless(Spanless);
    let report = render(&error, "xi^mi");

    assert!(report.contains("cannot differentiate"));
}

#[test]
fn downcast_kind() {
    let error = Error::new(vec![0..1], UnexpectedSymbol { symbol: '#' });

    assert!(error.is::<UnexpectedSymbol>());
    assert!(!error.is::<Spanless>());
    assert_eq!(error.downcast_ref::<UnexpectedSymbol>().map(|k| k.symbol), Some('#'));
}
