use std::io::{self, Cursor, Read};

use md_convert::{run, ColumnOverflow, ConvertError, Options, RenderOptions};
use pretty_assertions::assert_eq;

fn convert_stream(input: &str) -> (Result<(), ConvertError>, String) {
    let mut output = Vec::new();
    let result = run(Cursor::new(input), &mut output, &Options::default());
    (result, String::from_utf8(output).unwrap())
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }
}

#[test]
fn converts_scores_table() {
    let (result, output) = convert_stream("name,score\nAlice,10\nBob,5\n");
    assert!(result.is_ok());
    assert_eq!(
        output,
        "| name  | score |\n\
         | ----- | ----- |\n\
         | Alice | 10    |\n\
         | Bob   | 5     |\n"
    );
}

#[test]
fn quoted_comma_stays_in_one_column() {
    let (result, output) = convert_stream("a,\"b,c\"\n1,2\n");
    assert!(result.is_ok());
    assert_eq!(output, "| a | b,c |\n| - | --- |\n| 1 | 2   |\n");
}

#[test]
fn blank_and_whitespace_lines_are_skipped() {
    let (result, output) = convert_stream("a,b\n\n   \n c ,d\n");
    assert!(result.is_ok());
    assert_eq!(output, "| a | b |\n| - | - |\n| c | d |\n");
}

#[test]
fn crlf_input_renders_like_lf() {
    let (_, crlf) = convert_stream("h1,h2\r\nx,y\r\n");
    let (_, lf) = convert_stream("h1,h2\nx,y\n");
    assert_eq!(crlf, lf);
}

#[test]
fn divergent_row_lengths_render_under_the_header() {
    let (result, output) = convert_stream("a,b,c\n1\n1,2,3,4\n");
    assert!(result.is_ok());
    assert_eq!(
        output,
        "| a | b | c |\n\
         | - | - | - |\n\
         | 1 |   |   |\n\
         | 1 | 2 | 3 |\n"
    );
}

#[test]
fn divergent_row_lengths_can_be_rejected() {
    let options = Options {
        render: RenderOptions {
            overflow: ColumnOverflow::Reject,
        },
        ..Options::default()
    };
    let mut output = Vec::new();
    let result = run(Cursor::new("a,b\n1,2,3\n"), &mut output, &options);
    assert!(matches!(result, Err(ConvertError::Render { row: 1, found: 3, expected: 2 })));
    assert!(output.is_empty());
}

#[test]
fn whitespace_only_input_writes_nothing() {
    let (result, output) = convert_stream("\n  \n\t\n");
    let err = result.unwrap_err();
    assert!(matches!(err, ConvertError::EmptyInput));
    assert_eq!(err.exit_code(), 1);
    assert_eq!(err.to_string(), "input csv is empty");
    assert!(output.is_empty());
}

#[test]
fn malformed_csv_writes_nothing() {
    let (result, output) = convert_stream("a,b\n\n1,\"unterminated\n");
    match result {
        Err(ConvertError::Parse { line, column, .. }) => assert_eq!((line, column), (3, 3)),
        other => panic!("expected a parse error, got {other:?}"),
    }
    assert!(output.is_empty());
}

#[test]
fn read_failure_is_a_stream_error() {
    let mut output = Vec::new();
    let err = run(FailingReader, &mut output, &Options::default()).unwrap_err();
    assert!(matches!(err, ConvertError::Stream { .. }));
    assert_eq!(err.to_string(), "failed to read stdin: pipe closed");
    assert!(output.is_empty());
}

#[test]
fn invalid_utf8_is_a_stream_error() {
    let mut output = Vec::new();
    let err = run(Cursor::new(vec![b'a', 0xff, b'\n']), &mut output, &Options::default())
        .unwrap_err();
    assert!(matches!(err, ConvertError::Stream { .. }));
}

#[test]
fn same_input_gives_identical_bytes() {
    let input = "id,desc\n1,\"multi\nline\"\n2,plain\n";
    let (_, first) = convert_stream(input);
    let (_, second) = convert_stream(input);
    assert_eq!(first, second);
    assert!(!first.is_empty());
}
