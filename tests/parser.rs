use matrica::{
    error::{Error, ParseError},
    evaluate,
    interpreter::lexer::{Token, tokenize},
};
use rstest::rstest;

fn parse_error(src: &str) -> ParseError {
    match evaluate(src) {
        Err(Error::Parse(e)) => e,
        other => panic!("expected a parse error for {src:?}, got {other:?}"),
    }
}

#[test]
fn words_and_digits_are_maximal_runs() {
    let tokens: Vec<Token> = tokenize("inverse([10.5 -3])").unwrap()
                                                           .into_iter()
                                                           .map(|(t, _)| t)
                                                           .collect();
    assert_eq!(tokens,
               vec![Token::Word("inverse".into()),
                    Token::LParen,
                    Token::LBracket,
                    Token::Digits("10.5".into()),
                    Token::Whitespace,
                    Token::Minus,
                    Token::Digits("3".into()),
                    Token::RBracket,
                    Token::RParen]);
}

#[test]
fn tokens_carry_their_offsets() {
    let offsets: Vec<usize> = tokenize("[1] + [2]").unwrap().into_iter().map(|(_, c)| c).collect();
    assert_eq!(offsets, vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn uppercase_letters_are_invalid() {
    assert_eq!(tokenize("Transpose([1])"),
               Err(ParseError::InvalidCharacter { character: "T".into(),
                                                  column:    0, }));
}

#[test]
fn row_size_error_reports_both_lengths() {
    assert_eq!(parse_error("[1 2 3;4 5]"),
               ParseError::InconsistentRowSize { expected: 3,
                                                 found:    2,
                                                 column:   10, });
}

#[test]
fn invalid_number_reports_its_text() {
    assert_eq!(parse_error("[1 2.3.4]"),
               ParseError::InvalidNumber { text:   "2.3.4".into(),
                                           column: 3, });
}

#[test]
fn unknown_word_reports_its_name() {
    assert_eq!(parse_error("det([1])"),
               ParseError::UnknownOperation { name:   "det".into(),
                                              column: 0, });
}

#[rstest]
#[case("[1 * 2]", 3)]
#[case("[1 (2)]", 3)]
#[case("[1 ) 2]", 3)]
#[case("[1 [2]]", 3)]
#[case("]", 0)]
#[case("[1] ; [2]", 4)]
#[case("[1 2", 4)]
fn inconsistent_brackets(#[case] src: &str, #[case] column: usize) {
    assert_eq!(parse_error(src), ParseError::InconsistentBrackets { column });
}

#[rstest]
#[case("[1;]")]
#[case("[;1]")]
#[case("[ ]")]
fn empty_rows(#[case] src: &str) {
    assert!(matches!(parse_error(src), ParseError::EmptyRow { .. }));
}

#[test]
fn minus_inside_a_literal_is_a_sign() {
    let m = evaluate("[-1 -2;-3 4]").unwrap();
    assert_eq!(m.row(0), Some(&[-1.0, -2.0][..]));
    assert_eq!(m.row(1), Some(&[-3.0, 4.0][..]));
}

#[test]
fn minus_outside_a_literal_is_subtraction() {
    let m = evaluate("[3]-[1]").unwrap();
    assert_eq!(m.get(0, 0), Some(2.0));
}
