use std::io::{self, Write};

use pretty_assertions::assert_eq;

use pattern_showcase::error::PatternError;
use pattern_showcase::showcase;

const EXPECTED: &[&str] = &[
    "Created Warrior with vitality 100.",
    "Warrior swings a sword!",
    "Created Mage with vitality 50.",
    "Mage casts a fireball!",
    "Created Archer with vitality 70.",
    "Archer shoots an arrow!",
    "Created Knight with vitality 80.",
    "Knight charges with a lance!",
    "Espresso, Milk, Sugar, Chocolate costs $2.34",
    "Tea, Milk, Syrup costs $1.75",
    "Tea costs $1.50",
];

#[test]
fn test_run_writes_full_sequence_in_order() {
    let mut out = Vec::new();
    showcase::run(&mut out).expect("writing to a Vec cannot fail");

    let text = String::from_utf8(out).expect("output is UTF-8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, EXPECTED);
}

#[test]
fn test_factory_lines_come_in_pairs() {
    let lines = showcase::factory_lines();
    assert_eq!(lines.len(), 8);
    for pair in lines.chunks(2) {
        assert!(pair[0].starts_with("Created "));
        assert!(!pair[1].starts_with("Created "));
    }
}

#[test]
fn test_cafe_lines() {
    let lines = showcase::cafe_lines().expect("every order has a base");
    assert_eq!(lines, EXPECTED[8..].to_vec());
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_run_reports_sink_failure() {
    let err = showcase::run(&mut BrokenPipe).expect_err("sink rejects every write");
    assert!(matches!(err, PatternError::Io(_)));
    assert_eq!(pattern_showcase::error::handle_error(&err), "Output closed early");
}
