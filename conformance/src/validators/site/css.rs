//! CSS validator for the dashboard stylesheet.
//!
//! Validates `css/style.css`:
//! - File is non-empty
//! - Tokenizes without bad strings, bad URLs, or stray closing braces (cssparser)
//! - Contains responsive breakpoints (`@media`)
//! - Styles the source modal's open state (`.modal.active`)
//! - No excessive `!important` usage (≤5 occurrences)

use std::path::Path;

use anyhow::{Context, Result};
use cssparser::{ParseError, Parser, ParserInput, Token};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "site/css";

/// Validates the dashboard stylesheet.
///
/// # Errors
///
/// Returns an error if the CSS file cannot be read.
pub fn validate(artifacts: &Path) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    let css_path = artifacts.join("css").join("style.css");
    if !css_path.exists() {
        report.push(TestResult::fail(VALIDATOR, "css/style.css not found"));
        return Ok(report);
    }

    let content = std::fs::read_to_string(&css_path)
        .with_context(|| format!("Failed to read {}", css_path.display()))?;

    if content.trim().is_empty() {
        report.push(TestResult::fail(VALIDATOR, "style.css is empty"));
        return Ok(report);
    }

    let scan = scan_css(&content);
    if scan.is_clean() && scan.blocks > 0 {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("style.css parses cleanly ({} blocks, {} bytes)", scan.blocks, content.len()),
        ));
    } else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!(
                "style.css has CSS parse errors ({} bad tokens, {} stray closing braces)",
                scan.bad_tokens, scan.stray_closers
            ),
        ));
    }

    if content.contains("@media") {
        report.push(TestResult::pass(
            VALIDATOR,
            "style.css contains responsive @media breakpoints",
        ));
    } else {
        report.push(TestResult::fail(
            VALIDATOR,
            "style.css missing responsive @media breakpoints",
        ));
    }

    if content.contains(".modal.active") {
        report.push(TestResult::pass(VALIDATOR, "style.css styles the open source modal"));
    } else {
        report.push(TestResult::fail(
            VALIDATOR,
            "style.css has no .modal.active rule; the source modal cannot open",
        ));
    }

    let important_count = content.matches("!important").count();
    if important_count <= 5 {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("Acceptable !important usage: {} occurrences", important_count),
        ));
    } else {
        report.push(TestResult::warn(
            VALIDATOR,
            format!(
                "Excessive !important usage: {} occurrences (recommend ≤5)",
                important_count
            ),
        ));
    }

    Ok(report)
}

/// Token statistics gathered from a stylesheet.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct CssScan {
    blocks: usize,
    bad_tokens: usize,
    stray_closers: usize,
}

impl CssScan {
    fn is_clean(&self) -> bool {
        self.bad_tokens == 0 && self.stray_closers == 0
    }
}

fn scan_css(content: &str) -> CssScan {
    let mut input = ParserInput::new(content);
    let mut parser = Parser::new(&mut input);
    let mut scan = CssScan::default();
    scan_tokens(&mut parser, &mut scan);
    scan
}

/// Walks every token, descending into nested blocks.
fn scan_tokens<'i>(parser: &mut Parser<'i, '_>, scan: &mut CssScan) {
    loop {
        let token = match parser.next() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };
        match token {
            Token::CurlyBracketBlock => {
                scan.blocks += 1;
                descend(parser, scan);
            }
            Token::ParenthesisBlock | Token::SquareBracketBlock | Token::Function(_) => {
                descend(parser, scan);
            }
            Token::BadString(_) | Token::BadUrl(_) => scan.bad_tokens += 1,
            Token::CloseCurlyBracket => scan.stray_closers += 1,
            _ => {}
        }
    }
}

fn descend<'i>(parser: &mut Parser<'i, '_>, scan: &mut CssScan) {
    let _ = parser.parse_nested_block(|nested| {
        scan_tokens(nested, scan);
        Ok::<(), ParseError<'i, ()>>(())
    });
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn counts_nested_blocks() {
        let scan = scan_css("a { color: red; } @media (max-width: 10px) { b { color: blue; } }");
        assert_eq!(scan.blocks, 3);
        assert!(scan.is_clean());
    }

    #[test]
    fn stray_brace_is_reported() {
        let scan = scan_css("a { color: red; } }");
        assert_eq!(scan.stray_closers, 1);
        assert!(!scan.is_clean());
    }

    #[test]
    fn bundled_stylesheet_is_clean() {
        let scan = scan_css(audit_dashboard::assets::style_css());
        assert!(scan.is_clean());
        assert!(scan.blocks > 20);
    }
}
