//! Lesson catalog in natural order.

use std::{cmp::Ordering, iter::Peekable, num::IntErrorKind, str::Chars, sync::LazyLock};

use regex::Regex;
use serde::Serialize;

use crate::bank::QuestionBank;

static LESSON_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:lesson[-_]?)?([0-9]+)$").expect("lesson number pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonSummary {
    pub key: String,
    pub title: String,
    pub count: usize,
}

/// Trailing lesson number of a key: `lesson-12`, `Lesson12` and a bare
/// trailing `7` all count. Only ASCII digits are numbers; values too large
/// for `u64` saturate.
pub fn lesson_number(key: &str) -> Option<u64> {
    let digits = LESSON_NUMBER.captures(key)?.get(1)?;
    match digits.as_str().parse::<u64>() {
        Ok(n) => Some(n),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(u64::MAX),
        Err(_) => None,
    }
}

/// Lessons (all, or those under `subject-`), ordered by lesson number with
/// unnumbered lessons last; ties fall back to [`natural_cmp`] on the key.
pub fn list_lessons(bank: &QuestionBank, subject: Option<&str>) -> Vec<LessonSummary> {
    let mut ranked: Vec<(Option<u64>, LessonSummary)> = bank
        .lessons()
        .filter(|lesson| match subject {
            Some(subject) => lesson
                .key
                .strip_prefix(subject)
                .is_some_and(|rest| rest.starts_with('-')),
            None => true,
        })
        .map(|lesson| {
            (
                lesson_number(&lesson.key),
                LessonSummary {
                    key: lesson.key.clone(),
                    title: lesson.title.clone(),
                    count: lesson.questions.len(),
                },
            )
        })
        .collect();

    ranked.sort_by(|(a_num, a), (b_num, b)| {
        by_number(*a_num, *b_num).then_with(|| natural_cmp(&a.key, &b.key))
    });

    ranked.into_iter().map(|(_, summary)| summary).collect()
}

fn by_number(a: Option<u64>, b: Option<u64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Case-insensitive comparison that orders digit runs by numeric value, so
/// `lesson2` sorts before `lesson10`.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut a = a.chars().peekable();
    let mut b = b.chars().peekable();

    loop {
        match (a.peek().copied(), b.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let ord = cmp_digit_runs(&take_digits(&mut a), &take_digits(&mut b));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(x), Some(y)) => {
                let ord = x.to_lowercase().cmp(y.to_lowercase());
                if ord != Ordering::Equal {
                    return ord;
                }
                a.next();
                b.next();
            }
        }
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut digits = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        digits.push(c);
    }
    digits
}

fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
