use thiserror::Error;

use super::QuestionBank;
use crate::models::Question;

/// Questions a request draws from. Entries borrow from the bank, so two
/// entries are the same question only if they point at the same record.
pub type Pool<'a> = Vec<&'a Question>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoolError {
    #[error("Invalid lesson key")]
    InvalidLesson(String),
    #[error("No questions found for subject {0}")]
    NoQuestionsForSubject(String),
}

impl QuestionBank {
    /// The lesson's own question list, untouched.
    pub fn lesson_pool(&self, key: &str) -> Result<&[Question], PoolError> {
        self.get(key)
            .map(|lesson| lesson.questions.as_slice())
            .ok_or_else(|| PoolError::InvalidLesson(key.to_owned()))
    }

    /// Questions of every `subject-*` lesson, concatenated in index order.
    /// An unknown subject and a subject without questions fail the same way.
    pub fn subject_pool(&self, subject: &str) -> Result<Pool<'_>, PoolError> {
        let pool = self.collect_subject(subject);
        if pool.is_empty() {
            return Err(PoolError::NoQuestionsForSubject(subject.to_owned()));
        }
        Ok(pool)
    }

    /// Like [`subject_pool`](Self::subject_pool), but an empty subject is just
    /// an empty pool.
    pub fn collect_subject(&self, subject: &str) -> Pool<'_> {
        self.subject_lessons(subject)
            .flat_map(|lesson| lesson.questions.iter())
            .collect()
    }

    pub fn all_questions(&self) -> Pool<'_> {
        self.lessons()
            .flat_map(|lesson| lesson.questions.iter())
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::bank::LessonRecord;

    fn lesson(key: &str, n: usize) -> LessonRecord {
        LessonRecord {
            key: key.to_owned(),
            title: key.to_owned(),
            questions: (0..n)
                .map(|i| {
                    Question::new(format!("{key} #{i}"), vec!["yes".into(), "no".into()], 0)
                        .with_lesson(key)
                })
                .collect(),
        }
    }

    fn bank() -> QuestionBank {
        [
            lesson("pharmacology-lesson1", 2),
            lesson("pathology-lesson1", 3),
            lesson("pharmacology-lesson2", 1),
            lesson("pathology-empty", 0),
            lesson("intro", 1),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn lesson_pool_returns_lesson_questions_verbatim() {
        let bank = bank();
        let pool = bank.lesson_pool("pathology-lesson1").unwrap();
        let lesson = bank.get("pathology-lesson1").unwrap();
        assert!(std::ptr::eq(pool, lesson.questions.as_slice()));
    }

    #[test]
    fn unknown_lesson_is_invalid() {
        let err = bank().lesson_pool("unknown-key").unwrap_err();
        assert_eq!(err, PoolError::InvalidLesson("unknown-key".into()));
        assert_eq!(err.to_string(), "Invalid lesson key");
    }

    #[test]
    fn subject_pool_concatenates_in_index_order() {
        let bank = bank();
        let texts: Vec<&str> = bank
            .subject_pool("pharmacology")
            .unwrap()
            .into_iter()
            .map(|q| q.question.as_str())
            .collect();
        assert_eq!(
            texts,
            vec![
                "pharmacology-lesson1 #0",
                "pharmacology-lesson1 #1",
                "pharmacology-lesson2 #0"
            ]
        );
    }

    #[test]
    fn empty_and_unknown_subjects_fail_alike() {
        let bank = bank();
        let empty = [lesson("anatomy-lesson1", 0)]
            .into_iter()
            .collect::<QuestionBank>();

        assert_eq!(
            empty.subject_pool("anatomy").unwrap_err(),
            PoolError::NoQuestionsForSubject("anatomy".into())
        );
        assert_eq!(
            bank.subject_pool("anatomy").unwrap_err().to_string(),
            "No questions found for subject anatomy"
        );
        assert!(bank.collect_subject("anatomy").is_empty());
    }

    #[test]
    fn all_questions_spans_every_lesson() {
        let bank = bank();
        let all = bank.all_questions();
        assert_eq!(all.len(), 7);
        assert_eq!(all.len(), bank.question_count());
        assert_eq!(all[0].lesson, "pharmacology-lesson1");
        assert_eq!(all[6].lesson, "intro");
        assert!(QuestionBank::default().all_questions().is_empty());
    }
}
