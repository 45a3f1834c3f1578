// src/scoring.rs

use std::collections::HashMap;
use std::fmt;

use crate::models::question::Question;

/// Result of evaluating a submission against a quiz's questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub points: usize,
    pub max: usize,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.points, self.max)
    }
}

/// Scores a submitted question -> answer mapping.
///
/// One point per question whose submitted answer equals its stored correct
/// answer. Submission entries for question ids outside `questions` are
/// ignored. A question with no designated correct answer can never score.
pub fn evaluate(questions: &[Question], submission: &HashMap<i64, i64>) -> Score {
    let points = questions
        .iter()
        .filter(|question| {
            matches!(question.correct_answer_id,
                Some(correct) if submission.get(&question.id) == Some(&correct))
        })
        .count();

    Score {
        points,
        max: questions.len(),
    }
}
