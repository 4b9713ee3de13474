//! One playthrough of a shuffled question set.
//!
//! All mutation goes through the five transitions below; the shell only ever
//! reads the snapshot accessors. Transitions whose precondition does not hold
//! are no-ops (the UI cannot reach them), except for the start gate which is
//! a real error.

use rand::seq::SliceRandom;
use rand::Rng;

use super::bank;
use super::progress::{GateError, Progress};
use super::{Level, Question};

/// Score needed (in percent, after rounding) to pass the basic level.
const PASS_THRESHOLD: u32 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Phase {
    /// Showing a question, answer not submitted yet.
    InProgress,
    /// Answer revealed, waiting for the player to move on.
    AnswerRevealed,
    /// Score screen.
    Finished,
}

/// How an option should be rendered for the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionAppearance {
    Neutral,
    Selected,
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct QuizRun {
    level: Level,
    questions: Vec<Question>,
    current_index: usize,
    score: usize,
    selected_answer: Option<String>,
    phase: Phase,
}

impl QuizRun {
    /// Starts a run at the given level, or rejects it if the level is still
    /// locked for this session. The gate is checked here and not only at the
    /// selection keyboard, so a stale or forged intent cannot slip through.
    pub fn start(
        level: Level,
        progress: Progress,
        rng: &mut impl Rng,
    ) -> Result<Self, GateError> {
        if !progress.can_select(level) {
            return Err(GateError);
        }
        Ok(Self::fresh(level, rng))
    }

    fn fresh(level: Level, rng: &mut impl Rng) -> Self {
        let mut questions = bank::questions(level);
        questions.shuffle(rng);
        Self {
            level,
            questions,
            current_index: 0,
            score: 0,
            selected_answer: None,
            phase: Phase::InProgress,
        }
    }

    /// Picks (or re-picks) an option for the current question. Ignored once
    /// the answer has been revealed.
    pub fn select_answer(&mut self, option: &str) {
        if self.phase != Phase::InProgress {
            return;
        }
        self.selected_answer = Some(option.to_string());
    }

    /// Locks in the current selection and reveals the answer, scoring one
    /// point for a correct pick. Requires a selection; the phase guard makes
    /// it impossible to score the same question twice.
    pub fn submit_answer(&mut self) {
        if self.phase != Phase::InProgress {
            return;
        }
        let correct = match &self.selected_answer {
            Some(selected) => self.questions[self.current_index].is_correct(selected),
            None => return,
        };
        if correct {
            self.score += 1;
        }
        self.phase = Phase::AnswerRevealed;
    }

    /// Moves to the next question, or to the score screen after the last one.
    /// Finishing a basic run at the pass threshold raises the session flag;
    /// nothing ever lowers it again.
    pub fn advance(&mut self, progress: &mut Progress) {
        if self.phase != Phase::AnswerRevealed {
            return;
        }
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.selected_answer = None;
            self.phase = Phase::InProgress;
        } else {
            self.phase = Phase::Finished;
            if self.level == Level::Basic && self.percentage() >= PASS_THRESHOLD {
                progress.record_basic_pass();
            }
        }
    }

    /// Throws the current run away and starts over at the same level with a
    /// fresh shuffle. Usable from any phase as a hard reset.
    pub fn restart_same_level(&mut self, rng: &mut impl Rng) {
        *self = Self::fresh(self.level, rng);
    }

    /// From the score screen, starts a fresh run at the other level. The
    /// caller must check the gate before offering basic→advanced; switching
    /// back down needs no check.
    pub fn switch_level(&mut self, rng: &mut impl Rng) {
        if self.phase != Phase::Finished {
            return;
        }
        *self = Self::fresh(self.level.toggled(), rng);
    }

    // Read-only snapshot for rendering.

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    /// 1-based, for "Question 3 of 17" headers.
    pub fn question_number(&self) -> usize {
        self.current_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn has_selection(&self) -> bool {
        self.selected_answer.is_some()
    }

    pub fn percentage(&self) -> u32 {
        (100.0 * self.score as f64 / self.questions.len() as f64).round() as u32
    }

    pub fn passed(&self) -> bool {
        self.percentage() >= PASS_THRESHOLD
    }

    /// Rendering state for one option of the current question: a plain
    /// selected/neutral split before the reveal, and correct/incorrect
    /// highlighting after it.
    pub fn option_appearance(&self, option: &str) -> OptionAppearance {
        let question = &self.questions[self.current_index];
        if self.phase == Phase::InProgress {
            match &self.selected_answer {
                Some(selected) if selected == option => OptionAppearance::Selected,
                _ => OptionAppearance::Neutral,
            }
        } else if question.is_correct(option) {
            OptionAppearance::Correct
        } else if self.selected_answer.as_deref() == Some(option) {
            OptionAppearance::Incorrect
        } else {
            OptionAppearance::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn basic_run() -> (QuizRun, Progress) {
        let progress = Progress::default();
        let run = QuizRun::start(Level::Basic, progress, &mut rng()).unwrap();
        (run, progress)
    }

    /// A run over n single-answer questions, bypassing the bank.
    fn synthetic_run(n: usize) -> QuizRun {
        let questions = (0..n)
            .map(|i| Question {
                id: 1000 + i as u32,
                prompt: format!("Synthetic question {}", i),
                options: vec![
                    "A. first".to_string(),
                    "B. second".to_string(),
                    "C. third".to_string(),
                    "D. fourth".to_string(),
                ],
                correct_option: "A. first".to_string(),
            })
            .collect();
        QuizRun {
            level: Level::Basic,
            questions,
            current_index: 0,
            score: 0,
            selected_answer: None,
            phase: Phase::InProgress,
        }
    }

    /// Select, submit and advance through the current question.
    fn answer(run: &mut QuizRun, progress: &mut Progress, correctly: bool) {
        let question = run.current_question().clone();
        let choice = if correctly {
            question.correct_option.clone()
        } else {
            question
                .options
                .iter()
                .find(|o| **o != question.correct_option)
                .unwrap()
                .clone()
        };
        run.select_answer(&choice);
        run.submit_answer();
        run.advance(progress);
    }

    #[test]
    fn shuffled_run_is_a_permutation_of_the_bank() {
        let (run, _) = basic_run();

        let mut run_ids: Vec<u32> = run.questions.iter().map(|q| q.id).collect();
        let mut bank_ids: Vec<u32> = bank::questions(Level::Basic).iter().map(|q| q.id).collect();
        run_ids.sort_unstable();
        bank_ids.sort_unstable();
        assert_eq!(run_ids, bank_ids);
    }

    #[test]
    fn seeded_rng_gives_a_deterministic_order() {
        let progress = Progress::default();
        let a = QuizRun::start(Level::Basic, progress, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = QuizRun::start(Level::Basic, progress, &mut StdRng::seed_from_u64(7)).unwrap();
        let a_ids: Vec<u32> = a.questions.iter().map(|q| q.id).collect();
        let b_ids: Vec<u32> = b.questions.iter().map(|q| q.id).collect();
        assert_eq!(a_ids, b_ids);
    }

    #[test]
    fn correct_answer_scores_one_point_and_reveals() {
        let mut run = synthetic_run(3);
        run.select_answer("A. first");
        run.submit_answer();

        assert_eq!(run.phase(), Phase::AnswerRevealed);
        assert_eq!(run.score(), 1);
    }

    #[test]
    fn wrong_answer_reveals_without_scoring() {
        let mut run = synthetic_run(3);
        run.select_answer("C. third");
        run.submit_answer();

        assert_eq!(run.phase(), Phase::AnswerRevealed);
        assert_eq!(run.score(), 0);
    }

    #[test]
    fn double_submit_does_not_double_score() {
        let mut run = synthetic_run(3);
        run.select_answer("A. first");
        run.submit_answer();
        run.submit_answer();

        assert_eq!(run.score(), 1);
    }

    #[test]
    fn submit_without_selection_is_a_noop() {
        let mut run = synthetic_run(3);
        run.submit_answer();

        assert_eq!(run.phase(), Phase::InProgress);
        assert_eq!(run.score(), 0);
    }

    #[test]
    fn selection_is_frozen_after_reveal() {
        let mut run = synthetic_run(3);
        run.select_answer("C. third");
        run.submit_answer();
        run.select_answer("A. first");

        assert_eq!(run.selected_answer.as_deref(), Some("C. third"));
    }

    #[test]
    fn advance_requires_a_revealed_answer() {
        let mut run = synthetic_run(3);
        let mut progress = Progress::default();
        run.advance(&mut progress);

        assert_eq!(run.question_number(), 1);
        assert_eq!(run.phase(), Phase::InProgress);
    }

    #[test]
    fn advance_clears_the_selection_for_the_next_question() {
        let mut run = synthetic_run(3);
        let mut progress = Progress::default();
        run.select_answer("A. first");
        run.submit_answer();
        run.advance(&mut progress);

        assert_eq!(run.question_number(), 2);
        assert_eq!(run.phase(), Phase::InProgress);
        assert!(!run.has_selection());
    }

    #[test]
    fn advance_on_the_last_question_finishes_without_overrunning() {
        let mut run = synthetic_run(2);
        let mut progress = Progress::default();
        answer(&mut run, &mut progress, true);
        answer(&mut run, &mut progress, true);

        assert_eq!(run.phase(), Phase::Finished);
        assert!(run.current_index < run.total_questions());

        // Further advances on the score screen change nothing.
        run.advance(&mut progress);
        assert_eq!(run.phase(), Phase::Finished);
        assert_eq!(run.score(), 2);
    }

    #[test]
    fn score_stays_within_bounds_over_a_full_run() {
        let (mut run, mut progress) = basic_run();
        for i in 0..run.total_questions() {
            answer(&mut run, &mut progress, i % 2 == 0);
            assert!(run.score() <= run.total_questions());
        }
        assert_eq!(run.phase(), Phase::Finished);
    }

    #[test]
    fn twelve_of_sixteen_rounds_to_seventy_five_and_passes() {
        let mut run = synthetic_run(16);
        let mut progress = Progress::default();
        for i in 0..16 {
            answer(&mut run, &mut progress, i < 12);
        }

        assert_eq!(run.percentage(), 75);
        assert!(run.passed());
        assert!(progress.has_passed_basic());
    }

    #[test]
    fn eleven_of_sixteen_rounds_to_sixty_nine_and_fails() {
        let mut run = synthetic_run(16);
        let mut progress = Progress::default();
        for i in 0..16 {
            answer(&mut run, &mut progress, i < 11);
        }

        assert_eq!(run.percentage(), 69);
        assert!(!run.passed());
        assert!(!progress.has_passed_basic());
    }

    #[test]
    fn pass_flag_survives_restarts_and_later_failures() {
        let (mut run, mut progress) = basic_run();
        for _ in 0..run.total_questions() {
            answer(&mut run, &mut progress, true);
        }
        assert!(progress.has_passed_basic());

        run.restart_same_level(&mut rng());
        for _ in 0..run.total_questions() {
            answer(&mut run, &mut progress, false);
        }
        assert_eq!(run.score(), 0);
        assert!(progress.has_passed_basic());
    }

    #[test]
    fn advanced_finish_does_not_touch_the_flag() {
        let progress = Progress::default();
        let mut unlocked = progress;
        unlocked.record_basic_pass();

        let mut run = QuizRun::start(Level::Advanced, unlocked, &mut rng()).unwrap();
        let mut fresh = Progress::default();
        for _ in 0..run.total_questions() {
            answer(&mut run, &mut fresh, true);
        }
        assert!(!fresh.has_passed_basic());
    }

    #[test]
    fn start_enforces_the_advanced_gate() {
        let mut progress = Progress::default();
        assert_eq!(
            QuizRun::start(Level::Advanced, progress, &mut rng()).unwrap_err(),
            GateError
        );

        progress.record_basic_pass();
        let run = QuizRun::start(Level::Advanced, progress, &mut rng()).unwrap();
        assert_eq!(run.level(), Level::Advanced);
    }

    #[test]
    fn switch_level_only_works_from_the_score_screen() {
        let mut run = synthetic_run(1);
        let mut progress = Progress::default();

        run.switch_level(&mut rng());
        assert_eq!(run.level(), Level::Basic);

        answer(&mut run, &mut progress, true);
        assert_eq!(run.phase(), Phase::Finished);

        run.switch_level(&mut rng());
        assert_eq!(run.level(), Level::Advanced);
        assert_eq!(run.phase(), Phase::InProgress);
        assert_eq!(run.score(), 0);
        assert_eq!(run.total_questions(), bank::questions(Level::Advanced).len());
    }

    #[test]
    fn restart_resets_everything_but_the_level() {
        let (mut run, mut progress) = basic_run();
        answer(&mut run, &mut progress, true);
        run.restart_same_level(&mut rng());

        assert_eq!(run.level(), Level::Basic);
        assert_eq!(run.phase(), Phase::InProgress);
        assert_eq!(run.score(), 0);
        assert_eq!(run.question_number(), 1);
        assert!(!run.has_selection());
    }

    #[test]
    fn appearance_tracks_selection_before_the_reveal() {
        let mut run = synthetic_run(1);
        assert_eq!(run.option_appearance("A. first"), OptionAppearance::Neutral);

        run.select_answer("B. second");
        assert_eq!(run.option_appearance("B. second"), OptionAppearance::Selected);
        assert_eq!(run.option_appearance("A. first"), OptionAppearance::Neutral);
    }

    #[test]
    fn appearance_highlights_the_answer_after_the_reveal() {
        let mut run = synthetic_run(1);
        run.select_answer("B. second");
        run.submit_answer();

        assert_eq!(run.option_appearance("A. first"), OptionAppearance::Correct);
        assert_eq!(run.option_appearance("B. second"), OptionAppearance::Incorrect);
        assert_eq!(run.option_appearance("C. third"), OptionAppearance::Neutral);
    }
}
