mod quiz;

use dotenv::dotenv;
use rand::thread_rng;
use teloxide::{
    dispatching::dialogue::InMemStorage,
    prelude::*,
    types::{KeyboardButton, KeyboardMarkup},
};

use quiz::progress::Progress;
use quiz::run::{OptionAppearance, Phase, QuizRun};
use quiz::Level;

type QuizDialogue = Dialogue<State, InMemStorage<State>>;
type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[derive(Clone, Default, serde::Serialize, serde::Deserialize)]
pub enum State {
    #[default]
    Start,
    ReceiveLevelChoice {
        progress: Progress,
    },
    Quiz {
        run: QuizRun,
        progress: Progress,
    },
}

#[tokio::main]
async fn main() {
    // The token may come from a .env file or from the real environment.
    dotenv().ok();

    pretty_env_logger::init();
    log::info!("Starting financial literacy quiz bot...");

    quiz::bank::validate();

    let bot = Bot::from_env();

    Dispatcher::builder(
        bot,
        Update::filter_message()
            .enter_dialogue::<Message, InMemStorage<State>, State>()
            .branch(dptree::case![State::Start].endpoint(start))
            .branch(
                dptree::case![State::ReceiveLevelChoice { progress }]
                    .endpoint(receive_level_choice),
            )
            .branch(dptree::case![State::Quiz { run, progress }].endpoint(quiz_screen)),
    )
    .dependencies(dptree::deps![InMemStorage::<State>::new()])
    .enable_ctrlc_handler()
    .build()
    .dispatch()
    .await;
}

const BASIC_LEVEL_BUTTON: &str = "Set 1: Basic Finance";
const ADVANCED_LEVEL_BUTTON: &str = "Set 2: Advanced Finance";
const SUBMIT_ANSWER_BUTTON: &str = "Submit Answer";
const NEXT_QUESTION_BUTTON: &str = "Next Question";
const RESTART_BUTTON: &str = "Restart Same Level";
const TRY_ADVANCED_BUTTON: &str = "Try Advanced Level";
const TRY_BASIC_BUTTON: &str = "Try Basic Level";

const GREETING_TEXT: &str =
    "Welcome to the Financial Literacy Quiz! Pick a question set to get started.";

async fn start(bot: Bot, dialogue: QuizDialogue, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, GREETING_TEXT)
        .reply_markup(level_keyboard())
        .await?;

    dialogue
        .update(State::ReceiveLevelChoice {
            progress: Progress::default(),
        })
        .await?;
    Ok(())
}

async fn receive_level_choice(
    bot: Bot,
    dialogue: QuizDialogue,
    progress: Progress,
    msg: Message,
) -> HandlerResult {
    let level = match msg.text() {
        Some(BASIC_LEVEL_BUTTON) => Level::Basic,
        Some(ADVANCED_LEVEL_BUTTON) => Level::Advanced,
        _ => {
            bot.send_message(msg.chat.id, "Please pick one of the question sets")
                .reply_markup(level_keyboard())
                .await?;
            return Ok(());
        }
    };

    // Bound first so the ThreadRng temporary is gone before any await; the
    // handler future must stay Send.
    let started = QuizRun::start(level, progress, &mut thread_rng());
    match started {
        Ok(run) => {
            log::debug!("starting a {} run", level.title());
            send_question(&bot, &msg, &run).await?;
            dialogue.update(State::Quiz { run, progress }).await?;
        }
        Err(gate) => {
            bot.send_message(msg.chat.id, gate.to_string())
                .reply_markup(level_keyboard())
                .await?;
        }
    }
    Ok(())
}

async fn quiz_screen(
    bot: Bot,
    dialogue: QuizDialogue,
    (run, progress): (QuizRun, Progress),
    msg: Message,
) -> HandlerResult {
    let mut run = run;
    let mut progress = progress;

    let Some(text) = msg.text() else {
        bot.send_message(msg.chat.id, "Please use the buttons below")
            .await?;
        return Ok(());
    };

    match text {
        SUBMIT_ANSWER_BUTTON => {
            if run.phase() != Phase::InProgress {
                // Stale keyboard press; the answer is already revealed.
                send_question(&bot, &msg, &run).await?;
            } else if !run.has_selection() {
                bot.send_message(msg.chat.id, "Pick an answer first")
                    .reply_markup(question_keyboard(&run))
                    .await?;
            } else {
                let before = run.score();
                run.submit_answer();
                let verdict = if run.score() > before {
                    "✅ Correct!"
                } else {
                    "❌ Not quite. The correct answer is marked below."
                };
                bot.send_message(msg.chat.id, format!("{}\n\n{}", verdict, question_text(&run)))
                    .reply_markup(question_keyboard(&run))
                    .await?;
            }
        }
        NEXT_QUESTION_BUTTON => {
            run.advance(&mut progress);
            if run.phase() == Phase::Finished {
                send_score(&bot, &msg, &run, progress).await?;
            } else {
                send_question(&bot, &msg, &run).await?;
            }
        }
        RESTART_BUTTON => {
            run.restart_same_level(&mut thread_rng());
            send_question(&bot, &msg, &run).await?;
        }
        TRY_ADVANCED_BUTTON | TRY_BASIC_BUTTON => {
            // The keyboard only offers the legal switch, but a client can
            // send any text, so the gate is checked against the level the
            // switch would land on.
            if switch_allowed(&run, progress) {
                run.switch_level(&mut thread_rng());
                send_question(&bot, &msg, &run).await?;
            } else {
                bot.send_message(msg.chat.id, quiz::progress::GateError.to_string())
                    .reply_markup(score_keyboard(&run, progress))
                    .await?;
            }
        }
        option if is_current_option(&run, option) => {
            run.select_answer(option);
            bot.send_message(msg.chat.id, question_text(&run))
                .reply_markup(question_keyboard(&run))
                .await?;
        }
        _ => {
            bot.send_message(msg.chat.id, "Please use the buttons below")
                .await?;
        }
    }

    dialogue.update(State::Quiz { run, progress }).await?;
    Ok(())
}

/// Whether switching levels from this run would land on a selectable level.
/// Switching down to basic always would; switching up requires the pass flag.
fn switch_allowed(run: &QuizRun, progress: Progress) -> bool {
    progress.can_select(run.level().toggled())
}

fn is_current_option(run: &QuizRun, text: &str) -> bool {
    run.phase() != Phase::Finished && run.current_question().options.iter().any(|o| o == text)
}

fn level_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![vec![
        KeyboardButton::new(BASIC_LEVEL_BUTTON),
        KeyboardButton::new(ADVANCED_LEVEL_BUTTON),
    ]])
}

async fn send_question(bot: &Bot, msg: &Message, run: &QuizRun) -> HandlerResult {
    bot.send_message(msg.chat.id, question_text(run))
        .reply_markup(question_keyboard(run))
        .await?;
    Ok(())
}

fn question_text(run: &QuizRun) -> String {
    let question = run.current_question();
    let options = question
        .options
        .iter()
        .map(|option| {
            format!(
                "{} {}",
                option_marker(run.option_appearance(option)),
                option
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{} Quiz: Question {} of {}\n\n{}\n\n{}",
        run.level().title(),
        run.question_number(),
        run.total_questions(),
        question.prompt,
        options
    )
}

fn option_marker(appearance: OptionAppearance) -> &'static str {
    match appearance {
        OptionAppearance::Neutral => "▫️",
        OptionAppearance::Selected => "🔘",
        OptionAppearance::Correct => "✅",
        OptionAppearance::Incorrect => "❌",
    }
}

fn question_keyboard(run: &QuizRun) -> KeyboardMarkup {
    let mut rows: Vec<Vec<KeyboardButton>> = run
        .current_question()
        .options
        .iter()
        .map(|option| vec![KeyboardButton::new(option.clone())])
        .collect();

    match run.phase() {
        Phase::InProgress if run.has_selection() => {
            rows.push(vec![KeyboardButton::new(SUBMIT_ANSWER_BUTTON)]);
        }
        Phase::AnswerRevealed => {
            rows.push(vec![KeyboardButton::new(NEXT_QUESTION_BUTTON)]);
        }
        _ => {}
    }

    KeyboardMarkup::new(rows)
}

async fn send_score(bot: &Bot, msg: &Message, run: &QuizRun, progress: Progress) -> HandlerResult {
    bot.send_message(msg.chat.id, score_text(run))
        .reply_markup(score_keyboard(run, progress))
        .await?;
    Ok(())
}

fn score_text(run: &QuizRun) -> String {
    let mut text = format!(
        "Quiz Complete!\n\nYour score: {} out of {}\nPercentage: {}%\nQuiz Level: {}",
        run.score(),
        run.total_questions(),
        run.percentage(),
        run.level().title()
    );

    if run.level() == Level::Basic {
        if run.passed() {
            text.push_str("\n\n🎉 Congratulations! You've unlocked the Advanced Level!");
        } else {
            text.push_str("\n\nYou need 70% to unlock the Advanced Level");
        }
    }
    text
}

fn score_keyboard(run: &QuizRun, progress: Progress) -> KeyboardMarkup {
    let mut rows = vec![vec![KeyboardButton::new(RESTART_BUTTON)]];
    match run.level() {
        Level::Basic if progress.can_select(Level::Advanced) => {
            rows.push(vec![KeyboardButton::new(TRY_ADVANCED_BUTTON)]);
        }
        Level::Advanced => {
            rows.push(vec![KeyboardButton::new(TRY_BASIC_BUTTON)]);
        }
        _ => {}
    }
    KeyboardMarkup::new(rows)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    /// Finishes the run, answering every question wrong.
    fn fail_out(run: &mut QuizRun, progress: &mut Progress) {
        for _ in 0..run.total_questions() {
            let question = run.current_question().clone();
            let wrong = question
                .options
                .iter()
                .find(|o| **o != question.correct_option)
                .unwrap()
                .clone();
            run.select_answer(&wrong);
            run.submit_answer();
            run.advance(progress);
        }
    }

    #[test]
    fn failed_basic_run_cannot_switch_into_advanced() {
        let mut progress = Progress::default();
        let mut run =
            QuizRun::start(Level::Basic, progress, &mut StdRng::seed_from_u64(1)).unwrap();
        fail_out(&mut run, &mut progress);
        assert_eq!(run.phase(), Phase::Finished);

        // Any client can send the switch-button text by hand; the handler
        // only honors it when the target level is selectable.
        assert!(!switch_allowed(&run, progress));
        if switch_allowed(&run, progress) {
            run.switch_level(&mut StdRng::seed_from_u64(2));
        }
        assert_eq!(run.level(), Level::Basic);
    }

    #[test]
    fn finished_advanced_run_may_switch_back_down() {
        let mut unlocked = Progress::default();
        unlocked.record_basic_pass();

        let mut run =
            QuizRun::start(Level::Advanced, unlocked, &mut StdRng::seed_from_u64(3)).unwrap();
        fail_out(&mut run, &mut unlocked);

        assert!(switch_allowed(&run, unlocked));
        run.switch_level(&mut StdRng::seed_from_u64(4));
        assert_eq!(run.level(), Level::Basic);
    }

    #[test]
    fn passed_basic_run_may_switch_up() {
        let mut progress = Progress::default();
        progress.record_basic_pass();
        let run = QuizRun::start(Level::Basic, progress, &mut StdRng::seed_from_u64(5)).unwrap();

        assert!(switch_allowed(&run, progress));
    }
}
