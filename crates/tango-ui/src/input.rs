use tango_types::UiEvent;

use crate::state::{Screen, UiState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Send(UiEvent),
    Help,
    Invalid(String),
    Empty,
}

/// Map one line of terminal input to a command for the current screen.
/// Row and option numbers are 1-based on screen.
pub fn parse_command(state: &UiState, line: &str) -> Command {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Command::Empty;
    };
    let arg = parts.next();

    match head {
        "q" | "quit" => return Command::Send(UiEvent::Quit),
        "h" | "help" | "?" => return Command::Help,
        _ => {}
    }

    match state.screen {
        Screen::Quiz => parse_quiz(state, head),
        Screen::Review => parse_review(state, head, arg),
    }
}

fn parse_quiz(state: &UiState, head: &str) -> Command {
    match head {
        "n" | "next" => Command::Send(UiEvent::Next),
        "r" | "reset" => Command::Send(UiEvent::Reset),
        "s" | "speak" => Command::Send(UiEvent::Speak),
        "w" | "review" => Command::Send(UiEvent::OpenReview),
        other => match other.parse::<usize>() {
            Ok(n) if (1..=state.option_count()).contains(&n) => {
                Command::Send(UiEvent::SelectOption(n - 1))
            }
            Ok(n) => Command::Invalid(format!("沒有選項 {n}")),
            Err(_) => Command::Invalid(format!("未知的指令: {other}")),
        },
    }
}

fn parse_review(state: &UiState, head: &str, arg: Option<&str>) -> Command {
    match head {
        "b" | "back" => Command::Send(UiEvent::CloseReview),
        "d" | "delete" => match row(state, arg) {
            Ok(index) => Command::Send(UiEvent::DeleteMistake(index)),
            Err(msg) => Command::Invalid(msg),
        },
        "s" | "speak" => match row(state, arg) {
            Ok(index) => Command::Send(UiEvent::SpeakMistake(index)),
            Err(msg) => Command::Invalid(msg),
        },
        "l" | "lookup" => match row(state, arg) {
            Ok(index) => Command::Send(UiEvent::LookupMistake(index)),
            Err(msg) => Command::Invalid(msg),
        },
        other => Command::Invalid(format!("未知的指令: {other}")),
    }
}

fn row(state: &UiState, arg: Option<&str>) -> Result<usize, String> {
    let arg = arg.ok_or_else(|| "請輸入列號".to_string())?;
    match arg.parse::<usize>() {
        Ok(n) if (1..=state.review.len()).contains(&n) => Ok(n - 1),
        _ => Err(format!("沒有第 {arg} 列")),
    }
}
