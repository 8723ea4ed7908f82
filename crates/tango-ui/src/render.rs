use std::fmt::Write;

use tango_types::{OptionState, QuestionView, ScoreSummary, WordEntry};

pub const REVEAL_MARKER: &str = "← 正確答案";
pub const REVIEW_TITLE: &str = "錯題本";

macro_rules! color {
    ($text:expr, "red") => { format!("\x1b[31m{}\x1b[0m", $text) };
    ($text:expr, "green") => { format!("\x1b[32m{}\x1b[0m", $text) };
    ($text:expr, "bold") => { format!("\x1b[1m{}\x1b[0m", $text) };
    ($text:expr, "gray") => { format!("\x1b[90m{}\x1b[0m", $text) };
}

pub const REVIEW_HELP: &str = "指令: d <n> 刪除  s <n> 發音  l <n> 查字典  b 返回  q 離開";

/// Quiz help, with the answer range matching the options on screen
pub fn quiz_help(option_count: usize) -> String {
    let answer = match option_count {
        0 => String::new(),
        1 => "1 作答  ".to_string(),
        n => format!("1-{n} 作答  "),
    };
    format!("指令: {answer}n 下一題  r 重設  s 發音  w 錯題本  q 離開")
}

pub fn render_question(question: Option<&QuestionView>, score: ScoreSummary, color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[ {}/{} ]", score.right, score.total);

    let Some(question) = question else {
        let _ = writeln!(out, "（沒有題目）");
        return out;
    };

    let word = if color {
        color!(&question.word, "bold")
    } else {
        question.word.clone()
    };
    let _ = writeln!(out, "{}  ({})", word, question.word_type);

    for (i, option) in question.options.iter().enumerate() {
        let line = match option.state {
            OptionState::Normal => option.text.clone(),
            OptionState::Revealed => {
                let text = format!("{} {}", option.text, REVEAL_MARKER);
                if color { color!(text, "red") } else { text }
            }
            OptionState::Dimmed => {
                if color {
                    color!(&option.text, "gray")
                } else {
                    option.text.clone()
                }
            }
        };
        let _ = writeln!(out, "  {}. {}", i + 1, line);
    }

    if question.locked {
        let _ = writeln!(out, "按 n 進入下一題");
    }

    out
}

pub fn render_review(entries: &[WordEntry], color: bool) -> String {
    let mut out = String::new();
    let title = format!("== {} ({}) ==", REVIEW_TITLE, entries.len());
    let _ = writeln!(out, "{}", if color { color!(title, "bold") } else { title });

    if entries.is_empty() {
        let _ = writeln!(out, "（沒有錯題）");
    }

    for (i, entry) in entries.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {} ({}) {}",
            i + 1,
            entry.word,
            entry.word_type,
            entry.meaning
        );
    }

    out
}

pub fn render_notice(title: &str, message: &str, color: bool) -> String {
    let title = format!("!! {title} !!");
    let title = if color { color!(title, "red") } else { title };
    format!("{title}\n{message}\n")
}

pub fn render_reference(word: &str, text: &str, color: bool) -> String {
    let title = format!("== {word} ==");
    let title = if color { color!(title, "bold") } else { title };
    let mut out = format!("{title}\n{}\n", text.trim_end());
    let _ = writeln!(out, "按 b 返回測驗，或繼續輸入錯題本指令");
    out
}

pub fn render_correct(color: bool) -> String {
    let text = "答對了！";
    if color { color!(text, "green") } else { text.to_string() }
}
