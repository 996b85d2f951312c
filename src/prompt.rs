use crate::error::{AscseeError, AscseeResult};

pub const FONT_SIZE_MIN: u32 = 1;
pub const FONT_SIZE_MAX: u32 = 10_000;

/// Accept/reject rules for prompted values, kept separate from the retry
/// loops so they are testable without any interactive machinery.
pub fn is_valid_answer(candidate: &str) -> bool {
    !candidate.trim().is_empty()
}

pub fn is_valid_font_size(candidate: u32) -> bool {
    (FONT_SIZE_MIN..=FONT_SIZE_MAX).contains(&candidate)
}

/// Interactive input capability consumed by the builder, wizard, and menus.
///
/// Forced variants never return an empty or cancelled value; they re-prompt
/// until the pure validators above accept the answer. Optional variants
/// return `None` on cancel, which callers must check before use.
pub trait Prompt {
    /// Optional text input; `None` means the user cancelled.
    fn input(&mut self, msg: &str) -> AscseeResult<Option<String>>;

    /// Text input that re-prompts until non-empty.
    fn input_forced(&mut self, msg: &str) -> AscseeResult<String>;

    /// Numeric input that re-prompts until the answer parses.
    fn number_forced(&mut self, msg: &str) -> AscseeResult<f64>;

    /// Integer input that re-prompts until the answer parses and falls in
    /// the closed interval `[lo, hi]`.
    fn number_in_range(&mut self, msg: &str, lo: u32, hi: u32) -> AscseeResult<u32>;

    fn confirm(&mut self, msg: &str, default: bool) -> AscseeResult<bool>;

    /// Titled, numbered choice; `None` means the reserved cancel/back option.
    fn choose(&mut self, title: &str, items: &[&str]) -> AscseeResult<Option<usize>>;

    /// Paged multi-select; re-prompts until at least `min` items are chosen.
    fn multi_select(
        &mut self,
        msg: &str,
        items: &[&str],
        min: usize,
    ) -> AscseeResult<Vec<usize>>;

    /// Single selection, forced: always yields exactly one index.
    fn select_one(&mut self, msg: &str, items: &[&str]) -> AscseeResult<usize>;
}

/// Terminal implementation backed by `dialoguer`.
pub struct ConsolePrompt;

fn ui_err(e: dialoguer::Error) -> AscseeError {
    AscseeError::Other(anyhow::anyhow!("prompt failed: {e}"))
}

impl Prompt for ConsolePrompt {
    fn input(&mut self, msg: &str) -> AscseeResult<Option<String>> {
        let answer: String = dialoguer::Input::new()
            .with_prompt(format!("{msg} (empty to cancel)"))
            .allow_empty(true)
            .interact_text()
            .map_err(ui_err)?;
        let answer = answer.trim().to_string();
        Ok(if answer.is_empty() { None } else { Some(answer) })
    }

    fn input_forced(&mut self, msg: &str) -> AscseeResult<String> {
        loop {
            let answer: String = dialoguer::Input::new()
                .with_prompt(msg)
                .allow_empty(true)
                .interact_text()
                .map_err(ui_err)?;
            if is_valid_answer(&answer) {
                return Ok(answer.trim().to_string());
            }
            println!("An answer is required.");
        }
    }

    fn number_forced(&mut self, msg: &str) -> AscseeResult<f64> {
        loop {
            let answer = self.input_forced(msg)?;
            match answer.parse::<f64>() {
                Ok(n) => return Ok(n),
                Err(_) => println!("'{answer}' is not a number."),
            }
        }
    }

    fn number_in_range(&mut self, msg: &str, lo: u32, hi: u32) -> AscseeResult<u32> {
        loop {
            let answer = self.input_forced(&format!("{msg} [{lo}-{hi}]"))?;
            match answer.parse::<u32>() {
                Ok(n) if (lo..=hi).contains(&n) => return Ok(n),
                Ok(n) => println!("{n} is outside {lo}-{hi}."),
                Err(_) => println!("'{answer}' is not a whole number."),
            }
        }
    }

    fn confirm(&mut self, msg: &str, default: bool) -> AscseeResult<bool> {
        dialoguer::Confirm::new()
            .with_prompt(msg)
            .default(default)
            .interact()
            .map_err(ui_err)
    }

    fn choose(&mut self, title: &str, items: &[&str]) -> AscseeResult<Option<usize>> {
        // Esc is the reserved cancel/back/quit option.
        dialoguer::Select::new()
            .with_prompt(title)
            .items(items)
            .default(0)
            .interact_opt()
            .map_err(ui_err)
    }

    fn multi_select(
        &mut self,
        msg: &str,
        items: &[&str],
        min: usize,
    ) -> AscseeResult<Vec<usize>> {
        loop {
            let chosen = dialoguer::MultiSelect::new()
                .with_prompt(msg)
                .items(items)
                .max_length(10)
                .interact()
                .map_err(ui_err)?;
            if chosen.len() >= min {
                return Ok(chosen);
            }
            println!("Select at least {min}.");
        }
    }

    fn select_one(&mut self, msg: &str, items: &[&str]) -> AscseeResult<usize> {
        loop {
            let chosen = dialoguer::Select::new()
                .with_prompt(msg)
                .items(items)
                .default(0)
                .max_length(10)
                .interact_opt()
                .map_err(ui_err)?;
            if let Some(idx) = chosen {
                return Ok(idx);
            }
            println!("A selection is required.");
        }
    }
}

#[cfg(test)]
pub(crate) mod script {
    use super::*;
    use std::collections::VecDeque;

    /// Scripted answers. Values the real prompt would reject (empty forced
    /// input, out-of-range numbers, too-small selections) are consumed and
    /// skipped, mirroring a re-prompt.
    #[derive(Debug)]
    pub enum Answer {
        Text(Option<String>),
        Number(f64),
        Bool(bool),
        Index(Option<usize>),
        Indices(Vec<usize>),
    }

    #[derive(Debug, Default)]
    pub struct ScriptedPrompt {
        answers: VecDeque<Answer>,
    }

    impl ScriptedPrompt {
        pub fn new(answers: Vec<Answer>) -> Self {
            Self {
                answers: answers.into(),
            }
        }

        fn next(&mut self, what: &str) -> AscseeResult<Answer> {
            self.answers
                .pop_front()
                .ok_or_else(|| AscseeError::validation(format!("script exhausted at {what}")))
        }
    }

    impl Prompt for ScriptedPrompt {
        fn input(&mut self, msg: &str) -> AscseeResult<Option<String>> {
            match self.next(msg)? {
                Answer::Text(t) => Ok(t),
                other => Err(AscseeError::validation(format!(
                    "expected text at '{msg}', got {other:?}"
                ))),
            }
        }

        fn input_forced(&mut self, msg: &str) -> AscseeResult<String> {
            loop {
                match self.next(msg)? {
                    Answer::Text(Some(t)) if is_valid_answer(&t) => return Ok(t),
                    Answer::Text(_) => continue, // re-prompt
                    other => {
                        return Err(AscseeError::validation(format!(
                            "expected text at '{msg}', got {other:?}"
                        )));
                    }
                }
            }
        }

        fn number_forced(&mut self, msg: &str) -> AscseeResult<f64> {
            match self.next(msg)? {
                Answer::Number(n) => Ok(n),
                other => Err(AscseeError::validation(format!(
                    "expected number at '{msg}', got {other:?}"
                ))),
            }
        }

        fn number_in_range(&mut self, msg: &str, lo: u32, hi: u32) -> AscseeResult<u32> {
            loop {
                match self.next(msg)? {
                    Answer::Number(n) => {
                        let n = n as u32;
                        if (lo..=hi).contains(&n) {
                            return Ok(n);
                        }
                        // re-prompt
                    }
                    other => {
                        return Err(AscseeError::validation(format!(
                            "expected number at '{msg}', got {other:?}"
                        )));
                    }
                }
            }
        }

        fn confirm(&mut self, msg: &str, _default: bool) -> AscseeResult<bool> {
            match self.next(msg)? {
                Answer::Bool(b) => Ok(b),
                other => Err(AscseeError::validation(format!(
                    "expected bool at '{msg}', got {other:?}"
                ))),
            }
        }

        fn choose(&mut self, title: &str, _items: &[&str]) -> AscseeResult<Option<usize>> {
            match self.next(title)? {
                Answer::Index(i) => Ok(i),
                other => Err(AscseeError::validation(format!(
                    "expected index at '{title}', got {other:?}"
                ))),
            }
        }

        fn multi_select(
            &mut self,
            msg: &str,
            _items: &[&str],
            min: usize,
        ) -> AscseeResult<Vec<usize>> {
            loop {
                match self.next(msg)? {
                    Answer::Indices(v) if v.len() >= min => return Ok(v),
                    Answer::Indices(_) => continue, // re-prompt
                    other => {
                        return Err(AscseeError::validation(format!(
                            "expected indices at '{msg}', got {other:?}"
                        )));
                    }
                }
            }
        }

        fn select_one(&mut self, msg: &str, _items: &[&str]) -> AscseeResult<usize> {
            loop {
                match self.next(msg)? {
                    Answer::Index(Some(i)) => return Ok(i),
                    Answer::Index(None) => continue, // re-prompt
                    other => {
                        return Err(AscseeError::validation(format!(
                            "expected index at '{msg}', got {other:?}"
                        )));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_validity_rejects_blank() {
        assert!(is_valid_answer("cat.png"));
        assert!(!is_valid_answer(""));
        assert!(!is_valid_answer("   "));
    }

    #[test]
    fn font_size_bounds_are_closed() {
        assert!(is_valid_font_size(1));
        assert!(is_valid_font_size(10_000));
        assert!(!is_valid_font_size(0));
        assert!(!is_valid_font_size(10_001));
    }
}
