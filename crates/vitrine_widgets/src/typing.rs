//! Hero title typing effect

use serde::{Deserialize, Serialize};

/// Typing timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    /// Delay before the first character
    pub start_delay_ms: u64,
    /// Delay between characters
    pub char_interval_ms: u64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            start_delay_ms: 500,
            char_interval_ms: 100,
        }
    }
}

/// Types the hero name one character per frame
#[derive(Debug, Clone)]
pub struct TypingAnimation {
    chars: Vec<char>,
    shown: usize,
    config: TypingConfig,
}

impl TypingAnimation {
    pub fn new(text: &str, config: TypingConfig) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
            config,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.shown >= self.chars.len()
    }

    /// Characters typed so far
    pub fn shown(&self) -> usize {
        self.shown
    }

    /// Delay until the next frame, or None when there is nothing left to type
    pub fn next_delay_ms(&self) -> Option<u64> {
        if self.is_finished() {
            None
        } else if self.shown == 0 {
            Some(self.config.start_delay_ms)
        } else {
            Some(self.config.char_interval_ms)
        }
    }

    /// Type one more character and return the title markup
    pub fn next_frame(&mut self) -> Option<String> {
        if self.is_finished() {
            return None;
        }
        self.shown += 1;
        Some(self.render())
    }

    /// Markup for the characters typed so far
    pub fn render(&self) -> String {
        let typed: String = self.chars[..self.shown].iter().collect();
        format!(
            "Hi, I'm <span class=\"highlight\">{}</span>",
            escape_html(&typed)
        )
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
