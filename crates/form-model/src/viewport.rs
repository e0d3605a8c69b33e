//! Viewport Heuristics
//!
//! Mobile detection and on-screen keyboard guessing.

use crate::config::FormConfig;

const MOBILE_AGENTS: &[&str] = &["android", "iphone", "ipad", "ipod", "blackberry", "iemobile", "opera mini"];

/// Narrow viewport or a known mobile user agent
pub fn is_mobile(config: &FormConfig, inner_width: f64, user_agent: &str) -> bool {
    if inner_width <= config.mobile_breakpoint_px {
        return true;
    }
    let ua = user_agent.to_lowercase();
    MOBILE_AGENTS.iter().any(|agent| ua.contains(agent))
}

/// Element tags that pull up the on-screen keyboard
pub fn is_text_entry(tag_name: &str) -> bool {
    tag_name.eq_ignore_ascii_case("input") || tag_name.eq_ignore_ascii_case("textarea")
}

/// Compares the current height to the height at start-up
#[derive(Debug, Clone, Copy)]
pub struct KeyboardHeuristic {
    initial_height: f64,
    threshold: f64,
}

impl KeyboardHeuristic {
    pub fn new(initial_height: f64, threshold: f64) -> Self {
        Self { initial_height, threshold }
    }

    /// True when the viewport shrank enough to assume a keyboard is open
    pub fn keyboard_open(&self, current_height: f64) -> bool {
        self.initial_height - current_height > self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP_UA: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/120.0";

    #[test]
    fn test_mobile_by_width() {
        let config = FormConfig::default();
        assert!(is_mobile(&config, 768.0, DESKTOP_UA));
        assert!(!is_mobile(&config, 769.0, DESKTOP_UA));
    }

    #[test]
    fn test_mobile_by_agent() {
        let config = FormConfig::default();
        let ipad = "Mozilla/5.0 (iPad; CPU OS 17_0 like Mac OS X)";
        assert!(is_mobile(&config, 1024.0, ipad));
        assert!(is_mobile(&config, 1280.0, "Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)"));
    }

    #[test]
    fn test_keyboard_threshold() {
        let heuristic = KeyboardHeuristic::new(800.0, 150.0);
        assert!(!heuristic.keyboard_open(800.0));
        assert!(!heuristic.keyboard_open(650.0));
        assert!(heuristic.keyboard_open(649.0));
        assert!(heuristic.keyboard_open(400.0));
    }

    #[test]
    fn test_text_entry_tags() {
        assert!(is_text_entry("INPUT"));
        assert!(is_text_entry("TEXTAREA"));
        assert!(!is_text_entry("BUTTON"));
    }
}
