use std::collections::HashSet;
use std::rc::Rc;

use yew::Reducible;

/// Header visibility after a scroll event moved the offset from `prev_y` to `y`.
///
/// At the very top the header is always shown. Otherwise scrolling down hides
/// it and scrolling up (or staying put) brings it back.
pub fn header_visible_after(prev_y: f64, y: f64) -> bool {
    if y <= 0.0 {
        true
    } else {
        y <= prev_y
    }
}

/// Sections that have scrolled into view at least once.
///
/// Insert-only for the lifetime of the page: once a section has revealed, it
/// stays revealed. The hero is visible from the first paint, so it is seeded.
#[derive(Clone, PartialEq)]
pub struct RevealedSections {
    sections: HashSet<String>,
}

impl Default for RevealedSections {
    fn default() -> Self {
        let mut sections = HashSet::new();
        sections.insert("hero".to_string());
        Self { sections }
    }
}

impl RevealedSections {
    pub fn contains(&self, section: &str) -> bool {
        self.sections.contains(section)
    }

    pub fn count(&self) -> usize {
        self.sections.len()
    }
}

impl Reducible for RevealedSections {
    type Action = String;

    fn reduce(self: Rc<Self>, section: String) -> Rc<Self> {
        if self.sections.contains(&section) {
            self
        } else {
            let mut next = (*self).clone();
            next.sections.insert(section);
            Rc::new(next)
        }
    }
}

/// Section id carried by a URL fragment, e.g. `"#about"` -> `Some("about")`.
/// Empty or bare `#` fragments carry none.
pub fn section_from_hash(hash: &str) -> Option<&str> {
    let section = hash.strip_prefix('#').unwrap_or(hash);
    if section.is_empty() {
        None
    } else {
        Some(section)
    }
}

/// CSS background value for the pointer-tracked gradient on the archive page.
pub fn pointer_gradient(x: i32, y: i32) -> String {
    format!(
        "radial-gradient(circle at {}px {}px, rgba(0, 255, 133, 0.06), transparent 50%)",
        x, y
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_shown_at_top() {
        assert!(header_visible_after(120.0, 0.0));
        assert!(header_visible_after(0.0, -5.0));
    }

    #[test]
    fn header_hidden_scrolling_down_shown_scrolling_up() {
        assert!(!header_visible_after(50.0, 120.0));
        assert!(header_visible_after(120.0, 80.0));
        // unchanged offset keeps the header visible
        assert!(header_visible_after(80.0, 80.0));
    }

    #[test]
    fn header_visibility_sequence() {
        let offsets = [0.0, 50.0, 120.0, 80.0];
        let mut prev = 0.0;
        let mut seen = Vec::new();
        for y in offsets {
            seen.push(header_visible_after(prev, y));
            prev = y;
        }
        assert_eq!(seen, vec![true, false, false, true]);
    }

    #[test]
    fn revealed_sections_start_with_hero() {
        let revealed = RevealedSections::default();
        assert!(revealed.contains("hero"));
        assert!(!revealed.contains("about"));
    }

    #[test]
    fn revealed_sections_only_grow() {
        let mut revealed = Rc::new(RevealedSections::default());
        for section in ["about", "experience", "about", "work", "contact"] {
            let before: Vec<String> = ["hero", "about", "experience", "work", "contact"]
                .iter()
                .filter(|s| revealed.contains(s))
                .map(|s| s.to_string())
                .collect();
            revealed = revealed.reduce(section.to_string());
            for s in &before {
                assert!(revealed.contains(s), "{s} was dropped from the set");
            }
        }
        assert_eq!(revealed.count(), 5);
    }

    #[test]
    fn repeated_reveal_is_a_no_op() {
        let revealed = Rc::new(RevealedSections::default());
        let once = revealed.reduce("work".to_string());
        let twice = once.clone().reduce("work".to_string());
        assert!(Rc::ptr_eq(&once, &twice));
    }

    #[test]
    fn fragment_resolves_to_a_section() {
        assert_eq!(section_from_hash("#about"), Some("about"));
        assert_eq!(section_from_hash("#contact"), Some("contact"));
        // bare or absent fragments request no section
        assert_eq!(section_from_hash("#"), None);
        assert_eq!(section_from_hash(""), None);
    }

    #[test]
    fn gradient_follows_the_pointer() {
        let css = pointer_gradient(200, 150);
        assert!(css.contains("circle at 200px 150px"));
        assert!(css.starts_with("radial-gradient("));
        assert!(css.contains("rgba(0, 255, 133, 0.06)"));
    }
}
