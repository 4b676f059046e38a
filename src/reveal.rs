//! Entry animation - one-shot scroll reveal for tiles.
//!
//! Each tile starts `Pending` and becomes `Revealed` the first time it
//! crosses the viewport trigger line; the transition never fires twice and
//! never runs backwards. The state machine here is the contract; the
//! generated stylesheet and IntersectionObserver script implement the same
//! transition in the browser, from the same constants, so the two cannot
//! drift apart.
//!
//! Reveal is purely cosmetic. Tiles are always present in the HTML and the
//! accessibility tree; without scripting the stylesheet leaves them visible.

/// Per-tile reveal lifecycle: `Pending -> Revealed`, exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Pending,
    Revealed,
}

impl RevealState {
    pub fn new() -> Self {
        Self::Pending
    }

    /// Viewport-intersection notification. The first call reveals the tile
    /// and returns true; every later call is a no-op returning false.
    pub fn on_intersect(&mut self) -> bool {
        match self {
            RevealState::Pending => {
                *self = RevealState::Revealed;
                true
            }
            RevealState::Revealed => false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self, RevealState::Revealed)
    }
}

/// Animation constants shared by the stylesheet and the observer script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealConfig {
    /// Vertical offset a tile rises from, in px.
    pub rise_px: u32,
    /// Transition duration, in ms.
    pub duration_ms: u32,
    /// Trigger line as a fraction of viewport height from the top: a tile
    /// reveals once its top crosses this line (80 = "top 80%").
    pub trigger_percent: u8,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            rise_px: 24,
            duration_ms: 800,
            trigger_percent: 80,
        }
    }
}

impl RevealConfig {
    fn duration_secs(&self) -> f64 {
        f64::from(self.duration_ms) / 1000.0
    }

    /// Bottom root margin that turns the trigger line into an
    /// IntersectionObserver boundary: "top 80%" means the bottom 20% of the
    /// viewport does not count as visible yet.
    fn root_margin(&self) -> String {
        format!("0px 0px -{}% 0px", 100 - u32::from(self.trigger_percent))
    }

    /// Reveal rules appended to the site stylesheet. Pre-reveal hiding is
    /// scoped under `.js` so tiles stay visible when scripting is off, and
    /// disabled entirely under prefers-reduced-motion.
    pub fn stylesheet(&self) -> String {
        format!(
            r#".js .reveal {{
  opacity: 0;
  transform: translateY({rise}px);
  transition: opacity {dur}s ease, transform {dur}s ease;
}}
.js .reveal.revealed {{
  opacity: 1;
  transform: none;
}}
@media (prefers-reduced-motion: reduce) {{
  .js .reveal {{
    opacity: 1;
    transform: none;
    transition: none;
  }}
}}
"#,
            rise = self.rise_px,
            dur = self.duration_secs(),
        )
    }

    /// The observer script. Unobserves each tile on its first intersection,
    /// which is what makes the browser-side transition one-shot.
    pub fn script(&self) -> String {
        format!(
            r#"(function () {{
  document.documentElement.classList.add('js');
  var tiles = document.querySelectorAll('.reveal');
  if (!('IntersectionObserver' in window)) {{
    tiles.forEach(function (el) {{ el.classList.add('revealed'); }});
    return;
  }}
  var observer = new IntersectionObserver(function (entries) {{
    entries.forEach(function (entry) {{
      if (entry.isIntersecting) {{
        entry.target.classList.add('revealed');
        observer.unobserve(entry.target);
      }}
    }});
  }}, {{ rootMargin: '{margin}' }});
  tiles.forEach(function (el) {{ observer.observe(el); }});
}})();
"#,
            margin = self.root_margin(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_fires_exactly_once() {
        let mut state = RevealState::new();
        assert!(!state.is_revealed());
        assert!(state.on_intersect());
        assert!(state.is_revealed());
        // Scrolling past and back re-notifies; nothing happens.
        assert!(!state.on_intersect());
        assert!(!state.on_intersect());
        assert!(state.is_revealed());
    }

    #[test]
    fn test_default_constants() {
        let cfg = RevealConfig::default();
        assert_eq!(cfg.rise_px, 24);
        assert_eq!(cfg.duration_ms, 800);
        assert_eq!(cfg.trigger_percent, 80);
    }

    #[test]
    fn test_stylesheet_embeds_constants() {
        let css = RevealConfig::default().stylesheet();
        assert!(css.contains("translateY(24px)"));
        assert!(css.contains("opacity 0.8s ease"));
        assert!(css.contains("prefers-reduced-motion"));
    }

    #[test]
    fn test_script_embeds_trigger_margin_and_unobserves() {
        let js = RevealConfig::default().script();
        assert!(js.contains("rootMargin: '0px 0px -20% 0px'"));
        assert!(js.contains("observer.unobserve(entry.target)"));
    }

    #[test]
    fn test_custom_trigger_percent() {
        let cfg = RevealConfig {
            trigger_percent: 65,
            ..RevealConfig::default()
        };
        assert!(cfg.script().contains("-35% 0px"));
    }
}
