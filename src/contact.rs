//! Contact form state and mailto link construction.
//!
//! The form never talks to a backend: a successful submit hands the visitor
//! a `mailto:` deep link carrying their name in the subject and their
//! message in the body, then clears both fields. A submit with either field
//! blank (after trimming) produces nothing and leaves the draft untouched.

use crate::content::SiteProfile;

/// Subject line prefix for submitted messages.
const SUBJECT_PREFIX: &str = "Message from";

/// Recipient and subject wording for generated mailto links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoTemplate {
    pub recipient: String,
    pub subject_prefix: String,
}

impl MailtoTemplate {
    pub fn for_site(site: &SiteProfile) -> Self {
        Self {
            recipient: site.email.clone(),
            subject_prefix: SUBJECT_PREFIX.to_string(),
        }
    }

    /// Builds the deep link for one submission. Subject and body are
    /// percent-encoded; the recipient lands before the `?` and is left as
    /// typed in the profile.
    pub fn link(&self, name: &str, message: &str) -> MailtoLink {
        let subject = format!("{} {}", self.subject_prefix, name);
        MailtoLink {
            href: format!(
                "mailto:{}?subject={}&body={}",
                self.recipient,
                urlencoding::encode(&subject),
                urlencoding::encode(message),
            ),
        }
    }
}

/// A fully assembled `mailto:` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoLink {
    href: String,
}

impl MailtoLink {
    pub fn href(&self) -> &str {
        &self.href
    }
}

/// Draft state of the two-field contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    name: String,
    message: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, value: &str) {
        self.name = value.to_string();
    }

    pub fn set_message(&mut self, value: &str) {
        self.message = value.to_string();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn is_submittable(&self) -> bool {
        !self.name.trim().is_empty() && !self.message.trim().is_empty()
    }

    /// Explicit submit transition. Returns the mailto link and resets both
    /// fields when the draft is complete; otherwise returns `None` and the
    /// draft is kept exactly as typed.
    pub fn submit(&mut self, template: &MailtoTemplate) -> Option<MailtoLink> {
        if !self.is_submittable() {
            return None;
        }
        let link = template.link(&self.name, &self.message);
        self.name.clear();
        self.message.clear();
        Some(link)
    }
}

/// Browser-side counterpart of [`FormState::submit`], with the recipient and
/// subject prefix baked in. Kept behaviourally in step with the Rust
/// transition: blank fields abort before any side effect, success opens the
/// link and clears the form.
pub fn form_script(template: &MailtoTemplate) -> String {
    format!(
        r#"(function () {{
  var form = document.getElementById('contact-form');
  if (!form) {{ return; }}
  var name = document.getElementById('contact-name');
  var message = document.getElementById('contact-message');
  form.addEventListener('submit', function (event) {{
    event.preventDefault();
    if (!name.value.trim() || !message.value.trim()) {{ return; }}
    var subject = {prefix} + ' ' + name.value;
    var href = 'mailto:' + {recipient}
      + '?subject=' + encodeURIComponent(subject)
      + '&body=' + encodeURIComponent(message.value);
    window.location.href = href;
    name.value = '';
    message.value = '';
  }});
}})();
"#,
        prefix = js_string(&template.subject_prefix),
        recipient = js_string(&template.recipient),
    )
}

// JSON string literals are valid JS string literals, so this is enough to
// bake arbitrary profile text into the script safely.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> MailtoTemplate {
        MailtoTemplate {
            recipient: "hello@jordanblake.dev".to_string(),
            subject_prefix: SUBJECT_PREFIX.to_string(),
        }
    }

    #[test]
    fn test_submit_builds_link_and_resets() {
        let mut form = FormState::new();
        form.set_name("Ada");
        form.set_message("Hello there");

        let link = form.submit(&template()).unwrap();
        assert_eq!(
            link.href(),
            "mailto:hello@jordanblake.dev?subject=Message%20from%20Ada&body=Hello%20there"
        );
        assert_eq!(form.name(), "");
        assert_eq!(form.message(), "");
    }

    #[test]
    fn test_blank_name_blocks_submit_and_keeps_draft() {
        let mut form = FormState::new();
        form.set_name("   ");
        form.set_message("A message I typed out");

        assert!(form.submit(&template()).is_none());
        assert_eq!(form.name(), "   ");
        assert_eq!(form.message(), "A message I typed out");
    }

    #[test]
    fn test_blank_message_blocks_submit() {
        let mut form = FormState::new();
        form.set_name("Ada");
        assert!(form.submit(&template()).is_none());
        assert_eq!(form.name(), "Ada");
    }

    #[test]
    fn test_body_newlines_are_encoded() {
        let link = template().link("Ada", "line one\nline two");
        assert!(link.href().ends_with("&body=line%20one%0Aline%20two"));
    }

    #[test]
    fn test_subject_carries_visitor_name() {
        let link = template().link("Grace Hopper", "hi");
        assert!(link.href().contains("subject=Message%20from%20Grace%20Hopper"));
    }

    #[test]
    fn test_form_script_bakes_recipient() {
        let js = form_script(&template());
        assert!(js.contains("\"hello@jordanblake.dev\""));
        assert!(js.contains("event.preventDefault()"));
        assert!(js.contains("name.value = ''"));
    }
}
