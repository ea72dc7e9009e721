//! Reusable prompts using Handlebars for templating. Handlebars adds
//! additional security controls since it can't do much out of the box
//! without registering your own helpers, which keeps untrusted document
//! text and user input inert during rendering.

use std::fmt;

use handlebars::Handlebars;

#[derive(Debug)]
pub enum Prompt {
    ContextQuestion,
    ProfileNotification,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// Triple-stache keeps document text and the question verbatim; the
// completion API expects the raw content, not HTML-escaped text.
const CONTEXT_QUESTION_PROMPT: &str =
    "{{#each documents}}{{label}}:\n{{{text}}}\n\n{{/each}}Question: {{{question}}}";

const PROFILE_NOTIFICATION_PROMPT: &str = "New Student Profile Submitted:

Name: {{{name}}}
Email: {{{email}}}
Contact No.: {{{contact_number}}}
Area of Interest: {{{area_of_interest}}}
Course: {{{course}}}
Training Mode: {{{training_mode}}}
Preferred Contact Mode: {{{contact_mode}}}
";

pub fn templates<'a>() -> Handlebars<'a> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry
        .register_template_string(&Prompt::ContextQuestion.to_string(), CONTEXT_QUESTION_PROMPT)
        .expect("Failed to register template");
    registry
        .register_template_string(
            &Prompt::ProfileNotification.to_string(),
            PROFILE_NOTIFICATION_PROMPT,
        )
        .expect("Failed to register template");
    registry
}
