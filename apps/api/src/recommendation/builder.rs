//! Request Builder — renders a `UserProfile` into the recommendation prompt.
//!
//! Field text is substituted verbatim. Nothing is escaped, so a free-text field
//! can steer the model; the form is trusted input.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::models::profile::UserProfile;
use crate::recommendation::prompts::{RECOMMENDATION_PROMPT_TEMPLATE, TAGGED_FORMAT_INSTRUCTION};

static SLOT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{([a-z_]+)\}").unwrap());

/// Which reply shape the prompt asks the model for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseFormat {
    /// The bare template; replies use `Restaurants:`-style markers.
    #[default]
    Legacy,
    /// The template plus an instruction to wrap each section in tags.
    Tagged,
}

/// Substitutes the profile into `template` in a single pass, so text inside a
/// field is never itself treated as a slot. Unknown slots are left as written.
pub fn render_prompt(template: &str, profile: &UserProfile) -> String {
    SLOT.replace_all(template, |caps: &Captures| {
        slot_value(&caps[1], profile).unwrap_or_else(|| caps[0].to_string())
    })
    .into_owned()
}

/// Builds the full prompt sent to the completion endpoint.
pub fn build_prompt(profile: &UserProfile, format: ResponseFormat) -> String {
    let prompt = render_prompt(RECOMMENDATION_PROMPT_TEMPLATE, profile);
    match format {
        ResponseFormat::Legacy => prompt,
        ResponseFormat::Tagged => prompt + TAGGED_FORMAT_INSTRUCTION,
    }
}

fn slot_value(slot: &str, profile: &UserProfile) -> Option<String> {
    let value = match slot {
        "age" => profile.age.to_string(),
        "gender" => profile.gender.to_string(),
        "weight" => profile.weight.to_string(),
        "height" => profile.height.to_string(),
        "veg_or_nonveg" => profile.diet_preference.to_string(),
        "address" => profile.address.clone(),
        "allergies" => profile.allergies.clone(),
        _ => return None,
    };
    Some(value)
}
