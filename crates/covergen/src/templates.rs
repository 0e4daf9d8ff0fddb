//! Fixed catalog of cover-image prompt templates.
//!
//! Each named style maps to a prompt string parameterized by an "object
//! description" assembled from the lecture's title, category, and a snippet
//! of its summary. No behavior depends on the template beyond string
//! selection; `custom` substitutes a caller-supplied prompt.

use serde::Deserialize;

/// Named prompt style. Unknown names fall back to [`PromptTemplate::Infographic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptTemplate {
    Figurine,
    Plush,
    Crochet,
    #[default]
    Infographic,
    Character,
    RunningDoctor,
    MedicalTribute,
    RemoteLaptop,
    Custom,
}

impl PromptTemplate {
    /// Parse a template name, falling back to the default style for
    /// unknown input (mirrors the lenient behavior the admin UI expects).
    pub fn parse_or_default(name: &str) -> Self {
        serde_json::from_value(serde_json::Value::String(name.to_string())).unwrap_or_default()
    }
}

/// Assemble the object description fed into every template: title, an
/// optional category clause, and the first 150 characters of the summary.
pub fn object_description(title: &str, category: Option<&str>, summary: Option<&str>) -> String {
    let mut description = title.to_string();
    if let Some(category) = category {
        description.push_str(&format!(" related to {category}"));
    }
    if let Some(summary) = summary {
        let snippet: String = summary.chars().take(150).collect();
        let snippet = snippet.trim();
        if !snippet.is_empty() {
            description.push_str(&format!(". Key concept: {snippet}"));
        }
    }
    description
}

/// Select and fill in the prompt for a style.
///
/// `custom_prompt` is only consulted for [`PromptTemplate::Custom`]; when
/// absent, the custom style degrades to the infographic prompt.
pub fn build_prompt(
    template: PromptTemplate,
    description: &str,
    category: Option<&str>,
    custom_prompt: Option<&str>,
) -> String {
    let field = category.unwrap_or("the medical topic");
    match template {
        PromptTemplate::Figurine => format!(
            "Create a realistic medical concept figurine representing \"{description}\" with \
             incredibly detailed textures. The figurine should capture the essence of the medical \
             topic with symbolic elements. Place on a clean, professional base with subtle \
             medical-themed elements (microscopic patterns, DNA helixes, or cellular structures). \
             The figurine has a modern, collectible aesthetic. Studio lighting, high detail, \
             professional photography. NO TEXT visible in the image."
        ),
        PromptTemplate::Plush => format!(
            "A soft, high-quality plush toy representing the medical concept \"{description}\", \
             with an oversized head, small body, and stubby limbs. Made of fuzzy fabric with \
             visible stitching and embroidered features symbolizing the medical topic. The plush \
             is shown sitting against a clean white background. The expression is cute and \
             approachable. Soft, even lighting with a realistic, collectible plush look. Colors \
             appropriate to {}. NO TEXT in the image.",
            category.unwrap_or("medical field")
        ),
        PromptTemplate::Crochet => format!(
            "A close-up, professionally composed photograph showing a handmade crocheted yarn \
             creation representing \"{description}\" being gently held in both hands. The \
             crocheted piece has a rounded, adorable chibi-style appearance with vivid \
             medical-themed color contrasts (blues, whites, reds) and rich details. The hands \
             appear natural and tender with clearly visible finger posture. Soft skin texture and \
             light-shadow transitions. Background is slightly blurred, showing a clean medical \
             office or study environment with natural light, creating a warm, professional \
             atmosphere. NO TEXT visible."
        ),
        PromptTemplate::Infographic => infographic_prompt(description, field),
        PromptTemplate::Character => format!(
            "Create a cute, friendly character mascot representing the medical concept \
             \"{description}\". The character should embody the essence of {} through visual \
             symbolism - wearing appropriate medical attire or incorporating medical symbols into \
             its design. Surrounded by relevant medical icons and elements that float around it. \
             Warm, inviting lighting. Playful yet professional style. Clean background with \
             subtle medical patterns. Family-friendly aesthetic. NO TEXT in the image.",
            category.unwrap_or("medical care")
        ),
        PromptTemplate::RunningDoctor => format!(
            "Flat vector illustration depicting a dynamic scene of digital healthcare efficiency \
             related to \"{description}\". A female doctor with flowing dark purple hair, wearing \
             round glasses, blue scrubs, a white undershirt, and a stethoscope around her neck, \
             is captured in a mid-run pose leaning forward. She holds a red medical clipboard \
             with a white heart icon against her chest with one arm, while her other arm is \
             outstretched, interacting with curved, floating, translucent blue digital interface \
             screens displaying medical waveform data and charts. The background is a clean, \
             minimalist white space with soft blue abstract shapes, featuring a stylized potted \
             plant on the left and loose paper sheets floating in the air to convey motion. The \
             art style is clean, modern, corporate tech-minimalism, with no complex textures and \
             a palette dominated by blues, whites, and accent reds."
        ),
        PromptTemplate::MedicalTribute => format!(
            "Flat vector illustration designed as an appreciation poster for medical staff, \
             representing \"{description}\". Three medical professionals stand confidently \
             side-by-side in a static frontal pose against a solid light mint-green background. \
             In the center, a doctor wears a white lab coat over teal scrubs, a surgical mask, a \
             hairnet, and has a stethoscope around their neck with arms crossed. Flanking them \
             are two nurses in teal scrubs, gloves, masks, and hairnets; the one on the right \
             also wears a clear plastic face shield. Above their heads, large, bold, dark teal \
             text reads \"THANK YOU\", with smaller text below it reading \"DOCTORS AND NURSES\". \
             The style is clean, symmetrical, with simple geometric character shapes and a \
             limited color palette of teals, mints, whites, and peach skin tones."
        ),
        PromptTemplate::RemoteLaptop => format!(
            "Flat vector illustration showing a young woman with long dark blue hair and large \
             round red glasses, smiling while sitting at a desk and using a blue laptop, \
             representing \"{description}\". She wears an orange textured short-sleeve shirt. The \
             scene conveys remote interaction and positivity, characterized by stylized floating \
             icons around her head: yellow chat bubbles with lines, a red heart notification \
             icon, and an orange play button icon. On the desk to her left is an orange mug with \
             blue steam rising; to her right are large stylized green potted plants with golden \
             leaves. The background is composed of soft, abstract purple and blue gradient \
             shapes. The overall aesthetic is cozy, modern, and friendly, utilizing warm oranges \
             and cool blues/purples with a textured noise effect on the shirt only."
        ),
        PromptTemplate::Custom => custom_prompt
            .map(str::to_string)
            .unwrap_or_else(|| infographic_prompt(description, field)),
    }
}

fn infographic_prompt(description: &str, field: &str) -> String {
    format!(
        "Create a clean, modern educational illustration explaining the medical concept of \
         \"{description}\". Visual Elements: Use symbolic icons, diagrams, and visual metaphors \
         to represent key components of {field}. Style: Clean, flat vector illustration with a \
         professional medical aesthetic. Use arrows and visual flow to show relationships and \
         processes. Color palette: Professional medical blues, teals, whites, and appropriate \
         accent colors. Modern, minimalist design suitable for medical education. Geometric \
         shapes and clean lines. NO TEXT OR LABELS in the image - purely visual communication \
         through symbols and icons."
    )
}
