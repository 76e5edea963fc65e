//! Template merge engine
//!
//! Rebuilds a template body section by section, swapping in the body of a
//! source section wherever the mapping names one. The output always has
//! the template's section order; the source only donates section bodies.

use crate::domain::mapping::ReplacementMapping;
use crate::domain::section::{extract_sections, find_section, HeaderPattern, Section};

/// Output fragments of a merge, in emission order.
///
/// For every substantive template section this yields the header markup
/// followed by either the mapped source body or the template's own body.
/// Sections with an empty title yield nothing.
pub fn merge_fragments<'a>(
    template_sections: &'a [Section<'a>],
    source_sections: &'a [Section<'a>],
    mapping: &'a ReplacementMapping,
) -> impl Iterator<Item = &'a str> + 'a {
    template_sections
        .iter()
        .filter(|section| section.is_substantive())
        .flat_map(move |section| {
            let body = replacement_body(section, source_sections, mapping);
            [section.header_markup, body]
        })
}

fn replacement_body<'a>(
    section: &Section<'a>,
    source_sections: &'a [Section<'a>],
    mapping: &ReplacementMapping,
) -> &'a str {
    let Some(source_title) = mapping.source_for(section.title) else {
        return section.body;
    };

    match find_section(source_sections, source_title) {
        Some(source) => source.body,
        None => {
            tracing::warn!(
                template_section = section.title,
                source_section = source_title,
                "source section not found, keeping template content"
            );
            section.body
        }
    }
}

/// Merge `source_body` into `template_body` according to `mapping`
pub fn merge(
    template_body: &str,
    source_body: &str,
    mapping: &ReplacementMapping,
    pattern: &HeaderPattern,
) -> String {
    let template_sections = extract_sections(template_body, pattern);
    let source_sections = extract_sections(source_body, pattern);

    tracing::debug!(
        template_sections = template_sections.len(),
        source_sections = source_sections.len(),
        rules = mapping.len(),
        "merging sections"
    );

    merge_fragments(&template_sections, &source_sections, mapping).collect()
}
