//! Static eligibility of literal text for rewriting.

use crate::extensions::ExtensionSet;

/// Decide whether a literal made of `fragments` should be rewritten.
///
/// A plain string is a single fragment; a template literal contributes every
/// quasi. Eligible means at least one fragment contains a recognized
/// extension and no fragment contains `inline_marker`. The inline check wins:
/// an asset the bundler embeds as a data blob never gets a runtime branch.
pub fn is_eligible<'f, I>(fragments: I, extensions: &ExtensionSet, inline_marker: &str) -> bool
where
    I: IntoIterator<Item = &'f str>,
{
    let mut has_extension = false;
    for fragment in fragments {
        if fragment.contains(inline_marker) {
            return false;
        }
        has_extension |= extensions.contains_any(fragment);
    }
    has_extension
}
