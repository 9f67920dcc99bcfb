pub use langtag::LangTag;

/// Checks if the given string is a well-formed BCP47 language tag.
///
/// Malformed tags are still accepted by the algorithms (with a warning),
/// as JSON-LD 1.0 only requires language values to be strings.
pub fn is_well_formed_lang_tag(s: &str) -> bool {
	LangTag::new(s).is_ok()
}
