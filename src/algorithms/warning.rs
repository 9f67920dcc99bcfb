/// Non-fatal anomaly detected while processing a document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Warning {
	#[error("keyword-like term `{0}`")]
	KeywordLikeTerm(String),

	#[error("key `{0}` does not expand to an absolute IRI and is dropped")]
	DroppedKey(String),

	#[error("malformed language tag `{0}`")]
	MalformedLanguageTag(String),
}

/// Logs the given warning.
pub fn log_warning(w: Warning) {
	log::warn!("{w}")
}
