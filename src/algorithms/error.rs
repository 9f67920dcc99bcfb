use iref::IriBuf;
use serde_json::Value;

use crate::{ErrorCode, LoadError, ProcessingMode};

/// Processing error.
///
/// Any of these aborts the whole operation: there is no partial output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Cyclic IRI mapping on term `{0}`")]
	CyclicIriMapping(String),

	#[error("Keyword `{0}` cannot be redefined")]
	KeywordRedefinition(String),

	#[error("Invalid IRI mapping for term `{0}`")]
	InvalidIriMapping(String),

	#[error("Invalid type mapping for term `{0}`")]
	InvalidTypeMapping(String),

	#[error("Invalid container mapping for term `{0}`")]
	InvalidContainerMapping(String),

	#[error("Invalid language mapping for term `{0}`")]
	InvalidLanguageMapping(String),

	#[error("Invalid base IRI `{0}`")]
	InvalidBaseIri(Value),

	#[error("Invalid vocabulary mapping `{0}`")]
	InvalidVocabMapping(Value),

	#[error("Invalid keyword alias `{0}`")]
	InvalidKeywordAlias(String),

	#[error("Recursive inclusion of remote context `{0}`")]
	RecursiveContextInclusion(IriBuf),

	#[error("Invalid remote context `{0}`")]
	InvalidRemoteContext(IriBuf),

	#[error("Invalid local context `{0}`")]
	InvalidLocalContext(Value),

	#[error("Invalid default language `{0}`")]
	InvalidDefaultLanguage(Value),

	#[error("Invalid reverse property `{0}`")]
	InvalidReverseProperty(String),

	#[error("Invalid term definition for `{0}`")]
	InvalidTermDefinition(String),

	#[error("Invalid `@version` value `{0}`")]
	InvalidVersionValue(Value),

	#[error("Context requires JSON-LD 1.1 while processing in `{0}` mode")]
	ProcessingModeConflict(ProcessingMode),

	#[error("Too many nested remote contexts")]
	ContextOverflow,

	#[error("Unable to load remote context: {0}")]
	LoadingRemoteContextFailed(#[from] LoadError),

	#[error("List of lists")]
	ListOfLists,

	#[error("Colliding keywords on `{0}`")]
	CollidingKeywords(String),

	#[error("Invalid value object: {0}")]
	InvalidValueObject(&'static str),

	#[error("Invalid `@value` value `{0}`")]
	InvalidValueObjectValue(Value),

	#[error("Invalid typed value `{0}`")]
	InvalidTypedValue(Value),

	#[error("Invalid set or list object")]
	InvalidSetOrListObject,

	#[error("Invalid `@reverse` value")]
	InvalidReverseValue,

	#[error("Invalid `@reverse` property value")]
	InvalidReversePropertyValue,

	#[error("Invalid `@reverse` property map")]
	InvalidReversePropertyMap,

	#[error("Invalid `@index` value `{0}`")]
	InvalidIndexValue(Value),

	#[error("Invalid `@id` value `{0}`")]
	InvalidIdValue(Value),

	#[error("Invalid `@type` value `{0}`")]
	InvalidTypeValue(Value),

	#[error("Invalid `@language` map value `{0}`")]
	InvalidLanguageMapValue(Value),

	#[error("Invalid language-tagged string `{0}`")]
	InvalidLanguageTaggedString(Value),

	#[error("Invalid language-tagged value `{0}`")]
	InvalidLanguageTaggedValue(Value),

	#[error("Conflicting indexes on node `{0}`")]
	ConflictingIndexes(String),

	#[error("Invalid `@embed` value `{0}`")]
	InvalidEmbedValue(Value),

	#[error("Invalid frame: {0}")]
	InvalidFrame(&'static str),

	#[error("Compaction of `{0}` to list of lists")]
	CompactionToListOfLists(String),
}

impl Error {
	pub fn code(&self) -> ErrorCode {
		match self {
			Self::CyclicIriMapping(_) => ErrorCode::CyclicIriMapping,
			Self::KeywordRedefinition(_) => ErrorCode::KeywordRedefinition,
			Self::InvalidIriMapping(_) => ErrorCode::InvalidIriMapping,
			Self::InvalidTypeMapping(_) => ErrorCode::InvalidTypeMapping,
			Self::InvalidContainerMapping(_) => ErrorCode::InvalidContainerMapping,
			Self::InvalidLanguageMapping(_) => ErrorCode::InvalidLanguageMapping,
			Self::InvalidBaseIri(_) => ErrorCode::InvalidBaseIri,
			Self::InvalidVocabMapping(_) => ErrorCode::InvalidVocabMapping,
			Self::InvalidKeywordAlias(_) => ErrorCode::InvalidKeywordAlias,
			Self::RecursiveContextInclusion(_) => ErrorCode::RecursiveContextInclusion,
			Self::InvalidRemoteContext(_) => ErrorCode::InvalidRemoteContext,
			Self::InvalidLocalContext(_) => ErrorCode::InvalidLocalContext,
			Self::InvalidDefaultLanguage(_) => ErrorCode::InvalidDefaultLanguage,
			Self::InvalidReverseProperty(_) => ErrorCode::InvalidReverseProperty,
			Self::InvalidTermDefinition(_) => ErrorCode::InvalidTermDefinition,
			Self::InvalidVersionValue(_) => ErrorCode::InvalidVersionValue,
			Self::ProcessingModeConflict(_) => ErrorCode::ProcessingModeConflict,
			Self::ContextOverflow => ErrorCode::ContextOverflow,
			Self::LoadingRemoteContextFailed(_) => ErrorCode::LoadingRemoteContextFailed,
			Self::ListOfLists => ErrorCode::ListOfLists,
			Self::CollidingKeywords(_) => ErrorCode::CollidingKeywords,
			Self::InvalidValueObject(_) => ErrorCode::InvalidValueObject,
			Self::InvalidValueObjectValue(_) => ErrorCode::InvalidValueObjectValue,
			Self::InvalidTypedValue(_) => ErrorCode::InvalidTypedValue,
			Self::InvalidSetOrListObject => ErrorCode::InvalidSetOrListObject,
			Self::InvalidReverseValue => ErrorCode::InvalidReverseValue,
			Self::InvalidReversePropertyValue => ErrorCode::InvalidReversePropertyValue,
			Self::InvalidReversePropertyMap => ErrorCode::InvalidReversePropertyMap,
			Self::InvalidIndexValue(_) => ErrorCode::InvalidIndexValue,
			Self::InvalidIdValue(_) => ErrorCode::InvalidIdValue,
			Self::InvalidTypeValue(_) => ErrorCode::InvalidTypeValue,
			Self::InvalidLanguageMapValue(_) => ErrorCode::InvalidLanguageMapValue,
			Self::InvalidLanguageTaggedString(_) => ErrorCode::InvalidLanguageTaggedString,
			Self::InvalidLanguageTaggedValue(_) => ErrorCode::InvalidLanguageTaggedValue,
			Self::ConflictingIndexes(_) => ErrorCode::ConflictingIndexes,
			Self::InvalidEmbedValue(_) => ErrorCode::InvalidEmbedValue,
			Self::InvalidFrame(_) => ErrorCode::InvalidFrame,
			Self::CompactionToListOfLists(_) => ErrorCode::CompactionToListOfLists,
		}
	}
}

pub type Result<T> = std::result::Result<T, Error>;
