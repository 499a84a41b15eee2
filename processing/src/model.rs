use std::error::Error;

pub type Points = i64;
pub type RecordId = String;

pub type GenericError = Box<dyn Error + Send + Sync>;

/// A payload the engine can score: anything able to flatten itself into
/// named features.
pub trait Processible: Send + Sync {
    fn extract_features(&self) -> Vec<Feature>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    Int(i64),
    String(String),
    StringList(Vec<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub name: String,
    pub value: Box<FeatureValue>,
}

/// Looks up a feature by name. Rules use this instead of indexing so the
/// extraction order stays irrelevant.
pub fn find_feature<'a>(features: &'a [Feature], name: &str) -> Option<&'a FeatureValue> {
    features.iter().find(|f| f.name == name).map(|f| &*f.value)
}

/// One fired rule: its display name and the points it contributed.
#[derive(Debug, Clone, PartialEq)]
pub struct ScorerResult {
    pub name: String,
    pub score: Points,
}
