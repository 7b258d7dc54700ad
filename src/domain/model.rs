use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::path::PathBuf;

/// 詞典中的一個詞條。
///
/// 整個 JSON 物件原樣保存在有序的 `fields` 中，序列化時鍵的順序與數值文字都不變。
/// `name` 必須是字串；`ukphone` 保留原始 JSON 值，直到排序階段才轉成整數。
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Entry {
    name: String,
    fields: Map<String, Value>,
}

impl Entry {
    pub fn new(name: impl Into<String>, ukphone: impl Into<Value>) -> Self {
        let name = name.into();
        let mut fields = Map::new();
        fields.insert("name".to_string(), Value::String(name.clone()));
        fields.insert("ukphone".to_string(), ukphone.into());
        Self { name, fields }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if key != "name" {
            self.fields.insert(key, value.into());
        }
        self
    }

    pub fn without_field(mut self, key: &str) -> Self {
        if key != "name" {
            self.fields.shift_remove(key);
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `None` when the field is absent or `null`.
    pub fn ukphone(&self) -> Option<&Value> {
        self.fields.get("ukphone").filter(|v| !v.is_null())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_name(self) -> String {
        self.name
    }
}

impl TryFrom<Map<String, Value>> for Entry {
    type Error = String;

    fn try_from(fields: Map<String, Value>) -> std::result::Result<Self, Self::Error> {
        let name = match fields.get("name") {
            Some(Value::String(name)) => name.clone(),
            Some(other) => return Err(format!("`name` must be a string, found {}", other)),
            None => return Err("missing field `name`".to_string()),
        };
        Ok(Self { name, fields })
    }
}

impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

/// `ukphone` 連續缺漏的閉區間
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapRange {
    pub start: i64,
    pub end: i64,
}

impl GapRange {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Number of missing integers covered by the range.
    pub fn missing_count(&self) -> u64 {
        self.end.abs_diff(self.start) + 1
    }
}

#[derive(Debug, Clone)]
pub struct NormalizedDictionary {
    pub entries: Vec<Entry>,
    pub duplicates_removed: usize,
    pub missing_ranges: Vec<GapRange>,
}

impl NormalizedDictionary {
    pub fn total_entries(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizeReport {
    pub total_entries: usize,
    pub duplicates_removed: usize,
    pub missing_ranges: Vec<GapRange>,
    /// `None` when the run skipped persisting (dry run).
    pub output_path: Option<PathBuf>,
}
