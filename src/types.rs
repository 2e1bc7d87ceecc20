//! 公共记录类型

use serde::{Deserialize, Serialize};

/// TXT 记录的 type 字段取值
pub const TXT_RECORD_TYPE: &str = "TXT";

/// 域名下的一条 TXT 记录
///
/// `name` 是记录所属的主机标签（如 `_acme-challenge`），
/// `data` 是记录值。`ttl` 缺省时由服务端指定。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxtRecord {
    pub data: String,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

impl TxtRecord {
    /// 构造一条待写入的 TXT 记录（ttl 留空，由服务端指定）
    pub fn new(name: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            name: name.into(),
            record_type: TXT_RECORD_TYPE.to_string(),
            ttl: None,
        }
    }
}
