//! GoDaddy TXT 记录操作

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::{ErrorContext, TxtRecordProvider};
use crate::types::TxtRecord;

use super::{DeleteMatch, GodaddyProvider};

impl GodaddyProvider {
    /// 域名全量记录端点（PATCH 为 add-or-merge）
    fn records_path(&self) -> String {
        format!("/v1/domains/{}/records", self.domain)
    }

    /// 域名 TXT 记录集端点（GET 为全量读取，PUT 为整体覆盖）
    fn txt_records_path(&self) -> String {
        format!("/v1/domains/{}/records/TXT", self.domain)
    }

    fn error_context(&self, name: &str) -> ErrorContext {
        ErrorContext {
            domain: Some(self.domain.clone()),
            record_name: Some(name.to_string()),
        }
    }
}

/// 从记录集中剔除同名记录，保持其余记录的相对顺序
///
/// 无匹配时返回 `None`，调用方据此跳过回写。
fn remove_named(records: Vec<TxtRecord>, name: &str, mode: DeleteMatch) -> Option<Vec<TxtRecord>> {
    match mode {
        DeleteMatch::First => {
            let index = records.iter().position(|r| r.name == name)?;
            let mut remaining = records;
            remaining.remove(index);
            Some(remaining)
        }
        DeleteMatch::All => {
            if !records.iter().any(|r| r.name == name) {
                return None;
            }
            Some(records.into_iter().filter(|r| r.name != name).collect())
        }
    }
}

#[async_trait]
impl TxtRecordProvider for GodaddyProvider {
    async fn get_txt_records(&self, name: &str) -> Result<Vec<TxtRecord>> {
        let path = format!("{}/{}", self.txt_records_path(), urlencoding::encode(name));
        self.get(&path, self.error_context(name)).await
    }

    async fn add_txt_record(&self, name: &str, value: &str) -> Result<()> {
        let records = vec![TxtRecord::new(name, value)];
        self.patch(&self.records_path(), &records, self.error_context(name))
            .await
    }

    /// 按名称删除 TXT 记录
    ///
    /// read-modify-write：读出全量 TXT 记录集，内存中剔除目标，
    /// 整体 PUT 回写。记录不存在时直接返回 `Ok`，不发起写请求。
    /// 丢失更新风险见模块文档。
    async fn delete_txt_record(&self, name: &str) -> Result<()> {
        let _guard = self.delete_lock.lock().await;

        let path = self.txt_records_path();
        let records: Vec<TxtRecord> = self.get(&path, self.error_context(name)).await?;

        let Some(remaining) = remove_named(records, name, self.delete_match) else {
            log::debug!("[godaddy] TXT record not found, nothing to delete: {name}");
            return Ok(());
        };

        self.put(&path, &remaining, self.error_context(name)).await
    }
}
