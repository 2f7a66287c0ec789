use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// owner / repo_name 允许的最大字符数
pub const MAX_NAME_LEN: usize = 100;

/// 仓库记录 ID 值对象
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepositoryId(Uuid);

impl RepositoryId {
    /// 生成新的随机 ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// 解析路径参数；不是合法 UUID 时返回 None
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw).ok().map(Self)
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

fn check_length(field: &str, value: &str) -> Result<(), String> {
    let len = value.chars().count();
    if len == 0 {
        return Err(format!("{} must not be empty", field));
    }
    if len > MAX_NAME_LEN {
        return Err(format!(
            "{} must be at most {} characters, got {}",
            field, MAX_NAME_LEN, len
        ));
    }
    // 存储层的 length() 遇到 NUL 即截断，控制字符一律拒绝
    if value.chars().any(char::is_control) {
        return Err(format!("{} must not contain control characters", field));
    }
    Ok(())
}

/// 仓库所有者值对象（1..=100 个字符）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Owner(String);

impl Owner {
    pub fn new(owner: String) -> Result<Self, String> {
        check_length("owner", &owner)?;
        Ok(Self(owner))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 仓库名称值对象（1..=100 个字符）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoName(String);

impl RepoName {
    pub fn new(name: String) -> Result<Self, String> {
        check_length("repo_name", &name)?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RepoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
