//! ルール設定ファイル（TOML）の読み込み

use std::path::Path;

use anyhow::{Context, Result};
use rxiangqi_core::Rules;

/// TOML ファイルからルールを読む。指定がなければ既定のルール
///
/// 省略したキーは既定値になる。
pub fn load_rules(path: Option<&Path>) -> Result<Rules> {
    let Some(path) = path else {
        return Ok(Rules::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read rules file {}", path.display()))?;
    let rules: Rules = toml::from_str(&text)
        .with_context(|| format!("failed to parse rules file {}", path.display()))?;
    log::info!("rules loaded from {}: {rules:?}", path.display());
    Ok(rules)
}
