use std::env;

use serde::{Deserialize, Serialize};

use crate::buffer::GrowMode;

pub(crate) const DEFAULT_CAPACITY: usize = 20;

/// バッファ構築時の設定
///
/// プロセス全体で共有される既定値オブジェクトは存在しない。構築のたびに
/// この値を明示的に渡す。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferConfig {
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    #[serde(default)]
    pub grow_mode: GrowMode,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            grow_mode: GrowMode::default(),
        }
    }
}

impl BufferConfig {
    /// `CIRCQ_CAPACITY` / `CIRCQ_GROW_MODE` から設定を組み立てる。
    /// 未設定・解釈不能な値は既定値に倒す。
    pub fn from_env() -> Self {
        let capacity = env::var("CIRCQ_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CAPACITY);

        let grow_mode = env::var("CIRCQ_GROW_MODE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        Self {
            capacity,
            grow_mode,
        }
    }
}
